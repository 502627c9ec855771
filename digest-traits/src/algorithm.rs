use core::fmt;
use core::str::FromStr;

use crate::digest::ErrorKind;

/// Output family of a SHA-3 variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Family {
    /// Output length is fixed by the algorithm.
    FixedOutput,
    /// Output length is chosen by the caller (XOF).
    ExtendableOutput,
}

/// The SHA-3 family members exercised by the harness.
///
/// The declaration order is the report order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Algorithm {
    Shake128Xof,
    Shake256Xof,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Shake128Xof,
        Algorithm::Shake256Xof,
        Algorithm::Sha3_224,
        Algorithm::Sha3_256,
        Algorithm::Sha3_384,
        Algorithm::Sha3_512,
    ];

    /// Canonical lowercase name, used verbatim in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Shake128Xof => "shake128-xof",
            Algorithm::Shake256Xof => "shake256-xof",
            Algorithm::Sha3_224 => "sha3-224",
            Algorithm::Sha3_256 => "sha3-256",
            Algorithm::Sha3_384 => "sha3-384",
            Algorithm::Sha3_512 => "sha3-512",
        }
    }

    pub const fn family(self) -> Family {
        match self {
            Algorithm::Shake128Xof | Algorithm::Shake256Xof => Family::ExtendableOutput,
            _ => Family::FixedOutput,
        }
    }

    pub const fn is_xof(self) -> bool {
        matches!(self.family(), Family::ExtendableOutput)
    }

    /// Output size in bytes of a fixed-output algorithm, `None` for XOFs.
    pub const fn fixed_output_size(self) -> Option<usize> {
        match self {
            Algorithm::Sha3_224 => Some(28),
            Algorithm::Sha3_256 => Some(32),
            Algorithm::Sha3_384 => Some(48),
            Algorithm::Sha3_512 => Some(64),
            Algorithm::Shake128Xof | Algorithm::Shake256Xof => None,
        }
    }

    /// Number of bytes a provider must produce for this algorithm.
    ///
    /// Fixed-output algorithms ignore `xof_len`. Extendable-output algorithms
    /// produce exactly `xof_len` bytes, and a zero length is rejected with
    /// [`ErrorKind::InvalidOutputSize`].
    pub fn output_size(self, xof_len: usize) -> Result<usize, ErrorKind> {
        match self.fixed_output_size() {
            Some(size) => Ok(size),
            None if xof_len == 0 => Err(ErrorKind::InvalidOutputSize),
            None => Ok(xof_len),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm `{}`", self.0)?;
        f.write_str(" (expected one of: ")?;
        for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(algorithm.name())?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Which provider produced an observation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Source {
    /// The trusted, independently implemented library.
    Reference,
    /// The implementation under test.
    Candidate,
}

impl Source {
    pub const fn name(self) -> &'static str {
        match self {
            Source::Reference => "reference",
            Source::Candidate => "candidate",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
