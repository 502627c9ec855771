use core::fmt::{self, Debug};
use core::ops::Deref;

use crate::algorithm::{Algorithm, Source};

/// Common error kinds for digest providers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The algorithm is not offered by this provider.
    UnsupportedAlgorithm,
    /// The requested output length is not valid for the algorithm.
    InvalidOutputSize,
    /// Failed to allocate the output buffer.
    MemoryAllocationFailure,
    /// The provider could not be set up (e.g. an entry point is missing).
    InitializationError,
    /// The underlying implementation failed or broke its output contract.
    ComputationError,
}

impl ErrorKind {
    /// Whether the harness must stop the whole run on this kind.
    pub const fn is_fatal(self) -> bool {
        matches!(
            self,
            ErrorKind::MemoryAllocationFailure
                | ErrorKind::InitializationError
                | ErrorKind::InvalidOutputSize
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ErrorKind::UnsupportedAlgorithm => "unsupported algorithm",
            ErrorKind::InvalidOutputSize => "invalid output size",
            ErrorKind::MemoryAllocationFailure => "memory allocation failure",
            ErrorKind::InitializationError => "initialization error",
            ErrorKind::ComputationError => "computation error",
        };
        f.write_str(msg)
    }
}

/// Trait for converting implementation-specific errors into a common error kind.
pub trait Error: Debug {
    /// Returns a generic error kind corresponding to the specific error.
    fn kind(&self) -> ErrorKind;
}

impl Error for core::convert::Infallible {
    fn kind(&self) -> ErrorKind {
        match *self {}
    }
}

impl Error for ErrorKind {
    fn kind(&self) -> ErrorKind {
        *self
    }
}

/// Trait for types that associate with a specific error type.
pub trait ErrorType {
    /// The associated error type.
    type Error: Error;
}

/// An immutable digest value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest(Box<[u8]>);

impl Digest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex, two characters per byte, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Deref for Digest {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl From<&[u8]> for Digest {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }
}

impl<const N: usize> From<[u8; N]> for Digest {
    fn from(bytes: [u8; N]) -> Self {
        Self(Box::new(bytes))
    }
}

/// One-shot digest computation for every algorithm a provider supports.
///
/// Implementations must be deterministic and must return exactly
/// [`Algorithm::output_size`] bytes. Fixed-output algorithms ignore
/// `xof_len`.
///
/// ```rust
/// use digest_traits::{Algorithm, Digest, DigestProvider, ErrorKind, ErrorType, Source};
///
/// struct Zeroes;
///
/// impl ErrorType for Zeroes {
///     type Error = ErrorKind;
/// }
///
/// impl DigestProvider for Zeroes {
///     fn source(&self) -> Source {
///         Source::Candidate
///     }
///
///     fn supported_algorithms(&self) -> &[Algorithm] {
///         &Algorithm::ALL
///     }
///
///     fn compute(&self, algorithm: Algorithm, _input: &[u8], xof_len: usize) -> Result<Digest, ErrorKind> {
///         let size = algorithm.output_size(xof_len)?;
///         Ok(Digest::from(vec![0u8; size]))
///     }
/// }
///
/// let digest = Zeroes.compute(Algorithm::Sha3_384, b"foo bar", 0)?;
/// assert_eq!(digest.len(), 48);
/// assert!(Zeroes.compute(Algorithm::Shake128Xof, b"foo bar", 0).is_err());
/// # Ok::<(), ErrorKind>(())
/// ```
pub trait DigestProvider: ErrorType {
    /// Which side of the comparison this provider stands for.
    fn source(&self) -> Source;

    /// Lists the algorithms this provider can compute.
    ///
    /// # Returns
    ///
    /// A slice of the supported algorithms, in report order.
    fn supported_algorithms(&self) -> &[Algorithm];

    /// Checks if an algorithm is supported by this provider.
    ///
    /// # Parameters
    ///
    /// - `algorithm`: The algorithm to check.
    ///
    /// # Returns
    ///
    /// `true` if the algorithm is supported, `false` otherwise.
    fn supports_algorithm(&self, algorithm: Algorithm) -> bool {
        self.supported_algorithms().contains(&algorithm)
    }

    /// Computes the digest of `input` in a single call.
    ///
    /// # Parameters
    ///
    /// - `algorithm`: The algorithm to run.
    /// - `input`: The bytes to hash. May be empty.
    /// - `xof_len`: Output length in bytes for the SHAKE algorithms. Ignored
    ///   by the fixed-output algorithms.
    ///
    /// # Returns
    ///
    /// A digest of exactly [`Algorithm::output_size`] bytes, or an error if
    /// the length is invalid, the output cannot be allocated, or the
    /// underlying implementation fails.
    fn compute(&self, algorithm: Algorithm, input: &[u8], xof_len: usize) -> Result<Digest, Self::Error>;
}
