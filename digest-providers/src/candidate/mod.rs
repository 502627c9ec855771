//! Candidate provider: the implementation under test, reached through its C ABI.
//!
//! The callee writes into a caller-allocated buffer and gives no length or
//! status back, so the adapter is the only length authority. Before every
//! call it:
//!
//! 1. looks the output size up from [`Algorithm::output_size`],
//! 2. allocates a fresh zeroed buffer of exactly that size, followed by a
//!    [`GUARD_LEN`]-byte guard region filled with [`GUARD_BYTE`],
//!
//! and after the call checks the guard region is intact and reads back
//! exactly the contractual bytes. A candidate that writes past its output
//! is reported as [`CandidateError::Overrun`] instead of being trusted.

mod abi;
mod builtin;
#[cfg(feature = "libsha3")]
mod linked;

pub use abi::{EntryPoint, HashFn, SymbolTable, XofFn};

use digest_traits::{Algorithm, Digest, DigestProvider, Error, ErrorKind, ErrorType, Source};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateError {
    #[error("candidate entry point `{symbol}` is not available")]
    MissingSymbol { symbol: &'static str },
    #[error("{algorithm}: invalid output length {requested}")]
    InvalidOutputSize { algorithm: Algorithm, requested: usize },
    #[error("{algorithm}: cannot allocate a {size}-byte output buffer")]
    Allocation { algorithm: Algorithm, size: usize },
    #[error("{algorithm}: candidate wrote past its {size}-byte output")]
    Overrun { algorithm: Algorithm, size: usize },
}

impl Error for CandidateError {
    fn kind(&self) -> ErrorKind {
        match self {
            CandidateError::MissingSymbol { .. } => ErrorKind::InitializationError,
            CandidateError::InvalidOutputSize { .. } => ErrorKind::InvalidOutputSize,
            CandidateError::Allocation { .. } => ErrorKind::MemoryAllocationFailure,
            CandidateError::Overrun { .. } => ErrorKind::ComputationError,
        }
    }
}

/// Bytes appended after every output buffer.
pub const GUARD_LEN: usize = 16;

/// Fill pattern of the guard region.
pub const GUARD_BYTE: u8 = 0xa5;

/// Adapter over a complete [`SymbolTable`].
#[derive(Debug, Clone)]
pub struct CandidateProvider {
    table: SymbolTable,
}

impl CandidateProvider {
    /// Binds the adapter to `table`.
    ///
    /// Fails with [`CandidateError::MissingSymbol`] naming the first absent
    /// entry point, so an incomplete candidate is rejected before any
    /// algorithm runs.
    pub fn new(table: SymbolTable) -> Result<Self, CandidateError> {
        if let Some(algorithm) = table.missing().next() {
            return Err(CandidateError::MissingSymbol {
                symbol: SymbolTable::symbol_name(algorithm),
            });
        }
        tracing::debug!("candidate symbol table bound");
        Ok(Self { table })
    }

    pub fn builtin() -> Result<Self, CandidateError> {
        Self::new(SymbolTable::builtin())
    }

    #[cfg(feature = "libsha3")]
    pub fn linked() -> Result<Self, CandidateError> {
        Self::new(SymbolTable::linked())
    }
}

impl ErrorType for CandidateProvider {
    type Error = CandidateError;
}

impl DigestProvider for CandidateProvider {
    fn source(&self) -> Source {
        Source::Candidate
    }

    fn supported_algorithms(&self) -> &[Algorithm] {
        &Algorithm::ALL
    }

    fn compute(&self, algorithm: Algorithm, input: &[u8], xof_len: usize) -> Result<Digest, Self::Error> {
        let entry = self.table.entry_point(algorithm).ok_or(CandidateError::MissingSymbol {
            symbol: SymbolTable::symbol_name(algorithm),
        })?;
        let size = algorithm
            .output_size(xof_len)
            .map_err(|_| CandidateError::InvalidOutputSize { algorithm, requested: xof_len })?;

        let mut out = alloc_output(algorithm, size)?;

        // SAFETY: `input` is a live slice and `out` holds the `size` bytes
        // the entry point writes for `algorithm` plus the guard region.
        // Neither is touched elsewhere until the call returns.
        unsafe {
            match entry {
                EntryPoint::Hash(f) => f(input.as_ptr(), input.len(), out.as_mut_ptr()),
                EntryPoint::Xof(f) => f(input.as_ptr(), input.len(), out.as_mut_ptr(), size),
            }
        }

        if out[size..].iter().any(|&b| b != GUARD_BYTE) {
            tracing::warn!(%algorithm, size, "candidate overwrote the guard region");
            return Err(CandidateError::Overrun { algorithm, size });
        }
        out.truncate(size);

        tracing::trace!(%algorithm, len = out.len(), "candidate digest computed");
        Ok(Digest::from(out))
    }
}

/// Zeroed output of `size` bytes followed by the guard region.
fn alloc_output(algorithm: Algorithm, size: usize) -> Result<Vec<u8>, CandidateError> {
    let total = size
        .checked_add(GUARD_LEN)
        .ok_or(CandidateError::Allocation { algorithm, size })?;
    let mut out = Vec::new();
    out.try_reserve_exact(total)
        .map_err(|_| CandidateError::Allocation { algorithm, size })?;
    out.resize(size, 0);
    out.resize(total, GUARD_BYTE);
    Ok(out)
}
