//! Reference provider backed by the RustCrypto `sha3` crate.

use digest_traits::{Algorithm, Digest, DigestProvider, Error, ErrorKind, ErrorType, Source};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    #[error("{algorithm}: invalid output length {requested}")]
    InvalidOutputSize { algorithm: Algorithm, requested: usize },
    #[error("{algorithm}: cannot allocate a {size}-byte output buffer")]
    Allocation { algorithm: Algorithm, size: usize },
}

impl Error for ReferenceError {
    fn kind(&self) -> ErrorKind {
        match self {
            ReferenceError::InvalidOutputSize { .. } => ErrorKind::InvalidOutputSize,
            ReferenceError::Allocation { .. } => ErrorKind::MemoryAllocationFailure,
        }
    }
}

/// Trusted side of the comparison.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceProvider;

impl ReferenceProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorType for ReferenceProvider {
    type Error = ReferenceError;
}

impl DigestProvider for ReferenceProvider {
    fn source(&self) -> Source {
        Source::Reference
    }

    fn supported_algorithms(&self) -> &[Algorithm] {
        &Algorithm::ALL
    }

    fn compute(&self, algorithm: Algorithm, input: &[u8], xof_len: usize) -> Result<Digest, Self::Error> {
        let size = algorithm
            .output_size(xof_len)
            .map_err(|_| ReferenceError::InvalidOutputSize { algorithm, requested: xof_len })?;

        let out = match algorithm {
            Algorithm::Shake128Xof => xof::<Shake128>(input, size)
                .ok_or(ReferenceError::Allocation { algorithm, size })?,
            Algorithm::Shake256Xof => xof::<Shake256>(input, size)
                .ok_or(ReferenceError::Allocation { algorithm, size })?,
            Algorithm::Sha3_224 => fixed::<Sha3_224>(input),
            Algorithm::Sha3_256 => fixed::<Sha3_256>(input),
            Algorithm::Sha3_384 => fixed::<Sha3_384>(input),
            Algorithm::Sha3_512 => fixed::<Sha3_512>(input),
        };
        tracing::trace!(%algorithm, len = out.len(), "reference digest computed");
        Ok(Digest::from(out))
    }
}

fn fixed<D: sha3::Digest>(input: &[u8]) -> Vec<u8> {
    D::digest(input).to_vec()
}

/// Returns `None` when the output buffer cannot be allocated.
fn xof<X>(input: &[u8], len: usize) -> Option<Vec<u8>>
where
    X: Default + Update + ExtendableOutput,
{
    let mut out = Vec::new();
    out.try_reserve_exact(len).ok()?;
    out.resize(len, 0);

    let mut hasher = X::default();
    Update::update(&mut hasher, input);
    hasher.finalize_xof().read(&mut out);
    Some(out)
}
