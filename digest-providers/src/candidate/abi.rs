//! C ABI of the candidate implementation.
//!
//! Every entry point writes raw digest bytes into a buffer the caller has
//! already sized. Nothing is returned: the callee neither reports success
//! nor the number of bytes written.

use digest_traits::Algorithm;

/// `void sha3_NNN(const uint8_t *m, size_t m_len, uint8_t *dst)`
pub type HashFn = unsafe extern "C" fn(m: *const u8, m_len: usize, dst: *mut u8);

/// `void shakeNNN_xof_once(const uint8_t *src, size_t src_len, uint8_t *dst, size_t dst_len)`
pub type XofFn = unsafe extern "C" fn(src: *const u8, src_len: usize, dst: *mut u8, dst_len: usize);

/// A resolved candidate entry point.
#[derive(Debug, Clone, Copy)]
pub enum EntryPoint {
    Hash(HashFn),
    Xof(XofFn),
}

/// One slot per algorithm. A `None` slot is a symbol the candidate does not
/// provide.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolTable {
    pub shake128_xof_once: Option<XofFn>,
    pub shake256_xof_once: Option<XofFn>,
    pub sha3_224: Option<HashFn>,
    pub sha3_256: Option<HashFn>,
    pub sha3_384: Option<HashFn>,
    pub sha3_512: Option<HashFn>,
}

impl SymbolTable {
    /// In-process candidate entry points.
    pub fn builtin() -> Self {
        super::builtin::table()
    }

    /// Entry points bound to the native `libsha3` at link time.
    #[cfg(feature = "libsha3")]
    pub fn linked() -> Self {
        super::linked::table()
    }

    /// Symbol name the candidate library exports for `algorithm`.
    pub const fn symbol_name(algorithm: Algorithm) -> &'static str {
        match algorithm {
            Algorithm::Shake128Xof => "shake128_xof_once",
            Algorithm::Shake256Xof => "shake256_xof_once",
            Algorithm::Sha3_224 => "sha3_224",
            Algorithm::Sha3_256 => "sha3_256",
            Algorithm::Sha3_384 => "sha3_384",
            Algorithm::Sha3_512 => "sha3_512",
        }
    }

    pub fn entry_point(&self, algorithm: Algorithm) -> Option<EntryPoint> {
        match algorithm {
            Algorithm::Shake128Xof => self.shake128_xof_once.map(EntryPoint::Xof),
            Algorithm::Shake256Xof => self.shake256_xof_once.map(EntryPoint::Xof),
            Algorithm::Sha3_224 => self.sha3_224.map(EntryPoint::Hash),
            Algorithm::Sha3_256 => self.sha3_256.map(EntryPoint::Hash),
            Algorithm::Sha3_384 => self.sha3_384.map(EntryPoint::Hash),
            Algorithm::Sha3_512 => self.sha3_512.map(EntryPoint::Hash),
        }
    }

    /// Algorithms whose entry point is absent, in report order.
    pub fn missing(&self) -> impl Iterator<Item = Algorithm> + '_ {
        Algorithm::ALL
            .into_iter()
            .filter(move |&algorithm| self.entry_point(algorithm).is_none())
    }
}
