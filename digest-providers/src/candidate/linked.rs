//! Candidate entry points resolved against the native `libsha3` at link time.
//!
//! Set `LIBSHA3_DIR` to the directory holding `libsha3.so` (or `.a`) when
//! building with `--features libsha3`.

use super::abi::SymbolTable;

mod ffi {
    #[link(name = "sha3")]
    extern "C" {
        pub fn sha3_224(m: *const u8, m_len: usize, dst: *mut u8);
        pub fn sha3_256(m: *const u8, m_len: usize, dst: *mut u8);
        pub fn sha3_384(m: *const u8, m_len: usize, dst: *mut u8);
        pub fn sha3_512(m: *const u8, m_len: usize, dst: *mut u8);
        pub fn shake128_xof_once(src: *const u8, src_len: usize, dst: *mut u8, dst_len: usize);
        pub fn shake256_xof_once(src: *const u8, src_len: usize, dst: *mut u8, dst_len: usize);
    }
}

pub(super) fn table() -> SymbolTable {
    SymbolTable {
        shake128_xof_once: Some(ffi::shake128_xof_once),
        shake256_xof_once: Some(ffi::shake256_xof_once),
        sha3_224: Some(ffi::sha3_224),
        sha3_256: Some(ffi::sha3_256),
        sha3_384: Some(ffi::sha3_384),
        sha3_512: Some(ffi::sha3_512),
    }
}
