//! In-process candidate entry points backed by `tiny-keccak`.
//!
//! These follow the candidate C ABI exactly, so the adapter drives them the
//! same way it drives a native library.

use core::slice;

use tiny_keccak::{Hasher, Sha3, Shake};

use super::abi::SymbolTable;

pub(super) fn table() -> SymbolTable {
    SymbolTable {
        shake128_xof_once: Some(shake128_xof_once),
        shake256_xof_once: Some(shake256_xof_once),
        sha3_224: Some(sha3_224),
        sha3_256: Some(sha3_256),
        sha3_384: Some(sha3_384),
        sha3_512: Some(sha3_512),
    }
}

/// # Safety
///
/// `m` must be valid for `m_len` reads unless `m_len` is zero.
unsafe fn input<'a>(m: *const u8, m_len: usize) -> &'a [u8] {
    if m.is_null() || m_len == 0 {
        &[]
    } else {
        slice::from_raw_parts(m, m_len)
    }
}

fn absorb_into<H: Hasher>(mut hasher: H, m: &[u8], dst: &mut [u8]) {
    hasher.update(m);
    hasher.finalize(dst);
}

macro_rules! fixed_entry {
    ($name:ident, $ctor:expr, $len:literal) => {
        /// # Safety
        ///
        #[doc = concat!("`m` must be valid for `m_len` reads and `dst` valid for ", stringify!($len), " writes.")]
        pub unsafe extern "C" fn $name(m: *const u8, m_len: usize, dst: *mut u8) {
            if dst.is_null() {
                return;
            }
            let dst = slice::from_raw_parts_mut(dst, $len);
            absorb_into($ctor, input(m, m_len), dst);
        }
    };
}

macro_rules! xof_entry {
    ($name:ident, $ctor:expr) => {
        /// # Safety
        ///
        /// `src` must be valid for `src_len` reads and `dst` valid for `dst_len` writes.
        pub unsafe extern "C" fn $name(src: *const u8, src_len: usize, dst: *mut u8, dst_len: usize) {
            if dst.is_null() || dst_len == 0 {
                return;
            }
            let dst = slice::from_raw_parts_mut(dst, dst_len);
            absorb_into($ctor, input(src, src_len), dst);
        }
    };
}

fixed_entry!(sha3_224, Sha3::v224(), 28);
fixed_entry!(sha3_256, Sha3::v256(), 32);
fixed_entry!(sha3_384, Sha3::v384(), 48);
fixed_entry!(sha3_512, Sha3::v512(), 64);
xof_entry!(shake128_xof_once, Shake::v128());
xof_entry!(shake256_xof_once, Shake::v256());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_sha3_256_call() {
        let msg = b"foo bar";
        let mut dst = [0u8; 32];
        unsafe { sha3_256(msg.as_ptr(), msg.len(), dst.as_mut_ptr()) };
        assert_eq!(
            hex::encode(dst),
            "c57ca12c10652293ca4fa61f3ee90d6896cf695d7b7891263e2f01cf2fa61cf8"
        );
    }

    #[test]
    fn test_raw_call_accepts_null_empty_input() {
        let mut dst = [0u8; 32];
        unsafe { sha3_256(core::ptr::null(), 0, dst.as_mut_ptr()) };
        assert_eq!(
            hex::encode(dst),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_raw_xof_fills_whole_buffer() {
        let msg = b"foo bar";
        let mut dst = [0u8; 32];
        unsafe { shake256_xof_once(msg.as_ptr(), msg.len(), dst.as_mut_ptr(), dst.len()) };
        assert_eq!(
            hex::encode(dst),
            "c1b3465ab14fe3b553bfbb4f78c936bcbe3f9246c493c129e566b99b0a6d6914"
        );
    }
}
