//! The two digest providers compared by the harness.
//!
//! [`ReferenceProvider`] is backed by the RustCrypto `sha3` crate.
//! [`CandidateProvider`] drives the implementation under test through a
//! table of C ABI entry points with caller-allocated output buffers.

pub mod candidate;
pub mod reference;

pub use candidate::{CandidateError, CandidateProvider, SymbolTable};
pub use reference::{ReferenceError, ReferenceProvider};
