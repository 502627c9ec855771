//! Capability traits shared by every digest provider the harness can drive.

pub mod algorithm;
pub mod digest;

pub use algorithm::{Algorithm, Family, Source, UnknownAlgorithm};
pub use digest::{Digest, DigestProvider, Error, ErrorKind, ErrorType};
