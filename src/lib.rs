//! Library for reading and writing the MOD model container format.
//!
//! The format is a big-endian binary stream: a fixed header followed by a
//! compile-time-known sequence of count-prefixed chunks (geometry, materials,
//! skeleton, meshes, collision), then an opaque tail. Many fields have
//! unconfirmed semantics and are carried verbatim, so decoding a file and
//! re-encoding it reproduces the original bytes exactly.

pub mod error;
pub mod format;
pub mod util;

pub use error::{Error, Result};
pub use format::model::Mod;
