use std::{io, string::FromUtf8Error};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the codec. A failed decode leaves no partial model
/// behind; the caller only ever sees a complete [`crate::Mod`] or an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened, mapped or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The stream is truncated or does not decode as a MOD file.
    #[error("decode error: {0}")]
    Decode(#[from] binrw::Error),
    /// Encoding failed. Writing a well-formed model is expected to succeed,
    /// so this surfaces underlying stream failures only.
    #[error("encode error: {0}")]
    Encode(binrw::Error),
    /// A collection is too large for its 32-bit count field.
    #[error("collection of {0} entries exceeds the 32-bit count range")]
    CountOverflow(usize),
    /// A joint name in the file is not valid UTF-8.
    #[error("invalid joint name: {0}")]
    InvalidName(#[from] FromUtf8Error),
    /// A joint referenced itself or a joint that does not precede it.
    #[error("joint {joint} has invalid parent index {parent}")]
    InvalidJointParent { joint: usize, parent: i32 },
}
