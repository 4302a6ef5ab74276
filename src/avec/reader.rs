//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, vec::Vec};

use thiserror::Error;

use super::{DecodeOptions, ParseResult, slice};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An error decoding the bytes read.
    #[error(transparent)]
    Decode(#[from] slice::Error),
}

impl Error {
    /// Recover the records of a document that failed only its trailing check.
    pub fn into_partial(self) -> Option<ParseResult> {
        match self {
            Self::Decode(err) => err.into_partial(),
            Self::Io(_) => None,
        }
    }
}

/// Decode every record of a document read to its end, with default checks.
///
/// This method is also re-exported as `chainring::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read) -> Result<ParseResult, Error> {
    decode_with(r, &DecodeOptions::default())
}

/// Decode every record of a document read to its end.
///
/// This method is also re-exported as `chainring::avec::decode_reader_with`.
///
/// _Requires Cargo feature `std`._
pub fn decode_with(r: &mut impl Read, options: &DecodeOptions) -> Result<ParseResult, Error> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;

    Ok(slice::decode_with(&buf, options)?)
}
