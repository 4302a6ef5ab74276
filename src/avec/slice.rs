//! Slice-based decoder implementation.

use alloc::{boxed::Box, vec::Vec};

use either::Either::{Left, Right};
use thiserror::Error;
use tracing::warn;

use crate::sans::{
    Decoder,
    check::Checksum,
    cursor::{Cursor, TruncatedInput},
    definition::MessageDefinition,
    header::DocumentHeaderError,
};

use super::{DecodeOptions, ParseResult, convert::Converter};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error(transparent)]
    Truncated(#[from] TruncatedInput),
    /// Incorrect file header.
    #[error("Incorrect file header: {0}")]
    Header(#[from] DocumentHeaderError),
    /// A data message referred to a local message number never defined.
    #[error("Data message at offset {offset} uses undefined local message {local}.")]
    UndefinedLocalMessage { local: u8, offset: usize },
    /// Calculated and found CRC values do not match.
    ///
    /// Every record was decoded; they are held in `partial`.
    #[error("Calculated ({calculated}) and found ({found}) CRC values do not match.")]
    CyclicRedundancyCheck {
        found: u16,
        calculated: u16,
        partial: Box<ParseResult>,
    },
}

impl Error {
    /// Recover the records of a document that failed only its trailing check.
    pub fn into_partial(self) -> Option<ParseResult> {
        match self {
            Self::CyclicRedundancyCheck { partial, .. } => Some(*partial),
            _ => None,
        }
    }
}

/// Decode every record of a document slice, with default checks.
///
/// This method is also re-exported as `chainring::avec::decode_slice`.
pub fn decode(r: &[u8]) -> Result<ParseResult, Error> {
    decode_with(r, &DecodeOptions::default())
}

/// Decode every record of a document slice.
///
/// This method is also re-exported as `chainring::avec::decode_slice_with`.
pub fn decode_with(r: &[u8], options: &DecodeOptions) -> Result<ParseResult, Error> {
    let c = &mut Cursor::new(r);

    let (header, successor) = Decoder::advance(c.take()?)?;

    let mut record_header = match successor {
        Left(state) => {
            let (check, state) = state.advance(c.take()?);
            match check {
                Some(check) if options.verify_header_crc && !check.is_valid() => {
                    Err(DocumentHeaderError::from(check))?
                }
                _ => state,
            }
        }
        Right(state) => state,
    };

    let end = c.position() + header.data_size as usize; // Offset to the end of the record section.

    // Most recent definition for each local message number.
    let mut definitions: [Option<MessageDefinition>; 16] = Default::default();
    let mut converter = Converter::default();
    let mut records = Vec::new();

    while c.position() < end {
        let offset = c.position();
        let (local, successor) = record_header.advance(c.take()?);

        record_header = match successor {
            Left(state) => {
                let (definition, state) = state.advance(c)?;
                definitions[local as usize] = Some(definition);
                state
            }
            Right(state) => {
                let definition = definitions[local as usize]
                    .as_ref()
                    .ok_or(Error::UndefinedLocalMessage { local, offset })?;

                let (message, state) = state.advance(c, definition, |index, number| {
                    converter.developer_base_type(index, number)
                })?;

                records.push(converter.convert(message));
                state
            }
        };
    }

    let result = ParseResult::new(header, records);

    if options.verify_crc {
        c.seek(end);
        let found = u16::from_le_bytes(c.take()?);
        let Checksum { found, calculated } = Checksum::over(&r[..end], found);

        if found != calculated {
            warn!(found, calculated, "document CRC mismatch");
            return Err(Error::CyclicRedundancyCheck {
                found,
                calculated,
                partial: Box::new(result),
            });
        }
    }

    Ok(result)
}
