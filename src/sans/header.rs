//! States processing document and record headers.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::{
    FromBytes,
    byteorder::little_endian::{U16, U32},
};

use super::{check::Checksum, data::Data, definition::Definition};

/// An error advancing over a document header.
#[derive(Debug, Error)]
pub enum DocumentHeaderError {
    /// Incorrect filetype marker.
    #[error("Incorrect file type marker.")]
    NotFitData,
    /// Unknown header length.
    #[error("Unknown header length ({0}).")]
    UnknownHeaderLength(u8),
    /// The header's own check value does not match its contents.
    #[error("Calculated ({calculated}) and found ({found}) header CRC values do not match.")]
    HeaderChecksum { found: u16, calculated: u16 },
}

/// Metadata stored in the document header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Length of the header itself, either 12 or 14 bytes.
    pub header_size: u8,
    pub protocol_version: u8,
    pub profile_version: u16,
    /// Number of record bytes following the header.
    pub data_size: u32,
}

/// State token to decode a document header.
#[derive(Debug)]
pub struct DocumentHeader;

impl DocumentHeader {
    /// Transition to another state by decoding a document header.
    ///
    /// Returns the header metadata, and a successor state token.
    pub fn advance(
        r: [u8; 12],
    ) -> Result<(FileHeader, Either<ExtendedDocumentHeader, RecordHeader>), DocumentHeaderError>
    {
        #[repr(C)]
        #[derive(FromBytes)]
        struct RawFileHeader {
            header_size: u8,
            protocol_version: u8,
            profile_version: U16,
            data_size: U32,
            data_type: [u8; 4],
        }

        let RawFileHeader {
            header_size,
            protocol_version,
            profile_version,
            data_size,
            data_type,
        } = zerocopy::transmute!(r);

        if &data_type != b".FIT" {
            Err(DocumentHeaderError::NotFitData)?;
        }

        let header = FileHeader {
            header_size,
            protocol_version,
            profile_version: profile_version.get(),
            data_size: data_size.get(),
        };

        let successor = match header_size {
            14 => Left(ExtendedDocumentHeader { preamble: r }),
            12 => Right(RecordHeader(())),
            _ => Err(DocumentHeaderError::UnknownHeaderLength(header_size))?,
        };

        Ok((header, successor))
    }
}

/// State token to decode additional bytes of an extended document header.
#[derive(Debug)]
pub struct ExtendedDocumentHeader {
    preamble: [u8; 12],
}

impl ExtendedDocumentHeader {
    /// Transition to another state by decoding the additional bytes of an
    /// extended document header.
    ///
    /// Returns the header check, unless the writer left it zeroed, and the
    /// successor state token.
    pub fn advance(self, r: [u8; 2]) -> (Option<Checksum>, RecordHeader) {
        let found = u16::from_le_bytes(r);
        let check = (found != 0).then(|| Checksum::over(&self.preamble, found));

        (check, RecordHeader(()))
    }
}

impl From<Checksum> for DocumentHeaderError {
    fn from(Checksum { found, calculated }: Checksum) -> Self {
        Self::HeaderChecksum { found, calculated }
    }
}

/// State token to decode a record header.
#[derive(Debug)]
pub struct RecordHeader(pub(super) ());

impl RecordHeader {
    /// Transition to another state by decoding a record header.
    ///
    /// Returns the local message number and a successor state token. Data
    /// states carry the time offset of a compressed timestamp header.
    pub fn advance(self, r: [u8; 1]) -> (u8, Either<Definition, Data>) {
        let r = r[0];

        bitfield! {
            struct RecordHeader(u8) {
                [7] is_compressed,
            }
        }

        if RecordHeader(r).is_compressed() {
            bitfield! {
                struct CompressedHeader(u8) {
                    [0..5] time_offset: u8,
                    [5..7] local_message: u8,
                }
            }

            let header = CompressedHeader(r);
            let successor = Right(Data {
                time_offset: Some(header.time_offset()),
            });

            (header.local_message(), successor)
        } else {
            bitfield! {
                struct NormalHeader(u8) {
                    [0..4] local_message: u8,
                    [5] is_developer,
                    [6] is_definition,
                }
            }

            let header = NormalHeader(r);

            let successor = if header.is_definition() {
                Left(Definition {
                    has_developer_fields: header.is_developer(),
                })
            } else {
                Right(Data { time_offset: None })
            };

            (header.local_message(), successor)
        }
    }
}
