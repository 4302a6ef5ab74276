//! Convenience interfaces for decoding whole documents.
//!
//! The functions in this module decode every data message of a document into
//! a [`Record`], named and converted through the message profile, and collect
//! them into a [`ParseResult`].
//!
//! ```
//! let data = std::fs::read("activity.fit")?;
//! let result = chainring::avec::decode_slice(&data)?;
//!
//! for record in result.records_of("lap") {
//!     println!("{:?}", record.field("total_distance"));
//! }
//! ```
//!
//! A document whose trailing check fails still decodes in full. The records
//! are returned inside the error, and can be recovered with
//! [`slice::Error::into_partial`].

mod convert;
#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

use alloc::{collections::BTreeMap, string::String, vec::Vec};

#[cfg(feature = "std")]
pub use reader::{decode as decode_reader, decode_with as decode_reader_with};
pub use slice::{decode as decode_slice, decode_with as decode_slice_with};

use crate::{
    record::{Field, Record},
    sans::header::FileHeader,
};

/// Checks applied while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Compare the trailing check value against the document bytes.
    pub verify_crc: bool,
    /// Compare the check value of a 14-byte header, if the writer set one.
    pub verify_header_crc: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            verify_crc: true,
            verify_header_crc: true,
        }
    }
}

/// The records of a decoded document.
///
/// Records are available in document order, and grouped by kind. Grouping
/// preserves document order within each kind.
#[derive(Debug, Clone)]
pub struct ParseResult {
    header: FileHeader,
    records: Vec<Record>,
    kinds: BTreeMap<String, Vec<usize>>,
}

impl ParseResult {
    pub(crate) fn new(header: FileHeader, records: Vec<Record>) -> Self {
        let mut kinds: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (i, record) in records.iter().enumerate() {
            match kinds.get_mut(record.kind()) {
                Some(indices) => indices.push(i),
                None => {
                    kinds.insert(record.kind().into(), alloc::vec![i]);
                }
            }
        }

        Self {
            header,
            records,
            kinds,
        }
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// All records, in document order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records of one kind, in document order.
    pub fn records_of<'a>(&'a self, kind: &str) -> impl Iterator<Item = &'a Record> + use<'a> {
        let indices = self.kinds.get(kind).map(Vec::as_slice).unwrap_or_default();
        indices.iter().map(|&i| &self.records[i])
    }

    /// Kinds present in the document.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    /// The fields of every record, keyed by name and grouped by kind.
    ///
    /// A record with repeated field names keeps the last.
    pub fn records_hash(&self) -> BTreeMap<&str, Vec<BTreeMap<&str, &Field>>> {
        self.kinds
            .iter()
            .map(|(kind, indices)| {
                let records: Vec<BTreeMap<&str, &Field>> = indices
                    .iter()
                    .map(|&i| {
                        self.records[i]
                            .fields()
                            .iter()
                            .map(|f| (f.name(), f))
                            .collect()
                    })
                    .collect();

                (kind.as_str(), records)
            })
            .collect()
    }
}
