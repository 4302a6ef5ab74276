//! States processing definition records.

use alloc::vec::Vec;

use tracing::trace;
use zerocopy::FromBytes;

use super::{
    cursor::{Cursor, TruncatedInput},
    data::BaseType,
    header::RecordHeader,
};

/// Layout of one field in subsequent data messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition {
    pub number: u8,
    /// Size in bytes. A multiple of the base type's width denotes an array.
    pub size: u8,
    pub base_type: BaseType,
}

/// Layout of one developer field in subsequent data messages.
///
/// The base type is not part of the definition; it is declared by an earlier
/// `field_description` message for the same developer and field number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeveloperFieldDefinition {
    pub number: u8,
    pub size: u8,
    pub developer_data_index: u8,
}

/// Field layout of the data messages bound to one local message number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDefinition {
    pub global_message: u16,
    pub is_little_endian: bool,
    pub fields: Vec<FieldDefinition>,
    pub developer_fields: Vec<DeveloperFieldDefinition>,
}

impl MessageDefinition {
    /// Number of bytes occupied by a data message of this layout.
    pub fn data_size(&self) -> usize {
        let fields = self.fields.iter().map(|f| f.size as usize);
        let developer_fields = self.developer_fields.iter().map(|f| f.size as usize);
        fields.chain(developer_fields).sum()
    }
}

#[repr(C)]
#[derive(Debug, FromBytes)]
struct DefinitionMessage {
    _reserved: u8,
    architecture: u8,
    global_message: [u8; 2],
    field_count: u8,
}

#[repr(C)]
#[derive(FromBytes)]
struct FieldHeader {
    number: u8,
    size: u8,
    tail: u8,
}

/// State token to decode a definition message.
#[derive(Debug)]
pub struct Definition {
    pub(super) has_developer_fields: bool,
}

impl Definition {
    /// Transition to another state by decoding a definition message.
    ///
    /// Returns the decoded layout, and a successor state token.
    pub fn advance(
        self,
        c: &mut Cursor,
    ) -> Result<(MessageDefinition, RecordHeader), TruncatedInput> {
        let DefinitionMessage {
            architecture,
            global_message,
            field_count,
            ..
        } = zerocopy::transmute!(c.take::<5>()?);

        let is_little_endian = architecture == 0;
        let global_message = if is_little_endian {
            u16::from_le_bytes(global_message)
        } else {
            u16::from_be_bytes(global_message)
        };

        let fields = (0..field_count)
            .map(|_| {
                let FieldHeader { number, size, tail } = zerocopy::transmute!(c.take::<3>()?);
                Ok::<_, TruncatedInput>(FieldDefinition {
                    number,
                    size,
                    base_type: BaseType::from_code(tail),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let developer_fields = if self.has_developer_fields {
            let [count] = c.take::<1>()?;
            (0..count)
                .map(|_| {
                    let FieldHeader { number, size, tail } =
                        zerocopy::transmute!(c.take::<3>()?);
                    Ok::<_, TruncatedInput>(DeveloperFieldDefinition {
                        number,
                        size,
                        developer_data_index: tail,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        trace!(
            global_message,
            fields = fields.len(),
            developer_fields = developer_fields.len(),
            "decoded definition message"
        );

        let definition = MessageDefinition {
            global_message,
            is_little_endian,
            fields,
            developer_fields,
        };

        Ok((definition, RecordHeader(())))
    }
}
