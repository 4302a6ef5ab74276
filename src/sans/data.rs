//! Base types and states processing data records.

use alloc::{string::String, vec::Vec};

use tracing::debug;

use super::{
    cursor::{Cursor, TruncatedInput},
    definition::MessageDefinition,
    header::RecordHeader,
};

/// The primitive encoding of a field, as declared in a definition message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Enum,
    SInt8,
    UInt8,
    SInt16,
    UInt16,
    SInt32,
    UInt32,
    String,
    Float32,
    Float64,
    UInt8z,
    UInt16z,
    UInt32z,
    Byte,
    SInt64,
    UInt64,
    UInt64z,
}

impl BaseType {
    /// Look up a base type by its code.
    ///
    /// Only the low five bits identify the type; the high bit duplicates the
    /// endianness flag. Unknown codes are read as raw bytes.
    pub fn from_code(code: u8) -> Self {
        match code & 0x1F {
            0x00 => Self::Enum,
            0x01 => Self::SInt8,
            0x02 => Self::UInt8,
            0x03 => Self::SInt16,
            0x04 => Self::UInt16,
            0x05 => Self::SInt32,
            0x06 => Self::UInt32,
            0x07 => Self::String,
            0x08 => Self::Float32,
            0x09 => Self::Float64,
            0x0A => Self::UInt8z,
            0x0B => Self::UInt16z,
            0x0C => Self::UInt32z,
            0x0D => Self::Byte,
            0x0E => Self::SInt64,
            0x0F => Self::UInt64,
            0x10 => Self::UInt64z,
            _ => {
                debug!(code, "unknown base type, reading as bytes");
                Self::Byte
            }
        }
    }

    /// Width in bytes of a single value. Strings are one byte per character.
    pub fn width(self) -> usize {
        match self {
            Self::Enum | Self::SInt8 | Self::UInt8 | Self::UInt8z | Self::Byte | Self::String => 1,
            Self::SInt16 | Self::UInt16 | Self::UInt16z => 2,
            Self::SInt32 | Self::UInt32 | Self::UInt32z | Self::Float32 => 4,
            Self::SInt64 | Self::UInt64 | Self::UInt64z | Self::Float64 => 8,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Self::SInt8 | Self::SInt16 | Self::SInt32 | Self::SInt64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Decode a single value of exactly [`Self::width`] bytes.
    ///
    /// Returns `None` if the value is this type's 'invalid' marker.
    fn decode(self, r: &[u8], is_le: bool) -> Option<RawValue> {
        macro_rules! primitive {
            ($t:ty) => {{
                let r: [u8; size_of::<$t>()] = r.try_into().ok()?;
                if is_le {
                    <$t>::from_le_bytes(r)
                } else {
                    <$t>::from_be_bytes(r)
                }
            }};
        }

        macro_rules! valid {
            ($t:ty, $invalid:expr, $variant:ident, $wide:ty) => {{
                let x = primitive!($t);
                (x != $invalid).then(|| RawValue::$variant(x as $wide))
            }};
        }

        match self {
            Self::Enum | Self::UInt8 | Self::Byte => valid!(u8, u8::MAX, Unsigned, u64),
            Self::UInt8z => valid!(u8, u8::MIN, Unsigned, u64),
            Self::UInt16 => valid!(u16, u16::MAX, Unsigned, u64),
            Self::UInt16z => valid!(u16, u16::MIN, Unsigned, u64),
            Self::UInt32 => valid!(u32, u32::MAX, Unsigned, u64),
            Self::UInt32z => valid!(u32, u32::MIN, Unsigned, u64),
            Self::UInt64 => valid!(u64, u64::MAX, Unsigned, u64),
            Self::UInt64z => valid!(u64, u64::MIN, Unsigned, u64),

            Self::SInt8 => valid!(i8, i8::MAX, Signed, i64),
            Self::SInt16 => valid!(i16, i16::MAX, Signed, i64),
            Self::SInt32 => valid!(i32, i32::MAX, Signed, i64),
            Self::SInt64 => valid!(i64, i64::MAX, Signed, i64),

            // Float markers are all-ones bit patterns, which compare unequal
            // to themselves as floats.
            Self::Float32 => {
                let bits = primitive!(u32);
                (bits != u32::MAX).then(|| RawValue::Float(f32::from_bits(bits).into()))
            }
            Self::Float64 => {
                let bits = primitive!(u64);
                (bits != u64::MAX).then(|| RawValue::Float(f64::from_bits(bits)))
            }

            Self::String => {
                let end = r.iter().position(|&b| b == 0).unwrap_or(r.len());
                (end != 0).then(|| RawValue::Text(String::from_utf8_lossy(&r[..end]).into()))
            }
        }
    }
}

/// A single valid value as stored in a data message, before any profile
/// conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

/// The valid values of one field of a data message.
#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    pub number: u8,
    pub base_type: BaseType,
    /// Whether the definition declared more than one value.
    pub is_array: bool,
    /// Values not holding the 'invalid' marker, in stored order.
    pub values: Vec<RawValue>,
}

impl RawField {
    /// Read a field of `size` bytes.
    ///
    /// A size that is not a multiple of the base type's width is read as raw
    /// bytes instead.
    pub fn read(
        c: &mut Cursor,
        number: u8,
        size: u8,
        base_type: BaseType,
        is_little_endian: bool,
    ) -> Result<Self, TruncatedInput> {
        let r = c.take_slice(size as usize)?;

        if base_type == BaseType::String {
            return Ok(Self {
                number,
                base_type,
                is_array: false,
                values: base_type.decode(r, is_little_endian).into_iter().collect(),
            });
        }

        let base_type = if r.len() % base_type.width() == 0 {
            base_type
        } else {
            debug!(number, size, ?base_type, "field size is not a multiple of its base type");
            BaseType::Byte
        };

        let width = base_type.width();
        let values = r
            .chunks_exact(width)
            .filter_map(|r| base_type.decode(r, is_little_endian))
            .collect();

        Ok(Self {
            number,
            base_type,
            is_array: r.len() > width,
            values,
        })
    }
}

/// A developer field of a data message, with the index of the developer that
/// declared it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDeveloperField {
    pub developer_data_index: u8,
    pub field: RawField,
}

/// The fields of one data message.
#[derive(Debug, Clone, PartialEq)]
pub struct DataMessage {
    pub global_message: u16,
    /// Time offset from a compressed timestamp header, if present.
    pub time_offset: Option<u8>,
    pub fields: Vec<RawField>,
    pub developer_fields: Vec<RawDeveloperField>,
}

/// State token to decode a data message.
#[derive(Debug)]
pub struct Data {
    pub(super) time_offset: Option<u8>,
}

impl Data {
    /// Transition to another state by decoding a data message laid out by
    /// `definition`.
    ///
    /// Developer fields are read with the base type returned by
    /// `developer_base_type` for their developer index and field number, or as
    /// raw bytes if it returns `None`.
    ///
    /// Returns the message's valid values, and a successor state token.
    pub fn advance(
        self,
        c: &mut Cursor,
        definition: &MessageDefinition,
        developer_base_type: impl Fn(u8, u8) -> Option<BaseType>,
    ) -> Result<(DataMessage, RecordHeader), TruncatedInput> {
        let is_le = definition.is_little_endian;

        let fields = definition
            .fields
            .iter()
            .map(|f| RawField::read(c, f.number, f.size, f.base_type, is_le))
            .collect::<Result<Vec<_>, _>>()?;

        let developer_fields = definition
            .developer_fields
            .iter()
            .map(|f| {
                let base_type = developer_base_type(f.developer_data_index, f.number)
                    .unwrap_or(BaseType::Byte);

                Ok::<_, TruncatedInput>(RawDeveloperField {
                    developer_data_index: f.developer_data_index,
                    field: RawField::read(c, f.number, f.size, base_type, is_le)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let message = DataMessage {
            global_message: definition.global_message,
            time_offset: self.time_offset,
            fields,
            developer_fields,
        };

        Ok((message, RecordHeader(())))
    }
}
