//! Static registry of message and field names.
//!
//! The registry maps a global message number to a symbolic kind, and each of
//! its field numbers to a name, physical units and a conversion. Messages and
//! fields missing from the registry still decode, under numeric fallback
//! names.

mod messages;
pub mod types;

/// Field number carrying the message timestamp, shared by every message.
pub const TIMESTAMP_FIELD: u8 = 253;

/// Seconds between the Unix epoch and the FIT epoch (1989-12-31T00:00:00Z).
pub const FIT_EPOCH_OFFSET: i64 = 631_065_600;

/// A named enumeration, mapping stored codes to labels.
#[derive(Debug)]
pub struct EnumType {
    pub name: &'static str,
    /// Sorted by code.
    pub values: &'static [(u32, &'static str)],
}

impl EnumType {
    pub fn label(&self, code: u64) -> Option<&'static str> {
        let code = u32::try_from(code).ok()?;
        self.values
            .binary_search_by_key(&code, |(c, _)| *c)
            .ok()
            .map(|i| self.values[i].1)
    }
}

/// How a field's stored value is presented.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Integer, in the signedness of its base type.
    Integer,
    /// Floating point, after applying scale and offset.
    Float,
    Text,
    /// Seconds since the FIT epoch, presented as seconds since the Unix epoch.
    DateTime,
    /// An enumeration, presented by label.
    Label(&'static EnumType),
}

/// A value packed into the bits of another field.
#[derive(Debug)]
pub struct Component {
    /// Number of the field in the same message that receives the value.
    pub target: u8,
    pub bits: u8,
    pub scale: f64,
    pub offset: f64,
}

impl Component {
    pub const fn new(target: u8, bits: u8, scale: f64, offset: f64) -> Self {
        Self {
            target,
            bits,
            scale,
            offset,
        }
    }
}

/// Registry entry for one field of a message.
#[derive(Debug)]
pub struct FieldProfile {
    pub number: u8,
    pub name: &'static str,
    pub units: &'static str,
    pub kind: FieldKind,
    /// Physical value is `raw / scale - offset`.
    pub scale: f64,
    pub offset: f64,
    pub components: &'static [Component],
}

impl FieldProfile {
    pub const fn new(number: u8, name: &'static str, kind: FieldKind, units: &'static str) -> Self {
        Self {
            number,
            name,
            units,
            kind,
            scale: 1.0,
            offset: 0.0,
            components: &[],
        }
    }

    /// Present the field as floating point, scaled and offset.
    pub const fn scaled(mut self, scale: f64, offset: f64) -> Self {
        self.kind = FieldKind::Float;
        self.scale = scale;
        self.offset = offset;
        self
    }

    pub const fn with_components(mut self, components: &'static [Component]) -> Self {
        self.components = components;
        self
    }
}

/// Registry entry for one message.
#[derive(Debug)]
pub struct MessageProfile {
    pub number: u16,
    pub name: &'static str,
    pub fields: &'static [FieldProfile],
}

impl MessageProfile {
    pub fn field(&self, number: u8) -> Option<&'static FieldProfile> {
        self.fields.iter().find(|f| f.number == number)
    }

    /// Whether messages of this kind carry a timestamp.
    pub fn has_timestamp(&self) -> bool {
        self.field(TIMESTAMP_FIELD).is_some()
    }
}

/// Look up a message by its global message number.
pub fn message(number: u16) -> Option<&'static MessageProfile> {
    use messages::*;

    Some(match number {
        0 => &FILE_ID,
        3 => &USER_PROFILE,
        8 => &HR_ZONE,
        12 => &SPORT,
        18 => &SESSION,
        19 => &LAP,
        20 => &RECORD,
        21 => &EVENT,
        23 => &DEVICE_INFO,
        34 => &ACTIVITY,
        49 => &FILE_CREATOR,
        78 => &HRV,
        206 => &FIELD_DESCRIPTION,
        207 => &DEVELOPER_DATA_ID,
        _ => return None,
    })
}
