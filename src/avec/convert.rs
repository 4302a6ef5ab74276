//! Conversion of raw data messages into named, typed records.

use alloc::{borrow::Cow, collections::BTreeMap, format, string::String, vec::Vec};

use tracing::debug;

use crate::{
    profile::{self, FIT_EPOCH_OFFSET, FieldKind, FieldProfile, MessageProfile, TIMESTAMP_FIELD},
    record::{Field, Record, Value},
    sans::data::{BaseType, DataMessage, RawDeveloperField, RawField, RawValue},
};

/// Global message number of `field_description`.
const FIELD_DESCRIPTION: u16 = 206;

/// A developer field as declared by a `field_description` message.
#[derive(Debug, Clone)]
struct DeveloperField {
    name: String,
    units: String,
    base_type: BaseType,
    scale: f64,
    offset: f64,
}

/// Decoding state carried from one data message to the next.
///
/// Scoped to a single document: holds the running timestamp used by
/// compressed timestamp headers, and the developer fields declared so far.
#[derive(Debug, Default)]
pub(super) struct Converter {
    last_timestamp: Option<u32>,
    developer_fields: BTreeMap<(u8, u8), DeveloperField>,
}

impl Converter {
    /// Base type declared for a developer field, if it has been described.
    pub(super) fn developer_base_type(&self, index: u8, number: u8) -> Option<BaseType> {
        self.developer_fields.get(&(index, number)).map(|d| d.base_type)
    }

    pub(super) fn convert(&mut self, message: DataMessage) -> Record {
        let global = message.global_message;
        let profile = profile::message(global);

        let kind = match profile {
            Some(p) => Cow::Borrowed(p.name),
            None => {
                debug!(global, "unknown global message");
                Cow::Owned(format!("unknown_{global}"))
            }
        };

        let explicit = message
            .fields
            .iter()
            .filter(|f| f.number == TIMESTAMP_FIELD)
            .find_map(|f| match f.values.as_slice() {
                [RawValue::Unsigned(t)] => u32::try_from(*t).ok(),
                _ => None,
            });

        let is_timed = profile.is_some_and(|p| p.has_timestamp());

        let timestamp = match (explicit, message.time_offset) {
            (Some(t), _) => {
                self.last_timestamp = Some(t);
                Some(t)
            }
            (None, Some(offset)) => {
                let t = self.last_timestamp.map(|last| roll_forward(last, offset));
                if t.is_none() {
                    debug!(global, offset, "compressed timestamp before any timestamp");
                }
                self.last_timestamp = t.or(self.last_timestamp);
                t.filter(|_| is_timed)
            }
            (None, None) => self.last_timestamp.filter(|_| is_timed),
        };

        let mut fields = Vec::with_capacity(message.fields.len() + 1);
        let mut components = Vec::new();

        for raw in message.fields.iter().filter(|f| !f.values.is_empty()) {
            let Some((message_profile, field)) =
                profile.and_then(|p| Some((p, p.field(raw.number)?)))
            else {
                fields.push(Field {
                    name: Cow::Owned(format!("unknown_field_{}", raw.number)),
                    units: Cow::Borrowed(""),
                    value: convert_values(raw, plain),
                });
                continue;
            };

            fields.push(Field {
                name: Cow::Borrowed(field.name),
                units: Cow::Borrowed(field.units),
                value: convert_values(raw, |v| from_profile(field, v)),
            });

            if let (false, [RawValue::Unsigned(bits)]) = (raw.is_array, raw.values.as_slice()) {
                expand_components(message_profile, field, *bits, &mut components);
            }
        }

        let synthesize_timestamp = explicit.is_none() && message.time_offset.is_some() && is_timed;

        if let (true, Some(t)) = (synthesize_timestamp, timestamp) {
            fields.insert(
                0,
                Field {
                    name: Cow::Borrowed("timestamp"),
                    units: Cow::Borrowed("s"),
                    value: Value::Signed(to_unix(t)),
                },
            );
        }

        for component in components {
            if !fields.iter().any(|f| f.name == component.name) {
                fields.push(component);
            }
        }

        for developer_field in message.developer_fields {
            if let Some(field) = self.convert_developer_field(developer_field) {
                fields.push(field);
            }
        }

        let record = Record {
            kind,
            fields,
            timestamp: timestamp.map(to_unix),
        };

        if global == FIELD_DESCRIPTION {
            self.describe(&record);
        }

        record
    }

    fn convert_developer_field(&self, raw: RawDeveloperField) -> Option<Field> {
        let RawDeveloperField {
            developer_data_index: index,
            field,
        } = raw;

        if field.values.is_empty() {
            return None;
        }

        let Some(declared) = self.developer_fields.get(&(index, field.number)) else {
            debug!(index, number = field.number, "developer field used before its description");
            return Some(Field {
                name: Cow::Owned(format!("developer_{index}_{}", field.number)),
                units: Cow::Borrowed(""),
                value: convert_values(&field, plain),
            });
        };

        let is_scaled = declared.scale != 1.0 || declared.offset != 0.0;
        let value = convert_values(&field, |v| match v {
            RawValue::Text(_) => plain(v),
            _ if is_scaled => Value::Float(as_f64(v) / declared.scale - declared.offset),
            _ => plain(v),
        });

        Some(Field {
            name: Cow::Owned(declared.name.clone()),
            units: Cow::Owned(declared.units.clone()),
            value,
        })
    }

    /// Record the developer field declared by a `field_description` record.
    fn describe(&mut self, record: &Record) {
        let unsigned = |name| match record.field(name).map(Field::value) {
            Some(Value::Unsigned(x)) => u8::try_from(*x).ok(),
            _ => None,
        };
        let text = |name| record.field(name).and_then(|f| f.value.as_str());

        let (Some(index), Some(number), Some(code)) = (
            unsigned("developer_data_index"),
            unsigned("field_definition_number"),
            unsigned("fit_base_type_id"),
        ) else {
            debug!("incomplete field description");
            return;
        };

        let scale = match unsigned("scale") {
            Some(scale) if scale != 0 => f64::from(scale),
            _ => 1.0,
        };
        let offset = match record.field("offset").map(Field::value) {
            Some(Value::Signed(x)) => *x as f64,
            _ => 0.0,
        };

        let declared = DeveloperField {
            name: text("field_name")
                .map(String::from)
                .unwrap_or_else(|| format!("developer_{index}_{number}")),
            units: text("units").map(String::from).unwrap_or_default(),
            base_type: BaseType::from_code(code),
            scale,
            offset,
        };

        self.developer_fields.insert((index, number), declared);
    }
}

/// Apply a timestamp header's five-bit offset to the last full timestamp.
fn roll_forward(last: u32, offset: u8) -> u32 {
    let offset = u32::from(offset & 0x1F);
    let base = last & !0x1F;

    if offset >= last & 0x1F {
        base.wrapping_add(offset)
    } else {
        base.wrapping_add(offset).wrapping_add(0x20)
    }
}

fn to_unix(t: u32) -> i64 {
    i64::from(t) + FIT_EPOCH_OFFSET
}

fn convert_values(raw: &RawField, convert: impl Fn(&RawValue) -> Value) -> Value {
    match (raw.is_array, raw.values.as_slice()) {
        (false, [value]) => convert(value),
        (_, values) => Value::Array(values.iter().map(convert).collect()),
    }
}

fn from_profile(field: &FieldProfile, v: &RawValue) -> Value {
    match (field.kind, v) {
        (_, RawValue::Text(_)) => plain(v),
        (FieldKind::Float, _) => Value::Float(as_f64(v) / field.scale - field.offset),
        (FieldKind::DateTime, RawValue::Unsigned(t)) => Value::Signed(*t as i64 + FIT_EPOCH_OFFSET),
        (FieldKind::Label(e), RawValue::Unsigned(code)) => Value::Label(match e.label(*code) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(format!("unknown_{code}")),
        }),
        (FieldKind::Label(_), RawValue::Signed(code)) => {
            Value::Label(Cow::Owned(format!("unknown_{code}")))
        }
        _ => plain(v),
    }
}

fn plain(v: &RawValue) -> Value {
    match v {
        RawValue::Unsigned(x) => Value::Unsigned(*x),
        RawValue::Signed(x) => Value::Signed(*x),
        RawValue::Float(x) => Value::Float(*x),
        RawValue::Text(s) => Value::Text(s.clone()),
    }
}

fn as_f64(v: &RawValue) -> f64 {
    match v {
        RawValue::Unsigned(x) => *x as f64,
        RawValue::Signed(x) => *x as f64,
        RawValue::Float(x) => *x,
        RawValue::Text(_) => f64::NAN,
    }
}

/// Unpack the components of a field, least significant bits first.
fn expand_components(
    message: &MessageProfile,
    field: &FieldProfile,
    mut bits: u64,
    out: &mut Vec<Field>,
) {
    for component in field.components {
        let Some(target) = message.field(component.target) else {
            continue;
        };

        let width = u32::from(component.bits);
        let mask = 1u64.checked_shl(width).map_or(u64::MAX, |m| m - 1);
        let raw = bits & mask;
        bits = bits.checked_shr(width).unwrap_or(0);

        out.push(Field {
            name: Cow::Borrowed(target.name),
            units: Cow::Borrowed(target.units),
            value: Value::Float(raw as f64 / component.scale - component.offset),
        });
    }
}
