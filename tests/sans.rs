mod builder;

use builder::*;
use chainring::sans::{
    Decoder,
    check::{Checksum, compute_crc},
    cursor::{Cursor, TruncatedInput},
    data::{BaseType, RawValue},
    definition::FieldDefinition,
};
use either::Either::{Left, Right};

#[test]
fn crc_check_value() {
    assert_eq!(compute_crc(0, b"123456789"), 0xBB3D);
    assert_eq!(compute_crc(0, b""), 0);
    assert!(Checksum::over(b"123456789", 0xBB3D).is_valid());
    assert!(!Checksum::over(b"123456789", 0xBB3C).is_valid());
}

#[test]
fn base_type_codes() {
    assert_eq!(BaseType::from_code(0x84), BaseType::UInt16);
    assert_eq!(BaseType::from_code(0x04), BaseType::UInt16);
    assert_eq!(BaseType::from_code(0x88), BaseType::Float32);
    assert_eq!(BaseType::from_code(0x8C), BaseType::UInt32z);
    assert_eq!(BaseType::from_code(0x1F), BaseType::Byte);

    assert_eq!(BaseType::Float64.width(), 8);
    assert_eq!(BaseType::String.width(), 1);
    assert!(BaseType::SInt32.is_signed());
    assert!(!BaseType::UInt32.is_signed());
    assert!(BaseType::Float32.is_float());
}

#[test]
fn cursor_reports_truncation() {
    let c = &mut Cursor::new(&[1, 2, 3]);

    assert_eq!(c.take::<2>(), Ok([1, 2]));
    assert_eq!(c.remaining(), 1);
    assert_eq!(
        c.take::<2>(),
        Err(TruncatedInput {
            offset: 2,
            needed: 2
        })
    );

    c.seek(10);
    assert_eq!(c.remaining(), 0);
    assert!(c.take_slice(1).is_err());
}

#[test]
fn walk_states() {
    let document = Document::new()
        .definition(0, 20, &[(253, 4, UINT32), (3, 1, UINT8), (13, 1, SINT8)])
        .data(0, &[&RIDE_START.to_le_bytes()[..], &[0xFF, 0xF6]].concat())
        .finish();
    let c = &mut Cursor::new(&document);

    let (header, successor) = Decoder::advance(c.take().unwrap()).unwrap();
    assert_eq!(header.header_size, 14);
    assert_eq!(header.data_size as usize, document.len() - 16);

    let Left(state) = successor else {
        panic!("expected an extended header");
    };
    let (check, state) = state.advance(c.take().unwrap());
    assert!(check.unwrap().is_valid());

    let (local, successor) = state.advance(c.take().unwrap());
    assert_eq!(local, 0);
    let Left(state) = successor else {
        panic!("expected a definition");
    };

    let (definition, state) = state.advance(c).unwrap();
    assert_eq!(definition.global_message, 20);
    assert!(definition.is_little_endian);
    assert_eq!(definition.data_size(), 6);
    assert_eq!(
        definition.fields[1],
        FieldDefinition {
            number: 3,
            size: 1,
            base_type: BaseType::UInt8
        }
    );

    let (_, successor) = state.advance(c.take().unwrap());
    let Right(state) = successor else {
        panic!("expected data");
    };

    let (message, _) = state.advance(c, &definition, |_, _| None).unwrap();
    assert_eq!(message.time_offset, None);
    assert_eq!(message.fields[0].values, [RawValue::Unsigned(u64::from(RIDE_START))]);
    assert!(message.fields[1].values.is_empty());
    assert_eq!(message.fields[2].values, [RawValue::Signed(-10)]);
    assert_eq!(c.remaining(), 2);
}
