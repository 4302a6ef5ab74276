#![allow(dead_code)]

//! Assembles documents byte by byte for decoding tests.

use std::path::Path;

use chainring::sans::check::compute_crc;
use csv::ReaderBuilder;

/// Seconds between the Unix and FIT epochs.
pub const FIT_EPOCH_OFFSET: i64 = 631_065_600;

/// FIT timestamp of the first sample of the ride fixture.
pub const RIDE_START: u32 = 1_000_000_000;

pub const RIDE: &str = "tests/fixtures/short-ride.csv";

// Base type codes.
pub const ENUM: u8 = 0x00;
pub const SINT8: u8 = 0x01;
pub const UINT8: u8 = 0x02;
pub const SINT16: u8 = 0x83;
pub const UINT16: u8 = 0x84;
pub const SINT32: u8 = 0x85;
pub const UINT32: u8 = 0x86;
pub const STRING: u8 = 0x07;
pub const FLOAT32: u8 = 0x88;
pub const UINT32Z: u8 = 0x8C;
pub const BYTE: u8 = 0x0D;

#[derive(Debug, Default, Clone)]
pub struct Document {
    records: Vec<u8>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a little-endian definition message.
    pub fn definition(mut self, local: u8, global: u16, fields: &[(u8, u8, u8)]) -> Self {
        self.records.push(0x40 | local);
        self.records.extend([0, 0]);
        self.records.extend(global.to_le_bytes());
        self.push_fields(fields);
        self
    }

    /// Append a big-endian definition message.
    pub fn big_endian_definition(mut self, local: u8, global: u16, fields: &[(u8, u8, u8)]) -> Self {
        self.records.push(0x40 | local);
        self.records.extend([0, 1]);
        self.records.extend(global.to_be_bytes());
        self.push_fields(fields);
        self
    }

    /// Append a definition message with developer fields, given as
    /// `(field number, size, developer data index)`.
    pub fn developer_definition(
        mut self,
        local: u8,
        global: u16,
        fields: &[(u8, u8, u8)],
        developer_fields: &[(u8, u8, u8)],
    ) -> Self {
        self.records.push(0x60 | local);
        self.records.extend([0, 0]);
        self.records.extend(global.to_le_bytes());
        self.push_fields(fields);
        self.push_fields(developer_fields);
        self
    }

    fn push_fields(&mut self, fields: &[(u8, u8, u8)]) {
        self.records.push(fields.len() as u8);
        for &(number, size, tail) in fields {
            self.records.extend([number, size, tail]);
        }
    }

    /// Append a data message with a normal header.
    pub fn data(mut self, local: u8, bytes: &[u8]) -> Self {
        self.records.push(local & 0x0F);
        self.records.extend_from_slice(bytes);
        self
    }

    /// Append a data message with a compressed timestamp header.
    pub fn compressed(mut self, local: u8, time_offset: u8, bytes: &[u8]) -> Self {
        self.records.push(0x80 | (local & 0x03) << 5 | time_offset & 0x1F);
        self.records.extend_from_slice(bytes);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.records.extend_from_slice(bytes);
        self
    }

    /// Complete the document with a 14-byte header.
    pub fn finish(&self) -> Vec<u8> {
        self.finish_with(14)
    }

    /// Complete the document with a 12-byte header.
    pub fn finish_short(&self) -> Vec<u8> {
        self.finish_with(12)
    }

    fn finish_with(&self, header_size: u8) -> Vec<u8> {
        let mut document = vec![header_size, 0x20];
        document.extend(2132u16.to_le_bytes());
        document.extend((self.records.len() as u32).to_le_bytes());
        document.extend(b".FIT");

        if header_size == 14 {
            let crc = compute_crc(0, &document);
            document.extend(crc.to_le_bytes());
        }

        document.extend_from_slice(&self.records);

        let crc = compute_crc(0, &document);
        document.extend(crc.to_le_bytes());
        document
    }
}

/// One row of the ride fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub elapsed: u32,
    pub heart_rate: u8,
    pub distance: f64,
    pub altitude: f64,
    pub speed: f64,
    pub power: u16,
}

impl Sample {
    pub fn timestamp(&self) -> i64 {
        i64::from(RIDE_START + self.elapsed) + FIT_EPOCH_OFFSET
    }
}

pub fn read_samples(path: impl AsRef<Path>) -> Vec<Sample> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path).unwrap();

    reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            Sample {
                elapsed: r[0].parse().unwrap(),
                heart_rate: r[1].parse().unwrap(),
                distance: r[2].parse().unwrap(),
                altitude: r[3].parse().unwrap(),
                speed: r[4].parse().unwrap(),
                power: r[5].parse().unwrap(),
            }
        })
        .collect()
}

/// Encode the ride fixture as an activity document.
///
/// A `file_id` and a timer `event` precede the samples, and a `lap` and
/// `session` follow them.
pub fn ride_document(samples: &[Sample]) -> Vec<u8> {
    let mut document = Document::new()
        .definition(0, 0, &[(0, 1, ENUM), (1, 2, UINT16), (4, 4, UINT32)])
        .data(0, &[&[4u8][..], &1u16.to_le_bytes(), &RIDE_START.to_le_bytes()].concat())
        .definition(1, 21, &[(253, 4, UINT32), (0, 1, ENUM), (1, 1, ENUM)])
        .data(1, &[&RIDE_START.to_le_bytes()[..], &[0u8, 0]].concat())
        .definition(
            2,
            20,
            &[
                (253, 4, UINT32),
                (3, 1, UINT8),
                (5, 4, UINT32),
                (2, 2, UINT16),
                (6, 2, UINT16),
                (7, 2, UINT16),
            ],
        );

    for sample in samples {
        document = document.data(2, &encode_sample(sample));
    }

    let end = RIDE_START + samples.last().map_or(0, |s| s.elapsed);

    document
        .definition(3, 19, &[(253, 4, UINT32), (25, 1, ENUM)])
        .data(3, &[&end.to_le_bytes()[..], &[2u8]].concat())
        .definition(4, 18, &[(253, 4, UINT32), (5, 1, ENUM), (6, 1, ENUM)])
        .data(4, &[&end.to_le_bytes()[..], &[2u8, 7]].concat())
        .finish()
}

pub fn encode_sample(sample: &Sample) -> Vec<u8> {
    let distance = (sample.distance * 100.0).round() as u32;
    let altitude = ((sample.altitude + 500.0) * 5.0).round() as u16;
    let speed = (sample.speed * 1000.0).round() as u16;

    [
        &(RIDE_START + sample.elapsed).to_le_bytes()[..],
        &[sample.heart_rate],
        &distance.to_le_bytes(),
        &altitude.to_le_bytes(),
        &speed.to_le_bytes(),
        &sample.power.to_le_bytes(),
    ]
    .concat()
}

pub fn assert_close(found: f64, expected: f64) {
    assert!(
        (found - expected).abs() < 1e-9,
        "found {found}, expected {expected}"
    );
}

/// Recompute the trailing check after editing a finished document.
pub fn reseal(document: &mut Vec<u8>) {
    let end = document.len() - 2;
    let crc = compute_crc(0, &document[..end]);
    document[end..].copy_from_slice(&crc.to_le_bytes());
}

/// A null-padded string field of `size` bytes.
pub fn padded(s: &str, size: usize) -> Vec<u8> {
    let mut bytes = s.as_bytes().to_vec();
    bytes.resize(size, 0);
    bytes
}
