#![no_std]

//! A decoder and analytics engine for Garmin's Flexible and Interoperable Data
//! Transfer activity files.
//!
//! Chainring turns a complete document into an ordered collection of typed,
//! named records, and computes fitness statistics over their telemetry:
//! averages, elevation range, distance partitions, time in zone and resampled
//! series.
//!
//! Most users should begin with the functions in the [`avec`] module and the
//! methods of [`ParseResult`]. Decoder internals are exposed in the [`sans`]
//! module, and the names, units and conversions applied to each field in the
//! [`profile`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod analytics;
pub mod avec;
pub mod profile;
pub mod record;
pub mod sans;

pub use analytics::Zone;
pub use avec::{DecodeOptions, ParseResult};
pub use record::{Field, Record, Value};
