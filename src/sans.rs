//! Low-level decoding states for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals. See [`crate::avec`] for a decoder producing a complete
//! [`ParseResult`](crate::avec::ParseResult).
//!
//! # Architecture
//!
//! Header states are represented by non-copy tokens. Once enough bytes are
//! ready, transition to another state by calling the token's `advance`
//! method. This will return a successor state token, along with any extracted
//! data. Definition and data states read their variable-length bodies from a
//! [`Cursor`](cursor::Cursor).
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed. Some areas of the decoding process are not represented in the
//! states and must be carefully written:
//!
//! - Storing each definition under its local message number, and supplying
//! the current one when a data state is reached.
//!
//! - Ending decoding once the specified number of document bytes have been
//! read.
//!
//! - Applying cyclic redundancy checks. Helpers are provided in the [`check`]
//! module.
//!
//! - Resolving developer field base types from earlier `field_description`
//! messages.
//!
//! Values leave this module raw: 'invalid' markers are dropped, but no scale,
//! offset or naming from the message profile is applied.

pub mod check;
pub mod cursor;
pub mod data;
pub mod definition;
pub mod header;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::DocumentHeader;
