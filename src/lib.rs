#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::cargo)]
#![warn(
    clippy::nursery,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::module_name_repetitions)]

//! Lookup tables for KBO pitch-event feeds: single-letter pitch-result codes
//! and Korean pitch-type names, each mapped to a stable English display label,
//! plus swing/contact classification of result codes.
//!
//! Everything here is immutable constant data. Translation of an unrecognized
//! code is an error (new codes from the data provider should fail loudly, not
//! turn into blank labels); the classification predicates are total and just
//! return `false` for anything unknown.

pub mod pitch_result;
pub mod pitch_type;

pub use pitch_result::{is_contact, is_swing, translate_pitch_result, PitchResult};
pub use pitch_type::{translate_pitch_type, PitchType};
