//! Date and time-of-day value type for GPS fixes.
//!
//! A [`Timestamp`] is a plain aggregate of calendar and clock fields with
//! hundredths-of-a-second resolution. It renders to the fixed-width form
//! `YYYY-MM-DDTHH:MM:SS.HHZ` through any [`core::fmt::Write`] or
//! [`std::io::Write`] sink. Field ranges are never checked while rendering;
//! [`Timestamp::validate`] is available as a separate step.

pub mod error;
pub mod sink;
pub mod timestamp;

pub use error::FieldError;
pub use sink::FixedBuf;
pub use timestamp::{RENDERED_LEN, Timestamp};
