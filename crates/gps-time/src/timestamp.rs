use std::fmt;
use std::io;

use serde::{Serialize, Serializer};

use crate::error::FieldError;
use crate::sink::FixedBuf;

/// Length of a rendered timestamp with a year in `0..=9999`.
pub const RENDERED_LEN: usize = 23;

/// A UTC date and time-of-day with hundredths-of-a-second resolution.
///
/// Fields are not range checked. Whoever fills them in (a GPS receiver, an
/// RTC, a log file) is responsible for sensible values; out-of-range values
/// are rendered as-is.
#[derive(Debug, Default, Eq, PartialEq, Hash, Copy, Clone)]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub hundredths: u8,
}

impl Timestamp {
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        hundredths: u8,
    ) -> Timestamp {
        Timestamp {
            year,
            month,
            day,
            hour,
            minute,
            second,
            hundredths,
        }
    }

    /// Write `YYYY-MM-DDTHH:MM:SS.HHZ` into `sink`.
    ///
    /// The only possible error is one raised by the sink itself.
    pub fn render<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write!(
            sink,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.hundredths
        )
    }

    /// Byte-stream counterpart of [`render`](Self::render) for files, sockets
    /// and serial ports.
    pub fn write_to<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")
    }

    /// Render into a stack buffer sized for a four digit year.
    ///
    /// Fails if the year has five digits.
    pub fn render_to_buf(&self) -> Result<FixedBuf<RENDERED_LEN>, fmt::Error> {
        let mut buf = FixedBuf::new();
        self.render(&mut buf)?;
        Ok(buf)
    }

    pub fn time_string(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}.{:02}",
            self.hour, self.minute, self.second, self.hundredths
        )
    }

    /// Check every field against its nominal range, reporting the first one
    /// that is out of bounds. Month lengths and leap years are not considered.
    pub fn validate(&self) -> Result<(), FieldError> {
        let result = if self.year > 9999 {
            Err(FieldError::Year(self.year))
        } else if !(1..=12).contains(&self.month) {
            Err(FieldError::Month(self.month))
        } else if !(1..=31).contains(&self.day) {
            Err(FieldError::Day(self.day))
        } else if self.hour > 23 {
            Err(FieldError::Hour(self.hour))
        } else if self.minute > 59 {
            Err(FieldError::Minute(self.minute))
        } else if self.second > 59 {
            Err(FieldError::Second(self.second))
        } else if self.hundredths > 99 {
            Err(FieldError::Hundredths(self.hundredths))
        } else {
            Ok(())
        };
        if let Err(ref e) = result {
            tracing::debug!(field = e.field(), timestamp = %self, "field out of range");
        }
        result
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render(f)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
