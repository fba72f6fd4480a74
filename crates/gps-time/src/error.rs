use thiserror::Error;

/// A field that falls outside its calendar or clock range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("year {0} out of range 0..=9999")]
    Year(u16),
    #[error("month {0} out of range 1..=12")]
    Month(u8),
    #[error("day {0} out of range 1..=31")]
    Day(u8),
    #[error("hour {0} out of range 0..=23")]
    Hour(u8),
    #[error("minute {0} out of range 0..=59")]
    Minute(u8),
    #[error("second {0} out of range 0..=59")]
    Second(u8),
    #[error("hundredths {0} out of range 0..=99")]
    Hundredths(u8),
}

impl FieldError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Year(_) => "year",
            FieldError::Month(_) => "month",
            FieldError::Day(_) => "day",
            FieldError::Hour(_) => "hour",
            FieldError::Minute(_) => "minute",
            FieldError::Second(_) => "second",
            FieldError::Hundredths(_) => "hundredths",
        }
    }
}
