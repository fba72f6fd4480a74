/*
Copyright © 2026  Isaac Wismer

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! Command-line plumbing for rendering GPS fix timestamps.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

pub use gps_time::{FieldError, RENDERED_LEN, Timestamp};

/// Render a single output line, optionally refusing out-of-range fields.
pub fn stamp_line(ts: &Timestamp, validate: bool) -> Result<String, FieldError> {
    if validate {
        ts.validate()?;
    }
    Ok(ts.to_string())
}

/// Write `line` to `out` `count` times, each followed by a newline.
pub fn write_lines<W: Write + ?Sized>(line: &str, count: u32, out: &mut W) -> io::Result<()> {
    for _ in 0..count {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Create a new output file, refusing to overwrite an existing one.
pub fn create_output(path: &str) -> io::Result<std::fs::File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

/// Check that the path does not already point to a file
pub fn is_empty_path(path_str: &str) -> Result<(), String> {
    if Path::new(path_str).exists() {
        Err("File exists on file system! Use a different file".to_owned())
    } else {
        Ok(())
    }
}

pub fn parse_year(value: &str) -> Result<u16, String> {
    value
        .parse::<u16>()
        .map_err(|_| format!("Invalid year: {value}"))
}

/// Parse any of the one-byte fields (month through hundredths).
pub fn parse_u8_field(value: &str) -> Result<u8, String> {
    value
        .parse::<u8>()
        .map_err(|_| format!("Invalid field value: {value}"))
}

pub fn parse_count(value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(0) | Err(_) => Err("Count must be a positive integer".to_owned()),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_line_is_permissive_by_default() {
        let ts = Timestamp::new(2024, 13, 40, 25, 70, 2, 30);
        assert_eq!(stamp_line(&ts, false).unwrap(), "2024-13-40T25:70:02.30Z");
    }

    #[test]
    fn stamp_line_validates_on_request() {
        let ts = Timestamp::new(2024, 13, 40, 25, 70, 2, 30);
        assert_eq!(stamp_line(&ts, true), Err(FieldError::Month(13)));

        let ok = Timestamp::new(2024, 3, 9, 7, 5, 2, 30);
        assert_eq!(stamp_line(&ok, true).unwrap(), "2024-03-09T07:05:02.30Z");
    }

    #[test]
    fn write_lines_repeats_output() {
        let line = stamp_line(&Timestamp::new(1, 1, 1, 0, 0, 0, 0), true).unwrap();
        let mut out = Vec::new();
        write_lines(&line, 3, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["0001-01-01T00:00:00.00Z"; 3]);
    }

    #[test]
    fn field_parsers() {
        assert_eq!(parse_year("2024"), Ok(2024));
        assert!(parse_year("70000").is_err());
        assert!(parse_year("-1").is_err());
        assert_eq!(parse_u8_field("07"), Ok(7));
        assert_eq!(parse_u8_field("99"), Ok(99));
        assert!(parse_u8_field("256").is_err());
        assert!(parse_u8_field("x").is_err());
    }

    #[test]
    fn count_must_be_positive() {
        assert_eq!(parse_count("5"), Ok(5));
        assert!(parse_count("0").is_err());
        assert!(parse_count("many").is_err());
    }

    /// Accepts the first `budget` bytes, then fails every write.
    struct ShortSerialLink {
        budget: usize,
        written: Vec<u8>,
    }

    impl Write for ShortSerialLink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::StorageFull, "card full"));
            }
            let n = buf.len().min(self.budget);
            self.written.extend_from_slice(&buf[..n]);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_lines_returns_sink_error_midway() {
        let line = Timestamp::new(2024, 3, 9, 7, 5, 2, 30).to_string();
        let mut link = ShortSerialLink {
            budget: RENDERED_LEN + 1 + 10,
            written: Vec::new(),
        };
        let err = write_lines(&line, 3, &mut link).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
        assert_eq!(link.written, b"2024-03-09T07:05:02.30Z\n2024-03-09");
    }
}
