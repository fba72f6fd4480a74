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

use clap::{Arg, ArgAction, Command};
use gps_logger::{Timestamp, create_output, stamp_line, write_lines};
use std::io;
use std::process::ExitCode;
use tracing::{debug, error, info};

fn validate_empty_path_value(value: &str) -> Result<String, String> {
    gps_logger::is_empty_path(value)?;
    Ok(value.to_owned())
}

fn field_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .value_parser(gps_logger::parse_u8_field)
        .required(true)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let matches = Command::new("GPS Logger: Timestamp Renderer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render GPS fix date and time fields as YYYY-MM-DDTHH:MM:SS.HHZ")
        .arg(
            Arg::new("year")
                .help("Calendar year, rendered as four digits")
                .value_parser(gps_logger::parse_year)
                .required(true),
        )
        .arg(field_arg("month", "Month of the year"))
        .arg(field_arg("day", "Day of the month"))
        .arg(field_arg("hour", "Hour of the day"))
        .arg(field_arg("minute", "Minute of the hour"))
        .arg(field_arg("second", "Second of the minute"))
        .arg(
            Arg::new("hundredths")
                .help("Hundredths of a second")
                .value_parser(gps_logger::parse_u8_field)
                .default_value("0"),
        )
        .arg(
            Arg::new("validate")
                .help("Reject fields outside their calendar and clock ranges")
                .short('v')
                .long("validate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .help("The file to write the timestamps to")
                .short('f')
                .long("file")
                .value_parser(validate_empty_path_value),
        )
        .arg(
            Arg::new("count")
                .help("Number of times to write the timestamp")
                .short('n')
                .long("count")
                .value_parser(gps_logger::parse_count)
                .default_value("1"),
        )
        .get_matches();

    let field = |name: &str| *matches.get_one::<u8>(name).expect("field is required");
    let ts = Timestamp::new(
        *matches.get_one::<u16>("year").expect("year is required"),
        field("month"),
        field("day"),
        field("hour"),
        field("minute"),
        field("second"),
        field("hundredths"),
    );
    let count = *matches.get_one::<u32>("count").expect("count has a default");
    debug!(?ts, count, "fields parsed");

    let line = match stamp_line(&ts, matches.get_flag("validate")) {
        Ok(line) => line,
        Err(e) => {
            error!(field = e.field(), "{e}");
            return ExitCode::from(2);
        }
    };

    let result = match matches.get_one::<String>("file") {
        Some(path) => create_output(path).and_then(|mut file| {
            write_lines(&line, count, &mut file)?;
            info!(path = %path, count, "timestamps written");
            Ok(())
        }),
        None => write_lines(&line, count, &mut io::stdout().lock()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("failed to write timestamp: {e}");
            ExitCode::FAILURE
        }
    }
}
