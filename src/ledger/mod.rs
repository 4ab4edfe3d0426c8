//! Sign-up sheet ingestion.
//!
//! The external row contract is a CSV sheet with the fixed header
//! `Event, Start, End, Rooms, #Needed TAs` followed by any number of TA
//! columns. Timestamps are `YYYY-MM-DD HH:MM`, rooms are a comma-separated
//! list inside one cell, and rows may have different widths (a session
//! with no sign-ups has no TA cells at all). Malformed rows are hard
//! errors carrying their 1-based line number; silently dropping a row
//! would silently drop somebody's pay.

use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{EngineError, EngineResult};
use crate::models::SessionRecord;

/// The required leading columns of a sign-up sheet, in order.
pub const SHEET_COLUMNS: [&str; 5] = ["Event", "Start", "End", "Rooms", "#Needed TAs"];

/// The timestamp format used in sign-up sheets.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Reads a sign-up sheet from a CSV file.
pub fn read_sheet<P: AsRef<Path>>(path: P) -> EngineResult<Vec<SessionRecord>> {
    let file = File::open(path.as_ref()).map_err(|e| EngineError::SheetReadError {
        message: format!("{}: {e}", path.as_ref().display()),
    })?;
    parse_sheet(file)
}

/// Parses a sign-up sheet from any reader.
///
/// The header row is validated against [`SHEET_COLUMNS`]; every following
/// row becomes one [`SessionRecord`]. Entirely blank rows are skipped.
pub fn parse_sheet<R: io::Read>(reader: R) -> EngineResult<Vec<SessionRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| EngineError::SheetReadError {
            message: e.to_string(),
        })?
        .clone();
    validate_header(&headers)?;

    let mut sessions = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| EngineError::SheetReadError {
            message: e.to_string(),
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.iter().all(str::is_empty) {
            continue;
        }

        sessions.push(parse_row(&record, line)?);
    }

    Ok(sessions)
}

fn validate_header(headers: &StringRecord) -> EngineResult<()> {
    for (index, expected) in SHEET_COLUMNS.iter().enumerate() {
        if headers.get(index) != Some(*expected) {
            return Err(EngineError::MissingColumn {
                column: (*expected).to_string(),
            });
        }
    }
    Ok(())
}

fn parse_row(record: &StringRecord, line: u64) -> EngineResult<SessionRecord> {
    let field = |index: usize, column: &str| -> EngineResult<&str> {
        record.get(index).ok_or_else(|| EngineError::InvalidRow {
            line,
            message: format!("missing '{column}' cell"),
        })
    };

    let event_type = field(0, SHEET_COLUMNS[0])?.to_string();
    let start = parse_timestamp(field(1, SHEET_COLUMNS[1])?, SHEET_COLUMNS[1], line)?;
    let end = parse_timestamp(field(2, SHEET_COLUMNS[2])?, SHEET_COLUMNS[2], line)?;

    if start > end {
        return Err(EngineError::InvalidRow {
            line,
            message: format!("session ends before it starts ({start} > {end})"),
        });
    }

    let rooms = field(3, SHEET_COLUMNS[3])?
        .split(',')
        .map(str::trim)
        .filter(|room| !room.is_empty())
        .map(str::to_string)
        .collect();

    let needed = field(4, SHEET_COLUMNS[4])?;
    let required_tas = needed.parse().map_err(|_| EngineError::InvalidRow {
        line,
        message: format!("unparseable '#Needed TAs' count '{needed}'"),
    })?;

    // TA cells are kept verbatim, blanks included; the booking-queue
    // resolver is what cleans them, so raw filters still see the sheet
    // as written.
    let claimants = record
        .iter()
        .skip(SHEET_COLUMNS.len())
        .map(str::to_string)
        .collect();

    Ok(SessionRecord {
        event_type,
        start,
        end,
        rooms,
        required_tas,
        claimants,
    })
}

fn parse_timestamp(value: &str, column: &str, line: u64) -> EngineResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| EngineError::InvalidRow {
        line,
        message: format!("unparseable '{column}' timestamp '{value}'"),
    })
}
