//! Row serialization for the training log.
//!
//! Field order: `Id, Date, Sport, DurationMin, Calories, DistanceKm, RPE, AvgHR, Note`.
//! Fields are comma-separated and only quoted when their content needs it,
//! except the free-text note which is always quoted. Embedded double quotes
//! are doubled. Absent optional values are written as empty strings.
//!
//! ```text
//! Id,Date,Sport,DurationMin,Calories,DistanceKm,RPE,AvgHR,Note
//! 3f2a…,2024-01-01,Gym,30,,,,,"legs, ""heavy"""
//! ```

use crate::errors::AppResult;
use crate::models::SessionEntry;
use crate::models::entry::opt_to_string;
use csv::{QuoteStyle, WriterBuilder};
use std::io::{BufWriter, Write};

pub const HEADER: [&str; 9] = [
    "Id",
    "Date",
    "Sport",
    "DurationMin",
    "Calories",
    "DistanceKm",
    "RPE",
    "AvgHR",
    "Note",
];

pub(crate) fn writer<W: Write>(inner: W) -> BufWriter<W> {
    BufWriter::new(inner)
}

pub(crate) fn write_header<W: Write>(out: &mut W) -> AppResult<()> {
    writeln!(out, "{}", HEADER.join(","))?;
    Ok(())
}

pub(crate) fn write_entry<W: Write>(out: &mut W, e: &SessionEntry) -> AppResult<()> {
    writeln!(out, "{}", to_line(e)?)?;
    Ok(())
}

/// String form of every column, in file order.
pub fn to_fields(e: &SessionEntry) -> [String; 9] {
    [
        e.id.clone(),
        e.date_str(),
        e.sport.as_str().to_string(),
        e.duration_minutes.to_string(),
        opt_to_string(e.calories),
        e.distance_str(),
        opt_to_string(e.rpe),
        opt_to_string(e.avg_heart_rate),
        e.note.clone(),
    ]
}

/// One entry as a single CSV line (without the trailing newline).
pub fn to_line(e: &SessionEntry) -> AppResult<String> {
    let [id, date, sport, duration, calories, distance, rpe, avg_hr, note] = to_fields(e);

    let head = encode(
        &[id, date, sport, duration, calories, distance, rpe, avg_hr],
        QuoteStyle::Necessary,
    )?;
    let note = encode(&[note], QuoteStyle::Always)?;

    Ok(format!("{head},{note}"))
}

/// Encode one record with the given quoting, without the record terminator.
fn encode(fields: &[String], style: QuoteStyle) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(style)
        .from_writer(Vec::new());
    wtr.write_record(fields)?;

    let bytes = wtr
        .into_inner()
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let line = String::from_utf8_lossy(&bytes);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
