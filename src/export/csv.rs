//! Semicolon-delimited spreadsheet writer for the diary artifact
//!
//! MS Excel dialect: UTF-8 with a byte-order mark, `;` delimiter, CRLF
//! record terminator. Two fixed header rows (column numbering and Russian
//! column labels) precede the data rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::info;

use super::ExportError;
use crate::models::DayRow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Fixed column label row; the first cell stays empty over the date column.
pub const COLUMN_LABELS: [&str; 16] = [
    "",
    "Рост (см)",
    "Вес (кг)",
    "ЧСС (уд/мин) в покое",
    "Давление (А/Д)",
    "Аппетит",
    "Сон",
    "Физическая нагрузка",
    "Самочувствие",
    "Сонливость, усталость",
    "Невозможно сосредоточиться",
    "Головные боли",
    "Боли в желудке",
    "Сухость глаз",
    "Головокружение",
    "Раздражительность",
];

/// Column numbering row: the symptom group is numbered 8.1-8.7 under its
/// well-being parent column.
fn numbering_row() -> Vec<String> {
    let mut row = vec![String::new()];
    row.extend((1..=8).map(|i| i.to_string()));
    row.extend((1..=7).map(|i| format!("8.{}", i)));
    row
}

/// Write the diary to `path` as a semicolon-delimited spreadsheet.
pub fn write_diary<P: AsRef<Path>>(rows: &[DayRow], path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .terminator(Terminator::CRLF)
        .from_writer(file);

    writer.write_record(&numbering_row())?;
    writer.write_record(COLUMN_LABELS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = rows.len(), "diary artifact written");
    Ok(())
}
