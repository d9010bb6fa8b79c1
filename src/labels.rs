//! Level → label lookup tables for the qualitative diary fields
//!
//! The spreadsheet is Russian throughout, so the labels are too. Lookups are
//! deterministic; any randomness happens in the callers that pick the level.

use crate::error::{DiaryError, Result};

const APPETITE: [&str; 3] = ["плохой", "хороший", "отличный"];

const WELL_BEING: [&str; 3] = ["удовл.", "хорошее", "отличное"];

const IRRITABILITY: [&str; 2] = ["нормальная", "повышенная"];

// Level 3 is the "no exercise" slot; the table is not monotonic in effort.
const PHYSICAL_EXERCISE: [&str; 8] = [
    "30 мин\n(пешая прогулка)",
    "1 ч\n(пешая прогулка)",
    "1,5 ч\n(пешая прогулка)",
    "нет",
    "30 мин\n(пешая прогулка)",
    "1 ч\n(спортзал)",
    "10 мин\n(пробежка на улице)",
    "1 ч\n(пешая прогулка)",
];

/// Symptom flag value for an absent symptom
pub const NO: &str = "нет";

/// Symptom flag value for a present symptom
pub const YES: &str = "да";

fn lookup(table: &'static [&'static str], field: &'static str, level: i32) -> Result<&'static str> {
    usize::try_from(level)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .ok_or(DiaryError::LevelOutOfRange {
            field,
            max: table.len() as i32 - 1,
            level,
        })
}

/// Appetite label: 0 - bad, 1 - good, 2 - great
pub fn appetite(level: i32) -> Result<&'static str> {
    lookup(&APPETITE, "appetite", level)
}

/// Well-being label: 0 - fair, 1 - good, 2 - excellent
pub fn well_being(level: i32) -> Result<&'static str> {
    lookup(&WELL_BEING, "well-being", level)
}

/// Irritability label: 0 - normal, 1 - elevated
pub fn irritability(level: i32) -> Result<&'static str> {
    lookup(&IRRITABILITY, "irritability", level)
}

/// Physical exercise description for levels 0-7
pub fn physical_exercise(level: i32) -> Result<&'static str> {
    lookup(&PHYSICAL_EXERCISE, "physical exercise", level)
}

/// Render a symptom flag
pub fn flag(present: bool) -> &'static str {
    if present {
        YES
    } else {
        NO
    }
}
