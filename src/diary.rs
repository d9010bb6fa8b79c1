//! Day-row composition and the diary driver
//!
//! Two generation policies produce a full 16-field row for one date: the
//! regular composer perturbs every baseline, the bad-day composer degrades
//! sleep, appetite, well-being and symptoms. The driver walks the inclusive
//! date range and picks a policy per day.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::generator;
use crate::labels;
use crate::models::{DayRow, DiaryParams, PersonParams};

fn format_time(t: NaiveTime) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Sleep column text: the duration over the window it came from.
fn sleep_field(duration: &str, start: NaiveTime, end: NaiveTime) -> String {
    format!("{}\n({}–{})", duration, format_time(start), format_time(end))
}

/// Compose the row for an ordinary diary day.
///
/// Exercise and well-being levels are drawn uniformly, all symptom flags are
/// off and irritability is normal.
pub fn regular_day<R: Rng>(rng: &mut R, person: &PersonParams, date_label: &str) -> Result<DayRow> {
    let sleep = generator::daily_sleep(rng, person.sleep);
    let bp = generator::daily_blood_pressure(rng, person.blood_pressure);

    Ok(DayRow {
        date: date_label.to_string(),
        height_cm: person.height.round() as i64,
        weight_kg: generator::daily_weight(rng, person.weight),
        heart_rate: generator::daily_heart_rate(rng, person.heart_beat_rate),
        blood_pressure: bp.to_string(),
        appetite: generator::daily_appetite(rng, i32::from(person.appetite))?.to_string(),
        sleep: sleep_field(&sleep.duration, sleep.start, sleep.end),
        physical_exercise: labels::physical_exercise(rng.gen_range(0..=7))?.to_string(),
        well_being: labels::well_being(rng.gen_range(0..=2))?.to_string(),
        drowsiness: false,
        concentration_trouble: false,
        headaches: false,
        stomach_aches: false,
        dry_eyes: false,
        dizziness: false,
        irritability: labels::irritability(0)?.to_string(),
    })
}

/// Compose the row for a degraded "bad" day.
///
/// The randomized sleep window is additionally shifted (start +2h, end -1h)
/// and the duration recomputed from the shifted times. With a very short
/// baseline window the shift can cross the endpoints and the derived
/// duration comes out nonsensical; known limitation, kept as-is.
pub fn bad_day<R: Rng>(rng: &mut R, person: &PersonParams, date_label: &str) -> Result<DayRow> {
    let sleep = generator::daily_sleep(rng, person.sleep);
    let start = generator::wrap_time(sleep.start.hour() as i32 + 2, sleep.start.minute() as i32);
    let end = generator::wrap_time(sleep.end.hour() as i32 - 1, sleep.end.minute() as i32);
    let duration = generator::duration_string(start, end);

    let bp = generator::daily_blood_pressure(rng, person.blood_pressure);

    Ok(DayRow {
        date: date_label.to_string(),
        height_cm: person.height.round() as i64,
        weight_kg: generator::daily_weight(rng, person.weight),
        heart_rate: generator::daily_heart_rate(rng, person.heart_beat_rate),
        blood_pressure: bp.to_string(),
        appetite: generator::daily_appetite(rng, i32::from(person.appetite) - 2)?.to_string(),
        sleep: sleep_field(&duration, start, end),
        physical_exercise: labels::NO.to_string(),
        well_being: labels::well_being(0)?.to_string(),
        drowsiness: true,
        concentration_trouble: true,
        headaches: false,
        stomach_aches: false,
        dry_eyes: false,
        dizziness: false,
        irritability: labels::irritability(1)?.to_string(),
    })
}

/// Date label in the diary's `DD.MM` form; the 4-digit year is appended only
/// when the range spans more than one calendar year.
fn date_label(date: NaiveDate, with_year: bool) -> String {
    if with_year {
        format!("{:02}.{:02}.{}", date.day(), date.month(), date.year())
    } else {
        format!("{:02}.{:02}", date.day(), date.month())
    }
}

/// Generate the full diary: one row per day of the inclusive range, in
/// chronological order. Each day is bad with probability 1 in 11.
pub fn generate<R: Rng>(
    rng: &mut R,
    person: &PersonParams,
    diary: &DiaryParams,
) -> Result<Vec<DayRow>> {
    let with_year = diary.date_start.year() != diary.date_end.year();

    let mut rows = Vec::new();
    let mut date = diary.date_start;
    while date <= diary.date_end {
        let label = date_label(date, with_year);
        let bad = generator::is_bad_day(rng);
        debug!(%date, bad, "generating diary row");

        let row = if bad {
            bad_day(rng, person, &label)?
        } else {
            regular_day(rng, person, &label)?
        };
        rows.push(row);

        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    Ok(rows)
}
