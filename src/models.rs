use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::labels;

/// Arterial blood pressure as an upper/lower pair in mmHg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub upper: i32,
    pub lower: i32,
}

impl BloodPressure {
    /// Construct a validated pair; both components must be positive.
    pub fn new(upper: i32, lower: i32) -> Result<Self> {
        if upper <= 0 || lower <= 0 {
            return Err(ValidationError::InvalidBloodPressure { upper, lower }.into());
        }
        Ok(BloodPressure { upper, lower })
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.upper, self.lower)
    }
}

/// Usual sleep window: bedtime and wake-up time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Baseline physiological parameters of the diary's subject
///
/// Validated once at construction and immutable afterwards. Every generated
/// day perturbs these values independently; no state is carried across days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonParams {
    /// Height in cm
    pub height: f64,

    /// Weight in kg
    pub weight: f64,

    /// Resting heart rate in beats per minute
    pub heart_beat_rate: i32,

    /// Arterial blood pressure
    pub blood_pressure: BloodPressure,

    /// Usual appetite level: 0 - bad, 1 - good, 2 - great
    pub appetite: u8,

    /// Usual sleep window
    pub sleep: SleepWindow,
}

impl PersonParams {
    pub fn new(
        height: f64,
        weight: f64,
        heart_beat_rate: i32,
        blood_pressure: BloodPressure,
        appetite: u8,
        sleep: SleepWindow,
    ) -> Result<Self> {
        if height <= 0.0 {
            return Err(ValidationError::NonPositiveHeight { value: height }.into());
        }
        if weight <= 0.0 {
            return Err(ValidationError::NonPositiveWeight { value: weight }.into());
        }
        if heart_beat_rate <= 0 {
            return Err(ValidationError::NonPositiveHeartRate {
                value: heart_beat_rate,
            }
            .into());
        }
        if appetite > 2 {
            return Err(ValidationError::AppetiteOutOfRange { level: appetite }.into());
        }

        Ok(PersonParams {
            height,
            weight,
            heart_beat_rate,
            blood_pressure,
            appetite,
            sleep,
        })
    }
}

/// Inclusive date range covered by the diary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryParams {
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

impl DiaryParams {
    pub fn new(date_start: NaiveDate, date_end: NaiveDate) -> Result<Self> {
        if date_end < date_start {
            return Err(ValidationError::InvertedDateRange {
                start: date_start,
                end: date_end,
            }
            .into());
        }
        Ok(DiaryParams {
            date_start,
            date_end,
        })
    }
}

/// One generated diary day
///
/// Field order matches the spreadsheet columns exactly: the date label,
/// eight health parameters, six symptom flags, and irritability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRow {
    /// Date label, `DD.MM` or `DD.MM.YYYY`
    pub date: String,

    /// Height in cm, rounded to the nearest integer
    pub height_cm: i64,

    /// Weight in kg, rendered with one decimal place
    pub weight_kg: f64,

    /// Heart rate in beats per minute
    pub heart_rate: i32,

    /// Blood pressure as `upper/lower`
    pub blood_pressure: String,

    /// Appetite label
    pub appetite: String,

    /// Sleep duration plus the window it was computed from
    pub sleep: String,

    /// Physical exercise label
    pub physical_exercise: String,

    /// Well-being label
    pub well_being: String,

    /// Drowsiness / fatigue
    pub drowsiness: bool,

    /// Unable to concentrate
    pub concentration_trouble: bool,

    pub headaches: bool,
    pub stomach_aches: bool,
    pub dry_eyes: bool,
    pub dizziness: bool,

    /// Irritability label
    pub irritability: String,
}

impl DayRow {
    /// The row as the ordered 16-column spreadsheet record.
    pub fn to_record(&self) -> [String; 16] {
        [
            self.date.clone(),
            self.height_cm.to_string(),
            format!("{:.1}", self.weight_kg),
            self.heart_rate.to_string(),
            self.blood_pressure.clone(),
            self.appetite.clone(),
            self.sleep.clone(),
            self.physical_exercise.clone(),
            self.well_being.clone(),
            labels::flag(self.drowsiness).to_string(),
            labels::flag(self.concentration_trouble).to_string(),
            labels::flag(self.headaches).to_string(),
            labels::flag(self.stomach_aches).to_string(),
            labels::flag(self.dry_eyes).to_string(),
            labels::flag(self.dizziness).to_string(),
            self.irritability.clone(),
        ]
    }
}
