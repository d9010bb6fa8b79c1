use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use colored::*;

use diaryrs::logging::{self, LogLevel};
use diaryrs::models::{BloodPressure, DiaryParams, PersonParams, SleepWindow};
use diaryrs::{diary, export};

/// diaryrs - Synthetic Health Diary Generator
///
/// Generates a spreadsheet of randomized daily health parameters from a
/// person's baseline values.
///
/// Disclaimer: the generated values are completely fictional and cannot be
/// associated with any person. The tool randomly makes values up from the
/// parameters you provide; never treat its output at face value. If you have
/// health problems, please consult your doctor.
#[derive(Parser)]
#[command(name = "diaryrs")]
#[command(version = "0.1.0")]
#[command(about = "Synthetic health diary generator")]
struct Cli {
    /// An output file path to write the data to
    #[arg(value_name = "path/to/file", default_value = "diary.csv")]
    outfile: PathBuf,

    /// A person's height in cm
    #[arg(long, value_name = "N cm")]
    height: f64,

    /// A person's weight in kg
    #[arg(short, long, value_name = "N kg")]
    weight: f64,

    /// A person's resting heart beat rate in beats per minute
    #[arg(long, value_name = "N bpm")]
    heart_beat_rate: i32,

    /// A person's arterial blood pressure
    #[arg(long, value_name = "N/M", value_parser = parse_blood_pressure)]
    blood_pressure: BloodPressure,

    /// A person's usual appetite: 0 - bad, 1 - good, 2 - great
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    appetite: u8,

    /// A person's usual bedtime (24-hour format)
    #[arg(long, value_name = "HH:MM", value_parser = parse_time, default_value = "22:00")]
    sleep_start: NaiveTime,

    /// A person's usual wake-up time (24-hour format)
    #[arg(long, value_name = "HH:MM", value_parser = parse_time, default_value = "07:00")]
    sleep_end: NaiveTime,

    /// The start date of the diary
    #[arg(long, value_name = "dd.mm.yy | dd.mm.yyyy", value_parser = parse_date, default_value = "10.09.2022")]
    date_start: NaiveDate,

    /// The end date of the diary
    #[arg(long, value_name = "dd.mm.yy | dd.mm.yyyy", value_parser = parse_date, default_value = "10.10.2022")]
    date_end: NaiveDate,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    let err = || format!("not a valid time format (HH:MM expected): {s}");
    let (hour, minute) = s.split_once(':').ok_or_else(err)?;
    if hour.len() != 2 || minute.len() != 2 {
        return Err(err());
    }
    let hour: u32 = hour.parse().map_err(|_| err())?;
    let minute: u32 = minute.parse().map_err(|_| err())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(err)
}

fn parse_blood_pressure(s: &str) -> Result<BloodPressure, String> {
    let err = || format!("not a valid arterial blood pressure format (N/M expected): {s}");
    let (upper, lower) = s.split_once('/').ok_or_else(err)?;
    let upper: i32 = upper.parse().map_err(|_| err())?;
    let lower: i32 = lower.parse().map_err(|_| err())?;
    BloodPressure::new(upper, lower).map_err(|e| e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%d.%m.%y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d.%m.%Y"))
        .map_err(|_| format!("not a valid date format (dd.mm.yy or dd.mm.yyyy expected): {s}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(LogLevel::from_verbosity(cli.verbose))?;

    let person = PersonParams::new(
        cli.height,
        cli.weight,
        cli.heart_beat_rate,
        cli.blood_pressure,
        cli.appetite,
        SleepWindow {
            start: cli.sleep_start,
            end: cli.sleep_end,
        },
    )?;
    let diary_params = DiaryParams::new(cli.date_start, cli.date_end)?;

    println!("{}", "Generating diary...".green().bold());
    let mut rng = rand::thread_rng();
    let rows = diary::generate(&mut rng, &person, &diary_params)?;
    println!(
        "  Days: {} ({} – {})",
        rows.len(),
        cli.date_start.format("%d.%m.%Y"),
        cli.date_end.format("%d.%m.%Y")
    );

    export::csv::write_diary(&rows, &cli.outfile)?;
    println!(
        "{}",
        format!("✓ Diary written to {}", cli.outfile.display()).green()
    );

    Ok(())
}
