use chrono::{NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

use diaryrs::models::{BloodPressure, DiaryParams, PersonParams, SleepWindow};
use diaryrs::{diary, export};

/// Integration tests that drive the generator end to end

fn baseline_person() -> PersonParams {
    PersonParams::new(
        180.0,
        75.0,
        65,
        BloodPressure::new(120, 80).unwrap(),
        1,
        SleepWindow {
            start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        },
    )
    .unwrap()
}

fn three_day_diary() -> DiaryParams {
    DiaryParams::new(
        NaiveDate::from_ymd_opt(2022, 9, 10).unwrap(),
        NaiveDate::from_ymd_opt(2022, 9, 12).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_three_day_diary_rows_are_complete() {
    let mut rng = StdRng::seed_from_u64(2022);
    let rows = diary::generate(&mut rng, &baseline_person(), &three_day_diary()).unwrap();

    assert_eq!(rows.len(), 3);
    for row in &rows {
        let record = row.to_record();
        assert_eq!(record.len(), 16);
        for field in &record {
            assert!(!field.is_empty(), "empty field in {record:?}");
        }
    }
    assert_eq!(rows[0].date, "10.09");
    assert_eq!(rows[1].date, "11.09");
    assert_eq!(rows[2].date, "12.09");
}

#[test]
fn test_numeric_fields_stay_near_the_baseline() {
    let person = baseline_person();
    let mut rng = StdRng::seed_from_u64(99);
    let diary_params = DiaryParams::new(
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2022, 12, 31).unwrap(),
    )
    .unwrap();

    for row in diary::generate(&mut rng, &person, &diary_params).unwrap() {
        assert_eq!(row.height_cm, 180);
        assert!(row.weight_kg > 72.0 && row.weight_kg <= 77.0);
        assert!((row.heart_rate - 65).abs() <= 11);

        let (upper, lower) = row.blood_pressure.split_once('/').unwrap();
        let upper: i32 = upper.parse().unwrap();
        let lower: i32 = lower.parse().unwrap();
        assert!((upper - 120).abs() <= 10);
        assert!((lower - 80).abs() <= 7);
    }
}

#[test]
fn test_every_generated_sleep_duration_is_on_the_clock() {
    let person = baseline_person();
    let mut rng = StdRng::seed_from_u64(4);
    let diary_params = DiaryParams::new(
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2022, 6, 30).unwrap(),
    )
    .unwrap();

    for row in diary::generate(&mut rng, &person, &diary_params).unwrap() {
        let duration = row.sleep.split_once('\n').unwrap().0;
        let (h, m) = duration.split_once(':').unwrap();
        let h: u32 = h.parse().unwrap();
        let m: u32 = m.parse().unwrap();
        assert!(h <= 23, "bad duration {duration}");
        assert!(m <= 59, "bad duration {duration}");
    }
}

#[test]
fn test_year_spanning_diary_uses_full_date_labels() {
    let mut rng = StdRng::seed_from_u64(1);
    let diary_params = DiaryParams::new(
        NaiveDate::from_ymd_opt(2022, 12, 31).unwrap(),
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    )
    .unwrap();

    let rows = diary::generate(&mut rng, &baseline_person(), &diary_params).unwrap();
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.date.len(), "DD.MM.YYYY".len(), "label {}", row.date);
    }
}

#[test]
fn test_end_to_end_artifact() {
    let mut rng = StdRng::seed_from_u64(2022);
    let rows = diary::generate(&mut rng, &baseline_person(), &three_day_diary()).unwrap();

    let temp_file = NamedTempFile::new().unwrap();
    export::csv::write_diary(&rows, temp_file.path()).unwrap();

    let bytes = std::fs::read(temp_file.path()).unwrap();
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");

    let content = String::from_utf8(bytes).unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_reader(content.trim_start_matches('\u{feff}').as_bytes());

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    // Numbering row, label row, then one record per day.
    assert_eq!(records.len(), 5);
    assert_eq!(&records[1][1], "Рост (см)");
    assert_eq!(&records[1][15], "Раздражительность");
    for record in &records[2..] {
        assert_eq!(record.len(), 16);
    }
}

#[test]
fn test_validation_failure_produces_no_rows() {
    assert!(PersonParams::new(
        0.0,
        75.0,
        65,
        BloodPressure::new(120, 80).unwrap(),
        1,
        SleepWindow {
            start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        },
    )
    .is_err());

    assert!(DiaryParams::new(
        NaiveDate::from_ymd_opt(2022, 10, 10).unwrap(),
        NaiveDate::from_ymd_opt(2022, 9, 10).unwrap(),
    )
    .is_err());
}
