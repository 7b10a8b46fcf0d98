use chrono::NaiveDate;

use vaxx_cases::utils::test::{ONTARIO_SAMPLE_CSV, ontario_sample_series, write_region_file};
use vaxx_cases::{
    Error, RegionConstants, VaccineMix, compare_with_reference, estimate_vaccinated_cases,
    load_daily_records, load_reference_series, load_region_file,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 8, day).unwrap()
}

#[test]
fn test_load_region_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_region_file(dir.path(), "ontario.csv", ONTARIO_SAMPLE_CSV).unwrap();

    let data = load_region_file(&path).unwrap();
    assert_eq!(data.records, ontario_sample_series().unwrap());
    assert_eq!(data.reference.get(&date(9)), Some(24));
    assert_eq!(data.reference.get(&date(10)), Some(170));

    assert_eq!(load_daily_records(&path).unwrap(), data.records);
    assert_eq!(load_reference_series(&path).unwrap(), data.reference);
}

#[test]
fn test_file_to_comparison() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_region_file(dir.path(), "ontario.csv", ONTARIO_SAMPLE_CSV).unwrap();
    let data = load_region_file(&path).unwrap();

    let region = RegionConstants::ontario();
    let estimate =
        estimate_vaccinated_cases(&data.records, &region, &VaccineMix::default()).unwrap();
    let comparison = compare_with_reference(&region.name, &estimate, &data.reference);

    let differences: Vec<Option<i64>> = comparison.rows.iter().map(|r| r.difference).collect();
    assert_eq!(differences, vec![Some(-5), Some(16)]);
    assert_eq!(comparison.summary.total_estimated, 205);
    assert_eq!(comparison.summary.total_reference, 194);
    assert_eq!(comparison.summary.mean_absolute_error, Some(10.5));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_region_file(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_duplicate_dates_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_region_file(
        dir.path(),
        "dup.csv",
        "date,ref,vax,cases\n2021-08-09,1,10,20\n2021-08-09,1,10,20\n",
    )
    .unwrap();
    let err = load_region_file(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { .. }));
}

#[test]
fn test_header_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_region_file(dir.path(), "empty.csv", "date,ref,vax,cases\n").unwrap();
    let data = load_region_file(&path).unwrap();
    assert!(data.records.is_empty());
    assert!(data.reference.is_empty());
}
