use chrono::NaiveDate;
use homeward::{
    repository::{JAM_DAY_ENTROPY, Repository},
    shared::Duration,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
}

#[test]
fn builtin_tables() {
    let repository = Repository::builtin();
    assert_eq!(repository.counties.len(), 2);
    assert_eq!(repository.townships.len(), 9);
    assert_eq!(repository.dates.len(), 5);
}

#[test]
fn townships_keep_table_order() {
    let repository = Repository::builtin();
    let hualien: Vec<_> = repository
        .townships_by_county_id("hualien")
        .unwrap()
        .iter()
        .map(|township| township.id.to_string())
        .collect();
    assert_eq!(
        hualien,
        vec!["hualien-city", "shoufeng", "guangfu", "yuli", "fengbin"]
    );
    assert!(repository.townships_by_county_id("yilan").is_none());
}

#[test]
fn time_offsets() {
    let repository = Repository::builtin();
    let offset = |id: &str| repository.township_by_id(id).unwrap().time_offset;
    assert_eq!(offset("hualien-city"), Duration::default());
    assert_eq!(offset("yuli"), Duration::from_minutes(30));
    assert_eq!(offset("taimali"), Duration::from_hours(1));
}

#[test]
fn south_link_eligibility() {
    let repository = Repository::builtin();
    let eligible: Vec<_> = repository
        .townships
        .iter()
        .filter(|township| township.is_south_link_eligible())
        .map(|township| township.id.to_string())
        .collect();
    assert_eq!(eligible, vec!["yuli", "chishang", "taitung-city", "taimali"]);
}

#[test]
fn county_of_township() {
    let repository = Repository::builtin();
    let county = repository.county_by_township_id("chenggong").unwrap();
    assert_eq!(&*county.name, "台東縣");
    assert!(repository.county_by_township_id("taipei").is_none());
}

#[test]
fn jam_days() {
    let repository = Repository::builtin();
    let jam: Vec<_> = (13..=17)
        .map(|day| repository.travel_date(date(day)).is_jam_day())
        .collect();
    assert_eq!(jam, vec![true, true, true, false, false]);
    assert!(repository.travel_date(date(14)).traffic_entropy > JAM_DAY_ENTROPY);
}

#[test]
fn unknown_date_falls_through() {
    let repository = Repository::builtin();
    let ordinary = repository.travel_date(date(20));
    assert_eq!(ordinary.date, date(20));
    assert_eq!(&*ordinary.label, "Ordinary day");
    assert!(!ordinary.is_jam_day());
}

#[test]
fn short_label() {
    let repository = Repository::builtin();
    assert_eq!(repository.travel_date(date(14)).short_label(), "2/14 (Sat)");
    assert_eq!(repository.travel_date(date(16)).short_label(), "2/16 (Mon)");
}

#[test]
fn search_by_romanized_name() {
    let repository = Repository::builtin();
    let result = repository.search_townships_by_name("Yuli");
    assert_eq!(&*result[0].id, "yuli");
}

#[test]
fn search_by_display_name() {
    let repository = Repository::builtin();
    let result = repository.search_townships_by_name("池上");
    assert_eq!(&*result[0].id, "chishang");
}

#[test]
fn search_with_typo() {
    let repository = Repository::builtin();
    let result = repository.search_townships_by_name("fengbn");
    assert_eq!(&*result[0].id, "fengbin");
}

#[test]
fn search_counties() {
    let repository = Repository::builtin();
    let result = repository.search_counties_by_name("taitung");
    assert_eq!(&*result[0].id, "taitung");
}

#[test]
fn empty_search() {
    let repository = Repository::builtin();
    assert!(repository.search_townships_by_name("   ").is_empty());
}
