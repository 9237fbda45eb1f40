use chrono::NaiveDate;
use homeward::{
    advisor::{Error, Focus, Mode, RoadStatus, Strategy, Tag},
    repository::Repository,
    shared::{Duration, Score, Time},
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
}

fn find(strategies: &[Strategy], mode: Mode) -> &Strategy {
    strategies
        .iter()
        .find(|strategy| strategy.mode == mode)
        .unwrap()
}

#[test]
fn god_mode_departure() {
    let repository = Repository::builtin();
    let strategies = repository
        .advise("hualien-city", date(17))
        .unwrap()
        .departure_at(Time::from_hour(4))
        .modes(&[Mode::Drive])
        .evaluate()
        .unwrap();
    let drive = &strategies[0];
    assert_eq!(drive.duration, Duration::from_minutes(210));
    assert_eq!(drive.pain, Score::new(26));
    assert_eq!(drive.success_rate, Score::new(89));
    assert_eq!(drive.tags, vec![Tag::Fastest]);
}

#[test]
fn gridlock_is_clamped() {
    let repository = Repository::builtin();
    let advisor = repository
        .advise("taitung-city", date(14))
        .unwrap()
        .departure_at(Time::from_hour(8))
        .modes(&[Mode::Drive]);
    assert_eq!(advisor.road_status(), RoadStatus::Gridlock);

    let strategies = advisor.evaluate().unwrap();
    let drive = &strategies[0];
    assert_eq!(drive.duration, Duration::from_minutes(675));
    assert_eq!(drive.pain, Score::MAX);
    assert_eq!(drive.success_rate, Score::new(16));
    assert!(drive.tags.contains(&Tag::Avoid));
    assert!(drive.advice.contains("03:00"));
    assert!(drive.advice.contains("Provincial Highway 61"));
}

#[test]
fn heavy_evening_traffic() {
    let repository = Repository::builtin();
    let advisor = repository
        .advise("hualien-city", date(15))
        .unwrap()
        .departure_at(Time::from_hour(18));
    assert_eq!(advisor.road_status(), RoadStatus::Heavy);
    let strategies = advisor.modes(&[Mode::Drive]).evaluate().unwrap();
    assert!(strategies[0].advice.contains("22:00"));
}

#[test]
fn rescue_plans_for_south_hualien() {
    let repository = Repository::builtin();
    let strategies = repository
        .advise("yuli", date(14))
        .unwrap()
        .departure_at(Time::from_hour(8))
        .evaluate()
        .unwrap();

    let bus_rail = find(&strategies, Mode::BusRail);
    assert_eq!(bus_rail.duration, Duration::from_minutes(330));
    assert_eq!(bus_rail.pain, Score::new(54));
    assert_eq!(bus_rail.success_rate, Score::new(81));
    assert_eq!(bus_rail.tags, vec![Tag::Recommended]);

    let origin = find(&strategies, Mode::OriginStation);
    assert_eq!(origin.duration, Duration::from_minutes(270));
    assert_eq!(origin.pain, Score::new(69));
    assert_eq!(origin.success_rate, Score::new(61));
    assert!(origin.route.contains("Shulin"));

    let south = find(&strategies, Mode::SouthLink);
    assert_eq!(south.duration, Duration::from_minutes(300));
    assert_eq!(south.pain, Score::new(40));
    assert_eq!(south.success_rate, Score::new(66));
    assert_eq!(south.tags, vec![Tag::Comfort]);
}

#[test]
fn south_link_is_a_detour_up_north() {
    let repository = Repository::builtin();
    let strategies = repository
        .advise("hualien-city", date(14))
        .unwrap()
        .departure_at(Time::from_hour(8))
        .modes(&[Mode::SouthLink, Mode::BusRail])
        .evaluate()
        .unwrap();
    let south = find(&strategies, Mode::SouthLink);
    assert_eq!(south.tags, vec![Tag::Detour]);
    assert!(south.duration > find(&strategies, Mode::BusRail).duration);
    assert_eq!(strategies[0].mode, Mode::BusRail);
}

#[test]
fn ticket_holders_get_the_transfer_tip() {
    let repository = Repository::builtin();
    let strategies = repository
        .advise("fengbin", date(16))
        .unwrap()
        .modes(&[Mode::Ticketed])
        .evaluate()
        .unwrap();
    assert_eq!(strategies.len(), 1);
    assert!(strategies[0].advice.contains("1140/1145"));
    assert_eq!(strategies[0].success_rate, Score::new(98));

    let strategies = repository
        .advise("yuli", date(16))
        .unwrap()
        .modes(&[Mode::Ticketed])
        .evaluate()
        .unwrap();
    assert!(strategies[0].advice.contains("Yuli Station"));
}

#[test]
fn ranking_follows_focus() {
    let repository = Repository::builtin();
    let advisor = repository
        .advise("yuli", date(14))
        .unwrap()
        .departure_at(Time::from_hour(8));
    let order = |focus: Focus| -> Vec<Mode> {
        repository
            .advise("yuli", date(14))
            .unwrap()
            .departure_at(advisor.departure())
            .focus(focus)
            .evaluate()
            .unwrap()
            .into_iter()
            .map(|strategy| strategy.mode)
            .collect()
    };

    assert_eq!(
        order(Focus::SuccessRate),
        vec![
            Mode::Ticketed,
            Mode::BusRail,
            Mode::SouthLink,
            Mode::OriginStation,
            Mode::Drive
        ]
    );
    assert_eq!(
        order(Focus::Pain),
        vec![
            Mode::Ticketed,
            Mode::SouthLink,
            Mode::BusRail,
            Mode::OriginStation,
            Mode::Drive
        ]
    );
    assert_eq!(
        order(Focus::Time),
        vec![
            Mode::Ticketed,
            Mode::OriginStation,
            Mode::SouthLink,
            Mode::BusRail,
            Mode::Drive
        ]
    );
}

#[test]
fn properties_hold_everywhere() {
    let repository = Repository::builtin();
    let days = [date(12), date(13), date(14), date(15), date(16), date(17)];
    let focuses = [Focus::SuccessRate, Focus::Pain, Focus::Time];
    for township in repository.townships.iter() {
        for day in days {
            for hour in 0..24 {
                for mode in Mode::ALL {
                    for focus in focuses {
                        let strategies = repository
                            .advise(&township.id, day)
                            .unwrap()
                            .departure_at(Time::from_hour(hour))
                            .modes(&[mode, Mode::BusRail])
                            .focus(focus)
                            .evaluate()
                            .unwrap();
                        assert!(!strategies.is_empty());
                        assert!(strategies.iter().all(|strategy| {
                            strategy.pain <= Score::MAX && strategy.success_rate <= Score::MAX
                        }));
                        assert!(strategies.windows(2).all(|pair| {
                            focus.compare(&pair[0], &pair[1]) != std::cmp::Ordering::Greater
                        }));
                    }
                }
            }
        }
    }
}

#[test]
fn duplicate_modes_are_evaluated_once() {
    let repository = Repository::builtin();
    let strategies = repository
        .advise("chishang", date(13))
        .unwrap()
        .modes(&[Mode::BusRail, Mode::BusRail, Mode::Drive])
        .evaluate()
        .unwrap();
    assert_eq!(strategies.len(), 2);
}

#[test]
fn no_mode_selected() {
    let repository = Repository::builtin();
    let err = repository
        .advise("chishang", date(13))
        .unwrap()
        .modes(&[])
        .evaluate()
        .unwrap_err();
    assert_eq!(err, Error::NoModeSelected);
}

#[test]
fn invalid_hour() {
    let repository = Repository::builtin();
    let err = repository
        .advise("chishang", date(13))
        .unwrap()
        .departure_at(Time::from_hour(24))
        .evaluate()
        .unwrap_err();
    assert_eq!(err, Error::InvalidHour(24));
}

#[test]
fn unknown_township() {
    let repository = Repository::builtin();
    let err = repository.advise("taipei", date(13)).err().unwrap();
    assert_eq!(err, Error::UnknownTownship("taipei".into()));
}

#[test]
fn unknown_date_uses_ordinary_day() {
    let repository = Repository::builtin();
    let advisor = repository
        .advise("taimali", NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        .unwrap()
        .departure_at(Time::from_hour(8));
    assert_eq!(advisor.road_status(), RoadStatus::Normal);
    assert!(!advisor.date().is_jam_day());
    assert!(!advisor.evaluate().unwrap().is_empty());
}

#[test]
fn card_rendering() {
    let repository = Repository::builtin();
    let strategies = repository
        .advise("taitung-city", date(16))
        .unwrap()
        .departure_at(Time::from_hour(10))
        .modes(&[Mode::BusRail])
        .evaluate()
        .unwrap();
    let card = strategies[0].to_string();
    assert!(
        card.starts_with("[Plan A: bus and rail (most reliable)] 5.5 h | pain 43 | success 86%")
    );
    assert!(card.contains("route: Taoyuan ➔ Taipei Bus Station"));
    assert!(card.ends_with("tags: recommended"));
}

#[test]
fn parse_focus() {
    assert_eq!("time".parse::<Focus>().unwrap(), Focus::Time);
    assert_eq!("success".parse::<Focus>().unwrap(), Focus::SuccessRate);
    assert_eq!(
        "comfort".parse::<Focus>().unwrap_err(),
        Error::UnknownFocus("comfort".into())
    );
}
