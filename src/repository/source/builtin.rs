use chrono::NaiveDate;
use std::{sync::Arc, time::Instant};
use tracing::debug;

use crate::{
    repository::{County, Repository, Township, TravelDate},
    shared::{Score, fuzzy, time::Duration},
};

struct BuiltinCounty {
    id: &'static str,
    name: &'static str,
    romanized: &'static str,
}

struct BuiltinTownship {
    id: &'static str,
    county_id: &'static str,
    name: &'static str,
    romanized: &'static str,
    time_offset_minutes: u32,
    south_link: u8,
    transfer_tip: &'static str,
}

struct BuiltinDate {
    day: u32,
    label: &'static str,
    traffic_entropy: u8,
    advice: &'static str,
}

const HOLIDAY_YEAR: i32 = 2026;
const HOLIDAY_MONTH: u32 = 2;

const STATION_TIP: &str = "Taxis or rental scooters in front of the station are the quickest option.";

const COUNTIES: &[BuiltinCounty] = &[
    BuiltinCounty {
        id: "hualien",
        name: "花蓮縣",
        romanized: "Hualien County",
    },
    BuiltinCounty {
        id: "taitung",
        name: "台東縣",
        romanized: "Taitung County",
    },
];

const TOWNSHIPS: &[BuiltinTownship] = &[
    BuiltinTownship {
        id: "hualien-city",
        county_id: "hualien",
        name: "花蓮市/吉安",
        romanized: "Hualien City / Ji'an",
        time_offset_minutes: 0,
        south_link: 10,
        transfer_tip: STATION_TIP,
    },
    BuiltinTownship {
        id: "shoufeng",
        county_id: "hualien",
        name: "壽豐/鳳林",
        romanized: "Shoufeng / Fenglin",
        time_offset_minutes: 0,
        south_link: 20,
        transfer_tip: STATION_TIP,
    },
    BuiltinTownship {
        id: "guangfu",
        county_id: "hualien",
        name: "光復/瑞穗",
        romanized: "Guangfu / Ruisui",
        time_offset_minutes: 0,
        south_link: 40,
        transfer_tip: STATION_TIP,
    },
    BuiltinTownship {
        id: "yuli",
        county_id: "hualien",
        name: "玉里/富里 (南花蓮)",
        romanized: "Yuli / Fuli (South Hualien)",
        time_offset_minutes: 30,
        south_link: 75,
        transfer_tip: "Get off at Yuli Station where more trains stop, then continue by taxi or bus.",
    },
    BuiltinTownship {
        id: "fengbin",
        county_id: "hualien",
        name: "豐濱 (海線)",
        romanized: "Fengbin (Coast)",
        time_offset_minutes: 0,
        south_link: 15,
        transfer_tip: "From Hualien Station take Hualien Bus 1140/1145 along the coast.",
    },
    BuiltinTownship {
        id: "chishang",
        county_id: "taitung",
        name: "池上/關山 (縱谷)",
        romanized: "Chishang / Guanshan (Rift Valley)",
        time_offset_minutes: 60,
        south_link: 80,
        transfer_tip: STATION_TIP,
    },
    BuiltinTownship {
        id: "taitung-city",
        county_id: "taitung",
        name: "台東市/卑南",
        romanized: "Taitung City / Beinan",
        time_offset_minutes: 60,
        south_link: 90,
        transfer_tip: "City buses and the Puyuma bus are convenient from Taitung Station.",
    },
    BuiltinTownship {
        id: "chenggong",
        county_id: "taitung",
        name: "成功/長濱 (海線)",
        romanized: "Chenggong / Changbin (Coast)",
        time_offset_minutes: 60,
        south_link: 50,
        transfer_tip: STATION_TIP,
    },
    BuiltinTownship {
        id: "taimali",
        county_id: "taitung",
        name: "太麻里/大武 (南迴)",
        romanized: "Taimali / Dawu (South-Link)",
        time_offset_minutes: 60,
        south_link: 95,
        transfer_tip: STATION_TIP,
    },
];

const DATES: &[BuiltinDate] = &[
    BuiltinDate {
        day: 13,
        label: "Day before the holiday (rush after work)",
        traffic_entropy: 70,
        advice: "Everyone leaves straight from the office. Roads fill up from the afternoon.",
    },
    BuiltinDate {
        day: 14,
        label: "First day of the holiday (homebound peak)",
        traffic_entropy: 95,
        advice: "The worst day of the year on Freeway 5. Avoid daytime driving at all costs.",
    },
    BuiltinDate {
        day: 15,
        label: "Little New Year's Eve (last shopping)",
        traffic_entropy: 85,
        advice: "Still heavy eastbound, but the peak is behind you by the evening.",
    },
    BuiltinDate {
        day: 16,
        label: "New Year's Eve (reunion dinner)",
        traffic_entropy: 40,
        advice: "Most people are already home. Leave early to make the reunion dinner.",
    },
    BuiltinDate {
        day: 17,
        label: "First day of the New Year (spring outing)",
        traffic_entropy: 30,
        advice: "Quiet eastbound. Watch for local temple traffic near the destination.",
    },
];

impl Repository {
    /// The Lunar New Year 2026 tables for Hualien and Taitung.
    pub fn builtin() -> Self {
        debug!("Loading builtin tables...");
        let now = Instant::now();
        let mut repository = Self::new();
        repository.counties = COUNTIES
            .iter()
            .enumerate()
            .map(|(i, county)| County {
                index: i as u32,
                id: county.id.into(),
                name: county.name.into(),
                normalized_name: fuzzy::normalize(county.romanized).into(),
            })
            .collect();

        let county_index = |id: &str| {
            COUNTIES
                .iter()
                .position(|county| county.id == id)
                .unwrap_or_default() as u32
        };
        repository.townships = TOWNSHIPS
            .iter()
            .enumerate()
            .map(|(i, township)| Township {
                index: i as u32,
                id: township.id.into(),
                county_id: township.county_id.into(),
                county_index: county_index(township.county_id),
                name: township.name.into(),
                normalized_name: fuzzy::normalize(township.romanized).into(),
                time_offset: Duration::from_minutes(township.time_offset_minutes),
                south_link: Score::new(township.south_link),
                transfer_tip: Arc::from(township.transfer_tip),
            })
            .collect();

        repository.dates = DATES
            .iter()
            .filter_map(|date| {
                Some(TravelDate {
                    date: NaiveDate::from_ymd_opt(HOLIDAY_YEAR, HOLIDAY_MONTH, date.day)?,
                    label: date.label.into(),
                    traffic_entropy: Score::new(date.traffic_entropy),
                    advice: date.advice.into(),
                })
            })
            .collect();

        repository.generate_lookups();
        debug!("Loading builtin tables took {:?}", now.elapsed());
        repository
    }
}
