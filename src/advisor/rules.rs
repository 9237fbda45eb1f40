use crate::{
    advisor::{Mode, RoadStatus, Strategy, Tag},
    repository::{Township, TravelDate},
    shared::{Score, time::Duration},
};

/// Every trip starts in Taoyuan.
pub const ORIGIN: &str = "Taoyuan";
/// Door to door hours from Taoyuan to northern Hualien on a free road.
pub const BASELINE_HOURS: f64 = 3.5;

const SOUTH_LINK_HOURS: f64 = 4.5;
const DETOUR_HOURS: f64 = 2.0;
const DETOUR_PAIN: f64 = 20.0;

/// Everything the rules read for one evaluation.
pub(crate) struct Context<'a> {
    pub township: &'a Township,
    pub date: &'a TravelDate,
    pub road: RoadStatus,
}

impl Context<'_> {
    fn baseline(&self) -> f64 {
        BASELINE_HOURS + self.township.time_offset.as_hours()
    }

    fn entropy(&self) -> f64 {
        self.date.traffic_entropy.as_f64()
    }
}

pub(crate) fn evaluate(mode: Mode, context: &Context) -> Strategy {
    match mode {
        Mode::Drive => drive(context),
        Mode::BusRail => bus_rail(context),
        Mode::OriginStation => origin_station(context),
        Mode::SouthLink => south_link(context),
        Mode::Ticketed => ticketed(context),
    }
}

fn drive(context: &Context) -> Strategy {
    let factor = context.road.jam_factor();
    let e = context.entropy();
    let mut advice = context.road.advice().to_string();
    let mut tags = Vec::new();
    match context.road {
        RoadStatus::Clear => {
            tags.push(Tag::Fastest);
            advice.push_str(" Perfect call, this departure time wins.");
        }
        RoadStatus::Gridlock => {
            tags.push(Tag::Avoid);
            advice.push_str(
                " Strongly consider rescheduling or leaving at 03:00. \
                 Alternative: Provincial Highway 61 then Provincial Highway 2 along the coast, \
                 longer but the cars keep moving.",
            );
        }
        RoadStatus::Normal | RoadStatus::Heavy => {}
    }

    Strategy {
        mode: Mode::Drive,
        title: "Drive via Freeway 5".into(),
        route: format!(
            "{ORIGIN} ➔ Freeway 5 (Hsuehshan Tunnel) ➔ Suhua Highway ➔ {}",
            context.township.name
        ),
        duration: Duration::from_hours_f64(context.baseline() * factor),
        pain: Score::clamped(20.0 + (factor - 1.0) * 50.0 + e / 5.0),
        success_rate: Score::clamped(95.0 - (factor - 1.0) * 40.0 - e / 5.0),
        advice,
        tags,
    }
}

fn bus_rail(context: &Context) -> Strategy {
    let e = context.entropy();
    let jam_penalty = if context.date.is_jam_day() { 0.5 } else { 0.0 };
    Strategy {
        mode: Mode::BusRail,
        title: "Plan A: bus and rail (most reliable)".into(),
        route: format!(
            "{ORIGIN} ➔ Taipei Bus Station ➔ Luodong Bus Station ➔ local train to {}",
            context.township.name
        ),
        duration: Duration::from_hours_f64(context.baseline() + 1.0 + jam_penalty),
        pain: Score::clamped(35.0 + e / 5.0),
        success_rate: Score::clamped(90.0 - e / 10.0),
        advice: "Freeway 5 buses have a dedicated lane and do not get stuck. \
                 Trains leave Luodong very often, a seat is all but guaranteed."
            .into(),
        tags: vec![Tag::Recommended],
    }
}

fn origin_station(context: &Context) -> Strategy {
    let e = context.entropy();
    Strategy {
        mode: Mode::OriginStation,
        title: "Plan B: Shulin origin station (fallback)".into(),
        route: format!(
            "{ORIGIN} ➔ Shulin Station ➔ local express to {}",
            context.township.name
        ),
        duration: Duration::from_hours_f64(context.baseline() + 0.5),
        pain: Score::clamped(45.0 + e / 4.0),
        success_rate: Score::clamped(80.0 - e / 5.0),
        advice: "Do not wait for a train in Taoyuan. Ride back to Shulin where trains originate \
                 and the odds of a seat jump. The EMU900 local express is new and quick."
            .into(),
        tags: vec![Tag::Budget],
    }
}

fn south_link(context: &Context) -> Strategy {
    let e = context.entropy();
    let s = context.township.south_link.as_f64();
    let mut hours = SOUTH_LINK_HOURS + (100.0 - s) / 50.0;
    let mut pain = 30.0 + e / 10.0;
    let (advice, tags) = if context.township.is_south_link_eligible() {
        (
            "Skips northern Taiwan and the Suhua corridor entirely. It goes the long way round, \
             but tickets towards Taitung are easier to get than towards Hualien."
                .to_string(),
            vec![Tag::Comfort],
        )
    } else {
        hours += DETOUR_HOURS;
        pain += DETOUR_PAIN;
        (
            format!(
                "{} sits far north of the South-Link line, expect a long ride back up the coast.",
                context.township.name
            ),
            vec![Tag::Detour],
        )
    };

    Strategy {
        mode: Mode::SouthLink,
        title: "Plan C: HSR and South-Link".into(),
        route: format!(
            "{ORIGIN} HSR ➔ Zuoying ➔ TRA South-Link ➔ {}",
            context.township.name
        ),
        duration: Duration::from_hours_f64(hours),
        pain: Score::clamped(pain),
        success_rate: Score::clamped(s - e / 10.0),
        advice,
        tags,
    }
}

fn ticketed(context: &Context) -> Strategy {
    let e = context.entropy();
    Strategy {
        mode: Mode::Ticketed,
        title: "Ticket in hand: confirm the connection".into(),
        route: format!("{ORIGIN} / Zhongli Station ➔ {}", context.township.name),
        duration: Duration::from_hours_f64(context.baseline() - 0.5),
        pain: Score::clamped(15.0 + e / 10.0),
        success_rate: Score::clamped(98.0),
        advice: context.township.transfer_tip.to_string(),
        tags: Vec::new(),
    }
}
