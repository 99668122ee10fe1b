//! Moon-phase bucketing and icon-state mapping.
//!
//! The phase fraction runs from 0 (new) through 0.5 (full) back to 1
//! (new again). Buckets are centered on the nominal phase points by
//! adding half a bucket before flooring.

use serde::Serialize;

/// Half of a phase bucket (1/16 of a cycle).
pub const PHASE_BUCKET_EPSILON: f64 = 1.0 / 16.0;
/// Half of an icon state (1/56 of a cycle).
pub const ICON_BUCKET_EPSILON: f64 = 1.0 / 56.0;

/// Named moon phase. `New` covers both ends of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub fn label(&self) -> &'static str {
        match self {
            MoonPhase::New => "New moon",
            MoonPhase::WaxingCrescent => "Waxing crescent",
            MoonPhase::FirstQuarter => "First quarter",
            MoonPhase::WaxingGibbous => "Waxing gibbous",
            MoonPhase::Full => "Full moon",
            MoonPhase::WaningGibbous => "Waning gibbous",
            MoonPhase::ThirdQuarter => "Third quarter",
            MoonPhase::WaningCrescent => "Waning crescent",
        }
    }
}

/// Icon style variants offered to display collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonIconStyle {
    Standard,
    Alternate,
}

/// Icon-state suffixes for the 29 renderable states (state 28 wraps back
/// to new).
const ICON_STATES: [&str; 29] = [
    "new",
    "waxing-crescent-1",
    "waxing-crescent-2",
    "waxing-crescent-3",
    "waxing-crescent-4",
    "waxing-crescent-5",
    "waxing-crescent-6",
    "first-quarter",
    "waxing-gibbous-1",
    "waxing-gibbous-2",
    "waxing-gibbous-3",
    "waxing-gibbous-4",
    "waxing-gibbous-5",
    "waxing-gibbous-6",
    "full",
    "waning-gibbous-1",
    "waning-gibbous-2",
    "waning-gibbous-3",
    "waning-gibbous-4",
    "waning-gibbous-5",
    "waning-gibbous-6",
    "third-quarter",
    "waning-crescent-1",
    "waning-crescent-2",
    "waning-crescent-3",
    "waning-crescent-4",
    "waning-crescent-5",
    "waning-crescent-6",
    "new",
];

fn normalize_phase(phase_fraction: f64) -> f64 {
    if phase_fraction.is_nan() {
        0.0
    } else {
        phase_fraction.rem_euclid(1.0)
    }
}

/// Bucket a phase fraction in [0, 1) into the 9 named phases
/// (both cycle ends read as new).
pub fn moon_phase_bucket(phase_fraction: f64) -> MoonPhase {
    let phase = normalize_phase(phase_fraction);
    let bucket = ((phase + PHASE_BUCKET_EPSILON) * 8.0).floor() as usize;
    match bucket.min(8) {
        0 | 8 => MoonPhase::New,
        1 => MoonPhase::WaxingCrescent,
        2 => MoonPhase::FirstQuarter,
        3 => MoonPhase::WaxingGibbous,
        4 => MoonPhase::Full,
        5 => MoonPhase::WaningGibbous,
        6 => MoonPhase::ThirdQuarter,
        _ => MoonPhase::WaningCrescent,
    }
}

/// Icon identifier for a phase fraction, in one of the two icon styles.
pub fn moon_phase_icon_id(phase_fraction: f64, style: MoonIconStyle) -> String {
    let phase = normalize_phase(phase_fraction);
    let state = (((phase + ICON_BUCKET_EPSILON) * 28.0).floor() as usize).min(28);
    match style {
        MoonIconStyle::Standard => format!("moon-{}", ICON_STATES[state]),
        MoonIconStyle::Alternate => format!("moon-alt-{}", ICON_STATES[state]),
    }
}
