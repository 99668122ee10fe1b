//! Declarative applicability rule tables.
//!
//! Each module type owns an ordered table of `(measure, predicate)`
//! rules evaluated top to bottom. Order is significant: downstream
//! consumers (comparison charts, CSV columns) rely on positional
//! stability of the resolved list, not just set membership. Keeping the
//! tables static makes ordering and coverage unit-testable without
//! executing the whole resolver.

use super::mode::ResolveContext;
use crate::types::{ModuleType, ValueDomain};
use crate::units::systems::UnitFamily;
use crate::units::validity;

/// One ordered applicability rule.
pub struct MeasureRule {
    pub measure: &'static str,
    pub applies: fn(&ResolveContext) -> bool,
}

/// Synthetic placeholder prepended in `noned` mode.
pub const NONE_MEASURE: &str = "none";
/// Synthetic per-module placeholder included in `aggregated` mode.
pub const AGGREGATED_MEASURE: &str = "aggregated";

// ============================================================================
// Rule predicates
// ============================================================================

fn always(_: &ResolveContext) -> bool {
    true
}

fn mono(ctx: &ResolveContext) -> bool {
    ctx.mode.mono
}

fn computed(ctx: &ResolveContext) -> bool {
    ctx.mode.computed
}

fn aggregated(ctx: &ResolveContext) -> bool {
    ctx.mode.aggregated
}

fn full(ctx: &ResolveContext) -> bool {
    ctx.mode.full
}

/// Operational/meta block: full output on a primary-vendor station.
fn operational(ctx: &ResolveContext) -> bool {
    ctx.mode.full && ctx.profile.is_primary_vendor
}

fn primary(ctx: &ResolveContext) -> bool {
    ctx.profile.is_primary_vendor
}

fn aggregates_available(ctx: &ResolveContext) -> bool {
    ctx.profile.is_primary_vendor || ctx.profile.is_aggregator_feed
}

fn aggregator(ctx: &ResolveContext) -> bool {
    ctx.profile.is_aggregator_feed
}

fn vendor_b(ctx: &ResolveContext) -> bool {
    ctx.profile.is_vendor_b
}

// Derived-quantity gates: the measurement is dropped whenever the
// required same-instant references are missing or out of range.

fn dew_point_valid(ctx: &ResolveContext) -> bool {
    ctx.mode.computed
        && ctx.refs.temperature.is_some_and(validity::is_valid_dew_point)
}

fn frost_point_valid(ctx: &ResolveContext) -> bool {
    ctx.mode.computed
        && ctx.refs.temperature.is_some_and(validity::is_valid_frost_point)
}

fn heat_index_valid(ctx: &ResolveContext) -> bool {
    ctx.mode.computed
        && match (ctx.refs.temperature, ctx.refs.humidity, ctx.refs.dew_point) {
            (Some(t), Some(h), Some(d)) => validity::is_valid_heat_index(t, h, d),
            _ => false,
        }
}

fn humidex_valid(ctx: &ResolveContext) -> bool {
    ctx.mode.computed
        && match (ctx.refs.temperature, ctx.refs.humidity, ctx.refs.dew_point) {
            (Some(t), Some(h), Some(d)) => validity::is_valid_humidex(t, h, d),
            _ => false,
        }
}

fn wind_chill_valid(ctx: &ResolveContext) -> bool {
    ctx.mode.computed
        && ctx
            .refs
            .temperature
            .is_some_and(|t| validity::is_valid_wind_chill(t, ctx.refs.wind_chill_or_absent()))
}

// Direct precipitation readings stay listed when no reference
// temperature accompanies the request; the gate only prunes physically
// implausible readings.

fn rain_plausible(ctx: &ResolveContext) -> bool {
    ctx.refs.temperature.map_or(true, validity::is_valid_rain)
}

fn snow_plausible(ctx: &ResolveContext) -> bool {
    ctx.refs.temperature.map_or(true, validity::is_valid_snow)
}

// ============================================================================
// Per-module-type rule tables
// ============================================================================

macro_rules! rules {
    ($(($measure:expr, $predicate:expr)),+ $(,)?) => {
        &[$(MeasureRule { measure: $measure, applies: $predicate }),+]
    };
}

static MAIN_RULES: &[MeasureRule] = rules![
    (AGGREGATED_MEASURE, aggregated),
    ("battery", operational),
    ("firmware", operational),
    ("signal", operational),
    ("last_seen", operational),
    ("first_setup", operational),
    ("last_setup", operational),
    ("last_refresh", operational),
    ("co2", always),
    ("humidity", always),
    ("noise", always),
    ("pressure", always),
    ("pressure_trend", always),
    ("temperature", always),
    ("temperature_max", mono),
    ("temperature_min", mono),
    ("temperature_trend", always),
    ("loc_altitude", full),
    ("loc_latitude", full),
    ("loc_longitude", full),
];

static OUTDOOR_RULES: &[MeasureRule] = rules![
    (AGGREGATED_MEASURE, aggregated),
    ("battery", operational),
    ("firmware", operational),
    ("signal", operational),
    ("last_seen", operational),
    ("first_setup", operational),
    ("last_setup", operational),
    ("last_refresh", operational),
    ("humidity", always),
    ("temperature", always),
    ("temperature_max", mono),
    ("temperature_min", mono),
    ("temperature_trend", always),
];

static WIND_RULES: &[MeasureRule] = rules![
    (AGGREGATED_MEASURE, aggregated),
    ("battery", operational),
    ("firmware", operational),
    ("signal", operational),
    ("last_seen", operational),
    ("first_setup", operational),
    ("last_setup", operational),
    ("last_refresh", operational),
    ("windangle", always),
    ("gustangle", always),
    ("windangle_day_max", mono),
    ("windangle_hour_max", mono),
    ("windstrength", always),
    ("guststrength", always),
    ("windstrength_day_max", mono),
    ("windstrength_hour_max", mono),
];

static RAIN_RULES: &[MeasureRule] = rules![
    (AGGREGATED_MEASURE, aggregated),
    ("battery", operational),
    ("firmware", operational),
    ("signal", operational),
    ("last_seen", operational),
    ("first_setup", operational),
    ("last_setup", operational),
    ("last_refresh", operational),
    ("rain", rain_plausible),
    ("rain_hour_aggregated", primary),
    ("rain_day_aggregated", aggregates_available),
    ("rain_month_aggregated", aggregator),
    ("rain_year_aggregated", aggregator),
];

static INDOOR_RULES: &[MeasureRule] = rules![
    (AGGREGATED_MEASURE, aggregated),
    ("battery", operational),
    ("firmware", operational),
    ("signal", operational),
    ("last_seen", operational),
    ("first_setup", operational),
    ("last_setup", operational),
    ("last_refresh", operational),
    ("health_idx", computed),
    ("co2", always),
    ("humidity", always),
    ("temperature", always),
    ("temperature_max", mono),
    ("temperature_min", mono),
    ("temperature_trend", always),
];

static SOLAR_RULES: &[MeasureRule] = rules![
    (AGGREGATED_MEASURE, aggregated),
    ("battery", operational),
    ("firmware", operational),
    ("signal", operational),
    ("last_seen", operational),
    ("first_setup", operational),
    ("last_setup", operational),
    ("last_refresh", operational),
    ("irradiance", always),
    ("uv_index", always),
    ("illuminance", always),
    ("sunshine", always),
];

static SOIL_RULES: &[MeasureRule] = rules![
    (AGGREGATED_MEASURE, aggregated),
    ("battery", operational),
    ("firmware", operational),
    ("signal", operational),
    ("last_seen", operational),
    ("first_setup", operational),
    ("last_setup", operational),
    ("last_refresh", operational),
    ("soil_temperature", always),
    ("leaf_wetness", always),
    ("moisture_content", always),
    ("moisture_tension", always),
    ("evapotranspiration", computed),
];

static LIGHTNING_RULES: &[MeasureRule] = rules![
    (AGGREGATED_MEASURE, aggregated),
    ("battery", operational),
    ("firmware", operational),
    ("signal", operational),
    ("last_seen", operational),
    ("first_setup", operational),
    ("last_setup", operational),
    ("last_refresh", operational),
    ("strike_count", always),
    ("strike_instant", always),
    ("strike_distance", always),
    ("strike_bearing", always),
];

static COMPUTED_RULES: &[MeasureRule] = rules![
    (AGGREGATED_MEASURE, aggregated),
    ("temperature_ref", always),
    ("humidity_ref", always),
    ("wind_ref", always),
    ("dew_point", dew_point_valid),
    ("frost_point", frost_point_valid),
    ("heat_index", heat_index_valid),
    ("humidex", humidex_valid),
    ("wind_chill", wind_chill_valid),
    ("cloud_ceiling", computed),
    ("cbi", computed),
];

static CURRENT_RULES: &[MeasureRule] = rules![
    ("weather", always),
    ("temperature", always),
    ("humidity", always),
    ("pressure", always),
    ("windangle", always),
    ("windstrength", always),
    ("cloudiness", always),
    ("visibility", always),
    ("rain", rain_plausible),
    ("snow", snow_plausible),
];

static EPHEMERIS_RULES: &[MeasureRule] = rules![
    ("sunrise", always),
    ("sunset", always),
    ("sunrise_c", full),
    ("sunset_c", full),
    ("sunrise_n", full),
    ("sunset_n", full),
    ("sunrise_a", full),
    ("sunset_a", full),
    ("day_length", always),
    ("moonrise", always),
    ("moonset", always),
    ("moon_phase", always),
    ("moon_age", always),
    ("moon_illumination", always),
    ("moon_distance", full),
    ("sun_distance", full),
];

static POLLUTION_RULES: &[MeasureRule] = rules![
    ("co", always),
    ("o3", always),
    ("co_distance", full),
    ("o3_distance", full),
];

static PICTURE_RULES: &[MeasureRule] = rules![("picture", vendor_b)];

static VIDEO_RULES: &[MeasureRule] = rules![("video", vendor_b)];

/// Ordered rule table for a module type.
///
/// `Aggregated` deliberately shares `Main`'s table: the aggregated
/// virtual module draws from the base module's own measurement set
/// rather than a fixed catalog of its own.
pub fn rules_for(module_type: ModuleType) -> &'static [MeasureRule] {
    match module_type {
        ModuleType::Main | ModuleType::Aggregated => MAIN_RULES,
        ModuleType::Outdoor => OUTDOOR_RULES,
        ModuleType::Wind => WIND_RULES,
        ModuleType::Rain => RAIN_RULES,
        ModuleType::Indoor => INDOOR_RULES,
        ModuleType::Solar => SOLAR_RULES,
        ModuleType::Soil => SOIL_RULES,
        ModuleType::Lightning => LIGHTNING_RULES,
        ModuleType::Computed => COMPUTED_RULES,
        ModuleType::CurrentConditions => CURRENT_RULES,
        ModuleType::Ephemeris => EPHEMERIS_RULES,
        ModuleType::Pollution => POLLUTION_RULES,
        ModuleType::Picture => PICTURE_RULES,
        ModuleType::Video => VIDEO_RULES,
    }
}

// ============================================================================
// Measurement catalog: value domains, unit families, display labels
// ============================================================================

/// Value domain of a measurement slug.
pub fn value_domain_of(measure: &str) -> ValueDomain {
    match measure {
        "pressure_trend" | "temperature_trend" => ValueDomain::Trend,
        "last_seen" | "first_setup" | "last_setup" | "last_refresh" | "sunrise" | "sunset"
        | "sunrise_c" | "sunset_c" | "sunrise_n" | "sunset_n" | "sunrise_a" | "sunset_a"
        | "moonrise" | "moonset" | "strike_instant" => ValueDomain::Timestamp,
        "windangle" | "gustangle" | "windangle_day_max" | "windangle_hour_max"
        | "strike_bearing" => ValueDomain::Angle,
        "firmware" | "weather" | "picture" | "video" | NONE_MEASURE | AGGREGATED_MEASURE => {
            ValueDomain::RawString
        }
        _ => ValueDomain::Numeric,
    }
}

/// Unit family of a measurement slug.
pub fn unit_family_of(measure: &str) -> UnitFamily {
    match measure {
        "temperature" | "temperature_max" | "temperature_min" | "temperature_ref"
        | "dew_point" | "frost_point" | "heat_index" | "humidex" | "wind_chill"
        | "soil_temperature" => UnitFamily::Temperature,
        "pressure" => UnitFamily::Pressure,
        "pressure_trend" | "temperature_trend" => UnitFamily::Trend,
        "windstrength" | "guststrength" | "windstrength_day_max" | "windstrength_hour_max"
        | "wind_ref" => UnitFamily::WindSpeed,
        "windangle" | "gustangle" | "windangle_day_max" | "windangle_hour_max"
        | "strike_bearing" => UnitFamily::WindAngle,
        "rain" | "rain_hour_aggregated" | "rain_day_aggregated" | "rain_month_aggregated"
        | "rain_year_aggregated" | "evapotranspiration" => UnitFamily::Rain,
        "snow" => UnitFamily::Snow,
        "co2" | "co" | "o3" => UnitFamily::GasConcentration,
        "noise" => UnitFamily::Noise,
        "humidity" | "humidity_ref" => UnitFamily::Humidity,
        "battery" | "signal" | "cloudiness" | "moisture_content" | "leaf_wetness"
        | "moon_illumination" => UnitFamily::Percentage,
        "health_idx" | "uv_index" | "cbi" | "moisture_tension" | "strike_count" | "moon_age"
        | "moon_phase" => UnitFamily::Index,
        "irradiance" => UnitFamily::Irradiance,
        "illuminance" => UnitFamily::Illuminance,
        "visibility" | "strike_distance" | "co_distance" | "o3_distance" | "moon_distance"
        | "sun_distance" => UnitFamily::Distance,
        "cloud_ceiling" | "loc_altitude" => UnitFamily::Altitude,
        "day_length" | "sunshine" => UnitFamily::Duration,
        "loc_latitude" | "loc_longitude" => UnitFamily::Coordinate,
        "last_seen" | "first_setup" | "last_setup" | "last_refresh" | "sunrise" | "sunset"
        | "sunrise_c" | "sunset_c" | "sunrise_n" | "sunset_n" | "sunrise_a" | "sunset_a"
        | "moonrise" | "moonset" | "strike_instant" => UnitFamily::Timestamp,
        _ => UnitFamily::RawString,
    }
}

/// Default English label for a measurement slug. Localization is a
/// collaborator concern; this is the fallback shipped with the core.
pub fn label_of(measure: &str) -> &'static str {
    match measure {
        NONE_MEASURE => "None",
        AGGREGATED_MEASURE => "All measurements",
        "battery" => "Battery level",
        "firmware" => "Firmware version",
        "signal" => "Signal quality",
        "last_seen" => "Last seen",
        "first_setup" => "First setup",
        "last_setup" => "Last setup",
        "last_refresh" => "Last refresh",
        "co2" => "Carbon dioxide",
        "humidity" | "humidity_ref" => "Humidity",
        "noise" => "Noise level",
        "pressure" => "Atmospheric pressure",
        "pressure_trend" => "Pressure trend",
        "temperature" | "temperature_ref" => "Temperature",
        "temperature_max" => "Highest temperature",
        "temperature_min" => "Lowest temperature",
        "temperature_trend" => "Temperature trend",
        "loc_altitude" => "Altitude",
        "loc_latitude" => "Latitude",
        "loc_longitude" => "Longitude",
        "windangle" => "Wind direction",
        "gustangle" => "Gust direction",
        "windangle_day_max" => "Direction of today's strongest wind",
        "windangle_hour_max" => "Direction of the hour's strongest wind",
        "windstrength" | "wind_ref" => "Wind strength",
        "guststrength" => "Gust strength",
        "windstrength_day_max" => "Today's strongest wind",
        "windstrength_hour_max" => "The hour's strongest wind",
        "rain" => "Rainfall",
        "rain_hour_aggregated" => "Rainfall (last hour)",
        "rain_day_aggregated" => "Rainfall (today)",
        "rain_month_aggregated" => "Rainfall (this month)",
        "rain_year_aggregated" => "Rainfall (this year)",
        "health_idx" => "Health index",
        "irradiance" => "Solar irradiance",
        "uv_index" => "UV index",
        "illuminance" => "Illuminance",
        "sunshine" => "Sunshine duration",
        "soil_temperature" => "Soil temperature",
        "leaf_wetness" => "Leaf wetness",
        "moisture_content" => "Soil moisture",
        "moisture_tension" => "Soil moisture tension",
        "evapotranspiration" => "Evapotranspiration",
        "strike_count" => "Strike count",
        "strike_instant" => "Last strike",
        "strike_distance" => "Strike distance",
        "strike_bearing" => "Strike bearing",
        "dew_point" => "Dew point",
        "frost_point" => "Frost point",
        "heat_index" => "Heat index",
        "humidex" => "Humidex",
        "wind_chill" => "Wind chill",
        "cloud_ceiling" => "Cloud base",
        "cbi" => "Chandler burning index",
        "weather" => "Current weather",
        "cloudiness" => "Cloud cover",
        "visibility" => "Visibility",
        "snow" => "Snowfall",
        "sunrise" => "Sunrise",
        "sunset" => "Sunset",
        "sunrise_c" => "Civil sunrise",
        "sunset_c" => "Civil sunset",
        "sunrise_n" => "Nautical sunrise",
        "sunset_n" => "Nautical sunset",
        "sunrise_a" => "Astronomical sunrise",
        "sunset_a" => "Astronomical sunset",
        "day_length" => "Day length",
        "moonrise" => "Moonrise",
        "moonset" => "Moonset",
        "moon_phase" => "Moon phase",
        "moon_age" => "Moon age",
        "moon_illumination" => "Moon illumination",
        "moon_distance" => "Moon distance",
        "sun_distance" => "Sun distance",
        "co" => "Carbon monoxide",
        "o3" => "Ozone",
        "co_distance" => "Carbon monoxide probe distance",
        "o3_distance" => "Ozone probe distance",
        "picture" => "Picture",
        "video" => "Video",
        _ => "Measurement",
    }
}

// ============================================================================
// Comparison / distribution eligibility
// ============================================================================

/// Measurements eligible for side-by-side comparison charts.
pub static COMPARISON_ELIGIBLE: &[&str] = &[
    "co2",
    "humidity",
    "noise",
    "pressure",
    "temperature",
    "temperature_max",
    "temperature_min",
    "windstrength",
    "guststrength",
    "windstrength_day_max",
    "rain",
    "rain_day_aggregated",
    "irradiance",
    "uv_index",
    "illuminance",
    "soil_temperature",
    "moisture_content",
    "strike_count",
    "cloudiness",
    "visibility",
    "dew_point",
    "frost_point",
    "heat_index",
    "humidex",
    "wind_chill",
    "health_idx",
];

/// Measurements eligible for distribution plots: instantaneous readings
/// only, no min/max or windowed aggregates.
pub static DISTRIBUTION_ELIGIBLE: &[&str] = &[
    "co2",
    "humidity",
    "noise",
    "pressure",
    "temperature",
    "windstrength",
    "guststrength",
    "rain",
    "irradiance",
    "uv_index",
    "illuminance",
    "soil_temperature",
    "moisture_content",
    "cloudiness",
    "visibility",
    "dew_point",
    "frost_point",
    "heat_index",
    "humidex",
    "wind_chill",
    "health_idx",
];

pub fn is_comparison_eligible(measure: &str) -> bool {
    COMPARISON_ELIGIBLE.contains(&measure)
}

pub fn is_distribution_eligible(measure: &str) -> bool {
    DISTRIBUTION_ELIGIBLE.contains(&measure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::mode::{ReferenceValues, ResolveMode};
    use crate::resolver::profile::StationCapabilityProfile;

    fn ctx_full_primary() -> ResolveContext {
        ResolveContext {
            profile: StationCapabilityProfile::from_station_id("prm:test"),
            mode: ResolveMode { full: true, ..Default::default() },
            refs: ReferenceValues::default(),
        }
    }

    /// Table order encodes the output contract; pin the operational
    /// block's position without executing the resolver.
    #[test]
    fn test_outdoor_table_order() {
        let order: Vec<&str> = OUTDOOR_RULES.iter().map(|r| r.measure).collect();
        let battery = order.iter().position(|m| *m == "battery").unwrap();
        let last_refresh = order.iter().position(|m| *m == "last_refresh").unwrap();
        let humidity = order.iter().position(|m| *m == "humidity").unwrap();
        let temperature = order.iter().position(|m| *m == "temperature").unwrap();
        assert!(battery < last_refresh);
        assert!(last_refresh < humidity);
        assert!(humidity < temperature);
    }

    #[test]
    fn test_every_module_type_has_a_table() {
        for module in ModuleType::all() {
            assert!(!rules_for(*module).is_empty(), "{:?} has no rules", module);
        }
    }

    #[test]
    fn test_aggregated_shares_main_table() {
        let main: Vec<&str> = rules_for(ModuleType::Main).iter().map(|r| r.measure).collect();
        let agg: Vec<&str> =
            rules_for(ModuleType::Aggregated).iter().map(|r| r.measure).collect();
        assert_eq!(main, agg);
    }

    #[test]
    fn test_operational_rules_require_full_and_primary() {
        let ctx = ctx_full_primary();
        assert!(operational(&ctx));
        let mut without_full = ctx;
        without_full.mode.full = false;
        assert!(!operational(&without_full));
        let mut raw_feed = ctx;
        raw_feed.profile = StationCapabilityProfile::from_station_id("raw:x");
        assert!(!raw_feed.profile.is_primary_vendor);
        assert!(!operational(&raw_feed));
    }

    #[test]
    fn test_derived_gates_need_references() {
        let mut ctx = ctx_full_primary();
        // No references at all: every derived quantity is inapplicable
        assert!(!dew_point_valid(&ctx));
        assert!(!heat_index_valid(&ctx));
        assert!(!wind_chill_valid(&ctx));

        ctx.refs = ReferenceValues {
            temperature: Some(28.0),
            humidity: Some(45.0),
            dew_point: Some(13.0),
            wind_chill: None,
        };
        assert!(dew_point_valid(&ctx));
        assert!(heat_index_valid(&ctx));
        // 28 °C is far above the wind-chill regime
        assert!(!wind_chill_valid(&ctx));

        // computed=false suppresses derived quantities wholesale
        ctx.mode.computed = false;
        assert!(!dew_point_valid(&ctx));
        assert!(!heat_index_valid(&ctx));
    }

    #[test]
    fn test_catalog_covers_every_ruled_measure() {
        for module in ModuleType::all() {
            for rule in rules_for(*module) {
                // Every slug must map to a real label and family
                assert_ne!(label_of(rule.measure), "Measurement", "no label for {}", rule.measure);
                let _ = unit_family_of(rule.measure);
                let _ = value_domain_of(rule.measure);
            }
        }
    }

    #[test]
    fn test_distribution_is_a_subset_of_comparison() {
        for measure in DISTRIBUTION_ELIGIBLE {
            assert!(
                is_comparison_eligible(measure),
                "{} in distribution but not comparison",
                measure
            );
        }
        assert!(is_comparison_eligible("temperature_max"));
        assert!(!is_distribution_eligible("temperature_max"));
        assert!(!is_comparison_eligible("firmware"));
        assert!(!is_comparison_eligible("pressure_trend"));
    }
}
