//! Shared data types for the measurement core.
//!
//! Data sources:
//! - Raw measurements: supplied by the persistence collaborator as
//!   `(module_id, measure_type, measure_value, measure_timestamp)` tuples,
//!   with `measure_value` carried as a JSON value (number or string)
//! - Capability profiles: derived from the station identifier (see
//!   `resolver::profile`)

use serde::Serialize;
use serde_json::Value;

/// Measurement type identifier.
///
/// Kept as a flat string slug (`"temperature"`, `"pressure_trend"`, …)
/// because downstream consumers address measurements positionally and by
/// key, never through a closed enum.
pub type MeasureType = &'static str;

/// Module type tag.
///
/// Physical modules map 1:1 to hardware; `Computed`, `CurrentConditions`,
/// `Ephemeris`, `Pollution`, `Picture`, `Video` and `Aggregated` are
/// virtual modules synthesized by collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ModuleType {
    Main,              // base station (AC powered)
    Outdoor,           // temperature/humidity module
    Wind,              // anemometer module
    Rain,              // rain gauge module
    Indoor,            // additional indoor module
    Solar,             // irradiance/UV module
    Soil,              // soil temperature/moisture module
    Lightning,         // strike detector module
    Computed,          // virtual: derived quantities
    CurrentConditions, // virtual: current observations
    Ephemeris,         // virtual: sun/moon events
    Pollution,         // virtual: gas concentrations
    Picture,           // virtual: still imagery
    Video,             // virtual: video imagery
    Aggregated,        // virtual: draws from Main's catalog
}

impl ModuleType {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleType::Main => "Base station",
            ModuleType::Outdoor => "Outdoor module",
            ModuleType::Wind => "Wind gauge",
            ModuleType::Rain => "Rain gauge",
            ModuleType::Indoor => "Indoor module",
            ModuleType::Solar => "Solar module",
            ModuleType::Soil => "Soil module",
            ModuleType::Lightning => "Lightning detector",
            ModuleType::Computed => "Computed values",
            ModuleType::CurrentConditions => "Current conditions",
            ModuleType::Ephemeris => "Ephemeris",
            ModuleType::Pollution => "Pollution",
            ModuleType::Picture => "Pictures",
            ModuleType::Video => "Video",
            ModuleType::Aggregated => "Aggregated values",
        }
    }

    /// All module types, physical first, virtual after.
    pub fn all() -> &'static [ModuleType] {
        &[
            ModuleType::Main,
            ModuleType::Outdoor,
            ModuleType::Wind,
            ModuleType::Rain,
            ModuleType::Indoor,
            ModuleType::Solar,
            ModuleType::Soil,
            ModuleType::Lightning,
            ModuleType::Computed,
            ModuleType::CurrentConditions,
            ModuleType::Ephemeris,
            ModuleType::Pollution,
            ModuleType::Picture,
            ModuleType::Video,
            ModuleType::Aggregated,
        ]
    }
}

/// Value domain of a measurement type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    /// Continuous numeric reading
    Numeric,
    /// Enumerated trend (up/down/stable)
    Trend,
    /// Unix timestamp (seconds)
    Timestamp,
    /// Angle in degrees [0, 360)
    Angle,
    /// Opaque string (firmware version, picture URL, …)
    RawString,
}

/// Enumerated trend reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Parse the storage-layer trend word. Unknown words read as stable.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "up" => Trend::Up,
            "down" => Trend::Down,
            _ => Trend::Stable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "rising",
            Trend::Down => "falling",
            Trend::Stable => "steady",
        }
    }
}

/// One raw reading as delivered by the persistence collaborator.
#[derive(Debug, Clone)]
pub struct RawMeasurement {
    pub module_id: String,
    pub measure_type: String,
    /// Number or string; extracted with [`value_as_f64`] / [`value_as_str`].
    pub measure_value: Value,
    /// Unix timestamp (seconds) of the sample.
    pub measure_timestamp: i64,
}

/// A converted value ready for gauge/LCD-style display collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertedValue {
    pub display_string: String,
    pub numeric_value: f64,
    pub decimals: usize,
    pub unit_label: &'static str,
}

/// One resolved measurement row inside a module result.
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementRow {
    pub label: String,
    pub measure_type: String,
    pub variant_rows: Vec<VariantRow>,
    pub unit_dimension: &'static str,
    pub available_operation_tags: Vec<&'static str>,
}

/// One output-format variant of a measurement.
#[derive(Debug, Clone, Serialize)]
pub struct VariantRow {
    pub label: &'static str,
    pub variant_key: &'static str,
    pub sample_render: String,
}

/// Complete resolved output for one module, consumed by templating,
/// export and widget collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedModuleMeasurements {
    pub module_name: String,
    pub module_id: String,
    pub measurements: Vec<MeasurementRow>,
}

// ============================================================================
// Helpers for extracting values from serde_json::Value
// ============================================================================

/// Extract an f64 from a raw measurement value.
/// Handles both numeric JSON values and string-encoded numbers.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.parse::<f64>().ok()))
}

/// Extract a string slice from a raw measurement value.
pub fn value_as_str(value: &Value) -> Option<&str> {
    value.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_extraction_numeric_and_string() {
        assert_eq!(value_as_f64(&json!(1013.25)), Some(1013.25));
        assert_eq!(value_as_f64(&json!("1013.25")), Some(1013.25));
        assert_eq!(value_as_f64(&json!("n/a")), None);
        assert_eq!(value_as_str(&json!("up")), Some("up"));
        assert_eq!(value_as_str(&json!(42)), None);
    }

    #[test]
    fn test_trend_parsing() {
        assert_eq!(Trend::from_raw("up"), Trend::Up);
        assert_eq!(Trend::from_raw("down"), Trend::Down);
        assert_eq!(Trend::from_raw("stable"), Trend::Stable);
        // Unknown storage words degrade to stable, never fail
        assert_eq!(Trend::from_raw("???"), Trend::Stable);
        assert_eq!(Trend::Up.label(), "rising");
    }

    #[test]
    fn test_module_type_catalog_is_complete() {
        assert_eq!(ModuleType::all().len(), 15);
        for module in ModuleType::all() {
            assert!(!module.label().is_empty());
        }
    }
}
