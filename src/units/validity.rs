//! Validity predicates for derived quantities.
//!
//! A derived quantity (dew point, heat index, …) is only meaningful
//! against reference readings taken at the same sampling instant. These
//! gates decide user-visible data, not aesthetics: the thresholds are
//! calibration constants carried verbatim and must not be rounded or
//! simplified. A failing predicate is "not applicable", never an error.

/// Heat index gates.
pub const HEAT_INDEX_MIN_TEMP: f64 = 27.0;
pub const HEAT_INDEX_MIN_HUMIDITY: f64 = 40.0;
pub const HEAT_INDEX_MIN_DEW_POINT: f64 = 12.0;

/// Humidex gates.
pub const HUMIDEX_MIN_TEMP: f64 = 15.0;
pub const HUMIDEX_MIN_HUMIDITY: f64 = 20.0;
pub const HUMIDEX_MIN_DEW_POINT: f64 = 10.0;

/// Wind chill is defined below this reference temperature.
pub const WIND_CHILL_MAX_TEMP: f64 = 10.0;
/// Sentinel used upstream when no wind-chill value accompanies the
/// reference temperature. Kept as-is; its origin predates this codebase.
pub const WIND_CHILL_ABSENT: f64 = -200.0;

/// Dew and frost point bounds on the reference temperature.
pub const DEW_POINT_MIN_TEMP: f64 = -40.0;
pub const DEW_POINT_MAX_TEMP: f64 = 60.0;
pub const FROST_POINT_MAX_TEMP: f64 = 0.0;

/// Precipitation-type gates.
pub const RAIN_MIN_TEMP: f64 = 0.0;
pub const SNOW_MAX_TEMP: f64 = 3.0;

/// Dew point is meaningful while the reference temperature stays inside
/// the saturation-formula calibration range.
pub fn is_valid_dew_point(ref_temp: f64) -> bool {
    ref_temp >= DEW_POINT_MIN_TEMP && ref_temp <= DEW_POINT_MAX_TEMP
}

/// Frost point requires sub-freezing reference temperature.
pub fn is_valid_frost_point(ref_temp: f64) -> bool {
    ref_temp < FROST_POINT_MAX_TEMP
}

/// Wind chill applies below 10 °C and only while it actually reads
/// colder than the reference temperature. Callers without a wind-chill
/// reading pass [`WIND_CHILL_ABSENT`].
pub fn is_valid_wind_chill(ref_temp: f64, wind_chill_value: f64) -> bool {
    ref_temp < WIND_CHILL_MAX_TEMP && ref_temp > wind_chill_value
}

/// Heat index needs hot, humid air: temp ≥ 27 °C, humidity ≥ 40 %,
/// dew point ≥ 12 °C.
pub fn is_valid_heat_index(ref_temp: f64, ref_humidity: f64, ref_dew_point: f64) -> bool {
    ref_temp >= HEAT_INDEX_MIN_TEMP
        && ref_humidity >= HEAT_INDEX_MIN_HUMIDITY
        && ref_dew_point >= HEAT_INDEX_MIN_DEW_POINT
}

/// Humidex applies from mild temperatures upward: temp ≥ 15 °C,
/// humidity ≥ 20 %, dew point ≥ 10 °C.
pub fn is_valid_humidex(ref_temp: f64, ref_humidity: f64, ref_dew_point: f64) -> bool {
    ref_temp >= HUMIDEX_MIN_TEMP
        && ref_humidity >= HUMIDEX_MIN_HUMIDITY
        && ref_dew_point >= HUMIDEX_MIN_DEW_POINT
}

/// Liquid precipitation needs an at-or-above-freezing reference.
pub fn is_valid_rain(ref_temp: f64) -> bool {
    ref_temp >= RAIN_MIN_TEMP
}

/// Snow needs a reference temperature below 3 °C.
pub fn is_valid_snow(ref_temp: f64) -> bool {
    ref_temp < SNOW_MAX_TEMP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_index_gating() {
        // Temperature below threshold
        assert!(!is_valid_heat_index(26.0, 50.0, 13.0));
        assert!(is_valid_heat_index(28.0, 45.0, 13.0));
        // Each gate fails independently
        assert!(!is_valid_heat_index(28.0, 39.0, 13.0));
        assert!(!is_valid_heat_index(28.0, 45.0, 11.0));
        // Thresholds are inclusive
        assert!(is_valid_heat_index(27.0, 40.0, 12.0));
    }

    #[test]
    fn test_wind_chill_gating() {
        assert!(is_valid_wind_chill(5.0, 2.0));
        assert!(!is_valid_wind_chill(12.0, 2.0));
        // Wind chill warmer than the reference is meaningless
        assert!(!is_valid_wind_chill(5.0, 7.0));
        // Absent sentinel always passes the comparison side
        assert!(is_valid_wind_chill(5.0, WIND_CHILL_ABSENT));
        assert!(!is_valid_wind_chill(10.0, WIND_CHILL_ABSENT));
    }

    #[test]
    fn test_precipitation_gating() {
        assert!(is_valid_rain(0.0));
        assert!(is_valid_rain(15.0));
        assert!(!is_valid_rain(-0.1));
        assert!(is_valid_snow(2.9));
        assert!(!is_valid_snow(3.0));
        // Between 0 and 3 °C both rain and snow are plausible
        assert!(is_valid_rain(1.5) && is_valid_snow(1.5));
    }

    #[test]
    fn test_dew_and_frost_point_gating() {
        assert!(is_valid_dew_point(20.0));
        assert!(is_valid_dew_point(-40.0));
        assert!(is_valid_dew_point(60.0));
        assert!(!is_valid_dew_point(-40.1));
        assert!(!is_valid_dew_point(60.1));
        assert!(is_valid_frost_point(-5.0));
        assert!(!is_valid_frost_point(0.0));
    }

    #[test]
    fn test_humidex_gating() {
        assert!(is_valid_humidex(15.0, 20.0, 10.0));
        assert!(!is_valid_humidex(14.9, 50.0, 12.0));
        assert!(!is_valid_humidex(20.0, 19.0, 12.0));
        assert!(!is_valid_humidex(20.0, 50.0, 9.0));
    }
}
