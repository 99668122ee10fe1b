//! Forward and reverse unit conversions.
//!
//! Storage units are canonical (°C, hPa, km/h, mm, cm, km, m); every
//! function takes the target unit explicitly. Forward conversions round
//! to the family's decimal policy with round-half-away-from-zero
//! semantics; reverse conversions apply the exact inverse formula and are
//! used when accepting user-entered thresholds.
//!
//! Out-of-range numeric input is never an error here: values pass through
//! the affine formulas unchanged and saturation only applies where a
//! family is intrinsically bounded (Beaufort, percentages).

use super::beaufort::{bucket_beaufort, unbucket_beaufort};
use super::systems::{
    AltitudeUnit, DistanceUnit, PressureUnit, RainUnit, SnowUnit, TemperatureUnit, UnitFamily,
    UnitSystemSelection, WindSpeedUnit,
};

// ============================================================================
// Conversion factors (storage unit → display unit)
// ============================================================================

/// hPa per inch of mercury.
pub const HPA_PER_INHG: f64 = 33.8639;
/// hPa per millimeter of mercury.
pub const HPA_PER_MMHG: f64 = 1.33322368;
/// km/h per mile per hour.
pub const KMH_PER_MPH: f64 = 1.609344;
/// km/h per meter per second.
pub const KMH_PER_MS: f64 = 3.6;
/// km/h per knot.
pub const KMH_PER_KNOT: f64 = 1.852;
/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;
/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;
/// Kilometers per mile.
pub const KM_PER_MILE: f64 = 1.609344;
/// Feet per meter.
pub const FEET_PER_METER: f64 = 3.2808399;

/// Round to `decimals` digits, ties away from zero. Never truncates.
pub fn round_half_away(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let rounded = if scaled >= 0.0 {
        (scaled + 0.5).floor()
    } else {
        (scaled - 0.5).ceil()
    };
    rounded / factor
}

// ============================================================================
// Per-family conversions
// ============================================================================

/// °C → target unit, rounded to 1 decimal.
pub fn convert_temperature(celsius: f64, unit: TemperatureUnit) -> f64 {
    let converted = match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 1.8 + 32.0,
        TemperatureUnit::Kelvin => celsius + 273.15,
    };
    round_half_away(converted, 1)
}

/// Target unit → °C (inverse of [`convert_temperature`]).
pub fn reverse_temperature(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) / 1.8,
        TemperatureUnit::Kelvin => value - 273.15,
    }
}

/// hPa → target unit, rounded per the pressure decimal policy.
pub fn convert_pressure(hpa: f64, unit: PressureUnit) -> f64 {
    let converted = match unit {
        PressureUnit::Hpa => hpa,
        PressureUnit::InHg => hpa / HPA_PER_INHG,
        PressureUnit::MmHg => hpa / HPA_PER_MMHG,
    };
    round_half_away(converted, unit.decimals())
}

/// Target unit → hPa.
pub fn reverse_pressure(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Hpa => value,
        PressureUnit::InHg => value * HPA_PER_INHG,
        PressureUnit::MmHg => value * HPA_PER_MMHG,
    }
}

/// km/h → target unit. Beaufort saturates into its 0–12 scale; the other
/// units round per the wind decimal policy.
pub fn convert_wind_speed(kmh: f64, unit: WindSpeedUnit) -> f64 {
    let converted = match unit {
        WindSpeedUnit::Kmh => kmh,
        WindSpeedUnit::Mph => kmh / KMH_PER_MPH,
        WindSpeedUnit::Ms => kmh / KMH_PER_MS,
        WindSpeedUnit::Knots => kmh / KMH_PER_KNOT,
        WindSpeedUnit::Beaufort => return bucket_beaufort(kmh) as f64,
    };
    round_half_away(converted, unit.decimals(converted))
}

/// Target unit → km/h. Beaufort unbuckets to the interval midpoint
/// (lossy by design, see [`unbucket_beaufort`]).
pub fn reverse_wind_speed(value: f64, unit: WindSpeedUnit) -> f64 {
    match unit {
        WindSpeedUnit::Kmh => value,
        WindSpeedUnit::Mph => value * KMH_PER_MPH,
        WindSpeedUnit::Ms => value * KMH_PER_MS,
        WindSpeedUnit::Knots => value * KMH_PER_KNOT,
        WindSpeedUnit::Beaufort => unbucket_beaufort(value.max(0.0).min(12.0) as u8),
    }
}

/// mm → target unit, rounded per the rain decimal policy.
pub fn convert_rain(mm: f64, unit: RainUnit) -> f64 {
    let converted = match unit {
        RainUnit::Millimeters => mm,
        RainUnit::Inches => mm / MM_PER_INCH,
    };
    round_half_away(converted, unit.decimals())
}

/// Target unit → mm.
pub fn reverse_rain(value: f64, unit: RainUnit) -> f64 {
    match unit {
        RainUnit::Millimeters => value,
        RainUnit::Inches => value * MM_PER_INCH,
    }
}

/// cm → target unit, rounded per the snow decimal policy.
pub fn convert_snow(cm: f64, unit: SnowUnit) -> f64 {
    let converted = match unit {
        SnowUnit::Centimeters => cm,
        SnowUnit::Inches => cm / CM_PER_INCH,
    };
    round_half_away(converted, unit.decimals())
}

/// Target unit → cm.
pub fn reverse_snow(value: f64, unit: SnowUnit) -> f64 {
    match unit {
        SnowUnit::Centimeters => value,
        SnowUnit::Inches => value * CM_PER_INCH,
    }
}

/// km → target unit, rounded to 1 decimal.
pub fn convert_distance(km: f64, unit: DistanceUnit) -> f64 {
    let converted = match unit {
        DistanceUnit::Kilometers => km,
        DistanceUnit::Miles => km / KM_PER_MILE,
    };
    round_half_away(converted, 1)
}

/// Target unit → km.
pub fn reverse_distance(value: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometers => value,
        DistanceUnit::Miles => value * KM_PER_MILE,
    }
}

/// m → target unit, rounded to an integer.
pub fn convert_altitude(meters: f64, unit: AltitudeUnit) -> f64 {
    let converted = match unit {
        AltitudeUnit::Meters => meters,
        AltitudeUnit::Feet => meters * FEET_PER_METER,
    };
    round_half_away(converted, 0)
}

/// Target unit → m.
pub fn reverse_altitude(value: f64, unit: AltitudeUnit) -> f64 {
    match unit {
        AltitudeUnit::Meters => value,
        AltitudeUnit::Feet => value / FEET_PER_METER,
    }
}

// ============================================================================
// Generic dispatch over the family enum
// ============================================================================

/// Convert a storage value into the selected display unit for `family`.
/// Families without a selector pass through rounded to their fixed policy.
pub fn convert(value: f64, family: UnitFamily, selection: &UnitSystemSelection) -> f64 {
    match family {
        UnitFamily::Temperature => convert_temperature(value, selection.temperature),
        UnitFamily::Pressure => convert_pressure(value, selection.pressure),
        UnitFamily::WindSpeed => convert_wind_speed(value, selection.wind_speed),
        UnitFamily::Rain => convert_rain(value, selection.rain),
        UnitFamily::Snow => convert_snow(value, selection.snow),
        UnitFamily::Distance => convert_distance(value, selection.distance),
        UnitFamily::Altitude => convert_altitude(value, selection.altitude),
        UnitFamily::Humidity | UnitFamily::Percentage => {
            round_half_away(value.clamp(0.0, 100.0), 0)
        }
        UnitFamily::WindAngle => round_half_away(value.rem_euclid(360.0), 0),
        UnitFamily::Irradiance
        | UnitFamily::Illuminance
        | UnitFamily::GasConcentration
        | UnitFamily::Noise
        | UnitFamily::Duration
        | UnitFamily::Timestamp => round_half_away(value, 0),
        UnitFamily::Index => round_half_away(value, 1),
        UnitFamily::Coordinate => round_half_away(value, 6),
        UnitFamily::Trend | UnitFamily::RawString => value,
    }
}

/// Inverse of [`convert`] for user-entered threshold values.
pub fn reverse_convert(value: f64, family: UnitFamily, selection: &UnitSystemSelection) -> f64 {
    match family {
        UnitFamily::Temperature => reverse_temperature(value, selection.temperature),
        UnitFamily::Pressure => reverse_pressure(value, selection.pressure),
        UnitFamily::WindSpeed => reverse_wind_speed(value, selection.wind_speed),
        UnitFamily::Rain => reverse_rain(value, selection.rain),
        UnitFamily::Snow => reverse_snow(value, selection.snow),
        UnitFamily::Distance => reverse_distance(value, selection.distance),
        UnitFamily::Altitude => reverse_altitude(value, selection.altitude),
        _ => value,
    }
}

/// Decimal digits to render for a converted value of `family`.
pub fn decimals_for(converted: f64, family: UnitFamily, selection: &UnitSystemSelection) -> usize {
    match family {
        UnitFamily::Temperature => 1,
        UnitFamily::Pressure => selection.pressure.decimals(),
        UnitFamily::WindSpeed => match selection.wind_speed {
            WindSpeedUnit::Beaufort => 0,
            unit => unit.decimals(converted),
        },
        UnitFamily::Rain => selection.rain.decimals(),
        UnitFamily::Snow => selection.snow.decimals(),
        UnitFamily::Distance => 1,
        UnitFamily::Index => 1,
        UnitFamily::Coordinate => 6,
        _ => 0,
    }
}

/// Unit label for a converted value of `family`.
pub fn unit_label_for(family: UnitFamily, selection: &UnitSystemSelection) -> &'static str {
    match family {
        UnitFamily::Temperature => selection.temperature.unit_label(),
        UnitFamily::Pressure => selection.pressure.unit_label(),
        UnitFamily::WindSpeed => selection.wind_speed.unit_label(),
        UnitFamily::Rain => selection.rain.unit_label(),
        UnitFamily::Snow => selection.snow.unit_label(),
        UnitFamily::Distance => selection.distance.unit_label(),
        UnitFamily::Altitude => selection.altitude.unit_label(),
        UnitFamily::Humidity | UnitFamily::Percentage => "%",
        UnitFamily::GasConcentration => "ppm",
        UnitFamily::Noise => "dB",
        UnitFamily::Irradiance => "W/m²",
        UnitFamily::Illuminance => "lx",
        UnitFamily::WindAngle | UnitFamily::Coordinate => "°",
        UnitFamily::Duration => "s",
        UnitFamily::Index => "",
        UnitFamily::Timestamp | UnitFamily::Trend | UnitFamily::RawString => "",
    }
}

/// Convert then render with the family/system fixed format.
/// Beaufort renders as an integer 0–12, never a decimal.
pub fn format(value: f64, family: UnitFamily, selection: &UnitSystemSelection) -> String {
    let converted = convert(value, family, selection);
    let decimals = decimals_for(converted, family, selection);
    format!("{:.*}", decimals, converted)
}

/// Format a duration in seconds as `HH:MM`.
pub fn format_duration_hm(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 3600, (total % 3600) / 60)
}

/// Format a duration in seconds as `HH:MM:SS`.
pub fn format_duration_hms(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(round_half_away(2.5, 0), 3.0);
        assert_eq!(round_half_away(-2.5, 0), -3.0);
        assert_eq!(round_half_away(0.25, 1), 0.3);
        assert_eq!(round_half_away(-0.25, 1), -0.3);
        assert_eq!(round_half_away(1.04, 1), 1.0);
    }

    #[test]
    fn test_temperature_conversions() {
        assert_eq!(convert_temperature(0.0, TemperatureUnit::Fahrenheit), 32.0);
        assert_eq!(convert_temperature(100.0, TemperatureUnit::Fahrenheit), 212.0);
        assert_eq!(convert_temperature(0.0, TemperatureUnit::Kelvin), 273.2);
        assert_eq!(convert_temperature(-40.0, TemperatureUnit::Fahrenheit), -40.0);
    }

    /// Standard atmosphere renders as 29.92 inHg and 760.0 mmHg.
    #[test]
    fn test_standard_atmosphere_pressure() {
        assert_eq!(convert_pressure(1013.25, PressureUnit::InHg), 29.92);
        assert_eq!(convert_pressure(1013.25, PressureUnit::MmHg), 760.0);
        assert_eq!(convert_pressure(1013.25, PressureUnit::Hpa), 1013.3);
    }

    #[test]
    fn test_pressure_rendering_strings() {
        let inhg = UnitSystemSelection {
            pressure: PressureUnit::InHg,
            ..Default::default()
        };
        let mmhg = UnitSystemSelection {
            pressure: PressureUnit::MmHg,
            ..Default::default()
        };
        assert_eq!(format(1013.25, UnitFamily::Pressure, &inhg), "29.92");
        assert_eq!(format(1013.25, UnitFamily::Pressure, &mmhg), "760.0");
    }

    #[test]
    fn test_wind_speed_conversions() {
        assert_eq!(convert_wind_speed(36.0, WindSpeedUnit::Ms), 10.0);
        assert_eq!(convert_wind_speed(10.0, WindSpeedUnit::Ms), 2.8);
        assert_eq!(convert_wind_speed(100.0, WindSpeedUnit::Mph), 62.0);
        // Beaufort is always an integer value
        assert_eq!(convert_wind_speed(30.0, WindSpeedUnit::Beaufort), 5.0);
        let beaufort = UnitSystemSelection {
            wind_speed: WindSpeedUnit::Beaufort,
            ..Default::default()
        };
        assert_eq!(format(30.0, UnitFamily::WindSpeed, &beaufort), "5");
    }

    /// Round-trip property: reverse(convert(v)) ≈ v within the family's
    /// rounding tolerance, for every supported system.
    #[test]
    fn test_round_trips_within_rounding_tolerance() {
        for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit, TemperatureUnit::Kelvin]
        {
            let back = reverse_temperature(convert_temperature(21.37, unit), unit);
            assert_abs_diff_eq!(back, 21.37, epsilon = 0.05);
        }
        for unit in [PressureUnit::Hpa, PressureUnit::InHg, PressureUnit::MmHg] {
            let back = reverse_pressure(convert_pressure(1013.25, unit), unit);
            assert_abs_diff_eq!(back, 1013.25, epsilon = 0.2);
        }
        for unit in [WindSpeedUnit::Kmh, WindSpeedUnit::Mph, WindSpeedUnit::Ms, WindSpeedUnit::Knots]
        {
            let back = reverse_wind_speed(convert_wind_speed(17.3, unit), unit);
            assert_abs_diff_eq!(back, 17.3, epsilon = 1.0);
        }
        for unit in [RainUnit::Millimeters, RainUnit::Inches] {
            let back = reverse_rain(convert_rain(12.7, unit), unit);
            assert_abs_diff_eq!(back, 12.7, epsilon = 0.2);
        }
        for unit in [DistanceUnit::Kilometers, DistanceUnit::Miles] {
            let back = reverse_distance(convert_distance(8.5, unit), unit);
            assert_abs_diff_eq!(back, 8.5, epsilon = 0.1);
        }
        for unit in [AltitudeUnit::Meters, AltitudeUnit::Feet] {
            let back = reverse_altitude(convert_altitude(1250.0, unit), unit);
            assert_abs_diff_eq!(back, 1250.0, epsilon = 0.5);
        }
    }

    #[test]
    fn test_percentage_families_clamp() {
        let selection = UnitSystemSelection::default();
        assert_eq!(convert(130.0, UnitFamily::Humidity, &selection), 100.0);
        assert_eq!(convert(-4.0, UnitFamily::Percentage, &selection), 0.0);
    }

    #[test]
    fn test_wind_angle_normalizes() {
        let selection = UnitSystemSelection::default();
        assert_eq!(convert(365.0, UnitFamily::WindAngle, &selection), 5.0);
        assert_eq!(convert(-10.0, UnitFamily::WindAngle, &selection), 350.0);
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_hm(3661.0), "01:01");
        assert_eq!(format_duration_hms(3661.0), "01:01:01");
        assert_eq!(format_duration_hms(0.0), "00:00:00");
        // Negative durations saturate to zero rather than erroring
        assert_eq!(format_duration_hm(-5.0), "00:00");
    }
}
