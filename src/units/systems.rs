//! Unit families and per-family unit-system selectors.
//!
//! Storage units are fixed (°C, hPa, km/h, mm, cm, km, m, seconds);
//! display units are selected per family by collaborator configuration.
//! Selections arrive as small integers and are decoded once through
//! `try_from_index` — the core never reads configuration state itself.

use serde::Serialize;

use crate::error::CoreError;

/// Physical quantity family of a measurement type.
///
/// Families without a selector (ppm, dB, %, lux, …) render in their
/// storage unit; the enum still names them so the precision policy and
/// unit labels stay a closed mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitFamily {
    Temperature,
    Pressure,
    WindSpeed,
    WindAngle,
    Rain,
    Snow,
    GasConcentration, // ppm
    Noise,            // dB
    Humidity,         // %
    Percentage,       // battery/signal/cloudiness/moisture
    Index,            // health index, UV index, CBI
    Irradiance,       // W/m²
    Illuminance,      // lx
    Distance,         // strike distance, visibility
    Altitude,         // cloud ceiling, station altitude
    Duration,         // seconds
    Timestamp,        // unix seconds
    Coordinate,       // latitude/longitude in decimal degrees
    Trend,
    RawString,
}

impl UnitFamily {
    /// Dimension tag exposed to templating collaborators.
    pub fn dimension_tag(&self) -> &'static str {
        match self {
            UnitFamily::Temperature => "temperature",
            UnitFamily::Pressure => "pressure",
            UnitFamily::WindSpeed => "wind_speed",
            UnitFamily::WindAngle => "wind_angle",
            UnitFamily::Rain => "rain",
            UnitFamily::Snow => "snow",
            UnitFamily::GasConcentration => "concentration",
            UnitFamily::Noise => "noise",
            UnitFamily::Humidity => "humidity",
            UnitFamily::Percentage => "percentage",
            UnitFamily::Index => "index",
            UnitFamily::Irradiance => "irradiance",
            UnitFamily::Illuminance => "illuminance",
            UnitFamily::Distance => "distance",
            UnitFamily::Altitude => "altitude",
            UnitFamily::Duration => "duration",
            UnitFamily::Timestamp => "timestamp",
            UnitFamily::Coordinate => "coordinate",
            UnitFamily::Trend => "trend",
            UnitFamily::RawString => "string",
        }
    }
}

// ============================================================================
// Per-family unit selectors
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius, // 0
    Fahrenheit, // 1
    Kelvin,     // 2
}

impl TemperatureUnit {
    pub fn try_from_index(index: u8) -> Result<Self, CoreError> {
        match index {
            0 => Ok(TemperatureUnit::Celsius),
            1 => Ok(TemperatureUnit::Fahrenheit),
            2 => Ok(TemperatureUnit::Kelvin),
            _ => Err(CoreError::UnknownUnitSystem { family: "temperature", index }),
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PressureUnit {
    #[default]
    Hpa, // 0
    InHg, // 1
    MmHg, // 2
}

impl PressureUnit {
    pub fn try_from_index(index: u8) -> Result<Self, CoreError> {
        match index {
            0 => Ok(PressureUnit::Hpa),
            1 => Ok(PressureUnit::InHg),
            2 => Ok(PressureUnit::MmHg),
            _ => Err(CoreError::UnknownUnitSystem { family: "pressure", index }),
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            PressureUnit::Hpa => "hPa",
            PressureUnit::InHg => "inHg",
            PressureUnit::MmHg => "mmHg",
        }
    }

    /// Decimal digits rendered for this pressure unit.
    pub fn decimals(&self) -> usize {
        match self {
            PressureUnit::Hpa => 1,
            PressureUnit::InHg => 2,
            PressureUnit::MmHg => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WindSpeedUnit {
    #[default]
    Kmh, // 0
    Mph,      // 1
    Ms,       // 2
    Knots,    // 3
    Beaufort, // 4
}

impl WindSpeedUnit {
    pub fn try_from_index(index: u8) -> Result<Self, CoreError> {
        match index {
            0 => Ok(WindSpeedUnit::Kmh),
            1 => Ok(WindSpeedUnit::Mph),
            2 => Ok(WindSpeedUnit::Ms),
            3 => Ok(WindSpeedUnit::Knots),
            4 => Ok(WindSpeedUnit::Beaufort),
            _ => Err(CoreError::UnknownUnitSystem { family: "wind_speed", index }),
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            WindSpeedUnit::Kmh => "km/h",
            WindSpeedUnit::Mph => "mph",
            WindSpeedUnit::Ms => "m/s",
            WindSpeedUnit::Knots => "kn",
            WindSpeedUnit::Beaufort => "bf",
        }
    }

    /// Decimal digits for a converted value in this unit.
    /// m/s and knots keep one decimal while the value is small; the
    /// integer units never show decimals, Beaufort is always an integer.
    pub fn decimals(&self, converted: f64) -> usize {
        match self {
            WindSpeedUnit::Ms | WindSpeedUnit::Knots => {
                if converted.abs() < SMALL_SPEED_DECIMAL_LIMIT {
                    1
                } else {
                    0
                }
            }
            _ => 0,
        }
    }
}

/// Below this converted magnitude m/s and knots render one decimal.
pub const SMALL_SPEED_DECIMAL_LIMIT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RainUnit {
    #[default]
    Millimeters, // 0
    Inches, // 1
}

impl RainUnit {
    pub fn try_from_index(index: u8) -> Result<Self, CoreError> {
        match index {
            0 => Ok(RainUnit::Millimeters),
            1 => Ok(RainUnit::Inches),
            _ => Err(CoreError::UnknownUnitSystem { family: "rain", index }),
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            RainUnit::Millimeters => "mm",
            RainUnit::Inches => "in",
        }
    }

    pub fn decimals(&self) -> usize {
        match self {
            RainUnit::Millimeters => 1,
            RainUnit::Inches => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SnowUnit {
    #[default]
    Centimeters, // 0
    Inches, // 1
}

impl SnowUnit {
    pub fn try_from_index(index: u8) -> Result<Self, CoreError> {
        match index {
            0 => Ok(SnowUnit::Centimeters),
            1 => Ok(SnowUnit::Inches),
            _ => Err(CoreError::UnknownUnitSystem { family: "snow", index }),
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            SnowUnit::Centimeters => "cm",
            SnowUnit::Inches => "in",
        }
    }

    pub fn decimals(&self) -> usize {
        match self {
            SnowUnit::Centimeters => 0,
            SnowUnit::Inches => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DistanceUnit {
    #[default]
    Kilometers, // 0
    Miles, // 1
}

impl DistanceUnit {
    pub fn try_from_index(index: u8) -> Result<Self, CoreError> {
        match index {
            0 => Ok(DistanceUnit::Kilometers),
            1 => Ok(DistanceUnit::Miles),
            _ => Err(CoreError::UnknownUnitSystem { family: "distance", index }),
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AltitudeUnit {
    #[default]
    Meters, // 0
    Feet, // 1
}

impl AltitudeUnit {
    pub fn try_from_index(index: u8) -> Result<Self, CoreError> {
        match index {
            0 => Ok(AltitudeUnit::Meters),
            1 => Ok(AltitudeUnit::Feet),
            _ => Err(CoreError::UnknownUnitSystem { family: "altitude", index }),
        }
    }

    pub fn unit_label(&self) -> &'static str {
        match self {
            AltitudeUnit::Meters => "m",
            AltitudeUnit::Feet => "ft",
        }
    }
}

// ============================================================================
// Complete selection bundle
// ============================================================================

/// Per-family unit selection, supplied by the settings collaborator and
/// threaded explicitly into every conversion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UnitSystemSelection {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
    pub wind_speed: WindSpeedUnit,
    pub rain: RainUnit,
    pub snow: SnowUnit,
    pub distance: DistanceUnit,
    pub altitude: AltitudeUnit,
}

impl UnitSystemSelection {
    /// Decode a selection from the collaborator's small-integer codes.
    pub fn try_from_indices(
        temperature: u8,
        pressure: u8,
        wind_speed: u8,
        rain: u8,
        snow: u8,
        distance: u8,
        altitude: u8,
    ) -> Result<Self, CoreError> {
        Ok(UnitSystemSelection {
            temperature: TemperatureUnit::try_from_index(temperature)?,
            pressure: PressureUnit::try_from_index(pressure)?,
            wind_speed: WindSpeedUnit::try_from_index(wind_speed)?,
            rain: RainUnit::try_from_index(rain)?,
            snow: SnowUnit::try_from_index(snow)?,
            distance: DistanceUnit::try_from_index(distance)?,
            altitude: AltitudeUnit::try_from_index(altitude)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_decoding_round_trips() {
        for index in 0u8..3 {
            assert!(TemperatureUnit::try_from_index(index).is_ok());
            assert!(PressureUnit::try_from_index(index).is_ok());
        }
        for index in 0u8..5 {
            assert!(WindSpeedUnit::try_from_index(index).is_ok());
        }
        for index in 0u8..2 {
            assert!(RainUnit::try_from_index(index).is_ok());
            assert!(SnowUnit::try_from_index(index).is_ok());
            assert!(DistanceUnit::try_from_index(index).is_ok());
            assert!(AltitudeUnit::try_from_index(index).is_ok());
        }
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        assert_eq!(
            TemperatureUnit::try_from_index(3),
            Err(CoreError::UnknownUnitSystem { family: "temperature", index: 3 })
        );
        assert_eq!(
            WindSpeedUnit::try_from_index(5),
            Err(CoreError::UnknownUnitSystem { family: "wind_speed", index: 5 })
        );
        assert!(UnitSystemSelection::try_from_indices(0, 0, 0, 0, 0, 0, 9).is_err());
    }

    #[test]
    fn test_default_selection_is_metric() {
        let selection = UnitSystemSelection::default();
        assert_eq!(selection.temperature, TemperatureUnit::Celsius);
        assert_eq!(selection.pressure, PressureUnit::Hpa);
        assert_eq!(selection.wind_speed, WindSpeedUnit::Kmh);
        assert_eq!(selection.rain, RainUnit::Millimeters);
    }

    #[test]
    fn test_wind_speed_decimal_policy() {
        assert_eq!(WindSpeedUnit::Ms.decimals(4.9), 1);
        assert_eq!(WindSpeedUnit::Ms.decimals(5.0), 0);
        assert_eq!(WindSpeedUnit::Knots.decimals(2.0), 1);
        assert_eq!(WindSpeedUnit::Kmh.decimals(2.0), 0);
        assert_eq!(WindSpeedUnit::Beaufort.decimals(2.0), 0);
    }
}
