//! Wind-angle and coordinate textual rendering.
//!
//! The compass rose divides the circle into 16 sectors of 22.5°, offset
//! by 0.4 sectors rather than centered geometrically. Ties at exact
//! sector boundaries go to the lower-index direction.

/// Short compass labels, clockwise from north.
pub const COMPASS_SHORT: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Long compass labels, clockwise from north.
pub const COMPASS_LONG: [&str; 16] = [
    "North",
    "North-northeast",
    "Northeast",
    "East-northeast",
    "East",
    "East-southeast",
    "Southeast",
    "South-southeast",
    "South",
    "South-southwest",
    "Southwest",
    "West-southwest",
    "West",
    "West-northwest",
    "Northwest",
    "North-northwest",
];

/// Sector width in degrees.
pub const SECTOR_DEGREES: f64 = 22.5;
/// Sector offset applied before bucketing, in sectors.
pub const SECTOR_OFFSET: f64 = 0.4;

/// Sector index 0–15 for an angle in degrees. Any finite angle is
/// accepted; it is normalized into [0, 360) first.
pub fn compass_sector(angle_degrees: f64) -> usize {
    let normalized = angle_degrees.rem_euclid(360.0);
    let position = normalized / SECTOR_DEGREES + SECTOR_OFFSET;
    // ceil-1 floors non-integers and sends exact boundaries to the
    // lower-index sector
    (position.ceil() as i64 - 1).rem_euclid(16) as usize
}

/// Short label (`"N"`, `"SSW"`, …) for an angle in degrees.
pub fn angle_to_compass(angle_degrees: f64) -> &'static str {
    COMPASS_SHORT[compass_sector(angle_degrees)]
}

/// Long label (`"North"`, `"South-southwest"`, …) for an angle in degrees.
pub fn angle_to_compass_full(angle_degrees: f64) -> &'static str {
    COMPASS_LONG[compass_sector(angle_degrees)]
}

/// Coordinate axis for DMS rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateAxis {
    Latitude,
    Longitude,
}

/// Render a decimal-degree coordinate as degrees/minutes/seconds with a
/// hemisphere suffix, e.g. `45°30'00"N`.
pub fn angle_to_dms(decimal_degrees: f64, axis: CoordinateAxis) -> String {
    let hemisphere = match (axis, decimal_degrees < 0.0) {
        (CoordinateAxis::Latitude, false) => "N",
        (CoordinateAxis::Latitude, true) => "S",
        (CoordinateAxis::Longitude, false) => "E",
        (CoordinateAxis::Longitude, true) => "W",
    };
    let total_seconds = (decimal_degrees.abs() * 3600.0).round() as u64;
    let degrees = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}°{:02}'{:02}\"{}", degrees, minutes, seconds, hemisphere)
}
