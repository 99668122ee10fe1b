//! Battery and radio-signal percentage mapping.
//!
//! Raw hardware integers map through per-module-type min/max thresholds
//! into a clamped 0–100 percentage. The base station is AC powered: its
//! battery level is not a measurement and reports `None` ("not
//! applicable"); display layers conventionally render that as 100 /
//! fully powered.

use crate::types::ModuleType;

/// Raw battery domain for one module type (millivolt-style ladder).
#[derive(Debug, Clone, Copy)]
struct BatteryDomain {
    min: i64,
    max: i64,
}

/// Headroom subtracted from the battery max before scaling; radios
/// report above the nominal full level when freshly charged.
pub const BATTERY_CUTOFF_MARGIN: i64 = 300;

/// Margin subtracted from the worst usable signal level before scaling.
pub const SIGNAL_CUTOFF_MARGIN: i64 = 4;

/// RF link thresholds for remote modules (lower raw value is better).
pub const RF_SIGNAL_BEST: i64 = 60;
pub const RF_SIGNAL_WORST: i64 = 90;

/// WiFi thresholds for the base station (lower raw value is better).
pub const WIFI_SIGNAL_BEST: i64 = 56;
pub const WIFI_SIGNAL_WORST: i64 = 86;

fn battery_domain(module_type: ModuleType) -> Option<BatteryDomain> {
    match module_type {
        ModuleType::Outdoor | ModuleType::Indoor => Some(BatteryDomain { min: 4200, max: 6000 }),
        ModuleType::Wind => Some(BatteryDomain { min: 4360, max: 6000 }),
        ModuleType::Rain | ModuleType::Solar | ModuleType::Soil | ModuleType::Lightning => {
            Some(BatteryDomain { min: 4000, max: 6000 })
        }
        // AC powered base station and all virtual modules
        _ => None,
    }
}

/// Battery charge percentage for a raw hardware reading.
///
/// Returns `None` for the base station (AC powered) and for virtual
/// modules, which carry no battery at all. Any integer input, including
/// extreme out-of-domain values, clamps into [0, 100].
pub fn battery_percentage(raw: i64, module_type: ModuleType) -> Option<u8> {
    let domain = battery_domain(module_type)?;
    let full = domain.max - BATTERY_CUTOFF_MARGIN;
    let span = full - domain.min;
    // Clamp before scaling so extreme raw values cannot overflow
    let raw = raw.clamp(domain.min, full);
    let percent = (raw - domain.min) * 100 / span;
    Some(percent.clamp(0, 100) as u8)
}

/// Radio signal percentage for a raw hardware reading.
///
/// The base station maps through the WiFi thresholds, physical remote
/// modules through the RF thresholds; virtual modules have no radio and
/// return `None`. Lower raw readings are stronger signals.
pub fn signal_percentage(raw: i64, module_type: ModuleType) -> Option<u8> {
    let (best, worst) = match module_type {
        ModuleType::Main => (WIFI_SIGNAL_BEST, WIFI_SIGNAL_WORST),
        ModuleType::Outdoor
        | ModuleType::Wind
        | ModuleType::Rain
        | ModuleType::Indoor
        | ModuleType::Solar
        | ModuleType::Soil
        | ModuleType::Lightning => (RF_SIGNAL_BEST, RF_SIGNAL_WORST),
        _ => return None,
    };
    let cutoff = worst - SIGNAL_CUTOFF_MARGIN;
    let raw = raw.clamp(best, cutoff);
    let percent = (cutoff - raw) * 100 / (cutoff - best);
    Some(percent.clamp(0, 100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_clamps_at_both_ends() {
        assert_eq!(battery_percentage(6000, ModuleType::Outdoor), Some(100));
        assert_eq!(battery_percentage(4200, ModuleType::Outdoor), Some(0));
        // Extreme out-of-domain values stay inside [0, 100]
        assert_eq!(battery_percentage(i64::MAX / 2, ModuleType::Wind), Some(100));
        assert_eq!(battery_percentage(-50_000, ModuleType::Rain), Some(0));
        assert_eq!(battery_percentage(0, ModuleType::Indoor), Some(0));
    }

    #[test]
    fn test_battery_scales_between_thresholds() {
        // Outdoor: min 4200, full 5700 → midpoint reads 50
        assert_eq!(battery_percentage(4950, ModuleType::Outdoor), Some(50));
        let low = battery_percentage(4500, ModuleType::Outdoor).unwrap();
        let high = battery_percentage(5500, ModuleType::Outdoor).unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_main_battery_is_not_applicable() {
        // AC powered: no measured level, conventionally rendered as full
        assert_eq!(battery_percentage(5000, ModuleType::Main), None);
        assert_eq!(battery_percentage(5000, ModuleType::Computed), None);
        assert_eq!(battery_percentage(5000, ModuleType::Ephemeris), None);
    }

    #[test]
    fn test_signal_inverted_scale() {
        // Lower raw RSSI is a stronger link
        assert_eq!(signal_percentage(RF_SIGNAL_BEST, ModuleType::Outdoor), Some(100));
        assert_eq!(signal_percentage(RF_SIGNAL_WORST, ModuleType::Outdoor), Some(0));
        let strong = signal_percentage(65, ModuleType::Wind).unwrap();
        let weak = signal_percentage(80, ModuleType::Wind).unwrap();
        assert!(strong > weak);
    }

    #[test]
    fn test_signal_wifi_vs_rf_thresholds() {
        assert_eq!(signal_percentage(WIFI_SIGNAL_BEST, ModuleType::Main), Some(100));
        // The same raw reading maps differently on the RF scale
        assert_ne!(
            signal_percentage(70, ModuleType::Main),
            signal_percentage(70, ModuleType::Outdoor)
        );
        assert_eq!(signal_percentage(70, ModuleType::Aggregated), None);
    }

    #[test]
    fn test_signal_clamps_for_any_input() {
        for raw in [i64::MIN / 2, -1, 0, 50, 100, 10_000] {
            if let Some(percent) = signal_percentage(raw, ModuleType::Rain) {
                assert!(percent <= 100);
            }
        }
    }
}
