//! Request flags and reference values for a resolve call.

use super::profile::StationCapabilityProfile;
use crate::units::validity::WIND_CHILL_ABSENT;

/// Orthogonal request flags bundled into every resolve call.
///
/// `mono` (min/max pairs) and `computed` (derived quantities) are part
/// of the normal output and default on; every restriction flag defaults
/// off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveMode {
    /// Include operational/meta measurements (battery, firmware, signal,
    /// setup timestamps)
    pub full: bool,
    /// Include the per-module synthetic "aggregated" placeholder
    pub aggregated: bool,
    /// Include derived quantities
    pub computed: bool,
    /// Include min/max pairs
    pub mono: bool,
    /// Restrict to measurement types allowed in daily history
    pub daily: bool,
    /// Restrict to measurement types allowed in long-term history
    pub historical: bool,
    /// Restrict further to comparison-eligible measurements
    pub comparison: bool,
    /// Restrict further to distribution-eligible measurements
    pub distribution: bool,
    /// Prepend a synthetic "none" placeholder entry
    pub noned: bool,
}

impl Default for ResolveMode {
    fn default() -> Self {
        ResolveMode {
            full: false,
            aggregated: false,
            computed: true,
            mono: true,
            daily: false,
            historical: false,
            comparison: false,
            distribution: false,
            noned: false,
        }
    }
}

/// Reference readings, sampled at the same instant as the request, used
/// to gate derived quantities. Absent references degrade the affected
/// derived measurements to "not applicable".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReferenceValues {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub dew_point: Option<f64>,
    pub wind_chill: Option<f64>,
}

impl ReferenceValues {
    /// Wind-chill reading, or the absent sentinel when not supplied.
    pub fn wind_chill_or_absent(&self) -> f64 {
        self.wind_chill.unwrap_or(WIND_CHILL_ABSENT)
    }
}

/// Everything a rule predicate may inspect.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveContext {
    pub profile: StationCapabilityProfile,
    pub mode: ResolveMode,
    pub refs: ReferenceValues,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let mode = ResolveMode::default();
        assert!(mode.mono && mode.computed);
        assert!(!mode.full && !mode.daily && !mode.historical);
        assert!(!mode.comparison && !mode.distribution && !mode.noned);
    }

    #[test]
    fn test_wind_chill_sentinel() {
        let refs = ReferenceValues::default();
        assert_eq!(refs.wind_chill_or_absent(), WIND_CHILL_ABSENT);
        let refs = ReferenceValues { wind_chill: Some(-2.0), ..Default::default() };
        assert_eq!(refs.wind_chill_or_absent(), -2.0);
    }
}
