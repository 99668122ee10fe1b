//! Station capability profiles.
//!
//! A station identifier carries a vendor/family prefix; classification
//! happens once per station lookup and the resulting flag set is treated
//! as an immutable value everywhere else. Flags are informative but not
//! mutually exclusive: upstream misclassification can set several at
//! once, and the resolver must tolerate any combination.

use serde::Serialize;

/// Closed vendor-family classification of a station identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VendorFamily {
    /// First-party stations with the full module ecosystem
    Primary,
    /// Second-party camera/sky stations
    VendorB,
    /// Stations pushing an unprocessed local feed
    RawFeed,
    /// Stations relayed through an aggregation network
    AggregatorFeed,
    /// Unrecognized identifier
    Unknown,
}

impl VendorFamily {
    /// Classify a station identifier by its prefix.
    pub fn from_station_id(station_id: &str) -> Self {
        let id = station_id.trim();
        if id.starts_with("prm:") || id.starts_with("00:") {
            VendorFamily::Primary
        } else if id.starts_with("vb:") {
            VendorFamily::VendorB
        } else if id.starts_with("raw:") || id.starts_with("txt:") {
            VendorFamily::RawFeed
        } else if id.starts_with("agg:") {
            VendorFamily::AggregatorFeed
        } else {
            VendorFamily::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VendorFamily::Primary => "Primary vendor",
            VendorFamily::VendorB => "Camera vendor",
            VendorFamily::RawFeed => "Raw feed",
            VendorFamily::AggregatorFeed => "Aggregator feed",
            VendorFamily::Unknown => "Unknown vendor",
        }
    }
}

/// Boolean capability projections of a station's vendor classification.
///
/// Resolver rules read these projections directly. The struct is plain
/// data so collaborators that classify stations by other means (cached
/// lookups, admin overrides) can construct any combination, including
/// all-false and all-true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StationCapabilityProfile {
    pub is_primary_vendor: bool,
    pub is_vendor_b: bool,
    pub is_raw_feed: bool,
    pub is_aggregator_feed: bool,
}

impl StationCapabilityProfile {
    /// Derive the profile from a station identifier.
    pub fn from_station_id(station_id: &str) -> Self {
        Self::from_family(VendorFamily::from_station_id(station_id))
    }

    /// Project a vendor family onto the capability flags.
    pub fn from_family(family: VendorFamily) -> Self {
        StationCapabilityProfile {
            is_primary_vendor: family == VendorFamily::Primary,
            is_vendor_b: family == VendorFamily::VendorB,
            is_raw_feed: family == VendorFamily::RawFeed,
            is_aggregator_feed: family == VendorFamily::AggregatorFeed,
        }
    }

    /// True when no vendor predicate matched (unknown vendor).
    pub fn is_unclassified(&self) -> bool {
        !self.is_primary_vendor && !self.is_vendor_b && !self.is_raw_feed && !self.is_aggregator_feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_classification() {
        assert_eq!(VendorFamily::from_station_id("prm:70ee"), VendorFamily::Primary);
        assert_eq!(VendorFamily::from_station_id("00:1a:2b"), VendorFamily::Primary);
        assert_eq!(VendorFamily::from_station_id("vb:cam-12"), VendorFamily::VendorB);
        assert_eq!(VendorFamily::from_station_id("raw:davis"), VendorFamily::RawFeed);
        assert_eq!(VendorFamily::from_station_id("txt:clientraw"), VendorFamily::RawFeed);
        assert_eq!(VendorFamily::from_station_id("agg:wu-123"), VendorFamily::AggregatorFeed);
        assert_eq!(VendorFamily::from_station_id("???"), VendorFamily::Unknown);
        assert_eq!(VendorFamily::from_station_id(""), VendorFamily::Unknown);
    }

    #[test]
    fn test_profile_projection_is_exclusive_per_family() {
        let profile = StationCapabilityProfile::from_station_id("prm:70ee");
        assert!(profile.is_primary_vendor);
        assert!(!profile.is_vendor_b && !profile.is_raw_feed && !profile.is_aggregator_feed);

        let unknown = StationCapabilityProfile::from_station_id("weird-id");
        assert!(unknown.is_unclassified());
    }

    #[test]
    fn test_ambiguous_profiles_are_representable() {
        // Upstream misclassification may set several flags; the type
        // must carry that combination without complaint.
        let ambiguous = StationCapabilityProfile {
            is_primary_vendor: true,
            is_aggregator_feed: true,
            ..Default::default()
        };
        assert!(!ambiguous.is_unclassified());
    }
}
