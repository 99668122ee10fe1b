//! Measurement core for a weather-station aggregation platform.
//!
//! Two pure engines and the glue between them:
//! - `resolver/`: decides which measurement types apply to a module,
//!   given the station's capability profile and the request mode
//! - `units/`: converts stored metric values into the selected display
//!   units and renders them with fixed per-family precision
//! - `assembler`: runs both for a whole station and produces the
//!   per-module rows consumed by templating/export collaborators
//!
//! Everything here is a pure function of its arguments: no I/O, no
//! global unit state, no clocks. Collaborators supply raw readings,
//! capability profiles and history predicates from the outside.

pub mod assembler;
pub mod error;
pub mod resolver;
pub mod types;
pub mod units;

// Re-export the surface most collaborators use
pub use assembler::{assemble_station, convert_for_display, variants, ModuleInput};
pub use error::CoreError;
pub use resolver::mode::{ReferenceValues, ResolveContext, ResolveMode};
pub use resolver::profile::{StationCapabilityProfile, VendorFamily};
pub use resolver::{resolve, resolve_current, AllowAll, HistoryAllowed, HistoryFn};
pub use types::{
    ConvertedValue, MeasureType, MeasurementRow, ModuleType, RawMeasurement,
    ResolvedModuleMeasurements, Trend, ValueDomain, VariantRow,
};
pub use units::systems::{UnitFamily, UnitSystemSelection};
