//! Unit conversion and presentation engine.
//!
//! Pure, stateless value-to-value and value-to-text conversions,
//! parameterized by an explicit [`systems::UnitSystemSelection`] — the
//! engine holds no configuration state of its own and performs no I/O.
//!
//! - `systems`: unit families, per-family selectors, precision policy
//! - `convert`: forward/reverse conversions and fixed-format rendering
//! - `beaufort`: wind-force bucketing tables
//! - `compass`: 16-sector direction labels and DMS coordinates
//! - `battery`: battery/signal percentage mapping
//! - `moon`: phase bucketing and icon states
//! - `validity`: derived-quantity validity gates

pub mod battery;
pub mod beaufort;
pub mod compass;
pub mod convert;
pub mod moon;
pub mod systems;
pub mod validity;

// Re-export the operations collaborators reach for most often
pub use battery::{battery_percentage, signal_percentage};
pub use beaufort::{bucket_beaufort, unbucket_beaufort};
pub use compass::{angle_to_compass, angle_to_compass_full, angle_to_dms};
pub use convert::{convert, format, reverse_convert};
pub use moon::{moon_phase_bucket, moon_phase_icon_id};
pub use systems::{UnitFamily, UnitSystemSelection};
