//! Presentation assembly.
//!
//! Mechanical glue between the resolver and the conversion engine: for
//! each resolved measurement type it builds the set of output-format
//! variants (raw, converted, converted-with-unit, plain text, compass
//! text, icon) by calling the engine once per variant. Variant sets are
//! a closed per-category table, not ad hoc branching, so the mapping is
//! enumerable and testable on its own.

use serde_json::Value;
use smallvec::SmallVec;
use tracing::trace;

use crate::resolver::mode::ResolveContext;
use crate::resolver::rules::{
    label_of, unit_family_of, value_domain_of, AGGREGATED_MEASURE, NONE_MEASURE,
};
use crate::resolver::{resolve, HistoryAllowed};
use crate::types::{
    value_as_f64, value_as_str, ConvertedValue, MeasurementRow, ModuleType, RawMeasurement,
    ResolvedModuleMeasurements, Trend, ValueDomain, VariantRow,
};
use crate::units::battery::{battery_percentage, signal_percentage};
use crate::units::beaufort::beaufort_label;
use crate::units::compass::{angle_to_compass, angle_to_compass_full};
use crate::units::convert::{
    convert, decimals_for, format, format_duration_hm, format_duration_hms, unit_label_for,
};
use crate::units::moon::{moon_phase_bucket, moon_phase_icon_id, MoonIconStyle};
use crate::units::systems::{UnitFamily, UnitSystemSelection, WindSpeedUnit};

// ============================================================================
// Variant catalog
// ============================================================================

/// Output-format variant identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKey {
    Raw,
    Converted,
    ConvertedWithUnit,
    PlainText,
    ShortText,
    LongText,
    Icon,
    DurationHm,
    DurationHms,
}

impl VariantKey {
    pub fn key(&self) -> &'static str {
        match self {
            VariantKey::Raw => "raw",
            VariantKey::Converted => "converted",
            VariantKey::ConvertedWithUnit => "converted_unit",
            VariantKey::PlainText => "plain_text",
            VariantKey::ShortText => "short_text",
            VariantKey::LongText => "long_text",
            VariantKey::Icon => "icon",
            VariantKey::DurationHm => "duration_hm",
            VariantKey::DurationHms => "duration_hms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VariantKey::Raw => "Raw value",
            VariantKey::Converted => "Converted value",
            VariantKey::ConvertedWithUnit => "Converted value with unit",
            VariantKey::PlainText => "Plain text",
            VariantKey::ShortText => "Short direction",
            VariantKey::LongText => "Full direction",
            VariantKey::Icon => "Icon",
            VariantKey::DurationHm => "Duration (HH:MM)",
            VariantKey::DurationHms => "Duration (HH:MM:SS)",
        }
    }
}

/// Presentation category of a measurement type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantCategory {
    SpecialValue,
    WindAngle,
    Duration,
    MoonPhase,
    Trend,
    Timestamp,
    RawString,
}

/// Category of a measurement slug, derived from its value domain and
/// unit family.
pub fn category_of(measure: &str) -> VariantCategory {
    if measure == "moon_phase" {
        return VariantCategory::MoonPhase;
    }
    match value_domain_of(measure) {
        ValueDomain::Trend => VariantCategory::Trend,
        ValueDomain::Timestamp => VariantCategory::Timestamp,
        ValueDomain::Angle => VariantCategory::WindAngle,
        ValueDomain::RawString => VariantCategory::RawString,
        ValueDomain::Numeric => match unit_family_of(measure) {
            UnitFamily::Duration => VariantCategory::Duration,
            _ => VariantCategory::SpecialValue,
        },
    }
}

/// Closed mapping from category to its ordered variant-key list.
/// `extended_durations` is the preview flag exposing the HH:MM forms.
pub fn variant_keys(
    category: VariantCategory,
    extended_durations: bool,
) -> SmallVec<[VariantKey; 8]> {
    let mut keys: SmallVec<[VariantKey; 8]> = match category {
        VariantCategory::SpecialValue => SmallVec::from_slice(&[
            VariantKey::Raw,
            VariantKey::Converted,
            VariantKey::ConvertedWithUnit,
            VariantKey::PlainText,
        ]),
        VariantCategory::WindAngle => SmallVec::from_slice(&[
            VariantKey::Raw,
            VariantKey::Converted,
            VariantKey::ConvertedWithUnit,
            VariantKey::PlainText,
            VariantKey::ShortText,
            VariantKey::LongText,
        ]),
        VariantCategory::Duration => SmallVec::from_slice(&[
            VariantKey::Raw,
            VariantKey::Converted,
            VariantKey::ConvertedWithUnit,
            VariantKey::PlainText,
        ]),
        VariantCategory::MoonPhase => {
            SmallVec::from_slice(&[VariantKey::Raw, VariantKey::PlainText, VariantKey::Icon])
        }
        VariantCategory::Trend | VariantCategory::Timestamp => {
            SmallVec::from_slice(&[VariantKey::Raw, VariantKey::PlainText])
        }
        VariantCategory::RawString => SmallVec::from_slice(&[VariantKey::Raw]),
    };
    if category == VariantCategory::Duration && extended_durations {
        keys.push(VariantKey::DurationHm);
        keys.push(VariantKey::DurationHms);
    }
    keys
}

// ============================================================================
// Single-value rendering
// ============================================================================

/// Build a [`ConvertedValue`] for gauge/LCD display collaborators.
pub fn convert_for_display(
    value: f64,
    family: UnitFamily,
    selection: &UnitSystemSelection,
) -> ConvertedValue {
    let numeric_value = convert(value, family, selection);
    let decimals = decimals_for(numeric_value, family, selection);
    ConvertedValue {
        display_string: format(value, family, selection),
        numeric_value,
        decimals,
        unit_label: unit_label_for(family, selection),
    }
}

fn render_raw(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render one variant of one measurement. Returns `None` when the raw
/// value cannot carry the variant (e.g. a string where a number is
/// required); the caller omits the row rather than rendering a sentinel.
fn render_variant(
    measure: &str,
    raw: &Value,
    key: VariantKey,
    selection: &UnitSystemSelection,
) -> Option<String> {
    let family = unit_family_of(measure);
    match key {
        VariantKey::Raw => Some(render_raw(raw)),
        VariantKey::Converted => {
            let value = value_as_f64(raw)?;
            Some(format(value, family, selection))
        }
        VariantKey::ConvertedWithUnit => {
            let value = value_as_f64(raw)?;
            let unit = unit_label_for(family, selection);
            let rendered = format(value, family, selection);
            Some(if unit.is_empty() { rendered } else { format!("{} {}", rendered, unit) })
        }
        VariantKey::PlainText => plain_text(measure, raw, selection),
        VariantKey::ShortText => {
            let value = value_as_f64(raw)?;
            Some(angle_to_compass(value).to_string())
        }
        VariantKey::LongText => {
            let value = value_as_f64(raw)?;
            Some(angle_to_compass_full(value).to_string())
        }
        VariantKey::Icon => {
            let value = value_as_f64(raw)?;
            Some(moon_phase_icon_id(value, MoonIconStyle::Standard))
        }
        VariantKey::DurationHm => Some(format_duration_hm(value_as_f64(raw)?)),
        VariantKey::DurationHms => Some(format_duration_hms(value_as_f64(raw)?)),
    }
}

/// Human-readable plain-text form, category-aware.
fn plain_text(measure: &str, raw: &Value, selection: &UnitSystemSelection) -> Option<String> {
    match category_of(measure) {
        VariantCategory::Trend => {
            let trend = Trend::from_raw(value_as_str(raw)?);
            Some(trend.label().to_string())
        }
        VariantCategory::MoonPhase => {
            let value = value_as_f64(raw)?;
            Some(moon_phase_bucket(value).label().to_string())
        }
        VariantCategory::Timestamp => Some(render_raw(raw)),
        VariantCategory::RawString => Some(render_raw(raw)),
        _ => {
            let value = value_as_f64(raw)?;
            let family = unit_family_of(measure);
            // Beaufort plain text reads as the force name
            if family == UnitFamily::WindSpeed && selection.wind_speed == WindSpeedUnit::Beaufort {
                let force = convert(value, family, selection) as u8;
                return Some(beaufort_label(force).to_string());
            }
            let unit = unit_label_for(family, selection);
            let rendered = format(value, family, selection);
            Some(if unit.is_empty() { rendered } else { format!("{} {}", rendered, unit) })
        }
    }
}

/// Ordered output-format variants for one measurement and raw value.
pub fn variants(
    measure: &str,
    raw: &Value,
    selection: &UnitSystemSelection,
    extended_durations: bool,
) -> Vec<VariantRow> {
    variant_keys(category_of(measure), extended_durations)
        .into_iter()
        .filter_map(|key| {
            render_variant(measure, raw, key, selection).map(|sample_render| VariantRow {
                label: key.label(),
                variant_key: key.key(),
                sample_render,
            })
        })
        .collect()
}

// ============================================================================
// Station assembly
// ============================================================================

/// One module's worth of collaborator-supplied input.
#[derive(Debug, Clone)]
pub struct ModuleInput<'a> {
    pub module_id: &'a str,
    pub module_name: &'a str,
    pub module_type: ModuleType,
    pub measurements: &'a [RawMeasurement],
}

fn operation_tags(measure: &str) -> Vec<&'static str> {
    let mut tags = vec!["current"];
    if crate::resolver::rules::is_comparison_eligible(measure) {
        tags.push("comparison");
    }
    if crate::resolver::rules::is_distribution_eligible(measure) {
        tags.push("distribution");
    }
    tags
}

/// Battery and signal raw readings render through the per-module
/// hardware mapping; the AC-powered base station reads as full.
fn operational_row(
    measure: &str,
    raw: &Value,
    module_type: ModuleType,
) -> Option<Vec<VariantRow>> {
    let percent = match measure {
        "battery" => value_as_f64(raw)
            .and_then(|v| battery_percentage(v as i64, module_type))
            .or(if module_type == ModuleType::Main { Some(100) } else { None }),
        "signal" => value_as_f64(raw).and_then(|v| signal_percentage(v as i64, module_type)),
        _ => return None,
    };
    let percent = percent?;
    Some(vec![
        VariantRow {
            label: VariantKey::Raw.label(),
            variant_key: VariantKey::Raw.key(),
            sample_render: render_raw(raw),
        },
        VariantRow {
            label: VariantKey::Converted.label(),
            variant_key: VariantKey::Converted.key(),
            sample_render: percent.to_string(),
        },
        VariantRow {
            label: VariantKey::ConvertedWithUnit.label(),
            variant_key: VariantKey::ConvertedWithUnit.key(),
            sample_render: format!("{} %", percent),
        },
    ])
}

/// Build one measurement row, or `None` when nothing is renderable.
fn measurement_row(
    measure: &str,
    input: &ModuleInput<'_>,
    selection: &UnitSystemSelection,
    extended_durations: bool,
) -> Option<MeasurementRow> {
    // Synthetic placeholders render without raw data
    if measure == NONE_MEASURE || measure == AGGREGATED_MEASURE {
        return Some(MeasurementRow {
            label: label_of(measure).to_string(),
            measure_type: measure.to_string(),
            variant_rows: Vec::new(),
            unit_dimension: unit_family_of(measure).dimension_tag(),
            available_operation_tags: Vec::new(),
        });
    }

    let raw = input
        .measurements
        .iter()
        .find(|m| m.measure_type == measure)
        .map(|m| &m.measure_value)?;

    let variant_rows = match measure {
        "battery" | "signal" => operational_row(measure, raw, input.module_type)?,
        _ => variants(measure, raw, selection, extended_durations),
    };
    if variant_rows.is_empty() {
        return None;
    }

    Some(MeasurementRow {
        label: label_of(measure).to_string(),
        measure_type: measure.to_string(),
        variant_rows,
        unit_dimension: unit_family_of(measure).dimension_tag(),
        available_operation_tags: operation_tags(measure),
    })
}

/// Assemble the full station output: resolve each module, render each
/// resolved measurement, and omit modules with nothing to show.
pub fn assemble_station<H: HistoryAllowed + ?Sized>(
    modules: &[ModuleInput<'_>],
    ctx: &ResolveContext,
    selection: &UnitSystemSelection,
    history: &H,
    extended_durations: bool,
) -> Vec<ResolvedModuleMeasurements> {
    let mut station = Vec::with_capacity(modules.len());
    for input in modules {
        let resolved = resolve(input.module_type, ctx, history);
        let measurements: Vec<MeasurementRow> = resolved
            .iter()
            .filter_map(|measure| measurement_row(measure, input, selection, extended_durations))
            .collect();
        trace!(
            module = input.module_id,
            resolved = resolved.len(),
            rendered = measurements.len(),
            "assembled module"
        );
        // "Nothing to show" omits the module, it is not an error
        if measurements.is_empty() {
            continue;
        }
        station.push(ResolvedModuleMeasurements {
            module_name: input.module_name.to_string(),
            module_id: input.module_id.to_string(),
            measurements,
        });
    }
    station
}
