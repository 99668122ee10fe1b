//! Measurement applicability resolution.
//!
//! A pure function of (module type, capability profile, mode flags,
//! reference values): no state machine, no I/O. The per-module rule
//! tables live in `rules`; this module runs the pipeline around them:
//! ordered table walk, de-duplication, history/comparison/distribution
//! filtering and the `noned` placeholder.

pub mod mode;
pub mod profile;
pub mod rules;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::types::{MeasureType, ModuleType};
use mode::ResolveContext;
use rules::{is_comparison_eligible, is_distribution_eligible, rules_for, NONE_MEASURE};

/// History-retention collaborator: decides which measurement types are
/// kept in daily/long-term time series.
pub trait HistoryAllowed {
    fn allows(&self, measure_type: &str) -> bool;
}

/// Adapter so plain closures work as history predicates.
pub struct HistoryFn<F: Fn(&str) -> bool>(pub F);

impl<F: Fn(&str) -> bool> HistoryAllowed for HistoryFn<F> {
    fn allows(&self, measure_type: &str) -> bool {
        (self.0)(measure_type)
    }
}

/// History predicate that admits everything; used when no history
/// collaborator is involved.
pub struct AllowAll;

impl HistoryAllowed for AllowAll {
    fn allows(&self, _measure_type: &str) -> bool {
        true
    }
}

/// Resolve the ordered measurement-type list for one module.
///
/// The result preserves rule-table order exactly, drops duplicates
/// (keeping the first occurrence — overlapping capability flags must not
/// produce the same measurement twice) and applies the mode's
/// restriction filters in a fixed sequence. An empty result is an
/// ordinary "nothing to show" outcome, never an error.
pub fn resolve<H: HistoryAllowed + ?Sized>(
    module_type: ModuleType,
    ctx: &ResolveContext,
    history: &H,
) -> Vec<MeasureType> {
    let table = rules_for(module_type);
    let mut resolved: Vec<MeasureType> = Vec::with_capacity(table.len());
    let mut seen: FxHashSet<MeasureType> = FxHashSet::default();

    for rule in table {
        if (rule.applies)(ctx) && seen.insert(rule.measure) {
            resolved.push(rule.measure);
        }
    }

    if ctx.mode.daily || ctx.mode.historical {
        resolved.retain(|measure| {
            let kept = history.allows(measure);
            if !kept {
                debug!(measure, ?module_type, "dropped by history filter");
            }
            kept
        });
    }
    if ctx.mode.comparison {
        resolved.retain(|measure| is_comparison_eligible(measure));
    }
    if ctx.mode.distribution {
        resolved.retain(|measure| is_distribution_eligible(measure));
    }

    if ctx.mode.noned {
        resolved.insert(0, NONE_MEASURE);
    }

    if resolved.is_empty() {
        debug!(?module_type, "module resolved to no measurements");
    }
    resolved
}

/// Convenience wrapper for callers without a history collaborator.
pub fn resolve_current(module_type: ModuleType, ctx: &ResolveContext) -> Vec<MeasureType> {
    resolve(module_type, ctx, &AllowAll)
}
