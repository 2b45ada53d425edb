use crate::data::model::Record;
use crate::scene::model::{Category, ClassifyRule};

/// Classify a record under a scene's rule.
///
/// Pure function of the rule and the record, evaluated fresh per compile —
/// the same record can classify differently per scene, so results are never
/// cached across scene changes. Arms are tried in priority order; the first
/// match wins, and the fallback guarantees exactly one category.
pub fn classify(rule: &ClassifyRule, record: &Record) -> Category {
    for arm in &rule.arms {
        if arm.when.matches(record) {
            return arm.then;
        }
    }
    rule.fallback
}

#[cfg(test)]
#[path = "../../tests/unit/scene/classify.rs"]
mod tests;
