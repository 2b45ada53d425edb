use std::collections::BTreeMap;

use kurbo::Point;

use crate::data::model::{GroupKey, Record};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{PlotlineError, PlotlineResult};

/// Visual category of a record under a scene's classification rule.
///
/// Categories are scene-independent tags; the per-scene [`Palette`] maps them
/// to colors.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Category {
    /// Ordinary point.
    Default,
    /// De-emphasized point, the backdrop for a highlight.
    Muted,
    /// Point singled out by the scene's rule.
    Highlighted,
    /// Point above an efficiency threshold.
    HighEfficiency,
    /// Point below an efficiency threshold.
    LowEfficiency,
}

/// A record predicate usable in classification arms, scene filters, and
/// category picks.
///
/// Predicates over fields that are `None` (aggregated or lenient records)
/// never match.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Predicate {
    /// Cylinder count equals the given value.
    CylindersEq(u32),
    /// City plus highway MPG strictly above the threshold.
    CombinedMpgAbove(f64),
    /// City plus highway MPG strictly below the threshold.
    CombinedMpgBelow(f64),
    /// Fuel type equals the given value.
    FuelTypeIs(String),
    /// Manufacturer equals the given value.
    MakeIs(String),
}

impl Predicate {
    /// Evaluate the predicate against a record.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::CylindersEq(n) => record.cylinders == Some(*n),
            Predicate::CombinedMpgAbove(threshold) => record.combined_mpg() > *threshold,
            Predicate::CombinedMpgBelow(threshold) => record.combined_mpg() < *threshold,
            Predicate::FuelTypeIs(fuel) => record.fuel_type.as_deref() == Some(fuel.as_str()),
            Predicate::MakeIs(make) => record.make == *make,
        }
    }

    /// Whether the predicate reads fields that aggregation drops.
    pub(crate) fn depends_on_dropped_fields(&self) -> bool {
        matches!(self, Predicate::CylindersEq(_) | Predicate::FuelTypeIs(_))
    }
}

/// One prioritized classification arm.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClassifyArm {
    /// Condition for this arm.
    pub when: Predicate,
    /// Category produced when the condition matches.
    pub then: Category,
}

/// A scene's classification rule: ordered arms, first match wins, fallback
/// otherwise.
///
/// Total and exclusive by construction: every record gets exactly one
/// category.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClassifyRule {
    /// Arms evaluated in priority order.
    pub arms: Vec<ClassifyArm>,
    /// Category when no arm matches.
    pub fallback: Category,
}

impl ClassifyRule {
    /// Rule assigning every record the same category.
    pub fn uniform(category: Category) -> Self {
        Self {
            arms: Vec::new(),
            fallback: category,
        }
    }

    /// Every category the rule can produce.
    pub(crate) fn categories(&self) -> Vec<Category> {
        let mut out: Vec<Category> = self.arms.iter().map(|arm| arm.then).collect();
        out.push(self.fallback);
        out
    }
}

const PALETTE_FALLBACK: Rgba8 = Rgba8::rgb(0x99, 0x99, 0x99);

/// Scene-local mapping from [`Category`] to color.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette(BTreeMap<Category, Rgba8>);

impl Palette {
    /// Empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a category color.
    pub fn with(mut self, category: Category, color: Rgba8) -> Self {
        self.0.insert(category, color);
        self
    }

    /// Color for a category, falling back to neutral gray when unmapped.
    ///
    /// Catalog validation guarantees coverage for every category a scene's
    /// rule can produce, so the fallback only shows on hand-built frames.
    pub fn color_of(&self, category: Category) -> Rgba8 {
        self.0.get(&category).copied().unwrap_or(PALETTE_FALLBACK)
    }

    /// Whether the palette maps a category.
    pub fn covers(&self, category: Category) -> bool {
        self.0.contains_key(&category)
    }
}

/// A text annotation anchored at a point in domain coordinates.
///
/// The anchor is projected through the active scales at compile time, so
/// annotations track the data across aggregation and domain-policy changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Annotation {
    /// Annotation text.
    pub text: String,
    /// Anchor in `(city, highway)` domain coordinates.
    pub anchor: Point,
}

/// One discrete visualization state in the slideshow sequence.
///
/// Descriptors are immutable after catalog construction; a scene's identity
/// is its position in the catalog.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDescriptor {
    /// Scene title.
    pub title: String,
    /// Scene subtitle; empty suppresses the subtitle text op.
    #[serde(default)]
    pub subtitle: String,
    /// Classification rule driving point colors.
    pub classify: ClassifyRule,
    /// Optional predicate restricting which records are drawn.
    #[serde(default)]
    pub filter: Option<Predicate>,
    /// Optional annotation.
    #[serde(default)]
    pub annotation: Option<Annotation>,
    /// Optional interaction hint shown with the scene.
    #[serde(default)]
    pub hint: Option<String>,
    /// Whether hover tooltips are active in this scene.
    #[serde(default)]
    pub interactive: bool,
    /// When set, the scene renders the dataset aggregated by this key.
    #[serde(default)]
    pub aggregate: Option<GroupKey>,
    /// Category-to-color mapping for this scene.
    pub palette: Palette,
}

impl SceneDescriptor {
    /// Validate descriptor invariants.
    pub fn validate(&self) -> PlotlineResult<()> {
        if self.title.trim().is_empty() {
            return Err(PlotlineError::validation("scene title must be non-empty"));
        }
        for category in self.classify.categories() {
            if !self.palette.covers(category) {
                return Err(PlotlineError::validation(format!(
                    "scene '{}' palette is missing category {category:?}",
                    self.title
                )));
            }
        }
        if let Some(annotation) = &self.annotation {
            if annotation.text.trim().is_empty() {
                return Err(PlotlineError::validation(format!(
                    "scene '{}' annotation text must be non-empty",
                    self.title
                )));
            }
        }
        if self.aggregate.is_some() {
            // Aggregated records have no cylinder/fuel fields.
            let mut predicates: Vec<&Predicate> =
                self.classify.arms.iter().map(|arm| &arm.when).collect();
            if let Some(filter) = &self.filter {
                predicates.push(filter);
            }
            if predicates.iter().any(|p| p.depends_on_dropped_fields()) {
                return Err(PlotlineError::validation(format!(
                    "scene '{}' aggregates but references fields dropped by aggregation",
                    self.title
                )));
            }
        }
        Ok(())
    }
}

/// A fixed-length ordered sequence of scene descriptors.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneCatalog {
    scenes: Vec<SceneDescriptor>,
}

impl SceneCatalog {
    /// Build a validated catalog of at least one scene.
    pub fn new(scenes: Vec<SceneDescriptor>) -> PlotlineResult<Self> {
        if scenes.is_empty() {
            return Err(PlotlineError::validation(
                "scene catalog must contain at least one scene",
            ));
        }
        for (index, scene) in scenes.iter().enumerate() {
            scene
                .validate()
                .map_err(|e| PlotlineError::validation(format!("scene {index}: {e}")))?;
        }
        Ok(Self { scenes })
    }

    /// Number of scenes; at least 1.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Always `false`: catalogs are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Shared view of the descriptors in sequence order.
    pub fn scenes(&self) -> &[SceneDescriptor] {
        &self.scenes
    }

    /// Descriptor at `index`, failing with
    /// [`PlotlineError::SceneOutOfRange`] outside `[0, len)`.
    pub fn get(&self, index: usize) -> PlotlineResult<&SceneDescriptor> {
        self.scenes
            .get(index)
            .ok_or(PlotlineError::SceneOutOfRange {
                index,
                len: self.scenes.len(),
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
