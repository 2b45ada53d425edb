use kurbo::Point;

use crate::foundation::core::Rgba8;
use crate::foundation::error::PlotlineResult;
use crate::scene::model::{
    Annotation, Category, ClassifyArm, ClassifyRule, Palette, Predicate, SceneCatalog,
    SceneDescriptor,
};

/// Builder for [`SceneCatalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    scenes: Vec<SceneDescriptor>,
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scene to the sequence.
    pub fn scene(mut self, scene: SceneDescriptor) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Build and validate the final catalog.
    pub fn build(self) -> PlotlineResult<SceneCatalog> {
        SceneCatalog::new(self.scenes)
    }
}

const TEAL: Rgba8 = Rgba8::rgb(0x69, 0xb3, 0xa2);
const GREEN: Rgba8 = Rgba8::rgb(0x00, 0x80, 0x00);
const ORANGE: Rgba8 = Rgba8::rgb(0xff, 0xa5, 0x00);
const LIGHT_GRAY: Rgba8 = Rgba8::rgb(0xcc, 0xcc, 0xcc);
const GRAY: Rgba8 = Rgba8::rgb(0x99, 0x99, 0x99);

/// The canonical three-scene fuel-economy story.
///
/// Scene 0 shows the whole cleaned dataset, scene 1 highlights 4-cylinder
/// engines, and scene 2 highlights high-efficiency vehicles with hover
/// tooltips enabled.
pub fn fuel_economy_story() -> PlotlineResult<SceneCatalog> {
    CatalogBuilder::new()
        .scene(SceneDescriptor {
            title: "MPG Comparison".to_string(),
            subtitle: "City vs highway MPG for every 2017 model".to_string(),
            classify: ClassifyRule::uniform(Category::Default),
            filter: None,
            annotation: Some(Annotation {
                text: "Fuel Efficiency Spread: general trend of cars' MPG".to_string(),
                anchor: Point::new(20.0, 30.0),
            }),
            hint: None,
            interactive: false,
            aggregate: None,
            palette: Palette::new().with(Category::Default, TEAL),
        })
        .scene(SceneDescriptor {
            title: "4-Cylinder Cars Highlighted".to_string(),
            subtitle: "Where the most common engine size lands".to_string(),
            classify: ClassifyRule {
                arms: vec![ClassifyArm {
                    when: Predicate::CylindersEq(4),
                    then: Category::Highlighted,
                }],
                fallback: Category::Muted,
            },
            filter: None,
            annotation: Some(Annotation {
                text: "Common Efficient Cars: green marks 4-cylinder engines".to_string(),
                anchor: Point::new(25.0, 35.0),
            }),
            hint: None,
            interactive: false,
            aggregate: None,
            palette: Palette::new()
                .with(Category::Highlighted, GREEN)
                .with(Category::Muted, LIGHT_GRAY),
        })
        .scene(SceneDescriptor {
            title: "Highest Efficiency Cars".to_string(),
            subtitle: "Vehicles with a combined MPG above 70".to_string(),
            classify: ClassifyRule {
                arms: vec![ClassifyArm {
                    when: Predicate::CombinedMpgAbove(70.0),
                    then: Category::HighEfficiency,
                }],
                fallback: Category::Muted,
            },
            filter: None,
            annotation: Some(Annotation {
                text: "Top Performers: orange marks high efficiency vehicles".to_string(),
                anchor: Point::new(40.0, 50.0),
            }),
            hint: Some("Hover over a point to see vehicle details.".to_string()),
            interactive: true,
            aggregate: None,
            palette: Palette::new()
                .with(Category::HighEfficiency, ORANGE)
                .with(Category::Muted, GRAY),
        })
        .build()
}
