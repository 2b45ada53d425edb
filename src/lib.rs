//! Plotline is a narrative data-visualization slideshow engine.
//!
//! It loads a tabular fuel-economy dataset, derives a cleaned in-memory
//! dataset, and drives an ordered sequence of chart scenes through an
//! explicit event queue, compiling each visual state into a declarative
//! instruction list for an external rendering surface.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`load_dataset`] fetches raw records through a
//!    [`TableSource`], coerces and cleans them into a [`Dataset`]
//! 2. **Catalog**: a [`SceneCatalog`] fixes the ordered scene sequence
//!    (see [`fuel_economy_story`] or [`CatalogBuilder`])
//! 3. **Drive**: a [`SlideshowSession`] consumes [`Event`]s — navigation,
//!    category selection, pointer hover — strictly in arrival order
//! 4. **Compile**: each state change is projected into a [`Frame`] of
//!    [`DrawOp`]s and presented to a [`RenderSurface`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: classification and frame compilation are
//!   pure and stable for a given input.
//! - **No IO in the core**: external IO lives behind [`TableSource`] and
//!   [`RenderSurface`]; the session itself never touches the filesystem.
//! - **Single-threaded**: one logical thread, run-to-completion event
//!   processing, no locks.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod data;
mod foundation;
mod render;
mod scale;
mod scene;
mod session;

pub use data::loader::{FieldMap, LoaderOpts, Strictness, load_dataset};
pub use data::model::{Dataset, GroupKey, Record};
pub use data::source::{CsvFileSource, InMemorySource, RawTable, TableSource};
pub use foundation::core::{Canvas, ChartLayout, Margins, Point, Rect, Rgba8};
pub use foundation::error::{PlotlineError, PlotlineResult};
pub use render::frame::{
    AxisSide, DrawOp, Frame, POINT_RADIUS, TextRole, Tick, compile_frame, status_frame,
};
pub use render::surface::{InMemorySurface, JsonDirSurface, RenderSurface};
pub use scale::{DomainPolicy, LinearScale, Scales};
pub use scene::classify::classify;
pub use scene::model::{
    Annotation, Category, ClassifyArm, ClassifyRule, Palette, Predicate, SceneCatalog,
    SceneDescriptor,
};
pub use scene::story::{CatalogBuilder, fuel_economy_story};
pub use session::hover::{HoverTracker, TooltipState, tooltip_content};
pub use session::navigator::{BoundaryPolicy, ControlState, Navigator};
pub use session::slideshow::{Event, PumpStats, SessionOpts, SlideshowSession};
