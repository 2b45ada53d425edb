use std::collections::{HashMap, VecDeque};

use kurbo::Point;

use crate::data::model::{Dataset, GroupKey};
use crate::foundation::core::ChartLayout;
use crate::foundation::error::PlotlineResult;
use crate::render::frame::{Frame, compile_frame, status_frame, visible_records};
use crate::render::surface::RenderSurface;
use crate::scale::{DomainPolicy, Scales};
use crate::scene::model::{Predicate, SceneCatalog, SceneDescriptor};
use crate::session::hover::{HoverTracker, tooltip_content};
use crate::session::navigator::{BoundaryPolicy, ControlState, Navigator};

/// An external event feeding the session queue.
///
/// Three sources exist: data-load completion, navigation-control activation,
/// and pointer events from the rendering surface. Events are processed
/// strictly in arrival order, each to completion before the next.
#[derive(Debug)]
pub enum Event {
    /// The dataset load resolved (the engine's one asynchronous boundary).
    DataLoaded(PlotlineResult<Dataset>),
    /// The "advance" control was activated.
    Advance,
    /// The "retreat" control was activated.
    Retreat,
    /// A category selection rebuilding the filtered dataset for the current
    /// scene only; `None` clears the selection.
    SelectCategory(Option<Predicate>),
    /// The pointer entered a point mark. `point` indexes the visible points
    /// of the current frame, in frame order.
    PointerEnter {
        /// Visible-point index.
        point: usize,
        /// Pointer position in canvas pixels.
        at: Point,
    },
    /// The pointer moved while over a point mark.
    PointerMove {
        /// Pointer position in canvas pixels.
        at: Point,
    },
    /// The pointer left the point mark.
    PointerLeave,
}

/// Session configuration, fixed per deployment.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionOpts {
    /// Boundary behavior of the navigator.
    pub boundary: BoundaryPolicy,
    /// Axis domain policy.
    pub domain: DomainPolicy,
}

/// Counters returned by [`SlideshowSession::pump`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PumpStats {
    /// Events taken off the queue.
    pub events_processed: u64,
    /// Frames presented to the surface.
    pub frames_presented: u64,
}

#[derive(Clone, Debug)]
struct ReadyState {
    base: Dataset,
    aggregated: HashMap<GroupKey, Dataset>,
    pick: Option<Predicate>,
    view: Dataset,
    scales: Scales,
}

impl ReadyState {
    fn new(
        base: Dataset,
        scene: &SceneDescriptor,
        domain: DomainPolicy,
        layout: &ChartLayout,
    ) -> Self {
        let mut state = Self {
            base,
            aggregated: HashMap::new(),
            pick: None,
            view: Dataset::default(),
            scales: Scales::compute(&Dataset::default(), domain, layout.chart_area()),
        };
        state.refresh(scene, domain, layout);
        state
    }

    /// Rebuild the active dataset view (aggregation, then category pick) and
    /// recompute the scales from it. Scene filters stay a render-level
    /// predicate and do not shift the axis domains.
    fn refresh(&mut self, scene: &SceneDescriptor, domain: DomainPolicy, layout: &ChartLayout) {
        let scoped = match scene.aggregate {
            Some(key) => self
                .aggregated
                .entry(key)
                .or_insert_with(|| self.base.aggregate_by(key))
                .clone(),
            None => self.base.clone(),
        };
        let view = match &self.pick {
            Some(pick) => scoped.filtered(|r| pick.matches(r)),
            None => scoped,
        };
        self.scales = Scales::compute(&view, domain, layout.chart_area());
        self.view = view;
    }
}

#[derive(Clone, Debug)]
enum Phase {
    Loading,
    Ready(ReadyState),
    Unavailable(String),
}

/// The slideshow state machine.
///
/// Owns every piece of mutable state: navigator position, lifecycle phase,
/// the cleaned dataset with its per-key aggregation cache, the active
/// category pick, the current view and scales, and the hover tracker. All
/// mutation happens through the event queue on one logical thread;
/// navigation and pointer events arriving before the dataset resolves are
/// ignored and the controls report disabled.
pub struct SlideshowSession {
    catalog: SceneCatalog,
    layout: ChartLayout,
    opts: SessionOpts,
    nav: Navigator,
    hover: HoverTracker,
    queue: VecDeque<Event>,
    phase: Phase,
}

impl SlideshowSession {
    /// Create a session in the `Loading` phase, positioned at scene 0.
    pub fn new(
        catalog: SceneCatalog,
        layout: ChartLayout,
        opts: SessionOpts,
    ) -> PlotlineResult<Self> {
        let nav = Navigator::new(catalog.len(), opts.boundary)?;
        Ok(Self {
            catalog,
            layout,
            opts,
            nav,
            hover: HoverTracker::default(),
            queue: VecDeque::new(),
            phase: Phase::Loading,
        })
    }

    /// Enqueue an event. Nothing is processed until [`pump`] runs.
    ///
    /// [`pump`]: SlideshowSession::pump
    pub fn submit(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Drain the queue in arrival order, presenting a frame to `surface`
    /// after every event that changed the visual state.
    #[tracing::instrument(skip(self, surface))]
    pub fn pump(&mut self, surface: &mut dyn RenderSurface) -> PlotlineResult<PumpStats> {
        let mut stats = PumpStats::default();
        while let Some(event) = self.queue.pop_front() {
            stats.events_processed += 1;
            if self.apply(event)? {
                surface.present(&self.current_frame()?)?;
                stats.frames_presented += 1;
            }
        }
        Ok(stats)
    }

    /// Current scene index.
    pub fn scene_index(&self) -> usize {
        self.nav.current()
    }

    /// The scene catalog.
    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    /// Whether the dataset has loaded successfully.
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    /// Navigation control state; inert until the dataset resolves.
    pub fn controls(&self) -> ControlState {
        match self.phase {
            Phase::Ready(_) => self.nav.controls(),
            Phase::Loading | Phase::Unavailable(_) => ControlState::inert(),
        }
    }

    /// Compile the current visual state without mutating anything.
    pub fn current_frame(&self) -> PlotlineResult<Frame> {
        match &self.phase {
            Phase::Loading => Ok(status_frame(self.layout.canvas, "loading dataset...")),
            Phase::Unavailable(message) => Ok(status_frame(self.layout.canvas, message.clone())),
            Phase::Ready(state) => {
                let scene = self.catalog.get(self.nav.current())?;
                Ok(compile_frame(
                    &state.view,
                    scene,
                    &self.layout,
                    &state.scales,
                    self.hover.tooltip(),
                ))
            }
        }
    }

    fn apply(&mut self, event: Event) -> PlotlineResult<bool> {
        match event {
            Event::DataLoaded(result) => self.on_data_loaded(result),
            Event::Advance => self.on_navigate(true),
            Event::Retreat => self.on_navigate(false),
            Event::SelectCategory(pick) => self.on_pick(pick),
            Event::PointerEnter { point, at } => self.on_pointer_enter(point, at),
            Event::PointerMove { at } => Ok(self.on_pointer_move(at)),
            Event::PointerLeave => Ok(self.on_pointer_leave()),
        }
    }

    fn on_data_loaded(&mut self, result: PlotlineResult<Dataset>) -> PlotlineResult<bool> {
        self.hover.reset();
        match result {
            Ok(base) => {
                let scene = self.catalog.get(self.nav.current())?.clone();
                self.phase = Phase::Ready(ReadyState::new(
                    base,
                    &scene,
                    self.opts.domain,
                    &self.layout,
                ));
            }
            Err(err) => {
                tracing::warn!(error = %err, "dataset load failed, entering empty state");
                self.phase = Phase::Unavailable(err.to_string());
            }
        }
        Ok(true)
    }

    fn on_navigate(&mut self, forward: bool) -> PlotlineResult<bool> {
        if !self.is_ready() {
            tracing::debug!(forward, "navigation ignored before dataset is ready");
            return Ok(false);
        }
        let changed = if forward {
            self.nav.advance()
        } else {
            self.nav.retreat()
        };
        if !changed {
            return Ok(false);
        }
        self.hover.reset();
        let scene = self.catalog.get(self.nav.current())?.clone();
        if let Phase::Ready(state) = &mut self.phase {
            state.pick = None;
            state.refresh(&scene, self.opts.domain, &self.layout);
        }
        Ok(true)
    }

    fn on_pick(&mut self, pick: Option<Predicate>) -> PlotlineResult<bool> {
        if !self.is_ready() {
            tracing::debug!("category selection ignored before dataset is ready");
            return Ok(false);
        }
        let scene = self.catalog.get(self.nav.current())?.clone();
        if let Phase::Ready(state) = &mut self.phase {
            state.pick = pick;
            state.refresh(&scene, self.opts.domain, &self.layout);
        }
        self.hover.reset();
        Ok(true)
    }

    fn on_pointer_enter(&mut self, point: usize, at: Point) -> PlotlineResult<bool> {
        let Phase::Ready(state) = &self.phase else {
            return Ok(false);
        };
        let scene = self.catalog.get(self.nav.current())?;
        if !scene.interactive {
            return Ok(false);
        }
        let Some(record) = visible_records(&state.view, scene).nth(point) else {
            tracing::debug!(point, "pointer event for a stale point index ignored");
            return Ok(false);
        };
        let content = tooltip_content(record);
        self.hover.pointer_enter(content, at);
        Ok(true)
    }

    fn on_pointer_move(&mut self, at: Point) -> bool {
        if !self.hover.is_hovering() {
            return false;
        }
        self.hover.pointer_move(at);
        true
    }

    fn on_pointer_leave(&mut self) -> bool {
        if !self.hover.is_hovering() {
            return false;
        }
        self.hover.pointer_leave();
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/slideshow.rs"]
mod tests;
