use kurbo::{Point, Rect};

use crate::data::model::{Dataset, Record};
use crate::foundation::core::{Canvas, ChartLayout, Rgba8};
use crate::scale::{LinearScale, Scales, tick_label};
use crate::scene::classify::classify;
use crate::scene::model::SceneDescriptor;
use crate::session::hover::TooltipState;

/// Point mark radius in pixels.
pub const POINT_RADIUS: f64 = 5.0;

const TICK_COUNT: usize = 10;
const TITLE_RISE: f64 = 20.0;
const SUBTITLE_RISE: f64 = 6.0;
const HINT_RISE: f64 = 10.0;
const TOOLTIP_OFFSET_X: f64 = 10.0;
const TOOLTIP_OFFSET_Y: f64 = -28.0;

/// Which chart edge an axis instruction is drawn along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AxisSide {
    /// X axis along the bottom edge.
    Bottom,
    /// Y axis along the left edge.
    Left,
}

/// One labeled axis tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tick {
    /// Tick position on the axis track, in canvas pixels.
    pub at: Point,
    /// Tick label.
    pub label: String,
}

/// The role of a text instruction, for surface styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextRole {
    /// Scene title.
    Title,
    /// Scene subtitle.
    Subtitle,
    /// Data-anchored annotation.
    Annotation,
    /// Interaction hint.
    Instruction,
    /// Loading/empty-state message.
    Status,
}

/// A declarative draw instruction for the rendering surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DrawOp {
    /// An axis track with labeled ticks.
    Axis {
        /// Edge the axis runs along.
        side: AxisSide,
        /// Track start, in canvas pixels.
        start: Point,
        /// Track end, in canvas pixels.
        end: Point,
        /// Labeled ticks along the track.
        ticks: Vec<Tick>,
    },
    /// A circular point mark.
    Point {
        /// Center, in canvas pixels.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// A text run.
    Text {
        /// Baseline anchor, in canvas pixels.
        at: Point,
        /// Styling role.
        role: TextRole,
        /// Text content.
        content: String,
    },
    /// The hover tooltip.
    Tooltip {
        /// Tooltip anchor, in canvas pixels.
        at: Point,
        /// Tooltip content.
        content: String,
    },
}

/// A compiled frame: the full instruction list for one visual state.
///
/// Presenting a frame fully replaces the prior visual state on the surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Canvas the instructions target.
    pub canvas: Canvas,
    /// Draw instructions in paint order.
    pub ops: Vec<DrawOp>,
}

/// Records of `view` surviving the scene's optional filter, in frame point
/// order. Pointer events index into this sequence.
pub(crate) fn visible_records<'a>(
    view: &'a Dataset,
    scene: &'a SceneDescriptor,
) -> impl Iterator<Item = &'a Record> {
    view.records()
        .iter()
        .filter(move |record| scene.filter.as_ref().is_none_or(|p| p.matches(record)))
}

/// Compile one scene state into a flat instruction list.
///
/// A deterministic, idempotent projection: identical inputs yield identical
/// instruction lists, and no state is mutated. Actually drawing is delegated
/// to the rendering surface.
pub fn compile_frame(
    view: &Dataset,
    scene: &SceneDescriptor,
    layout: &ChartLayout,
    scales: &Scales,
    tooltip: &TooltipState,
) -> Frame {
    let area = layout.chart_area();
    let mut ops = Vec::new();

    ops.push(axis_op(AxisSide::Bottom, area, &scales.x));
    ops.push(axis_op(AxisSide::Left, area, &scales.y));

    for record in visible_records(view, scene) {
        let category = classify(&scene.classify, record);
        ops.push(DrawOp::Point {
            center: scales.project(record.city, record.highway),
            radius: POINT_RADIUS,
            color: scene.palette.color_of(category),
        });
    }

    ops.push(DrawOp::Text {
        at: Point::new(area.x0, area.y0 - TITLE_RISE),
        role: TextRole::Title,
        content: scene.title.clone(),
    });
    if !scene.subtitle.is_empty() {
        ops.push(DrawOp::Text {
            at: Point::new(area.x0, area.y0 - SUBTITLE_RISE),
            role: TextRole::Subtitle,
            content: scene.subtitle.clone(),
        });
    }
    if let Some(annotation) = &scene.annotation {
        ops.push(DrawOp::Text {
            at: scales.project(annotation.anchor.x, annotation.anchor.y),
            role: TextRole::Annotation,
            content: annotation.text.clone(),
        });
    }
    if let Some(hint) = &scene.hint {
        ops.push(DrawOp::Text {
            at: Point::new(area.x0, f64::from(layout.canvas.height) - HINT_RISE),
            role: TextRole::Instruction,
            content: hint.clone(),
        });
    }

    if tooltip.visible {
        ops.push(DrawOp::Tooltip {
            at: Point::new(
                tooltip.position.x + TOOLTIP_OFFSET_X,
                tooltip.position.y + TOOLTIP_OFFSET_Y,
            ),
            content: tooltip.content.clone(),
        });
    }

    Frame {
        canvas: layout.canvas,
        ops,
    }
}

/// A frame carrying only a centered status message, used for the loading and
/// data-unavailable states.
pub fn status_frame(canvas: Canvas, message: impl Into<String>) -> Frame {
    Frame {
        canvas,
        ops: vec![DrawOp::Text {
            at: Point::new(
                f64::from(canvas.width) / 2.0,
                f64::from(canvas.height) / 2.0,
            ),
            role: TextRole::Status,
            content: message.into(),
        }],
    }
}

fn axis_op(side: AxisSide, area: Rect, scale: &LinearScale) -> DrawOp {
    let (start, end) = match side {
        AxisSide::Bottom => (Point::new(area.x0, area.y1), Point::new(area.x1, area.y1)),
        AxisSide::Left => (Point::new(area.x0, area.y1), Point::new(area.x0, area.y0)),
    };
    let ticks = scale
        .ticks(TICK_COUNT)
        .into_iter()
        .map(|v| {
            let px = scale.map(v);
            let at = match side {
                AxisSide::Bottom => Point::new(px, area.y1),
                AxisSide::Left => Point::new(area.x0, px),
            };
            Tick {
                at,
                label: tick_label(v),
            }
        })
        .collect();
    DrawOp::Axis {
        side,
        start,
        end,
        ticks,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
