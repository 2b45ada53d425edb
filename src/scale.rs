use kurbo::{Point, Rect};

use crate::data::model::Dataset;

/// Axis domain policy, fixed per session.
///
/// Both policies preserve relative point ordering; they only change point
/// density near the axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DomainPolicy {
    /// `[observed min, observed max]`.
    #[default]
    Tight,
    /// `[0, observed max]` padded by a fractional headroom above the max.
    ZeroAnchored {
        /// Fraction of the max added as padding, e.g. `0.05` for 5%.
        headroom: f64,
    },
}

/// A pure linear mapping from a numeric domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Build a scale. A degenerate domain (`min == max`) is widened by one
    /// unit so [`map`](LinearScale::map) stays finite.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if domain.1 - domain.0 <= 0.0 {
            (domain.0, domain.0 + 1.0)
        } else {
            domain
        };
        Self { domain, range }
    }

    /// The numeric input interval.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The pixel output interval. May be inverted (`start > end`).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to a pixel value.
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = (v - d0) / (d1 - d0);
        r0 + t * (r1 - r0)
    }

    /// Tick values covering the domain at 1/2/5-decade steps, at most roughly
    /// `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let step = tick_step(d1 - d0, count.max(1));
        if !step.is_finite() || step <= 0.0 {
            return vec![d0];
        }
        let start = (d0 / step).ceil() as i64;
        let end = (d1 / step + 1e-9).floor() as i64;
        (start..=end).map(|i| i as f64 * step).collect()
    }
}

fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    // Same breakpoints d3 uses: sqrt(50), sqrt(10), sqrt(2).
    let factor = if normalized >= 7.07 {
        10.0
    } else if normalized >= 3.16 {
        5.0
    } else if normalized >= 1.41 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

/// Format a tick value for an axis label.
pub(crate) fn tick_label(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// The x/y scale pair of one chart state.
///
/// Recomputed whenever the active dataset changes; never reused stale across
/// dataset swaps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scales {
    /// City MPG, left to right.
    pub x: LinearScale,
    /// Highway MPG, bottom to top (inverted pixel range).
    pub y: LinearScale,
}

impl Scales {
    /// Compute the scale pair for `dataset` inside `area`.
    ///
    /// An empty dataset falls back to a `[0, 1]` domain on both axes.
    pub fn compute(dataset: &Dataset, policy: DomainPolicy, area: Rect) -> Self {
        let x_domain = domain_for(dataset.records().iter().map(|r| r.city), policy);
        let y_domain = domain_for(dataset.records().iter().map(|r| r.highway), policy);
        Self {
            x: LinearScale::new(x_domain, (area.x0, area.x1)),
            y: LinearScale::new(y_domain, (area.y1, area.y0)),
        }
    }

    /// Project a `(city, highway)` pair into pixel space.
    pub fn project(&self, city: f64, highway: f64) -> Point {
        Point::new(self.x.map(city), self.y.map(highway))
    }
}

fn domain_for(values: impl Iterator<Item = f64>, policy: DomainPolicy) -> (f64, f64) {
    let observed = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    });
    match observed {
        None => (0.0, 1.0),
        Some((min, max)) => match policy {
            DomainPolicy::Tight => (min, max),
            DomainPolicy::ZeroAnchored { headroom } => (0.0, max * (1.0 + headroom.max(0.0))),
        },
    }
}

#[cfg(test)]
#[path = "../tests/unit/scale.rs"]
mod tests;
