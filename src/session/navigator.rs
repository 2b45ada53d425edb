use crate::foundation::error::{PlotlineError, PlotlineResult};

/// Behavior at the ends of the scene sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BoundaryPolicy {
    /// Advancing past the last scene wraps to the first, and vice versa.
    #[default]
    Wrap,
    /// Advancing at the last scene (or retreating at the first) is a no-op,
    /// and the corresponding control reports disabled.
    Clamp,
}

/// Which navigation affordances are currently enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ControlState {
    /// Whether "advance" may be triggered.
    pub advance_enabled: bool,
    /// Whether "retreat" may be triggered.
    pub retreat_enabled: bool,
}

impl ControlState {
    /// Both controls disabled, e.g. while the dataset is still loading.
    pub(crate) fn inert() -> Self {
        Self {
            advance_enabled: false,
            retreat_enabled: false,
        }
    }
}

/// The scene position state machine: one state per scene index, transitions
/// `advance` and `retreat`, boundary behavior per [`BoundaryPolicy`].
#[derive(Clone, Debug)]
pub struct Navigator {
    len: usize,
    current: usize,
    policy: BoundaryPolicy,
}

impl Navigator {
    /// Create a navigator over `len >= 1` scenes, starting at index 0.
    pub fn new(len: usize, policy: BoundaryPolicy) -> PlotlineResult<Self> {
        if len == 0 {
            return Err(PlotlineError::validation(
                "navigator requires at least one scene",
            ));
        }
        Ok(Self {
            len,
            current: 0,
            policy,
        })
    }

    /// Current scene index, always in `[0, len)`.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: navigators cover at least one scene.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The configured boundary policy.
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Move to the next scene. Returns whether the index changed.
    pub fn advance(&mut self) -> bool {
        let next = match self.policy {
            BoundaryPolicy::Wrap => (self.current + 1) % self.len,
            BoundaryPolicy::Clamp => (self.current + 1).min(self.len - 1),
        };
        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Move to the previous scene. Returns whether the index changed.
    pub fn retreat(&mut self) -> bool {
        let next = match self.policy {
            BoundaryPolicy::Wrap => (self.current + self.len - 1) % self.len,
            BoundaryPolicy::Clamp => self.current.saturating_sub(1),
        };
        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Which controls are enabled at the current index.
    pub fn controls(&self) -> ControlState {
        match self.policy {
            BoundaryPolicy::Wrap => ControlState {
                advance_enabled: self.len > 1,
                retreat_enabled: self.len > 1,
            },
            BoundaryPolicy::Clamp => ControlState {
                advance_enabled: self.current + 1 < self.len,
                retreat_enabled: self.current > 0,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/navigator.rs"]
mod tests;
