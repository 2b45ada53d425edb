/// Convenience result type used across Plotline.
pub type PlotlineResult<T> = Result<T, PlotlineError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PlotlineError {
    /// The data source is unreachable, malformed, or empty after cleaning.
    ///
    /// Surfaced to the user as an empty-state frame, never a crash.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Invalid user-provided catalog, layout, or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A scene index outside the catalog bounds.
    ///
    /// The navigator is bounds-checked before controls are enabled, so this
    /// indicates a programming invariant violation rather than bad input.
    #[error("scene index {index} out of range for catalog of {len}")]
    SceneOutOfRange {
        /// The offending index.
        index: usize,
        /// Catalog length at the time of the call.
        len: usize,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlotlineError {
    /// Build a [`PlotlineError::DataUnavailable`] value.
    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    /// Build a [`PlotlineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlotlineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
