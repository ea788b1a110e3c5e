use thiserror::Error;

use super::builder::BuilderState;

/// Errors that abort an airflow-network build.
///
/// Per-surface problems (for example a surface without a name) are not
/// errors: they are reported through [`super::Diagnostics`] and the surface
/// is left out of the network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AirflowError {
    /// A zone has no name, so its ventilation-control record cannot be referenced.
    #[error("zone {uid} has no name; cannot build an airflow network")]
    MissingZoneName { uid: String },

    /// A leakage element or link record could not be synthesized consistently.
    ///
    /// This signals a bug or a corrupt model snapshot rather than a recoverable
    /// input problem.
    #[error("element synthesis failed: {context}")]
    ElementSynthesis { context: String },

    /// A finalize-dependent accessor was called before the build completed.
    #[error("'{query}' is only available after the build is finalized (state: {state:?})")]
    PrematureQuery {
        query: &'static str,
        state: BuilderState,
    },

    /// `build` was called on a builder that has already been used.
    #[error("builder already used (state: {state:?}); create a new builder per build")]
    AlreadyBuilt { state: BuilderState },
}
