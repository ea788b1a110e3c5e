//! Airflow-network (multizone leakage) synthesis.
//!
//! Every surface facing outdoors or another space becomes a link to one of
//! two shared crack elements, `ExteriorComponent` and `InteriorComponent`.
//! Each element is sized for the largest surface of its classification and
//! each link scales it by `area / max_area`, so a handful of records describe
//! the leakage of the whole envelope.
//!
//! The core is [`AirflowNetworkBuilder`], driven over a [`crate::model::Building`]
//! by [`SurfaceNetworkDriver`].

mod aggregator;
mod builder;
mod catalog;
mod classification;
mod config;
mod diagnostics;
mod error;
mod links;
pub mod records;
mod visitor;

pub use aggregator::AreaAggregator;
pub use builder::{AirflowNetworkBuilder, BuilderState, build_airflow_network};
pub use catalog::{
    CRACK_COEFFICIENT_PER_M2, CRACK_FLOW_EXPONENT, ElementCatalog, REFERENCE_CONDITIONS_NAME,
    REFERENCE_HUMIDITY_RATIO, REFERENCE_PRESSURE_PA, REFERENCE_TEMPERATURE_C, base_coefficient,
    reference_conditions,
};
pub use classification::SurfaceClassification;
pub use config::AirflowConfig;
pub use diagnostics::{
    CollectedDiagnostics, Diagnostic, DiagnosticKind, DiagnosticLevel, Diagnostics,
    TracingDiagnostics,
};
pub use error::AirflowError;
pub use links::SurfaceLinkRecorder;
pub use records::{
    AirflowRecord, LeakageElementRecord, NetworkSummary, ReferenceConditionsRecord,
    SurfaceLinkRecord, VentilationMode, ZoneControlRecord,
};
pub use visitor::{SurfaceNetworkDriver, SurfaceNetworkVisitor, TraversalSummary};
