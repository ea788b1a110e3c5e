//! Airflow-network synthesis from building topology.
//!
//! A [`model::Building`] describes zones, spaces, surfaces and openings with
//! their adjacency. [`airflow::AirflowNetworkBuilder`] walks that hierarchy,
//! classifies each surface as exterior or interior, and emits a minimal
//! multizone leakage network: shared crack elements plus per-surface links
//! scaled by relative surface area.

pub mod airflow;
pub mod io;
pub mod model;
mod name;
mod uid;

// Prelude
pub use airflow::{AirflowConfig, AirflowError, AirflowNetworkBuilder, AirflowRecord};
pub use model::Building;
pub use name::HasName;
pub use uid::UID;
