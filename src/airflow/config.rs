use serde::{Deserialize, Serialize};

/// Configuration for airflow-network synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirflowConfig {
    /// Area used for each surface's crack:
    /// - `false` (default): gross area, openings are part of the crack path.
    /// - `true`: net area, opening leakage is accounted for elsewhere.
    ///
    /// Only the area values change; traversal is identical either way.
    pub include_sub_surfaces: bool,
}

impl AirflowConfig {
    pub fn new() -> Self {
        Self {
            include_sub_surfaces: false,
        }
    }

    pub fn with_sub_surfaces(mut self, include: bool) -> Self {
        self.include_sub_surfaces = include;
        self
    }
}

impl Default for AirflowConfig {
    fn default() -> Self {
        Self::new()
    }
}
