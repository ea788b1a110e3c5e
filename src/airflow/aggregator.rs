use std::collections::HashMap;

use super::classification::{PerClassification, SurfaceClassification};

/// Running per-classification maximum area plus each surface's own area.
///
/// Both maps only grow while surfaces are recorded; the maxima are final
/// once traversal has completed and not before.
#[derive(Debug, Clone, Default)]
pub struct AreaAggregator {
    max_area: PerClassification<Option<f64>>,
    surface_area: HashMap<String, f64>,
    first_seen: Vec<SurfaceClassification>,
}

impl AreaAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `area` for `surface_name` (last write wins) and raises the
    /// classification maximum if `area` exceeds it.
    ///
    /// The first area recorded for a classification always becomes its maximum.
    pub fn record_area(
        &mut self,
        classification: SurfaceClassification,
        surface_name: &str,
        area: f64,
    ) {
        self.surface_area.insert(surface_name.to_string(), area);

        let max = self.max_area.get_mut(classification);
        match *max {
            None => {
                *max = Some(area);
                self.first_seen.push(classification);
            }
            Some(current) if area > current => *max = Some(area),
            Some(_) => {}
        }
    }

    /// Largest area recorded for `classification`, 0.0 if none was recorded.
    pub fn max_area(&self, classification: SurfaceClassification) -> f64 {
        self.max_area.get(classification).unwrap_or(0.0)
    }

    /// Area recorded for `surface_name`.
    pub fn area(&self, surface_name: &str) -> Option<f64> {
        self.surface_area.get(surface_name).copied()
    }

    pub fn is_observed(&self, classification: SurfaceClassification) -> bool {
        self.max_area.get(classification).is_some()
    }

    /// Classifications with at least one recorded surface, in first-seen order.
    pub fn observed(&self) -> &[SurfaceClassification] {
        &self.first_seen
    }

    pub fn surface_count(&self) -> usize {
        self.surface_area.len()
    }
}
