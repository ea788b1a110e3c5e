use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the envelope a surface's far side lies on.
///
/// Selects both the shared leakage element and the area-aggregation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceClassification {
    /// Far side is outdoors.
    Exterior,
    /// Far side is another space.
    Interior,
}

impl SurfaceClassification {
    pub const ALL: [SurfaceClassification; 2] = [Self::Exterior, Self::Interior];

    /// Slot in per-classification tables.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Exterior => 0,
            Self::Interior => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exterior => "Exterior",
            Self::Interior => "Interior",
        }
    }

    /// Name of the shared crack element for this classification.
    pub fn element_name(self) -> String {
        format!("{}Component", self.as_str())
    }
}

impl fmt::Display for SurfaceClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-size table holding one value per [`SurfaceClassification`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct PerClassification<T>([T; 2]);

impl<T> PerClassification<T> {
    pub(crate) fn get(&self, c: SurfaceClassification) -> &T {
        &self.0[c.index()]
    }

    pub(crate) fn get_mut(&mut self, c: SurfaceClassification) -> &mut T {
        &mut self.0[c.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_names() {
        assert_eq!(
            SurfaceClassification::Exterior.element_name(),
            "ExteriorComponent"
        );
        assert_eq!(
            SurfaceClassification::Interior.element_name(),
            "InteriorComponent"
        );
    }

    #[test]
    fn test_indices_are_distinct() {
        let idx: Vec<usize> = SurfaceClassification::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn test_table_slots_independent() {
        let mut table: PerClassification<f64> = PerClassification::default();
        *table.get_mut(SurfaceClassification::Interior) = 3.0;
        assert_eq!(*table.get(SurfaceClassification::Exterior), 0.0);
        assert_eq!(*table.get(SurfaceClassification::Interior), 3.0);
    }
}
