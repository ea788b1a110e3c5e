use super::aggregator::AreaAggregator;
use super::classification::{PerClassification, SurfaceClassification};
use super::error::AirflowError;
use super::records::SurfaceLinkRecord;

/// Collects surface links during traversal and turns them into
/// [`SurfaceLinkRecord`]s once areas are final.
///
/// Output order: all exterior links, then all interior links, each in the
/// order they were added.
#[derive(Debug, Clone, Default)]
pub struct SurfaceLinkRecorder {
    pending: PerClassification<Vec<String>>,
}

impl SurfaceLinkRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a link; the opening factor is computed in [`Self::finalize_links`].
    pub fn add_link(&mut self, classification: SurfaceClassification, surface_name: &str) {
        self.pending
            .get_mut(classification)
            .push(surface_name.to_string());
    }

    pub fn pending_count(&self) -> usize {
        SurfaceClassification::ALL
            .iter()
            .map(|&c| self.pending.get(c).len())
            .sum()
    }

    /// Computes `area(surface) / max_area(classification)` for every pending link.
    ///
    /// A zero maximum yields a factor of 0. A link whose surface has no
    /// recorded area, or whose factor falls outside [0, 1], is an
    /// [`AirflowError::ElementSynthesis`].
    pub fn finalize_links(
        &self,
        areas: &AreaAggregator,
    ) -> Result<Vec<SurfaceLinkRecord>, AirflowError> {
        let mut records = Vec::with_capacity(self.pending_count());

        for classification in SurfaceClassification::ALL {
            let max_area = areas.max_area(classification);
            let element_name = classification.element_name();

            for surface_name in self.pending.get(classification) {
                let Some(area) = areas.area(surface_name) else {
                    return Err(AirflowError::ElementSynthesis {
                        context: format!("no area recorded for linked surface '{surface_name}'"),
                    });
                };
                let opening_factor = if max_area == 0.0 {
                    0.0
                } else {
                    area / max_area
                };
                if !(0.0..=1.0).contains(&opening_factor) {
                    return Err(AirflowError::ElementSynthesis {
                        context: format!(
                            "opening factor {opening_factor} of surface '{surface_name}' is outside [0, 1]"
                        ),
                    });
                }
                records.push(SurfaceLinkRecord {
                    surface_name: surface_name.clone(),
                    element_name: element_name.clone(),
                    opening_factor,
                });
            }
        }

        Ok(records)
    }
}
