//! Traversal of the zone → space → surface → sub-surface graph.
//!
//! [`SurfaceNetworkDriver`] walks a [`Building`] and presents every zone and
//! every airflow-relevant surface to a [`SurfaceNetworkVisitor`]:
//! - surfaces facing outdoors, and their outdoor sub-surfaces;
//! - interior surface pairs, each unordered pair exactly once, from the side
//!   encountered first, together with their paired sub-surfaces.
//!
//! Ground-coupled and adiabatic surfaces are not presented.

use std::collections::HashSet;

use super::diagnostics::{DiagnosticKind, Diagnostics};
use super::error::AirflowError;
use crate::UID;
use crate::model::Building;
use crate::model::index::{SubSurfaceRef, SurfaceIndex, SurfaceRef};
use crate::model::surface::{OutsideBoundary, SubSurfaceBoundary};
use crate::model::zone::Zone;

/// Receiver of traversal events.
///
/// Returning an error aborts the traversal; no further callbacks are made.
pub trait SurfaceNetworkVisitor {
    /// Called once per zone, before any of its surfaces.
    fn visit_zone(&mut self, zone: &Zone) -> Result<(), AirflowError>;

    fn link_exterior_surface(&mut self, surface: SurfaceRef<'_>) -> Result<(), AirflowError>;

    /// `surface` is the side the driver encountered first.
    fn link_interior_surface(
        &mut self,
        surface: SurfaceRef<'_>,
        adjacent: SurfaceRef<'_>,
    ) -> Result<(), AirflowError>;

    fn link_exterior_sub_surface(
        &mut self,
        _sub_surface: SubSurfaceRef<'_>,
    ) -> Result<(), AirflowError> {
        Ok(())
    }

    fn link_interior_sub_surface(
        &mut self,
        _sub_surface: SubSurfaceRef<'_>,
        _adjacent: SubSurfaceRef<'_>,
    ) -> Result<(), AirflowError> {
        Ok(())
    }
}

/// Counts of the events issued during one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalSummary {
    pub zones: usize,
    pub exterior_surfaces: usize,
    pub interior_pairs: usize,
    pub exterior_sub_surfaces: usize,
    pub interior_sub_surface_pairs: usize,
    /// Interior surfaces or sub-surfaces whose adjacent side could not be resolved.
    pub unresolved: usize,
}

pub struct SurfaceNetworkDriver<'d> {
    diagnostics: &'d dyn Diagnostics,
}

impl<'d> SurfaceNetworkDriver<'d> {
    pub fn new(diagnostics: &'d dyn Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Walks `building` in zone, space, surface insertion order.
    pub fn traverse<V: SurfaceNetworkVisitor + ?Sized>(
        &self,
        building: &Building,
        visitor: &mut V,
    ) -> Result<TraversalSummary, AirflowError> {
        let index = SurfaceIndex::new(building);
        let mut summary = TraversalSummary::default();
        let mut seen_pairs: HashSet<(UID, UID)> = HashSet::new();
        let mut seen_sub_pairs: HashSet<(UID, UID)> = HashSet::new();

        for zone in building.zones() {
            visitor.visit_zone(zone)?;
            summary.zones += 1;

            for space in zone.spaces() {
                for surface in space.surfaces() {
                    let this = SurfaceRef {
                        zone,
                        space,
                        surface,
                    };

                    match &surface.boundary {
                        OutsideBoundary::Outdoors => {
                            visitor.link_exterior_surface(this)?;
                            summary.exterior_surfaces += 1;

                            for sub_surface in surface.sub_surfaces() {
                                if sub_surface.boundary != SubSurfaceBoundary::Outdoors {
                                    continue;
                                }
                                visitor.link_exterior_sub_surface(SubSurfaceRef {
                                    zone,
                                    space,
                                    surface,
                                    sub_surface,
                                })?;
                                summary.exterior_sub_surfaces += 1;
                            }
                        }
                        OutsideBoundary::Surface(adjacent_uid) => {
                            let adjacent = index
                                .surface(adjacent_uid)
                                .filter(|_| adjacent_uid != &surface.uid);
                            let Some(adjacent) = adjacent else {
                                self.diagnostics.warn(
                                    DiagnosticKind::UnresolvedAdjacency,
                                    surface.uid.as_str(),
                                    format!(
                                        "Surface '{}' references adjacent surface '{}' which cannot be resolved, will not be present in airflow network.",
                                        surface.name, adjacent_uid
                                    ),
                                );
                                summary.unresolved += 1;
                                continue;
                            };
                            if !seen_pairs.insert(UID::pair_key(&surface.uid, adjacent_uid)) {
                                continue;
                            }
                            visitor.link_interior_surface(this, adjacent)?;
                            summary.interior_pairs += 1;

                            for sub_surface in surface.sub_surfaces() {
                                let SubSurfaceBoundary::SubSurface(adjacent_sub_uid) =
                                    &sub_surface.boundary
                                else {
                                    continue;
                                };
                                let Some(adjacent_sub) = index.sub_surface(adjacent_sub_uid) else {
                                    self.diagnostics.warn(
                                        DiagnosticKind::UnresolvedAdjacency,
                                        sub_surface.uid.as_str(),
                                        format!(
                                            "Sub-surface '{}' references adjacent sub-surface '{}' which cannot be resolved.",
                                            sub_surface.name, adjacent_sub_uid
                                        ),
                                    );
                                    summary.unresolved += 1;
                                    continue;
                                };
                                if !seen_sub_pairs
                                    .insert(UID::pair_key(&sub_surface.uid, adjacent_sub_uid))
                                {
                                    continue;
                                }
                                visitor.link_interior_sub_surface(
                                    SubSurfaceRef {
                                        zone,
                                        space,
                                        surface,
                                        sub_surface,
                                    },
                                    adjacent_sub,
                                )?;
                                summary.interior_sub_surface_pairs += 1;
                            }
                        }
                        OutsideBoundary::Ground | OutsideBoundary::Adiabatic => {}
                    }
                }
            }
        }

        Ok(summary)
    }
}
