//! Two-phase airflow-network synthesis.
//!
//! Phase one accumulates areas and pending links while the driver walks the
//! building. Phase two runs once traversal has returned: opening factors need
//! the final per-classification maximum, so nothing is finalized earlier.

use super::aggregator::AreaAggregator;
use super::catalog::ElementCatalog;
use super::classification::SurfaceClassification;
use super::config::AirflowConfig;
use super::diagnostics::{DiagnosticKind, Diagnostics, TracingDiagnostics};
use super::error::AirflowError;
use super::links::SurfaceLinkRecorder;
use super::records::{AirflowRecord, ZoneControlRecord};
use super::visitor::{SurfaceNetworkDriver, SurfaceNetworkVisitor, TraversalSummary};
use crate::HasName;
use crate::model::Building;
use crate::model::index::SurfaceRef;
use crate::model::surface::Surface;
use crate::model::zone::Zone;

/// Lifecycle of an [`AirflowNetworkBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Idle,
    Traversing,
    Finalized,
}

/// Accumulates network state during traversal.
struct NetworkVisitor<'a> {
    config: AirflowConfig,
    diagnostics: &'a dyn Diagnostics,
    areas: AreaAggregator,
    links: SurfaceLinkRecorder,
    zone_controls: Vec<ZoneControlRecord>,
}

impl<'a> NetworkVisitor<'a> {
    fn new(config: AirflowConfig, diagnostics: &'a dyn Diagnostics) -> Self {
        Self {
            config,
            diagnostics,
            areas: AreaAggregator::new(),
            links: SurfaceLinkRecorder::new(),
            zone_controls: Vec::new(),
        }
    }

    fn link_surface(
        &mut self,
        classification: SurfaceClassification,
        surface: &Surface,
    ) -> Result<(), AirflowError> {
        if !surface.has_name() {
            self.diagnostics.warn(
                DiagnosticKind::MissingName,
                surface.uid.as_str(),
                format!(
                    "Surface '{}' has no name, will not be present in airflow network.",
                    surface.uid
                ),
            );
            return Ok(());
        }

        if self.areas.area(&surface.name).is_some() {
            self.diagnostics.warn(
                DiagnosticKind::DuplicateName,
                surface.uid.as_str(),
                format!(
                    "Surface name '{}' is already linked, surface {} will not be present in airflow network.",
                    surface.name, surface.uid
                ),
            );
            return Ok(());
        }

        let area = if self.config.include_sub_surfaces {
            surface.net_area()
        } else {
            surface.gross_area
        };
        if !area.is_finite() || area < 0.0 {
            return Err(AirflowError::ElementSynthesis {
                context: format!("surface '{}' has invalid area {}", surface.name, area),
            });
        }

        self.areas.record_area(classification, &surface.name, area);
        self.links.add_link(classification, &surface.name);
        Ok(())
    }
}

impl SurfaceNetworkVisitor for NetworkVisitor<'_> {
    fn visit_zone(&mut self, zone: &Zone) -> Result<(), AirflowError> {
        if !zone.has_name() {
            return Err(AirflowError::MissingZoneName {
                uid: zone.uid.to_string(),
            });
        }
        self.zone_controls.push(ZoneControlRecord::no_vent(&zone.name));
        Ok(())
    }

    fn link_exterior_surface(&mut self, surface: SurfaceRef<'_>) -> Result<(), AirflowError> {
        self.link_surface(SurfaceClassification::Exterior, surface.surface)
    }

    fn link_interior_surface(
        &mut self,
        surface: SurfaceRef<'_>,
        _adjacent: SurfaceRef<'_>,
    ) -> Result<(), AirflowError> {
        self.link_surface(SurfaceClassification::Interior, surface.surface)
    }

    // Openings are not separate leakage paths: their leakage is part of the
    // host surface crack (gross area) or handled elsewhere (net area).
}

/// Derives a multizone leakage network from a building snapshot.
///
/// A builder serves exactly one successful build. Accessors that depend on
/// final areas fail with [`AirflowError::PrematureQuery`] until then.
///
/// ```
/// use building_airflow::airflow::{AirflowConfig, AirflowNetworkBuilder, CollectedDiagnostics};
/// use building_airflow::model::{Building, surface::Surface, zone::Zone};
///
/// let zone = Zone::from_surfaces("office", vec![Surface::exterior("north", 10.0)]).unwrap();
/// let building = Building::new("b", vec![zone]).unwrap();
///
/// let diagnostics = CollectedDiagnostics::new();
/// let mut builder = AirflowNetworkBuilder::with_diagnostics(AirflowConfig::new(), &diagnostics);
/// let records = builder.build(&building).unwrap();
/// assert_eq!(records.len(), 4);
/// ```
pub struct AirflowNetworkBuilder<D: Diagnostics = TracingDiagnostics> {
    config: AirflowConfig,
    diagnostics: D,
    state: BuilderState,
    areas: AreaAggregator,
    records: Vec<AirflowRecord>,
    traversal: TraversalSummary,
}

impl AirflowNetworkBuilder<TracingDiagnostics> {
    /// Creates a builder reporting diagnostics through `tracing`.
    pub fn new(config: AirflowConfig) -> Self {
        Self::with_diagnostics(config, TracingDiagnostics)
    }
}

impl<D: Diagnostics> AirflowNetworkBuilder<D> {
    pub fn with_diagnostics(config: AirflowConfig, diagnostics: D) -> Self {
        Self {
            config,
            diagnostics,
            state: BuilderState::Idle,
            areas: AreaAggregator::new(),
            records: Vec::new(),
            traversal: TraversalSummary::default(),
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub fn config(&self) -> &AirflowConfig {
        &self.config
    }

    /// Traverses `building` and returns the ordered network records:
    /// reference conditions, crack elements, zone controls, exterior links,
    /// interior links.
    ///
    /// On error the builder returns to [`BuilderState::Idle`] with nothing retained.
    pub fn build(&mut self, building: &Building) -> Result<Vec<AirflowRecord>, AirflowError> {
        if self.state != BuilderState::Idle {
            return Err(AirflowError::AlreadyBuilt { state: self.state });
        }

        self.state = BuilderState::Traversing;
        match self.traverse_and_finalize(building) {
            Ok(()) => {
                self.state = BuilderState::Finalized;
                Ok(self.records.clone())
            }
            Err(e) => {
                self.areas = AreaAggregator::new();
                self.records.clear();
                self.traversal = TraversalSummary::default();
                self.state = BuilderState::Idle;
                Err(e)
            }
        }
    }

    fn traverse_and_finalize(&mut self, building: &Building) -> Result<(), AirflowError> {
        let diagnostics: &dyn Diagnostics = &self.diagnostics;
        let mut visitor = NetworkVisitor::new(self.config, diagnostics);
        let traversal = SurfaceNetworkDriver::new(diagnostics).traverse(building, &mut visitor)?;

        let NetworkVisitor {
            areas,
            links,
            zone_controls,
            ..
        } = visitor;

        let link_records = links.finalize_links(&areas)?;
        let catalog = ElementCatalog::build_elements(&areas)?;

        let mut records = Vec::with_capacity(
            1 + catalog.elements.len() + zone_controls.len() + link_records.len(),
        );
        records.push(AirflowRecord::ReferenceCrackConditions(catalog.reference));
        records.extend(catalog.elements.into_iter().map(AirflowRecord::SurfaceCrack));
        records.extend(zone_controls.into_iter().map(AirflowRecord::Zone));
        records.extend(link_records.into_iter().map(AirflowRecord::Surface));

        for c in SurfaceClassification::ALL {
            diagnostics.info(
                DiagnosticKind::Summary,
                building.name.as_str(),
                format!("Maximum {} area: {}", c.as_str().to_lowercase(), areas.max_area(c)),
            );
        }
        diagnostics.info(
            DiagnosticKind::Summary,
            building.name.as_str(),
            format!("Generated {} airflow network records", records.len()),
        );

        self.areas = areas;
        self.records = records;
        self.traversal = traversal;
        Ok(())
    }

    fn require_finalized(&self, query: &'static str) -> Result<(), AirflowError> {
        if self.state == BuilderState::Finalized {
            Ok(())
        } else {
            Err(AirflowError::PrematureQuery {
                query,
                state: self.state,
            })
        }
    }

    /// Largest surface area of `classification` (0.0 if none was linked).
    pub fn max_area(&self, classification: SurfaceClassification) -> Result<f64, AirflowError> {
        self.require_finalized("max_area")?;
        Ok(self.areas.max_area(classification))
    }

    /// Area used for the named surface, `None` if it is not in the network.
    pub fn surface_area(&self, surface_name: &str) -> Result<Option<f64>, AirflowError> {
        self.require_finalized("surface_area")?;
        Ok(self.areas.area(surface_name))
    }

    /// Records produced by the finished build.
    pub fn records(&self) -> Result<&[AirflowRecord], AirflowError> {
        self.require_finalized("records")?;
        Ok(&self.records)
    }

    /// Event counts of the finished traversal.
    pub fn traversal_summary(&self) -> Result<TraversalSummary, AirflowError> {
        self.require_finalized("traversal_summary")?;
        Ok(self.traversal)
    }
}

/// Builds the network for `building`, reporting diagnostics through `tracing`.
pub fn build_airflow_network(
    building: &Building,
    config: AirflowConfig,
) -> Result<Vec<AirflowRecord>, AirflowError> {
    AirflowNetworkBuilder::new(config).build(building)
}
