//! Records emitted by the airflow-network builder.
//!
//! Each record maps onto one object of a multizone airflow-network input;
//! the JSON form (see [`crate::io`]) is tagged by `type`.

use serde::{Deserialize, Serialize};

/// Reference conditions shared by every crack element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConditionsRecord {
    pub name: String,
    /// Reference temperature (°C).
    pub temperature_c: f64,
    /// Reference barometric pressure (Pa).
    pub pressure_pa: f64,
    /// Reference humidity ratio (kg water / kg dry air).
    pub humidity_ratio: f64,
}

/// Shared surface crack element, one per observed classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeakageElementRecord {
    pub name: String,
    /// Air mass flow coefficient at reference conditions (kg/s).
    pub flow_coefficient_kg_per_s: f64,
    /// Air mass flow exponent (-).
    pub flow_exponent: f64,
    pub reference_conditions_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VentilationMode {
    /// No controlled venting; openings stay at their crack factors.
    NoVent,
}

/// Per-zone ventilation control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneControlRecord {
    pub zone_name: String,
    pub ventilation_mode: VentilationMode,
    pub vent_temperature_schedule: Option<String>,
    pub minimum_venting_open_factor: Option<f64>,
    pub temperature_difference_lower_limit: Option<f64>,
    pub temperature_difference_upper_limit: Option<f64>,
    pub enthalpy_difference_lower_limit: Option<f64>,
    pub enthalpy_difference_upper_limit: Option<f64>,
    pub venting_availability_schedule: Option<String>,
}

impl ZoneControlRecord {
    /// Non-venting control with every schedule and threshold left empty.
    pub fn no_vent(zone_name: &str) -> Self {
        Self {
            zone_name: zone_name.to_string(),
            ventilation_mode: VentilationMode::NoVent,
            vent_temperature_schedule: None,
            minimum_venting_open_factor: None,
            temperature_difference_lower_limit: None,
            temperature_difference_upper_limit: None,
            enthalpy_difference_lower_limit: None,
            enthalpy_difference_upper_limit: None,
            venting_availability_schedule: None,
        }
    }
}

/// Links one surface to a shared crack element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLinkRecord {
    pub surface_name: String,
    pub element_name: String,
    /// Surface area relative to the largest surface of the same classification, in [0, 1].
    /// A zero-area surface (e.g. fully covered by openings in net-area mode) gets 0.
    pub opening_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AirflowRecord {
    ReferenceCrackConditions(ReferenceConditionsRecord),
    SurfaceCrack(LeakageElementRecord),
    Zone(ZoneControlRecord),
    Surface(SurfaceLinkRecord),
}

impl AirflowRecord {
    pub fn as_element(&self) -> Option<&LeakageElementRecord> {
        match self {
            Self::SurfaceCrack(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_zone(&self) -> Option<&ZoneControlRecord> {
        match self {
            Self::Zone(z) => Some(z),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&SurfaceLinkRecord> {
        match self {
            Self::Surface(l) => Some(l),
            _ => None,
        }
    }
}

/// Number of records of each kind in a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkSummary {
    pub reference_conditions: usize,
    pub leakage_elements: usize,
    pub zone_controls: usize,
    pub surface_links: usize,
}

impl NetworkSummary {
    pub fn of(records: &[AirflowRecord]) -> Self {
        let mut summary = Self::default();
        for r in records {
            match r {
                AirflowRecord::ReferenceCrackConditions(_) => summary.reference_conditions += 1,
                AirflowRecord::SurfaceCrack(_) => summary.leakage_elements += 1,
                AirflowRecord::Zone(_) => summary.zone_controls += 1,
                AirflowRecord::Surface(_) => summary.surface_links += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.reference_conditions + self.leakage_elements + self.zone_controls + self.surface_links
    }
}

/// Finds the link record for `surface_name`.
pub fn find_link<'a>(
    records: &'a [AirflowRecord],
    surface_name: &str,
) -> Option<&'a SurfaceLinkRecord> {
    records
        .iter()
        .filter_map(AirflowRecord::as_link)
        .find(|l| l.surface_name == surface_name)
}

/// Finds the leakage element named `name`.
pub fn find_element<'a>(
    records: &'a [AirflowRecord],
    name: &str,
) -> Option<&'a LeakageElementRecord> {
    records
        .iter()
        .filter_map(AirflowRecord::as_element)
        .find(|e| e.name == name)
}
