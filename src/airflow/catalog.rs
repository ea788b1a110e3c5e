//! Shared crack elements.
//!
//! One element per classification stands in for every surface of that
//! classification; individual surfaces scale it through their opening factor.

use super::aggregator::AreaAggregator;
use super::classification::SurfaceClassification;
use super::error::AirflowError;
use super::records::{LeakageElementRecord, ReferenceConditionsRecord};

/// Air mass flow coefficient per m² of exterior surface at reference conditions (kg/s/m²).
pub const CRACK_COEFFICIENT_PER_M2: f64 = 4.99082e-4;

/// Air mass flow exponent of every crack element (-).
pub const CRACK_FLOW_EXPONENT: f64 = 0.65;

pub const REFERENCE_CONDITIONS_NAME: &str = "ReferenceCrackConditions";
pub const REFERENCE_TEMPERATURE_C: f64 = 20.0;
pub const REFERENCE_PRESSURE_PA: f64 = 101_325.0;
pub const REFERENCE_HUMIDITY_RATIO: f64 = 0.0;

/// Flow coefficient per m² of the largest surface in `classification`.
///
/// An interior partition is modeled as two exterior-equivalent cracks, hence
/// twice the exterior coefficient.
pub fn base_coefficient(classification: SurfaceClassification) -> f64 {
    match classification {
        SurfaceClassification::Exterior => CRACK_COEFFICIENT_PER_M2,
        SurfaceClassification::Interior => 2.0 * CRACK_COEFFICIENT_PER_M2,
    }
}

pub fn reference_conditions() -> ReferenceConditionsRecord {
    ReferenceConditionsRecord {
        name: REFERENCE_CONDITIONS_NAME.to_string(),
        temperature_c: REFERENCE_TEMPERATURE_C,
        pressure_pa: REFERENCE_PRESSURE_PA,
        humidity_ratio: REFERENCE_HUMIDITY_RATIO,
    }
}

/// Reference conditions plus the crack elements derived from final areas.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementCatalog {
    pub reference: ReferenceConditionsRecord,
    /// One element per observed classification, in first-seen order.
    pub elements: Vec<LeakageElementRecord>,
}

impl ElementCatalog {
    /// Builds the shared elements. `areas` must be final.
    ///
    /// Classifications without any recorded surface get no element. A
    /// classification whose surfaces all have zero area gets a zero-coefficient
    /// element.
    pub fn build_elements(areas: &AreaAggregator) -> Result<Self, AirflowError> {
        let mut elements = Vec::with_capacity(areas.observed().len());
        for &classification in areas.observed() {
            let max_area = areas.max_area(classification);
            let coefficient = base_coefficient(classification) * max_area;
            if !coefficient.is_finite() || coefficient < 0.0 {
                return Err(AirflowError::ElementSynthesis {
                    context: format!(
                        "{} flow coefficient is {} (max area {})",
                        classification, coefficient, max_area
                    ),
                });
            }
            elements.push(LeakageElementRecord {
                name: classification.element_name(),
                flow_coefficient_kg_per_s: coefficient,
                flow_exponent: CRACK_FLOW_EXPONENT,
                reference_conditions_name: REFERENCE_CONDITIONS_NAME.to_string(),
            });
        }

        Ok(Self {
            reference: reference_conditions(),
            elements,
        })
    }
}
