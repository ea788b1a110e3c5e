//! Building container - the top level of the hierarchy.
//!
//! Hierarchy: Building → Zone → Space → Surface → SubSurface
//!
//! The model is a read-only snapshot from the airflow builder's point of view.
//! Geometry is reduced to what the network needs: gross surface areas and
//! opening areas. Names are not validated here, since a missing name is a
//! condition the builder reports on rather than a construction error.

pub mod index;
pub mod space;
pub mod surface;
pub mod zone;

use std::collections::HashSet;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{HasName, UID};
use index::SurfaceIndex;
use space::Space;
use surface::{OutsideBoundary, SubSurface, SubSurfaceBoundary, Surface};
use zone::Zone;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub uid: UID,
    zones: Vec<Zone>,
}

impl HasName for Building {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Building {
    /// Creates a new building with the given name and zones.
    pub fn new(name: &str, zones: Vec<Zone>) -> Result<Self> {
        let mut building = Self {
            name: name.to_string(),
            uid: UID::new(),
            zones: Vec::new(),
        };
        for zone in zones {
            building.add_zone(zone)?;
        }
        Ok(building)
    }

    /// Returns zones in insertion order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Returns spaces from all zones.
    pub fn spaces(&self) -> Vec<&Space> {
        self.zones.iter().flat_map(|z| z.spaces()).collect()
    }

    /// Returns surfaces from all zones.
    pub fn surfaces(&self) -> Vec<&Surface> {
        self.spaces().into_iter().flat_map(|s| s.surfaces()).collect()
    }

    /// Returns sub-surfaces from all zones.
    pub fn sub_surfaces(&self) -> Vec<&SubSurface> {
        self.surfaces()
            .into_iter()
            .flat_map(|s| s.sub_surfaces())
            .collect()
    }

    /// Adds a zone to the building.
    pub fn add_zone(&mut self, mut zone: Zone) -> Result<()> {
        if self.zones.iter().any(|z| z.uid == zone.uid) {
            return Err(anyhow!("Zone is already present: {}", zone.uid));
        }
        zone.parent = Some(self.uid.clone());
        self.zones.push(zone);
        Ok(())
    }

    /// Validates the structural integrity of the building.
    ///
    /// Checks for:
    /// - Duplicate UIDs across all entities
    /// - Non-finite or negative areas
    /// - Duplicate names among named surfaces (names identify network links)
    /// - Adjacency references to surfaces or sub-surfaces that do not exist
    /// - Adjacency that is not reciprocal, or that stays within one space
    /// - Surfaces declared adjacent to themselves
    pub fn validate(&self) -> Result<()> {
        let mut uids: HashSet<&UID> = HashSet::new();
        if !uids.insert(&self.uid) {
            return Err(anyhow!("Duplicate UID: {}", self.uid));
        }

        for zone in &self.zones {
            if !uids.insert(&zone.uid) {
                return Err(anyhow!("Duplicate UID: {}", zone.uid));
            }
            for space in zone.spaces() {
                if !uids.insert(&space.uid) {
                    return Err(anyhow!("Duplicate UID: {}", space.uid));
                }
                for surface in space.surfaces() {
                    if !uids.insert(&surface.uid) {
                        return Err(anyhow!("Duplicate UID: {}", surface.uid));
                    }
                    if !surface.gross_area.is_finite() || surface.gross_area < 0.0 {
                        return Err(anyhow!(
                            "Surface '{}' has invalid gross area: {}",
                            surface.name,
                            surface.gross_area
                        ));
                    }
                    for sub in surface.sub_surfaces() {
                        if !uids.insert(&sub.uid) {
                            return Err(anyhow!("Duplicate UID: {}", sub.uid));
                        }
                        if !sub.area.is_finite() || sub.area < 0.0 {
                            return Err(anyhow!(
                                "Sub-surface '{}' has invalid area: {}",
                                sub.name,
                                sub.area
                            ));
                        }
                    }
                }
            }
        }

        let index = SurfaceIndex::new(self);
        let mut surface_names: HashSet<&str> = HashSet::new();

        for space in self.spaces() {
            for surface in space.surfaces() {
                if surface.has_name() && !surface_names.insert(surface.name.as_str()) {
                    return Err(anyhow!("Duplicate surface name: {}", surface.name));
                }
                if let OutsideBoundary::Surface(adjacent) = &surface.boundary {
                    if adjacent == &surface.uid {
                        return Err(anyhow!("Surface '{}' is adjacent to itself", surface.name));
                    }
                    let Some(other) = index.surface(adjacent) else {
                        return Err(anyhow!(
                            "Surface '{}' references unknown adjacent surface: {}",
                            surface.name,
                            adjacent
                        ));
                    };
                    if other.surface.adjacent_uid() != Some(&surface.uid) {
                        return Err(anyhow!(
                            "Surface '{}' is adjacent to '{}', which does not point back",
                            surface.name,
                            other.surface.name
                        ));
                    }
                    if other.space.uid == space.uid {
                        return Err(anyhow!(
                            "Surfaces '{}' and '{}' are adjacent within one space",
                            surface.name,
                            other.surface.name
                        ));
                    }
                }
                for sub in surface.sub_surfaces() {
                    if let SubSurfaceBoundary::SubSurface(adjacent) = &sub.boundary {
                        let Some(other) = index.sub_surface(adjacent) else {
                            return Err(anyhow!(
                                "Sub-surface '{}' references unknown adjacent sub-surface: {}",
                                sub.name,
                                adjacent
                            ));
                        };
                        let points_back = matches!(
                            &other.sub_surface.boundary,
                            SubSurfaceBoundary::SubSurface(back) if back == &sub.uid
                        );
                        if !points_back {
                            return Err(anyhow!(
                                "Sub-surface '{}' is adjacent to '{}', which does not point back",
                                sub.name,
                                other.sub_surface.name
                            ));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    pub fn repair_parents(&mut self) {
        for zone in self.zones.iter_mut() {
            zone.parent = Some(self.uid.clone());
            zone.repair_parents();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_zone_building() -> Result<Building> {
        let a = UID::from("a");
        let b = UID::from("b");
        let z1 = Zone::from_surfaces(
            "zone1",
            vec![
                Surface::exterior("north", 10.0),
                Surface::interior("partition_1", 6.0, &b).with_uid(a.clone()),
            ],
        )?;
        let z2 = Zone::from_surfaces(
            "zone2",
            vec![Surface::interior("partition_2", 6.0, &a).with_uid(b)],
        )?;
        Building::new("building", vec![z1, z2])
    }

    #[test]
    fn test_building_from_zones() -> Result<()> {
        let bdg = two_zone_building()?;
        assert_eq!(bdg.zones().len(), 2);
        assert_eq!(bdg.spaces().len(), 2);
        assert_eq!(bdg.surfaces().len(), 3);
        assert_eq!(bdg.get_name(), "building");
        Ok(())
    }

    #[test]
    fn test_zone_order_is_insertion_order() -> Result<()> {
        let bdg = Building::new(
            "building",
            vec![Zone::new("zeta", vec![])?, Zone::new("alpha", vec![])?],
        )?;
        let names: Vec<&str> = bdg.zones().iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        Ok(())
    }

    #[test]
    fn test_building_duplicate_zone_error() -> Result<()> {
        let z1 = Zone::new("zone1", vec![])?;
        let result = Building::new("building", vec![z1.clone(), z1]);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_validate_ok() -> Result<()> {
        two_zone_building()?.validate()
    }

    #[test]
    fn test_validate_unknown_adjacent_surface() -> Result<()> {
        let zone = Zone::from_surfaces(
            "zone1",
            vec![Surface::interior("partition", 6.0, &UID::from("missing"))],
        )?;
        let bdg = Building::new("building", vec![zone])?;
        assert!(bdg.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_validate_self_adjacent_surface() -> Result<()> {
        let a = UID::from("a");
        let zone = Zone::from_surfaces(
            "zone1",
            vec![Surface::interior("partition", 6.0, &a).with_uid(a.clone())],
        )?;
        let bdg = Building::new("building", vec![zone])?;
        assert!(bdg.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_validate_duplicate_surface_name_across_classifications() -> Result<()> {
        let (a, b) = (UID::from("a"), UID::from("b"));
        let z1 = Zone::from_surfaces(
            "zone1",
            vec![
                Surface::exterior("wall", 5.0),
                Surface::interior("partition", 20.0, &b).with_uid(a.clone()),
            ],
        )?;
        let z2 = Zone::from_surfaces(
            "zone2",
            vec![Surface::interior("wall", 20.0, &a).with_uid(b)],
        )?;
        let bdg = Building::new("building", vec![z1, z2])?;
        let err = bdg.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate surface name: wall"));
        Ok(())
    }

    #[test]
    fn test_validate_duplicate_surface_name_same_classification() -> Result<()> {
        let z1 = Zone::from_surfaces("zone1", vec![Surface::exterior("w", 10.0)])?;
        let z2 = Zone::from_surfaces("zone2", vec![Surface::exterior("w", 3.0)])?;
        let bdg = Building::new("building", vec![z1, z2])?;
        assert!(bdg.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_validate_allows_repeated_empty_names() -> Result<()> {
        let zone = Zone::from_surfaces(
            "zone1",
            vec![Surface::exterior("", 1.0), Surface::exterior("", 2.0)],
        )?;
        Building::new("building", vec![zone])?.validate()
    }

    #[test]
    fn test_validate_one_sided_adjacency() -> Result<()> {
        let (a, b) = (UID::from("a"), UID::from("b"));
        let z1 = Zone::from_surfaces(
            "zone1",
            vec![Surface::interior("partition", 6.0, &b).with_uid(a)],
        )?;
        let z2 = Zone::from_surfaces("zone2", vec![Surface::exterior("facade", 6.0).with_uid(b)])?;
        let bdg = Building::new("building", vec![z1, z2])?;
        let err = bdg.validate().unwrap_err();
        assert!(err.to_string().contains("does not point back"));
        Ok(())
    }

    #[test]
    fn test_validate_adjacency_within_one_space() -> Result<()> {
        let (a, b) = (UID::from("a"), UID::from("b"));
        let zone = Zone::from_surfaces(
            "zone1",
            vec![
                Surface::interior("left", 6.0, &b).with_uid(a.clone()),
                Surface::interior("right", 6.0, &a).with_uid(b),
            ],
        )?;
        let bdg = Building::new("building", vec![zone])?;
        let err = bdg.validate().unwrap_err();
        assert!(err.to_string().contains("within one space"));
        Ok(())
    }

    #[test]
    fn test_validate_one_sided_sub_surface_adjacency() -> Result<()> {
        let (a, b) = (UID::from("a"), UID::from("b"));
        let z1 = Zone::from_surfaces(
            "zone1",
            vec![
                Surface::interior("partition_1", 6.0, &b)
                    .with_uid(a.clone())
                    .with_sub_surfaces(vec![
                        SubSurface::interior("door_1", 2.0, &UID::from("d2"))
                            .with_uid(UID::from("d1")),
                    ])?,
            ],
        )?;
        let z2 = Zone::from_surfaces(
            "zone2",
            vec![
                Surface::interior("partition_2", 6.0, &a)
                    .with_uid(b)
                    .with_sub_surfaces(vec![
                        SubSurface::exterior("door_2", 2.0).with_uid(UID::from("d2")),
                    ])?,
            ],
        )?;
        let bdg = Building::new("building", vec![z1, z2])?;
        assert!(bdg.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_validate_negative_area() -> Result<()> {
        let zone = Zone::from_surfaces("zone1", vec![Surface::exterior("north", -1.0)])?;
        let bdg = Building::new("building", vec![zone])?;
        assert!(bdg.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_validate_duplicate_uid_across_zones() -> Result<()> {
        let w1 = Surface::exterior("w1", 1.0).with_uid(UID::from("same"));
        let w2 = Surface::exterior("w2", 1.0).with_uid(UID::from("same"));
        let z1 = Zone::from_surfaces("zone1", vec![w1])?;
        let z2 = Zone::from_surfaces("zone2", vec![w2])?;
        let bdg = Building::new("building", vec![z1, z2])?;
        assert!(bdg.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_building_repair_parents() -> Result<()> {
        let mut bdg = two_zone_building()?;
        bdg.repair_parents();
        for zone in bdg.zones() {
            assert_eq!(zone.parent.as_ref(), Some(&bdg.uid));
        }
        bdg.validate()?;
        Ok(())
    }
}
