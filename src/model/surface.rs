//! Surfaces and sub-surfaces, the leaves of the building hierarchy.
//!
//! Hierarchy: Building → Zone → Space → Surface → SubSurface

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{HasName, UID};

/// What lies on the far side of a surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutsideBoundary {
    /// Boundary with outdoor air.
    Outdoors,
    /// Ground-coupled; not part of the airflow network.
    Ground,
    /// No exchange across the surface; not part of the airflow network.
    Adiabatic,
    /// Paired with exactly one surface (by UID) in another space.
    Surface(UID),
}

/// What lies on the far side of a sub-surface (window, door, opening).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubSurfaceBoundary {
    Outdoors,
    SubSurface(UID),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubSurface {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    /// Opening area (m²).
    pub area: f64,
    pub boundary: SubSurfaceBoundary,
}

impl HasName for SubSurface {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl SubSurface {
    /// Creates a sub-surface opening to outdoors.
    pub fn exterior(name: &str, area: f64) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            area,
            boundary: SubSurfaceBoundary::Outdoors,
        }
    }

    /// Creates a sub-surface paired with `adjacent` (usually a door between spaces).
    pub fn interior(name: &str, area: f64, adjacent: &UID) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            area,
            boundary: SubSurfaceBoundary::SubSurface(adjacent.clone()),
        }
    }

    pub fn with_uid(mut self, uid: UID) -> Self {
        self.uid = uid;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surface {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    /// Area including openings (m²).
    pub gross_area: f64,
    pub boundary: OutsideBoundary,
    sub_surfaces: Vec<SubSurface>,
}

impl HasName for Surface {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Surface {
    /// Creates a surface with the given outside boundary and no openings.
    pub fn new(name: &str, gross_area: f64, boundary: OutsideBoundary) -> Self {
        Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            gross_area,
            boundary,
            sub_surfaces: Vec::new(),
        }
    }

    /// Creates a surface facing outdoors.
    pub fn exterior(name: &str, gross_area: f64) -> Self {
        Self::new(name, gross_area, OutsideBoundary::Outdoors)
    }

    /// Creates a surface paired with the surface identified by `adjacent`.
    pub fn interior(name: &str, gross_area: f64, adjacent: &UID) -> Self {
        Self::new(name, gross_area, OutsideBoundary::Surface(adjacent.clone()))
    }

    /// Replaces the random UID, e.g. to wire up adjacency before both sides exist.
    pub fn with_uid(mut self, uid: UID) -> Self {
        self.uid = uid;
        self
    }

    pub fn with_sub_surfaces(mut self, sub_surfaces: Vec<SubSurface>) -> Result<Self> {
        for s in sub_surfaces {
            self.add_sub_surface(s)?;
        }
        Ok(self)
    }

    /// Returns sub-surfaces in insertion order.
    pub fn sub_surfaces(&self) -> &[SubSurface] {
        &self.sub_surfaces
    }

    /// Adds a sub-surface. The combined opening area may not exceed the gross area.
    pub fn add_sub_surface(&mut self, mut sub_surface: SubSurface) -> Result<()> {
        if self.sub_surfaces.iter().any(|s| s.uid == sub_surface.uid) {
            return Err(anyhow!(
                "Sub-surface is already present: {}",
                sub_surface.uid
            ));
        }
        let openings = self.openings_area() + sub_surface.area;
        if openings > self.gross_area {
            return Err(anyhow!(
                "Openings of surface '{}' ({} m²) exceed its gross area ({} m²)",
                self.name,
                openings,
                self.gross_area
            ));
        }
        sub_surface.parent = Some(self.uid.clone());
        self.sub_surfaces.push(sub_surface);
        Ok(())
    }

    /// Total area of all sub-surfaces (m²).
    pub fn openings_area(&self) -> f64 {
        self.sub_surfaces.iter().map(|s| s.area).sum()
    }

    /// Area excluding openings (m²), never negative.
    pub fn net_area(&self) -> f64 {
        (self.gross_area - self.openings_area()).max(0.0)
    }

    /// True if the far side is outdoor air.
    pub fn is_exterior(&self) -> bool {
        self.boundary == OutsideBoundary::Outdoors
    }

    /// UID of the paired surface, if this is an interior surface.
    pub fn adjacent_uid(&self) -> Option<&UID> {
        match &self.boundary {
            OutsideBoundary::Surface(uid) => Some(uid),
            _ => None,
        }
    }

    pub(crate) fn repair_parents(&mut self) {
        for s in self.sub_surfaces.iter_mut() {
            s.parent = Some(self.uid.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_area_excludes_openings() -> Result<()> {
        let wall = Surface::exterior("south", 12.0).with_sub_surfaces(vec![
            SubSurface::exterior("window_1", 2.0),
            SubSurface::exterior("window_2", 1.5),
        ])?;
        assert!((wall.gross_area - 12.0).abs() < 1e-12);
        assert!((wall.openings_area() - 3.5).abs() < 1e-12);
        assert!((wall.net_area() - 8.5).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_openings_larger_than_surface_rejected() {
        let mut wall = Surface::exterior("south", 2.0);
        assert!(wall.add_sub_surface(SubSurface::exterior("door", 3.0)).is_err());
        assert!(wall.sub_surfaces().is_empty());
    }

    #[test]
    fn test_duplicate_sub_surface_rejected() -> Result<()> {
        let window = SubSurface::exterior("window", 1.0).with_uid(UID::from("w"));
        let mut wall = Surface::exterior("south", 10.0).with_sub_surfaces(vec![window.clone()])?;
        assert!(wall.add_sub_surface(window).is_err());
        Ok(())
    }

    #[test]
    fn test_sub_surface_parent_is_set() -> Result<()> {
        let wall = Surface::exterior("east", 5.0)
            .with_uid(UID::from("east"))
            .with_sub_surfaces(vec![SubSurface::exterior("window", 1.0)])?;
        assert_eq!(wall.sub_surfaces()[0].parent, Some(UID::from("east")));
        Ok(())
    }

    #[test]
    fn test_boundary_queries() {
        let other = UID::from("other");
        let ext = Surface::exterior("roof", 20.0);
        let int = Surface::interior("partition", 8.0, &other);
        let ground = Surface::new("slab", 20.0, OutsideBoundary::Ground);

        assert!(ext.is_exterior());
        assert!(ext.adjacent_uid().is_none());
        assert!(!int.is_exterior());
        assert_eq!(int.adjacent_uid(), Some(&other));
        assert!(!ground.is_exterior());
        assert!(ground.adjacent_uid().is_none());
    }
}
