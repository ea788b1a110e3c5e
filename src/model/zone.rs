//! Zone container for grouping spaces.
//!
//! A Zone is the thermal control unit of the building hierarchy:
//! Building → Zone → Space → Surface → SubSurface

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use super::space::Space;
use super::surface::Surface;
use crate::{HasName, UID};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    spaces: Vec<Space>,
}

impl HasName for Zone {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Zone {
    /// Creates a new zone with the given name and spaces.
    pub fn new(name: &str, spaces: Vec<Space>) -> Result<Self> {
        let mut zone = Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            spaces: Vec::new(),
        };
        for s in spaces {
            zone.add_space(s)?;
        }
        Ok(zone)
    }

    /// Creates a zone holding a single space with the same name.
    pub fn from_surfaces(name: &str, surfaces: Vec<Surface>) -> Result<Self> {
        let space = Space::new(name, surfaces)?;
        Self::new(name, vec![space])
    }

    /// Returns spaces in insertion order.
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Returns surfaces from all spaces.
    pub fn surfaces(&self) -> Vec<&Surface> {
        self.spaces.iter().flat_map(|s| s.surfaces()).collect()
    }

    /// Adds a space to the zone.
    pub fn add_space(&mut self, mut space: Space) -> Result<()> {
        if self.spaces.iter().any(|s| s.uid == space.uid) {
            return Err(anyhow!("Space is already present: {}", space.uid));
        }
        space.parent = Some(self.uid.clone());
        self.spaces.push(space);
        Ok(())
    }

    pub(crate) fn repair_parents(&mut self) {
        for s in self.spaces.iter_mut() {
            s.parent = Some(self.uid.clone());
            s.repair_parents();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_creation() -> Result<()> {
        let s1 = Space::new("s1", vec![Surface::exterior("w1", 4.0)])?;
        let s2 = Space::new("s2", vec![Surface::exterior("w2", 6.0)])?;
        let zone = Zone::new("zone1", vec![s1, s2])?;

        assert_eq!(zone.name, "zone1");
        assert_eq!(zone.spaces().len(), 2);
        assert_eq!(zone.surfaces().len(), 2);
        assert_eq!(zone.spaces()[1].parent.as_ref(), Some(&zone.uid));
        Ok(())
    }

    #[test]
    fn test_zone_from_surfaces() -> Result<()> {
        let zone = Zone::from_surfaces("core", vec![Surface::exterior("roof", 30.0)])?;
        assert_eq!(zone.spaces().len(), 1);
        assert_eq!(zone.spaces()[0].name, "core");
        Ok(())
    }

    #[test]
    fn test_zone_add_duplicate_space() -> Result<()> {
        let s1 = Space::new("s1", vec![])?;
        let mut zone = Zone::new("zone1", vec![s1.clone()])?;
        assert!(zone.add_space(s1).is_err());
        Ok(())
    }

    #[test]
    fn test_empty_zone_is_allowed() -> Result<()> {
        let zone = Zone::new("plenum", vec![])?;
        assert!(zone.surfaces().is_empty());
        Ok(())
    }
}
