//! Space container for grouping surfaces.
//!
//! A Space belongs to exactly one Zone and owns its bounding Surfaces.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use super::surface::{SubSurface, Surface};
use crate::{HasName, UID};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub name: String,
    pub uid: UID,
    pub parent: Option<UID>,
    surfaces: Vec<Surface>,
}

impl HasName for Space {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Space {
    /// Creates a new space with the given name and surfaces.
    pub fn new(name: &str, surfaces: Vec<Surface>) -> Result<Self> {
        let mut space = Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            surfaces: Vec::new(),
        };
        for s in surfaces {
            space.add_surface(s)?;
        }
        Ok(space)
    }

    /// Returns surfaces in insertion order.
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// Returns sub-surfaces of all surfaces.
    pub fn sub_surfaces(&self) -> Vec<&SubSurface> {
        self.surfaces
            .iter()
            .flat_map(|s| s.sub_surfaces())
            .collect()
    }

    /// Adds a surface to the space.
    pub fn add_surface(&mut self, mut surface: Surface) -> Result<()> {
        if self.surfaces.iter().any(|s| s.uid == surface.uid) {
            return Err(anyhow!("Surface is already present: {}", surface.uid));
        }
        surface.parent = Some(self.uid.clone());
        surface.repair_parents();
        self.surfaces.push(surface);
        Ok(())
    }

    pub(crate) fn repair_parents(&mut self) {
        for s in self.surfaces.iter_mut() {
            s.parent = Some(self.uid.clone());
            s.repair_parents();
        }
    }
}
