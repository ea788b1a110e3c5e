//! UID lookup over the building hierarchy.
//!
//! Adjacency on surfaces and sub-surfaces is stored as a bare [`UID`]; this
//! index resolves such a reference back to the owning zone, space and surface.

use std::collections::HashMap;

use super::Building;
use super::space::Space;
use super::surface::{SubSurface, Surface};
use super::zone::Zone;
use crate::UID;

/// Position of a surface in the building hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceRef<'a> {
    pub zone: &'a Zone,
    pub space: &'a Space,
    pub surface: &'a Surface,
}

/// Position of a sub-surface in the building hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct SubSurfaceRef<'a> {
    pub zone: &'a Zone,
    pub space: &'a Space,
    pub surface: &'a Surface,
    pub sub_surface: &'a SubSurface,
}

/// Lookup table for surfaces and sub-surfaces keyed by UID.
#[derive(Debug, Clone)]
pub struct SurfaceIndex<'a> {
    surfaces: HashMap<&'a UID, SurfaceRef<'a>>,
    sub_surfaces: HashMap<&'a UID, SubSurfaceRef<'a>>,
}

impl<'a> SurfaceIndex<'a> {
    pub fn new(building: &'a Building) -> Self {
        let mut surfaces = HashMap::new();
        let mut sub_surfaces = HashMap::new();

        for zone in building.zones() {
            for space in zone.spaces() {
                for surface in space.surfaces() {
                    surfaces.insert(
                        &surface.uid,
                        SurfaceRef {
                            zone,
                            space,
                            surface,
                        },
                    );
                    for sub_surface in surface.sub_surfaces() {
                        sub_surfaces.insert(
                            &sub_surface.uid,
                            SubSurfaceRef {
                                zone,
                                space,
                                surface,
                                sub_surface,
                            },
                        );
                    }
                }
            }
        }

        Self {
            surfaces,
            sub_surfaces,
        }
    }

    pub fn surface(&self, uid: &UID) -> Option<SurfaceRef<'a>> {
        self.surfaces.get(uid).copied()
    }

    pub fn sub_surface(&self, uid: &UID) -> Option<SubSurfaceRef<'a>> {
        self.sub_surfaces.get(uid).copied()
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }
}
