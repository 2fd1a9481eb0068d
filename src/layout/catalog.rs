//! Furniture catalog
//!
//! Maps furniture type keys to the prefab that represents them and the prefab's
//! footprint at scale 1. Lookup is by case-insensitive substring of a
//! placeholder name, and the first inserted entry wins. Keys that contain other
//! keys ("FregaderoAbierto" contains "Fregadero") therefore resolve to whichever
//! was inserted earlier, not to the more specific one.

use crate::error::{Result, SceneError};

/// Width (local X) and depth (local Z) of an asset at unit scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f32,
    pub depth: f32,
}

impl Footprint {
    pub const fn new(width: f32, depth: f32) -> Self {
        Self { width, depth }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.depth.is_finite() && self.width > 0.0 && self.depth > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub key: String,
    pub asset_path: String,
    pub footprint: Footprint,
    key_lower: String,
}

impl CatalogEntry {
    /// Fails when the key is empty, since it would match every name, or when
    /// either footprint dimension is zero, negative, or not finite, since
    /// footprints are used as scale denominators.
    pub fn new(key: &str, asset_path: &str, footprint: Footprint) -> Result<Self> {
        if key.is_empty() {
            return Err(SceneError::EmptyCatalogKey(asset_path.to_string()));
        }
        if !footprint.is_valid() {
            return Err(SceneError::InvalidFootprint {
                key: key.to_string(),
                width: footprint.width,
                depth: footprint.depth,
            });
        }

        Ok(Self {
            key: key.to_string(),
            asset_path: asset_path.to_string(),
            footprint,
            key_lower: key.to_lowercase(),
        })
    }

    /// Case-insensitive substring test against a placeholder name
    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.key_lower)
    }
}

/// Ordered set of furniture entries
#[derive(Debug, Clone, Default)]
pub struct FurnitureCatalog {
    entries: Vec<CatalogEntry>,
}

/// Key, prefab path, width, depth
const STANDARD_ENTRIES: &[(&str, &str, f32, f32)] = &[
    ("CamaIndividual", "Furniture/CamaIndividual", 3.257153, 1.571005),
    ("CamaMatrimonio", "Furniture/CamaMatrimonio", 3.799233, 3.148135),
    ("Lavabo", "Furniture/Lavabo", 0.7146341, 1.35088),
    ("Inodoro", "Furniture/Inodoro", 1.188786, 0.6891798),
    ("Ducha", "Furniture/Ducha", 1.836204, 1.836204),
    ("Encimera", "Furniture/Encimera", 0.992867, 1.16401),
    ("Fregadero", "Furniture/Fregadero", 0.907429, 1.361143),
    ("FregaderoAbierto", "Furniture/FregaderoAbierto", 0.907429, 1.361143),
    ("Nevera", "Furniture/Nevera", 0.9164716, 1.092634),
    ("Fuegos", "Furniture/Fuegos", 0.8933326, 1.111728),
    ("FuegosAbierto", "Furniture/FuegosAbierto", 0.8933326, 1.111728),
    ("Mesilla", "Furniture/Mesilla", 0.6353572, 0.6341963),
    ("Almacenamiento", "Furniture/Almacenamiento", 0.8180385, 1.07484),
    ("MesaRedonda", "Furniture/MesaRedonda", 2.225178, 2.225178),
    ("MesaRectangular", "Furniture/MesaRectangular", 1.314353, 2.074194),
    ("Bide", "Furniture/Bide/Bide", 0.5397641, 0.3574774),
    // The sofa end pieces are modelled mirrored: a right-hand placeholder uses
    // the left prefab
    ("SofaDerecha", "Furniture/SofaIzquierda", 0.9287868, 0.9556539),
    ("SofaIzquierda", "Furniture/SofaDerecha", 0.9287868, 0.9556539),
    ("SofaIntermedio", "Furniture/SofaIntermedio", 0.9739578, 0.938403),
    ("SofaEsquina", "Furniture/SofaEsquina", 0.9461575, 0.9527255),
    ("Armario", "Furniture/Armario", 0.5052456, 1.8),
    ("Lavadora", "Furniture/Lavadora", 0.6144176, 0.7034974),
];

impl FurnitureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The furniture set shipped with the floor plan exporter
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for &(key, path, width, depth) in STANDARD_ENTRIES {
            // Every standard footprint is positive
            if let Ok(entry) = CatalogEntry::new(key, path, Footprint::new(width, depth)) {
                catalog.entries.push(entry);
            }
        }
        catalog
    }

    /// Appends an entry. Later entries never shadow earlier ones.
    pub fn insert(
        &mut self,
        key: &str,
        asset_path: &str,
        footprint: Footprint,
    ) -> Result<&mut Self> {
        let entry = CatalogEntry::new(key, asset_path, footprint)?;
        self.entries.push(entry);
        Ok(self)
    }

    /// First entry, in insertion order, whose key occurs in `name` ignoring case
    pub fn resolve(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.matches(name))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
