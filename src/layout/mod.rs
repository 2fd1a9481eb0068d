//! # Furniture Layout
//!
//! Turns placeholder names into furniture placements. A placeholder called
//! `Nevera_2.0L_1.0A_90R` asks for the catalog's fridge, stretched to 2.0 × 1.0
//! scene units and turned 90° clockwise.
//!
//! The pipeline is split so the pure part can be used without a scene:
//!
//! - [`name_parser`] reads the rotation and footprint suffixes
//! - [`catalog`] finds the furniture type named inside the placeholder
//! - [`scale`] turns target and original footprints into X/Z scale factors
//! - [`resolver::resolve_placement`] combines the three
//! - [`placer::FurniturePlacer`] applies a placement to a live [`Scene`](crate::gfx::scene::Scene)

pub mod catalog;
pub mod name_parser;
pub mod placer;
pub mod resolver;
pub mod scale;

pub use catalog::{CatalogEntry, Footprint, FurnitureCatalog};
pub use name_parser::{PlacementName, TargetFootprint};
pub use placer::FurniturePlacer;
pub use resolver::{resolve_placement, Placement};
pub use scale::{compute_scale, FootprintScale};
