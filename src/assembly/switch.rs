use log::{error, info, warn};

use crate::config::AssemblyConfig;
use crate::gfx::scene::{NodeId, Scene};

/// Shows either the original or the reformed floor plan, never both
#[derive(Debug, Default, Clone)]
pub struct ModelSwitch {
    original: Option<NodeId>,
    reformed: Option<NodeId>,
    reform: bool,
}

impl ModelSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locates both base instances by name and hides the reformed one
    ///
    /// Returns `false` when either instance is missing; the switch stays unusable
    /// until a later call finds both.
    pub fn find_instances(&mut self, scene: &mut Scene, config: &AssemblyConfig) -> bool {
        self.original = scene.find_by_name(&config.instance_name(false));
        self.reformed = scene.find_by_name(&config.instance_name(true));
        self.reform = false;

        match (self.original, self.reformed) {
            (Some(_), Some(reformed)) => {
                // Both ids were just found in this scene
                let _ = scene.set_active(reformed, false);
                info!("Model switch initialized");
                true
            }
            _ => {
                error!("One or both floor instances not found by name");
                false
            }
        }
    }

    /// Flips between the two plans. Returns the new state (`true` = reformed).
    pub fn toggle(&mut self, scene: &mut Scene) -> Option<bool> {
        let (Some(original), Some(reformed)) = (self.original, self.reformed) else {
            warn!("Cannot switch: floor instances not found");
            return None;
        };

        let reform = !self.reform;
        if scene.set_active(original, !reform).is_err()
            || scene.set_active(reformed, reform).is_err()
        {
            warn!("Cannot switch: floor instances no longer exist");
            return None;
        }

        self.reform = reform;
        Some(reform)
    }

    pub fn is_reformed(&self) -> bool {
        self.reform
    }

    pub fn is_ready(&self) -> bool {
        self.original.is_some() && self.reformed.is_some()
    }
}
