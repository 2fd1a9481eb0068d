//! Standing and seated (wheelchair) player postures
//!
//! A posture adjusts the player's capsule collider and eye height, and shows or
//! hides the wheelchair model. Rig nodes that were never assigned are skipped.

use cgmath::Vector3;
use log::debug;

use crate::gfx::scene::{Component, ComponentKind, NodeId, Scene};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posture {
    pub capsule_height: f32,
    pub capsule_center: Vector3<f32>,
    /// Local Y of the camera node
    pub eye_height: f32,
    pub wheelchair_visible: bool,
}

impl Posture {
    pub fn standing() -> Self {
        Self {
            capsule_height: 1.75,
            capsule_center: Vector3::new(0.0, 0.875, 0.0),
            eye_height: 1.6,
            wheelchair_visible: false,
        }
    }

    pub fn seated() -> Self {
        Self {
            capsule_height: 1.2,
            capsule_center: Vector3::new(0.0, 0.6, 0.0),
            eye_height: 1.1,
            wheelchair_visible: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerRig {
    pub capsule: Option<NodeId>,
    pub camera: Option<NodeId>,
    pub wheelchair: Option<NodeId>,
    pub standing: Posture,
    pub seated: Posture,
}

impl Default for PlayerRig {
    fn default() -> Self {
        Self {
            capsule: None,
            camera: None,
            wheelchair: None,
            standing: Posture::standing(),
            seated: Posture::seated(),
        }
    }
}

impl PlayerRig {
    pub fn new(
        capsule: Option<NodeId>,
        camera: Option<NodeId>,
        wheelchair: Option<NodeId>,
    ) -> Self {
        Self {
            capsule,
            camera,
            wheelchair,
            ..Self::default()
        }
    }

    pub fn stand(&self, scene: &mut Scene) {
        self.apply(scene, self.standing);
    }

    pub fn sit(&self, scene: &mut Scene) {
        self.apply(scene, self.seated);
    }

    pub fn apply(&self, scene: &mut Scene, posture: Posture) {
        if let Some(capsule) = self.capsule {
            if let Some(object) = scene.object_mut(capsule) {
                object.add_component(Component::CapsuleCollider {
                    height: posture.capsule_height,
                    center: posture.capsule_center,
                });
            }
        }

        if let Some(camera) = self.camera {
            if let Some(object) = scene.object_mut(camera) {
                object.transform.position.y = posture.eye_height;
            }
        }

        if let Some(wheelchair) = self.wheelchair {
            let _ = scene.set_active(wheelchair, posture.wheelchair_visible);
        }

        debug!("Player posture set to eye height {}", posture.eye_height);
    }

    /// Current capsule height, if the rig has a capsule collider
    pub fn capsule_height(&self, scene: &Scene) -> Option<f32> {
        let capsule = scene.object(self.capsule?)?;
        match capsule.component(ComponentKind::CapsuleCollider) {
            Some(Component::CapsuleCollider { height, .. }) => Some(*height),
            _ => None,
        }
    }
}
