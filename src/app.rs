use crate::assembly::{AssemblyReport, FloorAssembler, ModelSwitch, PlayerRig};
use crate::config::AssemblyConfig;
use crate::gfx::resources::AssetSource;
use crate::gfx::scene::Scene;
use crate::layout::FurnitureCatalog;

/// Owns a scene together with everything needed to assemble and explore it
pub struct ReformaApp {
    scene: Scene,
    assets: Box<dyn AssetSource>,
    assembler: FloorAssembler,
    model_switch: ModelSwitch,
    player: PlayerRig,
}

impl ReformaApp {
    /// Create an application with the default configuration and furniture catalog
    pub fn new(assets: impl AssetSource + 'static) -> Self {
        Self {
            scene: Scene::new(),
            assets: Box::new(assets),
            assembler: FloorAssembler::default(),
            model_switch: ModelSwitch::new(),
            player: PlayerRig::default(),
        }
    }

    /// Replace configuration and catalog. Has no effect on an already loaded floor.
    pub fn with_config(mut self, config: AssemblyConfig, catalog: FurnitureCatalog) -> Self {
        self.assembler = FloorAssembler::new(config, catalog);
        self
    }

    pub fn with_player(mut self, player: PlayerRig) -> Self {
        self.player = player;
        self
    }

    pub fn load_floor(&mut self) -> Option<AssemblyReport> {
        self.assembler
            .load_floor(&mut self.scene, self.assets.as_ref(), &mut self.model_switch)
    }

    /// Toggle between the original and reformed plan
    pub fn switch_model(&mut self) -> Option<bool> {
        self.model_switch.toggle(&mut self.scene)
    }

    pub fn is_reformed(&self) -> bool {
        self.model_switch.is_reformed()
    }

    pub fn stand(&mut self) {
        self.player.stand(&mut self.scene);
    }

    pub fn sit(&mut self) {
        self.player.sit(&mut self.scene);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn config(&self) -> &AssemblyConfig {
        self.assembler.config()
    }
}
