//! Walkthrough demo
//!
//! Assembles a two-room flat from an in-memory asset library, prints what the
//! assembler did, then flips to the reformed plan and seats the player.
//!
//! Run with `RUST_LOG=info cargo run --example walkthrough`.

use reforma::assembly::PlayerRig;
use reforma::prelude::*;

fn flat(name: &str, furniture: &[&str]) -> PrefabNode {
    let mut living_room = PrefabNode::new("Salon").at(0.0, 0.0, 0.0);
    for (i, placeholder) in furniture.iter().enumerate() {
        let child = PrefabNode::new(*placeholder).at(1.0 + i as f32, 0.0, 1.5);
        living_room = living_room.with_child(child);
    }

    PrefabNode::new(name)
        .with_child(PrefabNode::new("00_A_MUROS").with_renderer())
        .with_child(PrefabNode::new("PUERTA_entrada").with_renderer().at(0.0, 0.0, 3.0))
        .with_child(PrefabNode::new("00_A_PUERTA_marco").with_renderer().at(0.0, 0.0, 3.0))
        .with_child(PrefabNode::new("FLOOR_LOWER").with_renderer())
        .with_child(PrefabNode::new("FLOOR_UPPER").with_renderer())
        .with_child(PrefabNode::new("Luz_salon").at(2.0, 0.0, 2.0))
        .with_child(living_room)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AssemblyConfig::default();
    let mut assets = AssetLibrary::new();
    assets
        .insert_prefab("original", flat("original", &["SofaEsquina_90R", "MesaRedonda_1.2L_1.2A"]))
        .insert_prefab(
            "reformed",
            flat("reformed", &["SofaIntermedio_1.0L_2.0A_270R", "MesaRectangular_1.6L_0.9A"]),
        )
        .insert_prefab(&config.lighting.lamp_prefab, PrefabNode::new("lamp"));
    for entry in FurnitureCatalog::standard().entries() {
        let mesh = PrefabNode::new(entry.key.as_str()).with_renderer();
        assets.insert_prefab(&entry.asset_path, mesh);
    }
    for path in [
        &config.materials.wall,
        &config.materials.door,
        &config.materials.door_frame,
        &config.materials.floor,
        &config.materials.ceiling,
    ] {
        assets.insert_material(path, Material::default());
    }

    let mut app = ReformaApp::new(assets);
    let report = app
        .load_floor()
        .ok_or_else(|| anyhow::anyhow!("floor was already loaded"))?;

    println!(
        "Placed {} furniture items and {} lamps ({} nodes skipped)",
        report.furniture.len(),
        report.lights.len(),
        report.skipped.len()
    );
    for id in &report.furniture {
        let object = app
            .scene()
            .object(*id)
            .ok_or(SceneError::NodeNotFound(*id))?;
        let t = &object.transform;
        println!(
            "  {:<24} yaw {:>7.1}  scale ({:.3}, {:.3}, {:.3})",
            object.name, t.euler_degrees.y, t.scale.x, t.scale.y, t.scale.z
        );
    }
    if let Some(floor) = app.scene().find_by_name("FLOOR_LOWER") {
        let scene = app.scene();
        let material_id = scene.object(floor).and_then(|obj| obj.material_id());
        let manager = &scene.material_manager;
        let material = manager.get_material_for_object(material_id);
        println!("  floor material: {} {:?}", material.name, material.base_color);
    }
    for skipped in &report.skipped {
        println!("  skipped {}: {}", skipped.name, skipped.reason);
    }

    app.switch_model();
    println!("Showing reformed plan: {}", app.is_reformed());

    let scene = app.scene_mut();
    let origin = scene.add_object("XR Origin", None);
    let camera = scene.add_object("Main Camera", Some(origin));
    let wheelchair = scene.add_object("WheelChair", Some(origin));
    let mut app = app.with_player(PlayerRig::new(Some(origin), Some(camera), Some(wheelchair)));
    app.sit();

    println!("{:?}", app.scene().get_statistics());
    Ok(())
}
