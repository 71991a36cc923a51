//! Spawns the palm from [`PalmLayout`].
//!
//! Entity hierarchy (all groups carry `Visibility` so children inherit it):
//!
//! ```text
//! PalmTree                  ground offset + scale, slow yaw
//! ├── trunk segments / rings
//! ├── crown sphere
//! └── crown group           at the trunk top
//!     └── FrondGroup(i)     per-city sway
//!         ├── stem tube
//!         ├── leaflets
//!         ├── DateFruit(i, k)
//!         └── FrondLabelAnchor(i)
//! ```
//!
//! The whole tree is despawned and rebuilt whenever the layout resource
//! changes (new roster or seed); otherwise it is left alone.

use bevy::prelude::*;

use grove::config::*;
use grove::frond_layout::FrondLayout;
use grove::palm_layout::PalmLayout;
use grove::sway::fruit_scale;

use crate::frond_mesh::build_stem_mesh;
use crate::fruit_material::{fruit_material, gradient_image};

/// Where the tree stands and how big it is, in scene units.
pub const TREE_OFFSET: Vec3 = Vec3::new(0.0, -5.0, 0.0);
pub const TREE_SCALE: f32 = 0.9;

const TRUNK_RESOLUTION: u32 = 18;
const RING_MINOR_RESOLUTION: usize = 12;
const RING_MAJOR_RESOLUTION: usize = 24;

// =============================================================================
// Components
// =============================================================================

#[derive(Component)]
pub struct PalmTree;

#[derive(Component, Debug, Clone, Copy)]
pub struct FrondGroup {
    pub branch: usize,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFruit {
    pub city: usize,
    pub date: usize,
}

/// Empty entity marking where a frond's name label should be drawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct FrondLabelAnchor {
    pub city: usize,
}

// =============================================================================
// Shared handles
// =============================================================================

struct FrondHandles {
    leaflet_mesh: Handle<Mesh>,
    fruit_mesh: Handle<Mesh>,
    stem_material: Handle<StandardMaterial>,
    inner_leaflet: Handle<StandardMaterial>,
    outer_leaflet: Handle<StandardMaterial>,
}

fn leaflet_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        perceptual_roughness: 0.9,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn sync_palm_scene(
    mut commands: Commands,
    layout: Res<PalmLayout>,
    existing: Query<Entity, With<PalmTree>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    if !layout.is_changed() {
        return;
    }
    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }
    if layout.fronds.is_empty() {
        return;
    }

    let trunk_material = materials.add(StandardMaterial {
        base_color: TRUNK_COLOR.to_color(),
        perceptual_roughness: 0.7,
        metallic: 0.1,
        ..default()
    });
    let ring_material = materials.add(StandardMaterial {
        base_color: TRUNK_RING_COLOR.to_color(),
        perceptual_roughness: 0.5,
        metallic: 0.2,
        ..default()
    });
    let stem_material = materials.add(StandardMaterial {
        base_color: STEM_COLOR.to_color(),
        perceptual_roughness: 1.0,
        ..default()
    });

    let handles = FrondHandles {
        leaflet_mesh: meshes.add(Rectangle::new(1.0, 1.0)),
        fruit_mesh: meshes.add(Sphere::new(FRUIT_RADIUS).mesh().uv(8, 8)),
        stem_material: stem_material.clone(),
        inner_leaflet: materials.add(leaflet_material(LEAFLET_INNER_GREEN.to_color())),
        outer_leaflet: materials.add(leaflet_material(LEAFLET_OUTER_GREEN.to_color())),
    };
    let crown_mesh = meshes.add(Sphere::new(CROWN_RADIUS).mesh().uv(16, 12));

    let segment_meshes: Vec<(Handle<Mesh>, Vec3)> = layout
        .trunk
        .segments
        .iter()
        .map(|s| {
            let frustum = ConicalFrustum {
                radius_top: s.radius_top,
                radius_bottom: s.radius_bottom,
                height: s.height,
            };
            (
                meshes.add(frustum.mesh().resolution(TRUNK_RESOLUTION)),
                s.center,
            )
        })
        .collect();
    let ring_meshes: Vec<(Handle<Mesh>, Vec3)> = layout
        .trunk
        .rings
        .iter()
        .map(|r| {
            let torus = Torus {
                minor_radius: r.minor_radius,
                major_radius: r.major_radius,
            };
            let mesh = torus
                .mesh()
                .minor_resolution(RING_MINOR_RESOLUTION)
                .major_resolution(RING_MAJOR_RESOLUTION);
            (meshes.add(mesh), r.center)
        })
        .collect();

    // Per-frond assets: spine tube and the city's fill-gradient material.
    let frond_assets: Vec<(Handle<Mesh>, Handle<StandardMaterial>)> = layout
        .fronds
        .iter()
        .map(|frond| {
            let stem = meshes.add(build_stem_mesh(
                &frond.curve,
                STEM_TUBE_SEGMENTS,
                STEM_TUBE_SIDES,
                STEM_TUBE_RADIUS,
            ));
            let texture = images.add(gradient_image(&frond.fill));
            (stem, materials.add(fruit_material(texture)))
        })
        .collect();

    let crown = layout.trunk.crown();

    commands
        .spawn((
            PalmTree,
            Transform::from_translation(TREE_OFFSET).with_scale(Vec3::splat(TREE_SCALE)),
            Visibility::default(),
        ))
        .with_children(|tree| {
            for (mesh, center) in segment_meshes {
                tree.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(trunk_material.clone()),
                    Transform::from_translation(center),
                ));
            }
            for (mesh, center) in ring_meshes {
                tree.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(ring_material.clone()),
                    Transform::from_translation(center),
                ));
            }
            tree.spawn((
                Mesh3d(crown_mesh),
                MeshMaterial3d(stem_material),
                Transform::from_translation(crown),
            ));

            tree.spawn((Transform::from_translation(crown), Visibility::default()))
                .with_children(|crown_group| {
                    for (frond, (stem, fruit_mat)) in layout.fronds.iter().zip(frond_assets) {
                        spawn_frond(crown_group, frond, &handles, stem, fruit_mat);
                    }
                });
        });

    info!("Spawned palm with {} fronds", layout.fronds.len());
}

fn spawn_frond(
    parent: &mut ChildBuilder,
    frond: &FrondLayout,
    handles: &FrondHandles,
    stem: Handle<Mesh>,
    fruit_mat: Handle<StandardMaterial>,
) {
    let branch = frond.branch_index;
    parent
        .spawn((FrondGroup { branch }, Transform::default(), Visibility::default()))
        .with_children(|group| {
            group.spawn((
                Mesh3d(stem),
                MeshMaterial3d(handles.stem_material.clone()),
                Transform::default(),
            ));

            for leaflet in &frond.leaflets {
                let material = if leaflet.color == LEAFLET_INNER_GREEN {
                    handles.inner_leaflet.clone()
                } else {
                    handles.outer_leaflet.clone()
                };
                group.spawn((
                    Mesh3d(handles.leaflet_mesh.clone()),
                    MeshMaterial3d(material),
                    Transform {
                        translation: leaflet.position,
                        rotation: leaflet.rotation(),
                        scale: Vec3::new(leaflet.width, leaflet.height, 1.0),
                    },
                ));
            }

            for fruit in &frond.fruit {
                group.spawn((
                    DateFruit {
                        city: branch,
                        date: fruit.date_index,
                    },
                    Mesh3d(handles.fruit_mesh.clone()),
                    MeshMaterial3d(fruit_mat.clone()),
                    Transform::from_translation(fruit.position).with_scale(fruit_scale(false)),
                ));
            }

            group.spawn((
                FrondLabelAnchor { city: branch },
                Transform::from_translation(frond.label_anchor),
                Visibility::default(),
            ));
        });
}
