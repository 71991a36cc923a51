use bevy::prelude::*;

use grove::city::Rgb8;
use grove::GroveSet;

pub mod camera;
pub mod cursor_icon;
pub mod frond_mesh;
pub mod fruit_material;
pub mod palm_scene;
pub mod picking;
pub mod sway_anim;

use camera::LeftClickDrag;

/// Page background behind the canvas.
const BACKGROUND: Color = Color::WHITE;
const GROUND_SIZE: f32 = 100.0;
/// Faint translucent ground; on the white page mostly the shadow shows.
const GROUND_COLOR: Color = Color::srgba(0.97, 0.96, 0.94, GROUND_OPACITY);
const GROUND_OPACITY: f32 = 0.4;

/// Hemisphere light colours; Bevy has no hemisphere light, so they are
/// blended into the ambient term.
const SKY_TINT: Rgb8 = Rgb8::new(0xb3, 0xe6, 0xff);
const GROUND_TINT: Rgb8 = Rgb8::new(0xe2, 0xc2, 0x90);
const RIM_LIGHT: Rgb8 = Rgb8::new(0xfd, 0xb8, 0x13);

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LeftClickDrag>()
            .insert_resource(ClearColor(BACKGROUND))
            .add_systems(
                Startup,
                (camera::setup_camera, setup_lighting, setup_ground),
            )
            .add_systems(
                Update,
                (
                    camera::camera_left_drag,
                    camera::camera_rotate_keyboard,
                    camera::apply_orbit_camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (picking::update_fruit_hover, picking::pick_fruit_on_click)
                    .chain()
                    .after(camera::camera_left_drag)
                    .before(GroveSet),
            )
            .add_systems(
                Update,
                (
                    palm_scene::sync_palm_scene,
                    sway_anim::animate_tree,
                    sway_anim::animate_fronds,
                    sway_anim::animate_fruit,
                    cursor_icon::apply_cursor_icon,
                )
                    .after(GroveSet),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light doubles as the sky/ground hemisphere fill
    commands.insert_resource(AmbientLight {
        color: SKY_TINT.lerp(GROUND_TINT, 0.5).to_color(),
        brightness: 400.0,
    });

    // Sun, casting the tree's shadow onto the ground plane
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 30.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Warm rim light from behind for depth
    commands.spawn((
        DirectionalLight {
            color: RIM_LIGHT.to_color(),
            illuminance: 6_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-5.0, 15.0, -10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn setup_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(ground_material())),
        Transform::from_translation(palm_scene::TREE_OFFSET),
    ));
}

pub fn ground_material() -> StandardMaterial {
    StandardMaterial {
        base_color: GROUND_COLOR,
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 1.0,
        ..default()
    }
}
