//! Fill-gradient textures for the dates.
//!
//! Each city gets one `StandardMaterial` whose base-color map is its
//! [`FillGradient`] rasterised into a small RGBA texture; all dates on that
//! city's frond share it.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use grove::config::GRADIENT_TEXTURE_SIZE;
use grove::fill_gradient::FillGradient;

const FRUIT_ROUGHNESS: f32 = 0.6;
const FRUIT_METALLIC: f32 = 0.15;

pub fn gradient_image(gradient: &FillGradient) -> Image {
    let size = GRADIENT_TEXTURE_SIZE;
    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        gradient.rgba_pixels(size),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

pub fn fruit_material(texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(texture),
        perceptual_roughness: FRUIT_ROUGHNESS,
        metallic: FRUIT_METALLIC,
        ..default()
    }
}
