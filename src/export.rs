use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::biome::Biome;
use crate::error::Result;
use crate::world::ChunkedWorld;

/// Region of the tile plane to render. `step` samples every n-th tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewRegion {
    pub x0: i64,
    pub y0: i64,
    /// Output size in pixels
    pub width: u32,
    pub height: u32,
    pub step: u32,
}

impl PreviewRegion {
    /// Whole planet downsampled to at most `max_width` pixels wide.
    pub fn whole_world(world: &ChunkedWorld, max_width: u32) -> Self {
        let max_width = max_width.max(1) as usize;
        let step = world.width().div_ceil(max_width).max(1);
        Self {
            x0: 0,
            y0: 0,
            width: world.width().div_ceil(step) as u32,
            height: world.height().div_ceil(step) as u32,
            step: step as u32,
        }
    }

    /// `size` x `size` tiles centered on a point, at full resolution.
    pub fn around(cx: usize, cy: usize, size: u32) -> Self {
        let half = size as i64 / 2;
        Self {
            x0: cx as i64 - half,
            y0: cy as i64 - half,
            width: size,
            height: size,
            step: 1,
        }
    }

    fn tile(&self, px: u32, py: u32) -> (i64, i64) {
        let step = self.step.max(1) as i64;
        (self.x0 + px as i64 * step, self.y0 + py as i64 * step)
    }
}

pub fn biome_color(biome: Biome) -> [u8; 3] {
    match biome {
        Biome::Ocean => [28, 60, 130],
        Biome::Lake => [50, 105, 175],
        Biome::River => [65, 130, 200],
        Biome::Coast => [222, 205, 150],
        Biome::Snow => [240, 244, 250],
        Biome::Tundra => [160, 165, 145],
        Biome::Taiga => [70, 105, 80],
        Biome::Desert => [225, 190, 120],
        Biome::Savanna => [190, 180, 90],
        Biome::Plains => [120, 175, 85],
        Biome::Forest => [45, 120, 55],
        Biome::Rainforest => [25, 90, 40],
    }
}

/// Export a biome map of a region; props are drawn as dark dots.
pub fn export_biome_png<P: AsRef<Path>>(world: &mut ChunkedWorld, region: PreviewRegion, path: P) -> Result<()> {
    let img = render_biome_image(world, region);
    img.save(path.as_ref())?;
    log::info!("Wrote biome preview {} ({}x{})", path.as_ref().display(), region.width, region.height);
    Ok(())
}

pub fn render_biome_image(world: &mut ChunkedWorld, region: PreviewRegion) -> RgbImage {
    let mut img: RgbImage = ImageBuffer::new(region.width, region.height);
    for py in 0..region.height {
        for px in 0..region.width {
            let (x, y) = region.tile(px, py);
            let mut color = biome_color(world.get_biome(x, y));
            if region.step == 1 && !world.get_overlay(x, y).is_empty() {
                color = color.map(|c| c / 2);
            }
            img.put_pixel(px, py, Rgb(color));
        }
    }
    img
}

/// Export heights of a region with a spectral colormap, water tinted blue.
pub fn export_height_png<P: AsRef<Path>>(world: &mut ChunkedWorld, region: PreviewRegion, path: P) -> Result<()> {
    let mut img: RgbImage = ImageBuffer::new(region.width, region.height);
    for py in 0..region.height {
        for px in 0..region.width {
            let (x, y) = region.tile(px, py);
            let h = world.get_height01(x, y).clamp(0.0, 1.0);
            let color = if world.get_is_water(x, y) {
                [0, (h * 120.0) as u8, (120.0 + h * 135.0) as u8]
            } else {
                spectral_colormap(h)
            };
            img.put_pixel(px, py, Rgb(color));
        }
    }
    img.save(path.as_ref())?;
    log::info!("Wrote height preview {} ({}x{})", path.as_ref().display(), region.width, region.height);
    Ok(())
}

/// Spectral colormap (matplotlib style): dark blue -> cyan -> green -> yellow -> orange -> red
fn spectral_colormap(t: f32) -> [u8; 3] {
    let colors: [[f32; 3]; 11] = [
        [0.37, 0.31, 0.64],
        [0.20, 0.53, 0.74],
        [0.40, 0.76, 0.65],
        [0.67, 0.87, 0.64],
        [0.90, 0.96, 0.60],
        [1.00, 1.00, 0.75],
        [1.00, 0.88, 0.55],
        [0.99, 0.68, 0.38],
        [0.96, 0.43, 0.26],
        [0.84, 0.24, 0.31],
        [0.62, 0.00, 0.26],
    ];

    let t_scaled = t * 10.0;
    let idx = (t_scaled as usize).min(9);
    let frac = t_scaled - idx as f32;

    let c1 = colors[idx];
    let c2 = colors[idx + 1];

    [
        ((c1[0] + (c2[0] - c1[0]) * frac) * 255.0) as u8,
        ((c1[1] + (c2[1] - c1[1]) * frac) * 255.0) as u8,
        ((c1[2] + (c2[2] - c1[2]) * frac) * 255.0) as u8,
    ]
}
