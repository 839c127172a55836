//! ASCII rendering of world regions
//!
//! Renders a window of the tile plane as text, one character per sampled tile.

use crate::biome::Biome;
use crate::world::ChunkedWorld;

/// ASCII rendering modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AsciiMode {
    /// Show biome characters, with props and the spawn marked
    #[default]
    Biome,
    /// Show elevation gradient
    Height,
    /// Show vertical level digits
    Level,
    /// Show temperature gradient
    Temperature,
    /// Show moisture gradient
    Moisture,
}

impl AsciiMode {
    pub fn name(&self) -> &'static str {
        match self {
            AsciiMode::Biome => "Biome",
            AsciiMode::Height => "Height",
            AsciiMode::Level => "Level",
            AsciiMode::Temperature => "Temperature",
            AsciiMode::Moisture => "Moisture",
        }
    }

    pub fn all() -> &'static [AsciiMode] {
        &[
            AsciiMode::Biome,
            AsciiMode::Height,
            AsciiMode::Level,
            AsciiMode::Temperature,
            AsciiMode::Moisture,
        ]
    }

    pub fn from_name(name: &str) -> Option<AsciiMode> {
        AsciiMode::all().iter().copied().find(|m| m.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Get ASCII character for a biome
pub fn biome_char(biome: Biome) -> char {
    match biome {
        Biome::Ocean => '~',
        Biome::Lake => 'o',
        Biome::River => '=',
        Biome::Coast => '.',
        Biome::Snow => '*',
        Biome::Tundra => ':',
        Biome::Taiga => 'T',
        Biome::Desert => 'd',
        Biome::Savanna => ';',
        Biome::Plains => ',',
        Biome::Forest => 'f',
        Biome::Rainforest => 'F',
    }
}

const GRADIENT: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

fn gradient_char(t: f32) -> char {
    let idx = ((t.clamp(0.0, 1.0) * (GRADIENT.len() - 1) as f32).round() as usize).min(GRADIENT.len() - 1);
    GRADIENT[idx]
}

/// Render `width` x `height` characters starting at (x0, y0), sampling every `step` tiles.
pub fn render_ascii(
    world: &mut ChunkedWorld,
    x0: i64,
    y0: i64,
    width: usize,
    height: usize,
    step: usize,
    mode: AsciiMode,
) -> String {
    let step = step.max(1) as i64;
    let spawn = world.spawn();
    let mut out = String::with_capacity((width + 1) * height);

    for row in 0..height as i64 {
        for col in 0..width as i64 {
            let (x, y) = (x0 + col * step, y0 + row * step);
            let c = match mode {
                AsciiMode::Biome => {
                    if world.wrap(x, y) == spawn {
                        '@'
                    } else if step == 1 && !world.get_overlay(x, y).is_empty() {
                        '^'
                    } else {
                        biome_char(world.get_biome(x, y))
                    }
                }
                AsciiMode::Height => gradient_char(world.get_height01(x, y)),
                AsciiMode::Level => char::from_digit(world.get_level(x, y) as u32, 36).unwrap_or('?'),
                AsciiMode::Temperature => gradient_char(world.get_temp01(x, y)),
                AsciiMode::Moisture => gradient_char(world.get_moisture01(x, y)),
            };
            out.push(c);
        }
        out.push('\n');
    }

    out
}
