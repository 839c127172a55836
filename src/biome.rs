//! Biome classification from water class, temperature and moisture.

use serde::{Deserialize, Serialize};

use crate::tiles;

// Temperature thresholds (0 = polar, 1 = equatorial)
const SNOW_MAX_TEMP: f64 = 0.18;
const COLD_MAX_TEMP: f64 = 0.32;
const DESERT_MIN_TEMP: f64 = 0.6;
const SAVANNA_MIN_TEMP: f64 = 0.65;
const RAINFOREST_MIN_TEMP: f64 = 0.6;

// Moisture thresholds
const TAIGA_MIN_MOISTURE: f64 = 0.45;
const ARID_MAX_MOISTURE: f64 = 0.25;
const DRY_MAX_MOISTURE: f64 = 0.45;
const FOREST_MAX_MOISTURE: f64 = 0.7;

/// Ground biome with a stable numeric id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Biome {
    Plains = 0,
    Ocean = 1,
    Coast = 2,
    Lake = 3,
    River = 4,
    Snow = 5,
    Tundra = 6,
    Taiga = 7,
    Desert = 8,
    Savanna = 9,
    Forest = 10,
    Rainforest = 11,
}

impl Biome {
    pub fn all() -> &'static [Biome] {
        &[
            Biome::Plains,
            Biome::Ocean,
            Biome::Coast,
            Biome::Lake,
            Biome::River,
            Biome::Snow,
            Biome::Tundra,
            Biome::Taiga,
            Biome::Desert,
            Biome::Savanna,
            Biome::Forest,
            Biome::Rainforest,
        ]
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Biome> {
        Biome::all().get(id as usize).copied()
    }

    pub fn is_water(self) -> bool {
        matches!(self, Biome::Ocean | Biome::Lake | Biome::River)
    }

    pub fn name(self) -> &'static str {
        match self {
            Biome::Plains => "plains",
            Biome::Ocean => "ocean",
            Biome::Coast => "coast",
            Biome::Lake => "lake",
            Biome::River => "river",
            Biome::Snow => "snow",
            Biome::Tundra => "tundra",
            Biome::Taiga => "taiga",
            Biome::Desert => "desert",
            Biome::Savanna => "savanna",
            Biome::Forest => "forest",
            Biome::Rainforest => "rainforest",
        }
    }

    /// Ground tile id for this biome.
    ///
    /// `depth` is how far below local sea level an ocean tile sits; `peak`
    /// marks land at the top vertical level.
    pub fn ground_id(self, depth: f64, peak: bool) -> u8 {
        let name = match self {
            Biome::Ocean if depth > 0.12 => "water_deep",
            Biome::Ocean if depth > 0.04 => "water",
            Biome::Ocean => "water_shallow",
            Biome::Lake => "lake",
            Biome::River => "river",
            Biome::Coast => "beach",
            Biome::Snow => "snow",
            _ if peak => "rock",
            Biome::Tundra | Biome::Savanna => "steppe",
            Biome::Taiga => "taiga",
            Biome::Desert => "desert",
            Biome::Plains => "grass",
            Biome::Forest => "forest",
            Biome::Rainforest => "rainforest",
        };
        tiles::get_tile_id(name)
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Water classification of one tile, computed before the biome table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaterClass {
    Ocean,
    Lake,
    River,
    Coast,
    Land,
}

/// Fixed decision table: water class first, then temperature/moisture for land.
pub fn classify(water: WaterClass, temperature: f64, moisture: f64) -> Biome {
    match water {
        WaterClass::Ocean => Biome::Ocean,
        WaterClass::Lake => Biome::Lake,
        WaterClass::River => Biome::River,
        WaterClass::Coast => Biome::Coast,
        WaterClass::Land => classify_land(temperature, moisture),
    }
}

fn classify_land(temperature: f64, moisture: f64) -> Biome {
    match (temperature, moisture) {
        (t, _) if t < SNOW_MAX_TEMP => Biome::Snow,
        (t, m) if t < COLD_MAX_TEMP => {
            if m > TAIGA_MIN_MOISTURE { Biome::Taiga } else { Biome::Tundra }
        }
        (t, m) if m < ARID_MAX_MOISTURE => {
            if t >= DESERT_MIN_TEMP { Biome::Desert } else { Biome::Plains }
        }
        (t, m) if m < DRY_MAX_MOISTURE => {
            if t >= SAVANNA_MIN_TEMP { Biome::Savanna } else { Biome::Plains }
        }
        (_, m) if m < FOREST_MAX_MOISTURE => Biome::Forest,
        (t, _) => {
            if t >= RAINFOREST_MIN_TEMP { Biome::Rainforest } else { Biome::Forest }
        }
    }
}
