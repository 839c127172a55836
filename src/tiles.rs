//! Static name <-> id tables for ground tiles and props.
//!
//! Unknown names resolve to a safe default ("grass" for ground, "bush" for
//! props) instead of failing.

pub const OCEAN: u8 = 0;
pub const BEACH: u8 = 1;
pub const GRASS: u8 = 2;
pub const FOREST: u8 = 3;
pub const ROCK: u8 = 4;
pub const TAIGA: u8 = 5;
pub const DESERT: u8 = 6;
pub const RAINFOREST: u8 = 7;
pub const STEPPE: u8 = 8;
pub const WATER_SHALLOW: u8 = 9;
pub const WATER: u8 = 10;
pub const WATER_DEEP: u8 = 11;
pub const RIVER: u8 = 12;
pub const LAKE: u8 = 13;
pub const SNOW: u8 = 14;

const GROUND_TILES: &[(&str, u8)] = &[
    ("ocean", OCEAN),
    ("beach", BEACH),
    ("grass", GRASS),
    ("forest", FOREST),
    ("rock", ROCK),
    ("taiga", TAIGA),
    ("desert", DESERT),
    ("rainforest", RAINFOREST),
    ("steppe", STEPPE),
    ("water_shallow", WATER_SHALLOW),
    ("water", WATER),
    ("water_deep", WATER_DEEP),
    ("river", RIVER),
    ("lake", LAKE),
    ("snow", SNOW),
];

/// Prop id 0 is reserved for "no prop".
pub const NO_PROP: u16 = 0;

const PROPS: &[(&str, u16)] = &[
    ("tree", 10),
    ("rock", 11),
    ("bush", 12),
    ("cactus", 13),
    ("pine", 14),
    ("palm", 15),
    ("flower", 16),
    ("reed", 17),
    ("ice_rock", 18),
    ("ore_coal", 20),
    ("ore_iron", 21),
    ("ore_copper", 22),
    ("ore_gold", 23),
    ("crystal", 24),
];

const DEFAULT_GROUND: u8 = GRASS;
const DEFAULT_PROP: u16 = 12;

/// Ground tile id for a logical name, "grass" when unknown.
pub fn get_tile_id(name: &str) -> u8 {
    let name = name.trim();
    GROUND_TILES
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, id)| *id)
        .unwrap_or(DEFAULT_GROUND)
}

pub fn tile_name(id: u8) -> Option<&'static str> {
    GROUND_TILES.iter().find(|(_, i)| *i == id).map(|(n, _)| *n)
}

/// Prop id for a logical name, the default prop ("bush") when unknown.
pub fn get_prop_id(name: &str) -> u16 {
    let name = name.trim();
    PROPS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, id)| *id)
        .unwrap_or(DEFAULT_PROP)
}

pub fn prop_name(id: u16) -> Option<&'static str> {
    PROPS.iter().find(|(_, i)| *i == id).map(|(n, _)| *n)
}

/// Whether a prop id is an ore deposit
pub fn is_ore(id: u16) -> bool {
    prop_name(id).is_some_and(|name| name.starts_with("ore_") || name == "crystal")
}
