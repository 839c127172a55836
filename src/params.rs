//! World parameters: the configuration record a planet is generated from.
//!
//! Every qualitative field is a label with a documented fallback. Unknown,
//! missing or mistyped values never fail, they take the default ("medium",
//! "temperate", "normal" atmosphere). Legacy numeric values are bucketed onto
//! the same scales. Both English and French menu labels are accepted.

use std::fs;
use std::path::Path;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, WorldGenError};

/// Default location of the preset document.
pub const DEFAULT_PRESETS_PATH: &str = "data/world_presets.json";

/// Lowercase, trim, fold accents and separators so labels compare loosely.
pub(crate) fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'à' | 'â' | 'ä' => 'a',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            ' ' | '-' => '_',
            other => other,
        })
        .collect()
}

// =============================================================================
// QUALITATIVE LEVELS
// =============================================================================

/// Five-step qualitative knob (resource density, biodiversity, gravity, ...)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum Level {
    VeryLow,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl Level {
    pub fn all() -> &'static [Level] {
        &[Level::VeryLow, Level::Low, Level::Medium, Level::High, Level::VeryHigh]
    }

    /// Parse a label; anything unrecognized is `Medium`.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "very_low" | "none" | "tres_faible" | "minimal" | "nulle" => Level::VeryLow,
            "low" | "faible" | "sparse" | "eparse" | "rare" | "weak" | "poor" | "pauvre" | "stable" | "calm"
            | "calme" => Level::Low,
            "medium" | "normal" | "normale" | "moyen" | "moyenne" | "average" | "variable" => Level::Medium,
            "high" | "eleve" | "elevee" | "abundant" | "abondante" | "abondant" | "strong" | "forte" | "fort"
            | "unstable" | "instable" | "fissure" | "cracked" => Level::High,
            "very_high" | "tres_eleve" | "tres_elevee" | "extreme" | "rich" | "riche" | "chaotic" | "chaotique" => {
                Level::VeryHigh
            }
            _ => Level::Medium,
        }
    }

    /// Parse a label on a stability scale, where "stable" is the high end.
    ///
    /// Used by `dimensional_stability`; other labels parse as [`Level::from_label`].
    pub fn from_stability_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "stable" | "solid" | "solide" => Level::High,
            "fissure" | "cracked" => Level::Low,
            "instable" | "unstable" | "chaotic" | "chaotique" => Level::VeryLow,
            _ => Level::from_label(label),
        }
    }

    /// Bucket a legacy multiplier (about 0.5 to 2.0, 1.0 is medium).
    pub fn from_multiplier(value: f64) -> Self {
        if !value.is_finite() {
            Level::Medium
        } else if value < 0.65 {
            Level::VeryLow
        } else if value < 0.9 {
            Level::Low
        } else if value < 1.25 {
            Level::Medium
        } else if value < 1.75 {
            Level::High
        } else {
            Level::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Level::VeryLow => "very_low",
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
            Level::VeryHigh => "very_high",
        }
    }

    /// Position on the scale, -2 (very low) to +2 (very high)
    pub fn step(&self) -> i32 {
        match self {
            Level::VeryLow => -2,
            Level::Low => -1,
            Level::Medium => 0,
            Level::High => 1,
            Level::VeryHigh => 2,
        }
    }

    /// Pick the value matching this level from a five-entry table.
    pub fn pick<T: Copy>(&self, table: [T; 5]) -> T {
        table[(self.step() + 2) as usize]
    }
}

impl From<String> for Level {
    fn from(label: String) -> Self {
        Level::from_label(&label)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match Option::<RawNumberOrLabel>::deserialize(deserializer)? {
            Some(RawNumberOrLabel::Number(value)) => Level::from_multiplier(value),
            Some(RawNumberOrLabel::Text(text)) => match text.trim().parse::<f64>() {
                Ok(value) => Level::from_multiplier(value),
                Err(_) => Level::from_label(&text),
            },
            _ => Level::Medium,
        })
    }
}

fn de_stability<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Level, D::Error> {
    Ok(match Option::<RawNumberOrLabel>::deserialize(deserializer)? {
        Some(RawNumberOrLabel::Number(value)) => Level::from_multiplier(value),
        Some(RawNumberOrLabel::Text(text)) => Level::from_stability_label(&text),
        _ => Level::Medium,
    })
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.label().to_string()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// CLIMATE
// =============================================================================

/// Global climate label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum Climate {
    Cold,
    #[default]
    Temperate,
    Hot,
    /// Hot and dry
    Arid,
    /// Hot and wet
    Tropical,
}

impl Climate {
    pub fn all() -> &'static [Climate] {
        &[Climate::Cold, Climate::Temperate, Climate::Hot, Climate::Arid, Climate::Tropical]
    }

    /// Parse a label; anything unrecognized is `Temperate`.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "cold" | "froid" | "frozen" | "polar" | "glacial" | "glaciaire" | "icy" => Climate::Cold,
            "temperate" | "tempere" | "mild" => Climate::Temperate,
            "hot" | "chaud" | "warm" | "ardent" | "scorching" => Climate::Hot,
            "arid" | "aride" | "dry" | "sec" => Climate::Arid,
            "tropical" | "humid" | "humide" => Climate::Tropical,
            _ => Climate::Temperate,
        }
    }

    /// Bucket a normalized temperature in [0, 1].
    pub fn from_temperature01(value: f64) -> Self {
        if !value.is_finite() {
            Climate::Temperate
        } else if value < 0.33 {
            Climate::Cold
        } else if value < 0.67 {
            Climate::Temperate
        } else {
            Climate::Hot
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Climate::Cold => "cold",
            Climate::Temperate => "temperate",
            Climate::Hot => "hot",
            Climate::Arid => "arid",
            Climate::Tropical => "tropical",
        }
    }
}

impl From<String> for Climate {
    fn from(label: String) -> Self {
        Climate::from_label(&label)
    }
}

impl From<Climate> for String {
    fn from(climate: Climate) -> Self {
        climate.label().to_string()
    }
}

impl<'de> Deserialize<'de> for Climate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(match Option::<RawNumberOrLabel>::deserialize(deserializer)? {
            Some(RawNumberOrLabel::Number(value)) => Climate::from_temperature01(value),
            Some(RawNumberOrLabel::Text(text)) => Climate::from_label(&text),
            _ => Climate::Temperate,
        })
    }
}

// =============================================================================
// SEED AND SIZE
// =============================================================================

/// Base seed: a fixed integer, or the "random" sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum WorldSeed {
    Fixed(u64),
    #[default]
    Random,
}

impl WorldSeed {
    pub fn fixed(&self) -> Option<u64> {
        match self {
            WorldSeed::Fixed(seed) => Some(*seed),
            WorldSeed::Random => None,
        }
    }
}

impl From<Option<u64>> for WorldSeed {
    fn from(seed: Option<u64>) -> Self {
        seed.map(WorldSeed::Fixed).unwrap_or(WorldSeed::Random)
    }
}

impl std::fmt::Display for WorldSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorldSeed::Fixed(seed) => write!(f, "{}", seed),
            WorldSeed::Random => write!(f, "random"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeed {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Serialize for WorldSeed {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            WorldSeed::Fixed(seed) => serializer.serialize_u64(*seed),
            WorldSeed::Random => serializer.serialize_str("random"),
        }
    }
}

impl<'de> Deserialize<'de> for WorldSeed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Option::<RawSeed>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawSeed::Unsigned(seed)) => WorldSeed::Fixed(seed),
            Some(RawSeed::Signed(seed)) => WorldSeed::Fixed(seed as u64),
            Some(RawSeed::Float(seed)) if seed.is_finite() && seed >= 0.0 => WorldSeed::Fixed(seed as u64),
            Some(RawSeed::Text(text)) => text.trim().parse::<u64>().map(WorldSeed::Fixed).unwrap_or(WorldSeed::Random),
            _ => WorldSeed::Random,
        })
    }
}

/// Symbolic planet size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SizeLabel {
    Small,
    #[default]
    Medium,
    Large,
    Huge,
}

impl SizeLabel {
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "small" | "petit" | "petite" | "tiny" => SizeLabel::Small,
            "medium" | "moyen" | "moyenne" | "normal" | "normale" => SizeLabel::Medium,
            "large" | "grand" | "grande" | "big" => SizeLabel::Large,
            "huge" | "immense" | "gigantic" | "gigantesque" | "enorme" => SizeLabel::Huge,
            _ => SizeLabel::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeLabel::Small => "small",
            SizeLabel::Medium => "medium",
            SizeLabel::Large => "large",
            SizeLabel::Huge => "huge",
        }
    }

    /// Equatorial circumference in km for this label
    pub fn circumference_km(&self) -> u32 {
        match self {
            SizeLabel::Small => 20_000,
            SizeLabel::Medium => 40_000,
            SizeLabel::Large => 50_000,
            SizeLabel::Huge => 60_000,
        }
    }
}

/// Planet size: symbolic label or circumference in km
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetSize {
    Label(SizeLabel),
    Km(u32),
}

impl Default for PlanetSize {
    fn default() -> Self {
        PlanetSize::Km(40_000)
    }
}

impl PlanetSize {
    pub fn circumference_km(&self) -> u32 {
        match self {
            PlanetSize::Label(label) => label.circumference_km(),
            PlanetSize::Km(km) => *km,
        }
    }
}

impl std::fmt::Display for PlanetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanetSize::Label(label) => write!(f, "{}", label.label()),
            PlanetSize::Km(km) => write!(f, "{}km", km),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSize {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Serialize for PlanetSize {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PlanetSize::Label(label) => serializer.serialize_str(label.label()),
            PlanetSize::Km(km) => serializer.serialize_u32(*km),
        }
    }
}

impl<'de> Deserialize<'de> for PlanetSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Option::<RawSize>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawSize::Number(km)) if km.is_finite() && km >= 1.0 => PlanetSize::Km(km as u32),
            Some(RawSize::Text(text)) => match text.trim().trim_end_matches("km").trim().parse::<u32>() {
                Ok(km) if km > 0 => PlanetSize::Km(km),
                _ => PlanetSize::Label(SizeLabel::from_label(&text)),
            },
            _ => PlanetSize::default(),
        })
    }
}

// =============================================================================
// ATMOSPHERE
// =============================================================================

/// Map an atmosphere label to a density; unknown labels are "normal" (1.0).
pub fn atmosphere_density_from_label(label: &str) -> f32 {
    match normalize_label(label).as_str() {
        "none" | "aucune" | "vacuum" => 0.0,
        "thin" | "fine" | "faible" | "low" => 0.6,
        "normal" | "normale" | "medium" | "earth" => 1.0,
        "dense" | "thick" | "epaisse" | "high" => 1.4,
        "crushing" | "ecrasante" | "very_high" => 1.8,
        _ => 1.0,
    }
}

/// Map a water coverage label to an ocean percentage; unknown labels are 50.
pub fn ocean_pct_from_label(label: &str) -> u8 {
    match normalize_label(label).as_str() {
        "aride" | "arid" | "dry" | "sec" => 25,
        "tempere" | "temperate" | "medium" | "moyen" | "moyenne" => 50,
        "oceanique" | "oceanic" | "wet" | "humide" => 75,
        _ => 50,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumberOrLabel {
    Number(f64),
    Text(String),
    /// Booleans, arrays, objects: treated like a missing value
    Other(IgnoredAny),
}

fn de_atmosphere<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f32, D::Error> {
    let raw = Option::<RawNumberOrLabel>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawNumberOrLabel::Number(value)) if value.is_finite() => value.max(0.0) as f32,
        Some(RawNumberOrLabel::Text(text)) => match text.trim().parse::<f32>() {
            Ok(value) if value.is_finite() => value.max(0.0),
            _ => atmosphere_density_from_label(&text),
        },
        _ => 1.0,
    })
}

fn de_percent<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u8, D::Error> {
    let raw = Option::<RawNumberOrLabel>::deserialize(deserializer)?;
    let value = match raw {
        Some(RawNumberOrLabel::Number(value)) => value,
        Some(RawNumberOrLabel::Text(text)) => match text.trim().trim_end_matches('%').trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => ocean_pct_from_label(&text) as f64,
        },
        _ => 50.0,
    };
    Ok(if value.is_finite() { value.round().clamp(0.0, 100.0) as u8 } else { 50 })
}

fn de_text<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    let raw = Option::<RawNumberOrLabel>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawNumberOrLabel::Number(value)) => value.to_string(),
        Some(RawNumberOrLabel::Text(text)) => text,
        _ => String::new(),
    })
}

// =============================================================================
// WORLD PARAMETERS
// =============================================================================

/// Configuration record for one planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldParams {
    pub seed: WorldSeed,
    #[serde(alias = "Taille", alias = "taille", alias = "world_size")]
    pub size: PlanetSize,
    #[serde(alias = "Climat", alias = "temperature")]
    pub climate: Climate,
    /// Ocean coverage, 0-100
    #[serde(alias = "water_pct", alias = "water_coverage", alias = "Ocean", deserialize_with = "de_percent")]
    pub ocean_pct: u8,
    #[serde(alias = "Ressources")]
    pub resource_density: Level,
    #[serde(deserialize_with = "de_text")]
    pub age: String,
    #[serde(alias = "Nom", deserialize_with = "de_text")]
    pub world_name: String,
    #[serde(alias = "atmosphere", deserialize_with = "de_atmosphere")]
    pub atmosphere_density: f32,
    pub biodiversity: Level,
    pub tectonic_activity: Level,
    #[serde(alias = "weather")]
    pub weather_variability: Level,
    pub gravity: Level,
    pub cosmic_radiation: Level,
    pub mystic_influence: Level,
    #[serde(deserialize_with = "de_stability")]
    pub dimensional_stability: Level,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            seed: WorldSeed::Random,
            size: PlanetSize::default(),
            climate: Climate::Temperate,
            ocean_pct: 50,
            resource_density: Level::Medium,
            age: "mature".to_string(),
            world_name: "New World".to_string(),
            atmosphere_density: 1.0,
            biodiversity: Level::Medium,
            tectonic_activity: Level::Medium,
            weather_variability: Level::Medium,
            gravity: Level::Medium,
            cosmic_radiation: Level::Medium,
            mystic_influence: Level::Medium,
            dimensional_stability: Level::Medium,
        }
    }
}

impl WorldParams {
    /// Ocean coverage as a fraction in [0, 1]
    pub fn ocean_fraction(&self) -> f32 {
        self.ocean_pct.min(100) as f32 / 100.0
    }

    /// Build from a JSON object; missing or unknown fields take defaults.
    pub fn from_json_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Every accepted spelling of the aliased `WorldParams` fields
const FIELD_ALIASES: &[&[&str]] = &[
    &["size", "Taille", "taille", "world_size"],
    &["climate", "Climat", "temperature"],
    &["ocean_pct", "water_pct", "water_coverage", "Ocean"],
    &["resource_density", "Ressources"],
    &["world_name", "Nom"],
    &["atmosphere_density", "atmosphere"],
    &["weather_variability", "weather"],
];

/// Load a named preset from a `{ "presets": { name: {...} } }` document.
///
/// `overrides` are merged over the preset's fields before parsing.
pub fn load_world_params_from_preset<P: AsRef<Path>>(
    preset_name: &str,
    path: P,
    overrides: Option<&Map<String, Value>>,
) -> Result<WorldParams> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&text)?;

    let preset = doc
        .get("presets")
        .and_then(|presets| presets.get(preset_name))
        .ok_or_else(|| WorldGenError::UnknownPreset {
            name: preset_name.to_string(),
            path: path.display().to_string(),
        })?;

    let mut fields = match preset {
        Value::Object(map) => map.clone(),
        _ => {
            return Err(WorldGenError::InvalidPreset {
                name: preset_name.to_string(),
            })
        }
    };

    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            // An override replaces the field under every spelling, or serde sees a duplicate
            if let Some(group) = FIELD_ALIASES.iter().find(|group| group.contains(&key.as_str())) {
                for alias in group.iter() {
                    fields.remove(*alias);
                }
            }
            fields.insert(key.clone(), value.clone());
        }
    }

    let params = WorldParams::from_json_value(Value::Object(fields))?;
    log::info!(
        "Loaded preset '{}' from {} (climate={}, ocean={}%)",
        preset_name,
        path.display(),
        params.climate.label(),
        params.ocean_pct
    );
    Ok(params)
}

/// Names of all presets in a preset document, sorted.
pub fn list_presets<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&text)?;
    let mut names: Vec<String> = doc
        .get("presets")
        .and_then(Value::as_object)
        .map(|presets| presets.keys().cloned().collect())
        .unwrap_or_default();
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_level_labels_and_fallback() {
        assert_eq!(Level::from_label("High"), Level::High);
        assert_eq!(Level::from_label("Abondante"), Level::High);
        assert_eq!(Level::from_label("Éparse"), Level::Low);
        assert_eq!(Level::from_label("very low"), Level::VeryLow);
        assert_eq!(Level::from_label("garbage"), Level::Medium);
        assert_eq!(Level::from_label(""), Level::Medium);
        assert_eq!(Level::VeryHigh.pick([1, 2, 3, 4, 5]), 5);
    }

    #[test]
    fn test_climate_labels_and_fallback() {
        assert_eq!(Climate::from_label("Tempéré"), Climate::Temperate);
        assert_eq!(Climate::from_label("Aride"), Climate::Arid);
        assert_eq!(Climate::from_label("tropical"), Climate::Tropical);
        assert_eq!(Climate::from_label("lava world"), Climate::Temperate);
    }

    #[test]
    fn test_atmosphere_labels() {
        assert_eq!(atmosphere_density_from_label("thin"), 0.6);
        assert_eq!(atmosphere_density_from_label("Dense"), 1.4);
        assert_eq!(atmosphere_density_from_label("???"), 1.0);
    }

    #[test]
    fn test_params_from_json_with_unknown_labels() {
        let params = WorldParams::from_json_value(json!({
            "seed": "random",
            "size": "gigantic",
            "climate": "plasma",
            "ocean_pct": 140,
            "resource_density": "unheard-of",
            "atmosphere": "dense",
            "gravity": "high"
        }))
        .unwrap();

        assert_eq!(params.seed, WorldSeed::Random);
        assert_eq!(params.size, PlanetSize::Label(SizeLabel::Huge));
        assert_eq!(params.climate, Climate::Temperate);
        assert_eq!(params.ocean_pct, 100);
        assert_eq!(params.resource_density, Level::Medium);
        assert_eq!(params.atmosphere_density, 1.4);
        assert_eq!(params.gravity, Level::High);
        assert_eq!(params.world_name, "New World");
    }

    #[test]
    fn test_params_french_keys() {
        let params = WorldParams::from_json_value(json!({
            "seed": 7,
            "Taille": 40000,
            "Climat": "Tropical",
            "Ressources": "Eparse",
            "water_pct": 35
        }))
        .unwrap();
        assert_eq!(params.seed, WorldSeed::Fixed(7));
        assert_eq!(params.size, PlanetSize::Km(40_000));
        assert_eq!(params.climate, Climate::Tropical);
        assert_eq!(params.resource_density, Level::Low);
        assert_eq!(params.ocean_pct, 35);
    }

    #[test]
    fn test_params_non_string_values_fall_back() {
        let params = WorldParams::from_json_value(json!({
            "resource_density": 1.5,
            "climate": "cold",
            "biodiversity": null,
            "gravity": true,
            "tectonic_activity": [1, 2],
            "mystic_influence": "0.5",
            "world_name": null,
            "size": null,
            "seed": { "value": 3 }
        }))
        .unwrap();

        assert_eq!(params.resource_density, Level::High);
        assert_eq!(params.climate, Climate::Cold);
        assert_eq!(params.biodiversity, Level::Medium);
        assert_eq!(params.gravity, Level::Medium);
        assert_eq!(params.tectonic_activity, Level::Medium);
        assert_eq!(params.mystic_influence, Level::VeryLow);
        assert_eq!(params.world_name, "");
        assert_eq!(params.size, PlanetSize::default());
        assert_eq!(params.seed, WorldSeed::Random);

        let hot = WorldParams::from_json_value(json!({ "climate": 0.9, "dimensional_stability": 2.0 })).unwrap();
        assert_eq!(hot.climate, Climate::Hot);
        assert_eq!(hot.dimensional_stability, Level::VeryHigh);
    }

    #[test]
    fn test_multiplier_buckets() {
        assert_eq!(Level::from_multiplier(0.5), Level::VeryLow);
        assert_eq!(Level::from_multiplier(0.8), Level::Low);
        assert_eq!(Level::from_multiplier(1.0), Level::Medium);
        assert_eq!(Level::from_multiplier(1.5), Level::High);
        assert_eq!(Level::from_multiplier(2.0), Level::VeryHigh);
        assert_eq!(Level::from_multiplier(f64::NAN), Level::Medium);
    }

    #[test]
    fn test_size_label_circumference() {
        let km: Vec<u32> = [SizeLabel::Small, SizeLabel::Medium, SizeLabel::Large, SizeLabel::Huge]
            .iter()
            .map(SizeLabel::circumference_km)
            .collect();
        assert_eq!(km, vec![20_000, 40_000, 50_000, 60_000]);
        assert_eq!(PlanetSize::Label(SizeLabel::Medium).circumference_km(), PlanetSize::default().circumference_km());
    }

    #[test]
    fn test_french_menu_vocabulary() {
        assert_eq!(Level::from_label("Pauvre"), Level::Low);
        assert_eq!(Level::from_label("Riche"), Level::VeryHigh);
        assert_eq!(Level::from_label("Calme"), Level::Low);
        assert_eq!(Level::from_label("Variable"), Level::Medium);
        assert_eq!(Level::from_label("Extrême"), Level::VeryHigh);
        assert_eq!(Level::from_label("Stable"), Level::Low);
        assert_eq!(Level::from_label("Instable"), Level::High);
        assert_eq!(Level::from_label("Chaotique"), Level::VeryHigh);
        assert_eq!(Level::from_label("Fissuré"), Level::High);

        assert_eq!(Level::from_stability_label("Stable"), Level::High);
        assert_eq!(Level::from_stability_label("Fissuré"), Level::Low);
        assert_eq!(Level::from_stability_label("Instable"), Level::VeryLow);
        assert_eq!(Level::from_stability_label("medium"), Level::Medium);

        assert_eq!(Climate::from_label("Glaciaire"), Climate::Cold);
        assert_eq!(Climate::from_label("Froid"), Climate::Cold);
        assert_eq!(Climate::from_label("Chaud"), Climate::Hot);
        assert_eq!(Climate::from_label("Ardent"), Climate::Hot);

        assert_eq!(SizeLabel::from_label("Petite"), SizeLabel::Small);
        assert_eq!(SizeLabel::from_label("Grande"), SizeLabel::Large);
        assert_eq!(SizeLabel::from_label("Gigantesque"), SizeLabel::Huge);

        assert_eq!(ocean_pct_from_label("Aride"), 25);
        assert_eq!(ocean_pct_from_label("Tempéré"), 50);
        assert_eq!(ocean_pct_from_label("Océanique"), 75);
    }

    #[test]
    fn test_params_menu_keys() {
        let params = WorldParams::from_json_value(json!({
            "world_size": "Petite",
            "water_coverage": "Océanique",
            "temperature": "Glaciaire",
            "weather": "Extrême",
            "atmosphere_density": "Épaisse",
            "resource_density": "Pauvre",
            "tectonic_activity": "Stable",
            "dimensional_stability": "Stable",
            "mystic_influence": "Nulle"
        }))
        .unwrap();

        assert_eq!(params.size, PlanetSize::Label(SizeLabel::Small));
        assert_eq!(params.ocean_pct, 75);
        assert_eq!(params.climate, Climate::Cold);
        assert_eq!(params.weather_variability, Level::VeryHigh);
        assert_eq!(params.atmosphere_density, 1.4);
        assert_eq!(params.resource_density, Level::Low);
        assert_eq!(params.tectonic_activity, Level::Low);
        assert_eq!(params.dimensional_stability, Level::High);
        assert_eq!(params.mystic_influence, Level::VeryLow);
    }

    #[test]
    fn test_params_json_roundtrip_preserves_fields() {
        let params = WorldParams {
            seed: WorldSeed::Fixed(99),
            climate: Climate::Cold,
            biodiversity: Level::VeryHigh,
            dimensional_stability: Level::VeryLow,
            ..Default::default()
        };
        let text = serde_json::to_string(&params).unwrap();
        let back = WorldParams::from_json_str(&text).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn test_load_preset_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            json!({
                "presets": {
                    "Desert": { "climate": "arid", "ocean_pct": 20, "world_name": "Dune" },
                    "Menu": { "world_size": "Gigantesque", "water_coverage": "Aride" }
                }
            })
        )
        .unwrap();

        let mut overrides = Map::new();
        overrides.insert("seed".to_string(), json!(1234));
        let params = load_world_params_from_preset("Desert", file.path(), Some(&overrides)).unwrap();
        assert_eq!(params.climate, Climate::Arid);
        assert_eq!(params.ocean_pct, 20);
        assert_eq!(params.seed, WorldSeed::Fixed(1234));

        let mut size_override = Map::new();
        size_override.insert("size".to_string(), json!(20000));
        let params = load_world_params_from_preset("Menu", file.path(), Some(&size_override)).unwrap();
        assert_eq!(params.size, PlanetSize::Km(20_000));
        assert_eq!(params.ocean_pct, 25);

        let missing = load_world_params_from_preset("Ocean", file.path(), None);
        assert!(matches!(missing, Err(WorldGenError::UnknownPreset { .. })));

        assert_eq!(list_presets(file.path()).unwrap(), vec!["Desert".to_string(), "Menu".to_string()]);
    }

    #[test]
    fn test_load_preset_missing_file() {
        let result = load_world_params_from_preset("Custom", "/nonexistent/presets.json", None);
        assert!(matches!(result, Err(WorldGenError::Io(_))));
    }

    #[test]
    fn test_shipped_presets_parse() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/world_presets.json");
        for name in list_presets(path).unwrap() {
            load_world_params_from_preset(&name, path, None).unwrap();
        }
    }
}
