//! Seed management for world generation
//!
//! The final seed combines the base seed with a digest of every world
//! parameter, so identical (seed, params) pairs reproduce the same planet and
//! changing any parameter changes it. Each noise layer then gets its own
//! sub-seed derived from the final seed.

use sha2::{Digest, Sha256};

use crate::params::WorldParams;

/// Canonical, ordered text encoding of all parameters (floats rounded to 4 places).
pub fn canonical_params_string(params: &WorldParams) -> String {
    [
        format!("seed={}", params.seed),
        format!("size={}", params.size),
        format!("climate={}", params.climate.label()),
        format!("ocean={}", params.ocean_pct),
        format!("res={}", params.resource_density),
        format!("age={}", params.age),
        format!("name={}", params.world_name),
        format!("atmo={:.4}", params.atmosphere_density),
        format!("bio={}", params.biodiversity),
        format!("tecto={}", params.tectonic_activity),
        format!("weather={}", params.weather_variability),
        format!("gravity={}", params.gravity),
        format!("cosmic={}", params.cosmic_radiation),
        format!("mystic={}", params.mystic_influence),
        format!("dim={}", params.dimensional_stability),
    ]
    .join("|")
}

/// Final 64-bit seed from a base seed (`None` counts as 0) and the params.
pub fn make_final_seed(base_seed: Option<u64>, params: &WorldParams) -> u64 {
    let base = base_seed.unwrap_or(0);
    let data = format!("{}::{}", base, canonical_params_string(params));
    let digest = Sha256::digest(data.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// Seeds for every noise layer of the generator.
///
/// Each layer gets its own seed, derived from the final seed, so layers are
/// statistically independent of each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldSeeds {
    /// Final seed (used for display/reference)
    pub master: u64,
    /// Domain warp offset fields
    pub warp: u64,
    /// Base terrain height (both scales)
    pub height: u64,
    /// Ridged mountain noise
    pub ridge: u64,
    /// Micro relief
    pub relief: u64,
    /// Local sea level perturbation
    pub sea: u64,
    /// Temperature perturbation
    pub climate: u64,
    pub moisture: u64,
    pub lakes: u64,
    pub rivers: u64,
    /// Per-tile level dither
    pub levels: u64,
    /// Per-tile prop draws
    pub props: u64,
    /// Spawn search RNG
    pub spawn: u64,
}

impl WorldSeeds {
    /// Create seeds from the final seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            warp: derive_seed(master, "warp"),
            height: derive_seed(master, "height"),
            ridge: derive_seed(master, "ridge"),
            relief: derive_seed(master, "relief"),
            sea: derive_seed(master, "sea"),
            climate: derive_seed(master, "climate"),
            moisture: derive_seed(master, "moisture"),
            lakes: derive_seed(master, "lakes"),
            rivers: derive_seed(master, "rivers"),
            levels: derive_seed(master, "levels"),
            props: derive_seed(master, "props"),
            spawn: derive_seed(master, "spawn"),
        }
    }
}

/// Derive a sub-seed from a master seed and a system name.
fn derive_seed(master: u64, system: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(master.to_le_bytes());
    hasher.update(system.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

impl std::fmt::Display for WorldSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WorldSeeds {{ master: {}, height: {}, ridge: {}, climate: {}, moisture: {}, props: {} }}",
            self.master, self.height, self.ridge, self.climate, self.moisture, self.props,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Climate, Level, PlanetSize, SizeLabel, WorldSeed};

    #[test]
    fn test_final_seed_deterministic() {
        let params = WorldParams::default();
        assert_eq!(make_final_seed(Some(42), &params), make_final_seed(Some(42), &params));
        assert_ne!(make_final_seed(Some(42), &params), make_final_seed(Some(43), &params));
        assert_eq!(make_final_seed(None, &params), make_final_seed(Some(0), &params));
    }

    #[test]
    fn test_every_field_changes_final_seed() {
        let base = WorldParams::default();
        let variants = vec![
            WorldParams { seed: WorldSeed::Fixed(1), ..base.clone() },
            WorldParams { size: PlanetSize::Label(SizeLabel::Small), ..base.clone() },
            WorldParams { climate: Climate::Hot, ..base.clone() },
            WorldParams { ocean_pct: 51, ..base.clone() },
            WorldParams { resource_density: Level::High, ..base.clone() },
            WorldParams { age: "ancient".to_string(), ..base.clone() },
            WorldParams { world_name: "Other".to_string(), ..base.clone() },
            WorldParams { atmosphere_density: 1.2, ..base.clone() },
            WorldParams { biodiversity: Level::Low, ..base.clone() },
            WorldParams { tectonic_activity: Level::Low, ..base.clone() },
            WorldParams { weather_variability: Level::Low, ..base.clone() },
            WorldParams { gravity: Level::Low, ..base.clone() },
            WorldParams { cosmic_radiation: Level::Low, ..base.clone() },
            WorldParams { mystic_influence: Level::Low, ..base.clone() },
            WorldParams { dimensional_stability: Level::Low, ..base.clone() },
        ];

        let reference = make_final_seed(Some(42), &base);
        for variant in &variants {
            assert_ne!(
                make_final_seed(Some(42), variant),
                reference,
                "seed unchanged for {}",
                canonical_params_string(variant)
            );
        }
    }

    #[test]
    fn test_deterministic_derivation() {
        let seeds1 = WorldSeeds::from_master(12345);
        let seeds2 = WorldSeeds::from_master(12345);
        assert_eq!(seeds1, seeds2);
    }

    #[test]
    fn test_different_systems_get_different_seeds() {
        let seeds = WorldSeeds::from_master(12345);
        assert_ne!(seeds.height, seeds.ridge);
        assert_ne!(seeds.ridge, seeds.climate);
        assert_ne!(seeds.climate, seeds.moisture);
        assert_ne!(seeds.lakes, seeds.rivers);
    }
}
