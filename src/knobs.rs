//! Numeric knobs derived from the qualitative world parameters.

use crate::params::{Climate, WorldParams};

/// Sea level at 0% ocean coverage
pub const SEA_LEVEL_MIN: f64 = 0.42;
/// Sea level at 100% ocean coverage
pub const SEA_LEVEL_MAX: f64 = 0.58;

/// Height shift per unit of ocean coverage away from 50%
const WATER_BIAS_SCALE: f64 = 0.12;
/// Temperature shift per unit of atmosphere density away from 1.0
const ATMOSPHERE_WARMING: f64 = 0.08;

/// Multipliers and biases consumed by the chunk generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Knobs {
    /// Added to the latitude temperature (range roughly -0.25..0.25)
    pub temperature_bias: f64,
    /// Added to base moisture
    pub moisture_bias: f64,
    /// Subtracted from terrain height ("more water, less land")
    pub water_bias: f64,
    pub biodiversity_mul: f64,
    /// Scales mountains and micro relief
    pub ruggedness_mul: f64,
    pub resource_mul: f64,
    /// Atmosphere density, 0.0 (none) to 2.0
    pub atmosphere_factor: f64,
    /// Scales the noise perturbation of temperature
    pub weather_variability: f64,
    /// Scales the chance of anomalous props (crystals)
    pub mystic_mul: f64,
}

impl Knobs {
    pub fn from_params(params: &WorldParams) -> Self {
        let ocean = params.ocean_fraction() as f64;
        let atmosphere_factor = (params.atmosphere_density as f64).clamp(0.0, 2.0);

        let climate_temperature = match params.climate {
            Climate::Cold => -0.22,
            Climate::Temperate => 0.0,
            Climate::Hot => 0.18,
            Climate::Arid => 0.14,
            Climate::Tropical => 0.12,
        };
        let moisture_bias = match params.climate {
            Climate::Cold => -0.04,
            Climate::Temperate => 0.0,
            Climate::Hot => -0.05,
            Climate::Arid => -0.22,
            Climate::Tropical => 0.18,
        };

        let tectonic = params.tectonic_activity.pick([0.45, 0.7, 1.0, 1.35, 1.7]);
        // Strong gravity flattens relief
        let gravity_relief = params.gravity.pick([1.15, 1.07, 1.0, 0.93, 0.85]);

        let mystic = params.mystic_influence.pick([0.0, 0.5, 1.0, 2.0, 3.5]);
        let radiation = params.cosmic_radiation.pick([0.8, 0.9, 1.0, 1.15, 1.3]);
        let instability = params.dimensional_stability.pick([1.6, 1.3, 1.0, 0.8, 0.6]);

        Self {
            temperature_bias: climate_temperature + (atmosphere_factor - 1.0) * ATMOSPHERE_WARMING,
            moisture_bias,
            water_bias: (ocean - 0.5) * WATER_BIAS_SCALE,
            biodiversity_mul: params.biodiversity.pick([0.25, 0.6, 1.0, 1.4, 1.8]),
            ruggedness_mul: tectonic * gravity_relief,
            resource_mul: params.resource_density.pick([0.3, 0.6, 1.0, 1.5, 2.2]),
            atmosphere_factor,
            weather_variability: params.weather_variability.pick([0.3, 0.6, 1.0, 1.4, 1.8]),
            mystic_mul: mystic * radiation * instability,
        }
    }

    /// Moisture scale from atmosphere density: thin air is drier.
    pub fn atmosphere_moisture_scale(&self) -> f64 {
        0.8 + 0.2 * self.atmosphere_factor.min(2.0)
    }
}

/// Nominal sea level: ocean coverage linearly mapped to [0.42, 0.58].
pub fn nominal_sea_level(params: &WorldParams) -> f64 {
    SEA_LEVEL_MIN + (SEA_LEVEL_MAX - SEA_LEVEL_MIN) * params.ocean_fraction() as f64
}
