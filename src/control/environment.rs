use crate::config::SimulationConfig;
use crate::constants::SPECIFIC_GAS_CONSTANT_AIR;

/// Isothermal exponential atmosphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    pub sea_level_pressure: f64,
    pub decay_rate: f64,
    pub temperature: f64,
}

impl Atmosphere {
    pub fn new(sea_level_pressure: f64, decay_rate: f64, temperature: f64) -> Self {
        Atmosphere {
            sea_level_pressure,
            decay_rate,
            temperature,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        let params = config.params();
        Atmosphere::new(
            params.sea_level_pressure,
            params.pressure_decay_rate,
            params.sea_level_temperature,
        )
    }

    /// Ambient pressure in pascals. Equals the sea-level value at zero altitude.
    pub fn pressure(&self, altitude: f64) -> f64 {
        self.sea_level_pressure * (self.decay_rate * altitude).exp()
    }

    /// Ideal-gas density proxy at the fixed reference temperature.
    pub fn air_density(&self, pressure: f64) -> f64 {
        pressure / (SPECIFIC_GAS_CONSTANT_AIR * self.temperature)
    }
}
