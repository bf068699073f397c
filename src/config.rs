//! Vehicle, environment and timing configuration.
//!
//! [`Parameters`] is plain data that can be tweaked freely. A run only ever
//! sees a [`SimulationConfig`], which validates those parameters once and
//! stores the derived constants alongside them.

use log::debug;

use crate::constants::*;
use crate::errors::{SimulationError, SimulationResult};

/// Base constants of a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub start_time: f64,            // s
    pub burn_end_time: f64,         // s
    pub simulation_end_time: f64,   // s
    pub time_step: f64,             // s
    pub initial_altitude: f64,      // m
    pub ground_cutoff_altitude: f64, // m
    pub gravity: f64,               // m/s², negative is downward
    pub sea_level_pressure: f64,    // Pa
    pub pressure_decay_rate: f64,   // 1/m
    pub sea_level_temperature: f64, // K
    pub initial_mass: f64,          // kg
    pub final_mass: f64,            // kg
    pub drag_coefficient: f64,
    pub reference_area: f64,        // m²
    pub vacuum_isp: f64,            // s
    pub sea_level_isp: f64,         // s
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            start_time: START_TIME,
            burn_end_time: BURN_END_TIME,
            simulation_end_time: SIMULATION_END_TIME,
            time_step: TIME_STEP,
            initial_altitude: INITIAL_ALTITUDE,
            ground_cutoff_altitude: GROUND_CUTOFF_ALTITUDE,
            gravity: GRAVITY,
            sea_level_pressure: SEA_LEVEL_PRESSURE,
            pressure_decay_rate: PRESSURE_DECAY_RATE,
            sea_level_temperature: SEA_LEVEL_TEMPERATURE,
            initial_mass: INITIAL_MASS,
            final_mass: FINAL_MASS,
            drag_coefficient: DRAG_COEFFICIENT,
            reference_area: CROSS_SECTIONAL_AREA,
            vacuum_isp: SPECIFIC_IMPULSE_VACUUM,
            sea_level_isp: SPECIFIC_IMPULSE_SEA_LEVEL,
        }
    }
}

impl Parameters {
    fn named_values(&self) -> [(&'static str, f64); 16] {
        [
            ("start_time", self.start_time),
            ("burn_end_time", self.burn_end_time),
            ("simulation_end_time", self.simulation_end_time),
            ("time_step", self.time_step),
            ("initial_altitude", self.initial_altitude),
            ("ground_cutoff_altitude", self.ground_cutoff_altitude),
            ("gravity", self.gravity),
            ("sea_level_pressure", self.sea_level_pressure),
            ("pressure_decay_rate", self.pressure_decay_rate),
            ("sea_level_temperature", self.sea_level_temperature),
            ("initial_mass", self.initial_mass),
            ("final_mass", self.final_mass),
            ("drag_coefficient", self.drag_coefficient),
            ("reference_area", self.reference_area),
            ("vacuum_isp", self.vacuum_isp),
            ("sea_level_isp", self.sea_level_isp),
        ]
    }

    fn validate(&self) -> SimulationResult<()> {
        if let Some((name, value)) = self.named_values().iter().find(|(_, v)| !v.is_finite()) {
            return Err(configuration_error(format!("{} must be finite, got {}", name, value)));
        }

        if self.time_step <= 0.0 {
            return Err(configuration_error(format!(
                "time step must be positive, got {}",
                self.time_step
            )));
        }
        if let Some(time) = [self.start_time, self.simulation_end_time]
            .into_iter()
            .find(|t| t + self.time_step == *t)
        {
            return Err(configuration_error(format!(
                "time step {} is too small to advance the clock at t = {}",
                self.time_step, time
            )));
        }
        if self.burn_end_time <= self.start_time {
            return Err(configuration_error(format!(
                "burn end time ({}) must be after start time ({})",
                self.burn_end_time, self.start_time
            )));
        }
        if self.burn_end_time > self.simulation_end_time {
            return Err(configuration_error(format!(
                "burn end time ({}) must not be after simulation end time ({})",
                self.burn_end_time, self.simulation_end_time
            )));
        }
        if self.sea_level_pressure <= 0.0 {
            return Err(configuration_error(format!(
                "sea level pressure must be positive, got {}",
                self.sea_level_pressure
            )));
        }
        if self.sea_level_temperature <= 0.0 {
            return Err(configuration_error(format!(
                "sea level temperature must be positive, got {}",
                self.sea_level_temperature
            )));
        }
        if self.final_mass >= self.initial_mass {
            return Err(configuration_error(format!(
                "final mass ({}) must be less than initial mass ({})",
                self.final_mass, self.initial_mass
            )));
        }
        if self.final_mass <= 0.0 {
            return Err(SimulationError::DomainError(format!(
                "final mass must be positive, got {}",
                self.final_mass
            )));
        }
        if self.drag_coefficient < 0.0 || self.reference_area < 0.0 {
            return Err(configuration_error(
                "drag coefficient and reference area must not be negative".to_string(),
            ));
        }
        if self.vacuum_isp < 0.0 || self.sea_level_isp < 0.0 {
            return Err(configuration_error(
                "specific impulse must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

fn configuration_error(message: String) -> SimulationError {
    SimulationError::ConfigurationError(message)
}

/// Validated, immutable configuration with its derived constants.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    params: Parameters,
    mass_flow_rate: f64,
    isp_pressure_slope: f64,
    thrust_factor: f64,
}

impl SimulationConfig {
    pub fn new(params: Parameters) -> SimulationResult<Self> {
        params.validate()?;
        Ok(Self::derive(params))
    }

    fn derive(params: Parameters) -> Self {
        let burn_duration = params.burn_end_time - params.start_time;
        let mass_flow_rate = -(params.initial_mass - params.final_mass) / burn_duration;
        let isp_pressure_slope =
            (params.sea_level_isp - params.vacuum_isp) / params.sea_level_pressure;
        let thrust_factor = mass_flow_rate * params.gravity;

        debug!(
            "Configuration built: mass flow {:.4} kg/s, Isp slope {:.6e} s/Pa, thrust factor {:.4} N/s",
            mass_flow_rate, isp_pressure_slope, thrust_factor
        );

        SimulationConfig {
            params,
            mass_flow_rate,
            isp_pressure_slope,
            thrust_factor,
        }
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Mass change per second while burning (negative).
    pub fn mass_flow_rate(&self) -> f64 {
        self.mass_flow_rate
    }

    /// Change of specific impulse per pascal of ambient pressure.
    pub fn isp_pressure_slope(&self) -> f64 {
        self.isp_pressure_slope
    }

    /// Thrust produced per second of specific impulse.
    pub fn thrust_factor(&self) -> f64 {
        self.thrust_factor
    }

    pub fn is_burning(&self, time: f64) -> bool {
        time < self.params.burn_end_time
    }

    /// Approximate number of steps scheduled between start and end time.
    pub fn scheduled_steps(&self) -> u64 {
        let span = self.params.simulation_end_time - self.params.start_time;
        (span / self.params.time_step).round().max(0.0) as u64
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::derive(Parameters::default())
    }
}
