use crate::config::SimulationConfig;
use crate::control::environment::Atmosphere;
use crate::control::propulsion::Propulsion;
use crate::control::rocket::RocketState;
use crate::errors::{SimulationError, SimulationResult};
use crate::telemetry_system::telemetry::StateRecord;

use super::aerodynamics::Aerodynamics;

/// Result of advancing the flight by one fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Values to report for this step. `altitude` is the altitude at the start
    /// of the step while `velocity` is already the updated one.
    pub record: StateRecord,
    pub next: RocketState,
}

/// One-dimensional semi-implicit Euler integrator.
#[derive(Debug, Clone)]
pub struct FlightIntegrator {
    pub atmosphere: Atmosphere,
    pub propulsion: Propulsion,
    pub aerodynamics: Aerodynamics,
    config: SimulationConfig,
}

impl FlightIntegrator {
    pub fn new(config: &SimulationConfig) -> Self {
        let params = config.params();
        FlightIntegrator {
            atmosphere: Atmosphere::from_config(config),
            propulsion: Propulsion::from_config(config),
            aerodynamics: Aerodynamics::new(params.drag_coefficient, params.reference_area),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn step(&self, state: &RocketState) -> SimulationResult<StepOutcome> {
        let dt = self.config.params().time_step;
        let gravity = self.config.params().gravity;

        let pressure = self.atmosphere.pressure(state.altitude);
        let specific_impulse = self.propulsion.specific_impulse(pressure);
        let phase = state.phase(&self.config);
        let burning = phase.is_powered();

        let thrust = self.propulsion.thrust(specific_impulse, burning);
        let mass = self.propulsion.mass(state.time, burning);
        let drag = self
            .aerodynamics
            .calculate_drag(pressure, state.velocity, &self.atmosphere);

        let net_force = thrust + mass * gravity + drag;
        let acceleration = Self::acceleration(net_force, mass, state.time)?;

        let velocity = state.velocity + acceleration * dt;
        let altitude_increment = acceleration * dt * dt / 2.0 + dt * velocity;

        let record = StateRecord {
            time: state.time,
            altitude: state.altitude,
            pressure,
            specific_impulse,
            thrust,
            drag,
            net_force,
            mass,
            acceleration,
            altitude_increment,
            velocity,
            phase,
        };

        let next = RocketState {
            time: state.time + dt,
            altitude: state.altitude + altitude_increment,
            velocity,
            mass,
        };

        Ok(StepOutcome { record, next })
    }

    fn acceleration(net_force: f64, mass: f64, time: f64) -> SimulationResult<f64> {
        if !(mass > 0.0) {
            return Err(SimulationError::DomainError(format!(
                "vehicle mass must be positive to derive acceleration, got {} kg at t = {} s",
                mass, time
            )));
        }
        Ok(net_force / mass)
    }
}
