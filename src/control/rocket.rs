use crate::config::SimulationConfig;

/// Mutable flight state carried from one step to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocketState {
    pub time: f64,     // s
    pub altitude: f64, // m
    pub velocity: f64, // m/s, positive is up
    pub mass: f64,     // kg
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FlightPhase {
    Powered,
    Unpowered,
}

impl RocketState {
    /// State at ignition: on the pad, at rest, fully fuelled.
    pub fn initial(config: &SimulationConfig) -> Self {
        let params = config.params();
        RocketState {
            time: params.start_time,
            altitude: params.initial_altitude,
            velocity: 0.0,
            mass: params.initial_mass,
        }
    }

    pub fn phase(&self, config: &SimulationConfig) -> FlightPhase {
        if config.is_burning(self.time) {
            FlightPhase::Powered
        } else {
            FlightPhase::Unpowered
        }
    }

    pub fn is_below(&self, altitude: f64) -> bool {
        self.altitude < altitude
    }
}

impl FlightPhase {
    pub fn is_powered(self) -> bool {
        self == FlightPhase::Powered
    }
}
