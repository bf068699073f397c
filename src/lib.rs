pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use config::{Parameters, SimulationConfig};
pub use constants::*;
pub use control::environment::Atmosphere;
pub use control::mission::{RunReport, Simulation, Termination};
pub use control::propulsion::Propulsion;
pub use control::rocket::{FlightPhase, RocketState};
pub use errors::{SimulationError, SimulationResult};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::kinematics::{FlightIntegrator, StepOutcome};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::csv::CsvReporter;
pub use telemetry_system::progress::ProgressReporter;
pub use telemetry_system::telemetry::{FlightSummary, Reporter, StateRecord, Telemetry};
