pub mod csv;
pub mod progress;
pub mod telemetry;
