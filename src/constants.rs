// Simulation Parameters
pub const START_TIME: f64 = 0.0; // s
pub const BURN_END_TIME: f64 = 8.849; // s, thrust ceases
pub const SIMULATION_END_TIME: f64 = 150.0; // s
pub const TIME_STEP: f64 = 1e-2; // s

// Launch Parameters
pub const INITIAL_ALTITUDE: f64 = 0.0; // m
pub const GROUND_CUTOFF_ALTITUDE: f64 = -10.0; // m, below ground with margin

// Environmental Constants
pub const GRAVITY: f64 = -9.81; // m/s², downward
pub const SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa
pub const PRESSURE_DECAY_RATE: f64 = -1.3024e-4; // 1/m
pub const SEA_LEVEL_TEMPERATURE: f64 = 300.0; // K
pub const SPECIFIC_GAS_CONSTANT_AIR: f64 = 287.053; // J/(kg⋅K)

// Rocket Constants
pub const INITIAL_MASS: f64 = 2530.0; // kg
pub const FINAL_MASS: f64 = 2530.0 - 1050.0; // kg, at burnout
pub const DRAG_COEFFICIENT: f64 = 0.175;
pub const CROSS_SECTIONAL_AREA: f64 = 3.14159 / 4.0; // m²

// Propulsion Constants
pub const SPECIFIC_IMPULSE_VACUUM: f64 = 165.0; // s
pub const SPECIFIC_IMPULSE_SEA_LEVEL: f64 = 140.0; // s
