pub mod environment;
pub mod mission;
pub mod propulsion;
pub mod rocket;
