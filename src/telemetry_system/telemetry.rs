use crate::control::rocket::FlightPhase;
use crate::errors::SimulationResult;

/// Everything reported about one simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateRecord {
    pub time: f64,               // s
    pub altitude: f64,           // m, before this step's increment
    pub pressure: f64,           // Pa
    pub specific_impulse: f64,   // s
    pub thrust: f64,             // N
    pub drag: f64,               // N, signed against velocity
    pub net_force: f64,          // N
    pub mass: f64,               // kg
    pub acceleration: f64,       // m/s²
    pub altitude_increment: f64, // m
    pub velocity: f64,           // m/s, after this step's update
    pub phase: FlightPhase,
}

/// Consumer of the record stream produced by a run.
///
/// Records arrive in emission order. Progress is an advisory percentage of
/// simulated time and only ever increases.
pub trait Reporter {
    fn record(&mut self, record: &StateRecord) -> SimulationResult<()>;

    fn progress(&mut self, _percent: u8) {}

    fn finish(&mut self) -> SimulationResult<()> {
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn record(&mut self, record: &StateRecord) -> SimulationResult<()> {
        (**self).record(record)
    }

    fn progress(&mut self, percent: u8) {
        (**self).progress(percent)
    }

    fn finish(&mut self) -> SimulationResult<()> {
        (**self).finish()
    }
}

impl<A: Reporter, B: Reporter> Reporter for (A, B) {
    fn record(&mut self, record: &StateRecord) -> SimulationResult<()> {
        self.0.record(record)?;
        self.1.record(record)
    }

    fn progress(&mut self, percent: u8) {
        self.0.progress(percent);
        self.1.progress(percent);
    }

    fn finish(&mut self) -> SimulationResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// Key figures of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightSummary {
    pub apogee: f64,
    pub apogee_time: f64,
    pub max_velocity: f64,
    pub max_acceleration: f64,
    pub burnout_time: Option<f64>,
    pub burnout_altitude: Option<f64>,
    pub burnout_velocity: Option<f64>,
    pub records: usize,
}

/// In-memory recorder that keeps the full stream and its summary.
#[derive(Debug, Default)]
pub struct Telemetry {
    pub log: Vec<StateRecord>,
    pub progress_updates: Vec<u8>,
    summary: FlightSummary,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry::default()
    }

    pub fn summary(&self) -> FlightSummary {
        self.summary
    }

    pub fn last(&self) -> Option<&StateRecord> {
        self.log.last()
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn describe(&self) -> Vec<String> {
        let s = &self.summary;
        let mut lines = vec![
            format!("Records: {}", s.records),
            format!(
                "Apogee: {} at {:.2}s",
                Self::format_altitude(s.apogee),
                s.apogee_time
            ),
            format!("Max Velocity: {:.2} m/s", s.max_velocity),
            format!("Max Acceleration: {:.2} m/s²", s.max_acceleration),
        ];
        if let (Some(time), Some(altitude), Some(velocity)) =
            (s.burnout_time, s.burnout_altitude, s.burnout_velocity)
        {
            lines.push(format!(
                "Burnout: {:.2}s at {} moving {:.2} m/s",
                time,
                Self::format_altitude(altitude),
                velocity
            ));
        }
        lines
    }
}

impl Reporter for Telemetry {
    fn record(&mut self, record: &StateRecord) -> SimulationResult<()> {
        let summary = &mut self.summary;

        if summary.records == 0 || record.altitude > summary.apogee {
            summary.apogee = record.altitude;
            summary.apogee_time = record.time;
        }
        summary.max_velocity = summary.max_velocity.max(record.velocity);
        summary.max_acceleration = summary.max_acceleration.max(record.acceleration);

        if !record.phase.is_powered() && summary.burnout_time.is_none() {
            summary.burnout_time = Some(record.time);
            summary.burnout_altitude = Some(record.altitude);
            summary.burnout_velocity = Some(record.velocity);
        }

        summary.records += 1;
        self.log.push(*record);
        Ok(())
    }

    fn progress(&mut self, percent: u8) {
        self.progress_updates.push(percent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: f64, altitude: f64, velocity: f64, phase: FlightPhase) -> StateRecord {
        StateRecord {
            time,
            altitude,
            pressure: 101325.0,
            specific_impulse: 140.0,
            thrust: if phase.is_powered() { 1.0e5 } else { 0.0 },
            drag: 0.0,
            net_force: 0.0,
            mass: 2000.0,
            acceleration: velocity / 10.0,
            altitude_increment: velocity * 0.01,
            velocity,
            phase,
        }
    }

    #[test]
    fn test_summary_tracks_apogee_and_burnout() {
        let mut telemetry = Telemetry::new();
        telemetry.record(&record(0.0, 0.0, 10.0, FlightPhase::Powered)).unwrap();
        telemetry.record(&record(1.0, 50.0, 120.0, FlightPhase::Powered)).unwrap();
        telemetry.record(&record(2.0, 180.0, 90.0, FlightPhase::Unpowered)).unwrap();
        telemetry.record(&record(3.0, 250.0, 5.0, FlightPhase::Unpowered)).unwrap();
        telemetry.record(&record(4.0, 200.0, -40.0, FlightPhase::Unpowered)).unwrap();

        let summary = telemetry.summary();
        assert_eq!(summary.records, 5);
        assert_eq!(summary.apogee, 250.0);
        assert_eq!(summary.apogee_time, 3.0);
        assert_eq!(summary.max_velocity, 120.0);
        assert_eq!(summary.max_acceleration, 12.0);
        assert_eq!(summary.burnout_time, Some(2.0));
        assert_eq!(summary.burnout_altitude, Some(180.0));
        assert_eq!(summary.burnout_velocity, Some(90.0));
        assert_eq!(telemetry.log.len(), 5);
        assert_eq!(telemetry.last().map(|r| r.time), Some(4.0));
    }

    #[test]
    fn test_apogee_below_ground() {
        let mut telemetry = Telemetry::new();
        telemetry.record(&record(0.0, -20.0, -1.0, FlightPhase::Unpowered)).unwrap();
        assert_eq!(telemetry.summary().apogee, -20.0);
    }

    #[test]
    fn test_describe_mentions_burnout_only_when_seen() {
        let mut telemetry = Telemetry::new();
        telemetry.record(&record(0.0, 0.0, 10.0, FlightPhase::Powered)).unwrap();
        assert_eq!(telemetry.describe().len(), 4);

        telemetry.record(&record(9.0, 2500.0, 300.0, FlightPhase::Unpowered)).unwrap();
        let lines = telemetry.describe();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("2.50 km"));
        assert!(lines[4].starts_with("Burnout: 9.00s"));
    }

    #[test]
    fn test_pair_forwards_to_both() {
        let mut first = Telemetry::new();
        let mut second = Telemetry::new();
        {
            let mut pair = (&mut first, &mut second);
            pair.record(&record(0.0, 0.0, 1.0, FlightPhase::Powered)).unwrap();
            pair.progress(3);
        }
        assert_eq!(first.log.len(), 1);
        assert_eq!(second.log.len(), 1);
        assert_eq!(first.progress_updates, vec![3]);
        assert_eq!(second.progress_updates, vec![3]);
    }
}
