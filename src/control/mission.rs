use log::{debug, info, warn};

use crate::config::SimulationConfig;
use crate::control::rocket::RocketState;
use crate::errors::SimulationResult;
use crate::telemetry_system::telemetry::Reporter;
use crate::trajectory_system::kinematics::FlightIntegrator;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Termination {
    /// Simulated time reached the configured end.
    TimeLimit,
    /// Altitude dropped below the ground cutoff.
    GroundImpact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunReport {
    pub termination: Termination,
    pub steps: usize,
    pub apogee: f64,
    pub final_state: RocketState,
}

/// Owns the time loop of a single flight.
pub struct Simulation {
    integrator: FlightIntegrator,
    state: RocketState,
    steps: usize,
    apogee: f64,
    last_percent: Option<u8>,
    termination: Option<Termination>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        let state = RocketState::initial(&config);
        Simulation {
            integrator: FlightIntegrator::new(&config),
            apogee: state.altitude,
            state,
            steps: 0,
            last_percent: None,
            termination: None,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        self.integrator.config()
    }

    pub fn state(&self) -> &RocketState {
        &self.state
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Advances one step, handing the step's record to `reporter`.
    ///
    /// Returns the termination reason once the run is over; further calls
    /// are then no-ops.
    pub fn step<R: Reporter + ?Sized>(
        &mut self,
        reporter: &mut R,
    ) -> SimulationResult<Option<Termination>> {
        if self.termination.is_some() {
            return Ok(self.termination);
        }

        let params = self.config().params();
        if self.state.time >= params.simulation_end_time {
            self.termination = Some(Termination::TimeLimit);
            return Ok(self.termination);
        }
        let cutoff = params.ground_cutoff_altitude;

        let was_powered = self.state.phase(self.config()).is_powered();
        let outcome = self.integrator.step(&self.state)?;
        reporter.record(&outcome.record)?;

        if was_powered && !outcome.record.phase.is_powered() {
            debug!(
                "Burnout at t = {:.3}s, altitude {:.1} m, velocity {:.2} m/s",
                outcome.record.time, outcome.record.altitude, outcome.record.velocity
            );
        }

        self.state = outcome.next;
        self.steps += 1;
        self.apogee = self.apogee.max(outcome.record.altitude);

        let percent = self.percent_elapsed(outcome.record.time);
        if self.last_percent.map_or(true, |last| percent > last) {
            reporter.progress(percent);
            self.last_percent = Some(percent);
        }

        if self.state.is_below(cutoff) {
            warn!(
                "Altitude {:.1} m below ground cutoff {:.1} m at t = {:.3}s, stopping",
                self.state.altitude, cutoff, outcome.record.time
            );
            self.termination = Some(Termination::GroundImpact);
        } else if self.state.time >= self.config().params().simulation_end_time {
            self.termination = Some(Termination::TimeLimit);
        }

        Ok(self.termination)
    }

    /// Runs until the end time or the ground cutoff, whichever comes first.
    pub fn run<R: Reporter>(&mut self, mut reporter: R) -> SimulationResult<RunReport> {
        info!(
            "Simulating {} scheduled steps of {} s",
            self.config().scheduled_steps(),
            self.config().params().time_step
        );

        let termination = loop {
            if let Some(termination) = self.step(&mut reporter)? {
                break termination;
            }
        };
        reporter.finish()?;

        info!(
            "Simulation ended ({:?}) after {} records, apogee {:.1} m",
            termination, self.steps, self.apogee
        );

        Ok(RunReport {
            termination,
            steps: self.steps,
            apogee: self.apogee,
            final_state: self.state,
        })
    }

    /// Whole percent of the simulated time span covered at `time`.
    fn percent_elapsed(&self, time: f64) -> u8 {
        let params = self.config().params();
        let span = params.simulation_end_time - params.start_time;
        let percent = ((time - params.start_time) * 100.0 / span).floor();
        percent.clamp(0.0, 100.0) as u8
    }
}
