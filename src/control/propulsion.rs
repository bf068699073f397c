use crate::config::SimulationConfig;

/// Single-burn motor with pressure-dependent specific impulse and a linear
/// mass schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Propulsion {
    pub vacuum_isp: f64,
    pub isp_pressure_slope: f64,
    pub thrust_factor: f64,
    pub mass_flow_rate: f64,
    pub start_time: f64,
    pub initial_mass: f64,
    pub final_mass: f64,
}

impl Propulsion {
    pub fn from_config(config: &SimulationConfig) -> Self {
        let params = config.params();
        Propulsion {
            vacuum_isp: params.vacuum_isp,
            isp_pressure_slope: config.isp_pressure_slope(),
            thrust_factor: config.thrust_factor(),
            mass_flow_rate: config.mass_flow_rate(),
            start_time: params.start_time,
            initial_mass: params.initial_mass,
            final_mass: params.final_mass,
        }
    }

    /// Linear in pressure: vacuum value at 0 Pa, sea-level value at sea-level pressure.
    pub fn specific_impulse(&self, pressure: f64) -> f64 {
        self.isp_pressure_slope * pressure + self.vacuum_isp
    }

    pub fn thrust(&self, specific_impulse: f64, burning: bool) -> f64 {
        if burning {
            specific_impulse * self.thrust_factor
        } else {
            0.0
        }
    }

    pub fn mass(&self, time: f64, burning: bool) -> f64 {
        if burning {
            self.mass_flow_rate * (time - self.start_time) + self.initial_mass
        } else {
            self.final_mass
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Parameters;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn default_propulsion() -> Propulsion {
        Propulsion::from_config(&SimulationConfig::default())
    }

    #[test]
    fn test_isp_anchored_at_sea_level_and_vacuum() {
        let propulsion = default_propulsion();
        assert_eq!(propulsion.specific_impulse(101325.0), 140.0);
        assert_eq!(propulsion.specific_impulse(0.0), 165.0);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let propulsion = default_propulsion();
        assert_eq!(propulsion.specific_impulse(54_321.0), propulsion.specific_impulse(54_321.0));
        assert_eq!(propulsion.thrust(150.0, true), propulsion.thrust(150.0, true));
        assert_eq!(propulsion.mass(4.2, true), propulsion.mass(4.2, true));
    }

    #[test]
    fn test_isp_stays_between_anchors() {
        let propulsion = default_propulsion();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1_000 {
            let pressure = rng.gen_range(0.0..101325.0);
            let isp = propulsion.specific_impulse(pressure);
            assert!((140.0..=165.0).contains(&isp), "Isp {} out of range", isp);
        }
    }

    #[test]
    fn test_thrust_only_while_burning() {
        let propulsion = default_propulsion();
        let isp = propulsion.specific_impulse(101325.0);

        let thrust = propulsion.thrust(isp, true);
        assert_relative_eq!(thrust, 140.0 * (1050.0 / 8.849) * 9.81, epsilon = 1e-6);
        assert!(thrust > 0.0);
        assert_eq!(propulsion.thrust(isp, false), 0.0);
    }

    #[test]
    fn test_mass_decreases_linearly_while_burning() {
        let propulsion = default_propulsion();

        assert_eq!(propulsion.mass(0.0, true), 2530.0);
        let m1 = propulsion.mass(1.0, true);
        let m2 = propulsion.mass(2.0, true);
        let m3 = propulsion.mass(3.0, true);
        assert!(m1 > m2 && m2 > m3);
        assert_relative_eq!(m1 - m2, m2 - m3, epsilon = 1e-9);
        assert_relative_eq!(m1 - m2, 1050.0 / 8.849, epsilon = 1e-9);
    }

    #[test]
    fn test_mass_approaches_final_mass_at_burnout() {
        let propulsion = default_propulsion();
        assert_abs_diff_eq!(propulsion.mass(8.849 - 1e-9, true), 1480.0, epsilon = 1e-3);
    }

    #[test]
    fn test_mass_holds_after_burnout() {
        let propulsion = default_propulsion();
        assert_eq!(propulsion.mass(8.849, false), 1480.0);
        assert_eq!(propulsion.mass(100.0, false), 1480.0);
    }

    #[test]
    fn test_mass_schedule_counts_from_start_time() {
        let params = Parameters {
            start_time: 5.0,
            burn_end_time: 15.0,
            initial_mass: 100.0,
            final_mass: 50.0,
            ..Parameters::default()
        };
        let propulsion = Propulsion::from_config(&SimulationConfig::new(params).unwrap());

        assert_eq!(propulsion.mass(5.0, true), 100.0);
        assert_relative_eq!(propulsion.mass(10.0, true), 75.0, epsilon = 1e-12);
    }
}
