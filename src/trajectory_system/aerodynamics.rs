use crate::control::environment::Atmosphere;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub reference_area: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, reference_area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            reference_area,
        }
    }

    /// Unsigned drag magnitude in newtons.
    pub fn drag_magnitude(&self, pressure: f64, velocity: f64, atmosphere: &Atmosphere) -> f64 {
        let density = atmosphere.air_density(pressure);
        0.5 * density * velocity * velocity * self.drag_coefficient * self.reference_area
    }

    /// Drag force signed against the direction of travel. Zero at rest.
    pub fn calculate_drag(&self, pressure: f64, velocity: f64, atmosphere: &Atmosphere) -> f64 {
        if velocity == 0.0 {
            return 0.0;
        }

        let magnitude = self.drag_magnitude(pressure, velocity, atmosphere);
        -velocity.signum() * magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f64 = 1e-9;

    fn setup() -> (Aerodynamics, Atmosphere) {
        let config = SimulationConfig::default();
        let params = config.params();
        (
            Aerodynamics::new(params.drag_coefficient, params.reference_area),
            Atmosphere::from_config(&config),
        )
    }

    #[test]
    fn test_drag_at_sea_level() {
        let (aero, atmosphere) = setup();
        let drag = aero.drag_magnitude(101325.0, 100.0, &atmosphere);

        let density = 101325.0 / (287.053 * 300.0);
        let expected = 0.5 * density * 100.0 * 100.0 * 0.175 * (3.14159 / 4.0);
        assert_relative_eq!(drag, expected, epsilon = EPSILON);
    }

    #[test]
    fn test_drag_opposes_velocity() {
        let (aero, atmosphere) = setup();

        let ascending = aero.calculate_drag(101325.0, 50.0, &atmosphere);
        let descending = aero.calculate_drag(101325.0, -50.0, &atmosphere);

        assert!(ascending < 0.0);
        assert!(descending > 0.0);
        assert_relative_eq!(ascending, -descending, epsilon = EPSILON);
    }

    #[test]
    fn test_zero_velocity_edge_case() {
        let (aero, atmosphere) = setup();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let pressure = rng.gen_range(0.0..200_000.0);
            let drag = aero.calculate_drag(pressure, 0.0, &atmosphere);
            assert_eq!(drag, 0.0);
            assert!(drag.is_sign_positive());
        }
    }

    #[test]
    fn test_drag_scales_with_velocity_squared() {
        let (aero, atmosphere) = setup();
        let d1 = aero.drag_magnitude(50_000.0, 10.0, &atmosphere);
        let d2 = aero.drag_magnitude(50_000.0, 20.0, &atmosphere);
        assert_relative_eq!(d2, 4.0 * d1, epsilon = EPSILON);
    }

    #[test]
    fn test_no_drag_in_vacuum() {
        let (aero, atmosphere) = setup();
        assert_eq!(aero.calculate_drag(0.0, 1000.0, &atmosphere), 0.0);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let (aero, atmosphere) = setup();
        assert_eq!(
            aero.calculate_drag(80_000.0, 321.0, &atmosphere),
            aero.calculate_drag(80_000.0, 321.0, &atmosphere)
        );
    }
}
