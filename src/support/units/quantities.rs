use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::Pressure,
        pressure::{bar, pascal},
    },
    typenum::{N1, P1, P2, Z0},
};

/// Reciprocal pressure, 1/Pa in SI.
///
/// Used for isothermal compressibility and viscosibility.
pub type ReciprocalPressure = Quantity<ISQ<P1, N1, P2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ReciprocalPressure`] from a value in 1/Pa.
#[must_use]
pub fn reciprocal_pascal(value: f64) -> ReciprocalPressure {
    value / Pressure::new::<pascal>(1.0)
}

/// Creates a [`ReciprocalPressure`] from a value in 1/bar.
#[must_use]
pub fn reciprocal_bar(value: f64) -> ReciprocalPressure {
    value / Pressure::new::<bar>(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    fn times_pressure_is_dimensionless() {
        let c = reciprocal_bar(2.0e-4);
        let dp = Pressure::new::<bar>(50.0);

        let x: Ratio = c * dp;
        assert_relative_eq!(x.get::<ratio>(), 1.0e-2);
    }

    #[test]
    fn per_pascal_values_are_stored_unscaled() {
        assert_eq!(reciprocal_pascal(1.0e-9).value, 1.0e-9);
        assert_eq!(reciprocal_pascal(-3.0e-10).value, -3.0e-10);
        assert_relative_eq!(reciprocal_bar(1.0e-4).value, 1.0e-9, max_relative = 1e-15);
    }
}
