use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Distances between absolute temperatures.
pub trait TemperatureMargin {
    /// Signed difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// How far `self` sits below `limit`, or zero once it reaches it.
    fn headroom_below(self, limit: Self) -> TemperatureInterval;
}

impl TemperatureMargin for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.get::<kelvin>() - other.get::<kelvin>())
    }

    fn headroom_below(self, limit: Self) -> TemperatureInterval {
        let margin = limit.minus(self).get::<delta_kelvin>();
        TemperatureInterval::new::<delta_kelvin>(margin.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    fn kelvins(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn signed_difference() {
        assert_relative_eq!(kelvins(1_200.0).minus(kelvins(300.0)).get::<delta_kelvin>(), 900.0);
        assert_relative_eq!(kelvins(300.0).minus(kelvins(1_200.0)).get::<delta_kelvin>(), -900.0);

        let room = ThermodynamicTemperature::new::<degree_celsius>(26.85);
        assert_relative_eq!(
            kelvins(300.0).minus(room).get::<delta_kelvin>(),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn headroom_stops_at_the_limit() {
        let limit = kelvins(1_200.0);

        assert_relative_eq!(kelvins(900.0).headroom_below(limit).get::<delta_kelvin>(), 300.0);
        assert_relative_eq!(kelvins(1_200.0).headroom_below(limit).get::<delta_kelvin>(), 0.0);
        assert_relative_eq!(kelvins(1_500.0).headroom_below(limit).get::<delta_kelvin>(), 0.0);
    }
}
