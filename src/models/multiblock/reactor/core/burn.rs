use log::trace;

use crate::support::constraint::NonNegative;

use super::{FissionReactor, ReactorError};

/// Downstream capacity available to absorb the reactor's output.
///
/// Typically the aggregate of a turbine fleet: the steam it can process and
/// the condensed water it returns each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbinePairing {
    pub steam_flow: f64,
    pub water_return: f64,
}

/// The stage that capped a requested burn rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BurnLimit {
    /// The request was achievable as given.
    None,
    /// The reactor lacks fuel assemblies for the request.
    Fuel,
    /// The paired turbines cannot process the steam.
    Steam,
    /// The paired turbines cannot return enough water.
    Water,
}

/// Outcome of [`FissionReactor::analyse_burn_rate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnRateAnalysis {
    pub requested: f64,
    pub achievable: f64,
    pub limited_by: BurnLimit,
    /// Coolant heated per tick at the achievable rate.
    pub heating_rate: f64,
}

impl FissionReactor {
    /// Clamps a requested burn rate to what the reactor and an optional
    /// turbine pairing can sustain.
    ///
    /// The request is capped by the maximum burn rate, then by the steam the
    /// pairing can process, then by the water it returns. The last stage that
    /// lowered the rate is reported as the limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `requested` is negative, `NaN`, or infinite.
    ///
    /// # Example
    ///
    /// ```
    /// use fission_models::models::multiblock::reactor::{
    ///     BurnLimit, CoolingMode, FissionReactor, TurbinePairing,
    /// };
    ///
    /// let reactor = FissionReactor::new(5, 6, 5, CoolingMode::Water).unwrap();
    /// let pairing = TurbinePairing { steam_flow: 100_000.0, water_return: 1e9 };
    ///
    /// let analysis = reactor.analyse_burn_rate(10.0, Some(pairing)).unwrap();
    /// assert_eq!(analysis.achievable, 5.0);
    /// assert_eq!(analysis.limited_by, BurnLimit::Steam);
    /// ```
    pub fn analyse_burn_rate(
        &self,
        requested: f64,
        pairing: Option<TurbinePairing>,
    ) -> Result<BurnRateAnalysis, ReactorError> {
        if requested.is_infinite() {
            return Err(ReactorError::InfiniteBurnRate);
        }
        let requested = NonNegative::new(requested)?.into_inner();

        let mut achievable = requested;
        let mut limited_by = BurnLimit::None;

        let max_burn = self.max_burn_rate();
        if achievable > max_burn {
            achievable = max_burn;
            limited_by = BurnLimit::Fuel;
        }

        if let Some(pairing) = pairing {
            let steam_per_burn = self.cooling_mode().steam_per_burn();

            let steam_limited = pairing.steam_flow.max(0.0) / steam_per_burn;
            if achievable > steam_limited {
                achievable = steam_limited;
                limited_by = BurnLimit::Steam;
            }

            let water_limited = pairing.water_return.max(0.0) / steam_per_burn;
            if achievable > water_limited {
                achievable = water_limited;
                limited_by = BurnLimit::Water;
            }
        }

        trace!("burn rate {requested} -> {achievable} ({limited_by:?})");

        Ok(BurnRateAnalysis {
            requested,
            achievable,
            limited_by,
            heating_rate: self.heated_coolant_per_tick(achievable),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{models::multiblock::reactor::CoolingMode, support::constraint::ConstraintError};

    fn reactor(cooling: CoolingMode) -> FissionReactor {
        // 3x3 interior, 5 rods of 3 assemblies: max burn 15.
        FissionReactor::new(5, 6, 5, cooling).unwrap()
    }

    #[test]
    fn unconstrained_request_passes_through() {
        let analysis = reactor(CoolingMode::Water)
            .analyse_burn_rate(7.5, None)
            .unwrap();

        assert_eq!(analysis.limited_by, BurnLimit::None);
        assert_relative_eq!(analysis.achievable, 7.5);
        assert_relative_eq!(analysis.heating_rate, 150_000.0);
    }

    #[test]
    fn fuel_caps_the_request() {
        let analysis = reactor(CoolingMode::Water)
            .analyse_burn_rate(100.0, None)
            .unwrap();

        assert_eq!(analysis.limited_by, BurnLimit::Fuel);
        assert_relative_eq!(analysis.requested, 100.0);
        assert_relative_eq!(analysis.achievable, 15.0);
    }

    #[test]
    fn water_return_applies_after_steam() {
        let pairing = TurbinePairing {
            steam_flow: 200_000.0,
            water_return: 60_000.0,
        };
        let analysis = reactor(CoolingMode::Water)
            .analyse_burn_rate(12.0, Some(pairing))
            .unwrap();

        assert_eq!(analysis.limited_by, BurnLimit::Water);
        assert_relative_eq!(analysis.achievable, 3.0);
    }

    #[test]
    fn sodium_steam_goes_through_the_boiler_ratio() {
        // Sodium raises 4 000 steam per burned mB.
        let pairing = TurbinePairing {
            steam_flow: 20_000.0,
            water_return: 1e12,
        };
        let analysis = reactor(CoolingMode::Sodium)
            .analyse_burn_rate(12.0, Some(pairing))
            .unwrap();

        assert_eq!(analysis.limited_by, BurnLimit::Steam);
        assert_relative_eq!(analysis.achievable, 5.0);
        assert_relative_eq!(analysis.heating_rate, 1_000_000.0);
    }

    #[test]
    fn idle_reactor_is_valid() {
        let analysis = reactor(CoolingMode::Water)
            .analyse_burn_rate(0.0, None)
            .unwrap();
        assert_eq!(analysis.limited_by, BurnLimit::None);
        assert_relative_eq!(analysis.heating_rate, 0.0);
    }

    #[test]
    fn rejects_invalid_requests() {
        let reactor = reactor(CoolingMode::Water);

        assert_eq!(
            reactor.analyse_burn_rate(-1.0, None),
            Err(ReactorError::BurnRate(ConstraintError::Negative))
        );
        assert_eq!(
            reactor.analyse_burn_rate(f64::NAN, None),
            Err(ReactorError::BurnRate(ConstraintError::NotANumber))
        );
        assert_eq!(
            reactor.analyse_burn_rate(f64::INFINITY, None),
            Err(ReactorError::InfiniteBurnRate)
        );
    }
}
