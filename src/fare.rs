use serde::{Deserialize, Serialize};

use crate::entities::{AirportBracket, LocalRates, OutstationRates, RateCard};
use crate::error::{configuration_error, invalid_input_error, Error};

// The single fare engine for every trip type. Pure and stateless: one card,
// one journey, one integer fare. Direction is pre-folded into the journey
// (round trips arrive with the one-way distance already doubled).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Journey {
    Outstation { distance_km: f64, trip_days: u32 },
    Local { package_hours: u32, usage: Option<LocalUsage> },
    Airport { distance_km: f64 },
}

// Actual usage, supplied at settlement time only. Quote-time journeys carry
// no usage and price at the base package rate.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LocalUsage {
    pub used_km: f64,
    pub used_minutes: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fare {
    pub total: i64,
}

pub fn compute(card: &RateCard, journey: &Journey) -> Result<Fare, Error> {
    let total = match journey {
        Journey::Outstation {
            distance_km,
            trip_days,
        } => outstation_total(card.outstation_rates()?, *distance_km, *trip_days)?,
        Journey::Local {
            package_hours,
            usage,
        } => local_total(card.local_rates()?, *package_hours, usage.as_ref())?,
        Journey::Airport { distance_km } => airport_total(card.airport_brackets()?, *distance_km)?,
    };

    // Rates and distances are validated non-negative, so the raw total is
    // too; round half-up to whole currency units.
    Ok(Fare {
        total: total.round() as i64,
    })
}

fn outstation_total(
    rates: &OutstationRates,
    distance_km: f64,
    trip_days: u32,
) -> Result<f64, Error> {
    ensure_distance(distance_km)?;

    if trip_days == 0 {
        return Err(invalid_input_error());
    }

    // The billable floor: the per-trip minimum for single-day trips, a
    // per-day minimum otherwise. The two card fields may legitimately differ.
    let base_distance = if trip_days == 1 {
        f64::from(rates.min_billable_km)
    } else {
        f64::from(rates.per_day_km) * f64::from(trip_days)
    };

    let mut total = base_distance * rates.per_km + rates.driver_allowance * f64::from(trip_days);

    if distance_km > base_distance {
        total += (distance_km - base_distance) * rates.ex_km_rate;
    }

    Ok(total)
}

fn local_total(
    rates: &LocalRates,
    package_hours: u32,
    usage: Option<&LocalUsage>,
) -> Result<f64, Error> {
    let package = rates
        .packages
        .iter()
        .find(|package| package.duration_hours == package_hours)
        .ok_or_else(|| invalid_input_error())?;

    let included_minutes = f64::from(package.duration_hours * 60);
    let included_km = f64::from(package.included_km);

    // The whole package is priced at the base rates; no flat package price.
    let mut total = included_km * rates.base.per_km + included_minutes * rates.base.per_minute;

    if let Some(usage) = usage {
        ensure_distance(usage.used_km)?;
        ensure_distance(usage.used_minutes)?;

        total += (usage.used_km - included_km).max(0.0) * rates.overage.per_km
            + (usage.used_minutes - included_minutes).max(0.0) * rates.overage.per_minute;
    }

    Ok(total)
}

fn airport_total(brackets: &[AirportBracket], distance_km: f64) -> Result<f64, Error> {
    ensure_distance(distance_km)?;

    // The table invariant says ascending by max_distance_km; re-sort anyway
    // rather than trust it.
    let mut ordered: Vec<&AirportBracket> = brackets.iter().collect();
    ordered.sort_by_key(|bracket| bracket.max_distance_km);

    // Upper bounds are inclusive; anything past the table falls into the
    // last bracket.
    let bracket = ordered
        .iter()
        .find(|bracket| f64::from(bracket.max_distance_km) >= distance_km)
        .copied()
        .or_else(|| ordered.last().copied())
        .ok_or_else(|| configuration_error("vehicle has no airport rates"))?;

    Ok(distance_km * bracket.per_km_rate)
}

fn ensure_distance(value: f64) -> Result<(), Error> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid_input_error());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{LocalPackage, LocalRate};
    use crate::error;

    fn sedan_card() -> RateCard {
        RateCard {
            local: Some(LocalRates {
                packages: vec![
                    LocalPackage {
                        duration_hours: 1,
                        included_km: 10,
                    },
                    LocalPackage {
                        duration_hours: 4,
                        included_km: 40,
                    },
                    LocalPackage {
                        duration_hours: 8,
                        included_km: 80,
                    },
                ],
                base: LocalRate {
                    per_km: 17.0,
                    per_minute: 2.0,
                },
                overage: LocalRate {
                    per_km: 18.0,
                    per_minute: 3.0,
                },
            }),
            outstation: Some(OutstationRates {
                per_km: 15.0,
                ex_km_rate: 17.0,
                min_billable_km: 250,
                per_day_km: 270,
                driver_allowance: 350.0,
            }),
            airport: Some(vec![
                AirportBracket {
                    max_distance_km: 25,
                    per_km_rate: 50.0,
                },
                AirportBracket {
                    max_distance_km: 30,
                    per_km_rate: 46.0,
                },
                AirportBracket {
                    max_distance_km: 35,
                    per_km_rate: 42.0,
                },
                AirportBracket {
                    max_distance_km: 40,
                    per_km_rate: 39.0,
                },
                AirportBracket {
                    max_distance_km: 45,
                    per_km_rate: 37.0,
                },
                AirportBracket {
                    max_distance_km: 50,
                    per_km_rate: 36.0,
                },
                AirportBracket {
                    max_distance_km: 55,
                    per_km_rate: 36.0,
                },
                AirportBracket {
                    max_distance_km: 60,
                    per_km_rate: 36.0,
                },
            ]),
        }
    }

    fn outstation(distance_km: f64, trip_days: u32) -> Journey {
        Journey::Outstation {
            distance_km,
            trip_days,
        }
    }

    fn airport(distance_km: f64) -> Journey {
        Journey::Airport { distance_km }
    }

    fn local(package_hours: u32, usage: Option<LocalUsage>) -> Journey {
        Journey::Local {
            package_hours,
            usage,
        }
    }

    fn total(journey: &Journey) -> i64 {
        compute(&sedan_card(), journey).unwrap().total
    }

    #[test]
    fn one_day_trip_below_minimum_bills_the_floor() {
        // 250 * 15 + 350
        assert_eq!(total(&outstation(200.0, 1)), 4100);
    }

    #[test]
    fn floor_fare_is_flat_below_the_minimum() {
        for distance_km in [0.0, 1.0, 100.0, 249.9, 250.0] {
            assert_eq!(total(&outstation(distance_km, 1)), 4100);
        }
    }

    #[test]
    fn excess_distance_bills_at_the_ex_km_rate() {
        // 250 * 15 + 350 + 50 * 17
        assert_eq!(total(&outstation(300.0, 1)), 4950);
    }

    #[test]
    fn excess_starts_exactly_past_the_floor() {
        assert_eq!(total(&outstation(250.0, 1)), 4100);
        assert_eq!(total(&outstation(251.0, 1)), 4117);
    }

    #[test]
    fn multi_day_floor_scales_per_day() {
        // base 270 * 2 = 540 km; 540 * 15 + 350 * 2
        assert_eq!(total(&outstation(100.0, 2)), 8800);
    }

    #[test]
    fn multi_day_excess_and_allowance_accrue() {
        // base 810 km; 810 * 15 + 350 * 3 + 190 * 17
        assert_eq!(total(&outstation(1000.0, 3)), 16430);
    }

    #[test]
    fn zero_trip_days_is_invalid() {
        let err = compute(&sedan_card(), &outstation(100.0, 0)).unwrap_err();
        assert_eq!(err.code, error::INVALID_INPUT);
    }

    #[test]
    fn negative_distance_is_invalid() {
        let err = compute(&sedan_card(), &outstation(-1.0, 1)).unwrap_err();
        assert_eq!(err.code, error::INVALID_INPUT);

        let err = compute(&sedan_card(), &airport(-1.0)).unwrap_err();
        assert_eq!(err.code, error::INVALID_INPUT);
    }

    #[test]
    fn airport_bracket_selection() {
        // first bracket with max >= 28 is the 30 km one
        assert_eq!(total(&airport(28.0)), 1288);
    }

    #[test]
    fn airport_bracket_upper_bound_is_inclusive() {
        // exactly 25 km stays in the 25 km bracket
        assert_eq!(total(&airport(25.0)), 1250);
    }

    #[test]
    fn airport_beyond_all_brackets_uses_the_last() {
        // 100 * 36
        assert_eq!(total(&airport(100.0)), 3600);
    }

    #[test]
    fn airport_table_is_resorted_before_lookup() {
        let mut card = sedan_card();
        card.airport.as_mut().unwrap().reverse();

        assert_eq!(compute(&card, &airport(28.0)).unwrap().total, 1288);
        assert_eq!(compute(&card, &airport(100.0)).unwrap().total, 3600);
    }

    #[test]
    fn airport_zero_distance_prices_to_zero() {
        // the bracket formula carries no floor
        assert_eq!(total(&airport(0.0)), 0);
    }

    #[test]
    fn local_package_prices_at_base_rates() {
        // 40 * 17 + 240 * 2
        assert_eq!(total(&local(4, None)), 1160);
        // 80 * 17 + 480 * 2
        assert_eq!(total(&local(8, None)), 2320);
    }

    #[test]
    fn local_unknown_package_is_invalid() {
        let err = compute(&sedan_card(), &local(6, None)).unwrap_err();
        assert_eq!(err.code, error::INVALID_INPUT);
    }

    #[test]
    fn local_usage_within_the_package_adds_nothing() {
        let usage = LocalUsage {
            used_km: 30.0,
            used_minutes: 200.0,
        };

        assert_eq!(total(&local(4, Some(usage))), 1160);
    }

    #[test]
    fn local_overage_bills_beyond_the_package() {
        // 1160 + 10 * 18 + 30 * 3
        let usage = LocalUsage {
            used_km: 50.0,
            used_minutes: 270.0,
        };

        assert_eq!(total(&local(4, Some(usage))), 1430);
    }

    #[test]
    fn local_overage_components_are_independent() {
        // only distance runs over: 1160 + 5 * 18
        let usage = LocalUsage {
            used_km: 45.0,
            used_minutes: 240.0,
        };

        assert_eq!(total(&local(4, Some(usage))), 1250);
    }

    #[test]
    fn negative_usage_is_invalid() {
        let usage = LocalUsage {
            used_km: -5.0,
            used_minutes: 0.0,
        };

        let err = compute(&sedan_card(), &local(4, Some(usage))).unwrap_err();
        assert_eq!(err.code, error::INVALID_INPUT);
    }

    #[test]
    fn missing_sections_signal_configuration() {
        let bare = RateCard {
            local: None,
            outstation: None,
            airport: None,
        };

        for journey in [outstation(100.0, 1), local(4, None), airport(10.0)] {
            let err = compute(&bare, &journey).unwrap_err();
            assert_eq!(err.code, error::CONFIGURATION);
        }
    }

    #[test]
    fn results_round_half_up() {
        // 28.25 * 46 = 1299.5
        assert_eq!(total(&airport(28.25)), 1300);
        // 4100 + 0.5 * 17 = 4108.5
        assert_eq!(total(&outstation(250.5, 1)), 4109);
        // 10.004 * 50 = 500.2
        assert_eq!(total(&airport(10.004)), 500);
    }

    #[test]
    fn identical_input_yields_identical_fares() {
        let card = sedan_card();
        let journey = outstation(312.0, 2);

        assert_eq!(
            compute(&card, &journey).unwrap(),
            compute(&card, &journey).unwrap()
        );
    }

    #[test]
    fn outstation_fares_are_monotone_in_distance() {
        let card = sedan_card();

        for trip_days in [1, 3] {
            let mut previous = 0;
            let mut distance_km = 0.0;

            while distance_km <= 900.0 {
                let fare = compute(&card, &outstation(distance_km, trip_days)).unwrap();
                assert!(fare.total >= previous);

                previous = fare.total;
                distance_km += 7.5;
            }
        }
    }

    #[test]
    fn airport_fares_are_monotone_within_a_bracket() {
        // the cheaper per-km rate just past each boundary makes the fare dip
        // across brackets (25 km at 50/km is 1250, 26 km at 46/km is 1196),
        // so distance-monotonicity only holds bracket by bracket
        let card = sedan_card();

        for (lower, upper) in [(25.0, 30.0), (30.0, 35.0), (55.0, 60.0), (60.0, 200.0)] {
            let mut previous = 0;
            let mut distance_km = lower + 0.5;

            while distance_km <= upper {
                let fare = compute(&card, &airport(distance_km)).unwrap();
                assert!(fare.total >= previous);

                previous = fare.total;
                distance_km += 0.5;
            }
        }
    }
}
