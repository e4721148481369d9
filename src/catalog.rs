use crate::entities::{
    AirportBracket, LocalPackage, LocalRate, LocalRates, OutstationRates, RateCard, Vehicle,
};

// The published fleet. Seeded into the vehicles table at engine start, so a
// rate change here lands on the next deploy.

const STANDARD_PACKAGES: [(u32, u32); 3] = [(1, 10), (4, 40), (8, 80)];
const SHORT_PACKAGES: [(u32, u32); 2] = [(1, 10), (8, 80)];

pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: 1,
            category: "Sedan".into(),
            name: "Swift Dzire / Etios / Similar".into(),
            image: "/cars/etios.png".into(),
            seating_capacity: 4,
            luggage_capacity: 2,
            features: features(&["AC", "Music System", "Comfortable Seating"]),
            rates: RateCard {
                local: local(&STANDARD_PACKAGES, rate(17.0, 2.0), rate(18.0, 3.0)),
                outstation: outstation(15.0, 17.0, 250, 270, 350.0),
                airport: airport(&[
                    (25, 50.0),
                    (30, 46.0),
                    (35, 42.0),
                    (40, 39.0),
                    (45, 37.0),
                    (50, 36.0),
                    (55, 36.0),
                    (60, 36.0),
                ]),
            },
        },
        Vehicle {
            id: 2,
            category: "Sedan".into(),
            name: "Ciaze / Honda City".into(),
            image: "/cars/hondacity.png".into(),
            seating_capacity: 4,
            luggage_capacity: 3,
            features: features(&[
                "AC",
                "Music System",
                "Comfortable Seating",
                "Extra Legroom",
            ]),
            rates: RateCard {
                local: local(&STANDARD_PACKAGES, rate(19.0, 2.5), rate(20.0, 3.5)),
                outstation: outstation(17.0, 19.0, 250, 270, 350.0),
                airport: None,
            },
        },
        Vehicle {
            id: 3,
            category: "SUV".into(),
            name: "Ertiga / Similar".into(),
            image: "/cars/ertiga.png".into(),
            seating_capacity: 6,
            luggage_capacity: 3,
            features: features(&["AC", "Music System", "Spacious", "Family Friendly"]),
            rates: RateCard {
                local: local(&STANDARD_PACKAGES, rate(21.0, 2.8), rate(22.0, 3.5)),
                outstation: outstation(20.0, 22.0, 250, 270, 400.0),
                airport: airport(&[
                    (25, 64.0),
                    (30, 59.0),
                    (35, 55.0),
                    (40, 50.0),
                    (45, 49.0),
                    (50, 50.0),
                    (55, 50.0),
                    (60, 50.0),
                ]),
            },
        },
        Vehicle {
            id: 4,
            category: "SUV".into(),
            name: "Innova".into(),
            image: "/cars/innova.png".into(),
            seating_capacity: 7,
            luggage_capacity: 4,
            features: features(&[
                "AC",
                "Music System",
                "Spacious",
                "Comfortable for Long Journeys",
            ]),
            rates: RateCard {
                local: local(&STANDARD_PACKAGES, rate(24.0, 3.5), rate(28.0, 4.5)),
                outstation: outstation(21.0, 23.0, 250, 270, 450.0),
                airport: airport(&[
                    (25, 70.0),
                    (30, 68.0),
                    (35, 66.0),
                    (40, 64.0),
                    (45, 62.0),
                    (50, 61.0),
                    (55, 60.0),
                    (60, 60.0),
                ]),
            },
        },
        Vehicle {
            id: 5,
            category: "SUV".into(),
            name: "Innova Crysta".into(),
            image: "/cars/innova-crysta.png".into(),
            seating_capacity: 7,
            luggage_capacity: 4,
            features: features(&["AC", "Music System", "Premium Interior", "Extra Comfort"]),
            rates: RateCard {
                local: local(&STANDARD_PACKAGES, rate(27.0, 3.6), rate(30.0, 5.5)),
                outstation: outstation(23.0, 25.0, 250, 270, 450.0),
                airport: airport(&[
                    (25, 78.0),
                    (30, 76.0),
                    (35, 74.0),
                    (40, 72.0),
                    (45, 70.0),
                    (50, 68.0),
                    (55, 67.0),
                    (60, 66.0),
                ]),
            },
        },
        Vehicle {
            id: 6,
            category: "SUV".into(),
            name: "Innova Hycroos".into(),
            image: "/cars/innova-hycross.png".into(),
            seating_capacity: 7,
            luggage_capacity: 4,
            features: features(&["AC", "Music System", "Premium Interior", "Extra Comfort"]),
            rates: RateCard {
                local: local(&STANDARD_PACKAGES, rate(30.0, 4.3), rate(35.0, 9.0)),
                outstation: outstation(25.0, 27.0, 250, 270, 450.0),
                airport: None,
            },
        },
        Vehicle {
            id: 7,
            category: "Luxury".into(),
            name: "Fortuner".into(),
            image: "/cars/fortuner.png".into(),
            seating_capacity: 7,
            luggage_capacity: 4,
            features: features(&["AC", "Music System", "Luxury Interior", "Powerful Engine"]),
            rates: RateCard {
                local: local(&[(8, 80)], rate(100.0, 15.83), rate(70.0, 12.0)),
                // excess follows the fleet-wide per_km + 2 step
                outstation: outstation(70.0, 72.0, 300, 320, 750.0),
                airport: None,
            },
        },
        Vehicle {
            id: 8,
            category: "Luxury".into(),
            name: "Mercedes E Class / BMW 5 Series".into(),
            image: "/cars/benz-e-class.png".into(),
            seating_capacity: 4,
            luggage_capacity: 3,
            features: features(&[
                "AC",
                "Premium Sound System",
                "Luxury Interior",
                "Executive Comfort",
            ]),
            rates: RateCard {
                local: local(&SHORT_PACKAGES, rate(100.0, 15.83), rate(120.0, 20.0)),
                outstation: outstation(120.0, 122.0, 300, 320, 850.0),
                airport: None,
            },
        },
        Vehicle {
            id: 9,
            category: "Luxury".into(),
            name: "Mercedes S Class / BMW 7 Series".into(),
            image: "/cars/mercedes-s-class.png".into(),
            seating_capacity: 4,
            luggage_capacity: 3,
            features: features(&[
                "AC",
                "Premium Sound System",
                "Luxury Interior",
                "Executive Comfort",
            ]),
            rates: RateCard {
                local: local(&SHORT_PACKAGES, rate(125.0, 20.0), rate(180.0, 30.0)),
                outstation: outstation(180.0, 182.0, 300, 320, 850.0),
                airport: None,
            },
        },
        Vehicle {
            id: 10,
            category: "Tempo Traveler".into(),
            name: "Tempo Traveler (Non A/C)".into(),
            image: "/cars/tempo.png".into(),
            seating_capacity: 12,
            luggage_capacity: 8,
            features: features(&["Spacious", "Group Travel", "Comfortable Seating"]),
            rates: RateCard {
                local: local(&SHORT_PACKAGES, rate(25.0, 3.75), rate(30.0, 5.0)),
                outstation: outstation(24.0, 26.0, 250, 270, 500.0),
                airport: None,
            },
        },
        Vehicle {
            id: 11,
            category: "Tempo Traveler".into(),
            name: "Tempo Traveler (A/C)".into(),
            image: "/cars/tempo.png".into(),
            seating_capacity: 12,
            luggage_capacity: 8,
            features: features(&["AC", "Spacious", "Group Travel", "Comfortable Seating"]),
            rates: RateCard {
                local: local(&SHORT_PACKAGES, rate(28.0, 5.0), rate(35.0, 6.5)),
                outstation: outstation(26.0, 28.0, 250, 270, 500.0),
                airport: None,
            },
        },
    ]
}

fn features(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn rate(per_km: f64, per_minute: f64) -> LocalRate {
    LocalRate { per_km, per_minute }
}

fn local(packages: &[(u32, u32)], base: LocalRate, overage: LocalRate) -> Option<LocalRates> {
    Some(LocalRates {
        packages: packages
            .iter()
            .map(|&(duration_hours, included_km)| LocalPackage {
                duration_hours,
                included_km,
            })
            .collect(),
        base,
        overage,
    })
}

fn outstation(
    per_km: f64,
    ex_km_rate: f64,
    min_billable_km: u32,
    per_day_km: u32,
    driver_allowance: f64,
) -> Option<OutstationRates> {
    Some(OutstationRates {
        per_km,
        ex_km_rate,
        min_billable_km,
        per_day_km,
        driver_allowance,
    })
}

fn airport(rows: &[(u32, f64)]) -> Option<Vec<AirportBracket>> {
    Some(
        rows.iter()
            .map(|&(max_distance_km, per_km_rate)| AirportBracket {
                max_distance_km,
                per_km_rate,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare::{self, Journey};

    #[test]
    fn every_seed_card_validates() {
        for vehicle in vehicles() {
            vehicle.rates.validate().unwrap();
        }
    }

    #[test]
    fn seed_ids_are_dense_and_unique() {
        let fleet = vehicles();

        let mut ids: Vec<i32> = fleet.iter().map(|vehicle| vehicle.id).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), fleet.len());
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&(fleet.len() as i32)));
    }

    #[test]
    fn airport_tables_exist_only_where_published() {
        let with_airport: Vec<i32> = vehicles()
            .iter()
            .filter(|vehicle| vehicle.rates.airport.is_some())
            .map(|vehicle| vehicle.id)
            .collect();

        assert_eq!(with_airport, vec![1, 3, 4, 5]);
    }

    #[test]
    fn every_vehicle_offers_local_and_outstation() {
        for vehicle in vehicles() {
            assert!(vehicle.rates.local.is_some(), "vehicle {}", vehicle.id);
            assert!(vehicle.rates.outstation.is_some(), "vehicle {}", vehicle.id);
        }
    }

    #[test]
    fn the_seed_sedan_prices_the_published_scenarios() {
        let fleet = vehicles();
        let sedan = &fleet[0];

        let outstation = fare::compute(
            &sedan.rates,
            &Journey::Outstation {
                distance_km: 300.0,
                trip_days: 1,
            },
        )
        .unwrap();
        assert_eq!(outstation.total, 4950);

        let airport = fare::compute(&sedan.rates, &Journey::Airport { distance_km: 28.0 }).unwrap();
        assert_eq!(airport.total, 1288);
    }
}
