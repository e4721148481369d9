use serde::{Deserialize, Serialize};

use crate::error::{configuration_error, Error};

// Rate sections are per-trip-type capabilities: a vehicle that does not offer
// a trip type omits the section entirely. A present section must be complete
// and well-formed, which validate() enforces before a card is seeded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateCard {
    pub local: Option<LocalRates>,
    pub outstation: Option<OutstationRates>,
    pub airport: Option<Vec<AirportBracket>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalRates {
    pub packages: Vec<LocalPackage>,
    pub base: LocalRate,
    pub overage: LocalRate,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalPackage {
    pub duration_hours: u32,
    pub included_km: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalRate {
    pub per_km: f64,
    pub per_minute: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutstationRates {
    pub per_km: f64,
    pub ex_km_rate: f64,
    // Single-day trips bill at least min_billable_km; multi-day trips bill at
    // least per_day_km per day. The two floors are separate fields on purpose.
    pub min_billable_km: u32,
    pub per_day_km: u32,
    pub driver_allowance: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AirportBracket {
    pub max_distance_km: u32,
    pub per_km_rate: f64,
}

impl RateCard {
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(local) = &self.local {
            local.validate()?;
        }

        if let Some(outstation) = &self.outstation {
            outstation.validate()?;
        }

        if let Some(brackets) = &self.airport {
            if brackets.is_empty() {
                return Err(configuration_error("airport rate table is empty"));
            }

            for bracket in brackets {
                ensure_rate(bracket.per_km_rate, "airport per_km_rate")?;
            }
        }

        Ok(())
    }

    pub fn local_rates(&self) -> Result<&LocalRates, Error> {
        self.local
            .as_ref()
            .ok_or_else(|| configuration_error("vehicle has no local rates"))
    }

    pub fn outstation_rates(&self) -> Result<&OutstationRates, Error> {
        self.outstation
            .as_ref()
            .ok_or_else(|| configuration_error("vehicle has no outstation rates"))
    }

    pub fn airport_brackets(&self) -> Result<&[AirportBracket], Error> {
        match &self.airport {
            Some(brackets) if !brackets.is_empty() => Ok(brackets),
            _ => Err(configuration_error("vehicle has no airport rates")),
        }
    }
}

impl LocalRates {
    fn validate(&self) -> Result<(), Error> {
        if self.packages.is_empty() {
            return Err(configuration_error("local rates carry no packages"));
        }

        for (i, package) in self.packages.iter().enumerate() {
            if package.duration_hours == 0 {
                return Err(configuration_error("local package has zero duration"));
            }

            if self.packages[..i]
                .iter()
                .any(|other| other.duration_hours == package.duration_hours)
            {
                return Err(configuration_error(format!(
                    "duplicate {}hr local package",
                    package.duration_hours
                )));
            }
        }

        ensure_rate(self.base.per_km, "local base per_km")?;
        ensure_rate(self.base.per_minute, "local base per_minute")?;
        ensure_rate(self.overage.per_km, "local overage per_km")?;
        ensure_rate(self.overage.per_minute, "local overage per_minute")?;

        Ok(())
    }
}

impl OutstationRates {
    fn validate(&self) -> Result<(), Error> {
        ensure_rate(self.per_km, "outstation per_km")?;
        ensure_rate(self.ex_km_rate, "outstation ex_km_rate")?;
        ensure_rate(self.driver_allowance, "outstation driver_allowance")?;

        Ok(())
    }
}

fn ensure_rate(value: f64, field: &str) -> Result<(), Error> {
    if !value.is_finite() || value < 0.0 {
        return Err(configuration_error(format!(
            "{} must be a non-negative number",
            field
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    fn full_card() -> RateCard {
        RateCard {
            local: Some(LocalRates {
                packages: vec![
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
            ]),
        }
    }

    #[test]
    fn full_card_validates() {
        full_card().validate().unwrap();
    }

    #[test]
    fn absent_sections_validate() {
        let card = RateCard {
            local: None,
            outstation: None,
            airport: None,
        };

        card.validate().unwrap();
    }

    #[test]
    fn empty_airport_table_is_rejected() {
        let mut card = full_card();
        card.airport = Some(vec![]);

        let err = card.validate().unwrap_err();
        assert_eq!(err.code, error::CONFIGURATION);
    }

    #[test]
    fn empty_package_list_is_rejected() {
        let mut card = full_card();
        card.local.as_mut().unwrap().packages.clear();

        let err = card.validate().unwrap_err();
        assert_eq!(err.code, error::CONFIGURATION);
    }

    #[test]
    fn zero_duration_package_is_rejected() {
        let mut card = full_card();
        card.local.as_mut().unwrap().packages[0].duration_hours = 0;

        let err = card.validate().unwrap_err();
        assert_eq!(err.code, error::CONFIGURATION);
    }

    #[test]
    fn duplicate_package_duration_is_rejected() {
        let mut card = full_card();
        card.local.as_mut().unwrap().packages[1].duration_hours = 4;

        let err = card.validate().unwrap_err();
        assert_eq!(err.code, error::CONFIGURATION);
    }

    #[test]
    fn negative_rate_is_rejected() {
        let mut card = full_card();
        card.outstation.as_mut().unwrap().per_km = -1.0;

        let err = card.validate().unwrap_err();
        assert_eq!(err.code, error::CONFIGURATION);
    }

    #[test]
    fn non_finite_rate_is_rejected() {
        let mut card = full_card();
        card.local.as_mut().unwrap().base.per_minute = f64::NAN;

        let err = card.validate().unwrap_err();
        assert_eq!(err.code, error::CONFIGURATION);
    }

    #[test]
    fn missing_section_accessors_signal_configuration() {
        let card = RateCard {
            local: None,
            outstation: None,
            airport: None,
        };

        assert_eq!(card.local_rates().unwrap_err().code, error::CONFIGURATION);
        assert_eq!(
            card.outstation_rates().unwrap_err().code,
            error::CONFIGURATION
        );
        assert_eq!(
            card.airport_brackets().unwrap_err().code,
            error::CONFIGURATION
        );
    }
}
