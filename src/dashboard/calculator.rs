//! Emission Calculator
//!
//! Converts raw usage quantities into tCO₂ emissions using fixed
//! per-source factors. Pure arithmetic: no I/O, no error path, fully
//! idempotent for identical inputs.

use serde::{Deserialize, Serialize};

/// Fixed multipliers converting usage into tCO₂ emissions.
///
/// Source: 한국환경산업기술원 environmental footprint evaluation factors.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct EmissionFactors {
    /// tCO₂ per kWh of electricity
    pub power: f64,
    /// tCO₂ per liter of diesel
    pub diesel: f64,
    /// tCO₂ per m³ of city gas
    pub city_gas: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            power: 0.0004594,
            diesel: 0.00261,
            city_gas: 0.00216,
        }
    }
}

/// Usage quantities entered on the data-management form.
///
/// Not persisted anywhere; lost when the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct UsageInput {
    /// Electricity usage in kWh
    pub power_kwh: f64,
    /// Diesel usage in liters
    pub diesel_l: f64,
    /// City gas usage in m³
    pub city_gas_m3: f64,
}

impl UsageInput {
    pub fn new(power_kwh: f64, diesel_l: f64, city_gas_m3: f64) -> Self {
        Self {
            power_kwh,
            diesel_l,
            city_gas_m3,
        }
    }

    /// Build usage from free-text form fields.
    ///
    /// Unparseable or non-finite values default to zero, so a half-typed
    /// form never throws and never feeds NaN into a chart dataset.
    pub fn from_form(power: &str, diesel: &str, city_gas: &str) -> Self {
        Self {
            power_kwh: parse_field(power),
            diesel_l: parse_field(diesel),
            city_gas_m3: parse_field(city_gas),
        }
    }

    /// Derive emissions from this usage with the given factors
    pub fn emissions(&self, factors: &EmissionFactors) -> EmissionBreakdown {
        EmissionBreakdown {
            power_t: self.power_kwh * factors.power,
            diesel_t: self.diesel_l * factors.diesel,
            city_gas_t: self.city_gas_m3 * factors.city_gas,
        }
    }
}

fn parse_field(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Per-source emissions in tCO₂
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionBreakdown {
    pub power_t: f64,
    pub diesel_t: f64,
    pub city_gas_t: f64,
}

impl EmissionBreakdown {
    /// Sum across all three sources
    pub fn total(&self) -> f64 {
        self.power_t + self.diesel_t + self.city_gas_t
    }

    /// Values in chart order: power, diesel, city gas
    pub fn as_series(&self) -> [f64; 3] {
        [self.power_t, self.diesel_t, self.city_gas_t]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emissions_are_usage_times_factor() {
        let factors = EmissionFactors::default();
        let usage = UsageInput::new(1000.0, 50.0, 200.0);
        let breakdown = usage.emissions(&factors);

        assert_eq!(breakdown.power_t, 1000.0 * 0.0004594);
        assert_eq!(breakdown.diesel_t, 50.0 * 0.00261);
        assert_eq!(breakdown.city_gas_t, 200.0 * 0.00216);
        assert_eq!(
            breakdown.total(),
            breakdown.power_t + breakdown.diesel_t + breakdown.city_gas_t
        );
    }

    #[test]
    fn zero_usage_emits_zero() {
        let breakdown = UsageInput::default().emissions(&EmissionFactors::default());
        assert_eq!(breakdown.as_series(), [0.0, 0.0, 0.0]);
        assert_eq!(breakdown.total(), 0.0);
    }

    #[test]
    fn invalid_form_input_parses_to_zero() {
        let usage = UsageInput::from_form("abc", "", "12,5");
        assert_eq!(usage, UsageInput::default());
    }

    #[test]
    fn nan_and_infinity_never_reach_the_dataset() {
        let usage = UsageInput::from_form("NaN", "inf", "-inf");
        assert_eq!(usage, UsageInput::default());

        let breakdown = usage.emissions(&EmissionFactors::default());
        assert!(breakdown.as_series().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn whitespace_and_valid_numbers_parse() {
        let usage = UsageInput::from_form(" 1200 ", "30.5", "0");
        assert_eq!(usage.power_kwh, 1200.0);
        assert_eq!(usage.diesel_l, 30.5);
        assert_eq!(usage.city_gas_m3, 0.0);
    }
}
