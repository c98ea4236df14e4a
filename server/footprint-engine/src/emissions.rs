//! Emission calculator: monthly quantities to annual tons CO2 per category.

use tracing::debug;

use crate::error::EngineError;
use crate::types::{EmissionsResult, InputField, RawInputs};

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const KG_PER_TON: f64 = 1000.0;

/// kg CO2 per kWh of electricity.
pub const ELECTRICITY_FACTOR: f64 = 0.92;
/// kg CO2 per therm of natural gas.
pub const GAS_FACTOR: f64 = 5.3;
/// kg CO2 per liter of household fuel.
pub const FUEL_FACTOR: f64 = 2.31;
/// kg CO2 per liter burned while travelling.
pub const TRAVEL_FACTOR: f64 = 19.6;
/// kg CO2 per kg of non-recycled waste.
pub const WASTE_FACTOR: f64 = 0.3;

/// Annualize `inputs` and convert to tons CO2 per category.
///
/// The arithmetic is kept in a fixed order so results are reproducible to the
/// bit. Fuel efficiency is a divisor; zero returns `DivisionByZero` instead of
/// producing an infinite transportation figure. Entries that pass validation
/// but overflow once annualized (or divide by a subnormal efficiency) return
/// `NonFinite`.
pub fn calculate_emissions(inputs: &RawInputs) -> Result<EmissionsResult, EngineError> {
  if inputs.fuel_efficiency_mpl == 0.0 {
    return Err(EngineError::division_by_zero(InputField::FuelEfficiency.key()));
  }

  let electricity = inputs.electricity_kwh * MONTHS_PER_YEAR;
  let gas = inputs.gas_therms * MONTHS_PER_YEAR;
  let fuel = inputs.fuel_liters * MONTHS_PER_YEAR;
  let travel_distance = inputs.travel_miles * MONTHS_PER_YEAR;
  let waste = inputs.waste_kg * MONTHS_PER_YEAR;

  let energy_kg = electricity * ELECTRICITY_FACTOR + gas * GAS_FACTOR + fuel * FUEL_FACTOR;
  let transportation_kg = (travel_distance / inputs.fuel_efficiency_mpl) * TRAVEL_FACTOR;
  let waste_kg = waste * (1.0 - inputs.recycling_percent / 100.0) * WASTE_FACTOR;

  let result = EmissionsResult {
    energy: energy_kg / KG_PER_TON,
    transportation: transportation_kg / KG_PER_TON,
    waste: waste_kg / KG_PER_TON,
  };
  for (category, tons) in result.iter() {
    if !tons.is_finite() {
      return Err(EngineError::non_finite(category.key()));
    }
  }
  debug!(
    energy = result.energy,
    transportation = result.transportation,
    waste = result.waste,
    "computed annual emissions (tons CO2)"
  );
  Ok(result)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn example() -> RawInputs {
    RawInputs {
      electricity_kwh: 100.0,
      gas_therms: 20.0,
      fuel_liters: 10.0,
      travel_miles: 500.0,
      fuel_efficiency_mpl: 10.0,
      waste_kg: 50.0,
      recycling_percent: 50.0,
    }
  }

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
  }

  #[test]
  fn worked_example() {
    let r = calculate_emissions(&example()).unwrap();
    assert!(close(r.energy, 2.6532), "energy {}", r.energy);
    assert!(close(r.transportation, 11.76), "transportation {}", r.transportation);
    assert!(close(r.waste, 0.09), "waste {}", r.waste);
  }

  #[test]
  fn rates_are_not_annualized() {
    // Doubling efficiency halves transport; recycling percent is applied as-is.
    let mut inputs = example();
    inputs.fuel_efficiency_mpl = 20.0;
    inputs.recycling_percent = 100.0;
    let r = calculate_emissions(&inputs).unwrap();
    assert!(close(r.transportation, 5.88));
    assert_eq!(r.waste, 0.0);
  }

  #[test]
  fn each_monthly_quantity_scales_by_twelve() {
    let inputs = RawInputs {
      electricity_kwh: 1.0,
      gas_therms: 1.0,
      fuel_liters: 1.0,
      travel_miles: 1.0,
      fuel_efficiency_mpl: 1.0,
      waste_kg: 1.0,
      recycling_percent: 1.0,
    };
    let r = calculate_emissions(&inputs).unwrap();
    assert!(close(r.energy, 12.0 * (0.92 + 5.3 + 2.31) / 1000.0));
    assert!(close(r.transportation, 12.0 * 19.6 / 1000.0));
    assert!(close(r.waste, 12.0 * 0.99 * 0.3 / 1000.0));
  }

  #[test]
  fn zero_fuel_efficiency_is_an_error() {
    let mut inputs = example();
    inputs.fuel_efficiency_mpl = 0.0;
    match calculate_emissions(&inputs) {
      Err(EngineError::DivisionByZero { field }) => assert_eq!(field, "fuel_efficiency_mpl"),
      other => panic!("expected DivisionByZero, got {:?}", other),
    }
  }

  #[test]
  fn repeated_calls_are_identical() {
    let a = calculate_emissions(&example()).unwrap();
    let b = calculate_emissions(&example()).unwrap();
    assert_eq!(a.energy.to_bits(), b.energy.to_bits());
    assert_eq!(a.transportation.to_bits(), b.transportation.to_bits());
    assert_eq!(a.waste.to_bits(), b.waste.to_bits());
  }

  #[test]
  fn overflowing_quantities_are_an_error() {
    let mut inputs = example();
    inputs.electricity_kwh = 1e308;
    match calculate_emissions(&inputs) {
      Err(EngineError::NonFinite { category }) => assert_eq!(category, "energy"),
      other => panic!("expected NonFinite, got {:?}", other),
    }

    // inf x (1 - 100/100) would be NaN.
    let mut inputs = example();
    inputs.waste_kg = 1e308;
    inputs.recycling_percent = 100.0;
    match calculate_emissions(&inputs) {
      Err(EngineError::NonFinite { category }) => assert_eq!(category, "waste"),
      other => panic!("expected NonFinite, got {:?}", other),
    }
  }

  #[test]
  fn subnormal_fuel_efficiency_is_an_error() {
    let mut inputs = example();
    inputs.fuel_efficiency_mpl = 1e-310;
    assert!(inputs.validate().is_ok());
    match calculate_emissions(&inputs) {
      Err(EngineError::NonFinite { category }) => assert_eq!(category, "transportation"),
      other => panic!("expected NonFinite, got {:?}", other),
    }
  }

  #[test]
  fn valid_inputs_give_finite_non_negative_results() {
    let cases = [
      (0.001, 0.001, 1e-6, 100.0),
      (5_000.0, 0.5, 0.01, 0.01),
      (1e6, 1e3, 1e6, 99.9),
    ];
    for (quantity, efficiency, waste, recycling) in cases {
      let inputs = RawInputs {
        electricity_kwh: quantity,
        gas_therms: quantity,
        fuel_liters: quantity,
        travel_miles: quantity,
        fuel_efficiency_mpl: efficiency,
        waste_kg: waste,
        recycling_percent: recycling,
      };
      assert!(inputs.validate().is_ok());
      let r = calculate_emissions(&inputs).unwrap();
      for (_, tons) in r.iter() {
        assert!(tons.is_finite() && tons >= 0.0, "bad value {}", tons);
      }
    }
  }
}
