use serde::{Deserialize, Serialize};

/// Fuel consumption of a single operation mode, split per system.
///
/// `propulsion_engines_kg` and `average_fuel_consumption_l_per_nm` are zero
/// by convention for the stationary modes. `steam_boilers_kg` is `None` for
/// vessel types without boilers, `Some(0.0)` where a boiler exists but was
/// idle in the mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelConsumptionBreakdown {
    pub subtotal_kg: f64,
    pub auxiliary_engines_kg: f64,
    pub propulsion_engines_kg: f64,
    pub average_fuel_consumption_l_per_nm: f64,
    pub steam_boilers_kg: Option<f64>,
}

/// Complete fuel consumption estimate across all operation modes.
///
/// `total_kg` is the exact sum of the four mode subtotals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelConsumptionResult {
    pub total_kg: f64,
    pub at_berth: FuelConsumptionBreakdown,
    pub anchored: FuelConsumptionBreakdown,
    pub manoeuvring: FuelConsumptionBreakdown,
    pub at_sea: FuelConsumptionBreakdown,
}

/// Energy counterpart of [`FuelConsumptionBreakdown`], in kWh delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyConsumptionBreakdown {
    pub subtotal_kwh: f64,
    pub auxiliary_engines_kwh: f64,
    pub propulsion_engines_kwh: f64,
    pub steam_boilers_kwh: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyConsumptionResult {
    pub total_kwh: f64,
    pub at_berth: EnergyConsumptionBreakdown,
    pub anchored: EnergyConsumptionBreakdown,
    pub manoeuvring: EnergyConsumptionBreakdown,
    pub at_sea: EnergyConsumptionBreakdown,
}
