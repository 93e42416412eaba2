use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Specifications of the reference components used for linear energy system
/// scaling. Process-wide defaults, overridable per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceValues {
    pub fuel_cell_volume_m3: f64,
    pub fuel_cell_weight_kg: f64,
    pub fuel_cell_power_kw: f64,
    pub fuel_cell_efficiency_pct: f64,
    pub battery_pack_volume_m3: f64,
    pub battery_pack_weight_kg: f64,
    pub battery_pack_capacity_kwh: f64,
    pub battery_pack_depth_of_discharge_pct: f64,
    pub hydrogen_gas_tank_volume_m3: f64,
    pub hydrogen_gas_tank_capacity_kg: f64,
    pub hydrogen_gas_tank_weight_kg: f64,
}

impl Default for ReferenceValues {
    fn default() -> Self {
        Self {
            // PowerCellution 100 (https://powercellgroup.com/), W x D x H
            fuel_cell_volume_m3: 0.730 * 0.9 * 2.2,
            fuel_cell_weight_kg: 1070.0,
            fuel_cell_power_kw: 185.0,
            fuel_cell_efficiency_pct: 45.0,
            // Corvus Orca Energy pack (https://corvusenergy.com/)
            battery_pack_volume_m3: 2.241 * 0.865 * 0.738,
            battery_pack_weight_kg: 1628.0,
            battery_pack_capacity_kwh: 124.0,
            battery_pack_depth_of_discharge_pct: 80.0,
            // Hexagon Purus type 4 tank
            hydrogen_gas_tank_volume_m3: 1.033,
            hydrogen_gas_tank_capacity_kg: 18.4,
            hydrogen_gas_tank_weight_kg: 272.0,
        }
    }
}

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
pub enum EnergySystemComponentId {
    #[serde(rename = "fuel_cell")]
    #[strum(serialize = "fuel_cell")]
    FuelCell,
    #[serde(rename = "battery_pack")]
    #[strum(serialize = "battery_pack")]
    BatteryPack,
    #[serde(rename = "hydrogen_gas_tank")]
    #[strum(serialize = "hydrogen_gas_tank")]
    HydrogenGasTank,
}

/// Sizing targets. Each present target sizes its component independently,
/// absent targets leave the component out of the result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergySystemRequirements {
    pub fuel_cell_power_kw: Option<f64>,
    pub battery_capacity_kwh: Option<f64>,
    pub hydrogen_storage_kg: Option<f64>,
}

/// One component scaled linearly from its reference unit. The unit count is
/// fractional, weight and volume scale by the same factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergySystemComponent {
    pub weight_kg: f64,
    pub volume_m3: f64,
    pub power_kw: Option<f64>,
    pub capacity_kwh: Option<f64>,
    pub capacity_kg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergySystemResult {
    pub total_weight_kg: f64,
    pub total_volume_m3: f64,
    pub details: BTreeMap<EnergySystemComponentId, EnergySystemComponent>,
}
