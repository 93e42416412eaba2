use std::collections::BTreeMap;

use snafu::ensure;
use tracing::instrument;
use vessel_core::{
    EnergySystemComponent, EnergySystemComponentId, EnergySystemRequirements, EnergySystemResult,
    ReferenceValues, Result,
    error::error::NegativeTargetSnafu,
};

/// Sizes a zero emission power train from target capacities.
///
/// Each present target is scaled independently from its reference unit,
/// allowing fractional unit counts. Weight and volume scale linearly with
/// the number of units. Absent targets leave their component out of the
/// result entirely.
#[instrument(skip_all)]
pub fn size_energy_system(
    requirements: &EnergySystemRequirements,
    reference: &ReferenceValues,
) -> Result<EnergySystemResult> {
    let mut details = BTreeMap::new();

    if let Some(power_kw) = requirements.fuel_cell_power_kw {
        let units = scale_units("fuel_cell_power_kw", power_kw, reference.fuel_cell_power_kw)?;
        details.insert(
            EnergySystemComponentId::FuelCell,
            EnergySystemComponent {
                weight_kg: units * reference.fuel_cell_weight_kg,
                volume_m3: units * reference.fuel_cell_volume_m3,
                power_kw: Some(power_kw),
                capacity_kwh: None,
                capacity_kg: None,
            },
        );
    }

    if let Some(capacity_kwh) = requirements.battery_capacity_kwh {
        let units = scale_units(
            "battery_capacity_kwh",
            capacity_kwh,
            reference.battery_pack_capacity_kwh,
        )?;
        details.insert(
            EnergySystemComponentId::BatteryPack,
            EnergySystemComponent {
                weight_kg: units * reference.battery_pack_weight_kg,
                volume_m3: units * reference.battery_pack_volume_m3,
                power_kw: None,
                capacity_kwh: Some(capacity_kwh),
                capacity_kg: None,
            },
        );
    }

    if let Some(hydrogen_kg) = requirements.hydrogen_storage_kg {
        let units = scale_units(
            "hydrogen_storage_kg",
            hydrogen_kg,
            reference.hydrogen_gas_tank_capacity_kg,
        )?;
        details.insert(
            EnergySystemComponentId::HydrogenGasTank,
            EnergySystemComponent {
                weight_kg: units * reference.hydrogen_gas_tank_weight_kg,
                volume_m3: units * reference.hydrogen_gas_tank_volume_m3,
                power_kw: None,
                capacity_kwh: None,
                capacity_kg: Some(hydrogen_kg),
            },
        );
    }

    Ok(EnergySystemResult {
        total_weight_kg: details.values().map(|c| c.weight_kg).sum(),
        total_volume_m3: details.values().map(|c| c.volume_m3).sum(),
        details,
    })
}

/// [`size_energy_system`] with the default reference components.
pub fn size_energy_system_with_defaults(
    requirements: &EnergySystemRequirements,
) -> Result<EnergySystemResult> {
    size_energy_system(requirements, &ReferenceValues::default())
}

fn scale_units(name: &'static str, target: f64, reference_capacity: f64) -> Result<f64> {
    ensure!(
        target >= 0.0,
        NegativeTargetSnafu {
            name,
            value: target,
        }
    );
    Ok(target / reference_capacity)
}
