use fuel_estimator::{estimate_energy_consumption, size_energy_system};
use vessel_core::{EnergySystemComponentId, EnergySystemRequirements, ReferenceValues};

use crate::helper::*;

#[test]
fn test_retrofit_sizing_from_estimated_energy_demand() {
    let energy = estimate_energy_consumption(&ferry_pax(), &ferry_daily_voyage()).unwrap();

    // A fuel cell covering the at sea auxiliary load plus a battery holding
    // one manoeuvring cycle, a plausible hybrid retrofit study.
    let requirements = EnergySystemRequirements {
        fuel_cell_power_kw: Some(190.0),
        battery_capacity_kwh: Some(energy.manoeuvring.subtotal_kwh),
        hydrogen_storage_kg: None,
    };

    let result = size_energy_system(&requirements, &ReferenceValues::default()).unwrap();

    let fuel_cell = &result.details[&EnergySystemComponentId::FuelCell];
    assert_close(fuel_cell.weight_kg, 190.0 / 185.0 * 1070.0);

    let battery = &result.details[&EnergySystemComponentId::BatteryPack];
    assert_close(
        battery.weight_kg,
        energy.manoeuvring.subtotal_kwh / 124.0 * 1628.0,
    );

    assert_close(
        result.total_weight_kg,
        fuel_cell.weight_kg + battery.weight_kg,
    );
    assert_close(result.total_volume_m3, fuel_cell.volume_m3 + battery.volume_m3);
}

#[test]
fn test_full_hydrogen_system_includes_tank() {
    let requirements = EnergySystemRequirements {
        fuel_cell_power_kw: Some(555.0),
        battery_capacity_kwh: Some(248.0),
        hydrogen_storage_kg: Some(92.0),
    };

    let result = size_energy_system(&requirements, &ReferenceValues::default()).unwrap();
    assert_eq!(result.details.len(), 3);

    let tank = &result.details[&EnergySystemComponentId::HydrogenGasTank];
    assert_close(tank.weight_kg, 92.0 / 18.4 * 272.0);
    assert_close(tank.volume_m3, 92.0 / 18.4 * 1.033);
    assert_eq!(tank.capacity_kg, Some(92.0));
}

#[test]
fn test_custom_reference_values_override_defaults() {
    let reference = ReferenceValues {
        fuel_cell_power_kw: 100.0,
        fuel_cell_weight_kg: 500.0,
        ..Default::default()
    };
    let requirements = EnergySystemRequirements {
        fuel_cell_power_kw: Some(250.0),
        ..Default::default()
    };

    let result = size_energy_system(&requirements, &reference).unwrap();
    assert_close(
        result.details[&EnergySystemComponentId::FuelCell].weight_kg,
        2.5 * 500.0,
    );
}
