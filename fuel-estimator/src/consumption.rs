use tracing::instrument;
use vessel_core::{
    EnergyConsumptionBreakdown, EnergyConsumptionResult, FuelConsumptionBreakdown,
    FuelConsumptionResult, OperationMode, Result, Vessel, VoyageLeg, VoyageProfile,
    calculate_fuel_volume,
};

use crate::{
    BOILER_SFC_G_PER_KWH, auxiliary_power_kw, auxiliary_sfc_g_per_kwh, boiler_power_kw,
    propulsion_power_kw, sfc_g_per_kwh,
};

/// Estimates fuel consumption in kg for one full operating cycle, broken
/// down per operation mode and per system.
///
/// The returned total is the exact sum of the four mode subtotals.
#[instrument(skip_all, fields(vessel_type = %vessel.vessel_type()))]
pub fn estimate_fuel_consumption(
    vessel: &Vessel,
    voyage: &VoyageProfile,
) -> Result<FuelConsumptionResult> {
    let at_berth = stationary_fuel(vessel, OperationMode::AtBerth, voyage.time_at_berth_h())?;
    let anchored = stationary_fuel(vessel, OperationMode::Anchored, voyage.time_anchored_h())?;
    let manoeuvring = sailing_fuel(
        vessel,
        OperationMode::Manoeuvring,
        voyage.legs_manoeuvring(),
        voyage.manoeuvring_distance_nm(),
    )?;
    let at_sea = sailing_fuel(
        vessel,
        OperationMode::AtSea,
        voyage.legs_at_sea(),
        voyage.at_sea_distance_nm(),
    )?;

    Ok(FuelConsumptionResult {
        total_kg: at_berth.subtotal_kg
            + anchored.subtotal_kg
            + manoeuvring.subtotal_kg
            + at_sea.subtotal_kg,
        at_berth,
        anchored,
        manoeuvring,
        at_sea,
    })
}

/// Energy counterpart of [`estimate_fuel_consumption`], in kWh delivered.
/// Same structure, no specific fuel consumption step.
#[instrument(skip_all, fields(vessel_type = %vessel.vessel_type()))]
pub fn estimate_energy_consumption(
    vessel: &Vessel,
    voyage: &VoyageProfile,
) -> Result<EnergyConsumptionResult> {
    let at_berth = stationary_energy(vessel, OperationMode::AtBerth, voyage.time_at_berth_h())?;
    let anchored = stationary_energy(vessel, OperationMode::Anchored, voyage.time_anchored_h())?;
    let manoeuvring =
        sailing_energy(vessel, OperationMode::Manoeuvring, voyage.legs_manoeuvring())?;
    let at_sea = sailing_energy(vessel, OperationMode::AtSea, voyage.legs_at_sea())?;

    Ok(EnergyConsumptionResult {
        total_kwh: at_berth.subtotal_kwh
            + anchored.subtotal_kwh
            + manoeuvring.subtotal_kwh
            + at_sea.subtotal_kwh,
        at_berth,
        anchored,
        manoeuvring,
        at_sea,
    })
}

fn stationary_fuel(
    vessel: &Vessel,
    mode: OperationMode,
    duration_h: f64,
) -> Result<FuelConsumptionBreakdown> {
    let aux_sfc = auxiliary_sfc_g_per_kwh(vessel.engine_age(), vessel.fuel_type());
    let auxiliary_engines_kg =
        auxiliary_power_kw(vessel, mode)? * duration_h * aux_sfc / 1000.0;

    let steam_boilers_kg = boiler_power_kw(vessel, mode)
        .map(|kw| kw * duration_h * BOILER_SFC_G_PER_KWH / 1000.0);

    Ok(FuelConsumptionBreakdown {
        subtotal_kg: auxiliary_engines_kg + steam_boilers_kg.unwrap_or(0.0),
        auxiliary_engines_kg,
        // Propulsion is off while stationary, the rate per distance is zero
        // by definition rather than a 0/0 computation.
        propulsion_engines_kg: 0.0,
        average_fuel_consumption_l_per_nm: 0.0,
        steam_boilers_kg,
    })
}

fn sailing_fuel(
    vessel: &Vessel,
    mode: OperationMode,
    legs: &[VoyageLeg],
    distance_nm: f64,
) -> Result<FuelConsumptionBreakdown> {
    let prop_sfc = sfc_g_per_kwh(vessel.engine_type(), vessel.engine_age(), vessel.fuel_type())?;
    let aux_sfc = auxiliary_sfc_g_per_kwh(vessel.engine_age(), vessel.fuel_type());
    let aux_kw = auxiliary_power_kw(vessel, mode)?;
    let boiler_kw = boiler_power_kw(vessel, mode);

    let mut propulsion_engines_kg = 0.0;
    let mut auxiliary_engines_kg = 0.0;
    let mut steam_boilers_kg = boiler_kw.map(|_| 0.0);

    for leg in legs {
        let hours = leg.transit_hours();

        propulsion_engines_kg += propulsion_power_kw(vessel, leg) * hours * prop_sfc / 1000.0;
        auxiliary_engines_kg += aux_kw * hours * aux_sfc / 1000.0;

        if let (Some(total), Some(kw)) = (steam_boilers_kg.as_mut(), boiler_kw) {
            *total += kw * hours * BOILER_SFC_G_PER_KWH / 1000.0;
        }
    }

    let subtotal_kg =
        propulsion_engines_kg + auxiliary_engines_kg + steam_boilers_kg.unwrap_or(0.0);

    // Average rate over the mode, guarded for leg-less or zero-length modes.
    let average_fuel_consumption_l_per_nm = if distance_nm > 0.0 {
        calculate_fuel_volume(subtotal_kg, vessel.fuel_type()) / distance_nm
    } else {
        0.0
    };

    Ok(FuelConsumptionBreakdown {
        subtotal_kg,
        auxiliary_engines_kg,
        propulsion_engines_kg,
        average_fuel_consumption_l_per_nm,
        steam_boilers_kg,
    })
}

fn stationary_energy(
    vessel: &Vessel,
    mode: OperationMode,
    duration_h: f64,
) -> Result<EnergyConsumptionBreakdown> {
    let auxiliary_engines_kwh = auxiliary_power_kw(vessel, mode)? * duration_h;
    let steam_boilers_kwh = boiler_power_kw(vessel, mode).map(|kw| kw * duration_h);

    Ok(EnergyConsumptionBreakdown {
        subtotal_kwh: auxiliary_engines_kwh + steam_boilers_kwh.unwrap_or(0.0),
        auxiliary_engines_kwh,
        propulsion_engines_kwh: 0.0,
        steam_boilers_kwh,
    })
}

fn sailing_energy(
    vessel: &Vessel,
    mode: OperationMode,
    legs: &[VoyageLeg],
) -> Result<EnergyConsumptionBreakdown> {
    // No SFC factor applies here, but an engine and fuel combination the
    // reference data cannot cover must fail exactly as the fuel variant does.
    sfc_g_per_kwh(vessel.engine_type(), vessel.engine_age(), vessel.fuel_type())?;

    let aux_kw = auxiliary_power_kw(vessel, mode)?;
    let boiler_kw = boiler_power_kw(vessel, mode);

    let mut propulsion_engines_kwh = 0.0;
    let mut auxiliary_engines_kwh = 0.0;
    let mut steam_boilers_kwh = boiler_kw.map(|_| 0.0);

    for leg in legs {
        let hours = leg.transit_hours();

        propulsion_engines_kwh += propulsion_power_kw(vessel, leg) * hours;
        auxiliary_engines_kwh += aux_kw * hours;

        if let (Some(total), Some(kw)) = (steam_boilers_kwh.as_mut(), boiler_kw) {
            *total += kw * hours;
        }
    }

    Ok(EnergyConsumptionBreakdown {
        subtotal_kwh: propulsion_engines_kwh
            + auxiliary_engines_kwh
            + steam_boilers_kwh.unwrap_or(0.0),
        auxiliary_engines_kwh,
        propulsion_engines_kwh,
        steam_boilers_kwh,
    })
}
