use vessel_core::error::error::{MissingCoefficientSnafu, MissingSizeSnafu};
use vessel_core::{EngineAge, EngineType, FuelType, OperationMode, Result, Vessel, VesselType};

/// Fuel burned by oil fired boilers per kWh of steam delivered, flat across
/// engine ages.
pub static BOILER_SFC_G_PER_KWH: f64 = 305.0;

/// Baseline specific fuel consumption of the propulsion plant in g/kWh.
///
/// Source: https://wwwcdn.imo.org/localresources/en/OurWork/Environment/Documents/Fourth%20IMO%20GHG%20Study%202020%20-%20Full%20report%20and%20annexes.pdf
///         Annex B.2, Table 4
///
/// Combinations absent from the study (a slow speed diesel burning LNG, a
/// gas turbine on methanol, ...) have no coefficient and fail the lookup.
pub fn sfc_g_per_kwh(
    engine_type: EngineType,
    engine_age: EngineAge,
    fuel_type: FuelType,
) -> Result<f64> {
    use EngineType::*;
    use FuelType::*;

    let sfc = match (engine_type, fuel_type) {
        (Ssd, Hfo) => by_age(engine_age, [205.0, 185.0, 175.0]),
        (Ssd, Mdo) => by_age(engine_age, [190.0, 175.0, 165.0]),
        (Msd, Hfo) => by_age(engine_age, [215.0, 195.0, 185.0]),
        (Msd, Mdo) => by_age(engine_age, [200.0, 185.0, 175.0]),
        (Hsd, Hfo) => by_age(engine_age, [225.0, 205.0, 195.0]),
        (Hsd, Mdo) => by_age(engine_age, [210.0, 190.0, 185.0]),
        // Methanol engines burn roughly 2.15x the mass of their diesel
        // counterparts per kWh (LHV 19.9 MJ/kg vs 42.7 MJ/kg).
        (Ssd, Meoh) => by_age(engine_age, [408.0, 375.0, 354.0]),
        (Msd, Meoh) => by_age(engine_age, [429.0, 397.0, 375.0]),
        (Hsd, Meoh) => by_age(engine_age, [451.0, 408.0, 397.0]),
        // Both Otto cycle gas engine families share the baseline.
        (LngOttoMs, Lng) | (Lbsi, Lng) => by_age(engine_age, [173.0, 173.0, 156.0]),
        (GasTurbine, Hfo) => 305.0,
        (GasTurbine, Mdo) => 300.0,
        (SteamTurbine, Hfo) => 340.0,
        (SteamTurbine, Mdo) => 320.0,
        (SteamTurbine, Lng) => 285.0,
        _ => {
            return MissingCoefficientSnafu {
                engine_type,
                engine_age,
                fuel_type,
            }
            .fail();
        }
    };

    Ok(sfc)
}

/// Specific fuel consumption of the auxiliary plant in g/kWh. Auxiliary
/// engines are high speed gensets burning the same fuel as the main engines,
/// so every fuel type has a coefficient.
pub fn auxiliary_sfc_g_per_kwh(engine_age: EngineAge, fuel_type: FuelType) -> f64 {
    match fuel_type {
        FuelType::Hfo => by_age(engine_age, [225.0, 205.0, 195.0]),
        FuelType::Mdo => by_age(engine_age, [210.0, 190.0, 185.0]),
        FuelType::Meoh => by_age(engine_age, [451.0, 408.0, 397.0]),
        FuelType::Lng => by_age(engine_age, [173.0, 173.0, 156.0]),
    }
}

fn by_age(engine_age: EngineAge, values: [f64; 3]) -> f64 {
    match engine_age {
        EngineAge::Before1984 => values[0],
        EngineAge::Between1984And2000 => values[1],
        EngineAge::After2000 => values[2],
    }
}

/// Auxiliary engine power demand in kW per operation mode, keyed by vessel
/// type and size bin. Size-exempt types use fixed demands.
///
/// Table rows are `[at_berth, anchored, manoeuvring, at_sea]`.
pub fn auxiliary_power_kw(vessel: &Vessel, mode: OperationMode) -> Result<f64> {
    use VesselType::*;

    let row = match (vessel.vessel_type(), vessel.size()) {
        (BulkCarrier, Some(s)) => match s {
            s if s < 10_000.0 => [120.0, 120.0, 180.0, 110.0],
            s if s < 35_000.0 => [280.0, 190.0, 310.0, 190.0],
            s if s < 100_000.0 => [370.0, 260.0, 420.0, 260.0],
            _ => [600.0, 400.0, 600.0, 420.0],
        },
        (ChemicalTanker, Some(s)) => match s {
            s if s < 10_000.0 => [200.0, 160.0, 330.0, 170.0],
            s if s < 40_000.0 => [750.0, 490.0, 1150.0, 550.0],
            _ => [1270.0, 830.0, 1950.0, 930.0],
        },
        (Container, Some(s)) => match s {
            s if s < 10_000.0 => [340.0, 300.0, 550.0, 300.0],
            s if s < 50_000.0 => [1200.0, 820.0, 1320.0, 600.0],
            _ => [1600.0, 1200.0, 2400.0, 1300.0],
        },
        (GeneralCargo, Some(s)) => match s {
            s if s < 5_000.0 => [90.0, 50.0, 180.0, 60.0],
            s if s < 20_000.0 => [240.0, 130.0, 490.0, 180.0],
            _ => [720.0, 370.0, 1450.0, 520.0],
        },
        (LiquifiedGasTanker, Some(s)) => match s {
            s if s < 50_000.0 => [240.0, 240.0, 360.0, 240.0],
            _ => [1700.0, 1700.0, 2600.0, 1700.0],
        },
        (OilTanker, Some(s)) => match s {
            s if s < 5_000.0 => [250.0, 250.0, 375.0, 250.0],
            s if s < 20_000.0 => [375.0, 375.0, 590.0, 375.0],
            s if s < 60_000.0 => [625.0, 500.0, 750.0, 500.0],
            s if s < 200_000.0 => [750.0, 625.0, 1000.0, 625.0],
            _ => [1000.0, 750.0, 1250.0, 750.0],
        },
        (OtherLiquidsTanker, Some(_)) => [500.0, 330.0, 780.0, 370.0],
        (FerryPax, Some(s)) => match s {
            s if s < 2_000.0 => [190.0, 190.0, 240.0, 190.0],
            _ => [520.0, 520.0, 660.0, 520.0],
        },
        (Cruise, Some(s)) => match s {
            s if s < 10_000.0 => [450.0, 450.0, 580.0, 450.0],
            _ => [3500.0, 3500.0, 4500.0, 3500.0],
        },
        (FerryRopax, Some(s)) => match s {
            s if s < 5_000.0 => [310.0, 310.0, 400.0, 310.0],
            _ => [800.0, 800.0, 1000.0, 800.0],
        },
        (RefrigeratedCargo, Some(s)) => match s {
            s if s < 5_000.0 => [340.0, 340.0, 375.0, 340.0],
            _ => [1100.0, 1100.0, 1200.0, 1100.0],
        },
        (Roro, Some(s)) => match s {
            s if s < 5_000.0 => [430.0, 430.0, 530.0, 430.0],
            _ => [680.0, 680.0, 850.0, 680.0],
        },
        (Vehicle, Some(s)) => match s {
            s if s < 30_000.0 => [500.0, 500.0, 630.0, 500.0],
            _ => [660.0, 660.0, 820.0, 660.0],
        },
        (Yacht, _) => [70.0, 70.0, 90.0, 70.0],
        (MiscFishing, _) => [120.0, 120.0, 150.0, 120.0],
        (ServiceTug, _) => [100.0, 80.0, 210.0, 80.0],
        (Offshore, _) => [320.0, 320.0, 400.0, 320.0],
        (ServiceOther, _) => [220.0, 220.0, 280.0, 220.0],
        (MiscOther, _) => [150.0, 150.0, 190.0, 150.0],
        // Unreachable through a validated Vessel, kept as a closed fallback.
        (vessel_type, None) => {
            return MissingSizeSnafu { vessel_type }.fail();
        }
    };

    Ok(pick(row, mode))
}

/// Boiler power demand in kW per operation mode, `None` for vessel types
/// without steam boilers. Tankers and cruise vessels retain boiler demand
/// while stationary (cargo heating, hotel steam); at sea the exhaust
/// economizer covers it for tankers.
pub fn boiler_power_kw(vessel: &Vessel, mode: OperationMode) -> Option<f64> {
    use VesselType::*;

    let row = match (vessel.vessel_type(), vessel.size()) {
        (OilTanker, Some(s)) => match s {
            s if s < 5_000.0 => [250.0, 250.0, 100.0, 0.0],
            s if s < 20_000.0 => [500.0, 500.0, 200.0, 0.0],
            s if s < 60_000.0 => [1500.0, 1500.0, 500.0, 0.0],
            s if s < 200_000.0 => [2500.0, 2500.0, 750.0, 0.0],
            _ => [3250.0, 3250.0, 1000.0, 0.0],
        },
        (ChemicalTanker, Some(s)) => match s {
            s if s < 10_000.0 => [250.0, 250.0, 100.0, 0.0],
            s if s < 40_000.0 => [800.0, 800.0, 300.0, 0.0],
            _ => [1500.0, 1500.0, 500.0, 0.0],
        },
        (OtherLiquidsTanker, Some(_)) => [500.0, 500.0, 200.0, 0.0],
        (LiquifiedGasTanker, Some(s)) => match s {
            s if s < 50_000.0 => [200.0, 200.0, 100.0, 0.0],
            _ => [1000.0, 1000.0, 300.0, 0.0],
        },
        (Cruise, Some(s)) => match s {
            s if s < 10_000.0 => [250.0, 250.0, 250.0, 250.0],
            _ => [1100.0, 1100.0, 1100.0, 1100.0],
        },
        _ => return None,
    };

    Some(pick(row, mode))
}

fn pick(row: [f64; 4], mode: OperationMode) -> f64 {
    match mode {
        OperationMode::AtBerth => row[0],
        OperationMode::Anchored => row[1],
        OperationMode::Manoeuvring => row[2],
        OperationMode::AtSea => row[3],
    }
}
