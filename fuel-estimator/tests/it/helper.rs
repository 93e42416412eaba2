use vessel_core::{
    EngineAge, EngineType, FuelType, NewVessel, Vessel, VesselType, VoyageLeg, VoyageProfile,
};

pub fn assert_close(actual: f64, expected: f64) {
    if expected == 0.0 {
        assert_eq!(actual, 0.0);
    } else {
        assert!(
            ((actual - expected) / expected).abs() < 1e-9,
            "{actual} != {expected}"
        );
    }
}

pub fn voyage(
    time_anchored_h: f64,
    time_at_berth_h: f64,
    legs_manoeuvring: &[(f64, f64, f64)],
    legs_at_sea: &[(f64, f64, f64)],
) -> VoyageProfile {
    let legs = |specs: &[(f64, f64, f64)]| {
        specs
            .iter()
            .map(|&(distance_nm, speed_kn, draft_m)| {
                VoyageLeg::new(distance_nm, speed_kn, draft_m).unwrap()
            })
            .collect()
    };
    VoyageProfile::new(
        time_anchored_h,
        time_at_berth_h,
        legs(legs_manoeuvring),
        legs(legs_at_sea),
    )
    .unwrap()
}

pub fn ferry_pax() -> Vessel {
    Vessel::new(NewVessel {
        length_m: 39.8,
        beam_m: 10.46,
        design_speed_kn: 13.5,
        design_draft_m: 2.84,
        double_ended: false,
        num_engines: 4,
        engine_power_kw: 330.0,
        engine_type: EngineType::Msd,
        engine_age: EngineAge::After2000,
        fuel_type: FuelType::Mdo,
        vessel_type: VesselType::FerryPax,
        size: Some(686.0),
    })
    .unwrap()
}

/// A small double ended commuter ferry operates both directions without
/// turning, the daily profile below reflects two crossings.
pub fn ferry_daily_voyage() -> VoyageProfile {
    voyage(
        0.5,
        2.0,
        &[(0.5, 5.0, 2.8), (0.5, 5.0, 2.8)],
        &[(10.0, 12.0, 2.8), (10.0, 12.0, 2.8)],
    )
}

pub fn oil_tanker() -> Vessel {
    Vessel::new(NewVessel {
        length_m: 200.0,
        beam_m: 30.0,
        design_speed_kn: 15.0,
        design_draft_m: 12.0,
        double_ended: false,
        num_engines: 1,
        engine_power_kw: 8_000.0,
        engine_type: EngineType::Ssd,
        engine_age: EngineAge::After2000,
        fuel_type: FuelType::Hfo,
        vessel_type: VesselType::OilTanker,
        size: Some(50_000.0),
    })
    .unwrap()
}

pub fn tanker_long_voyage() -> VoyageProfile {
    voyage(
        10.0,
        24.0,
        &[(2.0, 8.0, 12.0), (2.0, 8.0, 10.0)],
        &[(500.0, 14.0, 12.0), (500.0, 14.0, 10.0)],
    )
}

pub fn general_cargo() -> Vessel {
    Vessel::new(NewVessel {
        length_m: 150.0,
        beam_m: 23.0,
        design_speed_kn: 18.0,
        design_draft_m: 8.5,
        double_ended: false,
        num_engines: 1,
        engine_power_kw: 5_000.0,
        engine_type: EngineType::Msd,
        engine_age: EngineAge::After2000,
        fuel_type: FuelType::Mdo,
        vessel_type: VesselType::GeneralCargo,
        size: Some(15_000.0),
    })
    .unwrap()
}

pub fn general_cargo_medium_voyage() -> VoyageProfile {
    voyage(
        5.0,
        12.0,
        &[(1.5, 6.0, 8.5), (1.5, 6.0, 7.0)],
        &[(200.0, 16.0, 8.5), (200.0, 16.0, 7.0)],
    )
}

pub fn offshore_supply() -> Vessel {
    Vessel::new(NewVessel {
        length_m: 100.0,
        beam_m: 20.0,
        design_speed_kn: 10.0,
        design_draft_m: 7.0,
        double_ended: false,
        num_engines: 1,
        engine_power_kw: 1_000.0,
        engine_type: EngineType::Msd,
        engine_age: EngineAge::After2000,
        fuel_type: FuelType::Mdo,
        vessel_type: VesselType::Offshore,
        size: None,
    })
    .unwrap()
}

pub fn offshore_short_voyage() -> VoyageProfile {
    voyage(
        10.0,
        10.0,
        &[(10.0, 10.0, 7.0)],
        &[(10.0, 10.0, 7.0), (20.0, 10.0, 6.0)],
    )
}

pub fn ropax() -> Vessel {
    Vessel::new(NewVessel {
        length_m: 180.0,
        beam_m: 28.0,
        design_speed_kn: 22.0,
        design_draft_m: 6.5,
        double_ended: true,
        num_engines: 4,
        engine_power_kw: 2_500.0,
        engine_type: EngineType::Hsd,
        engine_age: EngineAge::After2000,
        fuel_type: FuelType::Mdo,
        vessel_type: VesselType::FerryRopax,
        size: Some(25_000.0),
    })
    .unwrap()
}

pub fn ropax_frequent_voyage() -> VoyageProfile {
    voyage(
        0.0,
        4.0,
        &[
            (1.0, 8.0, 6.5),
            (1.0, 8.0, 6.5),
            (1.0, 8.0, 6.5),
            (1.0, 8.0, 6.5),
        ],
        &[(50.0, 20.0, 6.5), (50.0, 20.0, 6.5)],
    )
}
