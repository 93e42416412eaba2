use vessel_core::{Vessel, VoyageLeg};

/// Propulsion power demand for one leg in kW.
///
/// Derived from the design operating point with an admiralty type scaling
/// law: demand follows the cube of the speed ratio and the draft ratio to
/// the 2/3 power (the displacement term of the admiralty coefficient).
pub fn propulsion_power_kw(vessel: &Vessel, leg: &VoyageLeg) -> f64 {
    let speed_ratio = leg.speed_kn() / vessel.design_speed_kn();
    let draft_ratio = leg.draft_m() / vessel.design_draft_m();

    vessel.total_engine_power_kw() * speed_ratio.powi(3) * draft_ratio.powf(2.0 / 3.0)
}
