use crate::FuelType;

/// Transforms a speed in knots to meters per second.
pub fn knots_to_ms(speed_knots: f64) -> f64 {
    speed_knots * 1852.0 / 3600.0
}

/// Transforms a speed in meters per second to knots. Exact inverse of
/// [`knots_to_ms`].
pub fn ms_to_knots(speed_ms: f64) -> f64 {
    speed_ms * 3600.0 / 1852.0
}

/// Converts a fuel volume in liters to mass in kilograms using the fuel
/// type's density.
pub fn calculate_fuel_mass(volume_l: f64, fuel_type: FuelType) -> f64 {
    volume_l / 1000.0 * fuel_type.density_kg_per_m3()
}

/// Converts a fuel mass in kilograms to volume in liters. Exact inverse of
/// [`calculate_fuel_mass`] for every fuel type.
pub fn calculate_fuel_volume(mass_kg: f64, fuel_type: FuelType) -> f64 {
    mass_kg / fuel_type.density_kg_per_m3() * 1000.0
}
