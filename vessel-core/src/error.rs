use snafu::{Location, Snafu};

use crate::{EngineAge, EngineType, FuelType, VesselType};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display(
        "The value '{value}' for '{name}' is outside the range [{min}, {max}]"
    ))]
    InvalidRange {
        #[snafu(implicit)]
        location: Location,
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[snafu(display("The value '{value}' for '{name}' must be greater than zero"))]
    NotPositive {
        #[snafu(implicit)]
        location: Location,
        name: &'static str,
        value: f64,
    },
    #[snafu(display("Vessel type '{vessel_type}' requires a size"))]
    MissingSize {
        #[snafu(implicit)]
        location: Location,
        vessel_type: VesselType,
    },
    #[snafu(display(
        "No reference fuel consumption for engine '{engine_type}', age '{engine_age}', fuel '{fuel_type}'"
    ))]
    MissingCoefficient {
        #[snafu(implicit)]
        location: Location,
        engine_type: EngineType,
        engine_age: EngineAge,
        fuel_type: FuelType,
    },
    #[snafu(display("The target '{value}' for '{name}' cannot be negative"))]
    NegativeTarget {
        #[snafu(implicit)]
        location: Location,
        name: &'static str,
        value: f64,
    },
    #[snafu(display("'{tag}' is not a known vessel type"))]
    UnknownVesselType {
        #[snafu(implicit)]
        location: Location,
        tag: String,
        source: strum::ParseError,
    },
    #[snafu(display("'{tag}' is not a known fuel type"))]
    UnknownFuelType {
        #[snafu(implicit)]
        location: Location,
        tag: String,
        source: strum::ParseError,
    },
    #[snafu(display("'{tag}' is not a known engine type"))]
    UnknownEngineType {
        #[snafu(implicit)]
        location: Location,
        tag: String,
        source: strum::ParseError,
    },
    #[snafu(display("'{tag}' is not a known engine age class"))]
    UnknownEngineAge {
        #[snafu(implicit)]
        location: Location,
        tag: String,
        source: strum::ParseError,
    },
}
