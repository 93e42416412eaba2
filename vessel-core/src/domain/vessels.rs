use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::Result;
use crate::error::error::{
    InvalidRangeSnafu, MissingSizeSnafu, UnknownEngineAgeSnafu, UnknownEngineTypeSnafu,
    UnknownFuelTypeSnafu, UnknownVesselTypeSnafu,
};

/// Vessel type classification from the IMO Fourth GHG Study.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
pub enum VesselType {
    #[serde(rename = "bulk_carrier")]
    #[strum(serialize = "bulk_carrier")]
    BulkCarrier,
    #[serde(rename = "chemical_tanker")]
    #[strum(serialize = "chemical_tanker")]
    ChemicalTanker,
    #[serde(rename = "container")]
    #[strum(serialize = "container")]
    Container,
    #[serde(rename = "general_cargo")]
    #[strum(serialize = "general_cargo")]
    GeneralCargo,
    #[serde(rename = "liquified_gas_tanker")]
    #[strum(serialize = "liquified_gas_tanker")]
    LiquifiedGasTanker,
    #[serde(rename = "oil_tanker")]
    #[strum(serialize = "oil_tanker")]
    OilTanker,
    #[serde(rename = "other_liquids_tanker")]
    #[strum(serialize = "other_liquids_tanker")]
    OtherLiquidsTanker,
    #[serde(rename = "ferry-pax")]
    #[strum(serialize = "ferry-pax")]
    FerryPax,
    #[serde(rename = "cruise")]
    #[strum(serialize = "cruise")]
    Cruise,
    #[serde(rename = "ferry-ropax")]
    #[strum(serialize = "ferry-ropax")]
    FerryRopax,
    #[serde(rename = "refrigerated_cargo")]
    #[strum(serialize = "refrigerated_cargo")]
    RefrigeratedCargo,
    #[serde(rename = "roro")]
    #[strum(serialize = "roro")]
    Roro,
    #[serde(rename = "vehicle")]
    #[strum(serialize = "vehicle")]
    Vehicle,
    #[serde(rename = "yacht")]
    #[strum(serialize = "yacht")]
    Yacht,
    #[serde(rename = "miscellaneous-fishing")]
    #[strum(serialize = "miscellaneous-fishing")]
    MiscFishing,
    #[serde(rename = "service-tug")]
    #[strum(serialize = "service-tug")]
    ServiceTug,
    #[serde(rename = "offshore")]
    #[strum(serialize = "offshore")]
    Offshore,
    #[serde(rename = "service-other")]
    #[strum(serialize = "service-other")]
    ServiceOther,
    #[serde(rename = "miscellaneous-other")]
    #[strum(serialize = "miscellaneous-other")]
    MiscOther,
}

impl VesselType {
    /// Parses a wire tag, rejecting unknown tags with a typed error.
    pub fn from_tag(tag: &str) -> Result<Self> {
        tag.parse().context(UnknownVesselTypeSnafu { tag })
    }

    /// Whether a gross tonnage / deadweight / cubic meter size is required
    /// to look up auxiliary and boiler power demand for this type.
    pub fn requires_size(&self) -> bool {
        !matches!(
            self,
            VesselType::Yacht
                | VesselType::MiscFishing
                | VesselType::ServiceTug
                | VesselType::Offshore
                | VesselType::ServiceOther
                | VesselType::MiscOther
        )
    }
}

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
pub enum FuelType {
    #[serde(rename = "HFO")]
    #[strum(serialize = "HFO")]
    Hfo,
    #[serde(rename = "MDO")]
    #[strum(serialize = "MDO")]
    Mdo,
    #[serde(rename = "MeOH")]
    #[strum(serialize = "MeOH")]
    Meoh,
    #[serde(rename = "LNG")]
    #[strum(serialize = "LNG")]
    Lng,
}

impl FuelType {
    pub fn from_tag(tag: &str) -> Result<Self> {
        tag.parse().context(UnknownFuelTypeSnafu { tag })
    }

    /// Fuel density at 15 °C in kg/m³.
    pub fn density_kg_per_m3(&self) -> f64 {
        match self {
            FuelType::Hfo => 991.0,
            FuelType::Mdo => 890.0,
            FuelType::Meoh => 792.0,
            FuelType::Lng => 450.0,
        }
    }
}

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
pub enum EngineType {
    #[serde(rename = "SSD")]
    #[strum(serialize = "SSD")]
    Ssd,
    #[serde(rename = "MSD")]
    #[strum(serialize = "MSD")]
    Msd,
    #[serde(rename = "HSD")]
    #[strum(serialize = "HSD")]
    Hsd,
    #[serde(rename = "LNG-Otto-MS")]
    #[strum(serialize = "LNG-Otto-MS")]
    LngOttoMs,
    #[serde(rename = "LBSI")]
    #[strum(serialize = "LBSI")]
    Lbsi,
    #[serde(rename = "gas_turbine")]
    #[strum(serialize = "gas_turbine")]
    GasTurbine,
    #[serde(rename = "steam_turbine")]
    #[strum(serialize = "steam_turbine")]
    SteamTurbine,
}

impl EngineType {
    pub fn from_tag(tag: &str) -> Result<Self> {
        tag.parse().context(UnknownEngineTypeSnafu { tag })
    }
}

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
pub enum EngineAge {
    #[serde(rename = "before_1984")]
    #[strum(serialize = "before_1984")]
    Before1984,
    #[serde(rename = "1984-2000")]
    #[strum(serialize = "1984-2000")]
    Between1984And2000,
    #[serde(rename = "after_2000")]
    #[strum(serialize = "after_2000")]
    After2000,
}

impl EngineAge {
    pub fn from_tag(tag: &str) -> Result<Self> {
        tag.parse().context(UnknownEngineAgeSnafu { tag })
    }
}

/// Unvalidated vessel characteristics, the input to [`Vessel::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewVessel {
    pub length_m: f64,
    pub beam_m: f64,
    pub design_speed_kn: f64,
    pub design_draft_m: f64,
    pub double_ended: bool,
    pub num_engines: u32,
    pub engine_power_kw: f64,
    pub engine_type: EngineType,
    pub engine_age: EngineAge,
    pub fuel_type: FuelType,
    pub vessel_type: VesselType,
    pub size: Option<f64>,
}

/// Validated, immutable vessel characteristics.
///
/// All dimensions are checked on construction against the acceptable ranges
/// of the IMO Fourth GHG Study so that downstream estimation never sees
/// out-of-range inputs. `size` is gross tonnage, deadweight tonnage or cubic
/// meters depending on the vessel type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    length_m: f64,
    beam_m: f64,
    design_speed_kn: f64,
    design_draft_m: f64,
    double_ended: bool,
    num_engines: u32,
    engine_power_kw: f64,
    engine_type: EngineType,
    engine_age: EngineAge,
    fuel_type: FuelType,
    vessel_type: VesselType,
    size: Option<f64>,
}

impl Vessel {
    pub fn new(new: NewVessel) -> Result<Self> {
        verify_range("length_m", new.length_m, 5.0, 450.0)?;
        verify_range("beam_m", new.beam_m, 1.5, 70.0)?;
        verify_range("design_speed_kn", new.design_speed_kn, 1.0, 50.0)?;
        verify_range("design_draft_m", new.design_draft_m, 0.1, 25.0)?;
        verify_range("num_engines", new.num_engines as f64, 1.0, 4.0)?;
        verify_range("engine_power_kw", new.engine_power_kw, 5.0, 60_000.0)?;

        match new.size {
            Some(size) => verify_range("size", size, 0.0, 500_000.0)?,
            None => ensure!(
                !new.vessel_type.requires_size(),
                MissingSizeSnafu {
                    vessel_type: new.vessel_type
                }
            ),
        }

        Ok(Self {
            length_m: new.length_m,
            beam_m: new.beam_m,
            design_speed_kn: new.design_speed_kn,
            design_draft_m: new.design_draft_m,
            double_ended: new.double_ended,
            num_engines: new.num_engines,
            engine_power_kw: new.engine_power_kw,
            engine_type: new.engine_type,
            engine_age: new.engine_age,
            fuel_type: new.fuel_type,
            vessel_type: new.vessel_type,
            size: new.size,
        })
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    pub fn beam_m(&self) -> f64 {
        self.beam_m
    }

    pub fn design_speed_kn(&self) -> f64 {
        self.design_speed_kn
    }

    pub fn design_draft_m(&self) -> f64 {
        self.design_draft_m
    }

    pub fn double_ended(&self) -> bool {
        self.double_ended
    }

    pub fn num_engines(&self) -> u32 {
        self.num_engines
    }

    pub fn engine_power_kw(&self) -> f64 {
        self.engine_power_kw
    }

    pub fn engine_type(&self) -> EngineType {
        self.engine_type
    }

    pub fn engine_age(&self) -> EngineAge {
        self.engine_age
    }

    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    pub fn vessel_type(&self) -> VesselType {
        self.vessel_type
    }

    pub fn size(&self) -> Option<f64> {
        self.size
    }

    /// Installed propulsion power across all engines.
    pub fn total_engine_power_kw(&self) -> f64 {
        self.num_engines as f64 * self.engine_power_kw
    }
}

pub(crate) fn verify_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    ensure!(
        value >= min && value <= max,
        InvalidRangeSnafu {
            name,
            value,
            min,
            max
        }
    );
    Ok(())
}
