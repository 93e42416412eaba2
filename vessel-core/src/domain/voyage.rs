use serde::{Deserialize, Serialize};
use snafu::ensure;
use strum::{AsRefStr, Display, EnumString};

use crate::Result;
use crate::domain::vessels::verify_range;
use crate::error::error::NotPositiveSnafu;

/// Upper bound for stationary durations, one year in hours.
pub static MAX_VOYAGE_HOURS: f64 = 24.0 * 365.0;

/// The four operational states of a voyage. At berth and anchored are
/// stationary, only auxiliary systems (and boilers where fitted) run.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
pub enum OperationMode {
    #[serde(rename = "at_berth")]
    #[strum(serialize = "at_berth")]
    AtBerth,
    #[serde(rename = "anchored")]
    #[strum(serialize = "anchored")]
    Anchored,
    #[serde(rename = "manoeuvring")]
    #[strum(serialize = "manoeuvring")]
    Manoeuvring,
    #[serde(rename = "at_sea")]
    #[strum(serialize = "at_sea")]
    AtSea,
}

impl OperationMode {
    pub fn is_stationary(&self) -> bool {
        matches!(self, OperationMode::AtBerth | OperationMode::Anchored)
    }
}

/// One constant-condition segment of travel.
///
/// A zero-distance leg is valid and contributes zero propulsion fuel, which
/// permits placeholder legs in generated profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageLeg {
    distance_nm: f64,
    speed_kn: f64,
    draft_m: f64,
}

impl VoyageLeg {
    pub fn new(distance_nm: f64, speed_kn: f64, draft_m: f64) -> Result<Self> {
        verify_range("distance_nm", distance_nm, 0.0, f64::INFINITY)?;
        ensure!(
            speed_kn > 0.0,
            NotPositiveSnafu {
                name: "speed_kn",
                value: speed_kn
            }
        );
        ensure!(
            draft_m > 0.0,
            NotPositiveSnafu {
                name: "draft_m",
                value: draft_m
            }
        );

        Ok(Self {
            distance_nm,
            speed_kn,
            draft_m,
        })
    }

    pub fn distance_nm(&self) -> f64 {
        self.distance_nm
    }

    pub fn speed_kn(&self) -> f64 {
        self.speed_kn
    }

    pub fn draft_m(&self) -> f64 {
        self.draft_m
    }

    /// Time spent on this leg in hours.
    pub fn transit_hours(&self) -> f64 {
        self.distance_nm / self.speed_kn
    }
}

/// One full operating cycle: stationary durations plus ordered manoeuvring
/// and at-sea legs. Leg order is preserved for per-leg diagnostics but does
/// not affect totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoyageProfile {
    time_anchored_h: f64,
    time_at_berth_h: f64,
    legs_manoeuvring: Vec<VoyageLeg>,
    legs_at_sea: Vec<VoyageLeg>,
}

impl VoyageProfile {
    pub fn new(
        time_anchored_h: f64,
        time_at_berth_h: f64,
        legs_manoeuvring: Vec<VoyageLeg>,
        legs_at_sea: Vec<VoyageLeg>,
    ) -> Result<Self> {
        verify_range("time_anchored_h", time_anchored_h, 0.0, MAX_VOYAGE_HOURS)?;
        verify_range("time_at_berth_h", time_at_berth_h, 0.0, MAX_VOYAGE_HOURS)?;

        Ok(Self {
            time_anchored_h,
            time_at_berth_h,
            legs_manoeuvring,
            legs_at_sea,
        })
    }

    pub fn time_anchored_h(&self) -> f64 {
        self.time_anchored_h
    }

    pub fn time_at_berth_h(&self) -> f64 {
        self.time_at_berth_h
    }

    pub fn legs_manoeuvring(&self) -> &[VoyageLeg] {
        &self.legs_manoeuvring
    }

    pub fn legs_at_sea(&self) -> &[VoyageLeg] {
        &self.legs_at_sea
    }

    pub fn manoeuvring_distance_nm(&self) -> f64 {
        self.legs_manoeuvring.iter().map(|l| l.distance_nm()).sum()
    }

    pub fn at_sea_distance_nm(&self) -> f64 {
        self.legs_at_sea.iter().map(|l| l.distance_nm()).sum()
    }

    pub fn manoeuvring_hours(&self) -> f64 {
        self.legs_manoeuvring.iter().map(|l| l.transit_hours()).sum()
    }

    pub fn at_sea_hours(&self) -> f64 {
        self.legs_at_sea.iter().map(|l| l.transit_hours()).sum()
    }
}
