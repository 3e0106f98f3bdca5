//! Vehicle type catalogue shared by the registry, loaders, and output.
//!
//! Every rentable unit belongs to exactly one [`VehicleTypeId`], and every
//! type belongs to exactly one [`VehicleCategory`].  The catalogue is closed:
//! unknown type strings are a parse error.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GsError;

/// Coarse grouping used for catalogue filtering.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    Suv4x4,
    Heavy,
    Van,
    Pickup,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 4] = [
        VehicleCategory::Suv4x4,
        VehicleCategory::Heavy,
        VehicleCategory::Van,
        VehicleCategory::Pickup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleCategory::Suv4x4 => "suv4x4",
            VehicleCategory::Heavy  => "heavy",
            VehicleCategory::Van    => "van",
            VehicleCategory::Pickup => "pickup",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = GsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| GsError::Parse(format!("unknown vehicle category {s:?}")))
    }
}

/// Concrete vehicle model a unit is an instance of.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleTypeId {
    LuxurySportSuv,
    ExtremeOffroadSuv,
    ExecutivePremiumSuv,
    HeritageTrailSuv,
    ClassicExcavator,
    IndustrialBulldozer,
    MobileCrane,
    ModernUrbanVan,
    ExecutiveLuxuryVan,
    FuturisticElectricVan,
    CargoPanelVan,
    StandardPickup,
    HeavyDutyPickup,
    FuturisticElectricPickup,
    FleetRedPickup,
}

impl VehicleTypeId {
    pub const ALL: [VehicleTypeId; 15] = [
        VehicleTypeId::LuxurySportSuv,
        VehicleTypeId::ExtremeOffroadSuv,
        VehicleTypeId::ExecutivePremiumSuv,
        VehicleTypeId::HeritageTrailSuv,
        VehicleTypeId::ClassicExcavator,
        VehicleTypeId::IndustrialBulldozer,
        VehicleTypeId::MobileCrane,
        VehicleTypeId::ModernUrbanVan,
        VehicleTypeId::ExecutiveLuxuryVan,
        VehicleTypeId::FuturisticElectricVan,
        VehicleTypeId::CargoPanelVan,
        VehicleTypeId::StandardPickup,
        VehicleTypeId::HeavyDutyPickup,
        VehicleTypeId::FuturisticElectricPickup,
        VehicleTypeId::FleetRedPickup,
    ];

    pub fn category(self) -> VehicleCategory {
        use VehicleTypeId::*;
        match self {
            LuxurySportSuv | ExtremeOffroadSuv | ExecutivePremiumSuv | HeritageTrailSuv => {
                VehicleCategory::Suv4x4
            }
            ClassicExcavator | IndustrialBulldozer | MobileCrane => VehicleCategory::Heavy,
            ModernUrbanVan | ExecutiveLuxuryVan | FuturisticElectricVan | CargoPanelVan => {
                VehicleCategory::Van
            }
            StandardPickup | HeavyDutyPickup | FuturisticElectricPickup | FleetRedPickup => {
                VehicleCategory::Pickup
            }
        }
    }

    /// Snake-case label, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        use VehicleTypeId::*;
        match self {
            LuxurySportSuv           => "luxury_sport_suv",
            ExtremeOffroadSuv        => "extreme_offroad_suv",
            ExecutivePremiumSuv      => "executive_premium_suv",
            HeritageTrailSuv         => "heritage_trail_suv",
            ClassicExcavator         => "classic_excavator",
            IndustrialBulldozer      => "industrial_bulldozer",
            MobileCrane              => "mobile_crane",
            ModernUrbanVan           => "modern_urban_van",
            ExecutiveLuxuryVan       => "executive_luxury_van",
            FuturisticElectricVan    => "futuristic_electric_van",
            CargoPanelVan            => "cargo_panel_van",
            StandardPickup           => "standard_pickup",
            HeavyDutyPickup          => "heavy_duty_pickup",
            FuturisticElectricPickup => "futuristic_electric_pickup",
            FleetRedPickup           => "fleet_red_pickup",
        }
    }
}

impl std::fmt::Display for VehicleTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleTypeId {
    type Err = GsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleTypeId::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| GsError::Parse(format!("unknown vehicle type {s:?}")))
    }
}
