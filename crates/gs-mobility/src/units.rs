//! Seed unit descriptors and their CSV loader.
//!
//! # CSV format
//!
//! One row per unit.  `address` may be left empty or the column omitted.
//!
//! ```csv
//! id,type_id,lng,lat,address
//! SUV-031,luxury_sport_suv,-58.3835,-34.6027,"Av. 9 de Julio 1120"
//! PK-900,futuristic_electric_pickup,-58.3802,-34.6039,
//! ```
//!
//! `type_id` must be one of the snake-case [`VehicleTypeId`] labels.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use gs_core::{GeoPoint, VehicleId, VehicleTypeId};

use crate::{MobilityError, MobilityResult};

/// A rentable unit as shown to users: identity, model, and where it is.
///
/// The fleet keeps `lng`/`lat` in step with the simulated vehicle, so after
/// initialisation they always hold a lattice intersection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleUnit {
    pub id:      VehicleId,
    pub type_id: VehicleTypeId,
    pub lng:     f64,
    pub lat:     f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl VehicleUnit {
    pub fn new(id: impl Into<VehicleId>, type_id: VehicleTypeId, lng: f64, lat: f64) -> Self {
        Self { id: id.into(), type_id, lng, lat, address: None }
    }

    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lng, self.lat)
    }
}

/// Load seed units from a CSV file.
pub fn load_units_csv(path: &Path) -> MobilityResult<Vec<VehicleUnit>> {
    let file = std::fs::File::open(path)?;
    load_units_reader(file)
}

/// Like [`load_units_csv`] but accepts any `Read` source.
///
/// Rejects rows with non-finite coordinates and duplicate ids.
pub fn load_units_reader<R: Read>(reader: R) -> MobilityResult<Vec<VehicleUnit>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut units = Vec::new();
    let mut seen: HashSet<VehicleId> = HashSet::new();

    for (row, result) in csv_reader.deserialize::<VehicleUnit>().enumerate() {
        let unit = result.map_err(|e| MobilityError::Parse(e.to_string()))?;
        if !unit.position().is_finite() {
            return Err(MobilityError::Parse(format!(
                "row {}: unit {} has non-finite coordinates",
                row + 1,
                unit.id
            )));
        }
        if !seen.insert(unit.id.clone()) {
            return Err(MobilityError::DuplicateVehicle(unit.id));
        }
        units.push(unit);
    }

    Ok(units)
}
