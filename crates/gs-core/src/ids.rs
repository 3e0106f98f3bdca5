//! Identifier types.
//!
//! Vehicles are identified externally by the string id of their seed unit
//! (`"SUV-031"`, `"PK-900"`).  Inside a `gs_mobility::Fleet` they also have
//! a dense slot index, [`FleetIdx`], used for direct `Vec` indexing on the
//! tick path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// External identity of one simulated vehicle.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(String);

impl VehicleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for VehicleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Slot of a vehicle inside its fleet.  Assigned in insertion order and
/// never reused (vehicles are never destroyed).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct FleetIdx(pub u32);

impl FleetIdx {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FleetIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FleetIdx({})", self.0)
    }
}

impl TryFrom<usize> for FleetIdx {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<FleetIdx, Self::Error> {
        u32::try_from(n).map(FleetIdx)
    }
}
