//! Module containing the vehicle value type and its powertrain kind.

use crate::error::VehicleError;
use crate::imports::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Powertrain kind, which selects the meaning of capacity and consumption
pub enum VehicleKind {
    /// Internal combustion engine: capacity is fuel tank volume,
    /// consumption is distance per unit fuel
    #[serde(rename = "ice")]
    Combustion,
    /// Battery electric: capacity is battery energy, consumption is energy
    /// per unit distance
    #[serde(rename = "ev")]
    Electric,
}

impl VehicleKind {
    /// Maps a literal type tag onto a kind.  Only the exact, case-sensitive
    /// tags in [VEH_TYPES](VEH_TYPES) are accepted.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            ICE => Some(Self::Combustion),
            EV => Some(Self::Electric),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Combustion => ICE,
            Self::Electric => EV,
        }
    }

    pub(crate) fn non_positive_msg(&self) -> &'static str {
        match self {
            Self::Combustion => ICE_NON_POSITIVE_MSG,
            Self::Electric => EV_NON_POSITIVE_MSG,
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Serialized shape of a [Vehicle]; every deserialized vehicle passes
/// through [Vehicle::new]
#[derive(Deserialize)]
struct VehicleSpec {
    kind: VehicleKind,
    year: i32,
    name: String,
    capacity: i32,
    consumption: i32,
}

impl TryFrom<VehicleSpec> for Vehicle {
    type Error = VehicleError;

    fn try_from(spec: VehicleSpec) -> Result<Self, Self::Error> {
        Vehicle::new(
            spec.kind,
            spec.year,
            spec.name,
            spec.capacity,
            spec.consumption,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VehicleSpec")]
/// Immutable vehicle specification.  `capacity` and `consumption` are always
/// positive.
pub struct Vehicle {
    kind: VehicleKind,
    /// Model year, any value accepted
    year: i32,
    /// Display name, expected to contain no whitespace
    name: String,
    /// Fuel tank capacity (gal) or battery capacity (Wh)
    capacity: i32,
    /// Fuel economy (mpg) or energy consumption (Wh per mile)
    consumption: i32,
}

impl SerdeAPI for Vehicle {}

impl Vehicle {
    pub fn new<S: Into<String>>(
        kind: VehicleKind,
        year: i32,
        name: S,
        capacity: i32,
        consumption: i32,
    ) -> Result<Self, VehicleError> {
        if capacity <= 0 || consumption <= 0 {
            return Err(VehicleError::NonPositiveParameter { kind });
        }
        Ok(Self {
            kind,
            year,
            name: name.into(),
            capacity,
            consumption,
        })
    }

    /// Internal combustion vehicle from tank size and fuel economy
    pub fn combustion<S: Into<String>>(
        year: i32,
        name: S,
        fuel_cap: i32,
        mpg: i32,
    ) -> Result<Self, VehicleError> {
        Self::new(VehicleKind::Combustion, year, name, fuel_cap, mpg)
    }

    /// Battery electric vehicle from battery capacity and watt-hours per mile
    pub fn electric<S: Into<String>>(
        year: i32,
        name: S,
        battery_cap: i32,
        whpm: i32,
    ) -> Result<Self, VehicleError> {
        Self::new(VehicleKind::Electric, year, name, battery_cap, whpm)
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn consumption(&self) -> i32 {
        self.consumption
    }

    /// Distance the vehicle can travel on a full tank or charge, in miles
    pub fn range(&self) -> f64 {
        let capacity = f64::from(self.capacity);
        let consumption = f64::from(self.consumption);
        match self.kind {
            VehicleKind::Combustion => capacity * consumption,
            VehicleKind::Electric => capacity / consumption,
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.year, self.name)
    }
}

/// Collection of vehicles loaded from, or saved to, a file
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    pub vehicles: Vec<Vehicle>,
}

impl SerdeAPI for Fleet {
    fn init(&mut self) -> anyhow::Result<()> {
        if self.vehicles.is_empty() {
            bail!("Fleet must contain at least one vehicle");
        }
        Ok(())
    }
}

impl From<Vec<Vehicle>> for Fleet {
    fn from(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }
}

impl Fleet {
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.vehicles.iter()
    }
}
