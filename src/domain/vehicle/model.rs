//! Vehicle classification

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::support::errors::ConfigError;

/// Vehicle type tag used for exemption checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Car,
    Motorbike,
    Bicycle,
    Tractor,
    Emergency,
    Diplomat,
    Foreign,
    Military,
}

impl VehicleType {
    pub const ALL: [VehicleType; 8] = [
        Self::Car,
        Self::Motorbike,
        Self::Bicycle,
        Self::Tractor,
        Self::Emergency,
        Self::Diplomat,
        Self::Foreign,
        Self::Military,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Motorbike => "Motorbike",
            Self::Bicycle => "Bicycle",
            Self::Tractor => "Tractor",
            Self::Emergency => "Emergency",
            Self::Diplomat => "Diplomat",
            Self::Foreign => "Foreign",
            Self::Military => "Military",
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::InvalidVehicleType(s.to_string()))
    }
}

/// Anything that can report its vehicle type.
pub trait Vehicle {
    fn vehicle_type(&self) -> VehicleType;
}

impl Vehicle for VehicleType {
    fn vehicle_type(&self) -> VehicleType {
        *self
    }
}

/// A concrete vehicle identified by registration plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredVehicle {
    pub registration: String,
    pub vehicle_type: VehicleType,
}

impl RegisteredVehicle {
    pub fn new(registration: impl Into<String>, vehicle_type: VehicleType) -> Self {
        Self {
            registration: registration.into(),
            vehicle_type,
        }
    }
}

impl Vehicle for RegisteredVehicle {
    fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }
}

/// Set of vehicle types that never pay toll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExemptVehicleTypes(HashSet<VehicleType>);

impl ExemptVehicleTypes {
    pub fn new(types: impl IntoIterator<Item = VehicleType>) -> Self {
        Self(types.into_iter().collect())
    }

    pub fn none() -> Self {
        Self(HashSet::new())
    }

    pub fn contains(&self, vehicle_type: VehicleType) -> bool {
        self.0.contains(&vehicle_type)
    }

    pub fn is_exempt(&self, vehicle: &dyn Vehicle) -> bool {
        self.contains(vehicle.vehicle_type())
    }
}

impl Default for ExemptVehicleTypes {
    /// Every type except `Car`.
    fn default() -> Self {
        Self::new(
            VehicleType::ALL
                .into_iter()
                .filter(|t| *t != VehicleType::Car),
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_reports_car_type() {
        let car = RegisteredVehicle::new("ABC123", VehicleType::Car);
        assert_eq!(car.vehicle_type().to_string(), "Car");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("motorbike".parse::<VehicleType>().unwrap(), VehicleType::Motorbike);
        assert_eq!(" Diplomat ".parse::<VehicleType>().unwrap(), VehicleType::Diplomat);
    }

    #[test]
    fn parse_unknown_type_fails() {
        assert!(matches!(
            "Spaceship".parse::<VehicleType>(),
            Err(ConfigError::InvalidVehicleType(_))
        ));
    }

    #[test]
    fn default_exempt_set_excludes_only_car() {
        let exempt = ExemptVehicleTypes::default();
        assert!(!exempt.contains(VehicleType::Car));
        for t in VehicleType::ALL.into_iter().filter(|t| *t != VehicleType::Car) {
            assert!(exempt.contains(t), "{t} should be exempt");
        }
    }

    #[test]
    fn empty_exempt_set_charges_everyone() {
        let exempt = ExemptVehicleTypes::none();
        assert!(!exempt.is_exempt(&VehicleType::Military));
    }

    #[test]
    fn vehicle_type_serializes_as_name() {
        let json = serde_json::to_string(&VehicleType::Tractor).unwrap();
        assert_eq!(json, "\"Tractor\"");
    }
}
