//! Vehicle aggregate

pub mod model;

pub use model::{ExemptVehicleTypes, RegisteredVehicle, Vehicle, VehicleType};
