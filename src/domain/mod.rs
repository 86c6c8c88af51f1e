pub mod holiday;
pub mod schedule;
pub mod toll;
pub mod vehicle;

// Re-export commonly used types
pub use holiday::{FixedHolidayCalendar, HolidayCalendar, NoHolidays};
pub use schedule::{Fee, FeeInterval, FeeSchedule, ScheduleIssue};
pub use toll::{TollRequest, WindowRule};
pub use vehicle::{ExemptVehicleTypes, RegisteredVehicle, Vehicle, VehicleType};

// Re-export DomainError from support for convenience
pub use crate::support::errors::{DomainError, DomainResult};
