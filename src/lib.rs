//! # Toll Fee
//!
//! Road toll fee engine: one vehicle, one day of passes, one fee.
//!
//! ## Architecture
//!
//! - **domain**: fee schedule, vehicle classification, holiday calendar port,
//!   toll request and window rule
//! - **application**: the [`TollFeeEngine`] service
//! - **config**: TOML configuration
//! - **support**: errors, tracing setup, time parsing

pub mod application;
pub mod config;
pub mod domain;
pub mod support;

pub use config::{default_config_path, AppConfig, LoggingConfig};

pub use application::{TollFeeEngine, MAX_FEE, MAX_WINDOW_MINUTES};
pub use domain::{
    Fee, FeeInterval, FeeSchedule, FixedHolidayCalendar, HolidayCalendar, NoHolidays,
    RegisteredVehicle, TollRequest, Vehicle, VehicleType, WindowRule,
};
pub use support::errors::{AppError, ConfigError, DomainError, DomainResult};
pub use support::telemetry::init_tracing;
