//! Toll fee engine
//!
//! Turns a vehicle and one day's passes into a single fee: exempt vehicles and
//! toll-free dates pay nothing, passes close together are grouped, and the
//! total is capped.

use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime, Weekday};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::domain::{
    DomainResult, ExemptVehicleTypes, Fee, FeeSchedule, HolidayCalendar, TollRequest, Vehicle,
    WindowRule,
};

/// Daily cap
pub const MAX_FEE: Fee = 60;
/// Grouping threshold for consecutive passes
pub const MAX_WINDOW_MINUTES: u32 = 60;

/// Stateless toll calculator. Safe to share between threads.
pub struct TollFeeEngine {
    schedule: FeeSchedule,
    exempt: ExemptVehicleTypes,
    holidays: Arc<dyn HolidayCalendar>,
    max_fee: Fee,
    window_minutes: u32,
    window_rule: WindowRule,
}

impl TollFeeEngine {
    /// Engine with the reference schedule, exempt set and limits.
    pub fn new(holidays: Arc<dyn HolidayCalendar>) -> Self {
        Self {
            schedule: FeeSchedule::default(),
            exempt: ExemptVehicleTypes::default(),
            holidays,
            max_fee: MAX_FEE,
            window_minutes: MAX_WINDOW_MINUTES,
            window_rule: WindowRule::default(),
        }
    }

    /// Engine built from configuration, using the configured holiday list.
    pub fn from_config(config: &AppConfig) -> Self {
        let engine = Self::new(Arc::new(config.holiday_calendar()))
            .with_schedule(config.fee_schedule())
            .with_exempt(config.exempt_set())
            .with_limits(config.max_fee, config.window_minutes)
            .with_window_rule(config.window_rule);

        for issue in engine.schedule.inconsistencies() {
            warn!(%issue, "Fee schedule inconsistency");
        }
        engine
    }

    pub fn with_schedule(mut self, schedule: FeeSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn with_exempt(mut self, exempt: ExemptVehicleTypes) -> Self {
        self.exempt = exempt;
        self
    }

    pub fn with_limits(mut self, max_fee: Fee, window_minutes: u32) -> Self {
        self.max_fee = max_fee;
        self.window_minutes = window_minutes;
        self
    }

    pub fn with_window_rule(mut self, window_rule: WindowRule) -> Self {
        self.window_rule = window_rule;
        self
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Fee for a single pass by time of day only. No date or vehicle checks.
    pub fn get_fee(&self, pass: NaiveDateTime) -> Fee {
        self.schedule.fee_at(pass.time())
    }

    /// Total fee for one vehicle and one day of passes, in caller order.
    pub fn get_toll_fee(&self, vehicle: &dyn Vehicle, passes: &[NaiveDateTime]) -> Fee {
        let vehicle_type = vehicle.vehicle_type();
        if self.exempt.contains(vehicle_type) {
            debug!(%vehicle_type, "Toll-exempt vehicle");
            return 0;
        }

        let mut total: Fee = 0;
        let mut previous: Option<(NaiveDateTime, Fee)> = None;

        for &pass in passes {
            if self.is_toll_free_date(pass) {
                debug!(%pass, "Toll-free date, pass skipped");
                continue;
            }

            let fee = self.get_fee(pass);
            if let Some((previous_pass, previous_fee)) = previous {
                if self
                    .window_rule
                    .within(previous_pass, pass, self.window_minutes)
                    && fee > previous_fee
                {
                    total -= previous_fee;
                }
            }

            total += fee;
            previous = Some((pass, fee));
            debug!(%pass, fee, total, "Pass charged");

            if total > self.max_fee {
                info!(%vehicle_type, total = self.max_fee, "Daily cap reached");
                return self.max_fee;
            }
        }

        info!(%vehicle_type, passes = passes.len(), total, "Toll fee calculated");
        total
    }

    /// Validate a boundary request and compute its fee.
    pub fn calculate(&self, request: &TollRequest) -> DomainResult<Fee> {
        let (vehicle, passes) = request.validate()?;
        Ok(self.get_toll_fee(&vehicle, passes))
    }

    fn is_toll_free_date(&self, pass: NaiveDateTime) -> bool {
        let date = pass.date();
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun) || self.holidays.is_date_holiday(date)
    }
}

// ── Tests ──────────────────────────────────────────────────────
