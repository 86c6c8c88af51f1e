pub mod calendar;

pub use calendar::{FixedHolidayCalendar, HolidayCalendar, NoHolidays};
