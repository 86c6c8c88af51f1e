//! Toll calculation inputs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::vehicle::VehicleType;
use crate::support::errors::{ConfigError, DomainError, DomainResult};

/// How two consecutive charged passes are judged to share a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowRule {
    /// Only the minutes component of the gap (`total_minutes % 60`) is
    /// compared, so the hour part is ignored.
    #[default]
    MinutesComponent,
    /// Absolute elapsed minutes between the passes.
    Elapsed,
}

impl WindowRule {
    pub fn within(&self, previous: NaiveDateTime, current: NaiveDateTime, window_minutes: u32) -> bool {
        let gap = current.signed_duration_since(previous).num_minutes();
        let measured = match self {
            Self::MinutesComponent => gap % 60,
            Self::Elapsed => gap.abs(),
        };
        measured <= i64::from(window_minutes)
    }
}

/// Toll request as received at the boundary (CLI, JSON).
///
/// Fields are optional so a missing vehicle or pass list is reported as an
/// invalid argument instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollRequest {
    #[serde(default)]
    pub vehicle: Option<VehicleType>,
    #[serde(default)]
    pub passes: Option<Vec<NaiveDateTime>>,
}

impl TollRequest {
    pub fn new(vehicle: VehicleType, passes: Vec<NaiveDateTime>) -> Self {
        Self {
            vehicle: Some(vehicle),
            passes: Some(passes),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> DomainResult<(VehicleType, &[NaiveDateTime])> {
        let vehicle = self.vehicle.ok_or(DomainError::InvalidArgument("vehicle"))?;
        let passes = self
            .passes
            .as_deref()
            .ok_or(DomainError::InvalidArgument("passes"))?;
        Ok((vehicle, passes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 8, 29)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn minutes_component_ignores_hours() {
        let rule = WindowRule::MinutesComponent;
        assert!(rule.within(t(6, 30), t(7, 20), 60));
        assert!(rule.within(t(6, 0), t(9, 10), 10));
        assert!(!rule.within(t(6, 0), t(9, 10), 9));
    }

    #[test]
    fn elapsed_uses_full_gap() {
        let rule = WindowRule::Elapsed;
        assert!(rule.within(t(6, 30), t(7, 20), 60));
        assert!(rule.within(t(6, 55), t(7, 5), 60));
        assert!(!rule.within(t(6, 0), t(7, 1), 60));
        assert!(rule.within(t(7, 20), t(6, 30), 60));
    }

    #[test]
    fn window_rule_deserializes_kebab_case() {
        let rule: WindowRule = serde_json::from_str("\"minutes-component\"").unwrap();
        assert_eq!(rule, WindowRule::MinutesComponent);
        let rule: WindowRule = serde_json::from_str("\"elapsed\"").unwrap();
        assert_eq!(rule, WindowRule::Elapsed);
    }

    #[test]
    fn validate_rejects_missing_vehicle() {
        let request = TollRequest {
            vehicle: None,
            passes: Some(vec![t(8, 0)]),
        };
        assert_eq!(
            request.validate().unwrap_err(),
            DomainError::InvalidArgument("vehicle")
        );
    }

    #[test]
    fn validate_rejects_missing_passes() {
        let request = TollRequest {
            vehicle: Some(VehicleType::Car),
            passes: None,
        };
        assert_eq!(
            request.validate().unwrap_err(),
            DomainError::InvalidArgument("passes")
        );
    }

    #[test]
    fn empty_pass_list_is_valid() {
        let request = TollRequest::new(VehicleType::Car, Vec::new());
        let (vehicle, passes) = request.validate().unwrap();
        assert_eq!(vehicle, VehicleType::Car);
        assert!(passes.is_empty());
    }

    #[test]
    fn parses_json_request() {
        let request =
            TollRequest::from_json(r#"{"vehicle": "Car", "passes": ["2024-08-29T08:00:00"]}"#)
                .unwrap();
        assert_eq!(request, TollRequest::new(VehicleType::Car, vec![t(8, 0)]));
    }

    #[test]
    fn json_without_passes_parses_then_fails_validation() {
        let request = TollRequest::from_json(r#"{"vehicle": "Car"}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
