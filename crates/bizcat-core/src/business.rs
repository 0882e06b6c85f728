use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Opening mode of a single day in the business-hours schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursMode {
    #[serde(rename = "open_24h")]
    Open24h,
    Closed,
    SpecificHours,
    AppointmentOnly,
}

impl HoursMode {
    /// Wire literal for the `mode` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HoursMode::Open24h => "open_24h",
            HoursMode::Closed => "closed",
            HoursMode::SpecificHours => "specific_hours",
            HoursMode::AppointmentOnly => "appointment_only",
        }
    }
}

impl std::fmt::Display for HoursMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoursMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open_24h" => Ok(HoursMode::Open24h),
            "closed" => Ok(HoursMode::Closed),
            "specific_hours" => Ok(HoursMode::SpecificHours),
            "appointment_only" => Ok(HoursMode::AppointmentOnly),
            other => Err(CoreError::InvalidHoursMode(other.to_string())),
        }
    }
}

/// Schedule for one day of the week.
///
/// `open_time` / `close_time` are only meaningful for
/// [`HoursMode::SpecificHours`]; the builder drops them for every other mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayConfig {
    /// Day literal as the remote expects it, e.g. `"mon"`.
    pub day_of_week: String,
    pub mode: HoursMode,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
}

/// Raw attribute map of a parsed `business_hours_config` node, kept verbatim.
pub type BusinessHoursConfig = BTreeMap<String, String>;

impl DayConfig {
    /// Validates a raw parsed config entry into a typed [`DayConfig`].
    ///
    /// # Errors
    ///
    /// - [`CoreError::MissingHoursField`] if `day_of_week` or `mode` is absent.
    /// - [`CoreError::InvalidHoursMode`] if `mode` is not a known literal.
    pub fn from_attrs(attrs: &BusinessHoursConfig) -> Result<Self, CoreError> {
        let day_of_week = attrs
            .get("day_of_week")
            .ok_or(CoreError::MissingHoursField("day_of_week"))?
            .clone();
        let mode = attrs
            .get("mode")
            .ok_or(CoreError::MissingHoursField("mode"))?
            .parse::<HoursMode>()?;

        Ok(Self {
            day_of_week,
            mode,
            open_time: attrs.get("open_time").cloned(),
            close_time: attrs.get("close_time").cloned(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    /// IANA timezone name, e.g. `"America/Sao_Paulo"`.
    pub timezone: String,
    pub business_config: Vec<DayConfig>,
}

/// Sparse business-profile edit. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessProfileUpdate {
    pub address: Option<String>,
    pub description: Option<String>,
    pub website: Option<Vec<String>>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub business_hours: Option<BusinessHours>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBusinessHours {
    pub timezone: Option<String>,
    /// Entries exactly as received; see [`DayConfig::from_attrs`].
    pub business_config: Option<Vec<BusinessHoursConfig>>,
}

/// Business profile as returned by the remote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub wid: Option<String>,
    pub address: Option<String>,
    /// Empty string when the profile has no description.
    pub description: String,
    /// Zero or one entry; only the first `website` node is read.
    pub website: Vec<String>,
    /// Zero or one entry. Populated from the `email` node, not from a
    /// `phone` node, for compatibility with existing consumers.
    pub phone: Vec<String>,
    pub email: Option<String>,
    pub category: Option<String>,
    pub business_hours: ParsedBusinessHours,
}
