use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::geometry::validate_px_per_minute;
use crate::core::time_of_day::validate_day_start;
use crate::core::{DEFAULT_DAY_START_MINUTES, ViewMode, WidthMode};
use crate::error::{LayoutError, LayoutResult};

/// Inclusive range of dates shown by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> LayoutResult<Self> {
        Self { from, to }.validate()
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    fn validate(self) -> LayoutResult<Self> {
        if self.from > self.to {
            return Err(LayoutError::Validation {
                field: "date_from",
                reason: format!("{} is after date_to {}", self.from, self.to),
            });
        }
        Ok(self)
    }
}

/// Per-request layout configuration.
///
/// Serializable so view state can be persisted alongside the selected week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_day_start_minutes")]
    pub day_start_minutes: u32,
    #[serde(default = "default_px_per_minute")]
    pub px_per_minute: f64,
    #[serde(default)]
    pub view_mode: ViewMode,
    #[serde(default)]
    pub width_mode: WidthMode,
    #[serde(default)]
    pub visible_dates: Option<DateWindow>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            day_start_minutes: default_day_start_minutes(),
            px_per_minute: default_px_per_minute(),
            view_mode: ViewMode::default(),
            width_mode: WidthMode::default(),
            visible_dates: None,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_day_start_minutes(mut self, day_start_minutes: u32) -> Self {
        self.day_start_minutes = day_start_minutes;
        self
    }

    #[must_use]
    pub fn with_px_per_minute(mut self, px_per_minute: f64) -> Self {
        self.px_per_minute = px_per_minute;
        self
    }

    #[must_use]
    pub fn with_width_mode(mut self, width_mode: WidthMode) -> Self {
        self.width_mode = width_mode;
        self
    }

    #[must_use]
    pub fn with_visible_dates(mut self, window: DateWindow) -> Self {
        self.visible_dates = Some(window);
        self
    }

    pub fn validate(self) -> LayoutResult<Self> {
        validate_day_start(self.day_start_minutes)?;
        validate_px_per_minute(self.px_per_minute)?;
        if let Some(window) = self.visible_dates {
            window.validate()?;
        }
        Ok(self)
    }
}

fn default_day_start_minutes() -> u32 {
    DEFAULT_DAY_START_MINUTES
}

fn default_px_per_minute() -> f64 {
    1.0
}
