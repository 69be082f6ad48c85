//! Date to chart-coordinate mapping and axis bounds.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::EmptyScheduleError;
use crate::model::Schedule;

/// Day zero of the horizontal axis.
pub fn epoch() -> NaiveDate {
    NaiveDate::default()
}

/// Horizontal chart coordinate of a date: whole days since [`epoch`].
pub fn date_to_coord(date: NaiveDate) -> f64 {
    (date - epoch()).num_days() as f64
}

/// Date at a horizontal chart coordinate, rounded down to the day.
pub fn coord_to_date(coord: f64) -> NaiveDate {
    epoch() + Duration::days(coord.floor() as i64)
}

/// Horizontal bounds of the chart, padded by one day on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAxis {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateAxis {
    /// Span every date in the schedule, plus one day either side.
    ///
    /// Both dates of every task take part in the min and max, not only the
    /// earliest start and latest finish. The two agree unless a row has its
    /// finish before its start; such a row still lands inside the bounds.
    pub fn from_schedule(schedule: &Schedule) -> Result<Self, EmptyScheduleError> {
        let tasks = schedule.tasks();
        let earliest = tasks
            .iter()
            .map(|t| t.start.min(t.finish))
            .min()
            .ok_or(EmptyScheduleError)?;
        let latest = tasks
            .iter()
            .map(|t| t.finish.max(t.start))
            .max()
            .ok_or(EmptyScheduleError)?;

        Ok(Self {
            min: earliest - Duration::days(1),
            max: latest + Duration::days(1),
        })
    }

    pub fn min_coord(&self) -> f64 {
        date_to_coord(self.min)
    }

    pub fn max_coord(&self) -> f64 {
        date_to_coord(self.max)
    }

    /// Every date from `min` to `max` inclusive, one per gridline.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let max = self.max;
        self.min.iter_days().take_while(move |d| *d <= max)
    }
}

/// Vertical band `[slot - half_height, slot + half_height]` of a bar.
pub fn slot_band(slot: usize, half_height: f64) -> (f64, f64) {
    let center = slot as f64;
    (center - half_height, center + half_height)
}
