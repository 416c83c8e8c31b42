use chrono::{DateTime, NaiveDate, Utc};

use crate::ids::ExhibitionId;

/// Banner used when an exhibition is created without one.
pub const DEFAULT_BANNER_IMAGE: &str = "/images/exhibitions/default.svg";

/// Capacity assigned to exhibitions that do not specify one.
pub const DEFAULT_MAX_ARTWORKS: u32 = 50;

catalogue_enum! {
    /// Schedule state of an exhibition
    pub enum ExhibitionStatus as "exhibition status" {
        Upcoming = 0,
        Active = 1,
        Ended = 2,
        Cancelled = 3,
    }
}

impl Default for ExhibitionStatus {
    fn default() -> Self {
        ExhibitionStatus::Upcoming
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exhibition {
    pub id: ExhibitionId,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    /// Strictly after `start_date`.
    pub end_date: NaiveDate,
    pub location: String,
    pub max_artworks: u32,
    /// Stored status. Only `Cancelled` is authoritative; everything else is
    /// recomputed from the dates by [`Exhibition::effective_status`].
    pub status: ExhibitionStatus,
    pub banner_image: String,
    pub created_at: DateTime<Utc>,
}

impl Exhibition {
    /// Status as seen on `today`: cancelled exhibitions stay cancelled, the
    /// rest follow the calendar.
    pub fn effective_status(&self, today: NaiveDate) -> ExhibitionStatus {
        if self.status == ExhibitionStatus::Cancelled {
            ExhibitionStatus::Cancelled
        } else if today < self.start_date {
            ExhibitionStatus::Upcoming
        } else if today <= self.end_date {
            ExhibitionStatus::Active
        } else {
            ExhibitionStatus::Ended
        }
    }

    /// Persists the calendar-derived status onto the record.
    pub fn refresh_status(&mut self, today: NaiveDate) {
        self.status = self.effective_status(today);
    }

    pub fn cancel(&mut self) {
        self.status = ExhibitionStatus::Cancelled;
    }

    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.effective_status(today) == ExhibitionStatus::Active
    }

    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.effective_status(today) == ExhibitionStatus::Upcoming
    }

    pub fn is_ended(&self, today: NaiveDate) -> bool {
        self.effective_status(today) == ExhibitionStatus::Ended
    }

    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        match self.effective_status(today) {
            ExhibitionStatus::Ended | ExhibitionStatus::Cancelled => 0,
            _ => (self.end_date - today).num_days(),
        }
    }

    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Whether `placed` artworks leave room for one more.
    pub fn has_capacity(&self, placed: u32) -> bool {
        placed < self.max_artworks
    }

    /// Whether another artwork may be hung in the running show today.
    pub fn can_add_artwork(&self, placed: u32, today: NaiveDate) -> bool {
        self.has_capacity(placed) && self.is_active(today)
    }
}
