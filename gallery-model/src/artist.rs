use chrono::{DateTime, Utc};

use crate::ids::ArtistId;

/// Profile image used when an artist is created without one.
pub const DEFAULT_PROFILE_IMAGE: &str = "/images/artists/default.svg";

catalogue_enum! {
    /// Lifecycle state of an artist account
    pub enum ArtistStatus as "artist status" {
        Active = 0,
        Inactive = 1,
        Suspended = 2,
        PendingApproval = 3,
    }
}

impl Default for ArtistStatus {
    fn default() -> Self {
        ArtistStatus::Active
    }
}

/// A gallery artist. Owns zero or more artworks; deleting the artist removes
/// them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    /// Unique across artists, compared case-insensitively.
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub profile_image: String,
    pub status: ArtistStatus,
    pub joined_at: DateTime<Utc>,
}

impl Artist {
    pub fn is_active(&self) -> bool {
        self.status == ArtistStatus::Active
    }

    pub fn activate(&mut self) {
        self.status = ArtistStatus::Active;
    }

    pub fn deactivate(&mut self) {
        self.status = ArtistStatus::Inactive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_names_and_codes() {
        assert_eq!(
            "pendingapproval".parse::<ArtistStatus>().unwrap(),
            ArtistStatus::PendingApproval
        );
        assert_eq!(
            "Pending_Approval".parse::<ArtistStatus>().unwrap(),
            ArtistStatus::PendingApproval
        );
        assert_eq!("2".parse::<ArtistStatus>().unwrap(), ArtistStatus::Suspended);
        assert!("retired".parse::<ArtistStatus>().is_err());
        assert!(ArtistStatus::try_from(9).is_err());
    }
}
