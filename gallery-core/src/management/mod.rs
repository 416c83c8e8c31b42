//! Write side of the gallery: validated create/update/delete for every
//! record kind, plus account registration and sign-in.

mod artists;
mod artworks;
pub mod crypto;
mod exhibitions;
mod users;
pub mod validation;

use std::sync::Arc;

pub use artists::{ArtistForm, ArtistService};
pub use artworks::{ArtworkForm, ArtworkService};
pub use crypto::{PasswordCrypto, PasswordCryptoError};
pub use exhibitions::{ExhibitionForm, ExhibitionService};
pub use users::{MIN_PASSWORD_LENGTH, Registration, UserService};

use crate::clock::Clock;
use crate::database::ports::CatalogueStore;

/// All management services over one store.
#[derive(Debug, Clone)]
pub struct Management {
    pub artists: ArtistService,
    pub artworks: ArtworkService,
    pub exhibitions: ExhibitionService,
    pub users: UserService,
}

impl Management {
    pub fn new(
        store: Arc<dyn CatalogueStore>,
        clock: Arc<dyn Clock>,
        crypto: Arc<PasswordCrypto>,
    ) -> Self {
        Self {
            artists: ArtistService::new(store.clone(), clock.clone()),
            artworks: ArtworkService::new(store.clone(), clock.clone()),
            exhibitions: ExhibitionService::new(store.clone(), clock.clone()),
            users: UserService::new(store, clock, crypto),
        }
    }
}
