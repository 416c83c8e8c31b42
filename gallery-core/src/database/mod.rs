//! Entity store: repository ports plus the in-memory and PostgreSQL
//! implementations behind them.

pub mod memory;
pub mod ports;

#[cfg(feature = "database")]
#[cfg_attr(docsrs, doc(cfg(feature = "database")))]
pub mod postgres;

pub use memory::InMemoryCatalogueStore;
pub use ports::CatalogueStore;

#[cfg(feature = "database")]
pub use postgres::PostgresCatalogueStore;
