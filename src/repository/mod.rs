//! Repository layer for the local booking cache

pub mod bookings_csv;

use crate::config::CacheConfig;

/// Main repository struct holding the persistence backends
#[derive(Clone)]
pub struct Repository {
    pub bookings: bookings_csv::BookingsCsvRepository,
}

impl Repository {
    /// Create a new repository from the cache configuration
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            bookings: bookings_csv::BookingsCsvRepository::new(config.bookings_csv.clone()),
        }
    }
}
