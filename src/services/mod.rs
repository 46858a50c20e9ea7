//! Business logic services

pub mod aggregator;
pub mod bookings;
pub mod fetcher;
pub mod grid;
pub mod period;
pub mod team;

use std::sync::Arc;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub bookings: bookings::BookingsService,
}

impl Services {
    /// Create all services with the given repository and upstream fetcher
    pub fn new(repository: Repository, fetcher: Arc<dyn fetcher::DayFetcher>) -> Self {
        Self {
            bookings: bookings::BookingsService::new(fetcher, repository),
        }
    }
}
