//! Bookings service: fetching, memoisation and the CSV mirror

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{
    error::{AppError, AppResult},
    models::{DashboardContext, DateRange},
    repository::Repository,
};

use super::aggregator::{aggregate, Aggregation};
use super::fetcher::{ApiToken, DayFetcher};

type MemoKey = (ApiToken, DateRange);

#[derive(Clone)]
pub struct BookingsService {
    fetcher: Arc<dyn DayFetcher>,
    repository: Repository,
    memo: Arc<Mutex<HashMap<MemoKey, Arc<Aggregation>>>>,
}

impl BookingsService {
    pub fn new(fetcher: Arc<dyn DayFetcher>, repository: Repository) -> Self {
        Self {
            fetcher,
            repository,
            memo: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Initial snapshot from the CSV mirror
    pub fn load_snapshot(&self) -> AppResult<DashboardContext> {
        let bookings = self.repository.bookings.load()?;
        Ok(DashboardContext::from_cache(bookings))
    }

    /// Aggregate `range` and return the resulting snapshot.
    ///
    /// Identical requests (same token and range) are answered from memory
    /// until `clear_cache` is called.
    pub async fn fetch(&self, token: &ApiToken, range: DateRange) -> AppResult<DashboardContext> {
        let key = (token.clone(), range);
        let cached = self.lock_memo()?.get(&key).cloned();
        if let Some(hit) = cached {
            tracing::debug!("Serving {} to {} from memory", range.start, range.end);
            return Ok(snapshot(range, &hit));
        }

        let aggregation = Arc::new(aggregate(self.fetcher.as_ref(), token, range).await?);
        self.lock_memo()?.insert(key, aggregation.clone());

        Ok(snapshot(range, &aggregation))
    }

    /// Forget memoised fetches, returning how many were dropped
    pub fn clear_cache(&self) -> AppResult<usize> {
        let mut memo = self.lock_memo()?;
        let dropped = memo.len();
        memo.clear();
        tracing::info!("Cleared {} memoised fetch(es)", dropped);
        Ok(dropped)
    }

    /// Write the snapshot's bookings to the CSV mirror
    pub async fn save_snapshot(&self, context: &DashboardContext) -> AppResult<usize> {
        let repository = self.repository.clone();
        let bookings = context.bookings.clone();
        let count = crate::models::booking::total_bookings(&bookings);

        tokio::task::spawn_blocking(move || repository.bookings.save(&bookings))
            .await
            .map_err(|e| AppError::Internal(format!("Cache writer failed: {}", e)))??;

        Ok(count)
    }

    fn lock_memo(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<MemoKey, Arc<Aggregation>>>> {
        self.memo
            .lock()
            .map_err(|_| AppError::Internal("Fetch memo lock poisoned".to_string()))
    }
}

fn snapshot(range: DateRange, aggregation: &Aggregation) -> DashboardContext {
    DashboardContext {
        range: Some(range),
        bookings: aggregation.bookings.clone(),
        team_members: aggregation.team_members.clone(),
        floor_summaries: aggregation.floor_summaries.clone(),
    }
}
