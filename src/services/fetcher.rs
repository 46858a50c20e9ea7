//! Day-scoped access to the upstream desk booking service

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Serialize;

use crate::{
    config::BookingApiConfig,
    error::{AppError, AppResult, FetchError},
    models::DayResponse,
};

/// Bearer token for the booking service. Never printed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Fetches the booking state of every desk for a single day
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DayFetcher: Send + Sync {
    async fn fetch_day(&self, token: &ApiToken, date: NaiveDate) -> Result<DayResponse, FetchError>;
}

/// Request window covering one whole day
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DayWindow<'a> {
    building_id: &'a str,
    start_date: String,
    end_date: String,
}

impl<'a> DayWindow<'a> {
    fn new(building_id: &'a str, date: NaiveDate) -> Self {
        let day = date.format("%Y-%m-%d");
        Self {
            building_id,
            start_date: format!("{}T00:00:00", day),
            end_date: format!("{}T23:59:59", day),
        }
    }
}

/// `DayFetcher` backed by the GetDesks HTTP endpoint
#[derive(Clone)]
pub struct HttpDayFetcher {
    client: Client,
    url: String,
    building_id: String,
}

impl HttpDayFetcher {
    pub fn new(config: &BookingApiConfig) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            building_id: config.building_id.clone(),
        })
    }
}

#[async_trait]
impl DayFetcher for HttpDayFetcher {
    async fn fetch_day(&self, token: &ApiToken, date: NaiveDate) -> Result<DayResponse, FetchError> {
        let window = DayWindow::new(&self.building_id, date);
        tracing::debug!("POST {} for {}", self.url, date);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(token.secret())
            .form(&window)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                date,
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                date,
                status: status.as_u16(),
            });
        }

        response
            .json::<DayResponse>()
            .await
            .map_err(|e| FetchError::Decode {
                date,
                detail: e.to_string(),
            })
    }
}
