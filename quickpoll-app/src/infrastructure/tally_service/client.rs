use quickpoll_errors::AppError;

use crate::application::TallyGateway;
use crate::domain::{Ballot, Tally};

/// HTTP client for the spreadsheet-backed tally endpoint.
///
/// Holds only the endpoint; the browser's fetch layer owns connection reuse,
/// so a `reqwest::Client` is built per call.
#[derive(Debug, Clone)]
pub struct TallyServiceClient {
    endpoint: String,
}

impl TallyServiceClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Read URL with a timestamp query parameter so intermediary caches
    /// cannot serve a stale tally.
    fn read_url(&self) -> String {
        format!(
            "{}?t={}",
            self.endpoint,
            chrono::Utc::now().timestamp_millis()
        )
    }
}

impl TallyGateway for TallyServiceClient {
    async fn submit(&self, ballot: &Ballot) -> Result<(), AppError> {
        let request = reqwest::Client::new()
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(ballot);

        // The Apps Script endpoint only accepts cross-origin writes in
        // opaque-response mode, where the status line is unreadable. Not
        // raising a transport error is the strongest success signal we get.
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_mode_no_cors();

        request.send().await.map_err(|err| {
            tracing::error!("vote write failed: {err}");
            AppError::SubmitFailed(err.to_string())
        })?;

        Ok(())
    }

    async fn fetch(&self) -> Result<Tally, AppError> {
        let response = reqwest::Client::new()
            .get(self.read_url())
            .send()
            .await
            .map_err(|err| AppError::FetchFailed(err.to_string()))?;

        if !response.status().is_success() {
            tracing::error!("tally read failed: {}", response.status());
            return Err(AppError::FetchFailed(format!(
                "status {}",
                response.status()
            )));
        }

        response
            .json::<Tally>()
            .await
            .map_err(|err| AppError::FetchFailed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_url_defeats_caches() {
        let client = TallyServiceClient::new("https://example.test/exec");
        let url = client.read_url();
        assert!(url.starts_with("https://example.test/exec?t="));

        let (_, stamp) = url.split_once("?t=").unwrap();
        assert!(stamp.parse::<i64>().unwrap() > 0);
    }
}
