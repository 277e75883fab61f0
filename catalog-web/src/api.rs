use async_trait::async_trait;
use catalog_common::{FetchError, ItemSource, RawItem};
use reqwest::StatusCode;

/// Catalog endpoint over HTTP. One GET, no retries.
#[derive(Clone, Debug)]
pub struct HttpItemSource {
    endpoint: String,
}

impl HttpItemSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Map a non-success status to `FetchError::Status`
fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }
    Err(FetchError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    })
}

#[async_trait(?Send)]
impl ItemSource for HttpItemSource {
    async fn fetch_items(&self) -> Result<Vec<RawItem>, FetchError> {
        let resp = reqwest::get(&self.endpoint)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        check_status(resp.status())?;

        resp.json::<Vec<RawItem>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_pass() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(check_status(StatusCode::NO_CONTENT).is_ok());
    }

    #[test]
    fn test_error_status_message() {
        let err = check_status(StatusCode::INTERNAL_SERVER_ERROR).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch data: 500 Internal Server Error"
        );
    }

    #[test]
    fn test_not_found_keeps_code() {
        match check_status(StatusCode::NOT_FOUND) {
            Err(FetchError::Status { status, reason }) => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
