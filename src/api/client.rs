use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, AppResult};
use crate::inbox::model::Category;
use crate::inbox::source::FeedSource;

use super::feeds;

#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    base_url: String,
    api_key: String,
    api_key_header: String,
}

impl FeedClient {
    pub fn new(base_url: &str, api_key: &str, api_key_header: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            api_key_header: api_key_header.to_string(),
        }
    }

    pub async fn account(&self) -> AppResult<Value> {
        self.get_json(&feeds::account_endpoint()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> AppResult<T> {
        let url = self.endpoint_url(endpoint)?;
        log::debug!("GET {url}");

        let response = self
            .http
            .get(url)
            .header(self.api_key_header.as_str(), self.api_key.as_str())
            .send()
            .await?;

        self.parse_json_response(response).await
    }

    fn endpoint_url(&self, endpoint: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        let base_path = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{base_path}/{}", endpoint.trim_start_matches('/')));
        Ok(url)
    }

    async fn parse_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }
}

impl FeedSource for FeedClient {
    async fn fetch(&self, category: Category) -> AppResult<Value> {
        let payload: Value = self.get_json(&feeds::feed_endpoint(category)).await?;
        log::debug!(
            "{} feed returned {}",
            category,
            match &payload {
                Value::Array(items) => format!("{} records", items.len()),
                Value::Object(_) => "an object".to_string(),
                _ => "a non-list payload".to_string(),
            }
        );
        Ok(payload)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorBody {
    Nested { error: ApiErrorDetail },
    Flat(ApiErrorDetail),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorDetail {
    Text(String),
    Fields {
        message: Option<String>,
        code: Option<Value>,
    },
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let message = parse_api_error_message(body).unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            "no error details in response body".to_string()
        } else {
            body.to_string()
        }
    });

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return AppError::Auth(format!(
            "mail api rejected the api key ({status}): {message}. run `postbox config set --api-key <key>`"
        ));
    }

    AppError::Api(format!("mail api request failed ({status}): {message}"))
}

fn parse_api_error_message(body: &str) -> Option<String> {
    let detail = match serde_json::from_str::<ApiErrorBody>(body).ok()? {
        ApiErrorBody::Nested { error } => error,
        ApiErrorBody::Flat(detail) => detail,
    };

    match detail {
        ApiErrorDetail::Text(text) => Some(text).filter(|text| !text.trim().is_empty()),
        ApiErrorDetail::Fields { message, code } => {
            let mut parts = Vec::new();
            if let Some(message) = message {
                parts.push(message);
            }
            if let Some(code) = code.filter(|code| !code.is_null()) {
                parts.push(format!("code={code}"));
            }

            if parts.is_empty() {
                return None;
            }
            Some(parts.join(", "))
        }
    }
}
