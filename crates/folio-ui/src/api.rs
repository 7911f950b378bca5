//! API client for backend communication

use folio_types::ApiError;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await.map_err(|e| e.to_string())?;
        Self::decode(response).await
    }

    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::decode(response).await
    }

    /// Success bodies decode as `T`; error bodies surface their `error` text
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(error_message(status.as_u16(), &text));
        }
        response.json::<T>().await.map_err(|e| e.to_string())
    }
}

fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => api_error.error,
        Err(_) if body.is_empty() => format!("HTTP {}", status),
        Err(_) => format!("HTTP {}: {}", status, body),
    }
}
