use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

use crate::providers::porkbun::error::PorkbunProviderError;
use crate::providers::porkbun::types::*;

pub const DEFAULT_API_URL: &str = "https://api.porkbun.com/api/json/v3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The record operations the adapter needs from the registrar.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordClient: Send + Sync {
    async fn list_records(&self, zone: &str) -> Result<Vec<PorkbunRecord>, PorkbunProviderError>;
    async fn create_record(
        &self,
        zone: &str,
        record: &PorkbunRecord,
    ) -> Result<(), PorkbunProviderError>;
    async fn edit_record(
        &self,
        zone: &str,
        id: &str,
        record: &PorkbunRecord,
    ) -> Result<(), PorkbunProviderError>;
    async fn delete_record(&self, zone: &str, id: &str) -> Result<(), PorkbunProviderError>;
}

#[derive(Clone)]
pub struct PorkbunConfig {
    pub api_url: String,
    pub api_key: String,
    pub secret_api_key: String,
    pub timeout: Duration,
}

impl PorkbunConfig {
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for PorkbunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PorkbunConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<REDACTED>")
            .field("secret_api_key", &"<REDACTED>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug)]
pub struct PorkbunClient {
    config: PorkbunConfig,
    client: Client,
}

impl PorkbunClient {
    pub fn new(config: PorkbunConfig) -> Result<Self, PorkbunProviderError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn credentials(&self) -> Credentials<'_> {
        Credentials {
            apikey: &self.config.api_key,
            secretapikey: &self.config.secret_api_key,
        }
    }

    async fn handle_request<T, B>(&self, path: &str, body: &B) -> Result<T, PorkbunProviderError>
    where
        T: DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        debug!("POST {path}");
        let response = self.client.post(self.url(path)).json(body).send().await?;

        match response.status() {
            StatusCode::OK => {
                let reply: ApiResponse<T> = response.json().await?;
                if reply.status == STATUS_SUCCESS {
                    Ok(reply.data)
                } else {
                    Err(PorkbunProviderError::Provider(
                        reply
                            .message
                            .unwrap_or_else(|| format!("unexpected status {}", reply.status)),
                    ))
                }
            }
            status => {
                let error: PorkbunError = response.json().await.unwrap_or(PorkbunError {
                    message: "Unknown error".to_string(),
                });
                Err(PorkbunProviderError::from_status(status, error.message))
            }
        }
    }
}

#[async_trait]
impl RecordClient for PorkbunClient {
    async fn list_records(&self, zone: &str) -> Result<Vec<PorkbunRecord>, PorkbunProviderError> {
        let list: RecordList = self
            .handle_request(&format!("dns/retrieve/{zone}"), &self.credentials())
            .await?;
        debug!("retrieved {} records for zone {zone}", list.records.len());
        Ok(list.records)
    }

    async fn create_record(
        &self,
        zone: &str,
        record: &PorkbunRecord,
    ) -> Result<(), PorkbunProviderError> {
        let req = RecordRequest {
            credentials: self.credentials(),
            record,
        };
        let created: CreatedRecord = self
            .handle_request(&format!("dns/create/{zone}"), &req)
            .await?;
        if let Some(id) = created.id {
            debug!("created record {id} in zone {zone}");
        }
        Ok(())
    }

    async fn edit_record(
        &self,
        zone: &str,
        id: &str,
        record: &PorkbunRecord,
    ) -> Result<(), PorkbunProviderError> {
        let req = RecordRequest {
            credentials: self.credentials(),
            record,
        };
        let _: Empty = self
            .handle_request(&format!("dns/edit/{zone}/{id}"), &req)
            .await?;
        Ok(())
    }

    async fn delete_record(&self, zone: &str, id: &str) -> Result<(), PorkbunProviderError> {
        let _: Empty = self
            .handle_request(&format!("dns/delete/{zone}/{id}"), &self.credentials())
            .await?;
        Ok(())
    }
}
