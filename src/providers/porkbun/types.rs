use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "SUCCESS";

/// A DNS record as the Porkbun API lists it, or as we send it back.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PorkbunRecord {
    #[serde(default, skip_serializing)]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prio: Option<String>,
    #[serde(default, skip_serializing)]
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct Credentials<'a> {
    pub apikey: &'a str,
    pub secretapikey: &'a str,
}

#[derive(Serialize)]
pub struct RecordRequest<'a> {
    #[serde(flatten)]
    pub credentials: Credentials<'a>,
    #[serde(flatten)]
    pub record: &'a PorkbunRecord,
}

/// Every reply carries a `status`; failures add a `message`.
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

#[derive(Deserialize, Debug, Default)]
pub struct RecordList {
    #[serde(default)]
    pub records: Vec<PorkbunRecord>,
}

#[derive(Deserialize, Debug, Default)]
pub struct CreatedRecord {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Empty {}

#[derive(Deserialize, Debug)]
pub struct PorkbunError {
    #[serde(default)]
    pub message: String,
}
