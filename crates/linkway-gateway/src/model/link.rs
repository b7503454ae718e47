use jiff::Timestamp;
use linkway_core::LinkRecord;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

const QR_CODE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub original_url: String,
    #[serde(default)]
    pub custom_alias: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: String,
    pub short_code: String,
    pub short_url: String,
    /// Image URL of a QR code encoding `short_url`.
    pub qr_code_url: String,
    pub original_url: String,
    pub created_at: Timestamp,
    pub clicks: u64,
}

impl LinkResponse {
    pub fn from_record(record: &LinkRecord, base_url: &str) -> Self {
        let short_url = record.short_code.to_url(base_url);
        Self {
            id: record.id.to_string(),
            short_code: record.short_code.to_string(),
            qr_code_url: qr_code_url(&short_url),
            short_url,
            original_url: record.destination_url.clone(),
            created_at: record.created_at,
            clicks: record.click_count,
        }
    }
}

fn qr_code_url(short_url: &str) -> String {
    let data: String = form_urlencoded::byte_serialize(short_url.as_bytes()).collect();
    format!("{QR_CODE_ENDPOINT}?data={data}&size=150x150&qzone=1")
}

/// Links newest first.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub registry_loaded: bool,
    pub links: Vec<LinkResponse>,
}
