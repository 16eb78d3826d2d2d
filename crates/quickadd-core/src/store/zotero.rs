//! Zotero web library store
//!
//! API docs: https://www.zotero.org/support/dev/web_api/v3/write_requests
//! Items are created with `POST /{users|groups}/{id}/items`.

use super::{CitationStore, CreateItemsOutcome, ItemOutcome, StoreError};
use crate::config::{HttpConfig, ZoteroConfig};
use crate::http::{HttpClient, HttpError};
use async_trait::async_trait;
use quickadd_domain::{CitationRecord, ItemKind};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

const API_VERSION: &str = "3";

/// Zotero's format for `accessDate`
pub const ACCESS_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Deserialize)]
struct WriteResponse {
    #[serde(default)]
    success: HashMap<String, String>,
    #[serde(default)]
    unchanged: HashMap<String, String>,
    #[serde(default)]
    failed: HashMap<String, FailedItem>,
}

#[derive(Debug, Deserialize)]
struct FailedItem {
    code: Option<u16>,
    message: Option<String>,
}

pub struct ZoteroStore {
    client: HttpClient,
    items_url: String,
    api_key: String,
}

impl ZoteroStore {
    pub fn new(config: &ZoteroConfig, http: &HttpConfig) -> Result<Self, HttpError> {
        let items_url = format!(
            "{}/{}/{}/items",
            config.base_url.trim_end_matches('/'),
            config.library_type.path_segment(),
            config.library_id
        );

        Ok(Self {
            client: HttpClient::new(http)?,
            items_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Endpoint items are posted to
    pub fn items_url(&self) -> &str {
        &self.items_url
    }

    /// Parse a multi-object write response for `count` submitted items
    pub fn parse_write_response(json: &str, count: usize) -> Result<CreateItemsOutcome, StoreError> {
        let response: WriteResponse =
            serde_json::from_str(json).map_err(|e| StoreError::MalformedResponse {
                message: e.to_string(),
            })?;

        let items = (0..count)
            .map(|index| {
                let index = index.to_string();
                if let Some(key) = response.success.get(&index) {
                    ItemOutcome::Created { key: key.clone() }
                } else if let Some(key) = response.unchanged.get(&index) {
                    // Only `success` means a new item was written
                    ItemOutcome::Failed {
                        reason: format!("item {} unchanged", key),
                    }
                } else if let Some(failed) = response.failed.get(&index) {
                    ItemOutcome::Failed {
                        reason: match (&failed.code, &failed.message) {
                            (Some(code), Some(message)) => format!("{} ({})", message, code),
                            (None, Some(message)) => message.clone(),
                            (Some(code), None) => format!("error {}", code),
                            (None, None) => "unknown error".to_string(),
                        },
                    }
                } else {
                    ItemOutcome::Failed {
                        reason: "no result returned".to_string(),
                    }
                }
            })
            .collect();

        Ok(CreateItemsOutcome { items })
    }
}

#[async_trait]
impl CitationStore for ZoteroStore {
    async fn create_items(
        &self,
        records: Vec<CitationRecord>,
    ) -> Result<CreateItemsOutcome, StoreError> {
        let items: Vec<Value> = records.iter().map(to_zotero_item).collect();
        let headers = [
            ("Zotero-API-Key", self.api_key.as_str()),
            ("Zotero-API-Version", API_VERSION),
        ];

        tracing::debug!("Posting {} item(s) to {}", items.len(), self.items_url);
        let response = self
            .client
            .post_json(&self.items_url, &headers, &Value::Array(items))
            .await?;

        if !response.is_success() {
            return Err(StoreError::Rejected {
                status: response.status,
                message: response.body.trim().to_string(),
            });
        }

        Self::parse_write_response(&response.body, records.len())
    }
}

/// Map a citation record into a Zotero item object
pub fn to_zotero_item(record: &CitationRecord) -> Value {
    let mut item = Map::new();

    let (item_type, venue_field) = match record.kind() {
        ItemKind::Book => ("book", "publisher"),
        ItemKind::JournalArticle => ("journalArticle", "publicationTitle"),
    };
    item.insert("itemType".to_string(), json!(item_type));
    item.insert("title".to_string(), json!(record.title()));

    let optional = [
        ("shortTitle", record.short_title()),
        (venue_field, record.publication_venue()),
        ("volume", record.volume()),
        ("pages", record.pages()),
        ("date", record.date()),
        ("url", record.url()),
        ("ISBN", record.isbn()),
        ("DOI", record.doi()),
        ("ISSN", record.issn()),
        ("place", record.place()),
    ];
    for (field, value) in optional {
        if let Some(value) = value {
            item.insert(field.to_string(), json!(value));
        }
    }

    if let Some(accessed) = record.accessed_at() {
        item.insert(
            "accessDate".to_string(),
            json!(accessed.format(ACCESS_DATE_FORMAT).to_string()),
        );
    }

    let creators: Vec<Value> = record
        .creators()
        .iter()
        .map(|creator| {
            json!({
                "creatorType": creator.role.as_str(),
                "firstName": creator.given_name,
                "lastName": creator.family_name,
            })
        })
        .collect();
    item.insert("creators".to_string(), Value::Array(creators));

    Value::Object(item)
}
