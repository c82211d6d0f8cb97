//! Item Models
//!
//! Data structures matching the REST collection records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::date_format::iso_timestamp;

/// Item record as stored by the collection endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Server-assigned identifier
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub img_link: String,
    /// ISO-8601 creation timestamp, stamped by the client
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_added: String,
}

/// Text fields sent as `null` decode as empty strings
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The four user-editable fields of an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFields {
    pub title: String,
    pub description: String,
    pub author: String,
    pub img_link: String,
}

/// Creation payload (no id until the server assigns one)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    #[serde(flatten)]
    pub fields: ItemFields,
    pub date_added: String,
}

impl Item {
    /// Rebuild a full record from its id, edited fields and original timestamp
    pub fn from_fields(id: u32, fields: ItemFields, date_added: String) -> Self {
        let ItemFields {
            title,
            description,
            author,
            img_link,
        } = fields;
        Self {
            id,
            title,
            description,
            author,
            img_link,
            date_added,
        }
    }

    /// Copy out the editable fields
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            title: self.title.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            img_link: self.img_link.clone(),
        }
    }
}

impl NewItem {
    /// Stamp the fields with `now` as the creation time
    pub fn stamped(fields: ItemFields, now: DateTime<Utc>) -> Self {
        Self {
            fields,
            date_added: iso_timestamp(now),
        }
    }
}
