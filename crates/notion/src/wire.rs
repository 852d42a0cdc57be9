//! Typed subset of the Notion database-query response.
//!
//! Only the property kinds the worker reads are modeled; anything else
//! deserializes to [`Property::Other`] and is ignored.

use std::collections::HashMap;

use engine::StoreError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    pub results: Vec<Page>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, Property>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum Property {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Select { select: Option<SelectValue> },
    Number { number: Option<f64> },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RichText {
    pub plain_text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SelectValue {
    pub name: String,
}

impl Page {
    fn property(&self, name: &str) -> Result<&Property, StoreError> {
        self.properties
            .get(name)
            .ok_or_else(|| missing(name, &self.id))
    }

    pub(crate) fn title(&self, name: &str) -> Result<String, StoreError> {
        match self.property(name)? {
            Property::Title { title } if !title.is_empty() => Ok(title[0].plain_text.clone()),
            _ => Err(missing(name, &self.id)),
        }
    }

    pub(crate) fn rich_text(&self, name: &str) -> Result<String, StoreError> {
        match self.property(name)? {
            Property::RichText { rich_text } if !rich_text.is_empty() => {
                Ok(rich_text[0].plain_text.clone())
            }
            _ => Err(missing(name, &self.id)),
        }
    }

    pub(crate) fn select(&self, name: &str) -> Result<String, StoreError> {
        match self.property(name)? {
            Property::Select {
                select: Some(value),
            } if !value.name.is_empty() => Ok(value.name.clone()),
            _ => Err(missing(name, &self.id)),
        }
    }

    /// An empty number cell is zero, not an error: a line item paid in the
    /// other currency leaves this column blank.
    pub(crate) fn number(&self, name: &str) -> Result<f64, StoreError> {
        match self.property(name)? {
            Property::Number { number } => Ok(number.unwrap_or(0.0)),
            _ => Err(missing(name, &self.id)),
        }
    }
}

fn missing(name: &str, page: &str) -> StoreError {
    StoreError::MalformedRecord(format!("missing {name} on page {page}"))
}
