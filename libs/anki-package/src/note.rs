//! Notes: one set of field values rendered through every template of a model.

use crate::error::{PackageError, Result};
use crate::hash::{field_checksum, guid_for, strip_html};
use crate::model::Model;

/// A note bound to a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    model_id: i64,
    fields: Vec<String>,
    guid: String,
    card_ordinals: Vec<usize>,
}

impl Note {
    /// Create a note, checking the field count against the model.
    pub fn new(model: &Model, fields: Vec<String>) -> Result<Self> {
        if fields.len() != model.fields.len() {
            return Err(PackageError::FieldCount {
                model: model.name.clone(),
                expected: model.fields.len(),
                actual: fields.len(),
            });
        }

        let card_ordinals = model
            .required_fields()
            .iter()
            .enumerate()
            .filter(|(_, required)| required.iter().any(|&ord| !is_blank(&fields[ord])))
            .map(|(ord, _)| ord)
            .collect();

        Ok(Self {
            model_id: model.id,
            guid: guid_for(&fields),
            fields,
            card_ordinals,
        })
    }

    pub fn model_id(&self) -> i64 {
        self.model_id
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    /// First field; Anki sorts and detects duplicates on it.
    pub fn sort_field(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or("")
    }

    pub fn checksum(&self) -> i64 {
        field_checksum(self.sort_field())
    }

    /// Template ordinals that produce a card for this note.
    pub fn card_ordinals(&self) -> &[usize] {
        &self.card_ordinals
    }
}

fn is_blank(value: &str) -> bool {
    strip_html(value).is_empty()
}
