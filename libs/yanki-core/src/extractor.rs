//! Turning the loaded mapping into entries.

use serde_yaml::mapping::Iter;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::types::{Entry, GroupKey};

const MEANING: &str = "meaning";
const LANGUAGE: &str = "language";
const TYPE: &str = "type";

/// Lazily extract one entry per top-level key, in document order.
pub fn extract(mapping: &Mapping) -> Entries<'_> {
    Entries {
        inner: mapping.iter(),
    }
}

/// Extract every entry, stopping at the first invalid one.
pub fn extract_all(mapping: &Mapping) -> Result<Vec<Entry>> {
    extract(mapping).collect()
}

/// Iterator returned by [`extract`].
pub struct Entries<'a> {
    inner: Iter<'a>,
}

impl Iterator for Entries<'_> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.inner.next()?;
        Some(build_entry(key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

fn build_entry(key: &Value, value: &Value) -> Result<Entry> {
    let name = scalar_text(key).ok_or_else(|| Error::InvalidField {
        entry: format!("{:?}", key),
        field: "name",
        reason: "entry names must be scalars",
    })?;

    let Value::Mapping(fields) = untagged(value) else {
        return Err(Error::InvalidField {
            entry: name,
            field: "value",
            reason: "expected a mapping with a meaning",
        });
    };

    let meaning = required(&name, fields, MEANING)?;

    let group = match optional(&name, fields, TYPE)? {
        Some(category) if !category.is_empty() => GroupKey::Category(category),
        _ => GroupKey::Language(required(&name, fields, LANGUAGE)?),
    };

    tracing::trace!(entry = %name, deck = group.name(), "extracted entry");
    Ok(Entry {
        name,
        group,
        meaning,
    })
}

fn required(entry: &str, fields: &Mapping, field: &'static str) -> Result<String> {
    optional(entry, fields, field)?.ok_or_else(|| Error::MissingField {
        entry: entry.to_string(),
        field,
    })
}

/// Field value as text; null and absent fields are `None`.
fn optional(entry: &str, fields: &Mapping, field: &'static str) -> Result<Option<String>> {
    match fields.get(field).map(untagged) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => scalar_text(value).map(Some).ok_or_else(|| Error::InvalidField {
            entry: entry.to_string(),
            field,
            reason: "expected text",
        }),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match untagged(value) {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}
