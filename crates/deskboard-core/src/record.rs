//! Record and collection model

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A unique identifier for a record, assigned by the remote store on insert.
///
/// Opaque to clients: unique within a collection and stable for the record's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidInput(
                "record id must not be empty".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A scalar field value.
///
/// Records are flat mappings of field names to scalars; no nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Total order across scalar values, used for `order_by` sorting.
    ///
    /// Values of the same kind compare naturally; mixed numeric kinds compare
    /// numerically; otherwise kinds compare by a fixed rank.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Integer(a), Self::Float(b)) => {
                (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Self::Float(a), Self::Integer(b)) => {
                a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
            }
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Integer(_) | Self::Float(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Flat mapping of field names to scalar values
pub type Fields = BTreeMap<String, FieldValue>;

/// One entity instance in a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Remote-assigned identifier
    pub id: RecordId,
    /// Field values
    pub fields: Fields,
    /// Store-assigned monotonic creation marker (Unix ms), the default
    /// ordering key
    pub created_at: i64,
}

impl Record {
    /// Text value of a named field, empty string when absent or non-text.
    #[must_use]
    pub fn text(&self, field: &str) -> &str {
        self.fields
            .get(field)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
    }

    /// Boolean value of a named field, `false` when absent or non-boolean.
    #[must_use]
    pub fn flag(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false)
    }
}

/// The ordered set of records backing one screen.
///
/// Invariant: identifiers are unique; duplicate insertion is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }

    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn get_mut(&mut self, id: &RecordId) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| &record.id == id)
    }

    /// Append a record, rejecting duplicate identifiers.
    pub fn push(&mut self, record: Record) -> Result<()> {
        if self.contains(&record.id) {
            return Err(Error::InvalidInput(format!(
                "duplicate record id: {}",
                record.id
            )));
        }
        self.records.push(record);
        Ok(())
    }

    /// Insert a record at a position, rejecting duplicate identifiers.
    ///
    /// Used to restore a pre-image at its original position on rollback.
    pub fn insert_at(&mut self, position: usize, record: Record) -> Result<()> {
        if self.contains(&record.id) {
            return Err(Error::InvalidInput(format!(
                "duplicate record id: {}",
                record.id
            )));
        }
        let position = position.min(self.records.len());
        self.records.insert(position, record);
        Ok(())
    }

    /// Remove a record by id, returning its position and value as a pre-image.
    pub fn remove(&mut self, id: &RecordId) -> Option<(usize, Record)> {
        let position = self.position(id)?;
        Some((position, self.records.remove(position)))
    }

    /// Replace the entire contents with freshly fetched records.
    pub fn replace_all(&mut self, records: Vec<Record>) -> Result<()> {
        let mut replacement = Self::new();
        for record in records {
            replacement.push(record)?;
        }
        *self = replacement;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
