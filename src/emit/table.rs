//! Default single-column table encoding.
//!
//! Field names are resolved to 32-bit hashes through a [`FieldHashTable`].
//! A table is UTF-8 text: a header line `<field>:<hash>` with the hash as
//! eight lowercase hex digits, followed by one value per line. Every line
//! ends with `\n`.

use super::traits::TableSerializer;
use crate::core::ResourceKind;
use crate::errors::{Error, Result};
use std::collections::HashMap;

/// Hash of a table field name: `h = h * 31 + byte`, wrapping on `u32`.
pub fn field_hash(name: &str) -> u32 {
    name.bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)))
}

/// Lookup of known field names and their hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHashTable {
    entries: HashMap<String, u32>,
}

impl Default for FieldHashTable {
    /// Table holding the column names of both resource kinds.
    fn default() -> Self {
        ResourceKind::ALL
            .into_iter()
            .fold(Self::empty(), |table, kind| table.with_field(kind.field_name()))
    }
}

impl FieldHashTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `name` with its computed hash.
    pub fn with_field(mut self, name: &str) -> Self {
        self.entries.insert(name.to_string(), field_hash(name));
        self
    }

    pub fn resolve(&self, name: &str) -> Option<u32> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Text serializer for single-column tables.
#[derive(Debug, Clone, Default)]
pub struct ColumnTableSerializer {
    fields: FieldHashTable,
}

impl ColumnTableSerializer {
    pub fn new(fields: FieldHashTable) -> Self {
        Self { fields }
    }
}

impl TableSerializer for ColumnTableSerializer {
    fn encode(&self, field: &str, values: &[&str]) -> Result<Vec<u8>> {
        let hash = self
            .fields
            .resolve(field)
            .ok_or_else(|| Error::UnknownField(field.to_string()))?;

        let mut out = format!("{field}:{hash:08x}\n");
        for value in values {
            if value.contains(['\n', '\r']) {
                return Err(Error::Serialize {
                    table: field.to_string(),
                    message: format!("value {value:?} contains a line break"),
                });
            }
            out.push_str(value);
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_of_empty_name_is_zero() {
        assert_eq!(field_hash(""), 0);
    }

    #[test]
    fn hash_accumulates_by_31() {
        assert_eq!(field_hash("a"), 97);
        assert_eq!(field_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn hash_wraps_for_long_names() {
        let name = "ResourceNameResourceNameResourceName";
        let expected = name
            .bytes()
            .fold(0u64, |h, b| (h * 31 + u64::from(b)) % (1u64 << 32));
        assert_eq!(u64::from(field_hash(name)), expected);
    }

    #[test]
    fn default_table_knows_both_columns() {
        let table = FieldHashTable::default();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("ResourceName"), Some(field_hash("ResourceName")));
        assert_eq!(table.resolve("SoundName"), Some(field_hash("SoundName")));
        assert_eq!(table.resolve("Other"), None);
    }

    #[test]
    fn encodes_header_and_rows_in_order() {
        let serializer = ColumnTableSerializer::default();
        let bytes = serializer.encode("SoundName", &["SE_B", "SE_A"]).unwrap();
        let expected = format!("SoundName:{:08x}\nSE_B\nSE_A\n", field_hash("SoundName"));
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }

    #[test]
    fn empty_table_is_header_only() {
        let serializer = ColumnTableSerializer::default();
        let bytes = serializer.encode("ResourceName", &[]).unwrap();
        assert_eq!(bytes.iter().filter(|&&b| b == b'\n').count(), 1);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let serializer = ColumnTableSerializer::new(FieldHashTable::empty());
        assert!(matches!(
            serializer.encode("ResourceName", &["a"]),
            Err(Error::UnknownField(name)) if name == "ResourceName"
        ));
    }

    #[test]
    fn line_breaks_in_values_are_rejected() {
        let serializer = ColumnTableSerializer::default();
        assert!(matches!(
            serializer.encode("ResourceName", &["a\rb"]),
            Err(Error::Serialize { .. })
        ));
    }
}
