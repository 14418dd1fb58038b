//! Dict and list rendering for CLI output

use super::ColorTheme;
use crate::domain::volume::VolumeSpec;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};
use serde_json::Value;
use std::collections::HashMap;

/// Field projection: which record fields are shown, and in which order
pub type KeyList<'a> = &'a [&'a str];

/// Custom renderer for one field value
pub type Formatter = fn(&Value) -> String;

/// Per-key renderers; keys without an entry use [`default_format`]
#[derive(Clone, Default)]
pub struct FormatterList {
    formatters: HashMap<String, Formatter>,
}

impl FormatterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, formatter: Formatter) -> Self {
        self.formatters.insert(key.into(), formatter);
        self
    }

    pub fn format(&self, key: &str, value: &Value) -> String {
        match self.formatters.get(key) {
            Some(formatter) => formatter(value),
            None => default_format(value),
        }
    }
}

/// Stringify a field value: strings verbatim, empty maps as nothing, other
/// compound values as compact JSON.
pub fn default_format(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) if map.is_empty() => String::new(),
        Value::Array(items) if items.is_empty() => String::new(),
        other => other.to_string(),
    }
}

/// A record whose fields can be looked up by display key
pub trait Record {
    fn field(&self, key: &str) -> Option<Value>;
}

impl Record for VolumeSpec {
    fn field(&self, key: &str) -> Option<Value> {
        let value = match key {
            "Id" => Value::from(self.id.as_str()),
            "CreatedAt" => Value::from(self.created_at.as_str()),
            "UpdatedAt" => Value::from(self.updated_at.as_str()),
            "TenantId" => Value::from(self.tenant_id.as_str()),
            "UserId" => Value::from(self.user_id.as_str()),
            "Name" => Value::from(self.name.as_str()),
            "Description" => Value::from(self.description.as_str()),
            "Size" => Value::from(self.size),
            "AvailabilityZone" => Value::from(self.availability_zone.as_str()),
            "Status" => Value::from(self.status.as_str()),
            "PoolId" => Value::from(self.pool_id.as_str()),
            "ProfileId" => Value::from(self.profile_id.as_str()),
            "SnapshotId" => Value::from(self.snapshot_id.as_str()),
            "Metadata" => Value::Object(
                self.metadata
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
                    .collect(),
            ),
            _ => return None,
        };
        Some(value)
    }
}

/// Project `keys` onto a record. Keys the record does not know are skipped.
pub fn project<R: Record>(
    record: &R,
    keys: KeyList<'_>,
    formatters: &FormatterList,
) -> Vec<(String, String)> {
    keys.iter()
        .filter_map(|key| {
            record
                .field(key)
                .map(|value| (key.to_string(), formatters.format(key, &value)))
        })
        .collect()
}

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    /// Render a single record as `Property | Value` rows
    pub fn render_dict<R: Record>(
        &self,
        record: &R,
        keys: KeyList<'_>,
        formatters: &FormatterList,
    ) -> String {
        let mut table = Self::new_table();
        table.set_header(vec![
            Cell::new("Property").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Left),
        ]);

        for (key, value) in project(record, keys, formatters) {
            let value_cell = self.value_cell(&key, value);
            table.add_row(vec![Cell::new(key), value_cell]);
        }

        table.to_string()
    }

    /// Render records as a table with one column per key
    pub fn render_list<R: Record>(
        &self,
        records: &[R],
        keys: KeyList<'_>,
        formatters: &FormatterList,
    ) -> String {
        let mut table = Self::new_table();
        table.set_header(
            keys.iter()
                .map(|key| Cell::new(key).set_alignment(CellAlignment::Left))
                .collect::<Vec<_>>(),
        );

        for record in records {
            let row: Vec<Cell> = keys
                .iter()
                .map(|key| {
                    let value = record
                        .field(key)
                        .map(|v| formatters.format(key, &v))
                        .unwrap_or_default();
                    self.value_cell(key, value)
                })
                .collect();
            table.add_row(row);
        }

        table.to_string()
    }

    fn new_table() -> Table {
        let mut table = Table::new();
        // Wrapping would split volume IDs across lines
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Disabled);
        table
    }

    fn value_cell(&self, key: &str, value: String) -> Cell {
        let color = if key == "Status" {
            self.theme.get_status_color(&value)
        } else {
            None
        };

        let cell = Cell::new(value);
        match color {
            Some(color) => cell.fg(color),
            None => cell,
        }
    }
}
