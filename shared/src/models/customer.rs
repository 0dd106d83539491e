//! Customer parameters
//!
//! Customer fields are free-form: the wizard UI sends whatever fields it
//! renders (reason, name, phone, date, tables, address, remark, days, ...)
//! and the server stores them as-is. Numeric fields are coerced at read
//! time, never on write, so malformed input degrades instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field holding the expected table count
pub const FIELD_TABLES: &str = "tables";
/// Field holding the event day count
pub const FIELD_DAYS: &str = "days";
/// Required for the CustomerInfo -> Ordering transition
pub const FIELD_NAME: &str = "name";
/// Required for the CustomerInfo -> Ordering transition
pub const FIELD_PHONE: &str = "phone";

/// Free-form customer parameters with read-time coercion
///
/// Writes replace a single field and never touch siblings. Stored values
/// keep whatever JSON type the client sent; [`CustomerParams::table_count`]
/// and [`CustomerParams::day_count`] coerce on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CustomerParams {
    fields: BTreeMap<String, Value>,
}

impl Default for CustomerParams {
    fn default() -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("reason".to_string(), Value::from("wedding"));
        fields.insert(FIELD_NAME.to_string(), Value::from(""));
        fields.insert(FIELD_PHONE.to_string(), Value::from(""));
        fields.insert("date".to_string(), Value::from(""));
        fields.insert(FIELD_TABLES.to_string(), Value::from(10));
        fields.insert("address".to_string(), Value::from(""));
        fields.insert("remark".to_string(), Value::from(""));
        fields.insert(FIELD_DAYS.to_string(), Value::from(1));
        Self { fields }
    }
}

impl CustomerParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a single field, leaving all sibling fields untouched
    pub fn set_field(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// Raw field access
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// All fields, in stable key order
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Expected table count: `max(0, floor(n))`, default 0
    ///
    /// Accepts JSON numbers and numeric strings; anything else (missing
    /// field, empty string, garbage) coerces to 0 so cost computation
    /// never fails on malformed input.
    pub fn table_count(&self) -> u32 {
        coerce_count(self.fields.get(FIELD_TABLES)).unwrap_or(0)
    }

    /// Event day count: `max(1, floor(n))`, default 1
    pub fn day_count(&self) -> u32 {
        coerce_count(self.fields.get(FIELD_DAYS)).unwrap_or(1).max(1)
    }

    /// Customer name, empty string when unset
    pub fn name(&self) -> &str {
        self.fields
            .get(FIELD_NAME)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Customer phone, empty string when unset
    pub fn phone(&self) -> &str {
        self.fields
            .get(FIELD_PHONE)
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}

/// Coerce a JSON value to a non-negative integer count
///
/// Numbers are floored; strings are trimmed and parsed as numbers first.
/// Negative, non-finite and unparsable values yield `None`.
fn coerce_count(value: Option<&Value>) -> Option<u32> {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64()?,
        Some(Value::String(s)) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    Some(n.floor().min(u32::MAX as f64) as u32)
}
