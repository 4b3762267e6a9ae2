use chrono::{NaiveDateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of cipher action a history record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Encrypt,
    Decrypt,
    Inverse,
    Crack,
    BruteForce,
}

impl Operation {
    /// Identifier stored in the `operation` column
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
            Operation::Inverse => "inverse",
            Operation::Crack => "crack",
            Operation::BruteForce => "brute-force",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row of the `encryption_history` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct HistoryRecord {
    pub id: i64,
    pub user_id: i64,
    pub cipher_type: String,
    pub plaintext: String,
    pub encrypted_text: String,
    /// Stored as text and returned verbatim
    pub operation: String,
    pub key_a: Option<i64>,
    pub key_b: Option<i64>,
    /// Assigned by the database at insert time (UTC)
    pub created_at: NaiveDateTime,
}

/// Fields supplied by the caller when recording an operation.
/// `id` and `created_at` are assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewHistoryRecord {
    pub user_id: i64,
    pub cipher_type: String,
    pub plaintext: String,
    pub encrypted_text: String,
    pub operation: Operation,
    #[serde(default)]
    pub key_a: Option<i64>,
    #[serde(default)]
    pub key_b: Option<i64>,
}

/// Client-facing shape of a history record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: String,
    #[serde(rename = "cipherType")]
    pub cipher_type: String,
    pub input: String,
    pub output: String,
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl From<HistoryRecord> for HistoryEntry {
    fn from(record: HistoryRecord) -> Self {
        Self {
            id: record.id.to_string(),
            timestamp: format_timestamp(record.created_at),
            cipher_type: capitalize_first(&record.cipher_type),
            input: record.plaintext,
            output: record.encrypted_text,
            operation: record.operation,
            key: format_key(record.key_a, record.key_b),
        }
    }
}

/// Render a stored UTC timestamp as `YYYY-MM-DDTHH:MM:SS.sssZ`
pub fn format_timestamp(created_at: NaiveDateTime) -> String {
    created_at
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format the key pair as `"<key_a>, <key_b>"`; `None` when `key_a` is absent
pub fn format_key(key_a: Option<i64>, key_b: Option<i64>) -> Option<String> {
    let key_a = key_a?;
    let key_b = key_b.map(|b| b.to_string()).unwrap_or_default();
    Some(format!("{}, {}", key_a, key_b))
}
