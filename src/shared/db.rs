// src/shared/db.rs
use sea_orm::{DbErr, SqlErr};

/// True when the store rejected a write because of a unique index
/// (duplicate email, second submission for the same assignment).
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// True when a delete was blocked by a row that still references the target.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("23503") || msg.contains("violates foreign key constraint")
}

/// `%term%` for ILIKE with the term's own `\`, `%` and `_` matched literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Decodes a JSONB column holding a list of opaque strings.
pub fn string_list(json: &serde_json::Value) -> Result<Vec<String>, serde_json::Error> {
    if json.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(json.clone())
}
