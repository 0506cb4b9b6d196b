use std::fmt;
use std::sync::Arc;

use super::item::TableRow;

/// How a row's identity is derived.
///
/// Identity drives selection and the `current` highlight. It never falls back
/// to the row's position: a row without a key is shown but cannot be
/// selected.
pub enum RowKey<T> {
    /// Read the named field.
    Field(String),
    /// Compute the key from the row.
    Func(Arc<dyn Fn(&T) -> String + Send + Sync>),
}

impl<T> RowKey<T> {
    pub fn field(name: impl Into<String>) -> Self {
        RowKey::Field(name.into())
    }

    pub fn func(f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        RowKey::Func(Arc::new(f))
    }
}

impl<T: TableRow> RowKey<T> {
    /// Key of `row`, if it has one.
    pub fn key_of(&self, row: &T) -> Option<String> {
        match self {
            RowKey::Field(name) => row.field(name),
            RowKey::Func(f) => Some(f(row)),
        }
    }
}

impl<T> Default for RowKey<T> {
    fn default() -> Self {
        RowKey::Field("id".to_string())
    }
}

impl<T> Clone for RowKey<T> {
    fn clone(&self) -> Self {
        match self {
            RowKey::Field(name) => RowKey::Field(name.clone()),
            RowKey::Func(f) => RowKey::Func(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for RowKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Field(name) => f.debug_tuple("Field").field(name).finish(),
            RowKey::Func(_) => f.write_str("Func(..)"),
        }
    }
}
