use super::Value;

/// An ordered sequence of values. Row length is expected to match the owning
/// table's schema length, but the engine does not enforce this (see
/// `Table::push_row`).
pub type Row = Vec<Value>;
