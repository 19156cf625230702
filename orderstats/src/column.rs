// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Typed columns and the accessor the pipeline reads them through.

use crate::value::Scalar;
use crate::value::ValueType;

/// A homogeneously typed column of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// 64-bit floating point values.
    Numeric(Vec<f64>),
    /// UTF-8 strings.
    Text(Vec<String>),
    /// Tagged scalars.
    Generic(Vec<Scalar>),
}

impl Column {
    /// Returns the value type tag of this column.
    pub fn value_type(&self) -> ValueType {
        match self {
            Column::Numeric(_) => ValueType::Numeric,
            Column::Text(_) => ValueType::Text,
            Column::Generic(_) => ValueType::Generic,
        }
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Text(v) => v.len(),
            Column::Generic(v) => v.len(),
        }
    }

    /// Returns true if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Numeric(values)
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Text(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::Text(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<Scalar>> for Column {
    fn from(values: Vec<Scalar>) -> Self {
        Column::Generic(values)
    }
}

/// Read access to named columns.
///
/// A missing column is not an error at this level; callers decide how to
/// report it.
pub trait ColumnSource {
    /// Returns the column with the given name, if present.
    fn column(&self, name: &str) -> Option<&Column>;
}

/// An ordered collection of named columns.
///
/// # Examples
///
/// ```rust
/// # use orderstats::Column;
/// # use orderstats::ColumnSource;
/// # use orderstats::Table;
/// let table = Table::new()
///     .with_column("x", vec![1.0, 2.0])
///     .with_column("name", vec!["a", "b"]);
/// assert_eq!(table.column_names().collect::<Vec<_>>(), ["x", "name"]);
/// assert!(matches!(table.column("x"), Some(Column::Numeric(_))));
/// assert!(table.column("y").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column and returns the table.
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Self {
        self.push_column(name, column);
        self
    }

    /// Adds a column, replacing any column of the same name.
    pub fn push_column(&mut self, name: impl Into<String>, column: impl Into<Column>) {
        let name = name.into();
        let column = column.into();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((name, column)),
        }
    }

    /// Returns the column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

impl ColumnSource for Table {
    fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, column)| column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_column_replaces() {
        let mut table = Table::new().with_column("x", vec![1.0]);
        table.push_column("x", vec!["a", "b"]);
        assert_eq!(table.num_columns(), 1);
        let column = table.column("x").unwrap();
        assert_eq!(column.value_type(), ValueType::Text);
        assert_eq!(column.len(), 2);
    }
}
