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

use std::cmp::Ordering;

use super::MAX_NUMBER_OF_INTERVALS;
use super::MIN_NUMBER_OF_INTERVALS;
use super::config::QuantileConfig;
use super::config::QuantileDefinition;
use super::label::quantile_labels;
use super::serialization::ORDER_STATISTICS_FAMILY_ID;
use super::serialization::PREAMBLE_SIZE_BYTES;
use super::serialization::SERIAL_VERSION;
use crate::codec::ModelBytes;
use crate::codec::ModelSlice;
use crate::column::Column;
use crate::column::ColumnSource;
use crate::error::Error;
use crate::value::ItemCodec;
use crate::value::OrderedItem;
use crate::value::ValueType;

/// Name of the quantile table in a derived model.
pub const QUANTILES_TABLE_NAME: &str = "Quantiles";

/// The `N + 1` quantile breakpoints of each variable.
///
/// Row `k` holds the `k/N` quantile and carries the label
/// [`quantile_label(k, N)`](super::quantile_label). Every column has exactly
/// `N + 1` rows in non-decreasing order.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileTable {
    number_of_intervals: u32,
    quantile_definition: QuantileDefinition,
    labels: Vec<String>,
    columns: Vec<(String, Column)>,
}

impl QuantileTable {
    /// Creates an empty table for the given configuration.
    pub fn new(config: &QuantileConfig) -> Self {
        let number_of_intervals = config.number_of_intervals();
        Self {
            number_of_intervals,
            quantile_definition: config.quantile_definition(),
            labels: quantile_labels(number_of_intervals),
            columns: Vec::new(),
        }
    }

    /// Returns the name of the table, [`QUANTILES_TABLE_NAME`].
    pub fn name(&self) -> &'static str {
        QUANTILES_TABLE_NAME
    }

    /// Returns the number of intervals `N`.
    pub fn number_of_intervals(&self) -> u32 {
        self.number_of_intervals
    }

    /// Returns the quantile definition the breakpoints were derived with.
    pub fn quantile_definition(&self) -> QuantileDefinition {
        self.quantile_definition
    }

    /// Returns the row labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the number of rows, `N + 1`.
    pub fn num_rows(&self) -> usize {
        self.number_of_intervals as usize + 1
    }

    /// Returns the number of variables.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no variable has breakpoints.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the variable names in insertion order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Adds the breakpoints of a variable and returns the table.
    ///
    /// See [`QuantileTable::push_column`].
    pub fn with_column(
        mut self,
        variable: impl Into<String>,
        breakpoints: impl Into<Column>,
    ) -> Result<Self, Error> {
        self.push_column(variable, breakpoints)?;
        Ok(self)
    }

    /// Adds the breakpoints of a variable, replacing any previous ones.
    ///
    /// The column must have `N + 1` rows in non-decreasing order; otherwise an
    /// [`InconsistentModel`](crate::error::ErrorKind::InconsistentModel) error
    /// is returned and the table is unchanged.
    pub fn push_column(
        &mut self,
        variable: impl Into<String>,
        breakpoints: impl Into<Column>,
    ) -> Result<(), Error> {
        let variable = variable.into();
        let breakpoints = breakpoints.into();
        check_breakpoints(&breakpoints, self.num_rows())
            .map_err(|msg| Error::inconsistent(msg).with_context("variable", &variable))?;

        match self.columns.iter_mut().find(|(n, _)| *n == variable) {
            Some((_, existing)) => *existing = breakpoints,
            None => self.columns.push((variable, breakpoints)),
        }
        Ok(())
    }

    /// Serializes the table to bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = ModelBytes::with_capacity(PREAMBLE_SIZE_BYTES);
        bytes.write_u8(SERIAL_VERSION);
        bytes.write_u8(ORDER_STATISTICS_FAMILY_ID);
        bytes.write_u8(self.quantile_definition.code());
        bytes.write_u8(0);
        bytes.write_u32_le(self.number_of_intervals);
        bytes.write_u32_le(self.columns.len() as u32);

        for (name, column) in &self.columns {
            bytes.write_str(name);
            bytes.write_u8(column.value_type().tag());
            match column {
                Column::Numeric(items) => write_items(items, &mut bytes),
                Column::Text(items) => write_items(items, &mut bytes),
                Column::Generic(items) => write_items(items, &mut bytes),
            }
        }
        bytes.into_bytes()
    }

    /// Deserializes a table from bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedData`](crate::error::ErrorKind::MalformedData)
    /// error if the bytes are truncated or carry trailing data, if the family,
    /// version, definition or value type is unknown, or if a column is not a
    /// valid set of breakpoints.
    pub fn deserialize(bytes: &[u8]) -> Result<QuantileTable, Error> {
        fn make_error(tag: &'static str) -> impl FnOnce(std::io::Error) -> Error {
            move |_| Error::insufficient_data(tag)
        }

        let mut cursor = ModelSlice::new(bytes);

        let serial_version = cursor.read_u8().map_err(make_error("serial_version"))?;
        let family_id = cursor.read_u8().map_err(make_error("family_id"))?;
        let definition_code = cursor.read_u8().map_err(make_error("quantile_definition"))?;
        let _reserved = cursor.read_u8().map_err(make_error("reserved"))?;
        let number_of_intervals = cursor
            .read_u32_le()
            .map_err(make_error("number_of_intervals"))?;
        let num_columns = cursor.read_u32_le().map_err(make_error("num_columns"))?;

        if family_id != ORDER_STATISTICS_FAMILY_ID {
            return Err(Error::malformed(format!(
                "invalid family: expected {ORDER_STATISTICS_FAMILY_ID}, got {family_id}"
            )));
        }
        if serial_version != SERIAL_VERSION {
            return Err(Error::malformed(format!(
                "invalid serial version: expected {SERIAL_VERSION}, got {serial_version}"
            )));
        }
        let quantile_definition = QuantileDefinition::from_code(definition_code as i64)
            .ok_or_else(|| {
                Error::malformed(format!("unknown quantile definition code: {definition_code}"))
            })?;
        if !(MIN_NUMBER_OF_INTERVALS..=MAX_NUMBER_OF_INTERVALS).contains(&number_of_intervals) {
            return Err(Error::malformed(format!(
                "number of intervals out of range: {number_of_intervals}"
            )));
        }

        let config = QuantileConfig::new(number_of_intervals, quantile_definition);
        let mut table = QuantileTable::new(&config);
        let num_rows = table.num_rows();

        for _ in 0..num_columns {
            let name = cursor
                .read_string()
                .map_err(|err| Error::insufficient_data("variable").set_source(err))?;
            let tag = cursor.read_u8().map_err(make_error("value_type"))?;
            let column = match ValueType::from_tag(tag)? {
                ValueType::Numeric => Column::Numeric(read_items(&mut cursor, num_rows)?),
                ValueType::Text => Column::Text(read_items(&mut cursor, num_rows)?),
                ValueType::Generic => Column::Generic(read_items(&mut cursor, num_rows)?),
            };

            if table.column(&name).is_some() {
                return Err(Error::malformed(format!("duplicate variable: {name}")));
            }
            check_breakpoints(&column, num_rows)
                .map_err(|msg| Error::malformed(msg).with_context("variable", &name))?;
            table.columns.push((name, column));
        }

        if cursor.remaining() > 0 {
            return Err(Error::malformed(format!(
                "{} trailing bytes after the last column",
                cursor.remaining()
            )));
        }
        Ok(table)
    }
}

impl ColumnSource for QuantileTable {
    fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, column)| column)
    }
}

fn check_breakpoints(column: &Column, num_rows: usize) -> Result<(), String> {
    if column.len() != num_rows {
        return Err(format!(
            "expected {num_rows} breakpoints, got {}",
            column.len()
        ));
    }
    let ordered = match column {
        Column::Numeric(items) => is_non_decreasing(items),
        Column::Text(items) => is_non_decreasing(items),
        Column::Generic(items) => is_non_decreasing(items),
    };
    if !ordered {
        return Err("breakpoints must be non-decreasing".to_string());
    }
    Ok(())
}

fn is_non_decreasing<T: OrderedItem>(items: &[T]) -> bool {
    items
        .windows(2)
        .all(|w| T::cmp(&w[0], &w[1]) != Ordering::Greater)
}

fn write_items<T: ItemCodec>(items: &[T], bytes: &mut ModelBytes) {
    for item in items {
        T::serialize(item, bytes);
    }
}

fn read_items<T: ItemCodec>(input: &mut ModelSlice<'_>, count: usize) -> Result<Vec<T>, Error> {
    let mut items = Vec::with_capacity(count.min(input.remaining()));
    for _ in 0..count {
        items.push(T::deserialize(input)?);
    }
    Ok(items)
}
