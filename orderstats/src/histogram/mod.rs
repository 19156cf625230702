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

//! Frequency histograms over one column.
//!
//! Building a model happens in two stages. [`RawHistogram`] is what the
//! builder produces: distinct values with their counts, in ascending order.
//! Its cardinality record stays at [`CARDINALITY_UNSET`] and is never summed
//! together with the entry counts. [`DerivedHistogram`] takes ownership of a
//! raw histogram and adds the total count, the probability mass of each entry
//! and the cumulative counts used for quantile lookups.
//!
//! # Usage
//!
//! ```rust
//! # use orderstats::histogram::RawHistogram;
//! let raw = RawHistogram::build(vec![1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0]);
//! assert_eq!(raw.cardinality(), -1);
//!
//! let derived = raw.derive();
//! assert_eq!(derived.cardinality(), 10);
//! assert_eq!(derived.cdf(), &[0, 1, 3, 4, 5, 8, 9, 10]);
//! ```

mod builder;
mod derived;

pub use self::builder::HistogramEntry;
pub use self::builder::RawHistogram;
pub use self::derived::DerivedHistogram;

use crate::column::Column;
use crate::error::Error;
use crate::quantile::QuantileConfig;
use crate::quantile::QuantileDefinition;
use crate::quantile::QuantileRanks;
use crate::value::Scalar;
use crate::value::ValueType;

/// Cardinality record of a histogram that has not been derived yet.
pub const CARDINALITY_UNSET: i64 = -1;
/// Probability stored in the cardinality row.
pub const PROBABILITY_UNSET: f64 = -1.0;

/// Histogram of one column, whatever its value type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnHistogram {
    /// Histogram of a numeric column.
    Numeric(RawHistogram<f64>),
    /// Histogram of a text column.
    Text(RawHistogram<String>),
    /// Histogram of a generic column.
    Generic(RawHistogram<Scalar>),
}

impl ColumnHistogram {
    /// Counts each distinct value of the column.
    pub fn build(column: &Column) -> Self {
        match column {
            Column::Numeric(v) => ColumnHistogram::Numeric(RawHistogram::build(v.iter().copied())),
            Column::Text(v) => ColumnHistogram::Text(RawHistogram::build(v.iter().cloned())),
            Column::Generic(v) => ColumnHistogram::Generic(RawHistogram::build(v.iter().cloned())),
        }
    }

    /// Returns the value type of the histogrammed column.
    pub fn value_type(&self) -> ValueType {
        match self {
            ColumnHistogram::Numeric(_) => ValueType::Numeric,
            ColumnHistogram::Text(_) => ValueType::Text,
            ColumnHistogram::Generic(_) => ValueType::Generic,
        }
    }

    /// Returns the number of distinct values.
    pub fn len(&self) -> usize {
        match self {
            ColumnHistogram::Numeric(h) => h.len(),
            ColumnHistogram::Text(h) => h.len(),
            ColumnHistogram::Generic(h) => h.len(),
        }
    }

    /// Returns true if no value was observed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cardinality record, which is always [`CARDINALITY_UNSET`].
    pub fn cardinality(&self) -> i64 {
        CARDINALITY_UNSET
    }

    /// Computes cardinality, probability mass and cumulative counts.
    pub fn derive(self) -> DerivedColumnHistogram {
        match self {
            ColumnHistogram::Numeric(h) => DerivedColumnHistogram::Numeric(h.derive()),
            ColumnHistogram::Text(h) => DerivedColumnHistogram::Text(h.derive()),
            ColumnHistogram::Generic(h) => DerivedColumnHistogram::Generic(h.derive()),
        }
    }
}

/// Derived histogram of one column, whatever its value type.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivedColumnHistogram {
    /// Derived histogram of a numeric column.
    Numeric(DerivedHistogram<f64>),
    /// Derived histogram of a text column.
    Text(DerivedHistogram<String>),
    /// Derived histogram of a generic column.
    Generic(DerivedHistogram<Scalar>),
}

impl DerivedColumnHistogram {
    /// Returns the value type of the histogrammed column.
    pub fn value_type(&self) -> ValueType {
        match self {
            DerivedColumnHistogram::Numeric(_) => ValueType::Numeric,
            DerivedColumnHistogram::Text(_) => ValueType::Text,
            DerivedColumnHistogram::Generic(_) => ValueType::Generic,
        }
    }

    /// Returns the total number of observations.
    pub fn cardinality(&self) -> u64 {
        match self {
            DerivedColumnHistogram::Numeric(h) => h.cardinality(),
            DerivedColumnHistogram::Text(h) => h.cardinality(),
            DerivedColumnHistogram::Generic(h) => h.cardinality(),
        }
    }

    /// Returns true if no value was observed.
    pub fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }

    /// Returns the probability mass of each row; row 0 is unset.
    pub fn probabilities(&self) -> &[f64] {
        match self {
            DerivedColumnHistogram::Numeric(h) => h.probabilities(),
            DerivedColumnHistogram::Text(h) => h.probabilities(),
            DerivedColumnHistogram::Generic(h) => h.probabilities(),
        }
    }

    /// Returns the cumulative counts of each row.
    pub fn cdf(&self) -> &[u64] {
        match self {
            DerivedColumnHistogram::Numeric(h) => h.cdf(),
            DerivedColumnHistogram::Text(h) => h.cdf(),
            DerivedColumnHistogram::Generic(h) => h.cdf(),
        }
    }

    /// Computes the `N + 1` quantile breakpoints as a column of the same type.
    ///
    /// Returns `Ok(None)` for an empty histogram.
    pub fn quantiles(&self, config: &QuantileConfig) -> Result<Option<Column>, Error> {
        let column = match self {
            DerivedColumnHistogram::Numeric(h) => h.quantiles(config)?.map(Column::Numeric),
            DerivedColumnHistogram::Text(h) => h.quantiles(config)?.map(Column::Text),
            DerivedColumnHistogram::Generic(h) => h.quantiles(config)?.map(Column::Generic),
        };
        Ok(column)
    }

    /// Locates the `N + 1` quantiles in the cumulative counts.
    ///
    /// Returns `Ok(None)` for an empty histogram.
    pub fn quantile_ranks(&self, config: &QuantileConfig) -> Result<Option<Vec<QuantileRanks>>, Error> {
        match self {
            DerivedColumnHistogram::Numeric(h) => h.quantile_ranks(config),
            DerivedColumnHistogram::Text(h) => h.quantile_ranks(config),
            DerivedColumnHistogram::Generic(h) => h.quantile_ranks(config),
        }
    }

    /// Returns true if some averaged-step quantile falls between two entries
    /// of a type without a midpoint, so the lower entry is used instead.
    pub fn uses_lower_fallback(&self, config: &QuantileConfig) -> Result<bool, Error> {
        if config.quantile_definition() != QuantileDefinition::AveragedSteps
            || self.value_type() == ValueType::Numeric
        {
            return Ok(false);
        }
        let ranks = self.quantile_ranks(config)?;
        Ok(ranks.is_some_and(|ranks| ranks.iter().any(QuantileRanks::is_split)))
    }
}
