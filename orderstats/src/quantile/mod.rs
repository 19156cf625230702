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

//! Quantile derivation.
//!
//! Given a derived histogram of `n` observations and a number of intervals
//! `N`, the deriver returns `N + 1` breakpoints: the minimum, the `k/N`
//! quantiles for `k = 1..N`, and the maximum. For each interior `k` the
//! quantile index is `np = k * n / N`, and [`QuantileDefinition`] decides how
//! that real index maps onto ranks:
//!
//! * [`QuantileDefinition::NearestRank`] reads the value at `round(np)`.
//! * [`QuantileDefinition::AveragedSteps`] reads the values at `ceil(np)` and
//!   `floor(np + 1)` and averages them when they differ. Only numeric values
//!   can be averaged.
//!
//! Breakpoints of every requested variable are collected in a
//! [`QuantileTable`], which is also the persisted form of a model.
//!
//! # Usage
//!
//! ```rust
//! # use orderstats::histogram::RawHistogram;
//! # use orderstats::quantile::QuantileConfig;
//! # use orderstats::quantile::QuantileDefinition;
//! # use orderstats::quantile::QuantileTable;
//! let derived = RawHistogram::build(vec![1.0, 2.0, 2.0, 3.0]).derive();
//! let config = QuantileConfig::new(4, QuantileDefinition::NearestRank);
//! let breakpoints = derived.quantiles(&config).unwrap().unwrap();
//!
//! let mut table = QuantileTable::new(&config);
//! table.push_column("x", breakpoints).unwrap();
//! assert_eq!(table.labels()[2], "Median");
//!
//! let restored = QuantileTable::deserialize(&table.serialize()).unwrap();
//! assert_eq!(restored, table);
//! ```

mod config;
mod deriver;
mod label;
mod serialization;
mod table;

pub use self::config::NUMBER_OF_INTERVALS;
pub use self::config::QUANTILE_DEFINITION;
pub use self::config::QuantileConfig;
pub use self::config::QuantileDefinition;
pub use self::deriver::QuantileRanks;
pub use self::label::quantile_label;
pub use self::label::quantile_labels;
pub use self::table::QUANTILES_TABLE_NAME;
pub use self::table::QuantileTable;

/// Default number of intervals.
pub const DEFAULT_NUMBER_OF_INTERVALS: u32 = 4;
/// Minimum number of intervals.
pub const MIN_NUMBER_OF_INTERVALS: u32 = 1;
/// Maximum number of intervals.
pub const MAX_NUMBER_OF_INTERVALS: u32 = 65_535;
