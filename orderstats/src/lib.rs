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

//! Order statistics over columns of orderable values.
//!
//! For each column the crate builds a frequency [histogram], derives `N + 1`
//! [quantile] breakpoints from its cumulative counts, measures the
//! [goodness of fit](fit) of another sample to those breakpoints, and
//! [assigns](quantizer) observations to the buckets they delimit. Numeric,
//! text and generic [`Scalar`] columns all run through the same algorithms.
//!
//! # Usage
//!
//! ```rust
//! use orderstats::Table;
//! use orderstats::engine::OrderStatistics;
//! use orderstats::quantile::QuantileConfig;
//! use orderstats::quantile::QuantileDefinition;
//!
//! let data = Table::new()
//!     .with_column("height", vec![1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0])
//!     .with_column("name", vec!["ann", "bob", "cy", "dee"]);
//!
//! let mut stats = OrderStatistics::new(QuantileConfig::new(4, QuantileDefinition::AveragedSteps));
//! stats.add_request(["height"]);
//! stats.add_request(["name"]);
//! stats.add_request(["weight"]);
//!
//! let learned = stats.learn(&data);
//! assert_eq!(learned.diagnostics().len(), 1);
//!
//! let model = stats.derive(learned.into_output()).into_output();
//! let quantiles = model.quantiles();
//! assert_eq!(quantiles.labels()[2], "Median");
//!
//! let rows = stats.test(&data, quantiles).into_output();
//! assert_eq!(rows.len(), 2);
//! ```

mod codec;

pub mod column;
pub mod engine;
pub mod error;
pub mod fit;
pub mod histogram;
pub mod quantile;
pub mod quantizer;
pub mod value;

pub use self::column::Column;
pub use self::column::ColumnSource;
pub use self::column::Table;
pub use self::value::OrderedItem;
pub use self::value::Scalar;
pub use self::value::ValueType;
