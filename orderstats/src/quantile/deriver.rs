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

use super::config::QuantileConfig;
use super::config::QuantileDefinition;
use crate::error::Error;
use crate::histogram::DerivedHistogram;
use crate::value::OrderedItem;

/// The pair of 1-based histogram ranks a quantile is read from.
///
/// Both ranks are equal unless an averaged-step quantile falls between two
/// histogram entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantileRanks {
    lower: usize,
    upper: usize,
}

impl QuantileRanks {
    /// Creates a rank pair.
    pub fn new(lower: usize, upper: usize) -> Self {
        Self { lower, upper }
    }

    fn single(rank: usize) -> Self {
        Self::new(rank, rank)
    }

    /// Returns the rank of the lower value.
    pub fn lower(&self) -> usize {
        self.lower
    }

    /// Returns the rank of the upper value.
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Returns true if the quantile falls between two distinct entries.
    pub fn is_split(&self) -> bool {
        self.lower != self.upper
    }
}

impl<T: OrderedItem> DerivedHistogram<T> {
    /// Locates the `N + 1` quantiles in the cumulative counts.
    ///
    /// The first quantile is always rank 1 and the last is always the last
    /// rank. Interior quantiles are found by a cursor that only moves forward
    /// through the CDF, so they must be computed in ascending order.
    ///
    /// Returns `Ok(None)` if the histogram is empty.
    pub fn quantile_ranks(&self, config: &QuantileConfig) -> Result<Option<Vec<QuantileRanks>>, Error> {
        let last_rank = self.last_rank();
        if last_rank == 0 {
            return Ok(None);
        }

        let intervals = config.number_of_intervals();
        let definition = config.quantile_definition();
        let n = self.cardinality() as f64;
        let cdf = self.cdf();

        let mut ranks = Vec::with_capacity(intervals as usize + 1);
        ranks.push(QuantileRanks::single(1));

        let mut rank = 1usize;
        for k in 1..intervals {
            let np = k as f64 * n / intervals as f64;
            let first_index = match definition {
                QuantileDefinition::NearestRank => np.round(),
                QuantileDefinition::AveragedSteps => np.ceil(),
            } as u64;

            rank = advance_rank(cdf, rank, first_index)?;
            let lower = rank;

            if definition == QuantileDefinition::AveragedSteps {
                let second_index = (np + 1.0).floor() as u64;
                if second_index != first_index {
                    rank = advance_rank(cdf, rank, second_index)?;
                }
            }
            ranks.push(QuantileRanks::new(lower, rank));
        }

        ranks.push(QuantileRanks::single(last_rank));
        Ok(Some(ranks))
    }

    /// Computes the `N + 1` quantile values.
    ///
    /// With [`QuantileDefinition::AveragedSteps`], a quantile between two
    /// entries is their midpoint when the value type has one, and the lower
    /// entry otherwise.
    ///
    /// Returns `Ok(None)` if the histogram is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orderstats::histogram::RawHistogram;
    /// # use orderstats::quantile::QuantileConfig;
    /// # use orderstats::quantile::QuantileDefinition;
    /// let derived = RawHistogram::build(vec![1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0]).derive();
    ///
    /// let config = QuantileConfig::new(4, QuantileDefinition::NearestRank);
    /// let quantiles = derived.quantiles(&config).unwrap().unwrap();
    /// assert_eq!(quantiles, vec![1.0, 2.0, 4.0, 5.0, 7.0]);
    ///
    /// let config = QuantileConfig::new(4, QuantileDefinition::AveragedSteps);
    /// let quantiles = derived.quantiles(&config).unwrap().unwrap();
    /// assert_eq!(quantiles, vec![1.0, 2.0, 4.5, 5.0, 7.0]);
    /// ```
    pub fn quantiles(&self, config: &QuantileConfig) -> Result<Option<Vec<T>>, Error> {
        let Some(ranks) = self.quantile_ranks(config)? else {
            return Ok(None);
        };

        let mut values = Vec::with_capacity(ranks.len());
        for pair in ranks {
            let lower = self.rank_value(pair.lower())?;
            let value = if !pair.is_split() {
                lower.clone()
            } else {
                let upper = self.rank_value(pair.upper())?;
                match config.quantile_definition() {
                    QuantileDefinition::AveragedSteps => {
                        T::midpoint_of(lower, upper).unwrap_or_else(|| lower.clone())
                    }
                    QuantileDefinition::NearestRank => lower.clone(),
                }
            };
            values.push(value);
        }
        Ok(Some(values))
    }

    fn rank_value(&self, rank: usize) -> Result<&T, Error> {
        self.value(rank).ok_or_else(|| {
            Error::inconsistent(format!("quantile rank {rank} is outside the histogram"))
        })
    }
}

/// Moves `rank` forward until the CDF reaches `index`.
fn advance_rank(cdf: &[u64], mut rank: usize, index: u64) -> Result<usize, Error> {
    while cdf[rank] < index {
        rank += 1;
        if rank >= cdf.len() {
            return Err(Error::inconsistent(format!(
                "inconsistent quantile table: at last rank {} the CDF is {} < {index}, the quantile index. Cannot derive model.",
                rank - 1,
                cdf[rank - 1],
            ))
            .with_context("quantile_index", index));
        }
    }
    Ok(rank)
}
