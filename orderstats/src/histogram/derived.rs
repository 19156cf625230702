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

use super::PROBABILITY_UNSET;
use super::builder::RawHistogram;
use crate::value::OrderedItem;

/// A histogram together with the fields computed from it.
///
/// Rows are 1-based: row 0 is the cardinality record, and row `r >= 1` is the
/// `r`-th entry of the raw histogram. The probability and CDF arrays are
/// aligned to these rows, so `cdf()[r] == cdf()[r - 1] + count(r)` and
/// `cdf()[0] == 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedHistogram<T> {
    raw: RawHistogram<T>,
    cardinality: u64,
    probabilities: Vec<f64>,
    cdf: Vec<u64>,
}

impl<T: OrderedItem> DerivedHistogram<T> {
    pub(crate) fn from_raw(raw: RawHistogram<T>) -> Self {
        let num_rows = raw.len() + 1;

        let mut cdf = Vec::with_capacity(num_rows);
        cdf.push(0);
        let mut n = 0u64;
        for entry in raw.entries() {
            n += entry.count();
            cdf.push(n);
        }

        let mut probabilities = Vec::with_capacity(num_rows);
        probabilities.push(PROBABILITY_UNSET);
        let inv_n = 1.0 / n as f64;
        for entry in raw.entries() {
            probabilities.push(inv_n * entry.count() as f64);
        }

        Self {
            raw,
            cardinality: n,
            probabilities,
            cdf,
        }
    }

    /// Returns the underlying frequency table.
    pub fn raw(&self) -> &RawHistogram<T> {
        &self.raw
    }

    /// Consumes this histogram and returns the frequency table.
    pub fn into_raw(self) -> RawHistogram<T> {
        self.raw
    }

    /// Returns the total number of observations.
    pub fn cardinality(&self) -> u64 {
        self.cardinality
    }

    /// Returns true if no value was observed.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the rank of the last entry, which is also the number of
    /// distinct values.
    pub fn last_rank(&self) -> usize {
        self.raw.len()
    }

    /// Returns the value at the given 1-based rank.
    pub fn value(&self, rank: usize) -> Option<&T> {
        rank.checked_sub(1)
            .and_then(|idx| self.raw.entries().get(idx))
            .map(|entry| entry.value())
    }

    /// Returns the probability mass of each row.
    ///
    /// Row 0 holds [`PROBABILITY_UNSET`].
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Returns the cumulative counts of each row.
    pub fn cdf(&self) -> &[u64] {
        &self.cdf
    }

    #[cfg(test)]
    pub(crate) fn with_cdf(mut self, cdf: Vec<u64>) -> Self {
        self.cdf = cdf;
        self
    }
}
