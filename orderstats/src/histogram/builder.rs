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

use super::CARDINALITY_UNSET;
use super::derived::DerivedHistogram;
use crate::value::OrderedItem;

/// A distinct value and the number of times it was observed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramEntry<T> {
    value: T,
    count: u64,
}

impl<T> HistogramEntry<T> {
    /// Returns the value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the number of observations of the value.
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Frequency table of one column, ordered by ascending value.
///
/// The cardinality record is not filled in here: it stays at
/// [`CARDINALITY_UNSET`] until the histogram is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHistogram<T> {
    entries: Vec<HistogramEntry<T>>,
}

impl<T> Default for RawHistogram<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: OrderedItem> RawHistogram<T> {
    /// Counts each distinct value of the input.
    ///
    /// NaN values are ignored for floating-point types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orderstats::histogram::RawHistogram;
    /// let histogram = RawHistogram::build(vec![3.0, 1.0, 3.0]);
    /// assert_eq!(histogram.len(), 2);
    /// assert_eq!(*histogram.entries()[0].value(), 1.0);
    /// assert_eq!(histogram.entries()[1].count(), 2);
    /// ```
    pub fn build<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut values: Vec<T> = values.into_iter().filter(|v| !T::is_nan(v)).collect();
        values.sort_by(T::cmp);

        let mut entries: Vec<HistogramEntry<T>> = Vec::new();
        for value in values {
            match entries.last_mut() {
                Some(last) if T::cmp(&last.value, &value) == Ordering::Equal => last.count += 1,
                _ => entries.push(HistogramEntry { value, count: 1 }),
            }
        }
        Self { entries }
    }

    /// Creates a histogram from an externally computed frequency table.
    ///
    /// Entries may come in any order. Counts of equal values are summed, and
    /// zero counts and NaN values are dropped.
    pub fn from_counts<I: IntoIterator<Item = (T, u64)>>(counts: I) -> Self {
        let mut counts: Vec<(T, u64)> = counts
            .into_iter()
            .filter(|(v, c)| *c > 0 && !T::is_nan(v))
            .collect();
        counts.sort_by(|a, b| T::cmp(&a.0, &b.0));

        let mut entries: Vec<HistogramEntry<T>> = Vec::with_capacity(counts.len());
        for (value, count) in counts {
            match entries.last_mut() {
                Some(last) if T::cmp(&last.value, &value) == Ordering::Equal => last.count += count,
                _ => entries.push(HistogramEntry { value, count }),
            }
        }
        Self { entries }
    }

    /// Returns the entries in ascending value order.
    pub fn entries(&self) -> &[HistogramEntry<T>] {
        &self.entries
    }

    /// Returns the number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no value was observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cardinality record, which is always [`CARDINALITY_UNSET`]
    /// before derivation.
    pub fn cardinality(&self) -> i64 {
        CARDINALITY_UNSET
    }

    /// Computes cardinality, probability mass and cumulative counts.
    pub fn derive(self) -> DerivedHistogram<T> {
        DerivedHistogram::from_raw(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Scalar;

    #[test]
    fn test_build_groups_equal_values() {
        let histogram = RawHistogram::build(vec![2.0, 1.0, 2.0, f64::NAN, 0.0, -0.0]);
        let counts: Vec<(f64, u64)> = histogram
            .entries()
            .iter()
            .map(|e| (*e.value(), e.count()))
            .collect();
        assert_eq!(counts, vec![(0.0, 2), (1.0, 1), (2.0, 2)]);
    }

    #[test]
    fn test_from_counts_merges_and_sorts() {
        let histogram = RawHistogram::from_counts(vec![
            (Scalar::from("b"), 2),
            (Scalar::Int(1), 1),
            (Scalar::from("b"), 3),
            (Scalar::Float(0.5), 0),
        ]);
        assert_eq!(histogram.len(), 2);
        assert_eq!(*histogram.entries()[0].value(), Scalar::Int(1));
        assert_eq!(histogram.entries()[1].count(), 5);
    }
}
