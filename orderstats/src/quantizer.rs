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

//! Assignment of observations to quantile buckets.

use std::cmp::Ordering;

use crate::value::OrderedItem;

/// Maps observations to the index of the first breakpoint not below them.
///
/// Bucket `i` holds the observations in `(breakpoints[i - 1], breakpoints[i]]`;
/// bucket 0 also takes everything below the minimum and bucket `N` everything
/// above the maximum. An observation equal to a breakpoint falls in the bucket
/// of that breakpoint.
///
/// # Examples
///
/// ```
/// # use orderstats::quantizer::Quantizer;
/// let breakpoints = [1.0, 2.0, 4.0, 5.0, 7.0];
/// let quantizer = Quantizer::new(&breakpoints);
/// assert_eq!(quantizer.bucket(&0.0), Some(0));
/// assert_eq!(quantizer.bucket(&2.0), Some(1));
/// assert_eq!(quantizer.bucket(&3.0), Some(2));
/// assert_eq!(quantizer.bucket(&9.0), Some(4));
/// assert_eq!(quantizer.bucket(&f64::NAN), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Quantizer<'a, T> {
    breakpoints: &'a [T],
}

impl<'a, T: OrderedItem> Quantizer<'a, T> {
    /// Creates a quantizer over ascending breakpoints.
    ///
    /// # Panics
    ///
    /// Panics if `breakpoints` is empty.
    pub fn new(breakpoints: &'a [T]) -> Self {
        assert!(!breakpoints.is_empty(), "breakpoints must not be empty");
        Self { breakpoints }
    }

    /// Returns the number of intervals `N`.
    pub fn number_of_intervals(&self) -> usize {
        self.breakpoints.len() - 1
    }

    /// Returns the bucket of one observation, or `None` for NaN.
    pub fn bucket(&self, observation: &T) -> Option<usize> {
        if T::is_nan(observation) {
            return None;
        }
        let idx = self
            .breakpoints
            .partition_point(|b| T::cmp(b, observation) == Ordering::Less);
        Some(idx.min(self.number_of_intervals()))
    }

    /// Returns the bucket of each observation, in input order.
    pub fn buckets(&self, observations: &[T]) -> Vec<Option<usize>> {
        observations.iter().map(|o| self.bucket(o)).collect()
    }
}
