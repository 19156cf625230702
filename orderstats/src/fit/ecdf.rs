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

use crate::error::Error;
use crate::histogram::RawHistogram;
use crate::value::OrderedItem;

/// Tolerance on the total probability of an empirical CDF.
pub const CDF_SUM_TOLERANCE: f64 = 1e-6;

/// Empirical cumulative distribution of a sample.
///
/// `F(x)` is the fraction of observations `<= x`. The function is stored at
/// its distinct points in ascending order, and is extended to further points
/// by [`EmpiricalCdf::insert_breakpoints`].
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalCdf<T> {
    values: Vec<T>,
    cdf: Vec<f64>,
    sample_size: u64,
}

impl<T: OrderedItem> EmpiricalCdf<T> {
    /// Builds the empirical CDF of the observations.
    ///
    /// NaN observations are ignored. An empty sample gives an empty function.
    ///
    /// # Errors
    ///
    /// Returns an [`InconsistentModel`](crate::error::ErrorKind::InconsistentModel)
    /// error if the probabilities do not sum to one within
    /// [`CDF_SUM_TOLERANCE`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use orderstats::fit::EmpiricalCdf;
    /// let ecdf = EmpiricalCdf::build(vec![2.0, 1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(ecdf.sample_size(), 4);
    /// assert_eq!(ecdf.evaluate(&0.5), 0.0);
    /// assert_eq!(ecdf.evaluate(&2.0), 0.75);
    /// assert_eq!(ecdf.evaluate(&2.5), 0.75);
    /// ```
    pub fn build<I: IntoIterator<Item = T>>(observations: I) -> Result<Self, Error> {
        let histogram = RawHistogram::build(observations);
        let sample_size: u64 = histogram.entries().iter().map(|e| e.count()).sum();
        Self::accumulate(&histogram, sample_size)
    }

    /// Accumulates the mass `count / sample_size` of each entry.
    fn accumulate(histogram: &RawHistogram<T>, sample_size: u64) -> Result<Self, Error> {
        if sample_size == 0 {
            return Ok(Self {
                values: Vec::new(),
                cdf: Vec::new(),
                sample_size: 0,
            });
        }

        let inv_n = 1.0 / sample_size as f64;
        let mut values = Vec::with_capacity(histogram.len());
        let mut cdf = Vec::with_capacity(histogram.len());
        let mut sum = 0.0;
        for entry in histogram.entries() {
            sum += inv_n * entry.count() as f64;
            values.push(entry.value().clone());
            cdf.push(sum);
        }

        if (sum - 1.0).abs() > CDF_SUM_TOLERANCE {
            return Err(Error::inconsistent(format!(
                "incorrect CDF: empirical probabilities sum to {sum}, not 1"
            )));
        }

        Ok(Self {
            values,
            cdf,
            sample_size,
        })
    }

    /// Returns the number of observations, NaN excluded.
    pub fn sample_size(&self) -> u64 {
        self.sample_size
    }

    /// Returns true if the sample was empty.
    pub fn is_empty(&self) -> bool {
        self.sample_size == 0
    }

    /// Returns the number of points the function is stored at.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns the points in ascending order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the cumulative probability at each point.
    pub fn cdf_values(&self) -> &[f64] {
        &self.cdf
    }

    /// Returns `(value, F(value))` pairs in ascending order.
    pub fn points(&self) -> impl Iterator<Item = (&T, f64)> {
        self.values.iter().zip(self.cdf.iter().copied())
    }

    /// Evaluates `F(x)`.
    pub fn evaluate(&self, x: &T) -> f64 {
        let idx = self
            .values
            .partition_point(|v| T::cmp(v, x) != Ordering::Greater);
        match idx {
            0 => 0.0,
            _ => self.cdf[idx - 1],
        }
    }

    /// Adds the given points to the function without changing its values.
    ///
    /// A point not yet present inherits the value of its predecessor, or 0 if
    /// it is below every stored point. NaN points are ignored.
    pub fn insert_breakpoints(&mut self, breakpoints: &[T]) {
        for breakpoint in breakpoints {
            if T::is_nan(breakpoint) {
                continue;
            }
            match self
                .values
                .binary_search_by(|v| T::cmp(v, breakpoint))
            {
                Ok(_) => {}
                Err(idx) => {
                    let inherited = match idx {
                        0 => 0.0,
                        _ => self.cdf[idx - 1],
                    };
                    self.values.insert(idx, breakpoint.clone());
                    self.cdf.insert(idx, inherited);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_ignores_nan() {
        let ecdf = EmpiricalCdf::build(vec![1.0, f64::NAN, 1.0, 2.0, 4.0]).unwrap();
        assert_eq!(ecdf.sample_size(), 4);
        assert_eq!(ecdf.values(), &[1.0, 2.0, 4.0]);
        assert_eq!(ecdf.cdf_values(), &[0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_mass_must_sum_to_one() {
        let histogram = RawHistogram::build(vec![1.0, 2.0, 2.0, 4.0]);
        let ecdf = EmpiricalCdf::accumulate(&histogram, 4).unwrap();
        assert_eq!(ecdf.cdf_values(), &[0.25, 0.75, 1.0]);

        let err = EmpiricalCdf::accumulate(&histogram, 5).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InconsistentModel);
        assert!(err.message().contains("incorrect CDF"));
    }

    #[test]
    fn test_empty_sample() {
        let ecdf = EmpiricalCdf::<String>::build(Vec::new()).unwrap();
        assert!(ecdf.is_empty());
        assert_eq!(ecdf.len(), 0);
        assert_eq!(ecdf.evaluate(&"a".to_string()), 0.0);
    }

    #[test]
    fn test_insert_breakpoints_inherits_predecessor() {
        let mut ecdf = EmpiricalCdf::build(vec![2.0, 4.0]).unwrap();
        ecdf.insert_breakpoints(&[1.0, 2.0, 3.0, 5.0]);
        assert_eq!(ecdf.values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(ecdf.cdf_values(), &[0.0, 0.5, 0.5, 1.0, 1.0]);
        assert_eq!(ecdf.sample_size(), 2);
    }
}
