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

use super::ecdf::EmpiricalCdf;
use crate::error::Error;
use crate::value::OrderedItem;

/// Outcome of a goodness-of-fit test on one variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    maximum_distance: f64,
    ks_statistic: f64,
    sample_size: u64,
}

impl FitResult {
    /// Returns `Dmn`, the largest distance between the empirical and the
    /// model CDF.
    pub fn maximum_distance(&self) -> f64 {
        self.maximum_distance
    }

    /// Returns the Kolmogorov-Smirnov statistic `sqrt(n) * Dmn`.
    pub fn ks_statistic(&self) -> f64 {
        self.ks_statistic
    }

    /// Returns the number of observations tested.
    pub fn sample_size(&self) -> u64 {
        self.sample_size
    }
}

/// Measures how far a sample is from the step function of its quantile model.
///
/// The model CDF jumps by `1/N` at each of the `N + 1` breakpoints except the
/// first: it is 0 below `breakpoints[0]`, and `i/N` from `breakpoints[i]` up
/// to the next breakpoint, where `i` is the last breakpoint not above the
/// value. Both functions are compared at every observed value and every
/// breakpoint.
///
/// Returns `Ok(None)` if the sample has no observations.
///
/// # Errors
///
/// Returns an [`InconsistentModel`](crate::error::ErrorKind::InconsistentModel)
/// error if fewer than two breakpoints are given, or if the empirical CDF of
/// the sample does not sum to one.
///
/// # Examples
///
/// ```
/// # use orderstats::fit::kolmogorov_smirnov;
/// let sample = vec![1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0];
/// let result = kolmogorov_smirnov(&[1.0, 2.0, 4.0, 5.0, 7.0], &sample).unwrap().unwrap();
/// assert!((result.maximum_distance() - 0.15).abs() < 1e-9);
/// assert!((result.ks_statistic() - 10f64.sqrt() * 0.15).abs() < 1e-9);
/// ```
pub fn kolmogorov_smirnov<T: OrderedItem>(
    breakpoints: &[T],
    observations: &[T],
) -> Result<Option<FitResult>, Error> {
    if breakpoints.len() < 2 {
        return Err(Error::inconsistent(format!(
            "a quantile model needs at least 2 breakpoints, got {}",
            breakpoints.len()
        )));
    }

    let mut ecdf = EmpiricalCdf::build(observations.iter().cloned())?;
    if ecdf.is_empty() {
        return Ok(None);
    }
    ecdf.insert_breakpoints(breakpoints);

    let number_of_intervals = (breakpoints.len() - 1) as f64;
    let mut maximum_distance = 0.0f64;
    // number of breakpoints not above the current value
    let mut reached = 0usize;
    for (value, empirical) in ecdf.points() {
        while reached < breakpoints.len()
            && T::cmp(&breakpoints[reached], value) != Ordering::Greater
        {
            reached += 1;
        }
        let model = match reached {
            0 => 0.0,
            _ => (reached - 1) as f64 / number_of_intervals,
        };
        maximum_distance = maximum_distance.max((empirical - model).abs());
    }

    let sample_size = ecdf.sample_size();
    Ok(Some(FitResult {
        maximum_distance,
        ks_statistic: (sample_size as f64).sqrt() * maximum_distance,
        sample_size,
    }))
}
