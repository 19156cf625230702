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

use googletest::assert_that;
use googletest::prelude::near;
use orderstats::error::ErrorKind;
use orderstats::fit::EmpiricalCdf;
use orderstats::fit::kolmogorov_smirnov;
use orderstats::histogram::RawHistogram;
use orderstats::quantile::QuantileConfig;
use orderstats::quantile::QuantileDefinition;

const NUMERIC_NOISE_TOLERANCE: f64 = 1e-9;

fn sample() -> Vec<f64> {
    vec![1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0]
}

fn model(values: &[f64], n: u32, definition: QuantileDefinition) -> Vec<f64> {
    RawHistogram::build(values.iter().copied())
        .derive()
        .quantiles(&QuantileConfig::new(n, definition))
        .unwrap()
        .unwrap()
}

#[test]
fn test_sample_against_its_quartiles() {
    let data = sample();
    let breakpoints = model(&data, 4, QuantileDefinition::NearestRank);
    let result = kolmogorov_smirnov(&breakpoints, &data).unwrap().unwrap();
    assert_that!(result.maximum_distance(), near(0.15, NUMERIC_NOISE_TOLERANCE));
    assert_that!(
        result.ks_statistic(),
        near(10f64.sqrt() * 0.15, NUMERIC_NOISE_TOLERANCE)
    );
    assert_eq!(result.sample_size(), 10);
}

#[test]
fn test_fine_model_fits_its_own_data() {
    let data: Vec<f64> = (1..=10).map(f64::from).collect();
    let breakpoints = model(&data, 10, QuantileDefinition::NearestRank);
    let result = kolmogorov_smirnov(&breakpoints, &data).unwrap().unwrap();
    assert_that!(result.maximum_distance(), near(0.0, NUMERIC_NOISE_TOLERANCE));

    let data = vec![1.0, 2.0, 2.0, 3.0];
    let breakpoints = model(&data, 4, QuantileDefinition::NearestRank);
    let result = kolmogorov_smirnov(&breakpoints, &data).unwrap().unwrap();
    assert_that!(result.maximum_distance(), near(0.0, NUMERIC_NOISE_TOLERANCE));
}

#[test]
fn test_shifted_sample() {
    // every observation is above the model maximum
    let breakpoints = vec![0.0, 1.0, 2.0];
    let result = kolmogorov_smirnov(&breakpoints, &[10.0, 11.0]).unwrap().unwrap();
    // at 0: F = 0, model 0; at 1: F = 0, model 0.5; at 2: F = 0, model 1
    assert_eq!(result.maximum_distance(), 1.0);
    assert_that!(result.ks_statistic(), near(2f64.sqrt(), NUMERIC_NOISE_TOLERANCE));
}

#[test]
fn test_nan_observations_ignored() {
    let breakpoints = vec![1.0, 2.0];
    let result = kolmogorov_smirnov(&breakpoints, &[1.0, f64::NAN, 2.0])
        .unwrap()
        .unwrap();
    assert_eq!(result.sample_size(), 2);
    assert_eq!(result.maximum_distance(), 0.5);
}

#[test]
fn test_empty_sample() {
    let breakpoints = vec!["a".to_string(), "b".to_string()];
    assert!(kolmogorov_smirnov(&breakpoints, &[]).unwrap().is_none());
    assert!(
        kolmogorov_smirnov(&[1.0, 2.0], &[f64::NAN])
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_degenerate_model() {
    let err = kolmogorov_smirnov::<f64>(&[], &[1.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InconsistentModel);
}

#[test]
fn test_empirical_cdf_step_extension() {
    let mut ecdf = EmpiricalCdf::build(sample()).unwrap();
    assert_eq!(ecdf.len(), 7);
    ecdf.insert_breakpoints(&[0.0, 4.5, 5.0, 9.0]);
    assert_eq!(ecdf.len(), 10);
    assert_eq!(ecdf.evaluate(&0.0), 0.0);
    assert_that!(ecdf.evaluate(&4.5), near(0.5, NUMERIC_NOISE_TOLERANCE));
    assert_that!(ecdf.evaluate(&5.0), near(0.8, NUMERIC_NOISE_TOLERANCE));
    assert_that!(ecdf.evaluate(&9.0), near(1.0, NUMERIC_NOISE_TOLERANCE));
    assert_eq!(ecdf.sample_size(), 10);
}
