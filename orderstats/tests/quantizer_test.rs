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

use orderstats::Scalar;
use orderstats::histogram::RawHistogram;
use orderstats::quantile::QuantileConfig;
use orderstats::quantile::QuantileDefinition;
use orderstats::quantizer::Quantizer;

#[test]
fn test_breakpoints_map_to_extremes() {
    let data = vec![1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0];
    for definition in [QuantileDefinition::NearestRank, QuantileDefinition::AveragedSteps] {
        let breakpoints = RawHistogram::build(data.clone())
            .derive()
            .quantiles(&QuantileConfig::new(4, definition))
            .unwrap()
            .unwrap();
        let quantizer = Quantizer::new(&breakpoints);
        let buckets: Vec<usize> = breakpoints
            .iter()
            .map(|b| quantizer.bucket(b).unwrap())
            .collect();
        assert_eq!(buckets[0], 0);
        assert_eq!(buckets[4], 4);
        assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_sorted_observations_give_sorted_buckets() {
    let breakpoints = [0.0, 10.0, 20.0, 30.0];
    let quantizer = Quantizer::new(&breakpoints);
    let observations: Vec<f64> = (-5..40).map(|i| i as f64).collect();
    let buckets: Vec<usize> = quantizer
        .buckets(&observations)
        .into_iter()
        .map(|b| b.unwrap())
        .collect();
    assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(buckets[0], 0);
    assert_eq!(*buckets.last().unwrap(), 3);
}

#[test]
fn test_ties_go_to_the_breakpoint_bucket() {
    let breakpoints = [1.0, 2.0, 4.0, 5.0, 7.0];
    let quantizer = Quantizer::new(&breakpoints);
    assert_eq!(
        quantizer.buckets(&[1.0, 2.0, 4.0, 5.0, 7.0]),
        vec![Some(0), Some(1), Some(2), Some(3), Some(4)]
    );
    assert_eq!(
        quantizer.buckets(&[1.5, 4.5, 6.9]),
        vec![Some(1), Some(3), Some(4)]
    );
}

#[test]
fn test_text_buckets() {
    let breakpoints: Vec<String> = ["b", "d", "f"].map(String::from).to_vec();
    let quantizer = Quantizer::new(&breakpoints);
    let observations: Vec<String> = ["a", "b", "c", "f", "g"].map(String::from).to_vec();
    assert_eq!(
        quantizer.buckets(&observations),
        vec![Some(0), Some(0), Some(1), Some(2), Some(2)]
    );
}

#[test]
fn test_generic_buckets() {
    let breakpoints = [Scalar::Int(0), Scalar::Int(0), Scalar::Float(10.0)];
    let quantizer = Quantizer::new(&breakpoints);
    assert_eq!(quantizer.bucket(&Scalar::Float(-0.5)), Some(0));
    assert_eq!(quantizer.bucket(&Scalar::Float(0.0)), Some(0));
    assert_eq!(quantizer.bucket(&Scalar::Int(10)), Some(2));
    assert_eq!(quantizer.bucket(&Scalar::from("text")), Some(2));
}
