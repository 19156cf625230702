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

use orderstats::Column;
use orderstats::Scalar;
use orderstats::ValueType;
use orderstats::histogram::CARDINALITY_UNSET;
use orderstats::histogram::ColumnHistogram;
use orderstats::histogram::DerivedColumnHistogram;
use orderstats::histogram::PROBABILITY_UNSET;
use orderstats::histogram::RawHistogram;

fn sample() -> Vec<f64> {
    vec![1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0]
}

#[test]
fn test_builder_leaves_cardinality_unset() {
    let raw = RawHistogram::build(sample());
    assert_eq!(raw.cardinality(), CARDINALITY_UNSET);
    assert_eq!(raw.len(), 7);

    let counts: Vec<u64> = raw.entries().iter().map(|e| e.count()).collect();
    assert_eq!(counts, vec![1, 2, 1, 1, 3, 1, 1]);
    let values: Vec<f64> = raw.entries().iter().map(|e| *e.value()).collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn test_counts_sum_to_cardinality() {
    let inputs = [
        sample(),
        vec![0.5],
        vec![3.0; 17],
        (0..1000).map(|i| ((i * 37) % 101) as f64).collect(),
    ];
    for input in inputs {
        let n = input.len() as u64;
        let derived = RawHistogram::build(input).derive();
        let total: u64 = derived.raw().entries().iter().map(|e| e.count()).sum();
        assert_eq!(total, n);
        assert_eq!(derived.cardinality(), n);
        assert_eq!(*derived.cdf().last().unwrap(), n);
        assert!(derived.cdf().windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_probabilities() {
    let derived = RawHistogram::build(sample()).derive();
    let probabilities = derived.probabilities();
    assert_eq!(probabilities.len(), 8);
    assert_eq!(probabilities[0], PROBABILITY_UNSET);
    assert_eq!(probabilities[2], 0.2);
    assert!((probabilities[5] - 0.3).abs() < 1e-12);
    let total: f64 = probabilities[1..].iter().sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn test_text_histogram_orders_bytewise() {
    let raw = RawHistogram::build(["pear", "Apple", "apple", "pear"].map(String::from));
    let values: Vec<&str> = raw.entries().iter().map(|e| e.value().as_str()).collect();
    assert_eq!(values, vec!["Apple", "apple", "pear"]);
    assert_eq!(raw.entries()[2].count(), 2);
}

#[test]
fn test_generic_histogram() {
    let raw = RawHistogram::build(vec![
        Scalar::from("b"),
        Scalar::Int(2),
        Scalar::Float(2.0),
        Scalar::Float(1.5),
    ]);
    assert_eq!(raw.len(), 3);
    assert_eq!(*raw.entries()[0].value(), Scalar::Float(1.5));
    assert_eq!(raw.entries()[1].count(), 2);
    assert_eq!(*raw.entries()[2].value(), Scalar::from("b"));
}

#[test]
fn test_generic_histogram_beyond_f64_precision() {
    let two_53 = 1i64 << 53;
    let raw = RawHistogram::build(vec![
        Scalar::Int(two_53 + 1),
        Scalar::Float(two_53 as f64),
        Scalar::Int(two_53),
    ]);
    assert_eq!(raw.len(), 2);
    assert_eq!(*raw.entries()[0].value(), Scalar::Float(two_53 as f64));
    assert_eq!(raw.entries()[0].count(), 2);
    assert_eq!(*raw.entries()[1].value(), Scalar::Int(two_53 + 1));
    assert_eq!(raw.entries()[1].count(), 1);
}

#[test]
fn test_column_histogram_keeps_type() {
    let column = Column::from(vec!["x", "y", "x"]);
    let histogram = ColumnHistogram::build(&column);
    assert_eq!(histogram.value_type(), ValueType::Text);
    assert_eq!(histogram.len(), 2);
    assert_eq!(histogram.cardinality(), CARDINALITY_UNSET);

    let derived = histogram.derive();
    assert!(matches!(derived, DerivedColumnHistogram::Text(_)));
    assert_eq!(derived.cardinality(), 3);
    assert_eq!(derived.cdf(), &[0, 2, 3]);
}

#[test]
fn test_empty_column() {
    let histogram = ColumnHistogram::build(&Column::Numeric(Vec::new()));
    assert!(histogram.is_empty());
    let derived = histogram.derive();
    assert!(derived.is_empty());
    assert_eq!(derived.cdf(), &[0]);
}

#[test]
fn test_from_counts_equals_build() {
    let built = RawHistogram::build(sample());
    let counted = RawHistogram::from_counts(vec![
        (5.0, 3),
        (1.0, 1),
        (2.0, 2),
        (7.0, 1),
        (3.0, 1),
        (4.0, 1),
        (6.0, 1),
        (8.0, 0),
    ]);
    assert_eq!(built, counted);
}
