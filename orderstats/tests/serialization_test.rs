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
use googletest::prelude::contains_substring;
use orderstats::Column;
use orderstats::ColumnSource;
use orderstats::Scalar;
use orderstats::error::ErrorKind;
use orderstats::quantile::QuantileConfig;
use orderstats::quantile::QuantileDefinition;
use orderstats::quantile::QuantileTable;

fn model() -> QuantileTable {
    QuantileTable::new(&QuantileConfig::new(2, QuantileDefinition::NearestRank))
        .with_column("height", vec![1.5, 2.0, 7.25])
        .unwrap()
        .with_column("name", vec!["ann", "bob", "émile"])
        .unwrap()
        .with_column(
            "mixed",
            vec![Scalar::Int(-4), Scalar::Float(0.5), Scalar::from("z")],
        )
        .unwrap()
}

#[test]
fn test_round_trip() {
    let table = model();
    let restored = QuantileTable::deserialize(&table.serialize()).unwrap();
    assert_eq!(restored, table);
    assert_eq!(
        restored.quantile_definition(),
        QuantileDefinition::NearestRank
    );
    assert_eq!(restored.labels(), &["Minimum", "Median", "Maximum"]);
    assert_eq!(
        restored.variables().collect::<Vec<_>>(),
        ["height", "name", "mixed"]
    );
    assert!(matches!(restored.column("mixed"), Some(Column::Generic(_))));
}

#[test]
fn test_empty_input() {
    let err = QuantileTable::deserialize(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedData);
    assert_that!(err.message(), contains_substring("insufficient data"));
}

#[test]
fn test_every_truncation_fails() {
    let bytes = model().serialize();
    for len in 0..bytes.len() {
        let err = QuantileTable::deserialize(&bytes[..len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedData, "truncated to {len}");
    }
}

#[test]
fn test_wrong_family() {
    let mut bytes = model().serialize();
    bytes[1] = 15;
    let err = QuantileTable::deserialize(&bytes).unwrap_err();
    assert_that!(err.message(), contains_substring("invalid family"));
}

#[test]
fn test_wrong_version() {
    let mut bytes = model().serialize();
    bytes[0] = 9;
    let err = QuantileTable::deserialize(&bytes).unwrap_err();
    assert_that!(err.message(), contains_substring("invalid serial version"));
}

#[test]
fn test_unknown_definition() {
    let mut bytes = model().serialize();
    bytes[2] = 7;
    let err = QuantileTable::deserialize(&bytes).unwrap_err();
    assert_that!(err.message(), contains_substring("unknown quantile definition code"));
}

#[test]
fn test_zero_intervals() {
    let mut bytes = model().serialize();
    bytes[4..8].copy_from_slice(&0u32.to_le_bytes());
    let err = QuantileTable::deserialize(&bytes).unwrap_err();
    assert_that!(err.message(), contains_substring("number of intervals out of range"));
}

#[test]
fn test_huge_counts_do_not_allocate() {
    let mut bytes = model().serialize();
    bytes[8..12].copy_from_slice(&u32::MAX.to_le_bytes());
    let err = QuantileTable::deserialize(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedData);

    let mut bytes = model().serialize();
    bytes[4..8].copy_from_slice(&65_535u32.to_le_bytes());
    let err = QuantileTable::deserialize(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedData);
}

#[test]
fn test_unknown_value_type() {
    let table = QuantileTable::new(&QuantileConfig::new(1, QuantileDefinition::NearestRank))
        .with_column("x", vec![1.0, 2.0])
        .unwrap();
    let mut bytes = table.serialize();
    // preamble, then the name length and "x"
    let tag = 12 + 4 + 1;
    assert_eq!(bytes[tag], 0);
    bytes[tag] = 5;
    let err = QuantileTable::deserialize(&bytes).unwrap_err();
    assert_that!(err.message(), contains_substring("unknown value type tag"));
}

#[test]
fn test_decreasing_breakpoints_rejected() {
    let table = QuantileTable::new(&QuantileConfig::new(1, QuantileDefinition::NearestRank))
        .with_column("x", vec![1.0, 2.0])
        .unwrap();
    let mut bytes = table.serialize();
    let first = 12 + 4 + 1 + 1;
    bytes[first..first + 8].copy_from_slice(&3.0f64.to_le_bytes());
    let err = QuantileTable::deserialize(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedData);
    assert_that!(err.to_string(), contains_substring("variable: x"));
    assert_that!(err.message(), contains_substring("non-decreasing"));
}

#[test]
fn test_duplicate_variable_rejected() {
    let table = QuantileTable::new(&QuantileConfig::new(1, QuantileDefinition::NearestRank))
        .with_column("x", vec![1.0, 2.0])
        .unwrap();
    let bytes = table.serialize();
    let column = bytes[12..].to_vec();

    let mut doubled = bytes.clone();
    doubled[8..12].copy_from_slice(&2u32.to_le_bytes());
    doubled.extend_from_slice(&column);
    let err = QuantileTable::deserialize(&doubled).unwrap_err();
    assert_that!(err.message(), contains_substring("duplicate variable: x"));
}
