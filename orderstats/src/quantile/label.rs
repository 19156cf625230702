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

const QUARTILE_NAMES: [&str; 5] = [
    "Minimum",
    "First Quartile",
    "Median",
    "Third Quartile",
    "Maximum",
];

const SIGNIFICANT_DIGITS: i32 = 6;

/// Returns the label of the `k`-th of `number_of_intervals + 1` quantiles.
///
/// Multiples of a quarter are named; every other fraction is printed with six
/// significant digits, in exponent form below `1e-4`.
///
/// # Examples
///
/// ```
/// # use orderstats::quantile::quantile_label;
/// assert_eq!(quantile_label(2, 4), "Median");
/// assert_eq!(quantile_label(1, 8), "0.125-quantile");
/// assert_eq!(quantile_label(1, 3), "0.333333-quantile");
/// ```
pub fn quantile_label(k: u32, number_of_intervals: u32) -> String {
    let scaled = 4 * k as u64;
    let n = number_of_intervals as u64;
    if scaled % n == 0 {
        if let Some(name) = QUARTILE_NAMES.get((scaled / n) as usize) {
            return name.to_string();
        }
    }
    let fraction = k as f64 / number_of_intervals as f64;
    format!("{}-quantile", format_significant(fraction))
}

/// Returns the labels of all `number_of_intervals + 1` quantiles.
pub fn quantile_labels(number_of_intervals: u32) -> Vec<String> {
    (0..=number_of_intervals)
        .map(|k| quantile_label(k, number_of_intervals))
        .collect()
}

/// Formats like `%g`: six significant digits, exponent form below `1e-4`.
fn format_significant(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let precision = (SIGNIFICANT_DIGITS - 1) as usize;
    let scientific = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quartile_labels() {
        assert_eq!(
            quantile_labels(4),
            vec!["Minimum", "First Quartile", "Median", "Third Quartile", "Maximum"]
        );
    }

    #[test]
    fn test_thirds() {
        assert_eq!(
            quantile_labels(3),
            vec![
                "Minimum",
                "0.333333-quantile",
                "0.666667-quantile",
                "Maximum"
            ]
        );
    }

    #[test]
    fn test_mixed_labels() {
        let labels = quantile_labels(8);
        assert_eq!(labels[1], "0.125-quantile");
        assert_eq!(labels[2], "First Quartile");
        assert_eq!(labels[4], "Median");
        assert_eq!(labels[7], "0.875-quantile");

        assert_eq!(quantile_labels(1), vec!["Minimum", "Maximum"]);
        assert_eq!(quantile_label(1, 20), "0.05-quantile");
        assert_eq!(quantile_label(1, 100), "0.01-quantile");
    }

    #[test]
    fn test_format_significant() {
        assert_eq!(format_significant(0.1), "0.1");
        assert_eq!(format_significant(0.142857142857), "0.142857");
        assert_eq!(format_significant(0.9999999), "1");
        assert_eq!(format_significant(0.0001), "0.0001");
        assert_eq!(format_significant(0.00005), "5e-05");
        assert_eq!(format_significant(0.0000999999999), "0.0001");
        assert_eq!(format_significant(1234567.0), "1.23457e+06");
    }

    #[test]
    fn test_small_fractions_use_exponent() {
        assert_eq!(quantile_label(1, 10000), "0.0001-quantile");
        assert_eq!(quantile_label(1, 20000), "5e-05-quantile");
        assert_eq!(quantile_label(1, 30000), "3.33333e-05-quantile");
    }
}
