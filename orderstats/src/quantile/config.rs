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

use std::fmt;
use std::str::FromStr;

use super::DEFAULT_NUMBER_OF_INTERVALS;
use super::MAX_NUMBER_OF_INTERVALS;
use super::MIN_NUMBER_OF_INTERVALS;
use crate::error::Error;
use crate::value::Scalar;

/// Name of the parameter holding the number of intervals.
pub const NUMBER_OF_INTERVALS: &str = "NumberOfIntervals";
/// Name of the parameter holding the quantile definition.
pub const QUANTILE_DEFINITION: &str = "QuantileDefinition";

/// How a quantile is read off the cumulative counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuantileDefinition {
    /// The value at rank `round(np)`.
    NearestRank,
    /// The midpoint of the values at ranks `ceil(np)` and `floor(np + 1)`.
    ///
    /// Only numeric values have a midpoint; other types use the lower value.
    #[default]
    AveragedSteps,
}

impl QuantileDefinition {
    /// Returns the integer code of this definition.
    pub const fn code(self) -> u8 {
        match self {
            QuantileDefinition::NearestRank => 0,
            QuantileDefinition::AveragedSteps => 1,
        }
    }

    /// Returns the definition with the given integer code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(QuantileDefinition::NearestRank),
            1 => Some(QuantileDefinition::AveragedSteps),
            _ => None,
        }
    }
}

impl fmt::Display for QuantileDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantileDefinition::NearestRank => f.write_str("NearestRank"),
            QuantileDefinition::AveragedSteps => f.write_str("AveragedSteps"),
        }
    }
}

impl FromStr for QuantileDefinition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NearestRank" | "InverseCDF" => Ok(QuantileDefinition::NearestRank),
            "AveragedSteps" | "InverseCDFAveragedSteps" => Ok(QuantileDefinition::AveragedSteps),
            other => other
                .parse::<i64>()
                .ok()
                .and_then(QuantileDefinition::from_code)
                .ok_or_else(|| {
                    Error::config_invalid(format!("unknown quantile definition: {other}"))
                }),
        }
    }
}

/// Configuration of the quantile deriver.
///
/// Invalid values are rejected and the previous value is kept.
///
/// # Examples
///
/// ```
/// # use orderstats::quantile::QuantileConfig;
/// # use orderstats::quantile::QuantileDefinition;
/// let mut config = QuantileConfig::default();
/// assert_eq!(config.number_of_intervals(), 4);
/// assert_eq!(config.quantile_definition(), QuantileDefinition::AveragedSteps);
///
/// config.set_parameter("NumberOfIntervals", 10).unwrap();
/// assert!(config.set_parameter("NumberOfIntervals", 0).is_err());
/// assert_eq!(config.number_of_intervals(), 10);
///
/// config.set_parameter("QuantileDefinition", "NearestRank").unwrap();
/// assert_eq!(config.quantile_definition(), QuantileDefinition::NearestRank);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantileConfig {
    number_of_intervals: u32,
    quantile_definition: QuantileDefinition,
}

impl Default for QuantileConfig {
    fn default() -> Self {
        Self {
            number_of_intervals: DEFAULT_NUMBER_OF_INTERVALS,
            quantile_definition: QuantileDefinition::default(),
        }
    }
}

impl QuantileConfig {
    /// Creates a configuration.
    ///
    /// # Panics
    ///
    /// Panics if `number_of_intervals` is not in
    /// [MIN_NUMBER_OF_INTERVALS, MAX_NUMBER_OF_INTERVALS].
    pub fn new(number_of_intervals: u32, quantile_definition: QuantileDefinition) -> Self {
        assert!(
            (MIN_NUMBER_OF_INTERVALS..=MAX_NUMBER_OF_INTERVALS).contains(&number_of_intervals),
            "number_of_intervals must be in [{MIN_NUMBER_OF_INTERVALS}, {MAX_NUMBER_OF_INTERVALS}], got {number_of_intervals}"
        );
        Self {
            number_of_intervals,
            quantile_definition,
        }
    }

    /// Returns the number of intervals `N`; `N + 1` quantiles are derived.
    pub fn number_of_intervals(&self) -> u32 {
        self.number_of_intervals
    }

    /// Returns the quantile definition.
    pub fn quantile_definition(&self) -> QuantileDefinition {
        self.quantile_definition
    }

    /// Sets the number of intervals, keeping the previous value if out of range.
    pub fn set_number_of_intervals(&mut self, number_of_intervals: i64) -> Result<(), Error> {
        match u32::try_from(number_of_intervals) {
            Ok(n) if (MIN_NUMBER_OF_INTERVALS..=MAX_NUMBER_OF_INTERVALS).contains(&n) => {
                self.number_of_intervals = n;
                Ok(())
            }
            _ => Err(Error::config_invalid(format!(
                "number of intervals must be in [{MIN_NUMBER_OF_INTERVALS}, {MAX_NUMBER_OF_INTERVALS}], got {number_of_intervals}"
            ))
            .with_context("previous", self.number_of_intervals)),
        }
    }

    /// Sets the quantile definition.
    pub fn set_quantile_definition(&mut self, quantile_definition: QuantileDefinition) {
        self.quantile_definition = quantile_definition;
    }

    /// Sets a parameter by name.
    ///
    /// Recognized names are [`NUMBER_OF_INTERVALS`] and
    /// [`QUANTILE_DEFINITION`]. The quantile definition accepts its integer
    /// code or its name. On error the configuration is unchanged and a warning
    /// is logged.
    pub fn set_parameter(&mut self, name: &str, value: impl Into<Scalar>) -> Result<(), Error> {
        let value = value.into();
        let result = match name {
            NUMBER_OF_INTERVALS => match value.as_i64() {
                Some(n) => self.set_number_of_intervals(n),
                None => Err(Error::config_invalid(format!(
                    "number of intervals must be an integer, got {value}"
                ))),
            },
            QUANTILE_DEFINITION => {
                let definition = match &value {
                    Scalar::Text(s) => s.parse(),
                    other => other
                        .as_i64()
                        .and_then(QuantileDefinition::from_code)
                        .ok_or_else(|| {
                            Error::config_invalid(format!(
                                "incorrect type of quantile definition: {other}"
                            ))
                        }),
                };
                definition.map(|d| self.set_quantile_definition(d))
            }
            _ => Err(Error::config_invalid(format!("unknown parameter: {name}"))),
        };

        result.map_err(|err| {
            let err = err.with_context("parameter", name);
            tracing::warn!(parameter = name, "{err}. Ignoring it.");
            err
        })
    }
}
