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

use super::report::Report;
use crate::column::Column;
use crate::column::ColumnSource;
use crate::error::Error;
use crate::fit::FitResult;
use crate::fit::kolmogorov_smirnov;
use crate::histogram::ColumnHistogram;
use crate::histogram::DerivedColumnHistogram;
use crate::quantile::QuantileConfig;
use crate::quantile::QuantileTable;
use crate::quantizer::Quantizer;
use crate::value::Scalar;

/// Name of the assessment produced by [`OrderStatistics::assess`].
pub const ASSESSMENT_NAME: &str = "Quantile";

/// Histograms produced by [`OrderStatistics::learn`], one per variable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Learned {
    histograms: Vec<(String, ColumnHistogram)>,
}

impl Learned {
    /// Creates an empty set of histograms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the histogram of a variable, replacing any previous one.
    ///
    /// This lets histograms computed elsewhere, for example with
    /// [`RawHistogram::from_counts`](crate::histogram::RawHistogram::from_counts),
    /// be derived like learned ones.
    pub fn push(&mut self, variable: impl Into<String>, histogram: ColumnHistogram) {
        let variable = variable.into();
        match self.histograms.iter_mut().find(|(n, _)| *n == variable) {
            Some((_, existing)) => *existing = histogram,
            None => self.histograms.push((variable, histogram)),
        }
    }

    /// Returns the histogram of a variable.
    pub fn histogram(&self, variable: &str) -> Option<&ColumnHistogram> {
        self.histograms
            .iter()
            .find(|(n, _)| n == variable)
            .map(|(_, h)| h)
    }

    /// Returns the variables in request order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.histograms.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the number of histograms.
    pub fn len(&self) -> usize {
        self.histograms.len()
    }

    /// Returns true if no histogram was learned.
    pub fn is_empty(&self) -> bool {
        self.histograms.is_empty()
    }
}

/// Derived histograms plus the quantile table, as produced by
/// [`OrderStatistics::derive`].
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    histograms: Vec<(String, DerivedColumnHistogram)>,
    quantiles: QuantileTable,
}

impl Model {
    /// Returns the derived histogram of a variable.
    pub fn histogram(&self, variable: &str) -> Option<&DerivedColumnHistogram> {
        self.histograms
            .iter()
            .find(|(n, _)| n == variable)
            .map(|(_, h)| h)
    }

    /// Returns the variables in request order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.histograms.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the quantile table.
    pub fn quantiles(&self) -> &QuantileTable {
        &self.quantiles
    }

    /// Consumes the model and returns the quantile table, which is all that
    /// testing and assessment need.
    pub fn into_quantiles(self) -> QuantileTable {
        self.quantiles
    }
}

/// One row of the test output.
#[derive(Debug, Clone, PartialEq)]
pub struct TestRow {
    variable: String,
    maximum_distance: f64,
    ks_statistic: f64,
}

impl TestRow {
    fn new(variable: &str, fit: FitResult) -> Self {
        Self {
            variable: variable.to_string(),
            maximum_distance: fit.maximum_distance(),
            ks_statistic: fit.ks_statistic(),
        }
    }

    /// Returns the tested variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns `Dmn`.
    pub fn maximum_distance(&self) -> f64 {
        self.maximum_distance
    }

    /// Returns `sqrt(n) * Dmn`.
    pub fn ks_statistic(&self) -> f64 {
        self.ks_statistic
    }
}

/// Bucket indices of every row of one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    variable: String,
    buckets: Vec<Option<usize>>,
}

impl Assessment {
    /// Returns the name of the assessment, [`ASSESSMENT_NAME`].
    pub fn name(&self) -> &'static str {
        ASSESSMENT_NAME
    }

    /// Returns the assessed variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the bucket of each input row; NaN rows have none.
    pub fn buckets(&self) -> &[Option<usize>] {
        &self.buckets
    }
}

/// Order statistics over the requested columns of a dataset.
///
/// The four phases run independently on each requested variable. A variable
/// that is missing, has a mismatched type or an inconsistent model is
/// reported in the phase's [`Report`] and skipped; the other variables are
/// still processed.
///
/// # Examples
///
/// ```
/// # use orderstats::Table;
/// # use orderstats::engine::OrderStatistics;
/// let data = Table::new().with_column("x", vec![1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0, 6.0, 7.0]);
///
/// let mut stats = OrderStatistics::default();
/// stats.add_request(["x"]);
/// stats.set_parameter("QuantileDefinition", "NearestRank").unwrap();
///
/// let learned = stats.learn(&data).into_output();
/// let model = stats.derive(learned).into_output();
/// let quantiles = model.into_quantiles();
///
/// let rows = stats.test(&data, &quantiles).into_output();
/// assert_eq!(rows[0].variable(), "x");
///
/// let assessment = stats.assess(&data, &quantiles, "x").into_output().unwrap();
/// assert_eq!(assessment.buckets()[0], Some(0));
/// assert_eq!(assessment.buckets()[9], Some(4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderStatistics {
    config: QuantileConfig,
    requests: Vec<String>,
}

impl OrderStatistics {
    /// Creates an engine with the given configuration and no requests.
    pub fn new(config: QuantileConfig) -> Self {
        Self {
            config,
            requests: Vec::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &QuantileConfig {
        &self.config
    }

    /// Returns the configuration for modification.
    pub fn config_mut(&mut self) -> &mut QuantileConfig {
        &mut self.config
    }

    /// Sets a configuration parameter by name.
    ///
    /// See [`QuantileConfig::set_parameter`].
    pub fn set_parameter(&mut self, name: &str, value: impl Into<Scalar>) -> Result<(), Error> {
        self.config.set_parameter(name, value)
    }

    /// Requests a column set.
    ///
    /// Order statistics are univariate: only the first column of the set is
    /// used and the others are ignored with a warning. Requesting a variable
    /// twice has no effect. Returns true if the variable was added.
    pub fn add_request<I, S>(&mut self, columns: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns = columns.into_iter().map(Into::into);
        let Some(variable) = columns.next() else {
            tracing::debug!("empty request, nothing to add");
            return false;
        };
        for extra in columns {
            tracing::warn!(
                variable = variable.as_str(),
                ignored = extra.as_str(),
                "order statistics use only the first column of a request"
            );
        }

        if self.requests.contains(&variable) {
            return false;
        }
        self.requests.push(variable);
        true
    }

    /// Returns the requested variables in insertion order.
    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    /// Builds the histogram of each requested variable.
    pub fn learn(&self, data: &dyn ColumnSource) -> Report<Learned> {
        let mut report = Report::new(Learned::new());
        for variable in &self.requests {
            match data.column(variable) {
                Some(column) => report
                    .output_mut()
                    .push(variable.as_str(), ColumnHistogram::build(column)),
                None => report.record(variable, Error::column_missing(variable)),
            }
        }
        report
    }

    /// Derives the histograms and computes the quantiles of every variable.
    ///
    /// Variables with an empty histogram keep their derived histogram but get
    /// no quantiles.
    pub fn derive(&self, learned: Learned) -> Report<Model> {
        let mut report = Report::new(Model {
            histograms: Vec::with_capacity(learned.len()),
            quantiles: QuantileTable::new(&self.config),
        });

        for (variable, histogram) in learned.histograms {
            let derived = histogram.derive();
            if derived.is_empty() {
                tracing::debug!(variable = variable.as_str(), "empty histogram, no quantiles");
            } else {
                match derived.quantiles(&self.config) {
                    Ok(Some(breakpoints)) => {
                        if derived.uses_lower_fallback(&self.config).unwrap_or(false) {
                            tracing::debug!(
                                variable = variable.as_str(),
                                value_type = %derived.value_type(),
                                "no midpoint for this type, averaged steps use the lower value"
                            );
                        }
                        let pushed = report
                            .output_mut()
                            .quantiles
                            .push_column(variable.as_str(), breakpoints);
                        if let Err(err) = pushed {
                            report.record(&variable, err);
                        }
                    }
                    Ok(None) => {}
                    Err(err) => report.record(&variable, err),
                }
            }
            report.output_mut().histograms.push((variable, derived));
        }
        report
    }

    /// Tests each requested variable of `data` against its quantiles.
    ///
    /// Variables without quantiles or without observations produce no row.
    pub fn test(&self, data: &dyn ColumnSource, quantiles: &QuantileTable) -> Report<Vec<TestRow>> {
        let mut report = Report::new(Vec::new());
        for variable in &self.requests {
            let Some(breakpoints) = quantiles.column(variable) else {
                tracing::debug!(variable = variable.as_str(), "no quantiles, nothing to test");
                continue;
            };
            let Some(column) = data.column(variable) else {
                report.record(variable, Error::column_missing(variable));
                continue;
            };

            let fit = match (breakpoints, column) {
                (Column::Numeric(b), Column::Numeric(o)) => kolmogorov_smirnov(b, o),
                (Column::Text(b), Column::Text(o)) => kolmogorov_smirnov(b, o),
                (Column::Generic(b), Column::Generic(o)) => kolmogorov_smirnov(b, o),
                _ => Err(mismatched_types(breakpoints, column)),
            };
            match fit {
                Ok(Some(fit)) => report.output_mut().push(TestRow::new(variable, fit)),
                Ok(None) => {
                    tracing::debug!(variable = variable.as_str(), "empty sample, nothing to test");
                }
                Err(err) => report.record(variable, err),
            }
        }
        report
    }

    /// Assigns each row of `variable` in `data` to its quantile bucket.
    ///
    /// Returns no assessment if the variable has no quantiles.
    pub fn assess(
        &self,
        data: &dyn ColumnSource,
        quantiles: &QuantileTable,
        variable: &str,
    ) -> Report<Option<Assessment>> {
        let mut report = Report::new(None);
        let Some(breakpoints) = quantiles.column(variable) else {
            tracing::debug!(variable, "no quantiles, nothing to assess");
            return report;
        };
        let Some(column) = data.column(variable) else {
            report.record(variable, Error::column_missing(variable));
            return report;
        };

        let buckets = match (breakpoints, column) {
            (Column::Numeric(b), Column::Numeric(o)) => Quantizer::new(b).buckets(o),
            (Column::Text(b), Column::Text(o)) => Quantizer::new(b).buckets(o),
            (Column::Generic(b), Column::Generic(o)) => Quantizer::new(b).buckets(o),
            _ => {
                report.record(variable, mismatched_types(breakpoints, column));
                return report;
            }
        };
        *report.output_mut() = Some(Assessment {
            variable: variable.to_string(),
            buckets,
        });
        report
    }

    /// Assesses every requested variable that has quantiles.
    pub fn assess_all(
        &self,
        data: &dyn ColumnSource,
        quantiles: &QuantileTable,
    ) -> Report<Vec<Assessment>> {
        let mut report = Report::new(Vec::new());
        for variable in &self.requests {
            let (assessment, diagnostics) = self.assess(data, quantiles, variable).into_parts();
            report.output_mut().extend(assessment);
            report.extend(diagnostics);
        }
        report
    }
}

fn mismatched_types(breakpoints: &Column, column: &Column) -> Error {
    Error::unsupported_type(format!(
        "column type {} does not match quantile type {}",
        column.value_type(),
        breakpoints.value_type()
    ))
}
