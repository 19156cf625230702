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

use crate::error::Error;
use crate::error::ErrorKind;

/// A problem with one variable, reported instead of failing the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    variable: Option<String>,
    kind: ErrorKind,
    message: String,
}

impl Diagnostic {
    fn from_error(variable: Option<&str>, err: &Error) -> Self {
        Self {
            variable: variable.map(str::to_string),
            kind: err.kind(),
            message: err.message().to_string(),
        }
    }

    /// Returns the variable the diagnostic is about, if any.
    pub fn variable(&self) -> Option<&str> {
        self.variable.as_deref()
    }

    /// Returns the kind of the underlying error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message of the underlying error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true for consistency errors, false for skipped input.
    pub fn is_error(&self) -> bool {
        !self.kind.is_input_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.variable {
            Some(variable) => write!(f, "{} ({variable}): {}", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

/// The output of one pipeline phase together with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<T> {
    output: T,
    diagnostics: Vec<Diagnostic>,
}

impl<T> Report<T> {
    pub(crate) fn new(output: T) -> Self {
        Self {
            output,
            diagnostics: Vec::new(),
        }
    }

    /// Logs an error about a variable and keeps it as a diagnostic.
    ///
    /// Input errors are logged as warnings, consistency errors as errors.
    pub(crate) fn record(&mut self, variable: &str, err: Error) {
        if err.kind().is_input_error() {
            tracing::warn!(variable, "{err}. Skipping it.");
        } else {
            tracing::error!(variable, "{err}");
        }
        self.diagnostics
            .push(Diagnostic::from_error(Some(variable), &err));
    }

    /// Appends diagnostics that were already logged.
    pub(crate) fn extend(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub(crate) fn output_mut(&mut self) -> &mut T {
        &mut self.output
    }

    /// Returns the output.
    pub fn output(&self) -> &T {
        &self.output
    }

    /// Returns the diagnostics in the order they were raised.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns true if nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the diagnostics about one variable.
    pub fn diagnostics_for<'a>(&'a self, variable: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.variable() == Some(variable))
    }

    /// Consumes the report and returns the output.
    pub fn into_output(self) -> T {
        self.output
    }

    /// Consumes the report and returns the output and the diagnostics.
    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.output, self.diagnostics)
    }
}
