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

//! The learn, derive, test and assess phases over named columns.
//!
//! [`OrderStatistics`] keeps the configuration and the list of requested
//! variables, and runs each phase on every variable independently. Phases
//! never fail as a whole: each returns a [`Report`] whose output holds what
//! could be computed, and whose [`Diagnostic`]s name the variables that were
//! skipped and why.
//!
//! Skipped input (a missing column, mismatched types) is logged with
//! `tracing` at warn level, inconsistent models at error level. Empty input
//! and missing quantiles are not reported and only logged at debug level.

mod pipeline;
mod report;

pub use self::pipeline::ASSESSMENT_NAME;
pub use self::pipeline::Assessment;
pub use self::pipeline::Learned;
pub use self::pipeline::Model;
pub use self::pipeline::OrderStatistics;
pub use self::pipeline::TestRow;
pub use self::report::Diagnostic;
pub use self::report::Report;
