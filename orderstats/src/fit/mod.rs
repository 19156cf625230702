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

//! Goodness of fit of a sample to a quantile model.
//!
//! A quantile model with `N` intervals describes a distribution that puts
//! mass `1/N` between consecutive breakpoints. The test compares that step
//! function against the [`EmpiricalCdf`] of a sample, possibly a different
//! one than the model was learned from, and reports the largest vertical
//! distance `Dmn` together with the Kolmogorov-Smirnov statistic
//! `sqrt(n) * Dmn`. No p-value is computed.

mod ecdf;
mod kolmogorov;

pub use self::ecdf::CDF_SUM_TOLERANCE;
pub use self::ecdf::EmpiricalCdf;
pub use self::kolmogorov::FitResult;
pub use self::kolmogorov::kolmogorov_smirnov;
