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

//! Binary serialization format constants for quantile tables.
//!
//! All multi-byte fields are little-endian. The preamble is
//!
//! | byte  | field                                   |
//! |-------|-----------------------------------------|
//! | 0     | serial version                          |
//! | 1     | family id                               |
//! | 2     | quantile definition code                |
//! | 3     | reserved, zero                          |
//! | 4..8  | number of intervals `N`                 |
//! | 8..12 | number of columns                       |
//!
//! and is followed, for each column, by its name (u32 length and UTF-8
//! bytes), its value type tag, and `N + 1` encoded items.

/// Family ID of a serialized quantile table.
pub const ORDER_STATISTICS_FAMILY_ID: u8 = 33;

/// Current serialization version.
pub const SERIAL_VERSION: u8 = 1;

/// Size of the preamble in bytes.
pub const PREAMBLE_SIZE_BYTES: usize = 12;
