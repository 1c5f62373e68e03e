//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types and results for the Rangeset library.
//!
//! Container operations never fail. Errors only arise when building a [`Range`](crate::Range) from
//! caller supplied bounds and at the text front end in [`menu`](crate::menu).

use std::num::ParseIntError;
use thiserror::Error;

/// A specialized Result type for Rangeset operations.
pub type RangesetResult<T> = Result<T, RangesetError>;

/// Errors that can occur during Rangeset operations.
#[derive(Debug, Error)]
pub enum RangesetError {
    /// The lower bound of a range is greater than its upper bound.
    #[error("Range start {start} is greater than end {end}")]
    InvalidBounds {
        /// Requested lower bound.
        start: i32,
        /// Requested upper bound.
        end: i32,
    },
    /// A token could not be parsed as an integer.
    #[error("'{input}' is not a valid integer")]
    InvalidInteger {
        /// The rejected token, trimmed.
        input: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// A menu choice did not name a known command.
    #[error("'{0}' is not a known command")]
    UnknownCommand(String),
    /// Reading input or writing output failed.
    #[error("I/O failure on the menu session")]
    Io(#[from] std::io::Error),
}
