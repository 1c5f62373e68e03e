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

//! # Rangeset
//!
//! A Rust library for tracking a sparse set of integers without storing every member. Members are
//! kept as disjoint, non-adjacent inclusive ranges, so a run such as `0, 1, 2, ..., 10` costs a
//! single `[0 - 10]` entry.
//!
//! ## Key Features
//!
//! - **Automatic Merging**: Inserting next to a range extends it, and filling the single gap
//!   between two ranges merges them
//! - **Automatic Splitting**: Removing an interior member splits its range in two
//! - **Logarithmic Operations**: Ranges live in a balanced red-black tree queried with floor and
//!   ceiling lookups
//! - **Total Operations**: Inserting a member or removing a non-member is a no-op, never an error
//! - **Text Front End**: A small interactive menu for exploring a container from a terminal
//!
//! ## Usage Examples
//!
//! ```rust
//! use rangeset::RangeContainer;
//!
//! let mut container = RangeContainer::new();
//! for i in 1..=10 {
//!     container.insert(i);
//! }
//! assert_eq!(container.list_contents(), vec!["[1 - 10]"]);
//!
//! // Removing from the edge shrinks the range
//! container.remove(1);
//! assert!(!container.contains(1));
//!
//! // Removing from the middle splits it
//! container.remove(5);
//! assert_eq!(container.list_contents(), vec!["[2 - 4]", "[6 - 10]"]);
//!
//! // Removing something that is not there changes nothing
//! container.remove(50);
//! assert_eq!(container.contents(), "[2 - 4]\n[6 - 10]\n");
//! ```
//!
//! ## Ranges
//!
//! [`Range`] is a plain `Copy` value. The container never hands out references into its storage;
//! iteration yields copies.
//!
//! ```rust
//! use rangeset::{Range, RangeContainer};
//!
//! let container: RangeContainer = [3, 4, 5, 9].into_iter().collect();
//! let ranges: Vec<Range> = container.iter().collect();
//! assert_eq!(ranges, vec![Range::new(3, 5).unwrap(), Range::point(9)]);
//! ```
//!
//! ## Error Handling
//!
//! Container operations cannot fail. Fallible calls return `RangesetResult<T>`:
//!
//! - `RangesetError::InvalidBounds`: a range was built with `start > end`
//! - `RangesetError::InvalidInteger`: menu input was not an integer
//! - `RangesetError::UnknownCommand`: menu input was not a command
//! - `RangesetError::Io`: the menu session could not read or write
//!
//! ## Thread Safety
//!
//! `RangeContainer` is `Send` and `Sync` but has no internal locking. Mutation takes `&mut self`,
//! so sharing one across threads requires an external lock such as `std::sync::Mutex`.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod container;
pub mod menu;
mod range;
mod result;
mod tree;

pub use self::container::{RangeContainer, Ranges};
pub use self::menu::{Command, Menu};
pub use self::range::Range;
pub use self::result::{RangesetError, RangesetResult};
