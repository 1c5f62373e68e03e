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

//! Line oriented text menu driving a [`RangeContainer`].
//!
//! A session repeatedly reads a command line (`1`-`5` or `insert`, `remove`, `lookup`, `view`,
//! `quit`) followed, for insert, remove and lookup, by a line holding one integer. Malformed input
//! is reported to the user and never touches the container. Only I/O failures end a session with
//! an error.

use crate::container::RangeContainer;
use crate::result::{RangesetError, RangesetResult};
use log::debug;
use std::io::{BufRead, Write};
use std::str::FromStr;

const BANNER: &str = "Choose an action:
1. Insert integer
2. Remove integer
3. Lookup integer
4. View contents
5. Quit
";

/// A command accepted at the menu prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add an integer to the container.
    Insert,
    /// Remove an integer from the container.
    Remove,
    /// Report whether an integer is in the container.
    Lookup,
    /// Print the container contents.
    View,
    /// End the session.
    Quit,
}

impl Command {
    /// Verb used in the integer prompt, if the command takes an integer.
    fn verb(self) -> Option<&'static str> {
        match self {
            Command::Insert => Some("insert"),
            Command::Remove => Some("remove"),
            Command::Lookup => Some("lookup"),
            Command::View | Command::Quit => None,
        }
    }
}

impl FromStr for Command {
    type Err = RangesetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        match choice.to_ascii_lowercase().as_str() {
            "1" | "insert" => Ok(Command::Insert),
            "2" | "remove" => Ok(Command::Remove),
            "3" | "lookup" => Ok(Command::Lookup),
            "4" | "view" => Ok(Command::View),
            "5" | "quit" => Ok(Command::Quit),
            _ => Err(RangesetError::UnknownCommand(choice.to_string())),
        }
    }
}

/// Parses one integer token, ignoring surrounding whitespace.
///
/// # Examples
///
/// ```rust
/// use rangeset::menu::parse_integer;
///
/// assert_eq!(parse_integer(" -42\n").unwrap(), -42);
/// assert!(parse_integer("forty-two").is_err());
/// assert!(parse_integer("4294967296").is_err());
/// ```
pub fn parse_integer(input: &str) -> RangesetResult<i32> {
    let token = input.trim();
    token
        .parse::<i32>()
        .map_err(|source| RangesetError::InvalidInteger {
            input: token.to_string(),
            source,
        })
}

/// An interactive session over a [`RangeContainer`].
///
/// # Examples
///
/// ```rust
/// use rangeset::Menu;
/// use std::io::Cursor;
///
/// let input = Cursor::new("1\n5\n1\n6\n4\n5\n");
/// let mut output = Vec::new();
///
/// let container = {
///     let mut menu = Menu::new(input, &mut output).quiet(true);
///     menu.run().unwrap();
///     menu.into_container()
/// };
/// assert!(container.contains(6));
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("[5 - 6]"));
/// assert!(text.ends_with("Goodbye!\n"));
/// ```
pub struct Menu<R, W> {
    container: RangeContainer,
    input: R,
    output: W,
    quiet: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a session with an empty container.
    pub fn new(input: R, output: W) -> Self {
        Menu {
            container: RangeContainer::new(),
            input,
            output,
            quiet: false,
        }
    }

    /// Suppresses the banner and prompts, leaving only results on the output.
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The container driven by this session.
    pub fn container(&self) -> &RangeContainer {
        &self.container
    }

    /// Consumes the session, returning its container.
    pub fn into_container(self) -> RangeContainer {
        self.container
    }

    /// Runs commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`RangesetError::Io`] if reading input or writing output fails. Invalid commands
    /// and integers are reported on the output and do not end the session.
    pub fn run(&mut self) -> RangesetResult<()> {
        loop {
            if !self.quiet {
                write!(self.output, "{BANNER}\nEnter your choice (1/2/3/4/5): ")?;
                self.output.flush()?;
            }

            let Some(line) = self.read_line()? else {
                debug!("end of input, closing session");
                return Ok(());
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    debug!("rejected choice: {err}");
                    writeln!(
                        self.output,
                        "\nInvalid choice. Please choose 1, 2, 3, 4, or 5.\n"
                    )?;
                    continue;
                }
            };

            if !self.execute(command)? {
                return Ok(());
            }
        }
    }

    /// Executes one command. Returns false once the session should end.
    fn execute(&mut self, command: Command) -> RangesetResult<bool> {
        let n = match command.verb() {
            Some(verb) => {
                if !self.quiet {
                    write!(self.output, "Enter an integer to {verb}: ")?;
                    self.output.flush()?;
                }
                let Some(line) = self.read_line()? else {
                    return Ok(false);
                };
                match parse_integer(&line) {
                    Ok(n) => n,
                    Err(err) => {
                        debug!("rejected integer: {err}");
                        writeln!(self.output, "\nPlease enter a valid integer.\n")?;
                        return Ok(true);
                    }
                }
            }
            None => 0,
        };

        match command {
            Command::Insert => {
                self.container.insert(n);
                self.write_contents("Contents after insertion:")?;
            }
            Command::Remove => {
                if self.container.contains(n) {
                    self.container.remove(n);
                    self.write_contents("Contents after removal:")?;
                } else {
                    writeln!(self.output, "\nNumber not found.\n")?;
                }
            }
            Command::Lookup => {
                if self.container.contains(n) {
                    writeln!(self.output, "\nContainer contains: {n}\n")?;
                } else {
                    writeln!(self.output, "\nNumber not found.\n")?;
                }
            }
            Command::View => self.write_contents("Container contents:")?,
            Command::Quit => {
                writeln!(self.output, "\nGoodbye!")?;
                self.output.flush()?;
                return Ok(false);
            }
        }

        self.output.flush()?;
        Ok(true)
    }

    fn write_contents(&mut self, heading: &str) -> RangesetResult<()> {
        write!(self.output, "\n{heading}\n{}\n", self.container)?;
        Ok(())
    }

    /// Reads the next line, or `None` at end of input.
    fn read_line(&mut self) -> RangesetResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
