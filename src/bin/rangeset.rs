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

//! Interactive menu over a range container, reading commands from stdin.

use anyhow::Context as _;
use clap::Parser;
use log::LevelFilter;
use rangeset::Menu;
use std::io;

/// Insert, remove and look up integers in a range container
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Suppress the menu banner and prompts, printing only results
    #[arg(short, long)]
    quiet: bool,

    /// Logging level: one of "off", "error", "warn", "info", "debug", "trace".
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock()).quiet(cli.quiet);
    menu.run().context("menu session failed")?;

    log::info!("session ended with {} ranges", menu.container().len());
    Ok(())
}
