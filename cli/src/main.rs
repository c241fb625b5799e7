// This file is part of pkclient, Rust client bindings for the PackageKit daemon.
//
// Copyright 2026 The pkclient Authors
//
// SPDX-License-Identifier: LGPL-2.1-or-later
//
// pkclient is free software: you can redistribute it and/or modify it under the terms of the GNU Lesser General Public License version 2.1, as published by the Free Software Foundation.
//
// pkclient is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License along with this program.  If not, see http://www.gnu.org/licenses/.

use clap::{Parser, Subcommand, arg, command};
use log::debug;
use pkclient::Client;

mod install;
mod refresh;
mod remove;
mod render;
mod search;
mod status;
mod update;

#[derive(Parser, Debug)]
#[command(name = "pkcli")]
#[command(bin_name = "pkcli")]
struct Cli {
    #[arg(
        long = "filter",
        help = "package filter, e.g. installed, ~installed, newest; may be given multiple times"
    )]
    filter: Vec<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search packages by name
    Search { query: String },
    /// Resolve a package name to its full package id
    Resolve { name: String },
    /// Resolve a package name and install it
    Install { name: String },
    /// Resolve an installed package name and remove it
    Remove {
        name: String,
        #[arg(long, help = "also remove packages that depend on it")]
        allow_deps: bool,
    },
    /// Refresh the package metadata cache
    Refresh {
        #[arg(long, help = "refresh even if the cache is fresh")]
        force: bool,
    },
    /// List available updates
    Updates,
    /// Update one package, or the whole system when no name is given
    Update { name: Option<String> },
    /// Show daemon and backend information
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("parsed cli command with {cli:?}");

    let filters = search::parse_filters(&cli.filter)?;
    let client = Client::system().await?;
    let output = match cli.command {
        Commands::Search { query } => search::search_handler(&client, &filters, &query).await?,
        Commands::Resolve { name } => install::resolve_handler(&client, &filters, &name).await?,
        Commands::Install { name } => install::install_handler(&client, &filters, &name).await?,
        Commands::Remove { name, allow_deps } => {
            remove::remove_handler(&client, &filters, &name, allow_deps).await?
        }
        Commands::Refresh { force } => refresh::refresh_handler(&client, force).await?,
        Commands::Updates => update::updates_handler(&client, &filters).await?,
        Commands::Update { name } => {
            update::update_handler(&client, &filters, name.as_deref()).await?
        }
        Commands::Status => status::status_handler(&client).await?,
    };
    println!("{output}");
    Ok(())
}
