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

use pkclient::{Client, FilterSet};

use crate::install::resolve_one;
use crate::render;

/// Lists the updates the backend knows about.
pub async fn updates_handler(
    client: &Client,
    filters: &FilterSet,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut tx = client.get_updates(filters).await?;
    let results = render::drain(&mut tx).await?;
    render::check_exit(&results)?;
    if results.packages.is_empty() {
        return Ok("system is up to date".to_string());
    }
    Ok(render::package_table(&results))
}

/// Updates one named package, or the whole system when no name is given.
pub async fn update_handler(
    client: &Client,
    filters: &FilterSet,
    name: Option<&str>,
) -> Result<String, Box<dyn std::error::Error>> {
    let (mut tx, what) = match name {
        Some(name) => {
            let id = resolve_one(client, filters, name).await?;
            let what = id.to_string();
            (client.update_package(&id).await?, what)
        }
        None => (client.update_system().await?, "system".to_string()),
    };
    let results = render::drain(&mut tx).await?;
    render::check_exit(&results)?;
    let mut out = format!("{what} updated in {}ms", results.runtime);
    for restart in &results.restarts {
        out += format!("\nrestart required ({}): {}", restart.restart, restart.details).as_str();
    }
    Ok(out)
}
