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

use pkclient::{Client, Filter, FilterSet};

use crate::install::resolve_one;
use crate::render;

/// Resolves an installed package by name and removes it.
pub async fn remove_handler(
    client: &Client,
    filters: &FilterSet,
    name: &str,
    allow_deps: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    // Only installed packages can be removed, whatever the caller filtered.
    let mut resolve_filters = filters.clone();
    resolve_filters.insert(Filter::Installed);
    let id = resolve_one(client, &resolve_filters, name).await?;

    let mut tx = client.remove_package(&id, allow_deps, false).await?;
    let results = render::drain(&mut tx).await?;
    render::check_exit(&results)?;
    Ok(format!("removed {id}"))
}
