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

use pkclient::enums::{Filter, WireEnum};
use pkclient::{Client, FilterSet};

use crate::render;

/// Turns `--filter` arguments into a [`FilterSet`].
pub fn parse_filters(raw: &[String]) -> Result<FilterSet, Box<dyn std::error::Error>> {
    let mut filters = FilterSet::new();
    for token in raw {
        filters.insert(Filter::from_wire(token)?);
    }
    Ok(filters)
}

/// Searches by name and returns an ascii table of the matches.
pub async fn search_handler(
    client: &Client,
    filters: &FilterSet,
    query: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut tx = client.search_name(filters, query).await?;
    let results = render::drain(&mut tx).await?;
    render::check_exit(&results)?;
    Ok(render::package_table(&results))
}
