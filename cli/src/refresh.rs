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

use pkclient::Client;

use crate::render;

pub async fn refresh_handler(
    client: &Client,
    force: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut tx = client.refresh_cache(force).await?;
    let results = render::drain(&mut tx).await?;
    render::check_exit(&results)?;
    Ok(format!("cache refreshed in {}ms", results.runtime))
}
