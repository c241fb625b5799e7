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

use pkclient::{Client, Exit, FilterSet, PackageId};

use crate::render;

/// Resolves `name` to a package id, or fails with a readable message.
pub async fn resolve_one(
    client: &Client,
    filters: &FilterSet,
    name: &str,
) -> Result<PackageId, Box<dyn std::error::Error>> {
    let mut tx = client.resolve(filters, &[name.to_string()]).await?;
    let results = render::drain(&mut tx).await?;
    render::check_exit(&results)?;
    let package = results
        .packages
        .into_iter()
        .next()
        .ok_or_else(|| format!("no package matches '{name}'"))?;
    Ok(package.id)
}

pub async fn resolve_handler(
    client: &Client,
    filters: &FilterSet,
    name: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let id = resolve_one(client, filters, name).await?;
    Ok(id.to_string())
}

/// Resolves and installs one package. A pending EULA is accepted once and
/// the install retried on a fresh transaction.
pub async fn install_handler(
    client: &Client,
    filters: &FilterSet,
    name: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let id = resolve_one(client, filters, name).await?;

    let mut tx = client.install_package(&id).await?;
    let mut results = render::drain(&mut tx).await?;

    if results.exit == Exit::EulaRequired {
        for eula in &results.eulas {
            eprintln!("accepting EULA {}", eula.eula_id);
            let mut accept = client.accept_eula(&eula.eula_id).await?;
            let accepted = render::drain(&mut accept).await?;
            render::check_exit(&accepted)?;
        }
        let mut retry = client.install_package(&id).await?;
        results = render::drain(&mut retry).await?;
    }

    render::check_exit(&results)?;
    Ok(format!("installed {id}"))
}
