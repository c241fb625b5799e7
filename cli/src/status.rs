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

/// Daemon and backend information as an ascii table.
pub async fn status_handler(client: &Client) -> Result<String, Box<dyn std::error::Error>> {
    let daemon = client.daemon();
    let backend = daemon.backend_detail().await?;
    let network = daemon.network_state().await?;
    let locked = daemon.locked().await?;
    let actions = daemon.actions().await?;
    let running = daemon.transaction_list().await?;

    let mut out = format!(
        "---- DAEMON ----\n\
        | backend | author | network | locked |\n\
        | {} | {} | {network} | {locked} |\n",
        backend.name, backend.author
    );
    out += "\n---- SUPPORTED ROLES ----\n";
    for role in &actions {
        out += format!("{role}\n").as_str();
    }
    if !running.is_empty() {
        out += "\n---- RUNNING TRANSACTIONS ----\n";
        for tid in &running {
            out += format!("{tid}\n").as_str();
        }
    }
    Ok(out)
}
