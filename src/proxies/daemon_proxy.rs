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

use zbus::zvariant::OwnedObjectPath;
use zbus::{Result, proxy};

#[proxy(
    default_service = "org.freedesktop.PackageKit",
    interface = "org.freedesktop.PackageKit",
    default_path = "/org/freedesktop/PackageKit"
)]
pub trait PackageKit {
    /// Asks the daemon for a fresh transaction object.
    async fn create_transaction(&self) -> Result<OwnedObjectPath>;

    async fn get_transaction_list(&self) -> Result<Vec<String>>;

    /// `;`-delimited role strings the backend supports.
    async fn get_actions(&self) -> Result<String>;

    /// `;`-delimited filter strings the backend supports.
    async fn get_filters(&self) -> Result<String>;

    /// `;`-delimited group strings the backend supports.
    async fn get_groups(&self) -> Result<String>;

    /// `;`-delimited mime types the backend can install.
    async fn get_mime_types(&self) -> Result<String>;

    async fn get_backend_detail(&self) -> Result<(String, String)>;

    async fn get_network_state(&self) -> Result<String>;

    /// Seconds since the given role was last executed.
    async fn get_time_since_action(&self, action: &str) -> Result<u32>;

    async fn set_proxy(&self, http_proxy: &str, ftp_proxy: &str) -> Result<()>;

    async fn state_has_changed(&self, reason: &str) -> Result<()>;

    async fn suggest_daemon_quit(&self) -> Result<()>;

    #[zbus(property)]
    fn locked(&self) -> Result<bool>;

    #[zbus(property)]
    fn network_state(&self) -> Result<String>;

    #[zbus(signal, name = "Locked")]
    async fn lock_changed(&self, locked: bool) -> Result<()>;

    #[zbus(signal, name = "NetworkStateChanged")]
    async fn network_changed(&self, state: String) -> Result<()>;

    #[zbus(signal)]
    async fn repo_list_changed(&self) -> Result<()>;

    #[zbus(signal)]
    async fn restart_schedule(&self) -> Result<()>;

    #[zbus(signal)]
    async fn transaction_list_changed(&self, transactions: Vec<String>) -> Result<()>;
}
