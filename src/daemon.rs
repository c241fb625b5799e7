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

//! Handle for the daemon's root object.
//!
//! Wraps `org.freedesktop.PackageKit` at `/org/freedesktop/PackageKit` and
//! decodes its string-listy answers into typed sets. Transactions are minted
//! here and handed out as [`Transaction`] values.

use std::collections::BTreeSet;

use futures_util::StreamExt;
use log::debug;
use zbus::Connection;
use zbus::proxy::SignalStream;
use zbus::zvariant::OwnedObjectPath;

use crate::enums::{Filter, Group, NetworkState, Role, WireEnum};
use crate::error::{PkError, Result};
use crate::events::{self, DaemonEvent};
use crate::filters::FilterSet;
use crate::proxies::PackageKitProxy;
use crate::transaction::Transaction;
use crate::types::BackendDetail;

pub struct Daemon {
    connection: Connection,
    proxy: PackageKitProxy<'static>,
}

impl Daemon {
    /// Connects to the daemon over the system bus.
    pub async fn system() -> Result<Self> {
        let connection = Connection::system()
            .await
            .map_err(PkError::DaemonUnreachable)?;
        Self::with_connection(connection).await
    }

    /// Connects over an explicit connection (a session bus, or a peer-to-peer
    /// link in tests).
    pub async fn with_connection(connection: Connection) -> Result<Self> {
        let proxy = PackageKitProxy::new(&connection).await?;
        Ok(Self { connection, proxy })
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Mints a fresh transaction and attaches to it. The handle's signal
    /// stream is live before this returns.
    pub async fn create_transaction(&self) -> Result<Transaction> {
        let path = self
            .proxy
            .create_transaction()
            .await
            .map_err(PkError::DaemonUnreachable)?;
        debug!("daemon created transaction {path}");
        Transaction::attach(&self.connection, path, false).await
    }

    /// Attaches to a transaction the daemon already runs. Role calls are
    /// rejected on the returned handle; it observes and cancels only.
    pub async fn attach_transaction(&self, tid: &str) -> Result<Transaction> {
        let path = OwnedObjectPath::try_from(tid).map_err(zbus::Error::from)?;
        Transaction::attach(&self.connection, path, true).await
    }

    /// Object paths of the currently running transactions.
    pub async fn transaction_list(&self) -> Result<Vec<String>> {
        Ok(self.proxy.get_transaction_list().await?)
    }

    /// Roles the backend supports.
    pub async fn actions(&self) -> Result<BTreeSet<Role>> {
        let raw = self.proxy.get_actions().await?;
        crate::enums::decode_set(&raw)
    }

    /// Filters the backend supports.
    pub async fn filters(&self) -> Result<FilterSet> {
        let raw = self.proxy.get_filters().await?;
        Ok(crate::enums::decode_set::<Filter>(&raw)?
            .into_iter()
            .collect())
    }

    /// Groups the backend supports.
    pub async fn groups(&self) -> Result<BTreeSet<Group>> {
        let raw = self.proxy.get_groups().await?;
        crate::enums::decode_set(&raw)
    }

    /// Mime types the backend can install.
    pub async fn mime_types(&self) -> Result<Vec<String>> {
        let raw = self.proxy.get_mime_types().await?;
        Ok(raw
            .split(';')
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect())
    }

    pub async fn backend_detail(&self) -> Result<BackendDetail> {
        let (name, author) = self.proxy.get_backend_detail().await?;
        Ok(BackendDetail { name, author })
    }

    pub async fn network_state(&self) -> Result<NetworkState> {
        let raw = self.proxy.get_network_state().await?;
        NetworkState::from_wire(&raw)
    }

    /// Whether the daemon currently holds its database lock.
    pub async fn locked(&self) -> Result<bool> {
        Ok(self.proxy.locked().await?)
    }

    /// Seconds since the given role last ran.
    pub async fn time_since_action(&self, role: Role) -> Result<u32> {
        Ok(self.proxy.get_time_since_action(role.to_wire()).await?)
    }

    pub async fn set_proxy(&self, http_proxy: &str, ftp_proxy: &str) -> Result<()> {
        Ok(self.proxy.set_proxy(http_proxy, ftp_proxy).await?)
    }

    pub async fn state_has_changed(&self, reason: &str) -> Result<()> {
        Ok(self.proxy.state_has_changed(reason).await?)
    }

    pub async fn suggest_daemon_quit(&self) -> Result<()> {
        Ok(self.proxy.suggest_daemon_quit().await?)
    }

    /// Subscribes to the daemon's own signals, in emission order.
    pub async fn events(&self) -> Result<DaemonEvents> {
        let stream = self.proxy.inner().receive_all_signals().await?;
        Ok(DaemonEvents { stream })
    }
}

impl std::fmt::Debug for Daemon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Daemon").finish_non_exhaustive()
    }
}

/// Ordered stream of daemon-wide events.
pub struct DaemonEvents {
    stream: SignalStream<'static>,
}

impl DaemonEvents {
    /// The next daemon event, or `None` once the connection goes away.
    pub async fn next(&mut self) -> Result<Option<DaemonEvent>> {
        while let Some(msg) = self.stream.next().await {
            if let Some(event) = events::daemon_event(&msg)? {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }
}
