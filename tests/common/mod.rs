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

//! A scripted in-process daemon, served over a peer-to-peer socket pair.
//!
//! Each role method emits the signal sequence a real backend would, before
//! its D-Bus reply goes out, so tests can assert on event ordering exactly
//! as the protocol delivers it.

// not every test binary uses every helper
#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use zbus::object_server::{ObjectServer, SignalEmitter};
use zbus::zvariant::OwnedObjectPath;
use zbus::{Connection, Guid, connection, fdo, interface};

pub const ROOT_PATH: &str = "/org/freedesktop/PackageKit";

/// Keeps both ends of the socket pair alive for the duration of a test.
pub struct MockBus {
    pub client: Connection,
    pub server: Connection,
}

pub struct MockDaemon {
    next_tid: AtomicU32,
    transactions: Mutex<Vec<String>>,
}

impl MockDaemon {
    fn new() -> Self {
        Self {
            next_tid: AtomicU32::new(1),
            transactions: Mutex::new(Vec::new()),
        }
    }
}

#[interface(name = "org.freedesktop.PackageKit")]
impl MockDaemon {
    async fn create_transaction(
        &self,
        #[zbus(object_server)] server: &ObjectServer,
    ) -> fdo::Result<OwnedObjectPath> {
        let n = self.next_tid.fetch_add(1, Ordering::SeqCst);
        let path = OwnedObjectPath::try_from(format!("/{n}_aaaaaaaa"))
            .map_err(|err| fdo::Error::Failed(err.to_string()))?;
        server
            .at(path.clone(), MockTransaction)
            .await
            .map_err(|err| fdo::Error::Failed(err.to_string()))?;
        self.transactions
            .lock()
            .expect("transaction list lock")
            .push(path.to_string());
        Ok(path)
    }

    async fn get_transaction_list(&self) -> Vec<String> {
        self.transactions
            .lock()
            .expect("transaction list lock")
            .clone()
    }

    async fn get_actions(&self) -> String {
        "install-packages;remove-packages;resolve;search-name;refresh-cache;get-updates"
            .to_string()
    }

    async fn get_filters(&self) -> String {
        "none;installed;~installed;newest".to_string()
    }

    async fn get_groups(&self) -> String {
        "internet;system".to_string()
    }

    async fn get_mime_types(&self) -> String {
        "application/x-rpm;application/x-deb".to_string()
    }

    async fn get_backend_detail(&self) -> (String, String) {
        ("scripted".to_string(), "pkclient tests".to_string())
    }

    async fn get_network_state(&self) -> String {
        "online".to_string()
    }

    async fn get_time_since_action(&self, _action: &str) -> u32 {
        120
    }

    async fn set_proxy(&self, _http_proxy: &str, _ftp_proxy: &str) {}

    async fn state_has_changed(&self, _reason: &str) {}

    async fn suggest_daemon_quit(&self) {}

    #[zbus(property)]
    async fn locked(&self) -> bool {
        false
    }

    #[zbus(property)]
    async fn network_state(&self) -> String {
        "online".to_string()
    }

    #[zbus(signal, name = "NetworkStateChanged")]
    pub async fn network_changed(emitter: &SignalEmitter<'_>, state: &str) -> zbus::Result<()>;

    #[zbus(signal)]
    pub async fn repo_list_changed(emitter: &SignalEmitter<'_>) -> zbus::Result<()>;

    #[zbus(signal)]
    pub async fn transaction_list_changed(
        emitter: &SignalEmitter<'_>,
        transactions: Vec<String>,
    ) -> zbus::Result<()>;
}

pub struct MockTransaction;

#[interface(name = "org.freedesktop.PackageKit.Transaction")]
impl MockTransaction {
    /// Scripted search: one match, echoing the filter string into the
    /// package id's data field.
    async fn search_name(
        &self,
        filter: &str,
        search: &str,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> fdo::Result<()> {
        Self::status_changed(&emitter, "wait").await?;
        Self::status_changed(&emitter, "query").await?;
        Self::progress_changed(&emitter, 50, 101, 1, 2).await?;
        Self::package(
            &emitter,
            "available",
            &format!("{search};1.0;x86_64;{filter}"),
            &format!("match for {search}"),
        )
        .await?;
        Self::status_changed(&emitter, "finished").await?;
        Self::finished(&emitter, "success", 25).await?;
        Ok(())
    }

    /// Scripted resolve: `missing` fails, anything else resolves to a 1.0
    /// package.
    async fn resolve(
        &self,
        _filter: &str,
        packages: Vec<String>,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> fdo::Result<()> {
        Self::status_changed(&emitter, "query").await?;
        for name in &packages {
            if name == "missing" {
                Self::error_code(&emitter, "package-not-found", "no such package").await?;
                Self::finished(&emitter, "failed", 5).await?;
                return Ok(());
            }
            Self::package(
                &emitter,
                "installed",
                &format!("{name};1.0;x86_64;repo"),
                name,
            )
            .await?;
        }
        Self::finished(&emitter, "success", 5).await?;
        Ok(())
    }

    async fn get_updates(
        &self,
        _filter: &str,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> fdo::Result<()> {
        Self::status_changed(&emitter, "query").await?;
        Self::package(&emitter, "security", "openssl;3.0.1;x86_64;updates", "TLS library").await?;
        Self::package(&emitter, "normal", "vim;9.1;x86_64;updates", "Vi IMproved").await?;
        Self::finished(&emitter, "success", 12).await?;
        Ok(())
    }

    /// Scripted install, with a deliberately out-of-order status in the
    /// middle of the sequence.
    async fn install_packages(
        &self,
        _package_ids: Vec<String>,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> fdo::Result<()> {
        Self::status_changed(&emitter, "wait").await?;
        Self::status_changed(&emitter, "download").await?;
        Self::progress_changed(&emitter, 30, 101, 1, 4).await?;
        Self::status_changed(&emitter, "wait").await?;
        Self::status_changed(&emitter, "install").await?;
        Self::progress_changed(&emitter, 90, 101, 3, 1).await?;
        Self::finished(&emitter, "success", 800).await?;
        Ok(())
    }

    async fn remove_packages(
        &self,
        _package_ids: Vec<String>,
        _allow_deps: bool,
        _autoremove: bool,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> fdo::Result<()> {
        Self::status_changed(&emitter, "remove").await?;
        Self::finished(&emitter, "success", 60).await?;
        Ok(())
    }

    /// Untrusted files demand a EULA and exit without installing.
    async fn install_files(
        &self,
        trusted: bool,
        files: Vec<String>,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> fdo::Result<()> {
        Self::status_changed(&emitter, "install").await?;
        if !trusted {
            let file = files.first().map(String::as_str).unwrap_or_default();
            Self::eula_required(
                &emitter,
                "vendor-eula-1",
                &format!("{file};0.1;x86_64;local"),
                "Vendor Inc",
                "terms apply",
            )
            .await?;
            Self::finished(&emitter, "eula-required", 3).await?;
            return Ok(());
        }
        Self::finished(&emitter, "success", 40).await?;
        Ok(())
    }

    async fn accept_eula(
        &self,
        _eula_id: &str,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> fdo::Result<()> {
        Self::status_changed(&emitter, "running").await?;
        Self::finished(&emitter, "success", 1).await?;
        Ok(())
    }

    async fn refresh_cache(
        &self,
        _force: bool,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> fdo::Result<()> {
        Self::status_changed(&emitter, "refresh-cache").await?;
        Self::finished(&emitter, "success", 300).await?;
        Ok(())
    }

    /// Cancellation is acknowledged through signals, like the real daemon.
    async fn cancel(&self, #[zbus(signal_emitter)] emitter: SignalEmitter<'_>) -> fdo::Result<()> {
        Self::status_changed(&emitter, "cancel").await?;
        Self::finished(&emitter, "cancelled", 7).await?;
        Ok(())
    }

    #[zbus(signal)]
    async fn status_changed(emitter: &SignalEmitter<'_>, status: &str) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn progress_changed(
        emitter: &SignalEmitter<'_>,
        percentage: u32,
        subpercentage: u32,
        elapsed: u32,
        remaining: u32,
    ) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn package(
        emitter: &SignalEmitter<'_>,
        info: &str,
        package_id: &str,
        summary: &str,
    ) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn error_code(
        emitter: &SignalEmitter<'_>,
        code: &str,
        details: &str,
    ) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn eula_required(
        emitter: &SignalEmitter<'_>,
        eula_id: &str,
        package_id: &str,
        vendor_name: &str,
        license_agreement: &str,
    ) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn finished(emitter: &SignalEmitter<'_>, exit: &str, runtime: u32) -> zbus::Result<()>;
}

/// Builds a connected daemon/client pair over a unix socket pair. The two
/// ends must be built concurrently: the p2p auth handshake only completes
/// once both peers are running.
pub async fn spawn_mock_daemon() -> MockBus {
    let (server_sock, client_sock) = tokio::net::UnixStream::pair().expect("socket pair");
    let guid = Guid::generate();

    let server = connection::Builder::unix_stream(server_sock)
        .server(guid)
        .expect("server builder")
        .p2p()
        .serve_at(ROOT_PATH, MockDaemon::new())
        .expect("serve daemon object")
        .build();
    let client = connection::Builder::unix_stream(client_sock).p2p().build();
    let (server, client) = tokio::join!(server, client);

    MockBus {
        client: client.expect("client connection"),
        server: server.expect("server connection"),
    }
}

/// A peer with nothing at the daemon's root path, for unreachable-daemon
/// tests. It still runs an object server (on an unrelated path) so root
/// calls fail with an error instead of going unanswered.
pub async fn spawn_empty_peer() -> MockBus {
    let (server_sock, client_sock) = tokio::net::UnixStream::pair().expect("socket pair");
    let guid = Guid::generate();

    let server = connection::Builder::unix_stream(server_sock)
        .server(guid)
        .expect("server builder")
        .p2p()
        .serve_at("/elsewhere", MockDaemon::new())
        .expect("serve placeholder object")
        .build();
    let client = connection::Builder::unix_stream(client_sock).p2p().build();
    let (server, client) = tokio::join!(server, client);

    MockBus {
        client: client.expect("client connection"),
        server: server.expect("server connection"),
    }
}
