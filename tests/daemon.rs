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

mod common;

use std::time::Duration;

use pkclient::{Daemon, DaemonEvent, Filter, NetworkState, PkError, Role};

use common::{MockDaemon, ROOT_PATH, spawn_empty_peer, spawn_mock_daemon};

#[tokio::test]
async fn daemon_getters_decode_into_typed_sets() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let actions = daemon.actions().await.unwrap();
    assert!(actions.contains(&Role::InstallPackages));
    assert!(actions.contains(&Role::SearchName));
    assert_eq!(actions.len(), 6);

    let filters = daemon.filters().await.unwrap();
    assert!(filters.contains(Filter::NoFilter));
    assert!(filters.contains(Filter::Installed));
    assert!(filters.contains(Filter::NotInstalled));
    assert!(filters.contains(Filter::Newest));

    let mime_types = daemon.mime_types().await.unwrap();
    assert_eq!(mime_types, vec!["application/x-rpm", "application/x-deb"]);

    let backend = daemon.backend_detail().await.unwrap();
    assert_eq!(backend.name, "scripted");

    assert_eq!(daemon.network_state().await.unwrap(), NetworkState::Online);
    assert!(!daemon.locked().await.unwrap());
    assert_eq!(
        daemon.time_since_action(Role::RefreshCache).await.unwrap(),
        120
    );
}

#[tokio::test]
async fn transaction_list_tracks_created_transactions() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    assert!(daemon.transaction_list().await.unwrap().is_empty());

    let tx = daemon.create_transaction().await.unwrap();
    let list = daemon.transaction_list().await.unwrap();
    assert_eq!(list, vec![tx.tid().to_string()]);
}

#[tokio::test]
async fn daemon_events_arrive_in_emission_order() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();
    let mut events = daemon.events().await.unwrap();

    let iface = bus
        .server
        .object_server()
        .interface::<_, MockDaemon>(ROOT_PATH)
        .await
        .unwrap();
    MockDaemon::network_changed(iface.signal_emitter(), "offline")
        .await
        .unwrap();
    MockDaemon::repo_list_changed(iface.signal_emitter())
        .await
        .unwrap();
    MockDaemon::transaction_list_changed(iface.signal_emitter(), vec!["/1_aaaaaaaa".to_string()])
        .await
        .unwrap();

    assert_eq!(
        events.next().await.unwrap(),
        Some(DaemonEvent::NetworkStateChanged(NetworkState::Offline))
    );
    assert_eq!(
        events.next().await.unwrap(),
        Some(DaemonEvent::RepoListChanged)
    );
    assert_eq!(
        events.next().await.unwrap(),
        Some(DaemonEvent::TransactionListChanged(vec![
            "/1_aaaaaaaa".to_string()
        ]))
    );
}

#[tokio::test]
async fn missing_daemon_surfaces_as_unreachable() {
    let bus = spawn_empty_peer().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let err = tokio::time::timeout(Duration::from_secs(5), daemon.create_transaction())
        .await
        .expect("an unreachable daemon must fail the call, not stall it")
        .unwrap_err();
    assert!(matches!(err, PkError::DaemonUnreachable(_)));
}
