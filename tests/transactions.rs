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

use pkclient::{
    Daemon, ErrorCode, Exit, Filter, FilterSet, PkError, Role, Status, TransactionEvent,
};

use common::spawn_mock_daemon;

#[tokio::test]
async fn search_delivers_events_in_emission_order() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let mut tx = daemon.create_transaction().await.unwrap();
    tx.search_name(&FilterSet::from(Filter::Installed), "vim")
        .await
        .unwrap();

    let mut events = tx.events().unwrap();
    let mut seen = Vec::new();
    while let Some(event) = events.next().await.unwrap() {
        seen.push(event);
    }

    assert!(matches!(seen[0], TransactionEvent::Status(Status::Wait)));
    assert!(matches!(seen[1], TransactionEvent::Status(Status::Query)));
    let TransactionEvent::Progress(progress) = &seen[2] else {
        panic!("expected progress, got {:?}", seen[2]);
    };
    assert_eq!(progress.percentage, Some(50));
    assert_eq!(progress.subpercentage, None);
    let TransactionEvent::Package(package) = &seen[3] else {
        panic!("expected a package, got {:?}", seen[3]);
    };
    assert_eq!(package.id.name, "vim");
    assert_eq!(package.id.data, "installed");
    assert!(matches!(
        seen[4],
        TransactionEvent::Status(Status::Finished)
    ));
    assert!(matches!(seen[5], TransactionEvent::Finished(_)));
    assert_eq!(seen.len(), 6);

    let outcome = tx.outcome().unwrap();
    assert_eq!(outcome.exit, Exit::Success);
    assert_eq!(tx.percentage(), Some(50));
}

#[tokio::test]
async fn role_calls_are_one_shot() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let mut tx = daemon.create_transaction().await.unwrap();
    tx.refresh_cache(false).await.unwrap();
    assert_eq!(tx.role(), Some(Role::RefreshCache));

    let err = tx.get_updates(&FilterSet::new()).await.unwrap_err();
    assert!(matches!(
        err,
        PkError::AlreadyStarted {
            role: Role::GetUpdates,
            ..
        }
    ));
    // the transaction keeps its original role
    assert_eq!(tx.role(), Some(Role::RefreshCache));
}

#[tokio::test]
async fn second_role_call_fails_even_after_finish() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let mut tx = daemon.create_transaction().await.unwrap();
    tx.refresh_cache(true).await.unwrap();
    tx.events().unwrap().collect().await.unwrap();

    let err = tx.update_system().await.unwrap_err();
    assert!(matches!(err, PkError::AlreadyStarted { .. }));
}

#[tokio::test]
async fn event_stream_is_single_pass() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let mut tx = daemon.create_transaction().await.unwrap();
    tx.refresh_cache(false).await.unwrap();

    let _events = tx.events().unwrap();
    let err = tx.events().unwrap_err();
    assert!(matches!(err, PkError::EventsConsumed(_)));
}

#[tokio::test]
async fn collect_snapshots_a_finished_query() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let mut tx = daemon.create_transaction().await.unwrap();
    tx.get_updates(&FilterSet::new()).await.unwrap();
    let results = tx.events().unwrap().collect().await.unwrap();

    assert_eq!(results.exit, Exit::Success);
    assert_eq!(results.runtime, 12);
    assert_eq!(results.packages.len(), 2);
    assert_eq!(results.packages[0].id.name, "openssl");
    assert_eq!(results.packages[1].id.name, "vim");
    assert!(results.error.is_none());
}

#[tokio::test]
async fn regressive_status_signals_are_suppressed() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let mut tx = daemon.create_transaction().await.unwrap();
    tx.install_packages(&["hello;2.12;x86_64;repo".into()])
        .await
        .unwrap();

    let mut events = tx.events().unwrap();
    let mut statuses = Vec::new();
    while let Some(event) = events.next().await.unwrap() {
        if let TransactionEvent::Status(status) = event {
            statuses.push(status);
        }
    }

    // the daemon's mid-sequence "wait" never surfaces
    assert_eq!(
        statuses,
        vec![Status::Wait, Status::Download, Status::Install]
    );
    assert_eq!(tx.percentage(), Some(90));
}

#[tokio::test]
async fn cancellation_lands_through_signals_only() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let mut tx = daemon.create_transaction().await.unwrap();
    tx.cancel().await.unwrap();
    // nothing observed yet: cancel never updates state locally
    assert_eq!(tx.status(), Status::Unknown);
    assert!(!tx.is_terminal());

    let results = tx.events().unwrap().collect().await.unwrap();
    assert_eq!(results.exit, Exit::Cancelled);
    assert_eq!(tx.status(), Status::Cancel);
    assert!(tx.is_terminal());
}

#[tokio::test]
async fn eula_rejection_and_acceptance() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let mut tx = daemon.create_transaction().await.unwrap();
    tx.install_files(false, &["/tmp/blob.rpm".to_string()])
        .await
        .unwrap();
    let results = tx.events().unwrap().collect().await.unwrap();
    assert_eq!(results.exit, Exit::EulaRequired);
    assert_eq!(results.eulas.len(), 1);
    assert_eq!(results.eulas[0].eula_id, "vendor-eula-1");

    let mut accept = daemon.create_transaction().await.unwrap();
    accept.accept_eula(&results.eulas[0].eula_id).await.unwrap();
    let accepted = accept.events().unwrap().collect().await.unwrap();
    assert_eq!(accepted.exit, Exit::Success);

    let mut retry = daemon.create_transaction().await.unwrap();
    retry
        .install_files(true, &["/tmp/blob.rpm".to_string()])
        .await
        .unwrap();
    let retried = retry.events().unwrap().collect().await.unwrap();
    assert_eq!(retried.exit, Exit::Success);
}

#[tokio::test]
async fn operational_errors_end_up_in_the_outcome() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let mut tx = daemon.create_transaction().await.unwrap();
    tx.resolve(&FilterSet::new(), &["missing".to_string()])
        .await
        .unwrap();
    let results = tx.events().unwrap().collect().await.unwrap();

    assert_eq!(results.exit, Exit::Failed);
    let error = results.error.unwrap();
    assert_eq!(error.code, ErrorCode::PackageNotFound);

    let outcome = tx.outcome().unwrap();
    assert_eq!(outcome.error.unwrap().code, ErrorCode::PackageNotFound);
}

#[tokio::test]
async fn attached_transactions_reject_role_calls() {
    let bus = spawn_mock_daemon().await;
    let daemon = Daemon::with_connection(bus.client.clone()).await.unwrap();

    let tx = daemon.create_transaction().await.unwrap();
    let mut observer = daemon.attach_transaction(tx.tid()).await.unwrap();

    let err = observer.update_system().await.unwrap_err();
    assert!(matches!(err, PkError::AlreadyStarted { .. }));
}
