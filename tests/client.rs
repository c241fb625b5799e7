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

use pkclient::{Client, Exit, Filter, FilterSet, PackageId, Role};

use common::spawn_mock_daemon;

fn desktop_db(rows: &[(&str, &str)]) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    let conn = rusqlite::Connection::open(file.path()).unwrap();
    conn.execute("CREATE TABLE cache (filename TEXT, package TEXT)", [])
        .unwrap();
    for (filename, package) in rows {
        conn.execute(
            "INSERT INTO cache (filename, package) VALUES (?1, ?2)",
            [filename, package],
        )
        .unwrap();
    }
    file
}

#[tokio::test]
async fn facade_methods_return_started_transactions() {
    let bus = spawn_mock_daemon().await;
    let client = Client::with_connection(bus.client.clone(), "/nonexistent/desktop-files.db")
        .await
        .unwrap();

    let mut tx = client
        .search_name(&FilterSet::from(Filter::Newest), "gimp")
        .await
        .unwrap();
    assert_eq!(tx.role(), Some(Role::SearchName));

    let results = tx.events().unwrap().collect().await.unwrap();
    assert_eq!(results.exit, Exit::Success);
    assert_eq!(results.packages[0].id.name, "gimp");
}

#[tokio::test]
async fn singular_variants_forward_to_bulk_calls() {
    let bus = spawn_mock_daemon().await;
    let client = Client::with_connection(bus.client.clone(), "/nonexistent/desktop-files.db")
        .await
        .unwrap();

    let id = PackageId::from("hello;2.12;x86_64;repo");
    let mut tx = client.install_package(&id).await.unwrap();
    assert_eq!(tx.role(), Some(Role::InstallPackages));

    let results = tx.events().unwrap().collect().await.unwrap();
    assert_eq!(results.exit, Exit::Success);
}

#[tokio::test]
async fn desktop_file_hits_turn_into_name_searches() {
    let db = desktop_db(&[(
        "/usr/share/applications/gimp.desktop",
        "gimp;2.10;x86_64;fedora",
    )]);
    let bus = spawn_mock_daemon().await;
    let client = Client::with_connection(bus.client.clone(), db.path())
        .await
        .unwrap();
    assert!(client.desktop_file_cache().is_available());

    let tx = client
        .search_from_desktop_file(&FilterSet::new(), "/usr/share/applications/gimp.desktop")
        .await
        .unwrap();
    let mut tx = tx.expect("cache hit should start a search");
    let results = tx.events().unwrap().collect().await.unwrap();
    assert_eq!(results.packages[0].id.name, "gimp");

    let miss = client
        .search_from_desktop_file(&FilterSet::new(), "/no/such.desktop")
        .await
        .unwrap();
    assert!(miss.is_none());
}

#[tokio::test]
async fn missing_cache_degrades_to_no_lookup() {
    let bus = spawn_mock_daemon().await;
    let client = Client::with_connection(bus.client.clone(), "/nonexistent/desktop-files.db")
        .await
        .unwrap();
    assert!(!client.desktop_file_cache().is_available());

    let result = client
        .search_from_desktop_file(&FilterSet::new(), "/x.desktop")
        .await
        .unwrap();
    assert!(result.is_none());
}
