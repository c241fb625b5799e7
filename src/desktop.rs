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

//! Desktop-file to package lookup.
//!
//! The daemon maintains a small SQLite database mapping installed `.desktop`
//! files to the package that owns them. The cache is best-effort: a missing
//! or unreadable database degrades to "no match" rather than failing the
//! caller.

use std::path::Path;

use log::warn;
use rusqlite::{Connection, OpenFlags, OptionalExtension};

use crate::config::DESKTOP_FILES_DB;
use crate::package::PackageId;

pub struct DesktopFileCache {
    conn: Option<Connection>,
}

impl DesktopFileCache {
    /// Opens the daemon's database at its standard path.
    pub fn system() -> Self {
        Self::open(DESKTOP_FILES_DB)
    }

    /// Opens the database at `path`, read-only. Failure is logged once and
    /// leaves the cache empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let conn = match Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY) {
            Ok(conn) => Some(conn),
            Err(err) => {
                warn!("desktop-file cache unavailable at {}: {err}", path.display());
                None
            }
        };
        Self { conn }
    }

    /// Whether a database was opened. A `false` cache answers every lookup
    /// with `None`.
    pub fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    /// The package owning the desktop file at `path`, if the cache knows it.
    pub fn lookup(&self, path: &str) -> Option<PackageId> {
        let conn = self.conn.as_ref()?;
        let row: Option<String> = conn
            .query_row(
                "SELECT package FROM cache WHERE filename = ?1",
                [path],
                |row| row.get(0),
            )
            .optional()
            .unwrap_or_else(|err| {
                warn!("desktop-file lookup for {path} failed: {err}");
                None
            });
        row.map(|package| PackageId::parse(&package))
    }
}

impl std::fmt::Debug for DesktopFileCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopFileCache")
            .field("available", &self.is_available())
            .finish()
    }
}
