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

//! Well-known PackageKit names and paths.

/// Bus name of the PackageKit system service.
pub const PK_SERVICE: &str = "org.freedesktop.PackageKit";

/// Object path of the root daemon object.
pub const PK_PATH: &str = "/org/freedesktop/PackageKit";

/// Interface implemented by every transaction object.
pub const PK_TRANSACTION_INTERFACE: &str = "org.freedesktop.PackageKit.Transaction";

/// Read-only SQLite database mapping desktop-entry filenames to the owning
/// package, maintained by the daemon.
pub const DESKTOP_FILES_DB: &str = "/var/lib/PackageKit/desktop-files.db";

/// Sentinel the daemon sends in `ProgressChanged` when a percentage is not
/// known.
pub const PERCENTAGE_INVALID: u32 = 101;
