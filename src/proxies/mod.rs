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

//! DBus proxy interfaces for the PackageKit daemon.
//!
//! The proxies are generated with the `zbus` crate's `#[proxy]` macro and
//! provide type-safe, asynchronous access to the daemon's two object
//! surfaces. Payloads here are raw wire types (strings, string lists); the
//! typed layer above ([`Daemon`](crate::Daemon) and
//! [`Transaction`](crate::Transaction)) owns enum decoding.
//!
//! # DBus Service Information
//!
//! - **Service Name**: `org.freedesktop.PackageKit`
//! - **Daemon Interface**: `org.freedesktop.PackageKit` at
//!   `/org/freedesktop/PackageKit`
//! - **Transaction Interface**: `org.freedesktop.PackageKit.Transaction` at
//!   a per-transaction path handed out by `CreateTransaction`

pub mod daemon_proxy;
pub mod transaction_proxy;

pub use daemon_proxy::PackageKitProxy;
pub use transaction_proxy::TransactionProxy;
