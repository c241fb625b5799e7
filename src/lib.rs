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

//! Client bindings for the PackageKit daemon.
//!
//! PackageKit performs every operation inside a transaction: the client asks
//! the daemon's root object for a fresh transaction object, issues exactly
//! one role call on it, then watches its signals until `Finished`. This
//! crate wraps that protocol: [`Client`] is the facade, [`Daemon`] the root
//! object, [`Transaction`] one transaction with its ordered event stream,
//! and [`DesktopFileCache`] the local desktop-file to package database.
//!
//! ```no_run
//! use pkclient::{Client, FilterSet, Filter};
//!
//! # async fn run() -> pkclient::Result<()> {
//! let client = Client::system().await?;
//! let mut tx = client
//!     .search_name(&FilterSet::from(Filter::Installed), "vim")
//!     .await?;
//! let results = tx.events()?.collect().await?;
//! for package in &results.packages {
//!     println!("{} - {}", package.id, package.summary);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod daemon;
pub mod desktop;
pub mod enums;
pub mod error;
pub mod events;
pub mod filters;
pub mod lifecycle;
pub mod package;
pub mod proxies;
pub mod transaction;
pub mod types;

pub use client::Client;
pub use daemon::{Daemon, DaemonEvents};
pub use desktop::DesktopFileCache;
pub use enums::{
    ErrorCode, Exit, Filter, Group, Info, MessageType, NetworkState, ProvidesType, RestartType,
    Role, SignatureType, Status, WireEnum,
};
pub use error::{PkError, Result};
pub use events::{DaemonEvent, Finished, Progress, TransactionEvent};
pub use filters::FilterSet;
pub use lifecycle::{Lifecycle, OperationError, Outcome};
pub use package::{Package, PackageId};
pub use transaction::{Transaction, TransactionEvents, TransactionResults};
pub use types::{
    BackendDetail, Details, DistroUpgrade, EulaRequired, Files, Message, RepoDetail,
    RepoSignatureRequired, RequireRestart, UpdateDetail,
};
