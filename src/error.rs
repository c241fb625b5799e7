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

use crate::enums::Role;

pub type Result<T> = std::result::Result<T, PkError>;

/// Failures surfaced synchronously by this crate.
///
/// Daemon-reported operational failures (package not found, download failed,
/// ...) are not `PkError`s: they arrive as `ErrorCode` events on the
/// transaction's signal stream and are bundled into the terminal outcome once
/// `Finished` is reached.
#[derive(Debug, thiserror::Error)]
pub enum PkError {
    #[error("PkError::DaemonUnreachable: could not reach the PackageKit daemon: {0}")]
    DaemonUnreachable(#[source] zbus::Error),
    #[error("PkError::UnknownEnumValue: no {family} member for wire value {value:?}")]
    UnknownEnumValue {
        family: &'static str,
        value: String,
    },
    #[error("PkError::AlreadyStarted: transaction {tid} already issued a role, rejecting {role}")]
    AlreadyStarted { tid: String, role: Role },
    #[error("PkError::EventsConsumed: the event stream of transaction {0} was already taken")]
    EventsConsumed(String),
    #[error("PkError::Disconnected: signal stream of transaction {0} ended before Finished")]
    Disconnected(String),
    #[error("PkError::Dbus: {0}")]
    Dbus(#[from] zbus::Error),
}
