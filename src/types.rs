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

//! Immutable value records mirroring transaction result signals.

use crate::enums::{Group, MessageType, RestartType, SignatureType};
use crate::package::PackageId;

/// Extended description of one package (`Details` signal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Details {
    pub package: PackageId,
    pub license: String,
    pub group: Group,
    pub description: String,
    pub url: String,
    pub size: u64,
}

/// File list of one package (`Files` signal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Files {
    pub package: PackageId,
    pub files: Vec<String>,
}

/// One configured repository (`RepoDetail` signal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDetail {
    pub repo_id: String,
    pub description: String,
    pub enabled: bool,
}

/// Changelog detail for one pending update (`UpdateDetail` signal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDetail {
    pub package: PackageId,
    pub updates: String,
    pub obsoletes: String,
    pub vendor_url: String,
    pub bugzilla_url: String,
    pub cve_url: String,
    pub restart: RestartType,
    pub update_text: String,
}

/// One available distribution upgrade (`DistroUpgrade` signal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistroUpgrade {
    pub upgrade_type: String,
    pub name: String,
    pub summary: String,
}

/// A pending end-user-license decision (`EulaRequired` signal). Resolved by
/// an explicit `accept_eula` call, possibly on a different transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulaRequired {
    pub eula_id: String,
    pub package: PackageId,
    pub vendor_name: String,
    pub license_agreement: String,
}

/// A pending signing-key trust decision (`RepoSignatureRequired` signal).
/// Resolved by an explicit `install_signature` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSignatureRequired {
    pub package: PackageId,
    pub repository_name: String,
    pub key_url: String,
    pub key_userid: String,
    pub key_id: String,
    pub key_fingerprint: String,
    pub key_timestamp: String,
    pub signature_type: SignatureType,
}

/// Restart the daemon scheduled as a consequence of this transaction
/// (`RequireRestart` signal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequireRestart {
    pub restart: RestartType,
    pub details: String,
}

/// Advisory message from the backend (`Message` signal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageType,
    pub details: String,
}

/// Identity of the backend the daemon was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDetail {
    pub name: String,
    pub author: String,
}
