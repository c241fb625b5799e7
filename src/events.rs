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

//! Typed events and the signal-message decoding behind them.
//!
//! Both handles consume one ordered signal stream per object (rather than
//! merged per-signal streams) so events surface in exactly the order the
//! daemon emitted the signals. Decoding is by member name; an unknown member
//! is skipped with a debug log so a newer daemon does not break the client,
//! but a known member with an undecodable enum payload is a hard
//! [`UnknownEnumValue`](crate::PkError::UnknownEnumValue) failure.

use log::debug;

use crate::config::PERCENTAGE_INVALID;
use crate::enums::{
    ErrorCode, Exit, Info, MessageType, NetworkState, RestartType, SignatureType, Status, WireEnum,
};
use crate::error::Result;
use crate::lifecycle::OperationError;
use crate::package::{Package, PackageId};
use crate::types::{
    Details, DistroUpgrade, EulaRequired, Files, Message, RepoDetail, RepoSignatureRequired,
    RequireRestart, UpdateDetail,
};

/// Download/processing progress (`ProgressChanged` signal). `None` means the
/// daemon does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub percentage: Option<u32>,
    pub subpercentage: Option<u32>,
    pub elapsed: u32,
    pub remaining: u32,
}

/// Terminal event of every transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finished {
    pub exit: Exit,
    pub runtime: u32,
}

/// One local event per inbound transaction signal, in daemon emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionEvent {
    Status(Status),
    Progress(Progress),
    AllowCancel(bool),
    Package(Package),
    Details(Details),
    Files(Files),
    RepoDetail(RepoDetail),
    UpdateDetail(UpdateDetail),
    DistroUpgrade(DistroUpgrade),
    EulaRequired(EulaRequired),
    SignatureRequired(RepoSignatureRequired),
    ErrorCode(OperationError),
    RequireRestart(RequireRestart),
    Message(Message),
    Finished(Finished),
}

/// Daemon-wide event, one per inbound daemon signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaemonEvent {
    LockChanged(bool),
    NetworkStateChanged(NetworkState),
    RepoListChanged,
    RestartSchedule,
    TransactionListChanged(Vec<String>),
}

fn progress_value(raw: u32) -> Option<u32> {
    (raw != PERCENTAGE_INVALID).then_some(raw)
}

fn file_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decodes one message from a transaction's signal stream. `Ok(None)` means
/// the member is not part of the surface this client knows.
pub(crate) fn transaction_event(msg: &zbus::Message) -> Result<Option<TransactionEvent>> {
    let header = msg.header();
    let Some(member) = header.member() else {
        return Ok(None);
    };
    let body = msg.body();
    let event = match member.as_str() {
        "StatusChanged" => {
            let status: String = body.deserialize()?;
            TransactionEvent::Status(Status::from_wire(&status)?)
        }
        "ProgressChanged" => {
            let (percentage, subpercentage, elapsed, remaining): (u32, u32, u32, u32) =
                body.deserialize()?;
            TransactionEvent::Progress(Progress {
                percentage: progress_value(percentage),
                subpercentage: progress_value(subpercentage),
                elapsed,
                remaining,
            })
        }
        "AllowCancel" => TransactionEvent::AllowCancel(body.deserialize()?),
        "Package" => {
            let (info, package_id, summary): (String, String, String) = body.deserialize()?;
            TransactionEvent::Package(Package {
                info: Info::from_wire(&info)?,
                id: PackageId::parse(&package_id),
                summary,
            })
        }
        "Details" => {
            let (package_id, license, group, detail, url, size): (
                String,
                String,
                String,
                String,
                String,
                u64,
            ) = body.deserialize()?;
            TransactionEvent::Details(Details {
                package: PackageId::parse(&package_id),
                license,
                group: crate::enums::Group::from_wire(&group)?,
                description: detail,
                url,
                size,
            })
        }
        "Files" => {
            let (package_id, files): (String, String) = body.deserialize()?;
            TransactionEvent::Files(Files {
                package: PackageId::parse(&package_id),
                files: file_list(&files),
            })
        }
        "RepoDetail" => {
            let (repo_id, description, enabled): (String, String, bool) = body.deserialize()?;
            TransactionEvent::RepoDetail(RepoDetail {
                repo_id,
                description,
                enabled,
            })
        }
        "UpdateDetail" => {
            let (package_id, updates, obsoletes, vendor_url, bugzilla_url, cve_url, restart, text): (
                String,
                String,
                String,
                String,
                String,
                String,
                String,
                String,
            ) = body.deserialize()?;
            TransactionEvent::UpdateDetail(UpdateDetail {
                package: PackageId::parse(&package_id),
                updates,
                obsoletes,
                vendor_url,
                bugzilla_url,
                cve_url,
                restart: RestartType::from_wire(&restart)?,
                update_text: text,
            })
        }
        "DistroUpgrade" => {
            let (upgrade_type, name, summary): (String, String, String) = body.deserialize()?;
            TransactionEvent::DistroUpgrade(DistroUpgrade {
                upgrade_type,
                name,
                summary,
            })
        }
        "ErrorCode" => {
            let (code, details): (String, String) = body.deserialize()?;
            TransactionEvent::ErrorCode(OperationError {
                code: ErrorCode::from_wire(&code)?,
                details,
            })
        }
        "EulaRequired" => {
            let (eula_id, package_id, vendor_name, license_agreement): (
                String,
                String,
                String,
                String,
            ) = body.deserialize()?;
            TransactionEvent::EulaRequired(EulaRequired {
                eula_id,
                package: PackageId::parse(&package_id),
                vendor_name,
                license_agreement,
            })
        }
        "RepoSignatureRequired" => {
            let (package_id, repository_name, key_url, key_userid, key_id, key_fingerprint, key_timestamp, sig_type): (
                String,
                String,
                String,
                String,
                String,
                String,
                String,
                String,
            ) = body.deserialize()?;
            TransactionEvent::SignatureRequired(RepoSignatureRequired {
                package: PackageId::parse(&package_id),
                repository_name,
                key_url,
                key_userid,
                key_id,
                key_fingerprint,
                key_timestamp,
                signature_type: SignatureType::from_wire(&sig_type)?,
            })
        }
        "RequireRestart" => {
            let (restart, details): (String, String) = body.deserialize()?;
            TransactionEvent::RequireRestart(RequireRestart {
                restart: RestartType::from_wire(&restart)?,
                details,
            })
        }
        "Message" => {
            let (kind, details): (String, String) = body.deserialize()?;
            TransactionEvent::Message(Message {
                kind: MessageType::from_wire(&kind)?,
                details,
            })
        }
        "Finished" => {
            let (exit, runtime): (String, u32) = body.deserialize()?;
            TransactionEvent::Finished(Finished {
                exit: Exit::from_wire(&exit)?,
                runtime,
            })
        }
        other => {
            debug!("ignoring unknown transaction signal {other}");
            return Ok(None);
        }
    };
    Ok(Some(event))
}

/// Decodes one message from the daemon's signal stream.
pub(crate) fn daemon_event(msg: &zbus::Message) -> Result<Option<DaemonEvent>> {
    let header = msg.header();
    let Some(member) = header.member() else {
        return Ok(None);
    };
    let body = msg.body();
    let event = match member.as_str() {
        "Locked" => DaemonEvent::LockChanged(body.deserialize()?),
        "NetworkStateChanged" => {
            let state: String = body.deserialize()?;
            DaemonEvent::NetworkStateChanged(NetworkState::from_wire(&state)?)
        }
        "RepoListChanged" => DaemonEvent::RepoListChanged,
        "RestartSchedule" => DaemonEvent::RestartSchedule,
        "TransactionListChanged" => DaemonEvent::TransactionListChanged(body.deserialize()?),
        other => {
            debug!("ignoring unknown daemon signal {other}");
            return Ok(None);
        }
    };
    Ok(Some(event))
}
