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

use pkclient::{Exit, PkError, Transaction, TransactionEvent, TransactionResults};

/// Drains a transaction's events, echoing progress to stderr, and returns
/// the collected results.
pub async fn drain(tx: &mut Transaction) -> Result<TransactionResults, PkError> {
    let mut events = tx.events()?;
    let mut results = TransactionResults::default();
    while let Some(event) = events.next().await? {
        match event {
            TransactionEvent::Status(status) => eprintln!("status: {status}"),
            TransactionEvent::Progress(progress) => {
                if let Some(percentage) = progress.percentage {
                    eprintln!("progress: {percentage}%");
                }
            }
            TransactionEvent::Package(package) => results.packages.push(package),
            TransactionEvent::Details(details) => results.details.push(details),
            TransactionEvent::Files(files) => results.files.push(files),
            TransactionEvent::RepoDetail(repo) => results.repos.push(repo),
            TransactionEvent::UpdateDetail(detail) => results.update_details.push(detail),
            TransactionEvent::DistroUpgrade(upgrade) => results.distro_upgrades.push(upgrade),
            TransactionEvent::EulaRequired(eula) => {
                eprintln!(
                    "EULA required for {} from {}",
                    eula.package, eula.vendor_name
                );
                results.eulas.push(eula);
            }
            TransactionEvent::SignatureRequired(sig) => {
                eprintln!("signature required from {}", sig.repository_name);
                results.signatures.push(sig);
            }
            TransactionEvent::RequireRestart(restart) => results.restarts.push(restart),
            TransactionEvent::Message(message) => {
                eprintln!("{}: {}", message.kind, message.details);
                results.messages.push(message);
            }
            TransactionEvent::ErrorCode(error) => {
                eprintln!("error: {}: {}", error.code, error.details);
                results.error = Some(error);
            }
            TransactionEvent::Finished(finished) => {
                results.exit = finished.exit;
                results.runtime = finished.runtime;
            }
            TransactionEvent::AllowCancel(_) => {}
        }
    }
    Ok(results)
}

/// One line per reported package, for search- and update-style listings.
pub fn package_table(results: &TransactionResults) -> String {
    let mut out = String::from("| info | package | summary |\n");
    for package in &results.packages {
        out += format!("| {} | {} | {} |\n", package.info, package.id, package.summary).as_str();
    }
    out
}

/// Maps a non-success exit to an error so handlers can use `?`.
pub fn check_exit(results: &TransactionResults) -> Result<(), Box<dyn std::error::Error>> {
    if results.exit == Exit::Success {
        return Ok(());
    }
    let detail = match &results.error {
        Some(error) => format!("{}: {}", error.code, error.details),
        None => format!("transaction exited with {}", results.exit),
    };
    Err(detail.into())
}
