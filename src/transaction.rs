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

//! Client-side handle for one daemon transaction.
//!
//! A [`Transaction`] wraps a single transaction object path. Its signal
//! stream is subscribed when the handle is attached, before any role call
//! can go out, so no signal is lost and daemon emission order is preserved.
//! Role-starting methods are one-shot: at most one per handle, immediately
//! after construction. The daemon owns the transaction's life; dropping the
//! handle only releases the local subscription.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::StreamExt;
use log::debug;
use zbus::Connection;
use zbus::proxy::SignalStream;
use zbus::zvariant::OwnedObjectPath;

use crate::enums::{Exit, Group, ProvidesType, Role, SignatureType, Status, WireEnum};
use crate::error::{PkError, Result};
use crate::events::{self, Finished, TransactionEvent};
use crate::filters::FilterSet;
use crate::lifecycle::{Lifecycle, Outcome};
use crate::package::{Package, PackageId, wire_ids};
use crate::proxies::TransactionProxy;
use crate::types::{
    Details, DistroUpgrade, EulaRequired, Files, Message, RepoDetail, RepoSignatureRequired,
    RequireRestart, UpdateDetail,
};

fn lock(state: &Mutex<Lifecycle>) -> MutexGuard<'_, Lifecycle> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Transaction {
    proxy: TransactionProxy<'static>,
    path: OwnedObjectPath,
    state: Arc<Mutex<Lifecycle>>,
    signals: Option<SignalStream<'static>>,
    started: bool,
}

impl Transaction {
    /// Attaches to the transaction object at `path`. `started` marks handles
    /// for transactions the daemon already runs (from the transaction list):
    /// those reject every role call.
    pub(crate) async fn attach(
        connection: &Connection,
        path: OwnedObjectPath,
        started: bool,
    ) -> Result<Self> {
        let proxy = TransactionProxy::builder(connection)
            .path(path.clone())?
            .build()
            .await?;
        // Subscribe before the caller gets a chance to issue the role call,
        // otherwise early signals would be lost.
        let signals = proxy.inner().receive_all_signals().await?;
        debug!("attached to transaction {path}");
        Ok(Self {
            proxy,
            path,
            state: Arc::new(Mutex::new(Lifecycle::new())),
            signals: Some(signals),
            started,
        })
    }

    /// Daemon-assigned transaction id (its object path).
    pub fn tid(&self) -> &str {
        self.path.as_str()
    }

    pub fn role(&self) -> Option<Role> {
        lock(&self.state).role()
    }

    /// Last status observed through the event stream. Never updated
    /// optimistically.
    pub fn status(&self) -> Status {
        lock(&self.state).status()
    }

    pub fn percentage(&self) -> Option<u32> {
        lock(&self.state).percentage()
    }

    pub fn is_terminal(&self) -> bool {
        lock(&self.state).is_terminal()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        lock(&self.state).outcome().cloned()
    }

    /// Takes the event stream. Single-pass and non-restartable: the second
    /// take fails with [`PkError::EventsConsumed`].
    pub fn events(&mut self) -> Result<TransactionEvents> {
        let stream = self
            .signals
            .take()
            .ok_or_else(|| PkError::EventsConsumed(self.path.to_string()))?;
        Ok(TransactionEvents {
            stream,
            state: Arc::clone(&self.state),
            tid: self.path.to_string(),
            done: false,
        })
    }

    /// Asks the daemon to cancel. Fire-and-forget: local state moves to
    /// `Cancel` only once the daemon's status signal says so.
    pub async fn cancel(&self) -> Result<()> {
        Ok(self.proxy.cancel().await?)
    }

    fn mark_started(&mut self, role: Role) -> Result<()> {
        if self.started {
            return Err(PkError::AlreadyStarted {
                tid: self.path.to_string(),
                role,
            });
        }
        self.started = true;
        lock(&self.state).start(role);
        Ok(())
    }

    pub async fn accept_eula(&mut self, eula_id: &str) -> Result<()> {
        self.mark_started(Role::AcceptEula)?;
        Ok(self.proxy.accept_eula(eula_id).await?)
    }

    pub async fn download_packages(&mut self, packages: &[PackageId]) -> Result<()> {
        self.mark_started(Role::DownloadPackages)?;
        Ok(self.proxy.download_packages(&wire_ids(packages)).await?)
    }

    pub async fn get_depends(
        &mut self,
        filters: &FilterSet,
        packages: &[PackageId],
        recursive: bool,
    ) -> Result<()> {
        self.mark_started(Role::GetDepends)?;
        Ok(self
            .proxy
            .get_depends(&filters.to_wire_string(), &wire_ids(packages), recursive)
            .await?)
    }

    pub async fn get_details(&mut self, packages: &[PackageId]) -> Result<()> {
        self.mark_started(Role::GetDetails)?;
        Ok(self.proxy.get_details(&wire_ids(packages)).await?)
    }

    pub async fn get_distro_upgrades(&mut self) -> Result<()> {
        self.mark_started(Role::GetDistroUpgrades)?;
        Ok(self.proxy.get_distro_upgrades().await?)
    }

    pub async fn get_files(&mut self, packages: &[PackageId]) -> Result<()> {
        self.mark_started(Role::GetFiles)?;
        Ok(self.proxy.get_files(&wire_ids(packages)).await?)
    }

    pub async fn get_old_transactions(&mut self, number: u32) -> Result<()> {
        self.mark_started(Role::GetOldTransactions)?;
        Ok(self.proxy.get_old_transactions(number).await?)
    }

    pub async fn get_packages(&mut self, filters: &FilterSet) -> Result<()> {
        self.mark_started(Role::GetPackages)?;
        Ok(self.proxy.get_packages(&filters.to_wire_string()).await?)
    }

    pub async fn get_repo_list(&mut self, filters: &FilterSet) -> Result<()> {
        self.mark_started(Role::GetRepoList)?;
        Ok(self.proxy.get_repo_list(&filters.to_wire_string()).await?)
    }

    pub async fn get_requires(
        &mut self,
        filters: &FilterSet,
        packages: &[PackageId],
        recursive: bool,
    ) -> Result<()> {
        self.mark_started(Role::GetRequires)?;
        Ok(self
            .proxy
            .get_requires(&filters.to_wire_string(), &wire_ids(packages), recursive)
            .await?)
    }

    pub async fn get_update_detail(&mut self, packages: &[PackageId]) -> Result<()> {
        self.mark_started(Role::GetUpdateDetail)?;
        Ok(self.proxy.get_update_detail(&wire_ids(packages)).await?)
    }

    pub async fn get_updates(&mut self, filters: &FilterSet) -> Result<()> {
        self.mark_started(Role::GetUpdates)?;
        Ok(self.proxy.get_updates(&filters.to_wire_string()).await?)
    }

    pub async fn install_files(&mut self, trusted: bool, files: &[String]) -> Result<()> {
        self.mark_started(Role::InstallFiles)?;
        Ok(self.proxy.install_files(trusted, files).await?)
    }

    pub async fn install_packages(&mut self, packages: &[PackageId]) -> Result<()> {
        self.mark_started(Role::InstallPackages)?;
        Ok(self.proxy.install_packages(&wire_ids(packages)).await?)
    }

    pub async fn install_signature(
        &mut self,
        sig_type: SignatureType,
        key_id: &str,
        package: &PackageId,
    ) -> Result<()> {
        self.mark_started(Role::InstallSignature)?;
        Ok(self
            .proxy
            .install_signature(sig_type.to_wire(), key_id, &package.to_string())
            .await?)
    }

    pub async fn refresh_cache(&mut self, force: bool) -> Result<()> {
        self.mark_started(Role::RefreshCache)?;
        Ok(self.proxy.refresh_cache(force).await?)
    }

    pub async fn remove_packages(
        &mut self,
        packages: &[PackageId],
        allow_deps: bool,
        autoremove: bool,
    ) -> Result<()> {
        self.mark_started(Role::RemovePackages)?;
        Ok(self
            .proxy
            .remove_packages(&wire_ids(packages), allow_deps, autoremove)
            .await?)
    }

    pub async fn repo_enable(&mut self, repo_id: &str, enabled: bool) -> Result<()> {
        self.mark_started(Role::RepoEnable)?;
        Ok(self.proxy.repo_enable(repo_id, enabled).await?)
    }

    pub async fn repo_set_data(
        &mut self,
        repo_id: &str,
        parameter: &str,
        value: &str,
    ) -> Result<()> {
        self.mark_started(Role::RepoSetData)?;
        Ok(self.proxy.repo_set_data(repo_id, parameter, value).await?)
    }

    pub async fn resolve(&mut self, filters: &FilterSet, packages: &[String]) -> Result<()> {
        self.mark_started(Role::Resolve)?;
        Ok(self
            .proxy
            .resolve(&filters.to_wire_string(), packages)
            .await?)
    }

    pub async fn rollback(&mut self, transaction_id: &str) -> Result<()> {
        self.mark_started(Role::Rollback)?;
        Ok(self.proxy.rollback(transaction_id).await?)
    }

    pub async fn search_details(&mut self, filters: &FilterSet, search: &str) -> Result<()> {
        self.mark_started(Role::SearchDetails)?;
        Ok(self
            .proxy
            .search_details(&filters.to_wire_string(), search)
            .await?)
    }

    pub async fn search_file(&mut self, filters: &FilterSet, search: &str) -> Result<()> {
        self.mark_started(Role::SearchFile)?;
        Ok(self
            .proxy
            .search_file(&filters.to_wire_string(), search)
            .await?)
    }

    pub async fn search_group(&mut self, filters: &FilterSet, group: Group) -> Result<()> {
        self.mark_started(Role::SearchGroup)?;
        Ok(self
            .proxy
            .search_group(&filters.to_wire_string(), group.to_wire())
            .await?)
    }

    pub async fn search_name(&mut self, filters: &FilterSet, search: &str) -> Result<()> {
        self.mark_started(Role::SearchName)?;
        Ok(self
            .proxy
            .search_name(&filters.to_wire_string(), search)
            .await?)
    }

    pub async fn update_packages(&mut self, packages: &[PackageId]) -> Result<()> {
        self.mark_started(Role::UpdatePackages)?;
        Ok(self.proxy.update_packages(&wire_ids(packages)).await?)
    }

    pub async fn update_system(&mut self) -> Result<()> {
        self.mark_started(Role::UpdateSystem)?;
        Ok(self.proxy.update_system().await?)
    }

    pub async fn what_provides(
        &mut self,
        filters: &FilterSet,
        provides: ProvidesType,
        search: &str,
    ) -> Result<()> {
        self.mark_started(Role::WhatProvides)?;
        Ok(self
            .proxy
            .what_provides(&filters.to_wire_string(), provides.to_wire(), search)
            .await?)
    }
}

impl std::fmt::Debug for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transaction")
            .field("tid", &self.path.as_str())
            .field("started", &self.started)
            .field("state", &*lock(&self.state))
            .finish_non_exhaustive()
    }
}

/// Lazy, single-pass stream of a transaction's events.
///
/// Each inbound result signal yields exactly one event, in emission order.
/// Status signals the lifecycle rejects (regressive, or after a terminal
/// state) are consumed silently; the stream ends after `Finished`.
#[derive(Debug)]
pub struct TransactionEvents {
    stream: SignalStream<'static>,
    state: Arc<Mutex<Lifecycle>>,
    tid: String,
    done: bool,
}

impl TransactionEvents {
    /// The next event, or `None` once the transaction finished (or the
    /// connection went away).
    pub async fn next(&mut self) -> Result<Option<TransactionEvent>> {
        if self.done {
            return Ok(None);
        }
        while let Some(msg) = self.stream.next().await {
            let Some(event) = events::transaction_event(&msg)? else {
                continue;
            };
            match &event {
                TransactionEvent::Status(status) => {
                    if !lock(&self.state).apply_status(*status) {
                        continue;
                    }
                }
                TransactionEvent::Progress(progress) => {
                    lock(&self.state).apply_progress(progress.percentage, progress.subpercentage);
                }
                TransactionEvent::ErrorCode(error) => {
                    lock(&self.state).record_error(error.code, error.details.clone());
                }
                TransactionEvent::Finished(Finished { exit, runtime }) => {
                    lock(&self.state).finish(*exit, *runtime);
                    self.done = true;
                }
                _ => {}
            }
            return Ok(Some(event));
        }
        self.done = true;
        Ok(None)
    }

    /// Drains the stream into a terminal snapshot. Fails with
    /// [`PkError::Disconnected`] if the stream ends before `Finished`.
    pub async fn collect(mut self) -> Result<TransactionResults> {
        let mut results = TransactionResults::default();
        while let Some(event) = self.next().await? {
            match event {
                TransactionEvent::Package(package) => results.packages.push(package),
                TransactionEvent::Details(details) => results.details.push(details),
                TransactionEvent::Files(files) => results.files.push(files),
                TransactionEvent::RepoDetail(repo) => results.repos.push(repo),
                TransactionEvent::UpdateDetail(detail) => results.update_details.push(detail),
                TransactionEvent::DistroUpgrade(upgrade) => results.distro_upgrades.push(upgrade),
                TransactionEvent::EulaRequired(eula) => results.eulas.push(eula),
                TransactionEvent::SignatureRequired(sig) => results.signatures.push(sig),
                TransactionEvent::RequireRestart(restart) => results.restarts.push(restart),
                TransactionEvent::Message(message) => results.messages.push(message),
                TransactionEvent::ErrorCode(error) => results.error = Some(error),
                TransactionEvent::Finished(finished) => {
                    results.exit = finished.exit;
                    results.runtime = finished.runtime;
                    return Ok(results);
                }
                TransactionEvent::Status(_)
                | TransactionEvent::Progress(_)
                | TransactionEvent::AllowCancel(_) => {}
            }
        }
        Err(PkError::Disconnected(self.tid.clone()))
    }
}

/// Everything a finished transaction reported.
#[derive(Debug, Clone)]
pub struct TransactionResults {
    pub packages: Vec<Package>,
    pub details: Vec<Details>,
    pub files: Vec<Files>,
    pub repos: Vec<RepoDetail>,
    pub update_details: Vec<UpdateDetail>,
    pub distro_upgrades: Vec<DistroUpgrade>,
    pub eulas: Vec<EulaRequired>,
    pub signatures: Vec<RepoSignatureRequired>,
    pub restarts: Vec<RequireRestart>,
    pub messages: Vec<Message>,
    pub error: Option<crate::lifecycle::OperationError>,
    pub exit: Exit,
    pub runtime: u32,
}

impl Default for TransactionResults {
    fn default() -> Self {
        Self {
            packages: Vec::new(),
            details: Vec::new(),
            files: Vec::new(),
            repos: Vec::new(),
            update_details: Vec::new(),
            distro_upgrades: Vec::new(),
            eulas: Vec::new(),
            signatures: Vec::new(),
            restarts: Vec::new(),
            messages: Vec::new(),
            error: None,
            exit: Exit::Unknown,
            runtime: 0,
        }
    }
}
