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

//! The one-stop facade.
//!
//! Every operation here mints a fresh transaction, issues its role call and
//! hands the live [`Transaction`] back; the caller drains its events. The
//! singular variants forward to their bulk counterparts.

use std::path::Path;
use std::slice;

use zbus::Connection;

use crate::daemon::{Daemon, DaemonEvents};
use crate::desktop::DesktopFileCache;
use crate::enums::{Group, ProvidesType, SignatureType};
use crate::error::Result;
use crate::filters::FilterSet;
use crate::package::PackageId;
use crate::transaction::Transaction;

pub struct Client {
    daemon: Daemon,
    desktop: DesktopFileCache,
}

impl Client {
    /// Connects to the daemon on the system bus and opens the desktop-file
    /// cache at its standard path.
    pub async fn system() -> Result<Self> {
        Ok(Self {
            daemon: Daemon::system().await?,
            desktop: DesktopFileCache::system(),
        })
    }

    /// Builds a client over an explicit connection and database path. Used by
    /// tests and by callers talking to a daemon on a non-system bus.
    pub async fn with_connection<P: AsRef<Path>>(
        connection: Connection,
        desktop_db: P,
    ) -> Result<Self> {
        Ok(Self {
            daemon: Daemon::with_connection(connection).await?,
            desktop: DesktopFileCache::open(desktop_db),
        })
    }

    pub fn daemon(&self) -> &Daemon {
        &self.daemon
    }

    pub fn desktop_file_cache(&self) -> &DesktopFileCache {
        &self.desktop
    }

    /// Subscribes to daemon-wide events.
    pub async fn events(&self) -> Result<DaemonEvents> {
        self.daemon.events().await
    }

    async fn fresh(&self) -> Result<Transaction> {
        self.daemon.create_transaction().await
    }

    pub async fn accept_eula(&self, eula_id: &str) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.accept_eula(eula_id).await?;
        Ok(tx)
    }

    pub async fn download_packages(&self, packages: &[PackageId]) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.download_packages(packages).await?;
        Ok(tx)
    }

    pub async fn download_package(&self, package: &PackageId) -> Result<Transaction> {
        self.download_packages(slice::from_ref(package)).await
    }

    pub async fn get_depends(
        &self,
        filters: &FilterSet,
        packages: &[PackageId],
        recursive: bool,
    ) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.get_depends(filters, packages, recursive).await?;
        Ok(tx)
    }

    pub async fn get_details(&self, packages: &[PackageId]) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.get_details(packages).await?;
        Ok(tx)
    }

    pub async fn get_detail(&self, package: &PackageId) -> Result<Transaction> {
        self.get_details(slice::from_ref(package)).await
    }

    pub async fn get_distro_upgrades(&self) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.get_distro_upgrades().await?;
        Ok(tx)
    }

    pub async fn get_files(&self, packages: &[PackageId]) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.get_files(packages).await?;
        Ok(tx)
    }

    pub async fn get_old_transactions(&self, number: u32) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.get_old_transactions(number).await?;
        Ok(tx)
    }

    pub async fn get_packages(&self, filters: &FilterSet) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.get_packages(filters).await?;
        Ok(tx)
    }

    pub async fn get_repo_list(&self, filters: &FilterSet) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.get_repo_list(filters).await?;
        Ok(tx)
    }

    pub async fn get_requires(
        &self,
        filters: &FilterSet,
        packages: &[PackageId],
        recursive: bool,
    ) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.get_requires(filters, packages, recursive).await?;
        Ok(tx)
    }

    pub async fn get_update_detail(&self, packages: &[PackageId]) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.get_update_detail(packages).await?;
        Ok(tx)
    }

    pub async fn get_updates(&self, filters: &FilterSet) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.get_updates(filters).await?;
        Ok(tx)
    }

    pub async fn install_files(&self, trusted: bool, files: &[String]) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.install_files(trusted, files).await?;
        Ok(tx)
    }

    pub async fn install_file(&self, trusted: bool, file: &str) -> Result<Transaction> {
        let files = [file.to_string()];
        self.install_files(trusted, &files).await
    }

    pub async fn install_packages(&self, packages: &[PackageId]) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.install_packages(packages).await?;
        Ok(tx)
    }

    pub async fn install_package(&self, package: &PackageId) -> Result<Transaction> {
        self.install_packages(slice::from_ref(package)).await
    }

    pub async fn install_signature(
        &self,
        sig_type: SignatureType,
        key_id: &str,
        package: &PackageId,
    ) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.install_signature(sig_type, key_id, package).await?;
        Ok(tx)
    }

    pub async fn refresh_cache(&self, force: bool) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.refresh_cache(force).await?;
        Ok(tx)
    }

    pub async fn remove_packages(
        &self,
        packages: &[PackageId],
        allow_deps: bool,
        autoremove: bool,
    ) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.remove_packages(packages, allow_deps, autoremove).await?;
        Ok(tx)
    }

    pub async fn remove_package(
        &self,
        package: &PackageId,
        allow_deps: bool,
        autoremove: bool,
    ) -> Result<Transaction> {
        self.remove_packages(slice::from_ref(package), allow_deps, autoremove)
            .await
    }

    pub async fn repo_enable(&self, repo_id: &str, enabled: bool) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.repo_enable(repo_id, enabled).await?;
        Ok(tx)
    }

    pub async fn repo_set_data(
        &self,
        repo_id: &str,
        parameter: &str,
        value: &str,
    ) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.repo_set_data(repo_id, parameter, value).await?;
        Ok(tx)
    }

    pub async fn resolve(&self, filters: &FilterSet, packages: &[String]) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.resolve(filters, packages).await?;
        Ok(tx)
    }

    pub async fn rollback(&self, transaction_id: &str) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.rollback(transaction_id).await?;
        Ok(tx)
    }

    pub async fn search_details(&self, filters: &FilterSet, search: &str) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.search_details(filters, search).await?;
        Ok(tx)
    }

    pub async fn search_file(&self, filters: &FilterSet, search: &str) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.search_file(filters, search).await?;
        Ok(tx)
    }

    pub async fn search_group(&self, filters: &FilterSet, group: Group) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.search_group(filters, group).await?;
        Ok(tx)
    }

    pub async fn search_name(&self, filters: &FilterSet, search: &str) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.search_name(filters, search).await?;
        Ok(tx)
    }

    /// Resolves the desktop file at `path` through the local cache and, on a
    /// hit, searches for the owning package by name. `None` when the cache
    /// has no entry.
    pub async fn search_from_desktop_file(
        &self,
        filters: &FilterSet,
        path: &str,
    ) -> Result<Option<Transaction>> {
        let Some(id) = self.desktop.lookup(path) else {
            return Ok(None);
        };
        Ok(Some(self.search_name(filters, &id.name).await?))
    }

    pub async fn update_packages(&self, packages: &[PackageId]) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.update_packages(packages).await?;
        Ok(tx)
    }

    pub async fn update_package(&self, package: &PackageId) -> Result<Transaction> {
        self.update_packages(slice::from_ref(package)).await
    }

    pub async fn update_system(&self) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.update_system().await?;
        Ok(tx)
    }

    pub async fn what_provides(
        &self,
        filters: &FilterSet,
        provides: ProvidesType,
        search: &str,
    ) -> Result<Transaction> {
        let mut tx = self.fresh().await?;
        tx.what_provides(filters, provides, search).await?;
        Ok(tx)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("desktop", &self.desktop)
            .finish_non_exhaustive()
    }
}
