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

use zbus::{Result, proxy};

/// One method per role, one signal per result kind. No `default_path`: each
/// transaction lives at the object path `CreateTransaction` handed out.
#[proxy(
    default_service = "org.freedesktop.PackageKit",
    interface = "org.freedesktop.PackageKit.Transaction"
)]
pub trait Transaction {
    async fn accept_eula(&self, eula_id: &str) -> Result<()>;

    async fn cancel(&self) -> Result<()>;

    async fn download_packages(&self, package_ids: &[String]) -> Result<()>;

    async fn get_depends(
        &self,
        filter: &str,
        package_ids: &[String],
        recursive: bool,
    ) -> Result<()>;

    async fn get_details(&self, package_ids: &[String]) -> Result<()>;

    async fn get_distro_upgrades(&self) -> Result<()>;

    async fn get_files(&self, package_ids: &[String]) -> Result<()>;

    async fn get_old_transactions(&self, number: u32) -> Result<()>;

    async fn get_packages(&self, filter: &str) -> Result<()>;

    async fn get_repo_list(&self, filter: &str) -> Result<()>;

    async fn get_requires(
        &self,
        filter: &str,
        package_ids: &[String],
        recursive: bool,
    ) -> Result<()>;

    async fn get_update_detail(&self, package_ids: &[String]) -> Result<()>;

    async fn get_updates(&self, filter: &str) -> Result<()>;

    async fn install_files(&self, trusted: bool, files: &[String]) -> Result<()>;

    async fn install_packages(&self, package_ids: &[String]) -> Result<()>;

    async fn install_signature(
        &self,
        sig_type: &str,
        key_id: &str,
        package_id: &str,
    ) -> Result<()>;

    async fn refresh_cache(&self, force: bool) -> Result<()>;

    async fn remove_packages(
        &self,
        package_ids: &[String],
        allow_deps: bool,
        autoremove: bool,
    ) -> Result<()>;

    async fn repo_enable(&self, repo_id: &str, enabled: bool) -> Result<()>;

    async fn repo_set_data(&self, repo_id: &str, parameter: &str, value: &str) -> Result<()>;

    async fn resolve(&self, filter: &str, packages: &[String]) -> Result<()>;

    async fn rollback(&self, transaction_id: &str) -> Result<()>;

    async fn search_details(&self, filter: &str, search: &str) -> Result<()>;

    async fn search_file(&self, filter: &str, search: &str) -> Result<()>;

    async fn search_group(&self, filter: &str, search: &str) -> Result<()>;

    async fn search_name(&self, filter: &str, search: &str) -> Result<()>;

    async fn update_packages(&self, package_ids: &[String]) -> Result<()>;

    async fn update_system(&self) -> Result<()>;

    async fn what_provides(&self, filter: &str, provides_type: &str, search: &str) -> Result<()>;

    #[zbus(signal)]
    async fn status_changed(&self, status: String) -> Result<()>;

    #[zbus(signal)]
    async fn progress_changed(
        &self,
        percentage: u32,
        subpercentage: u32,
        elapsed: u32,
        remaining: u32,
    ) -> Result<()>;

    #[zbus(signal)]
    async fn allow_cancel(&self, allow_cancel: bool) -> Result<()>;

    #[zbus(signal)]
    async fn package(&self, info: String, package_id: String, summary: String) -> Result<()>;

    #[zbus(signal)]
    async fn details(
        &self,
        package_id: String,
        license: String,
        group: String,
        detail: String,
        url: String,
        size: u64,
    ) -> Result<()>;

    #[zbus(signal)]
    async fn files(&self, package_id: String, file_list: String) -> Result<()>;

    #[zbus(signal)]
    async fn repo_detail(&self, repo_id: String, description: String, enabled: bool)
    -> Result<()>;

    #[zbus(signal)]
    async fn update_detail(
        &self,
        package_id: String,
        updates: String,
        obsoletes: String,
        vendor_url: String,
        bugzilla_url: String,
        cve_url: String,
        restart: String,
        update_text: String,
    ) -> Result<()>;

    #[zbus(signal)]
    async fn distro_upgrade(&self, upgrade_type: String, name: String, summary: String)
    -> Result<()>;

    #[zbus(signal)]
    async fn error_code(&self, code: String, details: String) -> Result<()>;

    #[zbus(signal)]
    async fn eula_required(
        &self,
        eula_id: String,
        package_id: String,
        vendor_name: String,
        license_agreement: String,
    ) -> Result<()>;

    #[zbus(signal)]
    async fn repo_signature_required(
        &self,
        package_id: String,
        repository_name: String,
        key_url: String,
        key_userid: String,
        key_id: String,
        key_fingerprint: String,
        key_timestamp: String,
        sig_type: String,
    ) -> Result<()>;

    #[zbus(signal)]
    async fn require_restart(&self, restart_type: String, details: String) -> Result<()>;

    #[zbus(signal)]
    async fn message(&self, message_type: String, details: String) -> Result<()>;

    #[zbus(signal)]
    async fn finished(&self, exit: String, runtime: u32) -> Result<()>;
}
