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

//! Enum/string codec for the PackageKit wire vocabulary.
//!
//! The daemon speaks lowercase-hyphenated strings (`"downloading"`,
//! `"refresh-cache"`); this module maps them to and from closed Rust enums.
//! Every family is a static `match` table, so an added variant without a wire
//! spelling is a compile error rather than a runtime surprise. Decoding a
//! string the table does not know fails with
//! [`PkError::UnknownEnumValue`](crate::PkError::UnknownEnumValue); it is
//! never silently defaulted. The one documented exception is the historical
//! `"no-filter"` spelling, which decodes to [`Filter::NoFilter`] alongside the
//! daemon's own `"none"`.

use std::collections::BTreeSet;

use crate::error::PkError;

/// Bidirectional mapping between an enum family and its wire strings.
pub trait WireEnum: Sized + Copy + 'static {
    /// Family name used in decode failures, e.g. `"Status"`.
    const FAMILY: &'static str;

    /// Every member of the family.
    const ALL: &'static [Self];

    fn to_wire(self) -> &'static str;

    fn from_wire(value: &str) -> Result<Self, PkError>;
}

/// Decodes a `;`-delimited wire string into a set, decoding each token
/// independently and unioning. Any unknown token fails the whole decode.
pub fn decode_set<T: WireEnum + Ord>(wire: &str) -> Result<BTreeSet<T>, PkError> {
    wire.split(';')
        .filter(|token| !token.is_empty())
        .map(T::from_wire)
        .collect()
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $family:literal {
            $( $variant:ident => $wire:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl WireEnum for $name {
            const FAMILY: &'static str = $family;

            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn to_wire(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            fn from_wire(value: &str) -> Result<Self, PkError> {
                match value {
                    $($wire $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(PkError::UnknownEnumValue {
                        family: $family,
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.to_wire())
            }
        }
    };
}

wire_enum! {
    /// The operation a transaction performs, fixed at transaction start.
    Role, "Role" {
        Unknown => "unknown",
        AcceptEula => "accept-eula",
        Cancel => "cancel",
        DownloadPackages => "download-packages",
        GetDepends => "get-depends",
        GetDetails => "get-details",
        GetDistroUpgrades => "get-distro-upgrades",
        GetFiles => "get-files",
        GetOldTransactions => "get-old-transactions",
        GetPackages => "get-packages",
        GetRepoList => "get-repo-list",
        GetRequires => "get-requires",
        GetUpdateDetail => "get-update-detail",
        GetUpdates => "get-updates",
        InstallFiles => "install-files",
        InstallPackages => "install-packages",
        InstallSignature => "install-signature",
        RefreshCache => "refresh-cache",
        RemovePackages => "remove-packages",
        RepoEnable => "repo-enable",
        RepoSetData => "repo-set-data",
        Resolve => "resolve",
        Rollback => "rollback",
        SearchDetails => "search-details",
        SearchFile => "search-file",
        SearchGroup => "search-group",
        SearchName => "search-name",
        UpdatePackages => "update-packages",
        UpdateSystem => "update-system",
        WhatProvides => "what-provides",
    }
}

wire_enum! {
    /// Current lifecycle stage of a transaction.
    Status, "Status" {
        Unknown => "unknown",
        Wait => "wait",
        Setup => "setup",
        Running => "running",
        Query => "query",
        Info => "info",
        Remove => "remove",
        RefreshCache => "refresh-cache",
        Download => "download",
        Install => "install",
        Update => "update",
        Cleanup => "cleanup",
        Obsolete => "obsolete",
        DepResolve => "dep-resolve",
        SigCheck => "sig-check",
        Rollback => "rollback",
        TestCommit => "test-commit",
        Commit => "commit",
        Request => "request",
        DownloadRepository => "download-repository",
        DownloadPackagelist => "download-packagelist",
        DownloadFilelist => "download-filelist",
        DownloadChangelog => "download-changelog",
        DownloadGroup => "download-group",
        DownloadUpdateinfo => "download-updateinfo",
        Finished => "finished",
        Cancel => "cancel",
    }
}

wire_enum! {
    /// Terminal outcome reported by the `Finished` signal.
    Exit, "Exit" {
        Unknown => "unknown",
        Success => "success",
        Failed => "failed",
        Cancelled => "cancelled",
        KeyRequired => "key-required",
        EulaRequired => "eula-required",
        Killed => "killed",
    }
}

wire_enum! {
    /// Qualifier the daemon attaches to each `Package` signal.
    Info, "Info" {
        Unknown => "unknown",
        Installed => "installed",
        Available => "available",
        Low => "low",
        Enhancement => "enhancement",
        Normal => "normal",
        Bugfix => "bugfix",
        Important => "important",
        Security => "security",
        Blocked => "blocked",
        Downloading => "downloading",
        Updating => "updating",
        Installing => "installing",
        Removing => "removing",
        Cleanup => "cleanup",
        Obsoleting => "obsoleting",
        Finished => "finished",
    }
}

wire_enum! {
    /// Structured operational failure carried by `ErrorCode` signals.
    ErrorCode, "ErrorCode" {
        Unknown => "unknown",
        OutOfMemory => "out-of-memory",
        NoNetwork => "no-network",
        NotSupported => "not-supported",
        InternalError => "internal-error",
        GpgFailure => "gpg-failure",
        PackageIdInvalid => "package-id-invalid",
        PackageNotInstalled => "package-not-installed",
        PackageNotFound => "package-not-found",
        PackageAlreadyInstalled => "package-already-installed",
        PackageDownloadFailed => "package-download-failed",
        GroupNotFound => "group-not-found",
        GroupListInvalid => "group-list-invalid",
        DepResolutionFailed => "dep-resolution-failed",
        FilterInvalid => "filter-invalid",
        CreateThreadFailed => "create-thread-failed",
        TransactionError => "transaction-error",
        TransactionCancelled => "transaction-cancelled",
        NoCache => "no-cache",
        RepoNotFound => "repo-not-found",
        CannotRemoveSystemPackage => "cannot-remove-system-package",
        ProcessKill => "process-kill",
        FailedInitialization => "failed-initialization",
        FailedFinalise => "failed-finalise",
        FailedConfigParsing => "failed-config-parsing",
        CannotCancel => "cannot-cancel",
        CannotGetLock => "cannot-get-lock",
        NoPackagesToUpdate => "no-packages-to-update",
        CannotWriteRepoConfig => "cannot-write-repo-config",
        LocalInstallFailed => "local-install-failed",
        BadGpgSignature => "bad-gpg-signature",
        MissingGpgSignature => "missing-gpg-signature",
        CannotInstallSourcePackage => "cannot-install-source-package",
        RepoConfigurationError => "repo-configuration-error",
        NoLicenseAgreement => "no-license-agreement",
        FileConflicts => "file-conflicts",
        RepoNotAvailable => "repo-not-available",
        InvalidPackageFile => "invalid-package-file",
        PackageInstallBlocked => "package-install-blocked",
        PackageCorrupt => "package-corrupt",
    }
}

wire_enum! {
    /// Coarse functional grouping of packages.
    Group, "Group" {
        Unknown => "unknown",
        Accessibility => "accessibility",
        Accessories => "accessories",
        AdminTools => "admin-tools",
        Communication => "communication",
        DesktopGnome => "desktop-gnome",
        DesktopKde => "desktop-kde",
        DesktopOther => "desktop-other",
        DesktopXfce => "desktop-xfce",
        Documentation => "documentation",
        Education => "education",
        Electronics => "electronics",
        Fonts => "fonts",
        Games => "games",
        Graphics => "graphics",
        Internet => "internet",
        Legacy => "legacy",
        Localization => "localization",
        Maps => "maps",
        Multimedia => "multimedia",
        Network => "network",
        Office => "office",
        Other => "other",
        PowerManagement => "power-management",
        Programming => "programming",
        Publishing => "publishing",
        Repos => "repos",
        Science => "science",
        Vendor => "vendor",
    }
}

wire_enum! {
    /// Query constraint. Combined into a [`FilterSet`](crate::FilterSet)
    /// before transmission.
    ///
    /// `"none"` is the daemon's spelling for the no-filter member;
    /// `"no-filter"` is the historical client-side alias and decodes to the
    /// same member.
    Filter, "Filter" {
        Unknown => "unknown",
        NoFilter => "none" | "no-filter",
        Installed => "installed",
        NotInstalled => "~installed" | "not-installed",
        Devel => "devel",
        NotDevel => "~devel" | "not-devel",
        Gui => "gui",
        NotGui => "~gui" | "not-gui",
        Free => "free",
        NotFree => "~free" | "not-free",
        Visible => "visible",
        NotVisible => "~visible" | "not-visible",
        Supported => "supported",
        NotSupported => "~supported" | "not-supported",
        Basename => "basename",
        NotBasename => "~basename" | "not-basename",
        Newest => "newest",
        NotNewest => "~newest" | "not-newest",
        Arch => "arch",
        NotArch => "~arch" | "not-arch",
        Source => "source",
        NotSource => "~source" | "not-source",
    }
}

wire_enum! {
    /// Daemon-wide network reachability.
    NetworkState, "NetworkState" {
        Unknown => "unknown",
        Offline => "offline",
        Online => "online",
        Wifi => "wifi",
        Mobile => "mobile",
        Wired => "wired",
    }
}

wire_enum! {
    /// Restart the daemon asks for after an update.
    RestartType, "RestartType" {
        None => "none",
        Application => "application",
        Session => "session",
        System => "system",
    }
}

wire_enum! {
    /// Kind of signing key a `RepoSignatureRequired` decision concerns.
    SignatureType, "SignatureType" {
        Unknown => "unknown",
        Gpg => "gpg",
    }
}

wire_enum! {
    /// Namespace of a `WhatProvides` query.
    ProvidesType, "ProvidesType" {
        Unknown => "unknown",
        Any => "any",
        Modalias => "modalias",
        Codec => "codec",
        Mimetype => "mimetype",
        Font => "font",
    }
}

wire_enum! {
    /// Category of an advisory `Message` signal.
    MessageType, "MessageType" {
        Unknown => "unknown",
        BrokenMirror => "broken-mirror",
        ConnectionRefused => "connection-refused",
        ParameterInvalid => "parameter-invalid",
        PriorityInvalid => "priority-invalid",
        BackendError => "backend-error",
        DaemonError => "daemon-error",
        CacheBeingRebuilt => "cache-being-rebuilt",
        UntrustedPackage => "untrusted-package",
        NewerPackageExists => "newer-package-exists",
        CouldNotFindPackage => "could-not-find-package",
        ConfigFilesChanged => "config-files-changed",
        PackageAlreadyInstalled => "package-already-installed",
    }
}
