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

//! The transaction state machine.
//!
//! Pure and I/O-free: transitions are driven exclusively by status signals
//! the daemon delivers, never inferred locally. The lifecycle is
//! `Unknown -> Wait -> <active phases> -> Finished | Cancel`; the observed
//! status sequence is non-decreasing against that ordering, and the two
//! terminal states absorb every later signal.

use log::debug;

use crate::enums::{ErrorCode, Exit, Role, Status};

impl Status {
    /// Position in the lifecycle ordering. Active phases share a rank; the
    /// daemon is free to hop between them.
    pub fn rank(self) -> u8 {
        match self {
            Status::Unknown => 0,
            Status::Wait => 1,
            Status::Finished | Status::Cancel => 3,
            _ => 2,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Finished | Status::Cancel)
    }
}

/// Terminal outcome of a transaction, with the pending operational error (if
/// any) bundled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub exit: Exit,
    /// Wall-clock runtime in milliseconds, as reported by the daemon.
    pub runtime: u32,
    pub error: Option<OperationError>,
}

/// Daemon-reported operational failure (`ErrorCode` signal payload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationError {
    pub code: ErrorCode,
    pub details: String,
}

/// Tracked state of one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    role: Option<Role>,
    status: Status,
    percentage: Option<u32>,
    subpercentage: Option<u32>,
    error: Option<OperationError>,
    outcome: Option<Outcome>,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            role: None,
            status: Status::Unknown,
            percentage: None,
            subpercentage: None,
            error: None,
            outcome: None,
        }
    }

    /// Records the role issued on this transaction. Called once, by the
    /// role-starting method.
    pub fn start(&mut self, role: Role) {
        self.role = Some(role);
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn percentage(&self) -> Option<u32> {
        self.percentage
    }

    pub fn subpercentage(&self) -> Option<u32> {
        self.subpercentage
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some() || self.status.is_terminal()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Applies a `StatusChanged` signal. Returns whether the transition was
    /// accepted: terminal states absorb everything, and a status earlier in
    /// the lifecycle than the current one is dropped.
    pub fn apply_status(&mut self, status: Status) -> bool {
        if self.is_terminal() {
            debug!("dropping status {status} for a terminal transaction");
            return false;
        }
        if status.rank() < self.status.rank() {
            debug!(
                "dropping regressive status {status} (current: {})",
                self.status
            );
            return false;
        }
        self.status = status;
        true
    }

    /// Applies a `ProgressChanged` signal. The overall percentage only moves
    /// forward; the subpercentage tracks the current subtask and restarts
    /// with each one. The daemon's unknown sentinel arrives here as `None`
    /// and leaves the last known value in place.
    pub fn apply_progress(&mut self, percentage: Option<u32>, subpercentage: Option<u32>) {
        if self.is_terminal() {
            return;
        }
        if let Some(value) = percentage
            && self.percentage.is_none_or(|current| value >= current)
        {
            self.percentage = Some(value);
        }
        if let Some(value) = subpercentage {
            self.subpercentage = Some(value);
        }
    }

    /// Keeps the first pending `ErrorCode` until `finish` bundles it into
    /// the outcome.
    pub fn record_error(&mut self, code: ErrorCode, details: String) {
        if self.error.is_none() {
            self.error = Some(OperationError { code, details });
        }
    }

    /// Applies the `Finished` signal, making the state terminal. A second
    /// `Finished` is a no-op.
    pub fn finish(&mut self, exit: Exit, runtime: u32) {
        if self.outcome.is_some() {
            debug!("dropping duplicate Finished({exit})");
            return;
        }
        self.status = if exit == Exit::Cancelled {
            Status::Cancel
        } else {
            Status::Finished
        };
        self.outcome = Some(Outcome {
            exit,
            runtime,
            error: self.error.clone(),
        });
    }
}
