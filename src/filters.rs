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

use std::collections::BTreeSet;
use std::fmt;

use crate::enums::{Filter, WireEnum, decode_set};
use crate::error::Result;

/// A set of query constraints, encoded as one `;`-delimited string on the
/// wire. How filters combine (OR vs AND) is defined by the daemon.
///
/// An empty set encodes as `"none"`, the daemon's spelling for "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet(BTreeSet<Filter>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unfiltered query.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, filter: Filter) -> bool {
        self.0.insert(filter)
    }

    pub fn contains(&self, filter: Filter) -> bool {
        self.0.contains(&filter)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Filter> + '_ {
        self.0.iter().copied()
    }

    /// Encodes the set for transmission.
    pub fn to_wire_string(&self) -> String {
        if self.0.is_empty() {
            return Filter::NoFilter.to_wire().to_string();
        }
        self.0
            .iter()
            .map(|filter| filter.to_wire())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Decodes a daemon-provided filter string. Any unknown token fails the
    /// whole decode.
    pub fn from_wire_string(wire: &str) -> Result<Self> {
        Ok(Self(decode_set(wire)?))
    }
}

impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire_string())
    }
}

impl From<Filter> for FilterSet {
    fn from(filter: Filter) -> Self {
        let mut set = Self::new();
        set.insert(filter);
        set
    }
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Filter> for FilterSet {
    fn extend<I: IntoIterator<Item = Filter>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
