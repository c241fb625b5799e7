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

use std::fmt;

use crate::enums::Info;

/// The daemon's package identity tuple: `name;version;arch;data`.
///
/// `data` is the repository tag for available packages (e.g. `"fedora"`) or
/// `"installed"`. Parsing is lenient by contract: the desktop-file database
/// and old daemons hand out bare names, so missing fields become empty
/// strings rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageId {
    pub name: String,
    pub version: String,
    pub arch: String,
    pub data: String,
}

impl PackageId {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        arch: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            arch: arch.into(),
            data: data.into(),
        }
    }

    pub fn parse(id: &str) -> Self {
        let mut fields = id.splitn(4, ';');
        let mut next = || fields.next().unwrap_or("").to_string();
        Self {
            name: next(),
            version: next(),
            arch: next(),
            data: next(),
        }
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{};{}", self.name, self.version, self.arch, self.data)
    }
}

impl From<&str> for PackageId {
    fn from(id: &str) -> Self {
        Self::parse(id)
    }
}

/// One package as reported by a transaction's `Package` signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub info: Info,
    pub id: PackageId,
    pub summary: String,
}

/// Encodes a package-id list the way every bulk method expects it.
pub(crate) fn wire_ids(ids: &[PackageId]) -> Vec<String> {
    ids.iter().map(PackageId::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("vim;9.1.0;x86_64;fedora", "vim", "9.1.0", "x86_64", "fedora")]
    #[case("pkg-1.0", "pkg-1.0", "", "", "")]
    #[case("bash;5.2", "bash", "5.2", "", "")]
    #[case(";;;", "", "", "", "")]
    fn parse_is_lenient(
        #[case] wire: &str,
        #[case] name: &str,
        #[case] version: &str,
        #[case] arch: &str,
        #[case] data: &str,
    ) {
        let id = PackageId::parse(wire);
        assert_eq!(id.name, name);
        assert_eq!(id.version, version);
        assert_eq!(id.arch, arch);
        assert_eq!(id.data, data);
    }

    #[test]
    fn display_reemits_the_wire_form() {
        let id = PackageId::new("vim", "9.1.0", "x86_64", "fedora");
        assert_eq!(id.to_string(), "vim;9.1.0;x86_64;fedora");
    }

    #[test]
    fn full_id_round_trips() {
        let wire = "bash;5.2;aarch64;installed";
        assert_eq!(PackageId::parse(wire).to_string(), wire);
    }
}
