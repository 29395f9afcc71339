//! The persisted command registry.
//!
//! The store is a sectioned TOML file, one `[name]` section per registered
//! command with exactly two string keys:
//!
//! ```toml
//! [build]
//! command = "make all"
//! paths = "[/a,/b]"
//! ```
//!
//! Section order carries registry insertion order and survives load/save
//! round-trips, which keeps the completion-name list stable. The whole
//! file is read at load and rewritten in full after every mutation; two
//! concurrent invocations racing the same store file are not protected
//! against.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

use crate::errors::RegistryError;

/// One registered ad-hoc command.
///
/// `paths` is kept in its raw textual form; expansion into concrete
/// directories happens only at dispatch time (see [`crate::pathspec`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: String,
    pub command: String,
    pub paths: String,
}

/// The two keys stored under each section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Section {
    #[serde(default)]
    command: String,
    #[serde(default)]
    paths: String,
}

/// Ordered mapping of command name to entry, loaded fully into memory.
///
/// The registry is an explicit value threaded through the operation that
/// needs it (load → mutate/read → save); nothing holds it as ambient
/// process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<CommandEntry>,
}

impl Registry {
    /// Load the registry from `path`.
    ///
    /// A missing store file yields an empty registry and immediately
    /// persists an empty store, so the file always exists after the first
    /// run. An existing but unparseable file is surfaced as
    /// [`RegistryError::StoreCorrupt`] — it is never silently overwritten.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        if !path.exists() {
            let registry = Self::default();
            registry.save(path)?;
            return Ok(registry);
        }
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| RegistryError::StoreCorrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a registry from store-file text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize every entry and overwrite the store file in full.
    pub fn save(&self, path: &Path) -> Result<(), RegistryError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| RegistryError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string(self)?;
        std::fs::write(path, content).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Result<&CommandEntry, RegistryError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| RegistryError::UnknownCommand {
                name: name.to_string(),
            })
    }

    /// Insert an entry: a new name appends, an existing name is replaced
    /// in place (last-write-wins, no merge).
    pub fn insert(&mut self, entry: CommandEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the current registry verbatim to an arbitrary destination.
    pub fn export(&self, dest: &Path) -> Result<(), RegistryError> {
        self.save(dest)
    }

    /// Read a store file from an arbitrary source and merge its entries
    /// into this registry. Same-name entries replace the existing ones in
    /// place; new names append. Returns the number of entries read.
    pub fn import(&mut self, src: &Path) -> Result<usize, RegistryError> {
        let content = std::fs::read_to_string(src).map_err(|source| RegistryError::Io {
            path: src.to_path_buf(),
            source,
        })?;
        let imported = Self::parse(&content).map_err(|source| RegistryError::StoreCorrupt {
            path: src.to_path_buf(),
            source,
        })?;
        let count = imported.entries.len();
        for entry in imported.entries {
            self.insert(entry);
        }
        Ok(count)
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            let section = Section {
                command: entry.command.clone(),
                paths: entry.paths.clone(),
            };
            map.serialize_entry(&entry.name, &section)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Registry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RegistryVisitor;

        impl<'de> Visitor<'de> for RegistryVisitor {
            type Value = Registry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table of command sections")
            }

            // Sections are visited in document order, which becomes the
            // registry insertion order.
            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Registry, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, section)) = access.next_entry::<String, Section>()? {
                    entries.push(CommandEntry {
                        name,
                        command: section.command,
                        paths: section.paths,
                    });
                }
                Ok(Registry { entries })
            }
        }

        deserializer.deserialize_map(RegistryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(name: &str, command: &str, paths: &str) -> CommandEntry {
        CommandEntry {
            name: name.to_string(),
            command: command.to_string(),
            paths: paths.to_string(),
        }
    }

    #[test]
    fn load_missing_store_creates_empty_file() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("registry.toml");
        let registry = Registry::load(&store).unwrap();
        assert!(registry.is_empty());
        assert!(store.exists());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("registry.toml");

        let mut registry = Registry::default();
        registry.insert(entry("build", "make all", "[/a,/b]"));
        registry.insert(entry("lint", "eslint .", ""));
        registry.save(&store).unwrap();

        let loaded = Registry::load(&store).unwrap();
        assert_eq!(loaded, registry);
    }

    #[test]
    fn store_file_has_one_section_per_name() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("registry.toml");

        let mut registry = Registry::default();
        registry.insert(entry("build", "make all", "[/a,/b]"));
        registry.save(&store).unwrap();

        let content = std::fs::read_to_string(&store).unwrap();
        assert!(content.contains("[build]"));
        assert!(content.contains("command = \"make all\""));
        assert!(content.contains("paths = \"[/a,/b]\""));
    }

    #[test]
    fn section_order_is_insertion_order() {
        let mut registry = Registry::default();
        for name in ["zulu", "alpha", "mike"] {
            registry.insert(entry(name, "true", ""));
        }
        let serialized = toml::to_string(&registry).unwrap();
        let reloaded = Registry::parse(&serialized).unwrap();
        assert_eq!(
            reloaded.names().collect::<Vec<_>>(),
            vec!["zulu", "alpha", "mike"]
        );
    }

    #[test]
    fn get_unknown_name_fails() {
        let registry = Registry::default();
        let err = registry.get("missing").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::UnknownCommand { ref name } if name == "missing"
        ));
    }

    #[test]
    fn insert_existing_name_overwrites_in_place() {
        let mut registry = Registry::default();
        registry.insert(entry("build", "make all", "/a"));
        registry.insert(entry("test", "make check", "/a"));
        registry.insert(entry("build", "cargo build", "[/x,/y]"));

        assert_eq!(registry.len(), 2);
        let rebuilt = registry.get("build").unwrap();
        assert_eq!(rebuilt.command, "cargo build");
        assert_eq!(rebuilt.paths, "[/x,/y]");
        // Overwriting must not move the entry to the end.
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["build", "test"]
        );
    }

    #[test]
    fn corrupt_store_is_not_overwritten() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("registry.toml");
        std::fs::write(&store, "not [ a registry").unwrap();

        let err = Registry::load(&store).unwrap_err();
        assert!(matches!(err, RegistryError::StoreCorrupt { .. }));
        assert_eq!(
            std::fs::read_to_string(&store).unwrap(),
            "not [ a registry"
        );
    }

    #[test]
    fn export_then_import_round_trips_all_entries() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("backup.toml");

        let mut registry = Registry::default();
        registry.insert(entry("build", "make all", "[/a,/b]"));
        registry.insert(entry("lint", "eslint .", ""));
        registry.insert(entry("serve", "python -m http.server", "/srv"));
        registry.export(&dest).unwrap();

        let mut restored = Registry::default();
        let count = restored.import(&dest).unwrap();
        assert_eq!(count, 3);
        assert_eq!(restored, registry);
    }

    #[test]
    fn import_overwrites_same_name_and_appends_new() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("incoming.toml");

        let mut incoming = Registry::default();
        incoming.insert(entry("build", "ninja", "/new"));
        incoming.insert(entry("deploy", "make deploy", ""));
        incoming.save(&src).unwrap();

        let mut registry = Registry::default();
        registry.insert(entry("build", "make all", "/old"));
        registry.insert(entry("lint", "eslint .", ""));
        registry.import(&src).unwrap();

        assert_eq!(registry.get("build").unwrap().command, "ninja");
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["build", "lint", "deploy"]
        );
    }

    #[test]
    fn missing_section_keys_default_to_empty() {
        let registry = Registry::parse("[bare]\n").unwrap();
        let entry = registry.get("bare").unwrap();
        assert_eq!(entry.command, "");
        assert_eq!(entry.paths, "");
    }
}
