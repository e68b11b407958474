//! Fixed tables of analysis styles (investors, valuation models).
//!
//! A registry is built once at startup from a `'static` table and only read
//! afterwards. Unknown keys resolve to the default entry instead of failing.

use anyhow::ensure;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// Display name, e.g. "Warren Buffett".
    pub name: &'static str,
    /// Investing style or model focus, e.g. "Value Investing".
    pub focus: &'static str,
    /// Metrics scored by this style, in presentation order.
    pub metrics: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub key: &'static str,
    pub descriptor: StyleDescriptor,
}

/// How a selector was turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The caller asked for a known key.
    Requested,
    /// The caller did not pick one.
    Defaulted,
    /// The caller asked for a key we don't have; the default was used.
    Unrecognized(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub key: &'static str,
    pub descriptor: &'static StyleDescriptor,
    pub selection: Selection,
}

impl Resolution {
    pub fn fell_back(&self) -> bool {
        matches!(self.selection, Selection::Unrecognized(_))
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    entries: &'static [RegistryEntry],
    default_index: usize,
}

impl Registry {
    pub fn new(entries: &'static [RegistryEntry], default_key: &str) -> anyhow::Result<Self> {
        let mut seen = BTreeSet::new();
        for entry in entries {
            ensure!(!entry.key.trim().is_empty(), "registry key must be non-empty");
            ensure!(seen.insert(entry.key), "duplicate registry key: {}", entry.key);
            ensure!(
                !entry.descriptor.metrics.is_empty(),
                "registry entry {} has no metrics",
                entry.key
            );
        }

        let default_index = entries
            .iter()
            .position(|e| e.key == default_key)
            .ok_or_else(|| anyhow::anyhow!("default registry key {default_key} is not registered"))?;

        Ok(Self {
            entries,
            default_index,
        })
    }

    pub fn entries(&self) -> &'static [RegistryEntry] {
        self.entries
    }

    pub fn default_key(&self) -> &'static str {
        self.entries[self.default_index].key
    }

    pub fn default_descriptor(&self) -> &'static StyleDescriptor {
        let entries: &'static [RegistryEntry] = self.entries;
        &entries[self.default_index].descriptor
    }

    /// Strict lookup.
    pub fn get(&self, key: &str) -> Option<&'static StyleDescriptor> {
        let entries: &'static [RegistryEntry] = self.entries;
        entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.descriptor)
    }

    /// Lookup that never fails: unknown keys get the default descriptor.
    pub fn lookup(&self, key: &str) -> &'static StyleDescriptor {
        self.resolve(Some(key)).descriptor
    }

    pub fn resolve(&self, key: Option<&str>) -> Resolution {
        let entries: &'static [RegistryEntry] = self.entries;
        let default = &entries[self.default_index];

        let Some(key) = key else {
            return Resolution {
                key: default.key,
                descriptor: &default.descriptor,
                selection: Selection::Defaulted,
            };
        };

        match entries.iter().find(|e| e.key == key) {
            Some(entry) => Resolution {
                key: entry.key,
                descriptor: &entry.descriptor,
                selection: Selection::Requested,
            },
            None => Resolution {
                key: default.key,
                descriptor: &default.descriptor,
                selection: Selection::Unrecognized(key.to_string()),
            },
        }
    }
}
