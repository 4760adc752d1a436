// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::HashMap, sync::LazyLock};

use log::{trace, warn};

use crate::generated::DE_AREA_CODES;

use super::Country;

static GERMAN_AREA_CODES: LazyLock<PrefixDictionary> = LazyLock::new(|| {
    PrefixDictionary::from_entries(DE_AREA_CODES.iter().copied())
});

/// Read-only set of valid area code prefixes (without trunk prefix), each
/// mapped to the locality or network it belongs to.
#[derive(Debug, Clone, Default)]
pub struct PrefixDictionary {
    prefixes: HashMap<String, String>,
}

impl PrefixDictionary {
    /// Builds a dictionary from `(prefix, locality)` pairs. Later duplicates
    /// replace earlier ones.
    pub fn from_entries<I, P, L>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: Into<String>,
    {
        let prefixes: HashMap<String, String> = entries
            .into_iter()
            .map(| (prefix, locality) | (prefix.into(), locality.into()))
            .collect();
        let dictionary = Self { prefixes };
        if !dictionary.is_prefix_free() {
            // Shortest match wins, so the longer entries become unreachable.
            warn!("Prefix dictionary is not prefix-free; longer prefixes may never match");
        }
        trace!("Loaded prefix dictionary with {} entries", dictionary.len());
        dictionary
    }

    /// Built-in dictionary of the given country. Loaded on first use and
    /// shared afterwards.
    pub fn for_country(country: Country) -> &'static PrefixDictionary {
        match country {
            Country::Germany => &*GERMAN_AREA_CODES,
        }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.prefixes.contains_key(candidate)
    }

    /// Locality (or network name) registered for `prefix`.
    pub fn locality(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Returns true when no entry is a proper prefix of another entry.
    pub fn is_prefix_free(&self) -> bool {
        self.prefixes.keys().all(| prefix | {
            prefix
                .char_indices()
                .skip(1)
                .all(| (end, _) | !self.prefixes.contains_key(&prefix[..end]))
        })
    }
}
