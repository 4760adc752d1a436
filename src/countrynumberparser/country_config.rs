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


use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::regexp_cache::{InvalidRegexError, RegexCache};

use super::{
    helper_constants::{
        DEFAULT_ENCLOSURES, DEFAULT_SEPARATORS, GERMAN_AREA_CODE_LENGTHS,
        GERMAN_COUNTRY_CALLING_CODE, GERMAN_MAX_EXTENSION_LENGTH, GERMAN_TRUNK_PREFIX,
        REGEX_CACHE_CAPACITY,
    },
    Country, PrefixDictionary,
};

/// Patterns are shared between all parsers with the same separators and
/// enclosures.
static REGEX_CACHE: LazyLock<RegexCache> = LazyLock::new(|| {
    RegexCache::with_capacity(REGEX_CACHE_CAPACITY)
});

/// Everything that differs between countries sharing one parsing strategy.
#[derive(Debug, Clone)]
pub struct CountryConfig {
    /// Country calling code written into every parsed number, e.g. 49.
    pub country_calling_code: i32,

    /// Valid area code lengths in ascending order. The shortest length whose
    /// leading substring is in `dictionary` wins.
    pub area_code_lengths: &'static [usize],

    /// Prefix dialled before the area code inside the country. Stripped once
    /// if present.
    pub trunk_prefix: &'static str,

    /// A trailing digit group longer than this is never taken as an
    /// extension.
    pub max_extension_length: usize,

    pub separators: &'static [char],

    /// `(opening, closing)` character pairs.
    pub enclosures: &'static [(char, char)],

    pub dictionary: &'static PrefixDictionary,
}

impl CountryConfig {
    pub fn for_country(country: Country) -> Self {
        match country {
            Country::Germany => Self {
                country_calling_code: GERMAN_COUNTRY_CALLING_CODE,
                area_code_lengths: GERMAN_AREA_CODE_LENGTHS,
                trunk_prefix: GERMAN_TRUNK_PREFIX,
                max_extension_length: GERMAN_MAX_EXTENSION_LENGTH,
                separators: DEFAULT_SEPARATORS,
                enclosures: DEFAULT_ENCLOSURES,
                dictionary: PrefixDictionary::for_country(country),
            },
        }
    }

    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Closing character for `opening`, if `opening` starts an enclosure.
    pub fn closing_for(&self, opening: char) -> Option<char> {
        self.enclosures
            .iter()
            .find(| (open, _) | *open == opening)
            .map(| (_, close) | *close)
    }

    /// Single separator character, e.g. `[\-/ ]`.
    pub fn separator_pattern(&self) -> String {
        let mut pattern = String::with_capacity(2 + self.separators.len() * 2);
        pattern.push('[');
        for separator in self.separators {
            pattern.push_str(&regex::escape(separator.encode_utf8(&mut [0; 4])));
        }
        pattern.push(']');
        pattern
    }

    /// One alternative per enclosure pair, each with exactly one capturing
    /// group around the enclosed content, e.g. `\(([^\)]*)\)|\[([^\]]*)\]`.
    pub fn enclosure_pattern(&self) -> String {
        self.enclosures
            .iter()
            .map(| (open, close) | {
                let open = regex::escape(open.encode_utf8(&mut [0; 4]));
                let close = regex::escape(close.encode_utf8(&mut [0; 4]));
                fast_cat::concat_str!(&open, "([^", &close, "]*)", &close)
            })
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Compiles (or fetches from the shared cache) the patterns of this
    /// configuration.
    pub fn compile_patterns(&self) -> Result<CompiledPatterns, InvalidRegexError> {
        Ok(CompiledPatterns {
            separator: REGEX_CACHE.get_regex(&self.separator_pattern())?,
            enclosure: REGEX_CACHE.get_regex(&self.enclosure_pattern())?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    pub separator: Arc<Regex>,
    pub enclosure: Arc<Regex>,
}
