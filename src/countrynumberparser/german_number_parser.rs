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

use std::borrow::Cow;

use log::{debug, trace};
use regex::Captures;

use crate::{
    interfaces::{AreaCodeExtractor, ExtensionExtractor, MainNumberExtractor},
    regexp_cache::InvalidRegexError,
    string_util::{advance_cow, char_prefix_len, trim_cow},
};

use super::{
    country_config::{CompiledPatterns, CountryConfig},
    errors::{FormatErrorReason, WrongFormatError},
    helper_types::ExtractedPart,
};

/// Parsing strategy for German numbers (Ortsvorwahl, Hauptwahl, Durchwahl).
///
/// Works for every country that writes numbers the German way; all country
/// specific data lives in [`CountryConfig`].
pub struct GermanNumberParser {
    config: CountryConfig,
    patterns: CompiledPatterns,
}

impl GermanNumberParser {
    pub fn new(config: CountryConfig) -> Result<Self, InvalidRegexError> {
        let patterns = config.compile_patterns()?;
        Ok(Self { config, patterns })
    }

    /// `rest` starts with `open`. The area code is everything up to the
    /// first `close`; it's trusted and not looked up in the dictionary,
    /// but must not be empty.
    fn extract_enclosed_area_code<'a>(
        &self,
        rest: Cow<'a, str>,
        open: char,
        close: char,
    ) -> Result<ExtractedPart<'a>, WrongFormatError> {
        let content_start = open.len_utf8();
        let Some(content_len) = rest[content_start..].find(close) else {
            debug!("Missing closing bracket '{close}' in area code of '{rest}'");
            return Err(WrongFormatError::new(rest.into_owned(), FormatErrorReason::MissingClosingBracket));
        };
        let content_end = content_start + content_len;
        let area_code = rest[content_start..content_end].trim().to_owned();
        if area_code.is_empty() {
            debug!("Empty enclosure instead of area code in '{rest}'");
            return Err(WrongFormatError::new(rest.into_owned(), FormatErrorReason::NotFoundInDictionary));
        }
        trace!("Enclosed area code '{area_code}' accepted without lookup");

        Ok(ExtractedPart::new(area_code, advance_cow(rest, content_end + close.len_utf8())))
    }

    fn extract_bare_area_code<'a>(&self, rest: Cow<'a, str>) -> Result<ExtractedPart<'a>, WrongFormatError> {
        let trunk_prefix = self.config.trunk_prefix;
        let rest = if rest.starts_with(trunk_prefix) {
            advance_cow(rest, trunk_prefix.len())
        } else {
            rest
        };

        // Dictionary is prefix-free, so the first hit is the only one.
        for &length in self.config.area_code_lengths {
            let Some(end) = char_prefix_len(&rest, length) else {
                continue;
            };
            if self.config.dictionary.contains(&rest[..end]) {
                let area_code = rest[..end].to_owned();
                trace!("Area code '{area_code}' found in dictionary (length {length})");
                return Ok(ExtractedPart::new(area_code, advance_cow(rest, end)));
            }
        }

        debug!("No area code of lengths {:?} found in '{rest}'", self.config.area_code_lengths);
        Err(WrongFormatError::new(rest.into_owned(), FormatErrorReason::NotFoundInDictionary))
    }

    /// Trims `rest` and drops exactly one separator at its start.
    fn skip_separator<'a>(&self, rest: Cow<'a, str>) -> Cow<'a, str> {
        let rest = trim_cow(rest);
        let first = rest.chars().next();
        match first {
            Some(c) if self.config.is_separator(c) => trim_cow(advance_cow(rest, c.len_utf8())),
            _ => rest,
        }
    }

    /// Replaces every enclosure with its content.
    fn strip_enclosures<'a>(&self, rest: Cow<'a, str>) -> Cow<'a, str> {
        if !self.patterns.enclosure.is_match(&rest) {
            return rest;
        }
        let stripped = self.patterns.enclosure
            .replace_all(&rest, | caps: &Captures<'_> | {
                caps.iter()
                    .skip(1)
                    .flatten()
                    .next()
                    .map_or_else(String::new, | m | m.as_str().to_owned())
            })
            .into_owned();
        trace!("Stripped enclosures: '{rest}' -> '{stripped}'");
        trim_cow(Cow::Owned(stripped))
    }

    /// Splits a separated rest into the main number and the part left for
    /// the extension stage.
    fn split_main_number<'s>(&self, rest: &'s str) -> (String, &'s str) {
        // Empty fragments come from separators written next to each other,
        // e.g. "123 456 / 789".
        let fragments: Vec<&str> = self.patterns.separator
            .split(rest)
            .filter(| fragment | !fragment.is_empty())
            .collect();

        if fragments.len() == 2 {
            trace!("Two groups in '{rest}': main number and extension");
            return (fragments[0].to_owned(), fragments[1]);
        }

        let Some(&last) = fragments.last() else {
            trace!("Only separators in '{rest}'");
            return (String::new(), "");
        };

        if last.chars().count() > self.config.max_extension_length {
            trace!("Last group of '{rest}' is too long for an extension, ignoring separators");
            return (fragments.concat(), "");
        }

        // Main number is built from all groups but the last two.
        trace!("{} groups in '{rest}', '{last}' is the extension", fragments.len());
        let main_end = fragments.len().saturating_sub(2);
        (fragments[..main_end].concat(), last)
    }
}

impl AreaCodeExtractor for GermanNumberParser {
    fn extract_area_code<'a>(&self, rest: Cow<'a, str>) -> Result<ExtractedPart<'a>, WrongFormatError> {
        let enclosure = rest
            .chars()
            .next()
            .and_then(| open | self.config.closing_for(open).map(| close | (open, close)));

        let ExtractedPart { value: area_code, rest } = match enclosure {
            Some((open, close)) => self.extract_enclosed_area_code(rest, open, close)?,
            None => self.extract_bare_area_code(rest)?,
        };

        Ok(ExtractedPart::new(area_code, self.skip_separator(rest)))
    }
}

impl MainNumberExtractor for GermanNumberParser {
    fn extract_main_number<'a>(&self, rest: Cow<'a, str>) -> ExtractedPart<'a> {
        let rest = self.strip_enclosures(rest);

        if !self.patterns.separator.is_match(&rest) {
            trace!("No separator in '{rest}', taking it whole as main number");
            return ExtractedPart::new(rest.into_owned(), Cow::Borrowed(""));
        }

        match rest {
            Cow::Borrowed(s) => {
                let (main_number, rest) = self.split_main_number(s);
                ExtractedPart::new(main_number, Cow::Borrowed(rest))
            }
            Cow::Owned(s) => {
                let (main_number, rest) = self.split_main_number(&s);
                ExtractedPart::new(main_number, Cow::Owned(rest.to_owned()))
            }
        }
    }
}

impl ExtensionExtractor for GermanNumberParser {
    fn extract_extension<'a>(&self, rest: Cow<'a, str>) -> ExtractedPart<'a> {
        ExtractedPart::new(rest.into_owned(), Cow::Borrowed(""))
    }
}
