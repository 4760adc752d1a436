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

use std::{borrow::Cow, sync::Arc};

use log::{debug, trace};

use crate::{
    interfaces::{AreaCodeExtractor, ExtensionExtractor, MainNumberExtractor},
    regexp_cache::InvalidRegexError,
    string_util::trim_cow,
};

use super::{
    country_config::CountryConfig,
    errors::WrongFormatError,
    german_number_parser::GermanNumberParser,
    phone_number::PhoneNumber,
    Country,
};

/// Splits national numbers of one country into area code, main number and
/// extension.
///
/// Parsing runs three stages in fixed order, each taking the unparsed rest
/// of the previous one. Only the area code stage can fail.
pub struct CountryNumberParser {
    country_code: String,

    area_code_extractor: Arc<dyn AreaCodeExtractor>,
    main_number_extractor: Arc<dyn MainNumberExtractor>,
    extension_extractor: Arc<dyn ExtensionExtractor>,
}

impl CountryNumberParser {
    /// Creates a parser with the built-in configuration of `country`.
    pub fn new(country: Country) -> Result<Self, InvalidRegexError> {
        let config = CountryConfig::for_country(country);
        match country {
            Country::Germany => Self::with_german_strategy(config),
        }
    }

    /// Creates a parser that writes numbers the German way, using custom
    /// country data.
    pub fn with_german_strategy(config: CountryConfig) -> Result<Self, InvalidRegexError> {
        let country_calling_code = config.country_calling_code;
        let strategy = Arc::new(GermanNumberParser::new(config)?);
        Ok(Self::from_extractors(
            country_calling_code,
            strategy.clone(),
            strategy.clone(),
            strategy,
        ))
    }

    /// Composes a parser from independent stage implementations.
    pub fn from_extractors(
        country_calling_code: i32,
        area_code_extractor: Arc<dyn AreaCodeExtractor>,
        main_number_extractor: Arc<dyn MainNumberExtractor>,
        extension_extractor: Arc<dyn ExtensionExtractor>,
    ) -> Self {
        let mut buf = itoa::Buffer::new();
        Self {
            country_code: buf.format(country_calling_code).to_owned(),
            area_code_extractor,
            main_number_extractor,
            extension_extractor,
        }
    }

    /// Country calling code put into every parsed number.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Parses a number written without international prefix and country
    /// code, e.g. `(0201) 123456-78`.
    ///
    /// Fails only if no area code can be recognized.
    pub fn parse(&self, raw_number: &str) -> Result<PhoneNumber, WrongFormatError> {
        let rest = trim_cow(Cow::Borrowed(raw_number));

        let area_code = self.area_code_extractor
            .extract_area_code(rest)
            .inspect_err(| err | debug!("Failed to parse '{raw_number}': {err}"))?;
        let main_number = self.main_number_extractor.extract_main_number(area_code.rest);
        let extension = self.extension_extractor.extract_extension(main_number.rest);

        trace!(
            "Parsed '{raw_number}' into area code '{}', main number '{}', extension '{}'",
            area_code.value, main_number.value, extension.value
        );
        Ok(PhoneNumber::new(
            self.country_code.as_str(),
            area_code.value,
            main_number.value,
            extension.value,
        ))
    }
}
