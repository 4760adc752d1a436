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

use std::fmt;

use super::helper_constants::PLUS_SIGN;

/// A phone number split into its parts. Separators and matched enclosures
/// are never part of any field; an unmatched bracket after the area code is
/// kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: String,
    area_code: String,
    main_number: String,
    extension: String,
}

impl PhoneNumber {
    pub fn new(
        country_code: impl Into<String>,
        area_code: impl Into<String>,
        main_number: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            area_code: area_code.into(),
            main_number: main_number.into(),
            extension: extension.into(),
        }
    }

    /// Country calling code without plus sign, e.g. `49`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Area code (Ortsvorwahl) without trunk prefix, unless it was written
    /// in brackets.
    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    /// Main number (Hauptwahl).
    pub fn main_number(&self) -> &str {
        &self.main_number
    }

    /// Extension (Durchwahl). Empty if the number has none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }

    /// Formats the number as `+49 201 123456-78`. The extension part is
    /// omitted if empty.
    pub fn to_international_format(&self) -> String {
        if self.has_extension() {
            fast_cat::concat_str!(
                PLUS_SIGN, &self.country_code, " ", &self.area_code, " ",
                &self.main_number, "-", &self.extension
            )
        } else {
            fast_cat::concat_str!(
                PLUS_SIGN, &self.country_code, " ", &self.area_code, " ", &self.main_number
            )
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_international_format())
    }
}
