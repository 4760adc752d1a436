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

use strum::EnumIter;

/// Countries with a built-in number format.
///
/// The country is always chosen by the caller; it's never inferred from the
/// number itself.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// **Germany** (`+49`).
    /// Area codes are 2 to 5 digits long (without the trunk prefix `0`),
    /// e.g. `30` for Berlin, `201` for Essen, `35027` for Weesenstein.
    Germany,
}

impl Country {
    /// ISO 3166-1 alpha-2 code of the country.
    pub fn region_code(self) -> &'static str {
        match self {
            Country::Germany => "DE",
        }
    }
}
