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

pub const PLUS_SIGN: &'static str = "+";

/// Characters humans put between digit groups. Not part of any extracted
/// field.
pub const DEFAULT_SEPARATORS: &'static [char] = &['-', '/', ' '];

/// Opening and closing characters of an enclosure. Enclosures never nest.
pub const DEFAULT_ENCLOSURES: &'static [(char, char)] = &[('(', ')'), ('[', ']')];

pub const GERMAN_COUNTRY_CALLING_CODE: i32 = 49;
// Berlin (30) is the shortest, Weesenstein (35027) the longest.
pub const GERMAN_AREA_CODE_LENGTHS: &'static [usize] = &[2, 3, 4, 5];
pub const GERMAN_TRUNK_PREFIX: &'static str = "0";
// Trailing groups longer than this are never an extension (Durchwahl).
pub const GERMAN_MAX_EXTENSION_LENGTH: usize = 5;

/// Capacity of the shared regex cache: two patterns per country.
pub const REGEX_CACHE_CAPACITY: usize = 8;
