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

/// Result of a single parsing stage: the field it claimed and the part of
/// the number that is still unparsed.
///
/// `rest` only ever shrinks from stage to stage. It stays borrowed from the
/// caller's input until a stage has to rewrite it (e.g. to drop enclosure
/// characters).
#[derive(Debug, PartialEq)]
pub struct ExtractedPart<'a> {
    pub value: String,
    pub rest: Cow<'a, str>,
}

impl<'a> ExtractedPart<'a> {
    pub fn new(value: impl Into<String>, rest: Cow<'a, str>) -> Self {
        Self { value: value.into(), rest }
    }
}
