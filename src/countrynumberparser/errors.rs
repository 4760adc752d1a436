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

use thiserror::Error;

/// Why the area code could not be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FormatErrorReason {
    /// The number starts with an opening bracket that is never closed.
    #[error("missing closing bracket")]
    MissingClosingBracket,
    /// No leading substring of any configured length is a known area code.
    #[error("not found in dictionary")]
    NotFoundInDictionary,
}

/// Raised when the area code of a number can't be extracted. Carries the
/// unparsed rest of the number at the moment of failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{rest} ({reason})")]
pub struct WrongFormatError {
    pub rest: String,
    pub reason: FormatErrorReason,
}

impl WrongFormatError {
    pub fn new(rest: impl Into<String>, reason: FormatErrorReason) -> Self {
        Self { rest: rest.into(), reason }
    }
}
