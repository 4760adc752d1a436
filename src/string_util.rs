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

/// Drops everything before byte offset `from`. Owned strings are drained in
/// place, borrowed ones are resliced.
pub fn advance_cow(cow: Cow<'_, str>, from: usize) -> Cow<'_, str> {
    match cow {
        Cow::Borrowed(s) => Cow::Borrowed(&s[from..]),
        Cow::Owned(mut s) => {
            s.drain(..from);
            Cow::Owned(s)
        }
    }
}

/// Trims leading and trailing whitespace without allocating for borrowed
/// strings.
pub fn trim_cow(cow: Cow<'_, str>) -> Cow<'_, str> {
    match cow {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => {
            let trimmed = s.trim();
            if trimmed.len() == s.len() {
                Cow::Owned(s)
            } else {
                Cow::Owned(trimmed.to_owned())
            }
        }
    }
}

/// Returns byte length of the first `count` chars of `s`, or `None` if `s`
/// is shorter than `count` chars.
pub fn char_prefix_len(s: &str, count: usize) -> Option<usize> {
    if count == 0 {
        return Some(0);
    }
    s.char_indices()
        .nth(count - 1)
        .map(| (i, c) | i + c.len_utf8())
}
