/*
 * ==========================================================================
 * TALLY - Every Count Counts!
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@tally-lang.com
 * Github:   https://github.com/samwilcox/tally
 *
 * License:
 * This file is part of the Tally language project.
 *
 * Tally is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

/// A source location expressed as a line/column pair.
///
/// Lines are 1-indexed, columns are 0-indexed (the diagnostics printer
/// adds 1 for display).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    /// Computes the line/column of a byte offset within `source`.
    ///
    /// Offsets past the end of the source clamp to the position just
    /// after the last character, so errors reported at end-of-input
    /// still point somewhere printable.
    pub fn locate(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let mut line = 1;
        let mut column = 0;

        for (i, c) in source.char_indices() {
            if i >= offset {
                break;
            }

            if c == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }

        Span { line, column }
    }
}
