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

use crate::error::TallyError;
use crate::span::Span;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for Tally errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for Tally and designed to remain readable without color.
pub struct DiagnosticPrinter {
    /// Full source text of the program being parsed.
    source: String,

    /// Name of the input (file path, or `<stdin>` for interactive use).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[E_REFERENCE]: 'y' is not initialized
    ///   --> program.tly:1:5
    ///    |
    ///  1 | x = y + 1;
    ///    |     ^
    ///
    /// help: assign a value to 'y' before using it
    /// ```
    pub fn print(&self, error: &TallyError) {
        eprintln!("{}", self.render(error));
    }

    /// Builds the full diagnostic report as a string.
    ///
    /// Kept separate from `print` so the rendering can be checked without
    /// capturing stderr.
    fn render(&self, error: &TallyError) -> String {
        let Span { line, column } = error.span;

        // Lines are 1-indexed in diagnostics; `saturating_sub` keeps a
        // line of 0 from underflowing. Missing lines render empty.
        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        // The gutter widens with the line number so multi-digit lines
        // stay aligned with their separator column.
        let gutter = line.to_string().len().max(2);

        let mut out = String::new();

        out.push_str(&format!(
            "error[{}]: {}\n  --> {}:{}:{}\n",
            error.code,
            error.message,
            self.file_name,
            line,
            column + 1
        ));

        out.push_str(&format!("{:width$} |\n", "", width = gutter));
        out.push_str(&format!("{:>width$} | {}\n", line, src_line, width = gutter));

        // Caret underline pointing at the error column.
        let underline: String = " ".repeat(column) + "^";
        out.push_str(&format!("{:width$} | {}", "", underline, width = gutter));

        if let Some(help) = &error.help {
            out.push_str(&format!("\n\nhelp: {}", help));
        }

        out
    }
}
