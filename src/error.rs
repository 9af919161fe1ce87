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

use std::fmt;

use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyError {
    /// Stable error code (E_SYNTAX, E_REFERENCE, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl TallyError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Syntax error (input does not match the grammar at this position).
    ///
    /// The only recoverable kind: Factor alternative fallthrough is allowed
    /// for syntax errors and nothing else.
    pub fn syntax_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_SYNTAX", message, span)
    }

    /// Reference error (identifier used before being assigned)
    pub fn reference_error(name: &str, span: Span) -> Self {
        Self::new(
            "E_REFERENCE",
            format!("'{}' is not initialized", name),
            span,
        )
        .with_help(format!("assign a value to '{}' before using it", name))
    }

    /// Nesting-depth error (expression nested beyond the parser's bound)
    pub fn depth_error(span: Span) -> Self {
        Self::new("E_DEPTH", "expression nesting too deep", span)
    }

    /// Overflow error (literal or arithmetic result exceeds 64-bit range)
    pub fn overflow_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_OVERFLOW", message, span)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// True for plain syntax failures, the recoverable kind.
    pub fn is_syntax(&self) -> bool {
        self.code == "E_SYNTAX"
    }

    /// True when an identifier was used before assignment.
    pub fn is_reference(&self) -> bool {
        self.code == "E_REFERENCE"
    }
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for TallyError {}
