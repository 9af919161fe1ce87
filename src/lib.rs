/*
 * ==========================================================================
 * TALLY - Every Count Counts!
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root — wires the engine modules together and re-exports
 *           the public surface.
 *
 * Tally is a tiny assignment language: a program is a sequence of
 * `identifier = expression;` statements, where expressions support integer
 * literals, previously-assigned identifiers, unary plus and minus, the
 * binary operators `+`, `-` and `*`, and
 * parentheses. Parsing and evaluation happen in one recursive-descent pass;
 * there is no token stream and no AST.
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

/// Immutable input cursor threaded through every grammar rule.
pub mod cursor;

/// Compiler-style caret diagnostics for the CLI.
pub mod diagnostics;

/// The insertion-ordered variable environment.
pub mod environment;

/// Coded, spanned error values.
pub mod error;

/// The recursive-descent parser-evaluator.
pub mod parser;

/// Line/column source locations.
pub mod span;

pub use diagnostics::DiagnosticPrinter;
pub use environment::Environment;
pub use error::TallyError;
pub use parser::parse_program;
pub use span::Span;
