/*
 * ==========================================================================
 * TALLY - Every Count Counts!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser-Evaluator Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse_program()` driver used to parse and evaluate a full Tally program
 * in a single pass, binding variables into the caller's environment.
 *
 * The grammar implementation is split across multiple modules:
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `scanners.rs`     → Literal and identifier scanning
 *
 * This file serves as the **root coordinator** of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use crate::cursor::Cursor;
use crate::environment::Environment;
use crate::error::TallyError;

/// Result of one grammar rule: the cursor past the consumed input plus the
/// rule's semantic value, or the error that stopped it. A failing rule never
/// hands back a cursor, so callers cannot observe partial consumption.
pub type Parse<'src, T> = Result<(Cursor<'src>, T), TallyError>;

/// The core Tally recursive-descent parser-evaluator.
///
/// This structure maintains:
/// - The full source text being parsed
/// - A mutable borrow of the variable environment being populated
/// - The current expression nesting depth (see `expressions.rs`)
///
/// The grammar logic is implemented through extension modules
/// (`expressions`, `scanners`) via additional `impl Parser` blocks.
pub struct Parser<'src, 'env> {
    /// Complete source text; rules slice tokens directly out of it.
    pub(crate) source: &'src str,

    /// Variable bindings, written by successful assignments and read when
    /// an expression references an identifier.
    pub(crate) env: &'env mut Environment,

    /// Current factor nesting depth, bounded by `MAX_NESTING_DEPTH`.
    pub(crate) depth: usize,
}

/// Public entry point for the Tally parse-and-evaluate pass.
///
/// Parses `source` as a sequence of `identifier = expression;` statements,
/// binding each variable into `env` as its assignment completes. On success
/// the entire input has been consumed and `env` holds every variable's final
/// value in first-assignment order.
///
/// On failure the error describes the first problem encountered; bindings
/// made by assignments that completed before that point remain in `env`
/// (best-effort semantics, no rollback).
///
/// # Example
/// ```
/// use tally::{parse_program, Environment};
///
/// let mut env = Environment::new();
/// parse_program("x = 1; y = x + 2;", &mut env).unwrap();
/// assert_eq!(env.get("y"), Some(3));
/// ```
pub fn parse_program(source: &str, env: &mut Environment) -> Result<(), TallyError> {
    let mut parser = Parser {
        source,
        env,
        depth: 0,
    };

    parser.program(Cursor::new(source))
}

impl<'src, 'env> Parser<'src, 'env> {
    /// Program → Assignment*
    ///
    /// Repeatedly parses assignments until the input is fully consumed.
    /// Trailing whitespace after the final `;` is consumed here, so a
    /// program ending in whitespace still terminates cleanly. Any non-empty
    /// remainder that does not parse as an assignment is a hard error, never
    /// silently ignored.
    fn program(&mut self, cursor: Cursor<'src>) -> Result<(), TallyError> {
        let mut cur = cursor.skip_whitespace();

        while !cur.at_end() {
            let (next, ()) = self.assignment(cur)?;
            cur = next.skip_whitespace();
        }

        Ok(())
    }

    /// Assignment → Identifier '=' Expression ';'
    ///
    /// The variable is bound only after the closing `;` has been seen, so a
    /// statement that fails partway through leaves the environment untouched.
    fn assignment(&mut self, cursor: Cursor<'src>) -> Parse<'src, ()> {
        let cur = cursor.skip_whitespace();
        let (cur, name) = self.identifier(cur)?;

        let cur = cur.skip_whitespace();
        let cur = cur.eat('=').ok_or_else(|| {
            TallyError::syntax_error(format!("expected '=' after '{}'", name), cur.span())
        })?;

        let (cur, value) = self.expression(cur)?;

        let cur = cur.skip_whitespace();
        let cur = cur.eat(';').ok_or_else(|| {
            TallyError::syntax_error("expected ';' after expression", cur.span())
        })?;

        self.env.define(name, value);
        Ok((cur, ()))
    }
}
