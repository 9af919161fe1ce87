/*
 * ==========================================================================
 * TALLY - Every Count Counts!
 * ==========================================================================
 *
 * File:     expressions.rs
 * Purpose:  Implements the Tally expression grammar using recursive descent
 *
 * Author:   Sam Wilcox
 * Email:    sam@tally-lang.com
 * Github:   https://github.com/samwilcox/tally
 *
 * --------------------------------------------------------------------------
 *  LICENSE
 * --------------------------------------------------------------------------
 * This file is part of the Tally language project.
 *
 * Tally is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire Tally expression grammar**, evaluated
 * inline as it is parsed — no AST is built.
 *
 * The left-recursive textbook grammar
 *
 *   Exp  → Exp + Term | Exp - Term | Term
 *   Term → Term * Fact | Fact
 *
 * would recurse forever in a descent parser, so it is rewritten with the
 * recursion on the right:
 *
 *   Exp  → Term ( ('+' | '-') Exp )?
 *   Term → Fact ( '*' Term )?
 *   Fact → '(' Exp ')' | ('-' | '+') Fact | Literal | Identifier
 *
 * The rewrite makes `+`, `-` and `*` **right-associative**:
 * `10 - 3 - 2` evaluates as `10 - (3 - 2)` = 9. That is a deliberate,
 * tested property of the language, not an evaluation bug — do not "fix"
 * it by folding the continuations into a loop.
 *
 * ==========================================================================
 */

use crate::cursor::Cursor;
use crate::error::TallyError;
use crate::parser::parser::{Parse, Parser};

/// Upper bound on grammar-rule nesting.
///
/// Every rule entry counts: parenthesized and unary nesting, but also the
/// right-recursive `+`/`-`/`*` continuations, each of which costs native
/// stack frames. Adversarial input like `x = ((((((…` or an arbitrarily
/// long operator chain must be cut off long before the stack is.
pub const MAX_NESTING_DEPTH: usize = 512;

impl<'src, 'env> Parser<'src, 'env> {
    /// Expression → Term ( ('+' | '-') Expression )?
    ///
    /// Parses and evaluates one expression, returning its value.
    ///
    /// # Behavior
    /// - Parses the left operand via `term()`.
    /// - If the next non-whitespace character is `+` or `-`, recursively
    ///   parses a full Expression after it and combines the two values.
    /// - If the continuation fails with a plain syntax error, the operator
    ///   is treated as not belonging to this expression: the term's value is
    ///   returned with the cursor still positioned before the operator, and
    ///   the caller rejects the leftover input. Hard failures (undefined
    ///   variable, depth, overflow) propagate immediately.
    ///
    /// # Associativity
    /// The continuation is a full Expression, not a Term, so chains group
    /// to the right: `a - b - c` is `a - (b - c)`. See the module header.
    pub(crate) fn expression(&mut self, cursor: Cursor<'src>) -> Parse<'src, i64> {
        self.depth += 1;

        let result = if self.depth > MAX_NESTING_DEPTH {
            Err(TallyError::depth_error(cursor.skip_whitespace().span()))
        } else {
            self.expression_inner(cursor)
        };

        self.depth -= 1;
        result
    }

    fn expression_inner(&mut self, cursor: Cursor<'src>) -> Parse<'src, i64> {
        let (cur, value) = self.term(cursor)?;

        let cur = cur.skip_whitespace();

        if let Some(op @ ('+' | '-')) = cur.peek() {
            match self.expression(cur.advance()) {
                Ok((next, rest)) => {
                    let combined = if op == '+' {
                        value.checked_add(rest)
                    } else {
                        value.checked_sub(rest)
                    };

                    return match combined {
                        Some(v) => Ok((next, v)),
                        None => Err(TallyError::overflow_error(
                            "arithmetic overflow",
                            cur.span(),
                        )),
                    };
                }
                Err(e) if e.is_syntax() => return Ok((cur, value)),
                Err(e) => return Err(e),
            }
        }

        Ok((cur, value))
    }

    /// Term → Factor ( '*' Term )?
    ///
    /// Same right-recursive shape as `expression()`; for pure `*` chains the
    /// grouping direction is arithmetically invisible, but the shape is kept
    /// identical so the grammar stays uniform.
    pub(crate) fn term(&mut self, cursor: Cursor<'src>) -> Parse<'src, i64> {
        self.depth += 1;

        let result = if self.depth > MAX_NESTING_DEPTH {
            Err(TallyError::depth_error(cursor.skip_whitespace().span()))
        } else {
            self.term_inner(cursor)
        };

        self.depth -= 1;
        result
    }

    fn term_inner(&mut self, cursor: Cursor<'src>) -> Parse<'src, i64> {
        let (cur, value) = self.factor(cursor)?;

        let cur = cur.skip_whitespace();

        if cur.peek() == Some('*') {
            match self.term(cur.advance()) {
                Ok((next, rest)) => {
                    return match value.checked_mul(rest) {
                        Some(v) => Ok((next, v)),
                        None => Err(TallyError::overflow_error(
                            "arithmetic overflow",
                            cur.span(),
                        )),
                    };
                }
                Err(e) if e.is_syntax() => return Ok((cur, value)),
                Err(e) => return Err(e),
            }
        }

        Ok((cur, value))
    }

    /// Factor → '(' Expression ')' | ('-' | '+') Factor | Literal | Identifier
    pub(crate) fn factor(&mut self, cursor: Cursor<'src>) -> Parse<'src, i64> {
        self.depth += 1;

        let result = if self.depth > MAX_NESTING_DEPTH {
            Err(TallyError::depth_error(cursor.skip_whitespace().span()))
        } else {
            self.factor_alternatives(cursor)
        };

        self.depth -= 1;
        result
    }

    /// The ordered factor alternatives.
    ///
    /// Alternatives are tried top to bottom, each restarting from the
    /// original (whitespace-skipped) position when the previous one fails
    /// with a syntax error. In particular, `(` followed by a valid inner
    /// expression but no closing `)` does NOT fail here: the rule falls
    /// through and retries the remaining alternatives against the `(`
    /// itself, which then fail and produce the error downstream. Undefined
    /// variables, depth, and overflow never fall through.
    fn factor_alternatives(&mut self, cursor: Cursor<'src>) -> Parse<'src, i64> {
        let cur = cursor.skip_whitespace();

        // '(' Expression ')'
        if let Some(inner) = cur.eat('(') {
            match self.expression(inner) {
                Ok((after, value)) => {
                    if let Some(after) = after.skip_whitespace().eat(')') {
                        return Ok((after, value));
                    }
                }
                Err(e) if e.is_syntax() => {}
                Err(e) => return Err(e),
            }
        }

        // ('-' | '+') Factor
        if let Some(op @ ('-' | '+')) = cur.peek() {
            match self.factor(cur.advance()) {
                Ok((after, value)) => {
                    let value = if op == '-' {
                        value.checked_neg().ok_or_else(|| {
                            TallyError::overflow_error("arithmetic overflow", cur.span())
                        })?
                    } else {
                        value
                    };

                    return Ok((after, value));
                }
                Err(e) if e.is_syntax() => {}
                Err(e) => return Err(e),
            }
        }

        // Literal
        match self.literal(cur) {
            Ok(ok) => return Ok(ok),
            Err(e) if e.is_syntax() => {}
            Err(e) => return Err(e),
        }

        // Identifier — must already be bound or the whole parse fails.
        let (after, name) = self.identifier(cur)?;

        match self.env.get(&name) {
            Some(value) => Ok((after, value)),
            None => Err(TallyError::reference_error(&name, cur.span())),
        }
    }
}
