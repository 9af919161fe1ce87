/*
 * ==========================================================================
 * TALLY - Every Count Counts!
 * ==========================================================================
 *
 * File:     scanners.rs
 * Purpose:  Leaf token scanners for literals and identifiers.
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

use crate::cursor::Cursor;
use crate::error::TallyError;
use crate::parser::parser::{Parse, Parser};

impl<'src, 'env> Parser<'src, 'env> {
    /// Literal → '0' | NonZeroDigit Digit*
    ///
    /// A standalone `0` consumes exactly one character: `007` scans as the
    /// literal `0` with `07` left over, which the surrounding statement then
    /// rejects as unconsumed input. That is a property of the grammar (no
    /// leading zeros), kept as-is.
    pub(crate) fn literal(&mut self, cursor: Cursor<'src>) -> Parse<'src, i64> {
        let cur = cursor.skip_whitespace();

        match cur.peek() {
            Some('0') => Ok((cur.advance(), 0)),

            Some('1'..='9') => {
                let start = cur.pos();
                let mut end = cur.advance();

                while let Some(c) = end.peek() {
                    if !c.is_ascii_digit() {
                        break;
                    }
                    end = end.advance();
                }

                let digits = &self.source[start..end.pos()];

                match digits.parse::<i64>() {
                    Ok(value) => Ok((end, value)),
                    Err(_) => Err(TallyError::overflow_error(
                        format!("integer literal '{}' does not fit in 64 bits", digits),
                        cur.span(),
                    )),
                }
            }

            _ => Err(TallyError::syntax_error(
                "expected a numeric literal",
                cur.span(),
            )),
        }
    }

    /// Identifier → Letter ( Letter | Digit | '_' )*
    ///
    /// The first character must be an ASCII letter; continuation characters
    /// may also be digits or underscores. Empty remaining input is a clean
    /// scan failure, never an out-of-bounds access.
    pub(crate) fn identifier(&mut self, cursor: Cursor<'src>) -> Parse<'src, String> {
        let cur = cursor.skip_whitespace();

        match cur.peek() {
            Some(c) if c.is_ascii_alphabetic() => {
                let start = cur.pos();
                let mut end = cur.advance();

                while let Some(c) = end.peek() {
                    if !c.is_ascii_alphanumeric() && c != '_' {
                        break;
                    }
                    end = end.advance();
                }

                Ok((end, self.source[start..end.pos()].to_string()))
            }

            _ => Err(TallyError::syntax_error(
                "expected an identifier",
                cur.span(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cursor::Cursor;
    use crate::environment::Environment;
    use crate::parser::parser::Parser;

    fn parser<'s>(source: &'s str, env: &'s mut Environment) -> Parser<'s, 's> {
        Parser {
            source,
            env,
            depth: 0,
        }
    }

    #[test]
    fn scans_multi_digit_literals() {
        let mut env = Environment::new();
        let mut p = parser("1234;", &mut env);

        let (cur, value) = p.literal(Cursor::new("1234;")).unwrap();
        assert_eq!(value, 1234);
        assert_eq!(cur.rest(), ";");
    }

    #[test]
    fn lone_zero_consumes_one_character() {
        let mut env = Environment::new();
        let mut p = parser("007", &mut env);

        let (cur, value) = p.literal(Cursor::new("007")).unwrap();
        assert_eq!(value, 0);
        assert_eq!(cur.rest(), "07");
    }

    #[test]
    fn rejects_non_digits() {
        let mut env = Environment::new();
        let mut p = parser("abc", &mut env);

        assert!(p.literal(Cursor::new("abc")).unwrap_err().is_syntax());
    }

    #[test]
    fn rejects_empty_input_without_panicking() {
        let mut env = Environment::new();
        let mut p = parser("", &mut env);

        assert!(p.literal(Cursor::new("")).is_err());
        assert!(p.identifier(Cursor::new("")).is_err());
    }

    #[test]
    fn oversized_literal_is_an_overflow() {
        let source = "99999999999999999999";
        let mut env = Environment::new();
        let mut p = parser(source, &mut env);

        let err = p.literal(Cursor::new(source)).unwrap_err();
        assert_eq!(err.code, "E_OVERFLOW");
    }

    #[test]
    fn scans_identifiers_with_digits_and_underscores() {
        let mut env = Environment::new();
        let mut p = parser("speed_2x = 1", &mut env);

        let (cur, name) = p.identifier(Cursor::new("speed_2x = 1")).unwrap();
        assert_eq!(name, "speed_2x");
        assert_eq!(cur.rest(), " = 1");
    }

    #[test]
    fn identifier_must_start_with_a_letter() {
        let mut env = Environment::new();
        let mut p = parser("_x", &mut env);
        assert!(p.identifier(Cursor::new("_x")).unwrap_err().is_syntax());

        let mut env = Environment::new();
        let mut p = parser("9x", &mut env);
        assert!(p.identifier(Cursor::new("9x")).unwrap_err().is_syntax());
    }
}
