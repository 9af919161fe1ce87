/*
 * ==========================================================================
 * TALLY - Every Count Counts!
 * ==========================================================================
 *
 * File:     cursor.rs
 * Purpose:  Immutable input cursor for the recursive-descent engine.
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

use crate::span::Span;

/// A position into the source string being parsed.
///
/// The cursor is `Copy`: every grammar rule receives one by value and hands
/// back a new one on success. A failing rule simply never returns a cursor,
/// so the caller keeps parsing from its own pre-call position — no rewinding
/// is ever needed and none is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte offset of the cursor within the original source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Next unconsumed character, if any. Never panics on empty input.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Cursor advanced past the next character.
    ///
    /// At end of input the cursor is returned unchanged.
    pub fn advance(&self) -> Self {
        match self.peek() {
            Some(c) => Self {
                source: self.source,
                pos: self.pos + c.len_utf8(),
            },
            None => *self,
        }
    }

    /// Consumes `expected` if it is the next character.
    pub fn eat(&self, expected: char) -> Option<Self> {
        match self.peek() {
            Some(c) if c == expected => Some(self.advance()),
            _ => None,
        }
    }

    /// Cursor advanced past any contiguous run of whitespace
    /// (space, tab, CR, LF). Whitespace is only ever skipped between
    /// tokens, never inside one.
    pub fn skip_whitespace(&self) -> Self {
        let mut cur = *self;

        while let Some(c) = cur.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            cur = cur.advance();
        }

        cur
    }

    /// Line/column of the cursor position, for diagnostics.
    pub fn span(&self) -> Span {
        Span::locate(self.source, self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_and_advance() {
        let cur = Cursor::new("ab");
        assert_eq!(cur.peek(), Some('a'));

        let cur = cur.advance();
        assert_eq!(cur.peek(), Some('b'));

        let cur = cur.advance();
        assert!(cur.at_end());
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn advance_at_end_is_a_no_op() {
        let cur = Cursor::new("").advance();
        assert!(cur.at_end());
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn eat_matches_only_the_expected_char() {
        let cur = Cursor::new("=5");
        assert!(cur.eat(';').is_none());

        let cur = cur.eat('=').unwrap();
        assert_eq!(cur.rest(), "5");
    }

    #[test]
    fn skips_whitespace_runs() {
        let cur = Cursor::new(" \t\n\r x");
        assert_eq!(cur.skip_whitespace().peek(), Some('x'));
    }

    #[test]
    fn skip_whitespace_stops_at_end() {
        let cur = Cursor::new("   ");
        assert!(cur.skip_whitespace().at_end());
    }
}
