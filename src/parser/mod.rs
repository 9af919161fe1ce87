/*
 * ==========================================================================
 * TALLY - Every Count Counts!
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Tally recursive-descent parser-evaluator.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic and the program/assignment driver
 *   - Expression grammar rules
 *   - Leaf token scanners
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the main `parse_program(source, env)` entry point
/// - Program and assignment rules
pub mod parser;

/// Expression-level rules:
/// - expression → term → factor, mutually/self-recursive
/// - right-associative operator continuations
/// - nesting-depth guard
pub mod expressions;

/// Leaf scanners:
/// - numeric literals
/// - identifiers
pub mod scanners;

/// Re-export the public parse entry point so callers can use:
/// `crate::parser::parse_program(...)`
pub use parser::parse_program;
