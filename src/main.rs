/*
 * ==========================================================================
 * TALLY - Every Count Counts!
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  CLI front end for the Tally parser-evaluator.
 *
 * The front end is a plain caller of the engine: it supplies one program
 * string, and either reports the resulting variable mapping or renders the
 * failure as a caret diagnostic. Input comes from a file argument, an
 * inline `-e` program, or an interactive prompt.
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

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use tally::{parse_program, DiagnosticPrinter, Environment};

fn print_usage() {
    println!("Usage: tally [--json] [-e <program> | <file>]");
    println!();
    println!("  <file>         parse and evaluate a Tally source file");
    println!("  -e <program>   parse and evaluate an inline program");
    println!("  --json         print the variable mapping as JSON");
    println!();
    println!("With no input argument, tally prompts for a single program line.");
}

fn main() {
    let mut json = false;
    let mut inline: Option<String> = None;
    let mut file: Option<String> = None;

    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "-e" => match args.next() {
                Some(program) => inline = Some(program),
                None => {
                    eprintln!("tally: '-e' expects a program argument");
                    process::exit(2);
                }
            },
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => file = Some(arg),
        }
    }

    let (input_name, source) = if let Some(program) = inline {
        ("<inline>".to_string(), program)
    } else if let Some(path) = file {
        match fs::read_to_string(&path) {
            Ok(source) => (path, source),
            Err(err) => {
                eprintln!("tally: cannot read '{}': {}", path, err);
                process::exit(2);
            }
        }
    } else {
        print!("Enter a program: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            eprintln!("tally: failed to read from stdin");
            process::exit(2);
        }

        ("<stdin>".to_string(), line)
    };

    let mut variables = Environment::new();

    match parse_program(&source, &mut variables) {
        Ok(()) => {
            if json {
                match serde_json::to_string_pretty(&variables) {
                    Ok(out) => println!("{}", out),
                    Err(err) => {
                        eprintln!("tally: cannot serialize results: {}", err);
                        process::exit(2);
                    }
                }
            } else {
                for (name, value) in variables.iter() {
                    println!("{} = {}", name, value);
                }
            }
        }
        Err(error) => {
            DiagnosticPrinter::new(input_name, source).print(&error);
            process::exit(1);
        }
    }
}
