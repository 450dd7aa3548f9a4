//! # Introduction
//!
//! minic is a two-phase front end for Mini, a small imperative expression
//! language: a DFA-driven lexer followed by a recursive-descent parser that
//! produces an abstract syntax tree.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer (DFA suite) → Tokens → Parser → AST → Printer
//! ```
//!
//! 1. [`parser::dfa`] — explicit deterministic finite automata, one per
//!    token category, queried with longest-accepted-prefix matching.
//! 2. [`parser::lexer`] — drives the automata over the source text in a
//!    fixed priority order and emits position-carrying tokens.
//! 3. [`parser::parse`] — recursive descent over the token stream; grammar
//!    precedence and associativity are encoded in the production chain.
//! 4. [`parser::printer`] — renders the AST as an indented tree for the
//!    CLI driver and for debugging.
//!
//! Both phases are fail-fast: the first lexical or syntax error aborts the
//! compilation attempt and carries the exact line and column. Lexing and
//! parsing touch no global state, so independent pipelines can run
//! concurrently on different inputs without synchronization.

pub mod parser;
