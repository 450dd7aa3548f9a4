//! Lexer (tokenizer) for Mini source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Unlike a hand-coded scanner, recognition is driven entirely by
//! the automaton suite in [`dfa`](super::dfa): at each position the lexer
//! asks every automaton for its longest match and takes the first category,
//! in priority order, that claims a nonzero prefix.

use super::ast::SourceLocation;
use super::dfa::Dfa;
use std::fmt;
use thiserror::Error;

/// Token categories produced by the lexer.
///
/// `Keyword` is part of the wire contract with the parser but is never
/// produced yet; it is reserved for future reserved-word support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Integer,
    Real,
    Operator,
    Keyword,
    Assignment,
}

/// A single lexical token: category, source substring, and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::Integer => write!(f, "integer literal {}", self.lexeme),
            TokenKind::Real => write!(f, "real literal {}", self.lexeme),
            TokenKind::Operator => write!(f, "'{}'", self.lexeme),
            TokenKind::Keyword => write!(f, "keyword '{}'", self.lexeme),
            TokenKind::Assignment => write!(f, "':='"),
        }
    }
}

/// Lexical error: no automaton matched at the current position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Lexical error at {location}: illegal character '{character}'")]
pub struct LexError {
    pub character: char,
    pub location: SourceLocation,
}

/// One lexical category: the automaton that recognizes it, the token kind
/// it produces, and its priority. Lower priority values are tried first;
/// the first rule claiming a nonzero prefix wins, regardless of whether a
/// later rule would have matched a longer one.
struct LexRule {
    kind: TokenKind,
    dfa: Dfa,
    priority: u32,
}

/// DFA-driven lexer for Mini source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    rules: Vec<LexRule>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    ///
    /// The full automaton suite is built up front. Priorities are spaced
    /// out so future categories can slot in: reserved words must land
    /// ahead of `Identifier` to win ties against it.
    pub fn new(input: &str) -> Self {
        let mut rules = vec![
            LexRule {
                kind: TokenKind::Identifier,
                dfa: Dfa::identifier(),
                priority: 10,
            },
            LexRule {
                kind: TokenKind::Real,
                dfa: Dfa::real(),
                priority: 20,
            },
            LexRule {
                kind: TokenKind::Integer,
                dfa: Dfa::integer(),
                priority: 30,
            },
            LexRule {
                kind: TokenKind::Assignment,
                dfa: Dfa::assignment(),
                priority: 40,
            },
            LexRule {
                kind: TokenKind::Operator,
                dfa: Dfa::operator(),
                priority: 50,
            },
        ];
        rules.sort_by_key(|rule| rule.priority);

        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            rules,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.skip_whitespace();

            if self.is_at_end() {
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Match the highest-priority automaton at the current position.
    fn next_token(&mut self) -> Result<Token, LexError> {
        let location = self.current_location();

        let matched = self.rules.iter().find_map(|rule| {
            rule.dfa
                .longest_match(&self.input, self.position)
                .map(|len| (rule.kind, len))
        });

        match matched {
            Some((kind, len)) => {
                let lexeme: String = self.input[self.position..self.position + len]
                    .iter()
                    .collect();
                for _ in 0..len {
                    self.advance();
                }
                Ok(Token {
                    kind,
                    lexeme,
                    location,
                })
            }
            None => Err(LexError {
                character: self.input[self.position],
                location,
            }),
        }
    }

    /// Skip any run of whitespace, keeping line/column tracking current.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
