//! Table-driven deterministic finite automata for token recognition.
//!
//! Every token category of the Mini language is recognized by its own small
//! [`Dfa`], assembled through [`DfaBuilder`] and queried by the lexer with
//! [`Dfa::longest_match`]. The transition function is partial: a missing
//! entry rejects the input in that state.

use rustc_hash::{FxHashMap, FxHashSet};

/// Identifies a single automaton state.
pub type StateId = u32;

/// An immutable deterministic finite automaton.
///
/// Built once per lexer instance and never mutated afterwards; all mutation
/// happens on the [`DfaBuilder`] side.
#[derive(Debug, Clone)]
pub struct Dfa {
    start: StateId,
    accepting: FxHashSet<StateId>,
    transitions: FxHashMap<(StateId, char), StateId>,
}

/// Incrementally assembles a [`Dfa`].
///
/// Registering two different edges for the same `(state, char)` pair is a
/// construction bug, so [`transition`](DfaBuilder::transition) panics instead
/// of silently overwriting the earlier target.
#[derive(Debug)]
pub struct DfaBuilder {
    start: StateId,
    accepting: FxHashSet<StateId>,
    transitions: FxHashMap<(StateId, char), StateId>,
}

impl DfaBuilder {
    pub fn new(start: StateId) -> Self {
        Self {
            start,
            accepting: FxHashSet::default(),
            transitions: FxHashMap::default(),
        }
    }

    /// Mark `state` as accepting.
    pub fn accept(mut self, state: StateId) -> Self {
        self.accepting.insert(state);
        self
    }

    /// Register a single edge `from --ch--> to`.
    ///
    /// # Panics
    ///
    /// Panics if an edge for `(from, ch)` is already registered.
    pub fn transition(mut self, from: StateId, ch: char, to: StateId) -> Self {
        let previous = self.transitions.insert((from, ch), to);
        assert!(
            previous.is_none(),
            "duplicate transition from state {} on {:?}",
            from,
            ch
        );
        self
    }

    /// Register one edge per character in `lo..=hi` inclusive.
    ///
    /// An empty range (`lo > hi`) registers nothing.
    pub fn transition_range(mut self, from: StateId, lo: char, hi: char, to: StateId) -> Self {
        for ch in lo..=hi {
            self = self.transition(from, ch, to);
        }
        self
    }

    pub fn build(self) -> Dfa {
        Dfa {
            start: self.start,
            accepting: self.accepting,
            transitions: self.transitions,
        }
    }
}

impl Dfa {
    pub fn builder(start: StateId) -> DfaBuilder {
        DfaBuilder::new(start)
    }

    /// Run the automaton over the whole input.
    ///
    /// Returns true iff every character had a defined transition and the
    /// final state is accepting. Rejects on the first undefined transition.
    pub fn accepts(&self, input: &str) -> bool {
        let mut state = self.start;
        for ch in input.chars() {
            match self.transitions.get(&(state, ch)) {
                Some(&next) => state = next,
                None => return false,
            }
        }
        self.accepting.contains(&state)
    }

    /// Length of the longest prefix of `input[from..]` that lands in an
    /// accept state, or `None` if no prefix is accepted.
    ///
    /// Tracks the last offset at which the automaton sat in an accept state,
    /// not the last offset reached: a scan that dies past its last accept
    /// (e.g. `12.` against the real automaton) still reports the shorter
    /// accepted prefix when one exists. This is what gives the lexer its
    /// maximal-munch behavior.
    pub fn longest_match(&self, input: &[char], from: usize) -> Option<usize> {
        let mut state = self.start;
        let mut last_accept = None;

        for (i, &ch) in input.iter().enumerate().skip(from) {
            match self.transitions.get(&(state, ch)) {
                Some(&next) => state = next,
                None => break,
            }
            if self.accepting.contains(&state) {
                last_accept = Some(i - from + 1);
            }
        }

        last_accept
    }

    /// Identifier automaton: `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn identifier() -> Dfa {
        const START: StateId = 0;
        const IDENT: StateId = 1;

        Dfa::builder(START)
            .accept(IDENT)
            .transition_range(START, 'a', 'z', IDENT)
            .transition_range(START, 'A', 'Z', IDENT)
            .transition(START, '_', IDENT)
            .transition_range(IDENT, 'a', 'z', IDENT)
            .transition_range(IDENT, 'A', 'Z', IDENT)
            .transition_range(IDENT, '0', '9', IDENT)
            .transition(IDENT, '_', IDENT)
            .build()
    }

    /// Integer literal automaton: `[0-9]+`.
    pub fn integer() -> Dfa {
        const START: StateId = 0;
        const DIGITS: StateId = 1;

        Dfa::builder(START)
            .accept(DIGITS)
            .transition_range(START, '0', '9', DIGITS)
            .transition_range(DIGITS, '0', '9', DIGITS)
            .build()
    }

    /// Real literal automaton: `[0-9]+\.[0-9]+`.
    ///
    /// Only the state reached after at least one fractional digit accepts,
    /// so a trailing `.` is never part of a match.
    pub fn real() -> Dfa {
        const START: StateId = 0;
        const INT_PART: StateId = 1;
        const POINT: StateId = 2;
        const FRACTION: StateId = 3;

        Dfa::builder(START)
            .accept(FRACTION)
            .transition_range(START, '0', '9', INT_PART)
            .transition_range(INT_PART, '0', '9', INT_PART)
            .transition(INT_PART, '.', POINT)
            .transition_range(POINT, '0', '9', FRACTION)
            .transition_range(FRACTION, '0', '9', FRACTION)
            .build()
    }

    /// Arithmetic operator automaton: exactly one of `+ - * / ^`.
    pub fn operator() -> Dfa {
        const START: StateId = 0;
        const OPERATOR: StateId = 1;

        Dfa::builder(START)
            .accept(OPERATOR)
            .transition(START, '+', OPERATOR)
            .transition(START, '-', OPERATOR)
            .transition(START, '*', OPERATOR)
            .transition(START, '/', OPERATOR)
            .transition(START, '^', OPERATOR)
            .build()
    }

    /// Assignment operator automaton: exactly `:=`.
    pub fn assignment() -> Dfa {
        const START: StateId = 0;
        const COLON: StateId = 1;
        const ASSIGN: StateId = 2;

        Dfa::builder(START)
            .accept(ASSIGN)
            .transition(START, ':', COLON)
            .transition(COLON, '=', ASSIGN)
            .build()
    }

    /// Chain automaton accepting exactly `word` and nothing else.
    ///
    /// Reserved-word support: not wired into the lexer's rule list yet.
    pub fn keyword(word: &str) -> Dfa {
        let mut builder = Dfa::builder(0);
        let mut state: StateId = 0;

        for ch in word.chars() {
            builder = builder.transition(state, ch, state + 1);
            state += 1;
        }

        builder.accept(state).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identifier_accepts() {
        let dfa = Dfa::identifier();

        assert!(dfa.accepts("x"));
        assert!(dfa.accepts("_tmp"));
        assert!(dfa.accepts("counter_2"));
        assert!(dfa.accepts("ABC_def_99"));

        assert!(!dfa.accepts(""));
        assert!(!dfa.accepts("2x"));
        assert!(!dfa.accepts("a-b"));
        assert!(!dfa.accepts("x y"));
    }

    #[test]
    fn test_integer_accepts() {
        let dfa = Dfa::integer();

        assert!(dfa.accepts("0"));
        assert!(dfa.accepts("123456789"));

        assert!(!dfa.accepts(""));
        assert!(!dfa.accepts("12.5"));
        assert!(!dfa.accepts("x1"));
    }

    #[test]
    fn test_real_accepts() {
        let dfa = Dfa::real();

        assert!(dfa.accepts("0.0"));
        assert!(dfa.accepts("12.5"));
        assert!(dfa.accepts("3.14159"));

        assert!(!dfa.accepts("12"));
        assert!(!dfa.accepts("12."));
        assert!(!dfa.accepts(".5"));
        assert!(!dfa.accepts("1.2.3"));
    }

    #[test]
    fn test_operator_accepts_single_char_only() {
        let dfa = Dfa::operator();

        for op in ["+", "-", "*", "/", "^"] {
            assert!(dfa.accepts(op), "operator {} not accepted", op);
        }

        assert!(!dfa.accepts(""));
        assert!(!dfa.accepts("++"));
        assert!(!dfa.accepts("%"));
    }

    #[test]
    fn test_assignment_accepts() {
        let dfa = Dfa::assignment();

        assert!(dfa.accepts(":="));

        assert!(!dfa.accepts(":"));
        assert!(!dfa.accepts("="));
        assert!(!dfa.accepts(":=="));
    }

    #[test]
    fn test_keyword_chain() {
        let dfa = Dfa::keyword("while");

        assert!(dfa.accepts("while"));

        assert!(!dfa.accepts("whil"));
        assert!(!dfa.accepts("while_"));
        assert!(!dfa.accepts("When"));
    }

    #[test]
    fn test_longest_match_is_maximal() {
        let dfa = Dfa::identifier();

        assert_eq!(dfa.longest_match(&chars("abc123 rest"), 0), Some(6));
        assert_eq!(dfa.longest_match(&chars("x"), 0), Some(1));
        assert_eq!(dfa.longest_match(&chars("123abc"), 0), None);
    }

    #[test]
    fn test_longest_match_from_offset() {
        let dfa = Dfa::integer();

        assert_eq!(dfa.longest_match(&chars("x 42;"), 2), Some(2));
        assert_eq!(dfa.longest_match(&chars("x 42;"), 0), None);
        assert_eq!(dfa.longest_match(&chars("42"), 2), None);
    }

    #[test]
    fn test_longest_match_reports_last_accept() {
        // The real automaton dies at the '.' with no fractional digit; the
        // last accept it saw is none at all, while the integer automaton
        // still claims the digit prefix.
        let real = Dfa::real();
        let integer = Dfa::integer();

        assert_eq!(real.longest_match(&chars("12."), 0), None);
        assert_eq!(integer.longest_match(&chars("12."), 0), Some(2));
        assert_eq!(real.longest_match(&chars("12.5x"), 0), Some(4));
    }

    #[test]
    fn test_empty_range_is_noop() {
        let dfa = Dfa::builder(0)
            .accept(1)
            .transition_range(0, 'z', 'a', 1)
            .build();

        assert!(!dfa.accepts("a"));
        assert!(!dfa.accepts("z"));
    }

    #[test]
    #[should_panic(expected = "duplicate transition")]
    fn test_duplicate_edge_panics() {
        let _ = Dfa::builder(0).transition(0, 'a', 1).transition(0, 'a', 2);
    }
}
