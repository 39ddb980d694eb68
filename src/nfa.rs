//! The automaton model: states with roles, grouped transitions and the validated
//! [`Nfa`] aggregate that the acceptance and layout engines operate on.

use itertools::Itertools;

use crate::{math, Show};

mod state;
pub use state::{parse_states, State, StateRole, FINAL_MARKER, INITIAL_MARKER, STATE_SEPARATOR};

mod transition;
pub use transition::{build_transitions, check_transition_count, TransitionField, TransitionGroup};

/// The kinds of validation failures that can occur while an automaton is defined. All
/// of them are recoverable, the user fixes the input and resubmits; a failed operation
/// commits nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NfaError {
    /// A transition row has an empty field after trimming. The whole batch is rejected.
    MissingField {
        /// Zero-based index of the offending row.
        row: usize,
        /// Which of the three fields was empty.
        field: TransitionField,
    },
    /// A transition references a state identifier that was never declared.
    UndeclaredState {
        /// Source state of the offending transition group.
        from: String,
        /// Target state of the offending transition group.
        to: String,
    },
    /// A non-positive number of transition rows was requested.
    NumTransitionsNotPositive(i64),
}

impl std::fmt::Display for NfaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NfaError::MissingField { row, field } => {
                write!(f, "transition {}: the {} field is empty", row + 1, field)
            }
            NfaError::UndeclaredState { from, to } => {
                write!(f, "invalid transition ({from}, {to}): undeclared state")
            }
            NfaError::NumTransitionsNotPositive(count) => {
                write!(f, "number of transitions must be greater than zero, got {count}")
            }
        }
    }
}

/// A nondeterministic finite automaton, the combination of declared states and their
/// transition groups. Constructed only through [`Nfa::from_parts`], which validates
/// that every transition endpoint names a declared state; there is no mutation API,
/// redefining the automaton replaces the whole object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: Vec<State>,
    groups: Vec<TransitionGroup>,
}

impl Nfa {
    /// Assembles an automaton from parsed states and built transition groups. Scans
    /// the groups in stored order and aborts with [`NfaError::UndeclaredState`] on the
    /// first group whose endpoint is not a declared state name.
    pub fn from_parts(
        states: Vec<State>,
        groups: Vec<TransitionGroup>,
    ) -> Result<Self, NfaError> {
        let declared: math::Set<&str> = states.iter().map(|q| q.name()).collect();
        for group in &groups {
            if !declared.contains(group.source()) || !declared.contains(group.target()) {
                return Err(NfaError::UndeclaredState {
                    from: group.source().to_string(),
                    to: group.target().to_string(),
                });
            }
        }
        Ok(Self { states, groups })
    }

    /// The declared states, in declaration order. This order doubles as the placement
    /// order on the layout circle.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The number of declared states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// The transition groups, in declaration order of their first contributing row.
    pub fn transition_groups(&self) -> &[TransitionGroup] {
        &self.groups
    }

    /// Iterates over all states from which runs may start. May be empty, may yield
    /// more than one state.
    pub fn initial_states(&self) -> impl Iterator<Item = &State> {
        self.states.iter().filter(|q| q.is_initial())
    }

    /// Iterates over all states in which runs may accept.
    pub fn accepting_states(&self) -> impl Iterator<Item = &State> {
        self.states.iter().filter(|q| q.is_final())
    }

    /// Looks a state up by name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|q| q.name() == name)
    }

    /// Returns the position of the named state in declaration order.
    pub fn state_position(&self, name: &str) -> Option<usize> {
        self.states.iter().position(|q| q.name() == name)
    }

    /// All symbols that appear on some transition, in first-seen order.
    pub fn alphabet(&self) -> Vec<char> {
        self.groups
            .iter()
            .flat_map(|group| group.symbols())
            .copied()
            .unique()
            .collect()
    }

    /// Returns a string rendering of the transition table of the automaton, one row
    /// per state (role markers included in the label) and one column per alphabet
    /// symbol. A cell lists the states reachable from the row state on the column
    /// symbol, or `-` if there are none.
    pub fn build_transition_table(&self) -> String {
        let alphabet = self.alphabet();
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(alphabet.iter().map(|sym| sym.show())),
        );
        for state in &self.states {
            let mut row = vec![state.show()];
            for &sym in &alphabet {
                let targets = self
                    .groups
                    .iter()
                    .filter(|group| group.source() == state.name() && group.matches(sym))
                    .map(|group| group.target())
                    .join(", ");
                row.push(if targets.is_empty() {
                    "-".to_string()
                } else {
                    targets
                });
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn simple_nfa() -> Nfa {
        let states = parse_states("-q0, +q1");
        let groups = build_transitions([("q0", "a", "q1"), ("q1", "b", "q1")]).unwrap();
        Nfa::from_parts(states, groups).unwrap()
    }

    #[test]
    fn from_parts_validates_endpoints() {
        let nfa = simple_nfa();
        assert_eq!(nfa.state_count(), 2);
        assert_eq!(nfa.initial_states().count(), 1);
        assert_eq!(nfa.accepting_states().count(), 1);
        assert_eq!(nfa.state_position("q1"), Some(1));
    }

    #[test]
    fn undeclared_endpoint_aborts_construction() {
        let states = parse_states("-q0, +q1");
        let groups =
            build_transitions([("q0", "a", "q1"), ("q0", "b", "q7"), ("q8", "c", "q0")]).unwrap();
        assert_eq!(
            Nfa::from_parts(states, groups),
            Err(NfaError::UndeclaredState {
                from: "q0".to_string(),
                to: "q7".to_string()
            })
        );
    }

    #[test]
    fn zero_or_many_initial_states_are_legal() {
        let none = Nfa::from_parts(parse_states("q0, q1"), vec![]).unwrap();
        assert_eq!(none.initial_states().count(), 0);
        let many = Nfa::from_parts(parse_states("-q0, -q1"), vec![]).unwrap();
        assert_eq!(many.initial_states().count(), 2);
    }

    #[test]
    fn alphabet_in_first_seen_order() {
        let groups =
            build_transitions([("q0", "b", "q1"), ("q0", "a", "q0"), ("q1", "b", "q0")]).unwrap();
        let nfa = Nfa::from_parts(parse_states("-q0, +q1"), groups).unwrap();
        assert_eq!(nfa.alphabet(), vec!['b', 'a']);
    }

    #[test]
    fn transition_table_lists_targets() {
        let table = simple_nfa().build_transition_table();
        assert!(table.contains("-q0"));
        assert!(table.contains("+q1"));
        assert!(table.contains("State"));
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            NfaError::NumTransitionsNotPositive(0).to_string(),
            "number of transitions must be greater than zero, got 0"
        );
        assert_eq!(
            NfaError::MissingField {
                row: 0,
                field: TransitionField::Symbol
            }
            .to_string(),
            "transition 1: the symbol field is empty"
        );
        assert_eq!(
            NfaError::UndeclaredState {
                from: "q0".to_string(),
                to: "q7".to_string()
            }
            .to_string(),
            "invalid transition (q0, q7): undeclared state"
        );
    }
}
