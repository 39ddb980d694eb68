use tracing::trace;

use crate::Show;

/// Character that separates state tokens in a specification string.
pub const STATE_SEPARATOR: char = ',';
/// Marker character that flags a state token as initial.
pub const INITIAL_MARKER: char = '-';
/// Marker character that flags a state token as final.
pub const FINAL_MARKER: char = '+';

/// The role a state plays in an automaton. Initial and final are independent flags,
/// so a state may well carry both (and such a state accepts the empty word).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StateRole {
    /// Whether runs of the automaton may start in this state.
    pub initial: bool,
    /// Whether runs of the automaton may accept in this state.
    pub accepting: bool,
}

impl StateRole {
    /// The role of a state that is neither initial nor final.
    pub const NORMAL: Self = Self {
        initial: false,
        accepting: false,
    };
    /// The role of a state that is initial but not final.
    pub const INITIAL: Self = Self {
        initial: true,
        accepting: false,
    };
    /// The role of a state that is final but not initial.
    pub const FINAL: Self = Self {
        initial: false,
        accepting: true,
    };

    /// Returns true if the state is neither initial nor final.
    pub fn is_normal(&self) -> bool {
        !self.initial && !self.accepting
    }
}

/// A single state of an automaton, identified by its (trimmed) name. States are
/// created once when the automaton is defined and immutable afterwards; redefining
/// the automaton replaces all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    name: String,
    role: StateRole,
}

impl State {
    /// Creates a state with the given name and role.
    pub fn new(name: impl Into<String>, role: StateRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// The identifier of this state. Compared by exact string equality, no case folding.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The role of this state.
    pub fn role(&self) -> StateRole {
        self.role
    }

    /// Whether runs may start in this state.
    pub fn is_initial(&self) -> bool {
        self.role.initial
    }

    /// Whether runs may accept in this state.
    pub fn is_final(&self) -> bool {
        self.role.accepting
    }
}

impl Show for State {
    fn show(&self) -> String {
        match (self.is_initial(), self.is_final()) {
            (true, true) => format!("{}{}{}", INITIAL_MARKER, FINAL_MARKER, self.name),
            (true, false) => format!("{}{}", INITIAL_MARKER, self.name),
            (false, true) => format!("{}{}", FINAL_MARKER, self.name),
            (false, false) => self.name.clone(),
        }
    }
}

/// Parses a comma-separated state specification into states, keeping the token order
/// (which later doubles as diagram placement order). Each token is trimmed, a
/// [`FINAL_MARKER`] makes it final and an [`INITIAL_MARKER`] makes it initial; both
/// markers are stripped from the identifier wherever they occur. A token that carries
/// both markers yields a state that is both initial and final.
pub fn parse_states(spec: &str) -> Vec<State> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Vec::new();
    }
    let states: Vec<_> = spec
        .split(STATE_SEPARATOR)
        .map(|token| {
            let token = token.trim();
            let role = StateRole {
                initial: token.contains(INITIAL_MARKER),
                accepting: token.contains(FINAL_MARKER),
            };
            let name: String = token
                .chars()
                .filter(|c| *c != INITIAL_MARKER && *c != FINAL_MARKER)
                .collect();
            State::new(name.trim(), role)
        })
        .collect();
    trace!("parsed {} states from {:?}", states.len(), spec);
    states
}

#[cfg(test)]
mod tests {
    use super::{parse_states, State, StateRole};
    use crate::Show;

    #[test]
    fn roles_from_markers() {
        let states = parse_states("-q0, q1, +q2");
        assert_eq!(
            states,
            vec![
                State::new("q0", StateRole::INITIAL),
                State::new("q1", StateRole::NORMAL),
                State::new("q2", StateRole::FINAL),
            ]
        );
    }

    #[test]
    fn both_markers_give_both_roles() {
        let states = parse_states("-+q0");
        assert_eq!(states.len(), 1);
        assert!(states[0].is_initial());
        assert!(states[0].is_final());
        assert_eq!(states[0].name(), "q0");
        assert_eq!(states[0].show(), "-+q0");
    }

    #[test]
    fn markers_are_stripped_anywhere() {
        let states = parse_states("q0+ , q-1");
        assert_eq!(states[0].name(), "q0");
        assert!(states[0].is_final());
        assert_eq!(states[1].name(), "q1");
        assert!(states[1].is_initial());
    }

    #[test]
    fn tokens_keep_input_order() {
        let states = parse_states("b, a, +c, -d");
        let names: Vec<_> = states.iter().map(|q| q.name().to_string()).collect();
        assert_eq!(names, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn empty_spec_has_no_states() {
        assert!(parse_states("").is_empty());
        assert!(parse_states("   ").is_empty());
    }
}
