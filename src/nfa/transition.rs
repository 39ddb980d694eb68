use itertools::Itertools;
use tracing::trace;

use super::NfaError;
use crate::Show;

/// Identifies which field of a transition row was found empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionField {
    /// The state the transition leaves from.
    From,
    /// The symbol labelling the transition.
    Symbol,
    /// The state the transition goes to.
    To,
}

impl std::fmt::Display for TransitionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionField::From => write!(f, "from state"),
            TransitionField::Symbol => write!(f, "symbol"),
            TransitionField::To => write!(f, "to state"),
        }
    }
}

/// All symbols labelling transitions between one ordered pair of states. Symbol order
/// is insertion order, which determines the bottom-to-top stacking of edge labels in
/// the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionGroup {
    from: String,
    to: String,
    symbols: Vec<char>,
}

impl TransitionGroup {
    /// Creates a group between `from` and `to` carrying the given symbols.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        symbols: impl IntoIterator<Item = char>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            symbols: symbols.into_iter().collect(),
        }
    }

    /// The state this group of transitions leaves from.
    pub fn source(&self) -> &str {
        &self.from
    }

    /// The state this group of transitions goes to.
    pub fn target(&self) -> &str {
        &self.to
    }

    /// The symbols labelling this edge, in insertion order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Whether some transition of this group is taken when reading `symbol`.
    pub fn matches(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Whether source and target coincide.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    fn push_symbol(&mut self, symbol: char) {
        self.symbols.push(symbol);
    }
}

impl Show for TransitionGroup {
    fn show(&self) -> String {
        format!("({}, {}, {})", self.from, self.symbols.show(), self.to)
    }
}

/// Verifies that a requested number of transition rows is positive, returning it as a
/// `usize` capacity.
pub fn check_transition_count(count: i64) -> Result<usize, NfaError> {
    if count <= 0 {
        return Err(NfaError::NumTransitionsNotPositive(count));
    }
    Ok(count as usize)
}

/// Builds transition groups from raw `(from, symbol, to)` text rows. Every field must
/// be non-empty after trimming, otherwise the whole batch is rejected and nothing is
/// committed. Rows between the same ordered state pair merge into a single group, with
/// group order given by the first contributing row and symbol order by row order. Only
/// the first character of the symbol field is significant, symbols are single
/// characters by contract.
pub fn build_transitions<R, S>(rows: R) -> Result<Vec<TransitionGroup>, NfaError>
where
    R: IntoIterator<Item = (S, S, S)>,
    S: AsRef<str>,
{
    let mut groups: Vec<TransitionGroup> = Vec::new();
    for (row, (from, symbol, to)) in rows.into_iter().enumerate() {
        let from = from.as_ref().trim();
        let to = to.as_ref().trim();
        if from.is_empty() {
            return Err(NfaError::MissingField {
                row,
                field: TransitionField::From,
            });
        }
        let Some(symbol) = symbol.as_ref().trim().chars().next() else {
            return Err(NfaError::MissingField {
                row,
                field: TransitionField::Symbol,
            });
        };
        if to.is_empty() {
            return Err(NfaError::MissingField {
                row,
                field: TransitionField::To,
            });
        }

        match groups
            .iter_mut()
            .find(|group| group.source() == from && group.target() == to)
        {
            Some(group) => group.push_symbol(symbol),
            None => groups.push(TransitionGroup::new(from, to, [symbol])),
        }
    }
    trace!(
        "built transition groups {}",
        groups.iter().map(|g| g.show()).join(", ")
    );
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::{build_transitions, check_transition_count, TransitionField, TransitionGroup};
    use crate::nfa::NfaError;

    #[test]
    fn rows_merge_by_state_pair() {
        let groups =
            build_transitions([("q0", "a", "q1"), ("q0", "b", "q0"), ("q0", "b", "q1")]).unwrap();
        assert_eq!(
            groups,
            vec![
                TransitionGroup::new("q0", "q1", ['a', 'b']),
                TransitionGroup::new("q0", "q0", ['b']),
            ]
        );
        assert!(groups[1].is_loop());
        assert!(!groups[0].is_loop());
    }

    #[test]
    fn fields_are_trimmed() {
        let groups = build_transitions([(" q0 ", " a ", " q1 ")]).unwrap();
        assert_eq!(groups, vec![TransitionGroup::new("q0", "q1", ['a'])]);
    }

    #[test]
    fn empty_field_rejects_whole_batch() {
        let result = build_transitions([("q0", "a", "q1"), ("q1", "  ", "q0")]);
        assert_eq!(
            result,
            Err(NfaError::MissingField {
                row: 1,
                field: TransitionField::Symbol
            })
        );

        assert_eq!(
            build_transitions([("", "a", "q1")]),
            Err(NfaError::MissingField {
                row: 0,
                field: TransitionField::From
            })
        );
        assert_eq!(
            build_transitions([("q0", "a", "\t")]),
            Err(NfaError::MissingField {
                row: 0,
                field: TransitionField::To
            })
        );
    }

    #[test]
    fn transition_count_must_be_positive() {
        assert_eq!(check_transition_count(3), Ok(3));
        assert_eq!(
            check_transition_count(0),
            Err(NfaError::NumTransitionsNotPositive(0))
        );
        assert_eq!(
            check_transition_count(-2),
            Err(NfaError::NumTransitionsNotPositive(-2))
        );
    }
}
