//! Deciding whether an input word is accepted by an [`Nfa`].
//!
//! The search mirrors the behavior that is contractually fixed for this system: a
//! recursive depth-first exploration of single `(state, position)` pairs, seeded once
//! per initial state, without memoization and without merging the frontier into a set
//! of simultaneously active states. Observable accept/reject answers are the contract;
//! the flip side is that the plain search can take time exponential in the length of
//! the input on highly ambiguous automata. [`Nfa::accepts_within`] bounds the explored
//! node count for adversarial inputs and [`Nfa::accepts_memoized`] is an equivalent
//! fast path that caches rejected pairs.

use tracing::{debug, trace};

use crate::{math, nfa::Nfa};

/// Returned by [`Nfa::accepts_within`] when the search used up its node budget before
/// reaching a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetExceeded(
    /// The budget that was exhausted.
    pub usize,
);

impl std::fmt::Display for BudgetExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "acceptance search exceeded its budget of {} nodes", self.0)
    }
}

impl Nfa {
    /// Decides whether `input` is accepted, i.e. whether some run from an initial
    /// state consumes all of `input` along valid transitions and ends in a final
    /// state. The empty word is accepted exactly if some initial state is also final.
    ///
    /// Worst-case exponential in the input length, see the module docs.
    pub fn accepts(&self, input: &str) -> bool {
        let input: Vec<char> = input.chars().collect();
        let accepted = self
            .initial_states()
            .any(|q| self.search(q.name(), &input, 0));
        debug!("input {:?} is {}", input, if accepted { "accepted" } else { "rejected" });
        accepted
    }

    fn search(&self, current: &str, input: &[char], position: usize) -> bool {
        if position == input.len() {
            return self.state(current).is_some_and(|q| q.is_final());
        }
        let symbol = input[position];
        // branches explored in group declaration order, first success short-circuits
        self.transition_groups()
            .iter()
            .filter(|group| group.source() == current && group.matches(symbol))
            .any(|group| self.search(group.target(), input, position + 1))
    }

    /// Like [`Nfa::accepts`], but gives up once `budget` many `(state, position)`
    /// nodes have been visited. The verdict is identical to [`Nfa::accepts`] whenever
    /// the budget suffices.
    pub fn accepts_within(&self, input: &str, budget: usize) -> Result<bool, BudgetExceeded> {
        let input: Vec<char> = input.chars().collect();
        let mut remaining = budget;
        for q in self.initial_states() {
            if self.search_bounded(q.name(), &input, 0, budget, &mut remaining)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn search_bounded(
        &self,
        current: &str,
        input: &[char],
        position: usize,
        budget: usize,
        remaining: &mut usize,
    ) -> Result<bool, BudgetExceeded> {
        if *remaining == 0 {
            trace!("search out of budget at state {current} position {position}");
            return Err(BudgetExceeded(budget));
        }
        *remaining -= 1;

        if position == input.len() {
            return Ok(self.state(current).is_some_and(|q| q.is_final()));
        }
        let symbol = input[position];
        for group in self
            .transition_groups()
            .iter()
            .filter(|group| group.source() == current && group.matches(symbol))
        {
            if self.search_bounded(group.target(), input, position + 1, budget, remaining)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Equivalent fast path for [`Nfa::accepts`] that caches `(state, position)` pairs
    /// from which no accepting continuation exists. Produces the same verdict as the
    /// plain search for every input, in time polynomial in automaton and input size.
    pub fn accepts_memoized(&self, input: &str) -> bool {
        let input: Vec<char> = input.chars().collect();
        let mut dead: math::Set<(usize, usize)> = math::Set::default();
        (0..self.state_count())
            .filter(|&q| self.states()[q].is_initial())
            .any(|q| self.search_memoized(q, &input, 0, &mut dead))
    }

    fn search_memoized(
        &self,
        current: usize,
        input: &[char],
        position: usize,
        dead: &mut math::Set<(usize, usize)>,
    ) -> bool {
        if dead.contains(&(current, position)) {
            return false;
        }
        if position == input.len() {
            if self.states()[current].is_final() {
                return true;
            }
            dead.insert((current, position));
            return false;
        }

        let name = self.states()[current].name();
        let symbol = input[position];
        let successors: Vec<usize> = self
            .transition_groups()
            .iter()
            .filter(|group| group.source() == name && group.matches(symbol))
            .filter_map(|group| self.state_position(group.target()))
            .collect();
        for successor in successors {
            if self.search_memoized(successor, input, position + 1, dead) {
                return true;
            }
        }
        dead.insert((current, position));
        false
    }
}
