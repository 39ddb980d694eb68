//! Core of an NFA visualizer: the automaton model, the nondeterministic acceptance
//! search and the deterministic circular diagram layout.
//!
//! The crate deliberately covers only the logic of the system. A presentation shell
//! (text entry, dialogs, canvas) sits outside of it: the shell hands raw state and
//! transition text to the model, receives either a validation error ([`nfa::NfaError`])
//! or a validated [`nfa::Nfa`], and then either asks the acceptance engine for a
//! boolean verdict on an input word or asks the layout engine for a [`layout::Diagram`]
//! of positioned draw primitives which it replays verbatim onto its drawing surface.
//!
//! The three stages mirror that split:
//! - [`nfa`] parses state specifications (comma-separated tokens with `-`/`+` role
//!   markers), merges transition rows into groups keyed by their ordered state pair
//!   and validates that every transition endpoint was declared.
//! - [`Nfa::accepts`](nfa::Nfa::accepts) runs a recursive depth-first search over
//!   single `(state, position)` pairs. This reproduces the contracted (worst-case
//!   exponential) behavior, see the notes in [`acceptance`] for the bounded and
//!   memoized variants.
//! - [`layout::layout`] places states on a fixed circle in declaration order and
//!   derives arrow geometry, stacked edge labels and accepting-state rings, coloring
//!   transition groups from the cycling [`palette::PALETTE`].
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything,
/// i.e. `use nfaviz::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        acceptance::BudgetExceeded,
        layout::{self, layout, Diagram, Primitive, LABEL_FONT},
        math::{self, Point},
        nfa::{
            build_transitions, check_transition_count, parse_states, Nfa, NfaError, State,
            StateRole, TransitionField, TransitionGroup, FINAL_MARKER, INITIAL_MARKER,
            STATE_SEPARATOR,
        },
        palette::{ColorCycler, ColorName, PALETTE},
        Show,
    };
}

/// This module contains some definitions of mathematical objects which are used
/// throughout the crate and do not really fit to the top level.
pub mod math;

/// Defines the automaton model, its parsing operations and validation.
pub mod nfa;

/// Implements the acceptance search over an automaton.
pub mod acceptance;

/// Computes positioned diagram geometry from an automaton.
pub mod layout;

/// The fixed color palette for transition arrows and its cycler.
pub mod palette;

use itertools::Itertools;

/// Helper trait which can be used to display states, transitions and such.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state that should be
    /// for example q0 (with its role markers, so -q0 for an initial state) and for a
    /// transition group it should be (q0, "ab", q1). Just use something that makes
    /// sense. This is mainly used for debugging purposes.
    fn show(&self) -> String;
}

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for usize {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        format!("\"{}\"", self.iter().map(|x| x.show()).join(""))
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        self.as_slice().show()
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl<S: Show> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}
