//! Turns a validated [`Nfa`] into positioned diagram geometry.
//!
//! States sit on a fixed circle in declaration order, edges are straight arrows (with
//! a special radial construction for self-loops), edge labels stack upwards from the
//! arrow midpoint and accepting states get a dashed ring in a final pass. All
//! coordinates, radii and offsets are fixed constants; the layout is deterministic in
//! the automaton alone.

use std::f64::consts::FRAC_PI_2;

use tracing::trace;

use crate::math::Point;
use crate::nfa::{Nfa, State};
use crate::palette::{ColorCycler, ColorName};
use crate::Show;

mod primitive;
pub use primitive::{Diagram, Primitive, LABEL_FONT};

/// Radius of the circle the state nodes are placed on.
pub const CIRCLE_RADIUS: f64 = 150.0;
/// Center of that circle on the canvas.
pub const CANVAS_CENTER: Point = Point::new(400.0, 300.0);
/// Radius of a state node disc.
pub const NODE_RADIUS: f64 = 30.0;
/// Radius of the dashed ring around accepting states.
pub const RING_RADIUS: f64 = 40.0;

// Arrowheads are pulled back from the target center so they land on the node
// boundary. The source end is not shortened, arrows start at the source center.
const ARROW_PULLBACK: f64 = 30.0;
const RING_DASH: (u8, u8) = (5, 5);
const RING_WIDTH: f64 = 2.0;
const NODE_WIDTH: f64 = 1.0;
// First edge label sits slightly above the arrow midpoint, every further symbol of
// the group moves up by a fixed step (input order maps to bottom-to-top stacking).
const LABEL_RISE_FIRST: f64 = 10.0;
const LABEL_RISE_STEP: f64 = 20.0;
// Self-loop arrows are pushed outward along the node's own angle and their tip is
// then offset along the tangent.
const LOOP_RADIAL_FACTOR: f64 = 1.2;
const LOOP_TANGENT_OFFSET: f64 = 15.0;

const OUTLINE_COLOR: ColorName = "black";
const TEXT_COLOR: ColorName = "black";
const FILL_NORMAL: ColorName = "white";
const FILL_INITIAL: ColorName = "green";
const FILL_FINAL: ColorName = "red";

fn node_fill(state: &State) -> ColorName {
    // final styling wins over initial when a state is both
    if state.is_final() {
        FILL_FINAL
    } else if state.is_initial() {
        FILL_INITIAL
    } else {
        FILL_NORMAL
    }
}

impl Nfa {
    /// Computes the diagram geometry for this automaton, see [`layout`].
    pub fn layout(&self) -> Diagram {
        layout(self)
    }
}

/// Computes the full diagram geometry of `nfa`: node discs with their name labels,
/// one colored arrow per transition group with its stacked symbol labels, and dashed
/// rings around accepting states. The returned primitives are in z-order.
///
/// Expects a validated automaton, a transition group endpoint that cannot be resolved
/// to a placed state is a caller contract violation. An automaton without states
/// yields an empty diagram.
pub fn layout(nfa: &Nfa) -> Diagram {
    let mut diagram = Diagram::default();
    let n = nfa.state_count();
    if n == 0 {
        return diagram;
    }
    let step = (360.0 / n as f64).to_radians();
    let angle_of = |index: usize| index as f64 * step;
    let positions: Vec<Point> = (0..n)
        .map(|i| Point::polar(CANVAS_CENTER, CIRCLE_RADIUS, angle_of(i)))
        .collect();

    for (state, &center) in nfa.states().iter().zip(&positions) {
        diagram.push(Primitive::Disc {
            center,
            radius: NODE_RADIUS,
            outline: OUTLINE_COLOR,
            fill: Some(node_fill(state)),
            width: NODE_WIDTH,
            dash: None,
        });
        diagram.push(Primitive::Label {
            at: center,
            text: state.name().to_string(),
            color: TEXT_COLOR,
        });
    }

    let mut cycler = ColorCycler::new();
    for group in nfa.transition_groups() {
        let color = cycler.next_color();
        let source = nfa
            .state_position(group.source())
            .expect("group endpoints must be declared states");
        let target = nfa
            .state_position(group.target())
            .expect("group endpoints must be declared states");
        let start = positions[source];

        let tip = if group.is_loop() {
            let angle = angle_of(source);
            let mid = Point::polar(CANVAS_CENTER, LOOP_RADIAL_FACTOR * CIRCLE_RADIUS, angle);
            mid.offset(LOOP_TANGENT_OFFSET, angle + FRAC_PI_2)
        } else {
            let end = positions[target];
            end.offset(-ARROW_PULLBACK, start.angle_to(end))
        };
        trace!("edge {} from {} to {}", group.show(), start.show(), tip.show());

        diagram.push(Primitive::Arrow {
            from: start,
            to: tip,
            color,
        });

        let mid = start.midpoint(tip);
        for (k, &symbol) in group.symbols().iter().enumerate() {
            diagram.push(Primitive::Label {
                at: mid.raised(LABEL_RISE_FIRST + k as f64 * LABEL_RISE_STEP),
                text: symbol.to_string(),
                color: TEXT_COLOR,
            });
        }
    }

    for (state, &center) in nfa.states().iter().zip(&positions) {
        if state.is_final() {
            diagram.push(Primitive::Disc {
                center,
                radius: RING_RADIUS,
                outline: OUTLINE_COLOR,
                fill: None,
                width: RING_WIDTH,
                dash: Some(RING_DASH),
            });
        }
    }

    diagram
}
