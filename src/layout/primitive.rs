use crate::math::Point;
use crate::palette::ColorName;

/// Font tag attached to every text primitive, matching what the drawing surface
/// expects for node and edge labels.
pub const LABEL_FONT: (&str, u32, &str) = ("Arial", 12, "bold");

/// A single drawing instruction with absolute coordinates. The presentation shell
/// replays these verbatim onto its drawing surface, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A circle, drawn as an oval with equal radii.
    Disc {
        /// Center of the circle.
        center: Point,
        /// Radius of the circle.
        radius: f64,
        /// Outline color.
        outline: ColorName,
        /// Fill color, `None` leaves the interior untouched.
        fill: Option<ColorName>,
        /// Outline stroke width.
        width: f64,
        /// Dash pattern of the outline, `None` draws it solid.
        dash: Option<(u8, u8)>,
    },
    /// A straight line with an arrowhead at its `to` end.
    Arrow {
        /// Start of the line, at the source node's center.
        from: Point,
        /// Tip of the arrowhead.
        to: Point,
        /// Line color.
        color: ColorName,
    },
    /// A piece of text in [`LABEL_FONT`], centered at `at`.
    Label {
        /// Center of the rendered text.
        at: Point,
        /// The text itself.
        text: String,
        /// Text color.
        color: ColorName,
    },
}

/// The fully positioned geometry of one automaton diagram, an ordered sequence of
/// [`Primitive`]s whose order is also the z-order: nodes first, then edges with their
/// labels, then the dashed rings around accepting states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram(Vec<Primitive>);

impl Diagram {
    /// The draw primitives in z-order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.0
    }

    pub(crate) fn push(&mut self, primitive: Primitive) {
        self.0.push(primitive);
    }
}

impl std::ops::Deref for Diagram {
    type Target = [Primitive];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Diagram {
    type Item = &'a Primitive;
    type IntoIter = std::slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
