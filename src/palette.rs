//! Deterministic assignment of colors to transition arrows.

/// A named color as understood by the drawing surface.
pub type ColorName = &'static str;

/// The fixed, ordered palette that transition groups are colored from. The palette
/// contains `green` twice, which is faithfully kept; consumers may therefore see the
/// same color on two groups even before the palette wraps around.
pub const PALETTE: [ColorName; 11] = [
    "blue", "green", "orange", "purple", "cyan", "magenta", "green", "pink", "red", "beige",
    "aqua",
];

/// Hands out one color of [`PALETTE`] per call, wrapping around with modulo arithmetic
/// once the palette is exhausted. A fresh cycler is created for every layout pass, so
/// the k-th transition group of a diagram always receives `PALETTE[k % PALETTE.len()]`.
#[derive(Debug, Clone, Default)]
pub struct ColorCycler {
    cursor: usize,
}

impl ColorCycler {
    /// Creates a cycler whose first handed-out color is `PALETTE[0]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current palette color and advances the cursor. Advanced once per
    /// transition group, never per symbol.
    pub fn next_color(&mut self) -> ColorName {
        let color = PALETTE[self.cursor];
        self.cursor = (self.cursor + 1) % PALETTE.len();
        color
    }
}
