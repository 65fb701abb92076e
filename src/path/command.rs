use crate::foundation::core::Point;

/// One decoded drawing command of the simplified path grammar.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum PathCommand {
    /// `M x y`: set the current point and append it.
    MoveTo(Point),
    /// `L x y`: set the current point and append it.
    LineTo(Point),
    /// `Q cx cy x y`: quadratic Bézier from the current point through `control` to `end`.
    QuadraticCurveTo {
        /// Control point.
        control: Point,
        /// End point; becomes the new current point.
        end: Point,
    },
    /// `Z` / `z`: append the first point of the polyline again.
    Close,
}
