use crate::foundation::core::Point;

/// Ordered sequence of points produced by flattening a path.
///
/// When the source path ends with a close command the last point equals the first.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Wrap an existing point list.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polyline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the polyline has at least two points and ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Sum of consecutive point distances.
    pub fn arc_length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// New polyline with every point passed through `f`.
    pub fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            points: self.points.iter().copied().map(f).collect(),
        }
    }

    pub(crate) fn push(&mut self, p: Point) {
        self.points.push(p);
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
