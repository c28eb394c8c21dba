//! Plain geometry used by the drag and pinch handlers.
//! Nothing in here touches the DOM, so it is all testable on the host.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Inclusive range used by [`clamp`]. Defaults to unbounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }
}

/// Euclidean distance. A missing second point counts as zero distance.
pub fn distance(p1: Point, p2: Option<Point>) -> f64 {
    let Some(p2) = p2 else {
        return 0.0;
    };
    let x = (p1.x - p2.x).powi(2);
    let y = (p1.y - p2.y).powi(2);
    (x + y).sqrt()
}

/// Unlike `f64::clamp` this never panics: with `min > max`, `min` wins.
pub fn clamp(value: f64, span: Span) -> f64 {
    span.min.max(span.max.min(value))
}

/// Top-left offset that centers `element` inside `container`.
pub fn centered(container: Size, element: Size) -> Point {
    Point {
        x: (container.width - element.width) / 2.0,
        y: (container.height - element.height) / 2.0,
    }
}

/// Position and size limits for the element, keeping `gutter` px clear of every edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_left: f64,
    pub min_top: f64,
    pub max_left: f64,
    pub max_top: f64,
    pub max_width: f64,
    pub max_height: f64,
}

impl Bounds {
    pub fn compute(container: Size, element: Size, gutter: f64) -> Self {
        let max_left = container.width - element.width - gutter;
        let max_top = container.height - element.height - gutter;
        Self {
            min_left: gutter,
            min_top: gutter,
            max_left: gutter.max(max_left),
            max_top: gutter.max(max_top),
            max_width: (container.width - gutter * 2.0).max(0.0),
            max_height: (container.height - gutter * 2.0).max(0.0),
        }
    }

    pub fn clamp_position(&self, left: f64, top: f64) -> (f64, f64) {
        (
            clamp(
                left,
                Span {
                    min: self.min_left,
                    max: self.max_left,
                },
            ),
            clamp(
                top,
                Span {
                    min: self.min_top,
                    max: self.max_top,
                },
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Point::new(0.0, 0.0), Some(Point::new(3.0, 4.0)));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn distance_without_second_point_is_zero() {
        assert_eq!(distance(Point::new(10.0, -2.0), None), 0.0);
    }

    #[test]
    fn clamp_defaults_to_unbounded() {
        assert_eq!(clamp(-1.0e9, Span::default()), -1.0e9);
        assert_eq!(clamp(7.5, Span { min: 0.0, max: 5.0 }), 5.0);
        assert_eq!(clamp(-3.0, Span { min: 0.0, max: 5.0 }), 0.0);
    }

    #[test]
    fn clamp_with_inverted_span_prefers_min() {
        assert_eq!(clamp(3.0, Span { min: 10.0, max: 2.0 }), 10.0);
    }

    #[test]
    fn bounds_keep_gutter_on_every_side() {
        let b = Bounds::compute(Size::new(800.0, 600.0), Size::new(100.0, 50.0), 16.0);
        assert_eq!(b.min_left, 16.0);
        assert_eq!(b.min_top, 16.0);
        assert_eq!(b.max_left, 684.0);
        assert_eq!(b.max_top, 534.0);
        assert_eq!(b.max_width, 768.0);
        assert_eq!(b.max_height, 568.0);
    }

    #[test]
    fn bounds_never_put_max_below_gutter() {
        let b = Bounds::compute(Size::new(100.0, 100.0), Size::new(300.0, 300.0), 16.0);
        assert_eq!(b.max_left, 16.0);
        assert_eq!(b.max_top, 16.0);
        assert_eq!(b.clamp_position(-40.0, 500.0), (16.0, 16.0));
    }

    #[test]
    fn size_caps_never_go_negative() {
        let b = Bounds::compute(Size::new(20.0, 10.0), Size::new(5.0, 5.0), 16.0);
        assert_eq!(b.max_width, 0.0);
        assert_eq!(b.max_height, 0.0);
    }

    #[test]
    fn centered_allows_negative_offsets() {
        let c = centered(Size::new(200.0, 100.0), Size::new(50.0, 150.0));
        assert_eq!(c, Point::new(75.0, -25.0));
    }
}
