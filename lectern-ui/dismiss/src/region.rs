use iced::{Point, Rectangle};

/// Area of the screen that can tell whether a pointer position belongs to it.
pub trait Region {
    /// Return `true` when `point` lies inside the region.
    fn contains(&self, point: Point) -> bool;
}

impl Region for Rectangle {
    fn contains(&self, point: Point) -> bool {
        Rectangle::contains(self, point)
    }
}

impl<R: Region> Region for [R] {
    fn contains(&self, point: Point) -> bool {
        self.iter().any(|region| region.contains(point))
    }
}

impl<R: Region> Region for Option<R> {
    fn contains(&self, point: Point) -> bool {
        self.as_ref().is_some_and(|region| region.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use iced::{Point, Rectangle, Size};

    use super::Region;

    fn panel() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(100.0, 200.0))
    }

    #[test]
    fn given_rectangle_when_point_inside_then_contains() {
        assert!(Region::contains(&panel(), Point::new(50.0, 50.0)));
    }

    #[test]
    fn given_rectangle_when_point_outside_then_does_not_contain() {
        assert!(!Region::contains(&panel(), Point::new(150.0, 50.0)));
    }

    #[test]
    fn given_region_slice_when_any_member_contains_point_then_contains() {
        let regions = [
            panel(),
            Rectangle::new(Point::new(300.0, 0.0), Size::new(10.0, 10.0)),
        ];

        assert!(Region::contains(&regions[..], Point::new(305.0, 5.0)));
        assert!(!Region::contains(&regions[..], Point::new(200.0, 5.0)));
    }

    #[test]
    fn given_missing_region_when_checked_then_never_contains() {
        let missing: Option<Rectangle> = None;

        assert!(!Region::contains(&missing, Point::ORIGIN));
    }
}
