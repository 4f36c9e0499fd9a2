use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// A point that can be grabbed with the cursor and moved around.
///
/// It can be grabbed from anywhere inside the circle of radius `radius` centered at
/// its position. While grabbed, [`Self::drag`] snaps it onto the cursor, no matter
/// where in that circle it was grabbed from.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggablePoint<S> {
    position: Point<S>,
    radius: S,
    state: DragState,
}

impl<S> DraggablePoint<S> {
    #[inline]
    #[must_use]
    pub fn new(position: impl Into<Point<S>>, radius: S) -> Self {
        Self {
            position: position.into(),
            radius,
            state: DragState::Idle,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> &Point<S> {
        &self.position
    }

    #[inline]
    #[must_use]
    pub const fn radius(&self) -> &S {
        &self.radius
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    #[inline]
    pub fn end_drag(&mut self) {
        self.state = DragState::Idle;
    }
}

impl<S: RealField> DraggablePoint<S> {
    /// Whether `cursor` lies in this point's hit circle (boundary included).
    #[inline]
    #[must_use]
    pub fn contains(&self, cursor: &Point<S>) -> bool {
        (cursor - &self.position).norm_squared() <= self.radius.clone() * self.radius.clone()
    }

    /// Starts dragging if `cursor` hits this point, stops otherwise.
    ///
    /// Doesn't move the point. Returns whether it is being dragged.
    #[inline]
    pub fn begin_drag(&mut self, cursor: &Point<S>) -> bool {
        self.state = if self.contains(cursor) {
            DragState::Dragging
        } else {
            DragState::Idle
        };

        self.is_dragging()
    }

    /// Moves this point onto `cursor`, if it is being dragged.
    ///
    /// `cursor` isn't validated in any way, points can be dragged off-screen.
    #[inline]
    pub fn drag(&mut self, cursor: &Point<S>) {
        if self.is_dragging() {
            self.position.clone_from(cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> DraggablePoint<f32> {
        DraggablePoint::<f32>::new([100f32, 100.], 10.)
    }

    #[test]
    fn starts_idle() {
        let p = point();
        assert_eq!(p.state(), DragState::Idle);
        assert_eq!(p.position(), &Point::new(100., 100.));
    }

    #[test]
    fn begin_drag_inside_hit_circle() {
        let mut p = point();
        assert!(p.begin_drag(&Point::new(105., 105.)));
        assert_eq!(p.state(), DragState::Dragging);
        // grabbing alone doesn't move the point
        assert_eq!(p.position(), &Point::new(100., 100.));
    }

    #[test]
    fn begin_drag_outside_hit_circle() {
        let mut p = point();
        assert!(!p.begin_drag(&Point::new(200., 200.)));
        assert_eq!(p.state(), DragState::Idle);
    }

    #[test]
    fn hit_region_is_a_circle() {
        let p = point();
        // inside the bounding square, outside the circle
        assert!(!p.contains(&Point::new(108., 108.)));
        assert!(p.contains(&Point::new(110., 100.)));
        assert!(p.contains(&Point::new(100., 90.)));
    }

    #[test]
    fn missed_press_releases_a_dragged_point() {
        let mut p = point();
        p.begin_drag(&Point::new(100., 100.));
        assert!(!p.begin_drag(&Point::new(0., 0.)));
        assert!(!p.is_dragging());
    }

    #[test]
    fn drag_snaps_to_cursor_then_end_drag_freezes() {
        let mut p = point();
        p.begin_drag(&Point::new(105., 105.));

        p.drag(&Point::new(50., 60.));
        assert_eq!(p.position(), &Point::new(50., 60.));

        p.end_drag();
        p.drag(&Point::new(70., 80.));
        assert_eq!(p.position(), &Point::new(50., 60.));
        assert_eq!(p.state(), DragState::Idle);
    }

    #[test]
    fn idle_drag_is_a_no_op() {
        let mut p = point();
        p.drag(&Point::new(-1000., 3000.));
        assert_eq!(p.position(), &Point::new(100., 100.));
    }

    #[test]
    fn cursor_may_leave_the_window() {
        let mut p = point();
        p.begin_drag(&Point::new(100., 100.));
        p.drag(&Point::new(-50., 1e6));
        assert_eq!(p.position(), &Point::new(-50., 1e6));
    }
}
