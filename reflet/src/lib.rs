#![no_std]

mod color;
mod drag;
mod scene;
mod timestep;

pub use color::*;
pub use drag::*;
pub use scene::*;
pub use timestep::*;

pub use nalgebra;
use nalgebra::{RealField, Vector2};

/// A position in the plane.
pub type Point<S> = Vector2<S>;

/// Returns the mirror image of `point` across the line passing through `start` and `end`.
///
/// The line is unbounded: `start` and `end` only give its position and direction, the
/// distance between them is only used for normalization.
///
/// `start` and `end` must differ. If they don't, the direction of the line is undefined,
/// and so is the returned point (it will usually be made of `NaN`s).
#[inline]
#[must_use]
pub fn reflect<S: RealField>(point: &Point<S>, start: &Point<S>, end: &Point<S>) -> Point<S> {
    let dir = (end - start).normalize();

    let t = (point - start).dot(&dir);
    let foot = start + dir * t;

    foot.clone() + foot - point
}

/// A line segment, also used to describe the infinite line passing through its endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment<S> {
    pub start: Point<S>,
    pub end: Point<S>,
}

impl<S> LineSegment<S> {
    #[inline]
    #[must_use]
    pub fn new(start: impl Into<Point<S>>, end: impl Into<Point<S>>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl<S: RealField> LineSegment<S> {
    /// `end - start`, not normalized.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Point<S> {
        &self.end - &self.start
    }

    /// Whether both endpoints coincide, in which case this segment doesn't define a line,
    /// and [`Self::reflect`] returns garbage.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// See [`reflect`].
    #[inline]
    #[must_use]
    pub fn reflect(&self, point: &Point<S>) -> Point<S> {
        reflect(point, &self.start, &self.end)
    }
}
