use super::*;

use core::{array, time::Duration};
use num_traits::AsPrimitive;
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq)]
pub struct ColoredVertex<S> {
    pub position: Point<S>,
    pub color: Rgba,
}

/// The mirror image of the scene's triangle, one color per vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct ReflectedTriangle<S> {
    pub vertices: [ColoredVertex<S>; 3],
}

impl<S: RealField> ReflectedTriangle<S> {
    #[must_use]
    pub fn new(mirror: &LineSegment<S>, triangle: &[Point<S>; 3], colors: &[Rgba; 3]) -> Self {
        Self {
            vertices: array::from_fn(|i| ColoredVertex {
                position: mirror.reflect(&triangle[i]),
                color: colors[i],
            }),
        }
    }
}

/// Identifies one of the five draggable points of a [`Scene`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointId {
    MirrorStart,
    MirrorEnd,
    Triangle0,
    Triangle1,
    Triangle2,
}

impl PointId {
    /// In draw order, bottom-most first.
    pub const ALL: [Self; 5] = [
        Self::MirrorStart,
        Self::MirrorEnd,
        Self::Triangle0,
        Self::Triangle1,
        Self::Triangle2,
    ];
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams<S> {
    /// Initial endpoints of the mirror.
    pub mirror: [Point<S>; 2],
    /// Initial vertices of the triangle.
    pub triangle: [Point<S>; 3],
    /// Radius of the circle around each point in which it can be grabbed.
    pub hit_radius: S,
    /// Number of update ticks per second.
    pub tick_rate: u32,
    /// Colors of the reflected triangle's vertices.
    pub reflection_colors: [Rgba; 3],
    /// [`scale`]s `reflection_colors`.
    pub reflection_intensity: f32,
}

impl<S: RealField + Copy> Default for SceneParams<S>
where
    f64: AsPrimitive<S>,
{
    fn default() -> Self {
        let p = |x: f64, y: f64| -> Point<S> { Point::new(x.as_(), y.as_()) };

        Self {
            mirror: [p(400., 100.), p(400., 500.)],
            triangle: [p(200., 200.), p(100., 400.), p(300., 400.)],
            hit_radius: 10f64.as_(),
            tick_rate: 80,
            reflection_colors: [Rgba::RED, Rgba::GREEN, Rgba::BLUE],
            reflection_intensity: 1.,
        }
    }
}

/// A mirror, a triangle, and the triangle's reflection across the mirror.
///
/// The mirror's endpoints and the triangle's vertices can be dragged around. The reflection
/// is only recomputed on [`tick`](Self::tick)s, it always reflects the positions
/// of the points as of the last tick (or of creation, before the first tick).
#[derive(Clone, Debug)]
pub struct Scene<S> {
    mirror: [DraggablePoint<S>; 2],
    triangle: [DraggablePoint<S>; 3],
    reflected: ReflectedTriangle<S>,
    reflection_colors: [Rgba; 3],
    cursor: Point<S>,
    timestep: FixedTimestep,
}

impl<S: RealField> Scene<S> {
    /// # Panics
    ///
    /// if `params.tick_rate` is zero
    #[must_use]
    pub fn new(params: SceneParams<S>) -> Self {
        let SceneParams {
            mirror,
            triangle,
            hit_radius,
            tick_rate,
            reflection_colors,
            reflection_intensity,
        } = params;

        let reflection_colors = reflection_colors.map(|c| scale(c, reflection_intensity));
        let reflected = ReflectedTriangle::new(
            &LineSegment::new(mirror[0].clone(), mirror[1].clone()),
            &triangle,
            &reflection_colors,
        );

        Self {
            mirror: mirror.map(|p| DraggablePoint::new(p, hit_radius.clone())),
            triangle: triangle.map(|p| DraggablePoint::new(p, hit_radius.clone())),
            reflected,
            reflection_colors,
            cursor: Point::zeros(),
            timestep: FixedTimestep::from_rate(tick_rate),
        }
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> &Point<S> {
        &self.cursor
    }

    #[inline]
    pub fn set_cursor(&mut self, cursor: impl Into<Point<S>>) {
        self.cursor = cursor.into();
    }

    #[inline]
    #[must_use]
    pub fn point(&self, id: PointId) -> &DraggablePoint<S> {
        let [m0, m1] = &self.mirror;
        let [t0, t1, t2] = &self.triangle;

        match id {
            PointId::MirrorStart => m0,
            PointId::MirrorEnd => m1,
            PointId::Triangle0 => t0,
            PointId::Triangle1 => t1,
            PointId::Triangle2 => t2,
        }
    }

    #[inline]
    #[must_use]
    pub fn point_mut(&mut self, id: PointId) -> &mut DraggablePoint<S> {
        let [m0, m1] = &mut self.mirror;
        let [t0, t1, t2] = &mut self.triangle;

        match id {
            PointId::MirrorStart => m0,
            PointId::MirrorEnd => m1,
            PointId::Triangle0 => t0,
            PointId::Triangle1 => t1,
            PointId::Triangle2 => t2,
        }
    }

    fn points_mut(&mut self) -> impl Iterator<Item = &mut DraggablePoint<S>> + '_ {
        self.mirror.iter_mut().chain(self.triangle.iter_mut())
    }

    /// Grabs the topmost point under the cursor, if any. Every other point is released.
    pub fn press(&mut self) {
        let cursor = self.cursor.clone();
        let mut grabbed = None;

        for id in PointId::ALL.into_iter().rev() {
            let point = self.point_mut(id);

            if grabbed.is_some() {
                point.end_drag();
            } else if point.begin_drag(&cursor) {
                grabbed = Some(id);
            }
        }

        match grabbed {
            Some(point) => debug!(?point, "grabbed"),
            None => trace!("press missed every point"),
        }
    }

    pub fn release(&mut self) {
        if let Some(point) = self.dragged() {
            debug!(?point, "released");
        }

        self.points_mut().for_each(DraggablePoint::end_drag);
    }

    /// The point currently being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<PointId> {
        PointId::ALL
            .into_iter()
            .find(|&id| self.point(id).is_dragging())
    }

    /// Runs one update: moves the dragged point onto the cursor and recomputes the reflection.
    pub fn tick(&mut self) {
        let cursor = self.cursor.clone();
        self.points_mut().for_each(|p| p.drag(&cursor));

        self.reflected =
            ReflectedTriangle::new(&self.mirror(), &self.triangle(), &self.reflection_colors);
    }

    /// Adds `elapsed` to the accumulated time and runs as many ticks as fit in it.
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.timestep.accumulate(elapsed);

        let mut ticks = 0;
        while self.timestep.consume_tick() {
            self.tick();
            ticks += 1;
        }

        trace!(ticks, "advanced");
        ticks
    }

    #[inline]
    #[must_use]
    pub const fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    #[inline]
    #[must_use]
    pub const fn mirror_points(&self) -> &[DraggablePoint<S>; 2] {
        &self.mirror
    }

    #[inline]
    #[must_use]
    pub const fn triangle_points(&self) -> &[DraggablePoint<S>; 3] {
        &self.triangle
    }

    #[inline]
    #[must_use]
    pub fn mirror(&self) -> LineSegment<S> {
        let [start, end] = &self.mirror;
        LineSegment::new(start.position().clone(), end.position().clone())
    }

    #[inline]
    #[must_use]
    pub fn triangle(&self) -> [Point<S>; 3] {
        array::from_fn(|i| self.triangle[i].position().clone())
    }

    /// The closed outline of the triangle: `0 -> 1`, `1 -> 2`, then back `2 -> 0`.
    #[inline]
    #[must_use]
    pub fn triangle_edges(&self) -> [LineSegment<S>; 3] {
        let t = self.triangle();
        array::from_fn(|i| LineSegment::new(t[i].clone(), t[(i + 1) % 3].clone()))
    }

    #[inline]
    #[must_use]
    pub const fn reflected(&self) -> &ReflectedTriangle<S> {
        &self.reflected
    }
}
