use super::*;

use core::f32::consts::TAU;
use na::Vector2;

/// Colors and dimensions used when tessellating shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub handle: Rgba,
    pub dragged_handle: Rgba,
    pub line: Rgba,
    pub line_width: f32,
    pub circle_segments: u16,
}

impl From<&DemoParams> for Style {
    fn from(params: &DemoParams) -> Self {
        Self {
            handle: params.handle_color,
            dragged_handle: lerp(
                params.handle_color,
                params.drag_highlight,
                params.drag_highlight_amount,
            ),
            line: params.line_color,
            line_width: params.line_width,
            circle_segments: params.circle_segments,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from(&DemoParams::default())
    }
}

/// A wrapper around a `Vec<T>` that only allows appending.
pub struct List<T>(pub(crate) Vec<T>);

impl<T> List<T> {
    #[inline]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.0.reserve(additional);
    }

    /// Removes everything, keeping the allocation around.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Extend<T> for List<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl List<Vertex> {
    #[inline]
    fn push_triangle(&mut self, [a, b, c]: [Vector2<f32>; 3], color: Rgba) {
        self.extend([a, b, c].map(|p| Vertex::new(&p, color)));
    }
}

/// A shape that can be drawn as a list of triangles.
///
/// Every three vertices appended to `list` make up a triangle,
/// shapes are drawn in the order they are appended in.
#[impl_trait_for_tuples::impl_for_tuples(16)]
pub trait Tessellate {
    fn tessellate(&self, style: &Style, list: &mut List<Vertex>);
}

impl<T: Tessellate> Tessellate for [T] {
    fn tessellate(&self, style: &Style, list: &mut List<Vertex>) {
        self.iter().for_each(|a| a.tessellate(style, list));
    }
}

impl<const N: usize, T: Tessellate> Tessellate for [T; N] {
    fn tessellate(&self, style: &Style, list: &mut List<Vertex>) {
        self.as_slice().tessellate(style, list);
    }
}

impl<T: Tessellate + ?Sized> Tessellate for &T {
    fn tessellate(&self, style: &Style, list: &mut List<Vertex>) {
        (*self).tessellate(style, list);
    }
}

fn to_f32<S: Scalar + AsPrimitive<f32>>(p: &Point<S>) -> Vector2<f32> {
    p.map(|s| s.as_())
}

/// A filled disk the size of the point's hit circle.
impl<S: Scalar + AsPrimitive<f32>> Tessellate for DraggablePoint<S> {
    fn tessellate(&self, style: &Style, list: &mut List<Vertex>) {
        let n = style.circle_segments.max(3);

        let center = to_f32(self.position());
        let r: f32 = self.radius().as_();

        let color = if self.is_dragging() {
            style.dragged_handle
        } else {
            style.handle
        };

        let rim = |i: u16| {
            let (sin, cos) = (f32::from(i) / f32::from(n) * TAU).sin_cos();
            center + Vector2::new(cos, sin) * r
        };

        list.reserve(usize::from(n) * 3);

        for i in 0..n {
            list.push_triangle([center, rim(i), rim(i + 1)], color);
        }
    }
}

/// A quad `style.line_width` wide. Nothing at all if both endpoints (nearly) coincide.
impl<S: Scalar + AsPrimitive<f32>> Tessellate for LineSegment<S> {
    fn tessellate(&self, style: &Style, list: &mut List<Vertex>) {
        let (start, end) = (to_f32(&self.start), to_f32(&self.end));

        let Some(dir) = (end - start).try_normalize(f32::EPSILON) else {
            return;
        };

        let offset = Vector2::new(-dir.y, dir.x) * (style.line_width * 0.5);

        let [a, b, c, d] = [start + offset, start - offset, end - offset, end + offset];

        list.push_triangle([a, b, c], style.line);
        list.push_triangle([a, c, d], style.line);
    }
}

/// Colors are interpolated between the vertices.
impl<S: Scalar + AsPrimitive<f32>> Tessellate for ReflectedTriangle<S> {
    fn tessellate(&self, _: &Style, list: &mut List<Vertex>) {
        list.extend(self.vertices.iter().map(Vertex::from));
    }
}

/// Draws, from bottom to top: the mirror's handles, the mirror, the triangle's handles,
/// its outline, and finally its reflection.
impl<S: RealField + AsPrimitive<f32>> Tessellate for Scene<S> {
    fn tessellate(&self, style: &Style, list: &mut List<Vertex>) {
        (
            self.mirror_points(),
            &self.mirror(),
            self.triangle_points(),
            &self.triangle_edges(),
            self.reflected(),
        )
            .tessellate(style, list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tessellate(shape: &impl Tessellate, style: &Style) -> Vec<Vertex> {
        let mut list = List::default();
        shape.tessellate(style, &mut list);
        list.into_inner()
    }

    fn style() -> Style {
        Style {
            handle: Rgba::WHITE,
            dragged_handle: Rgba::YELLOW,
            line: Rgba::GREEN,
            line_width: 2.,
            circle_segments: 8,
        }
    }

    #[test]
    fn style_from_params_tints_dragged_handles() {
        let style = Style::default();
        assert_eq!(style.handle, Rgba::WHITE);
        assert_eq!(style.dragged_handle, Rgba::new(1., 1., 0.5, 1.));
    }

    #[test]
    fn handle_is_a_disk_of_the_hit_radius() {
        let point = DraggablePoint::<f32>::new([100f32, 50.], 10.);
        let vertices = tessellate(&point, &style());

        assert_eq!(vertices.len(), 8 * 3);

        for tri in vertices.chunks_exact(3) {
            assert_eq!(tri[0].position, [100., 50.]);

            for v in &tri[1..] {
                let [x, y] = v.position;
                assert_relative_eq!(
                    Vector2::new(x - 100., y - 50.).norm(),
                    10.,
                    epsilon = 1e-4
                );
            }
        }

        assert!(vertices.iter().all(|v| v.color == Rgba::WHITE.to_array()));
    }

    #[test]
    fn dragged_handle_is_tinted() {
        let mut point = DraggablePoint::<f32>::new([0f32, 0.], 10.);
        point.begin_drag(&Point::new(1., 1.));

        let vertices = tessellate(&point, &style());
        assert!(vertices.iter().all(|v| v.color == Rgba::YELLOW.to_array()));
    }

    #[test]
    fn line_is_a_quad_of_the_line_width() {
        let line = LineSegment::<f32>::new([0f32, 0.], [10., 0.]);
        let vertices = tessellate(&line, &style());

        assert_eq!(vertices.len(), 6);

        for v in &vertices {
            let [x, y] = v.position;
            assert!(x == 0. || x == 10.);
            assert_relative_eq!(y.abs(), 1.);
            assert_eq!(v.color, Rgba::GREEN.to_array());
        }
    }

    #[test]
    fn degenerate_line_is_skipped() {
        let line = LineSegment::<f32>::new([5f32, 5.], [5., 5.]);
        assert!(tessellate(&line, &style()).is_empty());
    }

    #[test]
    fn reflected_triangle_keeps_vertex_colors() {
        let scene = Scene::<f32>::new(SceneParams::default());
        let vertices = tessellate(scene.reflected(), &style());

        assert_eq!(
            vertices,
            [
                Vertex::new(&Point::new(600f32, 200.), Rgba::RED),
                Vertex::new(&Point::new(700f32, 400.), Rgba::GREEN),
                Vertex::new(&Point::new(500f32, 400.), Rgba::BLUE),
            ]
        );
    }

    #[test]
    fn scene_draws_reflection_last() {
        let scene = Scene::<f32>::new(SceneParams::default());
        let style = style();
        let vertices = tessellate(&scene, &style);

        let handles = 5 * 8 * 3;
        let lines = 4 * 6;
        assert_eq!(vertices.len(), handles + lines + 3);

        let last: Vec<_> = vertices[vertices.len() - 3..]
            .iter()
            .map(|v| v.color)
            .collect();
        assert_eq!(
            last,
            [Rgba::RED, Rgba::GREEN, Rgba::BLUE].map(Rgba::to_array)
        );

        // the mirror's handles come first
        assert_eq!(vertices[0].position, [400., 100.]);
    }
}
