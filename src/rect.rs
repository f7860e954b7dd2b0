use cgmath::Vector2;
use mint;

/// Axis-aligned rectangle, `y` growing downwards like the rest of the
/// stage coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Constructor.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Checks whether `point` lies inside the rectangle. Points on the
    /// left/top edges are inside, points on the right/bottom edges are not.
    pub fn contains(&self, point: mint::Point2<f32>) -> bool {
        point.x >= self.x && point.x < self.x + self.w && point.y >= self.y
            && point.y < self.y + self.h
    }

    /// Intersection with another rectangle, `None` if they don't overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.w).min(other.x + other.w);
        let y1 = (self.y + self.h).min(other.y + other.h);
        if x1 > x0 && y1 > y0 {
            Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
        } else {
            None
        }
    }

    // AABB of a point cloud, used for clip shapes that ended up rotated.
    pub(crate) fn bounding(points: &[Vector2<f32>]) -> Rect {
        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}
