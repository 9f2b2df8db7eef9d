//! Layout primitives shared by the pointer renderer and page hosts.
//!
//! All coordinates are in pixels relative to the viewport's top-left corner
//! unless a type says otherwise.

/// A position in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Interpolate between `self` and `to` by `t` (0 ⇒ `self`, 1 ⇒ `to`).
    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point::new(lerp(self.x, to.x, t), lerp(self.y, to.y, t))
    }

    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// An axis-aligned box, e.g. an element's bounding client rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// The same box moved by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Visible area of the page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `rect` lies entirely inside the viewport.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.top() >= 0.0
            && rect.left() >= 0.0
            && rect.bottom() <= self.height
            && rect.right() <= self.width
    }

    /// Clamp the left edge of a box `size` wide so it stays `margin` away from
    /// both horizontal edges. Boxes wider than the viewport pin to the left margin.
    pub fn clamp_x(&self, x: f64, size: f64, margin: f64) -> f64 {
        clamp_axis(x, size, margin, self.width)
    }

    /// Vertical counterpart of [`Viewport::clamp_x`].
    pub fn clamp_y(&self, y: f64, size: f64, margin: f64) -> f64 {
        clamp_axis(y, size, margin, self.height)
    }
}

fn clamp_axis(value: f64, size: f64, margin: f64, extent: f64) -> f64 {
    let max = extent - size - margin;
    if max < margin {
        margin
    } else {
        value.clamp(margin, max)
    }
}
