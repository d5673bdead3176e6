/// Integer axis-aligned rectangle in viewport units. Used both as the render
/// rectangle and as the hitbox of every sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of the given size whose bottom edge is centered on `(center_x, bottom)`.
    pub fn from_midbottom(width: i32, height: i32, center_x: i32, bottom: i32) -> Self {
        Self::new(center_x - width / 2, bottom - height, width, height)
    }

    /// Rectangle of the given size centered inside `outer`.
    pub fn centered_in(width: i32, height: i32, outer: &Bounds) -> Self {
        Self::new(
            outer.center_x() - width / 2,
            outer.y + outer.height / 2 - height / 2,
            width,
            height,
        )
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Strict overlap test. Touching edges do not count, and the result is
    /// the same whichever rectangle it is called on.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// True when the rectangle lies entirely inside `outer`.
    pub fn is_within(&self, outer: &Bounds) -> bool {
        self.left() >= outer.left()
            && self.right() <= outer.right()
            && self.top() >= outer.top()
            && self.bottom() <= outer.bottom()
    }
}
