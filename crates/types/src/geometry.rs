/// An axis-aligned rectangle in points, measured from the top-left of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns a copy shifted down by `delta` with its height shrunk to match,
    /// clamping at zero height.
    pub fn inset_top(self, delta: f32) -> Self {
        let delta = delta.min(self.height);
        Self {
            y: self.y + delta,
            height: self.height - delta,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_top_clamps_at_zero_height() {
        let r = Rect::new(10.0, 20.0, 100.0, 30.0);
        let shrunk = r.inset_top(50.0);
        assert_eq!(shrunk.height, 0.0);
        assert_eq!(shrunk.y, 50.0);
        assert_eq!(shrunk.width, 100.0);
    }
}
