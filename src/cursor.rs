//! Custom cursor state and animation-frame coalescing of pointer moves.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorState {
    pub x: i32,
    pub y: i32,
    pub visible: bool,
    pub hovering: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            visible: true,
            hovering: false,
        }
    }
}

impl CursorState {
    pub fn style(&self) -> String {
        format!("transform: translate({}px, {}px);", self.x, self.y)
    }
}

/// Collects pointer positions between animation frames so the page state is
/// updated at most once per frame, always with the newest position.
#[derive(Debug, Default)]
pub struct PointerCoalescer {
    latest: Option<(i32, i32)>,
    frame_requested: bool,
}

impl PointerCoalescer {
    /// Records a position. Returns `true` when the caller must request a frame.
    pub fn record(&mut self, x: i32, y: i32) -> bool {
        self.latest = Some((x, y));
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Called from the frame callback.
    pub fn flush(&mut self) -> Option<(i32, i32)> {
        self.frame_requested = false;
        self.latest.take()
    }

    pub fn cancel(&mut self) {
        self.frame_requested = false;
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_frame_per_burst_with_latest_position() {
        let mut coalescer = PointerCoalescer::default();

        assert!(coalescer.record(1, 1));
        assert!(!coalescer.record(2, 2));
        assert!(!coalescer.record(3, 4));

        assert_eq!(coalescer.flush(), Some((3, 4)));
        assert_eq!(coalescer.flush(), None);
        assert!(coalescer.record(5, 5));
    }

    #[test]
    fn cancel_drops_pending_position() {
        let mut coalescer = PointerCoalescer::default();
        coalescer.record(9, 9);
        coalescer.cancel();
        assert_eq!(coalescer.flush(), None);
        assert!(coalescer.record(1, 2));
    }

    #[test]
    fn cursor_starts_visible_at_origin() {
        let cursor = CursorState::default();
        assert!(cursor.visible);
        assert!(!cursor.hovering);
        assert_eq!(cursor.style(), "transform: translate(0px, 0px);");
    }
}
