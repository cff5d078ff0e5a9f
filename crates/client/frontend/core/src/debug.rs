//! Debug text overlay drawn in the lower-left corner of the canvas.
use arrayvec::ArrayVec;

/// Upper bound on configurable debug lines.
pub const MAX_DEBUG_SLOTS: usize = 8;

/// Fixed set of independently settable text lines.
///
/// Slot 0 is the bottom line; higher slots stack upwards. Writing past the
/// configured size never fails: slot 0 is overwritten with a notice instead.
#[derive(Clone, Debug)]
pub struct DebugCorner {
    lines: ArrayVec<String, MAX_DEBUG_SLOTS>,
}

impl DebugCorner {
    /// Creates `size` empty slots, clamped to `1..=MAX_DEBUG_SLOTS`.
    pub fn new(size: usize) -> Self {
        let size = size.clamp(1, MAX_DEBUG_SLOTS);
        let mut lines = ArrayVec::new();
        lines.extend((0..size).map(|_| String::new()));
        Self { lines }
    }

    pub fn size(&self) -> usize {
        self.lines.len()
    }

    pub fn set_text(&mut self, text: impl Into<String>, index: usize) {
        let size = self.size();
        match self.lines.get_mut(index) {
            Some(line) => *line = text.into(),
            None => self.lines[0] = format!("{index} ← index>{size} not supported"),
        }
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Lines in slot order, bottom first.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl Default for DebugCorner {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_start_empty() {
        let corner = DebugCorner::new(5);
        assert_eq!(corner.size(), 5);
        assert!(corner.lines().all(str::is_empty));
    }

    #[test]
    fn sets_independent_slots() {
        let mut corner = DebugCorner::new(5);
        corner.set_text("ability: dosis", 0);
        corner.set_text("fps: 60", 1);
        corner.set_text("frameCount: 12", 4);

        assert_eq!(corner.line(0), Some("ability: dosis"));
        assert_eq!(corner.line(1), Some("fps: 60"));
        assert_eq!(corner.line(2), Some(""));
        assert_eq!(corner.line(4), Some("frameCount: 12"));
    }

    #[test]
    fn out_of_range_redirects_to_slot_zero() {
        let mut corner = DebugCorner::new(5);
        corner.set_text("fps: 60", 1);
        corner.set_text("lost", 5);

        assert_eq!(corner.line(0), Some("5 ← index>5 not supported"));
        assert_eq!(corner.line(1), Some("fps: 60"));
        assert_eq!(corner.line(5), None);
    }

    #[test]
    fn size_is_clamped() {
        assert_eq!(DebugCorner::new(0).size(), 1);
        assert_eq!(DebugCorner::new(100).size(), MAX_DEBUG_SLOTS);
    }
}
