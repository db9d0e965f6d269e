use glam::Vec2;
use rustc_hash::FxHashMap;

/// Horizontal swipe direction (the way the finger travelled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right-to-left.
    Left,
    /// Finger moved left-to-right.
    Right,
}

/// Tracks touch starts and classifies completed gestures as swipes.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    threshold: f32,
    starts: FxHashMap<u64, Vec2>,
}

impl SwipeTracker {
    /// Tracker with the given minimum horizontal travel in pixels.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            starts: FxHashMap::default(),
        }
    }

    /// Minimum horizontal travel in pixels.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Number of touches currently down.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.starts.len()
    }

    /// Record where touch `id` began.
    pub fn touch_start(&mut self, id: u64, position: Vec2) {
        let _ = self.starts.insert(id, position);
    }

    /// Finish touch `id`; returns a swipe if it travelled far enough,
    /// mostly horizontally.
    pub fn touch_end(&mut self, id: u64, position: Vec2) -> Option<Swipe> {
        let start = self.starts.remove(&id)?;
        let delta = position - start;
        if delta.x.abs() <= self.threshold || delta.x.abs() < delta.y.abs() {
            return None;
        }
        if delta.x < 0.0 {
            Some(Swipe::Left)
        } else {
            Some(Swipe::Right)
        }
    }

    /// Drop touch `id` without classifying it.
    pub fn touch_cancel(&mut self, id: u64) {
        let _ = self.starts.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_horizontal_swipes() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.touch_start(1, Vec2::new(300.0, 100.0));
        assert_eq!(
            tracker.touch_end(1, Vec2::new(200.0, 110.0)),
            Some(Swipe::Left)
        );

        tracker.touch_start(2, Vec2::new(100.0, 100.0));
        assert_eq!(
            tracker.touch_end(2, Vec2::new(180.0, 90.0)),
            Some(Swipe::Right)
        );
        assert_eq!(tracker.active_touches(), 0);
    }

    #[test]
    fn short_or_vertical_gestures_are_ignored() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.touch_start(1, Vec2::ZERO);
        assert_eq!(tracker.touch_end(1, Vec2::new(50.0, 0.0)), None);

        tracker.touch_start(2, Vec2::ZERO);
        assert_eq!(tracker.touch_end(2, Vec2::new(60.0, 200.0)), None);
    }

    #[test]
    fn unknown_or_cancelled_touches_yield_nothing() {
        let mut tracker = SwipeTracker::new(50.0);
        assert_eq!(tracker.touch_end(9, Vec2::new(500.0, 0.0)), None);

        tracker.touch_start(3, Vec2::ZERO);
        tracker.touch_cancel(3);
        assert_eq!(tracker.touch_end(3, Vec2::new(-500.0, 0.0)), None);
    }
}
