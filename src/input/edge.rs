/// Rising-edge detector over a sampled boolean level.
///
/// Holding a key keeps its level high across many ticks; only the first
/// sampled tick reports an edge, so one physical press moves exactly one
/// slide. The input processor keeps one detector per key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    previous: bool,
}

impl EdgeDetector {
    /// Detector whose previous level is low.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this tick's level; returns `true` on a low → high transition.
    pub fn update(&mut self, level: bool) -> bool {
        let rising = level && !self.previous;
        self.previous = level;
        rising
    }
}
