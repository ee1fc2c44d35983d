pub const DEFAULT_MAX_CANDIDATES: usize = 10;

/// A point in keyboard-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A ranked candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: String,
    pub score: f32,
    /// Distinct keys that contributed a letter.
    pub keys: usize,
}

/// Result of a finished gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// Terminal words, best first, at most `max_candidates`.
    Matches(Vec<ScoredWord>),
    NoMatches,
}

impl DecodeOutcome {
    pub fn words(&self) -> Vec<String> {
        match self {
            Self::Matches(m) => m.iter().map(|s| s.word.clone()).collect(),
            Self::NoMatches => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoMatches)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
}

/// A raw pointer sample in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }
}

/// What the trail renderer should do after a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrailAction {
    /// Nothing to draw (e.g. a move with no gesture in progress).
    None,
    /// Draw a stroke between two keyboard-local points.
    Segment { from: Point, to: Point },
    /// Erase the whole trail.
    Clear,
}

/// Response to one pointer event. `outcome` is only set on `Up`.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureResponse {
    pub trail: TrailAction,
    pub outcome: Option<DecodeOutcome>,
}

impl GestureResponse {
    pub(crate) fn trail(trail: TrailAction) -> Self {
        Self {
            trail,
            outcome: None,
        }
    }
}
