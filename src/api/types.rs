use swipe_core::{DictError, DictionaryStatus, Key, LayoutError};
use swipe_session::{Point, PointerAction, TrailAction};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum SwipeError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

impl From<DictError> for SwipeError {
    fn from(e: DictError) -> Self {
        match e {
            DictError::Io(_) | DictError::Open { .. } => Self::Io { msg: e.to_string() },
            DictError::Read { .. } => Self::InvalidData { msg: e.to_string() },
            DictError::WorkerPanicked => Self::Internal { msg: e.to_string() },
        }
    }
}

impl From<LayoutError> for SwipeError {
    fn from(e: LayoutError) -> Self {
        Self::InvalidData { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct SwipePoint {
    pub x: f32,
    pub y: f32,
}

/// A key rectangle in keyboard-local pixels, for drawing the keyboard.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct SwipeKey {
    pub label: String,
    pub row: u32,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Colours are packed `0xAARRGGBB`.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct SwipeAppearance {
    pub label_color: u32,
    pub label_size: f32,
    pub key_vertical_padding: f32,
    pub outline_color: u32,
    pub outline_thickness: f32,
    pub swipe_color: u32,
    pub swipe_thickness: f32,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum SwipeDictionaryStatus {
    Absent,
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum SwipePointerAction {
    Down,
    Move,
    Up,
}

/// Instruction for the swipe trail overlay.
#[derive(Debug, Clone, Copy, PartialEq, uniffi::Enum)]
pub enum SwipeTrail {
    None,
    Segment { from: SwipePoint, to: SwipePoint },
    Clear,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<DictionaryStatus> for SwipeDictionaryStatus {
    fn from(s: DictionaryStatus) -> Self {
        match s {
            DictionaryStatus::Absent => Self::Absent,
            DictionaryStatus::Loading => Self::Loading,
            DictionaryStatus::Ready => Self::Ready,
        }
    }
}

impl From<SwipePointerAction> for PointerAction {
    fn from(a: SwipePointerAction) -> Self {
        match a {
            SwipePointerAction::Down => Self::Down,
            SwipePointerAction::Move => Self::Move,
            SwipePointerAction::Up => Self::Up,
        }
    }
}

impl From<Point> for SwipePoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<TrailAction> for SwipeTrail {
    fn from(t: TrailAction) -> Self {
        match t {
            TrailAction::None => Self::None,
            TrailAction::Segment { from, to } => Self::Segment {
                from: from.into(),
                to: to.into(),
            },
            TrailAction::Clear => Self::Clear,
        }
    }
}

impl From<&Key> for SwipeKey {
    fn from(k: &Key) -> Self {
        let r = k.rect();
        Self {
            label: k.label().to_string(),
            row: k.row() as u32,
            left: r.left,
            top: r.top,
            width: r.width,
            height: r.height,
        }
    }
}
