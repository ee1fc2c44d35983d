//! Keyboard geometry and point-to-key lookup.
//!
//! Rows are stacked top to bottom and split the keyboard height evenly. Every
//! key is `rect.width / longest_row` wide; rows shorter than the longest are
//! centred, which leaves dead margins at their ends. Lookup is two binary
//! searches, rows by `y` then keys by `x`, with half-open `start <= v < end`
//! inclusion so shared edges resolve to the right/lower neighbour.


use std::cmp::Ordering;

use crate::unicode::to_upper;

/// The stock three-row letter layout.
pub const QWERTY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LayoutError {
    #[error("layout has no rows")]
    EmptyLayout,
    #[error("row {0} has no keys")]
    EmptyRow(usize),
    #[error("empty label at row {row}, key {key}")]
    EmptyLabel { row: usize, key: usize },
    #[error("invalid keyboard size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
}

/// Half-open interval `[start, end)` on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, v: f32) -> bool {
        self.start <= v && v < self.end
    }

    pub fn center(&self) -> f32 {
        (self.start + self.end) / 2.0
    }

    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    fn cmp_value(&self, v: f32) -> Ordering {
        if v < self.start {
            Ordering::Greater
        } else if v >= self.end {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rectangle anchored at the local origin.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    span: Span,
    vspan: Span,
    ch: char,
    label: String,
    center: (f32, f32),
    index: usize,
    row: usize,
}

impl Key {
    /// The uppercase character this key emits.
    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Ordinal of the key across the whole keyboard, row-major.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Horizontal extent.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.span.start,
            self.vspan.start,
            self.span.len(),
            self.vspan.len(),
        )
    }

    pub fn center(&self) -> (f32, f32) {
        self.center
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Vertical extent.
    span: Span,
    keys: Vec<Key>,
}

impl Row {
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    fn key_at(&self, x: f32) -> Option<&Key> {
        self.keys
            .binary_search_by(|k| k.span.cmp_value(x))
            .ok()
            .map(|i| &self.keys[i])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keyboard {
    rect: Rect,
    rows: Vec<Row>,
    longest_row: usize,
    key_count: usize,
}

impl Keyboard {
    /// Build a layout where every character of a row string is one key.
    pub fn new<S: AsRef<str>>(rect: Rect, rows: &[S]) -> Result<Self, LayoutError> {
        let labels: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.as_ref().chars().map(String::from).collect())
            .collect();
        Self::from_labels(rect, &labels)
    }

    /// Build a layout from explicit key labels. A key emits the uppercased
    /// first character of its label.
    pub fn from_labels<S: AsRef<str>>(rect: Rect, rows: &[Vec<S>]) -> Result<Self, LayoutError> {
        if !(rect.width.is_finite()
            && rect.height.is_finite()
            && rect.left.is_finite()
            && rect.top.is_finite()
            && rect.width > 0.0
            && rect.height > 0.0)
        {
            return Err(LayoutError::InvalidSize {
                width: rect.width,
                height: rect.height,
            });
        }
        if rows.is_empty() {
            return Err(LayoutError::EmptyLayout);
        }
        if let Some(i) = rows.iter().position(|r| r.is_empty()) {
            return Err(LayoutError::EmptyRow(i));
        }

        let longest_row = rows.iter().map(Vec::len).max().unwrap_or(0);
        let key_width = rect.width / longest_row as f32;
        let row_edges = edges(rect.top, rect.height, rows.len());

        let mut index = 0;
        let mut built = Vec::with_capacity(rows.len());
        for (r, labels) in rows.iter().enumerate() {
            let vspan = Span::new(row_edges[r], row_edges[r + 1]);
            let row_width = key_width * labels.len() as f32;
            let key_edges = if labels.len() == longest_row {
                edges(rect.left, rect.width, longest_row)
            } else {
                edges(rect.left + (rect.width - row_width) / 2.0, row_width, labels.len())
            };

            let mut keys = Vec::with_capacity(labels.len());
            for (k, label) in labels.iter().enumerate() {
                let label = label.as_ref();
                let ch = label
                    .chars()
                    .next()
                    .map(to_upper)
                    .ok_or(LayoutError::EmptyLabel { row: r, key: k })?;
                let span = Span::new(key_edges[k], key_edges[k + 1]);
                keys.push(Key {
                    span,
                    vspan,
                    ch,
                    label: label.to_string(),
                    center: (span.center(), vspan.center()),
                    index,
                    row: r,
                });
                index += 1;
            }
            built.push(Row { span: vspan, keys });
        }

        Ok(Self {
            rect,
            rows: built,
            longest_row,
            key_count: index,
        })
    }

    /// The stock QWERTY layout filling `rect`.
    pub fn qwerty(rect: Rect) -> Result<Self, LayoutError> {
        Self::new(rect, &QWERTY_ROWS)
    }

    /// A layout anchored at the origin whose height is `key_height` per row.
    pub fn with_key_height<S: AsRef<str>>(
        width: f32,
        key_height: f32,
        rows: &[S],
    ) -> Result<Self, LayoutError> {
        Self::new(Rect::sized(width, key_height * rows.len() as f32), rows)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().flat_map(|r| r.keys.iter())
    }

    pub fn key_count(&self) -> usize {
        self.key_count
    }

    /// Length of the longest row; bounds how far back the decoder may fork.
    pub fn longest_key_span(&self) -> usize {
        self.longest_row
    }

    /// The key containing `(x, y)` in keyboard-local coordinates.
    pub fn key_at(&self, x: f32, y: f32) -> Option<&Key> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let row = self
            .rows
            .binary_search_by(|r| r.span.cmp_value(y))
            .ok()
            .map(|i| &self.rows[i])?;
        row.key_at(x)
    }

    /// First key emitting `ch` (case-insensitive).
    pub fn find_key(&self, ch: char) -> Option<&Key> {
        let upper = to_upper(ch);
        self.keys().find(|k| k.ch == upper)
    }

    pub fn distance_from_center(&self, key: &Key, x: f32, y: f32) -> f32 {
        let (cx, cy) = key.center;
        (x - cx).hypot(y - cy)
    }
}

/// Height of one key row: the label glyph plus padding above and below.
pub fn key_height(glyph_height: f32, vertical_padding: f32) -> f32 {
    glyph_height + 2.0 * vertical_padding
}

/// `n + 1` boundaries splitting `[start, start + len)` into `n` equal parts.
/// Neighbouring parts share the exact same boundary value and the last one
/// lands on `start + len`.
fn edges(start: f32, len: f32, n: usize) -> Vec<f32> {
    let mut out: Vec<f32> = (0..=n)
        .map(|i| start + len * i as f32 / n as f32)
        .collect();
    out[n] = start + len;
    out
}
