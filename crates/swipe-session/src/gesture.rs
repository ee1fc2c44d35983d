use std::sync::Arc;

use tracing::debug;

use super::types::{DecodeOutcome, GestureResponse, Point, PointerAction, PointerEvent, TrailAction};
use super::SwipeSession;

impl SwipeSession {
    /// Handle a raw pointer sample in device coordinates.
    ///
    /// `Down` starts a gesture and is also processed as the first move, so a
    /// gesture that starts on a key consumes that key immediately.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureResponse {
        let x = event.x - self.origin.x;
        let y = event.y - self.origin.y;
        match event.action {
            PointerAction::Down => GestureResponse::trail(self.on_pointer_down(x, y)),
            PointerAction::Move => GestureResponse::trail(self.on_pointer_move(x, y)),
            PointerAction::Up => {
                let outcome = self.on_pointer_up();
                GestureResponse {
                    trail: TrailAction::Clear,
                    outcome: Some(outcome),
                }
            }
        }
    }

    /// Start a gesture at keyboard-local `(x, y)`.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> TrailAction {
        if self.decoder.is_active() {
            debug!("pointer down during gesture; restarting");
        }
        self.decoder
            .init_swipe(self.dict.snapshot(), Arc::clone(&self.keyboard), x, y);
        self.on_pointer_move(x, y)
    }

    /// Extend the gesture to keyboard-local `(x, y)`. Ignored when no gesture
    /// is in progress.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> TrailAction {
        match self.decoder.swipe_changed(x, y) {
            Some((from, to)) => TrailAction::Segment { from, to },
            None => TrailAction::None,
        }
    }

    /// End the gesture, notify listeners and return the ranked result.
    pub fn on_pointer_up(&mut self) -> DecodeOutcome {
        let outcome = self.decoder.end_swipe();
        self.notify(&outcome);
        outcome
    }

    /// Feed a whole gesture of keyboard-local points: down at the first,
    /// moves through the rest, then up.
    pub fn swipe_path(&mut self, points: &[Point]) -> DecodeOutcome {
        if let Some((first, rest)) = points.split_first() {
            self.on_pointer_down(first.x, first.y);
            for p in rest {
                self.on_pointer_move(p.x, p.y);
            }
        }
        self.on_pointer_up()
    }
}
