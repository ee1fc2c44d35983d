use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use swipe_core::settings::settings;
use swipe_core::Keyboard;
use swipe_session::{DecodeOutcome, PointerEvent, SwipeSession as GestureSession};
use tracing::debug;

use super::listener::SwipeListener;
use super::{
    SwipeAppearance, SwipeDictionary, SwipeError, SwipeKey, SwipePointerAction, SwipeTrail,
};

#[derive(uniffi::Object)]
pub struct SwipeSession {
    dict: Arc<SwipeDictionary>,
    session: Mutex<GestureSession>,
    listener: RwLock<Option<Arc<dyn SwipeListener>>>,
}

fn build_keyboard(width: f32, glyph_height: f32) -> Result<Keyboard, SwipeError> {
    let s = settings();
    Ok(Keyboard::with_key_height(
        width,
        s.key_height(glyph_height),
        &s.keyboard.rows,
    )?)
}

#[uniffi::export]
impl SwipeSession {
    /// A session over the configured layout, `width` px wide, with rows sized
    /// for a label glyph `glyph_height` px tall.
    #[uniffi::constructor]
    pub fn new(
        dict: Arc<SwipeDictionary>,
        width: f32,
        glyph_height: f32,
    ) -> Result<Arc<Self>, SwipeError> {
        let keyboard = build_keyboard(width, glyph_height)?;
        let mut session = GestureSession::new(Arc::clone(&dict.inner), keyboard);
        session.set_max_candidates(settings().decoder.max_candidates);
        Ok(Arc::new(Self {
            dict,
            session: Mutex::new(session),
            listener: RwLock::new(None),
        }))
    }

    /// Rebuild the layout for a new size. A gesture in progress finishes on
    /// the old layout.
    pub fn resize(&self, width: f32, glyph_height: f32) -> Result<(), SwipeError> {
        let keyboard = build_keyboard(width, glyph_height)?;
        self.lock().set_keyboard(keyboard);
        Ok(())
    }

    /// Device position of the keyboard's top-left corner, subtracted from
    /// `handle_pointer` coordinates.
    pub fn set_origin(&self, x: f32, y: f32) {
        self.lock().set_origin(x, y);
    }

    pub fn set_listener(&self, listener: Option<Arc<dyn SwipeListener>>) {
        *self.listener.write().unwrap_or_else(PoisonError::into_inner) = listener;
    }

    /// Handle a raw pointer event in device coordinates.
    pub fn handle_pointer(&self, action: SwipePointerAction, x: f32, y: f32) -> SwipeTrail {
        let resp = self
            .lock()
            .handle_pointer(PointerEvent::new(action.into(), x, y));
        if let Some(outcome) = &resp.outcome {
            self.notify(outcome);
        }
        resp.trail.into()
    }

    pub fn on_pointer_down(&self, x: f32, y: f32) -> SwipeTrail {
        self.lock().on_pointer_down(x, y).into()
    }

    pub fn on_pointer_move(&self, x: f32, y: f32) -> SwipeTrail {
        self.lock().on_pointer_move(x, y).into()
    }

    /// End the gesture. Returns the ranked words (empty for no matches) and
    /// also reports them to the listener.
    pub fn on_pointer_up(&self) -> Vec<String> {
        let outcome = self.lock().on_pointer_up();
        self.notify(&outcome);
        outcome.words()
    }

    pub fn is_swiping(&self) -> bool {
        self.lock().is_swiping()
    }

    pub fn keys(&self) -> Vec<SwipeKey> {
        self.lock().keyboard().keys().map(SwipeKey::from).collect()
    }

    pub fn keyboard_height(&self) -> f32 {
        self.lock().keyboard().rect().height
    }

    pub fn dictionary(&self) -> Arc<SwipeDictionary> {
        Arc::clone(&self.dict)
    }

    pub fn appearance(&self) -> SwipeAppearance {
        let s = settings();
        let a = s.appearance();
        SwipeAppearance {
            label_color: a.label_color.argb(),
            label_size: s.keyboard.label_size,
            key_vertical_padding: s.keyboard.key_vertical_padding,
            outline_color: a.outline_color.argb(),
            outline_thickness: a.outline_thickness,
            swipe_color: a.swipe_color.argb(),
            swipe_thickness: a.swipe_thickness,
        }
    }
}

impl SwipeSession {
    fn lock(&self) -> MutexGuard<'_, GestureSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs with the session lock released so the listener may call back in.
    fn notify(&self, outcome: &DecodeOutcome) {
        let Some(listener) = self
            .listener
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        else {
            debug!("gesture finished with no listener");
            return;
        };
        match outcome {
            DecodeOutcome::Matches(_) => listener.on_word_swiped(outcome.words()),
            DecodeOutcome::NoMatches => listener.on_no_matches(),
        }
    }
}
