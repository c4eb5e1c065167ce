//! Device color scheme preference sources
//!
//! A [`SchemeSource`] reports the host's current light/dark preference and
//! delivers change notifications to subscribers. Each notification carries
//! exactly one [`ColorScheme`].

use crate::platform::detect_system_color_scheme;
use crate::theme::ColorScheme;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};

new_key_type! {
    /// Handle for a source subscription
    pub struct SourceToken;
}

/// Callback invoked with each reported preference
pub type PreferenceCallback = Arc<dyn Fn(ColorScheme) + Send + Sync>;

/// Host light/dark preference, read once and observed for changes
pub trait SchemeSource: Send + Sync {
    /// Current preference, `None` if the host cannot report one
    fn preferred_scheme(&self) -> Option<ColorScheme>;

    /// Register for change notifications
    fn subscribe(&self, callback: PreferenceCallback) -> SourceToken;

    /// Stop notifications for `token`; unknown tokens are ignored
    fn unsubscribe(&self, token: SourceToken);
}

/// Subscriber table shared by the built-in sources
#[derive(Default)]
struct Listeners {
    callbacks: Mutex<SlotMap<SourceToken, PreferenceCallback>>,
}

impl Listeners {
    fn insert(&self, callback: PreferenceCallback) -> SourceToken {
        self.callbacks.lock().unwrap().insert(callback)
    }

    fn remove(&self, token: SourceToken) {
        self.callbacks.lock().unwrap().remove(token);
    }

    fn len(&self) -> usize {
        self.callbacks.lock().unwrap().len()
    }

    fn emit(&self, scheme: ColorScheme) {
        // Invoke outside the lock so callbacks may unsubscribe
        let callbacks: Vec<PreferenceCallback> =
            self.callbacks.lock().unwrap().values().cloned().collect();
        for callback in callbacks {
            callback(scheme);
        }
    }
}

/// A fixed preference that never changes
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticSource {
    scheme: Option<ColorScheme>,
}

impl StaticSource {
    pub fn new(scheme: Option<ColorScheme>) -> Self {
        Self { scheme }
    }

    /// A host that cannot report any preference
    pub fn unavailable() -> Self {
        Self { scheme: None }
    }
}

impl SchemeSource for StaticSource {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        self.scheme
    }

    fn subscribe(&self, _callback: PreferenceCallback) -> SourceToken {
        SourceToken::default()
    }

    fn unsubscribe(&self, _token: SourceToken) {}
}

/// Preference pushed in by the host
///
/// Bridges native appearance-change callbacks into the engine, and stands in
/// for the device in tests.
#[derive(Default)]
pub struct ManualSource {
    preference: Mutex<Option<ColorScheme>>,
    listeners: Listeners,
}

impl ManualSource {
    pub fn new(initial: Option<ColorScheme>) -> Self {
        Self {
            preference: Mutex::new(initial),
            listeners: Listeners::default(),
        }
    }

    /// Record a new device preference and notify subscribers
    pub fn set_preference(&self, scheme: ColorScheme) {
        *self.preference.lock().unwrap() = Some(scheme);
        tracing::trace!("ManualSource: device preference is now {scheme}");
        self.listeners.emit(scheme);
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl SchemeSource for ManualSource {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        *self.preference.lock().unwrap()
    }

    fn subscribe(&self, callback: PreferenceCallback) -> SourceToken {
        self.listeners.insert(callback)
    }

    fn unsubscribe(&self, token: SourceToken) {
        self.listeners.remove(token);
    }
}

type Detector = Box<dyn Fn() -> Option<ColorScheme> + Send + Sync>;

/// Preference re-read on demand from a detection function
///
/// The host calls [`PollingSource::poll`] from its own loop (for example on
/// window focus); no thread is spawned.
pub struct PollingSource {
    detect: Detector,
    last: Mutex<Option<ColorScheme>>,
    listeners: Listeners,
}

impl PollingSource {
    /// Poll the environment via [`detect_system_color_scheme`]
    pub fn system() -> Self {
        Self::with_detector(detect_system_color_scheme)
    }

    pub fn with_detector<F>(detect: F) -> Self
    where
        F: Fn() -> Option<ColorScheme> + Send + Sync + 'static,
    {
        let last = detect();
        Self {
            detect: Box::new(detect),
            last: Mutex::new(last),
            listeners: Listeners::default(),
        }
    }

    /// Re-read the preference, notifying subscribers if it changed
    ///
    /// Returns the new scheme when a notification was sent.
    pub fn poll(&self) -> Option<ColorScheme> {
        let current = (self.detect)();
        {
            let mut last = self.last.lock().unwrap();
            if *last == current {
                return None;
            }
            *last = current;
        }

        let scheme = current?;
        tracing::debug!("PollingSource: system preference changed to {scheme}");
        self.listeners.emit(scheme);
        Some(scheme)
    }
}

impl SchemeSource for PollingSource {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        *self.last.lock().unwrap()
    }

    fn subscribe(&self, callback: PreferenceCallback) -> SourceToken {
        self.listeners.insert(callback)
    }

    fn unsubscribe(&self, token: SourceToken) {
        self.listeners.remove(token);
    }
}
