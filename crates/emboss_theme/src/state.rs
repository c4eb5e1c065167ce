//! Color scheme state
//!
//! [`SchemeController`] owns the active [`ColorScheme`] and reconciles two
//! inputs: device preference notifications and explicit user selection.
//!
//! - A device notification switches the scheme only until the user picks one.
//! - `set_scheme` and `toggle_scheme` pin the scheme for the lifetime of the
//!   controller. Later device notifications are discarded.
//!
//! Observers run after the state lock is released, once per actual change,
//! in registration order.

use crate::source::{SchemeSource, SourceToken};
use crate::theme::{ColorScheme, PaletteRegistry};
use crate::tokens::ColorPalette;
use emboss_core::{ObserverId, Observers};
use std::sync::{Arc, Mutex, Weak};

/// What caused a scheme change
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ChangeOrigin {
    /// The host reported a new preference
    Device,
    /// The application selected a scheme
    User,
}

/// Payload delivered to scheme observers
#[derive(Clone, Debug)]
pub struct SchemeChange {
    pub scheme: ColorScheme,
    pub palette: Arc<ColorPalette>,
    pub origin: ChangeOrigin,
}

struct SchemeState {
    scheme: ColorScheme,
    overridden: bool,
    /// Cleared on teardown; in-flight source callbacks check it
    active: bool,
    subscription: Option<SourceToken>,
}

struct Inner {
    registry: PaletteRegistry,
    source: Arc<dyn SchemeSource>,
    state: Mutex<SchemeState>,
    observers: Mutex<Observers<SchemeChange>>,
}

impl Inner {
    fn device_notification(&self, scheme: ColorScheme) {
        self.apply_device(scheme, true);
    }

    fn apply_device(&self, scheme: ColorScheme, from_source: bool) -> bool {
        let change = {
            let mut state = self.state.lock().unwrap();
            if from_source && !state.active {
                tracing::trace!("discarding device preference {scheme}: controller shut down");
                return false;
            }
            if state.overridden {
                tracing::trace!("discarding device preference {scheme}: user override active");
                return false;
            }
            if state.scheme == scheme {
                return false;
            }
            let previous = std::mem::replace(&mut state.scheme, scheme);
            tracing::debug!("SchemeController: {previous} -> {scheme} (device)");
            self.change(scheme, ChangeOrigin::Device)
        };

        self.dispatch(&change);
        true
    }

    fn apply_user(&self, select: impl FnOnce(ColorScheme) -> ColorScheme) -> ColorScheme {
        let (scheme, change) = {
            let mut state = self.state.lock().unwrap();
            let scheme = select(state.scheme);
            if !state.overridden {
                tracing::debug!("SchemeController: user override engaged");
            }
            state.overridden = true;
            if state.scheme == scheme {
                (scheme, None)
            } else {
                let previous = std::mem::replace(&mut state.scheme, scheme);
                tracing::debug!("SchemeController: {previous} -> {scheme} (user)");
                (scheme, Some(self.change(scheme, ChangeOrigin::User)))
            }
        };

        if let Some(change) = change {
            self.dispatch(&change);
        }
        scheme
    }

    fn change(&self, scheme: ColorScheme, origin: ChangeOrigin) -> SchemeChange {
        SchemeChange {
            scheme,
            palette: self.registry.for_scheme(scheme).clone(),
            origin,
        }
    }

    fn dispatch(&self, change: &SchemeChange) {
        let callbacks = self.observers.lock().unwrap().snapshot();
        for callback in callbacks {
            callback(change);
        }
    }
}

/// Active color scheme with user override and device tracking
///
/// Dropping the controller unsubscribes it from its source.
pub struct SchemeController {
    inner: Arc<Inner>,
}

impl SchemeController {
    /// Controller over the built-in palettes
    pub fn new(source: Arc<dyn SchemeSource>) -> Self {
        Self::with_registry(source, PaletteRegistry::builtin().clone())
    }

    /// Controller over custom palettes
    ///
    /// Starts from the source's preference, or [`ColorScheme::Light`] when
    /// the host reports none.
    pub fn with_registry(source: Arc<dyn SchemeSource>, registry: PaletteRegistry) -> Self {
        let initial = source.preferred_scheme();
        let inner = Arc::new(Inner {
            registry,
            source: source.clone(),
            state: Mutex::new(SchemeState {
                scheme: initial.unwrap_or_default(),
                overridden: false,
                active: true,
                subscription: None,
            }),
            observers: Mutex::new(Observers::new()),
        });

        let weak: Weak<Inner> = Arc::downgrade(&inner);
        let token = source.subscribe(Arc::new(move |scheme| {
            if let Some(inner) = weak.upgrade() {
                inner.device_notification(scheme);
            }
        }));
        inner.state.lock().unwrap().subscription = Some(token);

        // Catch a preference change that landed before the subscription
        if let Some(current) = source.preferred_scheme() {
            if Some(current) != initial {
                inner.apply_device(current, true);
            }
        }

        tracing::debug!(
            "SchemeController initialized: {} ({})",
            inner.state.lock().unwrap().scheme,
            if initial.is_some() { "device" } else { "fallback" }
        );

        Self { inner }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.inner.state.lock().unwrap().scheme
    }

    /// Whether the user has pinned the scheme
    pub fn is_overridden(&self) -> bool {
        self.inner.state.lock().unwrap().overridden
    }

    /// Palette for the current scheme
    pub fn palette(&self) -> Arc<ColorPalette> {
        self.current().1
    }

    /// Scheme and its palette, read under one lock
    pub fn current(&self) -> (ColorScheme, Arc<ColorPalette>) {
        let scheme = self.scheme();
        (scheme, self.inner.registry.for_scheme(scheme).clone())
    }

    pub fn registry(&self) -> &PaletteRegistry {
        &self.inner.registry
    }

    /// Select a scheme and stop following the device
    pub fn set_scheme(&self, scheme: ColorScheme) {
        self.inner.apply_user(|_| scheme);
    }

    /// Switch to the opposite scheme and stop following the device
    ///
    /// Returns the new scheme.
    pub fn toggle_scheme(&self) -> ColorScheme {
        self.inner.apply_user(ColorScheme::toggle)
    }

    /// Apply a device preference
    ///
    /// Returns `false` if the notification was discarded (user override) or
    /// matched the current scheme.
    pub fn handle_device_change(&self, scheme: ColorScheme) -> bool {
        self.inner.apply_device(scheme, false)
    }

    /// Register an observer for scheme changes
    pub fn subscribe<F>(&self, callback: F) -> ObserverId
    where
        F: Fn(&SchemeChange) + Send + Sync + 'static,
    {
        self.inner.observers.lock().unwrap().insert(callback)
    }

    /// Remove an observer, returning whether it was registered
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.inner.observers.lock().unwrap().remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.lock().unwrap().len()
    }

    /// Detach from the device source
    ///
    /// Notifications already in flight are discarded. Calling this more than
    /// once has no further effect.
    pub fn shutdown(&self) {
        let token = {
            let mut state = self.inner.state.lock().unwrap();
            if !state.active {
                return;
            }
            state.active = false;
            state.subscription.take()
        };

        if let Some(token) = token {
            self.inner.source.unsubscribe(token);
        }
        tracing::debug!("SchemeController detached from device source");
    }
}

impl Drop for SchemeController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for SchemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock().unwrap();
        f.debug_struct("SchemeController")
            .field("scheme", &state.scheme)
            .field("overridden", &state.overridden)
            .field("active", &state.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ManualSource, PreferenceCallback, StaticSource};

    fn record(controller: &SchemeController) -> Arc<Mutex<Vec<(ColorScheme, ChangeOrigin)>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        controller.subscribe(move |change| {
            sink.lock().unwrap().push((change.scheme, change.origin));
        });
        seen
    }

    /// Keeps callbacks after unsubscribe, like a notification already queued
    #[derive(Default)]
    struct StickySource {
        callbacks: Mutex<Vec<PreferenceCallback>>,
    }

    impl StickySource {
        fn fire(&self, scheme: ColorScheme) {
            let callbacks = self.callbacks.lock().unwrap().clone();
            for callback in callbacks {
                callback(scheme);
            }
        }
    }

    impl SchemeSource for StickySource {
        fn preferred_scheme(&self) -> Option<ColorScheme> {
            None
        }

        fn subscribe(&self, callback: PreferenceCallback) -> SourceToken {
            self.callbacks.lock().unwrap().push(callback);
            SourceToken::default()
        }

        fn unsubscribe(&self, _token: SourceToken) {}
    }

    #[test]
    fn test_initial_scheme_from_device() {
        let source = StaticSource::new(Some(ColorScheme::Dark));
        let controller = SchemeController::new(Arc::new(source));
        assert_eq!(controller.scheme(), ColorScheme::Dark);
        assert!(!controller.is_overridden());
        assert!(Arc::ptr_eq(
            &controller.palette(),
            PaletteRegistry::builtin().for_scheme(ColorScheme::Dark)
        ));
    }

    #[test]
    fn test_initial_scheme_fallback() {
        let controller = SchemeController::new(Arc::new(StaticSource::unavailable()));
        assert_eq!(controller.scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_device_change_followed_until_override() {
        let source = Arc::new(ManualSource::new(Some(ColorScheme::Light)));
        let controller = SchemeController::new(source.clone());
        let seen = record(&controller);

        source.set_preference(ColorScheme::Dark);
        assert_eq!(controller.scheme(), ColorScheme::Dark);

        controller.set_scheme(ColorScheme::Light);
        assert!(controller.is_overridden());

        source.set_preference(ColorScheme::Dark);
        assert_eq!(controller.scheme(), ColorScheme::Light);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (ColorScheme::Dark, ChangeOrigin::Device),
                (ColorScheme::Light, ChangeOrigin::User),
            ]
        );
    }

    #[test]
    fn test_set_same_scheme_pins_without_notifying() {
        let controller = SchemeController::new(Arc::new(StaticSource::unavailable()));
        let seen = record(&controller);

        controller.set_scheme(ColorScheme::Light);
        assert!(controller.is_overridden());
        assert!(!controller.handle_device_change(ColorScheme::Dark));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_toggle() {
        let controller = SchemeController::new(Arc::new(StaticSource::unavailable()));
        assert_eq!(controller.toggle_scheme(), ColorScheme::Dark);
        assert_eq!(controller.toggle_scheme(), ColorScheme::Light);
        assert!(controller.is_overridden());
    }

    #[test]
    fn test_repeated_device_preference_notifies_once() {
        let controller = SchemeController::new(Arc::new(StaticSource::unavailable()));
        let seen = record(&controller);
        assert!(controller.handle_device_change(ColorScheme::Dark));
        assert!(!controller.handle_device_change(ColorScheme::Dark));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_observer_order_and_unsubscribe() {
        let controller = SchemeController::new(Arc::new(StaticSource::unavailable()));
        let order = Arc::new(Mutex::new(Vec::new()));
        let ids: Vec<_> = (0..3)
            .map(|i| {
                let order = order.clone();
                controller.subscribe(move |_| order.lock().unwrap().push(i))
            })
            .collect();

        controller.toggle_scheme();
        assert!(controller.unsubscribe(ids[1]));
        assert!(!controller.unsubscribe(ids[1]));
        controller.toggle_scheme();

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 0, 2]);
    }

    #[test]
    fn test_observer_may_read_controller() {
        let controller = Arc::new(SchemeController::new(Arc::new(StaticSource::unavailable())));
        let observed = Arc::new(Mutex::new(None));
        let (probe, sink) = (Arc::downgrade(&controller), observed.clone());
        controller.subscribe(move |_| {
            if let Some(controller) = probe.upgrade() {
                *sink.lock().unwrap() = Some(controller.scheme());
            }
        });

        controller.set_scheme(ColorScheme::Dark);
        assert_eq!(*observed.lock().unwrap(), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_drop_unsubscribes_from_source() {
        let source = Arc::new(ManualSource::new(None));
        let controller = SchemeController::new(source.clone());
        assert_eq!(source.subscriber_count(), 1);
        drop(controller);
        assert_eq!(source.subscriber_count(), 0);
    }

    #[test]
    fn test_late_notification_after_shutdown_is_discarded() {
        let source = Arc::new(StickySource::default());
        let controller = SchemeController::new(source.clone());
        let seen = record(&controller);

        source.fire(ColorScheme::Dark);
        assert_eq!(controller.scheme(), ColorScheme::Dark);

        controller.shutdown();
        controller.shutdown();
        source.fire(ColorScheme::Light);

        assert_eq!(controller.scheme(), ColorScheme::Dark);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
