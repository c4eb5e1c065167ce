//! Theme context for component consumers
//!
//! A [`ThemeProvider`] owns the scheme controller and publishes an immutable
//! [`ThemeSnapshot`] that is rebuilt on every scheme change. Components read
//! it through a [`ThemeContext`] handle, either passed explicitly or looked up
//! from the innermost provider scope on the current thread:
//!
//! ```ignore
//! let provider = ThemeProvider::new(Arc::new(PollingSource::system()));
//! let _scope = provider.enter();
//!
//! let theme = use_theme()?;
//! let card = theme.generate_style(InteractionType::Raised, SizeClass::Medium);
//! ```

use crate::neumorphic::{InteractionType, NeumorphicStyle, ShadowBackend, StyleGenerator};
use crate::platform::Platform;
use crate::source::{PollingSource, SchemeSource};
use crate::state::{SchemeChange, SchemeController};
use crate::theme::{ColorScheme, PaletteRegistry};
use crate::tokens::{ColorPalette, SizeClass, TextStyle, ThemeTokens};
use emboss_core::{ObserverId, Result, ThemeError};
use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

thread_local! {
    static PROVIDER_STACK: RefCell<Vec<ThemeContext>> = const { RefCell::new(Vec::new()) };
}

/// Everything a component needs to style itself for the current scheme
#[derive(Clone, Debug)]
pub struct ThemeSnapshot {
    pub tokens: Arc<ThemeTokens>,
    pub scheme: ColorScheme,
    pub colors: Arc<ColorPalette>,
    pub generator: StyleGenerator,
}

impl ThemeSnapshot {
    pub fn generate_style(&self, kind: InteractionType, size: SizeClass) -> NeumorphicStyle {
        self.generator.generate(&self.colors, kind, size)
    }
}

struct Shared {
    controller: SchemeController,
    tokens: Arc<ThemeTokens>,
    generator: StyleGenerator,
    snapshot: RwLock<Arc<ThemeSnapshot>>,
}

impl Shared {
    /// Bring the snapshot up to date with the controller
    ///
    /// Racing writers may deliver their changes out of order, so the change
    /// payload is only a trigger. The controller is read while the snapshot
    /// lock is held, which makes the last rebuild to finish install the
    /// latest scheme.
    fn rebuild(&self, change: &SchemeChange) {
        let mut slot = self.snapshot.write().unwrap();
        let (scheme, colors) = self.controller.current();
        if slot.scheme == scheme {
            if scheme != change.scheme {
                tracing::trace!("ThemeProvider: stale {} change, snapshot kept", change.scheme);
            }
            return;
        }

        *slot = Arc::new(ThemeSnapshot {
            tokens: self.tokens.clone(),
            scheme,
            colors,
            generator: self.generator.clone(),
        });
        tracing::debug!("ThemeProvider: snapshot rebuilt for {scheme}");
    }
}

/// Builder for [`ThemeProvider`]
#[derive(Default)]
pub struct ThemeProviderBuilder {
    source: Option<Arc<dyn SchemeSource>>,
    backend: Option<ShadowBackend>,
    registry: Option<PaletteRegistry>,
    tokens: Option<ThemeTokens>,
}

impl ThemeProviderBuilder {
    /// Device preference source (default: [`PollingSource::system`])
    pub fn source(mut self, source: Arc<dyn SchemeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Shadow backend (default: the current platform's capability)
    pub fn backend(mut self, backend: ShadowBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn registry(mut self, registry: PaletteRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn tokens(mut self, tokens: ThemeTokens) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn build(self) -> ThemeProvider {
        let source = self
            .source
            .unwrap_or_else(|| Arc::new(PollingSource::system()));
        let backend = self
            .backend
            .unwrap_or_else(|| Platform::current().shadow_backend());
        let registry = self
            .registry
            .unwrap_or_else(|| PaletteRegistry::builtin().clone());
        let tokens = Arc::new(self.tokens.unwrap_or_default());

        let generator = StyleGenerator::with_tokens(backend, &tokens);
        let controller = SchemeController::with_registry(source, registry);
        let snapshot = Arc::new(ThemeSnapshot {
            tokens: tokens.clone(),
            scheme: controller.scheme(),
            colors: controller.palette(),
            generator: generator.clone(),
        });

        let shared = Arc::new(Shared {
            controller,
            tokens,
            generator,
            snapshot: RwLock::new(snapshot),
        });

        // Registered first so later observers already see the new snapshot
        let weak = Arc::downgrade(&shared);
        shared.controller.subscribe(move |change| {
            if let Some(shared) = weak.upgrade() {
                shared.rebuild(change);
            }
        });

        tracing::debug!(
            "ThemeProvider ready: {} palettes, {} shadows, {}",
            shared.controller.registry().name(),
            backend,
            shared.controller.scheme()
        );

        ThemeProvider {
            context: ThemeContext { shared },
        }
    }
}

/// Root of a themed component tree
///
/// Owns the scheme controller; dropping the last provider or context handle
/// detaches from the device source.
pub struct ThemeProvider {
    context: ThemeContext,
}

impl ThemeProvider {
    /// Provider over the built-in palettes and default tokens
    pub fn new(source: Arc<dyn SchemeSource>) -> Self {
        Self::builder().source(source).build()
    }

    pub fn builder() -> ThemeProviderBuilder {
        ThemeProviderBuilder::default()
    }

    /// Handle for passing to components explicitly
    pub fn context(&self) -> ThemeContext {
        self.context.clone()
    }

    pub fn controller(&self) -> &SchemeController {
        &self.context.shared.controller
    }

    /// Make this provider the innermost scope on the current thread
    ///
    /// The scope ends when the returned guard is dropped.
    #[must_use = "the provider scope ends when the guard is dropped"]
    pub fn enter(&self) -> ProviderScope {
        PROVIDER_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            stack.push(self.context.clone());
            ProviderScope {
                depth: stack.len(),
                _not_send: PhantomData,
            }
        })
    }
}

/// Guard for an active provider scope
///
/// Bound to the thread that created it.
pub struct ProviderScope {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl Drop for ProviderScope {
    fn drop(&mut self) {
        // Also unwinds any inner scopes that were leaked
        let _ = PROVIDER_STACK.try_with(|stack| {
            stack.borrow_mut().truncate(self.depth.saturating_sub(1));
        });
    }
}

/// Context of the innermost provider scope on this thread
pub fn use_theme() -> Result<ThemeContext> {
    try_use_theme().ok_or(ThemeError::ThemeNotInitialized)
}

/// Like [`use_theme`], returning `None` outside any provider scope
pub fn try_use_theme() -> Option<ThemeContext> {
    PROVIDER_STACK
        .try_with(|stack| stack.borrow().last().cloned())
        .ok()
        .flatten()
}

/// Cheap handle to a provider's theme state
#[derive(Clone)]
pub struct ThemeContext {
    shared: Arc<Shared>,
}

impl ThemeContext {
    /// Current snapshot; stays valid after later scheme changes
    pub fn snapshot(&self) -> Arc<ThemeSnapshot> {
        self.shared.snapshot.read().unwrap().clone()
    }

    pub fn tokens(&self) -> Arc<ThemeTokens> {
        self.shared.tokens.clone()
    }

    pub fn current_scheme(&self) -> ColorScheme {
        self.snapshot().scheme
    }

    pub fn current_colors(&self) -> Arc<ColorPalette> {
        self.snapshot().colors.clone()
    }

    pub fn is_overridden(&self) -> bool {
        self.shared.controller.is_overridden()
    }

    /// Text style for a variant name such as `"bodySmall"`
    pub fn typography_variant(&self, name: &str) -> Result<TextStyle> {
        self.shared.tokens.typography.variant_named(name).copied()
    }

    pub fn generate_style(&self, kind: InteractionType, size: SizeClass) -> NeumorphicStyle {
        self.snapshot().generate_style(kind, size)
    }

    /// Generate from variant names such as `"raised"` and `"large"`
    pub fn generate_style_named(&self, kind: &str, size: &str) -> Result<NeumorphicStyle> {
        let snapshot = self.snapshot();
        snapshot.generator.generate_named(&snapshot.colors, kind, size)
    }

    pub fn set_scheme(&self, scheme: ColorScheme) {
        self.shared.controller.set_scheme(scheme);
    }

    pub fn toggle_scheme(&self) -> ColorScheme {
        self.shared.controller.toggle_scheme()
    }

    /// Observe scheme changes; the snapshot is already rebuilt when called
    pub fn subscribe<F>(&self, callback: F) -> ObserverId
    where
        F: Fn(&SchemeChange) + Send + Sync + 'static,
    {
        self.shared.controller.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.shared.controller.unsubscribe(id)
    }
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("scheme", &self.current_scheme())
            .field("backend", &self.shared.generator.backend())
            .finish()
    }
}
