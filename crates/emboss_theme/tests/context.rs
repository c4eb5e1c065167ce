use emboss_theme::{
    try_use_theme, use_theme, ColorScheme, InteractionType, ManualSource, PaletteRegistry,
    ShadowBackend, SizeClass, ThemeConfig, ThemeError, ThemeProvider, ThemeTokens,
};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

fn provider_with(device: Arc<ManualSource>, backend: ShadowBackend) -> ThemeProvider {
    ThemeProvider::builder()
        .source(device)
        .backend(backend)
        .build()
}

#[test]
fn consumers_outside_a_provider_fail() {
    assert_eq!(use_theme().unwrap_err(), ThemeError::ThemeNotInitialized);
    assert!(try_use_theme().is_none());
}

#[test]
fn snapshot_tracks_device_changes() {
    let device = Arc::new(ManualSource::new(Some(ColorScheme::Light)));
    let provider = provider_with(device.clone(), ShadowBackend::Layered);
    let _scope = provider.enter();

    let theme = use_theme().unwrap();
    let light = theme.snapshot();
    device.set_preference(ColorScheme::Dark);
    let dark = theme.snapshot();

    assert_eq!(light.scheme, ColorScheme::Light);
    assert_eq!(dark.scheme, ColorScheme::Dark);
    assert!(Arc::ptr_eq(&dark.colors, PaletteRegistry::builtin().for_scheme(ColorScheme::Dark)));
    assert!(Arc::ptr_eq(&light.tokens, &dark.tokens));
}

#[test]
fn user_selection_wins_over_device() {
    let device = Arc::new(ManualSource::new(Some(ColorScheme::Dark)));
    let provider = provider_with(device.clone(), ShadowBackend::Layered);
    let theme = provider.context();

    theme.set_scheme(ColorScheme::Light);
    device.set_preference(ColorScheme::Dark);

    assert_eq!(theme.current_scheme(), ColorScheme::Light);
    assert!(theme.is_overridden());
}

#[test]
fn styles_use_current_scheme_colors() {
    let device = Arc::new(ManualSource::new(Some(ColorScheme::Dark)));
    let provider = provider_with(device, ShadowBackend::Layered);
    let theme = provider.context();

    let style = theme.generate_style(InteractionType::Raised, SizeClass::Small);
    assert_eq!(style.background, theme.current_colors().surface);
    assert_eq!(style.shadows()[0].color, PaletteRegistry::builtin().dark().shadow_light);

    let named = theme.generate_style_named("raised", "small").unwrap();
    assert_eq!(named, style);
}

#[test]
fn backend_is_fixed_per_provider() {
    let device = Arc::new(ManualSource::new(None));
    let provider = provider_with(device, ShadowBackend::ElevationOnly);
    let theme = provider.context();

    let before = theme.generate_style(InteractionType::PressedIn, SizeClass::Medium);
    theme.toggle_scheme();
    let after = theme.generate_style(InteractionType::PressedIn, SizeClass::Medium);

    assert!(before.shadows().is_empty());
    assert_eq!(before.elevation(), after.elevation());
    assert_eq!(theme.snapshot().generator.backend(), ShadowBackend::ElevationOnly);
}

#[test]
fn observers_see_rebuilt_snapshot() {
    let device = Arc::new(ManualSource::new(Some(ColorScheme::Light)));
    let provider = provider_with(device.clone(), ShadowBackend::Layered);
    let theme = provider.context();

    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = observed.clone();
    let reader = provider.context();
    let id = theme.subscribe(move |change| {
        sink.lock().unwrap().push((change.scheme, reader.current_scheme()));
    });

    device.set_preference(ColorScheme::Dark);
    assert!(theme.unsubscribe(id));
    device.set_preference(ColorScheme::Light);

    assert_eq!(
        *observed.lock().unwrap(),
        vec![(ColorScheme::Dark, ColorScheme::Dark)]
    );
}

#[test]
fn custom_tokens_flow_into_styles() {
    let mut tokens = ThemeTokens::default();
    tokens.radii.radius_sm = 2.0;
    let provider = ThemeProvider::builder()
        .source(Arc::new(ManualSource::new(None)))
        .backend(ShadowBackend::Layered)
        .tokens(tokens)
        .build();

    let style = provider
        .context()
        .generate_style(InteractionType::Raised, SizeClass::Small);
    assert_eq!(style.radius, 2.0);
}

#[test]
fn provider_from_config() {
    let config = ThemeConfig::from_toml_str(
        "[scheme]\ninitial = \"dark\"\n[shadows]\nbackend = \"layered\"\n",
    )
    .unwrap();
    let provider = config.provider().unwrap();
    let theme = provider.context();

    assert_eq!(theme.current_scheme(), ColorScheme::Dark);
    assert_eq!(theme.snapshot().generator.backend(), ShadowBackend::Layered);
}

#[test]
fn snapshot_matches_controller_after_concurrent_writes() {
    let provider = provider_with(Arc::new(ManualSource::new(None)), ShadowBackend::Layered);
    let registry = PaletteRegistry::builtin();

    for round in 0..20 {
        let barrier = Arc::new(Barrier::new(2));
        let writers: Vec<_> = [ColorScheme::Dark, ColorScheme::Light]
            .into_iter()
            .map(|scheme| {
                let (theme, barrier) = (provider.context(), barrier.clone());
                thread::spawn(move || {
                    barrier.wait();
                    for _ in 0..50 {
                        theme.set_scheme(scheme);
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let theme = provider.context();
        let scheme = provider.controller().scheme();
        assert_eq!(theme.current_scheme(), scheme, "round {round}");
        assert!(Arc::ptr_eq(&theme.current_colors(), registry.for_scheme(scheme)));
    }
}
