//! Emboss CLI
//!
//! Inspection tool for the Emboss theming engine:
//! - `palette`: print the derived palettes
//! - `shade`: shade a `#RRGGBB` color by a percentage
//! - `style`: generate a neumorphic style descriptor
//! - `check`: validate configuration and derived palettes

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emboss_theme::{
    shade, ColorPalette, ColorScheme, InteractionType, NeumorphicStyle, PaletteRegistry, Platform,
    SchemeController, ShadowBackend, ShadowSpec, ShadowTreatment, SizeClass, ThemeConfig,
    ThemeProvider, ThemeTokens,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inspect and preview Emboss themes
#[derive(Parser, Debug)]
#[command(name = "emboss")]
#[command(about = "Inspect Emboss palettes and preview neumorphic styles")]
#[command(version)]
struct Cli {
    /// Theme config file or directory containing emboss.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the palette for one or both schemes
    Palette {
        /// Only this scheme
        #[arg(short, long)]
        scheme: Option<ColorScheme>,
    },

    /// Shade a #RRGGBB color by a signed percentage
    Shade {
        color: String,
        #[arg(allow_negative_numbers = true)]
        percent: f32,
    },

    /// Generate the style for an interaction type and size
    Style {
        /// raised, pressedIn or flat
        kind: InteractionType,
        /// small, medium or large
        #[arg(default_value = "medium")]
        size: SizeClass,
        /// Force a scheme instead of the configured one
        #[arg(short, long)]
        scheme: Option<ColorScheme>,
        /// layered or elevation (default: configured or platform backend)
        #[arg(short, long)]
        backend: Option<ShadowBackend>,
    },

    /// Validate the configuration and the palettes it derives
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Palette { scheme } => palette(&config, scheme, cli.json),
        Command::Shade { color, percent } => {
            let shaded =
                shade(&color, percent).with_context(|| format!("Cannot shade {color}"))?;
            if cli.json {
                let report = serde_json::json!({
                    "input": color,
                    "percent": percent,
                    "output": shaded,
                });
                println!("{report}");
            } else {
                println!("{shaded}");
            }
            Ok(())
        }
        Command::Style {
            kind,
            size,
            scheme,
            backend,
        } => style(&config, kind, size, scheme, backend, cli.json),
        Command::Check => {
            let report = check(&config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report.print();
            }
            if !report.errors.is_empty() {
                anyhow::bail!("{} problem(s) found", report.errors.len());
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct PaletteReport<'a> {
    scheme: ColorScheme,
    name: &'a str,
    colors: &'a ColorPalette,
}

fn palette(config: &ThemeConfig, only: Option<ColorScheme>, json: bool) -> Result<()> {
    let registry = config.registry().context("Invalid [palette] base tone")?;
    let schemes = match only {
        Some(scheme) => vec![scheme],
        None => vec![ColorScheme::Light, ColorScheme::Dark],
    };

    let reports: Vec<PaletteReport> = schemes
        .into_iter()
        .map(|scheme| PaletteReport {
            scheme,
            name: registry.name(),
            colors: registry.for_scheme(scheme),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!("{} ({})", report.scheme, report.name);
        for (token, color) in report.colors.iter() {
            println!("  {:<18} {}", token.name(), color.to_css());
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StyleReport {
    scheme: ColorScheme,
    backend: ShadowBackend,
    kind: InteractionType,
    size: SizeClass,
    style: NeumorphicStyle,
}

fn style(
    config: &ThemeConfig,
    kind: InteractionType,
    size: SizeClass,
    scheme: Option<ColorScheme>,
    backend: Option<ShadowBackend>,
    json: bool,
) -> Result<()> {
    let backend = backend.unwrap_or_else(|| config.backend(Platform::current()));
    let provider = ThemeProvider::builder()
        .source(config.source())
        .registry(config.registry().context("Invalid [palette] base tone")?)
        .backend(backend)
        .build();
    let theme = provider.context();
    if let Some(scheme) = scheme {
        theme.set_scheme(scheme);
    }

    let report = StyleReport {
        scheme: theme.current_scheme(),
        backend,
        kind,
        size,
        style: theme.generate_style(kind, size),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{kind} {size} ({}, {backend})", report.scheme);
    println!("  background  {}", report.style.background);
    println!("  radius      {}", report.style.radius);
    match &report.style.treatment {
        ShadowTreatment::Layered { light, dark } => {
            println!("  light       {}", describe_shadow(light));
            println!("  dark        {}", describe_shadow(dark));
        }
        ShadowTreatment::Single { shadow, elevation } => {
            println!("  shadow      {}", describe_shadow(shadow));
            println!("  elevation   {elevation}");
        }
        ShadowTreatment::Elevation { value } => println!("  elevation   {value}"),
    }
    Ok(())
}

fn describe_shadow(spec: &ShadowSpec) -> String {
    format!(
        "{} offset ({}, {}) opacity {:.2} blur {}",
        spec.color, spec.offset.width, spec.offset.height, spec.opacity, spec.blur_radius
    )
}

#[derive(Debug, Default, Serialize)]
struct CheckReport {
    registry: String,
    scheme: Option<ColorScheme>,
    backend: Option<ShadowBackend>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl CheckReport {
    fn print(&self) {
        println!("palettes: {}", self.registry);
        if let Some(scheme) = self.scheme {
            println!("initial scheme: {scheme}");
        }
        if let Some(backend) = self.backend {
            println!("shadow backend: {backend}");
        }
        for warning in &self.warnings {
            println!("warning: {warning}");
        }
        for error in &self.errors {
            println!("error: {error}");
        }
        if self.errors.is_empty() {
            println!("ok");
        }
    }
}

fn check(config: &ThemeConfig) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    let registry = match config.registry() {
        Ok(registry) => registry,
        Err(err) => {
            report.errors.push(format!("[palette]: {err}"));
            return Ok(report);
        }
    };
    report.registry = registry.name().to_string();
    report.backend = Some(config.backend(Platform::current()));
    let controller = SchemeController::with_registry(config.source(), registry.clone());
    report.scheme = Some(controller.scheme());

    check_slots(&registry, &mut report)?;
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        check_depth(scheme, registry.for_scheme(scheme), &mut report);
    }

    if !ThemeTokens::default().shadows.sizes.is_monotonic() {
        report.errors.push("shadow offsets do not grow with size".to_string());
    }

    Ok(report)
}

fn check_slots(registry: &PaletteRegistry, report: &mut CheckReport) -> Result<()> {
    let keys = |palette: &ColorPalette| -> Result<Vec<String>> {
        let value = serde_json::to_value(palette)?;
        let mut keys: Vec<String> = value
            .as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        Ok(keys)
    };

    if keys(registry.light())? != keys(registry.dark())? {
        report
            .errors
            .push("light and dark palettes expose different slots".to_string());
    }
    Ok(())
}

fn check_depth(scheme: ColorScheme, palette: &ColorPalette, report: &mut CheckReport) {
    let surface = palette.surface.relative_luminance();
    let light = palette.shadow_light.relative_luminance();
    let dark = palette.shadow_dark.relative_luminance();

    if light < surface || dark > surface {
        report
            .errors
            .push(format!("{scheme}: shadows are on the wrong side of the surface"));
    } else if light == surface || dark == surface {
        report.warnings.push(format!(
            "{scheme}: a shadow matches the surface {}, depth will look flat",
            palette.surface
        ));
    }
}
