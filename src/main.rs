//! CLI entry point for theme-bridge.

mod cli;

use clap::Parser;
use std::process::ExitCode;
use theme_bridge::bridge::{
    migration_progress, translate, unmigrated_tokens, TokenBridge, TokenCategory,
};
use theme_bridge::catalog::{list_by_category, recommended_themes, ThemeCategory, ThemeName};
use theme_bridge::config::{load_config_with_diagnostics, Config};
use theme_bridge::diagnostics::{all_passed, health_report};
use theme_bridge::mode::{ModePreference, StoredModeSource};
use theme_bridge::render::Renderer;
use theme_bridge::resolver::{ResolverOptions, ThemeResolver};
use theme_bridge::store::FileStore;
use tracing_subscriber::EnvFilter;

use crate::cli::{default_log_filter, Args, Command, ModeArg};

type CliResolver = ThemeResolver<FileStore, StoredModeSource<FileStore>>;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, !args.no_color);
    let renderer = Renderer::new(!args.no_color);

    match run(args, renderer) {
        Ok(code) => code,
        Err(err) => {
            renderer.error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .compact()
        .init();
}

fn run(args: Args, renderer: Renderer) -> Result<ExitCode, String> {
    let loaded = load_config_with_diagnostics(args.config.as_deref())
        .map_err(|err| format!("failed to load config: {err}"))?;
    tracing::debug!(source = ?loaded.source, "config loaded");
    let config = loaded.config;

    match args.command.unwrap_or(Command::Status) {
        Command::Themes { category } => list_themes(renderer, category.as_deref()),
        Command::Recommend { use_case } => recommend(renderer, &use_case.join(" ")),
        Command::Translate { category, tokens } => {
            translate_tokens(renderer, &config, &category, &tokens)
        }
        Command::Progress => {
            show_progress(renderer);
            Ok(ExitCode::SUCCESS)
        }
        Command::Unmigrated { category } => list_unmigrated(renderer, &category),
        Command::Status => {
            let resolver = open_resolver(&config)?;
            show_status(renderer, &resolver);
            Ok(ExitCode::SUCCESS)
        }
        Command::Set { theme } => {
            let mut resolver = open_resolver(&config)?;
            let applied = resolver
                .set_theme_by_name(&theme)
                .map_err(|err| err.to_string())?;
            if !applied {
                renderer.warn("theme switching is disabled; theme unchanged");
                show_status(renderer, &resolver);
                return Ok(ExitCode::FAILURE);
            }
            show_status(renderer, &resolver);
            Ok(ExitCode::SUCCESS)
        }
        Command::Mode { mode } => {
            let mut resolver = open_resolver(&config)?;
            match mode {
                ModeArg::Light => resolver.set_mode_preference(ModePreference::Light),
                ModeArg::Dark => resolver.set_mode_preference(ModePreference::Dark),
                ModeArg::System => resolver.set_mode_preference(ModePreference::System),
                ModeArg::Toggle => {
                    resolver.toggle_mode();
                }
            }
            show_status(renderer, &resolver);
            Ok(ExitCode::SUCCESS)
        }
        Command::Doctor => {
            let resolver = open_resolver(&config)?;
            let checks = health_report(&resolver);
            renderer.section("health");
            for check in &checks {
                renderer.check(check.status, check.name, &check.message);
            }
            Ok(if all_passed(&checks) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Retry => {
            let mut resolver = open_resolver(&config)?;
            let phase = resolver.retry();
            renderer.field("phase", phase.as_str());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn open_resolver(config: &Config) -> Result<CliResolver, String> {
    let store = match &config.store.path {
        Some(path) => FileStore::new(path),
        None => FileStore::open_default().map_err(|err| err.to_string())?,
    };
    let mode_source = StoredModeSource::from_env(FileStore::new(store.path()));
    Ok(ThemeResolver::start(
        ResolverOptions::from(&config.theme),
        store,
        mode_source,
    ))
}

fn show_status(renderer: Renderer, resolver: &CliResolver) {
    let snapshot = resolver.snapshot();
    renderer.section("theme");
    renderer.field(
        "theme",
        &format!(
            "{} ({})",
            snapshot.current_theme, snapshot.theme_config.display_name
        ),
    );
    renderer.field("mode", snapshot.current_mode.as_str());
    renderer.field("template", &snapshot.render_target.template_id);
    renderer.field("dark", &snapshot.render_target.dark_mode.to_string());
    renderer.field("phase", resolver.phase().as_str());
    if let Some(error) = &snapshot.error {
        renderer.field("error", error);
    }
}

fn list_themes(renderer: Renderer, category: Option<&str>) -> Result<ExitCode, String> {
    let only = category
        .map(str::parse::<ThemeCategory>)
        .transpose()
        .map_err(|err| err.to_string())?;
    let groups = list_by_category();
    for theme_category in [
        ThemeCategory::Industry,
        ThemeCategory::Geographic,
        ThemeCategory::General,
    ] {
        if only.is_some_and(|c| c != theme_category) {
            continue;
        }
        renderer.section(theme_category.as_str());
        for &name in groups.get(theme_category) {
            renderer.detail(&theme_line(name));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn theme_line(name: ThemeName) -> String {
    let meta = name.metadata();
    format!("{:<13}{}: {}", name.id(), meta.display_name, meta.description)
}

fn recommend(renderer: Renderer, use_case: &str) -> Result<ExitCode, String> {
    let themes = recommended_themes(use_case);
    if themes.is_empty() {
        renderer.warn(&format!("no themes recommended for `{use_case}`"));
        return Ok(ExitCode::SUCCESS);
    }
    renderer.section(&format!("recommended for `{use_case}`"));
    for name in themes {
        renderer.detail(&theme_line(name));
    }
    Ok(ExitCode::SUCCESS)
}

fn translate_tokens(
    renderer: Renderer,
    config: &Config,
    category: &str,
    tokens: &[String],
) -> Result<ExitCode, String> {
    let category: TokenCategory = category.parse().map_err(|err| format!("{err}"))?;
    let bridge = TokenBridge::new(config.bridge.css_prefix.clone());
    renderer.section(category.as_str());
    for token in tokens {
        let external = translate(category, token);
        renderer.field(
            token,
            &format!("{external} {}", bridge.to_css_variable(&external)),
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn show_progress(renderer: Renderer) {
    renderer.section("migration progress");
    for entry in migration_progress() {
        renderer.field(
            entry.category.as_str(),
            &format!("{}/{} ({}%)", entry.migrated, entry.total, entry.percentage),
        );
    }
}

fn list_unmigrated(renderer: Renderer, category: &str) -> Result<ExitCode, String> {
    let category: TokenCategory = category.parse().map_err(|err| format!("{err}"))?;
    let backlog = unmigrated_tokens(category, category.vocabulary());
    if backlog.is_empty() {
        renderer.section(&format!("{category}: fully mapped"));
        return Ok(ExitCode::SUCCESS);
    }
    renderer.section(&format!("{category}: {} unmapped", backlog.len()));
    for token in backlog {
        renderer.field(token, &category.internal_class(token));
    }
    Ok(ExitCode::SUCCESS)
}
