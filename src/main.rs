use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use lazydialog::{DefaultsOverride, Dialog};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::{AppConfig, KeyResolver};

mod app;
mod cli;
mod command;
mod config;
mod tui;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = initialize_logging()?;
    info!("Starting lazydialog");

    let args = cli::Args::parse();
    let config = config::load(args.config.as_deref())?;

    let dialog = build_dialog(&config, &args);
    let resolver = Arc::new(KeyResolver::new(Arc::new(config.keybindings.clone())));

    let theme_name = args.theme.as_deref().unwrap_or(&config.theme.name);
    let theme = lazydialog::theme::find_theme(theme_name).unwrap_or_else(|| {
        warn!(theme = theme_name, "Unknown theme, using default");
        lazydialog::Theme::default()
    });

    let mut app = App::new(dialog, resolver, theme);
    app.run().await?;

    Ok(())
}

/// Config file values first, command line flags on top.
fn build_dialog(config: &AppConfig, args: &cli::Args) -> Dialog {
    let size_units = args.size_units.unwrap_or(config.dialog.size_units);
    let mut dialog = Dialog::new(config.dialog.defaults.clone()).with_size_units(size_units);

    let overrides = DefaultsOverride {
        ok_label: args.ok_label.clone(),
        cancel_label: args.cancel_label.clone(),
        ..DefaultsOverride::default()
    };
    if overrides != DefaultsOverride::default() {
        dialog.set_options(&overrides);
    }
    dialog
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("lazydialog").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "lazydialog.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_labels_override_config() {
        let mut config = AppConfig::default();
        config.dialog.defaults.ok_label = "Fine".to_string();
        config.dialog.defaults.cancel_label = "Back".to_string();
        let args = cli::Args::parse_from(["lazydialog", "--ok-label", "Yes"]);

        let mut dialog = build_dialog(&config, &args);
        assert_eq!(dialog.ok_action(None).label(), Some("Yes"));
        assert_eq!(dialog.cancel_action(None).label(), Some("Back"));

        dialog.reset_options();
        assert_eq!(dialog.ok_action(None).label(), Some("Fine"));
    }
}
