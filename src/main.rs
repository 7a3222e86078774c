use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use clap::Parser;

use screenpos::cli::Cli;
use screenpos::grid::{native_options, OutcomeSlot, ScreenposApp, SessionOutcome};
use screenpos::logging;
use screenpos::settings::Settings;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug, cli.log_file.clone());

    let settings = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Settings::load(path)?
        }
        None => Settings::default(),
    };
    let render = settings.render_settings()?;

    if cli.print_config {
        println!("{}", settings.to_pretty_json()?);
        return Ok(());
    }

    let outcome: OutcomeSlot = Arc::new(Mutex::new(None));
    let app_outcome = outcome.clone();
    let font_size = settings.font_size;
    if let Err(err) = eframe::run_native(
        "Screenpos",
        native_options(),
        Box::new(move |_cc| Box::new(ScreenposApp::new(render, font_size, app_outcome))),
    ) {
        tracing::error!(%err, "overlay surface failed");
        return Err(anyhow!("overlay surface failed: {err}"));
    }

    let outcome = outcome.lock().ok().and_then(|mut slot| slot.take());
    match outcome {
        Some(SessionOutcome::Selected(point)) => println!("{point}"),
        Some(SessionOutcome::Cancelled) | None => {}
    }
    Ok(())
}
