use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use spirograph::prelude::{manipulate_json, PolygonView};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod provenance;
mod script;

use provenance::Provenance;

#[derive(Parser)]
#[command(name = "spirograph-cli")]
#[command(about = "Headless driver for the star-polygon viewport")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Viewport size and optional starting configuration.
#[derive(Args, Debug)]
struct Viewport {
    #[arg(long, default_value_t = 1920.0)]
    width: f64,
    #[arg(long, default_value_t = 1080.0)]
    height: f64,
    /// Configuration JSON (vertices, startCircle, circleCount, colors, angle, radius, x, y)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Action {
    /// Draw the visible chord circles to JSON or SVG (by extension)
    Render {
        #[command(flatten)]
        viewport: Viewport,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the configuration derived for a viewport
    Config {
        #[command(flatten)]
        viewport: Viewport,
    },
    /// Bump the number under a cursor offset in a JSON file by ±1
    Nudge {
        #[arg(long)]
        input: PathBuf,
        /// Byte offset of the cursor
        #[arg(long)]
        cursor: usize,
        /// Positive increments, anything else decrements
        #[arg(long, allow_negative_numbers = true, default_value_t = 1.0)]
        direction: f64,
        /// Rewrite the input instead of printing the result
        #[arg(long)]
        in_place: bool,
    },
    /// Apply a gesture script, then print the configuration or render it
    Replay {
        #[command(flatten)]
        viewport: Viewport,
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Render { viewport, out } => render(viewport, out),
        Action::Config { viewport } => config(viewport),
        Action::Nudge {
            input,
            cursor,
            direction,
            in_place,
        } => nudge(input, cursor, direction, in_place),
        Action::Replay {
            viewport,
            script,
            out,
        } => replay(viewport, script, out),
        Action::Report => report(),
    }
}

fn load_view(viewport: &Viewport) -> Result<PolygonView> {
    let mut view = PolygonView::new(viewport.width, viewport.height);
    if let Some(path) = &viewport.config {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        view.set_config_text(&text)
            .with_context(|| format!("applying config {}", path.display()))?;
    }
    Ok(view)
}

fn render_to(view: &mut PolygonView, out: &Path, command: &'static str) -> Result<()> {
    let lines = output::write_render(view, out)?;
    tracing::info!(out = %out.display(), lines, "rendered");
    let params = json!({
        "width": view.width(),
        "height": view.height(),
        "config": &*view.config(),
    });
    provenance::write_sidecar(out, Provenance::new(command, params))?;
    Ok(())
}

fn render(viewport: Viewport, out: PathBuf) -> Result<()> {
    tracing::info!(?viewport, out = %out.display(), "render");
    let mut view = load_view(&viewport)?;
    render_to(&mut view, &out, "render")
}

fn config(viewport: Viewport) -> Result<()> {
    tracing::info!(?viewport, "config");
    let mut view = load_view(&viewport)?;
    println!("{}", view.config_text()?);
    Ok(())
}

fn nudge(input: PathBuf, cursor: usize, direction: f64, in_place: bool) -> Result<()> {
    tracing::info!(input = %input.display(), cursor, direction, in_place, "nudge");
    let text = fs::read_to_string(&input)
        .with_context(|| format!("reading {}", input.display()))?;
    let nudged = manipulate_json(&text, cursor, direction)
        .with_context(|| format!("nudging {} at {cursor}", input.display()))?;
    if in_place {
        fs::write(&input, &nudged.text)
            .with_context(|| format!("writing {}", input.display()))?;
    } else {
        println!("{}", serde_json::to_string_pretty(&nudged)?);
    }
    Ok(())
}

fn replay(viewport: Viewport, script: PathBuf, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(?viewport, script = %script.display(), "replay");
    let mut view = load_view(&viewport)?;
    let gestures = script::load(&script)?;
    let applied = script::replay(&mut view, &gestures);
    tracing::info!(applied, "replayed");
    match out {
        Some(out) => render_to(&mut view, &out, "replay"),
        None => {
            println!("{}", view.config_text()?);
            Ok(())
        }
    }
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "library": spirograph::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
