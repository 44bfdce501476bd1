//! MediaCanvas - headless canvas editor driver
//!
//! Loads files onto a canvas session, optionally plays the timeline for a
//! while, and prints the resulting editor snapshot as JSON.

use anyhow::{bail, Context, Result};
use mediacanvas_core::{defaults, CanvasError, EditorConfig};
use mediacanvas_editor::EditorSession;
use mediacanvas_media::MediaResource;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE: &str = "usage: mediacanvas [--config FILE] [--play SECS] FILE...";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    play: Option<Duration>,
    files: Vec<PathBuf>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().context("--config needs a file")?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--play" => {
                    let secs = args.next().context("--play needs a duration")?;
                    let value: f64 = secs
                        .parse()
                        .with_context(|| format!("invalid --play duration {:?}", secs))?;
                    let Ok(play) = Duration::try_from_secs_f64(value) else {
                        bail!("--play duration {:?} is negative or too large", secs);
                    };
                    parsed.play = Some(play);
                }
                "-h" | "--help" => bail!(USAGE),
                _ => parsed.files.push(PathBuf::from(arg)),
            }
        }
        Ok(parsed)
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config
            .clone()
            .or_else(|| std::env::var_os(defaults::CONFIG_ENV).map(PathBuf::from))
    }
}

fn load_config(args: &Args) -> Result<EditorConfig> {
    match args.config_path() {
        Some(path) => EditorConfig::load(&path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(EditorConfig::default()),
    }
}

/// Read `path` and upload it. Unsupported extensions fail the same way as
/// unsupported content types.
fn upload_path(session: &EditorSession, path: &Path) -> mediacanvas_core::Result<()> {
    let resource = MediaResource::from_path(path)?;
    session.upload([resource])?;
    Ok(())
}

fn report_upload_error(path: &Path, error: &CanvasError) {
    if error.is_user_facing() {
        eprintln!("{}: {}", path.display(), error);
    } else {
        warn!(path = %path.display(), "Upload failed: {}", error);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("MediaCanvas starting...");

    let args = Args::parse(std::env::args().skip(1))?;
    let session = EditorSession::new(load_config(&args)?);

    // Each file goes through the upload path on its own, as separate drops would
    for path in &args.files {
        if let Err(e) = upload_path(&session, path) {
            report_upload_error(path, &e);
        }
    }

    session.store().settle().await;
    info!(items = session.store().len(), "Media loaded");

    if let Some(play) = args.play {
        session.clock().toggle_play();
        tokio::time::sleep(play).await;
        session.clock().toggle_play();
        info!(
            current_time = session.clock().current_time(),
            visible = session.layers().len(),
            "Playback paused"
        );
    }

    println!("{}", session.snapshot().to_json()?);
    Ok(())
}
