//! Spellwalk game binary: window, logging and configuration bootstrap.
use std::path::PathBuf;

use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;
use spellwalk::{init_logging, PresentationPlugin, SceneConfig, SpellwalkPlugin};

/// Walk a top-down world and draw spells with the mouse
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON file overriding the map layout and player tuning
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match args.config.as_deref() {
        Some(path) => SceneConfig::load(path).context("could not start the scene")?,
        None => SceneConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .build()
            .disable::<LogPlugin>()
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Spellwalk".to_owned(),
                    ..default()
                }),
                ..default()
            }),
    );
    config.insert_into(&mut app);
    app.add_plugins((SpellwalkPlugin, PresentationPlugin));
    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow::anyhow!("scene exited with code {code}")),
    }
}
