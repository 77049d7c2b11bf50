use anyhow::{Context, Result};
use bevy::prelude::*;
use clap::Parser;
use std::time::Instant;
use temple_trap::core::{AppConfig, Cli};
use temple_trap::game::board::Board;
use temple_trap::game::solver;
use temple_trap::game::rules::RulesEngine;
use temple_trap::game::{LocalBridgePlugin, PuzzleStart};
use temple_trap::interaction::{BoardInteractionPlugin, BoardSnapshot};
use temple_trap::rendering::ScenePlugin;

const WINDOW_WIDTH: u32 = 1024;
const WINDOW_HEIGHT: u32 = 768;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let board = cli
        .puzzle()
        .and_then(|layout| layout.to_board())
        .context("failed to build the puzzle")?;

    if cli.solve {
        return solve_headless(&board);
    }

    let config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;
    run_app(board, config);
    Ok(())
}

fn solve_headless(board: &Board) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let started = Instant::now();
    let steps = solver::solve(board);
    let elapsed = started.elapsed();

    match steps {
        Some(steps) => {
            tracing::info!("[SOLVER] Solved in {:?}, {} moves", elapsed, steps.len());
            for (i, step) in steps.iter().enumerate() {
                println!("{:>3}. {}", i + 1, step);
            }
            Ok(())
        }
        None => {
            tracing::warn!("[SOLVER] Exhausted search in {:?}", elapsed);
            anyhow::bail!("puzzle has no solution")
        }
    }
}

fn run_app(board: Board, config: AppConfig) {
    let window = Window {
        title: "Temple Trap".into(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(MeshPickingPlugin)
        // State owner
        .insert_resource(BoardSnapshot(board.clone()))
        .insert_resource(PuzzleStart(board))
        .insert_resource(RulesEngine::default())
        // Configuration
        .insert_resource(config.scene)
        .insert_resource(config.geometry)
        // Game systems
        .add_plugins(BoardInteractionPlugin)
        .add_plugins(LocalBridgePlugin)
        .add_plugins(ScenePlugin)
        .run();
}
