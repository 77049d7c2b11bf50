//! Command line arguments

use crate::game::error::LayoutError;
use crate::game::layout::PuzzleLayout;
use clap::Parser;
use std::path::PathBuf;

/// Temple Trap board
#[derive(Parser, Debug, Clone)]
#[command(name = "temple-trap")]
#[command(about = "Interactive Temple Trap board with a built-in solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Puzzle layout JSON file
    #[arg(long, value_name = "FILE", conflicts_with = "preset")]
    pub layout: Option<PathBuf>,

    /// Built-in puzzle number
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub preset: usize,

    /// Config JSON file (defaults to settings.json in the config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a shortest solution and exit without opening a window
    #[arg(long)]
    pub solve: bool,
}

impl Cli {
    /// Layout named on the command line
    pub fn puzzle(&self) -> Result<PuzzleLayout, LayoutError> {
        match &self.layout {
            Some(path) => PuzzleLayout::load(path),
            None => PuzzleLayout::preset(self.preset),
        }
    }
}
