//! For Command Line Interface for calltree_render

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Print an EVM call tree as a text tree. Reads JSON from a file, or from stdin if
/// no file is given.
///
/// ```
/// <call tracer> | calltree_render
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppArgs {
    /// JSON file containing the root call of the tree
    pub input: Option<PathBuf>,
    /// File to create with the rendered tree (must not exist already)
    #[clap(short, long)]
    pub output: Option<PathBuf>,
    /// What to print for each call.
    #[clap(long, value_enum, default_value_t = ModeFlag::Tree)]
    pub mode: ModeFlag,
}

/// Different levels of detail for each line.
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum ModeFlag {
    /// Indented tree with box-drawing connectors
    Tree,
    /// Titles only, one per call in tree order
    Titles,
}
