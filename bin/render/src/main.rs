use std::{
    fs::File,
    io::{self, Write},
    path::Path,
};

use anyhow::{bail, Context, Result};
use calltree_display::{render_titles, render_tree};
use calltree_types::CallNode;
use clap::Parser;
use log::info;

use crate::cli::{AppArgs, ModeFlag};

mod cli;

/// Prints the call tree produced by a call tracer.
/// ```command
/// cat trace.json | cargo run --release -p calltree_render
/// ```
fn main() -> Result<()> {
    env_logger::init();

    let args = AppArgs::parse();

    let root = read_call_tree(&args)?;
    info!("Read call tree with {} calls", root.node_count());

    let text = render_text(&root, &args.mode)?;
    write_output(&text, args.output.as_deref())
}

/// Reads the root call from the input file, or stdin if none given.
fn read_call_tree(args: &AppArgs) -> Result<CallNode> {
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Could not open {}", path.display()))?;
            Ok(CallNode::from_reader(io::BufReader::new(file))?)
        }
        None => Ok(CallNode::from_reader(io::stdin().lock())?),
    }
}

/// One line per call, each ending in a newline.
fn render_text(root: &CallNode, mode: &ModeFlag) -> Result<String> {
    let mut text = match mode {
        ModeFlag::Tree => render_tree(root)?,
        ModeFlag::Titles => render_titles(root)?.join("\n"),
    };
    text.push('\n');
    Ok(text)
}

/// Writes to a new file, or stdout if no path given. An existing file is never
/// overwritten.
fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    let Some(path) = output else {
        io::stdout().lock().write_all(text.as_bytes())?;
        return Ok(());
    };
    let mut file = match File::options().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            bail!("{} file already exists", path.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Could not create {}", path.display()))
        }
    };
    file.write_all(text.as_bytes())?;
    info!("Wrote call tree to {}", path.display());
    Ok(())
}
