//! dragbox CLI
//!
//! Usage:
//!   dragbox [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>  Element configuration (TOML format)
//!       --svg            Print the final state as SVG instead of the trace
//!   -v, --verbose        Log engine activity to stderr (repeat for more)
//!   -g, --grammar        Show gesture script reference
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dragbox::{render, replay_with_config, EngineConfig, ReplayConfig, ReplayError};

#[derive(Parser)]
#[command(name = "dragbox")]
#[command(about = "Replay pointer gestures against a draggable, resizable element")]
struct Cli {
    /// Gesture script (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Element configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final element state as SVG
    #[arg(long)]
    svg: bool,

    /// Log engine activity to stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show gesture script reference
    #[arg(short, long)]
    grammar: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.grammar {
        print_grammar();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let engine = match &cli.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let config = ReplayConfig::new().with_engine(engine);
    let output = if cli.svg {
        render(&source, &config)
    } else {
        replay_with_config(&source, &config).map(|trace| trace.to_string())
    };

    match output {
        Ok(text) => print!("{}", text),
        Err(ReplayError::Parse(errors)) => {
            for e in &errors {
                eprint!("{}", e.format(&source, &filename));
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "dragbox=warn",
        1 => "dragbox=debug",
        _ => "dragbox=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_intro() {
    println!(
        r#"dragbox - replay pointer gestures against a draggable, resizable element

USAGE:
    dragbox [OPTIONS] [FILE]
    echo '<script>' | dragbox

OPTIONS:
    -c, --config     Element configuration (TOML file)
    --svg            Print the final state as SVG
    -v, --verbose    Log engine activity (-vv for every move)
    -g, --grammar    Show gesture script reference
    -h, --help       Print help

QUICK START:
    echo 'drag (0, 0) -> (50, 30)' | dragbox

This drags a 200x200 element by (50, 30) and prints its new rectangle.
Run --grammar for the script syntax."#
    );
}

fn print_grammar() {
    println!(
        r#"DRAGBOX GESTURE SCRIPTS
=======================

GESTURES
--------
drag (x, y) -> (x, y) ... [on: "sel"]   Press, move through points, release
resize <handle> (x, y) -> (x, y) ...    Same, on a resize handle
press (x, y) [on: "sel"]                Begin a drag
press <handle> (x, y)                   Begin a resize
move (x, y)                             Move the pointer
release                                 End the current gesture

Handles: tl tm tr mr br bm bl ml
[on: ...] lists the selectors the pressed target matches, for
drag_handle and drag_cancel.

PLACEMENT
---------
position (x, y)                         Set left/top
size (w, h)                             Set width/height
edges (left, top, right, bottom)        Place by distance from parent edges
parent (w, h)                           Resize the parent frame
parent none                             Remove the parent frame

ACTIVATION
----------
activate
deactivate
deselect                                Deactivate unless prevented

Numbers may be negative. Comments use // or /* */.

CONFIGURATION (TOML, -c)
------------------------
x, y                     Initial position (default 0)
w, h                     Initial size or "auto" (default 200)
min_width, min_height    Minimum size (default 0)
max_width, max_height    Maximum size (default none)
grid = [x, y]            Snap increments (default [1, 1])
scale = n | [x, y]       Render scale (default 1)
axis = "x"|"y"|"both"    Drag axis (default both)
parent = [w, h]          Containing frame (default none)
lock_aspect_ratio        Keep width/height fixed (default false)
draggable, resizable     Gesture switches (default true)
active                   Start activated (default false)
prevent_deactivation     Ignore deselect (default false)
handles = ["tl", ...]    Enabled handles (default all)
drag_handle, drag_cancel Selectors for drag presses
natural_size = [w, h]    Measured size for "auto""#
    );
}
