//! Keyboard Signature CLI
//!
//! Usage:
//!   keyboard-signature [OPTIONS] [NAME]
//!
//! Options:
//!   -l, --layout <LAYOUT>  Keyboard layout (qwerty, colemak, dvorak, azerty, abcdef)
//!   -c, --curve <CURVE>    Curve type (linear, catmull-rom, quadratic-bezier, cubic-bezier, simple-curve)
//!   -n, --numbers          Include the number row
//!       --no-numbers       Leave out the number row
//!   -s, --style <FILE>     Style file (TOML format)
//!   -p, --path-only        Print only the SVG path data
//!   -k, --keyboard         Draw the keyboard behind the signature
//!   -h, --help             Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use keyboard_signature::{
    render_svg, CurveStrategy, KeyboardLayout, LayoutConfig, Signature, SignatureOptions, Style,
    SvgConfig,
};

#[derive(Parser)]
#[command(name = "keyboard-signature")]
#[command(about = "Trace a name across a keyboard layout and output it as SVG")]
struct Cli {
    /// Name to trace (reads from stdin if not provided)
    name: Option<String>,

    /// Keyboard layout
    #[arg(short, long)]
    layout: Option<KeyboardLayout>,

    /// Curve type joining the keys
    #[arg(short, long)]
    curve: Option<CurveStrategy>,

    /// Include the number row so digits are traced too
    #[arg(short, long)]
    numbers: bool,

    /// Leave out the number row, even if the style file enables it
    #[arg(long, conflicts_with = "numbers")]
    no_numbers: bool,

    /// Style file for stroke colour, width and default options (TOML format)
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Print only the SVG path data
    #[arg(short, long)]
    path_only: bool,

    /// Draw the keyboard behind the signature
    #[arg(short, long)]
    keyboard: bool,

    /// Background colour for the SVG canvas
    #[arg(short, long)]
    background: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List available layouts and curve types
    #[arg(long)]
    list: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list {
        print_list();
        return;
    }

    // If no name and stdin is a terminal (interactive), show intro help
    if cli.name.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load style
    let style = match &cli.style {
        Some(path) => match Style::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!(path = %path.display(), "failed to load style");
                eprintln!("Error loading style '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Style::default(),
    };

    // Read name
    let name = match &cli.name {
        Some(name) => name.clone(),
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer.trim_end_matches(['\r', '\n']).to_string(),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    // Command-line flags override the style file
    let include_numbers = match (cli.numbers, cli.no_numbers) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };
    let options =
        SignatureOptions::from_style(&style).with_overrides(cli.layout, cli.curve, include_numbers);

    let geometry = LayoutConfig::default();
    let signature = Signature::generate(&name, &options, &geometry);
    if signature.is_empty() {
        tracing::warn!(name = %name, layout = %options.layout, "no characters of the name have a key");
    }

    let output = if cli.path_only {
        signature.path_data()
    } else {
        let mut svg = SvgConfig::new().with_keyboard(cli.keyboard);
        if let Some(background) = &cli.background {
            svg = svg.with_background(background.clone());
        }
        render_svg(&signature, &geometry, &svg)
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, format!("{}\n", output)) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            tracing::info!(path = %path.display(), "wrote signature");
        }
        None => println!("{}", output),
    }
}

fn print_list() {
    println!("LAYOUTS");
    for layout in KeyboardLayout::ALL {
        println!("    {}", layout);
    }
    println!();
    println!("CURVES");
    for curve in CurveStrategy::ALL {
        println!("    {}", curve);
    }
}

fn print_intro() {
    println!(
        r##"Keyboard Signature - trace a name across a keyboard layout

USAGE:
    keyboard-signature [OPTIONS] [NAME]
    echo '<name>' | keyboard-signature

OPTIONS:
    -l, --layout       qwerty, colemak, dvorak, azerty or abcdef
    -c, --curve        linear, catmull-rom, quadratic-bezier, cubic-bezier or simple-curve
    -n, --numbers      Include the number row
    --no-numbers       Leave out the number row
    -s, --style        Stroke colours and defaults (TOML file)
    -p, --path-only    Print only the path data
    -k, --keyboard     Draw the keyboard behind the signature
    -b, --background   Canvas background colour
    -o, --output       Write to a file
    --list             List layouts and curves
    -h, --help         Print help

STYLE FILE:
    [signature]
    layout = "dvorak"
    curve = "catmull-rom"
    include-numbers = false

    [stroke]
    style = "gradient"
    gradient-start = "#ff6b6b"
    gradient-end = "#4ecdc4"
    width = 3

QUICK START:
    keyboard-signature -c catmull-rom -b '#000000' Ada > ada-signature.svg"##
    );
}
