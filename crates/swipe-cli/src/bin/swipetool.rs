use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use swipe_cli::commands::replay_ops::ReplayOptions;
use swipe_cli::commands::{config_ops, dict_ops, layout_ops, load_settings, replay_ops};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "swipetool", about = "Swipe decoder diagnostics")]
struct Cli {
    /// Log decoder activity to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a synthetic gesture through the key centres of LETTERS
    Replay {
        /// Word list (one word per line)
        dict_file: PathBuf,
        /// Letters to trace, e.g. "helo"
        letters: String,
        /// Keyboard width in px
        #[arg(long, default_value = "1080")]
        width: f32,
        /// Label glyph height in px
        #[arg(long, default_value = "20")]
        glyph_height: f32,
        /// Interpolated samples between consecutive key centres
        #[arg(long, default_value = "0")]
        steps: usize,
        /// Sample each key centre twice
        #[arg(long)]
        dwell: bool,
        /// Number of candidates (defaults to decoder.max_candidates)
        #[arg(short, long)]
        n: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print key rectangles of the configured layout
    Layout {
        #[arg(long, default_value = "1080")]
        width: f32,
        #[arg(long, default_value = "20")]
        glyph_height: f32,
        #[arg(long)]
        json: bool,
    },
    /// Check whether a string is a word or prefix in a word list
    Lookup {
        dict_file: PathBuf,
        query: String,
        #[arg(long)]
        json: bool,
    },
    /// Show word/node counts and load time of a word list
    Stats {
        dict_file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Command::Replay {
            dict_file,
            letters,
            width,
            glyph_height,
            steps,
            dwell,
            n,
            json,
        } => {
            let settings = die!(load_settings(cli.config.as_deref()), "Error: {}");
            let opts = ReplayOptions {
                width,
                glyph_height,
                steps,
                dwell,
                max_candidates: n,
            };
            die!(
                replay_ops::replay(&settings, &dict_file, &letters, &opts, json),
                "Error: {}"
            );
        }
        Command::Layout {
            width,
            glyph_height,
            json,
        } => {
            let settings = die!(load_settings(cli.config.as_deref()), "Error: {}");
            die!(
                layout_ops::layout(&settings, width, glyph_height, json),
                "Error: {}"
            );
        }
        Command::Lookup {
            dict_file,
            query,
            json,
        } => die!(dict_ops::lookup(&dict_file, &query, json), "Error: {}"),
        Command::Stats { dict_file, json } => {
            die!(dict_ops::stats(&dict_file, json), "Error: {}")
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => {
            die!(config_ops::settings_validate(&file), "Error: {}")
        }
    }
}
