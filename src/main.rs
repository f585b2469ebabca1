//! zasocaravita CLI: render Zasokese syllables as SVG glyphs.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use zasocaravita::alphabet::{self, LetterCategory};
use zasocaravita::batch::{self, OutputConfig};
use zasocaravita::canvas::CanvasConfig;
use zasocaravita::config::{EnvFile, UploadConfig};
use zasocaravita::engine::Engine;
use zasocaravita::upload;

#[derive(Parser)]
#[command(name = "zaso", version, about = "Zasokese syllable glyph renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every syllable found in the input text to SVG files.
    Generate {
        /// Text file of syllables; reads stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Directory for the generated SVG files.
        #[arg(long, default_value = "output")]
        out_dir: PathBuf,
    },

    /// Render a single syllable.
    Render {
        /// The syllable token, e.g. "krait".
        token: String,

        /// Write the SVG here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List the letters of the alphabet.
    Alphabet,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let engine = Engine::new(CanvasConfig::default())?;

    match cli.command {
        Commands::Generate { input, out_dir } => {
            let text = read_input(input.as_deref())?;
            let tokens = batch::extract_tokens(&text);
            let output = OutputConfig {
                dir: out_dir,
                ..Default::default()
            };
            let summary = batch::run(&engine, &tokens, &output)?;
            println!(
                "{} file(s) written, {} token(s) skipped",
                summary.written.len(),
                summary.failures.len()
            );

            let env = EnvFile::load(Path::new(".env")).into_diagnostic()?;
            let setting = UploadConfig::from_env(&env);
            upload::upload_generated(&setting, &summary.written);
        }

        Commands::Render { token, output } => {
            let document = engine.render_syllable(&token)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, document.as_bytes()).into_diagnostic()?;
                    println!("wrote {}", path.display());
                }
                None => println!("{document}"),
            }
        }

        Commands::Alphabet => {
            for letter in alphabet::all_letters() {
                let kind = match letter.category {
                    LetterCategory::Consonant => "consonant",
                    LetterCategory::Vowel(_) => "vowel",
                };
                println!(
                    "{}  {}  {} stroke(s)",
                    letter.symbol,
                    kind,
                    letter.paths.len()
                );
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).into_diagnostic(),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .into_diagnostic()?;
            Ok(text)
        }
    }
}
