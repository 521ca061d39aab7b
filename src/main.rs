//! gtts - Convert text to speech using the Google Gemini TTS API

mod audio;
mod config;
mod error;
mod pipeline;
mod text;
mod tts;
mod voice;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use config::GttsConfig;
use pipeline::Pipeline;
use tts::gemini::GeminiSynthesizer;
use voice::Voice;

#[derive(Parser, Debug)]
#[command(name = "gtts")]
#[command(about = "Google Gemini text-to-speech CLI", long_about = None)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a text file to speech audio
    Convert {
        /// Input text file
        input: PathBuf,

        /// Output WAV file path (default: <output_dir>/<input_name>.wav)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Voice to use for synthesis
        #[arg(short, long)]
        voice: Option<String>,
    },
    /// Convert text directly to speech audio
    Speak {
        /// Text to convert to speech
        text: String,

        /// Output WAV file path (default: <output_dir>/speech.wav)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Voice to use for synthesis
        #[arg(short, long)]
        voice: Option<String>,
    },
    /// List all available voices
    Voices,
    /// Show resolved configuration
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = GttsConfig::load().context("Failed to load configuration")?;

    match args.command {
        Commands::Convert {
            input,
            output,
            voice,
        } => {
            if !input.exists() {
                anyhow::bail!("Input file not found: {}", input.display());
            }
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let output = output.unwrap_or_else(|| {
                let stem = input.file_stem().unwrap_or_default();
                config
                    .output_dir
                    .join(format!("{}.wav", stem.to_string_lossy()))
            });

            synthesize_to_file(&config, &text, voice.as_deref(), &output).await
        }
        Commands::Speak {
            text,
            output,
            voice,
        } => {
            let output = output.unwrap_or_else(|| config.output_dir.join("speech.wav"));
            synthesize_to_file(&config, &text, voice.as_deref(), &output).await
        }
        Commands::Voices => {
            print_voices(&config);
            Ok(())
        }
        Commands::Info => {
            print_info(&config);
            Ok(())
        }
    }
}

/// Run the full pipeline for one input and write the WAV file.
async fn synthesize_to_file(
    config: &GttsConfig,
    text: &str,
    voice: Option<&str>,
    output: &Path,
) -> Result<()> {
    let voice = Voice::from_str(voice.unwrap_or(&config.default_voice))?;
    let api_key = config.resolve_api_key()?;

    let synthesizer = GeminiSynthesizer::new(&config.model, api_key);
    let pipeline = Pipeline::new(Box::new(synthesizer), config.max_tokens);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(format!("Generating audio with voice {voice}..."));

    let audio = pipeline
        .run(text, voice, |completed, total| {
            pb.set_length(total as u64);
            pb.set_position(completed as u64);
        })
        .await?;

    pb.finish_and_clear();

    audio.write(output)?;
    println!(
        "Audio saved to: {} ({:.1}s, {} KB)",
        output.display(),
        audio.duration_secs(),
        audio.data_len() / 1024
    );

    Ok(())
}

fn print_voices(config: &GttsConfig) {
    println!("Available voices:");
    for voice in Voice::ALL {
        if voice.as_str().eq_ignore_ascii_case(&config.default_voice) {
            println!("  {voice} (default)");
        } else {
            println!("  {voice}");
        }
    }
}

fn print_info(config: &GttsConfig) {
    println!("gtts configuration");
    println!("  Model: {}", config.model);
    println!("  Default voice: {}", config.default_voice);
    println!("  Sample rate: {} Hz", audio::SAMPLE_RATE);
    println!("  Output directory: {}", config.output_dir.display());
    println!("  Max chunk tokens: {}", config.max_tokens);
    println!(
        "  API key: {}",
        if config.api_key_set() {
            "Set"
        } else {
            "Not set"
        }
    );
}
