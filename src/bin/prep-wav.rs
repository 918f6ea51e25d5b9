use anyhow::Context;
use clap::Parser;
use std::{path::PathBuf, process};
use wav_dataset_prep::{
    paths::default_output_dir, prepare_dataset, set_prep_progress_callback, PrepOptions,
    PrepProgress, Role,
};

/// Build train/test/val datasets from input/target recording pairs.
///
/// With several pairs, e.g. guitar_in.wav guitar_tg.wav bass_in.wav bass_tg.wav,
/// the train region of guitar_in.wav is followed by the train region of
/// bass_in.wav, and so on for every role.
#[derive(Parser)]
#[command(name = "prep-wav")]
#[command(version)]
struct Cli {
    /// Input and target files in pairs, e.g. guitar_in.wav guitar_tg.wav
    #[arg(short, long, num_args = 1.., required = true)]
    files: Vec<PathBuf>,

    /// Name of the JSON config file (".json" may be omitted)
    #[arg(
        short = 'l',
        long = "load-config",
        alias = "load_config",
        default_value = "RNN-aidadsp-1"
    )]
    load_config: String,

    /// Directory holding the config files
    #[arg(
        long = "config-location",
        visible_alias = "cl",
        alias = "config_location",
        default_value = "Configs"
    )]
    config_location: PathBuf,

    /// Dataset root; defaults to $PREP_WAV_DATA_DIR or "Data"
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let quiet = cli.quiet;
    if !quiet {
        setup_progress_callback();
    }

    let opts = PrepOptions {
        files: cli.files,
        config_name: cli.load_config,
        config_location: cli.config_location,
        output_dir: cli.output_dir.unwrap_or_else(default_output_dir),
    };

    let report = prepare_dataset(&opts).context("dataset preparation failed")?;

    if quiet {
        for (_, _, path) in report.files.iter() {
            println!("{}", path.display());
        }
    } else {
        eprintln!();
        eprintln!("Done! Dataset at {} Hz:", report.sample_rate);
        for role in Role::ALL {
            eprintln!("  {:<5} {} samples", role, report.lengths.get(role));
        }
        if report.truncated_pairs > 0 {
            eprintln!("  {} pair(s) were truncated to a common length", report.truncated_pairs);
        }
    }

    Ok(())
}

fn setup_progress_callback() {
    set_prep_progress_callback(|progress| match progress {
        PrepProgress::Stage(stage) => {
            let stage_name = match stage {
                "load_config" => "Loading config",
                "read_audio" => "Reading audio files",
                "align" => "Checking rates and lengths",
                "split" => "Splitting pairs",
                "write_dataset" => "Saving processed wav files into dataset",
                _ => stage,
            };
            eprintln!("⏳ {}", stage_name);
        }
        PrepProgress::PairRead { done, total, .. } => {
            eprint!("\r📥 Read pairs: {}/{}", done, total);
            if done >= total {
                eprintln!();
            }
        }
        PrepProgress::Truncated {
            input,
            target,
            aligned_len,
            ..
        } => {
            eprintln!(
                "⚠️  {} / {} truncated to {} samples",
                input.display(),
                target.display(),
                aligned_len
            );
        }
        PrepProgress::Writing { path, .. } => {
            eprintln!("💾 {}", path.display());
        }
        PrepProgress::Finished => {
            // Summary is printed by run()
        }
    });
}
