/// audiomorph - audio file transformation and analysis
use anyhow::{bail, Context};
use clap::Parser;
use morph_audio::{decode_file, transcode, Format};
use morph_core::ConversionRequest;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "audiomorph", version)]
#[command(about = "A utility for audio file transformation and analysis")]
#[command(long_about = "audiomorph transforms audio files between formats and \
analyzes audio file properties.

With only an input file, it displays statistics about the audio file.
With both input and output files, it transforms the audio from one format to
the other, optionally resampling and selecting channels along the way.

Supported input formats:  WAV, AIFF, MP3, OGG, FLAC
Supported output formats: WAV, AIFF, MP3, FLAC")]
struct Cli {
    /// Input audio file
    input: PathBuf,

    /// Output audio file; omit to display statistics about the input
    output: Option<PathBuf>,

    /// Convert to mono by using only the first channel
    #[arg(long)]
    mono: bool,

    /// Comma-separated source channel indices to keep (e.g. "1" or "0,0")
    #[arg(long, value_delimiter = ',', conflicts_with = "mono")]
    channels: Option<Vec<usize>>,

    /// Target sample rate in Hz
    #[arg(long)]
    rate: Option<u32>,

    /// Interpolation method: linear, cubic, hermite, lanczos2, lanczos3,
    /// bspline3, bspline5 or monotonic
    #[arg(long, default_value = "linear")]
    method: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.input.exists() {
        bail!("input file does not exist: {}", cli.input.display());
    }

    match &cli.output {
        None => display_statistics(&cli.input),
        Some(output) => run_transcode(&cli, output),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "audiomorph=debug,morph_audio=debug,morph_core=debug"
    } else {
        "audiomorph=info,morph_audio=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run_transcode(cli: &Cli, output: &Path) -> anyhow::Result<()> {
    let channel_selection = if cli.mono {
        Some(vec![0])
    } else {
        cli.channels.clone()
    };
    let request = ConversionRequest::new(cli.rate, Some(&cli.method), channel_selection)
        .context("invalid conversion request")?;

    transcode(&cli.input, output, &request).with_context(|| {
        format!(
            "failed to transform {} to {}",
            cli.input.display(),
            output.display()
        )
    })?;

    println!(
        "Successfully transformed {} to {}",
        cli.input.display(),
        output.display()
    );
    Ok(())
}

fn display_statistics(input: &Path) -> anyhow::Result<()> {
    let format = Format::from_path(input)?;
    let audio = decode_file(input)
        .with_context(|| format!("failed to decode input file: {}", input.display()))?;

    println!("Audio File Statistics");
    println!("=====================");
    println!(
        "File:         {}",
        input.file_name().map_or_else(
            || input.display().to_string(),
            |name| name.to_string_lossy().into_owned()
        )
    );
    println!("Format:       {format}");
    println!("Channels:     {}", audio.channel_count());
    println!("Sample Rate:  {} Hz", audio.sample_rate());
    println!("Bit Depth:    {} bits", audio.bit_depth());
    println!("Duration:     {:.2} seconds", audio.duration_seconds());
    println!("Samples:      {} per channel", audio.sample_count());
    if let Ok(metadata) = std::fs::metadata(input) {
        println!(
            "File Size:    {:.2} MB",
            metadata.len() as f64 / (1024.0 * 1024.0)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mono_conflicts_with_channels() {
        let result = Cli::try_parse_from(["audiomorph", "in.wav", "out.wav", "--mono", "--channels", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn channels_parse_as_a_comma_separated_list() {
        let cli = Cli::try_parse_from(["audiomorph", "in.wav", "out.wav", "--channels", "1,0,1"])
            .unwrap();
        assert_eq!(cli.channels, Some(vec![1, 0, 1]));
    }
}
