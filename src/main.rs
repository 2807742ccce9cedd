use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use animoji::fx::Effect;
use animoji::models::{AnimationConfig, Overrides};
use animoji::services::AnimationPipeline;

#[derive(Parser)]
#[command(name = "animoji", version)]
#[command(about = "Turn a still image into a looping animated GIF")]
struct Cli {
    /// Input PNG or JPEG file (default: stdin)
    #[arg(short = 'i', long = "in", value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output GIF file (default: stdout)
    #[arg(short = 'o', long = "out", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number of frames [default: 12]
    #[arg(short, long, allow_negative_numbers = true)]
    frames: Option<i64>,

    /// Frames per second [default: 6]
    #[arg(short, long, allow_negative_numbers = true)]
    rate: Option<i64>,

    /// Play the animation backwards
    #[arg(long)]
    reverse: bool,

    /// Resize the image to this width before animating (0 = off)
    #[arg(long, value_name = "WIDTH", allow_negative_numbers = true)]
    resize: Option<i64>,

    /// YAML file with default settings
    #[arg(long, env = "ANIMOJI_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Effects to apply to every frame, in order
    #[arg(value_name = "EFFECT")]
    effects: Vec<String>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            frames: self.frames,
            rate: self.rate,
            reverse: self.reverse.then_some(true),
            resize: self.resize,
            effects: self.effects.clone(),
        }
    }
}

fn effects_help() -> String {
    let width = Effect::ALL
        .iter()
        .map(|e| e.name().len())
        .max()
        .unwrap_or(0);
    let mut help = String::from("Effects:\n");
    for effect in Effect::ALL {
        help.push_str(&format!(
            "  {:width$}  {}\n",
            effect.name(),
            effect.description()
        ));
    }
    help
}

fn parse_cli() -> Cli {
    let matches = Cli::command().after_help(effects_help()).get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    // Logs go to stderr: stdout may carry the GIF
    let default_filter = if cli.verbose {
        "animoji=debug,animoji_fx=debug"
    } else {
        "animoji=warn,animoji_fx=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let file_config = cli
        .config
        .as_deref()
        .map(AnimationConfig::load)
        .transpose()?;
    let params = cli.overrides().resolve(file_config.as_ref())?;

    AnimationPipeline::new(params).run(cli.input.as_deref(), cli.output.as_deref())?;

    if let Some(output) = &cli.output {
        println!("Successfully created animated GIF: {}", output.display());
    }
    Ok(())
}
