//! asciisolid: spinning parametric solids drawn with ASCII glyphs
//!
//! Samples a torus, sphere, cylinder or cone, rotates it a little each frame
//! and prints the shaded projection to the terminal.

use anyhow::Context;
use asciisolid_cli::{
    config::{validate_angles, SceneConfig, SolidConfig},
    play, PlainDisplay, Scene, TerminalDisplay,
};
use asciisolid_core::EulerAngles;
use asciisolid_shapes::SolidKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SolidArg {
    Torus,
    Sphere,
    Cylinder,
    Cone,
}

impl From<SolidArg> for SolidKind {
    fn from(arg: SolidArg) -> Self {
        match arg {
            SolidArg::Torus => SolidKind::Torus,
            SolidArg::Sphere => SolidKind::Sphere,
            SolidArg::Cylinder => SolidKind::Cylinder,
            SolidArg::Cone => SolidKind::Cone,
        }
    }
}

#[derive(Parser)]
#[command(name = "asciisolid")]
#[command(version)]
#[command(about = "Render rotating parametric solids as ASCII art")]
#[command(long_about = "
asciisolid samples a parametric solid, rotates it and draws the shaded
projection with a ramp of ASCII glyphs.

Example usage:
  asciisolid play --solid torus
  asciisolid --config scene.yaml play --frames 300
  asciisolid frame --solid cone --x 0.4 --y 0.8
")]
struct Cli {
    /// Path to a YAML scene file; built-in defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the animation
    Play {
        /// Override the number of frames
        #[arg(short, long)]
        frames: Option<usize>,
        /// Play until interrupted
        #[arg(long, conflicts_with = "frames")]
        forever: bool,
        /// Override the delay between frames in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Replace the configured solid with a default one of this kind
        #[arg(short, long)]
        solid: Option<SolidArg>,
        /// Override the sampling resolution
        #[arg(short, long)]
        resolution: Option<usize>,
        /// Print frames sequentially instead of redrawing the screen
        #[arg(long)]
        plain: bool,
    },

    /// Print a single frame at the given rotation
    Frame {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        z: f64,
        #[arg(short, long)]
        solid: Option<SolidArg>,
        #[arg(short, long)]
        resolution: Option<usize>,
    },

    /// Validate the configuration file
    CheckConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level_filter = if let Some(level) = cli.log_level {
        level.to_string()
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
            .to_string()
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&level_filter))
        .with_writer(std::io::stderr)
        .init();

    let mut config = SceneConfig::load_or_default(cli.config.as_deref())
        .context("failed to load scene configuration")?;

    match cli.command {
        Commands::Play {
            frames,
            forever,
            delay_ms,
            solid,
            resolution,
            plain,
        } => {
            apply_overrides(&mut config, solid, resolution);
            if forever {
                config.animation.frames = None;
            } else if let Some(frames) = frames {
                config.animation.frames = Some(frames);
            }
            if let Some(delay_ms) = delay_ms {
                config.animation.delay_ms = delay_ms;
            }

            let mut scene = Scene::from_config(&config)?;
            let shown = if plain {
                play(&mut scene, &mut PlainDisplay::stdout())?
            } else {
                let mut display = TerminalDisplay::new().context("failed to set up terminal")?;
                play(&mut scene, &mut display)?
            };
            tracing::info!(frames = shown, "Done");
        }
        Commands::Frame {
            x,
            y,
            z,
            solid,
            resolution,
        } => {
            validate_angles("frame angles", [x, y, z])?;
            apply_overrides(&mut config, solid, resolution);
            let scene = Scene::from_config(&config)?;
            println!("{}", scene.frame_with(&EulerAngles::new(x, y, z)));
        }
        Commands::CheckConfig => {
            config.validate()?;
            match &cli.config {
                Some(path) => println!("Configuration OK: {}", path.display()),
                None => println!("Configuration OK (built-in defaults)"),
            }
            println!("  Solid: {:?}", config.solid);
            println!("  Resolution: {}", config.resolution);
            println!("  Window: {}x{}", config.render.window[0], config.render.window[1]);
            println!("  Light: {:?}", config.render.light);
            println!("  Plane: {:?}", config.render.plane);
            match config.animation.frames {
                Some(frames) => println!("  Frames: {frames}"),
                None => println!("  Frames: until interrupted"),
            }
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut SceneConfig, solid: Option<SolidArg>, resolution: Option<usize>) {
    if let Some(solid) = solid {
        config.solid = SolidConfig::default_for(solid.into());
    }
    if let Some(resolution) = resolution {
        config.resolution = resolution;
    }
}
