//! rgb2xyy - RGB <-> CIE xyY converter
//!
//! Converts 8-bit RGB to xyY (and back again as a check), or xyY to RGB.

use anyhow::{Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use xyy_color::ConvertConfig;
use xyy_color::transfer::REFERENCE_BLACK_FLOOR;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "rgb2xyy")]
#[command(author, version, about = "Convert between RGB, CIE XYZ and CIE xyY")]
#[command(long_about = "
Converts colors between gamma-encoded CIE RGB (reference white E),
CIE XYZ and CIE xyY, printing every intermediate step.

Examples:
  rgb2xyy rgb 255 128 0                 # RGB -> XYZ -> xyY, then back
  rgb2xyy xyy 0.3127 0.3290 0.5         # xyY -> XYZ -> RGB
  rgb2xyy --gamma 2.4 rgb 200 100 50    # decode/encode with gamma 2.4
  rgb2xyy --json xyy 0.33 0.33 1.0      # machine-readable report
  RUST_LOG=trace rgb2xyy rgb 1 2 3      # log every conversion step
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Gamma exponent (0 disables gamma correction)
    #[arg(short, long, global = true, default_value_t = 0.0, allow_negative_numbers = true)]
    gamma: f64,

    /// Encoded RGB below this is forced to 0 (gamma only)
    #[arg(long, global = true, default_value_t = REFERENCE_BLACK_FLOOR)]
    black_floor: f64,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert 8-bit RGB to xyY and back
    #[command(alias = "RGB")]
    Rgb(RgbArgs),

    /// Convert xyY to RGB
    #[command(aliases = ["xyY", "XYY"])]
    Xyy(XyyArgs),
}

#[derive(Args, Debug)]
struct RgbArgs {
    /// Red (0-255)
    #[arg(allow_negative_numbers = true)]
    r: i64,

    /// Green (0-255)
    #[arg(allow_negative_numbers = true)]
    g: i64,

    /// Blue (0-255)
    #[arg(allow_negative_numbers = true)]
    b: i64,
}

#[derive(Args, Debug)]
struct XyyArgs {
    /// Chromaticity x (0.0-1.0)
    #[arg(allow_negative_numbers = true)]
    x: f64,

    /// Chromaticity y (0.0-1.0)
    #[arg(allow_negative_numbers = true)]
    y: f64,

    /// Luminance Y (0.0-1.0)
    #[arg(allow_negative_numbers = true)]
    luminance: f64,
}

impl Cli {
    /// Conversion settings from the global flags.
    fn config(&self) -> Result<ConvertConfig> {
        if !self.gamma.is_finite() {
            bail!("Gamma {} is not a finite number", self.gamma);
        }
        if !(0.0..=1.0).contains(&self.black_floor) {
            bail!("Black floor {} out of range 0.0 - 1.0", self.black_floor);
        }
        Ok(ConvertConfig::default()
            .with_gamma(self.gamma)
            .with_black_floor(self.black_floor))
    }
}

/// Default filter directive for a `-v` count.
fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "xyy_color=warn,rgb2xyy=warn",
        1 => "xyy_color=info,rgb2xyy=info",
        2 => "xyy_color=debug,rgb2xyy=debug",
        _ => "xyy_color=trace,rgb2xyy=trace",
    }
}

fn init_logging(verbose: u8) {
    // Logs go to stderr so stdout stays a clean report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_directive(verbose).into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config()?;
    let output = if cli.json {
        commands::Output::Json
    } else {
        commands::Output::Text
    };

    match cli.command {
        Commands::Rgb(args) => commands::rgb::run(args, &config, output),
        Commands::Xyy(args) => commands::xyy::run(args, &config, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rgb() {
        let cli = Cli::try_parse_from(["rgb2xyy", "rgb", "255", "128", "0"]).unwrap();
        let Commands::Rgb(args) = cli.command else {
            panic!("expected rgb");
        };
        assert_eq!((args.r, args.g, args.b), (255, 128, 0));
        assert_eq!(cli.gamma, 0.0);
        assert_eq!(cli.black_floor, 0.1);
    }

    #[test]
    fn test_mode_aliases() {
        for mode in ["xyy", "xyY", "XYY"] {
            let cli = Cli::try_parse_from(["rgb2xyy", mode, "0.3", "0.3", "0.5"]).unwrap();
            assert!(matches!(cli.command, Commands::Xyy(_)), "mode {}", mode);
        }
        let cli = Cli::try_parse_from(["rgb2xyy", "RGB", "1", "2", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Rgb(_)));
    }

    #[test]
    fn test_negative_values_reach_validation() {
        // Parsed as values, rejected later with the range message
        let cli = Cli::try_parse_from(["rgb2xyy", "rgb", "-1", "0", "0"]).unwrap();
        let Commands::Rgb(args) = cli.command else {
            panic!("expected rgb");
        };
        assert_eq!(args.r, -1);
    }

    #[test]
    fn test_exactly_three_values() {
        assert!(Cli::try_parse_from(["rgb2xyy", "rgb", "1", "2"]).is_err());
        assert!(Cli::try_parse_from(["rgb2xyy", "xyy", "0.1", "0.2", "0.3", "0.4"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "rgb2xyy", "-vv", "--gamma", "2.4", "--black-floor", "0", "--json", "rgb", "1", "2", "3",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        let config = cli.config().unwrap();
        assert_eq!(config.gamma, 2.4);
        assert_eq!(config.black_floor, 0.0);
    }

    #[test]
    fn test_bad_black_floor() {
        let cli =
            Cli::try_parse_from(["rgb2xyy", "--black-floor", "1.5", "rgb", "1", "2", "3"]).unwrap();
        assert!(cli.config().is_err());
    }

    #[test]
    fn test_log_directive() {
        assert_eq!(log_directive(0), "xyy_color=warn,rgb2xyy=warn");
        assert_eq!(log_directive(9), "xyy_color=trace,rgb2xyy=trace");
    }
}
