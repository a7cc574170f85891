//! Glyph monitor
//!
//! Watches a single URL and prints one character per probe, once a second, until killed.
//!
//! ```text
//!     glyph-monitor https://example.com
//!     ooooo..___ooo
//! ```

use clap::Parser;
use glyph_monitor::lifecycle::{signals, Shutdown};
use glyph_monitor::observability;
use glyph_monitor::probe::{HttpTransport, Prober, TokioDelay};
use glyph_monitor::ProbeConfig;

#[derive(Parser)]
#[command(name = "glyph-monitor", disable_help_flag = true)]
#[command(about = "Probe a URL every second and print o (up), . (bad status) or _ (unreachable)", long_about = None)]
struct Cli {
    /// URL to probe. Missing or invalid URLs produce a stream of `_`.
    #[arg(default_value = "", allow_hyphen_values = true)]
    url: String,

    /// Ignored.
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    rest: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_logging();

    let cli = Cli::parse();
    let config = ProbeConfig::new(cli.url);

    tracing::debug!(target_url = %config.target, "Configuration loaded");

    let transport = HttpTransport::new()?;
    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    let signal_task = signals::spawn_signal_handler(shutdown.clone());

    let prober = Prober::new(config, transport, TokioDelay, std::io::stdout());
    prober.run(stop).await?;

    // Only a delivered signal ends a clean run; report it the way a killed process would.
    if let Ok(Some(signal)) = signal_task.await {
        std::process::exit(signal.exit_code());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("glyph-monitor").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_missing_url_is_empty() {
        let cli = parse(&[]);
        assert_eq!(cli.url, "");
        assert!(cli.rest.is_empty());
    }

    #[test]
    fn test_extra_arguments_ignored() {
        let cli = parse(&["http://127.0.0.1:1/", "extra", "-x", "--verbose"]);
        assert_eq!(cli.url, "http://127.0.0.1:1/");
        assert_eq!(cli.rest, vec!["extra", "-x", "--verbose"]);
    }

    #[test]
    fn test_leading_dash_is_the_url() {
        assert_eq!(parse(&["-h"]).url, "-h");
        assert_eq!(parse(&["--help"]).url, "--help");
        assert_eq!(parse(&["--foo", "bar"]).url, "--foo");
    }
}
