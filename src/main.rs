//! Entry point for **swayws**.
//!
//! ```text
//! swayws [--config <path>]               query sway and show a notification
//! swayws [--config <path>] --print       print the status line to stdout
//! swayws [--config <path>] --idle-args   print the swayidle command line
//! ```
//!
//! Exit status: `0` on success, `1` for usage or config errors, `2` when
//! the workspace query is unavailable, `3` when the notification service is
//! unavailable.

use log::{debug, error, info};
use std::path::PathBuf;
use swayws::config::Config;
use swayws::notify::desktop::DesktopNotifier;
use swayws::notify::stdout::StdoutSink;
use swayws::reporter::{ReporterError, WorkspaceStatusReporter};
use swayws::sway::wm::SwayWm;
use swayws::traits::NotificationSink;

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Report,
    Print,
    IdleArgs,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    mode: Mode,
    config: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args {
        mode: Mode::Report,
        config: None,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--print" => parsed.mode = Mode::Print,
            "--idle-args" => parsed.mode = Mode::IdleArgs,
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(parsed)
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/swayws`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("swayws")
}

/// Load an explicit config (errors are fatal) or the default location
/// (falling back to compiled-in defaults).
fn load_config(explicit: Option<PathBuf>) -> Result<Config, String> {
    if let Some(path) = explicit {
        return Config::load(&path).map_err(|e| e.to_string());
    }
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            debug!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) => {
            debug!("no config file ({}), using defaults", e);
            Ok(Config::default())
        }
    }
}

//  Main

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let config = match load_config(args.config) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let result = match args.mode {
        Mode::IdleArgs => {
            match config.idle.shell_line() {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    error!("{}", e);
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Mode::Print => connect().and_then(|wm| run(wm, StdoutSink, config)),
        Mode::Report => connect().and_then(|wm| {
            let sink = DesktopNotifier::probe()
                .map_err(|e| ReporterError::NotifyUnavailable(e.to_string()))?;
            run(wm, sink, config)
        }),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

/// Locate the sway IPC socket.
fn connect() -> Result<SwayWm, ReporterError> {
    let wm = SwayWm::connect().map_err(|e| ReporterError::QueryUnavailable(e.to_string()))?;
    info!("using sway socket {}", wm.socket().display());
    Ok(wm)
}

/// Run one report through `sink`.
fn run<N: NotificationSink>(wm: SwayWm, sink: N, config: Config) -> Result<(), ReporterError> {
    let mut reporter = WorkspaceStatusReporter::new(wm, sink);
    reporter.set_style(config.notification);
    reporter.report()
}
