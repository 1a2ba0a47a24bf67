// SPDX-License-Identifier: MPL-2.0
use std::collections::HashSet;
use std::path::PathBuf;
use toast_queue::config::{self, ToastConfig};
use toast_queue::notifications::{ToastEvent, ToastOptions, ToastRuntime, Variant};
use toast_queue::{Error, Result};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
toast-queue: show toasts and log their lifecycle until they are gone

USAGE:
  toast-queue [OPTIONS] MESSAGE...

OPTIONS:
  --variant NAME     error, success, warning or info (default: info)
  --duration SECS    auto-close duration
  --group NAME       group for every toast
  --unique           suppress duplicate messages
  --manual           disable auto-close and hide everything right away
  --config PATH      settings file (default: user config directory)
  -h, --help         print this help
";

struct Args {
    variant: Variant,
    duration: Option<f32>,
    group: Option<String>,
    unique: bool,
    manual: bool,
    config: Option<PathBuf>,
    messages: Vec<String>,
}

fn parse_args() -> Result<Option<Args>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        variant: args.opt_value_from_str("--variant")?.unwrap_or_default(),
        duration: args.opt_value_from_str("--duration")?,
        group: args.opt_value_from_str("--group")?,
        unique: args.contains("--unique"),
        manual: args.contains("--manual"),
        config: args.opt_value_from_str("--config")?,
        messages: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    };
    if parsed.messages.is_empty() {
        return Err(Error::Usage("at least one MESSAGE is required".into()));
    }
    Ok(Some(parsed))
}

fn resolve_config(args: &Args) -> Result<ToastConfig> {
    let mut config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    if let Some(secs) = args.duration {
        config.duration_secs = secs;
    }
    if args.group.is_some() {
        config.group.clone_from(&args.group);
    }
    if args.manual {
        config.auto_close = false;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(args) = parse_args()? else {
        return Ok(());
    };
    let config = resolve_config(&args)?;

    let (handle, task) = ToastRuntime::spawn(config);
    let mut events = handle.subscribe();

    let mut pending = HashSet::new();
    for message in &args.messages {
        let options = ToastOptions::new().variant(args.variant).unique(args.unique);
        if let Some(id) = handle.show(message.clone(), options).await? {
            pending.insert(id);
        }
    }
    if args.manual {
        handle.hide_all().await?;
    }

    while !pending.is_empty() {
        match events.recv().await {
            Ok(ToastEvent::Shown(toast)) => {
                tracing::info!(toast = %toast.id, variant = %toast.variant, message = %toast.message, "shown");
            }
            Ok(ToastEvent::Closed { id, reason }) => {
                tracing::info!(toast = %id, ?reason, "closed");
            }
            Ok(ToastEvent::Removed { id }) => {
                pending.remove(&id);
                tracing::info!(toast = %id, "removed");
            }
            Err(RecvError::Lagged(skipped)) => {
                // Missed `Removed` events: anything no longer tracked is gone.
                tracing::warn!(skipped, "event stream lagged, resyncing");
                let tracked = handle.snapshot().await?;
                pending.retain(|id| tracked.iter().any(|toast| toast.id == *id));
            }
            Err(RecvError::Closed) => break,
        }
    }

    handle.shutdown().await?;
    if let Err(err) = task.await {
        tracing::error!(error = %err, "toast runtime task failed");
    }
    Ok(())
}
