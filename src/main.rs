// SPDX-License-Identifier: MPL-2.0
//! Headless banner driver.
//!
//! Shows every positional argument as a banner, then taps "dismiss" on the
//! first visible banner each turn until the overlay is idle.
//!
//! ```text
//! banner_overlay [--config-dir DIR] [--capacity N] [--theme NAME] BODY...
//! ```
//!
//! Set `RUST_LOG=banner_overlay=debug` to follow every transition.

use banner_overlay::banner::{
    BannerPosition, BannerTheme, DefaultViewBuilder, Manager, Message, MountPoint, ViewEvent,
    ViewHandle,
};
use banner_overlay::config;
use banner_overlay::error::{Error, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

struct Flags {
    config_dir: Option<String>,
    capacity: Option<usize>,
    theme: Option<String>,
    bodies: Vec<String>,
}

/// Mount point that only reports what would be inserted or removed.
struct LoggingMount;

impl MountPoint for LoggingMount {
    fn mount(&mut self, handle: ViewHandle, position: BannerPosition) {
        tracing::info!(handle = handle.raw(), ?position, "mount banner view");
    }

    fn unmount(&mut self, handle: ViewHandle) {
        tracing::info!(handle = handle.raw(), "unmount banner view");
    }
}

fn parse_flags() -> Result<Flags> {
    let mut args = pico_args::Arguments::from_env();
    let cli_error = |err: pico_args::Error| Error::Config(err.to_string());

    Ok(Flags {
        config_dir: args.opt_value_from_str("--config-dir").map_err(cli_error)?,
        capacity: args.opt_value_from_str("--capacity").map_err(cli_error)?,
        theme: args.opt_value_from_str("--theme").map_err(cli_error)?,
        bodies: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let flags = parse_flags()?;

    let (mut settings, warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
    if let Some(warning) = warning {
        tracing::warn!(%warning, "using default banner settings");
    }
    if let Some(capacity) = flags.capacity {
        settings.display.capacity = Some(capacity);
    }
    if let Some(name) = flags.theme {
        settings.appearance.default_theme = Some(name.parse::<BannerTheme>()?);
    }

    let mut manager = Manager::from_config(&settings, DefaultViewBuilder::new(), LoggingMount);
    let events = manager.handle();

    for body in flags.bodies {
        let message = Message::builder(body)
            .dismiss_delegate(|m: &Message| {
                tracing::info!(message = %m.id(), body = m.body(), "banner dismissed");
            })
            .build()?;
        manager.show(message)?;
    }
    tracing::info!(
        active = manager.active_count(),
        queued = manager.queued_count(),
        "banners submitted"
    );

    loop {
        let front = manager.active().next().map(|(message, _)| message.id());
        let Some(id) = front else {
            break;
        };
        events.report(ViewEvent::DismissTapped(id));
        manager.process_pending();
    }

    tracing::info!("banner overlay idle");
    Ok(())
}
