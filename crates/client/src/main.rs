// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

//! Headless polling client for the CAD dispatch backend.
//!
//! Logs in, scopes syncing to a patrol group, and polls the backend on
//! an interval, logging snapshot summaries and change notifications.
//! Useful for exercising a backend without the full UI.

use cad_core::{FilterContext, FilterDefaults, TaskFilter};
use cad_session::CadSession;
use cad_transport::{HttpTransport, HttpTransportConfig};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};

/// CAD Client - headless polling client for a CAD dispatch backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the CAD backend (e.g., `https://cad.example.net/api`)
    #[arg(short, long)]
    backend_url: String,

    /// API key sent with every request
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Payroll id of the logged-in officer
    #[arg(short = 'u', long)]
    payroll_id: String,

    /// Patrol group to scope syncing to
    #[arg(short, long)]
    patrol_group: String,

    /// Poll interval in seconds
    #[arg(short, long, default_value_t = 30)]
    interval: u64,

    /// Pull a single snapshot and exit
    #[arg(long, default_value_t = false)]
    once: bool,
}

/// Logs a one-line summary of the current snapshot.
fn log_summary(session: &CadSession, filter: &TaskFilter) {
    let snapshot = session.snapshot();
    let viewer = session.booked_on_callsign();
    let patrol_group: Option<String> = session.patrol_group();
    let ctx: FilterContext<'_> = FilterContext {
        snapshot: &snapshot,
        viewer: viewer.as_ref(),
        patrol_group: patrol_group.as_deref(),
    };

    info!(
        incidents = snapshot.incidents().len(),
        resources = snapshot.resources().len(),
        patrols = snapshot.patrols().len(),
        broadcasts = snapshot.broadcasts().len(),
        visible_incidents = filter.filtered_incidents(&ctx).len(),
        annotations = filter.annotations(&ctx).len(),
        "snapshot"
    );

    if let Some(resource) = session.current_resource() {
        info!(
            callsign = %resource.callsign,
            status = %resource.status,
            current_incident = resource.current_incident.as_deref().unwrap_or("-"),
            "own callsign"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing CAD client");

    let mut config: HttpTransportConfig = HttpTransportConfig::new(args.backend_url.clone());
    config.api_key.clone_from(&args.api_key);
    let transport: Arc<HttpTransport> = Arc::new(HttpTransport::new(config)?);
    let session: Arc<CadSession> = Arc::new(CadSession::new(transport));

    let officer = session.sync_initial(&args.payroll_id).await?;
    info!(officer = %officer.display_name(), "logged in");

    session
        .set_patrol_group(Some(args.patrol_group.clone()))
        .await?;
    info!(patrol_group = %args.patrol_group, "sync scope set");

    let filter: TaskFilter = TaskFilter::defaults(FilterDefaults::List);
    log_summary(&session, &filter);

    if args.once {
        return Ok(());
    }

    // Log change notifications as they arrive; re-query through the
    // accessors, never from event payloads.
    let mut events = session.events().subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            info!(event = event.event_type(), "change notification");
        }
    });

    let mut ticker: tokio::time::Interval =
        tokio::time::interval(std::time::Duration::from_secs(args.interval.max(1)));
    loop {
        ticker.tick().await;
        match session.refresh().await {
            Ok(_) => log_summary(&session, &filter),
            // Keep serving the last good snapshot; the next tick retries.
            Err(err) => warn!(error = %err, "refresh failed"),
        }
    }
}
