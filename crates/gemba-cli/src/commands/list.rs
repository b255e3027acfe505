use chrono::Utc;
use serde::Serialize;

use gemba_core::entities::Audit;
use gemba_core::stats::{TimeWindow, filter_by_window};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::parse::{parse_rating, parse_window};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuditListResponse {
    audits: Vec<Audit>,
}

pub async fn run(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.general.default_limit);

    let filtering = args.window.is_some() || args.rating.is_some();
    let mut audits = if filtering {
        // In-memory filtering over the full set, the way the dashboard does.
        ctx.store.list_audits(None).await?
    } else {
        ctx.store.list_audits(Some(limit)).await?
    };

    if let Some(window) = args.window.as_deref() {
        let window = parse_window(Some(window), TimeWindow::All)?;
        audits = filter_by_window(&audits, window, Utc::now());
    }
    if let Some(rating) = args.rating.as_deref() {
        let rating = parse_rating(rating)?;
        audits.retain(|audit| audit.rating() == rating);
    }
    audits.truncate(usize::try_from(limit)?);

    output(&AuditListResponse { audits }, flags.format)
}
