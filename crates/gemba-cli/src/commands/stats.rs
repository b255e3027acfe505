use chrono::Utc;

use gemba_core::stats::AuditStats;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::commands::shared::parse::parse_window;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let window = parse_window(args.window.as_deref(), ctx.config.general.default_window)?;

    let audits = ctx.store.list_audits(None).await?;
    let stats = AuditStats::compute(&audits, window, Utc::now());

    output(&stats, flags.format)
}
