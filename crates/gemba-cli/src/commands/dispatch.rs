use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Submit(args) => commands::submit::run(&args, &ctx, flags).await,
        Commands::List(args) => commands::list::run(&args, &ctx, flags).await,
        Commands::Get { id } => commands::get::run(&id, &ctx, flags).await,
        Commands::Delete { id } => commands::delete::run(&id, &ctx, flags).await,
        Commands::Stats(args) => commands::stats::run(&args, &ctx, flags).await,
        Commands::Serve(args) => commands::serve::run(&args, ctx).await,
        // main answers health before opening the database; this arm keeps
        // dispatch total over the command tree if that short-circuit moves.
        Commands::Health(args) => commands::health::run(&args, &ctx.config, flags).await,
    }
}
