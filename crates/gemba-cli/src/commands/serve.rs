use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Run the API server in the foreground until interrupted.
pub async fn run(args: &ServeArgs, ctx: AppContext) -> anyhow::Result<()> {
    let mut server = ctx.config.server.clone();
    if let Some(port) = args.port {
        server.port = port;
    }
    if let Some(bind) = &args.bind {
        server.bind = bind.clone();
    }

    let addr = server.addr();
    gemba_server::serve(ctx.store, &addr, &server.frontend_origin).await?;
    Ok(())
}
