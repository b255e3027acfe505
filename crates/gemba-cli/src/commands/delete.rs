use gemba_core::wire::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store.delete_audit(id).await?;
    output(
        &DeleteResponse {
            success: true,
            message: format!("audit {id} deleted"),
        },
        flags.format,
    )
}
