use gemba_core::entities::Responsible;
use gemba_core::wire::CreateAuditRequest;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::commands::shared::parse::build_notes;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &SubmitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let notes = build_notes(&args.note)?;

    let request = CreateAuditRequest {
        scores: args.scores.clone(),
        notes: Some(notes.into_iter().collect()),
        // The store recomputes the stored average from the scores.
        average: None,
        responsible: Responsible {
            name: args.name.clone(),
            surname: args.surname.clone(),
            document: args.document.clone(),
            role: args.role.clone(),
            area: args.area.clone(),
            email: args.email.clone(),
        },
    };

    let audit = ctx.store.create_audit(&request).await?;
    output(&audit, flags.format)
}
