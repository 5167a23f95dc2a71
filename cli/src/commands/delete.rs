use std::error::Error;

use clap::Args;
use dialoguer::Confirm;
use session::NoteSession;
use ts_core::SnapshotStore;

use crate::output;

#[derive(Args)]
pub struct DeleteArgs {
    /// Note id or unique id prefix
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub async fn run<S>(session: &NoteSession<S>, args: DeleteArgs) -> anyhow::Result<()>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    let id = super::resolve_note_id(session, &args.id).await?;
    let note = session
        .repository()
        .get(&id)
        .await
        .ok_or_else(|| anyhow::anyhow!("note vanished while reading"))?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete \"{}\"?",
                output::display_title(&note.title)
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Aborted.");
            return Ok(());
        }
    }

    let deleted = session.delete_note(&id).await?;
    output::success(&format!(
        "Deleted {}",
        output::display_title(&deleted.title)
    ));

    Ok(())
}
