use std::error::Error;

use clap::Args;
use session::NoteSession;
use ts_core::SnapshotStore;

use crate::output;
use crate::ux_error;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<S>(session: &NoteSession<S>, args: ListArgs) -> anyhow::Result<()>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    let notes = session.repository().list().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
        return Ok(());
    }

    if notes.is_empty() {
        ux_error::no_notes().display();
        return Ok(());
    }

    output::header(&format!("Notes ({})", notes.len()));
    for note in &notes {
        output::note_row(note);
    }

    Ok(())
}
