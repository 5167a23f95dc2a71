use std::error::Error;

use clap::Args;
use session::NoteSession;
use ts_core::SnapshotStore;

use crate::output;

#[derive(Args)]
pub struct SearchArgs {
    /// Search query, matched case-insensitively against titles and content
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<S>(session: &NoteSession<S>, args: SearchArgs) -> anyhow::Result<()>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    let hits = session.repository().search(&args.query).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        output::info(&format!("No notes match '{}'.", args.query));
        return Ok(());
    }

    output::header(&format!("Results ({})", hits.len()));
    for note in &hits {
        output::note_row(note);
    }

    Ok(())
}
