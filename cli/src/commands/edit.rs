use std::error::Error;

use clap::Args;
use session::NoteSession;
use ts_core::SnapshotStore;

use crate::output;

#[derive(Args)]
pub struct EditArgs {
    /// Note id or unique id prefix
    pub id: String,

    /// Replace the title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Replace the content
    #[arg(short, long)]
    pub content: Option<String>,

    /// Append a line to the content
    #[arg(short, long)]
    pub append: Option<String>,
}

pub async fn run<S>(session: &NoteSession<S>, args: EditArgs) -> anyhow::Result<()>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    if args.title.is_none() && args.content.is_none() && args.append.is_none() {
        output::warn("Nothing to change. Pass --title, --content, or --append.");
        return Ok(());
    }

    let id = super::resolve_note_id(session, &args.id).await?;
    session.select_note(&id).await?;

    if let Some(title) = args.title {
        session.edit_title(title).await?;
    }
    if let Some(content) = args.content {
        session.edit_content(content).await?;
    }
    if let Some(line) = args.append {
        let buffer = session
            .buffer()
            .await
            .ok_or_else(|| anyhow::anyhow!("no active note"))?;
        let content = if buffer.content.is_empty() {
            line
        } else {
            format!("{}\n{}", buffer.content, line)
        };
        session.edit_content(content).await?;
    }

    let saved = session.on_before_teardown().await?;
    let buffer = session
        .buffer()
        .await
        .ok_or_else(|| anyhow::anyhow!("no active note"))?;

    if saved {
        output::success(&format!("Saved {}", output::display_title(&buffer.title)));
    } else {
        output::info("No changes to save.");
    }

    Ok(())
}
