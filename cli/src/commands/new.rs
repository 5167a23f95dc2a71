use std::error::Error;

use clap::Args;
use session::NoteSession;
use ts_core::SnapshotStore;

use crate::output;

#[derive(Args)]
pub struct NewArgs {
    /// Initial title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Initial content
    #[arg(short, long)]
    pub content: Option<String>,

    /// Output the created note as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<S>(session: &NoteSession<S>, args: NewArgs) -> anyhow::Result<()>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    let created = session.create_and_select().await?;

    if args.title.is_some() || args.content.is_some() {
        if let Some(title) = args.title {
            session.edit_title(title).await?;
        }
        if let Some(content) = args.content {
            session.edit_content(content).await?;
        }
        session.on_before_teardown().await?;
    }

    let note = session
        .repository()
        .get(&created.id)
        .await
        .ok_or_else(|| anyhow::anyhow!("created note vanished"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&note)?);
        return Ok(());
    }

    output::success(&format!(
        "Created {} ({})",
        output::display_title(&note.title),
        note.id.as_str()
    ));

    Ok(())
}
