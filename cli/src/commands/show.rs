use std::error::Error;

use clap::Args;
use colored::Colorize;
use session::NoteSession;
use ts_core::SnapshotStore;

use crate::output;

#[derive(Args)]
pub struct ShowArgs {
    /// Note id or unique id prefix
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<S>(session: &NoteSession<S>, args: ShowArgs) -> anyhow::Result<()>
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

    if args.json {
        println!("{}", serde_json::to_string_pretty(&note)?);
        return Ok(());
    }

    output::header(output::display_title(&note.title));
    println!();
    println!("{}", note.content);
    println!();

    println!("{} {}", "id:".dimmed(), note.id.as_str().dimmed());
    println!(
        "{} {}",
        "updated:".dimmed(),
        note.updated_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    if !note.tags.is_empty() {
        println!("{} {}", "tags:".dimmed(), note.tags.join(", ").dimmed());
    }
    if let Some(category) = &note.category {
        println!("{} {}", "category:".dimmed(), category.dimmed());
    }

    Ok(())
}
