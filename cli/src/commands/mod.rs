pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod new;
pub mod search;
pub mod show;
pub mod suggest;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::TypesetConfig;
use session::NoteSession;
use storage::{FileStore, MemoryStore};
use ts_core::{Note, NoteId, SnapshotStore};

use crate::app;
use crate::ux_error;

#[derive(Parser)]
#[command(
    name = "typeset",
    author,
    version,
    about = "TypeSet - distraction-free notes with AI styling",
    long_about = "Write distraction-free. Notes persist to a single JSON snapshot,\nedits autosave after a short pause, and AI style or rewrite\nsuggestions are one command away."
)]
pub struct Cli {
    /// Path to a TOML or YAML config file
    #[arg(long, global = true, env = "TYPESET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for the notes snapshot (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Keep notes in memory only; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List notes, newest first")]
    List(list::ListArgs),

    #[command(about = "Create a note and make it active")]
    New(new::NewArgs),

    #[command(about = "Show a note in full")]
    Show(show::ShowArgs),

    #[command(about = "Edit a note through the autosaving session")]
    Edit(edit::EditArgs),

    #[command(about = "Delete a note")]
    Delete(delete::DeleteArgs),

    #[command(about = "Search notes by title and content")]
    Search(search::SearchArgs),

    #[command(subcommand, about = "AI style and rewrite suggestions")]
    Suggest(suggest::SuggestCommand),

    #[command(about = "Export a note (prints a notice, no file is produced)")]
    Export(export::ExportArgs),
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = app::load_config(cli.config.as_deref())?;

    if cli.ephemeral {
        let session = app::open_session(MemoryStore::new(), &config).await?;
        dispatch(&session, &config, cli.command).await
    } else {
        let dir = app::resolve_data_dir(cli.data_dir.as_deref(), &config)?;
        let session = app::open_session(FileStore::in_dir(&dir), &config).await?;
        dispatch(&session, &config, cli.command).await
    }
}

async fn dispatch<S>(
    session: &NoteSession<S>,
    config: &TypesetConfig,
    command: Commands,
) -> anyhow::Result<()>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    match command {
        Commands::List(args) => list::run(session, args).await,
        Commands::New(args) => new::run(session, args).await,
        Commands::Show(args) => show::run(session, args).await,
        Commands::Edit(args) => edit::run(session, args).await,
        Commands::Delete(args) => delete::run(session, args).await,
        Commands::Search(args) => search::run(session, args).await,
        Commands::Suggest(cmd) => suggest::run(session, config, cmd).await,
        Commands::Export(args) => export::run(session, args).await,
    }
}

/// Resolve a full note id or a unique id prefix.
pub(crate) async fn resolve_note_id<S>(
    session: &NoteSession<S>,
    input: &str,
) -> anyhow::Result<NoteId>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    let notes = session.repository().list().await;
    if notes.is_empty() {
        ux_error::no_notes().display();
        return Err(anyhow::anyhow!("no notes"));
    }

    if let Some(note) = notes.iter().find(|n| n.id.as_str() == input) {
        return Ok(note.id.clone());
    }

    let matches: Vec<&Note> = notes
        .iter()
        .filter(|n| n.id.as_str().starts_with(input))
        .collect();

    match matches.len() {
        1 => Ok(matches[0].id.clone()),
        0 => {
            ux_error::note_not_found(input).display();
            Err(anyhow::anyhow!("note not found"))
        }
        n => {
            ux_error::ambiguous_prefix(input, n).display();
            Err(anyhow::anyhow!("ambiguous note id"))
        }
    }
}

/// Select the addressed note, or the newest one when no id was given.
pub(crate) async fn select_target<S>(
    session: &NoteSession<S>,
    id: Option<&str>,
) -> anyhow::Result<Note>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    match id {
        Some(input) => {
            let id = resolve_note_id(session, input).await?;
            Ok(session.select_note(&id).await?)
        }
        None => match session.select_first().await? {
            Some(note) => Ok(note),
            None => {
                ux_error::no_notes().display();
                Err(anyhow::anyhow!("no notes"))
            }
        },
    }
}
