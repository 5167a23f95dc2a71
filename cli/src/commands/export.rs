use std::error::Error;
use std::str::FromStr;

use clap::Args;
use session::NoteSession;
use ts_core::{ExportFormat, SnapshotStore};

use crate::output;
use crate::ux_error;

#[derive(Args)]
pub struct ExportArgs {
    /// Note id or unique id prefix (defaults to the newest note)
    pub id: Option<String>,

    /// Output format: pdf, docx, or md
    #[arg(short, long)]
    pub format: String,
}

pub async fn run<S>(session: &NoteSession<S>, args: ExportArgs) -> anyhow::Result<()>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    let Ok(format) = ExportFormat::from_str(&args.format.to_lowercase()) else {
        ux_error::invalid_export_format(&args.format).display();
        return Err(anyhow::anyhow!("unknown export format"));
    };

    super::select_target(session, args.id.as_deref()).await?;
    session.request_export(format);

    output::info(&format!(
        "Exporting as {}... (Conceptual)",
        format.to_string().to_uppercase()
    ));
    output::detail("This feature would generate a file.");

    Ok(())
}
