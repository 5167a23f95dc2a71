use std::error::Error;
use std::sync::Arc;

use clap::{Args, Subcommand};
use colored::Colorize;
use config::TypesetConfig;
use session::NoteSession;
use suggest::{HttpSuggestionService, MockSuggestionService, SuggestError, SuggestionGateway};
use ts_core::SnapshotStore;

use crate::output;
use crate::ux_error;

/// Context sent to the service when the note has no title.
const GENERAL_CONTEXT: &str = "General note context";

#[derive(Subcommand)]
pub enum SuggestCommand {
    #[command(about = "Fetch style suggestions for a note")]
    Styles(StylesArgs),

    #[command(about = "Fetch rewrite alternatives for selected text")]
    Rewrite(RewriteArgs),
}

#[derive(Args)]
pub struct StylesArgs {
    /// Note id or unique id prefix (defaults to the newest note)
    pub id: Option<String>,

    /// Text to style instead of the note's own excerpt
    #[arg(long)]
    pub text: Option<String>,

    /// How many style variants to fetch
    #[arg(long)]
    pub variants: Option<usize>,

    /// Apply variant N (1-based) to the session style
    #[arg(long)]
    pub apply: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct RewriteArgs {
    /// Note id or unique id prefix (defaults to the newest note)
    pub id: Option<String>,

    /// Text to rewrite instead of the note's own excerpt
    #[arg(long)]
    pub text: Option<String>,

    /// Write alternative N (1-based) back into the note
    #[arg(long)]
    pub apply: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run<S>(
    session: &NoteSession<S>,
    config: &TypesetConfig,
    cmd: SuggestCommand,
) -> anyhow::Result<()>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    match cmd {
        SuggestCommand::Styles(args) => run_styles(session, config, args).await,
        SuggestCommand::Rewrite(args) => run_rewrite(session, config, args).await,
    }
}

async fn run_styles<S>(
    session: &NoteSession<S>,
    config: &TypesetConfig,
    args: StylesArgs,
) -> anyhow::Result<()>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    let note = super::select_target(session, args.id.as_deref()).await?;
    if let Some(text) = &args.text {
        session.set_selection(text.clone()).await;
    }

    let seed = session.suggestion_seed().await?;
    let context = note_context(&note.title);
    let count = args.variants.unwrap_or(config.suggestions.style_variants);

    let suggestions = if config.suggestions.offline {
        let gateway = SuggestionGateway::new(Arc::new(MockSuggestionService::new()));
        gateway.style_suggestions(&seed, &context, count).await?
    } else {
        let gateway = http_gateway(config)?;
        gateway
            .style_suggestions(&seed, &context, count)
            .await
            .map_err(|e| suggest_failed(config, &e))?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    output::header("Style Suggestions");
    for (i, s) in suggestions.iter().enumerate() {
        println!();
        println!("  {}. {}", i + 1, s.emphasis.bold());
        println!(
            "     font:  {} {} (weight {})",
            s.font_family, s.font_size, s.font_weight
        );
        println!("     color: {}", s.color);
    }
    println!();

    if let Some(n) = args.apply {
        let Some(chosen) = n.checked_sub(1).and_then(|i| suggestions.get(i)) else {
            ux_error::invalid_variant(n, suggestions.len()).display();
            return Err(anyhow::anyhow!("no such suggestion"));
        };
        session.apply_style_suggestion(chosen).await;

        let style = session.current_style().await;
        output::success(&format!(
            "Applied variant {}: {} {} (weight {}), {}",
            n,
            style.font_family.unwrap_or_default(),
            style.font_size.unwrap_or_default(),
            style.font_weight.unwrap_or_default(),
            style.color.unwrap_or_default(),
        ));
    }

    Ok(())
}

async fn run_rewrite<S>(
    session: &NoteSession<S>,
    config: &TypesetConfig,
    args: RewriteArgs,
) -> anyhow::Result<()>
where
    S: SnapshotStore + 'static,
    S::Error: Error + Send + Sync + 'static,
{
    let note = super::select_target(session, args.id.as_deref()).await?;
    if let Some(text) = &args.text {
        session.set_selection(text.clone()).await;
    }

    let seed = session.suggestion_seed().await?;
    let context = note_context(&note.title);

    let mut alternatives = if config.suggestions.offline {
        let gateway = SuggestionGateway::new(Arc::new(MockSuggestionService::new()));
        gateway.text_alternatives(&seed, &context).await?
    } else {
        let gateway = http_gateway(config)?;
        gateway
            .text_alternatives(&seed, &context)
            .await
            .map_err(|e| suggest_failed(config, &e))?
    };
    alternatives.truncate(config.suggestions.max_alternatives);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&alternatives)?);
        return Ok(());
    }

    if alternatives.is_empty() {
        output::info("The service returned no alternatives.");
        return Ok(());
    }

    output::header(&format!("Rewrites for \"{}\"", truncate_display(&seed, 60)));
    println!();
    for (i, alt) in alternatives.iter().enumerate() {
        println!("  {}. {}", i + 1, alt);
    }
    println!();

    if let Some(n) = args.apply {
        let Some(chosen) = n.checked_sub(1).and_then(|i| alternatives.get(i)) else {
            ux_error::invalid_variant(n, alternatives.len()).display();
            return Err(anyhow::anyhow!("no such alternative"));
        };
        session.apply_text_suggestion(chosen).await?;
        session.on_before_teardown().await?;
        output::success(&format!("Rewrote {}", output::display_title(&note.title)));
    }

    Ok(())
}

fn note_context(title: &str) -> String {
    if title.is_empty() {
        GENERAL_CONTEXT.to_string()
    } else {
        title.to_string()
    }
}

fn http_gateway(config: &TypesetConfig) -> anyhow::Result<SuggestionGateway<HttpSuggestionService>> {
    let client = reqwest::Client::builder()
        .timeout(config.suggestions.request_timeout())
        .build()?;
    let service = HttpSuggestionService::with_client(
        &config.suggestions.base_url,
        config.suggestions.api_key.as_deref(),
        client,
    );
    Ok(SuggestionGateway::new(Arc::new(service)))
}

fn suggest_failed(config: &TypesetConfig, err: &SuggestError) -> anyhow::Error {
    ux_error::suggestion_service_unreachable(&config.suggestions.base_url, &err.to_string())
        .display();
    anyhow::anyhow!("suggestion request failed")
}

fn truncate_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
