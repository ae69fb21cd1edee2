use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use jointcount::audio::{CommandCuePlayer, CuePlayer};
use jointcount::config::WidgetConfig;
use jointcount::page::{self, PageDocument, SelectedJoints};
use jointcount::session;

/// Replay pointer events against the joint count widgets of a page
#[derive(Parser, Debug)]
#[command(name = "jointcount", version)]
struct Cli {
    /// Page description (JSON)
    page: PathBuf,
    /// Initial selections, `{ "tjc": [..], "sjc": "1;2" }`
    #[arg(long)]
    selected: Option<PathBuf>,
    /// Event script, one `<element-id> click|move <x> <y>` per line
    #[arg(long)]
    events: Option<PathBuf>,
    /// Directory for rendered widget images
    #[arg(long, default_value = "out")]
    out: PathBuf,
    /// Config file instead of the user config
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting runtime")?;
    runtime.block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => WidgetConfig::load_from(path)?,
        None => WidgetConfig::load(),
    };
    let document = PageDocument::load(&cli.page)?;
    let selected = cli.selected.as_deref().map(SelectedJoints::load).transpose()?;

    let program = config.cue_command.clone();
    let mut widgets = page::initialize(&document, selected.as_ref(), &config, || {
        Box::new(CommandCuePlayer::new(program.clone())) as Box<dyn CuePlayer>
    })?;
    log::info!("Initialized {} widgets", widgets.len());

    session::load_backgrounds(&mut widgets, &config.background_image).await?;

    if let Some(path) = &cli.events {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let events = session::script::parse(&text)?;
        session::replay(&mut widgets, &events)?;
    }

    session::write_pngs(&widgets, &cli.out)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&session::summarize(&widgets))?
    );
    Ok(())
}
