//! savelog - save-triggered changelog recorder
//!
//! Binary entry point: the terminal workbench, plus a `markup` command that
//! prints a dialog as HTML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use savelog::Config;
use savelog::app::App;
use savelog::changelog::constants::DEFAULT_DOCUMENT_SUFFIX;
use savelog::logging::{self, LogTarget};
use savelog::model::WatchedDocument;
use savelog::plugin::{CommitPrompt, LogViewer, Plugin};
use savelog::ui::markup;

#[derive(Parser, Debug)]
#[command(
    name = "savelog",
    version,
    about = "Ask for a change note on every document save and keep it in a changelog"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Documents to watch; the first one is active when the plugin loads
    documents: Vec<PathBuf>,

    /// Suffix replaced by `_changelog.txt` to name the log
    #[arg(long, global = true, env = "SAVELOG_SUFFIX", default_value = DEFAULT_DOCUMENT_SUFFIX)]
    suffix: String,

    /// Environment variable holding the author name (repeat to set a fallback order)
    #[arg(long = "identity-var", global = true, value_name = "VAR")]
    identity_vars: Vec<String>,

    /// Log file for the workbench (default: savelog.log in the temp directory)
    #[arg(long, global = true, env = "SAVELOG_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG overrides it
    #[arg(long, global = true, default_value = "info", value_name = "LEVEL")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the log viewer (or commit prompt) of a document as HTML
    Markup {
        document: PathBuf,

        /// Render the commit prompt instead of the viewer
        #[arg(long)]
        prompt: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = Config::default()
        .with_suffix(cli.suffix)
        .with_identity_vars(cli.identity_vars);

    match cli.command {
        Some(Command::Markup { document, prompt }) => {
            logging::init(LogTarget::Stderr, &cli.log_level)?;
            print!("{}", render_markup(&config, &document, prompt)?);
            Ok(())
        }
        None => {
            let log_file = cli.log_file.unwrap_or_else(logging::default_log_file);
            logging::init(LogTarget::File(log_file), &cli.log_level)?;

            let app = App::new(Plugin::new(config), cli.documents);
            let terminal = ratatui::init();
            let result = run(terminal, app);
            ratatui::restore();
            result
        }
    }
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout; when no key arrives the app checks the
/// watched documents for saves.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.tick();
    }
    Ok(())
}

/// HTML page of the viewer, or of the commit prompt, for `document`
fn render_markup(config: &Config, document: &Path, prompt: bool) -> color_eyre::Result<String> {
    let plugin = Plugin::new(config.clone());
    let document = WatchedDocument::new(document);

    let request = if prompt {
        CommitPrompt::for_document(plugin.resolver(), &document)
            .ok_or_else(|| eyre!("{} has no changelog path", document.target().display()))?
            .show()?
    } else {
        LogViewer::open(plugin.resolver(), plugin.store(), &document)?.request()
    };

    Ok(markup::render(&request.view))
}
