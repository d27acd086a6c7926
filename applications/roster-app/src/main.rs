/// Roster - user directory with local favorites
use clap::Parser;
use roster_app::{render, AppConfig, AppError, Command, LinePrompter, TerminalNotifier, HELP};
use roster_client::DirectoryClient;
use roster_state::ViewController;
use roster_storage::{FavoritesRepository, RedbStore};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse a user directory and keep local favorites", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./roster.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the rendered screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster=info,roster_app=info,roster_state=info,roster_client=warn,roster_storage=warn"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    tracing::info!("Directory: {}", config.directory.base_url);
    tracing::info!("Storage: {}", config.storage.path.display());

    let client = DirectoryClient::new(config.directory_config())?;
    let store = RedbStore::open(&config.storage.path).map_err(AppError::from)?;
    let mut screen = ViewController::new(
        client,
        FavoritesRepository::new(store),
        TerminalNotifier,
    );

    print!("{}", render(&screen));
    screen.start().await;
    print!("{}", render(&screen));
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Redraw => {}
            Command::ToggleFilter => {
                screen.toggle_filter();
            }
            Command::ToggleFavorite(id) => {
                if screen.directory().get(id).is_none() {
                    println!("No user with id {}", id);
                    continue;
                }
                screen.toggle_favorite(id).await;
            }
            Command::Add { name, email } => {
                // Failures are reported through the notifier
                let _ = screen.add_user(&name, &email).await;
            }
            Command::ClearFavorites => {
                let mut prompter = LinePrompter::new(&mut lines);
                screen.clear_favorites(&mut prompter).await;
            }
        }

        print!("{}", render(&screen));
    }

    tracing::info!("Bye");
    Ok(())
}
