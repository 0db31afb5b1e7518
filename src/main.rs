use std::path::PathBuf;

use clap::{Parser, Subcommand};

use wikimage::wiki::{init, WikiError, WikiStore};

#[derive(Parser)]
#[command(name = "wikimage", about = "Manage a directory of markdown wiki pages")]
struct Cli {
    /// Wiki root directory
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new wiki directory and initialize it
    New { name: String },
    /// Initialize a wiki in the root directory
    Init,
    /// List all pages in the wiki
    List,
    /// View a page with line numbers
    View { page: String },
    /// Show outgoing and incoming links for a page
    Links { page: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), WikiError> {
    match cli.command {
        Command::New { name } => {
            init::new_wiki(&cli.root.join(&name)).await?;
            println!("Created wiki '{}'", name);
        }
        Command::Init => {
            init::init_wiki(&cli.root).await?;
            println!("Initialized wiki at {}", cli.root.display());
        }
        Command::List => {
            let store = WikiStore::open(&cli.root)?;
            for page in store.list_pages() {
                println!("{}", page);
            }
        }
        Command::View { page } => {
            let store = WikiStore::open(&cli.root)?;
            println!("{}", store.view_page(&page).await?);
        }
        Command::Links { page } => {
            let store = WikiStore::open(&cli.root)?;
            let outgoing = store.outgoing_links(&page).await?;
            let incoming = store.incoming_links(&page).await?;
            println!("outgoing: {}", outgoing.join(", "));
            println!("incoming: {}", incoming.join(", "));
        }
    }
    Ok(())
}
