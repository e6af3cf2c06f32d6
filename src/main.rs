use clap::{Parser, Subcommand};
use cyberfolio::contact::{ContactDispatcher, Field, Notification};
use cyberfolio::emailjs::EmailJsClient;
use cyberfolio::ui::NoEffects;
use cyberfolio::{catalog, config, generate, output, routes};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("CYBERFOLIO_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("CYBERFOLIO_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once; only called at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "cyberfolio")]
#[command(about = "Static generator for a personal portfolio site")]
#[command(long_about = "\
Static generator for a personal portfolio site

Every route (home, about, projects, certifications, tools, blog, contact)
is rendered from one content catalog. Missing files fall back to the stock
versions compiled into the binary.

Content structure:

  content/
  ├── config.toml          # Site config: title, preferences, colors, contact
  ├── catalog.toml         # Projects, certifications, tools, posts, skills, ...
  └── assets/              # Copied to the output root (sounds/, images, favicon)
      └── sounds/
          ├── click.mp3
          └── hover.mp3

Contact form delivery uses EmailJS. Ids can be set in [contact] or through
CYBERFOLIO_EMAILJS_SERVICE_ID, CYBERFOLIO_EMAILJS_TEMPLATE_ID and
CYBERFOLIO_EMAILJS_USER_ID.

Run 'cyberfolio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every route to the output directory
    Build,
    /// Validate config and catalog without building
    Check,
    /// Print the navigation menu and where each link resolves
    Routes,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the stock catalog.toml
    GenCatalog,
    /// Send a message through the configured contact delivery
    SendMessage {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            let site_catalog = catalog::load_catalog(&cli.source)?;
            println!("==> Generating {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&cli.source, &cli.output, &site_config, &site_catalog)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let site_catalog = catalog::load_catalog(&cli.source)?;
            output::print_check_output(&site_config, &site_catalog);
            println!("==> Content is valid");
        }
        Command::Routes => {
            output::print_routes(&routes::menu());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenCatalog => {
            print!("{}", catalog::stock_catalog_toml());
        }
        Command::SendMessage {
            name,
            email,
            message,
        } => {
            let site_config = config::load_config(&cli.source)?;
            let client = EmailJsClient::new(site_config.contact.clone())?;
            let mut dispatcher = ContactDispatcher::new(Arc::new(client));
            dispatcher.draft.set_field(Field::Name, name)?;
            dispatcher.draft.set_field(Field::Email, email)?;
            dispatcher.draft.set_field(Field::Message, message)?;

            let notification = dispatcher
                .submit(&site_config.preferences, &mut NoEffects)
                .await?;
            println!("{}", notification.message());
            if notification == Notification::Failed {
                return Err("message delivery failed".into());
            }
        }
    }

    Ok(())
}
