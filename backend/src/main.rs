//! physio-site CLI - Render and serve the clinic website hero
//!
//! ```bash
//! physio-site serve                          # Start HTTP server (port 3000)
//! physio-site render -o index.html           # Render the home page to a file
//! physio-site render --fragment --size small # Print just the hero section
//! physio-site resolve --title "Back Pain"    # Show resolved hero as JSON
//! ```
//!
//! Every command accepts `--content FILE` (or `PHYSIO_CONTENT`) to replace the
//! built-in clinic content.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use physio_hero_core::{HeroOverrides, HeroSize};
use physio_site::{
    render_hero, render_page, server::start_server, HeroResponse, ServerConfig, SiteContent,
    DEFAULT_HOST, DEFAULT_PORT,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "physio-site")]
#[command(version, about = "Render the physiotherapy clinic hero section", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Host address to bind
        #[arg(long, short = 'H', default_value = DEFAULT_HOST, env = "PHYSIO_HOST")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PHYSIO_PORT")]
        port: u16,

        /// Site content JSON file
        #[arg(short, long, env = "PHYSIO_CONTENT")]
        content: Option<PathBuf>,

        /// Directory served under /images
        #[arg(short, long, env = "PHYSIO_ASSETS")]
        assets: Option<PathBuf>,
    },

    /// Render the home page (or only the hero) to HTML
    Render {
        /// Site content JSON file
        #[arg(short, long, env = "PHYSIO_CONTENT")]
        content: Option<PathBuf>,

        #[command(flatten)]
        overrides: OverrideArgs,

        /// Output only the hero section
        #[arg(long)]
        fragment: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the resolved hero values as JSON
    Resolve {
        /// Site content JSON file
        #[arg(short, long, env = "PHYSIO_CONTENT")]
        content: Option<PathBuf>,

        #[command(flatten)]
        overrides: OverrideArgs,
    },
}

/// Hero overrides given on the command line.
#[derive(Args, Debug, Default)]
struct OverrideArgs {
    /// Heading text
    #[arg(long)]
    title: Option<String>,

    /// Paragraph under the heading
    #[arg(long)]
    description: Option<String>,

    /// Primary button label
    #[arg(long)]
    cta_text: Option<String>,

    /// Primary button link
    #[arg(long)]
    cta_url: Option<String>,

    /// Secondary button label
    #[arg(long)]
    secondary_cta_text: Option<String>,

    /// Secondary button link
    #[arg(long)]
    secondary_cta_url: Option<String>,

    /// Background image URL
    #[arg(long)]
    hero_image: Option<String>,

    /// Background image alt text
    #[arg(long)]
    hero_image_alt: Option<String>,

    /// Logo image URL
    #[arg(long)]
    logo_image: Option<String>,

    /// Logo alt text
    #[arg(long)]
    logo_alt: Option<String>,

    /// Logo width in pixels
    #[arg(long)]
    logo_width: Option<u32>,

    /// Logo height in pixels
    #[arg(long)]
    logo_height: Option<u32>,

    /// Band height: large, medium or small
    #[arg(long)]
    size: Option<HeroSize>,
}

impl From<OverrideArgs> for HeroOverrides {
    fn from(args: OverrideArgs) -> Self {
        HeroOverrides {
            title: args.title,
            description: args.description,
            cta_text: args.cta_text,
            cta_url: args.cta_url,
            secondary_cta_text: args.secondary_cta_text,
            secondary_cta_url: args.secondary_cta_url,
            hero_image: args.hero_image,
            hero_image_alt: args.hero_image_alt,
            logo_image: args.logo_image,
            logo_alt: args.logo_alt,
            logo_width: args.logo_width,
            logo_height: args.logo_height,
            size: args.size,
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "physio_site=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            content,
            assets,
        } => {
            cmd_serve(ServerConfig {
                host,
                port,
                content_path: content,
                assets_dir: assets,
            })
            .await
        }

        Commands::Render {
            content,
            overrides,
            fragment,
            output,
        } => cmd_render(content.as_deref(), overrides.into(), fragment, output.as_deref()),

        Commands::Resolve { content, overrides } => {
            cmd_resolve(content.as_deref(), overrides.into())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    start_server(config).await?;
    Ok(())
}

fn cmd_render(
    content: Option<&Path>,
    overrides: HeroOverrides,
    fragment: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = SiteContent::load(content)?;

    let html = if fragment {
        render_hero(&content.resolve_hero(&overrides))?
    } else {
        render_page(&content, &overrides)?
    };

    write_output(&html, output)
}

fn cmd_resolve(
    content: Option<&Path>,
    overrides: HeroOverrides,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = SiteContent::load(content)?;
    let hero = content.resolve_hero(&overrides);
    let response = HeroResponse::new(hero, !overrides.is_empty());
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            tracing::info!(path = %p.display(), "output written");
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
