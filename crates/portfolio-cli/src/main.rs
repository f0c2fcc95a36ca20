//! Portfolio CLI
//!
//! Thin wrapper around portfolio-core for working with the site's contact
//! data outside the browser.
//!
//! ## Usage
//!
//! ```bash
//! # Print the contact card
//! portfolio vcard
//!
//! # Save the contact card the way the site's fallback does
//! portfolio save --dir ~/Downloads
//!
//! # Print the QR gallery entries for a deployed page
//! portfolio links --page-url "https://example.com/?page=contact"
//!
//! # Render a gallery QR code in the terminal
//! portfolio qr contact
//!
//! # Show the URL the site writes when switching views
//! portfolio url resume --href "https://example.com/?ref=cv"
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use portfolio_core::{
    build_contact_card_text, build_qr_payload_text, initial_view, qr_gallery_items, rewrite_href,
    save_contact, ContactFile, DirectoryDownloader, NoShareSheet, QrTarget, SaveOutcome, Site, View,
};
use qrcode::render::unicode::Dense1x2;
use qrcode::QrCode;

/// Portfolio - contact card and QR tools
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio site companion - contact card and QR tools")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site file (JSON) overriding the built-in contact record and settings
    #[arg(short, long, global = true)]
    site: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the contact card, or write it to a file
    Vcard {
        /// Output file
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Save the contact card into a directory (default: Downloads)
    Save {
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Print the single-line QR contact payload
    Mecard,

    /// Print the QR gallery entries
    Links {
        /// URL of the deployed contact page
        #[arg(long)]
        page_url: Option<String>,
    },

    /// Render a gallery QR code in the terminal
    Qr {
        #[arg(value_enum)]
        target: TargetArg,

        /// URL of the deployed contact page (for `page`)
        #[arg(long)]
        page_url: Option<String>,
    },

    /// Show the URL written when navigating to a view
    Url {
        #[arg(value_enum)]
        view: ViewArg,

        /// Current page URL
        #[arg(long, default_value = "http://localhost:8080/")]
        href: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    Contact,
    Email,
    Linkedin,
    Github,
    Page,
}

impl From<TargetArg> for QrTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Contact => QrTarget::ContactCard,
            TargetArg::Email => QrTarget::Email,
            TargetArg::Linkedin => QrTarget::LinkedIn,
            TargetArg::Github => QrTarget::GitHub,
            TargetArg::Page => QrTarget::ThisPage,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    Home,
    Resume,
    Contact,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Home => View::Home,
            ViewArg::Resume => View::Resume,
            ViewArg::Contact => View::Contact,
        }
    }
}

/// Set up logging based on verbosity level
fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Default directory for `save` (the user's download folder)
fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn load_site(path: Option<&PathBuf>) -> Result<Site> {
    match path {
        Some(path) => Site::from_path(path)
            .with_context(|| format!("Failed to load site file {}", path.display())),
        None => Ok(Site::default()),
    }
}

fn render_qr(data: &str) -> Result<String> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| anyhow!("Failed to encode QR code: {}", e))?;
    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let site = load_site(cli.site.as_ref())?;

    match cli.command {
        Commands::Vcard { out } => {
            let card = build_contact_card_text(&site.contact);
            match out {
                Some(path) => {
                    std::fs::write(&path, &card)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", card),
            }
        }

        Commands::Save { dir } => {
            let downloader = DirectoryDownloader::new(dir.unwrap_or_else(default_download_dir));
            let file = ContactFile::from_record(&site.contact, &site.config.export);

            match save_contact(&site, &NoShareSheet, &downloader).await? {
                SaveOutcome::Downloaded => {
                    println!("Saved contact card to {}", downloader.target_path(&file).display());
                }
                SaveOutcome::Shared => println!("Contact card shared"),
            }
        }

        Commands::Mecard => {
            println!("{}", build_qr_payload_text(&site.contact));
        }

        Commands::Links { page_url } => {
            let items = qr_gallery_items(&site.contact, page_url.as_deref(), &site.config.qr);
            for item in items {
                println!("{}", item.label);
                println!("  href:  {}", item.href);
                println!("  image: {}", item.image_src);
            }
        }

        Commands::Qr { target, page_url } => {
            let target = QrTarget::from(target);
            if target == QrTarget::ThisPage && page_url.is_none() {
                return Err(anyhow!("--page-url is required for the page QR code"));
            }
            let data = target.data(&site.contact, page_url.as_deref());
            tracing::info!("Encoding {} bytes for {}", data.len(), target.label());

            println!("{}", target.label());
            println!("{}", render_qr(&data)?);
        }

        Commands::Url { view, href } => {
            let next = rewrite_href(&href, view.into());
            println!("{}", next);
            println!("view: {}", initial_view(Some(&next)));
        }
    }

    Ok(())
}
