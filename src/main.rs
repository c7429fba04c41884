use clap::{ArgAction, Parser, Subcommand};
use kompendium::catalog::Catalog;
use kompendium::content::ContentRegistry;
use kompendium::shell::Site;
use kompendium::{config, generate, output, route};
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

/// Release builds report the crate version; anything else reports the commit.
static VERSION: LazyLock<String> = LazyLock::new(|| {
    match (env!("ON_RELEASE_TAG"), env!("GIT_HASH")) {
        ("true", _) => env!("CARGO_PKG_VERSION").to_string(),
        (_, "") => "dev@unknown".to_string(),
        (_, hash) => format!("dev@{hash}"),
    }
});

fn version_string() -> &'static str {
    VERSION.as_str()
}

#[derive(Parser)]
#[command(name = "kompendium")]
#[command(about = "Static site generator for the Matematikk 1T compendium")]
#[command(long_about = "\
Static site generator for the Matematikk 1T compendium

Renders a home page listing every chapter, one page per chapter and page
type, and a not-found page. URLs are slugs of the Norwegian names:

  /                                  home
  /tall-og-algebra/teori/            Tall og algebra – Teori
  /tall-og-algebra/ving/             Tall og algebra – Øving

Content structure (everything optional):

  content/
  ├── config.toml                    # Site config
  ├── assets/                        # Copied to output root (favicon, images)
  └── tall-og-algebra/
      ├── teori.md                   # Overrides the built-in primer
      └── eksempler.md               # ```fasit blocks become answer toggles

Routes without a Markdown file or built-in content show a placeholder.

Run 'kompendium gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// More log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the full site into the output directory
    Build,
    /// Validate config and content, list every route and its content source
    Check,
    /// List every route with its URL
    Routes {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show what a URL path resolves to
    Resolve {
        /// URL path, e.g. /tall-og-algebra/teori
        path: String,
        /// Print the rendered page instead of a summary
        #[arg(long)]
        html: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = Catalog::builtin();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            let content = ContentRegistry::load(catalog, &cli.source)?;
            let site = Site::new(&site_config, catalog, &content);

            println!("==> Generating {} → {}", cli.source.display(), cli.output.display());
            let generated = generate::generate(&site, &cli.source.join("assets"), &cli.output)?;
            output::print_build_output(catalog, &generated);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            config::load_config(&cli.source)?;
            let content = ContentRegistry::load(catalog, &cli.source)?;
            output::print_check_output(catalog, &content, &cli.source);
            println!("==> Content is valid");
        }
        Command::Routes { json } => {
            if json {
                let content = ContentRegistry::load(catalog, &cli.source)?;
                let listings = output::route_listings(catalog, &content);
                println!("{}", serde_json::to_string_pretty(&listings)?);
            } else {
                output::print_routes(catalog);
            }
        }
        Command::Resolve { path, html } => {
            if html {
                let site_config = config::load_config(&cli.source)?;
                let content = ContentRegistry::load(catalog, &cli.source)?;
                let site = Site::new(&site_config, catalog, &content);
                println!("{}", site.render_path(&path).into_string());
            } else {
                let request = route::parse_path(catalog, &path);
                output::print_resolution(&path, &request);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the tracing subscriber. Logs go to stderr so page and JSON output
/// on stdout stay clean.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();
}
