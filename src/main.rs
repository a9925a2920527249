use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use poprank::{cli, config, error, server, session::Session};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check the Spotify client credentials
    Auth,

    /// Search artists by name
    Search(SearchOptions),

    /// Compare the global popularity of two artists
    Compare(CompareOptions),

    /// Popularity of an artist in a region
    Country(CountryOptions),

    /// Top artists of a genre
    Genre(GenreOptions),

    /// Top artists of a market
    Market(MarketOptions),

    /// Top videos of a genre on YouTube
    Videos(VideosOptions),

    /// Most popular videos of a region on YouTube
    Chart(ChartOptions),

    /// Serve the operations as a JSON API
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Artist name to search for
    query: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompareOptions {
    first: String,
    second: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CountryOptions {
    /// Artist name
    artist: String,

    /// Region code (ISO 3166-1 alpha-2), defaults to DEFAULT_REGION
    #[clap(long)]
    region: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct GenreOptions {
    genre: String,

    /// Market code used for the playlist search
    #[clap(long)]
    market: Option<String>,

    /// Number of artists to show
    #[clap(long)]
    top: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct MarketOptions {
    /// Market code, defaults to DEFAULT_REGION
    market: Option<String>,

    /// Playlist search term, defaults to "top 50 <market>"
    #[clap(long)]
    search: Option<String>,

    #[clap(long)]
    top: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct VideosOptions {
    genre: String,

    #[clap(long)]
    region: Option<String>,

    #[clap(long)]
    top: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct ChartOptions {
    #[clap(long)]
    region: Option<String>,

    /// Video category id, defaults to 10 (Music)
    #[clap(long)]
    category: Option<String>,

    #[clap(long)]
    top: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let settings = match config::Settings::from_env() {
        Ok(s) => s,
        Err(e) => error!("{}", e),
    };
    let mut session = match Session::new(settings) {
        Ok(s) => s,
        Err(e) => error!("{}", e),
    };

    match cli.command {
        Command::Auth => cli::auth(&mut session).await,
        Command::Search(opt) => cli::search_artists(&mut session, opt.query).await,
        Command::Compare(opt) => cli::compare_artists(&mut session, opt.first, opt.second).await,
        Command::Country(opt) => {
            cli::country_popularity(&mut session, opt.artist, opt.region).await
        }
        Command::Genre(opt) => {
            cli::genre_artists(&mut session, opt.genre, opt.market, opt.top).await
        }
        Command::Market(opt) => {
            cli::market_artists(&mut session, opt.market, opt.search, opt.top).await
        }
        Command::Videos(opt) => {
            cli::top_videos(&mut session, opt.genre, opt.region, opt.top).await
        }
        Command::Chart(opt) => {
            cli::video_chart(&mut session, opt.region, opt.category, opt.top).await
        }
        Command::Serve => {
            if let Err(e) = server::start_api_server(Arc::new(Mutex::new(session))).await {
                error!("Server stopped. Err: {}", e);
            }
        }
        Command::Completions(_) => {}
    }
}
