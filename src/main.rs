use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use akshun::{config, error, params, warning, workflow};

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
    /// IP address or US/CA zip code
    #[clap(short = 'l', long)]
    location: Option<String>,

    /// Range in miles
    #[clap(short = 'r', long, default_value_t = 12)]
    range: u32,

    /// From date (natural language, e.g. "tomorrow")
    #[clap(short = 'f', long)]
    from: Option<String>,

    /// Period in days
    #[clap(short = 'p', long, default_value_t = 7)]
    period: u32,

    // Unknown trailing arguments are tolerated and ignored.
    #[clap(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file: {}", e);
    }

    let cli = Cli::parse();

    let search = match params::resolve(cli.location, cli.range, cli.from, cli.period).await {
        Ok(search) => search,
        Err(e) => error!("{}", e),
    };

    if let Err(e) = workflow::run(search).await {
        error!("{}", e);
    }
}
