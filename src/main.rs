use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use reqwest::Url;

use concertprep::{config, error, info, server, utils, warning};

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
    /// Start the local server
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    pub addr: Option<String>,

    /// Open the login page for ARTIST/CONCERT/YEAR in the browser
    #[clap(long, value_name = "ARTIST/CONCERT/YEAR")]
    pub open: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(opt) => serve(opt).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

async fn serve(opt: ServeOptions) {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    let addr = opt.addr.unwrap_or_else(config::server_addr);

    let login_url = match opt.open.as_deref().map(|info| login_url(&addr, info)) {
        Some(Ok(url)) => Some(url),
        Some(Err(e)) => error!("{}", e),
        None => None,
    };

    let listener = match server::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("{}", e),
    };
    let handle = tokio::spawn(server::serve(listener, settings));

    if let Some(url) = login_url {
        info!("Opening {}", url);
        if webbrowser::open(&url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            )
        }
    }

    match handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Server stopped: {}", e),
        Err(e) => error!("Server task failed: {}", e),
    }
}

fn login_url(addr: &str, info: &str) -> Result<String, String> {
    let query = utils::parse_concert_info(Some(info)).map_err(str::to_string)?;
    let url = Url::parse_with_params(
        &format!("http://{}/", addr),
        &[("info", utils::format_concert_info(&query))],
    )
    .map_err(|e| format!("Invalid server address {}: {}", addr, e))?;
    Ok(url.to_string())
}
