use anyhow::Result;
use clap::{Arg, Command};
use file_filter_copy::{AppConfig, ServerConfig};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("File Filter Copy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Web form that copies files filtered by extension and timestamp range")
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Address to listen on")
                .default_value("0.0.0.0"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .help("Port to listen on")
                .default_value("8000"),
        )
        .arg(
            Arg::new("static-dir")
                .long("static-dir")
                .value_name("DIR")
                .help("Directory holding index.html and other static files")
                .default_value("static"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)")
                .default_value("info"),
        )
        .get_matches();

    let config = create_app_config(&matches)?;

    // .env may carry RUST_LOG, so load it before the subscriber reads the environment
    if dotenvy::dotenv().is_err() {
        eprintln!("No .env file found, using system environment variables");
    }

    initialize_logging(&config.log_level)?;

    info!("Starting File Filter Copy");
    info!("Configuration: {:#?}", config);

    file_filter_copy::server::run(&config.server).await
}

/// Build application configuration from CLI arguments
fn create_app_config(matches: &clap::ArgMatches) -> Result<AppConfig> {
    let arg = |name: &str| -> Result<String> {
        matches
            .get_one::<String>(name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Missing value for --{}", name))
    };

    let port: u16 = arg("port")?
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid port value"))?;

    Ok(AppConfig {
        server: ServerConfig {
            host: arg("host")?,
            port,
            static_dir: PathBuf::from(arg("static-dir")?),
        },
        log_level: arg("log-level")?,
    })
}

/// Initialize structured logging with tracing
fn initialize_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(level.into())
        .add_directive("hyper=warn".parse()?)
        .add_directive("tower=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}
