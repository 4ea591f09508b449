use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;
use xproxy_config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "xproxy-config")]
#[command(about = "Decode and validate an xproxy configuration file")]
struct Args {
    /// Config file path (.json, otherwise parsed as YAML)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Directory searched for xproxy.yml / xproxy.yaml / xproxy.json
    #[arg(long, short = 'w', default_value = "/xproxy")]
    work_dir: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let env_filter = if args.verbose {
        EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::DEBUG.into())
    } else {
        EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let path = match args.config {
        Some(path) => path,
        None => ConfigLoader::find_config(&args.work_dir)?,
    };
    tracing::info!("Loading config from {:?}", path);

    let config = ConfigLoader::load_from_file(&path)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
