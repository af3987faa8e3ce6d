use clap::{ArgGroup, Parser};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

use npm_package_info::PackageInfo;
use npm_package_info::config::DEFAULT_REGISTRY;

/// Environment variable holding the log filter directives
const LOG_ENV: &str = "NPM_PACKAGE_INFO_LOG";

#[derive(Parser)]
#[command(name = "npm-package-info")]
#[command(version, about = "Query npm package metadata")]
#[command(group(ArgGroup::new("query").args(["dist_tag", "pkg_version", "major", "majors"])))]
struct Cli {
    /// Package name, e.g. "lodash" or "@types/node"
    package: String,

    /// Registry origin the package name is resolved against
    #[arg(long, default_value = DEFAULT_REGISTRY)]
    registry: String,

    /// Print the manifest a dist-tag points at
    #[arg(long)]
    dist_tag: Option<String>,

    /// Print the manifest of a specific version
    #[arg(long = "pkg-version", value_name = "VERSION")]
    pkg_version: Option<String>,

    /// Print the highest version of a major line
    #[arg(long)]
    major: Option<u64>,

    /// Print the highest version of every major line
    #[arg(long)]
    majors: bool,
}

fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}

fn select(cli: &Cli, package: &PackageInfo) -> anyhow::Result<Value> {
    let selected = if let Some(dist_tag) = &cli.dist_tag {
        package.info_by_dist_tag(dist_tag)?.clone()
    } else if let Some(version) = &cli.pkg_version {
        package.info_by_version(version)?.clone()
    } else if let Some(major) = cli.major {
        json!(package.latest_version_by_major(major))
    } else if cli.majors {
        serde_json::to_value(package.latest_versions_by_major())?
    } else {
        serde_json::to_value(package)?
    };

    Ok(selected)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging();

    let package = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(PackageInfo::from_remote(&cli.package, &cli.registry))?;

    let output = select(&cli, &package)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
