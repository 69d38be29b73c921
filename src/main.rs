//! star-mirror: clones all the starred repos of a GitHub user
//! Every starred repository is mirrored to `{base-dir}/{owner}/` with `git clone --mirror`.

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};
use std::path::PathBuf;

use star_mirror::commands::mirror::handle_mirror_command;
use star_mirror::core::{FileConfig, MirrorArgs, MirrorConfig};

const DESCRIPTION: &str = "A tool that clones all the starred repos of the given GitHub user.";
const VERSION: &str = concat!(
    "v",
    env!("CARGO_PKG_VERSION"),
    " by ",
    env!("CARGO_PKG_AUTHORS")
);

fn build_cli() -> ClapCommand {
    ClapCommand::new("star-mirror")
        .version(VERSION)
        .about(DESCRIPTION)
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .value_name("PATH")
                .help("Path of the base directory under which the repos will be cloned (a subfolder per owner is created)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("username")
                .long("username")
                .value_name("NAME")
                .help("The GitHub user whose stars will be cloned"),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .value_name("TOKEN")
                .help("GitHub API token. Use this when running into API rate limits [env: GITHUB_TOKEN]"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Config file to read defaults from (default: ~/.config/star-mirror/config.toml)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show debug logging")
                .action(ArgAction::SetTrue),
        )
}

/// Initializes logging; `RUST_LOG` wins over the default level
fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Warn);
        }
    }
    if verbose {
        builder.filter_module("star_mirror", log::LevelFilter::Debug);
    }
    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    let args = MirrorArgs {
        base_dir: matches.get_one::<PathBuf>("base-dir").cloned(),
        username: matches.get_one::<String>("username").cloned(),
        token: matches.get_one::<String>("token").cloned(),
    };
    let file = FileConfig::load_optional(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let config = MirrorConfig::resolve(args, file)?;

    let status = handle_mirror_command(&config).await?;
    std::process::exit(status.exit_code());
}
