//! matcher - Matchmaking Terminal Client
//!
//! Starts the interactive menu on the current terminal and runs until the user
//! exits or the process is interrupted.

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

use matcher::render::ui::MenuTheme;
use matcher::{Application, ClientConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("matcher")
        .version(matcher::VERSION)
        .about("Terminal client for the matcher matchmaking service")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a TOML configuration file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("player-id")
                .long("player-id")
                .value_name("ID")
                .help("Player identifier"),
        )
        .arg(
            Arg::new("room-id")
                .long("room-id")
                .value_name("ID")
                .help("Room the player starts in"),
        )
        .arg(
            Arg::new("poll-interval-ms")
                .long("poll-interval-ms")
                .value_name("MS")
                .help("How often the host re-checks for shutdown")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Draw the menu without colors")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config_path = matches.get_one::<PathBuf>("config");
    let mut config = ClientConfig::load_or_default(config_path.map(PathBuf::as_path))?;

    // Command-line values override the configuration file
    if let Some(player_id) = matches.get_one::<String>("player-id") {
        config.player_id = player_id.clone();
    }
    if let Some(room_id) = matches.get_one::<String>("room-id") {
        config.room_id = room_id.clone();
    }
    if let Some(&poll_interval_ms) = matches.get_one::<u64>("poll-interval-ms") {
        config.poll_interval_ms = poll_interval_ms;
    }

    let theme = if matches.get_flag("no-color") {
        MenuTheme::monochrome()
    } else {
        MenuTheme::default()
    };

    let app = Application::new(config, theme)?;
    app.run().await?;

    Ok(())
}
