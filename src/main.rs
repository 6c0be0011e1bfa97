use std::io;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tetris_stack::{init_logging, Config, Console, TetrisStack, QUEUE_CAPACITY};

fn cli() -> Command {
    Command::new("tetris-stack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tetris piece queue on a fixed-size circular buffer")
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(clap::value_parser!(u64))
                .help("Seed the piece generator for a repeatable game"),
        )
        .arg(
            Arg::new("prefill")
                .long("prefill")
                .value_parser(clap::value_parser!(usize))
                .default_value("5")
                .help("Number of pieces in the queue at startup"),
        )
        .arg(
            Arg::new("no-prefill")
                .long("no-prefill")
                .action(ArgAction::SetTrue)
                .conflicts_with("prefill")
                .help("Start with an empty queue"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .default_value("warn")
                .help("Log level: off, error, warn, info, debug or trace"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Do not print the title banner"),
        )
}

/// Maps parsed flags onto a [`Config`]. Range checks are left to `Config::validate`.
fn config_from_matches(matches: &ArgMatches) -> anyhow::Result<Config> {
    let log_level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .map(Config::parse_log_level)
        .transpose()?
        .unwrap_or(log::LevelFilter::Warn);

    let prefill_count = if matches.get_flag("no-prefill") {
        0
    } else {
        matches
            .get_one::<usize>("prefill")
            .copied()
            .unwrap_or(QUEUE_CAPACITY)
    };

    Ok(Config {
        seed: matches.get_one::<u64>("seed").copied(),
        prefill_count,
        show_banner: !matches.get_flag("quiet"),
        log_level,
    })
}

fn main() -> anyhow::Result<()> {
    let config = config_from_matches(&cli().get_matches())?;
    init_logging(config.log_level);

    let mut game = TetrisStack::with_config(config).context("failed to start the game")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let stats = console.run(&mut game).context("console loop failed")?;

    log::info!(
        "Session finished: {} played, {} inserted, {} rejected, {} invalid",
        stats.pieces_played,
        stats.pieces_inserted,
        stats.rejected_actions,
        stats.invalid_commands
    );

    Ok(())
}
