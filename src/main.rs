use chanview::cli::{self, CliCommand};
use chanview::config::Config;
use chanview::logging::init_logging;
use chanview::runner;
use chanview::terminal::setup_panic_hook;

use color_eyre::Result;

fn main() -> Result<()> {
    let command = match cli::parse_args(std::env::args()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    };

    match command {
        CliCommand::Version => {
            println!("{}", cli::version_text());
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", cli::usage_text());
            Ok(())
        }
        CliCommand::RunTui => {
            color_eyre::install()?;
            let config = Config::from_env();
            init_logging(config.log_path.as_deref());
            setup_panic_hook();
            runner::run_tui(&config)
        }
        query => {
            let config = Config::from_env();
            init_logging(config.log_path.as_deref());
            if let Err(err) = cli::run(&config, &query) {
                tracing::error!("print mode failed: {}", err);
                eprintln!("{}", err.user_message());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
