use clap::Parser;
use std::process::ExitCode;
use tasklist::commands::Cli;
use tasklist::libs::logging::init_logging;
use tasklist::libs::messages::Message;
use tasklist::msg_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::Error(e.to_string()));
            ExitCode::FAILURE
        }
    }
}
