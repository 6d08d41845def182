use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = commands::handle_commands(&cli) {
        services::output::print_error(cli.json, &err);
        std::process::exit(1);
    }
}
