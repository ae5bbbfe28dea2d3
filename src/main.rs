use clap::Parser;
use tracing_subscriber::EnvFilter;

use passvault::cli::commands::{add::AddArgs, edit::EditArgs, generate::GenerateArgs};
use passvault::cli::{Cli, Commands};

fn main() {
    // Logs go to stderr and are off unless PASSVAULT_LOG asks for them.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PASSVAULT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Add {
            ref service,
            ref username,
            ref password,
            generate,
        } => passvault::cli::commands::add::execute(
            &cli,
            &AddArgs {
                service: service.as_deref(),
                username: username.as_deref(),
                password: password.as_deref(),
                generate,
            },
        ),
        Commands::List { show } => passvault::cli::commands::list::execute(&cli, show),
        Commands::Edit {
            number,
            ref service,
            ref username,
            ref password,
            generate,
        } => passvault::cli::commands::edit::execute(
            &cli,
            &EditArgs {
                number,
                service: service.as_deref(),
                username: username.as_deref(),
                password: password.as_deref(),
                generate,
            },
        ),
        Commands::Delete { number, force } => {
            passvault::cli::commands::delete::execute(&cli, number, force)
        }
        Commands::Passwd => passvault::cli::commands::passwd::execute(&cli),
        Commands::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
        } => passvault::cli::commands::generate::execute(
            &cli,
            &GenerateArgs {
                length,
                no_uppercase,
                no_lowercase,
                no_digits,
                no_symbols,
            },
        ),
        Commands::Status => passvault::cli::commands::status::execute(&cli),
        Commands::Shell => passvault::cli::commands::shell::execute(&cli),
        Commands::Completions { shell } => passvault::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
