//! `passvault shell` — interactive session.
//!
//! Commands typed here share one `Context`, so after the master password
//! has been entered once (and "remember" accepted) it is reused for five
//! minutes.  `lock` forgets it early.

use dialoguer::Input;

use crate::cli::commands::{add, delete, edit, generate, list, passwd};
use crate::cli::output;
use crate::cli::{Cli, Context};
use crate::errors::{PassVaultError, Result};

/// One parsed shell line.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    List { show: bool },
    Add,
    Edit(usize),
    Delete(usize),
    Generate,
    Passwd,
    Lock,
    Help,
    Quit,
    Empty,
}

/// Execute the `shell` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::open(cli)?;
    if !ctx.manager.is_enrolled() {
        return Err(PassVaultError::NotEnrolled);
    }

    output::info("Type `help` for commands, `quit` to leave.");
    loop {
        let line: String = Input::new()
            .with_prompt("passvault")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                output::error(&e.to_string());
                continue;
            }
        };

        if command == ShellCommand::Quit {
            ctx.manager.lock();
            return Ok(());
        }

        // Errors inside the shell are reported and the loop continues.
        if let Err(e) = dispatch(&ctx, command) {
            output::error(&e.to_string());
        }
    }
}

fn dispatch(ctx: &Context, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::List { show } => list::run(ctx, show, true),
        ShellCommand::Add => add::run(ctx, &add::AddArgs::default(), true),
        ShellCommand::Edit(number) => edit::run(
            ctx,
            &edit::EditArgs {
                number,
                ..edit::EditArgs::default()
            },
            true,
        ),
        ShellCommand::Delete(number) => delete::run(ctx, number, false, true),
        ShellCommand::Generate => generate::run(ctx, &generate::GenerateArgs::default()),
        ShellCommand::Passwd => passwd::run(ctx),
        ShellCommand::Lock => {
            ctx.manager.lock();
            output::success("Locked.");
            Ok(())
        }
        ShellCommand::Help => {
            print_help();
            Ok(())
        }
        ShellCommand::Quit | ShellCommand::Empty => Ok(()),
    }
}

fn parse_line(line: &str) -> Result<ShellCommand> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(ShellCommand::Empty);
    };
    let rest: Vec<&str> = words.collect();

    let number = |rest: &[&str]| -> Result<usize> {
        rest.first()
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| PassVaultError::CommandFailed(format!("usage: {head} <number>")))
    };

    match head {
        "list" | "ls" => Ok(ShellCommand::List {
            show: rest.contains(&"--show"),
        }),
        "add" => Ok(ShellCommand::Add),
        "edit" => Ok(ShellCommand::Edit(number(&rest)?)),
        "delete" | "rm" => Ok(ShellCommand::Delete(number(&rest)?)),
        "generate" | "gen" => Ok(ShellCommand::Generate),
        "passwd" => Ok(ShellCommand::Passwd),
        "lock" => Ok(ShellCommand::Lock),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(PassVaultError::CommandFailed(format!(
            "unknown command '{other}' — type `help`"
        ))),
    }
}

fn print_help() {
    println!("  list [--show]    show all entries");
    println!("  add              add an entry");
    println!("  edit <number>    edit an entry");
    println!("  delete <number>  delete an entry");
    println!("  generate         print a random password");
    println!("  passwd           change the master password");
    println!("  lock             forget the remembered master password");
    println!("  quit             leave the shell");
}
