//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::CredentialRecord;

/// What the password column shows when masking is on.
const MASK: &str = "******";

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the entries as a numbered table (#, Service, Username, Password).
pub fn print_entries_table(entries: &[CredentialRecord], mask_passwords: bool) {
    if entries.is_empty() {
        info("No entries in this vault yet.");
        tip("Run `passvault add <service> <username>` to add your first entry.");
        return;
    }

    println!("{}", entries_table(entries, mask_passwords));
}

fn entries_table(entries: &[CredentialRecord], mask_passwords: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Service", "Username", "Password"]);

    for (i, e) in entries.iter().enumerate() {
        let password = if mask_passwords {
            MASK.to_string()
        } else {
            e.password.clone()
        };
        table.add_row(vec![
            (i + 1).to_string(),
            e.service.clone(),
            e.username.clone(),
            password,
        ]);
    }

    table
}
