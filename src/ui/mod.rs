//! CLI output helpers: colored headings and status lines, degrading to
//! plain text when stdout is not a terminal.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Print a bold section heading.
pub fn heading(text: &str) {
    if is_terminal() {
        println!("{}", text.bold().underline());
    } else {
        println!("{}", text);
    }
}

/// Print a labeled value line.
pub fn field(label: &str, value: &str) {
    if is_terminal() {
        println!("{} {}", format!("{}:", label).cyan(), value);
    } else {
        println!("{}: {}", label, value);
    }
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "✗".red().bold(), message);
    } else {
        eprintln!("error: {}", message);
    }
}

/// Print a block of generated summary text under a heading.
pub fn summary_block(title: &str, body: &str) {
    heading(title);
    println!("{}\n", body.trim());
}
