//! Formatting functions for UI output.

use console::style;
use std::path::Path;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print a resolved path on its own line.
pub fn display_path(path: &Path) {
    println!("{}", path.display());
}

/// Build the aligned `label  path` listing shown by the `layout` command.
pub fn format_layout(entries: &[(&str, &Path)]) -> String {
    let width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|(label, path)| format!("  {:<width$}  {}", label, path.display(), width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display the repository layout with a bold heading.
pub fn display_layout(entries: &[(&str, &Path)]) {
    println!("{}", style("Repository layout:").bold());
    println!("{}", format_layout(entries));
}
