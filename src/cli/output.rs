//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for html/json data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// One preview line: indentation, bold name, dimmed url, optional video marker.
pub fn tree_line(indent: usize, name: &str, url: Option<&str>, video: Option<&str>) {
    let mut line = format!("{}{}", " ".repeat(indent), name.bold());
    if let Some(url) = url {
        line.push_str(&format!("  {}", url.dimmed()));
    }
    if let Some(video) = video {
        line.push_str(&format!("  {} {}", "(Video)".magenta(), video.dimmed()));
    }
    println!("{}", line);
}
