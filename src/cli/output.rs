use colored::Colorize;
use supports_color::Stream;

/// Disables colouring when stdout cannot render it, e.g. when piped.
pub fn configure_colors() {
    if supports_color::on(Stream::Stdout).is_none() {
        colored::control::set_override(false);
    }
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}
