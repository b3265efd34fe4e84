//! Styled console output helpers for the command surface.

use console::style;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    pub fn bullet(&self, message: &str) {
        println!("{} {}", style("-").dim(), message);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
