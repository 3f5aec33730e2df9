//! Console notifications.

use clipfile_abstraction::{NotificationLevel, Notifier};
use colored::Colorize;

/// Prints notifications to the terminal: info on stdout, the rest on stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Info => println!("{} {}", "✓".green(), message),
            NotificationLevel::Warning => eprintln!("{} {}", "!".yellow(), message.yellow()),
            NotificationLevel::Error => eprintln!("{} {}", "Error:".red().bold(), message),
        }
    }
}
