//! CLI command messaging system
//!
//! Coloured one-line messages for the one-shot commands (`list`, `add`,
//! `config`, ...). The dashboard reports through its own status line instead.

const YELLOW: &str = "\x1b[1;33m";
const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

fn print_tagged(color: &str, tag: &str, title: &str, details: &str) {
    if details.is_empty() {
        println!("{}[{}]{} {}", color, tag, RESET, title);
    } else {
        println!("{}[{}]{} {}\t {}", color, tag, RESET, title, details);
    }
}

pub fn print_info(title: &str, details: &str) {
    print_tagged(YELLOW, "INFO", title, details);
}

/// Errors go to stderr so they never mix with listed records.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}[ERROR]{} {}", RED, RESET, title);
    if let Some(details) = details {
        eprintln!("{}[ERROR]{} Details: {}", RED, RESET, details);
    }
}

pub fn print_success(title: &str, details: &str) {
    print_tagged(GREEN, "SUCCESS", title, details);
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
