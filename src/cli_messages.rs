//! CLI command messaging
//!
//! Consistent, colored status lines for one-shot commands like `configure`,
//! `reset` and `export`.

/// Severity of a command message, which picks its label and color.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MessageKind {
    Info,
    Warn,
    Error,
    Success,
}

impl MessageKind {
    fn label(self) -> &'static str {
        match self {
            MessageKind::Info => "INFO",
            MessageKind::Warn => "WARN",
            MessageKind::Error => "ERROR",
            MessageKind::Success => "SUCCESS",
        }
    }

    fn color(self) -> &'static str {
        match self {
            MessageKind::Info => "\x1b[1;33m",
            MessageKind::Warn => "\x1b[1;91m",
            MessageKind::Error => "\x1b[1;31m",
            MessageKind::Success => "\x1b[1;32m",
        }
    }
}

/// `[LABEL] title`, followed by a tab and the details when there are any.
pub fn format_message(kind: MessageKind, title: &str, details: &str) -> String {
    let mut line = format!("{}[{}]\x1b[0m {}", kind.color(), kind.label(), title);
    if !details.is_empty() {
        line.push_str("\t ");
        line.push_str(details);
    }
    line
}

pub fn print_message(kind: MessageKind, title: &str, details: &str) {
    let line = format_message(kind, title, details);
    match kind {
        MessageKind::Error => eprintln!("{}", line),
        _ => println!("{}", line),
    }
}

/// Macro for CLI info messages
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Info,
            $title,
            &format!($($details)*),
        )
    };
}

/// Macro for CLI warnings
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Warn,
            $title,
            &format!($($details)*),
        )
    };
}

/// Macro for CLI errors; details are optional.
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_message($crate::cli_messages::MessageKind::Error, $title, "")
    };
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Error,
            $title,
            &format!($($details)*),
        )
    };
}

/// Macro for CLI success messages
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_message(
            $crate::cli_messages::MessageKind::Success,
            $title,
            &format!($($details)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_details() {
        assert_eq!(
            format_message(MessageKind::Success, "Saved", "/tmp/config.json"),
            "\x1b[1;32m[SUCCESS]\x1b[0m Saved\t /tmp/config.json"
        );
    }

    #[test]
    fn test_format_without_details() {
        assert_eq!(
            format_message(MessageKind::Warn, "Nothing to do", ""),
            "\x1b[1;91m[WARN]\x1b[0m Nothing to do"
        );
    }
}
