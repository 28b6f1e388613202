use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

/// Message categories used by the console output helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
    Section,
    Separator,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub quiet_mode: bool,
}

fn should_skip(kind: MessageKind, prefs: &OutputPreferences) -> bool {
    prefs.quiet_mode && matches!(kind, MessageKind::Separator)
}

fn build_label(kind: MessageKind) -> (&'static str, &'static str) {
    match kind {
        MessageKind::Info => ("INFO", ""),
        MessageKind::Error => ("ERROR", "[x]"),
        MessageKind::Section | MessageKind::Separator => ("", ""),
    }
}

/// Formats a message for the console, or `None` when the preferences hide it.
pub fn render(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> Option<String> {
    if should_skip(kind, prefs) {
        return None;
    }

    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Separator => String::from("----------------------------------------"),
        _ => {
            let (label, icon) = build_label(kind);
            if icon.is_empty() {
                format!("{label}: {text}")
            } else {
                format!("{label}: {icon} {text}")
            }
        }
    };

    if prefs.screen_reader_mode {
        return Some(formatted);
    }

    if prefs.high_contrast_mode {
        return Some(match kind {
            MessageKind::Error | MessageKind::Section => formatted.bold().to_string(),
            _ => formatted,
        });
    }

    Some(match kind {
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info | MessageKind::Separator => formatted,
    })
}

/// Writes a rendered message; sections and separators get a leading blank line.
pub fn write_message(
    out: &mut impl Write,
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> io::Result<()> {
    let Some(formatted) = render(kind, message, prefs) else {
        return Ok(());
    };
    match kind {
        MessageKind::Section | MessageKind::Separator => writeln!(out, "\n{}", formatted),
        _ => writeln!(out, "{}", formatted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputPreferences {
        OutputPreferences {
            screen_reader_mode: true,
            ..OutputPreferences::default()
        }
    }

    #[test]
    fn error_carries_label_and_icon() {
        let rendered = render(MessageKind::Error, "Overdraft limit exceeded.", &plain());
        assert_eq!(
            rendered.as_deref(),
            Some("ERROR: [x] Overdraft limit exceeded.")
        );
    }

    #[test]
    fn section_is_framed() {
        let rendered = render(MessageKind::Section, "  Deposits ", &plain());
        assert_eq!(rendered.as_deref(), Some("=== Deposits ==="));
    }

    #[test]
    fn quiet_mode_drops_separators_only() {
        let prefs = OutputPreferences {
            quiet_mode: true,
            ..plain()
        };
        assert!(render(MessageKind::Separator, "", &prefs).is_none());
        assert!(render(MessageKind::Info, "still shown", &prefs).is_some());
    }

    #[test]
    fn sections_are_preceded_by_blank_line() {
        let mut out = Vec::new();
        write_message(&mut out, MessageKind::Section, "Title", &plain()).unwrap();
        write_message(&mut out, MessageKind::Info, "body", &plain()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n=== Title ===\nINFO: body\n");
    }
}
