//! Fixed styling constants and the small helpers shared by every section.

use crate::color::Rgb;
use crate::config::Theme;
use crate::document::{Border, Paragraph, Run};

pub const NAME_SIZE: u16 = 24;
pub const CONTACT_SIZE: u16 = 10;

/// Separator between contact fields and between link labels
pub const SEPARATOR: &str = " • ";

/// Prefix of every bulleted line
pub const BULLET: &str = "• ";

/// Summary box background
pub const SUMMARY_FILL: Rgb = Rgb::new(0xF8, 0xF9, 0xFA);

/// Thin frame around the flagship project box
pub const FRAME_COLOR: Rgb = Rgb::new(0xCC, 0xCC, 0xCC);
pub const FRAME_BORDER_SIZE: u8 = 6;

/// Left edge standing in for a vertical accent bar
pub const ACCENT_BORDER_SIZE: u8 = 24;

/// Minimum column count of the core pillars table
pub const PILLAR_COLUMNS: usize = 2;

/// Experience table columns: company/role, then dates (5.0in / 1.5in)
pub const COMPANY_COLUMN_WIDTH: u32 = 7200;
pub const DATES_COLUMN_WIDTH: u32 = 2160;

/// Left indent of experience highlight lines (0.25in)
pub const HIGHLIGHT_INDENT: u32 = 360;

/// Bold, underlined, primary-colored section title
pub fn section_heading(title: &str, theme: &Theme) -> Paragraph {
    Paragraph::with_run(
        Run::new(title)
            .bold()
            .underline()
            .color(theme.primary_color),
    )
}

pub fn accent_bar(theme: &Theme) -> Border {
    Border::new(ACCENT_BORDER_SIZE, theme.accent_color)
}

pub fn frame() -> Border {
    Border::new(FRAME_BORDER_SIZE, FRAME_COLOR)
}

pub fn bullet(item: &str) -> String {
    format!("{}{}", BULLET, item)
}

/// One bulleted line per item, newline-joined, order kept
pub fn bullet_lines(items: &[String]) -> String {
    items
        .iter()
        .map(|item| bullet(item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `[A | B | C]`
pub fn tag_line(tags: &[String]) -> String {
    format!("[{}]", tags.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_heading_style() {
        let theme = Theme::default();
        let heading = section_heading("Experience", &theme);
        let run = &heading.runs[0];
        assert_eq!(run.text, "Experience");
        assert!(run.style.bold);
        assert!(run.style.underline);
        assert_eq!(run.style.color, Some(theme.primary_color));
    }

    #[test]
    fn test_bullet_lines_keep_order() {
        let items = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(bullet_lines(&items), "• b\n• a\n• b");
        assert_eq!(bullet_lines(&[]), "");
    }

    #[test]
    fn test_tag_line() {
        assert_eq!(tag_line(&["Go".into(), "Rust".into()]), "[Go | Rust]");
        assert_eq!(tag_line(&["Solo".into()]), "[Solo]");
    }

    #[test]
    fn test_accent_heavier_than_frame() {
        assert!(accent_bar(&Theme::default()).size > frame().size);
    }
}
