//! WordprocessingML body serialization.

use std::fmt::Write as _;

use crate::document::{Alignment, Border, Borders, Cell, Paragraph, Run, Table};

use super::parts::Relationships;

/// Usable width of a Letter page with one-inch margins, in twips
pub const TEXT_WIDTH: u32 = 9360;

/// Escape text for element content and attribute values.
/// Control characters that XML 1.0 forbids are dropped.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}

pub fn write_paragraph(out: &mut String, paragraph: &Paragraph, rels: &mut Relationships) {
    out.push_str("<w:p>");

    let jc = match paragraph.alignment {
        Alignment::Left => None,
        Alignment::Center => Some("center"),
        Alignment::Right => Some("right"),
    };
    if paragraph.indent.is_some() || jc.is_some() {
        out.push_str("<w:pPr>");
        if let Some(indent) = paragraph.indent {
            let _ = write!(out, r#"<w:ind w:left="{}"/>"#, indent);
        }
        if let Some(jc) = jc {
            let _ = write!(out, r#"<w:jc w:val="{}"/>"#, jc);
        }
        out.push_str("</w:pPr>");
    }

    for run in &paragraph.runs {
        match &run.link {
            Some(url) => {
                let id = rels.add_hyperlink(url);
                let _ = write!(out, r#"<w:hyperlink r:id="{}" w:history="1">"#, id);
                write_run(out, run);
                out.push_str("</w:hyperlink>");
            }
            None => write_run(out, run),
        }
    }

    out.push_str("</w:p>");
}

fn write_run(out: &mut String, run: &Run) {
    if run.text.is_empty() {
        return;
    }
    out.push_str("<w:r>");

    let style = &run.style;
    let has_props = style.bold
        || style.underline
        || style.color.is_some()
        || style.font.is_some()
        || style.size.is_some();
    if has_props {
        out.push_str("<w:rPr>");
        if let Some(font) = &style.font {
            let font = escape(font);
            let _ = write!(
                out,
                r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
                font
            );
        }
        if style.bold {
            out.push_str("<w:b/>");
        }
        if let Some(color) = style.color {
            let _ = write!(out, r#"<w:color w:val="{}"/>"#, color.to_hex());
        }
        if let Some(size) = style.size {
            let half_points = u32::from(size) * 2;
            let _ = write!(
                out,
                r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#,
                half_points
            );
        }
        if style.underline {
            out.push_str(r#"<w:u w:val="single"/>"#);
        }
        out.push_str("</w:rPr>");
    }

    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<w:br/>");
        }
        if !line.is_empty() {
            let _ = write!(out, r#"<w:t xml:space="preserve">{}</w:t>"#, escape(line));
        }
    }

    out.push_str("</w:r>");
}

fn column_widths(table: &Table) -> Vec<u32> {
    let columns = table.column_count().max(1);
    match &table.column_widths {
        Some(widths) if widths.len() == columns => widths.clone(),
        _ => vec![TEXT_WIDTH / columns as u32; columns],
    }
}

pub fn write_table(out: &mut String, table: &Table, rels: &mut Relationships) {
    let widths = column_widths(table);

    out.push_str("<w:tbl>");
    let layout = if table.column_widths.is_some() {
        r#"<w:tblLayout w:type="fixed"/>"#
    } else {
        ""
    };
    let _ = write!(
        out,
        r#"<w:tblPr><w:tblW w:w="0" w:type="auto"/>{}<w:tblLook w:val="04A0"/></w:tblPr>"#,
        layout
    );

    out.push_str("<w:tblGrid>");
    for width in &widths {
        let _ = write!(out, r#"<w:gridCol w:w="{}"/>"#, width);
    }
    out.push_str("</w:tblGrid>");

    for row in &table.rows {
        out.push_str("<w:tr>");
        for (i, cell) in row.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(TEXT_WIDTH);
            write_cell(out, cell, width, rels);
        }
        out.push_str("</w:tr>");
    }

    out.push_str("</w:tbl>");
}

fn write_cell(out: &mut String, cell: &Cell, width: u32, rels: &mut Relationships) {
    out.push_str("<w:tc><w:tcPr>");
    let _ = write!(out, r#"<w:tcW w:w="{}" w:type="dxa"/>"#, width);
    write_borders(out, &cell.borders);
    if let Some(fill) = cell.shading {
        let _ = write!(
            out,
            r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
            fill.to_hex()
        );
    }
    out.push_str("</w:tcPr>");

    // A cell must end with a paragraph
    if cell.paragraphs.is_empty() {
        out.push_str("<w:p/>");
    }
    for paragraph in &cell.paragraphs {
        write_paragraph(out, paragraph, rels);
    }

    out.push_str("</w:tc>");
}

fn write_borders(out: &mut String, borders: &Borders) {
    if borders.is_empty() {
        return;
    }
    out.push_str("<w:tcBorders>");
    let edges = [
        ("top", borders.top),
        ("left", borders.left),
        ("bottom", borders.bottom),
        ("right", borders.right),
    ];
    for (edge, border) in edges {
        if let Some(Border { size, color }) = border {
            let _ = write!(
                out,
                r#"<w:{} w:val="single" w:sz="{}" w:space="0" w:color="{}"/>"#,
                edge,
                size,
                color.to_hex()
            );
        }
    }
    out.push_str("</w:tcBorders>");
}
