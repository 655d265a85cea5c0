//! Builders for the five resume blocks.

use crate::config::{
    CorePillars, FlagshipProject, Header, Job, ProfessionalExperience, Summary, Theme,
};
use crate::document::{Alignment, Block, Borders, Cell, Paragraph, Run, Table};

use super::style::*;

fn spacer() -> Block {
    Paragraph::new().into()
}

/// Centered name, then the contact line with any links appended
pub fn header(header: &Header, theme: &Theme) -> Vec<Block> {
    let name = Paragraph::with_run(
        Run::new(&header.name)
            .bold()
            .size(NAME_SIZE)
            .color(theme.primary_color)
            .font(&theme.font_header),
    )
    .aligned(Alignment::Center);

    let contact_text = [&header.location, &header.phone, &header.email]
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let mut contact = Paragraph::with_run(Run::new(contact_text).size(CONTACT_SIZE))
        .aligned(Alignment::Center);

    for (i, link) in header.links.iter().enumerate() {
        if link.text.trim().is_empty() {
            tracing::warn!("Header link {} has an empty label", i);
        }
        contact = contact.push(Run::new(SEPARATOR).size(CONTACT_SIZE));

        let mut run = Run::new(&link.text)
            .size(CONTACT_SIZE)
            .color(theme.primary_color)
            .underline();
        if let Some(url) = &link.url {
            run = run.link(url);
        }
        contact = contact.push(run);
    }

    vec![name.into(), contact.into(), spacer()]
}

/// Shaded one-cell box with an accent bar on the left
pub fn summary(summary: &Summary, theme: &Theme) -> Vec<Block> {
    let body = Paragraph::with_run(Run::new(&summary.title).bold())
        .push(Run::new(format!(" {}\n\n", summary.subtitle)))
        .push(Run::new(&summary.text));

    let cell = Cell::new(body)
        .bordered(Borders::none().with_left(accent_bar(theme)))
        .shaded(SUMMARY_FILL);

    vec![Table::row(vec![cell]).into(), spacer()]
}

fn pillar_cell(header: &str, items: &[String]) -> Cell {
    let mut paragraph = Paragraph::with_run(Run::new(header).bold());
    if !items.is_empty() {
        paragraph = paragraph
            .push(Run::new("\n"))
            .push(Run::new(bullet_lines(items)));
    }
    Cell::new(paragraph)
}

/// Heading plus one table column per pillar column, padded to
/// `PILLAR_COLUMNS` with empty cells
pub fn core_pillars(pillars: &CorePillars, theme: &Theme) -> Vec<Block> {
    let mut blocks = vec![section_heading(&pillars.title, theme).into()];

    if pillars.columns.is_empty() {
        tracing::warn!("core_pillars.columns is empty; rendering heading only");
    } else {
        let mut cells: Vec<Cell> = pillars
            .columns
            .iter()
            .map(|column| pillar_cell(&column.header, &column.items))
            .collect();
        if cells.len() < PILLAR_COLUMNS {
            cells.resize_with(PILLAR_COLUMNS, Cell::default);
        }
        blocks.push(Table::row(cells).into());
    }

    blocks.push(spacer());
    blocks
}

/// Heading plus a framed box: title, highlights, tag line
pub fn flagship_project(project: &FlagshipProject, theme: &Theme) -> Vec<Block> {
    let mut body = Paragraph::with_run(Run::new(&project.project_title).bold());

    if !project.highlights.is_empty() {
        body = body.push(Run::new(format!("\n\n{}", bullet_lines(&project.highlights))));
    }
    if !project.tags.is_empty() {
        body = body
            .push(Run::new("\n\n"))
            .push(Run::new(tag_line(&project.tags)).bold());
    }

    let cell = Cell::new(body).bordered(Borders::all(frame()).with_left(accent_bar(theme)));

    vec![
        section_heading(&project.section_title, theme).into(),
        Table::row(vec![cell]).into(),
        spacer(),
    ]
}

/// One job: company/role beside right-aligned dates, then its highlights
pub fn experience_entry(job: &Job, theme: &Theme) -> Vec<Block> {
    let left = Paragraph::with_run(Run::new(&job.company).bold().color(theme.primary_color))
        .push(Run::new(format!("\n{}", job.role)));
    let right = Paragraph::with_run(Run::new(&job.dates)).aligned(Alignment::Right);

    let table = Table::row(vec![Cell::new(left), Cell::new(right)])
        .with_widths(vec![COMPANY_COLUMN_WIDTH, DATES_COLUMN_WIDTH]);

    std::iter::once(Block::from(table))
        .chain(job.highlights.iter().map(|highlight| {
            Block::from(Paragraph::with_run(Run::new(bullet(highlight))).indented(HIGHLIGHT_INDENT))
        }))
        .collect()
}

pub fn professional_experience(experience: &ProfessionalExperience, theme: &Theme) -> Vec<Block> {
    let mut blocks = vec![section_heading(&experience.title, theme).into()];
    for job in &experience.jobs {
        blocks.extend(experience_entry(job, theme));
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Link, PillarColumn};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_header(links: Vec<Link>) -> Header {
        Header {
            name: "Ada Lovelace".into(),
            location: "London".into(),
            phone: "555".into(),
            email: "ada@example.com".into(),
            links,
        }
    }

    #[test]
    fn test_header_name_and_contact() {
        let theme = Theme::default();
        let blocks = header(&sample_header(Vec::new()), &theme);
        assert_eq!(blocks.len(), 3);

        let name = blocks[0].as_paragraph().unwrap();
        assert_eq!(name.alignment, Alignment::Center);
        let run = &name.runs[0];
        assert!(run.style.bold);
        assert_eq!(run.style.size, Some(NAME_SIZE));
        assert_eq!(run.style.font.as_deref(), Some("Calibri"));
        assert_eq!(run.style.color, Some(theme.primary_color));

        let contact = blocks[1].as_paragraph().unwrap();
        assert_eq!(contact.text(), "London • 555 • ada@example.com");
        assert!(blocks[2].as_paragraph().unwrap().is_empty());
    }

    #[test]
    fn test_header_links() {
        let theme = Theme::default();
        let links = vec![
            Link {
                text: "GitHub".into(),
                url: Some("https://github.com/ada".into()),
            },
            Link {
                text: "Blog".into(),
                url: None,
            },
        ];
        let blocks = header(&sample_header(links), &theme);
        let contact = blocks[1].as_paragraph().unwrap();
        assert_eq!(
            contact.text(),
            "London • 555 • ada@example.com • GitHub • Blog"
        );

        let github = contact.runs.iter().find(|r| r.text == "GitHub").unwrap();
        assert!(github.style.underline);
        assert_eq!(github.style.color, Some(theme.primary_color));
        assert_eq!(github.link.as_deref(), Some("https://github.com/ada"));

        let blog = contact.runs.iter().find(|r| r.text == "Blog").unwrap();
        assert!(blog.style.underline);
        assert_eq!(blog.link, None);
    }

    #[test]
    fn test_summary_box() {
        let theme = Theme::default();
        let s = Summary {
            title: "Summary".into(),
            subtitle: "Engineer".into(),
            text: "Builds things.".into(),
        };
        let blocks = summary(&s, &theme);
        let table = blocks[0].as_table().unwrap();
        let cell = table.cell(0, 0).unwrap();
        assert_eq!(cell.text(), "Summary Engineer\n\nBuilds things.");
        assert!(cell.paragraphs[0].runs[0].style.bold);
        assert_eq!(cell.shading, Some(SUMMARY_FILL));
        assert_eq!(cell.borders.left, Some(accent_bar(&theme)));
        assert_eq!(cell.borders.top, None);
    }

    #[test]
    fn test_pillars_two_columns_three_items() {
        let theme = Theme::default();
        let pillars = CorePillars {
            title: "Core Pillars".into(),
            columns: vec![
                PillarColumn {
                    header: "Left".into(),
                    items: strings(&["a1", "a2", "a3"]),
                },
                PillarColumn {
                    header: "Right".into(),
                    items: strings(&["b1", "b2", "b3"]),
                },
            ],
        };
        let blocks = core_pillars(&pillars, &theme);
        assert_eq!(blocks.len(), 3);

        let table = blocks[1].as_table().unwrap();
        assert_eq!(table.column_count(), 2);

        let text = table.cell(0, 1).unwrap().text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["Right", "• b1", "• b2", "• b3"]);
        assert!(table.cell(0, 0).unwrap().paragraphs[0].runs[0].style.bold);
    }

    #[test]
    fn test_pillars_without_columns() {
        let pillars = CorePillars {
            title: "Core".into(),
            columns: Vec::new(),
        };
        let blocks = core_pillars(&pillars, &Theme::default());
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.as_table().is_none()));
    }

    #[test]
    fn test_single_pillar_column_padded() {
        let pillars = CorePillars {
            title: "Core".into(),
            columns: vec![PillarColumn {
                header: "Only".into(),
                items: strings(&["x"]),
            }],
        };
        let blocks = core_pillars(&pillars, &Theme::default());
        let table = blocks[1].as_table().unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.cell(0, 0).unwrap().text(), "Only\n• x");
        assert!(table.cell(0, 1).unwrap().paragraphs.is_empty());
    }

    #[test]
    fn test_flagship_box_and_tags() {
        let theme = Theme::default();
        let project = FlagshipProject {
            section_title: "Flagship".into(),
            project_title: "Engine".into(),
            highlights: strings(&["fast", "small"]),
            tags: strings(&["Go", "Rust"]),
        };
        let blocks = flagship_project(&project, &theme);
        let cell = blocks[1].as_table().unwrap().cell(0, 0).unwrap();
        assert_eq!(cell.text(), "Engine\n\n• fast\n• small\n\n[Go | Rust]");

        let tags = cell.paragraphs[0].runs.last().unwrap();
        assert_eq!(tags.text, "[Go | Rust]");
        assert!(tags.style.bold);

        assert_eq!(cell.borders.left, Some(accent_bar(&theme)));
        assert_eq!(cell.borders.top, Some(frame()));
        assert_eq!(cell.borders.right, Some(frame()));
        assert_eq!(cell.borders.bottom, Some(frame()));
    }

    #[test]
    fn test_flagship_without_tags_has_no_tag_run() {
        let project = FlagshipProject {
            section_title: "Flagship".into(),
            project_title: "Engine".into(),
            highlights: strings(&["fast"]),
            tags: Vec::new(),
        };
        let blocks = flagship_project(&project, &Theme::default());
        let cell = blocks[1].as_table().unwrap().cell(0, 0).unwrap();
        assert_eq!(cell.text(), "Engine\n\n• fast");
    }

    #[test]
    fn test_experience_entry_layout() {
        let theme = Theme::default();
        let job = Job {
            company: "Acme".into(),
            role: "Engineer".into(),
            dates: "2020 - 2024".into(),
            highlights: strings(&["A", "B"]),
        };
        let blocks = experience_entry(&job, &theme);
        assert_eq!(blocks.len(), 3);

        let table = blocks[0].as_table().unwrap();
        assert_eq!(
            table.column_widths,
            Some(vec![COMPANY_COLUMN_WIDTH, DATES_COLUMN_WIDTH])
        );
        let left = table.cell(0, 0).unwrap();
        assert_eq!(left.text(), "Acme\nEngineer");
        let company = &left.paragraphs[0].runs[0];
        assert!(company.style.bold);
        assert_eq!(company.style.color, Some(theme.primary_color));

        let right = &table.cell(0, 1).unwrap().paragraphs[0];
        assert_eq!(right.alignment, Alignment::Right);
        assert_eq!(right.text(), "2020 - 2024");

        assert_eq!(blocks[1].as_paragraph().unwrap().text(), "• A");
        assert_eq!(blocks[2].as_paragraph().unwrap().text(), "• B");
    }

    #[test]
    fn test_experience_entry_without_highlights() {
        let job = Job {
            company: "Acme".into(),
            role: "Engineer".into(),
            dates: "2020".into(),
            highlights: Vec::new(),
        };
        let blocks = experience_entry(&job, &Theme::default());
        assert_eq!(blocks.len(), 1);
    }
}
