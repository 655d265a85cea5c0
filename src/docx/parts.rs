//! Fixed package parts and the document relationship table.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::document::DocumentProperties;

use super::xml::escape;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const RELS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_STYLES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_HYPERLINK: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Relationships of `word/document.xml`. `rId1` is always the styles part.
#[derive(Debug, Default)]
pub struct Relationships {
    hyperlinks: Vec<String>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an external hyperlink and return its relationship id.
    /// The same target reuses its id.
    pub fn add_hyperlink(&mut self, url: &str) -> String {
        let index = match self.hyperlinks.iter().position(|u| u == url) {
            Some(i) => i,
            None => {
                self.hyperlinks.push(url.to_string());
                self.hyperlinks.len() - 1
            }
        };
        format!("rId{}", index + 2)
    }

    pub fn hyperlink_count(&self) -> usize {
        self.hyperlinks.len()
    }

    pub fn to_xml(&self) -> String {
        let mut out = format!(r#"{}<Relationships xmlns="{}">"#, XML_DECL, RELS_NS);
        out.push_str(&format!(
            r#"<Relationship Id="rId1" Type="{}" Target="styles.xml"/>"#,
            REL_STYLES
        ));
        for (i, url) in self.hyperlinks.iter().enumerate() {
            out.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="{}" Target="{}" TargetMode="External"/>"#,
                i + 2,
                REL_HYPERLINK,
                escape(url)
            ));
        }
        out.push_str("</Relationships>");
        out
    }
}

pub fn content_types() -> String {
    format!(
        concat!(
            "{}",
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
            r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
            r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
            r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
            "</Types>"
        ),
        XML_DECL
    )
}

pub fn package_rels() -> String {
    format!(
        concat!(
            "{}",
            r#"<Relationships xmlns="{}">"#,
            r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
            r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
            r#"<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>"#,
            "</Relationships>"
        ),
        XML_DECL, RELS_NS
    )
}

/// Wrap serialized body content into `word/document.xml`
pub fn document(body: &str) -> String {
    format!(
        concat!(
            "{}",
            r#"<w:document xmlns:w="{}" xmlns:r="{}"><w:body>"#,
            "{}",
            r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#,
            r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>"#,
            "</w:sectPr></w:body></w:document>"
        ),
        XML_DECL, W_NS, R_NS, body
    )
}

/// Document defaults: Calibri 11pt, no paragraph spacing beyond a small gap
pub fn styles() -> String {
    format!(
        concat!(
            "{}",
            r#"<w:styles xmlns:w="{}">"#,
            "<w:docDefaults><w:rPrDefault><w:rPr>",
            r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/>"#,
            r#"<w:sz w:val="22"/><w:szCs w:val="22"/><w:lang w:val="en-US"/>"#,
            "</w:rPr></w:rPrDefault><w:pPrDefault><w:pPr>",
            r#"<w:spacing w:after="120" w:line="259" w:lineRule="auto"/>"#,
            "</w:pPr></w:pPrDefault></w:docDefaults>",
            r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
            r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/>"#,
            r#"<w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar><w:top w:w="0" w:type="dxa"/>"#,
            r#"<w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/>"#,
            "</w:tblCellMar></w:tblPr></w:style>",
            "</w:styles>"
        ),
        XML_DECL, W_NS
    )
}

pub fn core_properties(properties: &DocumentProperties, created: DateTime<Utc>) -> String {
    let stamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut out = format!(
        concat!(
            "{}",
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
        ),
        XML_DECL
    );
    if let Some(title) = &properties.title {
        out.push_str(&format!("<dc:title>{}</dc:title>", escape(title)));
    }
    if let Some(creator) = &properties.creator {
        out.push_str(&format!("<dc:creator>{}</dc:creator>", escape(creator)));
    }
    out.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{0}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{0}</dcterms:modified>"#,
        stamp
    ));
    out.push_str("</cp:coreProperties>");
    out
}

pub fn app_properties() -> String {
    format!(
        concat!(
            "{}",
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#,
            "<Application>resumegen/{}</Application>",
            "</Properties>"
        ),
        XML_DECL,
        crate::VERSION
    )
}
