//! Matroska tag documents applied with `mkvpropedit --tags global:<file>`.

use std::fmt::Write as _;

/// Target type value for the "EPISODE / CHAPTER / PART" level.
pub const TARGET_TYPE_PART: u32 = 30;

/// The tags written to every episode: studio, part number and total parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDocument {
    pub artist: String,
    pub part_number: i64,
    pub total_parts: i64,
    pub target_type_value: u32,
}

impl TagDocument {
    pub fn new(artist: impl Into<String>, part_number: i64, total_parts: i64) -> Self {
        Self {
            artist: artist.into(),
            part_number,
            total_parts,
            target_type_value: TARGET_TYPE_PART,
        }
    }

    /// The `(name, value)` pairs emitted as `<Simple>` elements, in order.
    pub fn simple_tags(&self) -> [(&'static str, String); 3] {
        [
            ("ARTIST", self.artist.clone()),
            ("PART_NUMBER", self.part_number.to_string()),
            ("TOTAL_PARTS", self.total_parts.to_string()),
        ]
    }

    /// Render the XML document understood by mkvpropedit.
    pub fn render(&self) -> String {
        let mut xml = String::from("<Tags>\n  <Tag>\n    <Targets>\n");
        let _ = writeln!(
            xml,
            "      <TargetTypeValue>{}</TargetTypeValue>",
            self.target_type_value
        );
        xml.push_str("    </Targets>\n");
        for (name, value) in self.simple_tags() {
            let _ = writeln!(
                xml,
                "    <Simple>\n      <Name>{name}</Name>\n      <String>{}</String>\n    </Simple>",
                escape_xml(&value)
            );
        }
        xml.push_str("  </Tag>\n</Tags>\n");
        xml
    }
}

/// Escape text content for inclusion in an XML element.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
