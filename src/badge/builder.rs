//! Badge markup builder.

use std::fmt::Write;

use super::format::xml_escape;
use super::style::ColorTier;

const WIDTH: u32 = 98;
const HEIGHT: u32 = 20;
const LABEL_WIDTH: u32 = 61;
const VALUE_WIDTH: u32 = WIDTH - LABEL_WIDTH;
const LABEL_COLOR: &str = "#555";
// Text coordinates are in the 10x space of `transform="scale(.1)"`.
const LABEL_TEXT_X: u32 = 315;
const VALUE_TEXT_X: u32 = 785;
const LABEL_TEXT_LENGTH: u32 = (LABEL_WIDTH - 10) * 10;
const VALUE_TEXT_LENGTH: u32 = (VALUE_WIDTH - 10) * 10;

/// Default text of the left segment.
pub const DEFAULT_LABEL: &str = "coverage";

/// Builder for a coverage badge.
#[derive(Debug, Clone)]
pub struct BadgeBuilder {
    label: String,
    value: String,
    color: ColorTier,
}

impl BadgeBuilder {
    /// `value` is the percentage text without the `%` sign.
    #[must_use]
    pub fn new(value: impl Into<String>, color: ColorTier) -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            value: value.into(),
            color,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Render the badge. Text is drawn twice per segment, once offset as a shadow.
    #[must_use]
    pub fn build(&self) -> String {
        let label = xml_escape(&self.label);
        let value = format!("{}%", xml_escape(&self.value));
        let color = self.color.hex();

        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}">"#
        );
        output.push_str(
            r##"  <linearGradient id="b" x2="0" y2="100%">
    <stop offset="0" stop-color="#bbb" stop-opacity=".1"/>
    <stop offset="1" stop-opacity=".1"/>
  </linearGradient>
"##,
        );
        let _ = writeln!(output, r#"  <mask id="a">"#);
        let _ = writeln!(
            output,
            r##"    <rect width="{WIDTH}" height="{HEIGHT}" rx="3" fill="#fff"/>"##
        );
        let _ = writeln!(output, "  </mask>");

        let _ = writeln!(output, r#"  <g mask="url(#a)">"#);
        let _ = writeln!(
            output,
            r#"    <path fill="{LABEL_COLOR}" d="M0 0h{LABEL_WIDTH}v{HEIGHT}H0z"/>"#
        );
        let _ = writeln!(
            output,
            r#"    <path fill="{color}" d="M{LABEL_WIDTH} 0h{VALUE_WIDTH}v{HEIGHT}H{LABEL_WIDTH}z"/>"#
        );
        let _ = writeln!(
            output,
            r#"    <path fill="url(#b)" d="M0 0h{WIDTH}v{HEIGHT}H0z"/>"#
        );
        let _ = writeln!(output, "  </g>");

        let _ = writeln!(
            output,
            r##"  <g fill="#fff" text-anchor="middle" font-family="Verdana,Geneva,DejaVu Sans,sans-serif" font-size="110">"##
        );
        write_text_pair(&mut output, LABEL_TEXT_X, LABEL_TEXT_LENGTH, &label);
        write_text_pair(&mut output, VALUE_TEXT_X, VALUE_TEXT_LENGTH, &value);
        let _ = writeln!(output, "  </g>");

        output.push_str("</svg>\n");
        output
    }
}

fn write_text_pair(output: &mut String, x: u32, text_length: u32, text: &str) {
    let _ = writeln!(
        output,
        r##"    <text x="{x}" y="150" fill="#010101" fill-opacity=".3" transform="scale(.1)" textLength="{text_length}">{text}</text>"##
    );
    let _ = writeln!(
        output,
        r#"    <text x="{x}" y="140" transform="scale(.1)" textLength="{text_length}">{text}</text>"#
    );
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
