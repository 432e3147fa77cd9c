//! Tests for badge markup.

use super::*;

#[test]
fn renders_fixed_size_svg() {
    let svg = BadgeBuilder::new("85.5", ColorTier::Green).build();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="98" height="20""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn value_appears_twice_and_color_once() {
    let svg = BadgeBuilder::new("85.5", ColorTier::Green).build();

    assert_eq!(svg.matches("85.5%").count(), 2);
    assert_eq!(svg.matches(r##"fill="#97CA00""##).count(), 1);
}

#[test]
fn label_appears_twice() {
    let svg = BadgeBuilder::new("50.0", ColorTier::Orange).build();

    assert_eq!(svg.matches(">coverage</text>").count(), 2);
}

#[test]
fn custom_label_is_escaped() {
    let svg = BadgeBuilder::new("50.0", ColorTier::Orange)
        .with_label("tests & <docs>")
        .build();

    assert!(svg.contains("tests &amp; &lt;docs&gt;"));
    assert!(!svg.contains("<docs>"));
}

#[test]
fn segments_split_at_label_width() {
    let svg = BadgeBuilder::new("90.0", ColorTier::BrightGreen).build();

    assert!(svg.contains(r##"<path fill="#555" d="M0 0h61v20H0z"/>"##));
    assert!(svg.contains(r##"<path fill="#4c1" d="M61 0h37v20H61z"/>"##));
}

#[test]
fn rendering_is_deterministic() {
    let a = BadgeBuilder::new("72.0", ColorTier::YellowGreen).build();
    let b = BadgeBuilder::new("72.0", ColorTier::YellowGreen).build();
    assert_eq!(a, b);
}
