//! Tests for color tier selection.

use super::*;

#[test]
fn tier_boundaries_are_inclusive() {
    assert_eq!(ColorTier::for_percentage(90.0), ColorTier::BrightGreen);
    assert_eq!(ColorTier::for_percentage(89.9), ColorTier::Green);
    assert_eq!(ColorTier::for_percentage(80.0), ColorTier::Green);
    assert_eq!(ColorTier::for_percentage(79.9), ColorTier::YellowGreen);
    assert_eq!(ColorTier::for_percentage(70.0), ColorTier::YellowGreen);
    assert_eq!(ColorTier::for_percentage(60.0), ColorTier::Yellow);
    assert_eq!(ColorTier::for_percentage(59.9), ColorTier::Orange);
    assert_eq!(ColorTier::for_percentage(50.0), ColorTier::Orange);
    assert_eq!(ColorTier::for_percentage(49.9), ColorTier::Red);
}

#[test]
fn extremes() {
    assert_eq!(ColorTier::for_percentage(100.0), ColorTier::BrightGreen);
    assert_eq!(ColorTier::for_percentage(0.0), ColorTier::Red);
}

#[test]
fn hex_values() {
    assert_eq!(ColorTier::BrightGreen.hex(), "#4c1");
    assert_eq!(ColorTier::Green.hex(), "#97CA00");
    assert_eq!(ColorTier::Red.hex(), "#e05d44");
}

#[test]
fn display_names() {
    assert_eq!(ColorTier::YellowGreen.to_string(), "yellowgreen");
    assert_eq!(format!("{}", ColorTier::Orange), "orange");
}
