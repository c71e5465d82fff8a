// Host-side tests for the pure scroll/menu math.

#![allow(dead_code)]
mod nav {
    include!("../src/nav.rs");
}

use nav::*;

#[test]
fn exactly_one_section_is_active() {
    // home, about, projects, contact
    let tops = [0.0, 600.0, 1200.0, 1800.0];

    // Viewport sitting exactly at the top of "projects".
    assert_eq!(active_section(&tops, 1200.0), Some(2));
    // Part-way through it.
    assert_eq!(active_section(&tops, 1450.0), Some(2));
    // Just before it, still "about".
    assert_eq!(active_section(&tops, 1198.0), Some(1));
    // Past the last section top.
    assert_eq!(active_section(&tops, 5000.0), Some(3));
}

#[test]
fn no_section_active_above_the_first() {
    let tops = [100.0, 600.0];
    assert_eq!(active_section(&tops, 0.0), None);
    assert_eq!(active_section(&[], 500.0), None);
}

#[test]
fn subpixel_tolerance_at_section_boundaries() {
    let tops = [0.0, 600.5];
    assert_eq!(active_section(&tops, 599.8), Some(1));
    assert_eq!(active_section(&tops, 598.0), Some(0));
}

#[test]
fn skill_widths_parse_and_clamp() {
    assert_eq!(skill_width_pct(Some("85")), Some(85.0));
    assert_eq!(skill_width_pct(Some(" 70 ")), Some(70.0));
    assert_eq!(skill_width_pct(Some("150")), Some(100.0));
    assert_eq!(skill_width_pct(Some("-5")), Some(0.0));
    assert_eq!(skill_width_pct(Some("n/a")), None);
    assert_eq!(skill_width_pct(None), None);
}

#[test]
fn open_then_close_restores_initial_bar_state() {
    let initial = menu_bar_poses(false);
    let open = menu_bar_poses(true);
    assert_ne!(initial, open);

    // The middle bar disappears while open; the outer bars fold.
    assert_eq!(open[1].opacity, "0");
    assert_ne!(open[0].transform, "none");
    assert_ne!(open[2].transform, "none");

    // Closing again is exactly the initial state.
    assert_eq!(menu_bar_poses(false), initial);
    for pose in initial {
        assert_eq!(pose.transform, "none");
        assert_eq!(pose.opacity, "1");
    }
}
