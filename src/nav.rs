/// Index of the section the viewport currently sits in, given each section's
/// page-offset top (header already subtracted) and the scroll offset. `None`
/// while above the first section. A 1px tolerance absorbs subpixel layout.
pub fn active_section(tops: &[f64], scroll_y: f64) -> Option<usize> {
    let mut active = None;
    for (i, top) in tops.iter().enumerate() {
        if scroll_y + 1.0 >= *top {
            active = Some(i);
        }
    }
    active
}

/// Parse a skill bar's `data-skill` attribute into a fill percentage.
pub fn skill_width_pct(attr: Option<&str>) -> Option<f64> {
    attr.and_then(|a| a.trim().parse::<f64>().ok())
        .map(|pct| pct.clamp(0.0, 100.0))
}

/// Transform/opacity pair for one menu-indicator bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuBarPose {
    pub transform: &'static str,
    pub opacity: &'static str,
}

/// Poses for the three menu bars. The closed poses are the bars' initial
/// state, so open followed by close restores it exactly.
pub fn menu_bar_poses(open: bool) -> [MenuBarPose; 3] {
    if open {
        [
            MenuBarPose {
                transform: "rotate(45deg) translate(5px, 5px)",
                opacity: "1",
            },
            MenuBarPose {
                transform: "none",
                opacity: "0",
            },
            MenuBarPose {
                transform: "rotate(-45deg) translate(7px, -6px)",
                opacity: "1",
            },
        ]
    } else {
        [MenuBarPose {
            transform: "none",
            opacity: "1",
        }; 3]
    }
}
