use super::constants::{NAVBAR_SCROLLED_AT_PX, SECTION_LOOKAHEAD_PX};

/// Vertical extent of one `section[id]`, snapshotted per tracker tick.
#[derive(Clone, Debug)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section whose range contains `scroll_y`, if any.
///
/// Sections are evaluated in document order with unconditional overwrite,
/// so the last matching section wins when ranges overlap. A section counts
/// as active from `top - SECTION_LOOKAHEAD_PX` through the same point plus
/// its height.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        let top = section.top - SECTION_LOOKAHEAD_PX;
        if scroll_y >= top && scroll_y < top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Whether the navbar should carry its compact "scrolled" styling.
#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AT_PX
}
