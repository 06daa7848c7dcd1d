pub mod pointer;
pub mod scroll;

pub use pointer::{
    wire_card_tilt, wire_floating_boxes, wire_parallax, wire_skill_ripples, wire_stat_hover,
    wire_timeline_hover,
};
pub use scroll::{wire_anchor_links, wire_scroll_tracking};
