// Web-layer wiring constants: the selectors, class names and style strings
// that form the contract with the page's markup and stylesheet.

// Selectors
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAV_LINK_SELECTOR: &str = ".nav-menu a";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const CARD_SELECTOR: &str = ".service-card, .project-card, .cert-card";
pub const STAT_SELECTOR: &str = ".about-stats .stat";
pub const TIMELINE_SELECTOR: &str = ".timeline-item";
pub const SKILL_TAG_SELECTOR: &str = ".skill-tag";
pub const FLOATING_BOX_SELECTOR: &str = ".floating-box";
pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const SCROLL_EFFECT_SELECTOR: &str =
    ".service-card, .timeline-item, .skill-category, .project-card, .stat, .about-text p";
pub const REVEAL_SELECTOR: &str = ".service-card, .stat, .skill-category";
pub const TITLE_ELEMENT_ID: &str = "dynamic-title";
pub const PARTICLE_CONTAINER_ID: &str = "particles";

// Class names the stylesheet reacts to
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const SCROLLING_CLASS: &str = "scrolling";
pub const PULSE_CLASS: &str = "pulse";
pub const GLITCH_CLASS: &str = "glitch";

// Hover poses
pub const CARD_LIFT_TRANSFORM: &str = "translateY(-15px) scale(1.02) rotateX(5deg)";
pub const CARD_GLOW_SHADOW: &str = "0 25px 80px rgba(0, 191, 255, 0.4), 0 0 0 2px rgba(100, 255, 218, 0.6), inset 0 1px 0 rgba(255, 255, 255, 0.3)";
pub const STAT_HOVER_TRANSFORM: &str =
    "translateY(-10px) scale(1.05) rotateX(15deg) rotateY(10deg) translateZ(15px)";
pub const TIMELINE_HOVER_TRANSFORM: &str =
    "translateX(10px) scale(1.02) rotateY(8deg) translateZ(10px)";
pub const FLOATING_BOX_HOVER_TRANSFORM: &str =
    "scale(1.2) rotateX(45deg) rotateY(45deg) translateZ(20px)";
pub const TITLE_JITTER_TRANSFORM: &str = "translateY(-2px) skewX(3deg)";

// Floating boxes get a random base rotation in [-range/2, range/2)
pub const FLOATING_BOX_TILT_RANGE_DEG: f64 = 60.0;

// One-shot effect lifetimes
pub const RIPPLE_LIFETIME_MS: i32 = 600;
pub const SCROLL_END_MS: i32 = 150;

// Visibility-driven reveals
pub const CARD_STAGGER_SECS: f64 = 0.2;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_SECS: f64 = 0.1;
pub const SERVICE_CARD_DELAY: &str = "0.2s";
