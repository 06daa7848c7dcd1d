pub mod constants;
pub mod counter;
pub mod easing;
pub mod particles;
pub mod scroll;
pub mod sections;
pub mod titles;

pub use constants::*;
pub use counter::*;
pub use easing::*;
pub use particles::*;
pub use scroll::*;
pub use sections::*;
pub use titles::*;
