mod assets;
pub use assets::*;

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// The text engine: font-size fitting and placement planning
pub mod layout;

mod measure;
pub use measure::*;

mod pipeline;
pub use pipeline::*;

mod rect;
pub use rect::*;

mod render;
pub use render::*;

mod style;
pub use style::*;

mod units;
pub use units::*;
