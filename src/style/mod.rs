//! Style resolution: colors, fills, lines, transforms and the text
//! property cascade.

pub mod align;
pub mod cascade;
pub mod color;
pub mod fill;
pub mod line;
pub mod theme;
pub mod xfrm;

pub use cascade::{cascade_attr, cascade_child, TextScope};
pub use color::{find_color, resolve_color, ColorFilter, Rgba};
pub use fill::{Fill, Gradient, GradientKind, GradientStop, Paint};
pub use line::LineStyle;
pub use theme::Theme;
pub use xfrm::{GroupFrame, Xfrm};
