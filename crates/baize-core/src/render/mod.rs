pub mod canvas;
pub mod draw;
pub mod glyphs;
pub mod style;
