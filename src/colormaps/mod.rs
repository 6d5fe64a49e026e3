//! Colour palettes for section plots.
//!
//! Oceanographic palettes (bathymetry, AVHRR, ODV and friends), each also
//! available reversed under `<name>_r`.

pub mod catalog;
pub mod colormap;
pub mod generated;
mod tables;

pub use catalog::{catalog, colormap_names, get_colormap};
pub use colormap::{lerp_color, Colormap, Palette};
