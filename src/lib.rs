//! # oceans
//!
//! Processing for CTD (conductivity-temperature-depth) hydrographic data.
//!
//! Given a line of stations, the crate computes the distance of each
//! station along the transect, a sea-floor mask on a regular horizontal
//! grid, and fills the shadow zone of a section: the deep cells a shallow
//! station cannot reach, extrapolated from the lateral gradient on the deep
//! side.
//!
//! ## Key Features
//!
//! - **Geodesy**: haversine distances along a transect
//! - **Topography**: sea-floor mask from the deepest scan of each cast
//! - **Extrapolation**: gradient-decay fill of section shadow zones
//! - **Profile cleaning**: despiking, window smoothing, bin averaging and
//!   mixed-layer depth
//! - **Palettes**: oceanographic colormaps for section plots
//!
//! ## Example
//!
//! ```
//! use oceans::{build_topo_mask, cumulative_distance, TopoMaskOptions};
//!
//! let lon = [0.0, 0.0, 0.0];
//! let lat = [0.0, 1.0, 2.0];
//! let distances = cumulative_distance(&lon, &lat).unwrap();
//! assert_eq!(distances[0], 0.0);
//!
//! let options = TopoMaskOptions { dx: 50.0, ..Default::default() };
//! let mask = build_topo_mask(&[10.0, 50.0, 100.0], &lon, &lat, &options).unwrap();
//! assert_eq!(mask.xm[0], 0.0);
//! ```

pub mod colormaps;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod extrapolation;
pub mod filters;
pub mod geodesy;
pub mod interpolation;
pub mod logging;
pub mod profile;
pub mod seawater;
pub mod section;
pub mod topography;
pub mod view;

pub use config::Config;
pub use error::{OceansError, Result};
pub use extrapolation::{extrapolate_section, ExtrapolationOptions};
pub use geodesy::cumulative_distance;
pub use interpolation::InterpKind;
pub use logging::{init_tracing, log_error, log_section_stats, log_timed_operation};
pub use profile::Profile;
pub use section::{Section, Station};
pub use topography::{build_topo_mask, TopoMask, TopoMaskOptions};
pub use view::{SectionView, ViewOptions};
