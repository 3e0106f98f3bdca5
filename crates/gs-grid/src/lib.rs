//! `gs-grid`: street lattice, snapping, and route planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`axis`]    | `Axis`: one dimension of the lattice                        |
//! | [`grid`]    | `StreetGrid`: bounds + two axes, point snapping             |
//! | [`router`]  | `Router` trait, `Route`, `ManhattanRouter`, L-shape path    |
//! | [`preview`] | `PreviewProvider` trait for display-only route previews     |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! # Lattice model
//!
//! The street network is an idealised uniform lattice: north–south streets
//! at every `lng_step` degrees and east–west streets at every `lat_step`
//! degrees inside the bounding region.  Every crossing is an
//! *intersection*, and intersections are the only places a vehicle may rest
//! or be routed through.  There are no blocked cells.

pub mod axis;
pub mod error;
pub mod grid;
pub mod preview;
pub mod router;


pub use axis::Axis;
pub use error::{GridError, GridResult};
pub use grid::StreetGrid;
pub use preview::{LShapePreview, PreviewError, PreviewProvider, PreviewRoute};
pub use router::{ManhattanRouter, Route, Router, l_shape_path};
