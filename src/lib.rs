//! `hydroplot` turns polar hydrodynamics grid outputs into gnuplot plots
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]

// Re-exports of the component crates.
#[doc(inline)]
pub use hydroplot_grid as grid;

#[doc(inline)]
pub use hydroplot_par as par;

#[doc(inline)]
pub use hydroplot_script as script;

#[doc(inline)]
pub use hydroplot_utils as utils;
