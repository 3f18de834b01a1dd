//! Release planning on a Gantt chart.
//!
//! Each release is drawn as a solid bar for committed work followed by a
//! hatched bar for delivery uncertainty. The [`chart`] module turns a
//! project's releases into a backend-neutral [`chart::Scene`]. [`model`]
//! holds the data and its mutations, and [`io`] persists it.

pub mod chart;
pub mod io;
pub mod model;
