//! Tuning-star selection for guided telescopes.
//!
//! Loads a catalog of acquisition/guide star pairs, converts each pair to the
//! observer's horizontal frame at the current local sidereal time, keeps the
//! pairs high enough to use, and resolves an operator's pick back to the pair's
//! guiding metadata.

pub mod angle;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod lst;
pub mod parser;
pub mod plot;
pub mod selection;
pub mod session;
pub mod site;
pub mod transform;
pub mod visibility;

pub use angle::Angle;
pub use catalog::StarPairRecord;
pub use error::{Error, Result};
pub use site::ObserverContext;
pub use transform::HorizontalPosition;
pub use visibility::{VisibilityFilter, VisibleEntry};
