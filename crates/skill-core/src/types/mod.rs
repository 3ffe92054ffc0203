//! Value types shared by every crate in the workspace.

pub mod domain;
pub mod rating;
pub mod side;

pub use domain::{Domain, DomainEdge};
pub use rating::Rating;
pub use side::Side;
