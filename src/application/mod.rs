//! Application services orchestrating domain logic through ports.

pub mod view_point;

pub use view_point::{ViewPointReport, ViewPointService};
