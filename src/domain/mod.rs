//! Domain services: the intake pipeline and project management.

pub mod calendar;
pub mod intake;
pub mod parser;
pub mod projects;

pub use intake::TaskIntakeService;
pub use parser::TaskRequestParser;
pub use projects::ProjectService;
