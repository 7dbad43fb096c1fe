pub mod png;
pub mod session;
pub mod spec;
pub mod surface;
