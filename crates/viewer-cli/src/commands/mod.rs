pub mod fetch;
pub mod render;
pub mod serve;
