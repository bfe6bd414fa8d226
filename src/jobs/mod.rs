pub mod relay;
pub mod synthetic;
