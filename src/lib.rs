pub mod arguments;
pub mod clock;
pub mod manifest;
pub mod nightly;
pub mod patcher;
