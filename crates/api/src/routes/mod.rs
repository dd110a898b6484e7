pub mod fallback;
pub mod greeting;
