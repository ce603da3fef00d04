pub mod args;
pub mod helpers;
