//! CLI 인터페이스 모듈 묶음.

pub mod command;

pub use command::{Cli, CliAction};
pub use crate::interface::composition::AppComposition;
