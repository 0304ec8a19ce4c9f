//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod diff_source;
mod reporter;
mod result_sink;

pub use config_repository::JsonConfigRepository;
pub use diff_source::FileDiffSource;
pub use reporter::ConsoleReporter;
pub use result_sink::FileResultSink;
