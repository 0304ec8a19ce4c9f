//! diff 파일 입력 포트 구현 어댑터.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::application::ports::DiffSource;
use crate::domain::error::InputError;

/// 로컬 파일에서 diff를 읽는 어댑터.
pub struct FileDiffSource;

impl DiffSource for FileDiffSource {
    fn load(&self, path: &Path) -> Result<String, InputError> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(raw.trim().to_string()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(InputError::DiffNotFound(path.to_path_buf()))
            }
            Err(err) => Err(InputError::Unreadable {
                path: path.to_path_buf(),
                message: err.to_string(),
            }),
        }
    }
}
