//! Domain layer
//! 채점 규칙(루브릭/점수/응답 검증/오류 분류)을 외부 의존성 없이 표현한다.

pub mod error;
pub mod policy;
pub mod rubric;
pub mod score;
