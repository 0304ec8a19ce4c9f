//! 채점 항목(점수 필드)과 항목별 루브릭 템플릿.

/// 모델 응답에 반드시 포함되어야 하는 점수 필드.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    Readability,
    Robustness,
    Vulnerability,
    Efficiency,
}

impl ScoreField {
    /// 프롬프트/결과 출력 순서.
    pub const ALL: [ScoreField; 4] = [
        Self::Readability,
        Self::Robustness,
        Self::Vulnerability,
        Self::Efficiency,
    ];

    /// 응답 JSON 키.
    pub fn key(self) -> &'static str {
        match self {
            Self::Readability => "readability_score",
            Self::Robustness => "robustness_score",
            Self::Vulnerability => "vulnerability_score",
            Self::Efficiency => "efficiency_score",
        }
    }

    /// 결과 텍스트에 표시할 라벨.
    pub fn label(self) -> &'static str {
        match self {
            Self::Readability => "Readability Score",
            Self::Robustness => "Robustness Score",
            Self::Vulnerability => "Vulnerability Score",
            Self::Efficiency => "Efficiency Score",
        }
    }

    pub fn rubric(self) -> &'static Rubric {
        match self {
            Self::Readability => &READABILITY,
            Self::Robustness => &ROBUSTNESS,
            Self::Vulnerability => &VULNERABILITY,
            Self::Efficiency => &EFFICIENCY,
        }
    }
}

/// 설명 텍스트가 담기는 응답 키.
pub const OUTPUT_KEY: &str = "output";

/// 응답 검증 시 확인하는 전체 키 목록(정규 순서).
pub const REQUIRED_KEYS: [&str; 5] = [
    "readability_score",
    "robustness_score",
    "vulnerability_score",
    "efficiency_score",
    OUTPUT_KEY,
];

/// 단일 채점 항목의 루브릭.
/// `criteria`는 1(Excellent), 0(Moderate), -1(Poor) 순서다.
#[derive(Debug)]
pub struct Rubric {
    pub field: ScoreField,
    pub focus: &'static str,
    pub checkboxes: &'static [&'static str],
    pub criteria: [&'static str; 3],
}

pub static READABILITY: Rubric = Rubric {
    field: ScoreField::Readability,
    focus: "Readability, Maintainability, and Clarity",
    checkboxes: &[
        "Clear Naming Conventions (Function and variable names are meaningful, self-explanatory and easy to understand.)",
        "Documentation (Code includes meaningful inline comments explaining logic and purpose.)",
        "Formatting & Styling (Code follows consistent indentation and spacing.)",
        "Maintainability (Code is easy to extend or modify.)",
        "Code Length (Logic is broken down into simpler parts.)",
    ],
    criteria: [
        "Code meets all readability, maintainability, and clarity standards. Naming is clear, documentation is informative, formatting is consistent, code structure is easy to modify, and functions are not excessively long.",
        "Code is largely readable and maintainable but has a scope for improvement.",
        "Code is highly unreadable.",
    ],
};

pub static ROBUSTNESS: Rubric = Rubric {
    field: ScoreField::Robustness,
    focus: "Robustness and Error handling",
    checkboxes: &[
        "Error Finding (No syntax, runtime and logical errors in the code.)",
        "Error Handling (Code handles exceptions and error results properly where applicable.)",
        "Edge Cases (Correctly handles edge cases like extreme, unusual, or unexpected inputs.)",
        "Input Validation (Code checks for invalid inputs.)",
        "No Infinite Loops (Loops have a proper termination condition to avoid endless execution.)",
    ],
    criteria: [
        "No errors found and follows all the checkboxes.",
        "No errors found and does not follow all the checkboxes.",
        "A lot of errors found and does not follow all the checkboxes.",
    ],
};

pub static VULNERABILITY: Rubric = Rubric {
    field: ScoreField::Vulnerability,
    focus: "Security and Vulnerability",
    checkboxes: &[
        "No Security Threats (Code does not have injection flaws like SQL injection, code injection, command injection, XSS and other injections, buffer overflows, insecure data storage, improper input validation, race conditions, logic flaws, authorization issues, information leakage, denial-of-service vulnerabilities, unpatched software, misconfigurations, or hardcoded credentials.)",
        "No Authentication & Authorization issues",
        "No Hard Coded Secrets (There are no hardcoded credentials, API keys, or sensitive information.)",
        "Secure Dependencies (There are no outdated or insecure third-party libraries.)",
        "Proper Session Management (Sessions expire correctly and tokens are handled securely.)",
    ],
    criteria: [
        "No security or vulnerability issues and follows all the checkboxes.",
        "A few security or vulnerability issues and mostly follows the checkboxes.",
        "A lot of security and vulnerability issues and does not follow the checkboxes.",
    ],
};

pub static EFFICIENCY: Rubric = Rubric {
    field: ScoreField::Efficiency,
    focus: "performance and efficiency",
    checkboxes: &[
        "Improved Time Complexity (Code runs more efficiently than before.)",
        "Improved Space Complexity (Code uses less memory than before.)",
        "No Redundant Computation (No unnecessary or unused loops, recalculations, or duplicate operations, methods, and variables.)",
    ],
    criteria: [
        "The code has improved either time complexity or space complexity and there are no unnecessary computations.",
        "The code has not improved time or space complexity and slightly follows the checkboxes.",
        "The code worsens the time or space complexity and does not follow any of the checkboxes.",
    ],
};

const SCALE: [(i8, &str); 3] = [(1, "Excellent"), (0, "Moderate"), (-1, "Poor")];

impl Rubric {
    /// 번호가 붙은 프롬프트 섹션으로 렌더링한다.
    pub fn render(&self, index: usize) -> String {
        let key = self.field.key();
        let mut out = String::new();
        out.push_str(&format!(
            "{}. Analyze and give an overall score for the updated code based on {}.\n\n",
            index, self.focus
        ));
        out.push_str("The return format should be in the below json format:\n");
        out.push_str(&format!(
            "{{\n    \"{}\": \"<score>\",\n    \"{}\": \"<text explanation for the score>\"\n}}\n\n",
            key, OUTPUT_KEY
        ));
        out.push_str(
            "Be careful while analyzing the code. Make sure to identify all the code changes and double-check the answer. Use the checkboxes and scoring criteria below while assigning the score.\n\n",
        );

        out.push_str("Checkboxes:\n");
        for (i, checkbox) in self.checkboxes.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, checkbox));
        }

        out.push_str("\nScoring Criteria:\n");
        for ((score, grade), description) in SCALE.iter().zip(self.criteria.iter()) {
            out.push_str(&format!("{key}: {score} ({grade}) {description}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_keys_follow_field_order() {
        let keys: Vec<&str> = ScoreField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(&REQUIRED_KEYS[..4], keys.as_slice());
        assert_eq!(REQUIRED_KEYS[4], "output");
    }

    #[test]
    fn rubric_lookup_matches_field() {
        for field in ScoreField::ALL {
            assert_eq!(field.rubric().field, field);
        }
    }

    #[test]
    fn render_lists_three_point_scale() {
        let section = ROBUSTNESS.render(2);
        assert!(section.starts_with("2. Analyze"));
        assert!(section.contains("robustness_score: 1 (Excellent)"));
        assert!(section.contains("robustness_score: 0 (Moderate)"));
        assert!(section.contains("robustness_score: -1 (Poor)"));
        assert!(section.contains("5. No Infinite Loops"));
    }
}
