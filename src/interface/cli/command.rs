//! CLI 명령 파싱 모듈.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::domain::score::RunOptions;

pub const USAGE_ERROR: &str =
    "Missing required arguments. Usage: prscore <diff_file_path> <pr_number>";

#[derive(Debug, Parser)]
#[command(name = "prscore")]
#[command(about = "Score a pull-request diff with a hosted model and write a plain-text summary")]
pub struct Cli {
    /// Show effective merged config and credential availability, then exit
    #[arg(long)]
    print_config: bool,

    /// Path to the unified diff of the pull request
    diff_file: Option<PathBuf>,

    /// Pull request number
    pr_number: Option<String>,

    /// Repository name shown in failure messages
    #[arg(long, env = "GITHUB_REPOSITORY", default_value = "repo")]
    repo: String,
}

#[derive(Debug)]
pub enum CliAction {
    InspectConfig,
    Score(RunOptions),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Self::parse_action_from(std::env::args_os())
    }

    /// 인자 목록을 실행 동작으로 변환한다.
    /// help/version 출력은 clap 규칙대로 즉시 종료한다.
    /// 오류 문자열은 `error: ` 접두사까지 포함한 완성된 메시지다.
    pub fn parse_action_from<I, T>(args: I) -> Result<CliAction, String>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(err)
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                ) =>
            {
                err.exit()
            }
            Err(err) => return Err(err.to_string()),
        };

        if cli.print_config {
            return Ok(CliAction::InspectConfig);
        }

        let pr_number = cli
            .pr_number
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        match (cli.diff_file, pr_number) {
            (Some(diff_path), Some(pr_number)) => Ok(CliAction::Score(RunOptions {
                diff_path,
                pr_number,
                repo: cli.repo,
            })),
            _ => Err(format!("error: {USAGE_ERROR}")),
        }
    }
}
