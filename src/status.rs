//! Done/pending view of the configured cases, used by `--list`

use crate::cases::{self, CaseGroup};
use crate::config::RunnerConfig;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStatus {
    pub case: String,
    /// `None` for cases outside the built-in catalogue
    pub group: Option<CaseGroup>,
    pub result_path: PathBuf,
    /// A result file exists, so a run would skip this case
    pub done: bool,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let group = self.group.map_or("-", CaseGroup::as_str);
        let state = if self.done { "done" } else { "pending" };
        write!(
            f,
            "{:<16} {:<10} {:<8} {}",
            self.case,
            group,
            state,
            self.result_path.display()
        )
    }
}

/// Status of every configured case, in run order
pub fn case_statuses(config: &RunnerConfig) -> Vec<CaseStatus> {
    config
        .cases
        .iter()
        .map(|case| {
            let result_path = config.result_path(case);
            CaseStatus {
                case: case.clone(),
                group: cases::group_of(case),
                done: result_path.is_file(),
                result_path,
            }
        })
        .collect()
}
