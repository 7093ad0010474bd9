//! Built-in benchmark case catalogue
//!
//! The cases match the benchmark names registered by `merodis_benchmark`.
//! Order is the run order.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// Store data type a case exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseGroup {
    /// GET/SET on plain string keys
    String,
    /// L* list commands
    List,
    /// S* set commands
    Set,
    /// Z* sorted-set commands
    SortedSet,
}

impl CaseGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseGroup::String => "string",
            CaseGroup::List => "list",
            CaseGroup::Set => "set",
            CaseGroup::SortedSet => "sorted-set",
        }
    }
}

impl fmt::Display for CaseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named benchmark case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchCase {
    pub name: &'static str,
    pub group: CaseGroup,
}

const fn case(name: &'static str, group: CaseGroup) -> BenchCase {
    BenchCase { name, group }
}

/// Default case list, in run order
pub const DEFAULT_CASES: &[BenchCase] = &[
    case("FixedGetSmall", CaseGroup::String),
    case("FixedGetLarge", CaseGroup::String),
    case("FixedSetSmall", CaseGroup::String),
    case("FixedSetLarge", CaseGroup::String),
    case("RandomGet", CaseGroup::String),
    case("RandomSet", CaseGroup::String),
    case("LIndex", CaseGroup::List),
    case("LRange", CaseGroup::List),
    case("LInsert", CaseGroup::List),
    case("LRemSingle", CaseGroup::List),
    case("LRemPair", CaseGroup::List),
    case("LRemPoints", CaseGroup::List),
    case("LRemFragments", CaseGroup::List),
    case("SAdd", CaseGroup::Set),
    case("SRem", CaseGroup::Set),
    case("SIsMember", CaseGroup::Set),
    case("ZRank", CaseGroup::SortedSet),
];

/// Names of all built-in cases, in run order
pub fn default_case_names() -> Vec<String> {
    DEFAULT_CASES.iter().map(|c| c.name.to_string()).collect()
}

/// Names of the built-in cases belonging to any of `groups`, in run order
pub fn case_names_in_groups(groups: &[CaseGroup]) -> Vec<String> {
    DEFAULT_CASES
        .iter()
        .filter(|c| groups.contains(&c.group))
        .map(|c| c.name.to_string())
        .collect()
}

/// Group of a built-in case, `None` for names outside the catalogue
pub fn group_of(name: &str) -> Option<CaseGroup> {
    DEFAULT_CASES
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.group)
}
