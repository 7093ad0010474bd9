//! Result file naming for benchmark cases
//!
//! Case names are CamelCase identifiers such as `FixedGetSmall` or `ZRank`.
//! Each maps to one result file: `fixed_get_small.json`, `z_rank.json`.
//!
//! Word boundaries are detected on the original casing:
//! - an upper-case run followed by an upper-case + lower-case pair splits
//!   before the pair (`SIsMember` -> `S_IsMember`)
//! - a lower-case letter or digit followed by an upper-case letter splits
//!   between them (`IsMember` -> `Is_Member`)
//! - `-` becomes `_`
//!
//! The whole name is then lower-cased, which also lower-cases the two
//! leading characters.

/// Extension appended to every result file
pub const RESULT_EXTENSION: &str = "json";

/// Convert a CamelCase identifier into lower snake_case
///
/// # Example
/// ```
/// use merodis_bench::naming::underscore;
///
/// assert_eq!(underscore("LRemFragments"), "l_rem_fragments");
/// assert_eq!(underscore("ZRank"), "z_rank");
/// ```
pub fn underscore(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());

            // `ABc`: the run `A` ends before `Bc`
            let acronym_end = prev.is_ascii_uppercase() && next_is_lower;
            // `aB` / `1B`
            let word_start = prev.is_ascii_lowercase() || prev.is_ascii_digit();

            if acronym_end || word_start {
                out.push('_');
            }
        }

        if c == '-' {
            out.push('_');
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Result filename for a benchmark case, e.g. `RandomGet` -> `random_get.json`
pub fn result_filename(case: &str) -> String {
    format!("{}.{}", underscore(case), RESULT_EXTENSION)
}
