//! Human-readable rendering of search results.

use std::fmt::{Display, Write};

use crate::solver::SearchStats;

/// Formats the counters of a search followed by its solution steps.
///
/// An empty path renders as `No solution`.
pub fn format_path<C: Display>(path: &[C], stats: &SearchStats) -> String {
    let mut output = String::new();
    // writing into a String cannot fail
    let _ = writeln!(output, "Total configs: {}", stats.total);
    let _ = writeln!(output, "Unique configs: {}", stats.unique);

    if path.is_empty() {
        output.push_str("No solution\n");
        return output;
    }

    for (step, state) in path.iter().enumerate() {
        let _ = writeln!(output, "Step {}: {}", step, state);
    }
    output
}

/// Formats a list of values as `[a, b, c]`.
pub fn format_list<T: Display>(values: &[T]) -> String {
    let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_path_lists_steps() {
        let stats = SearchStats { total: 17, unique: 12 };
        let output = format_path(&["AA", "AB"], &stats);
        insta::assert_snapshot!(output, @r"
        Total configs: 17
        Unique configs: 12
        Step 0: AA
        Step 1: AB
        ");
    }

    #[test]
    fn test_format_path_without_solution() {
        let stats = SearchStats { total: 9, unique: 4 };
        let output = format_path::<&str>(&[], &stats);
        assert_eq!(output, "Total configs: 9\nUnique configs: 4\nNo solution\n");
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[5, 3]), "[5, 3]");
        assert_eq!(format_list::<u32>(&[]), "[]");
    }
}
