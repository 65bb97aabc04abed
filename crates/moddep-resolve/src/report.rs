//! Deterministic rendering of the resolution outcome.

use std::io::{self, Write};

use itertools::Itertools;

use crate::resolve::Resolution;

/// Writes the report: unresolved-symbol warnings to `diagnostics` first,
/// then one dependency line per analyzed artifact to `output`.
///
/// Warning lines have the shape
/// `WARNING: Unresolved symbol 'name' in ['a', 'b']` with the importing
/// artifacts sorted; dependency lines have the shape `path: dep dep ...`
/// with artifacts sorted lexicographically by path and each right-hand side
/// sorted and deduplicated. An artifact without dependencies produces a
/// line with an empty right-hand side. Everything is sorted, so repeated
/// runs over the same input are byte-identical.
pub fn write_report(
    resolution: &Resolution,
    output: &mut dyn Write,
    diagnostics: &mut dyn Write,
) -> io::Result<()> {
    for symbol in resolution.unresolved.keys().sorted() {
        let importers = resolution.unresolved[symbol]
            .iter()
            .sorted()
            .map(|artifact| format!("'{artifact}'"))
            .join(", ");
        writeln!(
            diagnostics,
            "WARNING: Unresolved symbol '{symbol}' in [{importers}]"
        )?;
    }

    for artifact in resolution.dependencies.keys().sorted() {
        let dependencies =
            resolution.dependencies[artifact].iter().sorted().join(" ");
        writeln!(output, "{artifact}: {dependencies}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    fn resolution(
        dependencies: &[(&str, &[&str])],
        unresolved: &[(&str, &[&str])],
    ) -> Resolution {
        let to_set = |items: &[&str]| -> HashSet<String> {
            items.iter().map(|s| s.to_string()).collect()
        };
        Resolution {
            dependencies: dependencies
                .iter()
                .map(|(k, v)| (k.to_string(), to_set(v)))
                .collect::<HashMap<_, _>>(),
            unresolved: unresolved
                .iter()
                .map(|(k, v)| (k.to_string(), to_set(v)))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn render(resolution: &Resolution) -> (String, String) {
        let mut output = Vec::new();
        let mut diagnostics = Vec::new();
        write_report(resolution, &mut output, &mut diagnostics)
            .expect("writing to a Vec cannot fail");
        (
            String::from_utf8(output).expect("utf-8 output"),
            String::from_utf8(diagnostics).expect("utf-8 diagnostics"),
        )
    }

    #[test]
    fn test_dependency_lines_sorted_by_artifact_path() {
        let (output, _) = render(&resolution(
            &[("c", &["a"]), ("a", &[]), ("b", &["a"])],
            &[],
        ));

        assert_eq!(output, "a: \nb: a\nc: a\n");
    }

    #[test]
    fn test_dependency_line_right_hand_side_sorted() {
        let (output, _) = render(&resolution(
            &[("d", &["c", "a", "b"]), ("a", &[]), ("b", &[]), ("c", &[])],
            &[],
        ));

        assert!(output.ends_with("d: a b c\n"));
    }

    #[test]
    fn test_empty_dependency_set_produces_empty_right_hand_side() {
        let (output, _) = render(&resolution(&[("a", &[])], &[]));

        assert_eq!(output, "a: \n");
    }

    #[test]
    fn test_unresolved_warning_format() {
        let (_, diagnostics) = render(&resolution(
            &[("c", &[])],
            &[("pa_missing", &["c"])],
        ));

        assert_eq!(
            diagnostics,
            "WARNING: Unresolved symbol 'pa_missing' in ['c']\n"
        );
    }

    #[test]
    fn test_unresolved_importer_list_sorted() {
        let (_, diagnostics) = render(&resolution(
            &[],
            &[("pa_missing", &["d", "c"])],
        ));

        assert_eq!(
            diagnostics,
            "WARNING: Unresolved symbol 'pa_missing' in ['c', 'd']\n"
        );
    }

    #[test]
    fn test_unresolved_warnings_sorted_by_symbol() {
        let (_, diagnostics) = render(&resolution(
            &[],
            &[("pa_zeta", &["a"]), ("pa_alpha", &["a"])],
        ));

        let lines: Vec<&str> = diagnostics.lines().collect();
        assert!(lines[0].contains("pa_alpha"));
        assert!(lines[1].contains("pa_zeta"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let resolution = resolution(
            &[("b", &["a", "c"]), ("a", &[]), ("c", &["a"])],
            &[("pa_gone", &["b", "c"])],
        );

        let first = render(&resolution);
        let second = render(&resolution);
        assert_eq!(first, second);
    }
}
