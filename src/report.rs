//! Extension-grouped report formatting
//!
//! After the workers join, the collected paths are printed to stdout as
//! nested bracketed groups. Grouping is by adjacency in insertion order:
//! a new group opens whenever an entry's extension differs from the
//! previous entry's, so the same extension can appear in several groups.
//! This is a pure pass over already-collected data; no locking is
//! involved.

use std::io::{self, Write};
use std::path::MAIN_SEPARATOR;

/// Extension of a path's final segment: the text after its last `.`.
///
/// `None` when the segment has no dot at all. A leading dot counts
/// (`.bashrc` yields `bashrc`), as does a trailing one (`log.` yields an
/// empty extension); both are distinct from having no extension.
pub fn extension_of(path: &str) -> Option<&str> {
    let segment = path.rsplit(MAIN_SEPARATOR).next().unwrap_or(path);
    segment.rfind('.').map(|idx| &segment[idx + 1..])
}

/// Write the bracketed, adjacency-grouped report.
///
/// Paths are printed verbatim, in insertion order, comma-separated
/// within a group; groups are bracketed blocks, themselves
/// comma-separated inside one outer bracket pair.
pub fn write_report<W: Write>(out: &mut W, paths: &[String]) -> io::Result<()> {
    writeln!(out, "[")?;

    // Tracks the previous entry's extension; None until the first entry.
    let mut current: Option<Option<&str>> = None;

    for path in paths {
        let ext = extension_of(path);
        match current {
            None => writeln!(out, "[")?,
            Some(prev) if prev != ext => {
                writeln!(out)?;
                writeln!(out, "],")?;
                writeln!(out, "[")?;
            }
            Some(_) => writeln!(out, ",")?,
        }
        write!(out, "{path}")?;
        current = Some(ext);
    }

    if current.is_some() {
        writeln!(out)?;
        writeln!(out, "]")?;
    }
    writeln!(out, "]")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(paths: &[&str]) -> String {
        let owned: Vec<String> = paths.iter().map(|p| (*p).to_owned()).collect();
        let mut out = Vec::new();
        write_report(&mut out, &owned).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.txt"), Some("txt"));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz"));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(".bashrc"), Some("bashrc"));
        assert_eq!(extension_of("log."), Some(""));
    }

    #[test]
    fn test_extension_uses_final_segment_only() {
        // The dot in a directory name does not give the file an extension.
        let path = format!("dir.d{MAIN_SEPARATOR}file");
        assert_eq!(extension_of(&path), None);

        let path = format!("dir.d{MAIN_SEPARATOR}file.txt");
        assert_eq!(extension_of(&path), Some("txt"));
    }

    #[test]
    fn test_adjacency_grouping() {
        // Same-extension entries split by a different extension form two
        // distinct groups, not one.
        let out = render(&["a.txt", "b.txt", "c.md", "d.txt"]);
        assert_eq!(out, "[\n[\na.txt,\nb.txt\n],\n[\nc.md\n],\n[\nd.txt\n]\n]\n");
    }

    #[test]
    fn test_single_group() {
        let out = render(&["a.txt", "b.txt"]);
        assert_eq!(out, "[\n[\na.txt,\nb.txt\n]\n]\n");
    }

    #[test]
    fn test_empty_collection() {
        let out = render(&[]);
        assert_eq!(out, "[\n]\n");
    }

    #[test]
    fn test_undotted_paths_form_their_own_group() {
        let out = render(&["notes.txt", "README", "LICENSE", "more.txt"]);
        assert_eq!(
            out,
            "[\n[\nnotes.txt\n],\n[\nREADME,\nLICENSE\n],\n[\nmore.txt\n]\n]\n"
        );
    }

    #[test]
    fn test_empty_extension_distinct_from_no_extension() {
        let out = render(&["log.", "README"]);
        assert_eq!(out, "[\n[\nlog.\n],\n[\nREADME\n]\n]\n");
    }
}
