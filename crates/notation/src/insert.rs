use crate::error::{NotationError, Result};
use crate::line::{classify, line_ending, LineKind};

/// How a new reference was written into an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionKind {
    /// The entry had no references; a new `R` line was added before `$`
    FirstReference,
    /// The new code sorts before the old `R`; it takes the `R` marker and the old one becomes `;`
    Promoted,
    /// A `;` line was added inside or at the end of the reference block
    Continuation,
}

/// Outcome of a successful `insert_reference`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// Buffer index of the newly written reference line
    pub line: usize,
    pub kind: InsertionKind,
}

/// Where and how to insert, computed before the buffer is touched.
#[derive(Debug)]
struct Plan {
    at: usize,
    kind: InsertionKind,
}

/// Scan the entry starting at `start` and decide where `to_code` belongs.
///
/// Codes compare as plain strings; an equal code is not greater, so the scan
/// moves past it.
fn plan_insertion(
    lines: &[String],
    start: usize,
    from_code: &str,
    to_code: &str,
) -> Result<Plan> {
    let mut has_references = false;

    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        match classify(line) {
            LineKind::FirstReference(code) => {
                if code > to_code {
                    return Ok(Plan {
                        at: idx,
                        kind: InsertionKind::Promoted,
                    });
                }
                has_references = true;
            }
            LineKind::Reference(code) if has_references => {
                if code > to_code {
                    return Ok(Plan {
                        at: idx,
                        kind: InsertionKind::Continuation,
                    });
                }
            }
            LineKind::Terminator => {
                let kind = if has_references {
                    InsertionKind::Continuation
                } else {
                    InsertionKind::FirstReference
                };
                return Ok(Plan {
                    at: idx,
                    kind,
                });
            }
            LineKind::Entry(_) => break,
            LineKind::Reference(_) | LineKind::Payload => {}
        }
    }

    Err(NotationError::UnterminatedEntry {
        code: from_code.to_string(),
        line: start,
    })
}

/// Insert `to_code` into the reference block of the entry starting at `start`.
pub(crate) fn insert_reference(
    lines: &mut Vec<String>,
    start: usize,
    from_code: &str,
    to_code: &str,
) -> Result<Insertion> {
    let Plan { at, kind } = plan_insertion(lines, start, from_code, to_code)?;
    let ending = match line_ending(&lines[at]) {
        "" => "\n",
        ending => ending,
    }
    .to_string();
    let new_line = match kind {
        InsertionKind::FirstReference | InsertionKind::Promoted => format!("R {to_code}{ending}"),
        InsertionKind::Continuation => format!("; {to_code}{ending}"),
    };

    if kind == InsertionKind::Promoted {
        // The old first reference keeps its text; only its marker changes.
        lines[at].replace_range(..1, ";");
    }
    lines.insert(at, new_line);

    log::debug!("Inserted reference {to_code} into N {from_code} at line {at} ({kind:?})");

    Ok(Insertion { line: at, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> Vec<String> {
        text.split_inclusive('\n').map(str::to_string).collect()
    }

    #[test]
    fn test_plan_empty_block() {
        let lines = buffer("N 5\n$\n");
        let plan = plan_insertion(&lines, 0, "5", "41").unwrap();
        assert_eq!(plan.at, 1);
        assert_eq!(plan.kind, InsertionKind::FirstReference);
    }

    #[test]
    fn test_plan_promotes_first_reference() {
        let lines = buffer("N 5\nR 41\n$\n");
        let plan = plan_insertion(&lines, 0, "5", "30").unwrap();
        assert_eq!(plan.at, 1);
        assert_eq!(plan.kind, InsertionKind::Promoted);
    }

    #[test]
    fn test_continuation_before_orphan_is_ignored() {
        // `;` before any `R` is payload for the scan
        let lines = buffer("N 5\n; 90\n$\n");
        let plan = plan_insertion(&lines, 0, "5", "10").unwrap();
        assert_eq!(plan.at, 2);
        assert_eq!(plan.kind, InsertionKind::FirstReference);
    }

    #[test]
    fn test_unterminated_entry() {
        let lines = buffer("N 5\nR 1\nN 6\n$\n");
        let err = plan_insertion(&lines, 0, "5", "2").unwrap_err();
        assert!(matches!(err, NotationError::UnterminatedEntry { line: 0, .. }));

        let lines = buffer("N 5\nR 1\n");
        assert!(plan_insertion(&lines, 0, "5", "2").is_err());
    }

    #[test]
    fn test_missing_final_newline_gets_one() {
        let mut lines = buffer("N 5\n$");
        insert_reference(&mut lines, 0, "5", "1").unwrap();
        assert_eq!(lines, vec!["N 5\n", "R 1\n", "$"]);
    }

    #[test]
    fn test_demoted_line_keeps_its_bytes() {
        let mut lines = buffer("N 1\nR 61B2(Napoleon Bonaparte)  \n$\n");
        insert_reference(&mut lines, 0, "1", "31A3331").unwrap();
        assert_eq!(
            lines,
            vec!["N 1\n", "R 31A3331\n", "; 61B2(Napoleon Bonaparte)  \n", "$\n"]
        );
    }

    #[test]
    fn test_crlf_is_preserved() {
        let mut lines = buffer("N 5\r\nR 41\r\n$\r\n");
        insert_reference(&mut lines, 0, "5", "30").unwrap();
        assert_eq!(lines, vec!["N 5\r\n", "R 30\r\n", "; 41\r\n", "$\r\n"]);
    }
}
