use std::fs;
use std::path::{Path, PathBuf};

use crate::slideshow::{self, SlideshowError};

/// One processed input file.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub input: PathBuf,
    pub output: PathBuf,
    pub slide_count: usize,
}

/// Summary of a directory run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

/// Process every `.txt` file directly under `input_dir`, writing a
/// `<stem>_output.txt` next to each into `output_dir` (created, with
/// parents, if absent). Files are processed in file-name order.
pub fn process_dir(input_dir: &Path, output_dir: &Path) -> Result<BatchReport, SlideshowError> {
    fs::create_dir_all(output_dir).map_err(|e| SlideshowError::Io(e.to_string()))?;

    let mut inputs = Vec::new();
    for entry in fs::read_dir(input_dir).map_err(|e| SlideshowError::Io(e.to_string()))? {
        let path = entry.map_err(|e| SlideshowError::Io(e.to_string()))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            inputs.push(path);
        }
    }
    inputs.sort();

    let mut report = BatchReport::default();
    for input in inputs {
        let Some(stem) = input.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let output = output_dir.join(format!("{stem}_output.txt"));
        let slide_count = slideshow::solve_file(&input, &output)?;
        report.entries.push(BatchEntry {
            input,
            output,
            slide_count,
        });
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("packshow-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_empty_input_dir_creates_output_dir() {
        let root = scratch("batch-empty");
        let input_dir = root.join("in");
        let output_dir = root.join("out");
        fs::create_dir_all(&input_dir).unwrap();

        let report = process_dir(&input_dir, &output_dir).unwrap();

        assert!(report.entries.is_empty());
        assert!(output_dir.is_dir());
        assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_batch_processes_txt_files_in_name_order() {
        let root = scratch("batch-run");
        let input_dir = root.join("in");
        let output_dir = root.join("out");
        fs::create_dir_all(&input_dir).unwrap();

        fs::write(input_dir.join("b.txt"), "1\nH 1 x\n").unwrap();
        fs::write(input_dir.join("a.txt"), "3\nH 2 a b\nV 1 c\nV 1 d\n").unwrap();
        fs::write(input_dir.join("notes.md"), "not an input\n").unwrap();

        let report = process_dir(&input_dir, &output_dir).unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].input, input_dir.join("a.txt"));
        assert_eq!(report.entries[0].output, output_dir.join("a_output.txt"));
        assert_eq!(report.entries[0].slide_count, 2);
        assert_eq!(report.entries[1].input, input_dir.join("b.txt"));
        assert_eq!(report.entries[1].slide_count, 1);

        // Each output holds a count line plus one line per slide
        for entry in &report.entries {
            let written = fs::read_to_string(&entry.output).unwrap();
            assert_eq!(written.lines().count(), entry.slide_count + 1);
            assert_eq!(
                written.lines().next(),
                Some(entry.slide_count.to_string().as_str())
            );
        }

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_parse_failure_names_the_file() {
        let root = scratch("batch-bad");
        let input_dir = root.join("in");
        let output_dir = root.join("out");
        fs::create_dir_all(&input_dir).unwrap();
        fs::write(input_dir.join("bad.txt"), "oops\n").unwrap();

        let err = process_dir(&input_dir, &output_dir).unwrap_err();
        match err {
            SlideshowError::Parse(path, _) => assert!(path.contains("bad.txt")),
            other => panic!("expected parse error, got {other}"),
        }

        let _ = fs::remove_dir_all(&root);
    }
}
