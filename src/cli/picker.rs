//! Interactive dataset picker for `nova stats` without `-f`.
//!
//! Lists `*.csv` files under a root directory and reads a choice (a number
//! from the list or an explicit path). The prompt is generic over its reader
//! and writer so it can be driven from tests.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Directory recursion depth when searching for datasets.
const SEARCH_DEPTH: usize = 4;

/// Prompt on stdin/stdout for a dataset under the current directory.
pub fn prompt_for_dataset() -> Result<PathBuf, AppError> {
    let stdin = io::stdin();
    pick_dataset(Path::new("."), stdin.lock(), io::stdout())
}

/// Prompt for a dataset under `root`.
///
/// `q` cancels; end of input is an error.
pub fn pick_dataset<I, O>(root: &Path, mut input: I, mut output: O) -> Result<PathBuf, AppError>
where
    I: BufRead,
    O: Write,
{
    let files = find_datasets(root, SEARCH_DEPTH);
    if files.is_empty() {
        return Err(AppError::invalid_argument(
            "No .csv datasets found. Generate one with `nova generate --export data.csv` or pass `-f <file.csv>`.",
        ));
    }

    let write_err = |e: io::Error| AppError::io(format!("Failed to write prompt: {e}"));

    writeln!(output, "Found {} dataset(s):", files.len()).map_err(write_err)?;
    for (idx, path) in files.iter().enumerate() {
        writeln!(output, "{:>3}) {}", idx + 1, display_relative(root, path)).map_err(write_err)?;
    }

    loop {
        write!(output, "Select a dataset (1-{}) or type a path (q to quit): ", files.len()).map_err(write_err)?;
        output.flush().map_err(write_err)?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .map_err(|e| AppError::io(format!("Failed to read input: {e}")))?;
        if bytes == 0 {
            return Err(AppError::invalid_argument(
                "No input received. Pass a dataset with `nova stats -f <file.csv>`.",
            ));
        }

        let choice = line.trim();
        if choice.eq_ignore_ascii_case("q") {
            return Err(AppError::invalid_argument("Canceled."));
        }

        if let Ok(n) = choice.parse::<usize>() {
            if (1..=files.len()).contains(&n) {
                return Ok(files[n - 1].clone());
            }
            writeln!(output, "Invalid choice: {n}.").map_err(write_err)?;
            continue;
        }

        match validate_dataset_path(Path::new(choice)) {
            Ok(path) => return Ok(path),
            Err(err) => writeln!(output, "{err}").map_err(write_err)?,
        }
    }
}

/// Check that `path` is an existing `.csv` file.
pub fn validate_dataset_path(path: &Path) -> Result<PathBuf, AppError> {
    if !path.is_file() {
        return Err(AppError::invalid_argument(format!(
            "Dataset not found: {}",
            path.display()
        )));
    }
    if !has_csv_extension(path) {
        return Err(AppError::invalid_argument(format!(
            "Expected a .csv file (got: {}).",
            path.display()
        )));
    }
    Ok(path.to_path_buf())
}

/// `*.csv` files under `root`, sorted by path.
pub fn find_datasets(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    let mut out = Vec::new();
    walk(root, 0, max_depth, &mut out);
    out.sort();
    out
}

fn walk(dir: &Path, depth: usize, max_depth: usize, out: &mut Vec<PathBuf>) {
    if depth > max_depth {
        return;
    }
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            if !is_skipped_dir(&path) {
                walk(&path, depth + 1, max_depth, out);
            }
        } else if file_type.is_file() && has_csv_extension(&path) {
            out.push(path);
        }
    }
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn is_skipped_dir(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    matches!(name, ".git" | "target" | "node_modules")
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), "x").unwrap();
        fs::write(dir.path().join("a.CSV"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        fs::write(dir.path().join("target").join("skip.csv"), "x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.csv"), "x").unwrap();
        dir
    }

    #[test]
    fn finds_csv_files_and_skips_build_dirs() {
        let dir = fixture();
        let names: Vec<String> = find_datasets(dir.path(), 4)
            .iter()
            .map(|p| display_relative(dir.path(), p))
            .collect();
        assert_eq!(names, vec!["a.CSV", "b.csv", "nested/c.csv"]);
    }

    #[test]
    fn numeric_choice_selects_file() {
        let dir = fixture();
        let mut out = Vec::new();
        let path = pick_dataset(dir.path(), "7\n2\n".as_bytes(), &mut out).unwrap();
        assert!(path.ends_with("b.csv"));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid choice: 7."));
    }

    #[test]
    fn quit_and_eof_are_errors() {
        let dir = fixture();
        let err = pick_dataset(dir.path(), "q\n".as_bytes(), Vec::new()).unwrap_err();
        assert_eq!(err.message(), "Canceled.");
        let err = pick_dataset(dir.path(), "".as_bytes(), Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn empty_directory_has_nothing_to_pick() {
        let dir = tempfile::tempdir().unwrap();
        assert!(pick_dataset(dir.path(), "1\n".as_bytes(), Vec::new()).is_err());
    }
}
