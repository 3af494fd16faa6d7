//! Invocation resolution.
//!
//! Turns positional arguments into an open input and output stream. All
//! validation happens before any file is opened, so a rejected invocation
//! never creates or truncates anything.

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Read, StdinLock, StdoutLock, Write};
use std::path::Path;
use tracing::debug;

/// Where lines come from and go to, before anything is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan<'a> {
    /// Standard input to standard output.
    Stdio,
    /// Named file to standard output.
    FileToStdout {
        /// Input path.
        input: &'a Path,
    },
    /// Named file to another named file.
    FileToFile {
        /// Input path.
        input: &'a Path,
        /// Output path; created or truncated on open.
        output: &'a Path,
    },
}

impl<'a> Plan<'a> {
    /// Validates the positional arguments.
    ///
    /// # Errors
    ///
    /// - [`Error::Usage`] for three or more arguments.
    /// - [`Error::SameFile`] when two arguments are textually equal or both
    ///   exist and refer to the same file.
    pub fn from_args<P: AsRef<Path>>(files: &'a [P]) -> Result<Self> {
        match files {
            [] => Ok(Self::Stdio),
            [input] => Ok(Self::FileToStdout {
                input: input.as_ref(),
            }),
            [input, output] => {
                let (input, output) = (input.as_ref(), output.as_ref());
                if input.as_os_str() == output.as_os_str() || same_file(input, output) {
                    return Err(Error::SameFile);
                }
                Ok(Self::FileToFile { input, output })
            }
            _ => Err(Error::Usage),
        }
    }

    /// Opens the streams this plan names. The input is opened first; the
    /// output is only created once the input is known to be readable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] naming the first file that cannot be opened.
    pub fn open(self) -> Result<Invocation> {
        let (input, output) = match self {
            Self::Stdio => (Input::stdin(), Output::stdout()),
            Self::FileToStdout { input } => (Input::open(input)?, Output::stdout()),
            Self::FileToFile { input, output } => (Input::open(input)?, Output::create(output)?),
        };
        debug!(plan = ?self, "streams open");
        Ok(Invocation { input, output })
    }
}

/// Validates `files` and opens the resulting streams.
///
/// # Errors
///
/// See [`Plan::from_args`] and [`Plan::open`].
pub fn resolve<P: AsRef<Path>>(files: &[P]) -> Result<Invocation> {
    Plan::from_args(files)?.open()
}

/// An input and an output stream, ready for reading and writing.
#[derive(Debug)]
pub struct Invocation {
    /// Stream lines are read from.
    pub input: Input,
    /// Stream reversed lines are written to.
    pub output: Output,
}

/// Readable end of an invocation.
#[derive(Debug)]
pub enum Input {
    /// The process's standard input. Never closed by this program.
    Stdin(StdinLock<'static>),
    /// A file opened by name; closed on drop.
    File(BufReader<File>),
}

impl Input {
    /// Locks standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::Stdin(io::stdin().lock())
    }

    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        File::open(path)
            .map(|file| Self::File(BufReader::new(file)))
            .map_err(|e| {
                debug!(path = %path.display(), error = %e, "open for reading failed");
                Error::open(path, e)
            })
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(s) => s.read(buf),
            Self::File(f) => f.read(buf),
        }
    }
}

impl BufRead for Input {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::Stdin(s) => s.fill_buf(),
            Self::File(f) => f.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Self::Stdin(s) => s.consume(amt),
            Self::File(f) => f.consume(amt),
        }
    }
}

/// Writable end of an invocation.
#[derive(Debug)]
pub enum Output {
    /// The process's standard output. Never closed by this program.
    Stdout(BufWriter<StdoutLock<'static>>),
    /// A file created or truncated by name; closed on drop.
    File(BufWriter<File>),
}

impl Output {
    /// Locks standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::Stdout(BufWriter::new(io::stdout().lock()))
    }

    /// Creates or truncates `path` for writing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened.
    pub fn create(path: &Path) -> Result<Self> {
        File::create(path)
            .map(|file| Self::File(BufWriter::new(file)))
            .map_err(|e| {
                debug!(path = %path.display(), error = %e, "open for writing failed");
                Error::open(path, e)
            })
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(s) => s.write(buf),
            Self::File(f) => f.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(s) => s.flush(),
            Self::File(f) => f.flush(),
        }
    }
}

/// Returns `true` when both paths exist and name the same filesystem object.
///
/// Symlinks are followed. If either path cannot be stat'ed (typically a
/// fresh output file) the answer is `false`.
#[must_use]
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => same_identity(&a, &b),
        _ => false,
    }
}

#[cfg(unix)]
fn same_identity(a: &fs::Metadata, b: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

// No stable device/inode pair here; only the textual check applies.
#[cfg(not(unix))]
const fn same_identity(_a: &fs::Metadata, _b: &fs::Metadata) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_case::test_case;

    fn names(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("f{i}"))).collect()
    }

    #[test]
    fn test_plan_no_args() {
        let files: Vec<PathBuf> = Vec::new();
        assert_eq!(Plan::from_args(&files).unwrap(), Plan::Stdio);
    }

    #[test]
    fn test_plan_one_arg() {
        let files = names(1);
        assert_eq!(
            Plan::from_args(&files).unwrap(),
            Plan::FileToStdout {
                input: Path::new("f0")
            }
        );
    }

    #[test]
    fn test_plan_two_args_nonexistent_output() {
        let files = names(2);
        assert_eq!(
            Plan::from_args(&files).unwrap(),
            Plan::FileToFile {
                input: Path::new("f0"),
                output: Path::new("f1"),
            }
        );
    }

    #[test_case(3 ; "three")]
    #[test_case(4 ; "four")]
    #[test_case(10 ; "ten")]
    fn test_plan_too_many_args(n: usize) {
        let files = names(n);
        assert!(matches!(Plan::from_args(&files), Err(Error::Usage)));
    }

    #[test]
    fn test_plan_identical_names() {
        let files = vec![PathBuf::from("same"), PathBuf::from("same")];
        assert!(matches!(Plan::from_args(&files), Err(Error::SameFile)));
    }

    #[test]
    fn test_plan_relative_and_absolute_alias() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.txt");
        std::fs::write(&file, "x\n").unwrap();
        let dotted = temp_dir.path().join(".").join("data.txt");

        let files = vec![file, dotted];
        assert!(matches!(Plan::from_args(&files), Err(Error::SameFile)));
    }

    #[cfg(unix)]
    #[test]
    fn test_plan_hard_link_alias() {
        let temp_dir = TempDir::new().unwrap();
        let original = temp_dir.path().join("original.txt");
        let link = temp_dir.path().join("link.txt");
        std::fs::write(&original, "x\n").unwrap();
        std::fs::hard_link(&original, &link).unwrap();

        let files = vec![original, link];
        assert!(matches!(Plan::from_args(&files), Err(Error::SameFile)));
    }

    #[cfg(unix)]
    #[test]
    fn test_plan_symlink_alias() {
        let temp_dir = TempDir::new().unwrap();
        let original = temp_dir.path().join("original.txt");
        let link = temp_dir.path().join("symlink.txt");
        std::fs::write(&original, "x\n").unwrap();
        std::os::unix::fs::symlink(&original, &link).unwrap();

        let files = vec![link, original];
        assert!(matches!(Plan::from_args(&files), Err(Error::SameFile)));
    }

    #[test]
    fn test_same_file_distinct_files() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        std::fs::write(&a, "a\n").unwrap();
        std::fs::write(&b, "a\n").unwrap();
        assert!(!same_file(&a, &b));
    }

    #[test]
    fn test_same_file_missing_output() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        std::fs::write(&a, "a\n").unwrap();
        assert!(!same_file(&a, &temp_dir.path().join("absent.txt")));
    }

    #[test]
    fn test_open_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");
        let files = vec![missing.clone()];

        let err = resolve(&files).unwrap_err();

        assert!(matches!(err, Error::Open { ref path, .. } if *path == missing));
    }

    #[test]
    fn test_open_missing_input_does_not_create_output() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");
        let out = temp_dir.path().join("out.txt");
        let files = vec![missing, out.clone()];

        assert!(resolve(&files).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn test_open_unwritable_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        std::fs::write(&input, "a\n").unwrap();
        let output = temp_dir.path().join("no/such/dir/out.txt");
        let files = vec![input, output.clone()];

        let err = resolve(&files).unwrap_err();

        assert!(matches!(err, Error::Open { ref path, .. } if *path == output));
    }

    #[test]
    fn test_open_file_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        let output = temp_dir.path().join("out.txt");
        std::fs::write(&input, "a\n").unwrap();
        std::fs::write(&output, "old contents\n").unwrap();
        let files = vec![input, output.clone()];

        let invocation = resolve(&files).unwrap();

        assert!(matches!(invocation.input, Input::File(_)));
        assert!(matches!(invocation.output, Output::File(_)));
        drop(invocation);
        assert_eq!(std::fs::read(&output).unwrap(), b"");
    }

    #[test]
    fn test_same_file_rejected_before_truncation() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("keep.txt");
        std::fs::write(&file, "keep\n").unwrap();
        let files = vec![file.clone(), file.clone()];

        assert!(matches!(resolve(&files), Err(Error::SameFile)));
        assert_eq!(std::fs::read(&file).unwrap(), b"keep\n");
    }
}
