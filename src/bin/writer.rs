//! File writer utility.
//!
//! `writer <file-path> <write-string>` writes the string to the file,
//! creating parent directories as needed and overwriting any existing
//! content. Exits 0 on success, 1 on any argument or I/O failure with a
//! message on stderr.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, thiserror::Error)]
enum WriterError {
    #[error("two arguments required. Usage: writer <file-path> <write-string>")]
    Usage,
    #[error("could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn run(mut args: impl Iterator<Item = String>) -> Result<(), WriterError> {
    args.next(); // program name

    let (Some(path), Some(content), None) = (args.next(), args.next(), args.next()) else {
        return Err(WriterError::Usage);
    };
    let path = PathBuf::from(path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WriterError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&path, content).map_err(|source| WriterError::WriteFile { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        std::iter::once("writer".to_string()).chain(list.iter().map(|s| s.to_string()))
    }

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("clench-writer-{}-{name}", std::process::id()))
    }

    #[test]
    fn writes_content_creating_parent_dirs() {
        let dir = scratch_path("nested");
        let file = dir.join("a").join("out.txt");

        run(args(&[file.to_str().unwrap(), "hello writer"])).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "hello writer");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn overwrites_existing_file() {
        let file = scratch_path("overwrite.txt");

        run(args(&[file.to_str().unwrap(), "first"])).unwrap();
        run(args(&[file.to_str().unwrap(), "second"])).unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "second");

        fs::remove_file(&file).unwrap();
    }

    #[test]
    fn wrong_arity_is_a_usage_error() {
        assert!(matches!(run(args(&[])), Err(WriterError::Usage)));
        assert!(matches!(run(args(&["only-path"])), Err(WriterError::Usage)));
        assert!(matches!(
            run(args(&["a", "b", "c"])),
            Err(WriterError::Usage)
        ));
    }
}

fn main() -> ExitCode {
    clench::init_tracing();

    match run(env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("writer: {e}");
            ExitCode::FAILURE
        }
    }
}
