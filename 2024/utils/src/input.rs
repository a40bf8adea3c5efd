use std::{
    error,
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    Unreadable(PathBuf, io::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NotFound(path) => {
                write!(f, "Given input file({}) doesn't exist.", path.display())
            }
            LoadError::Unreadable(path, _) => {
                write!(f, "Failed to read given input file({}).", path.display())
            }
        }
    }
}

impl error::Error for LoadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LoadError::NotFound(_) => None,
            LoadError::Unreadable(_, e) => Some(e),
        }
    }
}

/// Reads the whole input file as text.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Unreadable(path.to_path_buf(), e),
    })
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data")
            .join(name)
    }

    #[test]
    fn reads_whole_file() {
        let text = read_input(fixture("lines.txt")).unwrap();
        assert_eq!(text, "3   4\n4   3\n");
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = fixture("no_such_file.txt");
        let err = read_input(&path).unwrap_err();
        assert!(matches!(&err, LoadError::NotFound(p) if *p == path));
        assert!(err.source().is_none());
    }

    #[test]
    fn directory_is_unreadable() {
        let err = read_input(fixture("")).unwrap_err();
        assert!(matches!(err, LoadError::Unreadable(_, _)));
        assert!(err.source().is_some());
    }
}
