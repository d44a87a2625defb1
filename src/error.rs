use std::io;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while producing the post list.
#[derive(Debug, Error)]
pub enum PostListError {
    #[error("posts directory {} does not exist", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("permission denied reading posts directory {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading posts directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error parsing template: {0}")]
    Template(String),
}

impl PostListError {
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            ErrorKind::NotFound => PostListError::NotFound { path, source },
            ErrorKind::PermissionDenied => PostListError::PermissionDenied { path, source },
            _ => PostListError::Io { path, source },
        }
    }

    /// Posts root involved in the failure, if the failure came from the filesystem.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            PostListError::NotFound { path, .. }
            | PostListError::PermissionDenied { path, .. }
            | PostListError::Io { path, .. } => Some(path),
            PostListError::Template(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_classify_io_errors() {
        let err = PostListError::from_io("posts", io::Error::new(ErrorKind::NotFound, "gone"));
        assert!(matches!(err, PostListError::NotFound { .. }));
        assert_eq!(err.to_string(), "posts directory posts does not exist");

        let err = PostListError::from_io("posts", io::Error::new(ErrorKind::PermissionDenied, "no"));
        assert!(matches!(err, PostListError::PermissionDenied { .. }));

        let err = PostListError::from_io("posts", io::Error::new(ErrorKind::Other, "disk on fire"));
        assert!(matches!(err, PostListError::Io { .. }));
        assert_eq!(err.to_string(), "error reading posts directory posts: disk on fire");
        assert_eq!(err.path(), Some(&PathBuf::from("posts")));
    }

    #[test]
    fn test_source_is_kept() {
        let err = PostListError::from_io("posts", io::Error::new(ErrorKind::NotFound, "gone"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "gone");

        let err = PostListError::Template("bad".to_string());
        assert!(err.source().is_none());
        assert!(err.path().is_none());
    }
}
