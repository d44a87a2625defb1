use std::env;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spdlog::{debug, warn};
use tokio::fs;

use crate::error::PostListError;
use crate::view::{PostListView, PreviewPlaceholder};

pub const DEFAULT_POSTS_SUBDIR: &str = "src/posts";

/// Immediate child of the posts root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDirectoryEntry {
    pub name: String,
    pub is_directory: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsRoot(pub PathBuf);

impl PostsRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PostsRoot(path.into())
    }

    /// `<cwd>/src/posts`. Only meant for the outermost composition point.
    pub fn from_current_dir() -> io::Result<Self> {
        let cur_dir = env::current_dir()?;
        Ok(PostsRoot(cur_dir.join(DEFAULT_POSTS_SUBDIR)))
    }

    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingOrder {
    /// Whatever order the filesystem hands back.
    #[default]
    Listing,
    Name,
}

pub struct PostList {
    pub root: PostsRoot,
    pub order: ListingOrder,
}

impl PostList {
    pub fn new(root: PostsRoot) -> Self {
        PostList {
            root,
            order: ListingOrder::default(),
        }
    }

    pub fn with_order(mut self, order: ListingOrder) -> Self {
        self.order = order;
        self
    }

    /// Lists the immediate children of the root with their type. Symlinks are not followed.
    pub async fn read_entries(&self) -> Result<Vec<PostDirectoryEntry>, PostListError> {
        let root_dir = self.root.path();
        let to_error = |e: io::Error| PostListError::from_io(root_dir, e);

        let mut entries = vec![];
        let mut read_dir = fs::read_dir(root_dir).await.map_err(to_error)?;
        while let Some(entry) = read_dir.next_entry().await.map_err(to_error)? {
            let file_type = entry.file_type().await.map_err(to_error)?;
            let raw_name = entry.file_name();
            let name = raw_name.to_string_lossy().into_owned();
            if raw_name.to_str().is_none() {
                warn!("Entry name {:?} in {} is not UTF-8. Using {:?}", raw_name, root_dir.display(), name);
            }
            entries.push(PostDirectoryEntry {
                name,
                is_directory: file_type.is_dir(),
            });
        }

        Ok(entries)
    }

    /// Directories only, in listing order unless sorting by name was requested.
    pub async fn retrieve_dirs(&self) -> Result<Vec<PostDirectoryEntry>, PostListError> {
        let entries = self.read_entries().await?;
        let mut dirs: Vec<PostDirectoryEntry> = entries.into_iter()
            .filter(|entry| entry.is_directory)
            .collect();

        if self.order == ListingOrder::Name {
            dirs.sort_by(|a, b| a.name.cmp(&b.name));
        }

        debug!("Found {} post directories in {}", dirs.len(), self.root.path().display());
        Ok(dirs)
    }

    pub async fn render(&self) -> Result<PostListView, PostListError> {
        let dirs = self.retrieve_dirs().await?;
        let previews = dirs.into_iter()
            .map(|dir| PreviewPlaceholder::new(dir.name))
            .collect();
        Ok(PostListView::new(previews))
    }
}
