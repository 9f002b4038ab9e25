use std::path::{Path, PathBuf};
use std::{fs, io};

pub struct PostList {
    pub build_dir: PathBuf,
    pub excluded: Vec<String>,
}

impl PostList {
    /// Returns the rendered page names in the build directory, minus the
    /// excluded entries (the site index and a feed file left over from a
    /// previous run). Sorted so that runs are deterministic regardless of
    /// directory enumeration order.
    pub fn retrieve_pages(&self) -> io::Result<Vec<String>> {
        let mut pages = vec![];
        let entries = match fs::read_dir(self.build_dir.as_path()) {
            Ok(entries) => entries,
            Err(e) => return Err(io::Error::new(e.kind(), format!("Error listing build directory {}: {}", self.build_dir.display(), e))),
        };
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            if let Some(file_name) = file_name.to_str() {
                if self.excluded.iter().any(|e| e == file_name) {
                    continue;
                }
                pages.push(file_name.to_string());
            }
        }
        pages.sort();
        Ok(pages)
    }
}

/// Maps a rendered page name to its source document path by swapping the
/// output extension for the source one. Pure path transformation; existence
/// is only checked when the source document is opened.
pub fn source_path(source_dir: &Path, page: &str, source_extension: &str) -> PathBuf {
    source_dir.join(page).with_extension(source_extension)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[test]
    fn test_retrieve_pages() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        for name in ["b.html", "a.html", "index.html", "feed.xml"] {
            File::create(dir.path().join(name))?;
        }
        fs::create_dir(dir.path().join("images"))?;

        let post_list = PostList {
            build_dir: dir.path().to_path_buf(),
            excluded: vec!["index.html".to_string(), "feed.xml".to_string()],
        };

        let pages = post_list.retrieve_pages()?;
        assert_eq!(pages, ["a.html", "b.html"]);
        Ok(())
    }

    #[test]
    fn test_retrieve_pages_no_feed_yet() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        for name in ["a.html", "index.html"] {
            File::create(dir.path().join(name))?;
        }

        let post_list = PostList {
            build_dir: dir.path().to_path_buf(),
            excluded: vec!["index.html".to_string(), "feed.xml".to_string()],
        };

        let pages = post_list.retrieve_pages()?;
        assert_eq!(pages, ["a.html"]);
        Ok(())
    }

    #[test]
    fn test_retrieve_pages_missing_dir() {
        let post_list = PostList {
            build_dir: PathBuf::from("/nonexistent/build"),
            excluded: vec![],
        };
        assert!(post_list.retrieve_pages().is_err());
    }

    #[test]
    fn test_source_path() {
        let path = source_path(Path::new("src"), "a.html", "Rmd");
        assert_eq!(path, PathBuf::from("src/a.Rmd"));
    }
}
