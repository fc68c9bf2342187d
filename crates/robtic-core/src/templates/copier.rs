//! Recursive template tree copying

use crate::error::Error;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Copy the directory tree rooted at `src` into `dest`, preserving the
/// internal structure and file contents. `dest` and intermediate
/// directories are created as needed; existing files in `dest` are
/// overwritten. Returns the number of files copied.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize, Error> {
    fs::create_dir_all(dest)
        .map_err(|e| Error::io(format!("failed to create directory {}", dest.display()), e))?;

    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| {
            Error::io(
                format!("failed to read template directory {}", src.display()),
                e.into(),
            )
        })?;

        // WalkDir yields the root itself first; strip it.
        let relative = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir entry outside its root");
        if relative.as_os_str().is_empty() {
            continue;
        }

        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                Error::io(format!("failed to create directory {}", target.display()), e)
            })?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::io(format!("failed to create directory {}", parent.display()), e)
                })?;
            }
            fs::copy(entry.path(), &target).map_err(|e| {
                Error::io(
                    format!(
                        "failed to copy {} to {}",
                        entry.path().display(),
                        target.display()
                    ),
                    e,
                )
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_copies_nested_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");

        write(&src.join("package.json"), "{}");
        write(&src.join("src/index.js"), "console.log('hi');\n");
        write(&src.join("src/commands/robtic.js"), "// command\n");

        let copied = copy_tree(&src, &dest).unwrap();
        assert_eq!(copied, 3);
        assert_eq!(fs::read_to_string(dest.join("package.json")).unwrap(), "{}");
        assert_eq!(
            fs::read_to_string(dest.join("src/commands/robtic.js")).unwrap(),
            "// command\n"
        );
    }

    #[test]
    fn test_copies_into_existing_empty_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dest = tmp.path().join("dest");
        fs::create_dir(&dest).unwrap();

        write(&src.join("a.txt"), "a");

        copy_tree(&src, &dest).unwrap();
        assert!(dest.join("a.txt").exists());
    }

    #[test]
    fn test_preserves_empty_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(src.join("src/events")).unwrap();

        let dest = tmp.path().join("dest");
        copy_tree(&src, &dest).unwrap();
        assert!(dest.join("src/events").is_dir());
    }
}
