use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{AppError, Result};
use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns true if the path has one of the supported image extensions (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lists the supported images in `dir`, descending into subdirectories when `recursive` is set.
///
/// The result is sorted; callers shuffle it themselves.
pub fn scan_directory(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AppError::DirectoryScan(format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let mut image_files: Vec<PathBuf> = if recursive {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.into_path())
            // `path.is_file()` follows symlinks, like the flat branch.
            .filter(|path| path.is_file() && is_supported_image(path))
            .collect()
    } else {
        fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_supported_image(path))
            .collect()
    };

    image_files.sort();
    Ok(image_files)
}

/// Randomly permutes the paths in place.
pub fn shuffle_paths<R: Rng + ?Sized>(paths: &mut [PathBuf], rng: &mut R) {
    paths.shuffle(rng);
}

/// Removes an image file from disk. A file that is already gone counts as removed.
pub fn delete_file(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("{} was already removed", path.display());
            Ok(())
        }
        Err(e) => Err(AppError::FileDelete(format!("{}: {}", path.display(), e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"not really an image").expect("failed to write test file");
        path
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("a.JPG")));
        assert!(is_supported_image(Path::new("dir/b.Png")));
        assert!(is_supported_image(Path::new("c.bmp")));
        assert!(!is_supported_image(Path::new("d.gif")));
        assert!(!is_supported_image(Path::new("noext")));
    }

    #[test]
    fn flat_scan_ignores_subdirectories_and_other_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let a = touch(temp_dir.path(), "a.jpg");
        let b = touch(temp_dir.path(), "b.PNG");
        touch(temp_dir.path(), "notes.txt");
        let sub = temp_dir.path().join("nested");
        fs::create_dir(&sub).expect("failed to create subdir");
        touch(&sub, "c.bmp");

        let found = scan_directory(temp_dir.path(), false).expect("scan failed");
        assert_eq!(found, vec![a, b]);
    }

    #[test]
    fn recursive_scan_descends_into_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let a = touch(temp_dir.path(), "a.jpg");
        let sub = temp_dir.path().join("nested").join("deeper");
        fs::create_dir_all(&sub).expect("failed to create subdirs");
        let c = touch(&sub, "c.bmp");
        touch(&sub, "skip.webp");

        let found = scan_directory(temp_dir.path(), true).expect("scan failed");
        assert_eq!(found.len(), 2);
        assert!(found.contains(&a));
        assert!(found.contains(&c));
    }

    #[test]
    fn scanning_a_missing_directory_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing");
        assert!(matches!(
            scan_directory(&missing, false),
            Err(AppError::DirectoryScan(_))
        ));
    }

    #[test]
    fn shuffle_produces_a_permutation() {
        let original: Vec<PathBuf> = (0..50).map(|i| PathBuf::from(format!("{i}.jpg"))).collect();
        let mut shuffled = original.clone();
        let mut rng = StdRng::seed_from_u64(7);
        shuffle_paths(&mut shuffled, &mut rng);

        assert_ne!(shuffled, original);
        let mut sorted = shuffled.clone();
        sorted.sort();
        let mut expected = original.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn delete_file_removes_from_disk() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = touch(temp_dir.path(), "gone.jpg");
        delete_file(&path).expect("delete failed");
        assert!(!path.exists());
        delete_file(&path).expect("a missing file counts as deleted");
    }

    #[test]
    fn delete_file_reports_other_failures() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("not-a-file.jpg");
        fs::create_dir(&dir).expect("failed to create dir");
        assert!(matches!(delete_file(&dir), Err(AppError::FileDelete(_))));
        assert!(dir.exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_images_are_found_in_both_modes() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let real = temp_dir.path().join("real");
        let view = temp_dir.path().join("view");
        fs::create_dir(&real).expect("failed to create dir");
        fs::create_dir(&view).expect("failed to create dir");
        let target = touch(&real, "a.jpg");
        let link = view.join("link.jpg");
        std::os::unix::fs::symlink(&target, &link).expect("failed to create symlink");

        assert_eq!(scan_directory(&view, false).expect("scan failed"), vec![link.clone()]);
        assert_eq!(scan_directory(&view, true).expect("scan failed"), vec![link]);
    }
}
