use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::constants::IMAGE_EXTENSIONS;

/// Images of one carousel group, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSource {
    pub name: String,
    pub paths: Vec<PathBuf>,
}

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

// --- Image files directly inside `dir`, sorted by file name ---
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Builds the groups shown by the viewer from `root`.
///
/// Images lying directly in `root` form the first group; each sub-directory,
/// sorted by name, adds one more. Sub-directories without images still make a
/// (empty) group. Anything beyond `max_groups` is skipped.
pub fn discover_groups(root: &Path, max_groups: usize) -> Result<Vec<GroupSource>> {
    let mut groups = Vec::new();

    let loose = load_sorted_image_paths(root)?;
    if !loose.is_empty() {
        groups.push(GroupSource { name: dir_name(root), paths: loose });
    }

    let mut dirs = Vec::new();
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read directory {}", root.display()))?;
    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();

    for dir in dirs {
        let paths = load_sorted_image_paths(&dir)?;
        if paths.is_empty() {
            warn!(group = %dir.display(), "group directory holds no images");
        }
        groups.push(GroupSource { name: dir_name(&dir), paths });
    }

    if groups.len() > max_groups {
        warn!(found = groups.len(), max_groups, "too many groups, extra ones are ignored");
        groups.truncate(max_groups);
    }

    if groups.iter().all(|g| g.paths.is_empty()) {
        bail!("No image files found in the first {} groups under {}", max_groups, root.display());
    }

    debug!(groups = groups.len(), "discovered carousel groups");
    Ok(groups)
}

/// Shuffles the order inside every group. A seed makes the order repeatable.
pub fn shuffle_groups(groups: &mut [GroupSource], seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    for group in groups.iter_mut() {
        group.paths.shuffle(&mut rng);
    }
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"").expect("write file");
    }

    #[test]
    fn recognises_image_extensions_case_insensitively() {
        assert!(is_image_path(Path::new("a.JPG")));
        assert!(is_image_path(Path::new("dir/b.png")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("jpg")));
    }

    #[test]
    fn loose_images_come_first_then_sorted_directories() {
        let root = tempdir().expect("tempdir");
        touch(&root.path().join("b.jpg"));
        touch(&root.path().join("a.png"));
        touch(&root.path().join("readme.md"));

        let zoo = root.path().join("zoo");
        let alps = root.path().join("alps");
        fs::create_dir(&zoo).unwrap();
        fs::create_dir(&alps).unwrap();
        touch(&zoo.join("lion.jpeg"));
        touch(&alps.join("2.gif"));
        touch(&alps.join("1.bmp"));

        let groups = discover_groups(root.path(), 10).expect("discover");
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(&names[1..], &["alps", "zoo"]);

        let loose: Vec<_> = groups[0].paths.iter().map(|p| p.file_name().unwrap().to_owned()).collect();
        assert_eq!(loose, ["a.png", "b.jpg"]);
        assert_eq!(groups[1].paths, vec![alps.join("1.bmp"), alps.join("2.gif")]);
    }

    #[test]
    fn empty_directories_still_form_groups() {
        let root = tempdir().expect("tempdir");
        fs::create_dir(root.path().join("a")).unwrap();
        fs::create_dir(root.path().join("b")).unwrap();
        touch(&root.path().join("b").join("x.png"));

        let groups = discover_groups(root.path(), 10).expect("discover");
        assert_eq!(groups.len(), 2);
        assert!(groups[0].paths.is_empty());
        assert_eq!(groups[1].paths.len(), 1);
    }

    #[test]
    fn no_images_anywhere_is_an_error() {
        let root = tempdir().expect("tempdir");
        fs::create_dir(root.path().join("empty")).unwrap();
        assert!(discover_groups(root.path(), 10).is_err());
    }

    #[test]
    fn groups_are_capped() {
        let root = tempdir().expect("tempdir");
        for name in ["a", "b", "c"] {
            let dir = root.path().join(name);
            fs::create_dir(&dir).unwrap();
            touch(&dir.join("img.png"));
        }
        let groups = discover_groups(root.path(), 2).expect("discover");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].name, "b");
    }

    #[test]
    fn images_only_past_the_cap_is_an_error() {
        let root = tempdir().expect("tempdir");
        fs::create_dir(root.path().join("a")).unwrap();
        fs::create_dir(root.path().join("b")).unwrap();
        let c = root.path().join("c");
        fs::create_dir(&c).unwrap();
        touch(&c.join("img.png"));

        assert!(discover_groups(root.path(), 2).is_err());
        assert_eq!(discover_groups(root.path(), 3).expect("discover").len(), 3);
    }

    #[test]
    fn seeded_shuffle_is_repeatable_and_keeps_items() {
        let paths: Vec<PathBuf> = (0..20).map(|i| PathBuf::from(format!("{i}.png"))).collect();
        let mut first = vec![GroupSource { name: "g".into(), paths: paths.clone() }];
        let mut second = first.clone();

        shuffle_groups(&mut first, Some(7));
        shuffle_groups(&mut second, Some(7));
        assert_eq!(first, second);

        let mut sorted = first[0].paths.clone();
        sorted.sort_by_key(|p| p.file_stem().unwrap().to_str().unwrap().parse::<u32>().unwrap());
        assert_eq!(sorted, paths);
    }
}
