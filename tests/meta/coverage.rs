//! Structural checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Entry points and module wiring carry no behavior of their own
    fn is_wiring(relative: &str) -> bool {
        matches!(relative, "main.rs" | "lib.rs") || relative.ends_with("mod.rs")
    }

    /// Relative paths of every directory and `.rs` file below `base`
    fn mirror_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(base)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn rust_files(base: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn report(heading: &str, lines: &[String]) -> String {
        format!("{heading}:\n{}", lines.join("\n"))
    }

    // Tests each source module has a unit test file at the mirrored path
    // Verified by adding an empty module under src
    #[test]
    fn test_every_module_has_unit_tests() {
        let src = mirror_paths(Path::new(SRC_DIR)).unwrap();
        let unit = mirror_paths(Path::new(UNIT_DIR)).unwrap();

        let missing: Vec<_> = src
            .iter()
            .filter(|path| !is_wiring(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source modules without unit tests", &missing)
        );
    }

    // Tests no unit test file outlives the module it covers
    // Verified by renaming a source module
    #[test]
    fn test_no_orphaned_unit_tests() {
        let src = mirror_paths(Path::new(SRC_DIR)).unwrap();
        let unit = mirror_paths(Path::new(UNIT_DIR)).unwrap();

        let orphaned: Vec<_> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit tests without a source module", &orphaned)
        );
    }

    // Tests every test file declares at least one test
    // Verified by removing the attributes from one file
    #[test]
    fn test_test_files_declare_tests() {
        let root = Path::new(TESTS_DIR);

        let empty: Vec<_> = rust_files(root)
            .unwrap()
            .into_iter()
            .filter(|path| {
                let wiring = path.ends_with("mod.rs") || path == &root.join("main.rs");
                !wiring
            })
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }

    // Tests every source file opens with module documentation
    // Verified by deleting the header of one module
    #[test]
    fn test_source_files_are_documented() {
        let undocumented: Vec<_> = rust_files(Path::new(SRC_DIR))
            .unwrap()
            .into_iter()
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.starts_with("//!"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            undocumented.is_empty(),
            "{}",
            report("Source files without a module doc header", &undocumented)
        );
    }
}
