//! Tests for ordered font probing and filesystem resolution

#[cfg(test)]
mod tests {
    use selection_meme::glyph::resolver::{
        BuiltinOnlyResolver, FontResolver, SystemFontResolver, select_face,
    };
    use std::cell::RefCell;
    use std::fs;

    /// Records every probe and serves fixed bytes for one candidate
    struct RecordingResolver {
        probes: RefCell<Vec<String>>,
        serve: Option<(&'static str, Vec<u8>)>,
    }

    impl RecordingResolver {
        fn new(serve: Option<(&'static str, Vec<u8>)>) -> Self {
            Self {
                probes: RefCell::new(Vec::new()),
                serve,
            }
        }
    }

    impl FontResolver for RecordingResolver {
        fn resolve(&self, candidate: &str) -> Option<Vec<u8>> {
            self.probes.borrow_mut().push(candidate.to_string());
            self.serve
                .as_ref()
                .filter(|(name, _)| *name == candidate)
                .map(|(_, bytes)| bytes.clone())
        }
    }

    // Tests candidates are probed in order before falling back
    // Verified by reversing the probe order
    #[test]
    fn test_probes_every_candidate_in_order() {
        let resolver = RecordingResolver::new(None);

        let face = select_face(&["first.ttf", "second.ttf", "third.ttf"], &resolver);

        assert!(face.is_builtin());
        assert_eq!(
            *resolver.probes.borrow(),
            vec!["first.ttf", "second.ttf", "third.ttf"]
        );
    }

    // Tests unparseable bytes are skipped instead of failing
    // Verified by returning an error for invalid fonts
    #[test]
    fn test_invalid_font_bytes_fall_back() {
        let resolver = RecordingResolver::new(Some(("second.ttf", b"garbage".to_vec())));

        let face = select_face(&["first.ttf", "second.ttf"], &resolver);

        assert!(face.is_builtin());
        assert_eq!(resolver.probes.borrow().len(), 2);
    }

    // Tests an empty candidate list still produces a face
    // Verified by returning an error when no candidates are given
    #[test]
    fn test_no_candidates() {
        assert!(select_face(&[], &BuiltinOnlyResolver).is_builtin());
        assert_eq!(BuiltinOnlyResolver.resolve("DejaVuSans-Bold.ttf"), None);
    }

    // Tests bare names are found in search directories
    // Verified by only reading the candidate path directly
    #[test]
    fn test_system_resolver_searches_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fake-bold.ttf"), b"bytes").unwrap();

        let resolver = SystemFontResolver::new(vec![dir.path().to_path_buf()]);

        assert_eq!(resolver.search_dirs().len(), 1);
        assert_eq!(resolver.resolve("fake-bold.ttf"), Some(b"bytes".to_vec()));
        assert_eq!(resolver.resolve("missing.ttf"), None);
    }

    // Tests paths with directories are not searched elsewhere
    // Verified by joining every candidate onto search dirs
    #[test]
    fn test_system_resolver_paths() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        let font_path = nested.join("font.ttf");
        fs::write(&font_path, b"direct").unwrap();

        let resolver = SystemFontResolver::new(vec![dir.path().to_path_buf()]);

        let direct = font_path.to_string_lossy().to_string();
        assert_eq!(resolver.resolve(&direct), Some(b"direct".to_vec()));
        assert_eq!(resolver.resolve("other/font.ttf"), None);
    }

    // Tests default search dirs are populated
    // Verified by defaulting to no directories
    #[test]
    fn test_default_search_dirs() {
        let resolver = SystemFontResolver::default();
        assert!(!resolver.search_dirs().is_empty());
    }
}
