use dashmap::DashMap;

/// How a source file relates to the program under debug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// Part of the program the user is debugging.
    Debuggee,
    /// Part of the runtime's standard library or a third-party dependency.
    Library,
    /// Synthesized at runtime (REPL input, `eval`, codegen) with no
    /// backing file on disk.
    Generated,
}

/// Path prefixes the target runtime reports as its own installation and
/// dependency roots; any file under one of these is [`FileClass::Library`]
/// rather than [`FileClass::Debuggee`].
#[derive(Debug, Clone, Default)]
pub struct ClassificationRules {
    pub library_prefixes: Vec<String>,
}

impl ClassificationRules {
    fn classify(&self, path: &str) -> FileClass {
        if path.is_empty() || path.starts_with('<') {
            return FileClass::Generated;
        }
        if self
            .library_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
        {
            return FileClass::Library;
        }
        FileClass::Debuggee
    }
}

/// Permanent, unbounded cache of file classifications.
///
/// A file's classification is a function of its path alone and never
/// changes for the lifetime of a session, so unlike
/// [`crate::cache::code_object::CodeObjectCache`] this cache has no epoch
/// and no eviction: once a path is classified, the answer is reused for
/// every subsequent frame that touches it.
#[derive(Debug, Default)]
pub struct FileClassificationCache {
    rules: ClassificationRules,
    classified: DashMap<String, FileClass>,
}

impl FileClassificationCache {
    pub fn new(rules: ClassificationRules) -> Self {
        Self {
            rules,
            classified: DashMap::new(),
        }
    }

    pub fn classify(&self, path: &str) -> FileClass {
        if let Some(class) = self.classified.get(path) {
            return *class;
        }
        let class = self.rules.classify(path);
        self.classified.insert(path.to_string(), class);
        class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_prefix_wins_over_debuggee() {
        let cache = FileClassificationCache::new(ClassificationRules {
            library_prefixes: vec!["/usr/lib/runtime".to_string()],
        });
        assert_eq!(
            cache.classify("/usr/lib/runtime/collections.rt"),
            FileClass::Library
        );
        assert_eq!(cache.classify("/home/user/app/main.rt"), FileClass::Debuggee);
    }

    #[test]
    fn angle_bracket_paths_are_generated() {
        let cache = FileClassificationCache::new(ClassificationRules::default());
        assert_eq!(cache.classify("<eval>"), FileClass::Generated);
    }
}
