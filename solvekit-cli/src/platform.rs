//! Platform Registry
//!
//! Maps a platform identifier to the handler that knows how to feed its
//! solutions. Three input disciplines cover every supported platform:
//!
//! | Handler             | Platforms                              | Entry point gets |
//! |---------------------|----------------------------------------|------------------|
//! | `NoInputPlatform`   | ProjectEuler, LeetCode                 | nothing / test   |
//! | `FileLinesPlatform` | AdventOfCode                           | `&[String]`      |
//! | `StdinPlatform`     | Codeforces, AtCoder, SPOJ, UVa         | nothing (stdin)  |
//!
//! Inputs live at `{inputs_dir}/{Platform}/i_{Name}_{Test}.txt` and are read
//! from disk exactly once per run.

use solvekit_core::{EntryShape, HarnessError, InvocationInput, SolutionSpecifier, StdinFeed};
use std::path::{Path, PathBuf};

/// Input discipline of one platform.
///
/// The driver calls `provision_input` once, then `refresh_input` and
/// `invocation_input` around every call, and `release_input` when done,
/// whether or not the run succeeded.
pub trait PlatformHandler {
    /// Platform identifier, e.g. `AdventOfCode`
    fn id(&self) -> &'static str;

    /// Argument shape this platform passes to entry points
    fn entry_shape(&self) -> EntryShape;

    /// Load and cache the input for `spec`.
    fn provision_input(&mut self, spec: &SolutionSpecifier) -> Result<(), HarnessError>;

    /// Reinstall the cached input before an invocation.
    fn refresh_input(&mut self) -> Result<(), HarnessError> {
        Ok(())
    }

    /// Argument for the next invocation
    fn invocation_input(&self) -> InvocationInput<'_>;

    /// Drop the cached input and undo any process-wide changes.
    fn release_input(&mut self) -> Result<(), HarnessError> {
        Ok(())
    }
}

/// `{inputs_dir}/{platform}/i_{name}_{test}.txt`
pub fn input_path(inputs_dir: &Path, platform: &str, spec: &SolutionSpecifier) -> PathBuf {
    inputs_dir
        .join(platform)
        .join(format!("i_{}_{}.txt", spec.name(), spec.test()))
}

fn read_input(path: &Path) -> Result<Vec<u8>, HarnessError> {
    let bytes = std::fs::read(path).map_err(|source| HarnessError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "provisioned input");
    Ok(bytes)
}

/// Platforms without input files.
///
/// With [`EntryShape::TestSelector`] the test number is passed through so the
/// solution can pick one of its hard-coded inputs.
#[derive(Debug)]
pub struct NoInputPlatform {
    id: &'static str,
    shape: EntryShape,
    test: u8,
}

impl NoInputPlatform {
    /// Solutions take no argument
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            shape: EntryShape::NoInput,
            test: 0,
        }
    }

    /// Solutions take the test number
    pub fn with_test_selector(id: &'static str) -> Self {
        Self {
            id,
            shape: EntryShape::TestSelector,
            test: 0,
        }
    }
}

impl PlatformHandler for NoInputPlatform {
    fn id(&self) -> &'static str {
        self.id
    }

    fn entry_shape(&self) -> EntryShape {
        self.shape
    }

    fn provision_input(&mut self, spec: &SolutionSpecifier) -> Result<(), HarnessError> {
        self.test = spec.test();
        Ok(())
    }

    fn invocation_input(&self) -> InvocationInput<'_> {
        match self.shape {
            EntryShape::TestSelector => InvocationInput::Test(self.test),
            _ => InvocationInput::None,
        }
    }
}

/// Platforms whose solutions receive the input file as lines.
#[derive(Debug)]
pub struct FileLinesPlatform {
    id: &'static str,
    inputs_dir: PathBuf,
    lines: Vec<String>,
}

impl FileLinesPlatform {
    /// Create a handler reading from `inputs_dir`
    pub fn new(id: &'static str, inputs_dir: impl Into<PathBuf>) -> Self {
        Self {
            id,
            inputs_dir: inputs_dir.into(),
            lines: Vec::new(),
        }
    }
}

impl PlatformHandler for FileLinesPlatform {
    fn id(&self) -> &'static str {
        self.id
    }

    fn entry_shape(&self) -> EntryShape {
        EntryShape::Lines
    }

    fn provision_input(&mut self, spec: &SolutionSpecifier) -> Result<(), HarnessError> {
        let path = input_path(&self.inputs_dir, self.id, spec);
        let bytes = read_input(&path)?;
        let text = String::from_utf8(bytes).map_err(|e| HarnessError::InputNotFound {
            path,
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })?;
        self.lines = text.lines().map(str::to_owned).collect();
        Ok(())
    }

    fn invocation_input(&self) -> InvocationInput<'_> {
        InvocationInput::Lines(&self.lines)
    }

    fn release_input(&mut self) -> Result<(), HarnessError> {
        self.lines = Vec::new();
        Ok(())
    }
}

/// Platforms whose solutions read standard input.
///
/// The file is cached once; before every invocation the full buffer is
/// reinstalled as fd 0, rewound to the start.
#[derive(Debug)]
pub struct StdinPlatform {
    id: &'static str,
    inputs_dir: PathBuf,
    feed: Option<StdinFeed>,
}

impl StdinPlatform {
    /// Create a handler reading from `inputs_dir`
    pub fn new(id: &'static str, inputs_dir: impl Into<PathBuf>) -> Self {
        Self {
            id,
            inputs_dir: inputs_dir.into(),
            feed: None,
        }
    }
}

impl PlatformHandler for StdinPlatform {
    fn id(&self) -> &'static str {
        self.id
    }

    fn entry_shape(&self) -> EntryShape {
        EntryShape::NoInput
    }

    fn provision_input(&mut self, spec: &SolutionSpecifier) -> Result<(), HarnessError> {
        self.release_input()?;
        let bytes = read_input(&input_path(&self.inputs_dir, self.id, spec))?;
        self.feed = Some(StdinFeed::new(&bytes).map_err(HarnessError::StreamRedirect)?);
        Ok(())
    }

    fn refresh_input(&mut self) -> Result<(), HarnessError> {
        match self.feed.as_mut() {
            Some(feed) => feed.refresh().map_err(HarnessError::StreamRedirect),
            None => Ok(()),
        }
    }

    fn invocation_input(&self) -> InvocationInput<'_> {
        InvocationInput::None
    }

    fn release_input(&mut self) -> Result<(), HarnessError> {
        match self.feed.take() {
            Some(feed) => feed.release().map_err(HarnessError::StreamRedirect),
            None => Ok(()),
        }
    }
}

/// Fixed set of supported platforms
pub struct PlatformRegistry {
    handlers: Vec<Box<dyn PlatformHandler>>,
}

impl PlatformRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// The seven supported platforms, reading inputs from `inputs_dir`
    pub fn standard(inputs_dir: &Path) -> Self {
        let mut registry = Self::new();
        registry.register(FileLinesPlatform::new("AdventOfCode", inputs_dir));
        registry.register(NoInputPlatform::with_test_selector("LeetCode"));
        registry.register(NoInputPlatform::new("ProjectEuler"));
        for id in ["Codeforces", "AtCoder", "SPOJ", "UVa"] {
            registry.register(StdinPlatform::new(id, inputs_dir));
        }
        registry
    }

    /// Add a handler; a later handler with the same id replaces the earlier one.
    pub fn register(&mut self, handler: impl PlatformHandler + 'static) {
        self.handlers.retain(|h| h.id() != handler.id());
        self.handlers.push(Box::new(handler));
    }

    /// Supported identifiers, in registration order
    pub fn ids(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.id()).collect()
    }

    /// Whether `id` is supported
    pub fn contains(&self, id: &str) -> bool {
        self.handlers.iter().any(|h| h.id() == id)
    }

    /// Handler for `id`, or `UnknownPlatform`
    pub fn get_mut(&mut self, id: &str) -> Result<&mut dyn PlatformHandler, HarnessError> {
        let available = self.ids();
        match self.handlers.iter_mut().find(|h| h.id() == id) {
            Some(handler) => Ok(handler.as_mut()),
            None => Err(HarnessError::UnknownPlatform {
                name: id.to_string(),
                available,
            }),
        }
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn spec(name: &str, test: i64) -> SolutionSpecifier {
        SolutionSpecifier::new(name, test).unwrap()
    }

    #[test]
    fn input_path_follows_naming_convention() {
        let path = input_path(Path::new("inputs"), "SPOJ", &spec("p1", 3));
        assert_eq!(path, PathBuf::from("inputs/SPOJ/i_p1_3.txt"));
    }

    #[test]
    fn standard_registry_has_seven_platforms() {
        let registry = PlatformRegistry::standard(Path::new("."));
        assert_eq!(
            registry.ids(),
            vec![
                "AdventOfCode",
                "LeetCode",
                "ProjectEuler",
                "Codeforces",
                "AtCoder",
                "SPOJ",
                "UVa"
            ]
        );
        assert!(registry.contains("UVa"));
        assert!(!registry.contains("uva"));
    }

    #[test]
    fn unknown_platform_lists_alternatives() {
        let mut registry = PlatformRegistry::standard(Path::new("."));
        let err = registry.get_mut("HackerRank").map(|_| ()).unwrap_err();
        match err {
            HarnessError::UnknownPlatform { name, available } => {
                assert_eq!(name, "HackerRank");
                assert_eq!(available.len(), 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn handler_shapes() {
        let mut registry = PlatformRegistry::standard(Path::new("."));
        let expected = [
            ("AdventOfCode", EntryShape::Lines),
            ("LeetCode", EntryShape::TestSelector),
            ("ProjectEuler", EntryShape::NoInput),
            ("Codeforces", EntryShape::NoInput),
            ("SPOJ", EntryShape::NoInput),
        ];
        for (id, shape) in expected {
            assert_eq!(registry.get_mut(id).unwrap().entry_shape(), shape, "{id}");
        }
    }

    #[test]
    fn test_selector_passes_test_number() {
        let mut leetcode = NoInputPlatform::with_test_selector("LeetCode");
        leetcode.provision_input(&spec("p1", 7)).unwrap();
        assert!(matches!(leetcode.invocation_input(), InvocationInput::Test(7)));

        let mut euler = NoInputPlatform::new("ProjectEuler");
        euler.provision_input(&spec("p1", 7)).unwrap();
        assert!(matches!(euler.invocation_input(), InvocationInput::None));
    }

    #[test]
    fn file_lines_are_cached() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("AdventOfCode")).unwrap();
        let path = dir.path().join("AdventOfCode/i_d01_0.txt");
        std::fs::write(&path, "(()\r\n))(\n\nlast").unwrap();

        let mut aoc = FileLinesPlatform::new("AdventOfCode", dir.path());
        aoc.provision_input(&spec("d01", 0)).unwrap();

        // Removing the file does not matter once provisioned.
        std::fs::remove_file(&path).unwrap();
        aoc.refresh_input().unwrap();
        match aoc.invocation_input() {
            InvocationInput::Lines(lines) => assert_eq!(lines, ["(()", "))(", "", "last"]),
            other => panic!("unexpected input: {other:?}"),
        }
    }

    #[test]
    fn missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut aoc = FileLinesPlatform::new("AdventOfCode", dir.path());
        let err = aoc.provision_input(&spec("d01", 4)).unwrap_err();
        match err {
            HarnessError::InputNotFound { path, .. } => {
                assert_eq!(path, dir.path().join("AdventOfCode/i_d01_4.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let mut spoj = StdinPlatform::new("SPOJ", dir.path());
        assert!(matches!(
            spoj.provision_input(&spec("p1", 0)),
            Err(HarnessError::InputNotFound { .. })
        ));
    }

    #[test]
    fn stdin_is_replayed_on_every_refresh() {
        let _guard = crate::FD_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("SPOJ")).unwrap();
        std::fs::write(dir.path().join("SPOJ/i_p1_0.txt"), "1\n2\n42\n").unwrap();

        let mut spoj = StdinPlatform::new("SPOJ", dir.path());
        spoj.provision_input(&spec("p1", 0)).unwrap();

        for _ in 0..3 {
            spoj.refresh_input().unwrap();
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).unwrap();
            assert_eq!(text, "1\n2\n42\n");
        }

        spoj.release_input().unwrap();
        // Releasing twice is harmless.
        spoj.release_input().unwrap();
    }
}
