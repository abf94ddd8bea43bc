//! The `FsPath` value type: a filesystem path stored as one normalized
//! string.
//!
//! ### Key Features:
//! - **Separator canonicalization**: both `/` and `\` are accepted on input
//!   and rewritten to the host separator at construction time.
//! - **No trailing separator**: trailing separators are stripped; a path made
//!   only of separators normalizes to the empty path.
//! - **Plain value semantics**: cloneable, comparable, hashable, orderable;
//!   no handle to anything outside the string.
//!
//! Every operation that produces a new path goes back through construction,
//! so the invariants hold on derived values too. That is what lets `parent`,
//! `file_name` and `extension` be simple last-separator / last-dot searches.

use std::fmt;
use std::ops::{Add, Div};
use std::path::Path;

/// A normalized string-based representation of a filesystem location.
///
/// ### Example:
/// ```
/// use path_kit::FsPath;
///
/// let p = FsPath::new("assets") / FsPath::new("shaders/");
/// assert_eq!(p.file_name(), "shaders");
/// assert!(p.parent() == "assets");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FsPath(String);

impl FsPath {
    /// The canonical separator of the target platform.
    #[cfg(windows)]
    pub const SEPARATOR: char = '\\';
    #[cfg(not(windows))]
    pub const SEPARATOR: char = '/';

    #[cfg(windows)]
    const SEPARATOR_STR: &'static str = "\\";
    #[cfg(not(windows))]
    const SEPARATOR_STR: &'static str = "/";

    #[cfg(windows)]
    const FOREIGN_SEPARATOR: char = '/';
    #[cfg(not(windows))]
    const FOREIGN_SEPARATOR: char = '\\';

    /// Creates a path from a raw string, normalizing it: every occurrence of
    /// either slash style becomes [`Self::SEPARATOR`], then all trailing
    /// separators are stripped.
    pub fn new<S: Into<String>>(raw: S) -> Self {
        let mut s = raw.into();
        if s.contains(Self::FOREIGN_SEPARATOR) {
            s = s.replace(Self::FOREIGN_SEPARATOR, Self::SEPARATOR_STR);
        }
        while s.ends_with(Self::SEPARATOR) {
            s.pop();
        }
        FsPath(s)
    }

    /// The normalized internal string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the containing directory of this path: everything before the
    /// last separator. A path with no separator has an empty parent.
    pub fn parent(&self) -> FsPath {
        match self.0.rfind(Self::SEPARATOR) {
            Some(pos) => FsPath::new(&self.0[..pos]),
            None => FsPath::default(),
        }
    }

    /// Returns the final component: everything after the last separator, or
    /// the whole string when no separator is present.
    pub fn file_name(&self) -> &str {
        match self.0.rfind(Self::SEPARATOR) {
            Some(pos) => &self.0[pos + 1..],
            None => &self.0,
        }
    }

    /// Returns the extension including its leading dot (`".gz"`), or an empty
    /// string when there is no dot or the only dot is the very first
    /// character (so `".hidden"` has no extension).
    pub fn extension(&self) -> &str {
        match self.0.rfind('.') {
            None | Some(0) => "",
            Some(pos) => &self.0[pos..],
        }
    }

    /// Byte-exact trailing match on the normalized string. Not
    /// separator-aware; an empty `suffix` always matches.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }

    /// Returns `self + "." + ext`. Not idempotent: calling it twice
    /// accumulates two segments (`a` -> `a.txt` -> `a.txt.txt`).
    pub fn add_extension(&self, ext: &str) -> FsPath {
        FsPath::new(format!("{}.{}", self.0, ext))
    }

    /// Appends `other` as a child of `self`.
    ///
    /// If `self` is empty the result is `other`; an empty `other` leaves
    /// `self` unchanged; otherwise exactly one separator is inserted, unless
    /// `other` already starts with one.
    pub fn push(&mut self, other: &FsPath) {
        if self.0.is_empty() {
            self.0.clone_from(&other.0);
        } else if !other.0.is_empty() {
            if !other.0.starts_with(Self::SEPARATOR) {
                self.0.push(Self::SEPARATOR);
            }
            self.0.push_str(&other.0);
        }
    }

    /// Non-mutating [`push`](Self::push); also available as the `/` operator.
    pub fn join(&self, other: &FsPath) -> FsPath {
        let mut joined = self.clone();
        joined.push(other);
        joined
    }

    /// Raw string concatenation of the two normalized forms, with no
    /// separator inserted; also available as the `+` operator.
    pub fn concat(&self, other: &FsPath) -> FsPath {
        FsPath::new(format!("{}{}", self.0, other.0))
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FsPath {
    fn from(raw: &str) -> Self {
        FsPath::new(raw)
    }
}

impl From<String> for FsPath {
    fn from(raw: String) -> Self {
        FsPath::new(raw)
    }
}

impl AsRef<str> for FsPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for FsPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

// Comparisons against raw strings normalize the raw side first, so
// `FsPath::new("a/b") == "a\\b"` holds on every platform.

impl PartialEq<str> for FsPath {
    fn eq(&self, other: &str) -> bool {
        *self == FsPath::new(other)
    }
}

impl PartialEq<&str> for FsPath {
    fn eq(&self, other: &&str) -> bool {
        *self == FsPath::new(*other)
    }
}

impl PartialEq<String> for FsPath {
    fn eq(&self, other: &String) -> bool {
        *self == FsPath::new(other.as_str())
    }
}

impl PartialEq<FsPath> for str {
    fn eq(&self, other: &FsPath) -> bool {
        other == self
    }
}

impl PartialEq<FsPath> for &str {
    fn eq(&self, other: &FsPath) -> bool {
        other == self
    }
}

impl PartialEq<FsPath> for String {
    fn eq(&self, other: &FsPath) -> bool {
        other == self
    }
}

impl Div for FsPath {
    type Output = FsPath;

    fn div(mut self, rhs: FsPath) -> FsPath {
        self.push(&rhs);
        self
    }
}

impl Div<&FsPath> for &FsPath {
    type Output = FsPath;

    fn div(self, rhs: &FsPath) -> FsPath {
        self.join(rhs)
    }
}

impl Div<&str> for FsPath {
    type Output = FsPath;

    fn div(self, rhs: &str) -> FsPath {
        self / FsPath::new(rhs)
    }
}

impl Add for FsPath {
    type Output = FsPath;

    fn add(self, rhs: FsPath) -> FsPath {
        self.concat(&rhs)
    }
}

impl Add<&FsPath> for &FsPath {
    type Output = FsPath;

    fn add(self, rhs: &FsPath) -> FsPath {
        self.concat(rhs)
    }
}

impl Add<&str> for FsPath {
    type Output = FsPath;

    fn add(self, rhs: &str) -> FsPath {
        self.concat(&FsPath::new(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEP: char = FsPath::SEPARATOR;

    /// Joins segments with the platform separator, so expectations hold on
    /// both Unix and Windows.
    fn sep_join(segments: &[&str]) -> String {
        segments.join(&SEP.to_string())
    }

    mod normalize {
        use super::*;

        #[test]
        fn test_mixed_separators_canonicalized() {
            let p = FsPath::new("a/b\\c");
            assert_eq!(p.as_str(), sep_join(&["a", "b", "c"]));
        }

        #[test]
        fn test_trailing_separators_stripped() {
            assert_eq!(FsPath::new("a/b///").as_str(), sep_join(&["a", "b"]));
            assert_eq!(FsPath::new("a\\").as_str(), "a");
        }

        #[test]
        fn test_only_separators_becomes_empty() {
            assert!(FsPath::new("/").is_empty());
            assert!(FsPath::new("\\\\").is_empty());
        }

        #[test]
        fn test_empty_stays_empty() {
            assert!(FsPath::new("").is_empty());
            assert!(FsPath::default().is_empty());
        }

        #[test]
        fn test_normalization_is_fixed_point() {
            let p = FsPath::new("a\\b/c//");
            let again = FsPath::new(p.as_str());
            assert_eq!(p, again);
        }

        #[test]
        fn test_inner_doubled_separators_kept() {
            // Only trailing separators are stripped; doubled inner
            // separators pass through verbatim.
            let p = FsPath::new("a//b");
            let expect: String = ["a", "", "b"].join(&SEP.to_string());
            assert_eq!(p.as_str(), expect);
        }
    }

    mod decompose {
        use super::*;

        #[test]
        fn test_parent_of_nested_path() {
            let p = FsPath::new("a/b/c");
            assert_eq!(p.parent(), FsPath::new("a/b"));
        }

        #[test]
        fn test_parent_without_separator_is_empty() {
            assert!(FsPath::new("alone").parent().is_empty());
        }

        #[test]
        fn test_parent_of_root_child_is_empty() {
            assert!(FsPath::new("/a").parent().is_empty());
        }

        #[test]
        fn test_parent_renormalizes_doubled_separator() {
            // "a//b" -> cut at the last separator leaves "a/", which must
            // lose its trailing separator again.
            assert_eq!(FsPath::new("a//b").parent(), FsPath::new("a"));
        }

        #[test]
        fn test_file_name_of_nested_path() {
            assert_eq!(FsPath::new("a/b/c.txt").file_name(), "c.txt");
        }

        #[test]
        fn test_file_name_without_separator_is_whole_string() {
            assert_eq!(FsPath::new("alone").file_name(), "alone");
        }
    }

    mod extension {
        use super::*;

        #[test]
        fn test_last_dot_wins() {
            assert_eq!(FsPath::new("a.b.c").extension(), ".c");
            assert_eq!(FsPath::new("archive.tar.gz").extension(), ".gz");
        }

        #[test]
        fn test_hidden_file_has_no_extension() {
            assert_eq!(FsPath::new(".hidden").extension(), "");
        }

        #[test]
        fn test_no_dot_no_extension() {
            assert_eq!(FsPath::new("noext").extension(), "");
            assert_eq!(FsPath::new("").extension(), "");
        }

        #[test]
        fn test_add_extension_is_not_idempotent() {
            let p = FsPath::new("a").add_extension("txt").add_extension("txt");
            assert_eq!(p, FsPath::new("a.txt.txt"));
        }

        #[test]
        fn test_add_extension_on_path_with_extension() {
            assert_eq!(
                FsPath::new("report.md").add_extension("bak"),
                FsPath::new("report.md.bak")
            );
        }

        #[test]
        fn test_ends_with() {
            let p = FsPath::new("scene.obj");
            assert!(p.ends_with(".obj"));
            assert!(p.ends_with("scene.obj"));
            assert!(!p.ends_with(".mtl"));
        }

        #[test]
        fn test_ends_with_empty_suffix_always_true() {
            assert!(FsPath::new("anything").ends_with(""));
            assert!(FsPath::new("").ends_with(""));
        }
    }

    mod concat {
        use super::*;

        #[test]
        fn test_join_empty_lhs_yields_rhs() {
            assert_eq!(FsPath::new("") / FsPath::new("x"), FsPath::new("x"));
        }

        #[test]
        fn test_join_empty_rhs_yields_lhs() {
            assert_eq!(FsPath::new("a") / FsPath::new(""), FsPath::new("a"));
        }

        #[test]
        fn test_join_inserts_one_separator() {
            let p = FsPath::new("a") / FsPath::new("b");
            assert_eq!(p.as_str(), sep_join(&["a", "b"]));
        }

        #[test]
        fn test_join_does_not_double_separator() {
            assert_eq!(
                FsPath::new("a") / FsPath::new("/b"),
                FsPath::new("a") / FsPath::new("b")
            );
        }

        #[test]
        fn test_join_by_reference_and_str() {
            let a = FsPath::new("a");
            let b = FsPath::new("b");
            assert_eq!(&a / &b, a.clone() / "b");
            assert_eq!(a.join(&b), FsPath::new("a/b"));
        }

        #[test]
        fn test_push_mutates_in_place() {
            let mut p = FsPath::new("root");
            p.push(&FsPath::new("leaf"));
            assert_eq!(p, FsPath::new("root/leaf"));
        }

        #[test]
        fn test_concat_is_raw() {
            assert_eq!(FsPath::new("a") + FsPath::new("b"), FsPath::new("ab"));
            assert_eq!(&FsPath::new("a") + &FsPath::new("/b"), FsPath::new("a/b"));
            assert_eq!(FsPath::new("lib") + ".rs", FsPath::new("lib.rs"));
        }
    }

    mod compare {
        use super::*;

        #[test]
        fn test_eq_against_raw_string_normalizes() {
            let p = FsPath::new("a/b");
            assert_eq!(p, "a\\b");
            assert_eq!("a\\b", p);
            assert_eq!(p, String::from("a/b/"));
        }

        #[test]
        fn test_ne_is_symmetric() {
            let p = FsPath::new("a/b");
            assert!(p != "a/c");
            assert!("a/c" != p);
        }

        #[test]
        fn test_display_renders_normalized_form() {
            let p = FsPath::new("a/b/");
            assert_eq!(format!("{}", p), sep_join(&["a", "b"]));
        }
    }
}
