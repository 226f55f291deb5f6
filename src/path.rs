use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

/// Path value type: keeps segment structure while round-tripping the
/// original shape (leading and trailing slashes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
    absolute: bool,
    trailing_slash: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path segments between slashes. Interior empty segments (from
    /// `//` runs) are preserved.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Append one segment to the end of the path.
    pub fn push_segment(&mut self, segment: &str) -> &mut Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && !self.absolute
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            return Self::default();
        }
        let absolute = value.starts_with('/');
        let trailing_slash = value.len() > 1 && value.ends_with('/');
        let trimmed = value.trim_matches('/');
        let segments = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').map(str::to_string).collect()
        };
        Self {
            segments,
            absolute,
            trailing_slash,
        }
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            f.write_str("/")?;
        }
        f.write_str(&self.segments.join("/"))?;
        if self.trailing_slash && !self.segments.is_empty() {
            f.write_str("/")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for input in ["/about", "/a/b/c", "a/b", "/", "", "/a/b/", "/a//b"] {
            assert_eq!(Path::from(input).to_string(), input);
        }
    }

    #[test]
    fn test_segments() {
        let path = Path::from("/audio/albums/the_mashening");
        assert_eq!(path.segments(), ["audio", "albums", "the_mashening"]);
        assert!(path.is_absolute());
        assert!(!path.has_trailing_slash());
    }

    #[test]
    fn test_push_segment() {
        let mut path = Path::from("/a");
        path.push_segment("b").push_segment("c");
        assert_eq!(path.to_string(), "/a/b/c");
    }

    #[test]
    fn test_empty_and_root() {
        assert!(Path::from("").is_empty());
        let root = Path::from("/");
        assert!(!root.is_empty());
        assert!(root.segments().is_empty());
        assert_eq!(root.to_string(), "/");
    }
}
