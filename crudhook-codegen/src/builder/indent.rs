//! Indentation configuration for code generation.

/// Indentation of one nesting level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(usize);

impl Indent {
    /// 2-space indentation (TypeScript, JavaScript).
    pub const TYPESCRIPT: Self = Self::spaces(2);

    pub const fn spaces(width: usize) -> Self {
        Self(width)
    }

    /// Number of spaces per level.
    pub fn width(&self) -> usize {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}
