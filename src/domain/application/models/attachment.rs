/// File name the PDF is attached under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentName(String);

impl AttachmentName {
    pub const DEFAULT: &'static str = "Ameristar_Application.pdf";

    /// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
    /// A missing or blank name falls back to [`AttachmentName::DEFAULT`].
    pub fn parse(file_name: Option<&str>) -> AttachmentName {
        match file_name {
            Some(name) if !name.trim().is_empty() => Self(
                name.chars()
                    .map(|c| if is_allowed(c) { c } else { '_' })
                    .collect(),
            ),
            _ => Self::default(),
        }
    }
}

impl Default for AttachmentName {
    fn default() -> Self {
        Self(AttachmentName::DEFAULT.to_string())
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

impl AsRef<str> for AttachmentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttachmentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
