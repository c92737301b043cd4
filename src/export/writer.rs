//! Markup fragment assembly.

/// Accumulates exported templates as one markup fragment.
#[derive(Debug, Clone, Default)]
pub struct FragmentWriter {
    buf: String,
}

impl FragmentWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `<!--text-->` on its own line.
    ///
    /// `--` may not appear inside a comment, so runs of dashes are split.
    pub fn write_comment(&mut self, text: &str) {
        let mut body = text.to_string();
        while body.contains("--") {
            body = body.replace("--", "- -");
        }
        if body.ends_with('-') {
            body.push(' ');
        }
        self.buf.push_str("<!--");
        self.buf.push_str(&body);
        self.buf.push_str("-->\n");
    }

    /// Append a markup element, trimmed, followed by a newline.
    pub fn write_markup(&mut self, markup: &str) {
        self.buf.push_str(markup.trim());
        self.buf.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_then_markup() {
        let mut w = FragmentWriter::new();
        assert_eq!(w.as_str(), "");
        w.write_comment("  Ui.Button, Framework  ");
        w.write_markup("\n  <Style TargetType=\"Button\" />  \n");
        assert_eq!(
            w.as_str(),
            "<!--  Ui.Button, Framework  -->\n<Style TargetType=\"Button\" />\n"
        );
    }

    #[test]
    fn comment_never_contains_double_dash() {
        let mut w = FragmentWriter::new();
        w.write_comment("a---b-");
        let text = w.as_str();
        let inner = &text["<!--".len()..text.len() - "-->\n".len()];
        assert!(!inner.contains("--"));
        assert!(!inner.ends_with('-'));
    }
}
