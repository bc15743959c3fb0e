//! Long-form text segmentation.
//!
//! Blog bodies are plain text with blank-line separated blocks:
//!
//! ```text
//! # Heading          -> Heading1 "Heading"
//!
//! ## Subheading      -> Heading2 "Subheading"
//!
//! Anything else      -> Paragraph (verbatim)
//! ```

/// Kind of a segmented block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading1,
    Heading2,
    Paragraph,
}

/// One classified unit of segmented text, borrowing from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub text: &'a str,
}

impl<'a> Block<'a> {
    const fn new(kind: BlockKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    fn classify(block: &'a str) -> Self {
        if let Some(text) = block.strip_prefix("# ") {
            Self::new(BlockKind::Heading1, text)
        } else if let Some(text) = block.strip_prefix("## ") {
            Self::new(BlockKind::Heading2, text)
        } else {
            Self::new(BlockKind::Paragraph, block)
        }
    }
}

/// Split `text` into blocks, lazily and in source order.
///
/// Whitespace-only blocks are skipped; paragraph text is not trimmed.
pub fn segments(text: &str) -> impl Iterator<Item = Block<'_>> {
    text.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(Block::classify)
}

#[cfg(test)]
mod tests {
    use super::*;
    use BlockKind::*;

    fn collect(text: &str) -> Vec<(BlockKind, &str)> {
        segments(text).map(|b| (b.kind, b.text)).collect()
    }

    #[test]
    fn test_headings_and_paragraphs() {
        assert_eq!(
            collect("# Title\n\nBody text\n\n## Sub\n\nMore text"),
            [
                (Heading1, "Title"),
                (Paragraph, "Body text"),
                (Heading2, "Sub"),
                (Paragraph, "More text"),
            ]
        );
    }

    #[test]
    fn test_single_block_without_separator() {
        assert_eq!(collect("## Only\nline two"), [(Heading2, "Only\nline two")]);
        assert_eq!(collect("just text"), [(Paragraph, "just text")]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(collect("").is_empty());
        assert!(collect("\n\n\n\n   \n\n").is_empty());
    }

    #[test]
    fn test_prefix_requires_space() {
        assert_eq!(
            collect("#hashtag\n\n###  Deep"),
            [(Paragraph, "#hashtag"), (Paragraph, "###  Deep")]
        );
    }

    #[test]
    fn test_paragraph_kept_verbatim() {
        // Three newlines leave a leading newline on the next block
        assert_eq!(
            collect("First\n\n\nSecond  "),
            [(Paragraph, "First"), (Paragraph, "\nSecond  ")]
        );
    }

    #[test]
    fn test_only_leading_prefix_stripped() {
        assert_eq!(collect("# A # B"), [(Heading1, "A # B")]);
    }
}
