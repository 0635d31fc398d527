// File: crates/marquee-core/src/text.rs
// Summary: Detected-text model: words, lines, paragraphs in document order.

use serde::{Deserialize, Serialize};

use crate::geometry::CenterRotatedBox;

/// One detected word: its rotated bounding box plus the host-supplied text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub bounding_box: CenterRotatedBox,
    pub text: String,
}

impl Word {
    pub fn new(bounding_box: CenterRotatedBox, text: impl Into<String>) -> Self {
        Self { bounding_box, text: text.into() }
    }
}

/// An ordered run of words on one visual line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub words: Vec<Word>,
}

/// Ordered lines forming one paragraph.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub lines: Vec<Line>,
}

/// The full detected-text structure for one image. Paragraph, line, and
/// word order together define document order, the iteration order used for
/// contiguous-run matching.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextLayout {
    pub paragraphs: Vec<Paragraph>,
}

impl TextLayout {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// All words flattened to document order.
    pub fn words(&self) -> Vec<&Word> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.lines.iter())
            .flat_map(|l| l.words.iter())
            .collect()
    }

    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .flat_map(|p| p.lines.iter())
            .map(|l| l.words.len())
            .sum()
    }
}
