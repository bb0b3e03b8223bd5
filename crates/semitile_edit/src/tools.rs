//! Tool definitions for tile editing

use serde::{Deserialize, Serialize};

/// Available drawing tools. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Set single pixels, one undo step per sampled point
    #[default]
    Pencil,
    /// Flood fill the 4-connected region under the pointer
    Fill,
    /// Draw a straight line from press to release
    Line,
    /// Draw a filled rectangle spanning press and release
    Rectangle,
}

/// All tools in toolbar order
pub const ALL_TOOLS: [Tool; 4] = [Tool::Pencil, Tool::Fill, Tool::Line, Tool::Rectangle];

impl Tool {
    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Fill => "Fill",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
        }
    }

    /// Get the keyboard shortcut
    pub fn shortcut(&self) -> char {
        match self {
            Tool::Pencil => 'p',
            Tool::Fill => 'f',
            Tool::Line => 'l',
            Tool::Rectangle => 'r',
        }
    }

    /// Look up a tool by its keyboard shortcut (case insensitive)
    pub fn from_shortcut(key: char) -> Option<Tool> {
        let key = key.to_ascii_lowercase();
        ALL_TOOLS.into_iter().find(|tool| tool.shortcut() == key)
    }

    /// Shape tools record the press position and emit one command on release
    pub fn is_shape_tool(&self) -> bool {
        matches!(self, Tool::Line | Tool::Rectangle)
    }

    /// Check if this tool draws while the pointer moves
    pub fn needs_drag(&self) -> bool {
        matches!(self, Tool::Pencil)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
