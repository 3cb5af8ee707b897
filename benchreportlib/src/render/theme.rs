//! Semantic style tags and the theme that maps them to terminal styles.

use console::Style;

use crate::config::ColorChoice;

/// Semantic tag attached to each piece of non-table output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    /// Report title and its underline
    Title,
    /// Table title
    Subtitle,
    /// Report description
    Description,
}

/// Styles for each [`StyleTag`], passed to the renderer at construction.
#[derive(Debug, Clone)]
pub struct Theme {
    title: Style,
    subtitle: Style,
    description: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Default theme; styling follows terminal detection.
    pub fn new() -> Self {
        Self {
            title: Style::new().white().bold(),
            subtitle: Style::new().white(),
            description: Style::new(),
        }
    }

    /// Default theme without any escape codes, whatever the terminal.
    pub fn plain() -> Self {
        Self::new().force_styling(false)
    }

    /// Theme matching a `--color` choice.
    pub fn for_choice(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::new(),
            ColorChoice::Always => Self::new().force_styling(true),
            ColorChoice::Never => Self::plain(),
        }
    }

    /// Builder: replace the style for a tag
    pub fn with_style(mut self, tag: StyleTag, style: Style) -> Self {
        match tag {
            StyleTag::Title => self.title = style,
            StyleTag::Subtitle => self.subtitle = style,
            StyleTag::Description => self.description = style,
        }
        self
    }

    /// Builder: force styling on or off for every tag
    pub fn force_styling(self, enabled: bool) -> Self {
        Self {
            title: self.title.force_styling(enabled),
            subtitle: self.subtitle.force_styling(enabled),
            description: self.description.force_styling(enabled),
        }
    }

    pub fn style(&self, tag: StyleTag) -> &Style {
        match tag {
            StyleTag::Title => &self.title,
            StyleTag::Subtitle => &self.subtitle,
            StyleTag::Description => &self.description,
        }
    }

    /// Render `text` with the style for `tag`.
    pub fn paint(&self, tag: StyleTag, text: &str) -> String {
        self.style(tag).apply_to(text).to_string()
    }
}
