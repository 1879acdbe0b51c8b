// Shared design variants for FormCraft
//
// Components style themselves through lookup tables keyed by these enums.

use serde::{Deserialize, Serialize};

/// Semantic color of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Primary,
    Secondary,
    Gray,
    Success,
    Danger,
    Warning,
    Info,
}

impl Color {
    /// Tailwind palette name behind this color
    pub fn palette(self) -> &'static str {
        match self {
            Color::Primary => "primary",
            Color::Secondary | Color::Gray => "gray",
            Color::Success => "green",
            Color::Danger => "red",
            Color::Warning => "yellow",
            Color::Info => "blue",
        }
    }

    /// Foreground text class used by icons, hints and spinners
    pub fn text_class(self) -> &'static str {
        match self {
            Color::Primary => "text-primary-600 dark:text-primary-400",
            Color::Secondary => "text-gray-600 dark:text-gray-400",
            Color::Gray => "text-gray-500 dark:text-gray-400",
            Color::Success => "text-green-600 dark:text-green-400",
            Color::Danger => "text-red-600 dark:text-red-400",
            Color::Warning => "text-yellow-600 dark:text-yellow-400",
            Color::Info => "text-blue-600 dark:text-blue-400",
        }
    }

    /// Soft background used behind icons in headers and empty states
    pub fn soft_background_class(self) -> &'static str {
        match self {
            Color::Primary => "bg-primary-100 dark:bg-primary-500/20",
            Color::Secondary | Color::Gray => "bg-gray-100 dark:bg-gray-500/20",
            Color::Success => "bg-green-100 dark:bg-green-500/20",
            Color::Danger => "bg-red-100 dark:bg-red-500/20",
            Color::Warning => "bg-yellow-100 dark:bg-yellow-500/20",
            Color::Info => "bg-blue-100 dark:bg-blue-500/20",
        }
    }
}

/// T-shirt size of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Size {
    /// Square icon dimensions
    pub fn icon_class(self) -> &'static str {
        match self {
            Size::Xs => "h-3 w-3",
            Size::Sm => "h-4 w-4",
            Size::Md => "h-5 w-5",
            Size::Lg => "h-6 w-6",
            Size::Xl => "h-8 w-8",
        }
    }
}

/// Side of an anchor element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Start,
    #[default]
    Center,
    End,
}

impl Alignment {
    /// Flexbox justification class
    pub fn justify_class(self) -> &'static str {
        match self {
            Alignment::Start => "justify-start",
            Alignment::Center => "justify-center",
            Alignment::End => "justify-end",
        }
    }

    /// Text alignment class
    pub fn text_class(self) -> &'static str {
        match self {
            Alignment::Start => "text-start",
            Alignment::Center => "text-center",
            Alignment::End => "text-end",
        }
    }
}

/// Layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tables() {
        assert_eq!(Color::Danger.palette(), "red");
        assert!(Color::Info.text_class().starts_with("text-blue-600"));
        assert_eq!(Color::default(), Color::Primary);
    }

    #[test]
    fn test_serde_names() {
        let color: Color = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(color, Color::Warning);
        assert_eq!(serde_json::to_string(&Size::Xl).unwrap(), "\"xl\"");
    }
}
