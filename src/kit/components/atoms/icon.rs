// Icon and loading spinner for FormCraft

use crate::component::{Component, ComponentError, Context, Node};
use crate::kit::theme::{Color, Size};
use crate::kit::utils::join_classes;

/// Icon props
#[derive(Debug, Clone, Default)]
pub struct IconProps {
    /// Glyph markup, usually an `svg` node
    pub content: Option<Node>,
    pub size: Size,
    /// `None` inherits the surrounding text color
    pub color: Option<Color>,
    /// Accessible name; unlabelled icons are decorative
    pub aria_label: Option<String>,
    pub class: Option<String>,
}

/// Sized, colored wrapper around a glyph
#[derive(Debug)]
pub struct Icon {
    props: IconProps,
}

impl Component for Icon {
    type Props = IconProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        Ok(vec![Node::element("span")
            .class(join_classes([
                "inline-flex items-center justify-center",
                props.size.icon_class(),
                props.color.map_or("text-inherit", Color::text_class),
                props.class.as_deref().unwrap_or_default(),
            ]))
            .attr_opt("aria-label", props.aria_label.clone())
            .attr_opt("role", props.aria_label.as_ref().map(|_| "img"))
            .child_opt(props.content.clone())])
    }
}

/// Spinner props
#[derive(Debug, Clone)]
pub struct LoadingSpinnerProps {
    pub size: Size,
    pub color: Color,
    /// Render white, for use on filled buttons
    pub on_dark: bool,
    pub aria_label: String,
    pub class: Option<String>,
}

impl Default for LoadingSpinnerProps {
    fn default() -> Self {
        Self {
            size: Size::Md,
            color: Color::Primary,
            on_dark: false,
            aria_label: "Loading".to_string(),
            class: None,
        }
    }
}

/// Animated progress indicator
#[derive(Debug)]
pub struct LoadingSpinner {
    props: LoadingSpinnerProps,
}

impl LoadingSpinner {
    /// The spinner glyph with arbitrary classes, shared with buttons
    pub fn svg(class: &str) -> Node {
        Node::element("svg")
            .class(class)
            .attr("fill", "none")
            .attr("viewBox", "0 0 24 24")
            .child(
                Node::element("circle")
                    .class("opacity-25")
                    .attr("cx", "12")
                    .attr("cy", "12")
                    .attr("r", "10")
                    .attr("stroke", "currentColor")
                    .attr("stroke-width", "4"),
            )
            .child(
                Node::element("path")
                    .class("opacity-75")
                    .attr("fill", "currentColor")
                    .attr("d", "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"),
            )
    }
}

impl Component for LoadingSpinner {
    type Props = LoadingSpinnerProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let color = if props.on_dark {
            "text-white"
        } else {
            props.color.text_class()
        };
        let mut svg = Self::svg(&join_classes([
            "animate-spin",
            props.size.icon_class(),
            color,
            props.class.as_deref().unwrap_or_default(),
        ]));
        svg.set_attribute("role", "status");
        svg.set_attribute("aria-label", props.aria_label.as_str());
        Ok(vec![svg])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_inherits_color() {
        let icon = Icon::create(IconProps::default(), Context::new());
        let node = icon.render().unwrap().remove(0);
        assert!(node.has_class("text-inherit"));
        assert!(node.has_class("h-5"));
        assert!(!node.has_attribute("role"));
    }

    #[test]
    fn test_labelled_icon_is_img() {
        let icon = Icon::create(
            IconProps {
                color: Some(Color::Danger),
                aria_label: Some("Error".to_string()),
                ..Default::default()
            },
            Context::new(),
        );
        let node = icon.render().unwrap().remove(0);
        assert_eq!(node.attribute("role"), Some("img"));
        assert!(node.has_class("text-red-600"));
    }

    #[test]
    fn test_spinner_status() {
        let spinner = LoadingSpinner::create(
            LoadingSpinnerProps {
                size: Size::Xl,
                ..Default::default()
            },
            Context::new(),
        );
        let node = spinner.render().unwrap().remove(0);
        assert_eq!(node.attribute("role"), Some("status"));
        assert_eq!(node.attribute("aria-label"), Some("Loading"));
        assert!(node.has_class("animate-spin"));
        assert!(node.has_class("h-8"));
    }
}
