// Label, helper, error and hint text for FormCraft fields

use crate::component::{render_child, Component, ComponentError, Context, Node};
use crate::kit::components::atoms::tooltip::{Tooltip, TooltipProps};
use crate::kit::theme::{Color, Position};
use crate::kit::utils::join_classes;

/// Label props
#[derive(Debug, Clone, Default)]
pub struct LabelProps {
    /// Label text
    pub text: String,
    /// Id of the labelled control
    pub html_for: Option<String>,
    /// Show the required marker
    pub required: bool,
    /// Visually hidden, still announced
    pub sr_only: bool,
    /// Extra classes
    pub class: Option<String>,
}

/// Field label with an optional required marker
#[derive(Debug)]
pub struct Label {
    props: LabelProps,
}

impl Component for Label {
    type Props = LabelProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let marker = props.required.then(|| {
            Node::element("sup")
                .class("ml-1 text-red-600 dark:text-red-400")
                .child(Node::text("*"))
        });

        Ok(vec![Node::element("label")
            .attr_opt("for", props.html_for.clone())
            .class(join_classes([
                "block text-sm font-medium text-gray-950 dark:text-white",
                if props.sr_only { "sr-only" } else { "" },
                props.class.as_deref().unwrap_or_default(),
            ]))
            .child(
                Node::element("span")
                    .class("inline-block")
                    .child(Node::text(&props.text))
                    .child_opt(marker),
            )])
    }
}

/// Helper text props
#[derive(Debug, Clone, Default)]
pub struct HelperTextProps {
    pub text: String,
    pub class: Option<String>,
}

/// Muted explanatory text under a field
#[derive(Debug)]
pub struct HelperText {
    props: HelperTextProps,
}

impl Component for HelperText {
    type Props = HelperTextProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        Ok(vec![Node::element("p")
            .class(join_classes([
                "mt-1 text-sm text-gray-600 dark:text-gray-400",
                self.props.class.as_deref().unwrap_or_default(),
            ]))
            .child(Node::text(&self.props.text))])
    }
}

/// Error text props
#[derive(Debug, Clone, Default)]
pub struct ErrorTextProps {
    pub text: String,
    /// Element id, referenced by the control's `aria-describedby`
    pub id: Option<String>,
    pub class: Option<String>,
}

/// Validation message announced as an alert
#[derive(Debug)]
pub struct ErrorText {
    props: ErrorTextProps,
}

impl Component for ErrorText {
    type Props = ErrorTextProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        Ok(vec![Node::element("p")
            .attr_opt("id", self.props.id.clone())
            .class(join_classes([
                "mt-1 text-sm text-red-600 dark:text-red-400",
                self.props.class.as_deref().unwrap_or_default(),
            ]))
            .attr("role", "alert")
            .child(Node::text(&self.props.text))])
    }
}

/// Hint props
#[derive(Debug, Clone)]
pub struct HintProps {
    pub text: Option<String>,
    pub icon: Option<Node>,
    /// Tooltip shown for the icon
    pub icon_tooltip: Option<String>,
    pub color: Color,
    pub class: Option<String>,
}

impl Default for HintProps {
    fn default() -> Self {
        Self {
            text: None,
            icon: None,
            icon_tooltip: None,
            color: Color::Gray,
            class: None,
        }
    }
}

/// Inline hint placed next to a label
#[derive(Debug)]
pub struct Hint {
    props: HintProps,
    context: Context,
}

impl Hint {
    fn icon_class(color: Color) -> &'static str {
        match color {
            Color::Primary => "text-primary-500 dark:text-primary-400",
            Color::Danger => "text-red-500 dark:text-red-400",
            Color::Info => "text-blue-500 dark:text-blue-400",
            Color::Success => "text-green-500 dark:text-green-400",
            Color::Warning => "text-yellow-500 dark:text-yellow-400",
            Color::Gray | Color::Secondary => "text-gray-400 dark:text-gray-500",
        }
    }
}

impl Component for Hint {
    type Props = HintProps;

    fn create(props: Self::Props, context: Context) -> Self {
        Self { props, context }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let text_color = match props.color {
            Color::Gray | Color::Secondary => "text-gray-600 dark:text-gray-400",
            other => other.text_class(),
        };

        let text = props.text.as_ref().map(|text| {
            Node::element("span")
                .class(join_classes(["inline-block break-words", text_color]))
                .child(Node::text(text))
        });

        let icon = props.icon.clone().map(|icon| {
            Node::element("span")
                .class(join_classes(["inline-flex h-4 w-4", Self::icon_class(props.color)]))
                .child(icon)
        });

        let icon = match (icon, &props.icon_tooltip) {
            (Some(icon), Some(tooltip)) => Some(Node::fragment(render_child::<Tooltip>(
                TooltipProps {
                    content: tooltip.clone(),
                    position: Position::Top,
                    trigger: icon,
                    class: None,
                },
                &self.context,
            )?)),
            (icon, _) => icon,
        };

        Ok(vec![Node::element("div")
            .class(join_classes([
                "inline-flex flex-wrap items-center gap-x-3 text-sm",
                props.class.as_deref().unwrap_or_default(),
            ]))
            .child_opt(text)
            .child_opt(icon)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::root;

    #[test]
    fn test_label_required_marker() {
        let nodes = render_child::<Label>(
            LabelProps {
                text: "Email".to_string(),
                html_for: Some("email".to_string()),
                required: true,
                ..Default::default()
            },
            &Context::new(),
        )
        .unwrap();
        let tree = root(nodes);
        let label = &tree.find_by_tag("label")[0];
        assert_eq!(label.attribute("for"), Some("email"));
        assert_eq!(tree.text_content(), "Email*");
    }

    #[test]
    fn test_error_text_is_alert() {
        let nodes = render_child::<ErrorText>(
            ErrorTextProps {
                text: "required".to_string(),
                ..Default::default()
            },
            &Context::new(),
        )
        .unwrap();
        assert_eq!(nodes[0].attribute("role"), Some("alert"));
        assert_eq!(nodes[0].text_content(), "required");
    }

    #[test]
    fn test_hint_with_tooltip_wraps_icon() {
        let nodes = render_child::<Hint>(
            HintProps {
                text: Some("Optional".to_string()),
                icon: Some(Node::element("svg")),
                icon_tooltip: Some("More info".to_string()),
                color: Color::Info,
                class: None,
            },
            &Context::new(),
        )
        .unwrap();
        let tree = root(nodes);
        assert!(tree.find(|n| n.has_class("text-blue-600")).is_some());
        assert!(tree.find(|n| n.has_class("relative")).is_some());
    }
}
