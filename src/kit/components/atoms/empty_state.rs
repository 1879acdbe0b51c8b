// Empty state panel for FormCraft

use crate::component::{Component, ComponentError, Context, Node};
use crate::kit::theme::{Color, Size};
use crate::kit::utils::join_classes;

/// Empty state props
#[derive(Debug, Clone)]
pub struct EmptyStateProps {
    pub heading: String,
    pub description: Option<String>,
    pub icon: Option<Node>,
    pub icon_color: Color,
    pub icon_size: Size,
    /// Usually action buttons
    pub footer: Option<Node>,
    /// `h1` to `h6`
    pub heading_level: u8,
    pub class: Option<String>,
}

impl Default for EmptyStateProps {
    fn default() -> Self {
        Self {
            heading: String::new(),
            description: None,
            icon: None,
            icon_color: Color::Primary,
            icon_size: Size::Lg,
            footer: None,
            heading_level: 2,
            class: None,
        }
    }
}

/// Placeholder shown when a list or page has no content
#[derive(Debug)]
pub struct EmptyState {
    props: EmptyStateProps,
}

impl EmptyState {
    fn icon_size_class(size: Size) -> &'static str {
        match size {
            Size::Xs => "h-4 w-4",
            Size::Sm => "h-5 w-5",
            Size::Md => "h-6 w-6",
            Size::Lg => "h-8 w-8",
            Size::Xl => "h-10 w-10",
        }
    }
}

impl Component for EmptyState {
    type Props = EmptyStateProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let level = props.heading_level.clamp(1, 6);

        let icon = props.icon.clone().map(|icon| {
            Node::element("div")
                .class(join_classes([
                    "mb-4 rounded-full p-3",
                    props.icon_color.soft_background_class(),
                ]))
                .child(
                    Node::element("span")
                        .class(join_classes([
                            "inline-flex",
                            Self::icon_size_class(props.icon_size),
                            props.icon_color.text_class(),
                        ]))
                        .child(icon),
                )
        });

        let description = props.description.as_ref().map(|text| {
            Node::element("p")
                .class("mt-1 text-sm text-gray-500")
                .child(Node::text(text))
        });

        let footer = props
            .footer
            .clone()
            .map(|footer| Node::element("footer").class("mt-6").child(footer));

        Ok(vec![Node::element("section")
            .class(join_classes([
                "rounded-xl bg-white px-6 py-12 shadow-sm ring-1 ring-gray-950/5",
                props.class.as_deref().unwrap_or_default(),
            ]))
            .child(
                Node::element("div")
                    .class("mx-auto grid max-w-lg justify-items-center text-center")
                    .child_opt(icon)
                    .child(
                        Node::element(format!("h{level}"))
                            .class("text-base font-semibold leading-6 text-gray-950")
                            .child(Node::text(&props.heading)),
                    )
                    .child_opt(description)
                    .child_opt(footer),
            )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_and_optional_parts() {
        let state = EmptyState::create(
            EmptyStateProps {
                heading: "No users".to_string(),
                description: Some("Invite someone".to_string()),
                heading_level: 9,
                ..Default::default()
            },
            Context::new(),
        );
        let node = state.render().unwrap().remove(0);
        assert_eq!(node.find_by_tag("h6").len(), 1);
        assert!(node.find_by_tag("footer").is_empty());
        assert_eq!(node.text_content(), "No usersInvite someone");
    }
}
