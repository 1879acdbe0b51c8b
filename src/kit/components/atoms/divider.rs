// Divider component for FormCraft

use crate::component::{Component, ComponentError, Context, Node};
use crate::kit::theme::{Alignment, Orientation};
use crate::kit::utils::join_classes;

/// Divider props
#[derive(Debug, Clone, Default)]
pub struct DividerProps {
    pub orientation: Orientation,
    /// Text placed on the line (horizontal only)
    pub label: Option<String>,
    pub label_position: Alignment,
    pub class: Option<String>,
}

/// Separator line
#[derive(Debug)]
pub struct Divider {
    props: DividerProps,
}

impl Component for Divider {
    type Props = DividerProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let extra = props.class.as_deref().unwrap_or_default();

        if props.orientation == Orientation::Vertical {
            return Ok(vec![Node::element("div")
                .class(join_classes(["inline-block h-full w-px bg-gray-200", extra]))
                .attr("role", "separator")
                .attr("aria-orientation", "vertical")]);
        }

        let Some(label) = &props.label else {
            return Ok(vec![Node::element("hr")
                .class(join_classes(["border-t border-gray-200", extra]))
                .attr("role", "separator")
                .attr("aria-orientation", "horizontal")]);
        };

        let line = || Node::element("div").class("flex-1 border-t border-gray-200");
        let position = props.label_position;

        Ok(vec![Node::element("div")
            .class(join_classes([
                "flex items-center",
                position.justify_class(),
                extra,
            ]))
            .attr("role", "separator")
            .attr("aria-orientation", "horizontal")
            .child_opt((position != Alignment::Start).then(line))
            .child(
                Node::element("span")
                    .class("px-3 text-sm text-gray-500")
                    .child(Node::text(label)),
            )
            .child_opt((position != Alignment::End).then(line))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(props: DividerProps) -> Node {
        Divider::create(props, Context::new()).render().unwrap().remove(0)
    }

    #[test]
    fn test_plain_rule() {
        let node = render(DividerProps::default());
        assert_eq!(node.tag(), Some("hr"));
    }

    #[test]
    fn test_label_positions() {
        let centered = render(DividerProps {
            label: Some("or".to_string()),
            ..Default::default()
        });
        assert_eq!(centered.child_nodes().len(), 3);

        let left = render(DividerProps {
            label: Some("or".to_string()),
            label_position: Alignment::Start,
            ..Default::default()
        });
        assert_eq!(left.child_nodes().len(), 2);
        assert!(left.has_class("justify-start"));
        assert_eq!(left.child_nodes()[0].tag(), Some("span"));
    }

    #[test]
    fn test_vertical() {
        let node = render(DividerProps {
            orientation: Orientation::Vertical,
            ..Default::default()
        });
        assert_eq!(node.attribute("aria-orientation"), Some("vertical"));
    }
}
