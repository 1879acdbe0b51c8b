// Tooltip component for FormCraft

use crate::component::{Component, ComponentError, ComponentId, Context, Node};
use crate::kit::theme::Position;
use crate::kit::utils::join_classes;

/// Tooltip props
#[derive(Debug, Clone)]
pub struct TooltipProps {
    /// Text shown in the bubble
    pub content: String,
    pub position: Position,
    /// Element that shows the tooltip on hover or focus
    pub trigger: Node,
    pub class: Option<String>,
}

/// Hover/focus tooltip around a trigger element
#[derive(Debug)]
pub struct Tooltip {
    id: ComponentId,
    context: Context,
    props: TooltipProps,
    visible: bool,
}

impl Tooltip {
    /// Pointer entered or trigger focused
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Pointer left or trigger blurred
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn bubble_position(position: Position) -> &'static str {
        match position {
            Position::Top => "bottom-full left-1/2 -translate-x-1/2 mb-2",
            Position::Bottom => "top-full left-1/2 -translate-x-1/2 mt-2",
            Position::Left => "right-full top-1/2 -translate-y-1/2 mr-2",
            Position::Right => "left-full top-1/2 -translate-y-1/2 ml-2",
        }
    }

    fn arrow_position(position: Position) -> &'static str {
        match position {
            Position::Top => "top-full left-1/2 -translate-x-1/2 border-t-gray-900",
            Position::Bottom => "bottom-full left-1/2 -translate-x-1/2 border-b-gray-900",
            Position::Left => "left-full top-1/2 -translate-y-1/2 border-l-gray-900",
            Position::Right => "right-full top-1/2 -translate-y-1/2 border-r-gray-900",
        }
    }
}

impl Component for Tooltip {
    type Props = TooltipProps;

    fn create(props: Self::Props, context: Context) -> Self {
        Self {
            id: ComponentId::new(),
            context,
            props,
            visible: false,
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let tooltip_id = format!("{}-tooltip", self.context.element_id(self.id));

        let mut trigger = self.props.trigger.clone();
        if self.visible {
            trigger.set_attribute("aria-describedby", &tooltip_id);
        }

        let bubble = self.visible.then(|| {
            Node::element("div")
                .attr("id", &tooltip_id)
                .attr("role", "tooltip")
                .class(join_classes([
                    "absolute z-50 px-3 py-2 text-sm text-white bg-gray-900 rounded-lg shadow-lg whitespace-nowrap pointer-events-none",
                    Self::bubble_position(self.props.position),
                    self.props.class.as_deref().unwrap_or_default(),
                ]))
                .child(Node::text(&self.props.content))
                .child(Node::element("div").class(join_classes([
                    "absolute w-0 h-0 border-4 border-transparent",
                    Self::arrow_position(self.props.position),
                ])))
        });

        Ok(vec![Node::element("div")
            .class("relative inline-block")
            .child(trigger)
            .child_opt(bubble)])
    }
}
