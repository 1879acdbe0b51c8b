// Card container for FormCraft

use crate::component::{Component, ComponentError, Context, Node};
use crate::kit::utils::join_classes;

/// Child of a [`CardHeader`] or [`CardFooter`]
#[derive(Debug, Clone)]
pub enum SlotChild {
    /// Right-aligned action buttons
    Actions(Vec<Node>),
    /// Custom content; replaces the title layout
    Content(Node),
}

/// Header slot
#[derive(Debug, Clone, Default)]
pub struct CardHeader {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub children: Vec<SlotChild>,
}

impl CardHeader {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_actions(mut self, actions: Vec<Node>) -> Self {
        self.children.push(SlotChild::Actions(actions));
        self
    }
}

/// Footer slot
#[derive(Debug, Clone, Default)]
pub struct CardFooter {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub children: Vec<SlotChild>,
}

/// Child of a [`Card`]
#[derive(Debug, Clone)]
pub enum CardChild {
    Header(CardHeader),
    Footer(CardFooter),
    Body(Node),
}

impl From<Node> for CardChild {
    fn from(node: Node) -> Self {
        CardChild::Body(node)
    }
}

/// Card props
///
/// `heading`, `description`, `header`, `header_action` and `footer` are the
/// prop-based way to fill the header and footer; each is only used when no
/// matching slot child is given.
#[derive(Debug, Clone, Default)]
pub struct CardProps {
    pub heading: Option<String>,
    pub description: Option<String>,
    /// Complete header content
    pub header: Option<Node>,
    pub header_action: Option<Node>,
    pub footer: Option<Node>,
    pub children: Vec<CardChild>,
    pub class: Option<String>,
}

/// White panel with optional header and footer
#[derive(Debug)]
pub struct Card {
    props: CardProps,
}

/// Title/subtitle block with actions, or the custom content when present
fn slot_content(
    title: Option<&str>,
    subtitle: Option<&str>,
    children: &[SlotChild],
    align: &str,
) -> Vec<Node> {
    let custom: Vec<Node> = children
        .iter()
        .filter_map(|child| match child {
            SlotChild::Content(node) => Some(node.clone()),
            SlotChild::Actions(_) => None,
        })
        .collect();
    if !custom.is_empty() {
        return custom;
    }

    let actions = children.iter().find_map(|child| match child {
        SlotChild::Actions(nodes) => Some(nodes.clone()),
        SlotChild::Content(_) => None,
    });

    vec![Node::element("div")
        .class(join_classes(["flex justify-between gap-x-4", align]))
        .child(
            Node::element("div")
                .class("grid flex-1 gap-y-1")
                .child_opt(title.map(|title| {
                    Node::element("h3")
                        .class("text-base font-semibold leading-6 text-gray-950")
                        .child(Node::text(title))
                }))
                .child_opt(subtitle.map(|subtitle| {
                    Node::element("p")
                        .class("text-sm text-gray-500")
                        .child(Node::text(subtitle))
                })),
        )
        .child_opt(actions.map(|actions| {
            Node::element("div").class("flex-shrink-0").child(
                Node::element("div")
                    .class("flex items-center justify-end gap-3")
                    .children(actions),
            )
        }))]
}

impl Card {
    fn header_content(&self) -> Option<Vec<Node>> {
        let props = &self.props;
        let slot = props.children.iter().find_map(|child| match child {
            CardChild::Header(header) => Some(header),
            _ => None,
        });

        if let Some(header) = slot {
            return Some(slot_content(
                header.title.as_deref(),
                header.subtitle.as_deref(),
                &header.children,
                "items-center",
            ));
        }
        if let Some(header) = &props.header {
            return Some(vec![header.clone()]);
        }
        if props.heading.is_some() || props.description.is_some() || props.header_action.is_some()
        {
            let actions: Vec<SlotChild> = props
                .header_action
                .iter()
                .map(|action| SlotChild::Actions(vec![action.clone()]))
                .collect();
            return Some(slot_content(
                props.heading.as_deref(),
                props.description.as_deref(),
                &actions,
                "items-center",
            ));
        }
        None
    }

    fn footer_content(&self) -> Option<Vec<Node>> {
        let slot = self.props.children.iter().find_map(|child| match child {
            CardChild::Footer(footer) => Some(footer),
            _ => None,
        });
        match slot {
            Some(footer) => Some(slot_content(
                footer.title.as_deref(),
                footer.subtitle.as_deref(),
                &footer.children,
                "items-start",
            )),
            None => self.props.footer.clone().map(|footer| vec![footer]),
        }
    }
}

impl Component for Card {
    type Props = CardProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let body = self.props.children.iter().filter_map(|child| match child {
            CardChild::Body(node) => Some(node.clone()),
            _ => None,
        });

        Ok(vec![Node::element("div")
            .class(join_classes([
                "rounded-xl bg-white shadow-sm ring-1 ring-gray-950/5",
                self.props.class.as_deref().unwrap_or_default(),
            ]))
            .child_opt(self.header_content().map(|content| {
                Node::element("div")
                    .attr("data-card-header", "")
                    .class("px-6 py-4 border-b border-gray-950/5")
                    .children(content)
            }))
            .child(
                Node::element("div")
                    .attr("data-card-body", "")
                    .class("px-6 py-4")
                    .children(body),
            )
            .child_opt(self.footer_content().map(|content| {
                Node::element("div")
                    .attr("data-card-footer", "")
                    .class("px-6 py-4 border-t border-gray-950/5 bg-gray-50/50")
                    .children(content)
            }))])
    }
}
