// Section layout for FormCraft

use crate::component::{Component, ComponentError, Context, Node};
use crate::kit::theme::{Color, Size};
use crate::kit::utils::join_classes;
use crate::platform::{load_json, store_json};

/// Section props
#[derive(Debug, Clone)]
pub struct SectionProps {
    /// Element id; also keys the persisted collapse state
    pub id: Option<String>,
    pub heading: Option<String>,
    pub description: Option<String>,
    pub icon: Option<Node>,
    pub icon_color: Color,
    pub icon_size: Size,
    pub collapsible: bool,
    /// Initial collapse state when nothing is stored
    pub collapsed: bool,
    /// Remember the collapse state in storage (needs `id`)
    pub persist_collapsed: bool,
    /// Header beside the content on large screens
    pub aside: bool,
    pub compact: bool,
    pub children: Vec<Node>,
    pub class: Option<String>,
}

impl Default for SectionProps {
    fn default() -> Self {
        Self {
            id: None,
            heading: None,
            description: None,
            icon: None,
            icon_color: Color::Gray,
            icon_size: Size::Md,
            collapsible: false,
            collapsed: false,
            persist_collapsed: false,
            aside: false,
            compact: false,
            children: Vec::new(),
            class: None,
        }
    }
}

/// Card-like block with an optional collapsible header
#[derive(Debug)]
pub struct Section {
    props: SectionProps,
    context: Context,
    collapsed: bool,
}

impl Section {
    /// Storage key for the collapse state, when persistence is on
    pub fn storage_key(&self) -> Option<String> {
        match &self.props.id {
            Some(id) if self.props.persist_collapsed => Some(format!("section-collapsed-{id}")),
            _ => None,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip the collapse state. Returns false when the section is not collapsible.
    pub fn toggle(&mut self) -> bool {
        if !self.props.collapsible {
            return false;
        }
        self.collapsed = !self.collapsed;
        log::debug!(
            "section {:?} {}",
            self.props.id,
            if self.collapsed { "collapsed" } else { "expanded" }
        );
        if let Some(key) = self.storage_key() {
            store_json(self.context.storage(), &key, &self.collapsed);
        }
        true
    }

    fn has_header(&self) -> bool {
        self.props.heading.is_some() || self.props.description.is_some() || self.props.icon.is_some()
    }

    fn header(&self) -> Node {
        let props = &self.props;
        let heading = Node::element("div")
            .class("grid flex-1 gap-y-1")
            .child_opt(props.heading.as_ref().map(|text| {
                Node::element("h3")
                    .class("text-base font-semibold leading-6 text-gray-950")
                    .child(Node::text(text))
            }))
            .child_opt(props.description.as_ref().map(|text| {
                Node::element("p")
                    .class("text-sm text-gray-500")
                    .child(Node::text(text))
            }));

        let chevron = props.collapsible.then(|| {
            Node::element("div").class("flex-shrink-0").child(
                Node::element("svg")
                    .class(join_classes([
                        "h-5 w-5 text-gray-400 transition-transform",
                        if self.collapsed { "" } else { "rotate-180" },
                    ]))
                    .attr("fill", "none")
                    .attr("stroke", "currentColor")
                    .attr("viewBox", "0 0 24 24")
                    .child(Node::element("path").attr("d", "M19 9l-7 7-7-7")),
            )
        });

        let mut header = Node::element("div")
            .class(join_classes([
                if props.compact { "px-4 py-3" } else { "px-6 py-4" },
                if props.aside { "grid grid-cols-1 gap-6 lg:grid-cols-3" } else { "" },
                if props.collapsible { "cursor-pointer" } else { "" },
            ]))
            .child(
                Node::element("div")
                    .class(join_classes([
                        "flex items-start gap-x-3",
                        if props.aside { "lg:col-span-1" } else { "" },
                    ]))
                    .child_opt(props.icon.clone().map(|icon| {
                        Node::element("div")
                            .class(join_classes([
                                props.icon_color.text_class(),
                                props.icon_size.icon_class(),
                                "flex-shrink-0 mt-1",
                            ]))
                            .child(icon)
                    }))
                    .child(heading)
                    .child_opt(chevron),
            );

        if props.collapsible {
            header = header
                .attr("role", "button")
                .attr("aria-expanded", (!self.collapsed).to_string());
        }
        header
    }
}

impl Component for Section {
    type Props = SectionProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let mut section = Self {
            collapsed: props.collapsed,
            props,
            context,
        };
        if let Some(key) = section.storage_key() {
            if let Some(stored) = load_json::<bool>(section.context.storage(), &key) {
                section.collapsed = stored;
            }
        }
        section
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let has_header = self.has_header();
        let show_content =
            (!props.collapsible || !self.collapsed) && !props.children.is_empty();

        let content = show_content.then(|| {
            Node::element("div")
                .class(join_classes([
                    if props.compact { "px-4 pb-3 pt-3" } else { "px-6 pb-4 pt-6" },
                    if has_header {
                        "border-t border-gray-950/5"
                    } else if props.compact {
                        ""
                    } else {
                        "pt-4"
                    },
                    if props.aside && has_header { "lg:col-span-2" } else { "" },
                    "space-y-4 text-gray-600",
                ]))
                .children(props.children.iter().cloned())
        });

        Ok(vec![Node::element("section")
            .attr_opt("id", props.id.clone())
            .class(join_classes([
                "rounded-xl bg-white shadow-sm ring-1 ring-gray-950/5",
                props.class.as_deref().unwrap_or_default(),
            ]))
            .child_opt(has_header.then(|| self.header()))
            .child_opt(content)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::root;
    use crate::platform::Storage;

    fn settings(context: &Context) -> Section {
        Section::create(
            SectionProps {
                id: Some("settings".to_string()),
                heading: Some("Settings".to_string()),
                collapsible: true,
                persist_collapsed: true,
                children: vec![Node::text("Body")],
                ..Default::default()
            },
            context.clone(),
        )
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let mut section = settings(&Context::new());
        let visible = |s: &Section| root(s.render().unwrap()).text_content().contains("Body");
        assert!(visible(&section));

        assert!(section.toggle());
        assert!(!visible(&section));
        assert!(section.toggle());
        assert!(visible(&section));
    }

    #[test]
    fn test_remount_restores_persisted_state() {
        let context = Context::new();
        let mut section = settings(&context);
        section.toggle();
        assert_eq!(
            context.storage().get_item("section-collapsed-settings").unwrap(),
            Some("true".to_string())
        );

        let remounted = settings(&context);
        assert!(remounted.is_collapsed());
    }

    #[test]
    fn test_stored_state_wins_over_prop() {
        let context = Context::new();
        context
            .storage()
            .set_item("section-collapsed-settings", "false")
            .unwrap();
        let section = Section::create(
            SectionProps {
                collapsed: true,
                ..settings(&context).props
            },
            context,
        );
        assert!(!section.is_collapsed());
    }

    #[test]
    fn test_not_collapsible_ignores_toggle() {
        let mut section = Section::create(
            SectionProps {
                heading: Some("Static".to_string()),
                children: vec![Node::text("Body")],
                ..Default::default()
            },
            Context::new(),
        );
        assert!(!section.toggle());
        assert!(!section.is_collapsed());
        let tree = root(section.render().unwrap());
        assert!(tree.find(|n| n.attribute("role") == Some("button")).is_none());
    }
}
