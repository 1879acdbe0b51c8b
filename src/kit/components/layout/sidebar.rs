// Sidebar navigation for FormCraft
//
// Open state is either controlled through `open` or kept internally.
// Group collapse state is kept per group and, when the sidebar has an
// `id`, persisted under a key scoped to that sidebar.

use std::collections::BTreeSet;

use crate::component::{render_child, Callback, Component, ComponentError, Context, Node};
use crate::kit::components::atoms::{Badge, BadgeProps, Tooltip, TooltipProps};
use crate::kit::theme::{Color, Position, Size};
use crate::kit::utils::join_classes;
use crate::platform::{load_json, store_json};

/// Navigation entry
#[derive(Debug, Clone, Default)]
pub struct SidebarItem {
    pub id: String,
    pub label: String,
    pub url: Option<String>,
    pub icon: Option<Node>,
    /// Shown instead of `icon` while active
    pub active_icon: Option<Node>,
    pub badge: Option<String>,
    pub badge_color: Option<Color>,
    pub active: bool,
    pub open_in_new_tab: bool,
    pub child_items: Vec<SidebarItem>,
}

impl SidebarItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Group of navigation entries
#[derive(Debug, Clone, Default)]
pub struct SidebarGroup {
    pub id: String,
    pub label: Option<String>,
    pub items: Vec<SidebarItem>,
    pub collapsible: bool,
    /// Collapse state when nothing is stored
    pub collapsed: bool,
    pub active: bool,
}

/// Sidebar props
#[derive(Debug, Clone)]
pub struct SidebarProps {
    /// Scopes the persisted group state; without it nothing is persisted
    pub id: Option<String>,
    pub groups: Vec<SidebarGroup>,
    pub logo: Option<Node>,
    pub logo_url: Option<String>,
    /// Collapsible to an icon rail on desktop
    pub collapsible: bool,
    /// Hides completely when closed
    pub fully_collapsible: bool,
    pub default_open: bool,
    /// Controlled open state
    pub open: Option<bool>,
    pub on_open_change: Option<Callback<bool>>,
    pub footer: Option<Node>,
    pub width: String,
    pub class: Option<String>,
}

impl Default for SidebarProps {
    fn default() -> Self {
        Self {
            id: None,
            groups: Vec::new(),
            logo: None,
            logo_url: None,
            collapsible: false,
            fully_collapsible: false,
            default_open: true,
            open: None,
            on_open_change: None,
            footer: None,
            width: "18rem".to_string(),
            class: None,
        }
    }
}

/// Sidebar component
#[derive(Debug)]
pub struct Sidebar {
    props: SidebarProps,
    context: Context,
    internal_open: bool,
    collapsed_groups: BTreeSet<String>,
}

impl Sidebar {
    /// Storage key for collapsed group ids
    pub fn storage_key(&self) -> Option<String> {
        self.props
            .id
            .as_ref()
            .map(|id| format!("sidebar-{id}-collapsed-groups"))
    }

    pub fn is_open(&self) -> bool {
        self.props.open.unwrap_or(self.internal_open)
    }

    /// Flip the open state and report the new state through `on_open_change`
    pub fn toggle_open(&mut self) {
        let next = !self.is_open();
        if self.props.open.is_none() {
            self.internal_open = next;
        }
        log::debug!("sidebar {:?} open: {next}", self.props.id);
        if let Some(on_open_change) = &self.props.on_open_change {
            on_open_change.call(next);
        }
    }

    pub fn is_group_collapsed(&self, group_id: &str) -> bool {
        self.collapsed_groups.contains(group_id)
    }

    /// Collapse or expand a collapsible group. Returns false for unknown or
    /// non-collapsible groups.
    pub fn toggle_group(&mut self, group_id: &str) -> bool {
        let collapsible = self
            .props
            .groups
            .iter()
            .any(|group| group.id == group_id && group.collapsible);
        if !collapsible {
            return false;
        }

        if !self.collapsed_groups.remove(group_id) {
            self.collapsed_groups.insert(group_id.to_string());
        }
        if let Some(key) = self.storage_key() {
            store_json(self.context.storage(), &key, &self.collapsed_groups);
        }
        true
    }

    fn render_item(&self, item: &SidebarItem) -> Result<Node, ComponentError> {
        let open = self.is_open();
        let icon = match (&item.active_icon, item.active) {
            (Some(active_icon), true) => Some(active_icon.clone()),
            _ => item.icon.clone(),
        };
        let accent = if item.active {
            "text-primary-600"
        } else {
            "text-gray-400"
        };

        let badge = match (&item.badge, open) {
            (Some(text), true) => render_child::<Badge>(
                BadgeProps {
                    text: text.clone(),
                    color: item.badge_color.unwrap_or(if item.active {
                        Color::Primary
                    } else {
                        Color::Gray
                    }),
                    size: Size::Sm,
                    class: Some("w-max".to_string()),
                    ..Default::default()
                },
                &self.context,
            )?,
            _ => Vec::new(),
        };

        let link = Node::element("a")
            .attr("href", item.url.as_deref().unwrap_or("#"))
            .attr_opt("target", item.open_in_new_tab.then_some("_blank"))
            .attr_opt("rel", item.open_in_new_tab.then_some("noopener noreferrer"))
            .attr_opt("aria-current", item.active.then_some("page"))
            .class(join_classes([
                "relative flex items-center justify-center gap-x-3 rounded-lg p-2 outline-none transition duration-75",
                match (item.active, item.url.is_some()) {
                    (true, _) => "bg-gray-100",
                    (false, true) => "hover:bg-gray-100 focus-visible:bg-gray-100",
                    (false, false) => "",
                },
            ]))
            .child_opt(icon.map(|icon| {
                Node::element("span")
                    .class(join_classes(["inline-flex shrink-0", accent]))
                    .child(icon)
            }))
            .child_opt(open.then(|| {
                Node::element("span")
                    .class(join_classes([
                        "flex-1 truncate text-sm font-medium transition duration-75",
                        if item.active { "text-primary-600" } else { "text-gray-700" },
                    ]))
                    .child(Node::text(&item.label))
            }))
            .children(badge);

        if open || item.label.is_empty() {
            return Ok(link);
        }
        // Labels are hidden on the collapsed rail; show them on hover instead
        Ok(Node::fragment(render_child::<Tooltip>(
            TooltipProps {
                content: item.label.clone(),
                position: Position::Right,
                trigger: link,
                class: None,
            },
            &self.context,
        )?))
    }

    fn render_group(&self, group: &SidebarGroup) -> Result<Node, ComponentError> {
        let collapsed = group.collapsible && self.is_group_collapsed(&group.id);

        let header = match (&group.label, self.is_open()) {
            (Some(label), true) => Some(
                Node::element("div")
                    .class(join_classes([
                        "flex items-center gap-x-3 p-2",
                        if group.collapsible { "cursor-pointer" } else { "" },
                    ]))
                    .child(
                        Node::element("span")
                            .class("flex-1 text-sm leading-6 font-medium text-gray-500")
                            .child(Node::text(label)),
                    )
                    .child_opt(group.collapsible.then(|| {
                        Node::element("button")
                            .attr("type", "button")
                            .attr("aria-label", format!("Toggle {label}"))
                            .attr("aria-expanded", (!collapsed).to_string())
                            .class(join_classes([
                                "inline-flex items-center justify-center transition-transform duration-200",
                                if collapsed { "-rotate-180" } else { "" },
                            ]))
                    })),
            ),
            _ => None,
        };

        let mut items = Node::element("ul").class(join_classes([
            "flex flex-col gap-y-1 overflow-hidden transition-all duration-200",
            if collapsed {
                "max-h-0 opacity-0"
            } else {
                "max-h-[1000px] opacity-100"
            },
        ]));
        for item in &group.items {
            let mut entry = Node::element("li").child(self.render_item(item)?);
            if !item.child_items.is_empty() {
                let mut nested = Node::element("ul").class("flex flex-col gap-y-1 mt-1 ml-3");
                for child in &item.child_items {
                    nested = nested.child(Node::element("li").child(self.render_item(child)?));
                }
                entry = entry.child(nested);
            }
            items = items.child(entry);
        }

        Ok(Node::element("li")
            .attr("data-group-id", &group.id)
            .class(join_classes([
                "flex flex-col gap-y-1",
                if collapsed { "fi-collapsed" } else { "" },
                if group.active { "fi-active" } else { "" },
            ]))
            .child_opt(header)
            .child(items))
    }

    fn toggle_button(&self) -> Option<Node> {
        if !self.props.collapsible {
            return None;
        }
        let (label, path) = if self.is_open() {
            ("Collapse sidebar", "M15 19l-7-7 7-7")
        } else {
            ("Expand sidebar", "M9 5l7 7-7 7")
        };
        Some(
            Node::element("button")
                .attr("type", "button")
                .attr("aria-label", label)
                .class("inline-flex items-center justify-center rounded-lg p-2 text-gray-500 hover:bg-gray-100")
                .child(
                    Node::element("svg")
                        .class("h-5 w-5")
                        .attr("fill", "none")
                        .attr("stroke", "currentColor")
                        .attr("viewBox", "0 0 24 24")
                        .child(Node::element("path").attr("d", path)),
                ),
        )
    }
}

impl Component for Sidebar {
    type Props = SidebarProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let mut sidebar = Self {
            internal_open: props.default_open,
            collapsed_groups: props
                .groups
                .iter()
                .filter(|group| group.collapsed)
                .map(|group| group.id.clone())
                .collect(),
            props,
            context,
        };
        if let Some(key) = sidebar.storage_key() {
            if let Some(stored) = load_json::<BTreeSet<String>>(sidebar.context.storage(), &key) {
                sidebar.collapsed_groups = stored;
            }
        }
        sidebar
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let open = self.is_open();

        let logo = match (&props.logo, open) {
            (Some(logo), true) => Some(Node::element("div").class("flex-1").child(
                match &props.logo_url {
                    Some(url) => Node::element("a")
                        .attr("href", url)
                        .class("inline-block")
                        .child(logo.clone()),
                    None => logo.clone(),
                },
            )),
            _ => None,
        };

        let mut groups = Node::element("ul").class("-mx-2 flex flex-col gap-y-7");
        for group in &props.groups {
            groups = groups.child(self.render_group(group)?);
        }

        let width = (open || props.collapsible).then(|| format!("width: {}", props.width));

        let aside = Node::element("aside")
            .attr_opt("id", props.id.clone())
            .attr("data-open", open.to_string())
            .attr_opt("style", width)
            .class(join_classes([
                "fixed inset-y-0 start-0 z-30 flex h-dvh flex-col bg-white transition-all lg:z-20",
                if open {
                    "translate-x-0 shadow-xl ring-1 ring-gray-950/5 lg:shadow-none lg:ring-0"
                } else {
                    "-translate-x-full lg:translate-x-0"
                },
                if props.fully_collapsible { "" } else { "lg:sticky" },
                props.class.as_deref().unwrap_or_default(),
            ]))
            .child(
                Node::element("div").class("overflow-x-clip").child(
                    Node::element("header")
                        .class("flex h-16 items-center justify-center px-4")
                        .child_opt(self.toggle_button())
                        .child_opt(logo),
                ),
            )
            .child(
                Node::element("nav")
                    .class("flex grow flex-col gap-y-7 overflow-x-hidden overflow-y-auto px-6 py-8")
                    .child(groups),
            )
            .child_opt(
                props
                    .footer
                    .clone()
                    .map(|footer| Node::element("div").class("mx-4 my-3 grid gap-y-3").child(footer)),
            );

        let backdrop = open.then(|| {
            Node::element("div")
                .attr("data-sidebar-backdrop", "")
                .class("fixed inset-0 z-30 bg-gray-950/50 transition duration-500 lg:hidden")
        });

        Ok(backdrop.into_iter().chain(Some(aside)).collect())
    }
}
