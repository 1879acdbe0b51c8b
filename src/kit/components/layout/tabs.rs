// Tabs layout for FormCraft

use crate::component::{render_child, Callback, Component, ComponentError, Context, Node};
use crate::kit::components::atoms::{Badge, BadgeProps};
use crate::kit::theme::{Color, Size};
use crate::kit::utils::join_classes;

/// One tab and its panel content
#[derive(Debug, Clone, Default)]
pub struct TabItem {
    pub id: String,
    pub label: String,
    pub content: Vec<Node>,
    pub icon: Option<Node>,
    pub badge: Option<String>,
    pub badge_color: Option<Color>,
    pub disabled: bool,
}

impl TabItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: Node) -> Self {
        self.content.push(content);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Tabs props
#[derive(Debug, Clone, Default)]
pub struct TabsProps {
    /// Names the URL query parameter when `persist_in_url` is set
    pub id: Option<String>,
    pub items: Vec<TabItem>,
    /// Initially active tab; the first tab when unset
    pub default_tab: Option<String>,
    /// Controlled active tab
    pub active_tab: Option<String>,
    pub on_tab_change: Option<Callback<String>>,
    /// Render inside a bordered container
    pub contained: bool,
    /// Mirror the active tab in the URL query string
    pub persist_in_url: bool,
    pub class: Option<String>,
}

/// Tab bar with the active tab's content below
#[derive(Debug)]
pub struct Tabs {
    props: TabsProps,
    context: Context,
    internal_active: Option<String>,
}

impl Tabs {
    /// Currently active tab id
    pub fn active_tab(&self) -> Option<&str> {
        self.props
            .active_tab
            .as_deref()
            .or(self.internal_active.as_deref())
    }

    /// Activate a tab as if it were clicked. Disabled, unknown and already
    /// active tabs are ignored. Returns whether the tab changed.
    pub fn select(&mut self, tab_id: &str) -> bool {
        let Some(item) = self.props.items.iter().find(|item| item.id == tab_id) else {
            return false;
        };
        if item.disabled || self.active_tab() == Some(tab_id) {
            return false;
        }

        if self.props.active_tab.is_none() {
            self.internal_active = Some(tab_id.to_string());
        }
        log::debug!("tabs {:?} activated `{tab_id}`", self.props.id);

        if let Some(param) = self.url_param() {
            if let Err(err) = self.context.history().set_query_param(param, tab_id) {
                log::warn!("failed to persist tab `{tab_id}` in URL: {err}");
            }
        }
        if let Some(on_tab_change) = &self.props.on_tab_change {
            on_tab_change.call(tab_id.to_string());
        }
        true
    }

    fn url_param(&self) -> Option<&str> {
        self.props
            .id
            .as_deref()
            .filter(|_| self.props.persist_in_url)
    }

    fn tab_button(&self, item: &TabItem) -> Result<Node, ComponentError> {
        let active = self.active_tab() == Some(item.id.as_str());
        let accent = if active {
            "text-primary-700"
        } else {
            "text-gray-400"
        };

        let badge = match &item.badge {
            Some(text) => render_child::<Badge>(
                BadgeProps {
                    text: text.clone(),
                    color: item
                        .badge_color
                        .unwrap_or(if active { Color::Primary } else { Color::Gray }),
                    size: Size::Sm,
                    class: Some("w-max".to_string()),
                    ..Default::default()
                },
                &self.context,
            )?,
            None => Vec::new(),
        };

        Ok(Node::element("button")
            .attr("type", "button")
            .attr("role", "tab")
            .attr("data-tab-id", &item.id)
            .attr("aria-selected", active.to_string())
            .attr_opt("aria-current", active.then_some("page"))
            .flag("disabled", item.disabled)
            .class(join_classes([
                "flex items-center justify-center gap-x-2 rounded-lg px-3 py-2 text-sm font-medium whitespace-nowrap transition duration-75 outline-none",
                if active {
                    "bg-gray-50"
                } else {
                    "hover:bg-gray-50 focus-visible:bg-gray-50"
                },
                if item.disabled {
                    "cursor-not-allowed opacity-50"
                } else {
                    "cursor-pointer"
                },
            ]))
            .child_opt(item.icon.clone().map(|icon| {
                Node::element("span")
                    .class(join_classes(["inline-flex shrink-0 transition duration-75", accent]))
                    .child(icon)
            }))
            .child(
                Node::element("span")
                    .class(join_classes([
                        "transition duration-75",
                        if active { "text-primary-700" } else { "text-gray-500" },
                    ]))
                    .child(Node::text(&item.label)),
            )
            .children(badge))
    }
}

impl Component for Tabs {
    type Props = TabsProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let from_url = props
            .id
            .as_deref()
            .filter(|_| props.persist_in_url)
            .and_then(|param| context.history().query_param(param))
            .filter(|tab| props.items.iter().any(|item| &item.id == tab));

        let internal_active = from_url
            .or_else(|| props.default_tab.clone())
            .or_else(|| props.items.first().map(|item| item.id.clone()));

        Self {
            props,
            context,
            internal_active,
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;

        let mut nav = Node::element("nav")
            .attr("aria-label", "Tabs")
            .attr("role", "tablist")
            .class(join_classes([
                "flex max-w-full gap-x-1 overflow-x-auto",
                if props.contained {
                    "border-b border-gray-200 px-3 py-2.5"
                } else {
                    "mx-auto rounded-xl bg-white p-2 shadow-sm ring-1 ring-gray-950/5"
                },
            ]));
        for item in &props.items {
            nav = nav.child(self.tab_button(item)?);
        }

        let content = props
            .items
            .iter()
            .find(|item| Some(item.id.as_str()) == self.active_tab())
            .map(|item| item.content.clone())
            .unwrap_or_default();

        Ok(vec![Node::element("div")
            .attr_opt("id", props.id.clone())
            .class(props.class.as_deref().unwrap_or_default())
            .child(nav)
            .child(
                Node::element("div")
                    .attr("role", "tabpanel")
                    .class(if props.contained { "" } else { "py-6" })
                    .children(content),
            )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::root;
    use crate::platform::{History, MemoryHistory};
    use std::sync::{Arc, Mutex};

    fn items() -> Vec<TabItem> {
        vec![
            TabItem::new("profile", "Profile").with_content(Node::text("Profile panel")),
            TabItem::new("billing", "Billing").with_content(Node::text("Billing panel")),
            TabItem::new("danger", "Danger zone").disabled(),
        ]
    }

    #[test]
    fn test_disabled_tab_cannot_be_selected() {
        let mut tabs = Tabs::create(
            TabsProps {
                items: items(),
                ..Default::default()
            },
            Context::new(),
        );
        assert_eq!(tabs.active_tab(), Some("profile"));
        assert!(!tabs.select("danger"));
        assert_eq!(tabs.active_tab(), Some("profile"));
    }

    #[test]
    fn test_change_notifies_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut tabs = Tabs::create(
            TabsProps {
                items: items(),
                on_tab_change: Some(Callback::new(move |id: String| sink.lock().unwrap().push(id))),
                ..Default::default()
            },
            Context::new(),
        );

        assert!(tabs.select("billing"));
        assert!(!tabs.select("billing"));
        assert_eq!(tabs.active_tab(), Some("billing"));
        assert_eq!(*seen.lock().unwrap(), vec!["billing".to_string()]);

        let tree = root(tabs.render().unwrap());
        assert!(tree.text_content().contains("Billing panel"));
        assert!(!tree.text_content().contains("Profile panel"));
    }

    #[test]
    fn test_url_persistence() {
        let history = Arc::new(MemoryHistory::parse("https://app.test/settings?tab=billing&x=1").unwrap());
        let context = Context::new().with_history(history.clone());
        let props = TabsProps {
            id: Some("tab".to_string()),
            items: items(),
            persist_in_url: true,
            ..Default::default()
        };

        let mut tabs = Tabs::create(props.clone(), context.clone());
        assert_eq!(tabs.active_tab(), Some("billing"));

        assert!(tabs.select("profile"));
        assert_eq!(history.query_param("tab").as_deref(), Some("profile"));
        assert_eq!(history.query_param("x").as_deref(), Some("1"));

        let remounted = Tabs::create(props, context);
        assert_eq!(remounted.active_tab(), Some("profile"));
    }

    #[test]
    fn test_unknown_url_value_falls_back_to_default() {
        let history = Arc::new(MemoryHistory::parse("https://app.test/?tab=nope").unwrap());
        let tabs = Tabs::create(
            TabsProps {
                id: Some("tab".to_string()),
                items: items(),
                default_tab: Some("billing".to_string()),
                persist_in_url: true,
                ..Default::default()
            },
            Context::new().with_history(history),
        );
        assert_eq!(tabs.active_tab(), Some("billing"));
    }

    #[test]
    fn test_controlled_tab_stays_put() {
        let mut tabs = Tabs::create(
            TabsProps {
                items: items(),
                active_tab: Some("profile".to_string()),
                ..Default::default()
            },
            Context::new(),
        );
        assert!(tabs.select("billing"));
        assert_eq!(tabs.active_tab(), Some("profile"));
    }
}
