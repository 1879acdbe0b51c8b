// Persisted UI state across remounts and file-backed storage

use formcraft::component::{Component, Context, Node};
use formcraft::config::Config;
use formcraft::kit::components::layout::{
    Section, SectionProps, Sidebar, SidebarGroup, SidebarProps, TabItem, Tabs, TabsProps,
};
use formcraft::platform::Storage;

fn file_context(dir: &tempfile::TempDir) -> Context {
    let json = serde_json::json!({
        "idPrefix": "admin",
        "baseUrl": "https://admin.test/posts",
        "storage": { "kind": "file", "path": dir.path().join("ui.json") },
    });
    Config::from_json_str(&json.to_string())
        .and_then(Config::into_context)
        .unwrap()
}

fn section_props() -> SectionProps {
    SectionProps {
        id: Some("filters".to_string()),
        heading: Some("Filters".to_string()),
        collapsible: true,
        persist_collapsed: true,
        children: vec![Node::text("Body")],
        ..Default::default()
    }
}

#[test]
fn test_section_state_survives_new_context() {
    let dir = tempfile::tempdir().unwrap();

    let mut section = Section::create(section_props(), file_context(&dir));
    assert!(section.toggle());
    assert!(section.is_collapsed());

    // a fresh context reads the same file, like a page reload
    let reloaded = Section::create(section_props(), file_context(&dir));
    assert!(reloaded.is_collapsed());
}

#[test]
fn test_sidebar_groups_are_scoped_per_instance() {
    let context = Context::new();
    let groups = vec![SidebarGroup {
        id: "content".to_string(),
        label: Some("Content".to_string()),
        collapsible: true,
        ..Default::default()
    }];
    let props = |id: &str| SidebarProps {
        id: Some(id.to_string()),
        groups: groups.clone(),
        ..Default::default()
    };

    let mut main = Sidebar::create(props("main"), context.clone());
    assert!(main.toggle_group("content"));
    assert!(main.is_group_collapsed("content"));

    let other = Sidebar::create(props("secondary"), context.clone());
    assert!(!other.is_group_collapsed("content"));

    let remounted = Sidebar::create(props("main"), context.clone());
    assert!(remounted.is_group_collapsed("content"));
    assert!(context
        .storage()
        .get_item("sidebar-main-collapsed-groups")
        .unwrap()
        .is_some());
}

#[test]
fn test_tabs_follow_url() {
    let dir = tempfile::tempdir().unwrap();
    let context = file_context(&dir);
    let props = TabsProps {
        id: Some("view".to_string()),
        items: vec![TabItem::new("list", "List"), TabItem::new("grid", "Grid")],
        persist_in_url: true,
        ..Default::default()
    };

    let mut tabs = Tabs::create(props.clone(), context.clone());
    assert_eq!(tabs.active_tab(), Some("list"));
    assert!(tabs.select("grid"));

    let url = context.history().current_url().unwrap();
    assert_eq!(url.path(), "/posts");
    assert_eq!(url.query(), Some("view=grid"));

    let remounted = Tabs::create(props, context);
    assert_eq!(remounted.active_tab(), Some("grid"));
}
