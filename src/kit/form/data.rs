//! Form data collected from a rendered tree, the way a browser builds `FormData`

use std::collections::BTreeMap;

use crate::component::Node;

/// Flat field map handed to validators and submit handlers
pub type FormValues = BTreeMap<String, String>;

/// Name/value pairs of every successful control in tree order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

/// Input types that never contribute a value
const SKIPPED_INPUT_TYPES: &[&str] = &["submit", "button", "reset", "image", "file"];

impl FormData {
    /// Collect the named, enabled controls below `node`
    pub fn from_node(node: &Node) -> Self {
        let mut data = Self::default();
        collect(node, false, &mut data.entries);
        data
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Every value submitted under `name`
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Flatten into a map; for repeated names the last value wins
    pub fn to_values(&self) -> FormValues {
        self.entries.iter().cloned().collect()
    }
}

fn collect(node: &Node, disabled_scope: bool, entries: &mut Vec<(String, String)>) {
    let Some(tag) = node.tag() else {
        for child in node.child_nodes() {
            collect(child, disabled_scope, entries);
        }
        return;
    };

    let disabled = disabled_scope || node.has_attribute("disabled");
    match tag {
        "input" | "textarea" | "select" => {
            if disabled {
                return;
            }
            let Some(name) = node.attribute("name").filter(|name| !name.is_empty()) else {
                return;
            };
            match tag {
                "input" => {
                    if let Some(value) = input_value(node) {
                        entries.push((name.to_string(), value));
                    }
                }
                "textarea" => entries.push((name.to_string(), node.text_content())),
                _ => entries.extend(
                    selected_options(node)
                        .into_iter()
                        .map(|value| (name.to_string(), value)),
                ),
            }
        }
        // disabled fieldsets disable every control inside them
        "fieldset" => {
            for child in node.child_nodes() {
                collect(child, disabled, entries);
            }
        }
        _ => {
            for child in node.child_nodes() {
                collect(child, disabled_scope, entries);
            }
        }
    }
}

fn input_value(node: &Node) -> Option<String> {
    let kind = node.attribute("type").unwrap_or("text");
    if SKIPPED_INPUT_TYPES.contains(&kind) {
        return None;
    }
    if matches!(kind, "checkbox" | "radio") {
        return node
            .has_attribute("checked")
            .then(|| node.attribute("value").unwrap_or("on").to_string());
    }
    Some(node.attribute("value").unwrap_or_default().to_string())
}

fn option_value(option: &Node) -> String {
    match option.attribute("value") {
        Some(value) => value.to_string(),
        None => option.text_content(),
    }
}

fn selected_options(select: &Node) -> Vec<String> {
    let options = select.find_by_tag("option");
    let selected: Vec<String> = options
        .iter()
        .filter(|option| option.has_attribute("selected") && !option.has_attribute("disabled"))
        .map(|option| option_value(option))
        .collect();

    if !selected.is_empty() || select.has_attribute("multiple") {
        return selected;
    }
    // a single select always shows its first enabled option
    options
        .iter()
        .find(|option| !option.has_attribute("disabled"))
        .map(|option| vec![option_value(option)])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(children: Vec<Node>) -> Node {
        Node::element("form").children(children)
    }

    #[test]
    fn test_inputs_and_checkables() {
        let tree = form(vec![
            Node::element("input").attr("name", "email").attr("value", "a@b.c"),
            Node::element("input").attr("name", "empty"),
            Node::element("input").attr("type", "checkbox").attr("name", "terms").flag("checked", true),
            Node::element("input").attr("type", "checkbox").attr("name", "news"),
            Node::element("input")
                .attr("type", "radio")
                .attr("name", "plan")
                .attr("value", "pro")
                .flag("checked", true),
            Node::element("input").attr("type", "submit").attr("name", "go").attr("value", "Go"),
            Node::element("input").attr("value", "unnamed"),
            Node::element("input").attr("name", "locked").attr("value", "x").flag("disabled", true),
        ]);

        let data = FormData::from_node(&tree);
        assert_eq!(
            data.entries(),
            &[
                ("email".to_string(), "a@b.c".to_string()),
                ("empty".to_string(), String::new()),
                ("terms".to_string(), "on".to_string()),
                ("plan".to_string(), "pro".to_string()),
            ]
        );
    }

    #[test]
    fn test_textarea_and_selects() {
        let tree = form(vec![
            Node::element("textarea").attr("name", "bio").child(Node::text("Hello")),
            Node::element("select")
                .attr("name", "country")
                .child(Node::element("option").attr("value", "").flag("disabled", true))
                .child(Node::element("option").attr("value", "jp"))
                .child(Node::element("option").attr("value", "us")),
            Node::element("select")
                .attr("name", "tags")
                .flag("multiple", true)
                .child(Node::element("option").attr("value", "a").flag("selected", true))
                .child(Node::element("option").attr("value", "b"))
                .child(Node::element("option").child(Node::text("c")).flag("selected", true)),
        ]);

        let data = FormData::from_node(&tree);
        assert_eq!(data.get("bio"), Some("Hello"));
        assert_eq!(data.get("country"), Some("jp"));
        assert_eq!(data.get_all("tags"), vec!["a", "c"]);
    }

    #[test]
    fn test_last_value_wins_in_map() {
        let tree = form(vec![
            Node::element("input").attr("name", "x").attr("value", "1"),
            Node::element("input").attr("name", "x").attr("value", "2"),
        ]);
        let data = FormData::from_node(&tree);
        assert_eq!(data.get_all("x"), vec!["1", "2"]);
        assert_eq!(data.to_values().get("x").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_disabled_fieldset() {
        let tree = form(vec![Node::element("fieldset")
            .flag("disabled", true)
            .child(Node::element("input").attr("name", "inner").attr("value", "1"))]);
        assert!(FormData::from_node(&tree).is_empty());
    }
}
