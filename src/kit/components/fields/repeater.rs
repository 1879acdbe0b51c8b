// Repeater field for FormCraft
//
// A list of sub-form items the user can add, delete and reorder. Item
// content is rendered by the host; the repeater owns the list and emits one
// hidden input per item field so the list is submitted with the form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::component::{render_child, Callback, Component, ComponentError, Context, Node};
use crate::kit::components::atoms::{Button, ButtonProps, Icon, IconProps};
use crate::kit::components::fields::base::{field_frame, FieldCore, FieldProps};
use crate::kit::theme::Size;
use crate::kit::utils::id::generate_item_id;
use crate::state::{ChangeOutcome, Validator};

/// One entry of a repeater
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeaterItem {
    /// Stable identity, kept across reordering
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RepeaterItem {
    /// New item with a generated id and no fields
    pub fn new() -> Self {
        Self::with_id(generate_item_id())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Same item with `key` set
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl Default for RepeaterItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the content of one item, given the item and its index
pub type ItemRenderer = Callback<(RepeaterItem, usize), Vec<Node>>;

/// Repeater props
#[derive(Debug, Clone)]
pub struct RepeaterProps {
    pub field: FieldProps,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub addable: bool,
    pub deletable: bool,
    pub reorderable: bool,
    pub add_action_label: String,
    /// Heading for each item. Defaults to `Item <n>`.
    pub item_label: Option<Callback<(RepeaterItem, usize), String>>,
    pub render_item: Option<ItemRenderer>,
    pub default_value: Vec<RepeaterItem>,
    pub validate: Option<Validator<Vec<RepeaterItem>>>,
    pub on_change: Option<Callback<Vec<RepeaterItem>>>,
}

impl Default for RepeaterProps {
    fn default() -> Self {
        Self {
            field: FieldProps::default(),
            min_items: None,
            max_items: None,
            addable: true,
            deletable: true,
            reorderable: true,
            add_action_label: "Add item".to_string(),
            item_label: None,
            render_item: None,
            default_value: Vec::new(),
            validate: None,
            on_change: None,
        }
    }
}

/// Dynamic list of sub-form items
#[derive(Debug)]
pub struct Repeater {
    props: RepeaterProps,
    core: FieldCore<Vec<RepeaterItem>>,
}

impl Repeater {
    pub fn items(&self) -> &[RepeaterItem] {
        self.core.state().value()
    }

    pub fn error(&self) -> Option<String> {
        self.core.state().error()
    }

    pub fn is_touched(&self) -> bool {
        self.core.state().is_touched()
    }

    /// Whether another item may be appended
    pub fn can_add(&self) -> bool {
        self.props.addable
            && !self.props.field.is_locked()
            && self
                .props
                .max_items
                .map_or(true, |max| self.items().len() < max)
    }

    /// Whether items may be deleted right now
    pub fn can_delete(&self) -> bool {
        self.props.deletable
            && !self.props.field.is_locked()
            && self
                .props
                .min_items
                .map_or(true, |min| self.items().len() > min)
    }

    /// Append an empty item with a fresh id
    pub fn add(&mut self) -> ChangeOutcome {
        if !self.can_add() {
            log::debug!("repeater `{}`: add blocked", self.props.field.name);
            return ChangeOutcome::Ignored;
        }
        let mut items = self.items().to_vec();
        items.push(RepeaterItem::new());
        self.commit(items)
    }

    /// Remove the item at `index`
    pub fn delete(&mut self, index: usize) -> ChangeOutcome {
        if !self.can_delete() || index >= self.items().len() {
            log::debug!("repeater `{}`: delete of {index} blocked", self.props.field.name);
            return ChangeOutcome::Ignored;
        }
        let mut items = self.items().to_vec();
        items.remove(index);
        self.commit(items)
    }

    /// Swap the item at `index` with the one above it
    pub fn move_up(&mut self, index: usize) -> ChangeOutcome {
        if index == 0 {
            return ChangeOutcome::Ignored;
        }
        self.swap(index - 1, index)
    }

    /// Swap the item at `index` with the one below it
    pub fn move_down(&mut self, index: usize) -> ChangeOutcome {
        self.swap(index, index + 1)
    }

    /// Merge `updates` into the item at `index`. The id cannot be changed.
    pub fn update_item(&mut self, index: usize, updates: Map<String, Value>) -> ChangeOutcome {
        if self.props.field.is_locked() || index >= self.items().len() {
            return ChangeOutcome::Ignored;
        }
        let mut items = self.items().to_vec();
        let item = &mut items[index];
        for (key, value) in updates {
            if key != "id" {
                item.fields.insert(key, value);
            }
        }
        self.commit(items)
    }

    fn swap(&mut self, upper: usize, lower: usize) -> ChangeOutcome {
        if !self.props.reorderable
            || self.props.field.is_locked()
            || lower >= self.items().len()
        {
            return ChangeOutcome::Ignored;
        }
        let mut items = self.items().to_vec();
        items.swap(upper, lower);
        self.commit(items)
    }

    fn commit(&mut self, items: Vec<RepeaterItem>) -> ChangeOutcome {
        log::debug!(
            "repeater `{}` now has {} item(s)",
            self.props.field.name,
            items.len()
        );
        self.core.force_input(
            &self.props.field.name,
            items,
            self.props.on_change.as_ref(),
            self.props.validate.as_ref(),
        )
    }

    fn item_label(&self, item: &RepeaterItem, index: usize) -> String {
        match &self.props.item_label {
            Some(label) => label.call((item.clone(), index)),
            None => format!("Item {}", index + 1),
        }
    }

    fn action_button(
        &self,
        title: &str,
        path: &str,
        class: &str,
    ) -> Result<Vec<Node>, ComponentError> {
        let icon = render_child::<Icon>(
            IconProps {
                content: Some(svg_path(path)),
                size: Size::Sm,
                ..Default::default()
            },
            self.core.context(),
        )?;
        Ok(vec![Node::element("button")
            .attr("type", "button")
            .attr("title", title)
            .attr("aria-label", title)
            .class(class)
            .children(icon)])
    }

    fn render_item(&self, item: &RepeaterItem, index: usize) -> Result<Node, ComponentError> {
        let count = self.items().len();
        let reorder = self.props.reorderable && !self.props.field.is_locked();
        let plain = "p-1.5 text-gray-500 hover:text-gray-700";

        let mut actions = Node::element("div").class("flex items-center gap-1");
        if reorder && index > 0 {
            actions = actions.children(self.action_button("Move up", "M5 15l7-7 7 7", plain)?);
        }
        if reorder && index + 1 < count {
            actions = actions.children(self.action_button("Move down", "M19 9l-7 7-7-7", plain)?);
        }
        if self.can_delete() {
            actions = actions.children(self.action_button(
                "Delete",
                "M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16",
                "p-1.5 text-red-600 hover:text-red-700",
            )?);
        }

        let content = self
            .props
            .render_item
            .as_ref()
            .map(|render| render.call((item.clone(), index)))
            .unwrap_or_default();

        let hidden = item.fields.iter().map(|(key, value)| {
            Node::element("input")
                .attr("type", "hidden")
                .attr("name", format!("{}[{index}][{key}]", self.props.field.name))
                .attr("value", submitted_value(value))
        });

        Ok(Node::element("div")
            .attr("data-item-id", &item.id)
            .class("relative rounded-lg border border-gray-950/10 bg-white p-4")
            .child(
                Node::element("div")
                    .class("flex items-center justify-between mb-3")
                    .child(
                        Node::element("div")
                            .class("text-sm font-medium text-gray-950")
                            .child(Node::text(self.item_label(item, index))),
                    )
                    .child(actions),
            )
            .child(Node::element("div").children(content))
            .children(hidden))
    }
}

/// Strings are submitted as-is, everything else as JSON
fn submitted_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn svg_path(d: &str) -> Node {
    Node::element("svg")
        .attr("fill", "none")
        .attr("viewBox", "0 0 24 24")
        .attr("stroke", "currentColor")
        .child(
            Node::element("path")
                .attr("stroke-linecap", "round")
                .attr("stroke-linejoin", "round")
                .attr("stroke-width", "2")
                .attr("d", d),
        )
}

impl Component for Repeater {
    type Props = RepeaterProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let core = FieldCore::new(context, props.default_value.clone());
        Self { props, core }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let field = &self.props.field;
        let error = self.core.displayed_error(&field.name);

        let mut list = Node::element("div").class("space-y-3");
        for (index, item) in self.items().iter().enumerate() {
            list = list.child(self.render_item(item, index)?);
        }
        if self.items().is_empty() {
            list = list.child(
                Node::element("div")
                    .class("text-center py-8 text-sm text-gray-500 border border-dashed border-gray-950/10 rounded-lg")
                    .child(Node::text("No items yet")),
            );
        }

        let add = if self.can_add() {
            render_child::<Button>(
                ButtonProps {
                    text: self.props.add_action_label.clone(),
                    outlined: true,
                    size: Size::Sm,
                    icon: Some(svg_path("M12 4v16m8-8H4")),
                    ..Default::default()
                },
                self.core.context(),
            )?
        } else {
            Vec::new()
        };

        let body = Node::fragment(std::iter::once(list).chain(add));

        Ok(vec![field_frame(
            self.core.context(),
            field,
            None,
            error.as_deref(),
            body,
        )?])
    }
}
