// On/off switch for FormCraft

use crate::component::{Callback, Component, ComponentError, Context, Node};
use crate::events::{Key, KeyboardEvent};
use crate::kit::components::fields::base::{field_frame, messages, FieldCore, FieldProps};
use crate::kit::components::fields::checkbox::choice_label_class;
use crate::kit::utils::join_classes;
use crate::state::{ChangeOutcome, Validator};

/// Toggle props
#[derive(Debug, Clone)]
pub struct ToggleProps {
    pub field: FieldProps,
    pub inline: bool,
    pub default_value: bool,
    pub validate: Option<Validator<bool>>,
    pub on_change: Option<Callback<bool>>,
}

impl Default for ToggleProps {
    fn default() -> Self {
        Self {
            field: FieldProps::default(),
            inline: true,
            default_value: false,
            validate: None,
            on_change: None,
        }
    }
}

/// Switch rendered as a button with a hidden checkbox carrying the value
#[derive(Debug)]
pub struct Toggle {
    props: ToggleProps,
    core: FieldCore<bool>,
}

impl Toggle {
    /// Flip the switch (click on the switch or its label)
    pub fn toggle(&mut self) -> ChangeOutcome {
        let next = !self.is_on();
        self.core.input(
            &self.props.field,
            next,
            self.props.on_change.as_ref(),
            self.props.validate.as_ref(),
        )
    }

    /// Space and Enter flip the switch
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> ChangeOutcome {
        match event.key {
            Key::Space | Key::Enter => self.toggle(),
            _ => ChangeOutcome::Ignored,
        }
    }

    pub fn is_on(&self) -> bool {
        *self.core.state().value()
    }

    pub fn error(&self) -> Option<String> {
        self.core.state().error()
    }

    pub fn is_touched(&self) -> bool {
        self.core.state().is_touched()
    }

    fn switch(&self, id: &str, has_error: bool) -> Node {
        let field = &self.props.field;
        let on = self.is_on();
        let track = match (on, has_error) {
            (true, true) => "bg-red-600",
            (true, false) => "bg-primary-600",
            (false, true) => "bg-red-100",
            (false, false) => "bg-gray-200",
        };

        Node::element("button")
            .attr("type", "button")
            .attr("role", "switch")
            .attr("aria-checked", on.to_string())
            .attr_opt(
                "aria-labelledby",
                field.label.as_ref().map(|_| format!("{id}-label")),
            )
            .flag("disabled", field.disabled)
            .class(join_classes([
                "relative inline-flex h-6 w-11 items-center rounded-full transition-colors duration-200",
                "focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:pointer-events-none disabled:opacity-50",
                track,
            ]))
            .child(
                Node::element("input")
                    .attr("type", "checkbox")
                    .attr("id", id)
                    .attr("name", &field.name)
                    .flag("checked", on)
                    .flag("required", field.required)
                    .flag("readonly", true)
                    .attr("tabindex", "-1")
                    .class("sr-only")
                    .attr("aria-hidden", "true"),
            )
            .child(Node::element("span").class(join_classes([
                "inline-block h-4 w-4 transform rounded-full bg-white shadow-lg ring-0 transition duration-200",
                if on { "translate-x-6" } else { "translate-x-1" },
            ])))
    }
}

impl Component for Toggle {
    type Props = ToggleProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let core = FieldCore::new(context, props.default_value);
        Self { props, core }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let field = &self.props.field;
        let id = self.core.element_id();
        let error = self.core.displayed_error(&field.name);
        let switch = self.switch(&id, error.is_some());

        if !self.props.inline {
            let mut frame = field_frame(
                self.core.context(),
                field,
                Some(&id),
                error.as_deref(),
                switch,
            )?;
            if let Some(label) = frame
                .child_nodes_mut()
                .first_mut()
                .filter(|node| node.tag() == Some("label"))
            {
                label.set_attribute("id", format!("{id}-label"));
            }
            return Ok(vec![frame]);
        }

        let text = field.label.as_ref().map(|label| {
            Node::element("label")
                .attr("id", format!("{id}-label"))
                .attr("for", &id)
                .class(join_classes([
                    "text-sm font-medium leading-6 cursor-pointer",
                    choice_label_class(field.disabled),
                ]))
                .child(Node::text(label))
                .child_opt(field.required.then(|| {
                    Node::element("span")
                        .class("text-red-600 ml-1")
                        .child(Node::text("*"))
                }))
        });
        let column = Node::element("div")
            .class("flex flex-col")
            .child_opt(text)
            .children(messages(
                self.core.context(),
                field,
                Some(&id),
                error.as_deref(),
            )?);

        Ok(vec![Node::element("div")
            .class(field.class.as_deref().unwrap_or_default())
            .child(
                Node::element("div")
                    .class("flex items-start gap-x-3")
                    .child(switch)
                    .child(column),
            )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::root;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_keyboard_toggles() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut toggle = Toggle::create(
            ToggleProps {
                field: FieldProps::named("notify").with_label("Notify me"),
                on_change: Some(Callback::new(move |_: bool| {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
                ..Default::default()
            },
            Context::new(),
        );

        let _ = toggle.handle_key(&KeyboardEvent::new(Key::Space));
        assert!(toggle.is_on());
        let _ = toggle.handle_key(&KeyboardEvent::new(Key::Enter));
        assert!(!toggle.is_on());
        assert!(!toggle
            .handle_key(&KeyboardEvent::new(Key::Escape))
            .is_applied());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_switch_markup() {
        let mut toggle = Toggle::create(
            ToggleProps {
                field: FieldProps::named("dark").with_label("Dark mode"),
                ..Default::default()
            },
            Context::new(),
        );
        let _ = toggle.toggle();
        let tree = root(toggle.render().unwrap());
        let switch = tree.find(|n| n.attribute("role") == Some("switch")).unwrap();
        assert_eq!(switch.attribute("aria-checked"), Some("true"));
        let hidden = &switch.find_by_tag("input")[0];
        assert_eq!(hidden.attribute("name"), Some("dark"));
        assert!(hidden.has_attribute("checked"));

        let label_id = switch.attribute("aria-labelledby").unwrap();
        assert_eq!(tree.find_by_id(label_id).unwrap().tag(), Some("label"));
    }

    #[test]
    fn test_stacked_label_gets_id() {
        let toggle = Toggle::create(
            ToggleProps {
                field: FieldProps::named("dark").with_label("Dark mode"),
                inline: false,
                ..Default::default()
            },
            Context::new(),
        );
        let tree = root(toggle.render().unwrap());
        let switch = tree.find(|n| n.attribute("role") == Some("switch")).unwrap();
        let label_id = switch.attribute("aria-labelledby").unwrap();
        assert!(tree.find_by_id(label_id).is_some());
    }

    #[test]
    fn test_read_only_ignores_clicks() {
        let mut toggle = Toggle::create(
            ToggleProps {
                field: FieldProps {
                    read_only: true,
                    ..FieldProps::named("locked")
                },
                default_value: true,
                ..Default::default()
            },
            Context::new(),
        );
        assert!(!toggle.toggle().is_applied());
        assert!(toggle.is_on());
    }
}
