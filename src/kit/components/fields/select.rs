// Native select for FormCraft

use serde::Serialize;

use crate::component::{Callback, Component, ComponentError, Context, Node};
use crate::kit::components::fields::base::{
    describe_control, field_frame, ring_class, FieldCore, FieldOption, FieldProps,
};
use crate::kit::utils::join_classes;
use crate::state::{ChangeOutcome, Validator};

/// Current selection of a [`Select`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Selection {
    Single(String),
    Multiple(Vec<String>),
}

impl Selection {
    /// Whether `value` is selected
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Selection::Single(selected) => selected == value,
            Selection::Multiple(selected) => selected.iter().any(|v| v == value),
        }
    }

    /// Selected values as a list
    pub fn values(&self) -> Vec<String> {
        match self {
            Selection::Single(selected) if selected.is_empty() => Vec::new(),
            Selection::Single(selected) => vec![selected.clone()],
            Selection::Multiple(selected) => selected.clone(),
        }
    }
}

/// Select props
#[derive(Debug, Clone, Default)]
pub struct SelectProps {
    pub field: FieldProps,
    pub options: Vec<FieldOption>,
    /// Empty first option for single selects
    pub placeholder: Option<String>,
    pub multiple: bool,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Defaults to nothing selected
    pub default_value: Option<Selection>,
    pub validate: Option<Validator<Selection>>,
    pub on_change: Option<Callback<Selection>>,
}

/// Single or multiple choice from a list
#[derive(Debug)]
pub struct Select {
    props: SelectProps,
    core: FieldCore<Selection>,
}

impl Select {
    /// Apply the values the user selected, in option order.
    /// Unknown and disabled values are dropped.
    pub fn change<I, S>(&mut self, selected: I) -> ChangeOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: Vec<String> = selected
            .into_iter()
            .map(|value| value.as_ref().to_string())
            .collect();
        let valid: Vec<String> = self
            .props
            .options
            .iter()
            .filter(|option| !option.disabled && requested.contains(&option.value))
            .map(|option| option.value.clone())
            .collect();

        let selection = if self.props.multiple {
            Selection::Multiple(valid)
        } else {
            match (valid.into_iter().next(), requested.first()) {
                (Some(value), _) => Selection::Single(value),
                // Choosing the placeholder clears the selection
                (None, Some(value)) if value.is_empty() && self.props.placeholder.is_some() => {
                    Selection::Single(String::new())
                }
                (None, _) => return ChangeOutcome::Ignored,
            }
        };

        self.core.input(
            &self.props.field,
            selection,
            self.props.on_change.as_ref(),
            self.props.validate.as_ref(),
        )
    }

    pub fn value(&self) -> &Selection {
        self.core.state().value()
    }

    pub fn error(&self) -> Option<String> {
        self.core.state().error()
    }

    pub fn is_touched(&self) -> bool {
        self.core.state().is_touched()
    }
}

impl Component for Select {
    type Props = SelectProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let initial = props.default_value.clone().unwrap_or_else(|| {
            if props.multiple {
                Selection::Multiple(Vec::new())
            } else {
                Selection::Single(String::new())
            }
        });
        let core = FieldCore::new(context, initial);
        Self { props, core }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let field = &props.field;
        let id = self.core.element_id();
        let error = self.core.displayed_error(&field.name);

        let placeholder = props
            .placeholder
            .as_ref()
            .filter(|_| !props.multiple)
            .map(|text| {
                Node::element("option")
                    .attr("value", "")
                    .flag("disabled", field.required)
                    .flag("selected", self.value().values().is_empty())
                    .child(Node::text(text))
            });

        let options = props.options.iter().map(|option| {
            Node::element("option")
                .attr("value", &option.value)
                .flag("disabled", option.disabled)
                .flag("selected", self.value().contains(&option.value))
                .child(Node::text(&option.label))
        });

        let select = Node::element("select")
            .attr("id", &id)
            .attr("name", &field.name)
            .flag("multiple", props.multiple)
            .flag("required", field.required)
            .flag("disabled", field.is_locked())
            .class(join_classes([
                "block w-full appearance-none border-none bg-white/0 text-start text-sm leading-6 text-gray-950 focus:ring-0 focus:outline-none",
                if props.prefix.is_some() { "ps-0" } else { "ps-3" },
                if props.suffix.is_some() { "pe-0 pr-8" } else { "pe-3 pr-8" },
                if props.multiple { "py-2" } else { "py-1.5" },
            ]))
            .child_opt(placeholder)
            .children(options);
        let select = describe_control(select, &id, error.as_deref());

        let affix = |text: &String, class: &str| {
            Node::element("div").class(class).child(
                Node::element("span")
                    .class("text-sm whitespace-nowrap text-gray-500")
                    .child(Node::text(text)),
            )
        };

        let control = Node::element("div")
            .class(join_classes([
                "flex rounded-lg bg-white shadow-sm ring-1 transition duration-75",
                ring_class(field.disabled, error.is_some()),
            ]))
            .child_opt(
                props
                    .prefix
                    .as_ref()
                    .map(|text| affix(text, "flex items-center gap-x-3 ps-3 pe-2")),
            )
            .child(
                Node::element("div")
                    .class("min-w-0 flex-1 relative")
                    .child(select),
            )
            .child_opt(
                props
                    .suffix
                    .as_ref()
                    .map(|text| affix(text, "flex items-center gap-x-3 pe-3 ps-2")),
            );

        Ok(vec![field_frame(
            self.core.context(),
            field,
            Some(&id),
            error.as_deref(),
            control,
        )?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::root;
    use crate::state::validator;
    use std::sync::{Arc, Mutex};

    fn options() -> Vec<FieldOption> {
        vec![
            FieldOption::new("jp", "Japan"),
            FieldOption::new("fr", "France"),
            FieldOption::new("xx", "Closed").disabled(),
        ]
    }

    #[test]
    fn test_single_select_with_placeholder() {
        let mut select = Select::create(
            SelectProps {
                field: FieldProps::named("country"),
                options: options(),
                placeholder: Some("Choose".to_string()),
                validate: Some(validator(|s: &Selection| {
                    s.values().is_empty().then(|| "pick one".to_string())
                })),
                ..Default::default()
            },
            Context::new(),
        );
        assert_eq!(select.value(), &Selection::Single(String::new()));

        let _ = select.change(["fr"]);
        assert_eq!(select.value(), &Selection::Single("fr".to_string()));

        let _ = select.change([""]);
        assert_eq!(select.error().as_deref(), Some("pick one"));

        assert!(!select.change(["xx"]).is_applied());
    }

    #[test]
    fn test_multiple_select_renders_selected() {
        let mut select = Select::create(
            SelectProps {
                field: FieldProps::named("countries"),
                options: options(),
                multiple: true,
                placeholder: Some("ignored".to_string()),
                ..Default::default()
            },
            Context::new(),
        );
        let _ = select.change(["fr", "jp", "xx"]);
        assert_eq!(
            select.value(),
            &Selection::Multiple(vec!["jp".to_string(), "fr".to_string()])
        );

        let tree = root(select.render().unwrap());
        assert!(tree.find_by_tag("select")[0].has_attribute("multiple"));
        assert_eq!(tree.find_by_tag("option").len(), 3);
        assert_eq!(tree.find_all(|n| n.has_attribute("selected")).len(), 2);
    }

    #[test]
    fn test_on_change_fires_once_unless_locked() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let props = SelectProps {
            field: FieldProps::named("country"),
            options: options(),
            default_value: Some(Selection::Single("jp".to_string())),
            on_change: Some(Callback::new(move |selection: Selection| {
                sink.lock().unwrap().push(selection)
            })),
            ..Default::default()
        };

        let mut select = Select::create(props.clone(), Context::new());
        assert_eq!(select.value(), &Selection::Single("jp".to_string()));
        assert!(select.change(["fr"]).is_applied());
        assert_eq!(
            *calls.lock().unwrap(),
            vec![Selection::Single("fr".to_string())]
        );

        for lock in [
            FieldProps { disabled: true, ..FieldProps::named("country") },
            FieldProps { read_only: true, ..FieldProps::named("country") },
        ] {
            let mut locked = Select::create(SelectProps { field: lock, ..props.clone() }, Context::new());
            assert!(!locked.change(["fr"]).is_applied());
            assert_eq!(locked.value(), &Selection::Single("jp".to_string()));
        }
        assert_eq!(calls.lock().unwrap().len(), 1);
    }
}
