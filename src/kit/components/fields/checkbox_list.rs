// Checkbox list for FormCraft

use crate::component::{Callback, Component, ComponentError, Context, Node};
use crate::kit::components::fields::base::{field_frame, FieldCore, FieldOption, FieldProps};
use crate::kit::components::fields::checkbox::{choice_class, choice_label_class};
use crate::kit::utils::{join_classes, string::contains_ignore_case};
use crate::state::{ChangeOutcome, Validator};

/// Checkbox list props
#[derive(Debug, Clone, Default)]
pub struct CheckboxListProps {
    pub field: FieldProps,
    pub options: Vec<FieldOption>,
    /// Grid columns, 1 to 4. Stacked when unset.
    pub columns: Option<u8>,
    /// Show a filter box above the options
    pub searchable: bool,
    /// Show select all / deselect all buttons
    pub bulk_toggleable: bool,
    pub default_value: Vec<String>,
    pub validate: Option<Validator<Vec<String>>>,
    pub on_change: Option<Callback<Vec<String>>>,
}

/// Many-of-many choice
#[derive(Debug)]
pub struct CheckboxList {
    props: CheckboxListProps,
    core: FieldCore<Vec<String>>,
    query: String,
}

impl CheckboxList {
    /// Check or uncheck one option
    pub fn toggle(&mut self, value: &str) -> ChangeOutcome {
        let enabled = self
            .props
            .options
            .iter()
            .any(|option| option.value == value && !option.disabled);
        if !enabled {
            return ChangeOutcome::Ignored;
        }

        let mut next = self.value().to_vec();
        match next.iter().position(|selected| selected == value) {
            Some(index) => {
                next.remove(index);
            }
            None => next.push(value.to_string()),
        }
        self.commit(next)
    }

    /// Check every visible, enabled option. Selections hidden by the filter are kept.
    pub fn select_all(&mut self) -> ChangeOutcome {
        let mut next = self.value().to_vec();
        for option in self.filtered_options() {
            if !option.disabled && !next.contains(&option.value) {
                next.push(option.value.clone());
            }
        }
        self.commit(next)
    }

    /// Uncheck every visible, enabled option. Selections hidden by the filter are kept.
    pub fn deselect_all(&mut self) -> ChangeOutcome {
        let cleared: Vec<&str> = self
            .filtered_options()
            .into_iter()
            .filter(|option| !option.disabled)
            .map(|option| option.value.as_str())
            .collect();
        let next: Vec<String> = self
            .value()
            .iter()
            .filter(|selected| !cleared.contains(&selected.as_str()))
            .cloned()
            .collect();
        self.commit(next)
    }

    /// Update the filter text. Has no effect unless the list is searchable.
    pub fn search(&mut self, query: impl Into<String>) {
        if self.props.searchable {
            self.query = query.into();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Options matching the filter, by label or description
    pub fn filtered_options(&self) -> Vec<&FieldOption> {
        let query = self.query.trim();
        self.props
            .options
            .iter()
            .filter(|option| {
                query.is_empty()
                    || contains_ignore_case(&option.label, query)
                    || option
                        .description
                        .as_deref()
                        .is_some_and(|description| contains_ignore_case(description, query))
            })
            .collect()
    }

    pub fn value(&self) -> &[String] {
        self.core.state().value()
    }

    pub fn error(&self) -> Option<String> {
        self.core.state().error()
    }

    pub fn is_touched(&self) -> bool {
        self.core.state().is_touched()
    }

    fn commit(&mut self, next: Vec<String>) -> ChangeOutcome {
        self.core.input(
            &self.props.field,
            next,
            self.props.on_change.as_ref(),
            self.props.validate.as_ref(),
        )
    }

    fn columns_class(&self) -> &'static str {
        match self.props.columns {
            None => "space-y-3",
            Some(2) => "grid grid-cols-2 gap-4",
            Some(3) => "grid grid-cols-3 gap-4",
            Some(4) => "grid grid-cols-4 gap-4",
            Some(_) => "grid grid-cols-1 gap-4",
        }
    }

    fn bulk_buttons(&self) -> Node {
        let button = |text: &str| {
            Node::element("button")
                .attr("type", "button")
                .flag("disabled", self.props.field.disabled)
                .class("text-sm text-primary-600 hover:text-primary-700 disabled:opacity-50")
                .child(Node::text(text))
        };

        Node::element("div")
            .class("flex gap-2 mb-3")
            .child(button("Select all"))
            .child(
                Node::element("span")
                    .class("text-sm text-gray-400")
                    .child(Node::text("|")),
            )
            .child(button("Deselect all"))
    }
}

impl Component for CheckboxList {
    type Props = CheckboxListProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let core = FieldCore::new(context, props.default_value.clone());
        Self {
            props,
            core,
            query: String::new(),
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        if !props.searchable {
            self.query.clear();
        }
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let field = &self.props.field;
        let id = self.core.element_id();
        let error = self.core.displayed_error(&field.name);
        let filtered = self.filtered_options();
        let input_name = format!("{}[]", field.name);

        let options = filtered.iter().map(|option| {
            let option_id = format!("{id}-{}", option.value);
            let disabled = field.disabled || option.disabled;

            Node::element("div")
                .class("flex items-start gap-x-3")
                .child(
                    Node::element("input")
                        .attr("id", &option_id)
                        .attr("name", &input_name)
                        .attr("type", "checkbox")
                        .attr("value", &option.value)
                        .flag("checked", self.value().contains(&option.value))
                        .flag("required", field.required && self.value().is_empty())
                        .flag("disabled", disabled)
                        .flag("readonly", field.read_only)
                        .class(choice_class(false, disabled, error.is_some())),
                )
                .child(
                    Node::element("div")
                        .class("grid text-sm leading-6")
                        .child(
                            Node::element("label")
                                .attr("for", &option_id)
                                .class(join_classes([
                                    "overflow-hidden font-medium break-words cursor-pointer",
                                    choice_label_class(disabled),
                                ]))
                                .child(Node::text(&option.label)),
                        )
                        .child_opt(option.description.as_ref().map(|text| {
                            Node::element("p")
                                .class(if disabled { "text-gray-400" } else { "text-gray-500" })
                                .child(Node::text(text))
                        })),
                )
        });

        let search = self.props.searchable.then(|| {
            Node::element("div").class("mb-3").child(
                Node::element("input")
                    .attr("type", "text")
                    .attr("value", &self.query)
                    .attr("placeholder", "Search options...")
                    .attr("aria-label", "Search options")
                    .class("block w-full rounded-lg border-none bg-white shadow-sm ring-1 ring-gray-950/10 px-3 py-1.5 text-sm focus:ring-2 focus:ring-primary-600 focus:outline-none"),
            )
        });

        let no_match = (self.props.searchable && filtered.is_empty()).then(|| {
            Node::element("p")
                .class("text-sm text-gray-500 py-4 text-center")
                .child(Node::text("No options found"))
        });

        let body = Node::fragment(
            search
                .into_iter()
                .chain(self.props.bulk_toggleable.then(|| self.bulk_buttons()))
                .chain(Some(
                    Node::element("div")
                        .attr("role", "group")
                        .class(self.columns_class())
                        .children(options),
                ))
                .chain(no_match),
        );

        Ok(vec![field_frame(
            self.core.context(),
            field,
            None,
            error.as_deref(),
            body,
        )?])
    }
}
