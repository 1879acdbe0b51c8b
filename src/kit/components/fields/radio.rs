// Radio group for FormCraft

use crate::component::{Callback, Component, ComponentError, Context, Node};
use crate::kit::components::fields::base::{field_frame, FieldCore, FieldOption, FieldProps};
use crate::kit::components::fields::checkbox::{choice_class, choice_label_class};
use crate::kit::utils::join_classes;
use crate::state::{ChangeOutcome, Validator};

/// Radio group props
#[derive(Debug, Clone, Default)]
pub struct RadioProps {
    pub field: FieldProps,
    pub options: Vec<FieldOption>,
    /// Lay options out in a row
    pub inline: bool,
    pub default_value: Option<String>,
    pub validate: Option<Validator<Option<String>>>,
    pub on_change: Option<Callback<Option<String>>>,
}

/// One-of-many choice
#[derive(Debug)]
pub struct Radio {
    props: RadioProps,
    core: FieldCore<Option<String>>,
}

impl Radio {
    /// Choose the option with `value`. Unknown and disabled options are ignored.
    pub fn select(&mut self, value: &str) -> ChangeOutcome {
        let selectable = self
            .props
            .options
            .iter()
            .any(|option| option.value == value && !option.disabled);
        if !selectable {
            return ChangeOutcome::Ignored;
        }

        self.core.input(
            &self.props.field,
            Some(value.to_string()),
            self.props.on_change.as_ref(),
            self.props.validate.as_ref(),
        )
    }

    pub fn value(&self) -> Option<&str> {
        self.core.state().value().as_deref()
    }

    pub fn error(&self) -> Option<String> {
        self.core.state().error()
    }

    pub fn is_touched(&self) -> bool {
        self.core.state().is_touched()
    }
}

impl Component for Radio {
    type Props = RadioProps;

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
        let id = self.core.element_id();
        let error = self.core.displayed_error(&field.name);

        let options = self.props.options.iter().map(|option| {
            let option_id = format!("{id}-{}", option.value);
            let disabled = field.disabled || option.disabled;

            let description = option.description.as_ref().map(|text| {
                Node::element("p")
                    .class(if disabled {
                        "font-normal text-gray-400"
                    } else {
                        "font-normal text-gray-500"
                    })
                    .child(Node::text(text))
            });

            Node::element("div")
                .class("flex items-start gap-x-3")
                .child(
                    Node::element("input")
                        .attr("id", &option_id)
                        .attr("name", &field.name)
                        .attr("type", "radio")
                        .attr("value", &option.value)
                        .flag("checked", self.value() == Some(option.value.as_str()))
                        .flag("required", field.required)
                        .flag("disabled", disabled)
                        .flag("readonly", field.read_only)
                        .class(choice_class(true, disabled, error.is_some())),
                )
                .child(
                    Node::element("div")
                        .class("grid text-sm leading-6")
                        .child(
                            Node::element("label")
                                .attr("for", &option_id)
                                .class(join_classes([
                                    "font-medium cursor-pointer",
                                    choice_label_class(disabled),
                                ]))
                                .child(Node::text(&option.label)),
                        )
                        .child_opt(description),
                )
        });

        let group = Node::element("div")
            .attr("role", "radiogroup")
            .class(if self.props.inline {
                "flex flex-wrap gap-4"
            } else {
                "space-y-3"
            })
            .children(options);

        // Group label has no single control to point at
        Ok(vec![field_frame(
            self.core.context(),
            field,
            None,
            error.as_deref(),
            group,
        )?])
    }
}
