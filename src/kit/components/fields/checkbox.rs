// Checkbox field for FormCraft

use crate::component::{Callback, Component, ComponentError, Context, Node};
use crate::kit::components::fields::base::{
    describe_control, field_frame, messages, FieldCore, FieldProps,
};
use crate::kit::utils::join_classes;
use crate::state::{ChangeOutcome, Validator};

/// Checkbox props
#[derive(Debug, Clone)]
pub struct CheckboxProps {
    pub field: FieldProps,
    /// Box beside the label instead of label above the box
    pub inline: bool,
    pub default_value: bool,
    pub validate: Option<Validator<bool>>,
    pub on_change: Option<Callback<bool>>,
}

impl Default for CheckboxProps {
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

/// Single boolean checkbox
#[derive(Debug)]
pub struct Checkbox {
    props: CheckboxProps,
    core: FieldCore<bool>,
}

impl Checkbox {
    /// Set the checked state as the user did
    pub fn set_checked(&mut self, checked: bool) -> ChangeOutcome {
        self.core.input(
            &self.props.field,
            checked,
            self.props.on_change.as_ref(),
            self.props.validate.as_ref(),
        )
    }

    /// Flip the checked state
    pub fn toggle(&mut self) -> ChangeOutcome {
        let next = !self.is_checked();
        self.set_checked(next)
    }

    pub fn is_checked(&self) -> bool {
        *self.core.state().value()
    }

    pub fn error(&self) -> Option<String> {
        self.core.state().error()
    }

    pub fn is_touched(&self) -> bool {
        self.core.state().is_touched()
    }
}

/// Classes for checkbox and radio controls
pub(crate) fn choice_class(round: bool, disabled: bool, has_error: bool) -> String {
    join_classes([
        "mt-1 size-4 shrink-0 border-none bg-white shadow-sm ring-1 transition duration-75 checked:ring-0 focus:ring-2 focus:ring-offset-0",
        if round { "rounded-full" } else { "rounded" },
        match (disabled, has_error) {
            (false, true) => "ring-red-600 focus:ring-red-600",
            (false, false) => "ring-gray-950/10 focus:ring-primary-600 text-primary-600",
            (true, true) => "ring-red-600",
            (true, false) => "ring-gray-950/10",
        },
        if disabled {
            "pointer-events-none bg-gray-50 text-gray-50"
        } else {
            ""
        },
    ])
}

/// Label color for choice controls
pub(crate) fn choice_label_class(disabled: bool) -> &'static str {
    if disabled {
        "text-gray-500"
    } else {
        "text-gray-950"
    }
}

impl Component for Checkbox {
    type Props = CheckboxProps;

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

        let input = Node::element("input")
            .attr("id", &id)
            .attr("name", &field.name)
            .attr("type", "checkbox")
            .flag("checked", self.is_checked())
            .flag("required", field.required)
            .flag("disabled", field.disabled)
            .flag("readonly", field.read_only)
            .class(choice_class(false, field.disabled, error.is_some()));
        let input = describe_control(input, &id, error.as_deref());

        if !self.props.inline {
            return Ok(vec![field_frame(
                self.core.context(),
                field,
                Some(&id),
                error.as_deref(),
                input,
            )?]);
        }

        let text = field.label.as_ref().map(|label| {
            Node::element("label")
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

        let mut column = Node::element("div").class("flex flex-col").child_opt(text);
        column = column.children(messages(
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
                    .child(input)
                    .child(column),
            )])
    }
}
