// Single-line text input for FormCraft

use crate::component::{Callback, Component, ComponentError, Context, Node};
use crate::kit::components::fields::base::{
    describe_control, field_frame, ring_class, FieldCore, FieldProps,
};
use crate::kit::utils::join_classes;
use crate::state::{ChangeOutcome, Validator};

/// HTML input type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Search,
    Date,
    Time,
    DateTimeLocal,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
            InputType::Tel => "tel",
            InputType::Url => "url",
            InputType::Search => "search",
            InputType::Date => "date",
            InputType::Time => "time",
            InputType::DateTimeLocal => "datetime-local",
        }
    }
}

/// Text input props
#[derive(Debug, Clone, Default)]
pub struct TextInputProps {
    pub field: FieldProps,
    pub input_type: InputType,
    pub placeholder: Option<String>,
    pub autocomplete: Option<String>,
    pub min_value: Option<String>,
    pub max_value: Option<String>,
    pub step: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    pub input_mode: Option<String>,
    /// Text rendered before the control
    pub prefix: Option<String>,
    /// Text rendered after the control
    pub suffix: Option<String>,
    /// Show a button that reveals a password
    pub revealable: bool,
    /// Show a button that copies the value to the clipboard
    pub copyable: bool,
    pub default_value: String,
    pub validate: Option<Validator<String>>,
    pub on_change: Option<Callback<String>>,
}

/// Text input component
#[derive(Debug)]
pub struct TextInput {
    props: TextInputProps,
    core: FieldCore<String>,
    revealed: bool,
    copied: bool,
}

impl TextInput {
    /// User typed a new value
    pub fn change(&mut self, value: impl Into<String>) -> ChangeOutcome {
        self.core.input(
            &self.props.field,
            value.into(),
            self.props.on_change.as_ref(),
            self.props.validate.as_ref(),
        )
    }

    pub fn value(&self) -> &str {
        self.core.state().value()
    }

    pub fn error(&self) -> Option<String> {
        self.core.state().error()
    }

    /// Error as rendered, including form-level errors
    pub fn displayed_error(&self) -> Option<String> {
        self.core.displayed_error(&self.props.field.name)
    }

    pub fn is_touched(&self) -> bool {
        self.core.state().is_touched()
    }

    /// Show or hide a revealable password
    pub fn toggle_reveal(&mut self) {
        if self.can_reveal() {
            self.revealed = !self.revealed;
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Copy the current value to the clipboard
    pub fn copy(&mut self) -> bool {
        if !self.props.copyable {
            return false;
        }
        self.core
            .context()
            .document()
            .write_clipboard(self.value().to_string());
        self.copied = true;
        true
    }

    /// Whether the copy confirmation is showing
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Hide the copy confirmation, typically after a short delay
    pub fn reset_copied(&mut self) {
        self.copied = false;
    }

    fn can_reveal(&self) -> bool {
        self.props.input_type == InputType::Password && self.props.revealable
    }

    fn effective_type(&self) -> &'static str {
        if self.can_reveal() && self.revealed {
            InputType::Text.as_str()
        } else {
            self.props.input_type.as_str()
        }
    }

    fn suffix_nodes(&self) -> Vec<Node> {
        let mut nodes = Vec::new();
        if let Some(suffix) = &self.props.suffix {
            nodes.push(affix(suffix));
        }
        if self.can_reveal() {
            let label = if self.revealed {
                "Hide password"
            } else {
                "Show password"
            };
            nodes.push(
                Node::element("button")
                    .attr("type", "button")
                    .attr("data-action", "reveal")
                    .class("text-gray-400 hover:text-gray-500 transition focus:outline-none")
                    .attr("aria-label", label),
            );
        }
        if self.props.copyable {
            nodes.push(
                Node::element("button")
                    .attr("type", "button")
                    .attr("data-action", "copy")
                    .class(if self.copied {
                        "text-green-600"
                    } else {
                        "text-gray-400 hover:text-gray-500 transition focus:outline-none"
                    })
                    .attr("aria-label", "Copy to clipboard"),
            );
        }
        nodes
    }
}

fn affix(text: &str) -> Node {
    Node::element("span")
        .class("text-sm whitespace-nowrap text-gray-500")
        .child(Node::text(text))
}

impl Component for TextInput {
    type Props = TextInputProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let core = FieldCore::new(context, props.default_value.clone());
        Self {
            props,
            core,
            revealed: false,
            copied: false,
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        if !self.can_reveal() {
            self.revealed = false;
        }
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let field = &props.field;
        let id = self.core.element_id();
        let error = self.displayed_error();
        let suffix = self.suffix_nodes();
        let has_prefix = props.prefix.is_some();
        let has_suffix = !suffix.is_empty();

        let input = Node::element("input")
            .attr("id", &id)
            .attr("name", &field.name)
            .attr("type", self.effective_type())
            .attr("value", self.value())
            .flag("required", field.required)
            .flag("disabled", field.disabled)
            .flag("readonly", field.read_only)
            .attr_opt("placeholder", props.placeholder.clone())
            .attr_opt("autocomplete", props.autocomplete.clone())
            .attr_opt("min", props.min_value.clone())
            .attr_opt("max", props.max_value.clone())
            .attr_opt("step", props.step.clone())
            .attr_opt("minlength", props.min_length.map(|n| n.to_string()))
            .attr_opt("maxlength", props.max_length.map(|n| n.to_string()))
            .attr_opt("pattern", props.pattern.clone())
            .attr_opt("inputmode", props.input_mode.clone())
            .class(join_classes([
                "block w-full appearance-none border-none bg-white/0 text-start text-sm leading-6 text-gray-950 py-1.5",
                "placeholder:text-gray-400 focus:ring-0 focus:outline-none disabled:text-gray-500",
                if has_prefix { "ps-0" } else { "ps-3" },
                if has_suffix { "pe-0" } else { "pe-3" },
            ]));
        let input = describe_control(input, &id, error.as_deref());

        let control = Node::element("div")
            .class(join_classes([
                "flex rounded-lg bg-white shadow-sm ring-1 transition duration-75",
                ring_class(field.disabled, error.is_some()),
            ]))
            .child_opt(props.prefix.as_ref().map(|prefix| {
                Node::element("div")
                    .class("flex items-center gap-x-3 ps-3 pe-2")
                    .child(affix(prefix))
            }))
            .child(Node::element("div").class("min-w-0 flex-1").child(input))
            .child_opt(has_suffix.then(|| {
                Node::element("div")
                    .class("flex items-center gap-x-3 pe-3 ps-2")
                    .children(suffix)
            }));

        Ok(vec![field_frame(
            self.core.context(),
            field,
            Some(&id),
            error.as_deref(),
            control,
        )?])
    }
}
