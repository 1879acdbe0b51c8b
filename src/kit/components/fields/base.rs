// Plumbing shared by every field component

use serde::Serialize;

use crate::component::{
    render_child, Callback, ComponentError, ComponentId, Context, Node,
};
use crate::kit::components::atoms::{
    ErrorText, ErrorTextProps, HelperText, HelperTextProps, Label, LabelProps,
};
use crate::kit::form::FormHandle;
use crate::kit::utils::join_classes;
use crate::state::{ChangeOutcome, FieldState, Validator};

/// Props every field accepts
#[derive(Debug, Clone, Default)]
pub struct FieldProps {
    /// Submitted field name
    pub name: String,
    pub label: Option<String>,
    pub helper_text: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub class: Option<String>,
}

impl FieldProps {
    /// Field props with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Same props with a label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether user input must be ignored
    pub fn is_locked(&self) -> bool {
        self.disabled || self.read_only
    }
}

/// A choice offered by Radio, Select and CheckboxList
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub disabled: bool,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Identity, context and value state of one field instance
#[derive(Debug)]
pub struct FieldCore<T> {
    id: ComponentId,
    context: Context,
    state: FieldState<T>,
}

impl<T> FieldCore<T>
where
    T: Clone + Send + Sync + Serialize + 'static,
{
    pub fn new(context: Context, default_value: T) -> Self {
        Self {
            id: ComponentId::new(),
            context,
            state: FieldState::new(default_value),
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn state(&self) -> &FieldState<T> {
        &self.state
    }

    /// Element id of the field's control
    pub fn element_id(&self) -> String {
        self.context.element_id(self.id)
    }

    /// Enclosing form, if any
    pub fn form(&self) -> Option<FormHandle> {
        self.context.provider().consume::<FormHandle>()
    }

    /// Apply user input unless the field is locked, then record it in the form
    pub fn input(
        &mut self,
        field: &FieldProps,
        value: T,
        on_change: Option<&Callback<T>>,
        validate: Option<&Validator<T>>,
    ) -> ChangeOutcome {
        if field.is_locked() {
            log::debug!("ignoring input on locked field `{}`", field.name);
            return ChangeOutcome::Ignored;
        }

        let outcome = self.state.commit(value, on_change, validate);
        self.record(&field.name);
        outcome
    }

    /// Apply a value unconditionally, for fields with their own locking rules
    pub fn force_input(
        &mut self,
        name: &str,
        value: T,
        on_change: Option<&Callback<T>>,
        validate: Option<&Validator<T>>,
    ) -> ChangeOutcome {
        let outcome = self.state.commit(value, on_change, validate);
        self.record(name);
        outcome
    }

    fn record(&self, name: &str) {
        let Some(form) = self.form() else {
            return;
        };
        match serde_json::to_value(self.state.value()) {
            Ok(value) => form.set_field_value(name, value),
            Err(err) => log::warn!("could not record value of `{name}` in form: {err}"),
        }
        form.set_field_touched(name, true);
    }

    /// Local error, or the form-level error for `name` when there is none
    pub fn displayed_error(&self, name: &str) -> Option<String> {
        self.state
            .error()
            .or_else(|| self.form().and_then(|form| form.error(name)))
    }
}

/// Ring classes for bordered controls
pub fn ring_class(disabled: bool, has_error: bool) -> &'static str {
    match (disabled, has_error) {
        (false, true) => "ring-red-600 focus-within:ring-2 focus-within:ring-red-600",
        (false, false) => "ring-gray-950/10 focus-within:ring-2 focus-within:ring-primary-600",
        (true, true) => "ring-red-600 bg-gray-50",
        (true, false) => "ring-gray-950/10 bg-gray-50",
    }
}

/// Attach error state attributes to a control
pub fn describe_control(control: Node, id: &str, error: Option<&str>) -> Node {
    match error {
        Some(_) => control
            .attr("aria-invalid", "true")
            .attr("aria-describedby", format!("{id}-error")),
        None => control,
    }
}

/// Label, helper text and error text around a control
pub fn field_frame(
    context: &Context,
    field: &FieldProps,
    control_id: Option<&str>,
    error: Option<&str>,
    control: Node,
) -> Result<Node, ComponentError> {
    let mut frame = Node::element("div").class(join_classes([
        "space-y-2",
        field.class.as_deref().unwrap_or_default(),
    ]));

    if let Some(label) = &field.label {
        frame = frame.children(render_child::<Label>(
            LabelProps {
                text: label.clone(),
                html_for: control_id.map(str::to_string),
                required: field.required,
                ..Default::default()
            },
            context,
        )?);
    }

    frame = frame.child(control);
    frame = frame.children(messages(context, field, control_id, error)?);
    Ok(frame)
}

/// Helper text when valid, error text otherwise
pub fn messages(
    context: &Context,
    field: &FieldProps,
    control_id: Option<&str>,
    error: Option<&str>,
) -> Result<Vec<Node>, ComponentError> {
    match (error, &field.helper_text) {
        (Some(error), _) => render_child::<ErrorText>(
            ErrorTextProps {
                text: error.to_string(),
                id: control_id.map(|id| format!("{id}-error")),
                class: None,
            },
            context,
        ),
        (None, Some(helper)) => render_child::<HelperText>(
            HelperTextProps {
                text: helper.clone(),
                class: None,
            },
            context,
        ),
        (None, None) => Ok(Vec::new()),
    }
}
