// Range slider for FormCraft

use crate::component::{Callback, Component, ComponentError, Context, Node};
use crate::kit::components::fields::base::{describe_control, field_frame, FieldCore, FieldProps};
use crate::kit::utils::math::{clamp, format_number};
use crate::state::{ChangeOutcome, Validator};

/// Slider props
#[derive(Debug, Clone)]
pub struct SliderProps {
    pub field: FieldProps,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Show the current value next to the track
    pub show_value: bool,
    /// Formats the displayed value
    pub format_value: Option<Callback<f64, String>>,
    pub default_value: f64,
    pub validate: Option<Validator<f64>>,
    pub on_change: Option<Callback<f64>>,
}

impl Default for SliderProps {
    fn default() -> Self {
        Self {
            field: FieldProps::default(),
            min: 0.0,
            max: 100.0,
            step: 1.0,
            show_value: false,
            format_value: None,
            default_value: 0.0,
            validate: None,
            on_change: None,
        }
    }
}

/// Numeric range input
#[derive(Debug)]
pub struct Slider {
    props: SliderProps,
    core: FieldCore<f64>,
}

impl Slider {
    /// Set the value, clamped to the slider's range
    pub fn change(&mut self, value: f64) -> ChangeOutcome {
        if value.is_nan() {
            return ChangeOutcome::Ignored;
        }
        let (min, max) = self.bounds();
        self.core.input(
            &self.props.field,
            clamp(value, min, max),
            self.props.on_change.as_ref(),
            self.props.validate.as_ref(),
        )
    }

    /// Set the value from the input's text
    pub fn change_text(&mut self, text: &str) -> ChangeOutcome {
        match text.trim().parse::<f64>() {
            Ok(value) => self.change(value),
            Err(_) => {
                log::debug!("ignoring unparseable slider input `{text}`");
                ChangeOutcome::Ignored
            }
        }
    }

    pub fn value(&self) -> f64 {
        *self.core.state().value()
    }

    /// Value as shown beside the track
    pub fn display_value(&self) -> String {
        match &self.props.format_value {
            Some(format) => format.call(self.value()),
            None => format_number(self.value()),
        }
    }

    pub fn error(&self) -> Option<String> {
        self.core.state().error()
    }

    pub fn is_touched(&self) -> bool {
        self.core.state().is_touched()
    }

    fn bounds(&self) -> (f64, f64) {
        let SliderProps { min, max, .. } = self.props;
        if min <= max {
            (min, max)
        } else {
            (max, min)
        }
    }
}

impl Component for Slider {
    type Props = SliderProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let core = FieldCore::new(context, props.default_value);
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

        let input = Node::element("input")
            .attr("id", &id)
            .attr("name", &field.name)
            .attr("type", "range")
            .attr("value", format_number(self.value()))
            .attr("min", format_number(props.min))
            .attr("max", format_number(props.max))
            .attr("step", format_number(props.step))
            .attr("aria-valuemin", format_number(props.min))
            .attr("aria-valuemax", format_number(props.max))
            .attr("aria-valuenow", format_number(self.value()))
            .flag("required", field.required)
            .flag("disabled", field.disabled)
            .flag("readonly", field.read_only)
            .class("flex-1 h-2 bg-gray-200 rounded-lg appearance-none cursor-pointer disabled:opacity-50 disabled:cursor-not-allowed focus:outline-none");
        let input = describe_control(input, &id, error.as_deref());

        let control = Node::element("div")
            .class("flex items-center gap-4")
            .child(input)
            .child_opt(props.show_value.then(|| {
                Node::element("div")
                    .class("min-w-[3rem] text-right text-sm font-medium text-gray-950")
                    .child(Node::text(self.display_value()))
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
