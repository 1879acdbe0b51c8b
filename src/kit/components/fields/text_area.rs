// Multi-line text input for FormCraft

use crate::component::{Callback, Component, ComponentError, Context, Node};
use crate::kit::components::fields::base::{
    describe_control, field_frame, ring_class, FieldCore, FieldProps,
};
use crate::kit::utils::join_classes;
use crate::state::{ChangeOutcome, Validator};

/// Which directions the user may resize the text area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resize {
    None,
    Both,
    Horizontal,
    #[default]
    Vertical,
}

impl Resize {
    fn class(self) -> &'static str {
        match self {
            Resize::None => "resize-none",
            Resize::Both => "resize",
            Resize::Horizontal => "resize-x",
            Resize::Vertical => "resize-y",
        }
    }
}

/// Text area props
#[derive(Debug, Clone)]
pub struct TextAreaProps {
    pub field: FieldProps,
    pub placeholder: Option<String>,
    pub autocomplete: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub rows: u32,
    pub cols: Option<u32>,
    /// Grow with the content instead of using `rows`
    pub autosize: bool,
    pub resize: Resize,
    pub default_value: String,
    pub validate: Option<Validator<String>>,
    pub on_change: Option<Callback<String>>,
}

impl Default for TextAreaProps {
    fn default() -> Self {
        Self {
            field: FieldProps::default(),
            placeholder: None,
            autocomplete: None,
            min_length: None,
            max_length: None,
            rows: 3,
            cols: None,
            autosize: false,
            resize: Resize::Vertical,
            default_value: String::new(),
            validate: None,
            on_change: None,
        }
    }
}

/// Text area component
#[derive(Debug)]
pub struct TextArea {
    props: TextAreaProps,
    core: FieldCore<String>,
}

impl TextArea {
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

    pub fn is_touched(&self) -> bool {
        self.core.state().is_touched()
    }
}

impl Component for TextArea {
    type Props = TextAreaProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let core = FieldCore::new(context, props.default_value.clone());
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

        let textarea = Node::element("textarea")
            .attr("id", &id)
            .attr("name", &field.name)
            .flag("required", field.required)
            .flag("disabled", field.disabled)
            .flag("readonly", field.read_only)
            .attr_opt("placeholder", props.placeholder.clone())
            .attr_opt("autocomplete", props.autocomplete.clone())
            .attr_opt("minlength", props.min_length.map(|n| n.to_string()))
            .attr_opt("maxlength", props.max_length.map(|n| n.to_string()))
            .attr_opt("rows", (!props.autosize).then(|| props.rows.to_string()))
            .attr_opt("cols", props.cols.map(|n| n.to_string()))
            .class(join_classes([
                "block w-full appearance-none border-none bg-white/0 text-start text-sm leading-6 text-gray-950 px-3 py-1.5",
                "placeholder:text-gray-400 focus:ring-0 focus:outline-none disabled:text-gray-500",
                props.resize.class(),
                if props.autosize { "overflow-hidden" } else { "" },
            ]))
            .child(Node::text(self.value()));
        let textarea = describe_control(textarea, &id, error.as_deref());

        let control = Node::element("div")
            .class(join_classes([
                "flex rounded-lg bg-white shadow-sm ring-1 transition duration-75",
                ring_class(field.disabled, error.is_some()),
            ]))
            .child(textarea);

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

    #[test]
    fn test_value_rendered_as_text() {
        let mut area = TextArea::create(
            TextAreaProps {
                field: FieldProps::named("bio"),
                default_value: "Hello".to_string(),
                max_length: Some(10),
                validate: Some(validator(|v: &String| {
                    (v.chars().count() > 10).then(|| "too long".to_string())
                })),
                ..Default::default()
            },
            Context::new(),
        );

        let tree = root(area.render().unwrap());
        let textarea = &tree.find_by_tag("textarea")[0];
        assert_eq!(textarea.text_content(), "Hello");
        assert_eq!(textarea.attribute("rows"), Some("3"));
        assert_eq!(textarea.attribute("maxlength"), Some("10"));

        let _ = area.change("Hello, world!");
        assert_eq!(area.error().as_deref(), Some("too long"));
    }

    #[test]
    fn test_autosize_drops_rows() {
        let area = TextArea::create(
            TextAreaProps {
                field: FieldProps::named("notes"),
                autosize: true,
                resize: Resize::None,
                ..Default::default()
            },
            Context::new(),
        );
        let tree = root(area.render().unwrap());
        let textarea = &tree.find_by_tag("textarea")[0];
        assert!(!textarea.has_attribute("rows"));
        assert!(textarea.has_class("resize-none"));
        assert!(textarea.has_class("overflow-hidden"));
    }

    #[test]
    fn test_on_change_fires_once_unless_locked() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let props = TextAreaProps {
            field: FieldProps::named("notes"),
            default_value: "draft".to_string(),
            on_change: Some(Callback::new(move |text: String| sink.lock().unwrap().push(text))),
            ..Default::default()
        };

        let mut area = TextArea::create(props.clone(), Context::new());
        assert_eq!(area.value(), "draft");
        assert!(area.change("final").is_applied());
        assert_eq!(*calls.lock().unwrap(), vec!["final".to_string()]);

        for lock in [
            FieldProps { disabled: true, ..FieldProps::named("notes") },
            FieldProps { read_only: true, ..FieldProps::named("notes") },
        ] {
            let mut locked = TextArea::create(TextAreaProps { field: lock, ..props.clone() }, Context::new());
            assert!(!locked.change("final").is_applied());
            assert_eq!(locked.value(), "draft");
            assert!(!locked.is_touched());
        }
        assert_eq!(calls.lock().unwrap().len(), 1);
    }
}
