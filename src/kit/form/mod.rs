//! Form orchestrator
//!
//! A [`Form`] wraps its children in a `<form>` element, shares a
//! [`FormHandle`] with every field created from its
//! [`field_context`](Form::field_context), and on submit collects the
//! rendered controls into [`FormValues`], runs the validator and then the
//! submit handler.

mod data;
mod handle;

pub use data::{FormData, FormValues};
pub use handle::FormHandle;

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::component::{root, Component, ComponentError, Context, Node};
use crate::kit::utils::join_classes;

/// Errors keyed by field name
pub type FormErrors = BTreeMap<String, String>;

/// Receives the collected values of a valid form
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    async fn submit(&self, values: FormValues) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> SubmitHandler for F
where
    F: Fn(FormValues) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn submit(&self, values: FormValues) -> anyhow::Result<()> {
        self(values).await
    }
}

/// Form-level validation; an empty map means the form is valid
#[async_trait]
pub trait FormValidator: Send + Sync {
    async fn validate(&self, values: FormValues) -> FormErrors;
}

#[async_trait]
impl<F, Fut> FormValidator for F
where
    F: Fn(FormValues) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = FormErrors> + Send + 'static,
{
    async fn validate(&self, values: FormValues) -> FormErrors {
        self(values).await
    }
}

/// Result of [`Form::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The handler ran and succeeded (or there was none)
    Submitted,
    /// Validation failed; the errors were recorded in the form handle
    Invalid(FormErrors),
    /// The form is disabled or already submitting
    Busy,
    /// The handler returned an error
    Failed(String),
}

/// Form props
#[derive(Clone, Default)]
pub struct FormProps {
    pub id: Option<String>,
    /// Values the shared form state starts with
    pub initial_values: BTreeMap<String, Value>,
    pub validate: Option<Arc<dyn FormValidator>>,
    pub on_submit: Option<Arc<dyn SubmitHandler>>,
    pub disabled: bool,
    pub children: Vec<Node>,
    pub class: Option<String>,
}

impl fmt::Debug for FormProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormProps")
            .field("id", &self.id)
            .field("initial_values", &self.initial_values)
            .field("validate", &self.validate.is_some())
            .field("on_submit", &self.on_submit.is_some())
            .field("disabled", &self.disabled)
            .field("children", &self.children.len())
            .field("class", &self.class)
            .finish()
    }
}

/// Releases the submitting flag however the submit ends, including when
/// the submit future is dropped or the handler panics
struct SubmitGuard<'a>(&'a FormHandle);

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.0.end_submit();
    }
}

/// Form component
#[derive(Debug)]
pub struct Form {
    props: FormProps,
    handle: FormHandle,
    field_context: Context,
}

impl Form {
    /// Shared state of this form
    pub fn handle(&self) -> &FormHandle {
        &self.handle
    }

    /// Context for fields inside this form; it carries the form handle
    pub fn field_context(&self) -> &Context {
        &self.field_context
    }

    /// Replace the rendered children, keeping the other props
    pub fn set_children(&mut self, children: Vec<Node>) {
        self.props.children = children;
    }

    /// Controls currently rendered inside the form
    pub fn form_data(&self) -> Result<FormData, ComponentError> {
        Ok(FormData::from_node(&root(self.render()?)))
    }

    /// Collect, validate and submit. Concurrent submits are refused with
    /// [`SubmitOutcome::Busy`] until the running one finishes.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.props.disabled || !self.handle.begin_submit() {
            log::debug!("form {:?} is busy, submit ignored", self.props.id);
            return SubmitOutcome::Busy;
        }
        let _guard = SubmitGuard(&self.handle);
        self.run_submit().await
    }

    async fn run_submit(&self) -> SubmitOutcome {
        let values = match self.form_data() {
            Ok(data) => data.to_values(),
            Err(err) => {
                log::error!("form submission error: {err}");
                return SubmitOutcome::Failed(err.to_string());
            }
        };

        if let Some(validate) = &self.props.validate {
            let errors = validate.validate(values.clone()).await;
            if !errors.is_empty() {
                log::debug!(
                    "form {:?} failed validation on {} field(s)",
                    self.props.id,
                    errors.len()
                );
                self.handle.replace_errors(errors.clone());
                return SubmitOutcome::Invalid(errors);
            }
        }
        self.handle.clear_errors();

        if let Some(on_submit) = &self.props.on_submit {
            if let Err(err) = on_submit.submit(values).await {
                log::error!("form submission error: {err:#}");
                return SubmitOutcome::Failed(err.to_string());
            }
        }
        SubmitOutcome::Submitted
    }
}

impl Component for Form {
    type Props = FormProps;

    fn create(props: Self::Props, context: Context) -> Self {
        let handle = FormHandle::with_values(props.initial_values.clone());
        let field_context = Context::with_parent(&context);
        if let Err(err) = field_context.provider().provide(handle.clone()) {
            log::warn!("form state is not visible to fields: {err}");
        }
        Self {
            props,
            handle,
            field_context,
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        Ok(vec![Node::element("form")
            .attr_opt("id", self.props.id.clone())
            .flag("novalidate", true)
            .attr("aria-busy", self.handle.is_submitting().to_string())
            .class(join_classes([
                "space-y-6",
                self.props.class.as_deref().unwrap_or_default(),
            ]))
            .children(self.props.children.iter().cloned())])
    }
}
