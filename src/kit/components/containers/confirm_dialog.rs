// Confirmation dialog for FormCraft

use crate::component::{AsyncCallback, Callback, Component, ComponentError, Context, Node};
use crate::events::KeyboardEvent;
use crate::kit::components::containers::modal::{
    ActionColor, ActionSlot, Modal, ModalAction, ModalProps, ModalWidth,
};
use crate::kit::theme::Color;

const WARNING_PATH: &str = "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z";
const QUESTION_PATH: &str = "M8.228 9c.549-1.165 2.03-2 3.772-2 2.21 0 4 1.343 4 3 0 1.4-1.278 2.575-3.006 2.907-.542.104-.994.54-.994 1.093m0 3h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";

/// Tone of a [`ConfirmDialog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmVariant {
    #[default]
    Default,
    /// Destructive actions: warning icon and a red confirm button
    Danger,
}

impl ConfirmVariant {
    fn icon_color(self) -> Color {
        match self {
            ConfirmVariant::Default => Color::Primary,
            ConfirmVariant::Danger => Color::Danger,
        }
    }

    fn action_color(self) -> ActionColor {
        match self {
            ConfirmVariant::Default => ActionColor::Primary,
            ConfirmVariant::Danger => ActionColor::Danger,
        }
    }

    fn icon(self) -> Node {
        let path = match self {
            ConfirmVariant::Default => QUESTION_PATH,
            ConfirmVariant::Danger => WARNING_PATH,
        };
        Node::element("svg")
            .class("w-6 h-6")
            .attr("fill", "none")
            .attr("viewBox", "0 0 24 24")
            .attr("stroke", "currentColor")
            .child(
                Node::element("path")
                    .attr("stroke-linecap", "round")
                    .attr("stroke-linejoin", "round")
                    .attr("stroke-width", "2")
                    .attr("d", path),
            )
    }
}

/// Confirm dialog props
#[derive(Debug, Clone)]
pub struct ConfirmDialogProps {
    pub open: bool,
    /// Asked to close the dialog after confirming or cancelling
    pub on_close: Option<Callback<()>>,
    pub heading: String,
    pub description: Option<String>,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Awaited before the dialog asks to close
    pub on_confirm: Option<AsyncCallback>,
    pub on_cancel: Option<Callback<()>>,
    pub variant: ConfirmVariant,
    pub confirm_disabled: bool,
}

impl Default for ConfirmDialogProps {
    fn default() -> Self {
        Self {
            open: false,
            on_close: None,
            heading: String::new(),
            description: None,
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            on_confirm: None,
            on_cancel: None,
            variant: ConfirmVariant::Default,
            confirm_disabled: false,
        }
    }
}

impl ConfirmDialogProps {
    /// The modal this dialog is made of. Escape and overlay clicks never
    /// dismiss it; only the two buttons do.
    fn modal_props(&self) -> ModalProps {
        let mut confirm = ModalAction::new(self.confirm_label.clone());
        confirm.on_click = self.on_confirm.clone();
        confirm.color = Some(self.variant.action_color());
        confirm.disabled = self.confirm_disabled;

        let mut cancel = ModalAction::new(self.cancel_label.clone());
        cancel.on_click = self.on_cancel.clone().map(|on_cancel| {
            AsyncCallback::from_sync(move |_: ()| on_cancel.call(()))
        });

        ModalProps {
            open: self.open,
            on_close: self.on_close.clone(),
            heading: Some(self.heading.clone()),
            description: self.description.clone(),
            icon: Some(self.variant.icon()),
            icon_color: self.variant.icon_color(),
            width: ModalWidth::Md,
            close_on_click_outside: false,
            close_on_escape: false,
            submit_action: Some(confirm),
            cancel_action: Some(cancel),
            ..Default::default()
        }
    }
}

/// Yes/no question in a modal
#[derive(Debug)]
pub struct ConfirmDialog {
    modal: Modal,
}

impl ConfirmDialog {
    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Run `on_confirm`, then ask to close. Returns false when confirming is
    /// disabled or the dialog is closed.
    pub async fn confirm(&self) -> bool {
        self.modal.trigger_action(ActionSlot::Submit).await
    }

    /// Run `on_cancel`, then ask to close
    pub async fn cancel(&self) -> bool {
        self.modal.trigger_action(ActionSlot::Cancel).await
    }

    pub fn handle_key(&self, event: &KeyboardEvent) -> bool {
        self.modal.handle_key(event)
    }

    pub fn handle_overlay_click(&self) -> bool {
        self.modal.handle_overlay_click()
    }
}

impl Component for ConfirmDialog {
    type Props = ConfirmDialogProps;

    fn create(props: Self::Props, context: Context) -> Self {
        Self {
            modal: Modal::create(props.modal_props(), context),
        }
    }

    fn mount(&mut self) -> Result<(), ComponentError> {
        self.modal.mount()
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.modal.update(props.modal_props())
    }

    fn unmount(&mut self) -> Result<(), ComponentError> {
        self.modal.unmount()
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        self.modal.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::root;
    use crate::events::Key;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;
    use std::sync::{Arc, Mutex};

    fn journal() -> (Arc<Mutex<Vec<&'static str>>>, Callback<()>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let on_close = Callback::new(move |_: ()| sink.lock().unwrap().push("close"));
        (events, on_close)
    }

    fn delete_post(events: &Arc<Mutex<Vec<&'static str>>>, on_close: Callback<()>) -> ConfirmDialogProps {
        let confirmed = events.clone();
        let cancelled = events.clone();
        ConfirmDialogProps {
            open: true,
            on_close: Some(on_close),
            heading: "Delete post?".to_string(),
            description: Some("This cannot be undone.".to_string()),
            confirm_label: "Delete".to_string(),
            on_confirm: Some(AsyncCallback::from_sync(move |_: ()| {
                confirmed.lock().unwrap().push("confirm")
            })),
            on_cancel: Some(Callback::new(move |_: ()| cancelled.lock().unwrap().push("cancel"))),
            variant: ConfirmVariant::Danger,
            ..Default::default()
        }
    }

    #[test]
    fn test_confirm_awaits_handler_before_closing() {
        let (events, on_close) = journal();
        let (done, gate) = oneshot::channel::<()>();
        let gate = Arc::new(Mutex::new(Some(gate)));
        let seen = events.clone();
        let on_confirm = AsyncCallback::new(move |_: ()| {
            let gate = gate.lock().unwrap().take();
            let seen = seen.clone();
            async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                seen.lock().unwrap().push("saved");
            }
        });
        let dialog = ConfirmDialog::create(
            ConfirmDialogProps {
                open: true,
                on_close: Some(on_close),
                heading: "Publish?".to_string(),
                on_confirm: Some(on_confirm),
                ..Default::default()
            },
            Context::new(),
        );

        let (confirmed, _) = block_on(join(dialog.confirm(), async {
            assert!(events.lock().unwrap().is_empty());
            let _ = done.send(());
        }));
        assert!(confirmed);
        assert_eq!(*events.lock().unwrap(), vec!["saved", "close"]);
    }

    #[test]
    fn test_cancel_runs_handler_then_closes() {
        let (events, on_close) = journal();
        let dialog = ConfirmDialog::create(delete_post(&events, on_close), Context::new());
        assert!(block_on(dialog.cancel()));
        assert_eq!(*events.lock().unwrap(), vec!["cancel", "close"]);
    }

    #[test]
    fn test_danger_variant_styles_icon_and_button() {
        let (events, on_close) = journal();
        let dialog = ConfirmDialog::create(delete_post(&events, on_close), Context::new());
        let tree = root(dialog.render().unwrap());

        let submit = tree
            .find(|n| n.attribute("id").is_some_and(|id| id.ends_with("-submit")))
            .unwrap();
        assert_eq!(submit.text_content(), "Delete");
        assert!(submit.has_class("bg-red-600"));
        let cancel = tree
            .find(|n| n.attribute("id").is_some_and(|id| id.ends_with("-cancel")))
            .unwrap();
        assert_eq!(cancel.text_content(), "Cancel");

        assert!(tree.find(|n| n.attribute("d") == Some(WARNING_PATH)).is_some());
        assert!(tree.find(|n| n.has_class("text-red-600")).is_some());
        assert!(tree.text_content().contains("This cannot be undone."));
    }

    #[test]
    fn test_default_variant_uses_primary() {
        let dialog = ConfirmDialog::create(
            ConfirmDialogProps {
                open: true,
                heading: "Continue?".to_string(),
                ..Default::default()
            },
            Context::new(),
        );
        let tree = root(dialog.render().unwrap());
        let submit = tree
            .find(|n| n.attribute("id").is_some_and(|id| id.ends_with("-submit")))
            .unwrap();
        assert_eq!(submit.text_content(), "Confirm");
        assert!(submit.has_class("bg-primary-600"));
        assert!(tree.find(|n| n.attribute("d") == Some(QUESTION_PATH)).is_some());
    }

    #[test]
    fn test_disabled_confirm_and_dismissal_are_ignored() {
        let (events, on_close) = journal();
        let dialog = ConfirmDialog::create(
            ConfirmDialogProps {
                confirm_disabled: true,
                ..delete_post(&events, on_close)
            },
            Context::new(),
        );

        assert!(!block_on(dialog.confirm()));
        assert!(!dialog.handle_key(&KeyboardEvent::new(Key::Escape)));
        assert!(!dialog.handle_overlay_click());
        assert!(events.lock().unwrap().is_empty());

        let tree = root(dialog.render().unwrap());
        let submit = tree
            .find(|n| n.attribute("id").is_some_and(|id| id.ends_with("-submit")))
            .unwrap();
        assert!(submit.has_attribute("disabled"));
    }
}
