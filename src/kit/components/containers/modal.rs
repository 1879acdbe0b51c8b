// Modal dialog for FormCraft
//
// The dialog is controlled: `open` drives it and every close request goes
// through `on_close`. Header and footer content can be passed as typed slot
// children; everything else is body content.

use crate::component::{
    render_child, AsyncCallback, Callback, Component, ComponentError, ComponentId, Context, Node,
};
use crate::events::{Key, KeyboardEvent};
use crate::kit::components::atoms::{Button, ButtonProps};
use crate::kit::theme::{Alignment, Color};
use crate::kit::utils::join_classes;

/// Header slot. Set values override the modal's own heading props.
#[derive(Debug, Clone, Default)]
pub struct ModalHeader {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<Node>,
    pub icon_color: Option<Color>,
}

/// Child of a [`ModalFooter`]
#[derive(Debug, Clone)]
pub enum FooterChild {
    /// Buttons placed at the action end of the footer
    Actions(Vec<Node>),
    Content(Node),
}

/// Footer slot
#[derive(Debug, Clone, Default)]
pub struct ModalFooter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub children: Vec<FooterChild>,
}

/// Child of a [`Modal`]
#[derive(Debug, Clone)]
pub enum ModalChild {
    Header(ModalHeader),
    Footer(ModalFooter),
    Body(Node),
}

impl From<Node> for ModalChild {
    fn from(node: Node) -> Self {
        ModalChild::Body(node)
    }
}

/// Maximum width of the dialog window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalWidth {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    TwoXl,
    ThreeXl,
    FourXl,
    FiveXl,
    SixXl,
    SevenXl,
    /// Covers the whole viewport
    Screen,
}

impl ModalWidth {
    fn class(self) -> &'static str {
        match self {
            ModalWidth::Xs => "max-w-xs",
            ModalWidth::Sm => "max-w-sm",
            ModalWidth::Md => "max-w-md",
            ModalWidth::Lg => "max-w-lg",
            ModalWidth::Xl => "max-w-xl",
            ModalWidth::TwoXl => "max-w-2xl",
            ModalWidth::ThreeXl => "max-w-3xl",
            ModalWidth::FourXl => "max-w-4xl",
            ModalWidth::FiveXl => "max-w-5xl",
            ModalWidth::SixXl => "max-w-6xl",
            ModalWidth::SevenXl => "max-w-7xl",
            ModalWidth::Screen => "fixed inset-0",
        }
    }
}

/// Color of a footer action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionColor {
    #[default]
    Primary,
    Secondary,
    Danger,
}

/// Footer action button
#[derive(Debug, Clone)]
pub struct ModalAction {
    pub label: String,
    pub on_click: Option<AsyncCallback>,
    pub color: Option<ActionColor>,
    pub disabled: bool,
    /// Close the modal once the handler finished
    pub close: bool,
}

impl ModalAction {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
            color: None,
            disabled: false,
            close: true,
        }
    }

    pub fn on_click(mut self, handler: AsyncCallback) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Keep the modal open after the handler ran
    pub fn keep_open(mut self) -> Self {
        self.close = false;
        self
    }
}

/// Identifies one of the modal's footer actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSlot {
    Submit,
    Cancel,
    Extra(usize),
}

/// Modal props
#[derive(Debug, Clone)]
pub struct ModalProps {
    pub open: bool,
    /// Asked to close the modal; the host sets `open` to false
    pub on_close: Option<Callback<()>>,
    pub heading: Option<String>,
    pub description: Option<String>,
    pub icon: Option<Node>,
    pub icon_color: Color,
    pub children: Vec<ModalChild>,
    /// Replaces the action buttons when there is no footer slot
    pub footer: Option<Node>,
    pub width: ModalWidth,
    pub slide_over: bool,
    /// Only `Start` and `Center` are meaningful
    pub alignment: Alignment,
    pub sticky_header: bool,
    pub sticky_footer: bool,
    pub close_on_click_outside: bool,
    pub close_on_escape: bool,
    pub show_close_button: bool,
    /// Focus the first focusable element when opening
    pub autofocus: bool,
    pub submit_action: Option<ModalAction>,
    pub cancel_action: Option<ModalAction>,
    pub footer_actions: Vec<ModalAction>,
    pub footer_actions_alignment: Alignment,
    pub class: Option<String>,
}

impl Default for ModalProps {
    fn default() -> Self {
        Self {
            open: false,
            on_close: None,
            heading: None,
            description: None,
            icon: None,
            icon_color: Color::Primary,
            children: Vec::new(),
            footer: None,
            width: ModalWidth::Md,
            slide_over: false,
            alignment: Alignment::Center,
            sticky_header: false,
            sticky_footer: false,
            close_on_click_outside: true,
            close_on_escape: true,
            show_close_button: true,
            autofocus: true,
            submit_action: None,
            cancel_action: None,
            footer_actions: Vec::new(),
            footer_actions_alignment: Alignment::End,
            class: None,
        }
    }
}

/// Header values after applying the header slot
struct ResolvedHeader {
    title: Option<String>,
    description: Option<String>,
    icon: Option<Node>,
    icon_color: Color,
}

/// Modal dialog
#[derive(Debug)]
pub struct Modal {
    id: ComponentId,
    context: Context,
    props: ModalProps,
    /// Whether open side effects (focus, scroll lock) are in place
    active: bool,
    /// Element focused before opening
    previous_focus: Option<String>,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        self.props.open
    }

    /// Ask the host to close the modal
    pub fn request_close(&self) {
        log::debug!("modal {} requested close", self.id);
        if let Some(on_close) = &self.props.on_close {
            on_close.call(());
        }
    }

    /// Keyboard handling while open: Escape closes, Tab cycles focus within
    /// the dialog. Returns whether the event was consumed.
    pub fn handle_key(&self, event: &KeyboardEvent) -> bool {
        if !self.is_open() {
            return false;
        }
        match event.key {
            Key::Escape if self.props.close_on_escape => {
                self.request_close();
                true
            }
            Key::Tab => self.cycle_focus(event.shift),
            _ => false,
        }
    }

    /// Click on the area around the dialog window
    pub fn handle_overlay_click(&self) -> bool {
        if !self.is_open() || !self.props.close_on_click_outside {
            return false;
        }
        self.request_close();
        true
    }

    /// Run a footer action, then close unless the action keeps the modal open.
    /// Disabled and missing actions are ignored.
    pub async fn trigger_action(&self, slot: ActionSlot) -> bool {
        let action = match slot {
            ActionSlot::Submit => self.props.submit_action.as_ref(),
            ActionSlot::Cancel => self.props.cancel_action.as_ref(),
            ActionSlot::Extra(index) => self.props.footer_actions.get(index),
        };
        let Some(action) = action.filter(|action| !action.disabled) else {
            return false;
        };
        if !self.is_open() {
            return false;
        }

        if let Some(on_click) = &action.on_click {
            on_click.call(()).await;
        }
        if action.close {
            self.request_close();
        }
        true
    }

    /// Ids of focusable elements inside the dialog window, in tree order
    pub fn focusable_ids(&self) -> Vec<String> {
        let Ok(window) = self.render_window() else {
            return Vec::new();
        };
        let mut ids = Vec::new();
        window.walk(&mut |node| {
            if is_focusable(node) {
                if let Some(id) = node.attribute("id") {
                    ids.push(id.to_string());
                }
            }
        });
        ids
    }

    fn cycle_focus(&self, backwards: bool) -> bool {
        let ids = self.focusable_ids();
        if ids.is_empty() {
            return true;
        }
        let document = self.context.document();
        let current = document
            .active_element()
            .and_then(|active| ids.iter().position(|id| *id == active));

        let last = ids.len() - 1;
        let next = match (current, backwards) {
            (None, false) => 0,
            (None, true) => last,
            (Some(index), false) if index == last => 0,
            (Some(index), false) => index + 1,
            (Some(0), true) => last,
            (Some(index), true) => index - 1,
        };
        document.focus(ids[next].clone());
        true
    }

    fn activate(&mut self) {
        if self.active {
            return;
        }
        let document = self.context.document();
        self.previous_focus = document.active_element();
        if self.props.autofocus {
            if let Some(first) = self.focusable_ids().into_iter().next() {
                document.focus(first);
            }
        }
        document.lock_scroll();
        self.active = true;
        log::debug!("modal {} opened", self.id);
    }

    fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        let document = self.context.document();
        match self.previous_focus.take() {
            Some(previous) => document.focus(previous),
            None => document.blur(),
        }
        document.unlock_scroll();
        self.active = false;
        log::debug!("modal {} closed", self.id);
    }

    fn element_id(&self) -> String {
        self.context.element_id(self.id)
    }

    fn resolve_header(&self) -> ResolvedHeader {
        let slot = self.props.children.iter().find_map(|child| match child {
            ModalChild::Header(header) => Some(header),
            _ => None,
        });
        ResolvedHeader {
            title: slot
                .and_then(|header| header.title.clone())
                .or_else(|| self.props.heading.clone()),
            description: slot
                .and_then(|header| header.description.clone())
                .or_else(|| self.props.description.clone()),
            icon: slot
                .and_then(|header| header.icon.clone())
                .or_else(|| self.props.icon.clone()),
            icon_color: slot
                .and_then(|header| header.icon_color)
                .unwrap_or(self.props.icon_color),
        }
    }

    fn footer_slot(&self) -> Option<&ModalFooter> {
        self.props.children.iter().find_map(|child| match child {
            ModalChild::Footer(footer) => Some(footer),
            _ => None,
        })
    }

    fn body(&self) -> Vec<Node> {
        self.props
            .children
            .iter()
            .filter_map(|child| match child {
                ModalChild::Body(node) => Some(node.clone()),
                _ => None,
            })
            .collect()
    }

    fn has_actions(&self) -> bool {
        self.props.submit_action.is_some()
            || self.props.cancel_action.is_some()
            || !self.props.footer_actions.is_empty()
    }

    fn render_header(&self, header: &ResolvedHeader, id: &str) -> Node {
        let props = &self.props;
        let centered = props.alignment == Alignment::Center;

        let close_button = props.show_close_button.then(|| {
            Node::element("button")
                .attr("type", "button")
                .attr("tabindex", "-1")
                .attr("aria-label", "Close")
                .attr("data-modal-close", "")
                .class(join_classes([
                    "absolute text-gray-400 hover:text-gray-500",
                    if props.slide_over { "end-6 top-6" } else { "end-4 top-4" },
                ]))
                .child(
                    Node::element("svg")
                        .class("w-6 h-6")
                        .attr("fill", "none")
                        .attr("viewBox", "0 0 24 24")
                        .attr("stroke", "currentColor")
                        .child(Node::element("path").attr("d", "M6 18L18 6M6 6l12 12")),
                )
        });

        let icon = header.icon.clone().map(|icon| {
            Node::element("div")
                .class(if centered { "mb-5 flex items-center justify-center" } else { "" })
                .child(
                    Node::element("div")
                        .class(join_classes([
                            "rounded-full",
                            header.icon_color.soft_background_class(),
                            if centered { "p-3" } else { "p-2" },
                        ]))
                        .child(
                            Node::element("div")
                                .class(join_classes(["w-6 h-6", header.icon_color.text_class()]))
                                .child(icon),
                        ),
                )
        });

        let text = Node::element("div")
            .class(if props.show_close_button && header.icon.is_none() { "me-6" } else { "" })
            .child_opt(header.title.as_ref().map(|title| {
                Node::element("h2")
                    .attr("id", format!("{id}-heading"))
                    .class("text-base font-semibold leading-6 text-gray-950")
                    .child(Node::text(title))
            }))
            .child_opt(header.description.as_ref().map(|description| {
                Node::element("p")
                    .attr("id", format!("{id}-description"))
                    .class("mt-2 text-sm text-gray-500")
                    .child(Node::text(description))
            }));

        Node::element("div")
            .class(join_classes([
                "flex px-6 pt-6",
                if centered { "flex-col text-center" } else { "gap-x-5" },
                if props.sticky_header {
                    "sticky top-0 z-10 border-b border-gray-200 bg-white pb-6"
                } else {
                    ""
                },
            ]))
            .child_opt(close_button)
            .child_opt(icon)
            .child(text)
    }

    fn action_button(
        &self,
        action: &ModalAction,
        slot: ActionSlot,
        default_color: ActionColor,
        id: &str,
    ) -> Result<Vec<Node>, ComponentError> {
        let suffix = match slot {
            ActionSlot::Submit => "submit".to_string(),
            ActionSlot::Cancel => "cancel".to_string(),
            ActionSlot::Extra(index) => format!("action-{index}"),
        };
        let (color, outlined) = match action.color.unwrap_or(default_color) {
            ActionColor::Primary => (Color::Primary, false),
            ActionColor::Secondary => (Color::Gray, true),
            ActionColor::Danger => (Color::Danger, false),
        };
        render_child::<Button>(
            ButtonProps {
                text: action.label.clone(),
                color,
                outlined,
                disabled: action.disabled,
                id: Some(format!("{id}-{suffix}")),
                ..Default::default()
            },
            &self.context,
        )
    }

    fn render_footer(&self, id: &str) -> Result<Option<Node>, ComponentError> {
        let props = &self.props;
        let justify = props.footer_actions_alignment.justify_class();

        let content = if let Some(slot) = self.footer_slot() {
            let actions: Vec<Node> = slot
                .children
                .iter()
                .filter_map(|child| match child {
                    FooterChild::Actions(nodes) => Some(nodes.clone()),
                    FooterChild::Content(_) => None,
                })
                .flatten()
                .collect();
            let extra = slot.children.iter().filter_map(|child| match child {
                FooterChild::Content(node) => Some(node.clone()),
                FooterChild::Actions(_) => None,
            });

            Node::element("div")
                .class("flex items-center justify-between gap-x-4")
                .child(
                    Node::element("div")
                        .class("grid gap-y-1 flex-1")
                        .child_opt(slot.title.as_ref().map(|title| {
                            Node::element("h3")
                                .class("text-base font-semibold leading-6 text-gray-950")
                                .child(Node::text(title))
                        }))
                        .child_opt(slot.description.as_ref().map(|description| {
                            Node::element("p")
                                .class("text-sm text-gray-500")
                                .child(Node::text(description))
                        }))
                        .children(extra),
                )
                .child_opt((!actions.is_empty()).then(|| {
                    Node::element("div").class("flex-shrink-0").child(
                        Node::element("div")
                            .class(join_classes(["flex gap-3 flex-wrap items-center", justify]))
                            .children(actions),
                    )
                }))
        } else if let Some(footer) = &props.footer {
            footer.clone()
        } else if self.has_actions() {
            let mut buttons = Node::element("div")
                .class(join_classes(["flex gap-3 flex-wrap items-center", justify]));
            if let Some(action) = &props.submit_action {
                buttons = buttons.children(self.action_button(
                    action,
                    ActionSlot::Submit,
                    ActionColor::Primary,
                    id,
                )?);
            }
            for (index, action) in props.footer_actions.iter().enumerate() {
                buttons = buttons.children(self.action_button(
                    action,
                    ActionSlot::Extra(index),
                    ActionColor::Secondary,
                    id,
                )?);
            }
            if let Some(action) = &props.cancel_action {
                buttons = buttons.children(self.action_button(
                    action,
                    ActionSlot::Cancel,
                    ActionColor::Secondary,
                    id,
                )?);
            }
            buttons
        } else {
            return Ok(None);
        };

        Ok(Some(
            Node::element("div")
                .class(join_classes([
                    "w-full px-6",
                    if props.sticky_footer {
                        "sticky bottom-0 border-t border-gray-200 bg-white py-5"
                    } else {
                        "pb-6"
                    },
                ]))
                .child(content),
        ))
    }

    fn render_window(&self) -> Result<Node, ComponentError> {
        let props = &self.props;
        let id = self.element_id();
        let header = self.resolve_header();
        let body = self.body();
        let footer = self.render_footer(&id)?;
        let framed = !props.slide_over && props.width != ModalWidth::Screen;

        let has_header =
            header.title.is_some() || header.description.is_some() || header.icon.is_some();

        Ok(Node::element("div")
            .attr("id", &id)
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .attr_opt(
                "aria-labelledby",
                header.title.as_ref().map(|_| format!("{id}-heading")),
            )
            .attr_opt(
                "aria-describedby",
                header.description.as_ref().map(|_| format!("{id}-description")),
            )
            .class(join_classes([
                "pointer-events-auto relative row-start-2 flex w-full cursor-default flex-col bg-white shadow-xl ring-1 ring-gray-950/5",
                if framed { "mx-auto rounded-xl" } else { "" },
                if props.slide_over { "h-dvh ms-auto overflow-y-auto" } else { "" },
                props.width.class(),
            ]))
            .child_opt(has_header.then(|| self.render_header(&header, &id)))
            .child_opt((!body.is_empty()).then(|| {
                Node::element("div")
                    .class("flex flex-col gap-y-4 py-6 px-6")
                    .children(body)
            }))
            .child_opt(footer))
    }
}

/// Whether keyboard focus can land on `node`
fn is_focusable(node: &Node) -> bool {
    let Some(tag) = node.tag() else {
        return false;
    };
    if node.has_attribute("disabled") {
        return false;
    }
    match node.attribute("tabindex") {
        Some("-1") => false,
        Some(_) => true,
        None => match tag {
            "button" | "select" | "textarea" => true,
            "input" => node.attribute("type") != Some("hidden"),
            "a" => node.has_attribute("href"),
            _ => false,
        },
    }
}

impl Component for Modal {
    type Props = ModalProps;

    fn create(props: Self::Props, context: Context) -> Self {
        Self {
            id: ComponentId::new(),
            context,
            props,
            active: false,
            previous_focus: None,
        }
    }

    fn mount(&mut self) -> Result<(), ComponentError> {
        if self.props.open {
            self.activate();
        }
        Ok(())
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        let opening = props.open && !self.props.open;
        let closing = !props.open && self.props.open;
        self.props = props;

        if opening {
            self.activate();
        } else if closing {
            self.deactivate();
        }
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), ComponentError> {
        self.deactivate();
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        if !self.is_open() {
            return Ok(Vec::new());
        }
        let props = &self.props;
        let framed = !props.slide_over && props.width != ModalWidth::Screen;

        Ok(vec![Node::element("div")
            .attr("data-modal", "")
            .class(join_classes([
                "fixed inset-0 z-50",
                if props.slide_over { "slide-over" } else { "" },
                props.class.as_deref().unwrap_or_default(),
            ]))
            .child(
                Node::element("div")
                    .attr("aria-hidden", "true")
                    .class("fixed inset-0 z-40 bg-gray-950/50 transition-opacity duration-300"),
            )
            .child(
                Node::element("div")
                    .attr("data-modal-overlay", "")
                    .class(join_classes([
                        "fixed inset-0 z-40 grid min-h-full grid-rows-[1fr_auto_1fr] justify-items-center sm:grid-rows-[1fr_auto_3fr]",
                        if framed { "overflow-y-auto p-4" } else { "" },
                        if props.close_on_click_outside { "cursor-pointer" } else { "" },
                    ]))
                    .child(self.render_window()?),
            )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{root, LifecycleManager};
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, Callback<()>) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = count.clone();
        let callback = Callback::new(move |_: ()| {
            inner.fetch_add(1, Ordering::SeqCst);
        });
        (count, callback)
    }

    fn dialog(open: bool) -> ModalProps {
        ModalProps {
            open,
            heading: Some("Delete post".to_string()),
            children: vec![
                ModalChild::Body(Node::element("input").attr("id", "reason").attr("name", "reason")),
                ModalChild::Body(Node::element("input").attr("type", "hidden").attr("id", "token")),
            ],
            submit_action: Some(ModalAction::new("Delete")),
            cancel_action: Some(ModalAction::new("Cancel")),
            ..Default::default()
        }
    }

    #[test]
    fn test_focus_moves_in_and_back() {
        let context = Context::new();
        context.document().focus("open-button");

        let mut modal = LifecycleManager::<Modal>::mounted(dialog(false), context.clone()).unwrap();
        assert!(modal.render().unwrap().is_empty());

        modal.update(dialog(true)).unwrap();
        assert_eq!(context.document().active_element().as_deref(), Some("reason"));
        assert!(context.document().is_scroll_locked());

        modal.update(dialog(false)).unwrap();
        assert_eq!(context.document().active_element().as_deref(), Some("open-button"));
        assert!(!context.document().is_scroll_locked());
    }

    #[test]
    fn test_without_autofocus_focus_stays() {
        let context = Context::new();
        context.document().focus("open-button");
        let mut modal = Modal::create(dialog(false), context.clone());
        modal
            .update(ModalProps {
                autofocus: false,
                ..dialog(true)
            })
            .unwrap();
        assert_eq!(context.document().active_element().as_deref(), Some("open-button"));
    }

    #[test]
    fn test_escape_and_overlay_follow_flags() {
        let (closes, on_close) = counter();
        let modal = Modal::create(
            ModalProps {
                on_close: Some(on_close.clone()),
                ..dialog(true)
            },
            Context::new(),
        );
        assert!(modal.handle_key(&KeyboardEvent::new(Key::Escape)));
        assert!(modal.handle_overlay_click());
        assert_eq!(closes.load(Ordering::SeqCst), 2);

        let strict = Modal::create(
            ModalProps {
                on_close: Some(on_close),
                close_on_escape: false,
                close_on_click_outside: false,
                ..dialog(true)
            },
            Context::new(),
        );
        assert!(!strict.handle_key(&KeyboardEvent::new(Key::Escape)));
        assert!(!strict.handle_overlay_click());
        assert_eq!(closes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_tab_is_trapped() {
        let context = Context::new();
        let modal = LifecycleManager::<Modal>::mounted(dialog(true), context.clone()).unwrap();
        let modal = modal.component();
        let ids = modal.focusable_ids();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], "reason");
        assert!(!ids.contains(&"token".to_string()));

        let tab = KeyboardEvent::new(Key::Tab);
        let document = context.document();
        modal.handle_key(&tab);
        assert_eq!(document.active_element(), Some(ids[1].clone()));
        modal.handle_key(&tab);
        modal.handle_key(&tab);
        assert_eq!(document.active_element(), Some(ids[0].clone()));

        modal.handle_key(&KeyboardEvent::new(Key::Tab).with_shift());
        assert_eq!(document.active_element(), Some(ids[2].clone()));
    }

    #[test]
    fn test_actions_close_unless_kept_open() {
        let (closes, on_close) = counter();
        let ran = Arc::new(AtomicUsize::new(0));
        let handler = {
            let ran = ran.clone();
            AsyncCallback::from_sync(move |_: ()| {
                ran.fetch_add(1, Ordering::SeqCst);
            })
        };
        let modal = Modal::create(
            ModalProps {
                on_close: Some(on_close),
                submit_action: Some(ModalAction::new("Save").on_click(handler.clone()).keep_open()),
                footer_actions: vec![ModalAction {
                    disabled: true,
                    ..ModalAction::new("Archive").on_click(handler)
                }],
                ..dialog(true)
            },
            Context::new(),
        );

        assert!(block_on(modal.trigger_action(ActionSlot::Submit)));
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert_eq!(closes.load(Ordering::SeqCst), 0);

        assert!(!block_on(modal.trigger_action(ActionSlot::Extra(0))));
        assert_eq!(ran.load(Ordering::SeqCst), 1);

        assert!(block_on(modal.trigger_action(ActionSlot::Cancel)));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slots_override_props() {
        let modal = Modal::create(
            ModalProps {
                open: true,
                heading: Some("Prop heading".to_string()),
                description: Some("Prop description".to_string()),
                footer: Some(Node::text("Prop footer")),
                children: vec![
                    ModalChild::Header(ModalHeader {
                        title: Some("Slot heading".to_string()),
                        ..Default::default()
                    }),
                    Node::element("p").child(Node::text("Body text")).into(),
                    ModalChild::Footer(ModalFooter {
                        title: Some("Footer title".to_string()),
                        children: vec![FooterChild::Actions(vec![
                            Node::element("button").attr("id", "go").child(Node::text("Go")),
                        ])],
                        ..Default::default()
                    }),
                ],
                ..Default::default()
            },
            Context::new(),
        );

        let tree = root(modal.render().unwrap());
        let text = tree.text_content();
        assert!(text.contains("Slot heading"));
        assert!(!text.contains("Prop heading"));
        assert!(text.contains("Prop description"));
        assert!(text.contains("Body text"));
        assert!(text.contains("Footer title"));
        assert!(!text.contains("Prop footer"));

        let dialog = tree.find(|n| n.attribute("role") == Some("dialog")).unwrap();
        let heading_id = dialog.attribute("aria-labelledby").unwrap();
        assert_eq!(tree.find_by_id(heading_id).unwrap().text_content(), "Slot heading");
    }

    #[test]
    fn test_width_table() {
        assert_eq!(ModalWidth::default().class(), "max-w-md");
        assert_eq!(ModalWidth::SevenXl.class(), "max-w-7xl");
        assert_eq!(ModalWidth::Screen.class(), "fixed inset-0");
    }
}
