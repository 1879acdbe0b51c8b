// Button component for FormCraft

use crate::component::{AsyncCallback, Component, ComponentError, Context, Node};
use crate::kit::components::atoms::icon::LoadingSpinner;
use crate::kit::theme::{Color, Size};
use crate::kit::utils::join_classes;

/// Native button type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

/// Where the icon sits relative to the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPosition {
    #[default]
    Before,
    After,
}

/// Button props
#[derive(Debug, Clone, Default)]
pub struct ButtonProps {
    /// Label text
    pub text: String,
    pub size: Size,
    pub color: Color,
    pub outlined: bool,
    pub disabled: bool,
    pub loading: bool,
    pub icon: Option<Node>,
    pub icon_position: IconPosition,
    pub badge: Option<String>,
    /// Defaults to the button color
    pub badge_color: Option<Color>,
    pub button_type: ButtonType,
    /// Render as a link when set
    pub href: Option<String>,
    pub target: Option<String>,
    pub tooltip: Option<String>,
    /// Element id, used for focus management
    pub id: Option<String>,
    /// Click handler; awaited before `click` returns
    pub on_click: Option<AsyncCallback>,
    pub class: Option<String>,
}

/// Button component
///
/// Renders a `button` element, or an `a` element when `href` is set.
#[derive(Debug)]
pub struct Button {
    props: ButtonProps,
}

impl Button {
    /// Run the click handler. Disabled and loading buttons ignore clicks.
    pub async fn click(&self) -> bool {
        if self.props.disabled || self.props.loading {
            return false;
        }
        if let Some(on_click) = &self.props.on_click {
            on_click.call(()).await;
        }
        true
    }

    fn size_class(size: Size) -> &'static str {
        match size {
            Size::Xs => "gap-1 px-2 py-1.5 text-xs",
            Size::Sm => "gap-1.5 px-2.5 py-1.5 text-sm",
            Size::Md => "gap-1.5 px-3 py-2 text-sm",
            Size::Lg => "gap-1.5 px-3.5 py-2.5 text-sm",
            Size::Xl => "gap-1.5 px-4 py-3 text-sm",
        }
    }

    fn color_class(color: Color, outlined: bool) -> String {
        let palette = color.palette();
        match (color, outlined) {
            (Color::Gray | Color::Secondary, false) => {
                "bg-gray-950 text-white shadow-sm hover:bg-gray-800".to_string()
            }
            (Color::Gray | Color::Secondary, true) => {
                "text-gray-950 shadow-sm ring-1 ring-gray-300 hover:bg-gray-50".to_string()
            }
            (_, false) => format!(
                "bg-{palette}-600 text-white shadow-sm hover:bg-{palette}-500 focus-visible:outline-{palette}-500"
            ),
            (_, true) => format!(
                "text-{palette}-600 shadow-sm ring-1 ring-{palette}-600 hover:bg-{palette}-50 focus-visible:outline-{palette}-600"
            ),
        }
    }

    fn badge_class(color: Color) -> String {
        let palette = color.palette();
        format!("bg-{palette}-50 text-{palette}-600 ring-{palette}-600/10")
    }
}

impl Component for Button {
    type Props = ButtonProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let inactive = props.disabled || props.loading;

        let class = join_classes([
            "relative inline-grid grid-flow-col items-center justify-center rounded-lg font-medium outline-none transition duration-75",
            "focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2",
            "disabled:pointer-events-none disabled:opacity-50",
            Self::size_class(props.size),
            Self::color_class(props.color, props.outlined).as_str(),
            props.class.as_deref().unwrap_or_default(),
        ]);

        let icon = || {
            props
                .icon
                .clone()
                .map(|icon| Node::element("span").class("inline-flex").child(icon))
        };
        let show_icon = |position| !props.loading && props.icon_position == position;

        let mut content = Vec::new();
        if props.loading {
            content.push(LoadingSpinner::svg("h-5 w-5 animate-spin"));
        }
        if show_icon(IconPosition::Before) {
            content.extend(icon());
        }
        if !props.text.is_empty() {
            content.push(Node::element("span").child(Node::text(&props.text)));
        }
        if show_icon(IconPosition::After) {
            content.extend(icon());
        }
        if let Some(badge) = &props.badge {
            content.push(
                Node::element("span")
                    .class(join_classes([
                        "ms-auto inline-flex items-center justify-center rounded-md px-1.5 py-0.5 text-xs font-medium ring-1 ring-inset",
                        Self::badge_class(props.badge_color.unwrap_or(props.color)).as_str(),
                    ]))
                    .child(Node::text(badge)),
            );
        }

        let node = match &props.href {
            Some(href) => Node::element("a")
                .attr("href", href)
                .attr_opt("target", props.target.clone())
                .attr("aria-disabled", if inactive { "true" } else { "false" }),
            None => Node::element("button")
                .attr("type", props.button_type.as_str())
                .flag("disabled", inactive),
        };

        Ok(vec![node
            .attr_opt("id", props.id.clone())
            .class(class)
            .attr_opt("title", props.tooltip.clone())
            .children(content)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_button(props: ButtonProps) -> (Button, Arc<AtomicUsize>) {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        let button = Button::create(
            ButtonProps {
                on_click: Some(AsyncCallback::from_sync(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
                ..props
            },
            Context::new(),
        );
        (button, clicks)
    }

    #[test]
    fn test_click_runs_handler() {
        let (button, clicks) = counting_button(ButtonProps {
            text: "Save".to_string(),
            ..Default::default()
        });
        assert!(block_on(button.click()));
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabled_and_loading_ignore_clicks() {
        let (disabled, clicks) = counting_button(ButtonProps {
            disabled: true,
            ..Default::default()
        });
        assert!(!block_on(disabled.click()));

        let (loading, _) = counting_button(ButtonProps {
            loading: true,
            ..Default::default()
        });
        assert!(!block_on(loading.click()));
        assert_eq!(clicks.load(Ordering::SeqCst), 0);

        let node = loading.render().unwrap().remove(0);
        assert!(node.has_attribute("disabled"));
        assert!(node.find(|n| n.has_class("animate-spin")).is_some());
    }

    #[test]
    fn test_render_variants() {
        let button = Button::create(
            ButtonProps {
                text: "Delete".to_string(),
                color: Color::Danger,
                outlined: true,
                badge: Some("3".to_string()),
                button_type: ButtonType::Submit,
                ..Default::default()
            },
            Context::new(),
        );
        let node = button.render().unwrap().remove(0);
        assert_eq!(node.tag(), Some("button"));
        assert_eq!(node.attribute("type"), Some("submit"));
        assert!(node.has_class("ring-red-600"));
        assert_eq!(node.text_content(), "Delete3");
    }

    #[test]
    fn test_link_button() {
        let button = Button::create(
            ButtonProps {
                text: "Docs".to_string(),
                href: Some("/docs".to_string()),
                target: Some("_blank".to_string()),
                ..Default::default()
            },
            Context::new(),
        );
        let node = button.render().unwrap().remove(0);
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.attribute("target"), Some("_blank"));
        assert_eq!(node.attribute("aria-disabled"), Some("false"));
    }
}
