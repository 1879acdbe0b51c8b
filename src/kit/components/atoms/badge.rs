// Badge component for FormCraft

use crate::component::{Component, ComponentError, Context, Node};
use crate::kit::theme::{Color, Size};
use crate::kit::utils::join_classes;

/// Badge props
#[derive(Debug, Clone, Default)]
pub struct BadgeProps {
    pub text: String,
    pub color: Color,
    /// `Sm`, `Md` or `Lg`; other sizes fall back to the nearest
    pub size: Size,
    pub icon: Option<Node>,
    /// Show a colored status dot before the text
    pub dot: bool,
    pub class: Option<String>,
}

/// Small status label
#[derive(Debug)]
pub struct Badge {
    props: BadgeProps,
}

impl Badge {
    /// Background/text/ring classes per color
    pub fn color_class(color: Color) -> &'static str {
        match color {
            Color::Primary => "bg-primary-100 text-primary-800 ring-primary-600/20",
            Color::Secondary => "bg-gray-100 text-gray-800 ring-gray-600/20",
            Color::Success => "bg-green-100 text-green-800 ring-green-600/20",
            Color::Danger => "bg-red-100 text-red-800 ring-red-600/20",
            Color::Warning => "bg-yellow-100 text-yellow-800 ring-yellow-600/20",
            Color::Info => "bg-blue-100 text-blue-800 ring-blue-600/20",
            Color::Gray => "bg-gray-100 text-gray-600 ring-gray-500/20",
        }
    }

    fn size_class(size: Size) -> &'static str {
        match size {
            Size::Xs | Size::Sm => "px-1.5 py-0.5 text-xs",
            Size::Md => "px-2 py-1 text-sm",
            Size::Lg | Size::Xl => "px-2.5 py-1.5 text-base",
        }
    }

    fn dot_class(color: Color) -> &'static str {
        match color {
            Color::Primary => "bg-primary-600",
            Color::Secondary => "bg-gray-600",
            Color::Success => "bg-green-600",
            Color::Danger => "bg-red-600",
            Color::Warning => "bg-yellow-600",
            Color::Info => "bg-blue-600",
            Color::Gray => "bg-gray-500",
        }
    }
}

impl Component for Badge {
    type Props = BadgeProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let dot = props.dot.then(|| {
            Node::element("span").class(join_classes([
                "h-1.5 w-1.5 rounded-full",
                Self::dot_class(props.color),
            ]))
        });
        let icon = props
            .icon
            .clone()
            .map(|icon| Node::element("span").class("inline-flex").child(icon));

        Ok(vec![Node::element("span")
            .class(join_classes([
                "inline-flex items-center gap-1 rounded-md font-medium ring-1 ring-inset",
                Self::color_class(props.color),
                Self::size_class(props.size),
                props.class.as_deref().unwrap_or_default(),
            ]))
            .child_opt(dot)
            .child_opt(icon)
            .child(Node::text(&props.text))])
    }
}
