// Avatar component for FormCraft

use crate::component::{Component, ComponentError, Context, Node};
use crate::kit::theme::Size;
use crate::kit::utils::join_classes;

/// Image loading strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Loading {
    #[default]
    Lazy,
    Eager,
}

/// Avatar props
#[derive(Debug, Clone)]
pub struct AvatarProps {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub size: Size,
    pub circular: bool,
    /// Fallback shown when there is no image
    pub initials: Option<String>,
    pub loading: Loading,
    /// Makes the avatar interactive
    pub clickable: bool,
    pub class: Option<String>,
}

impl Default for AvatarProps {
    fn default() -> Self {
        Self {
            src: None,
            alt: None,
            size: Size::Md,
            circular: true,
            initials: None,
            loading: Loading::Lazy,
            clickable: false,
            class: None,
        }
    }
}

/// User picture with initials or a generic silhouette as fallback
#[derive(Debug)]
pub struct Avatar {
    props: AvatarProps,
}

impl Avatar {
    fn size_class(size: Size) -> &'static str {
        match size {
            Size::Xs => "size-5",
            Size::Sm => "size-6",
            Size::Md => "size-8",
            Size::Lg => "size-10",
            Size::Xl => "size-12",
        }
    }

    fn text_size_class(size: Size) -> &'static str {
        match size {
            Size::Xs | Size::Sm => "text-xs",
            Size::Md => "text-sm",
            Size::Lg => "text-base",
            Size::Xl => "text-lg",
        }
    }
}

impl Component for Avatar {
    type Props = AvatarProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let props = &self.props;
        let shape = if props.circular {
            "rounded-full"
        } else {
            "rounded-md"
        };
        let cursor = if props.clickable { "cursor-pointer" } else { "" };
        let extra = props.class.as_deref().unwrap_or_default();

        if let Some(src) = &props.src {
            let loading = match props.loading {
                Loading::Lazy => "lazy",
                Loading::Eager => "eager",
            };
            return Ok(vec![Node::element("img")
                .attr("src", src)
                .attr_opt("alt", props.alt.clone())
                .attr("loading", loading)
                .class(join_classes([
                    "inline-block object-cover object-center",
                    shape,
                    Self::size_class(props.size),
                    cursor,
                    extra,
                ]))]);
        }

        let (palette, content) = match &props.initials {
            Some(initials) => (
                join_classes([
                    "bg-gray-100 font-medium text-gray-600",
                    Self::text_size_class(props.size),
                ]),
                Node::text(initials),
            ),
            None => (
                "bg-gray-100 text-gray-400".to_string(),
                Node::element("svg")
                    .class("h-3/5 w-3/5")
                    .attr("fill", "currentColor")
                    .attr("viewBox", "0 0 20 20")
                    .child(
                        Node::element("path")
                            .attr("fill-rule", "evenodd")
                            .attr("d", "M10 9a3 3 0 100-6 3 3 0 000 6zm-7 9a7 7 0 1114 0H3z")
                            .attr("clip-rule", "evenodd"),
                    ),
            ),
        };

        Ok(vec![Node::element("div")
            .class(join_classes([
                "inline-flex items-center justify-center",
                palette.as_str(),
                shape,
                Self::size_class(props.size),
                cursor,
                extra,
            ]))
            .attr_opt("role", props.clickable.then_some("button"))
            .attr_opt("aria-label", props.alt.clone())
            .child(content)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(props: AvatarProps) -> Node {
        Avatar::create(props, Context::new()).render().unwrap().remove(0)
    }

    #[test]
    fn test_image_avatar() {
        let node = render(AvatarProps {
            src: Some("/me.png".to_string()),
            size: Size::Lg,
            ..Default::default()
        });
        assert_eq!(node.tag(), Some("img"));
        assert!(node.has_class("size-10"));
        assert!(node.has_class("rounded-full"));
        assert_eq!(node.attribute("loading"), Some("lazy"));
    }

    #[test]
    fn test_initials_fallback() {
        let node = render(AvatarProps {
            initials: Some("JD".to_string()),
            circular: false,
            clickable: true,
            ..Default::default()
        });
        assert_eq!(node.tag(), Some("div"));
        assert!(node.has_class("rounded-md"));
        assert_eq!(node.attribute("role"), Some("button"));
        assert_eq!(node.text_content(), "JD");
    }

    #[test]
    fn test_silhouette_fallback() {
        let node = render(AvatarProps::default());
        assert!(node.find_by_tag("svg").len() == 1);
    }
}
