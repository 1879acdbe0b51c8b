// Grid layout for FormCraft

use crate::component::{Component, ComponentError, Context, Node};
use crate::kit::utils::join_classes;

/// Column counts per breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponsiveColumns {
    pub default: Option<u8>,
    pub sm: Option<u8>,
    pub md: Option<u8>,
    pub lg: Option<u8>,
    pub xl: Option<u8>,
    pub xxl: Option<u8>,
}

/// Grid column configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridColumns {
    /// Same column count at every width
    Fixed(u8),
    /// Column count per breakpoint
    Responsive(ResponsiveColumns),
}

impl Default for GridColumns {
    fn default() -> Self {
        GridColumns::Fixed(2)
    }
}

impl From<u8> for GridColumns {
    fn from(columns: u8) -> Self {
        GridColumns::Fixed(columns)
    }
}

impl From<ResponsiveColumns> for GridColumns {
    fn from(columns: ResponsiveColumns) -> Self {
        GridColumns::Responsive(columns)
    }
}

impl GridColumns {
    /// `grid-cols-*` classes for this configuration. Counts are clamped to 1..=12.
    pub fn classes(&self) -> String {
        let class = |prefix: &str, count: u8| format!("{prefix}grid-cols-{}", count.clamp(1, 12));

        match self {
            GridColumns::Fixed(count) => class("", *count),
            GridColumns::Responsive(columns) => [
                ("", columns.default),
                ("sm:", columns.sm),
                ("md:", columns.md),
                ("lg:", columns.lg),
                ("xl:", columns.xl),
                ("2xl:", columns.xxl),
            ]
            .into_iter()
            .filter_map(|(prefix, count)| count.map(|count| class(prefix, count)))
            .collect::<Vec<_>>()
            .join(" "),
        }
    }
}

/// Grid props
#[derive(Debug, Clone, Default)]
pub struct GridProps {
    pub columns: GridColumns,
    pub children: Vec<Node>,
    pub class: Option<String>,
}

/// Grid component
#[derive(Debug)]
pub struct Grid {
    props: GridProps,
}

impl Component for Grid {
    type Props = GridProps;

    fn create(props: Self::Props, _context: Context) -> Self {
        Self { props }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        self.props = props;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        let columns = self.props.columns.classes();
        Ok(vec![Node::element("div")
            .class(join_classes([
                "grid gap-6",
                columns.as_str(),
                self.props.class.as_deref().unwrap_or_default(),
            ]))
            .children(self.props.children.iter().cloned())])
    }
}
