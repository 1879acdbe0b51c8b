// Layout components for FormCraft

pub mod grid;
pub mod section;
pub mod sidebar;
pub mod tabs;

pub use grid::{Grid, GridColumns, GridProps, ResponsiveColumns};
pub use section::{Section, SectionProps};
pub use sidebar::{Sidebar, SidebarGroup, SidebarItem, SidebarProps};
pub use tabs::{TabItem, Tabs, TabsProps};
