// Presentational building blocks shared by fields, layouts and containers

pub mod avatar;
pub mod badge;
pub mod button;
pub mod divider;
pub mod empty_state;
pub mod icon;
pub mod text;
pub mod tooltip;

pub use avatar::{Avatar, AvatarProps, Loading};
pub use badge::{Badge, BadgeProps};
pub use button::{Button, ButtonProps, ButtonType, IconPosition};
pub use divider::{Divider, DividerProps};
pub use empty_state::{EmptyState, EmptyStateProps};
pub use icon::{Icon, IconProps, LoadingSpinner, LoadingSpinnerProps};
pub use text::{
    ErrorText, ErrorTextProps, HelperText, HelperTextProps, Hint, HintProps, Label, LabelProps,
};
pub use tooltip::{Tooltip, TooltipProps};
