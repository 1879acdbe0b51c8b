// FormCraft component kit

pub mod components;
pub mod form;
pub mod theme;
pub mod utils;

/// Re-export of common components for convenience
pub mod prelude {
    pub use crate::kit::components::atoms::{
        Avatar, Badge, Button, ButtonProps, Divider, EmptyState, ErrorText, HelperText, Hint,
        Icon, Label, LoadingSpinner, Tooltip,
    };
    pub use crate::kit::components::containers::{
        Card, CardChild, CardHeader, CardProps, ConfirmDialog, ConfirmDialogProps, ConfirmVariant,
        Modal, ModalAction, ModalChild, ModalProps,
    };
    pub use crate::kit::components::fields::{
        Checkbox, CheckboxList, FieldOption, FieldProps, Hidden, Radio, Repeater, RepeaterItem,
        Select, Selection, Slider, TextArea, TextInput, Toggle,
    };
    pub use crate::kit::components::layout::{Grid, Section, Sidebar, Tabs};
    pub use crate::kit::form::{Form, FormHandle, FormProps, SubmitOutcome};
    pub use crate::kit::theme::{Alignment, Color, Size};
}
