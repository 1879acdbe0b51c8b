// Form field components
//
// Every field owns its value, error and touched state through `FieldCore`,
// runs its validator on change and reports the new value upward.

pub mod base;
pub mod checkbox;
pub mod checkbox_list;
pub mod hidden;
pub mod radio;
pub mod repeater;
pub mod select;
pub mod slider;
pub mod text_area;
pub mod text_input;
pub mod toggle;

pub use base::{FieldCore, FieldOption, FieldProps};
pub use checkbox::{Checkbox, CheckboxProps};
pub use checkbox_list::{CheckboxList, CheckboxListProps};
pub use hidden::{Hidden, HiddenProps};
pub use radio::{Radio, RadioProps};
pub use repeater::{ItemRenderer, Repeater, RepeaterItem, RepeaterProps};
pub use select::{Select, SelectProps, Selection};
pub use slider::{Slider, SliderProps};
pub use text_area::{Resize, TextArea, TextAreaProps};
pub use text_input::{InputType, TextInput, TextInputProps};
pub use toggle::{Toggle, ToggleProps};
