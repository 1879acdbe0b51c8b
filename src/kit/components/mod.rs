// FormCraft component module organization

// Presentational atoms
pub mod atoms;

// Form fields
pub mod fields;

// Layout components
pub mod layout;

// Compound containers
pub mod containers;

// Re-export commonly used components
pub use atoms::{Badge, Button, Icon, Tooltip};
pub use containers::{Card, Modal};
pub use fields::{Checkbox, CheckboxList, Radio, Repeater, Select, Slider, TextArea, TextInput, Toggle};
pub use layout::{Grid, Section, Sidebar, Tabs};
