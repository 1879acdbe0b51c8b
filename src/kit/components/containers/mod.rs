// Compound containers for FormCraft
//
// Containers take typed slot children (header, footer, body) and assemble
// the surrounding chrome around them.

pub mod card;
pub mod confirm_dialog;
pub mod modal;

pub use card::{Card, CardChild, CardFooter, CardHeader, CardProps, SlotChild};
pub use confirm_dialog::{ConfirmDialog, ConfirmDialogProps, ConfirmVariant};
pub use modal::{
    ActionColor, ActionSlot, FooterChild, Modal, ModalAction, ModalChild, ModalFooter, ModalHeader,
    ModalProps, ModalWidth,
};
