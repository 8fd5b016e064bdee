mod button;
mod content;

pub use button::{ArborButton, ArborButtonSize, ArborButtonVariant};
pub use content::PageContent;
