mod alert;
mod layout;

pub use alert::*;
pub use layout::*;
