pub mod atom;
pub mod layout;
pub mod orbit;
