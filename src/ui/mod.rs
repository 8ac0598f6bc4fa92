pub mod form_field;
pub mod terminal_guard;
pub mod wizard;
