pub mod confirm;

pub use confirm::confirm_dialog;
