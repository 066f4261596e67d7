//! Page state derived from the form.

pub mod form;
