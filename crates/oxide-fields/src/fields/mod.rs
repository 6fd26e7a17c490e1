//! Constructors for the standard field types.
//!
//! Each constructor pairs a label with the matching widget. The returned
//! [`Field`](crate::Field) can be configured further with its builder
//! methods.

mod button;
mod checkbox;
mod date;
mod select;
mod text;

pub use button::{button, button_field, buttons};
pub use checkbox::{checkbox_field, checkboxes_field};
pub use date::{birthdate_field, date_field};
pub use select::{multiselect_field, pulldown_field, radio_field};
pub use text::{
    email_field, hidden_field, integer_field, memo_field, number_field, password_field,
    phone_field, text_field, twitter_field, url_field,
};
