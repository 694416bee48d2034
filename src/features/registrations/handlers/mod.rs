pub mod registration_handler;

pub use registration_handler::{
    __path_list_registrations, __path_register, __path_show_registration_form,
    list_registrations, register, show_registration_form,
};
