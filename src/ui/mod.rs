pub mod contact_form;
pub mod contact_list;
pub mod dialogs;
pub mod main_window;
pub mod view;
