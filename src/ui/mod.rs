pub mod client_window;
pub mod gtk_prompt;
pub mod gtk_timer;
pub mod gtk_view;
pub mod setup;
