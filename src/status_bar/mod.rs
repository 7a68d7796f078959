pub mod connection;
pub mod formatters;
pub mod prompt;
pub mod snapshot;
pub mod statusbar;
pub mod timer;
pub mod view;

#[cfg(test)]
pub(crate) mod test_fakes;
