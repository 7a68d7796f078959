/// Logger posible errors
#[derive(Debug)]
pub enum LoggerError {
    SpawnThreadError,
    SendError(String),
    BadLogPathError(String),
}
