use super::log_level::{LogLevel, LogRecord};
use super::logger_error::LoggerError;
use std::sync::mpsc::Sender;

/// A LoggerSender representing the sender channel connected to a Logger.
///
/// It only ships the level and the text; the receiving side decides what gets
/// written and how it is tagged.
#[derive(Debug, Clone)]
pub struct LoggerSender {
    sender_clone: Sender<LogRecord>,
}

impl LoggerSender {
    /// Creates a new LoggerSender from a clone of an existing sender.
    pub fn new(sender_clone: Sender<LogRecord>) -> Self {
        Self { sender_clone }
    }

    /// Sends a record to the log connected to the LoggerSender.
    ///
    /// It returns an error if:
    /// - Couldn't send the record to the receiver
    pub fn send(&self, record: LogRecord) -> Result<(), LoggerError> {
        self.sender_clone
            .send(record)
            .map_err(|err| LoggerError::SendError(err.0.text))
    }

    pub fn debug(&self, value: &str) {
        self.log(LogLevel::Debug, value);
    }

    pub fn info(&self, value: &str) {
        self.log(LogLevel::Info, value);
    }

    pub fn warn(&self, value: &str) {
        self.log(LogLevel::Warn, value);
    }

    pub fn error(&self, value: &str) {
        self.log(LogLevel::Error, value);
    }

    fn log(&self, level: LogLevel, value: &str) {
        if let Err(err) = self.send(LogRecord::new(level, value)) {
            eprintln!("Couldn't write to the log: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_helpers_send_their_level() {
        let (sender, receiver) = channel();
        let logger_sender = LoggerSender::new(sender);

        logger_sender.debug("one");
        logger_sender.info("two");
        logger_sender.warn("three");
        logger_sender.error("four");

        let records: Vec<LogRecord> = receiver.try_iter().collect();
        assert_eq!(
            records,
            vec![
                LogRecord::new(LogLevel::Debug, "one"),
                LogRecord::new(LogLevel::Info, "two"),
                LogRecord::new(LogLevel::Warn, "three"),
                LogRecord::new(LogLevel::Error, "four"),
            ]
        );
    }

    #[test]
    fn test_send_without_receiver_fails() {
        let (sender, receiver) = channel();
        drop(receiver);
        let logger_sender = LoggerSender::new(sender);

        assert!(matches!(
            logger_sender.send(LogRecord::new(LogLevel::Info, "lost")),
            Err(LoggerError::SendError(msg)) if msg == "lost"
        ));
        logger_sender.warn("lost too");
    }
}
