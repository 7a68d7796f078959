use super::constants::LOGGER_THREAD_NAME;
use super::log_level::{LogLevel, LogRecord};
use super::logger_error::LoggerError;
use super::logger_sender::LoggerSender;
use chrono::prelude::*;
use std::fs::{self, File};
use std::io::{self, Write};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

const LINE_TIMESTAMP_FORMAT: &str = "[%Y/%m/%d %H:%M:%S]";
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// File logger fed by any number of `LoggerSender`s.
///
/// Records travel through a channel to a dedicated thread, so the UI thread
/// never waits on the disk. That thread drops records below the minimum level
/// and writes the rest as `[timestamp] [LEVEL] text`.
#[derive(Debug)]
pub struct Logger {
    sender: LoggerSender,
}

impl Logger {
    /// Creates `statusbar_{timestamp}.log` inside `dir_path` and starts the writer thread.
    ///
    /// It returns an LoggerError if:
    /// - A new file could not be created at the directory path given
    /// - There was a problem creating a new thread for the logger receiver
    pub fn new(dir_path: &str, min_level: LogLevel) -> Result<Self, LoggerError> {
        let (sender, receiver) = channel();

        let sink = LogSink {
            file: create_log_file(dir_path)?,
            min_level,
        };
        thread::Builder::new()
            .name(LOGGER_THREAD_NAME.to_string())
            .spawn(move || sink.drain(receiver))
            .map_err(|_| LoggerError::SpawnThreadError)?;

        Ok(Self {
            sender: LoggerSender::new(sender),
        })
    }

    /// Creates a new LoggerSender for the current Logger
    pub fn new_sender(&self) -> LoggerSender {
        self.sender.clone()
    }
}

struct LogSink<W: Write> {
    file: W,
    min_level: LogLevel,
}

impl<W: Write> LogSink<W> {
    /// Writes records until every sender is gone.
    fn drain(mut self, receiver: Receiver<LogRecord>) {
        while let Ok(record) = receiver.recv() {
            if let Err(err) = self.write(&record, Local::now()) {
                eprintln!("Error({err}) writing to the log");
            }
        }
    }

    fn write<Tz: TimeZone>(&mut self, record: &LogRecord, time: DateTime<Tz>) -> io::Result<()>
    where
        Tz::Offset: std::fmt::Display,
    {
        if record.level < self.min_level {
            return Ok(());
        }
        writeln!(
            self.file,
            "{} {}",
            time.format(LINE_TIMESTAMP_FORMAT),
            record
        )
    }
}

fn create_log_file(dir_path: &str) -> Result<File, LoggerError> {
    let file_name = format!(
        "{}/statusbar_{}.log",
        dir_path,
        Local::now().format(FILE_TIMESTAMP_FORMAT)
    );

    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_name)
        .map_err(|_| LoggerError::BadLogPathError(dir_path.to_string()))
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_bad_path() {
        let path = "./this/log/directory/does/not/exist";

        let logger = Logger::new(path, LogLevel::Debug);

        assert!(matches!(logger, Err(LoggerError::BadLogPathError(_))));
    }

    #[test]
    fn test_sink_tags_lines_with_level_and_time() {
        let mut sink = LogSink {
            file: Vec::new(),
            min_level: LogLevel::Debug,
        };
        let time = Utc.with_ymd_and_hms(2022, 11, 3, 21, 5, 9).unwrap();

        sink.write(&LogRecord::new(LogLevel::Debug, "limit set"), time)
            .unwrap();

        assert_eq!(
            String::from_utf8(sink.file).unwrap(),
            "[2022/11/03 21:05:09] [DEBUG] limit set\n"
        );
    }

    #[test]
    fn test_sink_drops_records_below_min_level() {
        let mut sink = LogSink {
            file: Vec::new(),
            min_level: LogLevel::Warn,
        };
        let time = Utc.with_ymd_and_hms(2022, 11, 3, 21, 5, 9).unwrap();

        sink.write(&LogRecord::new(LogLevel::Debug, "quiet"), time)
            .unwrap();
        sink.write(&LogRecord::new(LogLevel::Info, "quiet too"), time)
            .unwrap();
        sink.write(&LogRecord::new(LogLevel::Error, "loud"), time)
            .unwrap();

        assert_eq!(
            String::from_utf8(sink.file).unwrap(),
            "[2022/11/03 21:05:09] [ERROR] loud\n"
        );
    }

    #[test]
    fn test_lines_are_written_with_timestamp() {
        let path = "./test_statusbar_log_lines";
        fs::create_dir_all(path).unwrap();

        let logger = Logger::new(path, LogLevel::Debug).unwrap();
        let logger_sender = logger.new_sender();
        logger_sender.info("first line");
        logger_sender.warn("second line");

        let contents = wait_for_log_lines(path, 2);

        assert_eq!(contents.len(), 2);
        assert!(contents[0].starts_with('['));
        assert!(contents[0].ends_with("[INFO] first line"));
        assert!(contents[1].ends_with("[WARN] second line"));

        fs::remove_dir_all(path).unwrap();
    }

    #[test]
    fn test_min_level_is_applied_by_the_logger_thread() {
        let path = "./test_statusbar_log_min_level";
        fs::create_dir_all(path).unwrap();

        let logger = Logger::new(path, LogLevel::Warn).unwrap();
        let logger_sender = logger.new_sender();
        logger_sender.debug("not written");
        logger_sender.warn("written");

        let contents = wait_for_log_lines(path, 1);

        assert_eq!(contents.len(), 1);
        assert!(contents[0].ends_with("[WARN] written"));

        fs::remove_dir_all(path).unwrap();
    }

    #[test]
    fn test_multiple_senders() {
        let path = "./test_statusbar_log_multiple_senders";
        fs::create_dir_all(path).unwrap();

        let logger = Logger::new(path, LogLevel::Debug).unwrap();
        let senders = [logger.new_sender(), logger.new_sender(), logger.new_sender()];
        for (index, sender) in senders.into_iter().enumerate() {
            thread::spawn(move || sender.info(&format!("log_test_{}", index)))
                .join()
                .unwrap();
        }

        let contents = wait_for_log_lines(path, 3);

        for (index, line) in contents.iter().enumerate() {
            assert!(line.contains(&format!("log_test_{}", index)));
        }

        fs::remove_dir_all(path).unwrap();
    }

    // Auxiliary functions

    fn wait_for_log_lines(dir_path: &str, expected: usize) -> Vec<String> {
        let mut lines = Vec::new();
        for _ in 0..50 {
            lines = fs::read_dir(dir_path)
                .unwrap()
                .filter_map(|entry| fs::read_to_string(entry.unwrap().path()).ok())
                .flat_map(|contents| {
                    contents
                        .lines()
                        .map(|line| line.to_string())
                        .collect::<Vec<String>>()
                })
                .collect();
            if lines.len() >= expected {
                break;
            }
            sleep(Duration::from_millis(20));
        }
        lines
    }
}
