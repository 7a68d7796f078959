use std::fmt::{Debug, Display};

/**
Human readable text carried inside an error variant, printed as-is by both `Debug` and `Display`.

```rust
use dtorrent_statusbar::app::error_message::ErrorMessage;

#[derive(Debug)]
enum Errors {
   BadSetting(ErrorMessage),
}

let err = Errors::BadSetting(ErrorMessage::new("DHT_ENABLED must be true or false".to_string()));

assert_eq!(format!("{:?}", err), "BadSetting(DHT_ENABLED must be true or false)");
```
*/
#[derive(PartialEq, Eq, Clone)]
pub struct ErrorMessage {
    pub message: String,
}

impl Debug for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.message)
    }
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.message)
    }
}

impl ErrorMessage {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}
