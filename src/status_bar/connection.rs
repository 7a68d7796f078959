use crate::session::session_status::SessionStatus;

/// What the connection indicator shows. Recomputed from scratch on every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Offline,
    Connected,
    Firewalled,
}

impl ConnectionState {
    pub fn from_status(status: &SessionStatus) -> Self {
        if !status.is_listening {
            ConnectionState::Offline
        } else if status.has_incoming_connections {
            ConnectionState::Connected
        } else {
            ConnectionState::Firewalled
        }
    }

    /// Freedesktop icon name for the indicator.
    pub fn icon_name(&self) -> &'static str {
        match self {
            ConnectionState::Offline => "network-offline",
            ConnectionState::Connected => "network-transmit-receive",
            ConnectionState::Firewalled => "network-error",
        }
    }

    /// Pango markup for the indicator tooltip.
    pub fn tooltip_markup(&self) -> String {
        let detail = match self {
            ConnectionState::Offline => "Offline. This usually means that dTorrent failed to listen on the selected port for incoming connections.",
            ConnectionState::Connected => "Online",
            ConnectionState::Firewalled => {
                "<i>No direct connections. This may indicate network configuration problems.</i>"
            }
        };
        format!("<b>Connection status:</b>\n{}", detail)
    }
}
