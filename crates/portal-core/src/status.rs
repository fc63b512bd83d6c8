/// Reachability of the signing API as shown in the header badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

impl ConnectionStatus {
    pub const ALL: [ConnectionStatus; 3] = [Self::Checking, Self::Online, Self::Offline];

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking connection...",
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }

    pub fn api_blurb(self) -> &'static str {
        match self {
            Self::Checking => "Talking to the API",
            Self::Online => "API is humming quietly",
            Self::Offline => "the api is asleep right now",
        }
    }

    /// Outcome of a finished connection check.
    #[inline]
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            Self::Online
        } else {
            Self::Offline
        }
    }
}

/// Numbers overlapping connection checks so that only the newest one may
/// update the badge. Slow responses from older checks are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckGeneration {
    latest: u64,
}

impl CheckGeneration {
    /// Start a new check and return its ticket. Every older ticket goes stale.
    pub fn begin(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    #[inline]
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
