use serde::Serialize;

/// Counts strictly above this are popular.
pub const POPULAR_ABOVE: u64 = 1000;
/// Counts strictly below this are new.
pub const NEW_BELOW: u64 = 100;

/// Decoration picked for an item from its view count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Popular,
    New,
    Neutral,
}

impl Badge {
    /// Visible label of the wrapper, `None` when the item is not wrapped.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Badge::Popular => Some("Popular!"),
            Badge::New => Some("New!"),
            Badge::Neutral => None,
        }
    }

    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Badge::Popular => Some("wrap-item-popular"),
            Badge::New => Some("wrap-item-new"),
            Badge::Neutral => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Badge::Popular => "popular",
            Badge::New => "new",
            Badge::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Strict bounds for the Popular and New ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub popular_above: u64,
    pub new_below: u64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { popular_above: POPULAR_ABOVE, new_below: NEW_BELOW }
    }
}

impl Thresholds {
    // Popular is checked first; with valid thresholds the ranges never overlap anyway.
    pub fn classify(&self, views: u64) -> Badge {
        if views > self.popular_above {
            Badge::Popular
        } else if views < self.new_below {
            Badge::New
        } else {
            Badge::Neutral
        }
    }
}

/// Classify with the default thresholds (popular above 1000, new below 100).
pub fn classify(views: u64) -> Badge {
    Thresholds::default().classify(views)
}
