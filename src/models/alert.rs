use crate::constants::{CATEGORY_DELIMITER, STATUS_CATEGORY, UNKNOWN_CATEGORY};

/// One distinct disruption, already split into its line key and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertItem {
    /// Normalised line key, e.g. `"hammersmith-city"`. Drives color and title.
    pub category: String,
    /// Text shown inside the card.
    pub body: String,
    /// Whether the body mentions the urgency marker.
    pub is_urgent: bool,
}

impl AlertItem {
    /// Build an item, flagging it urgent when `body` contains `marker`
    /// (case-insensitive). An empty marker never matches.
    pub fn new(category: impl Into<String>, body: impl Into<String>, marker: &str) -> Self {
        let body = body.into();
        Self {
            category: category.into(),
            is_urgent: contains_marker(&body, marker),
            body,
        }
    }
}

fn contains_marker(body: &str, marker: &str) -> bool {
    !marker.is_empty() && body.to_lowercase().contains(&marker.to_lowercase())
}

/// Anything that gets its own card on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayItem {
    Alert(AlertItem),
    /// The "Last updated" card. Untitled, never urgent, sized to its text.
    Status { body: String },
}

impl DisplayItem {
    pub fn category(&self) -> &str {
        match self {
            DisplayItem::Alert(alert) => &alert.category,
            DisplayItem::Status { .. } => STATUS_CATEGORY,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            DisplayItem::Alert(alert) => &alert.body,
            DisplayItem::Status { body } => body,
        }
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self, DisplayItem::Alert(alert) if alert.is_urgent)
    }

    /// Card title: the upper-cased line key, or none for the status card.
    pub fn title(&self) -> Option<String> {
        match self {
            DisplayItem::Alert(alert) => Some(alert.category.to_uppercase()),
            DisplayItem::Status { .. } => None,
        }
    }
}

/// Split a raw disruption description into `(category, body)`.
///
/// `"Hammersmith & City Line: Minor delays"` becomes
/// `("hammersmith-city", "Minor delays")`. Without the `": "` delimiter the
/// key is the lower-cased first word and the body is the whole string.
pub fn split_alert(raw: &str) -> (String, String) {
    if let Some((prefix, body)) = raw.split_once(CATEGORY_DELIMITER) {
        let key = prefix
            .to_lowercase()
            .replace(" & ", "-")
            .replace(" line", "")
            .trim()
            .replace(' ', "-");
        return (key, body.to_string());
    }

    let key = raw
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
        .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
    (key, raw.to_string())
}
