/// Data category offered in the first wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Shipments,
    Receipts,
    Returns,
}

const CATEGORY_PROMPT_PREFIX: &str = "Show me info about ";

impl Category {
    pub const ALL: [Category; 3] = [Category::Shipments, Category::Receipts, Category::Returns];

    /// Key sent to the stats endpoint as `stats`.
    pub fn key(self) -> &'static str {
        match self {
            Category::Shipments => "SHIPMENTS",
            Category::Receipts => "RECEIPTS",
            Category::Returns => "RETURNS",
        }
    }

    /// Text of the button, echoed into the transcript as the user's message.
    pub fn prompt(self) -> &'static str {
        match self {
            Category::Shipments => "Show me info about Shipments",
            Category::Receipts => "Show me info about receipts",
            Category::Returns => "Show me info about returns",
        }
    }

    /// Human-readable name used inside bot sentences.
    pub fn label(self) -> &'static str {
        let prompt = self.prompt();
        prompt.strip_prefix(CATEGORY_PROMPT_PREFIX).unwrap_or(prompt)
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Reporting window offered in the second wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    Today,
    Last7Days,
    Last30Days,
}

const TIME_FRAME_PROMPT_PREFIX: &str = "Show me for ";

impl TimeFrame {
    pub const ALL: [TimeFrame; 3] = [TimeFrame::Today, TimeFrame::Last7Days, TimeFrame::Last30Days];

    /// Field name of the matching slot in a stats range entry.
    pub fn key(self) -> &'static str {
        match self {
            TimeFrame::Today => "today",
            TimeFrame::Last7Days => "last7days",
            TimeFrame::Last30Days => "last30days",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            TimeFrame::Today => "Show me for today",
            TimeFrame::Last7Days => "Show me for last 7 days",
            TimeFrame::Last30Days => "Show me for last 30 days",
        }
    }

    pub fn label(self) -> &'static str {
        let prompt = self.prompt();
        prompt.strip_prefix(TIME_FRAME_PROMPT_PREFIX).unwrap_or(prompt)
    }

    pub fn from_key(key: &str) -> Option<TimeFrame> {
        TimeFrame::ALL.into_iter().find(|t| t.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_strip_the_prompt_prefix() {
        assert_eq!(Category::Shipments.label(), "Shipments");
        assert_eq!(Category::Receipts.label(), "receipts");
        assert_eq!(TimeFrame::Last30Days.label(), "last 30 days");
    }

    #[test]
    fn keys_round_trip_and_reject_unknown() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        for time_frame in TimeFrame::ALL {
            assert_eq!(TimeFrame::from_key(time_frame.key()), Some(time_frame));
        }
        assert_eq!(Category::from_key("shipments"), None);
        assert_eq!(TimeFrame::from_key("yesterday"), None);
    }
}
