/// One inbound chat message, reduced to what the relay decides on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    pub channel_id: String,
    pub user_id: Option<String>,
    pub text: String,
    pub has_attachments: bool,
    /// Secondary payload carried by edited or linked messages.
    pub sub_text: Option<String>,
    pub ts: String,
}

impl MessageEvent {
    /// Text the classifier should look at: the sub-message when it has content,
    /// otherwise the primary text.
    #[must_use]
    pub fn working_text(&self) -> &str {
        match self.sub_text.as_deref() {
            Some(sub) if !sub.is_empty() => sub,
            _ => &self.text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotJobPostingCause {
    HasAttachment,
    Classified,
}

/// Outcome of the repost transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepostDecision {
    Reposted,
    WrongChannel,
    NotJobPosting(NotJobPostingCause),
    AlreadyPosted,
}

impl RepostDecision {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RepostDecision::Reposted => "Reposted",
            RepostDecision::WrongChannel => "Wrong channel ID",
            RepostDecision::NotJobPosting(_) => "Not job posting",
            RepostDecision::AlreadyPosted => "Already posted",
        }
    }

    #[must_use]
    pub fn is_not_job_posting(&self) -> bool {
        matches!(self, RepostDecision::NotJobPosting(_))
    }
}

/// Outcome of the delete transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDecision {
    Deleted,
    WrongChannel,
    WrongUser,
}

impl DeleteDecision {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteDecision::Deleted => "Deleted",
            DeleteDecision::WrongChannel => "Wrong channel ID",
            DeleteDecision::WrongUser => "Wrong user ID",
        }
    }
}
