//! Frequently asked questions managed from the settings page.

use serde::{Deserialize, Serialize};

use crate::SalesdashError;

/// A stored FAQ entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqEntry {
    /// Millisecond timestamp of creation, as a string
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// User-supplied question/answer pair for create and edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
}

impl FaqInput {
    #[must_use]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { question: question.into(), answer: answer.into() }
    }

    /// Rejects blank questions or answers. Text is stored untrimmed.
    ///
    /// # Errors
    /// Returns `InvalidInput` when either field is empty or whitespace.
    pub fn validate(&self) -> Result<(), SalesdashError> {
        if self.question.trim().is_empty() || self.answer.trim().is_empty() {
            return Err(SalesdashError::InvalidInput(
                "Question and answer cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn into_entry(self, id: String) -> FaqEntry {
        FaqEntry { id, question: self.question, answer: self.answer }
    }
}

/// Collection used when nothing has been persisted yet.
#[must_use]
pub fn default_faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            id: "1".to_owned(),
            question: "How do I track my order?".to_owned(),
            answer: "You can track your order by logging into your account and visiting the \
                     'Orders' section. There you'll find all your orders and their current status."
                .to_owned(),
        },
        FaqEntry {
            id: "2".to_owned(),
            question: "What payment methods do you accept?".to_owned(),
            answer: "We accept credit cards (Visa, MasterCard, American Express), PayPal, and \
                     bank transfers. All payments are processed securely."
                .to_owned(),
        },
        FaqEntry {
            id: "3".to_owned(),
            question: "How can I request a refund?".to_owned(),
            answer: "To request a refund, please contact our customer support team within 30 \
                     days of purchase. You'll need to provide your order number and reason for \
                     the refund."
                .to_owned(),
        },
    ]
}
