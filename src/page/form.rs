use crate::foundation::error::{ScrollfxError, ScrollfxResult};

/// Message shown after a contact form is accepted.
pub const ACKNOWLEDGMENT: &str = "Thanks! We'll reach out shortly.";

/// Contact form input, held in memory only.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Acknowledgment {
    pub message: String,
}

impl ContactForm {
    /// Check the field constraints and acknowledge. Nothing is sent anywhere.
    pub fn submit(&self) -> ScrollfxResult<Acknowledgment> {
        let mut problems = Vec::new();
        // Mirrors `required`: only an empty value is missing.
        if self.name.is_empty() {
            problems.push("name is required");
        }
        // Email inputs strip surrounding whitespace before checking.
        if self.email.trim().is_empty() {
            problems.push("email is required");
        } else if !is_valid_email(self.email.trim()) {
            problems.push("email must be a valid address");
        }
        if !problems.is_empty() {
            return Err(ScrollfxError::validation(problems.join("; ")));
        }

        tracing::debug!(message_len = self.message.len(), "contact form accepted");
        Ok(Acknowledgment {
            message: ACKNOWLEDGMENT.to_string(),
        })
    }
}

/// Address shape accepted by an HTML `type="email"` input: a non-empty local part,
/// one `@`, and dot-separated domain labels of letters, digits and inner hyphens.
fn is_valid_email(s: &str) -> bool {
    const LOCAL_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";

    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
    {
        return false;
    }
    !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

#[cfg(test)]
#[path = "../../tests/unit/page/form.rs"]
mod tests;
