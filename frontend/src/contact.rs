use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{Document, FormData, HtmlFormElement};

use crate::components::notification::{self, Variant};
use crate::dom;

pub const SUCCESS_MESSAGE: &str = "提交成功！我们会尽快与您联系。";

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
// Mainland China mobile numbers, ASCII digits only
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[3-9][0-9]{9}$").unwrap());

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("请填写所有必填字段")]
    MissingField,
    #[error("请输入有效的邮箱地址")]
    InvalidEmail,
    #[error("请输入有效的手机号码")]
    InvalidPhone,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub organization: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn from_form(form: &HtmlFormElement) -> Result<Self, JsValue> {
        let data = FormData::new_with_form(form)?;
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        Ok(Self {
            name: field("name"),
            organization: field("organization"),
            phone: field("phone"),
            email: field("email"),
            message: field("message"),
        })
    }

    /// Checks presence first, then email shape, then phone shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.name, &self.organization, &self.phone, &self.email];
        if required.iter().any(|value| value.is_empty()) {
            return Err(ValidationError::MissingField);
        }
        if !EMAIL.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !PHONE.is_match(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(())
    }
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, "contactForm") else {
        return Ok(());
    };
    let target = form.clone();
    dom::listen(&target, "submit", move |event| {
        event.prevent_default();
        let submission = match ContactSubmission::from_form(&form) {
            Ok(submission) => submission,
            Err(err) => {
                log::warn!("Could not read contact form: {:?}", err);
                return;
            }
        };

        if let Err(err) = submission.validate() {
            info!("Contact form rejected: {:?}", err);
            notification::show(&err.to_string(), Variant::Error);
            return;
        }

        // Submission stays local; nothing is sent anywhere yet.
        debug!(
            "Contact submission accepted: {}",
            serde_json::to_string(&submission).unwrap_or_default()
        );
        notification::show(SUCCESS_MESSAGE, Variant::Success);
        form.reset();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "张三".into(),
            organization: "上海某文化公司".into(),
            phone: "13812345678".into(),
            email: "a@b.co".into(),
            message: String::new(),
        }
    }

    #[test]
    fn complete_submission_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn each_required_field_is_checked() {
        let blanks: [fn(&mut ContactSubmission); 4] = [
            |s| s.name.clear(),
            |s| s.organization.clear(),
            |s| s.phone.clear(),
            |s| s.email.clear(),
        ];
        for blank in blanks {
            let mut submission = valid();
            blank(&mut submission);
            assert_eq!(submission.validate(), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn message_is_optional() {
        let mut submission = valid();
        submission.message = "期待合作".into();
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn email_shape() {
        let mut submission = valid();
        for bad in ["not-an-email", "a@b", "a b@c.de", "@b.co"] {
            submission.email = bad.into();
            assert_eq!(submission.validate(), Err(ValidationError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn phone_shape() {
        let mut submission = valid();
        for bad in ["12345678901", "1381234567", "138123456789", "23812345678"] {
            submission.phone = bad.into();
            assert_eq!(submission.validate(), Err(ValidationError::InvalidPhone), "{bad}");
        }
        submission.phone = "19912345678".into();
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        let mut submission = valid();
        // full-width and Arabic-Indic digits
        for bad in ["13８１２３４５６７８", "１３８１２３４５６７８", "138١٢٣٤٥٦٧٨"] {
            submission.phone = bad.into();
            assert_eq!(submission.validate(), Err(ValidationError::InvalidPhone), "{bad}");
        }
    }

    #[test]
    fn missing_field_wins_over_bad_shapes() {
        let mut submission = valid();
        submission.email = "nope".into();
        submission.name.clear();
        assert_eq!(submission.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn accepted_submission_serializes_every_field() {
        let value = serde_json::to_value(valid()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "张三",
                "organization": "上海某文化公司",
                "phone": "13812345678",
                "email": "a@b.co",
                "message": "",
            })
        );
    }

    #[test]
    fn messages_are_localized() {
        assert_eq!(ValidationError::MissingField.to_string(), "请填写所有必填字段");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "请输入有效的邮箱地址");
        assert_eq!(ValidationError::InvalidPhone.to_string(), "请输入有效的手机号码");
    }
}
