use crate::error::AppError;
use crate::reporter::{Report, VoteReporter};
use crate::session::Session;
use log::warn;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// Talent application fields; only name and email are required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub experience: String,
    pub why: String,
}

impl JoinForm {
    /// Parses `key=value` pairs separated by `;`.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let mut form = JoinForm::default();
        for pair in input.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| AppError::Validation(format!("Expected key=value, got '{}'", pair)))?;
            let value = value.trim().to_string();
            match key.trim().to_ascii_lowercase().as_str() {
                "name" => form.name = value,
                "email" => form.email = value,
                "phone" => form.phone = value,
                "age" => form.age = value,
                "height" => form.height = value,
                "weight" => form.weight = value,
                "experience" => form.experience = value,
                "why" => form.why = value,
                other => return Err(AppError::Validation(format!("Unknown field '{}'", other))),
            }
        }
        Ok(form)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            warn!("Join form submitted without name or email");
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub fn submit<R: VoteReporter>(&self, session: &Session<R>) -> Result<String, AppError> {
        self.validate()?;
        session.emit(Report::Application {
            name: self.name.clone(),
            email: self.email.clone(),
        });
        Ok("Application Submitted!\nThank you for your interest in joining IWA. Our talent scouts \
            will review your application and contact you within 5-7 business days.\n"
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::testing::RecordingReporter;

    #[test]
    fn parses_fields() {
        let form = JoinForm::parse("name=Kid Flame; email=kid@flame.io;age=22; why = to win gold").unwrap();
        assert_eq!(form.name, "Kid Flame");
        assert_eq!(form.email, "kid@flame.io");
        assert_eq!(form.age, "22");
        assert_eq!(form.why, "to win gold");
        assert!(form.phone.is_empty());
    }

    #[test]
    fn rejects_unknown_field() {
        assert!(matches!(JoinForm::parse("nickname=Flame"), Err(AppError::Validation(_))));
        assert!(matches!(JoinForm::parse("name"), Err(AppError::Validation(_))));
    }

    #[test]
    fn requires_name_and_email() {
        let session = Session::new(RecordingReporter::default());
        let form = JoinForm::parse("name=Kid Flame").unwrap();
        match form.submit(&session) {
            Err(AppError::Validation(message)) => assert_eq!(message, REQUIRED_FIELDS_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(session.reporter().reports.borrow().is_empty());
    }

    #[test]
    fn successful_submit_is_reported() {
        let session = Session::new(RecordingReporter::default());
        let form = JoinForm::parse("name=Kid Flame;email=kid@flame.io").unwrap();
        assert!(form.submit(&session).unwrap().starts_with("Application Submitted!"));
        assert_eq!(
            session.reporter().reports.borrow()[0],
            Report::Application {
                name: "Kid Flame".to_string(),
                email: "kid@flame.io".to_string()
            }
        );
    }
}
