//! Live form buffer, bindings, error state and submit handling

use super::{FieldKey, FieldValue, FormError, HobbyEntry, HobbyId, HobbyList, ValidationMode};
use crate::schema::{
    self, FieldIssue, FieldPath, FormData, FormInput, HobbyInput, SubscriptionType,
    ValidationErrors,
};
use crate::sink::SubmitSink;
use anyhow::Result;
use std::collections::HashMap;

/// Result of a submit action
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The sink received this data and the buffer was reset
    Submitted(FormData),
    /// Validation failed; errors are now shown inline
    Rejected(ValidationErrors),
}

/// Owns the edit buffer for the signup form
#[derive(Debug, Clone)]
pub struct FormController {
    name: String,
    email: String,
    subscription_type: SubscriptionType,
    /// `Some` exactly while the premium input is rendered
    premium_features: Option<String>,
    hobbies: HobbyList,
    newsletter: bool,
    errors: HashMap<FieldKey, FieldIssue>,
    mode: ValidationMode,
    submit_count: u32,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(ValidationMode::default())
    }
}

impl FormController {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subscription_type: SubscriptionType::Free,
            premium_features: None,
            hobbies: HobbyList::new(),
            newsletter: false,
            errors: HashMap::new(),
            mode,
            submit_count: 0,
        }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }

    /// Number of submit attempts since the last reset
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Discard the buffer and start over with default values
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    // Bindings

    /// Bind an input to `path`
    ///
    /// Hobby paths resolve to the row's stable id at the time of the call.
    pub fn register_field(&self, path: FieldPath) -> Result<FieldKey, FormError> {
        match path {
            FieldPath::Name => Ok(FieldKey::Name),
            FieldPath::Email => Ok(FieldKey::Email),
            FieldPath::SubscriptionType => Ok(FieldKey::SubscriptionType),
            FieldPath::Newsletter => Ok(FieldKey::Newsletter),
            FieldPath::PremiumFeatures if self.is_premium() => Ok(FieldKey::PremiumFeatures),
            FieldPath::PremiumFeatures => Err(FormError::NotRendered(path)),
            FieldPath::Hobby(index) => {
                self.hobbies
                    .id_at(index)
                    .map(FieldKey::Hobby)
                    .ok_or(FormError::HobbyIndexOutOfRange {
                        index,
                        len: self.hobbies.len(),
                    })
            }
        }
    }

    /// Current path of a bound field, or `None` if it is no longer rendered
    pub fn path_of(&self, key: FieldKey) -> Option<FieldPath> {
        match key {
            FieldKey::Hobby(id) => self.hobbies.index_of(id).map(FieldPath::Hobby),
            FieldKey::PremiumFeatures if !self.is_premium() => None,
            other => other.scalar_path(),
        }
    }

    pub fn value(&self, key: FieldKey) -> Option<FieldValue> {
        match key {
            FieldKey::Name => Some(FieldValue::Text(self.name.clone())),
            FieldKey::Email => Some(FieldValue::Text(self.email.clone())),
            FieldKey::SubscriptionType => Some(FieldValue::Choice(self.subscription_type)),
            FieldKey::PremiumFeatures => self.premium_features.clone().map(FieldValue::Text),
            FieldKey::Hobby(id) => self
                .hobbies
                .get(id)
                .map(|e| FieldValue::Text(e.hobby.clone())),
            FieldKey::Newsletter => Some(FieldValue::Flag(self.newsletter)),
        }
    }

    /// Write through a binding
    pub fn set_value(&mut self, key: FieldKey, value: FieldValue) -> Result<(), FormError> {
        match (key, value) {
            (FieldKey::SubscriptionType, FieldValue::Choice(choice)) => {
                self.select_subscription(choice);
            }
            (FieldKey::Newsletter, FieldValue::Flag(flag)) => self.newsletter = flag,
            (key, FieldValue::Text(text)) if key.is_text() => *self.text_mut(key)? = text,
            (key, _) => return Err(FormError::TypeMismatch(key)),
        }
        self.field_changed(key);
        Ok(())
    }

    /// Append a typed character to a text field
    pub fn push_char(&mut self, key: FieldKey, c: char) -> Result<(), FormError> {
        self.text_mut(key)?.push(c);
        self.field_changed(key);
        Ok(())
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, key: FieldKey) -> Result<(), FormError> {
        self.text_mut(key)?.pop();
        self.field_changed(key);
        Ok(())
    }

    fn text_mut(&mut self, key: FieldKey) -> Result<&mut String, FormError> {
        match key {
            FieldKey::Name => Ok(&mut self.name),
            FieldKey::Email => Ok(&mut self.email),
            FieldKey::PremiumFeatures => self
                .premium_features
                .as_mut()
                .ok_or(FormError::NotRendered(FieldPath::PremiumFeatures)),
            FieldKey::Hobby(id) => self
                .hobbies
                .get_mut(id)
                .map(|e| &mut e.hobby)
                .ok_or(FormError::StaleHobby(id)),
            FieldKey::SubscriptionType | FieldKey::Newsletter => Err(FormError::TypeMismatch(key)),
        }
    }

    fn select_subscription(&mut self, choice: SubscriptionType) {
        self.subscription_type = choice;
        match choice {
            SubscriptionType::Premium => {
                self.premium_features.get_or_insert_with(String::new);
            }
            SubscriptionType::Free => {
                // Unregister: stale text must not be submitted or flagged
                self.premium_features = None;
                self.errors.remove(&FieldKey::PremiumFeatures);
            }
        }
    }

    // Watching

    /// Current value at `path`
    pub fn watch(&self, path: FieldPath) -> Option<FieldValue> {
        self.register_field(path)
            .ok()
            .and_then(|key| self.value(key))
    }

    pub fn watch_subscription(&self) -> SubscriptionType {
        self.subscription_type
    }

    /// Whether the premium features input is rendered
    pub fn is_premium(&self) -> bool {
        self.subscription_type == SubscriptionType::Premium
    }

    /// Snapshot of the whole buffer in the validator's input shape
    pub fn values(&self) -> FormInput {
        FormInput {
            name: self.name.clone(),
            email: self.email.clone(),
            subscription_type: self.subscription_type.as_str().to_string(),
            premium_features: self.premium_features.clone(),
            hobbies: Some(
                self.hobbies
                    .iter()
                    .map(|e| HobbyInput {
                        hobby: e.hobby.clone(),
                    })
                    .collect(),
            ),
            newsletter: Some(self.newsletter),
        }
    }

    /// Pretty JSON of the live buffer, regardless of validity
    pub fn preview_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.values())
    }

    // Hobby list

    pub fn hobbies(&self) -> &HobbyList {
        &self.hobbies
    }

    /// Add an empty hobby row at the end
    pub fn append_hobby(&mut self) -> HobbyId {
        let id = self.hobbies.append();
        tracing::debug!(%id, len = self.hobbies.len(), "Hobby appended");
        id
    }

    /// Remove the hobby row at `index`
    pub fn remove_hobby(&mut self, index: usize) -> Result<HobbyEntry, FormError> {
        let len = self.hobbies.len();
        let entry = self
            .hobbies
            .remove(index)
            .ok_or(FormError::HobbyIndexOutOfRange { index, len })?;
        self.errors.remove(&FieldKey::Hobby(entry.id));
        tracing::debug!(id = %entry.id, index, "Hobby removed");
        Ok(entry)
    }

    // Errors

    /// The error shown for a bound field; never set for unrendered fields
    pub fn error(&self, key: FieldKey) -> Option<FieldIssue> {
        self.path_of(key)?;
        self.errors.get(&key).copied()
    }

    /// All current errors, addressed by their present paths
    pub fn errors(&self) -> ValidationErrors {
        let mut errors: Vec<_> = self
            .errors
            .iter()
            .filter_map(|(key, issue)| self.path_of(*key).map(|path| (path, *issue)))
            .collect();
        errors.sort_by_key(|(path, _)| *path);
        errors
            .into_iter()
            .map(|(path, issue)| schema::FieldError::new(path, issue))
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.keys().any(|key| self.path_of(*key).is_some())
    }

    /// Re-run the schema and replace all error state with its result
    pub fn validate_all(&mut self) -> Result<FormData, ValidationErrors> {
        let result = schema::validate(&self.values());
        self.errors.clear();
        if let Err(errors) = &result {
            for error in errors.iter() {
                if let Ok(key) = self.register_field(error.path) {
                    self.errors.insert(key, error.issue);
                }
            }
        }
        result
    }

    /// Re-run the schema and update only `key`'s error
    pub fn validate_field(&mut self, key: FieldKey) {
        let Some(path) = self.path_of(key) else {
            self.errors.remove(&key);
            return;
        };
        match schema::validate(&self.values())
            .err()
            .and_then(|errors| errors.get(&path))
        {
            Some(issue) => {
                self.errors.insert(key, issue);
            }
            None => {
                self.errors.remove(&key);
            }
        }
    }

    /// Change trigger: validates per mode, and always once a submit was tried
    pub fn field_changed(&mut self, key: FieldKey) {
        if self.mode.validates_on_change() || self.submit_count > 0 {
            self.validate_field(key);
        }
    }

    /// Blur trigger
    pub fn field_blurred(&mut self, key: FieldKey) {
        if self.mode.validates_on_blur() {
            self.validate_field(key);
        }
    }

    /// Validate the buffer and hand valid data to `sink`
    ///
    /// The sink is called at most once, and only with validated data. On
    /// success the buffer is reset; if the sink fails the buffer is kept and
    /// the error is returned.
    pub async fn submit(&mut self, sink: &dyn SubmitSink) -> Result<SubmitOutcome> {
        self.submit_count += 1;
        match self.validate_all() {
            Ok(data) => {
                sink.submit(&data).await?;
                tracing::info!(sink = sink.name(), "Submission accepted");
                self.reset();
                Ok(SubmitOutcome::Submitted(data))
            }
            Err(errors) => {
                tracing::info!(errors = errors.len(), "Submission rejected");
                Ok(SubmitOutcome::Rejected(errors))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Subscription;
    use crate::sink::MockSubmitSink;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn type_text(form: &mut FormController, key: FieldKey, text: &str) {
        for c in text.chars() {
            form.push_char(key, c).unwrap();
        }
    }

    fn fill_valid(form: &mut FormController) {
        type_text(form, FieldKey::Name, "Ada");
        type_text(form, FieldKey::Email, "ada@example.com");
    }

    fn rejecting_sink() -> MockSubmitSink {
        let mut sink = MockSubmitSink::new();
        sink.expect_submit().times(0);
        sink.expect_name().return_const("mock");
        sink
    }

    #[test]
    fn test_starts_with_default_values() {
        let form = FormController::default();
        let json: serde_json::Value =
            serde_json::from_str(&form.preview_json().unwrap()).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "",
                "email": "",
                "subscriptionType": "free",
                "hobbies": [],
                "newsletter": false
            })
        );
        assert_eq!(form.mode(), ValidationMode::OnSubmit);
    }

    #[test]
    fn test_register_and_write_through_binding() {
        let mut form = FormController::default();
        let key = form.register_field(FieldPath::Name).unwrap();
        form.set_value(key, FieldValue::Text("Ada".to_string()))
            .unwrap();
        assert_eq!(form.value(key), Some(FieldValue::Text("Ada".to_string())));
        assert_eq!(
            form.watch(FieldPath::Name),
            Some(FieldValue::Text("Ada".to_string()))
        );
    }

    #[test]
    fn test_set_value_rejects_wrong_kind() {
        let mut form = FormController::default();
        assert_eq!(
            form.set_value(FieldKey::Newsletter, FieldValue::Text("yes".to_string())),
            Err(FormError::TypeMismatch(FieldKey::Newsletter))
        );
        assert_eq!(
            form.push_char(FieldKey::SubscriptionType, 'x'),
            Err(FormError::TypeMismatch(FieldKey::SubscriptionType))
        );
    }

    #[test]
    fn test_premium_features_rendered_only_for_premium() {
        let mut form = FormController::default();
        assert_eq!(
            form.register_field(FieldPath::PremiumFeatures),
            Err(FormError::NotRendered(FieldPath::PremiumFeatures))
        );
        assert_eq!(form.watch(FieldPath::PremiumFeatures), None);

        form.set_value(
            FieldKey::SubscriptionType,
            FieldValue::Choice(SubscriptionType::Premium),
        )
        .unwrap();
        assert!(form.is_premium());
        let key = form.register_field(FieldPath::PremiumFeatures).unwrap();
        assert_eq!(form.value(key), Some(FieldValue::Text(String::new())));
    }

    #[test]
    fn test_switching_to_free_clears_premium_features() {
        let mut form = FormController::default();
        form.set_value(
            FieldKey::SubscriptionType,
            FieldValue::Choice(SubscriptionType::Premium),
        )
        .unwrap();
        type_text(&mut form, FieldKey::PremiumFeatures, "analytics");
        form.set_value(
            FieldKey::SubscriptionType,
            FieldValue::Choice(SubscriptionType::Free),
        )
        .unwrap();

        assert!(form.values().premium_features.is_none());
        assert!(form.push_char(FieldKey::PremiumFeatures, 'x').is_err());

        form.set_value(
            FieldKey::SubscriptionType,
            FieldValue::Choice(SubscriptionType::Premium),
        )
        .unwrap();
        assert_eq!(form.values().premium_features.as_deref(), Some(""));
    }

    #[test]
    fn test_append_then_remove_restores_list() {
        let mut form = FormController::default();
        let first = form.append_hobby();
        type_text(&mut form, FieldKey::Hobby(first), "chess");
        let second = form.append_hobby();
        type_text(&mut form, FieldKey::Hobby(second), "rowing");

        let extra = form.append_hobby();
        assert_eq!(form.hobbies().len(), 3);
        let removed = form.remove_hobby(2).unwrap();
        assert_eq!(removed.id, extra);

        assert_eq!(form.hobbies().len(), 2);
        assert_eq!(form.watch(FieldPath::Hobby(0)).unwrap().as_text(), "chess");
        assert_eq!(form.watch(FieldPath::Hobby(1)).unwrap().as_text(), "rowing");
    }

    #[test]
    fn test_remove_middle_row_reindexes_others() {
        let mut form = FormController::default();
        let ids: Vec<_> = (0..3).map(|_| form.append_hobby()).collect();
        for (id, text) in ids.iter().zip(["a", "b", "c"]) {
            type_text(&mut form, FieldKey::Hobby(*id), text);
        }

        form.remove_hobby(1).unwrap();
        assert_eq!(form.path_of(FieldKey::Hobby(ids[2])), Some(FieldPath::Hobby(1)));
        assert_eq!(form.path_of(FieldKey::Hobby(ids[1])), None);
        assert_eq!(
            form.value(FieldKey::Hobby(ids[2])),
            Some(FieldValue::Text("c".to_string()))
        );
    }

    #[test]
    fn test_remove_out_of_range_changes_nothing() {
        let mut form = FormController::default();
        form.append_hobby();
        assert_eq!(
            form.remove_hobby(1),
            Err(FormError::HobbyIndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(form.hobbies().len(), 1);
        assert_eq!(
            form.register_field(FieldPath::Hobby(4)),
            Err(FormError::HobbyIndexOutOfRange { index: 4, len: 1 })
        );
    }

    #[test]
    fn test_hobby_errors_follow_their_row() {
        let mut form = FormController::default();
        fill_valid(&mut form);
        let first = form.append_hobby();
        type_text(&mut form, FieldKey::Hobby(first), "chess");
        let second = form.append_hobby();

        assert!(form.validate_all().is_err());
        assert_eq!(form.errors().paths(), vec![FieldPath::Hobby(1)]);

        form.remove_hobby(0).unwrap();
        assert_eq!(form.errors().paths(), vec![FieldPath::Hobby(0)]);
        assert_eq!(
            form.error(FieldKey::Hobby(second)),
            Some(FieldIssue::HobbyRequired)
        );
    }

    #[test]
    fn test_on_submit_mode_stays_quiet_until_first_submit() {
        let mut form = FormController::default();
        type_text(&mut form, FieldKey::Email, "bad");
        form.field_blurred(FieldKey::Email);
        assert!(!form.has_errors());
    }

    #[test]
    fn test_on_change_mode_validates_while_typing() {
        let mut form = FormController::new(ValidationMode::OnChange);
        type_text(&mut form, FieldKey::Email, "ada");
        assert_eq!(form.error(FieldKey::Email), Some(FieldIssue::InvalidEmail));
        type_text(&mut form, FieldKey::Email, "@example.com");
        assert_eq!(form.error(FieldKey::Email), None);
        // Only the edited field is validated
        assert_eq!(form.error(FieldKey::Name), None);
    }

    #[test]
    fn test_on_blur_mode_validates_left_field() {
        let mut form = FormController::new(ValidationMode::OnBlur);
        type_text(&mut form, FieldKey::Email, "bad");
        assert!(!form.has_errors());
        form.field_blurred(FieldKey::Email);
        assert_eq!(form.error(FieldKey::Email), Some(FieldIssue::InvalidEmail));
    }

    #[test]
    fn test_errors_clear_on_edit_after_failed_submit() {
        let mut form = FormController::default();
        let sink = rejecting_sink();
        tokio_test::block_on(form.submit(&sink)).unwrap();
        assert_eq!(
            form.errors().paths(),
            vec![FieldPath::Name, FieldPath::Email]
        );

        type_text(&mut form, FieldKey::Name, "Ada");
        assert_eq!(form.errors().paths(), vec![FieldPath::Email]);
    }

    #[test]
    fn test_premium_error_hidden_after_switching_to_free() {
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.set_value(
            FieldKey::SubscriptionType,
            FieldValue::Choice(SubscriptionType::Premium),
        )
        .unwrap();
        assert!(form.validate_all().is_err());
        assert_eq!(
            form.error(FieldKey::PremiumFeatures),
            Some(FieldIssue::PremiumFeaturesRequired)
        );

        form.set_value(
            FieldKey::SubscriptionType,
            FieldValue::Choice(SubscriptionType::Free),
        )
        .unwrap();
        assert_eq!(form.error(FieldKey::PremiumFeatures), None);
        assert!(!form.has_errors());
        assert!(form.validate_all().is_ok());
    }

    #[tokio::test]
    async fn test_submit_valid_free_form_calls_sink_once() {
        let mut form = FormController::default();
        fill_valid(&mut form);

        let expected = json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subscriptionType": "free",
            "hobbies": [],
            "newsletter": false
        });
        let mut sink = MockSubmitSink::new();
        sink.expect_name().return_const("mock");
        sink.expect_submit()
            .times(1)
            .withf(move |data| serde_json::to_value(data).unwrap() == expected)
            .returning(|_| Ok(()));

        let outcome = form.submit(&sink).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
        // The buffer is discarded after a successful submit
        assert_eq!(form.values(), FormInput::default());
        assert_eq!(form.submit_count(), 0);
    }

    #[tokio::test]
    async fn test_submit_invalid_premium_reports_three_errors() {
        let mut form = FormController::default();
        type_text(&mut form, FieldKey::Email, "bad");
        form.set_value(
            FieldKey::SubscriptionType,
            FieldValue::Choice(SubscriptionType::Premium),
        )
        .unwrap();

        let sink = rejecting_sink();
        let outcome = form.submit(&sink).await.unwrap();
        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(
            errors.paths(),
            vec![FieldPath::Name, FieldPath::Email, FieldPath::PremiumFeatures]
        );
        assert_eq!(form.errors(), errors);
        assert_eq!(form.values().email, "bad");
    }

    #[tokio::test]
    async fn test_submit_with_empty_hobby_fails_at_index_zero() {
        let mut form = FormController::default();
        fill_valid(&mut form);
        let id = form.append_hobby();
        form.set_value(FieldKey::Hobby(id), FieldValue::Text(String::new()))
            .unwrap();

        let outcome = form.submit(&rejecting_sink()).await.unwrap();
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.paths(), vec![FieldPath::Hobby(0)]);
                assert_eq!(
                    errors.get(&FieldPath::Hobby(0)),
                    Some(FieldIssue::HobbyRequired)
                );
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_premium_passes_features_to_sink() {
        let mut form = FormController::default();
        fill_valid(&mut form);
        form.set_value(
            FieldKey::SubscriptionType,
            FieldValue::Choice(SubscriptionType::Premium),
        )
        .unwrap();
        type_text(&mut form, FieldKey::PremiumFeatures, "Priority support");

        let mut sink = MockSubmitSink::new();
        sink.expect_name().return_const("mock");
        sink.expect_submit()
            .times(1)
            .withf(|data| {
                data.subscription
                    == Subscription::Premium {
                        premium_features: "Priority support".to_string(),
                    }
            })
            .returning(|_| Ok(()));

        let outcome = form.submit(&sink).await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
    }

    #[tokio::test]
    async fn test_sink_failure_keeps_buffer() {
        let mut form = FormController::default();
        fill_valid(&mut form);

        let mut sink = MockSubmitSink::new();
        sink.expect_name().return_const("mock");
        sink.expect_submit()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("disk full")));

        let err = form.submit(&sink).await.unwrap_err();
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(form.values().name, "Ada");
        assert_eq!(form.submit_count(), 1);
    }
}
