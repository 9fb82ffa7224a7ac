//! Keyboard focus over the rendered form controls

use super::forms::{FieldKey, FormController};

/// Something on the form that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldKey),
    AddHobby,
    Submit,
}

impl Default for FocusTarget {
    fn default() -> Self {
        FocusTarget::Field(FieldKey::Name)
    }
}

impl FocusTarget {
    /// The bound field under focus, if the target is an input
    pub fn field(&self) -> Option<FieldKey> {
        match self {
            FocusTarget::Field(key) => Some(*key),
            FocusTarget::AddHobby | FocusTarget::Submit => None,
        }
    }
}

/// Focus targets in render order for the current form state
pub fn focus_order(form: &FormController) -> Vec<FocusTarget> {
    let mut order = vec![
        FocusTarget::Field(FieldKey::Name),
        FocusTarget::Field(FieldKey::Email),
        FocusTarget::Field(FieldKey::SubscriptionType),
    ];
    if form.is_premium() {
        order.push(FocusTarget::Field(FieldKey::PremiumFeatures));
    }
    order.extend(
        form.hobbies()
            .ids()
            .into_iter()
            .map(|id| FocusTarget::Field(FieldKey::Hobby(id))),
    );
    order.push(FocusTarget::AddHobby);
    order.push(FocusTarget::Field(FieldKey::Newsletter));
    order.push(FocusTarget::Submit);
    order
}
