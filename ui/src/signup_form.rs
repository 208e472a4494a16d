//! # Signup form state machine
//!
//! Owns the in-progress household record: the head-of-household draft plus an
//! ordered list of up to [`api::MAX_MEMBERS`] additional members, each with a
//! stable identity that survives removals. All mutation is synchronous; the
//! one network call happens between [`SignupForm::start_submit`] and
//! [`SignupForm::resolve_submit`], which is also what keeps a second submit
//! from overlapping the first.
//!
//! ## Phases
//!
//! ```text
//! Editing -> Submitting -> Submitted        (terminal)
//!    ^            |
//!    +------------+  rejection merges the backend's field error map
//! ```
//!
//! `Submitted` is one-way: a fresh `SignupForm` is needed to register another
//! household.

use std::collections::HashMap;

use api::{ApiError, Gender, Household, Person, PrimaryLanguage, Race, MAX_MEMBERS};

/// Error-map key for failures not tied to a single field.
pub const GENERAL_ERROR_KEY: &str = "general";

/// Stable identity of an additional member, assigned by the form and never
/// sent to the backend.
pub type MemberId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

/// Addressing for [`SignupForm::update_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonRef {
    Head,
    Member(MemberId),
}

/// A person field as bound to one form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    FirstName,
    LastName,
    DobMonth,
    DobDay,
    DobYear,
    Gender,
    Race,
    Language,
    Email,
    Phone,
    Street,
    City,
    Zip,
}

/// Raw field values as the user typed or selected them.
///
/// Everything is a `String` because every input is free text or a `<select>`
/// value; parsing into [`Person`] happens once, at submit time. The three
/// date-of-birth parts stay discrete to match the three-select UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub first_name: String,
    pub last_name: String,
    pub dob_month: String,
    pub dob_day: String,
    pub dob_year: String,
    pub gender: String,
    pub race: String,
    pub language: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub zip: String,
}

impl PersonDraft {
    pub fn set(&mut self, field: PersonField, value: String) {
        match field {
            PersonField::FirstName => self.first_name = value,
            PersonField::LastName => self.last_name = value,
            PersonField::DobMonth => self.dob_month = value,
            PersonField::DobDay => self.dob_day = value,
            PersonField::DobYear => self.dob_year = value,
            PersonField::Gender => self.gender = value,
            PersonField::Race => self.race = value,
            PersonField::Language => self.language = value,
            PersonField::Email => self.email = value,
            PersonField::Phone => self.phone = value,
            PersonField::Street => self.street = value,
            PersonField::City => self.city = value,
            PersonField::Zip => self.zip = value,
        }
    }

    pub fn get(&self, field: PersonField) -> &str {
        match field {
            PersonField::FirstName => &self.first_name,
            PersonField::LastName => &self.last_name,
            PersonField::DobMonth => &self.dob_month,
            PersonField::DobDay => &self.dob_day,
            PersonField::DobYear => &self.dob_year,
            PersonField::Gender => &self.gender,
            PersonField::Race => &self.race,
            PersonField::Language => &self.language,
            PersonField::Email => &self.email,
            PersonField::Phone => &self.phone,
            PersonField::Street => &self.street,
            PersonField::City => &self.city,
            PersonField::Zip => &self.zip,
        }
    }

    /// A member is only worth submitting once both names are filled in.
    fn has_name(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }

    fn dob(&self) -> String {
        format!(
            "{}-{}-{}",
            self.dob_year.trim(),
            self.dob_month.trim(),
            self.dob_day.trim()
        )
    }

    /// Normalize into the wire model. Contact, address, and language fields
    /// only travel on the head of household.
    fn to_person(&self, is_head: bool) -> Person {
        let opt = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        Person {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            dob: self.dob(),
            gender: Gender::parse(self.gender.trim()),
            race: Race::parse(self.race.trim()),
            language: is_head
                .then(|| PrimaryLanguage::parse(self.language.trim()))
                .flatten(),
            email: if is_head { opt(&self.email) } else { None },
            phone: if is_head { opt(&self.phone) } else { None },
            street: if is_head { opt(&self.street) } else { None },
            city: if is_head { opt(&self.city) } else { None },
            postal_code: if is_head { opt(&self.zip) } else { None },
        }
    }
}

/// One additional-member slot: a stable id plus its draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEntry {
    pub id: MemberId,
    pub person: PersonDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignupForm {
    phase: Phase,
    head: PersonDraft,
    members: Vec<MemberEntry>,
    errors: HashMap<String, String>,
    next_member_id: MemberId,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            phase: Phase::Editing,
            head: PersonDraft::default(),
            members: Vec::new(),
            errors: HashMap::new(),
            next_member_id: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn head(&self) -> &PersonDraft {
        &self.head
    }

    pub fn members(&self) -> &[MemberEntry] {
        &self.members
    }

    pub fn person(&self, target: PersonRef) -> Option<&PersonDraft> {
        match target {
            PersonRef::Head => Some(&self.head),
            PersonRef::Member(id) => self
                .members
                .iter()
                .find(|entry| entry.id == id)
                .map(|entry| &entry.person),
        }
    }

    pub fn error_for(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    pub fn general_error(&self) -> Option<&str> {
        self.error_for(GENERAL_ERROR_KEY)
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Append a fresh member slot, up to the cap. Returns the new member's
    /// id, or `None` when the form is already full. Existing members are
    /// never reordered or touched.
    pub fn add_member(&mut self) -> Option<MemberId> {
        if self.members.len() >= MAX_MEMBERS {
            return None;
        }
        let id = self.next_member_id;
        self.next_member_id += 1;
        self.members.push(MemberEntry {
            id,
            person: PersonDraft::default(),
        });
        Some(id)
    }

    /// Remove exactly the member with `id`. Removal is by identity, not by
    /// position, so the remaining members keep their own ids and values.
    pub fn remove_member(&mut self, id: MemberId) {
        self.members.retain(|entry| entry.id != id);
    }

    /// Position the member with `id` occupies in the submitted payload, or
    /// `None` when it would be filtered out for lacking both names. Backend
    /// field errors are keyed by payload position, which drifts from the
    /// display position as soon as a half-named draft precedes a complete
    /// one, so error rendering must go through this mapping.
    pub fn payload_index(&self, id: MemberId) -> Option<usize> {
        let mut position = 0;
        for entry in &self.members {
            if entry.id == id {
                return entry.person.has_name().then_some(position);
            }
            if entry.person.has_name() {
                position += 1;
            }
        }
        None
    }

    /// Set one field on the head or on a specific member. No validation
    /// happens here; that is deferred to submit time and the backend.
    pub fn update_field(&mut self, target: PersonRef, field: PersonField, value: String) {
        match target {
            PersonRef::Head => self.head.set(field, value),
            PersonRef::Member(id) => {
                if let Some(entry) = self.members.iter_mut().find(|entry| entry.id == id) {
                    entry.person.set(field, value);
                }
            }
        }
    }

    /// Begin a submit attempt.
    ///
    /// Returns the normalized household to send, or `None` when no attempt
    /// may start: a submit already in flight is ignored rather than queued,
    /// and a submitted form is terminal. Clears the error map and moves to
    /// `Submitting`; members without both names are dropped from the payload
    /// (their drafts stay in the form untouched).
    pub fn start_submit(&mut self) -> Option<Household> {
        if self.phase != Phase::Editing {
            return None;
        }
        self.errors.clear();
        self.phase = Phase::Submitting;

        let members = self
            .members
            .iter()
            .filter(|entry| entry.person.has_name())
            .map(|entry| entry.person.to_person(false))
            .collect();
        Some(Household {
            head: self.head.to_person(true),
            members,
        })
    }

    /// Fold the submission outcome back into the form.
    ///
    /// Success is terminal. Rejection returns to `Editing` with the backend's
    /// error map replacing the local one wholesale; every entered value is
    /// preserved so the user can correct and resubmit. Failures with no field
    /// detail leave a single general entry, stored as an i18n key and
    /// rendered through `t` (whose key fallback also passes backend-authored
    /// messages through untouched).
    pub fn resolve_submit(&mut self, result: Result<(), ApiError>) {
        if self.phase != Phase::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.errors.clear();
                self.phase = Phase::Submitted;
            }
            Err(ApiError::SubmissionRejected { errors }) if !errors.is_empty() => {
                self.errors = errors;
                self.phase = Phase::Editing;
            }
            Err(err) => {
                tracing::warn!("household submission failed: {err}");
                self.errors = HashMap::from([(
                    GENERAL_ERROR_KEY.to_string(),
                    "misc.error".to_string(),
                )]);
                self.phase = Phase::Editing;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_member(form: &mut SignupForm, first: &str, last: &str) -> MemberId {
        let id = form.add_member().unwrap();
        form.update_field(
            PersonRef::Member(id),
            PersonField::FirstName,
            first.to_string(),
        );
        form.update_field(
            PersonRef::Member(id),
            PersonField::LastName,
            last.to_string(),
        );
        id
    }

    #[test]
    fn member_count_respects_the_cap() {
        let mut form = SignupForm::new();
        for _ in 0..MAX_MEMBERS {
            assert!(form.add_member().is_some());
        }
        assert_eq!(form.members().len(), MAX_MEMBERS);
        assert!(form.add_member().is_none());
        assert_eq!(form.members().len(), MAX_MEMBERS);
    }

    #[test]
    fn member_ids_are_unique_across_add_and_remove() {
        let mut form = SignupForm::new();
        let a = form.add_member().unwrap();
        let b = form.add_member().unwrap();
        form.remove_member(a);
        let c = form.add_member().unwrap();
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn removing_a_member_leaves_the_others_untouched() {
        let mut form = SignupForm::new();
        let a = filled_member(&mut form, "Ana", "Reyes");
        let b = filled_member(&mut form, "Ben", "Reyes");
        let c = filled_member(&mut form, "Cam", "Reyes");

        form.remove_member(b);

        let ids: Vec<MemberId> = form.members().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(form.person(PersonRef::Member(a)).unwrap().first_name, "Ana");
        assert_eq!(form.person(PersonRef::Member(c)).unwrap().first_name, "Cam");
        assert!(form.person(PersonRef::Member(b)).is_none());
    }

    #[test]
    fn removing_an_unknown_id_is_a_no_op() {
        let mut form = SignupForm::new();
        filled_member(&mut form, "Ana", "Reyes");
        form.remove_member(999);
        assert_eq!(form.members().len(), 1);
    }

    #[test]
    fn head_only_submit_has_empty_members() {
        let mut form = SignupForm::new();
        form.update_field(PersonRef::Head, PersonField::FirstName, "Maria".into());
        form.update_field(PersonRef::Head, PersonField::LastName, "Lopez".into());

        let household = form.start_submit().unwrap();
        assert!(household.members.is_empty());
        assert_eq!(household.head.first_name, "Maria");
        assert_eq!(form.phase(), Phase::Submitting);
    }

    #[test]
    fn half_named_members_are_excluded_from_the_payload() {
        let mut form = SignupForm::new();
        let half = form.add_member().unwrap();
        form.update_field(
            PersonRef::Member(half),
            PersonField::FirstName,
            "Leo".into(),
        );
        filled_member(&mut form, "Mia", "Lopez");

        let household = form.start_submit().unwrap();
        assert_eq!(household.members.len(), 1);
        assert_eq!(household.members[0].first_name, "Mia");
        // The half-filled draft itself is untouched.
        form.resolve_submit(Err(ApiError::AuthenticationFailed));
        assert_eq!(
            form.person(PersonRef::Member(half)).unwrap().first_name,
            "Leo"
        );
    }

    #[test]
    fn submit_normalizes_whitespace_dob_and_selects() {
        let mut form = SignupForm::new();
        form.update_field(PersonRef::Head, PersonField::FirstName, "  Ana ".into());
        form.update_field(PersonRef::Head, PersonField::LastName, "Reyes".into());
        form.update_field(PersonRef::Head, PersonField::DobYear, "1990".into());
        form.update_field(PersonRef::Head, PersonField::DobMonth, "05".into());
        form.update_field(PersonRef::Head, PersonField::DobDay, "03".into());
        form.update_field(PersonRef::Head, PersonField::Gender, "female".into());
        form.update_field(PersonRef::Head, PersonField::Language, "spanish".into());
        form.update_field(PersonRef::Head, PersonField::Email, "   ".into());

        let household = form.start_submit().unwrap();
        assert_eq!(household.head.first_name, "Ana");
        assert_eq!(household.head.dob, "1990-05-03");
        assert_eq!(household.head.gender, Some(Gender::Female));
        assert_eq!(household.head.language, Some(PrimaryLanguage::Spanish));
        assert_eq!(household.head.email, None);
    }

    #[test]
    fn members_never_carry_head_only_fields() {
        let mut form = SignupForm::new();
        let id = filled_member(&mut form, "Leo", "Lopez");
        form.update_field(PersonRef::Member(id), PersonField::Email, "x@y.com".into());
        form.update_field(PersonRef::Member(id), PersonField::Language, "english".into());

        let household = form.start_submit().unwrap();
        assert_eq!(household.members[0].email, None);
        assert_eq!(household.members[0].language, None);
    }

    #[test]
    fn payload_index_skips_filtered_members() {
        let mut form = SignupForm::new();
        let half = form.add_member().unwrap();
        form.update_field(
            PersonRef::Member(half),
            PersonField::FirstName,
            "Leo".into(),
        );
        let full = filled_member(&mut form, "Mia", "Lopez");
        let trailing = filled_member(&mut form, "Sam", "Lopez");

        // The half-named draft is dropped from the payload, so the complete
        // members slide up: a backend person0 error belongs to "Mia".
        assert_eq!(form.payload_index(half), None);
        assert_eq!(form.payload_index(full), Some(0));
        assert_eq!(form.payload_index(trailing), Some(1));
        assert_eq!(form.payload_index(999), None);

        let household = form.start_submit().unwrap();
        assert_eq!(household.members[0].first_name, "Mia");
        assert_eq!(household.members[1].first_name, "Sam");
    }

    #[test]
    fn draft_fields_read_back_through_get() {
        let mut draft = PersonDraft::default();
        draft.set(PersonField::City, "Salem".into());
        assert_eq!(draft.get(PersonField::City), "Salem");
        assert_eq!(draft.get(PersonField::Phone), "");
    }

    #[test]
    fn overlapping_submit_is_ignored() {
        let mut form = SignupForm::new();
        assert!(form.start_submit().is_some());
        assert!(form.start_submit().is_none());
        assert_eq!(form.phase(), Phase::Submitting);
    }

    #[test]
    fn rejection_replaces_the_error_map_and_preserves_values() {
        let mut form = SignupForm::new();
        form.update_field(PersonRef::Head, PersonField::LastName, "Lopez".into());
        form.start_submit().unwrap();

        form.resolve_submit(Err(ApiError::SubmissionRejected {
            errors: HashMap::from([("firstName".to_string(), "required".to_string())]),
        }));

        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error_for("firstName"), Some("required"));
        assert_eq!(form.head().last_name, "Lopez");
    }

    #[test]
    fn rejection_without_detail_leaves_one_general_entry() {
        let mut form = SignupForm::new();
        form.start_submit().unwrap();
        form.resolve_submit(Err(ApiError::SubmissionRejected {
            errors: HashMap::new(),
        }));

        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.general_error(), Some("misc.error"));
    }

    #[test]
    fn errors_clear_on_the_next_attempt() {
        let mut form = SignupForm::new();
        form.start_submit().unwrap();
        form.resolve_submit(Err(ApiError::SubmissionRejected {
            errors: HashMap::from([("firstName".to_string(), "required".to_string())]),
        }));
        assert!(!form.errors().is_empty());

        form.start_submit().unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn success_is_terminal() {
        let mut form = SignupForm::new();
        form.start_submit().unwrap();
        form.resolve_submit(Ok(()));
        assert_eq!(form.phase(), Phase::Submitted);
        assert!(form.errors().is_empty());
        assert!(form.start_submit().is_none());
    }

    #[test]
    fn resolve_outside_submitting_is_ignored() {
        let mut form = SignupForm::new();
        form.resolve_submit(Ok(()));
        assert_eq!(form.phase(), Phase::Editing);
    }
}
