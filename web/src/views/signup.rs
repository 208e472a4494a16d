//! Household signup form view.
//!
//! Renders one [`PersonForm`] for the head of household and one per
//! additional member, keyed by the member's stable id so removing a row never
//! rebinds another member's inputs. All form state lives in a single
//! [`SignupForm`] signal; this module only renders it and forwards events.

use api::{ApiClient, MAX_MEMBERS};
use dioxus::prelude::*;
use ui::signup_form::MemberId;
use ui::{t, use_lang, Lang, PersonField, PersonRef, Phase, SignupForm};

// SystemTime::now() panics on wasm32-unknown-unknown, so the browser asks
// the JS Date API instead.
#[cfg(target_arch = "wasm32")]
fn current_year() -> u64 {
    js_sys::Date::new_0().get_full_year() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    // Average Gregorian year; precise enough for a birth-year dropdown.
    const YEAR_SECS: u64 = 31_556_952;

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    1970 + secs / YEAR_SECS
}

fn month_options() -> Vec<String> {
    (1..=12).map(|m| format!("{m:02}")).collect()
}

fn day_options() -> Vec<String> {
    (1..=31).map(|d| format!("{d:02}")).collect()
}

fn year_options() -> Vec<String> {
    let current = current_year();
    (0..100).map(|i| (current - i).to_string()).collect()
}

/// Household signup page.
#[component]
pub fn Signup() -> Element {
    let client = use_context::<ApiClient>();
    let mut lang = use_lang();
    let mut form = use_signal(SignupForm::new);

    if form.read().phase() == Phase::Submitted {
        return rsx! {
            div { class: "signup-page",
                h1 { class: "page-title", {t(lang(), "misc.thankyou")} }
                p { class: "page-intro", {t(lang(), "signup.success")} }
            }
        };
    }

    let submitting = form.read().phase() == Phase::Submitting;
    let member_rows: Vec<(Option<usize>, MemberId)> = {
        let form = form.read();
        form.members()
            .iter()
            .map(|entry| (form.payload_index(entry.id), entry.id))
            .collect()
    };
    let at_cap = member_rows.len() >= MAX_MEMBERS;
    let general = form.read().general_error().map(str::to_string);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let Some(household) = form.write().start_submit() else {
                return;
            };
            let result = client.submit_household(&household).await.map(|_| ());
            form.write().resolve_submit(result);
        });
    };

    rsx! {
        div { class: "signup-page",
            div { class: "lang-toggle",
                button { r#type: "button", onclick: move |_| lang.set(Lang::En), "English" }
                span { "|" }
                button { r#type: "button", onclick: move |_| lang.set(Lang::Es), "Español" }
            }

            h1 { class: "page-title", {t(lang(), "signup.title")} }
            p { class: "page-intro", {t(lang(), "signup.intro")} }

            form { class: "signup-form", onsubmit: handle_submit,
                PersonForm { form, target: PersonRef::Head, payload_index: None }

                if !member_rows.is_empty() {
                    h2 { class: "section-title", {t(lang(), "signup.othermembers")} }
                }
                for (payload_index, id) in member_rows {
                    PersonForm { key: "{id}", form, target: PersonRef::Member(id), payload_index }
                }

                if !at_cap {
                    div { class: "add-member",
                        button {
                            r#type: "button",
                            onclick: move |_| {
                                let _ = form.write().add_member();
                            },
                            {t(lang(), "signup.addmember")}
                        }
                    }
                }

                div { class: "submit-row",
                    if let Some(message) = general {
                        div { class: "form-error", {t(lang(), &message)} }
                    }
                    button { r#type: "submit", disabled: submitting, {t(lang(), "misc.submit")} }
                }
            }
        }
    }
}

/// One person's fields: names, date of birth, demographics, and, for the head
/// only, language, contact, and address. `payload_index` is the member's
/// position in the submitted payload, used to compose backend error keys;
/// members filtered out of the payload can never receive field errors.
#[component]
fn PersonForm(
    form: Signal<SignupForm>,
    target: PersonRef,
    payload_index: Option<usize>,
) -> Element {
    let mut form = form;
    let lang = use_lang()();
    let is_head = matches!(target, PersonRef::Head);

    let person = form.read().person(target).cloned().unwrap_or_default();
    let errors = form.read().errors().clone();

    // Head errors arrive keyed by the bare camelCase field name; member
    // errors by the person{payload position} input naming.
    let error_for = |field: &str| -> Option<String> {
        let key = match (target, payload_index) {
            (PersonRef::Head, _) => field[..1].to_ascii_lowercase() + &field[1..],
            (PersonRef::Member(_), Some(position)) => format!("person{position}{field}"),
            (PersonRef::Member(_), None) => return None,
        };
        errors.get(&key).cloned()
    };

    let dob_error = error_for("DobMonth")
        .or_else(|| error_for("DobDay"))
        .or_else(|| error_for("DobYear"))
        .map(|_| t(lang, "misc.fieldrequired").to_string());

    let set = move |field: PersonField| {
        move |value: String| form.write().update_field(target, field, value)
    };

    let title = if is_head {
        t(lang, "signup.hoh")
    } else {
        t(lang, "signup.othermembers")
    };
    let select_placeholder = t(lang, "misc.select").to_string();

    let gender_options = vec![
        ("male".to_string(), t(lang, "misc.male").to_string()),
        ("female".to_string(), t(lang, "misc.female").to_string()),
        (
            "prefernottosay".to_string(),
            t(lang, "misc.prefernottosay").to_string(),
        ),
    ];
    let race_options = vec![
        ("white".to_string(), t(lang, "misc.race.white").to_string()),
        ("latino".to_string(), t(lang, "misc.race.latino").to_string()),
        ("black".to_string(), t(lang, "misc.race.black").to_string()),
        ("asian".to_string(), t(lang, "misc.race.asian").to_string()),
        ("other".to_string(), t(lang, "misc.other").to_string()),
    ];
    let language_options = vec![
        ("english".to_string(), t(lang, "misc.english").to_string()),
        ("spanish".to_string(), t(lang, "misc.spanish").to_string()),
        ("other".to_string(), t(lang, "misc.other").to_string()),
    ];
    let pad = |values: Vec<String>| -> Vec<(String, String)> {
        values.into_iter().map(|v| (v.clone(), v)).collect()
    };

    rsx! {
        div { class: "person-form",
            div { class: "person-header",
                span { class: "person-title", "{title}" }
                if let PersonRef::Member(id) = target {
                    button {
                        r#type: "button",
                        class: "remove-member",
                        onclick: move |_| form.write().remove_member(id),
                        "×"
                    }
                }
            }

            div { class: "field-row",
                TextField {
                    label: t(lang, "misc.firstname").to_string(),
                    value: person.get(PersonField::FirstName).to_string(),
                    error: error_for("FirstName"),
                    oninput: set(PersonField::FirstName),
                }
                TextField {
                    label: t(lang, "misc.lastname").to_string(),
                    value: person.get(PersonField::LastName).to_string(),
                    error: error_for("LastName"),
                    oninput: set(PersonField::LastName),
                }
            }

            div { class: "form-group",
                label { class: "field-label", {t(lang, "misc.dob")} }
                div { class: "field-row dob-row",
                    SelectField {
                        label: t(lang, "misc.month").to_string(),
                        value: person.get(PersonField::DobMonth).to_string(),
                        placeholder: t(lang, "misc.month").to_string(),
                        options: pad(month_options()),
                        oninput: set(PersonField::DobMonth),
                    }
                    SelectField {
                        label: t(lang, "misc.day").to_string(),
                        value: person.get(PersonField::DobDay).to_string(),
                        placeholder: t(lang, "misc.day").to_string(),
                        options: pad(day_options()),
                        oninput: set(PersonField::DobDay),
                    }
                    SelectField {
                        label: t(lang, "misc.year").to_string(),
                        value: person.get(PersonField::DobYear).to_string(),
                        placeholder: t(lang, "misc.year").to_string(),
                        options: pad(year_options()),
                        oninput: set(PersonField::DobYear),
                    }
                }
                if let Some(message) = dob_error {
                    div { class: "field-error", "{message}" }
                }
            }

            div { class: "field-row",
                SelectField {
                    label: t(lang, "misc.gender").to_string(),
                    value: person.get(PersonField::Gender).to_string(),
                    placeholder: select_placeholder.clone(),
                    options: gender_options,
                    error: error_for("Gender"),
                    oninput: set(PersonField::Gender),
                }
                SelectField {
                    label: t(lang, "misc.race").to_string(),
                    value: person.get(PersonField::Race).to_string(),
                    placeholder: select_placeholder.clone(),
                    options: race_options,
                    error: error_for("Race"),
                    oninput: set(PersonField::Race),
                }
            }

            if is_head {
                SelectField {
                    label: t(lang, "misc.primarylang").to_string(),
                    value: person.get(PersonField::Language).to_string(),
                    placeholder: select_placeholder.clone(),
                    options: language_options,
                    error: error_for("Language"),
                    oninput: set(PersonField::Language),
                }

                div { class: "field-row",
                    TextField {
                        label: t(lang, "misc.email").to_string(),
                        value: person.get(PersonField::Email).to_string(),
                        error: error_for("Email"),
                        input_type: "email".to_string(),
                        oninput: set(PersonField::Email),
                    }
                    TextField {
                        label: t(lang, "misc.phone").to_string(),
                        value: person.get(PersonField::Phone).to_string(),
                        error: error_for("Phone"),
                        input_type: "tel".to_string(),
                        oninput: set(PersonField::Phone),
                    }
                }

                div { class: "field-row",
                    TextField {
                        label: t(lang, "misc.address").to_string(),
                        value: person.get(PersonField::Street).to_string(),
                        error: error_for("Street"),
                        oninput: set(PersonField::Street),
                    }
                    TextField {
                        label: t(lang, "misc.city").to_string(),
                        value: person.get(PersonField::City).to_string(),
                        error: error_for("City"),
                        oninput: set(PersonField::City),
                    }
                }

                TextField {
                    label: t(lang, "misc.zipcode").to_string(),
                    value: person.get(PersonField::Zip).to_string(),
                    error: error_for("Zip"),
                    oninput: set(PersonField::Zip),
                }
            }
        }
    }
}

#[component]
fn TextField(
    label: String,
    value: String,
    #[props(default)] error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "field-label", "{label}" }
            input {
                class: if error.is_some() { "field-input field-invalid" } else { "field-input" },
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if let Some(ref message) = error {
                div { class: "field-error", "{message}" }
            }
        }
    }
}

#[component]
fn SelectField(
    label: String,
    value: String,
    placeholder: String,
    options: Vec<(String, String)>,
    #[props(default)] error: Option<String>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "field-label", "{label}" }
            select {
                class: if error.is_some() { "field-input field-invalid" } else { "field-input" },
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
                option { value: "", "{placeholder}" }
                for (val, text) in options {
                    option { key: "{val}", value: "{val}", "{text}" }
                }
            }
            if let Some(ref message) = error {
                div { class: "field-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_select_options_match_the_form() {
        let months = month_options();
        assert_eq!(months.len(), 12);
        assert_eq!(months.first().map(String::as_str), Some("01"));
        assert_eq!(months.last().map(String::as_str), Some("12"));

        let days = day_options();
        assert_eq!(days.len(), 31);
        assert_eq!(days.last().map(String::as_str), Some("31"));
    }

    #[test]
    fn year_options_descend_from_the_current_year() {
        let years = year_options();
        assert_eq!(years.len(), 100);
        let first: u64 = years[0].parse().unwrap();
        let last: u64 = years[99].parse().unwrap();
        assert!(first >= 2025);
        assert_eq!(first - last, 99);
    }
}
