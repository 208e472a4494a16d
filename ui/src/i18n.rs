//! Key-based English/Spanish string table.
//!
//! The active language lives in a `Signal<Lang>` provided by [`I18nProvider`]
//! rather than in an ambient global, so switching it re-renders every
//! subscribed view and [`t`] stays a pure function that can be tested without
//! a UI. Unknown keys fall back to the key string itself; [`t`] never panics,
//! which also lets views pass backend-authored messages through it unchanged.

use std::collections::HashMap;
use std::sync::OnceLock;

use dioxus::prelude::*;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Es,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            "es" | "es-es" | "es-mx" => Some(Lang::Es),
            _ => None,
        }
    }
}

const EN_STRINGS: &[(&str, &str)] = &[
    ("signup.title", "Community Cupboard Sign-Up Form"),
    (
        "signup.intro",
        "This information is helpful in providing our services. None of your information will be shared.",
    ),
    (
        "signup.success",
        "We have saved your information. Please ask for a shopping sheet from a staff member.",
    ),
    ("signup.hoh", "Head of Household"),
    ("signup.othermembers", "Others Living in the Household"),
    ("signup.addmember", "Add Household Member"),
    ("misc.firstname", "First Name"),
    ("misc.lastname", "Last Name"),
    ("misc.address", "Address"),
    ("misc.city", "City"),
    ("misc.zipcode", "ZIP Code"),
    ("misc.email", "Email"),
    ("misc.phone", "Phone"),
    ("misc.gender", "Gender"),
    ("misc.male", "Male"),
    ("misc.female", "Female"),
    ("misc.prefernottosay", "Prefer not to say"),
    ("misc.dob", "Date of Birth"),
    ("misc.month", "Month"),
    ("misc.day", "Day"),
    ("misc.year", "Year"),
    ("misc.primarylang", "Primary Language"),
    ("misc.english", "English"),
    ("misc.spanish", "Spanish"),
    ("misc.other", "Other"),
    ("misc.relationship", "Relationship"),
    ("misc.child", "Child"),
    ("misc.fieldrequired", "This field is required"),
    ("misc.submit", "Submit"),
    ("misc.thankyou", "Thank You"),
    ("misc.error", "An error occurred"),
    ("misc.select", "Select..."),
    ("misc.race", "Race"),
    ("misc.race.white", "White/Anglo"),
    ("misc.race.latino", "Latina/Latino"),
    ("misc.race.black", "Black/African American"),
    ("misc.race.asian", "Asian"),
];

const ES_STRINGS: &[(&str, &str)] = &[
    ("signup.title", "Formulario de Inscripción de Community Cupboard"),
    (
        "signup.intro",
        "Esta información es útil para proporcionar nuestros servicios. Su información no será compartida.",
    ),
    (
        "signup.success",
        "Hemos guardado su información. Por favor, solicite una hoja de compras a un miembro del personal.",
    ),
    ("signup.hoh", "Cabeza de Familia"),
    ("signup.othermembers", "Otros Miembros del Hogar"),
    ("signup.addmember", "Agregar Miembro del Hogar"),
    ("misc.firstname", "Nombre"),
    ("misc.lastname", "Apellido"),
    ("misc.address", "Dirección"),
    ("misc.city", "Ciudad"),
    ("misc.zipcode", "Código Postal"),
    ("misc.email", "Correo Electrónico"),
    ("misc.phone", "Teléfono"),
    ("misc.gender", "Género"),
    ("misc.male", "Masculino"),
    ("misc.female", "Femenino"),
    ("misc.prefernottosay", "Prefiero no decir"),
    ("misc.dob", "Fecha de Nacimiento"),
    ("misc.month", "Mes"),
    ("misc.day", "Día"),
    ("misc.year", "Año"),
    ("misc.primarylang", "Idioma Principal"),
    ("misc.english", "Inglés"),
    ("misc.spanish", "Español"),
    ("misc.other", "Otro"),
    ("misc.relationship", "Relación"),
    ("misc.child", "Hijo/a"),
    ("misc.fieldrequired", "Este campo es obligatorio"),
    ("misc.submit", "Enviar"),
    ("misc.thankyou", "Gracias"),
    ("misc.error", "Ocurrió un error"),
    ("misc.select", "Seleccionar..."),
    ("misc.race", "Raza"),
    ("misc.race.white", "Blanco/Anglo"),
    ("misc.race.latino", "Latina/Latino"),
    ("misc.race.black", "Negro/Afroamericano"),
    ("misc.race.asian", "Asiático"),
];

fn table(lang: Lang) -> &'static HashMap<&'static str, &'static str> {
    static EN: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static ES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match lang {
        Lang::En => EN.get_or_init(|| EN_STRINGS.iter().copied().collect()),
        Lang::Es => ES.get_or_init(|| ES_STRINGS.iter().copied().collect()),
    }
}

/// Look up `key` for `lang`, falling back to the key itself when unmapped.
pub fn t<'a>(lang: Lang, key: &'a str) -> &'a str {
    table(lang).get(key).copied().unwrap_or(key)
}

/// Provide `Signal<Lang>` to the component tree, defaulting to English.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let lang = use_signal(Lang::default);
    use_context_provider(|| lang);
    rsx! {
        {children}
    }
}

/// The active language signal. Setting it re-renders subscribed views.
pub fn use_lang() -> Signal<Lang> {
    use_context::<Signal<Lang>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_lookup() {
        assert_eq!(t(Lang::Es, "misc.firstname"), "Nombre");
        assert_eq!(t(Lang::Es, "signup.hoh"), "Cabeza de Familia");
    }

    #[test]
    fn english_lookup() {
        assert_eq!(t(Lang::En, "misc.firstname"), "First Name");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t(Lang::En, "misc.notakey"), "misc.notakey");
        assert_eq!(t(Lang::Es, "backend says no"), "backend says no");
    }

    #[test]
    fn catalogs_cover_the_same_keys() {
        let en: Vec<&str> = EN_STRINGS.iter().map(|(k, _)| *k).collect();
        let es: Vec<&str> = ES_STRINGS.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, es);
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Lang::from_code("ES"), Some(Lang::Es));
        assert_eq!(Lang::from_code("en-US"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::Es.code(), "es");
    }
}
