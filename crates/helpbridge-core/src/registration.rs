//! Registration Wizard
//!
//! Per-role wizard steps, form state, field validation and the payload
//! sent to the registration endpoint.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::account::Role;

/// Single-valued form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Address,
    City,
    State,
    Pincode,
    OrganizationName,
    RegistrationNumber,
    ContactPerson,
    Website,
    Experience,
}

impl Field {
    /// Parameter name used in payloads and server-side field errors
    pub fn param(&self) -> &'static str {
        match self {
            Field::FullName => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Address => "address",
            Field::City => "city",
            Field::State => "state",
            Field::Pincode => "pincode",
            Field::OrganizationName => "organizationName",
            Field::RegistrationNumber => "registrationNumber",
            Field::ContactPerson => "contactPerson",
            Field::Website => "website",
            Field::Experience => "experience",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::Address => "Street address",
            Field::City => "City",
            Field::State => "State",
            Field::Pincode => "Pincode",
            Field::OrganizationName => "Organization name",
            Field::RegistrationNumber => "Registration number",
            Field::ContactPerson => "Contact person",
            Field::Website => "Website",
            Field::Experience => "Prior experience",
        }
    }

    /// HTML input type for the field
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Phone => "tel",
            Field::Password | Field::ConfirmPassword => "password",
            Field::Website => "url",
            _ => "text",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Website | Field::Experience)
    }
}

/// Multi-valued form field, edited by toggling options
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MultiField {
    Skills,
    Availability,
    FocusAreas,
}

impl MultiField {
    pub fn param(&self) -> &'static str {
        match self {
            MultiField::Skills => "skills",
            MultiField::Availability => "availability",
            MultiField::FocusAreas => "focusAreas",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MultiField::Skills => "Skills",
            MultiField::Availability => "Availability",
            MultiField::FocusAreas => "Focus areas",
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            MultiField::Skills => &[
                "Teaching",
                "Medical aid",
                "Cooking",
                "Driving",
                "Counselling",
                "Fundraising",
                "Construction",
            ],
            MultiField::Availability => &["Weekdays", "Weekends", "Mornings", "Evenings"],
            MultiField::FocusAreas => &[
                "Education",
                "Medical",
                "Senior Citizens",
                "Child Welfare",
                "Disaster Relief",
                "Food Security",
            ],
        }
    }
}

/// One screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardStep {
    pub title: &'static str,
    pub fields: &'static [Field],
    pub multi: &'static [MultiField],
}

const ACCOUNT: WizardStep = WizardStep {
    title: "Account",
    fields: &[
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
    ],
    multi: &[],
};

const ADDRESS: WizardStep = WizardStep {
    title: "Address",
    fields: &[Field::Address, Field::City, Field::State, Field::Pincode],
    multi: &[],
};

const REVIEW: WizardStep = WizardStep {
    title: "Review",
    fields: &[],
    multi: &[],
};

const INDIVIDUAL_STEPS: &[WizardStep] = &[ACCOUNT, ADDRESS, REVIEW];

const NGO_STEPS: &[WizardStep] = &[
    WizardStep {
        title: "Organization",
        fields: &[Field::OrganizationName, Field::RegistrationNumber, Field::Website],
        multi: &[MultiField::FocusAreas],
    },
    WizardStep {
        title: "Contact",
        fields: &[
            Field::ContactPerson,
            Field::Email,
            Field::Phone,
            Field::Password,
            Field::ConfirmPassword,
        ],
        multi: &[],
    },
    ADDRESS,
    REVIEW,
];

const VOLUNTEER_STEPS: &[WizardStep] = &[
    ACCOUNT,
    WizardStep {
        title: "Skills",
        fields: &[Field::Experience],
        multi: &[MultiField::Skills, MultiField::Availability],
    },
    WizardStep {
        title: "Location",
        fields: &[Field::City, Field::State, Field::Pincode],
        multi: &[],
    },
    REVIEW,
];

/// Wizard steps for a role. Roles without self-registration have none.
pub fn steps(role: Role) -> &'static [WizardStep] {
    match role {
        Role::Individual => INDIVIDUAL_STEPS,
        Role::Ngo => NGO_STEPS,
        Role::Volunteer => VOLUNTEER_STEPS,
        Role::Admin => &[],
    }
}

/// Errors keyed by parameter name, so server field errors merge into the same map
pub type FieldErrors = BTreeMap<String, String>;

/// Values entered so far
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationForm {
    values: BTreeMap<Field, String>,
    multi: BTreeMap<MultiField, BTreeSet<String>>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn selected(&self, field: MultiField) -> Vec<String> {
        self.multi
            .get(&field)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_selected(&self, field: MultiField, value: &str) -> bool {
        self.multi.get(&field).is_some_and(|set| set.contains(value))
    }

    /// Add the option if absent, remove it if present
    pub fn toggle_multi(&mut self, field: MultiField, value: &str) {
        let set = self.multi.entry(field).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.multi.remove(&field);
        }
    }

    fn trimmed(&self, field: Field) -> String {
        self.get(field).trim().to_string()
    }
}

/// Sign-up addresses need a dotted domain; bare hosts like `user@localhost` are rejected
fn is_valid_email(email: &str) -> bool {
    validator::validate_email(email)
        && email.rsplit_once('@').is_some_and(|(_, domain)| domain.contains('.'))
}

const WEBSITE_PROTOCOLS: [&str; 2] = ["http://", "https://"];

fn website_error(url: &str) -> Option<String> {
    let lower = url.to_lowercase();
    if !WEBSITE_PROTOCOLS.iter().any(|p| lower.starts_with(p)) {
        return Some("Website must start with http:// or https://".to_string());
    }
    (!validator::validate_url(url)).then(|| "Enter a valid website address".to_string())
}

fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    let digits = digits.strip_prefix("+91").unwrap_or(&digits);
    digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit())
}

/// Check one field, returning the message to show under it
pub fn validate_field(field: Field, form: &RegistrationForm) -> Option<String> {
    let value = form.trimmed(field);
    if value.is_empty() {
        return field
            .is_required()
            .then(|| format!("{} is required", field.label()));
    }

    match field {
        Field::Email if !is_valid_email(&value) => Some("Enter a valid email address".to_string()),
        Field::Phone if !is_valid_phone(&value) => Some("Enter a 10-digit phone number".to_string()),
        Field::Password if form.get(Field::Password).chars().count() < 8 => {
            Some("Password must be at least 8 characters".to_string())
        }
        Field::ConfirmPassword if form.get(Field::ConfirmPassword) != form.get(Field::Password) => {
            Some("Passwords do not match".to_string())
        }
        Field::Pincode if value.len() != 6 || !value.chars().all(|c| c.is_ascii_digit()) => {
            Some("Pincode must be 6 digits".to_string())
        }
        Field::Website => website_error(&value),
        _ => None,
    }
}

pub fn validate_multi(field: MultiField, form: &RegistrationForm) -> Option<String> {
    form.selected(field)
        .is_empty()
        .then(|| format!("Select at least one option for {}", field.label().to_lowercase()))
}

/// Validate every field on one step
pub fn validate_step(role: Role, step: usize, form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let Some(step) = steps(role).get(step) else {
        return errors;
    };
    for field in step.fields {
        if let Some(msg) = validate_field(*field, form) {
            errors.insert(field.param().to_string(), msg);
        }
    }
    for field in step.multi {
        if let Some(msg) = validate_multi(*field, form) {
            errors.insert(field.param().to_string(), msg);
        }
    }
    errors
}

pub fn validate_all(role: Role, form: &RegistrationForm) -> FieldErrors {
    (0..steps(role).len())
        .flat_map(|i| validate_step(role, i, form))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Role-tagged body for the registration endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RegistrationPayload {
    #[serde(rename_all = "camelCase")]
    Individual {
        name: String,
        email: String,
        phone: String,
        password: String,
        address: PostalAddress,
    },
    #[serde(rename_all = "camelCase")]
    Ngo {
        organization_name: String,
        registration_number: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        website: Option<String>,
        focus_areas: Vec<String>,
        contact_person: String,
        email: String,
        phone: String,
        password: String,
        address: PostalAddress,
    },
    #[serde(rename_all = "camelCase")]
    Volunteer {
        name: String,
        email: String,
        phone: String,
        password: String,
        skills: Vec<String>,
        availability: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        experience: Option<String>,
        address: PostalAddress,
    },
}

/// Build the payload once every step validates
pub fn build_payload(role: Role, form: &RegistrationForm) -> Result<RegistrationPayload, FieldErrors> {
    let errors = validate_all(role, form);
    if !errors.is_empty() {
        return Err(errors);
    }

    let text = |field| form.trimmed(field);
    let optional = |field| Some(form.trimmed(field)).filter(|v| !v.is_empty());
    let address = |with_street: bool| PostalAddress {
        street: if with_street { optional(Field::Address) } else { None },
        city: text(Field::City),
        state: text(Field::State),
        pincode: text(Field::Pincode),
    };

    let payload = match role {
        Role::Individual => RegistrationPayload::Individual {
            name: text(Field::FullName),
            email: text(Field::Email),
            phone: text(Field::Phone),
            password: form.get(Field::Password).to_string(),
            address: address(true),
        },
        Role::Ngo => RegistrationPayload::Ngo {
            organization_name: text(Field::OrganizationName),
            registration_number: text(Field::RegistrationNumber),
            website: optional(Field::Website),
            focus_areas: form.selected(MultiField::FocusAreas),
            contact_person: text(Field::ContactPerson),
            email: text(Field::Email),
            phone: text(Field::Phone),
            password: form.get(Field::Password).to_string(),
            address: address(true),
        },
        Role::Volunteer => RegistrationPayload::Volunteer {
            name: text(Field::FullName),
            email: text(Field::Email),
            phone: text(Field::Phone),
            password: form.get(Field::Password).to_string(),
            skills: form.selected(MultiField::Skills),
            availability: form.selected(MultiField::Availability),
            experience: optional(Field::Experience),
            address: address(false),
        },
        Role::Admin => {
            let mut errors = FieldErrors::new();
            errors.insert("role".to_string(), format!("{} accounts cannot self-register", role.label()));
            return Err(errors);
        }
    };
    Ok(payload)
}
