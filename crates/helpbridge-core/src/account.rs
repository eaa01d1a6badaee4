//! Accounts and Profile View
//!
//! Signed-in user shape and the role-dependent profile view-model.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Individual,
    Ngo,
    Volunteer,
    Admin,
}

impl Role {
    /// Roles that can sign up through the registration wizard
    pub const REGISTERABLE: [Role; 3] = [Role::Individual, Role::Ngo, Role::Volunteer];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Individual => "Individual",
            Role::Ngo => "NGO",
            Role::Volunteer => "Volunteer",
            Role::Admin => "Administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User returned by the authentication service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub is_profile_complete: bool,
    #[serde(default)]
    pub is_verified: bool,
}

/// Backends disagree on whether ids are numbers or strings
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSection {
    Contact,
    Donations,
    Organization,
    PostedNeeds,
    Skills,
    Availability,
    Assignments,
    Moderation,
}

impl ProfileSection {
    pub fn title(&self) -> &'static str {
        match self {
            ProfileSection::Contact => "Contact details",
            ProfileSection::Donations => "My donations",
            ProfileSection::Organization => "Organization",
            ProfileSection::PostedNeeds => "Posted needs",
            ProfileSection::Skills => "Skills",
            ProfileSection::Availability => "Availability",
            ProfileSection::Assignments => "Volunteer assignments",
            ProfileSection::Moderation => "Pending verifications",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileBadge {
    Verified,
    PendingVerification,
    IncompleteProfile,
}

impl ProfileBadge {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileBadge::Verified => "Verified",
            ProfileBadge::PendingVerification => "Verification pending",
            ProfileBadge::IncompleteProfile => "Profile incomplete",
        }
    }
}

/// What the profile page shows for a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub heading: String,
    pub role_label: &'static str,
    pub badges: Vec<ProfileBadge>,
    pub sections: Vec<ProfileSection>,
}

impl ProfileView {
    pub fn for_user(user: &User) -> Self {
        let sections = match user.role {
            Role::Individual => vec![ProfileSection::Contact, ProfileSection::Donations],
            Role::Ngo => vec![
                ProfileSection::Organization,
                ProfileSection::Contact,
                ProfileSection::PostedNeeds,
            ],
            Role::Volunteer => vec![
                ProfileSection::Contact,
                ProfileSection::Skills,
                ProfileSection::Availability,
                ProfileSection::Assignments,
            ],
            Role::Admin => vec![ProfileSection::Contact, ProfileSection::Moderation],
        };

        let mut badges = vec![if user.is_verified {
            ProfileBadge::Verified
        } else {
            ProfileBadge::PendingVerification
        }];
        if !user.is_profile_complete {
            badges.push(ProfileBadge::IncompleteProfile);
        }

        let heading = match user.role {
            Role::Ngo => user.name.clone(),
            _ => format!("Hello, {}", user.name),
        };

        Self {
            heading,
            role_label: user.role.label(),
            badges,
            sections,
        }
    }
}
