//! Sample Data
//!
//! Built-in need catalog and notification feed. Both are built once and
//! never mutated.

use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};

use crate::needs::{NeedId, NeedRecord, Urgency};
use crate::notifications::{Notification, NotificationKind};

static NEEDS: OnceLock<Vec<NeedRecord>> = OnceLock::new();

/// The need catalog shown on the browse page
pub fn sample_needs() -> &'static [NeedRecord] {
    NEEDS.get_or_init(|| {
        vec![
            NeedRecord {
                id: NeedId::Number(1),
                name: "Flood Relief for Alappuzha Families".to_string(),
                location: "Alappuzha, Kerala".to_string(),
                category: "Disaster Relief".to_string(),
                urgency: Urgency::Critical,
                description: "Over 200 families affected by floods need dry rations, drinking water and temporary shelter.".to_string(),
                contact: "+91 94470 11223".to_string(),
                volunteers: 18,
                funded: 42,
            },
            NeedRecord {
                id: NeedId::Number(2),
                name: "Winter Blankets for Old Age Home".to_string(),
                location: "Delhi, NCR".to_string(),
                category: "Senior Citizens".to_string(),
                urgency: Urgency::High,
                description: "Residents of Anand Ashram need warm blankets and woollens before the cold wave.".to_string(),
                contact: "+91 98110 45678".to_string(),
                volunteers: 6,
                funded: 65,
            },
            NeedRecord {
                id: NeedId::Number(3),
                name: "School Books for Rural Children".to_string(),
                location: "Nashik, Maharashtra".to_string(),
                category: "Education".to_string(),
                urgency: Urgency::Medium,
                description: "Textbooks and notebooks for 120 students of a village primary school.".to_string(),
                contact: "+91 98220 33445".to_string(),
                volunteers: 4,
                funded: 30,
            },
            NeedRecord {
                id: NeedId::Number(4),
                name: "Dialysis Support for Daily Wage Worker".to_string(),
                location: "Chennai, Tamil Nadu".to_string(),
                category: "Medical".to_string(),
                urgency: Urgency::Critical,
                description: "Funds needed for three months of dialysis sessions for a 45-year-old father of two.".to_string(),
                contact: "+91 94440 98765".to_string(),
                volunteers: 2,
                funded: 15,
            },
            NeedRecord {
                id: NeedId::Number(5),
                name: "Community Kitchen Volunteers".to_string(),
                location: "Hyderabad, Telangana".to_string(),
                category: "Food Security".to_string(),
                urgency: Urgency::High,
                description: "Evening shift volunteers to cook and serve meals for migrant workers.".to_string(),
                contact: "+91 90000 12121".to_string(),
                volunteers: 25,
                funded: 80,
            },
            NeedRecord {
                id: NeedId::Number(6),
                name: "Digital Literacy Classes".to_string(),
                location: "Pune, Maharashtra".to_string(),
                category: "Education".to_string(),
                urgency: Urgency::Low,
                description: "Volunteers to teach basic smartphone and internet skills to senior citizens on weekends.".to_string(),
                contact: "+91 98900 67676".to_string(),
                volunteers: 9,
                funded: 100,
            },
            NeedRecord {
                id: NeedId::Number(7),
                name: "Medicines for Cyclone-hit Villages".to_string(),
                location: "Puri, Odisha".to_string(),
                category: "Disaster Relief".to_string(),
                urgency: Urgency::High,
                description: "First aid kits and essential medicines for villages cut off after the cyclone.".to_string(),
                contact: "+91 94370 55667".to_string(),
                volunteers: 11,
                funded: 55,
            },
            NeedRecord {
                id: NeedId::Number(8),
                name: "Companionship Visits for Elderly".to_string(),
                location: "Hyderabad, Sindh".to_string(),
                category: "Senior Citizens".to_string(),
                urgency: Urgency::Low,
                description: "Weekly visits to lonely elderly residents; conversation, reading and small errands.".to_string(),
                contact: "+92 300 1234567".to_string(),
                volunteers: 3,
                funded: 10,
            },
            NeedRecord {
                id: NeedId::Number(9),
                name: "Wheelchairs for Rehabilitation Centre".to_string(),
                location: "Jaipur, Rajasthan".to_string(),
                category: "Medical".to_string(),
                urgency: Urgency::Medium,
                description: "Ten wheelchairs needed for patients recovering from spinal injuries.".to_string(),
                contact: "+91 94140 78787".to_string(),
                volunteers: 1,
                funded: 60,
            },
            NeedRecord {
                id: NeedId::Number(10),
                name: "Animal Shelter Monsoon Repairs".to_string(),
                location: "Kochi, Kerala".to_string(),
                category: "Animal Welfare".to_string(),
                urgency: Urgency::Other("Ongoing".to_string()),
                description: "Roof repairs and dry bedding for 80 rescued dogs before the monsoon peaks.".to_string(),
                contact: "+91 98950 24242".to_string(),
                volunteers: 7,
                funded: 25,
            },
            NeedRecord {
                id: NeedId::Number(11),
                name: "Scholarships for Girls in STEM".to_string(),
                location: "Delhi, NCR".to_string(),
                category: "Education".to_string(),
                urgency: Urgency::High,
                description: "Annual scholarships for first-generation college students pursuing engineering.".to_string(),
                contact: "+91 98111 90909".to_string(),
                volunteers: 5,
                funded: 48,
            },
            NeedRecord {
                id: NeedId::Number(12),
                name: "Blood Donors for Thalassemia Ward".to_string(),
                location: "Kolkata, West Bengal".to_string(),
                category: "Medical".to_string(),
                urgency: Urgency::Critical,
                description: "Regular O-negative and B-positive donors needed for children receiving transfusions.".to_string(),
                contact: "+91 98300 13579".to_string(),
                volunteers: 14,
                funded: 0,
            },
        ]
    })
}

/// Notification feed relative to `now`
pub fn sample_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let entries = [
        (1, NotificationKind::Donation, "Donation received", "Your donation of ₹2,000 to Flood Relief for Alappuzha Families was received.", Duration::minutes(12), false),
        (2, NotificationKind::Volunteer, "Volunteer request accepted", "Community Kitchen Volunteers accepted you for the Saturday evening shift.", Duration::hours(3), false),
        (3, NotificationKind::Update, "Need fully funded", "Digital Literacy Classes reached 100% of its funding goal.", Duration::hours(20), true),
        (4, NotificationKind::Alert, "Critical need near you", "Blood Donors for Thalassemia Ward urgently needs O-negative donors.", Duration::days(1), false),
        (5, NotificationKind::Update, "Profile verified", "Your account has been verified. You can now post needs.", Duration::days(4), true),
        (6, NotificationKind::Donation, "Receipt available", "The 80G tax receipt for your last donation is ready to download.", Duration::days(9), true),
    ];

    entries
        .into_iter()
        .map(|(id, kind, title, message, age, read)| Notification {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            created_at: now - age,
            read,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::needs::{city_label, extract_facets, visible_needs, FilterState};
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<String> = sample_needs().iter().map(|n| n.id.to_string()).collect();
        assert_eq!(ids.len(), sample_needs().len());
    }

    #[test]
    fn test_catalog_fields_land_in_place() {
        let kitchen = sample_needs()
            .iter()
            .find(|n| n.id == NeedId::Number(5))
            .unwrap();
        assert_eq!(kitchen.name, "Community Kitchen Volunteers");
        assert_eq!(kitchen.location, "Hyderabad, Telangana");
        assert_eq!(kitchen.category, "Food Security");
        assert_eq!(kitchen.urgency, Urgency::High);
        assert!(kitchen.contact.starts_with("+91"));
        assert!(kitchen.volunteers > 0);
    }

    #[test]
    fn test_catalog_covers_every_urgency() {
        let facets = extract_facets(sample_needs());
        for level in ["Critical", "High", "Medium", "Low"] {
            assert!(facets.urgencies.iter().any(|u| u == level), "{level}");
        }
        assert!(sample_needs().iter().any(|n| !n.urgency.is_known()));
        assert!(sample_needs().iter().all(|n| n.funded <= 100));
    }

    #[test]
    fn test_catalog_has_shared_city_prefix() {
        let facets = extract_facets(sample_needs());
        let hyderabad: Vec<_> = facets
            .locations
            .iter()
            .filter(|l| city_label(l) == "Hyderabad")
            .collect();
        assert_eq!(hyderabad.len(), 2);
    }

    #[test]
    fn test_search_flood_matches_description() {
        let mut state = FilterState::new();
        state.set_search_term("FLOOD");
        let visible = visible_needs(sample_needs(), &state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, NeedId::Number(1));
    }

    #[test]
    fn test_sample_notifications_are_newest_first() {
        let now = Utc::now();
        let list = sample_notifications(now);
        assert!(list.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert!(list.iter().all(|n| n.created_at <= now));
    }
}
