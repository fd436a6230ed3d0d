//! Deterministic record datasets for tests across the workspace.
//!
//! Everything here is fixed: stable ids, fixed dates, no randomness.
//! Two calls with the same arguments produce identical datasets, so
//! tests can assert on exact values.

use brief_core::records::{
    Account, Activity, Attendee, Campaign, Contact, Opportunity, Response,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// One complete in-memory dataset: the seven record sets a summary
/// invocation consumes.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub campaigns: Vec<Campaign>,
    pub attendees: Vec<Attendee>,
    pub responses: Vec<Response>,
    pub activities: Vec<Activity>,
    pub contacts: Vec<Contact>,
    pub accounts: Vec<Account>,
    pub opportunities: Vec<Opportunity>,
}

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
}

const COMPANY_NAMES: [&str; 4] = ["Acme Corp", "Globex", "Initech", "Northwind Traders"];
const CONTACT_NAMES: [(&str, &str); 6] = [
    ("Dana Whitfield", "dana.whitfield@acme.example"),
    ("Marcus Lee", "marcus.lee@globex.example"),
    ("Priya Nair", "priya.nair@initech.example"),
    ("Tomas Berg", "tomas.berg@northwind.example"),
    ("Elena Fuentes", "elena.fuentes@acme.example"),
    ("Jack Osei", "jack.osei@globex.example"),
];
const STAGES: [&str; 4] = ["Open", "In Progress", "Closed Won", "Closed Lost"];
const ACTIVITY_TYPES: [&str; 4] = ["click", "email_open", "webinar_join", "demo"];
const RESPONSE_TYPES: [&str; 3] = ["registered", "attended", "no-show"];

/// The standard dataset: 40 attendees, 20 opportunities summing to a
/// $500,000 pipeline, 60 activities.
pub fn sample_dataset() -> Dataset {
    dataset_with(40, 20, 500_000.0)
}

/// Build a dataset with the given attendee and opportunity counts.
///
/// Opportunity amounts split `pipeline_total` evenly, so totals that
/// divide cleanly sum back exactly. The first six attendees share
/// identity with the fixed contact list (exact name and email), the
/// rest are unmatched guests. Activity count is 3/2 the attendee
/// count; response count is a quarter.
pub fn dataset_with(
    attendee_count: usize,
    opportunity_count: usize,
    pipeline_total: f64,
) -> Dataset {
    let base = base_date();

    let campaigns = vec![
        Campaign {
            id: "cmp-001".to_string(),
            name: "Q2 Product Launch".to_string(),
            start_date: base - Duration::days(30),
            end_date: base - Duration::days(20),
            description: Some("Flagship launch event for the spring release.".to_string()),
        },
        Campaign {
            id: "cmp-002".to_string(),
            name: "Summer Webinar Series".to_string(),
            start_date: base - Duration::days(10),
            end_date: base,
            description: None,
        },
    ];

    let accounts: Vec<Account> = COMPANY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Account {
            id: format!("acc-{:03}", i + 1),
            name: name.to_string(),
            industry: Some(["Tech", "Finance", "Retail", "Healthcare"][i % 4].to_string()),
            region: Some(["NA", "EMEA", "APAC", "LATAM"][i % 4].to_string()),
        })
        .collect();

    let contacts: Vec<Contact> = CONTACT_NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, email))| Contact {
            id: format!("con-{:03}", i + 1),
            name: name.to_string(),
            email: email.to_string(),
            lead: i % 2 == 0,
            account_id: Some(accounts[i % accounts.len()].id.clone()),
        })
        .collect();

    let attendees: Vec<Attendee> = (0..attendee_count)
        .map(|i| {
            let (name, email, account_id) = if i < contacts.len() {
                (
                    contacts[i].name.clone(),
                    contacts[i].email.clone(),
                    contacts[i].account_id.clone(),
                )
            } else {
                let account_id = if i % 3 == 2 {
                    None
                } else {
                    Some(accounts[i % accounts.len()].id.clone())
                };
                (
                    format!("Guest {:02}", i + 1),
                    format!("guest{:02}@example.net", i + 1),
                    account_id,
                )
            };
            Attendee {
                id: format!("att-{:03}", i + 1),
                name,
                email,
                campaign_id: campaigns[i % campaigns.len()].id.clone(),
                account_id,
            }
        })
        .collect();

    let activity_count = attendee_count * 3 / 2;
    let activities: Vec<Activity> = (0..activity_count)
        .map(|i| Activity {
            id: format!("act-{:03}", i + 1),
            campaign_id: campaigns[i % campaigns.len()].id.clone(),
            attendee_id: if attendee_count > 0 {
                Some(attendees[i % attendee_count].id.clone())
            } else {
                None
            },
            activity_type: ACTIVITY_TYPES[i % ACTIVITY_TYPES.len()].to_string(),
            timestamp: base - Duration::days((i % 30) as i64),
        })
        .collect();

    let response_count = attendee_count / 4;
    let responses: Vec<Response> = (0..response_count)
        .map(|i| Response {
            id: format!("res-{:03}", i + 1),
            attendee_id: attendees[i % attendee_count].id.clone(),
            campaign_id: campaigns[i % campaigns.len()].id.clone(),
            response_type: RESPONSE_TYPES[i % RESPONSE_TYPES.len()].to_string(),
            timestamp: base - Duration::days((i % 14) as i64),
        })
        .collect();

    let opportunities: Vec<Opportunity> = (0..opportunity_count)
        .map(|i| Opportunity {
            id: format!("opp-{:03}", i + 1),
            account_id: accounts[i % accounts.len()].id.clone(),
            campaign_id: Some(campaigns[i % campaigns.len()].id.clone()),
            amount: pipeline_total / opportunity_count as f64,
            stage: STAGES[i % STAGES.len()].to_string(),
            close_date: Some(base + Duration::days(30 + (i % 60) as i64)),
        })
        .collect();

    Dataset {
        campaigns,
        attendees,
        responses,
        activities,
        contacts,
        accounts,
        opportunities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_counts_match_the_standard_scenario() {
        let data = sample_dataset();
        assert_eq!(data.attendees.len(), 40);
        assert_eq!(data.opportunities.len(), 20);
        assert_eq!(data.activities.len(), 60);
        assert_eq!(data.responses.len(), 10);
    }

    #[test]
    fn sample_pipeline_sums_exactly() {
        let data = sample_dataset();
        let pipeline: f64 = data.opportunities.iter().map(|o| o.amount).sum();
        assert_eq!(pipeline, 500_000.0);
    }

    #[test]
    fn first_attendees_share_contact_identity() {
        let data = sample_dataset();
        for i in 0..6 {
            assert_eq!(data.attendees[i].name, data.contacts[i].name);
            assert_eq!(data.attendees[i].email, data.contacts[i].email);
        }
        assert!(data.attendees[6].name.starts_with("Guest"));
    }

    #[test]
    fn datasets_are_deterministic() {
        let a = sample_dataset();
        let b = sample_dataset();
        assert_eq!(a.attendees, b.attendees);
        assert_eq!(a.opportunities, b.opportunities);
        assert_eq!(a.activities, b.activities);
    }

    #[test]
    fn zero_counts_produce_empty_sets() {
        let data = dataset_with(0, 0, 0.0);
        assert!(data.attendees.is_empty());
        assert!(data.opportunities.is_empty());
        assert!(data.activities.is_empty());
        assert!(data.responses.is_empty());
        // The fixed reference data is still present.
        assert_eq!(data.accounts.len(), 4);
        assert_eq!(data.contacts.len(), 6);
    }
}
