//! Demo records loaded into the in-memory store when seeding is enabled.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::workflows::accounts::{UserProfile, UserRole};
use crate::workflows::content::{ContentPost, Platform, PostId};
use crate::workflows::inbox::{EmailId, EmailMessage, LinkedInMessage, MessageId};
use crate::workflows::lists::{ListId, ListMembership, UserList};
use crate::workflows::outreach::{
    CampaignId, CampaignState, CampaignStats, LinkedInCampaign, Sequence, SequenceId,
    SequenceStats, SequenceStep, StepAction, StepId,
};
use crate::workflows::pipeline::{Deal, DealId, DealStage};
use crate::workflows::prospecting::filter::{IntentBucket, ManagementLevel};
use crate::workflows::prospecting::{
    CampaignStatus, Company, CompanyId, CompanyTier, FilterState, Lead, LeadId, LeadStatus,
    LinkedInStatus, SavedSearch,
};
use crate::workflows::scheduling::{
    Meeting, MeetingId, MeetingKind, Task, TaskId, TaskKind, TaskPriority,
};

pub const DEMO_AUTH_ID: &str = "demo-user";

/// Every seeded collection, in the order each repository returns it.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub leads: Vec<Lead>,
    pub companies: Vec<Company>,
    pub saved_searches: Vec<SavedSearch>,
    pub lists: Vec<UserList>,
    pub memberships: Vec<ListMembership>,
    pub deals: Vec<Deal>,
    pub sequences: Vec<Sequence>,
    pub campaigns: Vec<LinkedInCampaign>,
    pub meetings: Vec<Meeting>,
    pub tasks: Vec<Task>,
    pub emails: Vec<EmailMessage>,
    pub linkedin_messages: Vec<LinkedInMessage>,
    pub posts: Vec<ContentPost>,
    pub profiles: Vec<UserProfile>,
}

impl Fixtures {
    pub fn demo() -> Self {
        Self {
            leads: leads(),
            companies: companies(),
            saved_searches: saved_searches(),
            lists: lists(),
            memberships: Vec::new(),
            deals: deals(),
            sequences: sequences(),
            campaigns: campaigns(),
            meetings: meetings(),
            tasks: tasks(),
            emails: emails(),
            linkedin_messages: linkedin_messages(),
            posts: posts(),
            profiles: profiles(),
        }
    }
}

struct LeadSeed {
    id: &'static str,
    name: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    email: &'static str,
    phone: Option<&'static str>,
    status: LeadStatus,
    intent: u8,
    signals: &'static [&'static str],
    tags: &'static [&'static str],
    campaign: CampaignStatus,
    linkedin: LinkedInStatus,
}

impl LeadSeed {
    fn build(self) -> Lead {
        Lead {
            id: LeadId(self.id.to_string()),
            name: self.name.to_string(),
            title: self.title.to_string(),
            company: self.company.to_string(),
            location: self.location.to_string(),
            email: self.email.to_string(),
            phone: self.phone.map(str::to_string),
            status: self.status,
            avatar_url: format!("https://picsum.photos/id/{}/200/200", self.id),
            notes: None,
            linkedin_url: None,
            tags: strings(self.tags),
            email_status: None,
            intent_score: Some(self.intent),
            signals: strings(self.signals),
            campaign_status: self.campaign,
            linkedin_status: self.linkedin,
            is_contact_revealed: false,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn leads() -> Vec<Lead> {
    use CampaignStatus as C;
    use LeadStatus as S;
    use LinkedInStatus as L;

    let seeds = [
        LeadSeed {
            id: "1",
            name: "Shivtej Magar",
            title: "VP of Sales",
            company: "TechFlow",
            location: "San Francisco, CA",
            email: "shivtej@techflow.io",
            phone: Some("+1 (555) 123-4567"),
            status: S::New,
            intent: 85,
            signals: &["Hiring", "Series B"],
            tags: &["VIP", "Decision Maker"],
            campaign: C::Active,
            linkedin: L::Connected,
        },
        LeadSeed {
            id: "2",
            name: "John Doe",
            title: "Marketing Director",
            company: "Growth.ai",
            location: "New York, NY",
            email: "john@growth.ai",
            phone: Some("+1 (555) 987-6543"),
            status: S::Contacted,
            intent: 92,
            signals: &["New Tech Stack", "High Traffic"],
            tags: &["Warm"],
            campaign: C::Completed,
            linkedin: L::Connected,
        },
        LeadSeed {
            id: "3",
            name: "Sarah Smith",
            title: "CEO",
            company: "StartUp Inc",
            location: "Austin, TX",
            email: "sarah@startup.com",
            phone: Some("+1 (555) 456-7890"),
            status: S::Interested,
            intent: 45,
            signals: &["Funding"],
            tags: &["High Value"],
            campaign: C::None,
            linkedin: L::NotConnected,
        },
        LeadSeed {
            id: "4",
            name: "Michael Brown",
            title: "CTO",
            company: "DevOps Sol",
            location: "Remote",
            email: "mike@devops.net",
            phone: None,
            status: S::New,
            intent: 78,
            signals: &["Hiring Engineers"],
            tags: &[],
            campaign: C::Paused,
            linkedin: L::Pending,
        },
        LeadSeed {
            id: "5",
            name: "Emily Chen",
            title: "Product Manager",
            company: "Innovate",
            location: "Seattle, WA",
            email: "emily@innovate.co",
            phone: None,
            status: S::Closed,
            intent: 30,
            signals: &[],
            tags: &[],
            campaign: C::None,
            linkedin: L::NotConnected,
        },
        LeadSeed {
            id: "6",
            name: "David Wilson",
            title: "Head of Design",
            company: "Creative Studio",
            location: "Los Angeles, CA",
            email: "david@creative.com",
            phone: None,
            status: S::New,
            intent: 65,
            signals: &["Rebranding"],
            tags: &[],
            campaign: C::None,
            linkedin: L::NotConnected,
        },
        LeadSeed {
            id: "7",
            name: "Lisa Taylor",
            title: "COO",
            company: "Enterprise Corp",
            location: "Chicago, IL",
            email: "lisa@enterprise.com",
            phone: None,
            status: S::Contacted,
            intent: 88,
            signals: &["Expansion"],
            tags: &[],
            campaign: C::Active,
            linkedin: L::Connected,
        },
        LeadSeed {
            id: "8",
            name: "James Anderson",
            title: "VP Engineering",
            company: "TechFlow",
            location: "San Francisco, CA",
            email: "james@techflow.io",
            phone: None,
            status: S::New,
            intent: 95,
            signals: &["Hiring", "Series B"],
            tags: &[],
            campaign: C::None,
            linkedin: L::NotConnected,
        },
        LeadSeed {
            id: "9",
            name: "Amanda Lowery",
            title: "Head of People",
            company: "Growth.ai",
            location: "New York, NY",
            email: "amanda@growth.ai",
            phone: None,
            status: S::New,
            intent: 70,
            signals: &["Hiring"],
            tags: &[],
            campaign: C::None,
            linkedin: L::NotConnected,
        },
        LeadSeed {
            id: "10",
            name: "Robert Stark",
            title: "Director of IT",
            company: "Enterprise Corp",
            location: "Chicago, IL",
            email: "robert@enterprise.com",
            phone: None,
            status: S::New,
            intent: 40,
            signals: &[],
            tags: &[],
            campaign: C::None,
            linkedin: L::NotConnected,
        },
        LeadSeed {
            id: "11",
            name: "Patricia Wu",
            title: "VP Marketing",
            company: "Innovate",
            location: "Seattle, WA",
            email: "patricia@innovate.co",
            phone: None,
            status: S::New,
            intent: 60,
            signals: &["Conference Speaker"],
            tags: &[],
            campaign: C::None,
            linkedin: L::Pending,
        },
        LeadSeed {
            id: "12",
            name: "Kevin O'Connell",
            title: "Sales Manager",
            company: "TechFlow",
            location: "Austin, TX",
            email: "kevin@techflow.io",
            phone: None,
            status: S::New,
            intent: 55,
            signals: &[],
            tags: &[],
            campaign: C::None,
            linkedin: L::NotConnected,
        },
    ];

    let mut leads: Vec<Lead> = seeds.into_iter().map(LeadSeed::build).collect();
    if let Some(first) = leads.first_mut() {
        first.notes = Some("Met at SaaS conference 2024.".to_string());
    }
    leads
}

#[allow(clippy::too_many_arguments)]
fn company(
    id: &str,
    name: &str,
    industry: &str,
    employees: &str,
    location: &str,
    revenue: &str,
    website: &str,
    description: &str,
    phone: &str,
    tech_stack: &[&str],
    tier: CompanyTier,
    intent: u8,
    signals: &[&str],
) -> Company {
    Company {
        id: CompanyId(id.to_string()),
        name: name.to_string(),
        industry: industry.to_string(),
        employees: employees.to_string(),
        location: location.to_string(),
        revenue: revenue.to_string(),
        logo_url: format!(
            "https://ui-avatars.com/api/?name={}&color=fff&rounded=true&bold=true",
            name.replace(' ', "+")
        ),
        website: Some(website.to_string()),
        linkedin_url: None,
        description: Some(description.to_string()),
        phone: Some(phone.to_string()),
        tech_stack: strings(tech_stack),
        tier: Some(tier),
        tags: Vec::new(),
        intent_score: Some(intent),
        signals: strings(signals),
    }
}

fn companies() -> Vec<Company> {
    vec![
        company(
            "1",
            "TechFlow",
            "Software",
            "50-200",
            "San Francisco, CA",
            "$10M",
            "www.techflow.io",
            "Leading provider of workflow automation software for enterprise teams. Recently raised Series B funding.",
            "+1 (415) 555-0100",
            &["React", "Node.js", "AWS", "PostgreSQL"],
            CompanyTier::Tier1,
            90,
            &["Funding", "Hiring"],
        ),
        company(
            "2",
            "Growth.ai",
            "Marketing",
            "10-50",
            "New York, NY",
            "$5M",
            "www.growth.ai",
            "AI-powered marketing analytics platform for e-commerce brands.",
            "+1 (212) 555-0199",
            &["Python", "TensorFlow", "GCP"],
            CompanyTier::Tier2,
            75,
            &["New Product Launch"],
        ),
        company(
            "3",
            "Enterprise Corp",
            "Finance",
            "1000+",
            "Chicago, IL",
            "$500M",
            "www.enterprisecorp.com",
            "Global financial services firm specializing in corporate investment.",
            "+1 (312) 555-0555",
            &["Java", "Oracle", "Angular"],
            CompanyTier::Tier1,
            50,
            &[],
        ),
        company(
            "4",
            "DevOps Sol",
            "IT Services",
            "200-500",
            "Remote",
            "$25M",
            "www.devops-sol.net",
            "Cloud infrastructure management and DevOps consulting.",
            "+1 (800) 555-0000",
            &["Kubernetes", "Docker", "Azure", "Go"],
            CompanyTier::Tier2,
            65,
            &[],
        ),
        company(
            "5",
            "Innovate",
            "Software",
            "50-200",
            "Seattle, WA",
            "$15M",
            "www.innovate.co",
            "Product management software for remote teams.",
            "+1 (206) 555-0123",
            &["Ruby", "Rails", "Vue.js"],
            CompanyTier::Tier2,
            60,
            &[],
        ),
        company(
            "6",
            "StartUp Inc",
            "Consumer Goods",
            "1-10",
            "Austin, TX",
            "$1M",
            "www.startup.com",
            "Direct-to-consumer sustainable goods.",
            "+1 (512) 555-0987",
            &["Shopify", "Klaviyo"],
            CompanyTier::Tier3,
            45,
            &[],
        ),
        company(
            "7",
            "Creative Studio",
            "Design",
            "11-50",
            "Los Angeles, CA",
            "$3M",
            "www.creative.com",
            "Award-winning design agency.",
            "+1 (323) 555-0000",
            &["Adobe", "Figma", "Webflow"],
            CompanyTier::Tier3,
            55,
            &[],
        ),
    ]
}

fn saved_searches() -> Vec<SavedSearch> {
    vec![
        SavedSearch {
            id: "s1".to_string(),
            name: "VP Sales in Tech".to_string(),
            filters: FilterState {
                job_titles: "VP Sales".to_string(),
                industry: "Software".to_string(),
                ..FilterState::default()
            },
        },
        SavedSearch {
            id: "s2".to_string(),
            name: "High Intent Founders".to_string(),
            filters: FilterState {
                management_levels: BTreeSet::from([ManagementLevel::CLevel]),
                intent: Some(IntentBucket::High),
                ..FilterState::default()
            },
        },
    ]
}

fn lists() -> Vec<UserList> {
    [("l1", "Q3 Outreach"), ("l2", "Competitors"), ("l3", "Conference Leads")]
        .into_iter()
        .map(|(id, name)| UserList {
            id: ListId(id.to_string()),
            name: name.to_string(),
        })
        .collect()
}

fn deal(id: &str, title: &str, value: u64, stage: DealStage, lead_id: &str, lead: &str) -> Deal {
    Deal {
        id: DealId(id.to_string()),
        title: title.to_string(),
        value,
        stage,
        lead_id: LeadId(lead_id.to_string()),
        lead_name: lead.to_string(),
    }
}

fn deals() -> Vec<Deal> {
    vec![
        deal("1", "Enterprise License", 25_000, DealStage::InProgress, "1", "Shivtej Magar"),
        deal("2", "Q3 Marketing Retainer", 15_000, DealStage::ToContact, "2", "John Doe"),
        deal("3", "Consulting Project", 5_000, DealStage::Closed, "3", "Sarah Smith"),
        deal("4", "Pilot Program", 2_000, DealStage::ToContact, "4", "Michael Brown"),
    ]
}

fn step(id: &str, order: u32, action: StepAction) -> SequenceStep {
    SequenceStep {
        id: StepId(id.to_string()),
        order,
        delay_days: None,
        variant_label: None,
        action,
    }
}

fn wait(id: &str, order: u32, days: u32) -> SequenceStep {
    SequenceStep {
        delay_days: Some(days),
        ..step(id, order, StepAction::Wait)
    }
}

fn email(content: &str) -> StepAction {
    StepAction::Email {
        content: content.to_string(),
    }
}

fn message(content: &str) -> StepAction {
    StepAction::LinkedinMessage {
        content: content.to_string(),
    }
}

fn sequences() -> Vec<Sequence> {
    vec![
        Sequence {
            id: SequenceId("1".to_string()),
            name: "Cold Outreach - CTOs".to_string(),
            active: true,
            stats: SequenceStats {
                sent: 120,
                opened: 45,
                replied: 12,
            },
            steps: vec![
                step("s1", 1, StepAction::LinkedinConnect { note: None }),
                wait("s2", 2, 1),
                SequenceStep {
                    variant_label: Some("A".to_string()),
                    ..step("s3", 3, message("Thanks for connecting!"))
                },
                wait("s4", 4, 2),
                step("s5", 5, email("Checking in regarding...")),
            ],
        },
        Sequence {
            id: SequenceId("2".to_string()),
            name: "Webinar Follow-up".to_string(),
            active: false,
            stats: SequenceStats {
                sent: 300,
                opened: 150,
                replied: 5,
            },
            steps: vec![
                step("s1", 1, email("Here is the recording...")),
                wait("s2", 2, 3),
                step("s3", 3, email("Any questions?")),
            ],
        },
    ]
}

fn campaigns() -> Vec<LinkedInCampaign> {
    vec![
        LinkedInCampaign {
            id: CampaignId("li-1".to_string()),
            name: "CTO Outreach - Series A".to_string(),
            status: CampaignState::Active,
            target_audience: "CTOs in San Francisco".to_string(),
            stats: CampaignStats {
                sent: 145,
                accepted: 62,
                replied: 18,
            },
            steps: vec![
                step("s1", 1, StepAction::LinkedinVisit),
                wait("s2", 2, 1),
                step(
                    "s3",
                    3,
                    StepAction::connect("Hi {{firstName}}, saw you're hiring engineers. Let's connect."),
                ),
                wait("s4", 4, 2),
                step(
                    "s5",
                    5,
                    message("Thanks for connecting! Quick question about your tech stack..."),
                ),
            ],
        },
        LinkedInCampaign {
            id: CampaignId("li-2".to_string()),
            name: "Hiring Managers - Q3".to_string(),
            status: CampaignState::Paused,
            target_audience: "VPs of Sales".to_string(),
            stats: CampaignStats {
                sent: 300,
                accepted: 89,
                replied: 5,
            },
            steps: vec![
                step("s1", 1, StepAction::connect("I admire your work at {{company}}!")),
                wait("s2", 2, 3),
                step("s3", 3, message("Would love to chat.")),
            ],
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn meetings() -> Vec<Meeting> {
    let seeds = [
        ("1", "Demo with TechFlow", 25, "10:00", 30, MeetingKind::Zoom, "1", "Shivtej Magar"),
        ("2", "Follow-up Call", 26, "14:30", 15, MeetingKind::Phone, "2", "John Doe"),
        ("3", "Contract Review", 27, "16:00", 60, MeetingKind::GoogleMeet, "3", "Sarah Smith"),
    ];

    seeds
        .into_iter()
        .map(|(id, title, day, time, duration, kind, lead_id, lead_name)| Meeting {
            id: MeetingId(id.to_string()),
            title: title.to_string(),
            date: date(2023, 10, day),
            time: time.to_string(),
            duration_minutes: duration,
            kind,
            lead_id: Some(LeadId(lead_id.to_string())),
            lead_name: Some(lead_name.to_string()),
            notes: None,
        })
        .collect()
}

fn tasks() -> Vec<Task> {
    let related = |id: &str, name: &str| (Some(id.to_string()), Some(name.to_string()));
    let seeds = [
        (
            "1",
            "Call Shivtej Magar about Q3 goals",
            "Today",
            TaskPriority::High,
            false,
            TaskKind::Call,
            related("1", "Shivtej Magar"),
        ),
        (
            "2",
            "Prepare contract for TechFlow",
            "Tomorrow",
            TaskPriority::High,
            false,
            TaskKind::Todo,
            related("1", "TechFlow"),
        ),
        (
            "3",
            "Follow up with Sarah Smith",
            "Today",
            TaskPriority::Medium,
            false,
            TaskKind::Email,
            related("3", "Sarah Smith"),
        ),
        (
            "4",
            "Review Q4 Marketing Deck",
            "Friday",
            TaskPriority::Low,
            true,
            TaskKind::Todo,
            (None, None),
        ),
    ];

    seeds
        .into_iter()
        .map(
            |(id, title, due, priority, completed, kind, (related_id, related_name))| Task {
                id: TaskId(id.to_string()),
                title: title.to_string(),
                due: due.to_string(),
                priority,
                completed,
                kind,
                related_id,
                related_name,
            },
        )
        .collect()
}

fn emails() -> Vec<EmailMessage> {
    vec![
        EmailMessage {
            id: EmailId("e1".to_string()),
            from: "John Doe".to_string(),
            subject: "Re: Meeting next week".to_string(),
            preview: "Hi Jane, that time works for me...".to_string(),
            content: Some("Hi Jane,\n\nThat time works for me. See you then!\n\nBest,\nJohn".to_string()),
            time: "10:30 AM".to_string(),
            unread: true,
            is_reply: true,
        },
        EmailMessage {
            id: EmailId("e2".to_string()),
            from: "Sarah Smith".to_string(),
            subject: "Project Proposal".to_string(),
            preview: "Attached is the proposal we discussed.".to_string(),
            content: Some("Hi Jane,\n\nPlease find the attached proposal.\n\nThanks,\nSarah".to_string()),
            time: "Yesterday".to_string(),
            unread: false,
            is_reply: false,
        },
        EmailMessage {
            id: EmailId("e3".to_string()),
            from: "Support".to_string(),
            subject: "Ticket #1234 Update".to_string(),
            preview: "Your issue has been resolved.".to_string(),
            content: Some("Your ticket has been closed.".to_string()),
            time: "Oct 22".to_string(),
            unread: false,
            is_reply: true,
        },
    ]
}

fn linkedin_messages() -> Vec<LinkedInMessage> {
    [
        ("m1", "Alice Chen", "Thanks for reaching out! Yes, we are hiring.", "10m ago", true),
        ("m2", "Bob Wilson", "Sure, let's connect next week.", "2h ago", true),
        ("m3", "Carol Danvers", "I'm not interested right now, thanks.", "1d ago", false),
    ]
    .into_iter()
    .map(|(id, sender, content, time, unread)| LinkedInMessage {
        id: MessageId(id.to_string()),
        sender_name: sender.to_string(),
        sender_avatar: format!(
            "https://ui-avatars.com/api/?name={}&background=random",
            sender.replace(' ', "+")
        ),
        content: content.to_string(),
        time: time.to_string(),
        unread,
        is_reply: true,
    })
    .collect()
}

fn posts() -> Vec<ContentPost> {
    vec![
        ContentPost {
            id: PostId("p1".to_string()),
            title: "Product Launch Teaser".to_string(),
            platform: Platform::Linkedin,
            day: 2,
            time: "10:00 AM".to_string(),
        },
        ContentPost {
            id: PostId("p2".to_string()),
            title: "Industry News Thread".to_string(),
            platform: Platform::Twitter,
            day: 4,
            time: "2:00 PM".to_string(),
        },
    ]
}

fn profiles() -> Vec<UserProfile> {
    vec![UserProfile {
        id: "u1".to_string(),
        auth_id: DEMO_AUTH_ID.to_string(),
        name: "Jane Doe".to_string(),
        email: "jane.doe@nexus.com".to_string(),
        role: UserRole::Admin,
        avatar_url: Some("https://picsum.photos/id/64/200/200".to_string()),
        phone: Some("+1 (555) 010-9999".to_string()),
        location: None,
        timezone: None,
        language: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::pipeline::summarize;

    #[test]
    fn demo_data_is_internally_consistent() {
        let fixtures = Fixtures::demo();
        assert_eq!(fixtures.leads.len(), 12);
        assert_eq!(fixtures.companies.len(), 7);

        for deal in &fixtures.deals {
            let lead = fixtures
                .leads
                .iter()
                .find(|lead| lead.id == deal.lead_id)
                .expect("deal references a seeded lead");
            assert_eq!(lead.name, deal.lead_name);
        }

        for meeting in &fixtures.meetings {
            assert!(meeting.start_time().is_some(), "{} has HH:MM time", meeting.id);
        }

        let summary = summarize(&fixtures.deals);
        assert_eq!(summary.total_pipeline, 47_000);
    }

    #[test]
    fn step_orders_are_contiguous() {
        let fixtures = Fixtures::demo();
        let step_lists = fixtures
            .sequences
            .iter()
            .map(|sequence| &sequence.steps)
            .chain(fixtures.campaigns.iter().map(|campaign| &campaign.steps));
        for steps in step_lists {
            let orders: Vec<u32> = steps.iter().map(|step| step.order).collect();
            let expected: Vec<u32> = (1..=steps.len() as u32).collect();
            assert_eq!(orders, expected);
        }
    }
}
