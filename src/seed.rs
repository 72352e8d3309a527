//! Compiled-in seed data.
//!
//! The board has no persistence layer, so every process starts from this
//! snapshot of the community: a leaderboard roster, a shelf of
//! resources, a handful of suggestions, and two open requests.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    domain::{
        Branch, HealthTuning, Listing, Resource, ResourceRequest, Semester, Suggestion, User,
        resource::points_for_title,
    },
    store::{Clock, CommunityStore},
};

/// Stored health score the seeded community starts from.
const SEED_HEALTH: u8 = 72;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("seed dates are valid")
}

fn semester(value: u8) -> Semester {
    Semester::new(value).expect("seed semesters are in range")
}

/// Builds a store seeded with the compiled-in community snapshot.
///
/// Statistics are derived from the seeded collections; only the health
/// score and its last-activity date are seeded directly.
pub fn community<C: Clock>(tuning: HealthTuning, clock: C) -> CommunityStore<C> {
    let resources = resources();
    let last_activity = resources
        .iter()
        .map(|r| r.date_added)
        .max()
        .unwrap_or_else(|| date(1, 15));

    CommunityStore::from_parts(
        resources,
        users(),
        suggestions(),
        requests(),
        last_activity,
        SEED_HEALTH,
        tuning,
        clock,
    )
}

fn user(
    name: &str,
    branch: Branch,
    sem: u8,
    shared: u32,
    claimed: u32,
    value: u32,
    points: u32,
) -> User {
    User {
        name: name.to_string(),
        branch,
        semester: semester(sem),
        resources_shared: shared,
        resources_claimed: claimed,
        total_value: value,
        points,
    }
}

fn users() -> Vec<User> {
    vec![
        user("Arjun Singh", Branch::Cse, 6, 12, 3, 2500, 85),
        user("Priya Sharma", Branch::Ece, 7, 8, 5, 1800, 62),
        user("Rohit Kumar", Branch::Me, 5, 15, 2, 3200, 90),
        user("Simran Kaur", Branch::Cse, 8, 6, 7, 1200, 55),
        user("Mandeep Singh", Branch::Ce, 4, 10, 4, 2100, 70),
    ]
}

#[allow(clippy::too_many_arguments)]
fn resource(
    title: &str,
    description: &str,
    branch: Branch,
    sem: u8,
    listing: Listing,
    offered_by: &str,
    added: NaiveDate,
    message: &str,
    handover: &str,
    contact: &str,
    pages: Option<u32>,
) -> Resource {
    Resource {
        id: Uuid::now_v7(),
        title: title.to_string(),
        description: description.to_string(),
        branch,
        semester: semester(sem),
        listing,
        offered_by: offered_by.to_string(),
        date_added: added,
        claimed_by: None,
        motivational_message: message.to_string(),
        handover_instructions: handover.to_string(),
        contact_info: contact.to_string(),
        pages,
        points: points_for_title(title),
    }
}

fn resources() -> Vec<Resource> {
    vec![
        resource(
            "Mini Drafter",
            "Good condition mini drafter with all accessories. Perfect for engineering graphics.",
            Branch::Cse,
            1,
            Listing::Sell { price: 200 },
            "Arjun Singh",
            date(1, 15),
            "Engineering graphics is the foundation! Practice daily and you'll master it.",
            "Available for pickup from CSE department or hostel room 204",
            "WhatsApp: +91 98765-43210",
            None,
        ),
        resource(
            "Mini Drafter",
            "Barely used mini drafter set. Includes compass, protractor, and drawing sheets.",
            Branch::Cse,
            1,
            Listing::Donate,
            "Simran Kaur",
            date(1, 14),
            "Sharing is caring! Hope this helps you in your graphics journey.",
            "Can meet at library or CSE lab during evening hours",
            "Telegram: @simran_cse",
            None,
        ),
        resource(
            "Sheet Holder",
            "A4 size sheet holder in excellent condition.",
            Branch::Cse,
            1,
            Listing::Sell { price: 50 },
            "Rohit Kumar",
            date(1, 13),
            "Small tools, big impact! Keep your sheets organized.",
            "Available at mechanical workshop or canteen during lunch",
            "Phone: +91 87654-32109",
            None,
        ),
        resource(
            "Higher Engineering Mathematics",
            "B.S. Grewal textbook with solved examples. Some highlighting but very readable.",
            Branch::Cse,
            1,
            Listing::Sell { price: 300 },
            "Priya Sharma",
            date(1, 12),
            "Math is the language of engineering. Master it and everything becomes easier!",
            "Can deliver to your hostel or meet at ECE department",
            "WhatsApp: +91 76543-21098",
            Some(1238),
        ),
        resource(
            "PYQS - Previous Year Question Papers",
            "Complete collection of previous year papers for all subjects. Digital format.",
            Branch::Cse,
            1,
            Listing::Donate,
            "Mandeep Singh",
            date(1, 11),
            "PYQS are gold! Practice them and ace your exams.",
            "Will share Google Drive link via email or WhatsApp",
            "Email: mandeep.ce@gndu.ac.in",
            None,
        ),
        resource(
            "Data Structures & Algorithms Textbook",
            "Complete textbook with solved examples and practice problems. Excellent condition.",
            Branch::Cse,
            3,
            Listing::Donate,
            "Arjun Singh",
            date(1, 10),
            "This book helped me ace my DSA exam! Hope it helps you too. Keep coding!",
            "Available for pickup from CSE department or hostel",
            "WhatsApp: +91 98765-43210",
            Some(750),
        ),
        resource(
            "PYQS - Previous Year Question Papers",
            "Comprehensive collection of previous year papers for 3rd semester CSE.",
            Branch::Cse,
            3,
            Listing::Donate,
            "Simran Kaur",
            date(1, 9),
            "These papers helped me understand exam patterns. Use them wisely!",
            "Digital copies available via Google Drive link",
            "Telegram: @simran_cse",
            None,
        ),
        resource(
            "Mini Drafter",
            "Standard mini drafter for engineering graphics. Good condition.",
            Branch::Ece,
            1,
            Listing::Sell { price: 180 },
            "Priya Sharma",
            date(1, 8),
            "Graphics skills will help you in circuit design too!",
            "Available at ECE lab or girls hostel common room",
            "WhatsApp: +91 76543-21098",
            None,
        ),
        resource(
            "PYQS - Previous Year Question Papers",
            "Complete PYQS collection for ECE 1st semester.",
            Branch::Ece,
            1,
            Listing::Donate,
            "Priya Sharma",
            date(1, 7),
            "Start your ECE journey with confidence using these papers!",
            "Digital format - will share via email or cloud link",
            "Email: priya.ece@gndu.ac.in",
            None,
        ),
        resource(
            "Digital Electronics Lab Manual",
            "Lab manual with all experiments and circuit diagrams. Perfect for practical sessions.",
            Branch::Ece,
            4,
            Listing::Sell { price: 150 },
            "Priya Sharma",
            date(1, 6),
            "Digital electronics is the foundation of everything! Master it and you'll excel in VLSI.",
            "Can meet at ECE lab during practical hours",
            "WhatsApp: +91 76543-21098",
            Some(220),
        ),
        resource(
            "Mini Drafter",
            "Professional grade mini drafter. Slightly used but in great condition.",
            Branch::Me,
            1,
            Listing::Sell { price: 250 },
            "Rohit Kumar",
            date(1, 5),
            "Precision in drawing leads to precision in engineering!",
            "Available at mechanical workshop or boys hostel",
            "Phone: +91 87654-32109",
            None,
        ),
        resource(
            "PYQS - Previous Year Question Papers",
            "Mechanical Engineering 1st semester previous year papers.",
            Branch::Me,
            1,
            Listing::Donate,
            "Rohit Kumar",
            date(1, 4),
            "These papers will give you insight into exam patterns. Study smart!",
            "Physical copies available at ME department notice board",
            "WhatsApp: +91 87654-32109",
            None,
        ),
    ]
}

fn suggestion(
    message: &str,
    author: &str,
    branch: Branch,
    sem: u8,
    target: u8,
    added: NaiveDate,
    likes: u32,
) -> Suggestion {
    Suggestion {
        id: Uuid::now_v7(),
        message: message.to_string(),
        author: author.to_string(),
        branch,
        semester: semester(sem),
        target_semester: semester(target),
        date_added: added,
        likes,
    }
}

fn suggestions() -> Vec<Suggestion> {
    vec![
        suggestion(
            "Start preparing for placements from 3rd semester. Build projects alongside studies!",
            "Arjun Singh",
            Branch::Cse,
            6,
            3,
            date(1, 10),
            24,
        ),
        suggestion(
            "Join technical societies and participate in competitions. It really helps in personality development.",
            "Priya Sharma",
            Branch::Ece,
            7,
            2,
            date(1, 9),
            18,
        ),
        suggestion(
            "Don't just focus on marks. Understanding concepts is more important for long-term success.",
            "Rohit Kumar",
            Branch::Me,
            5,
            1,
            date(1, 8),
            31,
        ),
        suggestion(
            "For 1st semester, focus on building strong fundamentals in mathematics and physics. They are crucial for all engineering branches.",
            "Simran Kaur",
            Branch::Cse,
            8,
            1,
            date(1, 7),
            15,
        ),
        suggestion(
            "Start learning programming early, even if you're not from CSE. It's becoming essential in all engineering fields.",
            "Mandeep Singh",
            Branch::Ce,
            4,
            2,
            date(1, 6),
            22,
        ),
    ]
}

fn requests() -> Vec<ResourceRequest> {
    vec![
        ResourceRequest {
            id: Uuid::now_v7(),
            title: "Concrete Technology Reference Book".to_string(),
            description: "Need the reference book for the 5th semester concrete technology course."
                .to_string(),
            branch: Branch::Ce,
            semester: semester(5),
            requested_by: "Mandeep Singh".to_string(),
            date_requested: date(1, 13),
            fulfilled: false,
        },
        ResourceRequest {
            id: Uuid::now_v7(),
            title: "Java Programming Notes".to_string(),
            description: "Looking for handwritten or printed notes covering the full Java syllabus."
                .to_string(),
            branch: Branch::Bca,
            semester: semester(3),
            requested_by: "Harpreet Gill".to_string(),
            date_requested: date(1, 11),
            fulfilled: false,
        },
    ]
}
