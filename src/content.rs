//! Hardcoded page copy. Nothing here is mutated after definition.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlogPost {
    pub date: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub const TEAM_MEMBERS: &[TeamMember] = &[
    TeamMember {
        name: "Sebastien",
        role: "CEO",
        bio: "Visionary leader driving Kodara's strategic direction and growth.",
    },
    TeamMember {
        name: "Rob",
        role: "CTO",
        bio: "Technical mastermind architecting cutting-edge solutions.",
    },
    TeamMember {
        name: "Gabe",
        role: "CFO",
        bio: "Financial strategist ensuring sustainable growth and profitability.",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "WEB DESIGN",
        description: "Brutalist aesthetics meet functional excellence. We craft digital experiences that challenge conventions.",
    },
    Service {
        title: "TECHNICAL CONSULTING",
        description: "Strategic guidance for complex technical challenges. We architect solutions that scale.",
    },
];

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        date: "2024.01",
        title: "THE BEGINNING",
        content: "Three engineers. One vision. Zero compromise.",
    },
    BlogPost {
        date: "2024.06",
        title: "FIRST MILLION",
        content: "Breaking barriers. Shattering expectations. Kodara reaches unprecedented heights.",
    },
    BlogPost {
        date: "2024.12",
        title: "GLOBAL EXPANSION",
        content: "From garage to global. The meteoric rise continues.",
    },
];

pub const CONTACT: ContactDetails = ContactDetails {
    email: "hello@kodara.tech",
    phone: "+1 (555) 123-4567",
    location: "San Francisco, CA",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_is_listed_in_order_with_literal_roles() {
        let roles: Vec<_> = TEAM_MEMBERS.iter().map(|m| (m.name, m.role)).collect();
        assert_eq!(roles, vec![("Sebastien", "CEO"), ("Rob", "CTO"), ("Gabe", "CFO")]);
    }

    #[test]
    fn blog_posts_are_chronological() {
        let dates: Vec<_> = BLOG_POSTS.iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(BLOG_POSTS[1].title, "FIRST MILLION");
    }

    #[test]
    fn services_keep_uppercase_titles() {
        assert!(SERVICES.iter().all(|s| s.title == s.title.to_uppercase()));
        assert_eq!(SERVICES.len(), 2);
    }
}
