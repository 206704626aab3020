//! Copy rendered by the brochure page.

pub struct NavLink {
    pub section: &'static str,
    pub label: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
}

pub struct Member {
    pub name: &'static str,
    pub position: &'static str,
    pub bio: &'static str,
    pub photo: &'static str,
}

pub struct Customer {
    pub name: &'static str,
    pub testimonial: &'static str,
    pub logo: &'static str,
    pub rating: u8,
}

impl Customer {
    pub fn stars(&self) -> String {
        "★".repeat(self.rating.min(5) as usize)
    }
}

pub struct ContactDetail {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const COMPANY: &str = "SEAWORTH TRADERS";
pub const TAGLINE: &str = "Global Procurement & Trading";
pub const PHONE: &str = "(+92) 320-200-1183";
pub const EMAIL: &str = "info@seaworthtraders.com";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { section: "home", label: "Home" },
    NavLink { section: "about", label: "About" },
    NavLink { section: "services", label: "Services" },
    NavLink { section: "team", label: "Team" },
    NavLink { section: "customers", label: "Customers" },
    NavLink { section: "contact", label: "Contact" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { section: "about", label: "About Us" },
    NavLink { section: "services", label: "Services" },
    NavLink { section: "team", label: "Team" },
    NavLink { section: "contact", label: "Contact" },
];

pub const STATS: &[Stat] = &[
    Stat { value: "4+", label: "Years of Excellence" },
    Stat { value: "100+", label: "Successful Projects" },
    Stat { value: "50+", label: "Satisfied Clients" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Global Reach",
        description: "International suppliers and partners",
    },
    Feature {
        title: "Defense Expertise",
        description: "Specialized military equipment",
    },
    Feature {
        title: "Industrial Solutions",
        description: "Complete industrial services",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Chemicals",
        description: "We offer a diverse range of chemicals sourced globally to meet our clients' specific needs",
        image: "https://images.unsplash.com/photo-1629447388369-760612337eff?w=800&q=80",
        alt: "Industrial Chemicals",
    },
    Service {
        title: "Defense Store",
        description: "We specialize in critical military equipment, including chaff and flare countermeasures.",
        image: "https://images.unsplash.com/photo-1726168166503-0b57ad445ecd?w=800&q=80",
        alt: "Fighter Jet Defense Technology",
    },
    Service {
        title: "Global Procurement",
        description: "Our team expertly sources equipment and materials from international suppliers, optimizing your supply chain.",
        image: "https://images.unsplash.com/photo-1518527989017-5baca7a58d3c?w=800&q=80",
        alt: "Maritime Shipping",
    },
    Service {
        title: "Logistics Solutions",
        description: "Innovative packaging and transportation services for heavy equipment and specialized cargo",
        image: "https://images.unsplash.com/photo-1494412519320-aa613dfb7738?w=800&q=80",
        alt: "Container Port",
    },
    Service {
        title: "Power Generation",
        description: "Comprehensive installation, maintenance, and repair services for industrial generators.",
        image: "https://images.unsplash.com/photo-1509390144018-eeaf65052242?w=800&q=80",
        alt: "Power Generation",
    },
    Service {
        title: "Garments Sector",
        description: "Tailored manufacturing of equipment for military and industrial applications, meeting precise specifications.",
        image: "https://images.unsplash.com/photo-1647427060118-4911c9821b82?w=800&q=80",
        alt: "Manufacturing",
    },
];

pub const TEAM: &[Member] = &[
    Member {
        name: "Noman Khan Niazi",
        position: "Chief Executive Officer",
        bio: "Noman Khan brings a wealth of expertise with 20+ years in the industry. Their strategic thinking and dedication to excellence have been crucial in driving our company's success and expanding our global presence.",
        photo: "/static/images/team/noman-khan-niazi.svg",
    },
    Member {
        name: "Muhammad Shafique",
        position: "Managing Director",
        bio: "With over 30+ years of industry experience, Muhammad Shafique has been instrumental in shaping our company's vision and growth strategy. Their innovative approach and leadership skills have helped establish our position as a market leader.",
        photo: "/static/images/team/muhammad-shafique.svg",
    },
];

pub const CUSTOMERS: &[Customer] = &[
    Customer {
        name: "Pakistan Army",
        testimonial: "Pakistan Army has consistently praised our defense garments for their durability and comfort, ensuring safety without compromising on mobility.",
        logo: "/static/images/customers/pakistan-army.svg",
        rating: 5,
    },
    Customer {
        name: "Pakistan Navy",
        testimonial: "Pakistan Navy appreciates the quality of our helmets, highlighting their lightweight design and robust protection for personnel in high-risk areas.",
        logo: "/static/images/customers/pakistan-navy.svg",
        rating: 5,
    },
    Customer {
        name: "Pakistan International Airlines",
        testimonial: "Pakistan International Airlines is satisfied with our chemical solutions, recognizing their effectiveness and adherence to safety standards in hazardous environments.",
        logo: "/static/images/customers/pia.svg",
        rating: 5,
    },
    Customer {
        name: "Pakistan Air Force",
        testimonial: "Pakistan Airforce has found our generators to be reliable in critical situations, providing essential power with minimal downtime.",
        logo: "/static/images/customers/pakistan-air-force.svg",
        rating: 5,
    },
    Customer {
        name: "Pakistan Ordinance Factory",
        testimonial: "Pakistan Ordinance Factory values our comprehensive range of defense products, noticing that they meet all operational requirements effectively.",
        logo: "/static/images/customers/pof.svg",
        rating: 5,
    },
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        title: "Our Location",
        lines: &[
            "PLOT NO.278-A, 2ND FLOOR, GATE NO.05,",
            "STREET NO.2, QUAID-E-AZAM TRUCK",
            "STAND, HAWKSBAY ROAD, KARACHI",
        ],
    },
    ContactDetail {
        title: "Contact/WhatsApp Us",
        lines: &["(+92) 320-200-1183", "(+92) 331-702-8970"],
    },
    ContactDetail {
        title: "Send your message",
        lines: &["info@seaworthtraders.com"],
    },
    ContactDetail {
        title: "Our Working Hours",
        lines: &["Mon-Sat 8:00 AM to 5:00 PM"],
    },
];
