pub const SITE_NAME: &str = "TEDxMaitama";
pub const SITE_DESCRIPTION: &str = "Ideas worth spreading in Maitama, Abuja, Nigeria";
pub const CONTACT_EMAIL: &str = "info@tedxmaitama.com";
pub const CONTACT_ADDRESS: &str = "Maitama, Abuja, Nigeria";

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Twitter", href: "https://twitter.com/tedxmaitama" },
    SocialLink { label: "Instagram", href: "https://instagram.com/tedxmaitama" },
    SocialLink { label: "Facebook", href: "https://facebook.com/tedxmaitama" },
    SocialLink { label: "YouTube", href: "https://youtube.com/tedxmaitama" },
];

pub struct Contact {
    pub name: &'static str,
    pub phone: &'static str,
    pub role: &'static str,
}

pub static CONTACTS: [Contact; 3] = [
    Contact { name: "Chukwunenye", phone: "+234 708 703 6843", role: "Partnerships" },
    Contact { name: "Paschal", phone: "+234 816 275 1386", role: "Operations Lead" },
    Contact { name: "Josephine", phone: "+234 903 816 5340", role: "Communications" },
];

pub struct InvolvementOption {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub static GET_INVOLVED: [InvolvementOption; 3] = [
    InvolvementOption {
        title: "Volunteer with us",
        description: "Help us bring TEDxMaitama to life, from event day logistics to speaker care.",
        href: "/get-involved/volunteer",
    },
    InvolvementOption {
        title: "Partner with us",
        description: "Support ideas worth spreading and connect your brand with our community.",
        href: "/get-involved/partner",
    },
    InvolvementOption {
        title: "Speak at our event",
        description: "Have an idea worth spreading? Tell us about it.",
        href: "/get-involved/speak",
    },
];

pub const WHAT_IS_TEDX: &str = "In the spirit of ideas worth spreading, TED created the TEDx program: \
local, self-organized events that bring people together to share a TED-like experience. \
At TEDxMaitama, TED Talks videos and live speakers come together to spark deep dialogue, \
creativity, and connection within an intimate setting.";
