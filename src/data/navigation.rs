pub struct MenuItem {
    pub label: &'static str,
    pub href: &'static str,
    pub children: &'static [MenuItem],
}

pub const MAIN_NAVIGATION: &[MenuItem] = &[
    MenuItem { label: "About", href: "/about", children: &[] },
    MenuItem { label: "Events", href: "/events", children: &[] },
    MenuItem { label: "Speakers", href: "/speakers", children: &[] },
    MenuItem { label: "Blog", href: "/blog", children: &[] },
    MenuItem { label: "Partners", href: "/partners", children: &[] },
    MenuItem { label: "Contact", href: "/contact", children: &[] },
    MenuItem {
        label: "Get Involved",
        href: "/get-involved",
        children: &[
            MenuItem { label: "Volunteer With Us", href: "/get-involved/volunteer", children: &[] },
            MenuItem { label: "Partner With Us", href: "/get-involved/partner", children: &[] },
            MenuItem { label: "Speak at TEDxMaitama", href: "/get-involved/speak", children: &[] },
        ],
    },
];

pub const TICKETS: MenuItem = MenuItem { label: "Get Tickets", href: "/tickets", children: &[] };

/// Top-level entries without a submenu, as listed in the footer.
pub fn footer_links() -> impl Iterator<Item = &'static MenuItem> {
    MAIN_NAVIGATION.iter().filter(|item| item.children.is_empty())
}
