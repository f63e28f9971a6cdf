use maud::{html, Markup, Render};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactIcon {
    Phone,
    WhatsApp,
    Envelope,
}

impl ContactIcon {
    pub fn classes(self) -> &'static str {
        match self {
            ContactIcon::Phone => "fa-solid fa-phone",
            ContactIcon::WhatsApp => "fa-brands fa-whatsapp",
            ContactIcon::Envelope => "fa-solid fa-envelope",
        }
    }
}

/// A piece of a card description. Descriptions are short runs of text with
/// the occasional line break and highlighted phone number or address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Text(&'static str),
    Strong(&'static str),
    Break,
}

impl Render for Fragment {
    fn render(&self) -> Markup {
        match self {
            Fragment::Text(text) => html! { (text) },
            Fragment::Strong(text) => html! { strong { (text) } },
            Fragment::Break => html! { br; },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactButton {
    pub text: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: ContactIcon,
    pub title: &'static str,
    pub description: &'static [Fragment],
    pub button: ContactButton,
}

impl ContactMethod {
    /// The description flattened to plain text, line breaks become spaces.
    pub fn plain_description(&self) -> String {
        let mut out = String::new();

        for fragment in self.description {
            match fragment {
                Fragment::Text(text) | Fragment::Strong(text) => out.push_str(text),
                Fragment::Break => out.push(' '),
            }
        }

        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: ContactIcon::Phone,
        title: "Speak to Us",
        description: &[
            Fragment::Text("For queries, support & complaints, "),
            Fragment::Break,
            Fragment::Text("contact "),
            Fragment::Strong("+91 9455598050"),
        ],
        button: ContactButton {
            text: "Call",
            link: "tel:+919455598050",
        },
    },
    ContactMethod {
        icon: ContactIcon::WhatsApp,
        title: "Chat with Us",
        description: &[
            Fragment::Text("Drop us a message for quick "),
            Fragment::Break,
            Fragment::Text(" Whatsapp assistance"),
        ],
        button: ContactButton {
            text: "WhatsApp",
            link: "https://wa.me/919455598050",
        },
    },
    ContactMethod {
        icon: ContactIcon::Envelope,
        title: "Write to Us",
        description: &[
            Fragment::Text("For inquiries, quotes or export details, "),
            Fragment::Break,
            Fragment::Text("email us at: "),
            Fragment::Strong("uppumpslimited@gmail.com"),
        ],
        button: ContactButton {
            text: "Email",
            link: "mailto:uppumpslimited@gmail.com",
        },
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfficeAddress {
    pub label: &'static str,
    pub address: &'static str,
}

pub const OFFICE_ADDRESSES: &[OfficeAddress] = &[
    OfficeAddress {
        label: "Delhi Office (Registered Office)",
        address: "4866/1, 24 Second Floor, Harbans Singh Street, Ansari Road, Darya Ganj, New Delhi - 110002",
    },
    OfficeAddress {
        label: "Kanpur Office",
        address: "1-B, Dadanagar, Kanpur, 208022",
    },
    OfficeAddress {
        label: "Bilaspur Office",
        address: "Village Basiya, Silphari Road, Ph. No. 42, Kh. No. 369/2, Block Bilha, Dist. Bilaspur, Chhattisgarh - 495004",
    },
    OfficeAddress {
        label: "Gwalior Office",
        address: "26B, Plot Industrial Area, Maharajpura, Morar, Gwalior, Madhya Pradesh - 474020",
    },
];
