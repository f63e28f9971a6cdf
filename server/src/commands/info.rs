use crate::contact::{CONTACT_METHODS, OFFICE_ADDRESSES};

pub(crate) fn directory_listing() -> String {
    let mut out = String::from("Contact Methods:\n");

    for method in CONTACT_METHODS {
        let title = method.title;
        let description = method.plain_description();
        let text = method.button.text;
        let link = method.button.link;

        out.push_str(&format!("  {title}: {description}\n    {text} -> {link}\n"));
    }

    out.push_str("\nOffices:\n");
    for office in OFFICE_ADDRESSES {
        let label = office.label;
        let address = office.address;

        out.push_str(&format!("  {label}: {address}\n"));
    }

    out
}

pub(crate) fn print_info() {
    println!("\n\n");
    print!("{}", directory_listing());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_mentions_every_entry() {
        let listing = directory_listing();

        assert!(listing.contains("Speak to Us: For queries, support & complaints, contact +91 9455598050"));
        assert!(listing.contains("WhatsApp -> https://wa.me/919455598050"));
        assert!(listing.contains("Email -> mailto:uppumpslimited@gmail.com"));
        assert!(listing.contains("Kanpur Office: 1-B, Dadanagar, Kanpur, 208022"));

        let offices = listing.split("\nOffices:\n").nth(1).unwrap();
        assert_eq!(offices.lines().count(), 4);
    }
}
