use maud::{html, Markup, DOCTYPE};

pub(crate) mod buttons;

pub const BRAND_COLOR: &str = "#2a6e9e";

pub fn head(title: &str) -> Markup {
    html! {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (title) }

        script src="https://cdn.tailwindcss.com" {}
        link rel="stylesheet" href="/styles/contact.css" {}

        link rel="preconnect" href="https://fonts.googleapis.com" {}
        link rel="preconnect" href="https://fonts.gstatic.com" crossorigin {}
        link href="https://fonts.googleapis.com/css2?family=Poppins:wght@400;500&family=Raleway:wght@700;800&display=swap" rel="stylesheet" {}

        link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" crossorigin="anonymous";
      }
    }
}

pub fn base(title: &str, inner: Markup) -> Markup {
    html! {
      (DOCTYPE)
      html lang="en" {
        (head(title))

        body class="bg-slate-50 min-h-screen" {
          (inner)
        }
      }
    }
}
