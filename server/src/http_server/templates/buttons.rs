use maud::{html, Markup, Render};

/// A pill shaped link in the brand colour.
pub struct LinkButton {
    inner: Markup,
    href: String,
    new_tab: bool,
    additional_classes: Option<String>,
}

impl LinkButton {
    pub fn primary(inner: Markup, href: impl Into<String>) -> Self {
        Self {
            inner,
            href: href.into(),
            new_tab: false,
            additional_classes: None,
        }
    }

    /// Opens the link in a new tab without handing it our window.
    pub fn in_new_tab(mut self) -> Self {
        self.new_tab = true;
        self
    }

    pub fn with_classes(mut self, classes: &str) -> Self {
        self.additional_classes = Some(classes.to_string());
        self
    }
}

impl Render for LinkButton {
    fn render(&self) -> Markup {
        let mut classes = vec![
            "bg-brand",
            "hover:bg-brand-dark",
            "text-white",
            "px-6",
            "py-2",
            "rounded-full",
            "font-semibold",
            "shadow",
            "transition-all",
        ];

        if let Some(additional_classes) = &self.additional_classes {
            classes.push(additional_classes);
        }
        let classes = classes.join(" ");

        html! {
          @if self.new_tab {
            a href=(self.href) class=(classes) target="_blank" rel="noopener noreferrer" {
              (self.inner)
            }
          } @else {
            a href=(self.href) class=(classes) {
              (self.inner)
            }
          }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tab_links_are_isolated() {
        let rendered = LinkButton::primary(html!("Call"), "tel:+919455598050")
            .in_new_tab()
            .render()
            .into_string();

        assert!(rendered.contains(r#"href="tel:+919455598050""#));
        assert!(rendered.contains(r#"target="_blank""#));
        assert!(rendered.contains(r#"rel="noopener noreferrer""#));
        assert!(rendered.contains(">Call</a>"));
    }

    #[test]
    fn test_extra_classes_are_appended() {
        let rendered = LinkButton::primary(html!("Home"), "/")
            .with_classes("mt-4")
            .render()
            .into_string();

        assert!(rendered.contains("transition-all mt-4"));
        assert!(!rendered.contains("target="));
    }
}
