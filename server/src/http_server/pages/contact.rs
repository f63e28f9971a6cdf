use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    Form,
};
use maud::{html, Markup, Render};

use crate::{
    contact::{
        form::InputKind, ContactField, ContactForm, ContactMethod, ContactSink, Notice,
        NoticeKind, CONTACT_METHODS, OFFICE_ADDRESSES,
    },
    http_server::{
        templates::{base, buttons::LinkButton, BRAND_COLOR},
        ResponseResult,
    },
    ContactConfig,
};

const PAGE_TITLE: &str = "Contact Us | UP Pumps Limited";

/// Each card starts its entrance this much later than the one before it.
const CARD_STAGGER_MS: usize = 200;

const INPUT_CLASSES: &str = "border border-gray-300 rounded px-4 py-2 text-gray-800 focus:outline-none focus:ring-2 focus:ring-[#2a6e9e]";

pub(crate) async fn contact_get(State(config): State<ContactConfig>) -> Markup {
    contact_page(&ContactForm::default(), None, &config)
}

/// Takes the posted fields, tries to deliver them, and shows the page again
/// with the outcome. The fields are only cleared when delivery succeeded.
pub(crate) async fn contact_post(
    State(config): State<ContactConfig>,
    State(sink): State<Arc<dyn ContactSink>>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> ResponseResult<Markup> {
    let Form(changes) = body?;

    let mut form = ContactForm::default();
    form.apply_changes(changes);

    let outcome = form.submit(&*sink).await;

    Ok(contact_page(&form, Some(outcome.notice()), &config))
}

pub(crate) fn contact_page(
    form: &ContactForm,
    notice: Option<Notice>,
    config: &ContactConfig,
) -> Markup {
    base(
        PAGE_TITLE,
        html! {
          section class="w-full" {
            div class="max-w-7xl mx-auto text-center px-4 md:px-8 mt-10" {
              (heading())

              div class="flex flex-wrap justify-center gap-8" {
                @for (index, method) in CONTACT_METHODS.iter().enumerate() {
                  (MethodCard { index, method })
                }
              }

              div class="flex flex-col lg:flex-row gap-10 mt-20" {
                (offices_panel())
                (form_panel(form, notice, config.form_wired))
              }
            }
          }
        },
    )
}

fn heading() -> Markup {
    html! {
      h2 class="text-3xl md:text-4xl font-bold mb-5 font-raleway animate-enter-down" style={ "color: " (BRAND_COLOR) } {
        "Get in touch with us."
      }

      div class="w-24 h-1 bg-brand mx-auto mb-12 rounded-full animate-underline-pulse" {}
    }
}

struct MethodCard<'a> {
    index: usize,
    method: &'a ContactMethod,
}

impl Render for MethodCard<'_> {
    fn render(&self) -> Markup {
        let method = self.method;
        let delay_ms = self.index * CARD_STAGGER_MS;

        html! {
          div
            class="bg-white rounded-xl p-6 shadow-md flex flex-col items-center text-center w-[320px] animate-enter-up"
            style={ "animation-delay: " (delay_ms) "ms" }
          {
            div class="text-brand mb-4 text-4xl" {
              i class=(method.icon.classes()) {}
            }

            h3 class="text-lg font-bold mb-2 font-raleway" style={ "color: " (BRAND_COLOR) } {
              (method.title)
            }

            p class="text-gray-700 text-sm mb-6 font-poppins" {
              @for fragment in method.description {
                (fragment)
              }
            }

            (LinkButton::primary(html!((method.button.text)), method.button.link)
              .in_new_tab()
              .with_classes("mt-auto"))
          }
        }
    }
}

fn offices_panel() -> Markup {
    html! {
      div class="bg-white p-8 rounded-2xl shadow-md flex-1 animate-enter-from-left" {
        div class="flex items-center gap-3 mb-4 text-brand text-xl font-semibold" {
          i class="fa-solid fa-location-dot text-2xl" {}
          "Our Offices"
        }

        div class="text-slate-700 text-sm leading-relaxed space-y-5 text-left font-poppins" {
          @for office in OFFICE_ADDRESSES {
            div {
              strong { (office.label) ":" }
              p { (office.address) }
            }
          }
        }
      }
    }
}

fn form_panel(form: &ContactForm, notice: Option<Notice>, wired: bool) -> Markup {
    let fields = html! {
      @if let Some(notice) = notice {
        (notice_banner(notice))
      }

      div class="flex flex-col sm:flex-row gap-4" {
        (field_input(form, ContactField::Name, "flex-1"))
        (field_input(form, ContactField::Email, "flex-1"))
      }
      (field_input(form, ContactField::Subject, "w-full"))
      (field_input(form, ContactField::Message, "w-full"))
    };

    let button_classes = "bg-brand hover:bg-brand-dark text-white font-semibold px-8 py-3 rounded-full transition";

    html! {
      div class="bg-white p-8 rounded-2xl shadow-md flex-1 animate-enter-from-right" {
        h3 class="text-2xl font-bold mb-4 text-center font-raleway" style={ "color: " (BRAND_COLOR) } {
          "Get In Touch"
        }
        p class="text-center text-slate-600 mb-6 font-poppins" {
          "Have a specific request or inquiry? Send us a message."
        }

        // TODO: add a pending state once the button is wired by default, so
        // a second click can't post the same message twice.
        @if wired {
          form method="post" action="/contact" class="space-y-5" {
            (fields)
            button type="submit" class=(button_classes) { "Send Message" }
          }
        } @else {
          div class="space-y-5" {
            (fields)
            button type="button" class=(button_classes) { "Send Message" }
          }
        }
      }
    }
}

fn field_input(form: &ContactForm, field: ContactField, width: &str) -> Markup {
    let classes = format!("{width} {INPUT_CLASSES}");
    let value = form.get(field);

    match field.kind() {
        InputKind::TextArea { rows } => html! {
          textarea
            name=(field.name())
            rows=(rows)
            placeholder=(field.placeholder())
            required[field.required()]
            class=(classes)
          { (value) }
        },
        kind => {
            let input_type = if kind == InputKind::Email { "email" } else { "text" };

            html! {
              input
                type=(input_type)
                name=(field.name())
                placeholder=(field.placeholder())
                required[field.required()]
                value=(value)
                class=(classes);
            }
        }
    }
}

fn notice_banner(notice: Notice) -> Markup {
    let classes = match notice.kind {
        NoticeKind::Success => "rounded px-4 py-3 bg-green-50 text-green-800 border border-green-200",
        NoticeKind::Failure => "rounded px-4 py-3 bg-red-50 text-red-800 border border-red-200",
    };

    html! {
      div role="alert" class=(classes) data-notice=(notice_kind_name(notice.kind)) {
        (notice.message)
      }
    }
}

fn notice_kind_name(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "success",
        NoticeKind::Failure => "failure",
    }
}
