use super::titled;
use crate::content::model::ContactInfo;
use crate::render::components::{Button, Card, Size, Width, container, grid, hero, section};
use crate::render::{Context, Page, PageMeta};
use crate::utils::html::{escape, escape_attr};

const FIELDS: [(&str, &str, &str); 3] = [
    ("name", "text", "Name"),
    ("email", "email", "Email"),
    ("company", "text", "Company"),
];

pub fn render(ctx: &Context) -> Page {
    let contact = &ctx.store.company().contact;
    let site = ctx.site();

    let mut body = hero(&format!(
        "<h1>Contact {}</h1><p class=\"lead\">Tell us about your trading operation and we will show you what better analytics can do.</p>",
        escape(site)
    ));

    let inner = grid(2, [form(contact), details(contact)]);
    body.push_str(&section("", &container(Width::Xl, &inner)));

    Page {
        meta: PageMeta::new(
            titled("Contact Us", site),
            format!("Get in touch with {site} for energy analytics and trading intelligence."),
        ),
        body,
    }
}

/// Static form; submission goes to the mail client when an address is set.
fn form(contact: &ContactInfo) -> String {
    let action = if contact.email.is_empty() {
        String::new()
    } else {
        format!(
            r#" action="mailto:{}" method="post" enctype="text/plain""#,
            escape_attr(&contact.email)
        )
    };

    let mut fields: String = FIELDS
        .iter()
        .map(|(name, kind, label)| {
            format!(
                r#"<label for="{name}">{label}</label><input id="{name}" name="{name}" type="{kind}"{}>"#,
                if *name == "company" { "" } else { " required" }
            )
        })
        .collect();
    fields.push_str(
        r#"<label for="message">Message</label><textarea id="message" name="message" rows="6" required></textarea>"#,
    );

    Card::plain(Size::Lg).render(&format!(
        r#"<h2>Send Us a Message</h2><form class="contact-form"{action}>{fields}{}</form>"#,
        Button::new("Send Message").submit().render()
    ))
}

fn details(contact: &ContactInfo) -> String {
    let address = &contact.headquarters;
    let street = [address.address.clone(), address.locality(), address.country.clone()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(|s| escape(&s).into_owned())
        .collect::<Vec<_>>()
        .join("<br>");

    let hours = &contact.business_hours;
    let hours = [
        ("Monday - Friday", &hours.monday_friday),
        ("Saturday", &hours.saturday),
        ("Sunday", &hours.sunday),
    ]
    .into_iter()
    .filter(|(_, v)| !v.is_empty())
    .map(|(day, v)| format!("{day}: {}", escape(v)))
    .collect::<Vec<_>>()
    .join("<br>");

    let mailto = |email: &str| {
        format!(
            r#"<a href="mailto:{}">{}</a>"#,
            escape_attr(email),
            escape(email)
        )
    };

    let entries = [
        ("Address", street),
        (
            "Phone",
            if contact.phone.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<a href="tel:{}">{}</a>"#,
                    escape_attr(&contact.phone),
                    escape(&contact.phone)
                )
            },
        ),
        ("Email", non_empty(&contact.email, mailto)),
        ("Sales", non_empty(&contact.sales_email, mailto)),
        ("Support", non_empty(&contact.support_email, mailto)),
        ("Business Hours", hours),
        (
            "Emergency Support",
            escape(&contact.emergency_support).into_owned(),
        ),
    ];

    let list: String = entries
        .iter()
        .filter(|(_, html)| !html.is_empty())
        .map(|(label, html)| format!("<dt>{label}</dt><dd>{html}</dd>"))
        .collect();

    Card::plain(Size::Lg).render(&format!(
        r#"<h2>Contact Information</h2><dl class="contact-details">{list}</dl>"#
    ))
}

fn non_empty(value: &str, render: impl Fn(&str) -> String) -> String {
    if value.is_empty() {
        String::new()
    } else {
        render(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::render::tests::render;
    use crate::site::Route;

    #[test]
    fn test_contact_form_and_details() {
        let html = render(Route::Contact).html;
        assert!(html.contains("<h1>Contact TradeNexus</h1>"));
        assert!(html.contains(r#"action="mailto:info@tradenexus.example""#));
        assert!(html.contains(r#"<button type="submit" class="btn btn-primary btn-md">Send Message</button>"#));
        assert!(html.contains("<dt>Email</dt>"));
        assert!(!html.contains("<dt>Phone</dt>"));
    }
}
