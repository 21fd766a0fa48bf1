//! HTML rendering for the landing page.

use crate::{
    content::{Project, SiteContent, WorkItem, WorkStatus},
    model::WeatherSnapshot,
    widget::WeatherWidget,
};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; color: #171717; margin: 0; }
main { max-width: 36rem; margin: 5rem auto; padding: 2.5rem 1rem; }
h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 2rem; }
.muted { color: #737373; margin-right: .5rem; }
.bio { font-size: 1.125rem; color: #525252; }
.link { display: flex; gap: .5rem; padding: .5rem; border: 1px solid #d4d4d4; border-radius: .5rem; color: #171717; text-decoration: none; margin: 1rem 0; }
.card { margin: 1.5rem 0; padding: 1rem; background: #fafafa; border: 1px solid #f5f5f5; border-radius: .5rem; }
.card-title { font-weight: 500; margin-bottom: .5rem; }
.updated { font-size: .75rem; color: #a3a3a3; margin-top: .25rem; }
.error { margin: 1.5rem 0; padding: 1rem; background: #fef2f2; border: 1px solid #fee2e2; border-radius: .5rem; color: #dc2626; }
.work-item { padding: .75rem; margin-top: 1rem; background: #f5f5f5; border: 1px solid #e5e5e5; border-radius: .375rem; }
.work-desc { font-size: .875rem; color: #525252; margin-top: .25rem; }
.status { font-size: .75rem; color: #737373; }
.bar { display: inline-block; width: 6rem; height: .375rem; background: #e5e5e5; border-radius: 9999px; overflow: hidden; vertical-align: middle; }
.bar > span { display: block; height: 100%; background: #3b82f6; }
.badge { background: #f3f4f6; color: #4b5563; padding: .25rem .75rem; border-radius: 9999px; font-size: .875rem; margin-left: .75rem; }
.project { margin-bottom: 2rem; }
.project h4 { font-size: 1.125rem; font-weight: 400; margin: 0 0 .25rem; }
.project p { color: #6b7280; margin: 0; }
"#;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the complete document. Every section except the weather one is
/// independent of `widget`.
pub fn render_page(content: &SiteContent, location_name: &str, widget: &WeatherWidget) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(content.name)));
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n<main>\n"));

    html.push_str(&render_intro(content));
    html.push_str(&render_weather(location_name, widget));
    html.push_str(&render_current_work(&content.current_work));
    html.push_str(&render_projects(&content.projects));

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_intro(content: &SiteContent) -> String {
    format!(
        "<div>\n<h1>Hi. I'm {name}. <span class=\"muted\">{role} from</span><span>{city}</span></h1>\n\
         <p class=\"bio\">{bio}</p>\n</div>\n\
         <a class=\"link\" href=\"{href}\">Email</a>\n",
        name = escape(content.name),
        role = escape(content.role),
        city = escape(content.city),
        bio = escape(content.bio),
        href = escape(content.email_href),
    )
}

pub fn render_weather(location_name: &str, widget: &WeatherWidget) -> String {
    let body = match widget {
        WeatherWidget::Loaded(snapshot) => render_snapshot(location_name, snapshot),
        WeatherWidget::Unavailable => format!(
            "<div class=\"error\">{}</div>\n",
            escape(widget.fallback_message().unwrap_or_default())
        ),
    };
    format!("<section id=\"weather\">\n{body}</section>\n")
}

fn render_snapshot(location_name: &str, snapshot: &WeatherSnapshot) -> String {
    format!(
        "<div class=\"card\">\n<div class=\"card-title\">{location} Weather</div>\n\
         <div class=\"temperature\">{temp}</div>\n\
         <div class=\"wind\">{wind}</div>\n\
         <div class=\"updated\">Last updated: {updated}</div>\n</div>\n",
        location = escape(location_name),
        temp = escape(&snapshot.temperature_display()),
        wind = escape(&snapshot.wind_speed_display()),
        updated = escape(&snapshot.observed_time_display()),
    )
}

fn render_current_work(items: &[WorkItem]) -> String {
    let mut html = String::from(
        "<div class=\"card\">\n<div class=\"card-title\">Currently Working On</div>\n",
    );

    for item in items {
        let status = match item.status {
            WorkStatus::Active => String::new(),
            WorkStatus::Progress(pct) => format!(
                "<span class=\"bar\"><span style=\"width: {}%\"></span></span> ",
                pct.min(100)
            ),
        };
        html.push_str(&format!(
            "<div class=\"work-item\">\n<div class=\"card-title\">{name}</div>\n\
             <div class=\"work-desc\">{desc}</div>\n\
             <div class=\"status\">{status}{label}</div>\n</div>\n",
            name = escape(item.name),
            desc = escape(item.description),
            label = escape(&item.status.label()),
        ));
    }

    html.push_str("</div>\n");
    html
}

fn render_projects(projects: &[Project]) -> String {
    let mut html = String::from("<h3>Projects</h3>\n<div class=\"projects\">\n");

    for project in projects {
        let badge = project
            .badge
            .map(|b| format!("<span class=\"badge\">{}</span>", escape(b)))
            .unwrap_or_default();
        html.push_str(&format!(
            "<div class=\"project\">\n<h4>{name}{badge}</h4>\n<p>{desc}</p>\n</div>\n",
            name = escape(project.name),
            desc = escape(project.description),
        ));
    }

    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> WeatherWidget {
        WeatherWidget::Loaded(WeatherSnapshot {
            temperature_value: 18.4,
            temperature_unit: "°C".into(),
            wind_speed_value: 14.2,
            wind_speed_unit: "km/h".into(),
            observed_at: "2024-05-01T12:15".into(),
        })
    }

    fn without_weather(html: &str) -> String {
        let start = html.find("<section id=\"weather\">").expect("weather section");
        let end = html[start..].find("</section>").expect("section end") + start;
        format!("{}{}", &html[..start], &html[end..])
    }

    #[test]
    fn loaded_widget_shows_conditions() {
        let html = render_page(&SiteContent::default(), "Amsterdam", &loaded());

        assert!(html.contains("Amsterdam Weather"));
        assert!(html.contains("18.4°C"));
        assert!(html.contains("14.2km/h"));
        assert!(html.contains("Last updated: 12:15:00"));
        assert!(!html.contains("Could not load weather data"));
    }

    #[test]
    fn failed_widget_shows_fallback_notice() {
        let html = render_page(&SiteContent::default(), "Amsterdam", &WeatherWidget::Unavailable);

        assert!(html.contains("Could not load weather data. Please try again later."));
        assert!(!html.contains("Amsterdam Weather"));
    }

    #[test]
    fn static_sections_do_not_depend_on_weather() {
        let content = SiteContent::default();
        let ok = render_page(&content, "Amsterdam", &loaded());
        let failed = render_page(&content, "Amsterdam", &WeatherWidget::Unavailable);

        assert_ne!(ok, failed);
        assert_eq!(without_weather(&ok), without_weather(&failed));
    }

    #[test]
    fn page_lists_bio_work_and_projects() {
        let html = render_page(&SiteContent::default(), "Amsterdam", &loaded());

        assert!(html.contains("Hi. I'm Lucas Jansen."));
        assert!(html.contains("Let&#39;s eat"));
        assert!(html.contains("Currently Working On"));
        assert!(html.contains("Active project"));
        assert!(html.contains("25% complete"));
        assert!(html.contains("<span class=\"badge\">Booking now</span>"));
        assert!(html.contains("Design &amp; Development Agency"));
        assert!(html.contains("Moneynow"));
        assert!(html.contains("href=\"/about\""));
    }

    #[test]
    fn upstream_units_are_escaped() {
        let widget = WeatherWidget::Loaded(WeatherSnapshot {
            temperature_value: 1.0,
            temperature_unit: "<script>".into(),
            wind_speed_value: 2.0,
            wind_speed_unit: "m/s".into(),
            observed_at: "2024-05-01T00:00".into(),
        });

        let html = render_weather("Amsterdam", &widget);
        assert!(html.contains("1&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
