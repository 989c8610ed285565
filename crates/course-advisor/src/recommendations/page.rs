//! Server-rendered HTML for the profile form and the results page.

use std::fmt::Write as _;

use super::domain::{
    BudgetTier, EducationLevel, ExperienceLevel, Tier, TimeAvailability, INTEREST_OPTIONS,
};
use super::forms::ProfileForm;
use super::intake::IntakePolicy;
use super::ports::{RecommendationResult, ResultSink, SinkError};
use super::views::rationale;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;background:linear-gradient(135deg,#eff6ff,#e0e7ff);color:#1f2937}\
main{max-width:64rem;margin:0 auto;padding:2rem 1rem}\
header{text-align:center;margin-bottom:3rem}\
.panel{background:#fff;border-radius:.5rem;box-shadow:0 10px 15px rgba(0,0,0,.1);padding:2rem;margin-bottom:2rem}\
.narrow{max-width:42rem;margin-left:auto;margin-right:auto}\
label{display:block;font-weight:500;margin-bottom:.5rem}\
input[type=text],input[type=number],select,textarea{width:100%;padding:.5rem;border:1px solid #d1d5db;border-radius:.375rem;box-sizing:border-box}\
.field{margin-bottom:1.5rem}\
.interests{display:grid;grid-template-columns:1fr 1fr;gap:.75rem}\
.interests label{font-weight:400}\
.error{background:#fef2f2;color:#991b1b;padding:.75rem;border-radius:.375rem;margin-bottom:1.5rem}\
button,.button{display:inline-block;width:100%;background:#2563eb;color:#fff;border:0;padding:.75rem 1.5rem;border-radius:.375rem;font-weight:500;text-align:center;text-decoration:none}\
.cards{display:grid;grid-template-columns:repeat(auto-fit,minmax(18rem,1fr));gap:1.5rem}\
.card{background:#fff;border-radius:.5rem;box-shadow:0 10px 15px rgba(0,0,0,.1);overflow:hidden}\
.card.best{outline:2px solid #facc15}\
.badge{background:#facc15;color:#713f12;text-align:center;font-weight:600;padding:.25rem}\
.card-body{padding:1.5rem}\
.icon{font-size:2.25rem;margin-right:.75rem}\
.tag{background:#dbeafe;color:#1e40af;font-size:.75rem;padding:.25rem .5rem;border-radius:9999px;margin-right:.25rem}\
.summary{display:grid;grid-template-columns:repeat(4,1fr);gap:1rem;font-size:.875rem}\
.reset{background:#4b5563;width:auto}";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn document(brand: &str, body: &str) -> String {
    let brand = escape_html(brand);
    format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{brand}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n\
         <header>\n<h1>Bienvenido a {brand}</h1>\n\
         <p>Descubre el curso perfecto para tu futuro profesional</p>\n</header>\n\
         {body}</main>\n</body>\n</html>\n"
    )
}

fn select_options<T: Tier>(out: &mut String, selected: &str, hint: impl Fn(T) -> Option<&'static str>) {
    let current = T::parse(selected);
    for tier in T::ALL.iter().copied() {
        let label = tier.label();
        let marker = if Some(label) == current.map(Tier::label) {
            " selected"
        } else {
            ""
        };
        let text = match hint(tier) {
            Some(hint) => format!("{label} ({hint})"),
            None => label.to_string(),
        };
        out.push_str(&format!(
            "<option value=\"{}\"{marker}>{}</option>\n",
            escape_html(label),
            escape_html(&text)
        ));
    }
}

/// Profile form, optionally annotated with the reason the last submission was rejected.
pub fn render_form_page(
    brand: &str,
    form: &ProfileForm,
    policy: &IntakePolicy,
    error: Option<&str>,
) -> String {
    let (min_age, max_age) = policy.age_range();
    let mut body = String::from("<section class=\"panel narrow\">\n<h2>Cuéntanos sobre ti</h2>\n");

    if let Some(message) = error {
        body.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            escape_html(message)
        ));
    }

    body.push_str("<form method=\"post\" action=\"/recommendations\">\n");
    body.push_str(&format!(
        "<div class=\"field\"><label for=\"name\">Nombre completo</label>\
         <input type=\"text\" id=\"name\" name=\"name\" value=\"{}\" required></div>\n",
        escape_html(&form.name)
    ));
    body.push_str(&format!(
        "<div class=\"field\"><label for=\"age\">Edad</label>\
         <input type=\"number\" id=\"age\" name=\"age\" min=\"{min_age}\" max=\"{max_age}\" value=\"{}\" required></div>\n",
        escape_html(&form.age)
    ));

    body.push_str(
        "<div class=\"field\"><label for=\"education\">Nivel de educación</label>\
         <select id=\"education\" name=\"education\" required>\n\
         <option value=\"\">Selecciona tu nivel</option>\n",
    );
    select_options::<EducationLevel>(&mut body, &form.education, |_| None);
    body.push_str("</select></div>\n");

    body.push_str(
        "<div class=\"field\"><label for=\"experience\">Experiencia en tecnología</label>\
         <select id=\"experience\" name=\"experience\" required>\n",
    );
    select_options::<ExperienceLevel>(&mut body, &form.experience, |_| None);
    body.push_str("</select></div>\n");

    body.push_str(&format!(
        "<fieldset class=\"field\"><legend>Intereses (selecciona al menos {})</legend>\n\
         <div class=\"interests\">\n",
        policy.min_interests()
    ));
    for interest in INTEREST_OPTIONS {
        let checked = if form.is_checked(interest) { " checked" } else { "" };
        let value = escape_html(interest);
        body.push_str(&format!(
            "<label><input type=\"checkbox\" name=\"interests\" value=\"{value}\"{checked}> {value}</label>\n"
        ));
    }
    body.push_str("</div></fieldset>\n");

    body.push_str(&format!(
        "<div class=\"field\"><label for=\"goals\">¿Cuál es tu objetivo principal?</label>\
         <textarea id=\"goals\" name=\"goals\" rows=\"3\" required \
         placeholder=\"Ej: Encontrar trabajo en programación, crear mi propio negocio, aprender nuevas habilidades...\">{}</textarea></div>\n",
        escape_html(&form.goals)
    ));

    body.push_str(
        "<div class=\"field\"><label for=\"time_available\">Tiempo disponible para estudiar</label>\
         <select id=\"time_available\" name=\"time_available\" required>\n",
    );
    select_options::<TimeAvailability>(&mut body, &form.time_available, |tier| Some(tier.hint()));
    body.push_str("</select></div>\n");

    body.push_str(
        "<div class=\"field\"><label for=\"budget\">Presupuesto disponible</label>\
         <select id=\"budget\" name=\"budget\" required>\n",
    );
    select_options::<BudgetTier>(&mut body, &form.budget, |tier| Some(tier.hint()));
    body.push_str("</select></div>\n");

    body.push_str("<button type=\"submit\">Obtener Recomendaciones</button>\n</form>\n</section>\n");

    document(brand, &body)
}

/// Results page sink: greeting, profile summary, course cards, and rationale.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    pub brand: String,
}

impl ResultSink for HtmlPage {
    type Output = String;

    fn render(&self, result: &RecommendationResult) -> Result<Self::Output, SinkError> {
        let mut body = String::new();
        write_results(&mut body, result)?;
        Ok(document(&self.brand, &body))
    }
}

fn write_results(out: &mut String, result: &RecommendationResult) -> std::fmt::Result {
    let profile = &result.profile;

    writeln!(out, "<section class=\"panel\">")?;
    writeln!(out, "<h2>¡Hola {}!</h2>", escape_html(&profile.name))?;
    writeln!(
        out,
        "<p>Basándonos en tu perfil, hemos seleccionado los mejores cursos para ti</p>"
    )?;
    writeln!(out, "<div class=\"summary\">")?;
    for (label, value) in [
        ("Experiencia", profile.experience.label().to_string()),
        ("Intereses", profile.interests.join(", ")),
        ("Tiempo", profile.time_available.label().to_string()),
        ("Presupuesto", profile.budget.label().to_string()),
    ] {
        writeln!(
            out,
            "<div><strong>{label}</strong><div>{}</div></div>",
            escape_html(&value)
        )?;
    }
    writeln!(out, "</div>\n</section>")?;

    writeln!(out, "<section>\n<h3>Cursos Recomendados para Ti</h3>")?;
    writeln!(out, "<div class=\"cards\">")?;
    for (index, course) in result.recommendations.iter().enumerate() {
        let best = index == 0;
        writeln!(
            out,
            "<article class=\"card{}\" data-course-id=\"{}\">",
            if best { " best" } else { "" },
            escape_html(&course.id.0)
        )?;
        if best {
            writeln!(out, "<div class=\"badge\">⭐ MEJOR OPCIÓN</div>")?;
        }
        writeln!(out, "<div class=\"card-body\">")?;
        writeln!(
            out,
            "<div><span class=\"icon\">{}</span><h4>{}</h4><p>{}</p></div>",
            escape_html(&course.icon),
            escape_html(&course.title),
            escape_html(&course.category)
        )?;
        writeln!(out, "<p>{}</p>", escape_html(&course.description))?;
        writeln!(
            out,
            "<dl><dt>Duración:</dt><dd>{}</dd><dt>Nivel:</dt><dd>{}</dd><dt>Precio:</dt><dd>{}</dd></dl>",
            escape_html(&course.duration),
            escape_html(course.level.label()),
            escape_html(&course.price)
        )?;
        write!(out, "<p>")?;
        for tag in &course.tags {
            write!(out, "<span class=\"tag\">{}</span>", escape_html(tag))?;
        }
        writeln!(out, "</p>")?;
        writeln!(out, "</div>\n</article>")?;
    }
    writeln!(out, "</div>\n</section>")?;

    writeln!(
        out,
        "<section class=\"panel\">\n<h3>¿Por qué estos cursos son perfectos para ti?</h3>"
    )?;
    for entry in rationale(profile) {
        writeln!(
            out,
            "<div><h4>{}:</h4><p>{}</p></div>",
            escape_html(entry.heading),
            escape_html(&entry.detail)
        )?;
    }
    writeln!(out, "</section>")?;

    writeln!(
        out,
        "<p style=\"text-align:center\"><a class=\"button reset\" href=\"/\">Volver a Comenzar</a></p>"
    )
}
