//! HTML rendering for the survey form and its result

use std::fmt::Write as _;

use crate::domain::survey::{AGE_RANGE, EXERCISE_DAYS_RANGE, HEIGHT_RANGE, WEIGHT_RANGE};
use crate::domain::{AdviceKind, Answer, FeatureRecord, Gender, ObesityLevel, SurveyInput};
use crate::infrastructure::services::Prediction;

/// What to show below the form
pub enum Outcome<'a> {
    Predicted(&'a Prediction),
    Failed(&'a str),
}

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0 0 4em; color: #222; }
main { max-width: 1100px; margin: 0 auto; padding: 1.5em; }
.layout { display: flex; gap: 2em; align-items: flex-start; }
.content { flex: 1; }
aside { width: 260px; background: #f4f5f7; border-radius: 8px; padding: 1em; font-size: 0.9em; }
.columns { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5em; }
label { display: block; font-weight: 600; margin: 0.8em 0 0.3em; }
input[type=number], select { width: 100%; padding: 0.4em; }
input[type=range] { width: 100%; }
.radios label { display: inline; font-weight: normal; margin-right: 1em; }
.hint { color: #777; font-size: 0.8em; }
button { width: 100%; margin-top: 1.5em; padding: 0.8em; font-size: 1.1em; border: 0; border-radius: 6px; background: #ff4b4b; color: #fff; cursor: pointer; }
.result { padding: 15px; border-radius: 10px; text-align: center; margin-top: 1em; }
.result h3 { margin: 0; }
.notice { padding: 0.8em 1em; border-radius: 6px; margin-top: 1em; }
.notice.success { background: #e8f5e9; color: #1b5e20; }
.notice.info { background: #e3f2fd; color: #0d47a1; }
.notice.warning { background: #fff8e1; color: #8d6e00; }
.notice.error { background: #ffebee; color: #b71c1c; }
.balloons { position: fixed; inset: 0; pointer-events: none; overflow: hidden; }
.balloons span { position: absolute; bottom: -3em; font-size: 2.5em; animation: rise 4s ease-in forwards; }
@keyframes rise { to { transform: translateY(-120vh); opacity: 0; } }
.footer { position: fixed; left: 0; bottom: 0; width: 100%; color: gray; text-align: center; padding: 10px; font-size: 0.8em; background: #fff; }
"#;

const FOOTER: &str = "Note: this prediction uses a decision tree trained on a small sample \
     dataset. Consult a physician for an accurate diagnosis.";

/// Render the whole page for the given (possibly submitted) answers
pub fn render_page(input: &SurveyInput, outcome: Option<Outcome<'_>>) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Obesity Predictor</title>\n");
    let _ = write!(html, "<style>{}</style>\n</head>\n<body>\n<main>\n", STYLE);

    html.push_str("<h1>Obesity Risk Predictor</h1>\n");
    html.push_str(
        "<p>Fill in the form to assess your obesity risk with a machine learning model.</p>\n",
    );

    html.push_str("<div class=\"layout\">\n<div class=\"content\">\n");
    render_form(&mut html, input);

    match outcome {
        Some(Outcome::Predicted(prediction)) => render_prediction(&mut html, prediction.level),
        Some(Outcome::Failed(message)) => {
            let _ = writeln!(
                html,
                "<div class=\"notice error\">{}</div>",
                escape_html(message)
            );
        }
        None => {}
    }

    html.push_str("</div>\n");

    if let Ok(clamped) = input.clamped() {
        render_encoded_values(&mut html, &clamped, &clamped.to_features());
    }

    html.push_str("</div>\n</main>\n");
    let _ = writeln!(html, "<div class=\"footer\">{}</div>", FOOTER);
    html.push_str("</body>\n</html>\n");

    html
}

fn render_form(html: &mut String, input: &SurveyInput) {
    html.push_str("<form method=\"post\" action=\"/\">\n<div class=\"columns\">\n");

    // Column 1: age, gender
    html.push_str("<div>\n");
    let _ = writeln!(
        html,
        "<label for=\"age\">Age: <output id=\"age-value\">{age}</output></label>\
         <input type=\"range\" id=\"age\" name=\"age\" min=\"{min}\" max=\"{max}\" value=\"{age}\" \
         oninput=\"document.getElementById('age-value').textContent = this.value\">\
         <div class=\"hint\">Recommended range: {min} to {max} years</div>",
        age = input.age,
        min = AGE_RANGE.start(),
        max = AGE_RANGE.end(),
    );
    html.push_str("<label for=\"gender\">Gender</label><select id=\"gender\" name=\"gender\">");
    for (gender, text) in [(Gender::Male, "Male"), (Gender::Female, "Female")] {
        let _ = write!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            gender,
            selected(input.gender == gender),
            text
        );
    }
    html.push_str(
        "</select><div class=\"hint\">Recorded only; the current model does not use gender.</div>\n",
    );
    html.push_str("</div>\n");

    // Column 2: weight, height
    html.push_str("<div>\n");
    let _ = writeln!(
        html,
        "<label for=\"weight\">Weight (kg)</label>\
         <input type=\"number\" id=\"weight\" name=\"weight\" min=\"{:.1}\" max=\"{:.1}\" step=\"0.1\" value=\"{:.1}\">",
        WEIGHT_RANGE.start(),
        WEIGHT_RANGE.end(),
        input.weight
    );
    let _ = writeln!(
        html,
        "<label for=\"height\">Height (m)</label>\
         <input type=\"number\" id=\"height\" name=\"height\" min=\"{:.2}\" max=\"{:.2}\" step=\"0.01\" value=\"{:.2}\">",
        HEIGHT_RANGE.start(),
        HEIGHT_RANGE.end(),
        input.height
    );
    html.push_str("</div>\n");

    // Column 3: yes/no radios
    html.push_str("<div>\n");
    render_radio(
        html,
        "family_history",
        "Family history of overweight (FHWO)?",
        input.family_history,
        ("No", "Yes"),
    );
    render_radio(
        html,
        "high_calorie_food",
        "Frequently eat high-calorie food (FAVC)?",
        input.high_calorie_food,
        ("Rarely", "Often"),
    );
    html.push_str("</div>\n</div>\n");

    let _ = writeln!(
        html,
        "<label for=\"exercise_days\">Exercise frequency (FAF), days per week: \
         <output id=\"exercise-value\">{days}</output></label>\
         <input type=\"range\" id=\"exercise_days\" name=\"exercise_days\" min=\"{min}\" max=\"{max}\" value=\"{days}\" \
         oninput=\"document.getElementById('exercise-value').textContent = this.value\">\
         <div class=\"hint\">0 = never exercise, 7 = exercise every day</div>",
        days = input.exercise_days,
        min = EXERCISE_DAYS_RANGE.start(),
        max = EXERCISE_DAYS_RANGE.end(),
    );

    html.push_str("<hr>\n<button type=\"submit\">Predict risk</button>\n</form>\n");
}

fn render_radio(
    html: &mut String,
    name: &str,
    question: &str,
    value: Answer,
    (no_text, yes_text): (&str, &str),
) {
    let _ = write!(html, "<label>{}</label><div class=\"radios\">", question);
    for (answer, id, text) in [(Answer::No, "no", no_text), (Answer::Yes, "yes", yes_text)] {
        let _ = write!(
            html,
            "<label><input type=\"radio\" name=\"{name}\" value=\"{id}\"{checked}> {text}</label>",
            checked = checked(value == answer),
        );
    }
    html.push_str("</div>\n");
}

fn render_prediction(html: &mut String, level: ObesityLevel) {
    let color = level.color_hex();

    html.push_str("<h2>Obesity risk prediction</h2>\n");
    let _ = writeln!(
        html,
        "<div class=\"result\" data-level=\"{code}\" style=\"background-color: {color}1A; border: 2px solid {color};\">\
         <h3 style=\"color: {color};\">Predicted level: {text}</h3></div>",
        code = level.code(),
        text = level.display_text(),
    );

    let advice = level.advice();
    let class = match advice.kind {
        AdviceKind::Success => "success",
        AdviceKind::Info => "info",
        AdviceKind::Warning => "warning",
    };
    let _ = writeln!(
        html,
        "<hr>\n<div class=\"notice {}\">Initial advice: {}</div>",
        class, advice.message
    );

    if level == ObesityLevel::Normal {
        render_balloons(html);
    }
}

fn render_balloons(html: &mut String) {
    html.push_str("<div class=\"balloons\" aria-hidden=\"true\">");
    for (i, left) in [8, 22, 37, 51, 66, 80, 92].iter().enumerate() {
        let _ = write!(
            html,
            "<span style=\"left: {}%; animation-delay: {:.1}s;\">&#127880;</span>",
            left,
            i as f64 * 0.3
        );
    }
    html.push_str("</div>\n");
}

fn render_encoded_values(html: &mut String, input: &SurveyInput, features: &FeatureRecord) {
    html.push_str("<aside>\n<h3>Values used for prediction (encoded)</h3>\n");
    let _ = writeln!(
        html,
        "<p>Age: {}, Gender: {}, Weight: {:.1}, Height: {:.2}</p>",
        input.age, input.gender, features.weight, features.height
    );
    let _ = writeln!(html, "<p>FHWO (family history): {}</p>", features.fhwo);
    let _ = writeln!(html, "<p>FAVC (high-calorie food): {}</p>", features.favc);
    let _ = writeln!(html, "<p>FAF (exercise, 0-3 scale): {}</p>", features.faf);
    html.push_str("</aside>\n");
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected { " selected" } else { "" }
}

fn checked(is_checked: bool) -> &'static str {
    if is_checked { " checked" } else { "" }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
