//! Server-rendered views: one stylesheet, a handful of page builders, no
//! client-side framework.

use crate::session::{Feedback, Session};
use drill_core::{DeckStats, Question};

const STYLE: &str = r#"
:root { color-scheme: dark; }
body {
    margin: 0;
    min-height: 100vh;
    background: linear-gradient(135deg, #0f172a 0%, #1e1b4b 100%);
    color: #e2e8f0;
    font-family: system-ui, sans-serif;
}
main { max-width: 560px; margin: 0 auto; padding: 24px 16px; }
.scorebar {
    display: flex;
    justify-content: space-between;
    padding: 10px 16px;
    background: rgba(0, 0, 0, 0.25);
    border-radius: 10px;
    margin-bottom: 20px;
}
.card {
    background: rgba(255, 255, 255, 0.05);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 20px;
    padding: 30px;
    text-align: center;
    margin-bottom: 20px;
}
.card.correct { background: rgba(34, 197, 94, 0.2); border-color: #22c55e; }
.card.wrong { background: rgba(239, 68, 68, 0.2); border-color: #ef4444; }
.term {
    font-size: 3em;
    font-weight: 800;
    background: linear-gradient(315deg, #42d392 25%, #647eff);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    margin: 10px 0;
}
.category {
    background: rgba(255, 255, 255, 0.1);
    padding: 5px 15px;
    border-radius: 15px;
    font-size: 0.8em;
    letter-spacing: 1px;
    text-transform: uppercase;
    color: #94a3b8;
}
.options { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
button {
    width: 100%;
    border: none;
    border-radius: 12px;
    padding: 18px 10px;
    font-size: 18px;
    font-weight: 600;
    background: #f1f5f9;
    color: #1e293b;
    cursor: pointer;
}
button:hover { background: #e2e8f0; }
.sentence { font-style: italic; opacity: 0.9; }
.verdict.correct { color: #4ade80; }
.verdict.wrong { color: #f87171; }
.warning {
    background: rgba(234, 179, 8, 0.2);
    border: 1px solid #eab308;
    border-radius: 10px;
    padding: 10px;
    margin-bottom: 20px;
}
.progress { background: rgba(255, 255, 255, 0.1); border-radius: 8px; overflow: hidden; }
.progress > div { background: #42d392; height: 10px; }
table { width: 100%; border-collapse: collapse; }
td { padding: 6px 2px; }
td:last-child { text-align: right; }
a { color: #94a3b8; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<main>\n{body}\n</main>\n</body>\n</html>"
    )
}

/// Minimal HTML escaping for card text and user input.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn score_bar(session: &Session) -> String {
    format!(
        "<div class=\"scorebar\"><div>&#127942; Score: <b>{}</b></div>\
         <div>&#128293; Streak: <b>{}</b></div></div>",
        session.score, session.streak
    )
}

pub fn question_page(question: &Question, session: &Session) -> String {
    let options: String = question
        .options
        .iter()
        .map(|option| {
            let escaped = escape(option);
            format!(
                "<form method=\"post\" action=\"/answer\">\
                 <button name=\"selected\" value=\"{escaped}\">{escaped}</button></form>"
            )
        })
        .collect();

    let body = format!(
        "{score}\
         <div class=\"card\">\
         <span class=\"category\">{category}</span>\
         <div class=\"term\">{term}</div>\
         </div>\
         <div class=\"options\">{options}</div>\
         <p><a href=\"/stats\">Statistics</a></p>",
        score = score_bar(session),
        category = escape(&question.category),
        term = escape(&question.prompt),
    );
    page("Worddrill", &body)
}

pub fn feedback_page(feedback: &Feedback, session: &Session) -> String {
    let (class, verdict, detail) = if feedback.correct {
        (
            "correct",
            "Correct!",
            format!("{} = {}", escape(&feedback.term), escape(&feedback.answer)),
        )
    } else {
        (
            "wrong",
            "Wrong",
            format!("The answer is: {}", escape(&feedback.answer)),
        )
    };

    let warning = if feedback.save_failed {
        "<div class=\"warning\">Your progress could not be written to disk; \
         it will be retried after the next answer.</div>"
    } else {
        ""
    };

    let body = format!(
        "{score}{warning}\
         <div class=\"card {class}\">\
         <h2 class=\"verdict {class}\">{verdict}</h2>\
         <p class=\"sentence\">\"{sentence}\"</p>\
         <p><b>{detail}</b></p>\
         </div>\
         <form method=\"post\" action=\"/next\"><button>Next question &#10145;</button></form>\
         <p><a href=\"/stats\">Statistics</a></p>",
        score = score_bar(session),
        sentence = escape(&feedback.sentence),
    );
    page("Worddrill", &body)
}

pub fn empty_page() -> String {
    let body = "<div class=\"card\"><h2>No cards loaded</h2>\
         <p>The card file is empty. Add words with the terminal app or the \
         import tool, then reload.</p>\
         <form method=\"post\" action=\"/reload\"><button>Reload cards</button></form></div>";
    page("Worddrill", body)
}

pub fn stats_page(stats: &DeckStats) -> String {
    let percent = stats.learned_ratio() * 100.0;
    let body = format!(
        "<div class=\"card\"><h2>Statistics</h2>\
         <table>\
         <tr><td>Total words</td><td>{total}</td></tr>\
         <tr><td>Learned</td><td>{learned}</td></tr>\
         <tr><td>In progress</td><td>{in_progress}</td></tr>\
         <tr><td>New</td><td>{fresh}</td></tr>\
         </table>\
         <div class=\"progress\"><div style=\"width:{percent:.1}%\"></div></div>\
         <p>{percent:.1}% learned</p>\
         </div>\
         <p><a href=\"/\">Back to the quiz</a></p>",
        total = stats.total,
        learned = stats.learned,
        in_progress = stats.in_progress,
        fresh = stats.fresh,
    );
    page("Worddrill — statistics", &body)
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "<div class=\"card wrong\"><h2>Something went wrong</h2><p>{}</p></div>\
         <p><a href=\"/\">Back to the quiz</a></p>",
        escape(message)
    );
    page("Worddrill — error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_text_is_escaped() {
        let question = Question {
            card_id: 1,
            prompt: "<script>".to_string(),
            category: "General".to_string(),
            sentence: String::new(),
            answer: "a & b".to_string(),
            options: vec!["a & b".to_string()],
        };
        let html = question_page(&question, &Session::default());
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn feedback_page_shows_the_sentence_and_warning() {
        let feedback = Feedback {
            correct: false,
            term: "run".to_string(),
            answer: "koşmak".to_string(),
            sentence: "I run fast.".to_string(),
            save_failed: true,
        };
        let html = feedback_page(&feedback, &Session::default());
        assert!(html.contains("I run fast."));
        assert!(html.contains("koşmak"));
        assert!(html.contains("could not be written"));
    }
}
