//! Quiz round handlers.
//!
//! Every answer follows the post/redirect/get pattern: the POST mutates the
//! session and the deck, the following GET renders feedback. The feedback
//! slot in the session acts as the answered flag, so reloading the form
//! cannot record a round twice.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::session::{self, Feedback};
use crate::state::AppState;
use crate::views;
use drill_core::{apply_answer, build_question, evaluate, select_next};

#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    pub selected: String,
}

/// GET / — the current question, or feedback for the round just answered.
pub async fn show(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (sid, issue_cookie) = match session::session_id(&headers) {
        Some(sid) => (sid, false),
        None => (Uuid::new_v4(), true),
    };

    let mut sessions = state.sessions();
    let session = sessions.entry(sid).or_default();

    let body = if let Some(feedback) = &session.feedback {
        views::feedback_page(feedback, session)
    } else {
        if session.question.is_none() {
            let deck = state.deck();
            let now = Utc::now().timestamp();
            let mut rng = rand::thread_rng();
            session.question =
                select_next(&deck, now, &mut rng).map(|target| build_question(&deck, target, &mut rng));
        }
        match &session.question {
            Some(question) => views::question_page(question, session),
            None => views::empty_page(),
        }
    };

    let mut response = Html(body).into_response();
    if issue_cookie {
        response
            .headers_mut()
            .insert(header::SET_COOKIE, session::session_cookie(sid));
    }
    response
}

/// POST /answer — record the selected option for the current question.
pub async fn answer(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AnswerForm>,
) -> Response {
    let Some(sid) = session::session_id(&headers) else {
        return Redirect::to("/").into_response();
    };

    let mut sessions = state.sessions();
    let Some(session) = sessions.get_mut(&sid) else {
        return Redirect::to("/").into_response();
    };
    if session.feedback.is_some() {
        // Already answered; a form reload changes nothing.
        return Redirect::to("/").into_response();
    }
    let Some(question) = session.question.take() else {
        return Redirect::to("/").into_response();
    };

    let correct = evaluate(&form.selected, &question.answer);
    let now = Utc::now().timestamp();

    let save_failed = {
        let mut deck = state.deck();
        apply_answer(&mut deck, question.card_id, correct, now);
        match state.store().save(&deck) {
            Ok(()) => false,
            Err(err) => {
                tracing::error!("could not save the deck: {err}");
                true
            }
        }
    };

    if correct {
        session.score += 10;
        session.streak += 1;
    } else {
        session.streak = 0;
    }
    session.feedback = Some(Feedback {
        correct,
        term: question.prompt,
        answer: question.answer,
        sentence: question.sentence,
        save_failed,
    });

    Redirect::to("/").into_response()
}

/// POST /next — drop the feedback and start a fresh round.
pub async fn next(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    if let Some(sid) = session::session_id(&headers) {
        if let Some(session) = state.sessions().get_mut(&sid) {
            session.feedback = None;
            session.question = None;
        }
    }
    Redirect::to("/")
}
