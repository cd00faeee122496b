use super::dispatcher::SubmitOutcome;

pub enum Msg {
    Submit(web_sys::SubmitEvent),
    Resolved(SubmitOutcome),
    DismissSuccess,
    DismissError,
}
